//! Reading version strings from optional files.

use std::fs;
use std::path::Path;

/// Reported when `tls-shim-version.txt` is missing or empty.
pub const DEFAULT_SHIM_VERSION: &str = "no version set in tls-shim-version.txt";

/// Reported when `app-version.txt` is missing.
pub const DEFAULT_APP_VERSION: &str = "";

/// Where a version string came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Content read from the file, line terminators stripped.
    Loaded(String),
    /// The file could not be used; the default stands in.
    Defaulted(String),
}

impl VersionSource {
    /// Read `path`, substituting `default` when the file cannot be read.
    ///
    /// Trailing `\n` and `\r` are stripped from the content so a file written
    /// by `echo` reports the bare version. Other whitespace is kept.
    pub fn read(path: &Path, default: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => Self::Loaded(strip_line_ending(&content).to_string()),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "Version file unavailable, using default");
                Self::Defaulted(default.to_string())
            }
        }
    }

    /// Like [`VersionSource::read`], but empty content also yields the default.
    pub fn read_non_empty(path: &Path, default: &str) -> Self {
        match Self::read(path, default) {
            Self::Loaded(content) if content.is_empty() => {
                tracing::debug!(path = %path.display(), "Version file empty, using default");
                Self::Defaulted(default.to_string())
            }
            other => other,
        }
    }

    /// The resolved version string.
    pub fn value(&self) -> &str {
        match self {
            Self::Loaded(v) | Self::Defaulted(v) => v,
        }
    }

    pub fn into_value(self) -> String {
        match self {
            Self::Loaded(v) | Self::Defaulted(v) => v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}

fn strip_line_ending(content: &str) -> &str {
    content.trim_end_matches(['\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_is_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let source = VersionSource::read(&dir.path().join("absent.txt"), "fallback");
        assert_eq!(source, VersionSource::Defaulted("fallback".into()));
    }

    #[test]
    fn test_trailing_newline_is_stripped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.txt");
        fs::write(&path, "1.2.3\r\n").unwrap();

        let source = VersionSource::read(&path, "fallback");
        assert_eq!(source, VersionSource::Loaded("1.2.3".into()));
        assert!(!source.is_defaulted());
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.txt");
        fs::write(&path, " build 7 \n").unwrap();

        assert_eq!(VersionSource::read(&path, "").value(), " build 7 ");
    }

    #[test]
    fn test_empty_file_read_non_empty_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("v.txt");
        fs::write(&path, "\n").unwrap();

        assert_eq!(
            VersionSource::read_non_empty(&path, DEFAULT_SHIM_VERSION),
            VersionSource::Defaulted(DEFAULT_SHIM_VERSION.into())
        );
        // Plain read keeps the empty value.
        assert_eq!(VersionSource::read(&path, "x"), VersionSource::Loaded(String::new()));
    }
}

//! The `/version` document.

use serde::{Deserialize, Serialize};

use crate::config::VersionConfig;
use crate::version::source::{VersionSource, DEFAULT_APP_VERSION, DEFAULT_SHIM_VERSION};

/// Error raised while building the version report.
#[derive(Debug, thiserror::Error)]
pub enum VersionError {
    #[error("could not render version payload: {0}")]
    Render(#[from] serde_json::Error),
}

/// Shim and application versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub tls_shim_version: String,
    pub app_version: String,
}

impl VersionInfo {
    /// Read both version files, falling back to defaults.
    pub fn load(config: &VersionConfig) -> Self {
        let shim = VersionSource::read_non_empty(&config.shim_version_path, DEFAULT_SHIM_VERSION);
        let app = VersionSource::read(&config.app_version_path, DEFAULT_APP_VERSION);

        tracing::info!(
            tls_shim_version = %shim.value(),
            shim_defaulted = shim.is_defaulted(),
            app_version = %app.value(),
            app_defaulted = app.is_defaulted(),
            "Version loaded"
        );

        Self {
            tls_shim_version: shim.into_value(),
            app_version: app.into_value(),
        }
    }
}

/// Pre-rendered JSON body served on `/version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionReport {
    info: VersionInfo,
    body: String,
}

impl VersionReport {
    /// Render `info` once.
    pub fn render(info: VersionInfo) -> Result<Self, VersionError> {
        let body = serde_json::to_string(&info)?;
        Ok(Self { info, body })
    }

    /// Load the files named by `config` and render the result.
    pub fn load(config: &VersionConfig) -> Result<Self, VersionError> {
        Self::render(VersionInfo::load(config))
    }

    pub fn info(&self) -> &VersionInfo {
        &self.info
    }

    /// The JSON body, byte-for-byte as served.
    pub fn body(&self) -> &str {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn config_in(dir: &std::path::Path) -> VersionConfig {
        VersionConfig {
            shim_version_path: dir.join("tls-shim-version.txt"),
            app_version_path: dir.join("app-version.txt"),
        }
    }

    #[test]
    fn test_defaults_when_files_absent() {
        let dir = tempfile::tempdir().unwrap();
        let report = VersionReport::load(&config_in(dir.path())).unwrap();
        assert_eq!(
            report.body(),
            r#"{"tlsShimVersion":"no version set in tls-shim-version.txt","appVersion":""}"#
        );
    }

    #[test]
    fn test_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("tls-shim-version.txt"), "0.4.1\n").unwrap();
        fs::write(dir.path().join("app-version.txt"), "2024.06.01").unwrap();

        let report = VersionReport::load(&config_in(dir.path())).unwrap();
        assert_eq!(report.info().tls_shim_version, "0.4.1");
        assert_eq!(report.info().app_version, "2024.06.01");
        assert_eq!(
            report.body(),
            r#"{"tlsShimVersion":"0.4.1","appVersion":"2024.06.01"}"#
        );
    }

    #[test]
    fn test_body_escapes_content() {
        let info = VersionInfo {
            tls_shim_version: "say \"hi\"".into(),
            app_version: String::new(),
        };
        let report = VersionReport::render(info.clone()).unwrap();
        let parsed: VersionInfo = serde_json::from_str(report.body()).unwrap();
        assert_eq!(parsed, info);
    }
}

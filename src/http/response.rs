//! Terminal responses written by the shim itself.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::version::VersionReport;

/// `200 OK` with the pre-rendered version document.
pub fn version(report: &VersionReport) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        report.body().to_owned(),
    )
        .into_response()
}

/// `403 Forbidden` with an empty body.
pub fn unauthorized() -> Response {
    StatusCode::FORBIDDEN.into_response()
}

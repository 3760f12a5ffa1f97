//! Translation of HTTP failures into domain errors.

use reqwest::StatusCode;

use charcat_core::error::{AppError, ErrorKind};

use crate::source::Resource;

/// Map a non-success status code to an error.
pub fn status_error(status: StatusCode, resource: Resource) -> AppError {
    match status {
        StatusCode::NOT_FOUND => AppError::not_found(resource.not_found_message()),
        StatusCode::INTERNAL_SERVER_ERROR => AppError::server(resource.server_message()),
        _ => AppError::fetch(resource.failed_message()),
    }
}

/// Map a reqwest error raised while sending or reading a response.
pub fn transport_error(err: reqwest::Error, resource: Resource) -> AppError {
    if let Some(status) = err.status() {
        return status_error(status, resource);
    }
    let kind = if err.is_connect() || err.is_timeout() || err.is_request() {
        ErrorKind::Network
    } else {
        ErrorKind::Fetch
    };
    AppError::with_source(kind, resource.failed_message(), err)
}

/// Map a JSON decoding failure.
pub fn decode_error(err: serde_json::Error, resource: Resource) -> AppError {
    AppError::with_source(ErrorKind::Fetch, resource.malformed_message(), err)
}

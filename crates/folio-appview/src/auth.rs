use axum::http::{header, HeaderMap};

use crate::error::AppError;

/// Reject requests that did not arrive through a localhost origin.
///
/// The admin surface is only ever served on the operator's own machine; the
/// public deployment sits behind a hostname, so the `Host` header is enough
/// of a gate.
pub fn require_local(headers: &HeaderMap) -> Result<(), AppError> {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("");

    if host.starts_with("localhost") || host.starts_with("127.0.0.1") {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Admin API only available on localhost".into(),
        ))
    }
}

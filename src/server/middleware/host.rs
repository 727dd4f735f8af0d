//! Host header allow-list.

use axum::{
    extract::{Request, State},
    http::header::HOST,
    middleware::Next,
    response::Response,
};

use crate::server::{error::AppError, state::AppState};

/// Whether a `Host` header value names one of the allowed hosts.
///
/// The port is ignored and the comparison is case-insensitive. A `*` entry allows any
/// host. A missing header is rejected unless `*` is allowed.
pub fn host_allowed(host: Option<&str>, allowed: &[String]) -> bool {
    if allowed.iter().any(|h| h == "*") {
        return true;
    }

    let Some(host) = host else {
        return false;
    };

    let host = host.trim();
    let name = if let Some(rest) = host.strip_prefix('[') {
        // IPv6 literal, e.g. [::1]:8000
        rest.split(']').next().unwrap_or_default()
    } else {
        host.rsplit_once(':').map_or(host, |(name, _)| name)
    };

    allowed.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Rejects requests whose `Host` header is not in the configured allow-list.
pub async fn enforce_allowed_hosts(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let host = request
        .headers()
        .get(HOST)
        .and_then(|value| value.to_str().ok());

    if !host_allowed(host, &state.allowed_hosts) {
        tracing::warn!("Rejected request with host header {:?}", host);
        return Err(AppError::BadRequest("Invalid host header".to_string()));
    }

    Ok(next.run(request).await)
}

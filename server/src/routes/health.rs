//! Liveness probe.

use axum::http::StatusCode;

/// `GET /healthz`: the process is up and serving.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors surfaced to dashboard HTTP clients
///
/// Infrastructure failures (bind, serve, cluster access) stay `anyhow` at
/// the binary boundary; only request-level failures get typed here.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Requested layout name is not in the selectable set
    #[error("unknown layout '{0}'")]
    UnknownLayout(String),
}

impl DashboardError {
    fn status(&self) -> StatusCode {
        match self {
            Self::UnknownLayout(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_layout_is_bad_request() {
        let err = DashboardError::UnknownLayout("cose".to_string());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "unknown layout 'cose'");
    }
}

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::api::AppState;
use crate::snapshot::{error_body, read_snapshot, EXPOSITION_CONTENT_TYPE};

/// Prometheus metrics endpoint
///
/// Serves the snapshot file as-is. A read failure is still a 200 so the
/// scrape itself succeeds; the failure is reported in the body instead.
/// The request target must be exactly the metrics path, query included.
pub async fn metrics_handler(State(state): State<AppState>, uri: Uri) -> Response {
    if uri.query().is_some() {
        return StatusCode::NOT_FOUND.into_response();
    }

    let path = &state.config.metrics_file;

    match read_snapshot(path).await {
        Ok(bytes) => {
            debug!("Serving {} bytes from {}", bytes.len(), path.display());
            let mut response = Response::new(Body::from(bytes));
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                header::HeaderValue::from_static(EXPOSITION_CONTENT_TYPE),
            );
            response
        }
        Err(e) => {
            warn!("Metrics snapshot unavailable: {}", e);
            // No content type on the error path
            Response::new(Body::from(error_body(&e)))
        }
    }
}

/// Everything other than the metrics path
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;

    fn state_for(path: &std::path::Path) -> AppState {
        AppState::new(Config {
            metrics_file: path.to_path_buf(),
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn test_metrics_handler_success_sets_content_type() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"foo_total 42\n").unwrap();

        let response =
            metrics_handler(State(state_for(file.path())), Uri::from_static("/metrics")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn test_metrics_handler_failure_has_no_content_type() {
        let dir = tempfile::tempdir().unwrap();

        let response = metrics_handler(
            State(state_for(&dir.path().join("absent.prom"))),
            Uri::from_static("/metrics"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::CONTENT_TYPE).is_none());
    }

    #[tokio::test]
    async fn test_metrics_handler_rejects_query_string() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"foo_total 42\n").unwrap();

        let response = metrics_handler(
            State(state_for(file.path())),
            Uri::from_static("/metrics?format=text"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_not_found() {
        let response = not_found().await.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

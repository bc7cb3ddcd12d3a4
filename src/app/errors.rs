use axum::{http::StatusCode, BoxError};

use super::models::api_error::ApiError;

#[derive(Debug)]
pub enum DefaultApiError {
    InternalServerError,
}

impl DefaultApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InternalServerError => ApiError {
                code: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal server error occurred.".to_string(),
            },
        }
    }
}

/// Turns a failure from the buffer or rate-limit layer into the JSON error
/// body every other route answers with.
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    tracing::error!(%err, "middleware failed");
    DefaultApiError::InternalServerError.value()
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use axum::{
        body::Body, error_handling::HandleErrorLayer, http::Request, response::IntoResponse,
        routing::get, Router,
    };
    use serde_json::Value;
    use tower::{timeout::TimeoutLayer, ServiceBuilder, ServiceExt};

    use super::*;

    #[tokio::test]
    async fn test_middleware_error_is_json_internal_server_error() {
        let err: BoxError = "buffer worker closed".into();

        let response = handle_middleware_error(err).await.into_response();
        let status = response.status();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], 500);
        assert_eq!(body["message"], "An internal server error occurred.");
    }

    #[tokio::test]
    async fn test_failing_layer_is_handled() {
        async fn slow() -> &'static str {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late"
        }
        let app = Router::new().route("/", get(slow)).layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(Duration::from_millis(10))),
        );

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use log::{log, Level};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct LogRequest {
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Create a router for frontend log forwarding
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(log_message))
}

/// Map a frontend level name onto a log level; unknown names log at info
fn parse_level(level: &str) -> Level {
    Level::from_str(level.trim()).unwrap_or(Level::Info)
}

/// Write a frontend log line into the service log
pub async fn log_message(
    State(_app_state): State<AppState>,
    Json(request): Json<LogRequest>,
) -> Result<Json<LogResponse>, StatusCode> {
    let component = request.component.as_deref().unwrap_or("frontend");
    log!(target: "frontend", parse_level(&request.level), "[{}] {}", component, request.message);

    Ok(Json(LogResponse { success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::{create_router, initialize_backend};
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("WARN"), Level::Warn);
        assert_eq!(parse_level("error"), Level::Error);
        assert_eq!(parse_level(" trace "), Level::Trace);
        assert_eq!(parse_level("Debug"), Level::Debug);
        assert_eq!(parse_level("verbose"), Level::Info);
        assert_eq!(parse_level(""), Level::Info);
    }

    #[tokio::test]
    async fn test_log_message() -> Result<(), Box<dyn std::error::Error>> {
        let config = AppConfig::default();
        let app = create_router(initialize_backend(&config)?, &config);

        let request = LogRequest {
            level: "WARN".to_string(),
            message: "calendar widget failed to render".to_string(),
            component: Some("month-view".to_string()),
        };

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/logs")
                    .method(Method::POST)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&request)?))?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let response: LogResponse = serde_json::from_slice(&body)?;
        assert!(response.success);

        Ok(())
    }
}

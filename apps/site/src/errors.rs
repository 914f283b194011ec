use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup, DOCTYPE};
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Upstream failures on page routes are turned into notices by the handlers;
/// this type covers what cannot be shown inside a page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => {
                tracing::debug!("Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        }
    }
}

fn error_page(status: StatusCode, message: &str) -> Markup {
    let code = status.as_u16();
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (code) " | Edu Aura Institute" }
            }
            body {
                main {
                    h1 { (code) }
                    p { (message) }
                    p { a href="/" { "Back to home" } }
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.parts();
        (status, error_page(status, &message)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::NotFound("Unknown template".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let (status, message) = AppError::Validation("Full name is required".into()).parts();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(message, "Full name is required");
    }

    #[test]
    fn test_body_escapes_message() {
        let html = error_page(StatusCode::NOT_FOUND, "<script>").into_string();
        assert!(html.contains("<p>&lt;script&gt;</p>"));
        assert!(html.contains("<h1>404</h1>"));
    }
}

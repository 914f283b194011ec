pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::{admissions, chat, contact, library, pages, resume};

async fn not_found() -> AppError {
    AppError::NotFound("Page not found".into())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Static and catalog pages
        .route("/", get(pages::home::handle_home))
        .route("/courses", get(pages::catalog::handle_courses))
        .route("/faculty", get(pages::catalog::handle_faculty))
        // Enquiry forms
        .route(
            "/admissions",
            get(admissions::handlers::handle_admissions_form)
                .post(admissions::handlers::handle_admissions_submit),
        )
        .route(
            "/contact",
            get(contact::handlers::handle_contact_form)
                .post(contact::handlers::handle_contact_submit),
        )
        // Library dashboard
        .route("/library", get(library::handlers::handle_library))
        .route("/library/login", post(library::handlers::handle_login))
        .route("/library/register", post(library::handlers::handle_register))
        .route("/library/logout", post(library::handlers::handle_logout))
        .route("/library/borrow/:id", post(library::handlers::handle_borrow))
        .route("/library/return/:id", post(library::handlers::handle_return))
        // Resume builder
        .route("/resume-builder", get(resume::handlers::handle_browse))
        .route(
            "/resume-builder/:template",
            get(resume::handlers::handle_fill).post(resume::handlers::handle_edit),
        )
        .route(
            "/resume-builder/:template/preview",
            post(resume::handlers::handle_preview),
        )
        .route(
            "/resume-builder/:template/print",
            post(resume::handlers::handle_print),
        )
        // EduBot
        .route("/api/chat", post(chat::handlers::handle_chat))
        .route("/api/chat/:id", get(chat::handlers::handle_transcript))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::api_client::mock::RecordingApi;
    use crate::testing::{get, test_app};

    #[tokio::test]
    async fn test_unknown_path_renders_404_page() {
        let (app, _) = test_app(RecordingApi::default());
        let (status, body) = get(&app, "/no-such-page", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not found"));
    }

    #[tokio::test]
    async fn test_health() {
        let (app, api) = test_app(RecordingApi::default());
        let (status, body) = get(&app, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "site");
        assert!(api.calls().is_empty());
    }
}

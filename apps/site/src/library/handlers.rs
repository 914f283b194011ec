//! Axum route handlers for the library dashboard.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::session::{clear_token, store_token, token_from};
use super::views::{dashboard_page, login_page, AuthFormValues, AuthMode};
use crate::api_client::ApiError;
use crate::models::library::{Book, LoginRequest, RegisterRequest};
use crate::render::Notice;
use crate::state::AppState;
use crate::validation::require_fields;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct LibraryQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ShelfActionForm {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Clone, Copy)]
enum ShelfAction {
    Borrow,
    Return,
}

impl ShelfAction {
    fn success(self) -> &'static str {
        match self {
            ShelfAction::Borrow => "Book borrowed successfully",
            ShelfAction::Return => "Book returned successfully",
        }
    }

    fn failure(self) -> &'static str {
        match self {
            ShelfAction::Borrow => "Borrow failed",
            ShelfAction::Return => "Return failed",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn failed_notice(title: &str, err: &ApiError) -> Notice {
    Notice::error(title).with_description(err.user_message())
}

/// Returns the mirrored shelf for `token`, fetching it from the backend the
/// first time. A failed fetch yields an empty list and a notice.
async fn ensure_shelf(
    state: &AppState,
    token: &str,
    notices: &mut Vec<Notice>,
) -> Result<Vec<Book>, ApiError> {
    if let Some(books) = state.shelves.books(token) {
        return Ok(books);
    }

    match state.api.list_books(token).await {
        Ok(books) => {
            state.shelves.load(token, books.clone());
            debug!(
                "Loaded {} books ({} shelves held)",
                books.len(),
                state.shelves.len()
            );
            Ok(books)
        }
        Err(e) if e.is_unauthorized() => Err(e),
        Err(e) => {
            warn!("Failed to load books: {e}");
            notices.push(Notice::error("Error").with_description(Some("Failed to load books")));
            Ok(Vec::new())
        }
    }
}

/// Token rejected by the backend: forget it and fall back to the login form.
fn session_expired(state: &AppState, jar: CookieJar, token: &str) -> Response {
    state.shelves.clear(token);
    let notices = [Notice::error("Session expired").with_description(Some("Please log in again"))];
    (
        clear_token(jar),
        login_page(
            &state.config,
            AuthMode::Login,
            &AuthFormValues::default(),
            &notices,
        ),
    )
        .into_response()
}

async fn render_dashboard(
    state: &AppState,
    jar: CookieJar,
    token: &str,
    term: &str,
    mut notices: Vec<Notice>,
) -> Response {
    match ensure_shelf(state, token, &mut notices).await {
        Ok(books) => (jar, dashboard_page(&state.config, &books, term, &notices)).into_response(),
        Err(_) => session_expired(state, jar, token),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /library
///
/// Login (or register, with `?mode=register`) form when no token is stored,
/// otherwise the dashboard filtered by `?q=`.
pub async fn handle_library(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<LibraryQuery>,
) -> Response {
    match token_from(&jar) {
        Some(token) => render_dashboard(&state, jar, &token, &query.q, Vec::new()).await,
        None => {
            let mode = match query.mode.as_deref() {
                Some("register") => AuthMode::Register,
                _ => AuthMode::Login,
            };
            login_page(&state.config, mode, &AuthFormValues::default(), &[]).into_response()
        }
    }
}

/// POST /library/login
pub async fn handle_login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let values = AuthFormValues {
        name: "",
        email: &form.email,
    };

    let check = require_fields(&[("Email", &form.email), ("Password", &form.password)]);
    if !check.passed {
        let notices =
            [Notice::error("Missing fields").with_description(Some("Email and password required"))];
        return login_page(&state.config, AuthMode::Login, &values, &notices).into_response();
    }

    let request = LoginRequest {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };

    match state.api.login(&request).await {
        Ok(token) => {
            info!("Library login for {}", request.email);
            // A fresh login always starts from the backend's list.
            state.shelves.clear(&token);
            let jar = store_token(jar, token.clone(), state.config.cookie_secure);
            render_dashboard(&state, jar, &token, "", vec![Notice::success("Login Successful")])
                .await
        }
        Err(e) => {
            warn!("Library login failed: {e}");
            let notices = [failed_notice("Login Failed", &e)];
            login_page(&state.config, AuthMode::Login, &values, &notices).into_response()
        }
    }
}

/// POST /library/register
pub async fn handle_register(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CredentialsForm>,
) -> Response {
    let values = AuthFormValues {
        name: &form.name,
        email: &form.email,
    };

    let check = require_fields(&[
        ("Name", &form.name),
        ("Email", &form.email),
        ("Password", &form.password),
    ]);
    if !check.passed {
        let notices =
            [Notice::error("Missing fields").with_description(Some("Please fill all the fields"))];
        return login_page(&state.config, AuthMode::Register, &values, &notices).into_response();
    }

    let request = RegisterRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
    };

    match state.api.register(&request).await {
        Ok(token) => {
            info!("Library registration for {}", request.email);
            state.shelves.clear(&token);
            let jar = store_token(jar, token.clone(), state.config.cookie_secure);
            render_dashboard(
                &state,
                jar,
                &token,
                "",
                vec![Notice::success("Registered Successfully")],
            )
            .await
        }
        Err(e) => {
            warn!("Library registration failed: {e}");
            let notices = [failed_notice("Register Failed", &e)];
            login_page(&state.config, AuthMode::Register, &values, &notices).into_response()
        }
    }
}

/// POST /library/logout
pub async fn handle_logout(State(state): State<AppState>, jar: CookieJar) -> Response {
    if let Some(token) = token_from(&jar) {
        state.shelves.clear(&token);
    }
    (
        clear_token(jar),
        login_page(
            &state.config,
            AuthMode::Login,
            &AuthFormValues::default(),
            &[Notice::success("Logged out")],
        ),
    )
        .into_response()
}

async fn shelf_action(
    state: AppState,
    jar: CookieJar,
    book_id: String,
    term: String,
    action: ShelfAction,
) -> Response {
    let Some(token) = token_from(&jar) else {
        return Redirect::to("/library").into_response();
    };

    let result = match action {
        ShelfAction::Borrow => state.api.borrow_book(&token, &book_id).await,
        ShelfAction::Return => state.api.return_book(&token, &book_id).await,
    };

    let notice = match result {
        Ok(book) => {
            if !state.shelves.replace_book(&token, book) {
                // Shelf missing or stale; reload it on render.
                state.shelves.clear(&token);
            }
            Notice::success(action.success())
        }
        Err(e) if e.is_unauthorized() => return session_expired(&state, jar, &token),
        Err(e) => {
            warn!("{} for book {book_id}: {e}", action.failure());
            failed_notice(action.failure(), &e)
        }
    };

    render_dashboard(&state, jar, &token, &term, vec![notice]).await
}

/// POST /library/borrow/:id
pub async fn handle_borrow(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(book_id): Path<String>,
    Form(form): Form<ShelfActionForm>,
) -> Response {
    shelf_action(state, jar, book_id, form.q, ShelfAction::Borrow).await
}

/// POST /library/return/:id
pub async fn handle_return(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(book_id): Path<String>,
    Form(form): Form<ShelfActionForm>,
) -> Response {
    shelf_action(state, jar, book_id, form.q, ShelfAction::Return).await
}

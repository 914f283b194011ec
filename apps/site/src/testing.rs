//! Router-level test helpers: build the real router over a `RecordingApi`
//! and drive it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use crate::api_client::mock::RecordingApi;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Every `Set-Cookie` header value.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }
}

pub fn test_app(api: RecordingApi) -> (Router, Arc<RecordingApi>) {
    test_app_with(api, Config::for_tests())
}

pub fn test_app_with(api: RecordingApi, config: Config) -> (Router, Arc<RecordingApi>) {
    let (router, api, _) = test_app_with_state(api, config);
    (router, api)
}

/// Like `test_app_with`, also handing back the state so tests can inspect stores.
pub fn test_app_with_state(
    api: RecordingApi,
    config: Config,
) -> (Router, Arc<RecordingApi>, AppState) {
    let api = Arc::new(api);
    let state = AppState::new(api.clone(), config);
    (build_router(state.clone()), api, state)
}

async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

pub async fn get_full(app: &Router, uri: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::empty()).unwrap()).await
}

pub async fn get(app: &Router, uri: &str, cookie: Option<&str>) -> (StatusCode, String) {
    let response = get_full(app, uri, cookie).await;
    (response.status, response.body)
}

/// POSTs an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: &Router, uri: &str, form: &str, cookie: Option<&str>) -> TestResponse {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    send(app, builder.body(Body::from(form.to_string())).unwrap()).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = send(app, request).await;
    (response.status, response.body)
}

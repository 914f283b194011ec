use std::sync::Arc;

use crate::api_client::InstituteApi;
use crate::chat::ChatStore;
use crate::config::Config;
use crate::library::ShelfStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Institute backend. Default: `ApiClient`; tests swap in a recording double.
    pub api: Arc<dyn InstituteApi>,
    pub config: Config,
    /// EduBot transcripts, keyed by conversation id.
    pub chats: ChatStore,
    /// Library dashboard mirrors, keyed by bearer token.
    pub shelves: ShelfStore,
}

impl AppState {
    pub fn new(api: Arc<dyn InstituteApi>, config: Config) -> Self {
        Self {
            api,
            config,
            chats: ChatStore::new(),
            shelves: ShelfStore::new(),
        }
    }
}

use crate::config::Config;
use crate::store::FileStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: FileStore,
    pub config: Arc<Config>,
}

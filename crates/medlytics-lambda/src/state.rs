use std::sync::Arc;

use medlytics_storage::store::AnalysisStore;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnalysisStore>,
    /// HS256 secret for bearer tokens. Without it every token is rejected.
    pub jwt_secret: Option<Arc<str>>,
}

impl AppState {
    pub fn new(store: Arc<dyn AnalysisStore>, jwt_secret: Option<String>) -> Self {
        Self {
            store,
            jwt_secret: jwt_secret.map(Arc::from),
        }
    }
}

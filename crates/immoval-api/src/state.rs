use std::sync::Arc;

use immoval_engine::AppContext;

/// Shared, read-only application state: the once-loaded context behind an
/// `Arc`. No locks, nothing mutates after startup.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<AppContext>,
}

impl AppState {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self { ctx }
    }
}

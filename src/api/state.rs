use std::sync::Arc;

use crate::services::RecommendationContext;

/// Shared application state
///
/// The context is read-only after startup, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<RecommendationContext>,
}

impl AppState {
    pub fn new(context: RecommendationContext) -> Self {
        Self {
            context: Arc::new(context),
        }
    }
}

use crate::store::RecipeStore;
use crate::views::Views;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: RecipeStore,
    pub views: Arc<Views>,
}

// Route path constants - single source of truth for all paths

use axum::Router;
use axum::routing::get;

use crate::handlers::{
    create_form_handler, create_handler, delete_confirm_handler, delete_handler, detail_handler,
    edit_form_handler, edit_handler, home_handler,
};
use crate::state::AppState;

pub const HOME: &str = "/";
pub const RECIPES_CREATE: &str = "/Recipes/create";
pub const RECIPE_DETAIL: &str = "/Recipes/{id}";
pub const RECIPE_EDIT: &str = "/Recipes/{id}/edit";
pub const RECIPE_DELETE: &str = "/Recipes/{id}/delete";

/// Build the full application router. The static `/Recipes/create` route
/// takes precedence over the `/Recipes/{id}` capture.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(HOME, get(home_handler))
        .route(RECIPES_CREATE, get(create_form_handler).post(create_handler))
        .route(RECIPE_DETAIL, get(detail_handler))
        .route(RECIPE_EDIT, get(edit_form_handler).post(edit_handler))
        .route(
            RECIPE_DELETE,
            get(delete_confirm_handler).post(delete_handler),
        )
        .with_state(state)
}

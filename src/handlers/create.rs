use crate::error::ApiError;
use crate::models::CreateRecipeForm;
use crate::routes;
use crate::state::AppState;
use axum::Form;
use axum::extract::State;
use axum::response::{Html, Redirect};
use serde_json::json;

/// GET /Recipes/create handler - render the empty create form
pub async fn create_form_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = state.views.render("create", &json!({ "title": "New recipe" }))?;
    Ok(Html(html))
}

/// POST /Recipes/create handler - insert a recipe and redirect home
pub async fn create_handler(
    State(state): State<AppState>,
    Form(form): Form<CreateRecipeForm>,
) -> Result<Redirect, ApiError> {
    let id = state.store.insert(form.into()).await?;
    tracing::info!("Created recipe {}", id);
    Ok(Redirect::to(routes::HOME))
}

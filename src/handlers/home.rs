use crate::error::ApiError;
use crate::models::RecipeView;
use crate::state::AppState;
use axum::extract::State;
use axum::response::Html;
use serde_json::json;

/// GET / handler - render the list of all recipes
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let recipes: Vec<RecipeView> = state
        .store
        .list_all()
        .await?
        .into_iter()
        .map(RecipeView::from)
        .collect();

    tracing::debug!("Rendering home with {} recipes", recipes.len());

    let html = state
        .views
        .render("home", &json!({ "title": "Recipes", "recipes": recipes }))?;
    Ok(Html(html))
}

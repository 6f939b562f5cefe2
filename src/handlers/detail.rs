use crate::error::ApiError;
use crate::models::RecipeView;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::Html;
use mongodb::bson::oid::ObjectId;
use serde_json::json;

/// GET /Recipes/{id} handler - render one recipe
pub async fn detail_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.find(id).await? {
        Some(recipe) => {
            let recipe = RecipeView::from(recipe);
            let title = recipe.name.clone();
            let html = state
                .views
                .render("details", &json!({ "title": title, "recipe": recipe }))?;
            Ok(Html(html))
        }
        None => Err(ApiError::RecipeNotFound(id)),
    }
}

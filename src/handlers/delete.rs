use crate::error::ApiError;
use crate::models::RecipeView;
use crate::routes;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

/// GET /Recipes/{id}/delete handler - render the delete confirmation page
pub async fn delete_confirm_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.find(id).await? {
        Some(recipe) => {
            let recipe = RecipeView::from(recipe);
            let title = format!("Delete {}", recipe.name);
            let html = state
                .views
                .render("delete", &json!({ "title": title, "recipe": recipe }))?;
            Ok(Html(html))
        }
        None => Err(ApiError::RecipeNotFound(id)),
    }
}

/// POST /Recipes/{id}/delete handler - delete the recipe and redirect home
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Redirect, ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    if state.store.delete(id).await? {
        tracing::info!("Deleted recipe {}", id);
        Ok(Redirect::to(routes::HOME))
    } else {
        Err(ApiError::RecipeNotFound(id))
    }
}

use crate::error::ApiError;
use crate::models::{EditRecipeForm, RecipeUpdate, RecipeView};
use crate::state::AppState;
use axum::Form;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

/// GET /Recipes/{id}/edit handler - render the pre-filled edit form
pub async fn edit_form_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    match state.store.find(id).await? {
        Some(recipe) => {
            let recipe = RecipeView::from(recipe);
            let title = format!("Edit {}", recipe.name);
            let html = state
                .views
                .render("edit", &json!({ "title": title, "recipe": recipe }))?;
            Ok(Html(html))
        }
        None => Err(ApiError::RecipeNotFound(id)),
    }
}

/// POST /Recipes/{id}/edit handler - update Name, Summary and Description
///
/// The stored Image is never part of the update. A submission that
/// modifies zero fields (absent id, or values identical to what is
/// stored) reports not-found, mirroring the store's modified count.
pub async fn edit_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Form(form): Form<EditRecipeForm>,
) -> Result<Redirect, ApiError> {
    let id = ObjectId::parse_str(&id_str).map_err(|_| ApiError::InvalidId(id_str.clone()))?;

    let update = RecipeUpdate::from(form);
    if state.store.update(id, &update).await? {
        tracing::info!("Updated recipe {}", id);
        Ok(Redirect::to(&format!("/Recipes/{}", id.to_hex())))
    } else {
        Err(ApiError::RecipeNotFound(id))
    }
}

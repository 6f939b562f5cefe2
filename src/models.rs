use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A recipe document as stored in MongoDB.
///
/// Field names in the collection are PascalCase (`Name`, `Summary`, ...)
/// and the store-assigned identifier lives under `_id`. The id is `None`
/// only on the way into an insert, where the store assigns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Recipe {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub image: String,
}

/// Form body for POST /Recipes/create. All four fields are required;
/// the extractor rejects bodies missing any of them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRecipeForm {
    pub name: String,
    pub summary: String,
    pub description: String,
    pub image: String,
}

impl From<CreateRecipeForm> for Recipe {
    fn from(form: CreateRecipeForm) -> Self {
        Recipe {
            id: None,
            name: form.name,
            summary: form.summary,
            description: form.description,
            image: form.image,
        }
    }
}

/// Form body for POST /Recipes/{id}/edit. `Image` is deliberately absent:
/// edit never touches the stored image.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditRecipeForm {
    pub name: String,
    pub summary: String,
    pub description: String,
}

/// The `$set` document applied by the edit operation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipeUpdate {
    pub name: String,
    pub summary: String,
    pub description: String,
}

impl From<EditRecipeForm> for RecipeUpdate {
    fn from(form: EditRecipeForm) -> Self {
        RecipeUpdate {
            name: form.name,
            summary: form.summary,
            description: form.description,
        }
    }
}

/// Template-facing view of a recipe: the id as its hex string and
/// lowercase field names for interpolation.
#[derive(Debug, Serialize)]
pub struct RecipeView {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub description: String,
    pub image: String,
}

impl From<Recipe> for RecipeView {
    fn from(recipe: Recipe) -> Self {
        RecipeView {
            id: recipe.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: recipe.name,
            summary: recipe.summary,
            description: recipe.description,
            image: recipe.image,
        }
    }
}

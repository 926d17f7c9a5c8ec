use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use log::{info, warn};
use serde::Serialize;

use crate::error::PantryError;
use crate::model::GenerateRecipeRequest;
use crate::service::RecipeService;

pub const GENERATE_RECIPE_PATH: &str = "/api/generateRecipe";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Router exposing the single generation endpoint
pub fn router(service: Arc<RecipeService>) -> Router {
    Router::new()
        .route(GENERATE_RECIPE_PATH, post(generate_recipe))
        .with_state(service)
}

/// Suggest recipe names for `ingredients`, or return the full text for
/// `recipeName`.
///
/// Responds `{"recipes": [...]}` or `{"recipe": "..."}` on success, and
/// `{"error": "..."}` with 400 for a request naming neither, or 500 when
/// the model call fails.
pub async fn generate_recipe(
    State(service): State<Arc<RecipeService>>,
    payload: Result<Json<GenerateRecipeRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection);
            return PantryError::InvalidRequest.into_response();
        }
    };

    info!(
        "Generate request (ingredients: {}, recipe name: {})",
        request.ingredients.is_some(),
        request.recipe_name.is_some()
    );

    match service.generate(&request).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => e.into_response(),
    }
}

impl IntoResponse for PantryError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PantryError::InvalidRequest | PantryError::UnknownSuggestion(_) => {
                (StatusCode::BAD_REQUEST, "Invalid request")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate recipe"),
        };

        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

//! Recipe suggestions from pantry ingredients.
//!
//! A hosted language model proposes recipe names for a list of
//! ingredients, then writes out a chosen recipe. The model's free-form
//! markdown is split into ingredient and instruction lines by
//! [`parser::parse_recipe`].

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod prompt;
pub mod providers;
pub mod service;
pub mod session;

use std::sync::Arc;

use log::info;
use tokio::net::TcpListener;

pub use crate::config::AppConfig;
pub use crate::error::PantryError;
pub use crate::model::{
    AllergyList, GenerateRecipeRequest, GenerateRecipeResponse, ParsedRecipe, RecipeSections,
    RecipeSuggestion, SearchFilters,
};
pub use crate::parser::{parse_recipe, split_suggestions};
pub use crate::service::RecipeService;
pub use crate::session::{PantrySession, Tab};

use crate::providers::ProviderFactory;

/// Build a service backed by the configured default provider
pub fn service_from_config(config: &AppConfig) -> Result<RecipeService, PantryError> {
    let provider = ProviderFactory::get_default_provider(config)?;
    Ok(RecipeService::new(Arc::from(provider)))
}

/// Suggest recipe names using configuration from `config.toml` and the environment
pub async fn suggest_recipes(
    ingredients: &[String],
    filters: &SearchFilters,
    allergies: &[String],
) -> Result<Vec<RecipeSuggestion>, PantryError> {
    let service = service_from_config(&AppConfig::load()?)?;
    service.suggest(ingredients, filters, allergies).await
}

/// Fetch and parse one recipe using configuration from `config.toml` and the environment
pub async fn fetch_recipe(
    name: &str,
    filters: &SearchFilters,
    allergies: &[String],
) -> Result<ParsedRecipe, PantryError> {
    let service = service_from_config(&AppConfig::load()?)?;
    service.fetch_recipe(name, filters, allergies).await
}

/// Serve the HTTP API until the process is stopped
pub async fn serve(config: &AppConfig) -> Result<(), PantryError> {
    let service = service_from_config(config)?;
    info!("Using '{}' provider", service.provider_name());

    let app = api::router(Arc::new(service));
    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Listening on {}", address);

    axum::serve(listener, app).await?;
    Ok(())
}

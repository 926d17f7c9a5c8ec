use std::sync::Arc;

use log::{debug, error, info};

use crate::error::PantryError;
use crate::model::{
    GenerateRecipeRequest, GenerateRecipeResponse, ParsedRecipe, RecipeSuggestion,
    SearchFilters,
};
use crate::parser::{parse_recipe, split_suggestions, suggestions_from_names};
use crate::prompt::{build_detail_prompt, build_suggestion_prompt};
use crate::providers::LlmProvider;

/// Suggests and fetches recipes through a single language model provider.
///
/// Every operation makes exactly one upstream call. Failures are not
/// retried.
#[derive(Clone)]
pub struct RecipeService {
    provider: Arc<dyn LlmProvider>,
}

impl RecipeService {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        RecipeService { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Ask the model for recipe names that use the given pantry ingredients
    pub async fn suggest(
        &self,
        ingredients: &[String],
        filters: &SearchFilters,
        allergies: &[String],
    ) -> Result<Vec<RecipeSuggestion>, PantryError> {
        let joined = ingredients
            .iter()
            .map(|i| i.trim())
            .filter(|i| !i.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if joined.is_empty() {
            return Err(PantryError::InvalidRequest);
        }

        let names = self.suggestion_names(&joined, filters, allergies).await?;
        Ok(suggestions_from_names(names))
    }

    /// Ask the model for a full recipe and parse it into sections
    pub async fn fetch_recipe(
        &self,
        name: &str,
        filters: &SearchFilters,
        allergies: &[String],
    ) -> Result<ParsedRecipe, PantryError> {
        let name = non_blank(Some(name)).ok_or(PantryError::InvalidRequest)?;
        let text = self.recipe_text(name, filters, allergies).await?;

        let sections = parse_recipe(&text);
        if sections.ingredients.is_empty() || sections.instructions.is_empty() {
            debug!(
                "Recipe '{}' parsed with {} ingredients and {} instructions",
                name,
                sections.ingredients.len(),
                sections.instructions.len()
            );
        }

        Ok(ParsedRecipe::new(name, sections))
    }

    /// Dispatch a raw endpoint request.
    ///
    /// Ingredients select suggestion mode, otherwise a recipe name selects
    /// detail mode. Blank fields count as absent.
    pub async fn generate(
        &self,
        request: &GenerateRecipeRequest,
    ) -> Result<GenerateRecipeResponse, PantryError> {
        if let Some(ingredients) = non_blank(request.ingredients.as_deref()) {
            let recipes = self
                .suggestion_names(ingredients, &request.filters, &request.allergies)
                .await?;
            Ok(GenerateRecipeResponse::Recipes { recipes })
        } else if let Some(name) = non_blank(request.recipe_name.as_deref()) {
            let recipe = self
                .recipe_text(name, &request.filters, &request.allergies)
                .await?;
            Ok(GenerateRecipeResponse::Recipe { recipe })
        } else {
            Err(PantryError::InvalidRequest)
        }
    }

    async fn suggestion_names(
        &self,
        ingredients: &str,
        filters: &SearchFilters,
        allergies: &[String],
    ) -> Result<Vec<String>, PantryError> {
        let prompt = build_suggestion_prompt(ingredients, filters, allergies);
        let text = self.call(&prompt).await?;
        Ok(split_suggestions(&text))
    }

    async fn recipe_text(
        &self,
        name: &str,
        filters: &SearchFilters,
        allergies: &[String],
    ) -> Result<String, PantryError> {
        let prompt = build_detail_prompt(name, filters, allergies);
        self.call(&prompt).await
    }

    async fn call(&self, prompt: &str) -> Result<String, PantryError> {
        debug!("Prompt for {}: {}", self.provider_name(), prompt);

        match self.provider.generate(prompt).await {
            Ok(result) => {
                info!(
                    "Generated {} chars with {} in {}ms (tokens in: {:?}, out: {:?})",
                    result.content.len(),
                    result
                        .metadata
                        .model_version
                        .as_deref()
                        .unwrap_or(self.provider_name()),
                    result.metadata.latency_ms,
                    result.metadata.tokens_used.input_tokens,
                    result.metadata.tokens_used.output_tokens
                );
                Ok(result.content)
            }
            Err(e) => {
                let message = e.to_string();
                error!("Error generating recipe: {}", message);
                Err(PantryError::GenerationFailed(message))
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

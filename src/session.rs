//! Client-side state for one user browsing suggestions.
//!
//! All state changes go through methods on [`PantrySession`]; network work
//! is delegated to a [`RecipeService`] and its outcome folded back in.

use log::error;

use crate::error::PantryError;
use crate::model::{AllergyList, ParsedRecipe, RecipeSuggestion, SearchFilters};
use crate::service::RecipeService;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Ingredients,
    Suggestions,
    Recipe,
}

#[derive(Debug, Clone, Default)]
pub struct PantrySession {
    ingredients: Vec<String>,
    input: String,
    suggestions: Vec<RecipeSuggestion>,
    selected: Option<ParsedRecipe>,
    loading: bool,
    active_tab: Tab,
    pub filters: SearchFilters,
    pub allergies: AllergyList,
}

impl PantrySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn suggestions(&self) -> &[RecipeSuggestion] {
        &self.suggestions
    }

    pub fn selected_recipe(&self) -> Option<&ParsedRecipe> {
        self.selected.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Text typed into the ingredient field but not yet added.
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// Add the typed text as an ingredient and clear the field.
    ///
    /// Blank or duplicate text is left in the field so it can be edited.
    pub fn submit_input(&mut self) -> bool {
        let text = std::mem::take(&mut self.input);
        if self.add_ingredient(&text) {
            true
        } else {
            self.input = text;
            false
        }
    }

    /// Add a pantry ingredient tag. Returns whether the list changed.
    ///
    /// Input is trimmed; blank input and exact duplicates are ignored.
    pub fn add_ingredient(&mut self, raw: &str) -> bool {
        let ingredient = raw.trim();
        if ingredient.is_empty() || self.ingredients.iter().any(|i| i == ingredient) {
            return false;
        }
        self.ingredients.push(ingredient.to_string());
        true
    }

    /// Remove the ingredient at `index`; out of range is a no-op.
    pub fn remove_ingredient(&mut self, index: usize) -> Option<String> {
        if index < self.ingredients.len() {
            Some(self.ingredients.remove(index))
        } else {
            None
        }
    }

    pub fn can_discover(&self) -> bool {
        !self.loading && !self.ingredients.is_empty()
    }

    /// Mark a suggestion request as outstanding.
    ///
    /// Returns `false`, leaving the session untouched, when there are no
    /// ingredients or another request is still loading.
    pub fn begin_discover(&mut self) -> bool {
        if !self.can_discover() {
            return false;
        }
        self.loading = true;
        true
    }

    /// Fold the outcome of a suggestion request back into the session.
    ///
    /// On failure the previous suggestions and tab are kept.
    pub fn finish_discover(
        &mut self,
        result: Result<Vec<RecipeSuggestion>, PantryError>,
    ) -> Result<(), PantryError> {
        self.loading = false;
        match result {
            Ok(suggestions) => {
                self.suggestions = suggestions;
                self.active_tab = Tab::Suggestions;
                Ok(())
            }
            Err(e) => {
                error!("Error generating recipes: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the suggestion list with fresh names for the current ingredients.
    pub async fn discover(&mut self, service: &RecipeService) -> Result<(), PantryError> {
        if !self.begin_discover() {
            return Ok(());
        }
        let result = service
            .suggest(&self.ingredients, &self.filters, &self.allergies)
            .await;
        self.finish_discover(result)
    }

    /// Mark a recipe request as outstanding and return the suggestion's name.
    pub fn begin_select(&mut self, id: u32) -> Result<String, PantryError> {
        if self.loading {
            return Err(PantryError::Busy);
        }
        let name = self
            .suggestions
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
            .ok_or(PantryError::UnknownSuggestion(id))?;
        self.loading = true;
        Ok(name)
    }

    /// Fold the outcome of a recipe request back into the session.
    ///
    /// On failure the previously selected recipe and tab are kept.
    pub fn finish_select(
        &mut self,
        result: Result<ParsedRecipe, PantryError>,
    ) -> Result<(), PantryError> {
        self.loading = false;
        match result {
            Ok(recipe) => {
                self.selected = Some(recipe);
                self.active_tab = Tab::Recipe;
                Ok(())
            }
            Err(e) => {
                error!("Error generating full recipe: {}", e);
                Err(e)
            }
        }
    }

    /// Fetch the full recipe for a listed suggestion and show it.
    pub async fn select(&mut self, service: &RecipeService, id: u32) -> Result<(), PantryError> {
        let name = self.begin_select(id)?;
        let result = service
            .fetch_recipe(&name, &self.filters, &self.allergies)
            .await;
        self.finish_select(result)
    }
}

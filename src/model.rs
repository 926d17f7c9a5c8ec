use serde::{Deserialize, Serialize};

/// Sentinel filter value meaning "no constraint"
pub const ANY: &str = "Any";

/// A recipe name offered for a set of pantry ingredients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipeSuggestion {
    /// 1-based position in the model's response
    pub id: u32,
    pub name: String,
}

/// Ingredient and instruction lines pulled out of detail-mode model text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecipeSections {
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

/// A full recipe ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl ParsedRecipe {
    pub fn new(name: impl Into<String>, sections: RecipeSections) -> Self {
        ParsedRecipe {
            name: name.into(),
            ingredients: sections.ingredients,
            instructions: sections.instructions,
        }
    }
}

/// Preference filters forwarded to the prompt builder.
///
/// Each field holds a concrete value or [`ANY`]. Missing fields
/// deserialize to [`ANY`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default = "default_filter")]
    pub cuisine: String,
    #[serde(default = "default_filter")]
    pub dietary_style: String,
    #[serde(default = "default_filter")]
    pub meal_type: String,
}

fn default_filter() -> String {
    ANY.to_string()
}

impl Default for SearchFilters {
    fn default() -> Self {
        SearchFilters {
            cuisine: default_filter(),
            dietary_style: default_filter(),
            meal_type: default_filter(),
        }
    }
}

/// Returns the filter value when it constrains the search, `None` for
/// [`ANY`] or blank values.
pub fn concrete_filter(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ANY) {
        None
    } else {
        Some(trimmed)
    }
}

/// Allergy labels to exclude from generated recipes
pub type AllergyList = Vec<String>;

/// Body of a generation request.
///
/// `ingredients` selects suggestion mode and takes precedence over
/// `recipe_name`, which selects detail mode.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRecipeRequest {
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub recipe_name: Option<String>,
    #[serde(default)]
    pub filters: SearchFilters,
    #[serde(default)]
    pub allergies: AllergyList,
}

/// Raw model output relayed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerateRecipeResponse {
    /// Suggestion mode: one recipe name per entry
    Recipes { recipes: Vec<String> },
    /// Detail mode: the unparsed recipe text
    Recipe { recipe: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_default_to_any() {
        let filters: SearchFilters = serde_json::from_str(r#"{"cuisine": "Thai"}"#).unwrap();
        assert_eq!(filters.cuisine, "Thai");
        assert_eq!(filters.dietary_style, ANY);
        assert_eq!(filters.meal_type, ANY);
    }

    #[test]
    fn test_filters_use_camel_case() {
        let filters: SearchFilters =
            serde_json::from_str(r#"{"dietaryStyle": "Vegan", "mealType": "Dinner"}"#).unwrap();
        assert_eq!(filters.dietary_style, "Vegan");
        assert_eq!(filters.meal_type, "Dinner");
    }

    #[test]
    fn test_request_fields_are_optional() {
        let request: GenerateRecipeRequest = serde_json::from_str("{}").unwrap();
        assert!(request.ingredients.is_none());
        assert!(request.recipe_name.is_none());
        assert_eq!(request.filters, SearchFilters::default());
        assert!(request.allergies.is_empty());

        let request: GenerateRecipeRequest =
            serde_json::from_str(r#"{"recipeName": "Lasagna", "allergies": ["Dairy"]}"#)
                .unwrap();
        assert_eq!(request.recipe_name.as_deref(), Some("Lasagna"));
        assert_eq!(request.allergies, vec!["Dairy"]);
    }

    #[test]
    fn test_response_shapes() {
        let recipes = GenerateRecipeResponse::Recipes {
            recipes: vec!["Soup".to_string()],
        };
        assert_eq!(serde_json::to_string(&recipes).unwrap(), r#"{"recipes":["Soup"]}"#);

        let recipe = GenerateRecipeResponse::Recipe {
            recipe: "Ingredients:".to_string(),
        };
        assert_eq!(serde_json::to_string(&recipe).unwrap(), r#"{"recipe":"Ingredients:"}"#);
    }

    #[test]
    fn test_concrete_filter() {
        assert_eq!(concrete_filter("Any"), None);
        assert_eq!(concrete_filter("any"), None);
        assert_eq!(concrete_filter("   "), None);
        assert_eq!(concrete_filter(" Italian "), Some("Italian"));
    }
}

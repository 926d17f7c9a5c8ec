use crate::model::{concrete_filter, SearchFilters};

/// Prompt template for suggesting recipe names from pantry ingredients.
///
/// Loaded from `prompts/suggestion.txt` at compile time. Contains
/// `{{INGREDIENTS}}` and `{{CONSTRAINTS}}` placeholders.
pub const SUGGESTION_PROMPT: &str = include_str!("prompts/suggestion.txt");

/// Prompt template for a full recipe.
///
/// Loaded from `prompts/detail.txt` at compile time. Contains
/// `{{RECIPE_NAME}}` and `{{CONSTRAINTS}}` placeholders.
pub const DETAIL_PROMPT: &str = include_str!("prompts/detail.txt");

/// Build the suggestion-mode prompt for a comma-separated ingredient list.
pub fn build_suggestion_prompt(
    ingredients: &str,
    filters: &SearchFilters,
    allergies: &[String],
) -> String {
    inject_constraints(SUGGESTION_PROMPT, filters, allergies)
        .replace("{{INGREDIENTS}}", ingredients.trim())
}

/// Build the detail-mode prompt for one recipe name.
pub fn build_detail_prompt(
    recipe_name: &str,
    filters: &SearchFilters,
    allergies: &[String],
) -> String {
    inject_constraints(DETAIL_PROMPT, filters, allergies)
        .replace("{{RECIPE_NAME}}", recipe_name.trim())
}

// Runs over the bare template only. User text goes in afterwards so that
// placeholder-looking input is never rewritten.
fn inject_constraints(template: &str, filters: &SearchFilters, allergies: &[String]) -> String {
    let constraints = describe_constraints(filters, allergies);
    if constraints.is_empty() {
        template.replace("{{CONSTRAINTS}}\n", "")
    } else {
        template.replace("{{CONSTRAINTS}}", &constraints)
    }
}

/// One sentence per concrete filter, then one sentence for allergies.
/// Empty when nothing constrains the request.
fn describe_constraints(filters: &SearchFilters, allergies: &[String]) -> String {
    let mut sentences = Vec::new();

    if let Some(cuisine) = concrete_filter(&filters.cuisine) {
        sentences.push(format!("The recipes should be {} cuisine.", cuisine));
    }
    if let Some(style) = concrete_filter(&filters.dietary_style) {
        sentences.push(format!("The recipes must suit a {} diet.", style));
    }
    if let Some(meal) = concrete_filter(&filters.meal_type) {
        sentences.push(format!("The recipes should be suitable for {}.", meal));
    }

    let excluded = dedup_labels(allergies);
    if !excluded.is_empty() {
        sentences.push(format!(
            "Do not include any of these allergens: {}.",
            excluded.join(", ")
        ));
    }

    sentences.join(" ")
}

fn dedup_labels(labels: &[String]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for label in labels.iter().map(|l| l.trim()).filter(|l| !l.is_empty()) {
        if !seen.iter().any(|s| s.eq_ignore_ascii_case(label)) {
            seen.push(label);
        }
    }
    seen
}

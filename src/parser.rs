//! Line-scanning parsers for free-form model output.
//!
//! Model responses are markdown-ish prose with no guaranteed structure.
//! Both parsers work line by line and never fail: text they cannot make
//! sense of simply produces fewer entries.

use crate::model::{RecipeSections, RecipeSuggestion};

const INGREDIENTS_HEADER: &str = "ingredients:";
const INSTRUCTIONS_HEADERS: [&str; 2] = ["instructions:", "directions:"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Preamble,
    Ingredients,
    Instructions,
}

/// Splits detail-mode recipe text into ingredient and instruction lines.
///
/// A line containing `ingredients:` (any case) opens the ingredients
/// section; a line containing `instructions:` or `directions:` opens the
/// instructions section. Header lines are not emitted, blank lines are
/// skipped and anything before the first header is dropped.
///
/// Ingredient lines lose a leading `*` bullet and instruction lines lose a
/// leading `N.` ordinal. A leading `-` on an ingredient line is kept.
///
/// ```
/// use pantry_pal::parser::parse_recipe;
///
/// let sections = parse_recipe("Ingredients:\n* 2 eggs\nInstructions:\n1. Whisk");
/// assert_eq!(sections.ingredients, vec!["2 eggs"]);
/// assert_eq!(sections.instructions, vec!["Whisk"]);
/// ```
pub fn parse_recipe(text: &str) -> RecipeSections {
    let mut sections = RecipeSections::default();
    let mut current = Section::Preamble;

    for line in text.lines() {
        let lowered = line.to_lowercase();
        if lowered.contains(INGREDIENTS_HEADER) {
            current = Section::Ingredients;
            continue;
        }
        if INSTRUCTIONS_HEADERS.iter().any(|h| lowered.contains(h)) {
            current = Section::Instructions;
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match current {
            Section::Ingredients => sections
                .ingredients
                .push(strip_asterisk_bullet(trimmed).to_string()),
            Section::Instructions => sections
                .instructions
                .push(strip_ordinal(trimmed).to_string()),
            Section::Preamble => {}
        }
    }

    sections
}

/// Splits suggestion-mode text into one recipe name per non-blank line,
/// removing a single leading `-` or `*` list marker.
///
/// ```
/// use pantry_pal::parser::split_suggestions;
///
/// let names = split_suggestions("- Pasta Primavera\n* Lentil Soup\n\nGrilled Cheese");
/// assert_eq!(names, vec!["Pasta Primavera", "Lentil Soup", "Grilled Cheese"]);
/// ```
pub fn split_suggestions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| strip_list_marker(line).trim().to_string())
        .collect()
}

/// Numbers recipe names 1-based in the order given.
pub fn suggestions_from_names<I, S>(names: I) -> Vec<RecipeSuggestion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .zip(1u32..)
        .map(|(name, id)| RecipeSuggestion {
            id,
            name: name.as_ref().trim().to_string(),
        })
        .collect()
}

fn strip_asterisk_bullet(line: &str) -> &str {
    line.strip_prefix('*').map_or(line, str::trim_start)
}

fn strip_list_marker(line: &str) -> &str {
    line.strip_prefix(['-', '*']).map_or(line, str::trim_start)
}

// Matches `\d+\.` followed by optional whitespace.
fn strip_ordinal(line: &str) -> &str {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    rest.strip_prefix('.').map_or(line, str::trim_start)
}

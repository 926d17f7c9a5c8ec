use pantry_pal::{parse_recipe, split_suggestions};

const GEMINI_STYLE_RECIPE: &str = r#"## Classic Pancakes

These fluffy pancakes are perfect for a weekend breakfast.

**Ingredients:**

* 1 1/2 cups all-purpose flour
* 3 1/2 teaspoons baking powder
* 1 tablespoon white sugar
* 1 1/4 cups milk
* 1 egg

**Instructions:**

1. In a large bowl, sift together the flour, baking powder and sugar.
2. Make a well in the center and pour in the milk and egg.
3. Heat a lightly oiled griddle over medium-high heat.
4. Pour or scoop the batter onto the griddle, using approximately 1/4 cup for each pancake.

Enjoy!
"#;

#[test]
fn test_counts_match_lines_under_headers() {
    let sections = parse_recipe(GEMINI_STYLE_RECIPE);

    assert_eq!(sections.ingredients.len(), 5);
    assert_eq!(sections.ingredients[0], "1 1/2 cups all-purpose flour");
    assert_eq!(sections.ingredients[4], "1 egg");

    // The closing remark is still inside the instructions section
    assert_eq!(sections.instructions.len(), 5);
    assert_eq!(
        sections.instructions[0],
        "In a large bowl, sift together the flour, baking powder and sugar."
    );
    assert_eq!(sections.instructions[4], "Enjoy!");
}

#[test]
fn test_directions_header() {
    let text = "INGREDIENTS:\n* 1 lb beef\n\nDIRECTIONS:\n1. Brown the beef\n2. Drain";
    let sections = parse_recipe(text);
    assert_eq!(sections.ingredients, vec!["1 lb beef"]);
    assert_eq!(sections.instructions, vec!["Brown the beef", "Drain"]);
}

#[test]
fn test_hyphen_bullets_survive_in_ingredients() {
    let sections = parse_recipe("Ingredients:\n- 2 cups flour\n* 2 cups flour");
    assert_eq!(sections.ingredients, vec!["- 2 cups flour", "2 cups flour"]);
}

#[test]
fn test_mid_sentence_header_triggers_section() {
    let text = "Gather the following ingredients: a bowl of love\n* salt";
    assert_eq!(parse_recipe(text).ingredients, vec!["salt"]);
}

#[test]
fn test_split_then_parse_never_panics() {
    let suggestions = "- Pasta Primavera\n* Lentil Soup\n\nGrilled Cheese\n- \n*\n1. Ingredients: Instructions:\n🍲 Pho";
    for name in split_suggestions(suggestions) {
        let sections = parse_recipe(&name);
        assert!(sections.ingredients.len() + sections.instructions.len() <= 1);
    }
}

#[test]
fn test_arbitrary_text_never_panics() {
    let samples = [
        "",
        "\n\n\n",
        "Ingredients:",
        "Instructions:\n12.",
        "Instructions:\n9999999999999999999999. Stir",
        "ingredients:\n*",
        "ÀÉÎ INGREDIENTS: ÕÜ\n* crème fraîche\nDirections:\n1.\tFold",
        "\r\n\r\n* a\r\n",
    ];
    for text in samples {
        let _ = parse_recipe(text);
        let _ = split_suggestions(text);
    }

    let sections = parse_recipe("ÀÉÎ INGREDIENTS: ÕÜ\n* crème fraîche\nDirections:\n1.\tFold");
    assert_eq!(sections.ingredients, vec!["crème fraîche"]);
    assert_eq!(sections.instructions, vec!["Fold"]);
}

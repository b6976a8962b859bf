//! Read-only queries over a list of recipes.
//!
//! Every function here borrows its input, never mutates it and never fails.

use crate::model::Recipe;

/// Each distinct author, in order of first appearance. Comparison is exact.
pub fn unique_authors(recipes: &[Recipe]) -> Vec<&str> {
    let mut authors: Vec<&str> = Vec::new();
    for recipe in recipes {
        if !authors.contains(&recipe.author.as_str()) {
            authors.push(&recipe.author);
        }
    }
    authors
}

/// Recipes whose author is exactly `author_name` (case-sensitive, no substring match).
pub fn recipes_by_author<'a>(recipes: &'a [Recipe], author_name: &str) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.author == author_name)
        .collect()
}

/// Recipes with at least one ingredient containing `ingredient`, ignoring case.
///
/// An empty search term matches nothing.
pub fn recipes_by_ingredient<'a>(recipes: &'a [Recipe], ingredient: &str) -> Vec<&'a Recipe> {
    if ingredient.is_empty() {
        return Vec::new();
    }

    let needle = ingredient.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| {
            recipe
                .ingredients
                .iter()
                .any(|item| item.to_lowercase().contains(&needle))
        })
        .collect()
}

/// First recipe whose name contains `name`, ignoring case.
///
/// Records without a name are skipped.
pub fn recipe_by_name<'a>(recipes: &'a [Recipe], name: &str) -> Option<&'a Recipe> {
    let needle = name.to_lowercase();
    recipes
        .iter()
        .filter(|recipe| !recipe.name.is_empty())
        .find(|recipe| recipe.name.to_lowercase().contains(&needle))
}

/// All ingredients of the given recipes concatenated in order.
pub fn all_ingredients<'a, I>(recipes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Recipe>,
{
    recipes
        .into_iter()
        .flat_map(|recipe| recipe.ingredients.iter().map(String::as_str))
        .collect()
}

use crate::model::Recipe;
use crate::query;

/// Recipes the user saved for the shopping list during this run.
///
/// Append-only; saving the same recipe twice lists its ingredients twice.
#[derive(Debug, Default)]
pub struct SavedRecipes<'a> {
    recipes: Vec<&'a Recipe>,
}

impl<'a> SavedRecipes<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, recipe: &'a Recipe) {
        self.recipes.push(recipe);
    }

    pub fn recipes(&self) -> &[&'a Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Shopping list: every saved recipe's ingredients, in save order.
    pub fn ingredients(&self) -> Vec<&'a str> {
        query::all_ingredients(self.recipes.iter().copied())
    }
}

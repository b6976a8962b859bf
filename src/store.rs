use log::{debug, info};
use serde_json::Value;
use std::path::Path;

use crate::config::AppConfig;
use crate::error::RecipeError;
use crate::model::Recipe;

const BUNDLED_RECIPES: &str = include_str!("../data/cake-recipes.json");

/// The recipe collection, loaded once at startup and never modified.
#[derive(Debug, Clone, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        RecipeStore { recipes }
    }

    /// The collection shipped with the binary.
    pub fn embedded() -> Result<Self, RecipeError> {
        Self::from_json_str(BUNDLED_RECIPES)
    }

    /// Parse a JSON array of recipe records.
    pub fn from_json_str(json: &str) -> Result<Self, RecipeError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_array() {
            return Err(RecipeError::DataError(
                "expected a JSON array of recipes".to_string(),
            ));
        }

        let recipes: Vec<Recipe> = serde_json::from_value(value)?;
        debug!("Parsed {} recipes", recipes.len());
        Ok(RecipeStore { recipes })
    }

    pub fn from_path(path: &Path) -> Result<Self, RecipeError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Load from the configured data file, or the bundled collection if none is set.
    pub fn load(config: &AppConfig) -> Result<Self, RecipeError> {
        let store = match &config.data_file {
            Some(path) => {
                info!("Loading recipes from {}", path.display());
                Self::from_path(path)?
            }
            None => {
                info!("Loading bundled recipes");
                Self::embedded()?
            }
        };
        info!("Loaded {} recipes", store.len());
        Ok(store)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

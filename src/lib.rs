pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod query;
pub mod session;
pub mod shell;
pub mod store;

pub use config::AppConfig;
pub use error::RecipeError;
pub use input::{LineReader, ScriptedInput, StdinReader};
pub use model::Recipe;
pub use session::SavedRecipes;
pub use shell::{MenuChoice, Shell};
pub use store::RecipeStore;

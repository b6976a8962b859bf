use cake_recipes::{AppConfig, RecipeStore, Shell, StdinReader};
use log::debug;
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr, keeping stdout for the menu.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = AppConfig::load()?;
    debug!("{:#?}", config);

    let store = RecipeStore::load(&config)?;

    let mut shell = Shell::new(&store, StdinReader::new(), io::stdout());
    shell.run()?;

    Ok(())
}

//! Menu-driven interaction loop.
//!
//! [`Shell`] renders the menu, reads a choice through a [`LineReader`], runs the matching
//! query against the [`RecipeStore`] and writes the result to any [`Write`] sink. No input
//! ends the loop except choice `0` or the end of input.

use log::{debug, info};
use std::io::{self, Write};

use crate::error::RecipeError;
use crate::input::LineReader;
use crate::model::Recipe;
use crate::query;
use crate::session::SavedRecipes;
use crate::store::RecipeStore;

const MENU: [&str; 7] = [
    "Recipe Management System Menu:",
    "1. Show All Authors",
    "2. Show Recipe names by Author",
    "3. Show Recipe names by Ingredient",
    "4. Get Recipe by Name",
    "5. Get All Ingredients of Saved Recipes",
    "0. Exit",
];
const CHOICE_PROMPT: &str = "Enter a number (1-5) or 0 to exit: ";
const AUTHOR_PROMPT: &str = "Enter author´s name: ";
const INGREDIENT_PROMPT: &str = "Enter ingredient to search for: ";
const NAME_PROMPT: &str = "Enter recipe name to search for: ";
const SAVE_PROMPT: &str = "Save this recipe for your shopping list= (yes/no): ";

const INVALID_CHOICE: &str = "Invalid input. Please enter a number between 0 and 5.";
const FAREWELL: &str = "K Bye!";

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowAuthors,
    RecipesByAuthor,
    RecipesByIngredient,
    RecipeByName,
    SavedIngredients,
    Exit,
    Invalid,
}

impl MenuChoice {
    /// Interpret a line typed at the menu prompt.
    ///
    /// Leading whitespace is skipped and the leading integer is used, so `"3abc"` selects 3.
    /// Input without a leading integer is [`MenuChoice::Invalid`].
    pub fn parse(input: &str) -> Self {
        match leading_integer(input) {
            Some(0) => MenuChoice::Exit,
            Some(1) => MenuChoice::ShowAuthors,
            Some(2) => MenuChoice::RecipesByAuthor,
            Some(3) => MenuChoice::RecipesByIngredient,
            Some(4) => MenuChoice::RecipeByName,
            Some(5) => MenuChoice::SavedIngredients,
            _ => MenuChoice::Invalid,
        }
    }
}

fn leading_integer(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }

    // Overlong digit runs are simply out of range.
    let value = i64::from_str_radix(&rest[..digits_end], radix).ok()?;
    Some(if negative { -value } else { value })
}

/// The interactive session: one store, one shopping list, one input and one output.
pub struct Shell<'a, R, W> {
    store: &'a RecipeStore,
    saved: SavedRecipes<'a>,
    input: R,
    out: W,
}

impl<'a, R: LineReader, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a RecipeStore, input: R, out: W) -> Self {
        Shell {
            store,
            saved: SavedRecipes::new(),
            input,
            out,
        }
    }

    /// Run until the user exits or input runs out.
    pub fn run(&mut self) -> Result<(), RecipeError> {
        loop {
            self.render_menu()?;
            let choice = match self.input.read_line(CHOICE_PROMPT)? {
                Some(line) => MenuChoice::parse(&line),
                None => {
                    info!("Input closed, leaving the menu");
                    MenuChoice::Exit
                }
            };

            if !self.dispatch(choice)? {
                return Ok(());
            }
        }
    }

    /// Execute one menu choice. Returns `false` once the session should end.
    pub fn dispatch(&mut self, choice: MenuChoice) -> Result<bool, RecipeError> {
        debug!("Menu choice: {:?}", choice);
        match choice {
            MenuChoice::ShowAuthors => self.show_authors()?,
            MenuChoice::RecipesByAuthor => self.show_recipes_by_author()?,
            MenuChoice::RecipesByIngredient => self.show_recipes_by_ingredient()?,
            MenuChoice::RecipeByName => self.show_recipe_by_name()?,
            MenuChoice::SavedIngredients => self.show_saved_ingredients()?,
            MenuChoice::Exit => {
                writeln!(self.out, "{}", FAREWELL)?;
                return Ok(false);
            }
            MenuChoice::Invalid => writeln!(self.out, "{}", INVALID_CHOICE)?,
        }
        Ok(true)
    }

    pub fn saved(&self) -> &SavedRecipes<'a> {
        &self.saved
    }

    /// Consume the shell and hand back its output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    fn render_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        for line in MENU {
            writeln!(self.out, "{}", line)?;
        }
        Ok(())
    }

    /// Sub-prompt answer; end of input counts as an empty answer.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        Ok(self.input.read_line(prompt)?.unwrap_or_default())
    }

    fn show_authors(&mut self) -> io::Result<()> {
        writeln!(self.out, "Unique Authors:")?;
        for author in query::unique_authors(self.store.recipes()) {
            writeln!(self.out, "- {}", author)?;
        }
        Ok(())
    }

    fn show_recipes_by_author(&mut self) -> io::Result<()> {
        let author = self.ask(AUTHOR_PROMPT)?;
        let recipes = query::recipes_by_author(self.store.recipes(), &author);
        if recipes.is_empty() {
            writeln!(self.out, "no recipes found by this author.")
        } else {
            print_recipe_names(&mut self.out, &recipes)
        }
    }

    fn show_recipes_by_ingredient(&mut self) -> io::Result<()> {
        let ingredient = self.ask(INGREDIENT_PROMPT)?;
        let recipes = query::recipes_by_ingredient(self.store.recipes(), &ingredient);
        if recipes.is_empty() {
            writeln!(self.out, "No recipes found with that ingredient")
        } else {
            print_recipe_names(&mut self.out, &recipes)
        }
    }

    fn show_recipe_by_name(&mut self) -> io::Result<()> {
        let name = self.ask(NAME_PROMPT)?;
        let store = self.store;
        let Some(recipe) = query::recipe_by_name(store.recipes(), &name) else {
            return writeln!(self.out, "No recipe found with that name.");
        };

        writeln!(self.out, "Recipe found:")?;
        writeln!(self.out, "Name: {}", recipe.name)?;
        writeln!(self.out, "Author: {}", recipe.author)?;
        writeln!(self.out, "Ingredients:")?;
        for ingredient in &recipe.ingredients {
            writeln!(self.out, "- {}", ingredient)?;
        }

        let answer = self.ask(SAVE_PROMPT)?;
        if answer.to_lowercase() == "yes" {
            self.saved.save(recipe);
            info!("Saved '{}' ({} saved)", recipe.name, self.saved.len());
            writeln!(self.out, "recipe saved!")?;
        }
        Ok(())
    }

    fn show_saved_ingredients(&mut self) -> io::Result<()> {
        if self.saved.is_empty() {
            return writeln!(self.out, "No recipes saved yet.");
        }

        writeln!(self.out, "All ingredients from saved recipes:")?;
        for ingredient in self.saved.ingredients() {
            writeln!(self.out, "- {}", ingredient)?;
        }
        Ok(())
    }
}

/// Print one recipe name per line, or a notice when there are none.
pub fn print_recipe_names<W: Write>(out: &mut W, recipes: &[&Recipe]) -> io::Result<()> {
    if recipes.is_empty() {
        return writeln!(out, "no recipes found");
    }
    for recipe in recipes {
        writeln!(out, "{}", recipe.name)?;
    }
    Ok(())
}

use cake_recipes::query::{recipe_by_name, recipes_by_ingredient, unique_authors};
use cake_recipes::{AppConfig, RecipeError, RecipeStore};
use std::io::Write;
use std::path::PathBuf;

fn write_data_file(json: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_bundled_collection_by_default() {
    let _ = env_logger::try_init();

    let store = RecipeStore::load(&AppConfig::default()).unwrap();
    assert!(store.len() >= 10);

    let authors = unique_authors(store.recipes());
    assert_eq!(authors.first(), Some(&"Mary Cadogan"));
    assert!(recipe_by_name(store.recipes(), "victoria").is_some());
}

#[test]
fn test_load_from_configured_data_file() {
    let file = write_data_file(
        r#"[
            {"Name": "Choco Cake", "Author": "Ana", "Ingredients": ["flour", "cocoa"]},
            {"Name": "Vanilla Cake", "Author": "Ben", "Ingredients": ["flour", "vanilla"]}
        ]"#,
    );
    let config = AppConfig {
        data_file: Some(file.path().to_path_buf()),
    };

    let store = RecipeStore::load(&config).unwrap();
    assert_eq!(store.len(), 2);
    assert_eq!(unique_authors(store.recipes()), vec!["Ana", "Ben"]);
}

#[test]
fn test_malformed_ingredients_are_searchable_without_errors() {
    let file = write_data_file(
        r#"[
            {"Name": "No List", "Author": "Ana"},
            {"Name": "String List", "Author": "Ana", "Ingredients": "flour"},
            {"Name": "Numbers", "Author": "Ben", "Ingredients": [2, "Eggs"]},
            {"Name": "Flour Cake", "Author": "Ben", "Ingredients": ["Flour"], "Notes": "extra"}
        ]"#,
    );

    let store = RecipeStore::from_path(file.path()).unwrap();
    let found: Vec<_> = recipes_by_ingredient(store.recipes(), "flour")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(found, vec!["Flour Cake"]);

    let numbers = recipe_by_name(store.recipes(), "numbers").unwrap();
    assert_eq!(numbers.ingredients, vec!["2", "Eggs"]);
}

#[test]
fn test_missing_data_file_is_an_io_error() {
    let config = AppConfig {
        data_file: Some(PathBuf::from("/definitely/not/here/recipes.json")),
    };
    let err = RecipeStore::load(&config).unwrap_err();
    assert!(matches!(err, RecipeError::IoError(_)));
}

#[test]
fn test_non_array_data_file_is_rejected() {
    let file = write_data_file(r#"{"recipes": []}"#);
    let err = RecipeStore::from_path(file.path()).unwrap_err();
    assert!(matches!(err, RecipeError::DataError(_)));
    assert!(err.to_string().contains("array"));
}

#[test]
fn test_null_and_numeric_text_fields_do_not_fail_the_load() {
    let store = RecipeStore::from_json_str(
        r#"[
            {"Name": null, "Author": "Ana", "Ingredients": ["flour"]},
            {"Name": "Ok", "Author": 7, "Ingredients": ["sugar"]}
        ]"#,
    )
    .unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(unique_authors(store.recipes()), vec!["Ana", "7"]);

    let found = recipe_by_name(store.recipes(), "").unwrap();
    assert_eq!(found.name, "Ok");
}

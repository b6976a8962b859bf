use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A single cake recipe as it appears in the data file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Recipe {
    /// Recipe name; empty when the record has none
    #[serde(rename = "Name", default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(rename = "Author", default, deserialize_with = "lenient_text")]
    pub author: String,
    /// Ingredient lines in their original order.
    ///
    /// Missing or malformed values become an empty list.
    #[serde(
        rename = "Ingredients",
        default,
        deserialize_with = "lenient_ingredients"
    )]
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(
        name: impl Into<String>,
        author: impl Into<String>,
        ingredients: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Recipe {
            name: name.into(),
            author: author.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
        }
    }
}

/// Deserialize the `Ingredients` field without ever failing.
///
/// Anything that is not an array yields no ingredients. Inside an array, strings are
/// kept as-is, scalars are converted to text, `null` entries are dropped and nested
/// structures are rendered as compact JSON.
fn lenient_ingredients<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(ingredients_from_value(value))
}

/// Deserialize a text field without ever failing.
///
/// `null` and nested structures become the empty string, scalars are converted to text.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => {
            debug!("Ignoring non-text value: {}", other);
            String::new()
        }
    })
}

fn ingredients_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.into_iter().filter_map(ingredient_text).collect(),
        other => {
            debug!("Ignoring non-array ingredients value: {}", other);
            Vec::new()
        }
    }
}

fn ingredient_text(item: Value) -> Option<String> {
    match item {
        Value::String(s) => Some(s),
        Value::Null => None,
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

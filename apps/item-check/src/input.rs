//! Reading item documents.
//!
//! A document is either one item object or an array of item objects:
//!
//! ```json
//! {"itemName": "Book", "price": 2000, "quantity": 10}
//! ```
//! ```json
//! [{"itemName": "Book", "price": 2000, "quantity": 10}, {"itemName": ""}]
//! ```

use serde_json::Value;

use item_core::Item;

use crate::error::InputError;

/// Parses a document into its items, keeping document order.
pub fn parse_items(source_name: &str, contents: &str) -> Result<Vec<Item>, InputError> {
    let document: Value = serde_json::from_str(contents).map_err(|error| InputError::Json {
        source_name: source_name.to_string(),
        error,
    })?;

    match document {
        Value::Array(values) => values
            .into_iter()
            .enumerate()
            .map(|(index, value)| to_item(source_name, index, value))
            .collect(),
        value @ Value::Object(_) => Ok(vec![to_item(source_name, 0, value)?]),
        _ => Err(InputError::UnexpectedShape {
            source_name: source_name.to_string(),
        }),
    }
}

fn to_item(source_name: &str, index: usize, value: Value) -> Result<Item, InputError> {
    serde_json::from_value(value).map_err(|error| InputError::NotAnItem {
        source_name: source_name.to_string(),
        index,
        error,
    })
}

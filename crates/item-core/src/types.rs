//! # Domain Types
//!
//! The item form object and the tag that identifies form shapes.
//!
//! ## Item Shape
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Item                        │
//! │  ─────────────────────────────────────────  │
//! │  id          Option<i64>     (not checked)  │
//! │  itemName    Option<String>  required       │
//! │  price       Option<i64>     1000..=1000000 │
//! │  quantity    Option<i64>     < 9999         │
//! │                                             │
//! │  price × quantity >= 10000 (both present)   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Absent vs Zero
//! Every checked field is an `Option`. `None` means the form left the field
//! out; `Some(0)` is a present value. The cross-field total only runs when
//! both `price` and `quantity` are `Some`, so this difference matters.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Form Object Tag
// =============================================================================

/// Type of a form field, used when resolving message codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
        }
    }
}

/// A form shape that validators can be matched against.
///
/// `OBJECT_NAME` is the explicit tag a collector is bound to (see
/// [`Errors::new`](crate::validation::Errors::new)). Validators declare the
/// names they support instead of inspecting types at runtime.
pub trait FormObject {
    /// Name of the form object, e.g. `"item"`.
    const OBJECT_NAME: &'static str;

    /// Declared type of a field, if the field exists on this form.
    fn field_type(field: &str) -> Option<FieldType>;
}

// =============================================================================
// Item
// =============================================================================

/// A submitted item form.
///
/// ## Serialization
/// Field names are camelCase on the wire, matching the form:
/// ```json
/// { "id": 1, "itemName": "Book", "price": 2000, "quantity": 10 }
/// ```
/// Missing keys and `null` both deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Identifier assigned by the store. Not validated.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub id: Option<i64>,

    /// Display name.
    #[serde(default)]
    pub item_name: Option<String>,

    /// Unit price in the smallest currency unit.
    #[serde(default)]
    pub price: Option<i64>,

    /// Number of units.
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl Item {
    /// Field name of [`Item::item_name`] as it appears on the form.
    pub const ITEM_NAME: &'static str = "itemName";
    /// Field name of [`Item::price`].
    pub const PRICE: &'static str = "price";
    /// Field name of [`Item::quantity`].
    pub const QUANTITY: &'static str = "quantity";

    /// Creates an item without an id.
    pub fn new(item_name: impl Into<String>, price: Option<i64>, quantity: Option<i64>) -> Self {
        Item {
            id: None,
            item_name: Some(item_name.into()),
            price,
            quantity,
        }
    }

    /// `price × quantity` when both are present.
    ///
    /// Saturates at the `i64` bounds instead of overflowing; in-range values
    /// never come close.
    pub fn total_price(&self) -> Option<i64> {
        match (self.price, self.quantity) {
            (Some(price), Some(quantity)) => Some(price.saturating_mul(quantity)),
            _ => None,
        }
    }
}

impl FormObject for Item {
    const OBJECT_NAME: &'static str = "item";

    fn field_type(field: &str) -> Option<FieldType> {
        match field {
            Item::ITEM_NAME => Some(FieldType::String),
            Item::PRICE | Item::QUANTITY => Some(FieldType::Integer),
            _ => None,
        }
    }
}

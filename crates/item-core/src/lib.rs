//! # item-core: Pure Validation Logic for the Item Form
//!
//! This crate checks a submitted item form (name, price, quantity) and
//! records structured errors against individual fields or the item as a
//! whole. It has zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Item Validation Flow                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Form binding layer (caller)                        │   │
//! │  │    builds Item ──► Errors::new("item") ──► validator.validate   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ item-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  policy   │  │ validation│  │   error   │  │   │
//! │  │   │   Item    │  │ thresholds│  │  Errors   │  │ CoreError │  │   │
//! │  │   │FormObject │  │           │  │ Validator │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │        Message source (downstream, out of scope)                │   │
//! │  │     resolves codes + args into localized strings                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The `Item` form object and the `FormObject` tag
//! - [`policy`] - Thresholds used by the item rules
//! - [`validation`] - The error collector, message codes, and validators
//! - [`error`] - Contract violations (never validation failures)
//!
//! ## Example Usage
//!
//! ```rust
//! use item_core::{Item, ItemValidator};
//!
//! let item = Item::new("Book", Some(1000), Some(5));
//! let errors = ItemValidator::new().validate_item(&item);
//!
//! // 1000 × 5 = 5000 is below the 10,000 minimum total
//! assert_eq!(errors.error_count(), 1);
//! assert!(errors.has_global_errors());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod policy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult};
pub use policy::ItemPolicy;
pub use types::{FieldType, FormObject, Item};
pub use validation::{
    CodeFormat, ErrorArg, Errors, ItemValidator, MessageCodesResolver, ValidationError, Validator,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Inclusive lower bound on an item's price.
pub const ITEM_MIN_PRICE: i64 = 1_000;

/// Inclusive upper bound on an item's price.
pub const ITEM_MAX_PRICE: i64 = 1_000_000;

/// Exclusive upper bound on an item's quantity.
///
/// ## Note
/// Unlike the price bound this one is exclusive: a quantity of exactly
/// 9999 is rejected.
pub const ITEM_MAX_QUANTITY: i64 = 9_999;

/// Inclusive lower bound on `price × quantity`.
pub const ITEM_MIN_TOTAL_PRICE: i64 = 10_000;

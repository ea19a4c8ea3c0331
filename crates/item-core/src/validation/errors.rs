//! # Error Collector
//!
//! `Errors` is the append-only list a validator writes into. Each entry is
//! a [`ValidationError`]: a field error (`field = Some(..)`) or an object
//! error (`field = None`) produced by a cross-field rule.
//!
//! ## Collector Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Errors::for_object::<Item>()      bound to object name "item"         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validator.validate(&item, &mut errors)                                │
//! │       │                                                                 │
//! │       ├── reject_value("itemName", "required", [], None)               │
//! │       ├── reject_value("price", "range", [1000, 1000000], Some(500))   │
//! │       └── reject("totalPriceMin", [10000, 5000])                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  errors.all_errors()  → entries in the order they were rejected        │
//! │                                                                         │
//! │  Nothing is ever removed, merged, or deduplicated.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;
use ts_rs::TS;

use super::codes::MessageCodesResolver;
use crate::types::{FieldType, FormObject};

// =============================================================================
// Error Arguments
// =============================================================================

/// A value carried by an error: a message argument or a rejected value.
///
/// Serialized untagged, so `[1000, 1000000]` stays a plain JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ErrorArg {
    Integer(i64),
    Text(String),
}

impl From<i64> for ErrorArg {
    fn from(value: i64) -> Self {
        ErrorArg::Integer(value)
    }
}

impl From<&str> for ErrorArg {
    fn from(value: &str) -> Self {
        ErrorArg::Text(value.to_string())
    }
}

impl From<String> for ErrorArg {
    fn from(value: String) -> Self {
        ErrorArg::Text(value)
    }
}

impl fmt::Display for ErrorArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorArg::Integer(value) => write!(f, "{value}"),
            ErrorArg::Text(value) => write!(f, "{value:?}"),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// One validation failure.
///
/// ## Serialization
/// ```json
/// {
///   "objectName": "item",
///   "field": "price",
///   "code": "range",
///   "args": [1000, 1000000],
///   "rejectedValue": 500,
///   "codes": ["range.item.price", "range.price", "range.integer", "range"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValidationError {
    /// Object the collector was bound to.
    pub object_name: String,

    /// Offending field; `None` for object-level errors.
    pub field: Option<String>,

    /// Symbolic error kind, e.g. `required`.
    pub code: String,

    /// Arguments for the message template, in order.
    pub args: Vec<ErrorArg>,

    /// Field value at rejection time. `None` for object errors and for
    /// absent fields.
    pub rejected_value: Option<ErrorArg>,

    /// Message keys to try, most specific first.
    pub codes: Vec<String>,
}

impl ValidationError {
    /// True for errors raised by a cross-field rule.
    pub fn is_global(&self) -> bool {
        self.field.is_none()
    }

    /// True when this error is attached to `field`.
    pub fn is_for_field(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}: {}", self.object_name, field, self.code)?,
            None => write!(f, "{}: {}", self.object_name, self.code)?,
        }
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, " [{}]", args.join(", "))?;
        }
        Ok(())
    }
}

// =============================================================================
// Errors Collector
// =============================================================================

/// Append-only collector of validation errors for one form object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Errors {
    object_name: String,

    #[serde(skip)]
    resolver: MessageCodesResolver,

    #[serde(skip)]
    field_types: fn(&str) -> Option<FieldType>,

    errors: Vec<ValidationError>,
}

fn no_field_types(_field: &str) -> Option<FieldType> {
    None
}

impl Errors {
    /// Creates an empty collector bound to `object_name`.
    ///
    /// Field types are unknown, so resolved codes skip the type segment.
    /// Prefer [`Errors::for_object`] when the form type is known.
    pub fn new(object_name: impl Into<String>) -> Self {
        Errors {
            object_name: object_name.into(),
            resolver: MessageCodesResolver::default(),
            field_types: no_field_types,
            errors: Vec::new(),
        }
    }

    /// Creates an empty collector bound to form `T`.
    pub fn for_object<T: FormObject>() -> Self {
        Errors {
            object_name: T::OBJECT_NAME.to_string(),
            resolver: MessageCodesResolver::default(),
            field_types: T::field_type,
            errors: Vec::new(),
        }
    }

    /// Replaces the message code resolver used for later rejections.
    pub fn with_resolver(mut self, resolver: MessageCodesResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    // =========================================================================
    // Recording
    // =========================================================================

    /// Records an error against a single field.
    pub fn reject_value(
        &mut self,
        field: &str,
        code: &str,
        args: Vec<ErrorArg>,
        rejected_value: Option<ErrorArg>,
    ) {
        let codes = self.resolver.resolve_field_codes(
            code,
            &self.object_name,
            field,
            (self.field_types)(field),
        );
        trace!(object = %self.object_name, field, code, "field rejected");
        self.errors.push(ValidationError {
            object_name: self.object_name.clone(),
            field: Some(field.to_string()),
            code: code.to_string(),
            args,
            rejected_value,
            codes,
        });
    }

    /// Records an object-level error.
    pub fn reject(&mut self, code: &str, args: Vec<ErrorArg>) {
        let codes = self.resolver.resolve_object_codes(code, &self.object_name);
        trace!(object = %self.object_name, code, "object rejected");
        self.errors.push(ValidationError {
            object_name: self.object_name.clone(),
            field: None,
            code: code.to_string(),
            args,
            rejected_value: None,
            codes,
        });
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// All errors in the order they were recorded.
    pub fn all_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Field errors only, in recording order.
    pub fn field_errors(&self) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| !e.is_global()).collect()
    }

    /// Errors recorded against `field`.
    pub fn field_errors_for(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.is_for_field(field)).collect()
    }

    /// First error recorded against `field`.
    pub fn field_error(&self, field: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.is_for_field(field))
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_error(field).is_some()
    }

    /// Object-level errors only, in recording order.
    pub fn global_errors(&self) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.is_global()).collect()
    }

    pub fn has_global_errors(&self) -> bool {
        self.errors.iter().any(ValidationError::is_global)
    }

    /// Consumes the collector.
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

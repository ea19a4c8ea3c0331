//! # Error Types
//!
//! Contract violations raised by item-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  Validation failures (validation::errors)                              │
//! │  └── ValidationError  - DATA, appended to an Errors collector          │
//! │                                                                         │
//! │  item-core errors (this file)                                          │
//! │  └── CoreError        - Caller broke the contract                      │
//! │      ├── UnsupportedType  (collector bound to another object)         │
//! │      ├── InvalidPolicy    (inconsistent thresholds)                   │
//! │      └── UnknownCodeFormat (not prefix / postfix)                      │
//! │                                                                         │
//! │  item-check errors (app crate)                                         │
//! │  ├── ConfigError      - Config file / env failures                     │
//! │  └── InputError       - Documents that are not items                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected price is never a `CoreError`. It is recorded in the collector
//! and the call still returns `Ok(())`.

use thiserror::Error;

/// Errors caused by misuse of the validation API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A validator was handed a collector bound to an object it does not
    /// support.
    ///
    /// ## When This Occurs
    /// ```text
    /// let mut errors = Errors::new("order");
    /// ItemValidator::new().validate(&item, &mut errors)
    ///      │
    ///      ▼
    /// UnsupportedType { object_name: "order", validator: "ItemValidator" }
    ///      │
    ///      ▼
    /// Nothing appended to `errors`
    /// ```
    #[error("{validator} does not support object '{object_name}'")]
    UnsupportedType {
        object_name: String,
        validator: &'static str,
    },

    /// Policy thresholds contradict each other.
    #[error("Invalid item policy: {0}")]
    InvalidPolicy(String),

    /// Unknown message code format name.
    #[error("Unknown code format: '{0}'. Valid options: prefix, postfix")]
    UnknownCodeFormat(String),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

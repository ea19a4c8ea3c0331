//! # Validation Module
//!
//! Validators, the error collector they write into, and message code
//! resolution.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validator Contract                                 │
//! │                                                                         │
//! │  caller                                                                 │
//! │    │  validator.supports(errors.object_name())?                        │
//! │    │                                                                    │
//! │    ├── no  → Err(CoreError::UnsupportedType), collector untouched      │
//! │    │                                                                    │
//! │    └── yes → check(target, errors)                                     │
//! │                 │                                                       │
//! │                 ├── every rule runs, no short-circuit                  │
//! │                 └── failures appended as ValidationError entries       │
//! │                                                                         │
//! │  Failures are DATA. `validate` returns Ok(()) even when it recorded    │
//! │  errors; Err is reserved for contract violations.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use item_core::{Errors, Item, ItemValidator, Validator};
//!
//! let validator = ItemValidator::new();
//! let item = Item::new("", Some(500), Some(10_000));
//!
//! let mut errors = Errors::for_object::<Item>();
//! validator.validate(&item, &mut errors).unwrap();
//! assert_eq!(errors.error_count(), 3);
//!
//! // A collector bound to another object is refused
//! let mut other = Errors::new("order");
//! assert!(validator.validate(&item, &mut other).is_err());
//! assert!(!other.has_errors());
//! ```

pub mod codes;
pub mod errors;
pub mod item;

pub use codes::{CodeFormat, MessageCodesResolver};
pub use errors::{ErrorArg, Errors, ValidationError};
pub use item::ItemValidator;

use crate::error::{CoreError, CoreResult};
use crate::types::FormObject;

/// A validator for one form shape.
pub trait Validator {
    /// Form object this validator checks.
    type Target: FormObject;

    /// Name used in logs and in [`CoreError::UnsupportedType`].
    fn name(&self) -> &'static str;

    /// Whether this validator handles collectors bound to `object_name`.
    fn supports(&self, object_name: &str) -> bool {
        object_name == <Self::Target as FormObject>::OBJECT_NAME
    }

    /// Checks `target` and appends failures to `errors`.
    ///
    /// ## Errors
    /// Returns [`CoreError::UnsupportedType`] when `errors` is bound to an
    /// object this validator does not support. Nothing is appended then.
    fn validate(&self, target: &Self::Target, errors: &mut Errors) -> CoreResult<()> {
        if !self.supports(errors.object_name()) {
            return Err(CoreError::UnsupportedType {
                object_name: errors.object_name().to_string(),
                validator: self.name(),
            });
        }

        self.check(target, errors);
        Ok(())
    }

    /// Runs the rules. Only called once the type gate has passed.
    fn check(&self, target: &Self::Target, errors: &mut Errors);
}

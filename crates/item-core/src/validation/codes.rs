//! # Message Codes
//!
//! Expands an error code into the list of message keys a downstream message
//! source should try, most specific first.
//!
//! ## Resolution Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Field error: code=range, object=item, field=price (integer)           │
//! │                                                                         │
//! │     PREFIX (default)          POSTFIX                                   │
//! │     ────────────────          ───────                                   │
//! │  1. range.item.price          item.price.range                          │
//! │  2. range.price               price.range                               │
//! │  3. range.integer             integer.range                             │
//! │  4. range                     range                                     │
//! │                                                                         │
//! │  Object error: code=totalPriceMin, object=item                          │
//! │                                                                         │
//! │  1. totalPriceMin.item        item.totalPriceMin                        │
//! │  2. totalPriceMin             totalPriceMin                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A message bundle can then define `range.item.price` for a form-specific
//! wording and fall back to plain `range` everywhere else.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::FieldType;

// =============================================================================
// Code Format
// =============================================================================

/// Where the error code goes in a resolved message key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeFormat {
    /// `code.object.field`
    #[default]
    Prefix,
    /// `object.field.code`
    Postfix,
}

impl std::fmt::Display for CodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodeFormat::Prefix => write!(f, "prefix"),
            CodeFormat::Postfix => write!(f, "postfix"),
        }
    }
}

impl std::str::FromStr for CodeFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "prefix" => Ok(CodeFormat::Prefix),
            "postfix" => Ok(CodeFormat::Postfix),
            other => Err(CoreError::UnknownCodeFormat(other.to_string())),
        }
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Builds message keys for field and object errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageCodesResolver {
    format: CodeFormat,
}

impl MessageCodesResolver {
    pub fn new(format: CodeFormat) -> Self {
        MessageCodesResolver { format }
    }

    pub fn format(&self) -> CodeFormat {
        self.format
    }

    /// Keys for an error on a single field.
    pub fn resolve_field_codes(
        &self,
        code: &str,
        object_name: &str,
        field: &str,
        field_type: Option<FieldType>,
    ) -> Vec<String> {
        let mut codes = Vec::with_capacity(4);
        codes.push(self.join(code, &format!("{object_name}.{field}")));
        codes.push(self.join(code, field));
        if let Some(field_type) = field_type {
            codes.push(self.join(code, field_type.as_str()));
        }
        codes.push(code.to_string());
        codes
    }

    /// Keys for an object-level error.
    pub fn resolve_object_codes(&self, code: &str, object_name: &str) -> Vec<String> {
        vec![self.join(code, object_name), code.to_string()]
    }

    fn join(&self, code: &str, qualifier: &str) -> String {
        match self.format {
            CodeFormat::Prefix => format!("{code}.{qualifier}"),
            CodeFormat::Postfix => format!("{qualifier}.{code}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_field_codes() {
        let resolver = MessageCodesResolver::default();
        assert_eq!(
            resolver.resolve_field_codes("range", "item", "price", Some(FieldType::Integer)),
            vec!["range.item.price", "range.price", "range.integer", "range"]
        );
    }

    #[test]
    fn test_field_codes_without_type() {
        let resolver = MessageCodesResolver::default();
        assert_eq!(
            resolver.resolve_field_codes("required", "item", "itemName", None),
            vec!["required.item.itemName", "required.itemName", "required"]
        );
    }

    #[test]
    fn test_postfix_codes() {
        let resolver = MessageCodesResolver::new(CodeFormat::Postfix);
        assert_eq!(
            resolver.resolve_field_codes("max", "item", "quantity", Some(FieldType::Integer)),
            vec!["item.quantity.max", "quantity.max", "integer.max", "max"]
        );
        assert_eq!(
            resolver.resolve_object_codes("totalPriceMin", "item"),
            vec!["item.totalPriceMin", "totalPriceMin"]
        );
    }

    #[test]
    fn test_object_codes() {
        let resolver = MessageCodesResolver::default();
        assert_eq!(
            resolver.resolve_object_codes("totalPriceMin", "item"),
            vec!["totalPriceMin.item", "totalPriceMin"]
        );
    }

    #[test]
    fn test_code_format_display_parses_back() {
        for format in [CodeFormat::Prefix, CodeFormat::Postfix] {
            assert_eq!(format.to_string().parse::<CodeFormat>().unwrap(), format);
        }
        assert_eq!(CodeFormat::Postfix.to_string(), "postfix");
        assert_eq!(
            MessageCodesResolver::new(CodeFormat::Postfix).format(),
            CodeFormat::Postfix
        );
    }

    #[test]
    fn test_code_format_parsing() {
        assert_eq!("prefix".parse::<CodeFormat>().unwrap(), CodeFormat::Prefix);
        assert_eq!(" POSTFIX ".parse::<CodeFormat>().unwrap(), CodeFormat::Postfix);
        assert!(matches!(
            "suffix".parse::<CodeFormat>(),
            Err(CoreError::UnknownCodeFormat(_))
        ));
    }
}

//! # Item Validator
//!
//! Field and cross-field rules for the item form.
//!
//! ## Rules (in order, all of them always run)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  #  Rule                         Fails when                 Error      │
//! │  ─  ───────────────────────────  ─────────────────────────  ─────────  │
//! │  1  itemName present             None / "" / whitespace     required   │
//! │  2  price in range               None / < 1000 / > 1000000  range      │
//! │  3  quantity below max           None / >= 9999             max        │
//! │  4  total price (object level)   price×quantity < 10000     totalPrice │
//! │                                  (only when both Some)      Min        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Boundary Asymmetry
//! The price upper bound is inclusive (1,000,000 passes) while the quantity
//! bound is exclusive (9999 fails). Both are kept as they are.

use tracing::debug;

use super::codes::{CodeFormat, MessageCodesResolver};
use super::errors::{ErrorArg, Errors};
use super::Validator;
use crate::error::CoreResult;
use crate::policy::ItemPolicy;
use crate::types::Item;

/// Code for a missing or blank field.
pub const REQUIRED: &str = "required";
/// Code for a value outside `[min, max]`.
pub const RANGE: &str = "range";
/// Code for a value at or above a maximum.
pub const MAX: &str = "max";
/// Code for a total price below the minimum.
pub const TOTAL_PRICE_MIN: &str = "totalPriceMin";

/// Validator for [`Item`] forms.
///
/// Holds only immutable settings, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItemValidator {
    policy: ItemPolicy,
    resolver: MessageCodesResolver,
}

impl ItemValidator {
    /// Creates a validator with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with custom thresholds.
    ///
    /// ## Errors
    /// [`CoreError::InvalidPolicy`](crate::CoreError::InvalidPolicy) when the
    /// thresholds contradict each other.
    pub fn with_policy(policy: ItemPolicy) -> CoreResult<Self> {
        policy.validate()?;
        Ok(ItemValidator {
            policy,
            resolver: MessageCodesResolver::default(),
        })
    }

    /// Uses `format` for collectors created by [`ItemValidator::validate_item`].
    pub fn with_code_format(mut self, format: CodeFormat) -> Self {
        self.resolver = MessageCodesResolver::new(format);
        self
    }

    pub fn policy(&self) -> &ItemPolicy {
        &self.policy
    }

    /// Message code format used by [`ItemValidator::validate_item`].
    pub fn code_format(&self) -> CodeFormat {
        self.resolver.format()
    }

    /// Validates `item` into a fresh collector bound to `"item"`.
    ///
    /// ## Example
    /// ```rust
    /// use item_core::{Item, ItemValidator};
    ///
    /// let errors = ItemValidator::new().validate_item(&Item::new("Book", Some(2000), Some(10)));
    /// assert!(!errors.has_errors());
    /// ```
    pub fn validate_item(&self, item: &Item) -> Errors {
        let mut errors = Errors::for_object::<Item>().with_resolver(self.resolver);
        self.check(item, &mut errors);
        errors
    }

    fn check_item_name(&self, item: &Item, errors: &mut Errors) {
        if !has_text(item.item_name.as_deref()) {
            errors.reject_value(
                Item::ITEM_NAME,
                REQUIRED,
                Vec::new(),
                item.item_name.clone().map(ErrorArg::from),
            );
        }
    }

    fn check_price(&self, item: &Item, errors: &mut Errors) {
        let ItemPolicy {
            min_price,
            max_price,
            ..
        } = self.policy;
        let in_range = matches!(item.price, Some(price) if price >= min_price && price <= max_price);

        if !in_range {
            errors.reject_value(
                Item::PRICE,
                RANGE,
                vec![min_price.into(), max_price.into()],
                item.price.map(ErrorArg::from),
            );
        }
    }

    fn check_quantity(&self, item: &Item, errors: &mut Errors) {
        let max_quantity = self.policy.max_quantity;
        let below_max = matches!(item.quantity, Some(quantity) if quantity < max_quantity);

        if !below_max {
            errors.reject_value(
                Item::QUANTITY,
                MAX,
                vec![max_quantity.into()],
                item.quantity.map(ErrorArg::from),
            );
        }
    }

    fn check_total_price(&self, item: &Item, errors: &mut Errors) {
        // Skipped entirely when either operand is absent
        let Some(total) = item.total_price() else {
            return;
        };

        let min_total = self.policy.min_total_price;
        if total < min_total {
            errors.reject(TOTAL_PRICE_MIN, vec![min_total.into(), total.into()]);
        }
    }
}

impl Validator for ItemValidator {
    type Target = Item;

    fn name(&self) -> &'static str {
        "ItemValidator"
    }

    fn check(&self, item: &Item, errors: &mut Errors) {
        let before = errors.error_count();

        self.check_item_name(item, errors);
        self.check_price(item, errors);
        self.check_quantity(item, errors);
        self.check_total_price(item, errors);

        debug!(
            object = errors.object_name(),
            item_id = ?item.id,
            rejected = errors.error_count() - before,
            "item validated"
        );
    }
}

/// True when `value` contains at least one non-whitespace character, as
/// judged by [`is_form_whitespace`].
fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| s.chars().any(|c| !is_form_whitespace(c)))
}

/// Whitespace as the form binding layer sees it.
///
/// ## Differences from `char::is_whitespace`
/// ```text
/// U+00A0, U+2007, U+202F   no-break spaces    → text
/// U+0085                   next line          → text
/// U+001C ..= U+001F        information seps   → whitespace
/// ```
fn is_form_whitespace(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        _ => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn codes(errors: &Errors) -> Vec<(Option<&str>, &str)> {
        errors
            .all_errors()
            .iter()
            .map(|e| (e.field.as_deref(), e.code.as_str()))
            .collect()
    }

    fn item(name: Option<&str>, price: Option<i64>, quantity: Option<i64>) -> Item {
        Item {
            id: None,
            item_name: name.map(str::to_string),
            price,
            quantity,
        }
    }

    #[test]
    fn test_valid_item() {
        let errors = ItemValidator::new().validate_item(&item(Some("Book"), Some(2000), Some(10)));
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_item_name_required() {
        let validator = ItemValidator::new();
        for name in [
            None,
            Some(""),
            Some("   "),
            Some("\t\n"),
            Some("\u{1C}\u{1D}\u{1E}\u{1F}"),
            Some("\u{2003}\u{3000}\u{2028}"),
        ] {
            let errors = validator.validate_item(&item(name, Some(2000), Some(10)));
            assert_eq!(codes(&errors), vec![(Some("itemName"), "required")], "{name:?}");
            assert!(errors.all_errors()[0].args.is_empty());
        }
    }

    #[test]
    fn test_no_break_spaces_count_as_text() {
        let validator = ItemValidator::new();
        for name in ["\u{A0}", "\u{2007}", "\u{202F}", "\u{85}", " \u{A0} "] {
            let errors = validator.validate_item(&item(Some(name), Some(2000), Some(10)));
            assert!(!errors.has_errors(), "{name:?}");
        }
    }

    #[test]
    fn test_form_whitespace() {
        for c in [
            ' ', '\t', '\n', '\u{0B}', '\u{0C}', '\r', '\u{1C}', '\u{1F}', '\u{2000}', '\u{205F}',
        ] {
            assert!(is_form_whitespace(c), "{c:?}");
        }
        for c in ['a', '\u{A0}', '\u{2007}', '\u{202F}', '\u{85}', '\u{1B}', '\u{200B}'] {
            assert!(!is_form_whitespace(c), "{c:?}");
        }
    }

    #[test]
    fn test_price_bounds() {
        let validator = ItemValidator::new();
        for price in [1_000, 1_001, 500_000, 1_000_000] {
            let errors = validator.validate_item(&item(Some("Book"), Some(price), Some(100)));
            assert!(!errors.has_field_errors("price"), "{price}");
        }
        for price in [None, Some(999), Some(0), Some(-1), Some(1_000_001)] {
            let errors = validator.validate_item(&item(Some("Book"), price, Some(100)));
            let price_errors = errors.field_errors_for("price");
            assert_eq!(price_errors.len(), 1, "{price:?}");
            assert_eq!(price_errors[0].code, "range");
            assert_eq!(
                price_errors[0].args,
                vec![ErrorArg::Integer(1_000), ErrorArg::Integer(1_000_000)]
            );
            assert_eq!(price_errors[0].rejected_value, price.map(ErrorArg::Integer));
        }
    }

    #[test]
    fn test_quantity_bound_is_exclusive() {
        let validator = ItemValidator::new();
        for quantity in [0, 1, 9_998] {
            let errors = validator.validate_item(&item(Some("Book"), Some(1_000_000), Some(quantity)));
            assert!(!errors.has_field_errors("quantity"), "{quantity}");
        }
        for quantity in [None, Some(9_999), Some(10_000)] {
            let errors = validator.validate_item(&item(Some("Book"), Some(2000), quantity));
            let quantity_errors = errors.field_errors_for("quantity");
            assert_eq!(quantity_errors.len(), 1, "{quantity:?}");
            assert_eq!(quantity_errors[0].code, "max");
            assert_eq!(quantity_errors[0].args, vec![ErrorArg::Integer(9_999)]);
        }
    }

    #[test]
    fn test_total_price_min() {
        let errors = ItemValidator::new().validate_item(&item(Some("Book"), Some(1000), Some(5)));
        assert_eq!(codes(&errors), vec![(None, "totalPriceMin")]);
        assert_eq!(
            errors.all_errors()[0].args,
            vec![ErrorArg::Integer(10_000), ErrorArg::Integer(5_000)]
        );
        assert_eq!(errors.all_errors()[0].rejected_value, None);
    }

    #[test]
    fn test_total_price_boundary_is_inclusive() {
        let errors = ItemValidator::new().validate_item(&item(Some("Book"), Some(1000), Some(10)));
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_zero_quantity_is_present() {
        let errors = ItemValidator::new().validate_item(&item(Some("Book"), Some(2000), Some(0)));
        assert_eq!(codes(&errors), vec![(None, "totalPriceMin")]);
        assert_eq!(errors.all_errors()[0].args[1], ErrorArg::Integer(0));
    }

    #[test]
    fn test_total_skipped_when_operand_absent() {
        let validator = ItemValidator::new();

        let errors = validator.validate_item(&item(Some("Book"), None, Some(1)));
        assert!(!errors.has_global_errors());

        let errors = validator.validate_item(&item(Some("Book"), Some(1000), None));
        assert!(!errors.has_global_errors());
    }

    #[test]
    fn test_out_of_range_fields_still_feed_total() {
        let errors = ItemValidator::new().validate_item(&item(Some("Book"), Some(10), Some(10)));
        assert_eq!(codes(&errors), vec![(Some("price"), "range"), (None, "totalPriceMin")]);
    }

    #[test]
    fn test_overflowing_total_does_not_panic() {
        let validator = ItemValidator::new();

        let errors = validator.validate_item(&item(Some("Book"), Some(i64::MAX), Some(i64::MAX)));
        assert!(!errors.has_global_errors());

        let errors = validator.validate_item(&item(Some("Book"), Some(i64::MIN), Some(2)));
        let global = errors.global_errors();
        assert_eq!(global[0].args[1], ErrorArg::Integer(i64::MIN));
    }

    #[test]
    fn test_type_gate() {
        let validator = ItemValidator::new();
        assert!(validator.supports("item"));
        assert!(!validator.supports("order"));

        let mut errors = Errors::new("order");
        let result = validator.validate(&item(None, None, None), &mut errors);
        assert_eq!(
            result,
            Err(CoreError::UnsupportedType {
                object_name: "order".to_string(),
                validator: "ItemValidator",
            })
        );
        assert!(!errors.has_errors());
    }

    #[test]
    fn test_appends_to_existing_collector() {
        let mut errors = Errors::for_object::<Item>();
        errors.reject("duplicateItem", vec![]);

        ItemValidator::new()
            .validate(&item(None, Some(2000), Some(10)), &mut errors)
            .unwrap();

        assert_eq!(
            codes(&errors),
            vec![(None, "duplicateItem"), (Some("itemName"), "required")]
        );
    }

    #[test]
    fn test_custom_policy() {
        let policy = ItemPolicy {
            min_price: 10,
            max_price: 100,
            max_quantity: 5,
            min_total_price: 50,
        };
        let validator = ItemValidator::with_policy(policy).unwrap();

        let errors = validator.validate_item(&item(Some("Pen"), Some(100), Some(4)));
        assert!(!errors.has_errors());

        let errors = validator.validate_item(&item(Some("Pen"), Some(101), Some(5)));
        assert_eq!(codes(&errors), vec![(Some("price"), "range"), (Some("quantity"), "max")]);
        assert_eq!(
            errors.all_errors()[0].args,
            vec![ErrorArg::Integer(10), ErrorArg::Integer(100)]
        );
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let policy = ItemPolicy {
            min_price: 100,
            max_price: 10,
            ..ItemPolicy::default()
        };
        assert!(matches!(
            ItemValidator::with_policy(policy),
            Err(CoreError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_code_format() {
        assert_eq!(ItemValidator::new().code_format(), CodeFormat::Prefix);

        let validator = ItemValidator::new().with_code_format(CodeFormat::Postfix);
        assert_eq!(validator.code_format(), CodeFormat::Postfix);

        let errors = validator.validate_item(&item(Some("Book"), Some(1000), Some(5)));
        assert_eq!(
            errors.all_errors()[0].codes,
            vec!["item.totalPriceMin", "totalPriceMin"]
        );
    }
}

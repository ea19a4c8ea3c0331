//! # Item Policy
//!
//! Thresholds used by [`ItemValidator`](crate::ItemValidator).
//!
//! The defaults are the crate constants. A store can load different values
//! from configuration, but the comparison operators never change:
//!
//! ```text
//! price     : min_price <= price <= max_price     (both ends inclusive)
//! quantity  : quantity  <  max_quantity           (exclusive)
//! total     : price × quantity >= min_total_price (inclusive)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::{ITEM_MAX_PRICE, ITEM_MAX_QUANTITY, ITEM_MIN_PRICE, ITEM_MIN_TOTAL_PRICE};

/// Thresholds for the item rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPolicy {
    #[serde(default = "default_min_price")]
    pub min_price: i64,

    #[serde(default = "default_max_price")]
    pub max_price: i64,

    #[serde(default = "default_max_quantity")]
    pub max_quantity: i64,

    #[serde(default = "default_min_total_price")]
    pub min_total_price: i64,
}

fn default_min_price() -> i64 {
    ITEM_MIN_PRICE
}

fn default_max_price() -> i64 {
    ITEM_MAX_PRICE
}

fn default_max_quantity() -> i64 {
    ITEM_MAX_QUANTITY
}

fn default_min_total_price() -> i64 {
    ITEM_MIN_TOTAL_PRICE
}

impl Default for ItemPolicy {
    fn default() -> Self {
        ItemPolicy {
            min_price: default_min_price(),
            max_price: default_max_price(),
            max_quantity: default_max_quantity(),
            min_total_price: default_min_total_price(),
        }
    }
}

impl ItemPolicy {
    /// Checks that the thresholds can all be satisfied at once.
    ///
    /// ## Rules
    /// - `min_price` must not exceed `max_price`
    /// - `max_quantity` must be positive (otherwise no quantity passes)
    pub fn validate(&self) -> CoreResult<()> {
        if self.min_price > self.max_price {
            return Err(CoreError::InvalidPolicy(format!(
                "min_price ({}) exceeds max_price ({})",
                self.min_price, self.max_price
            )));
        }

        if self.max_quantity <= 0 {
            return Err(CoreError::InvalidPolicy(format!(
                "max_quantity must be positive, got {}",
                self.max_quantity
            )));
        }

        Ok(())
    }
}

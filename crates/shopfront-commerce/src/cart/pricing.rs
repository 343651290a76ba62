//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Per-line breakdown, in cart order.
    pub lines: Vec<LinePricing>,
    /// Sum of line subtotals.
    pub total: Money,
    /// Sum of quantities.
    pub unit_count: i64,
}

impl CartPricing {
    /// Check if nothing is priced.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LinePricing {
    /// Product on the line.
    pub product_id: ProductId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// unit_price * quantity.
    pub subtotal: Money,
}

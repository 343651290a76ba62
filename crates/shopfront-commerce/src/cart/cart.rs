//! Cart and line item types.

use crate::cart::{CartPricing, LinePricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Lines are kept in insertion order and are unique by product id. Every
/// line has a quantity of at least 1; a line is only ever removed
/// explicitly.
///
/// Serialize-only: a cart is built through [`Cart::add`] and
/// [`Cart::set_quantity`] so those rules always hold.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `product.id`, or appends a new line
    /// with quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(
                product_id = %product.id,
                quantity = line.quantity,
                "incremented cart line"
            );
            return;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        tracing::debug!(product_id = %product.id, lines = self.lines.len(), "added cart line");
    }

    /// Remove the line for a product.
    ///
    /// Returns `false` if no line matched.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product.id != product_id);
        let removed = self.lines.len() < len_before;
        if removed {
            tracing::debug!(%product_id, "removed cart line");
        }
        removed
    }

    /// Replace the quantity of a line.
    ///
    /// Quantities below 1 are rejected and leave the cart unchanged; use
    /// [`Cart::remove`] to drop a line. Returns `Ok(false)` if no line
    /// matched.
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity < 1 {
            tracing::debug!(%product_id, quantity, "rejected quantity update");
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        match self.lines.iter_mut().find(|l| l.product.id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                tracing::debug!(%product_id, quantity, "updated cart line");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Sum of `price * quantity` over all lines.
    ///
    /// Saturates instead of overflowing; see [`Cart::calculate_pricing`]
    /// for the checked form.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Number of distinct lines.
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines, saturating at `i64::MAX`.
    pub fn unit_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether checkout can be started.
    pub fn can_checkout(&self) -> bool {
        !self.is_empty()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product.id == product_id)
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Calculate cart pricing.
    ///
    /// Returns error if arithmetic overflow occurs.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| {
                let subtotal = line
                    .product
                    .price
                    .checked_mul(line.quantity)
                    .ok_or(CommerceError::Overflow)?;
                Ok(LinePricing {
                    product_id: line.product.id,
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    subtotal,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let total = Money::checked_sum(lines.iter().map(|l| &l.subtotal))
            .ok_or(CommerceError::Overflow)?;
        let unit_count = lines
            .iter()
            .try_fold(0i64, |acc, l| acc.checked_add(l.quantity))
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            lines,
            total,
            unit_count,
        })
    }
}

/// A line item in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartLine {
    /// Product being purchased.
    pub product: Product,
    /// Quantity, at least 1.
    pub quantity: i64,
}

impl CartLine {
    /// Price of the line (unit price * quantity).
    pub fn subtotal(&self) -> Money {
        self.product.price * self.quantity
    }
}

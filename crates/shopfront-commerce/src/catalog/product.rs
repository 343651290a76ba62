//! Product type.

use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are immutable once the catalog is built; cart lines hold
/// their own copy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title, also the field searched against.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Image path or URL.
    pub image: String,
}

impl Product {
    /// Create a new product.
    ///
    /// Returns an error if the price is negative.
    pub fn new(
        id: u32,
        title: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        let id = ProductId::new(id);
        if price.is_negative() {
            return Err(CommerceError::NegativePrice {
                product_id: id,
                amount_cents: price.amount_cents,
            });
        }
        Ok(Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
        })
    }

    /// Format the price for display.
    pub fn price_display(&self) -> String {
        self.price.display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_creation() {
        let p = Product::new(1, "Naruto T-Shirt 1", Money::new(30000), "/img.png").unwrap();
        assert_eq!(p.id, ProductId::new(1));
        assert_eq!(p.title, "Naruto T-Shirt 1");
        assert_eq!(p.price_display(), "$300.00");
    }

    #[test]
    fn test_free_product_allowed() {
        assert!(Product::new(1, "Sticker", Money::zero(), "").is_ok());
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Product::new(9, "Broken", Money::new(-1), "").unwrap_err();
        assert_eq!(
            err,
            CommerceError::NegativePrice {
                product_id: ProductId::new(9),
                amount_cents: -1,
            }
        );
    }
}

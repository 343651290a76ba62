//! Static catalog source.

use std::collections::HashSet;

use crate::catalog::Product;
use crate::config::CatalogSeed;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// An ordered, immutable list of products, unique by id.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a list of products.
    ///
    /// Returns an error if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Generate the catalog described by a seed.
    ///
    /// Products get ids `1..=count` and titles `"{title_prefix} {id}"`.
    pub fn generate(seed: &CatalogSeed) -> Result<Self, CommerceError> {
        let price = Money::new(seed.price_cents);
        let products = (1..=seed.count)
            .map(|n| {
                Product::new(
                    n,
                    format!("{} {}", seed.title_prefix, n),
                    price,
                    seed.image.clone(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = products.len(), "generated catalog");
        Self::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Iterate over products in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_seed() {
        let catalog = Catalog::generate(&CatalogSeed::default()).unwrap();
        assert_eq!(catalog.len(), 12);

        let first = &catalog.products()[0];
        assert_eq!(first.id, ProductId::new(1));
        assert_eq!(first.title, "Naruto T-Shirt 1");
        assert_eq!(first.price, Money::new(30000));
        assert_eq!(first.image, "/api/placeholder/200/200");

        assert_eq!(catalog.products()[11].title, "Naruto T-Shirt 12");
    }

    #[test]
    fn test_generate_empty() {
        let seed = CatalogSeed {
            count: 0,
            ..CatalogSeed::default()
        };
        assert!(Catalog::generate(&seed).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Product::new(1, "A", Money::new(100), "").unwrap();
        let b = Product::new(1, "B", Money::new(200), "").unwrap();
        assert_eq!(
            Catalog::new(vec![a, b]).unwrap_err(),
            CommerceError::DuplicateProduct(ProductId::new(1))
        );
    }

    #[test]
    fn test_get() {
        let catalog = Catalog::generate(&CatalogSeed::default()).unwrap();
        assert_eq!(catalog.get(ProductId::new(5)).unwrap().title, "Naruto T-Shirt 5");
        assert!(catalog.get(ProductId::new(99)).is_none());
    }
}

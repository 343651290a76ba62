//! Search state.

use crate::catalog::Product;
use crate::search::filter_catalog;
use serde::{Deserialize, Serialize};

/// The current search term.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    /// Create a query for a term.
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into() }
    }

    /// The raw term as typed.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Replace the term. Returns whether it changed.
    pub fn set_term(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.term {
            return false;
        }
        self.term = term;
        true
    }

    /// Check if the term is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Apply the query to a product list.
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        filter_catalog(products, &self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_default_is_empty() {
        let query = SearchQuery::default();
        assert!(query.is_empty());
        assert_eq!(query.term(), "");
    }

    #[test]
    fn test_set_term_reports_change() {
        let mut query = SearchQuery::default();
        assert!(query.set_term("shirt"));
        assert!(!query.set_term("shirt"));
        assert!(query.set_term(""));
        assert!(query.is_empty());
    }

    #[test]
    fn test_filter() {
        let products = vec![
            Product::new(1, "Red Shirt", Money::new(100), "").unwrap(),
            Product::new(2, "Blue Cap", Money::new(100), "").unwrap(),
        ];
        let query = SearchQuery::new("shirt");
        let matched = query.filter(&products);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id.get(), 1);
    }
}

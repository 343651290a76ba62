//! Storefront state.
//!
//! [`Storefront`] owns everything the page renders from: the catalog, the
//! search term, the current page and the cart. The view never writes those
//! fields directly; it turns each user interaction into an [`Action`] and
//! hands it to [`Storefront::dispatch`].

use std::num::NonZeroUsize;

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::config::StorefrontConfig;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Money;
use crate::search::{paginate, total_pages, PageState, Pagination, SearchQuery, SearchResults};
use serde::{Deserialize, Serialize};

/// A user interaction the storefront reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Search box changed.
    Search { term: String },
    /// Page button clicked.
    GoToPage { page: usize },
    /// Next-page arrow clicked.
    NextPage,
    /// Previous-page arrow clicked.
    PrevPage,
    /// Add-to-cart button clicked on a product card.
    AddToCart { product_id: ProductId },
    /// Remove button clicked on a cart line.
    RemoveFromCart { product_id: ProductId },
    /// Quantity -/+ clicked on a cart line.
    SetQuantity { product_id: ProductId, quantity: i64 },
}

/// The complete state behind the storefront page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    catalog: Catalog,
    search: SearchQuery,
    page: PageState,
    cart: Cart,
}

impl Storefront {
    /// Create a storefront over a catalog, on page 1 with an empty cart.
    pub fn new(catalog: Catalog, page_size: NonZeroUsize) -> Self {
        Self {
            catalog,
            search: SearchQuery::default(),
            page: PageState::new(page_size),
            cart: Cart::new(),
        }
    }

    /// Seed the catalog and page size from configuration.
    pub fn from_config(config: &StorefrontConfig) -> Result<Self, CommerceError> {
        config.validate()?;
        let catalog = Catalog::generate(&config.catalog)?;
        Ok(Self::new(catalog, config.page_size_nonzero()?))
    }

    /// Apply one user action.
    ///
    /// Only cart actions can fail: adding an id that is not in the catalog,
    /// or setting a quantity below 1. A failed action leaves the state
    /// unchanged.
    pub fn dispatch(&mut self, action: Action) -> Result<(), CommerceError> {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::Search { term } => self.search(term),
            Action::GoToPage { page } => {
                self.go_to_page(page);
            }
            Action::NextPage => {
                self.next_page();
            }
            Action::PrevPage => {
                self.prev_page();
            }
            Action::AddToCart { product_id } => self.add_to_cart(product_id)?,
            Action::RemoveFromCart { product_id } => {
                self.remove_from_cart(product_id);
            }
            Action::SetQuantity {
                product_id,
                quantity,
            } => {
                self.set_quantity(product_id, quantity)?;
            }
        }
        Ok(())
    }

    // Search and pagination

    /// Set the search term and go back to page 1.
    pub fn search(&mut self, term: impl Into<String>) {
        self.search.set_term(term);
        self.page.reset();
    }

    /// Jump to a page, clamped to the pages available for the current term.
    pub fn go_to_page(&mut self, page: usize) -> usize {
        let total = self.total_pages();
        self.page.go_to(page, total)
    }

    /// Advance one page, stopping at the last.
    pub fn next_page(&mut self) -> usize {
        let total = self.total_pages();
        self.page.next(total)
    }

    /// Go back one page, stopping at the first.
    pub fn prev_page(&mut self) -> usize {
        self.page.prev()
    }

    // Cart

    /// Add one unit of a catalog product to the cart.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> Result<(), CommerceError> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CommerceError::ProductNotFound(product_id))?;
        self.cart.add(product);
        Ok(())
    }

    /// Remove a product's line from the cart. Returns `false` if absent.
    pub fn remove_from_cart(&mut self, product_id: ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Set a cart line's quantity; see [`Cart::set_quantity`].
    pub fn set_quantity(
        &mut self,
        product_id: ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        self.cart.set_quantity(product_id, quantity)
    }

    // Reads

    /// The full catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current search term.
    pub fn search_term(&self) -> &str {
        self.search.term()
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Products matching the current term, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        self.search.filter(self.catalog.products())
    }

    /// Pages available for the current term.
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered().len(), self.page.page_size())
    }

    /// Current 1-indexed page.
    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    /// Products per page.
    pub fn page_size(&self) -> usize {
        self.page.page_size()
    }

    /// Pagination summary for the current page.
    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.current_page(), self.page_size(), self.filtered().len())
    }

    /// Products on the current page.
    pub fn page_items(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        paginate(&filtered, self.current_page(), self.page_size()).to_vec()
    }

    /// The current page with its pagination summary, detached from `self`.
    pub fn results(&self) -> SearchResults<Product> {
        let filtered = self.filtered();
        let pagination = Pagination::new(self.current_page(), self.page_size(), filtered.len());
        let items = paginate(&filtered, self.current_page(), self.page_size())
            .iter()
            .map(|p| (*p).clone())
            .collect();
        SearchResults::new(items, pagination)
    }

    /// Cart total.
    pub fn cart_total(&self) -> Money {
        self.cart.total()
    }

    /// Number shown on the cart badge: distinct products in the cart.
    pub fn badge_count(&self) -> usize {
        self.cart.count()
    }
}

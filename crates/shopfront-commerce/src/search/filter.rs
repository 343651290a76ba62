//! Case-insensitive title filter.

use crate::catalog::Product;

/// Check whether `title` contains `needle`, ignoring case.
///
/// `needle` must already be lowercased.
fn title_matches(title: &str, needle: &str) -> bool {
    needle.is_empty() || title.to_lowercase().contains(needle)
}

/// The products whose title contains `term`, ignoring case.
///
/// An empty term matches every product. Catalog order is preserved.
pub fn filter_catalog<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    let needle = term.to_lowercase();
    let matched: Vec<&Product> = products
        .iter()
        .filter(|p| title_matches(&p.title, &needle))
        .collect();
    tracing::trace!(term, matched = matched.len(), total = products.len(), "filtered catalog");
    matched
}

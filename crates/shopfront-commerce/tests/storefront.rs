use std::num::NonZeroUsize;

use shopfront_commerce::prelude::*;

fn item_catalog(count: u32) -> Catalog {
    let seed = CatalogSeed {
        count,
        title_prefix: "Item".to_string(),
        price_cents: 1000,
        image: "/api/placeholder/200/200".to_string(),
    };
    Catalog::generate(&seed).unwrap()
}

fn titles(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.title.clone()).collect()
}

#[test]
fn twelve_items_paginate_eight_then_four() {
    let mut store = Storefront::new(item_catalog(12), NonZeroUsize::new(8).unwrap());

    assert_eq!(store.total_pages(), 2);
    assert_eq!(
        titles(&store.page_items()),
        (1..=8).map(|n| format!("Item {n}")).collect::<Vec<_>>()
    );

    store.dispatch(Action::GoToPage { page: 2 }).unwrap();
    assert_eq!(
        titles(&store.page_items()),
        vec!["Item 9", "Item 10", "Item 11", "Item 12"]
    );
}

#[test]
fn search_narrows_to_one_page_and_resets() {
    let mut store = Storefront::new(item_catalog(12), NonZeroUsize::new(8).unwrap());
    store.dispatch(Action::GoToPage { page: 2 }).unwrap();

    store
        .dispatch(Action::Search {
            term: "Item 1".to_string(),
        })
        .unwrap();

    assert_eq!(store.current_page(), 1);
    assert_eq!(store.total_pages(), 1);
    assert_eq!(
        titles(&store.page_items()),
        vec!["Item 1", "Item 10", "Item 11", "Item 12"]
    );
}

#[test]
fn search_is_case_insensitive() {
    let mut store = Storefront::new(item_catalog(3), NonZeroUsize::new(8).unwrap());
    store.search("iTeM 2");
    assert_eq!(titles(&store.page_items()), vec!["Item 2"]);
}

#[test]
fn zero_match_search_hides_pages() {
    let mut store = Storefront::new(item_catalog(12), NonZeroUsize::new(8).unwrap());
    store.search("hoodie");

    let results = store.results();
    assert!(results.is_empty());
    assert_eq!(results.pagination.total_pages, 0);
    assert!(results.pagination.page_numbers().is_empty());

    store.search("");
    assert_eq!(store.total_pages(), 2);
}

#[test]
fn search_resets_page_even_when_old_page_still_valid() {
    let mut store = Storefront::new(item_catalog(20), NonZeroUsize::new(4).unwrap());
    store.go_to_page(3);
    store.search("item");
    assert_eq!(store.total_pages(), 5);
    assert_eq!(store.current_page(), 1);
}

#[test]
fn cart_total_for_mixed_prices() {
    let a = Product::new(1, "Product A", Money::new(1000), "").unwrap();
    let b = Product::new(2, "Product B", Money::new(500), "").unwrap();
    let catalog = Catalog::new(vec![a, b]).unwrap();
    let mut store = Storefront::new(catalog, NonZeroUsize::new(8).unwrap());

    store.add_to_cart(ProductId::new(1)).unwrap();
    store.add_to_cart(ProductId::new(1)).unwrap();
    store.add_to_cart(ProductId::new(2)).unwrap();

    assert_eq!(store.cart().count(), 2);
    assert_eq!(store.cart_total(), Money::new(2500));
    assert_eq!(store.cart_total().display(), "$25.00");
}

#[test]
fn badge_counts_distinct_products() {
    let mut store = Storefront::new(item_catalog(4), NonZeroUsize::new(8).unwrap());
    store.add_to_cart(ProductId::new(1)).unwrap();
    store.add_to_cart(ProductId::new(1)).unwrap();
    store.add_to_cart(ProductId::new(2)).unwrap();

    assert_eq!(store.badge_count(), 2);
    assert_eq!(store.cart().unit_count(), 3);
}

#[test]
fn cart_survives_search_and_paging() {
    let mut store = Storefront::new(item_catalog(12), NonZeroUsize::new(8).unwrap());
    store.add_to_cart(ProductId::new(12)).unwrap();
    store.search("nothing matches");
    store.next_page();

    assert_eq!(store.cart().get(ProductId::new(12)).unwrap().quantity, 1);
}

//! Application components.

use leptos::prelude::*;
use leptos_meta::*;
use shopfront_commerce::cart::CartLine;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::{Action, CommerceError, Storefront, StorefrontConfig};

const CONFIG: &str = include_str!("../shopfront.toml");

// ============================================================================
// State
// ============================================================================

/// Parse the bundled config, falling back to defaults when it is invalid.
fn load_config(source: &str) -> StorefrontConfig {
    StorefrontConfig::from_toml_str(source).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid shopfront.toml, using defaults");
        StorefrontConfig::default()
    })
}

fn load_storefront() -> Result<Storefront, CommerceError> {
    Storefront::from_config(&load_config(CONFIG))
}

/// Apply an action to the shared state.
///
/// Rejected actions (a quantity dropping below 1) leave the state as it
/// was and are not reported to the user.
fn dispatch(store: RwSignal<Storefront>, action: Action) {
    store.update(|s| {
        if let Err(e) = s.dispatch(action) {
            tracing::debug!(error = %e, "action ignored");
        }
    });
}

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let body = match load_storefront() {
        Ok(store) => view! { <Shop store=store/> }.into_any(),
        Err(e) => view! {
            <p style="color: red;">"Error loading storefront: " {e.to_string()}</p>
        }
        .into_any(),
    };

    view! {
        <Meta name="description" content="Anime T-shirts for true fans"/>
        <Title text="Anime Website"/>
        {body}
    }
}

#[component]
fn Shop(store: Storefront) -> impl IntoView {
    let store = RwSignal::new(store);
    // The one piece of state the core does not own.
    let cart_open = RwSignal::new(false);

    view! {
        <div class="page">
            <Header store=store cart_open=cart_open/>
            <Hero/>
            <main class="container">
                <Description/>
                <ProductSection store=store cart_open=cart_open/>
                <PaginationControls store=store/>
            </main>
            <Footer/>
            <CartDrawer store=store cart_open=cart_open/>
            <Overlay cart_open=cart_open/>
        </div>
    }
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header(store: RwSignal<Storefront>, cart_open: RwSignal<bool>) -> impl IntoView {
    let badge = move || store.with(|s| s.badge_count());

    view! {
        <header class="site-header">
            <div class="container header-row">
                <span class="logo">"Logo"</span>
                <button
                    class="cart-button"
                    on:click=move |_| cart_open.update(|open| *open = !*open)
                >
                    <span class="icon">"\u{1f6d2}"</span>
                    {move || {
                        let count = badge();
                        (count > 0)
                            .then(|| view! { <span class="badge">{count.to_string()}</span> })
                    }}
                </button>
            </div>
        </header>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="hero container">
            <img src="/1686273830257.png" alt="Naruto Banner"/>
            <div class="hero-overlay">
                <h1>"Welcome to Anime Website"</h1>
                <a href="#products" class="btn btn-round">"Shopping Now"</a>
            </div>
        </div>
    }
}

#[component]
fn Description() -> impl IntoView {
    view! {
        <div class="description">
            <h2>"Welcome to Anime Website T-Shirts!"</h2>
            <p>
                "Discover our collection of t-shirts inspired by your favourite anime. "
                "Designed for true fans, with a modern cut, comfortable fabric and designs "
                "that capture the characters and scenes you love."
            </p>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="container footer-row">
                <span class="logo">"Logo"</span>
                <div class="social">
                    <img src="/api/placeholder/24/24" alt="Social"/>
                    <img src="/api/placeholder/24/24" alt="Social"/>
                    <p>"Copyright \u{a9} 2024"</p>
                </div>
            </div>
        </footer>
    }
}

// ============================================================================
// Product Components
// ============================================================================

#[component]
fn ProductSection(store: RwSignal<Storefront>, cart_open: RwSignal<bool>) -> impl IntoView {
    let term = move || store.with(|s| s.search_term().to_string());

    view! {
        <section id="products" class="products-section">
            <div class="products-header">
                <h3>"All Product"</h3>
                <div class="search">
                    <input
                        type="text"
                        placeholder="Search products..."
                        prop:value=term
                        on:input=move |ev| {
                            dispatch(store, Action::Search { term: event_target_value(&ev) })
                        }
                    />
                    <span class="search-icon">"\u{1f50d}"</span>
                </div>
            </div>
            {move || {
                let results = store.with(|s| s.results());
                if results.pagination.total == 0 {
                    view! {
                        <div class="no-results">"No products found matching your search."</div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="products">
                            {results
                                .items
                                .into_iter()
                                .map(|product| view! {
                                    <ProductCard product=product store=store cart_open=cart_open/>
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProductCard(
    product: Product,
    store: RwSignal<Storefront>,
    cart_open: RwSignal<bool>,
) -> impl IntoView {
    let product_id = product.id;
    let price = product.price_display();
    let title = product.title.clone();
    let alt = product.title;
    let image = product.image;

    view! {
        <div class="product-card">
            <img src=image alt=alt/>
            <div class="product-info">
                <div class="product-title-row">
                    <h4>{title}</h4>
                    <span class="price">{price}</span>
                </div>
                <button
                    class="btn"
                    on:click=move |_| {
                        dispatch(store, Action::AddToCart { product_id });
                        cart_open.set(true);
                    }
                >
                    "\u{1f6d2} Shopping Now"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PaginationControls(store: RwSignal<Storefront>) -> impl IntoView {
    move || {
        let pagination = store.with(|s| s.pagination());
        pagination.has_pages().then(|| {
            let current = pagination.page;
            let buttons = pagination
                .page_numbers()
                .into_iter()
                .map(|page| {
                    let class = if page == current { "page current" } else { "page" };
                    view! {
                        <button
                            class=class
                            on:click=move |_| dispatch(store, Action::GoToPage { page })
                        >
                            {page.to_string()}
                        </button>
                    }
                })
                .collect::<Vec<_>>();

            view! {
                <div class="pagination">
                    <button
                        class="page-arrow"
                        disabled=pagination.is_first()
                        on:click=move |_| dispatch(store, Action::PrevPage)
                    >
                        "\u{2039}"
                    </button>
                    <div class="page-numbers">{buttons}</div>
                    <button
                        class="page-arrow"
                        disabled=pagination.is_last()
                        on:click=move |_| dispatch(store, Action::NextPage)
                    >
                        "\u{203a}"
                    </button>
                </div>
            }
        })
    }
}

// ============================================================================
// Cart Components
// ============================================================================

#[component]
fn CartDrawer(store: RwSignal<Storefront>, cart_open: RwSignal<bool>) -> impl IntoView {
    let drawer_class = move || if cart_open.get() { "cart-drawer open" } else { "cart-drawer" };
    let count = move || store.with(|s| s.badge_count()).to_string();
    let total = move || store.with(|s| s.cart_total().display());
    let pay_disabled = move || store.with(|s| !s.cart().can_checkout());

    view! {
        <aside class=drawer_class>
            <div class="drawer-header">
                <h3>"Cart (" {count} ")"</h3>
                <button class="close" on:click=move |_| cart_open.set(false)>"\u{2715}"</button>
            </div>
            {move || {
                let lines = store.with(|s| s.cart().lines().to_vec());
                if lines.is_empty() {
                    view! { <p class="cart-empty">"Your cart is empty"</p> }.into_any()
                } else {
                    view! {
                        <div class="cart-lines">
                            {lines
                                .into_iter()
                                .map(|line| view! { <CartLineRow line=line store=store/> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                    .into_any()
                }
            }}
            <div class="drawer-footer">
                <div class="total-row">
                    <span>"Total:"</span>
                    <span>{total}</span>
                </div>
                // Checkout is not implemented; the button only reflects cart state.
                <button class="btn pay" disabled=pay_disabled>"Pay Now"</button>
            </div>
        </aside>
    }
}

#[component]
fn CartLineRow(line: CartLine, store: RwSignal<Storefront>) -> impl IntoView {
    let product_id = line.product.id;
    let quantity = line.quantity;
    let price = line.product.price_display();
    let title = line.product.title.clone();
    let alt = line.product.title;
    let image = line.product.image;

    view! {
        <div class="cart-line">
            <img src=image alt=alt/>
            <div class="cart-line-body">
                <h4>{title}</h4>
                <p class="price">{price}</p>
                <div class="quantity">
                    <button on:click=move |_| {
                        dispatch(store, Action::SetQuantity { product_id, quantity: quantity - 1 })
                    }>"-"</button>
                    <span>{quantity.to_string()}</span>
                    <button on:click=move |_| {
                        let quantity = quantity.saturating_add(1);
                        dispatch(store, Action::SetQuantity { product_id, quantity })
                    }>"+"</button>
                </div>
            </div>
            <button
                class="remove"
                on:click=move |_| dispatch(store, Action::RemoveFromCart { product_id })
            >
                "\u{2715}"
            </button>
        </div>
    }
}

#[component]
fn Overlay(cart_open: RwSignal<bool>) -> impl IntoView {
    move || {
        cart_open
            .get()
            .then(|| view! { <div class="overlay" on:click=move |_| cart_open.set(false)></div> })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = load_config(CONFIG);
        assert_eq!(config.page_size, 8);
        assert_eq!(config.catalog.count, 12);
        assert!(load_storefront().is_ok());
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        assert_eq!(load_config("page_size = 0"), StorefrontConfig::default());
        assert_eq!(load_config("page_size = \"eight\""), StorefrontConfig::default());
    }
}

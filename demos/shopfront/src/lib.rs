//! Shopfront storefront page.
//!
//! A single client-side rendered page: catalog grid with search and
//! pagination, and a cart drawer. All state lives in one
//! [`shopfront_commerce::Storefront`] held in a signal.

mod app;

pub use app::App;

/// Mount the storefront into the document body.
///
/// Log events go to the browser console at debug level and above.
pub fn mount() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(tracing::Level::DEBUG)
            .build(),
    );
    leptos::mount::mount_to_body(App);
}

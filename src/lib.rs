#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod catalog;
pub mod gallery;
pub mod profile;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use std::sync::Arc;

    use crate::{app::*, catalog::Catalog};
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    // already initialised on hot reload
    let _ = console_log::init_with_level(log::Level::Debug);

    let catalog = match Catalog::embedded() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            log::error!("couldn't load project catalog: {e}");
            return;
        }
    };
    leptos::mount::hydrate_body(move || {
        provide_context(catalog);
        view! { <App /> }
    });
}

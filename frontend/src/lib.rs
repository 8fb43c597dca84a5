use log::info;

pub mod api;
pub mod config;
pub mod location;

// Unit test modules only
#[cfg(test)]
mod tests;

pub use config::ApiBase;
pub use location::PageLocation;

/// Session startup: wire up console logging, install the panic hook and
/// resolve the backend origin once.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_api_layer() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();

    let base = ApiBase::current();
    info!("backend origin resolved: {}", base);
}

/// Native startup, used by tooling builds. The host process owns its
/// logger; this only pins the backend origin.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_api_layer() {
    let base = ApiBase::current();
    info!("backend origin resolved: {}", base);
}

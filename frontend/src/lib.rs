use wasm_bindgen::prelude::wasm_bindgen;

pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test_support;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialized: {}", err).into());
    }
    log::info!("Starting HRMS frontend (wasm)");

    // window.__HRMS_ENV takes precedence over ./config.json.
    // The client reads the resolved config while mounting.
    wasm_bindgen_futures::spawn_local(async move {
        let config = config::init().await;
        log::debug!("Runtime config initialized: {:?}", config);
        router::mount_app();
    });
}

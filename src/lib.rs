#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod element;
mod registry;

pub use element::ScrollTextElement;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-text starting");

    if let Err(e) = registry::define() {
        log::error!("define error: {:?}", e);
    }
    Ok(())
}

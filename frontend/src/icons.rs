use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{self, Function, Reflect};

/// Renders `data-lucide` placeholders if the icon library script is loaded.
///
/// Returns whether `lucide.createIcons()` was called.
pub fn create_icons() -> bool {
    let lucide = match Reflect::get(&js_sys::global(), &JsValue::from_str("lucide")) {
        Ok(lucide) if !lucide.is_undefined() && !lucide.is_null() => lucide,
        _ => {
            debug!("Icon library not loaded, skipping icons");
            return false;
        }
    };

    match Reflect::get(&lucide, &JsValue::from_str("createIcons"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
    {
        Some(create) => create.call0(&lucide).is_ok(),
        None => {
            debug!("Icon library has no createIcons");
            false
        }
    }
}

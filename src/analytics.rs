use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

fn umami_loaded() -> bool {
    js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Track a custom event in Umami analytics.
/// Fails silently if the script never loaded (e.g., blocked by an adblocker).
pub fn track_event(event: &str) {
    if umami_loaded() {
        umami_track(event);
    }
}

//! Browser Commands
//!
//! History and window bindings used by the router.

use wasm_bindgen::JsValue;
use crate::routes::Route;

fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "no window".to_string())
}

fn history() -> Result<web_sys::History, String> {
    window()?.history().map_err(|e| format!("{:?}", e))
}

fn route_state(route: &Route) -> Result<JsValue, String> {
    serde_wasm_bindgen::to_value(route).map_err(|e| e.to_string())
}

/// Current `location.pathname`, `/` when unavailable
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().map_err(|e| format!("{:?}", e)))
        .unwrap_or_else(|_| "/".to_string())
}

/// Route stored in the current history entry, if any
pub fn current_state() -> Option<Route> {
    let state = history().ok()?.state().ok()?;
    route_from_state(state)
}

pub fn route_from_state(state: JsValue) -> Option<Route> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value(state).ok()
}

pub fn push_route(route: &Route) -> Result<(), String> {
    let state = route_state(route)?;
    history()?
        .push_state_with_url(&state, "", Some(&route.path()))
        .map_err(|e| format!("{:?}", e))
}

pub fn replace_route(route: &Route) -> Result<(), String> {
    let state = route_state(route)?;
    history()?
        .replace_state_with_url(&state, "", Some(&route.path()))
        .map_err(|e| format!("{:?}", e))
}

pub fn history_back() -> Result<(), String> {
    history()?.back().map_err(|e| format!("{:?}", e))
}

pub fn print_page() -> Result<(), String> {
    window()?.print().map_err(|e| format!("{:?}", e))
}

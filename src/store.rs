//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::routes::Route;
use crate::toast::{ToastMessage, ToastQueue};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Page currently shown, with its navigation payload
    pub route: Route,
    /// Bumped on every page switch, including a switch to the same kind of page
    pub visit: u64,
    /// Visible toasts, newest first
    pub toasts: ToastQueue,
}

impl AppState {
    pub fn new(route: Route, toast_limit: usize) -> Self {
        Self {
            route,
            visit: 0,
            toasts: ToastQueue::new(toast_limit),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Switch page, starting a new visit
pub fn store_set_route(store: &AppStore, route: Route) {
    *store.route().write() = route;
    *store.visit().write() += 1;
}

pub fn store_visit(store: &AppStore) -> u64 {
    store.visit().get_untracked()
}

/// Whether no page switch happened since `visit` was read
pub fn store_is_current(store: &AppStore, visit: u64) -> bool {
    store_visit(store) == visit
}

/// Queue a toast, returning its id
pub fn store_push_toast(store: &AppStore, message: ToastMessage) -> u32 {
    store.toasts().write().push(message)
}

pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().dismiss(id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::{CustomerData, ServiceKind};

    fn customer() -> CustomerData {
        CustomerData {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            phone: "+91 90000 00000".into(),
        }
    }

    fn booking(service: ServiceKind, provider_index: usize) -> Route {
        Route::Booking {
            customer: customer(),
            service,
            provider: catalog::providers_for(service).remove(provider_index),
        }
    }

    fn new_store() -> AppStore {
        Store::new(AppState::new(Route::RoleSelection, 1))
    }

    #[test]
    fn test_revisiting_same_page_kind_is_a_new_visit() {
        let store = new_store();
        store_set_route(&store, booking(ServiceKind::Crane, 0));
        let started = store_visit(&store);

        store_set_route(&store, Route::ProviderListing { customer: customer(), service: ServiceKind::Towing });
        store_set_route(&store, booking(ServiceKind::Towing, 1));

        assert!(matches!(store.route().get_untracked(), Route::Booking { .. }));
        assert!(!store_is_current(&store, started));
    }

    #[test]
    fn test_same_route_again_is_a_new_visit() {
        let store = new_store();
        store_set_route(&store, Route::CustomerLogin);
        let started = store_visit(&store);
        store_set_route(&store, Route::CustomerLogin);
        assert!(!store_is_current(&store, started));
    }

    #[test]
    fn test_toasts_do_not_end_the_visit() {
        let store = new_store();
        store_set_route(&store, Route::ProviderRegister);
        let started = store_visit(&store);

        let id = store_push_toast(&store, ToastMessage::info("OTP Resent", "again"));
        store_dismiss_toast(&store, id);

        assert!(store_is_current(&store, started));
        assert!(store.toasts().with_untracked(|q| q.visible().is_empty()));
    }
}

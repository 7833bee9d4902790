//! Application Context
//!
//! Shared state provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::config::AppConfig;
use crate::routes::{normalize_path, Route};
use crate::store::{
    store_dismiss_toast, store_is_current, store_push_toast, store_set_route, store_visit, AppStateStoreFields, AppStore,
};
use crate::toast::ToastMessage;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn brand(&self) -> String {
        self.config.with_value(|c| c.brand.clone())
    }

    /// Current route (tracked)
    pub fn route(&self) -> Route {
        self.store.route().get()
    }

    /// Token for the page visit currently on screen
    pub fn visit(&self) -> u64 {
        store_visit(&self.store)
    }

    /// False once any navigation happened after `visit` was taken
    pub fn still_on(&self, visit: u64) -> bool {
        store_is_current(&self.store, visit)
    }

    /// Push a history entry and switch page
    pub fn navigate(&self, route: Route) {
        log::debug!("navigate -> {} ({})", route.name(), route.path());
        if let Err(e) = commands::push_route(&route) {
            log::warn!("history push failed: {}", e);
        }
        store_set_route(&self.store, route);
    }

    /// Replace the current history entry and switch page
    pub fn replace(&self, route: Route) {
        log::debug!("replace -> {} ({})", route.name(), route.path());
        if let Err(e) = commands::replace_route(&route) {
            log::warn!("history replace failed: {}", e);
        }
        store_set_route(&self.store, route);
    }

    /// Browser back; the popstate handler picks up the new entry
    pub fn back(&self) {
        if let Err(e) = commands::history_back() {
            log::warn!("history back failed: {}", e);
        }
    }

    /// Show the route for the current URL, rewriting the URL on redirect
    pub fn sync_with_location(&self, state: Option<Route>) {
        let path = normalize_path(&commands::current_path());
        let route = Route::resolve(&path, state);
        if route.path() != path {
            log::info!("{} needs navigation state, redirecting to {}", path, route.path());
            self.replace(route);
        } else {
            store_set_route(&self.store, route);
        }
    }

    /// Queue a toast and schedule its dismissal
    pub fn toast(&self, message: ToastMessage) {
        log::debug!("toast: {} / {}", message.title, message.description);
        let id = store_push_toast(&self.store, message);
        let duration = self.config.with_value(|c| c.toast_duration_ms);
        let store = self.store;
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn dismiss_toast(&self, id: u32) {
        store_dismiss_toast(&self.store, id);
    }
}

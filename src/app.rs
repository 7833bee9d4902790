//! TOWHOECR Frontend App
//!
//! Root component: owns the store, keeps it in step with browser history,
//! and renders the page for the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::Toaster;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::{
    BookingPage, BookingSuccess, CustomerHome, CustomerLogin, NotFound, OtpVerification, ProviderDashboard,
    ProviderListing, ProviderRegister, RoleSelection,
};
use crate::routes::Route;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::new(Route::default(), config.toast_limit));
    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    // Initial page from the address bar
    ctx.sync_with_location(commands::current_state());

    // Back / forward
    let popstate = window_event_listener(leptos::ev::popstate, move |ev| {
        ctx.sync_with_location(commands::route_from_state(ev.state()));
    });
    on_cleanup(move || popstate.remove());

    view! {
        <div class="app">
            {move || match ctx.route() {
                Route::RoleSelection => view! { <RoleSelection /> }.into_any(),
                Route::CustomerLogin => view! { <CustomerLogin /> }.into_any(),
                Route::OtpVerification { customer } => view! { <OtpVerification customer=customer /> }.into_any(),
                Route::CustomerHome { customer } => view! { <CustomerHome customer=customer /> }.into_any(),
                Route::ProviderListing { customer, service } => {
                    view! { <ProviderListing customer=customer service=service /> }.into_any()
                }
                Route::Booking { customer, service, provider } => {
                    view! { <BookingPage customer=customer service=service provider=provider /> }.into_any()
                }
                Route::BookingSuccess { customer, service, provider, booking } => view! {
                    <BookingSuccess customer=customer service=service provider=provider booking=booking />
                }
                .into_any(),
                Route::ProviderRegister => view! { <ProviderRegister /> }.into_any(),
                Route::ProviderDashboard { provider } => view! { <ProviderDashboard provider=provider /> }.into_any(),
                Route::NotFound { path } => view! { <NotFound path=path /> }.into_any(),
            }}
            <Toaster />
        </div>
    }
}

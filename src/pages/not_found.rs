//! Not Found Page
//!
//! Shown for paths outside the route table.

use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::Route;

/// Recent log lines dumped alongside a 404
const TRAIL_LINES: usize = 10;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    let ctx = use_app();
    log::error!("404 Error: User attempted to access non-existent route: {}", path);
    if let Some(logger) = rolling_logger::global() {
        let trail = logger.tail(TRAIL_LINES);
        log::debug!("last {} log lines before the 404:\n{}", trail.len(), trail.join("\n"));
    }

    view! {
        <div class="centered-page muted-bg">
            <div class="centered">
                <h1 class="huge">"404"</h1>
                <p class="large muted">"Oops! Page not found"</p>
                <p class="mono small muted">{path}</p>
                <a
                    href="/"
                    class="link"
                    on:click=move |ev| {
                        ev.prevent_default();
                        ctx.navigate(Route::RoleSelection);
                    }
                >
                    "Return to Home"
                </a>
            </div>
        </div>
    }
}

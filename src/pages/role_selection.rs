//! Role Selection Page
//!
//! Landing page: pick the customer or the provider branch.

use leptos::prelude::*;

use crate::context::use_app;
use crate::models::ServiceKind;
use crate::routes::Route;

#[component]
pub fn RoleSelection() -> impl IntoView {
    let ctx = use_app();
    let brand = ctx.brand();
    let hero_alt = format!("{} Construction Services", brand);

    view! {
        <div class="hero-page">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <h1 class="hero-title">{brand}</h1>
                        <p class="hero-tagline">
                            "Professional Construction & Vehicle Services at Your Fingertips"
                        </p>
                        <div class="hero-actions">
                            <button
                                type="button"
                                class="btn btn-hero btn-lg"
                                on:click=move |_| ctx.navigate(Route::CustomerLogin)
                            >
                                <span class="icon">"👥"</span>
                                "I Need Service"
                            </button>
                            <button
                                type="button"
                                class="btn btn-hero-outline btn-lg"
                                on:click=move |_| ctx.navigate(Route::ProviderRegister)
                            >
                                <span class="icon">"🔧"</span>
                                "I Provide Service"
                            </button>
                        </div>
                    </div>
                    <div class="hero-image">
                        <img src="/public/hero-image.jpg" alt=hero_alt />
                    </div>
                </div>

                // Service categories preview
                <div class="category-grid">
                    {ServiceKind::ALL
                        .into_iter()
                        .map(|service| view! {
                            <div class="card glass">
                                <h3>{service.name()}</h3>
                                <p>{service.description()}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

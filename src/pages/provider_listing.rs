//! Provider Listing Page
//!
//! Mock providers for the chosen service.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{BackHeader, StarRating};
use crate::context::use_app;
use crate::display::BadgeVariant;
use crate::models::{CustomerData, Provider, ServiceKind};
use crate::routes::Route;

#[component]
pub fn ProviderListing(customer: CustomerData, service: ServiceKind) -> impl IntoView {
    let ctx = use_app();
    let customer = StoredValue::new(customer);
    let providers = catalog::providers_for(service);

    let select_provider = move |provider: Provider| {
        log::debug!("selected provider {} for {}", provider.id, service.id());
        ctx.navigate(Route::Booking {
            customer: customer.get_value(),
            service,
            provider,
        });
    };

    view! {
        <div class="page">
            <BackHeader
                back_label="Back to Services"
                on_back=move |_: ()| ctx.navigate(Route::CustomerHome { customer: customer.get_value() })
                title=format!("{} Providers", service.name())
                subtitle="Choose from our verified professionals"
            />

            <main class="container main">
                <div class="stack">
                    {providers
                        .into_iter()
                        .map(|provider| {
                            let badge = BadgeVariant::for_availability(provider.availability).class();
                            let selected = StoredValue::new(provider.clone());
                            let choose = move || select_provider(selected.get_value());
                            view! {
                                <div class="card provider-card clickable" on:click=move |_| choose()>
                                    <div class="card-header spread">
                                        <div class="stack-sm">
                                            <h3 class="card-title">{provider.name.clone()}</h3>
                                            <div class="meta-row">
                                                <span><span class="icon">"📍"</span>{provider.city.clone()}</span>
                                                <span><span class="icon">"📞"</span>{provider.phone.clone()}</span>
                                            </div>
                                        </div>
                                        <div class="stack-sm align-end">
                                            <span class="rating">
                                                <span class="star filled">"★"</span>
                                                {format!("{:.1}", provider.rating)}
                                            </span>
                                            <span class=badge>
                                                <span class="icon">"🕒"</span>
                                                {provider.availability.to_string()}
                                            </span>
                                        </div>
                                    </div>

                                    <div class="card-content">
                                        <div class="fact-grid">
                                            <div>
                                                <p class="muted small">"Experience"</p>
                                                <p class="strong">{provider.experience_label()}</p>
                                            </div>
                                            <div>
                                                <p class="muted small">"Price Range"</p>
                                                <p class="strong accent">{provider.price_range.to_string()}</p>
                                            </div>
                                            <div>
                                                <p class="muted small">"Rating"</p>
                                                <StarRating rating=provider.rating />
                                            </div>
                                        </div>
                                        <button
                                            type="button"
                                            class="btn btn-primary btn-block"
                                            on:click=move |ev| {
                                                ev.stop_propagation();
                                                choose();
                                            }
                                        >
                                            "Select This Provider"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}

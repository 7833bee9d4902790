//! Customer Home Page
//!
//! Service categories for a signed-in customer.

use leptos::prelude::*;

use crate::components::AccountHeader;
use crate::context::use_app;
use crate::models::{CustomerData, ServiceKind};
use crate::routes::Route;
use crate::toast::ToastMessage;

#[component]
pub fn CustomerHome(customer: CustomerData) -> impl IntoView {
    let ctx = use_app();
    let brand = ctx.brand();
    let customer_name = customer.name.clone();
    let customer = StoredValue::new(customer);

    let select_service = move |service: ServiceKind| {
        ctx.navigate(Route::ProviderListing {
            customer: customer.get_value(),
            service,
        });
    };

    let logout = move |_: ()| {
        ctx.toast(ToastMessage::info("Logged Out", format!("Thank you for using {}", ctx.brand())));
        ctx.navigate(Route::RoleSelection);
    };

    view! {
        <div class="page">
            <AccountHeader title=brand user_name=customer_name on_logout=logout />

            <main class="container main">
                <div class="section-intro">
                    <h2>"Choose Your Service"</h2>
                    <p class="muted">"Select the service you need from our professional providers"</p>
                </div>

                <div class="card-grid three">
                    {ServiceKind::ALL
                        .into_iter()
                        .map(|service| view! {
                            <div class="card service-card clickable" on:click=move |_| select_service(service)>
                                <div class="service-image">
                                    <img src=service.image() alt=service.name() />
                                    <span class="pill">
                                        {format!("{} Providers Available", service.provider_count())}
                                    </span>
                                </div>
                                <div class="card-header">
                                    <h3 class="card-title">{service.name()}</h3>
                                    <p class="card-description">{service.description()}</p>
                                </div>
                                <div class="card-content">
                                    <button
                                        type="button"
                                        class="btn btn-primary btn-block"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            select_service(service);
                                        }
                                    >
                                        "View Providers"
                                    </button>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}

//! Provider Dashboard Page
//!
//! Profile card and the mock request list. Accept and decline only notify.

use leptos::prelude::*;

use crate::catalog;
use crate::components::{AccountHeader, DetailRow};
use crate::context::use_app;
use crate::display::format_long_date;
use crate::models::ProviderData;
use crate::routes::Route;
use crate::toast::ToastMessage;

#[component]
pub fn ProviderDashboard(provider: ProviderData) -> impl IntoView {
    let ctx = use_app();
    let brand = ctx.brand();
    let has_requests = !catalog::booking_requests().is_empty();

    let logout = move |_: ()| {
        ctx.toast(ToastMessage::info(
            "Logged Out",
            format!("Thank you for being part of {} network", ctx.brand()),
        ));
        ctx.navigate(Route::RoleSelection);
    };

    let accept = move |request_id: u32| {
        log::info!("accepted request {}", request_id);
        ctx.toast(ToastMessage::info(
            "Booking Accepted",
            "Customer has been notified of your acceptance",
        ));
    };

    let decline = move |request_id: u32| {
        log::info!("declined request {}", request_id);
        ctx.toast(ToastMessage::info(
            "Booking Declined",
            "Customer has been notified and can choose another provider",
        ));
    };

    view! {
        <div class="page">
            <AccountHeader
                title=format!("{} Provider", brand)
                user_name=provider.name.clone()
                on_logout=logout
            />

            <main class="container main">
                <div class="dashboard-grid">
                    // Profile
                    <div class="card shadow">
                        <div class="card-header">
                            <h3 class="card-title">"Your Profile"</h3>
                            <p class="card-description">"Service provider information"</p>
                        </div>
                        <div class="card-content stack">
                            <DetailRow icon="👤" value=provider.name.clone() caption="Service Provider" />
                            <DetailRow icon="📞" value=provider.phone.clone() caption="Contact Number" />
                            <DetailRow icon="📍" value=provider.city.clone() caption="Service Area" />
                            <DetailRow icon="🔧" value=provider.service_type.name() caption="Service Type" />
                            <div class="divider">
                                <span class="badge badge-secondary block">"✓ Verified Provider"</span>
                            </div>
                        </div>
                    </div>

                    // Booking requests
                    <div class="card shadow span-2">
                        <div class="card-header">
                            <h3 class="card-title">"Booking Requests"</h3>
                            <p class="card-description">"New service requests from customers"</p>
                        </div>
                        <div class="card-content">
                            <Show
                                when=move || has_requests
                                fallback=|| view! {
                                    <div class="empty-state">
                                        <p>"No new booking requests at the moment."</p>
                                        <p class="small">"You'll be notified when customers book your services."</p>
                                    </div>
                                }
                            >
                                <div class="stack">
                                    {catalog::booking_requests()
                                        .into_iter()
                                        .map(|request| {
                                            let id = request.id;
                                            view! {
                                                <div class="request">
                                                    <div class="spread">
                                                        <div class="stack-sm">
                                                            <h4 class="strong large">{request.service.name()}</h4>
                                                            <div class="muted small">
                                                                <p><span class="strong">"Customer: "</span>{request.customer_name}</p>
                                                                <p><span class="strong">"Phone: "</span>{request.customer_phone}</p>
                                                                <p><span class="strong">"Date: "</span>{format_long_date(request.date)}</p>
                                                                <p><span class="strong">"Time: "</span>{request.time}</p>
                                                            </div>
                                                        </div>
                                                        <span class="badge badge-warning">{request.status.label()}</span>
                                                    </div>
                                                    <div class="action-row">
                                                        <button type="button" class="btn btn-primary btn-sm" on:click=move |_| accept(id)>
                                                            <span class="icon">"✔"</span>
                                                            "Accept"
                                                        </button>
                                                        <button type="button" class="btn btn-outline btn-sm" on:click=move |_| decline(id)>
                                                            <span class="icon">"✖"</span>
                                                            "Decline"
                                                        </button>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

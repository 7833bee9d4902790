//! Booking Success Page

use leptos::prelude::*;

use crate::commands;
use crate::components::DetailRow;
use crate::context::use_app;
use crate::display::format_long_date;
use crate::models::{BookingDetails, CustomerData, Provider, ServiceKind};
use crate::routes::Route;

#[component]
pub fn BookingSuccess(
    customer: CustomerData,
    service: ServiceKind,
    provider: Provider,
    booking: BookingDetails,
) -> impl IntoView {
    let ctx = use_app();
    let customer = StoredValue::new(customer);

    let go_home = move |_| ctx.navigate(Route::CustomerHome { customer: customer.get_value() });
    let print = move |_| {
        if let Err(e) = commands::print_page() {
            log::warn!("print failed: {}", e);
        }
    };

    view! {
        <div class="centered-page">
            <div class="wide">
                <div class="card elevated">
                    <div class="card-header centered">
                        <div class="success-mark">"✔"</div>
                        <h2 class="card-title large success">"Booking Confirmed!"</h2>
                        <p class="card-description large">
                            {format!("Your {} service has been successfully booked", service.name())}
                        </p>
                    </div>

                    <div class="card-content stack">
                        <div class="panel stack">
                            <h3 class="panel-title">"Booking Details"</h3>
                            <div class="card-grid two">
                                <DetailRow icon="📅" value="Date" caption=format_long_date(booking.date) />
                                <DetailRow icon="🕒" value="Time" caption=booking.time.clone() />
                            </div>
                            <div class="divider">
                                <p class="muted small">"Booking ID"</p>
                                <p class="mono strong">{booking.booking_id.clone()}</p>
                            </div>
                        </div>

                        <div class="panel stack">
                            <h3 class="panel-title">"Service Provider Details"</h3>
                            <DetailRow
                                icon="👤"
                                value=provider.name.clone()
                                caption=format!("{} Specialist", service.name())
                            />
                            <DetailRow icon="📞" value=provider.phone.clone() caption="Contact Number" />
                        </div>

                        <div class="panel accent-panel">
                            <h3 class="panel-title">"What happens next?"</h3>
                            <div class="stack-sm small">
                                <p>"✓ The service provider has been notified about your booking"</p>
                                <p>"✓ You will receive a confirmation email shortly"</p>
                                <p>"✓ The provider will contact you to confirm the appointment"</p>
                                <p>"✓ You can track your booking status via email notifications"</p>
                            </div>
                        </div>

                        <div class="action-row">
                            <button type="button" class="btn btn-primary btn-lg grow" on:click=go_home>
                                <span class="icon">"🏠"</span>
                                "Back to Home"
                            </button>
                            <button type="button" class="btn btn-outline btn-lg grow" on:click=print>
                                "Print Booking Details"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

//! Booking Page
//!
//! Date and time selection followed by a simulated confirmation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::catalog::TIME_SLOTS;
use crate::commands;
use crate::components::{BackHeader, DetailRow};
use crate::context::use_app;
use crate::display::{format_input_date, format_picker_date, format_short_date};
use crate::forms::{parse_date_input, BookingForm};
use crate::models::{CustomerData, Provider, ServiceKind};
use crate::routes::Route;
use crate::toast::ToastMessage;

#[component]
pub fn BookingPage(customer: CustomerData, service: ServiceKind, provider: Provider) -> impl IntoView {
    let ctx = use_app();

    let (date, set_date) = signal(None::<chrono::NaiveDate>);
    let (time, set_time) = signal(None::<String>);
    let (is_loading, set_is_loading) = signal(false);

    // Only days after today can be booked
    let today = chrono::Local::now().date_naive();
    let min_date = today.succ_opt().map(format_input_date).unwrap_or_default();

    let provider_view = provider.clone();
    let customer_view = customer.clone();
    let customer = StoredValue::new(customer);
    let provider = StoredValue::new(provider);

    let confirm = move |_| {
        if is_loading.get_untracked() { return; }
        let form = BookingForm {
            date: date.get_untracked(),
            time: time.get_untracked(),
        };
        let (day, slot) = match form.submit(chrono::Local::now().date_naive()) {
            Ok(selection) => selection,
            Err(e) => {
                ctx.toast(e.toast());
                return;
            }
        };

        set_is_loading.set(true);
        let delay = ctx.config().booking_delay_ms;
        let customer = customer.get_value();
        let provider = provider.get_value();
        let visit = ctx.visit();
        spawn_local(async move {
            let booking = commands::confirm_booking(&provider, day, slot, delay).await;
            if !ctx.still_on(visit) {
                log::debug!("booking {} confirmed after leaving the page", booking.booking_id);
                return;
            }
            set_is_loading.set(false);
            ctx.toast(ToastMessage::info(
                "Booking Confirmed!",
                format!(
                    "Your {} service has been booked for {} at {}",
                    service.name(),
                    format_short_date(booking.date),
                    booking.time
                ),
            ));
            ctx.navigate(Route::BookingSuccess {
                customer,
                service,
                provider,
                booking,
            });
        });
    };

    view! {
        <div class="page">
            <BackHeader
                back_label="Back to Providers"
                on_back=move |_: ()| ctx.back()
                title="Book Your Service"
                subtitle=format!("Complete your {} booking", service.name())
            />

            <main class="container main narrow-wide">
                <div class="card-grid two">
                    // Provider details
                    <div class="card shadow">
                        <div class="card-header">
                            <h3 class="card-title">"Selected Provider"</h3>
                            <p class="card-description">"Confirm your service provider details"</p>
                        </div>
                        <div class="card-content stack">
                            <DetailRow icon="👤" value=provider_view.name.clone() caption="Service Provider" />
                            <DetailRow icon="📞" value=provider_view.phone.clone() caption="Contact Number" />
                            <DetailRow icon="📍" value=provider_view.city.clone() caption="Service Area" />
                            <DetailRow
                                icon="★"
                                value=format!("{:.1} Stars", provider_view.rating)
                                caption="Customer Rating"
                            />
                            <div class="divider stack-sm">
                                <p class="strong accent">"Service Details"</p>
                                <p class="large">{service.name()}</p>
                                <p class="muted small">{format!("Price Range: {}", provider_view.price_range)}</p>
                            </div>
                        </div>
                    </div>

                    // Booking form
                    <div class="card shadow">
                        <div class="card-header">
                            <h3 class="card-title">"Select Date & Time"</h3>
                            <p class="card-description">"Choose your preferred appointment slot"</p>
                        </div>
                        <div class="card-content stack">
                            <label class="field">
                                <span class="field-label">"Select Date"</span>
                                <input
                                    type="date"
                                    min=min_date
                                    prop:value=move || date.get().map(format_input_date).unwrap_or_default()
                                    on:input=move |ev| set_date.set(parse_date_input(&event_target_value(&ev)))
                                />
                                <span class="field-hint">
                                    <span class="icon">"📅"</span>
                                    {move || date.get().map(format_picker_date).unwrap_or_else(|| "Pick a date".to_string())}
                                </span>
                            </label>

                            <label class="field">
                                <span class="field-label">"Select Time"</span>
                                <select on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    set_time.set((!value.is_empty()).then_some(value));
                                }>
                                    <option value="" disabled=true selected=true>"Choose a time slot"</option>
                                    {TIME_SLOTS
                                        .iter()
                                        .map(|slot| view! { <option value=*slot>{*slot}</option> })
                                        .collect_view()}
                                </select>
                            </label>

                            // Customer info summary
                            <div class="divider stack-sm">
                                <p class="strong accent">"Your Details"</p>
                                <p class="small"><span class="strong">"Name: "</span>{customer_view.name.clone()}</p>
                                <p class="small"><span class="strong">"Email: "</span>{customer_view.email.clone()}</p>
                                <p class="small"><span class="strong">"Phone: "</span>{customer_view.phone.clone()}</p>
                            </div>

                            <button
                                type="button"
                                class="btn btn-primary btn-lg btn-block"
                                disabled=move || {
                                    is_loading.get()
                                        || !BookingForm { date: date.get(), time: time.get() }.is_complete()
                                }
                                on:click=confirm
                            >
                                {move || if is_loading.get() { "Confirming Booking..." } else { "Confirm Booking" }}
                            </button>
                        </div>
                    </div>
                </div>
            </main>
        </div>
    }
}

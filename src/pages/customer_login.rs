//! Customer Login Page
//!
//! Collects name, email and phone, then "sends" an OTP.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::BackLink;
use crate::context::use_app;
use crate::forms::LoginForm;
use crate::routes::Route;
use crate::toast::ToastMessage;

#[component]
pub fn CustomerLogin() -> impl IntoView {
    let ctx = use_app();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let send_otp = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() { return; }

        let form = LoginForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
        };
        let customer = match form.submit() {
            Ok(customer) => customer,
            Err(e) => {
                ctx.toast(e.toast());
                return;
            }
        };

        set_is_loading.set(true);
        let delay = ctx.config().otp_send_delay_ms;
        let visit = ctx.visit();
        spawn_local(async move {
            commands::send_otp(&customer, delay).await;
            if !ctx.still_on(visit) {
                log::debug!("OTP send finished after leaving the login page");
                return;
            }
            set_is_loading.set(false);
            ctx.toast(ToastMessage::info(
                "OTP Sent",
                format!("A 6-digit verification code has been sent to {}", customer.email),
            ));
            ctx.navigate(Route::OtpVerification { customer });
        });
    };

    view! {
        <div class="centered-page">
            <div class="narrow">
                <div class="back-row">
                    <BackLink
                        label="Back to Role Selection"
                        on_back=move |_: ()| ctx.navigate(Route::RoleSelection)
                    />
                </div>

                <div class="card shadow">
                    <div class="card-header centered">
                        <h2 class="card-title large">"Customer Login"</h2>
                        <p class="card-description">"Enter your details to receive a verification code"</p>
                    </div>

                    <form class="card-content form" on:submit=send_otp>
                        <label class="field">
                            <span class="field-label">"Full Name"</span>
                            <input
                                type="text"
                                placeholder="Enter your full name"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Email Address"</span>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Phone Number"</span>
                            <input
                                type="tel"
                                placeholder="Enter your phone number"
                                required
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </label>

                        <button type="submit" class="btn btn-primary btn-lg btn-block" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Sending OTP..." } else { "Send OTP" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

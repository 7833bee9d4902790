//! OTP Verification Page
//!
//! Checks the code against the demo literal after a simulated delay.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{BackLink, OtpInput};
use crate::context::use_app;
use crate::forms::{self, OTP_LENGTH};
use crate::models::CustomerData;
use crate::routes::Route;
use crate::toast::ToastMessage;

#[component]
pub fn OtpVerification(customer: CustomerData) -> impl IntoView {
    let ctx = use_app();
    let show_demo_otp = ctx.config().show_demo_otp;
    let email = customer.email.clone();
    let customer = StoredValue::new(customer);

    let (otp, set_otp) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let verify = move |_| {
        if is_loading.get_untracked() { return; }
        let code = otp.get_untracked();
        // Length is checked up front, without the simulated round trip
        if let Err(e) = forms::check_otp_complete(&code) {
            ctx.toast(e.toast());
            return;
        }

        set_is_loading.set(true);
        let config = ctx.config();
        let customer = customer.get_value();
        let login_email = customer.email.clone();
        let visit = ctx.visit();
        spawn_local(async move {
            let result = commands::verify_otp(customer, &code, &config.demo_otp, config.otp_verify_delay_ms).await;
            if !ctx.still_on(visit) {
                log::debug!("OTP check finished after leaving the page");
                return;
            }
            set_is_loading.set(false);
            match result {
                Ok(home) => {
                    log::info!("OTP verified for {}", login_email);
                    ctx.toast(ToastMessage::info(
                        "Login Successful!",
                        format!("Welcome to {}", config.brand),
                    ));
                    ctx.navigate(home);
                }
                Err(e) => {
                    log::info!("OTP rejected: {}", e);
                    ctx.toast(e.toast());
                }
            }
        });
    };

    let resend = move |_| {
        ctx.toast(ToastMessage::info(
            "OTP Resent",
            "A new verification code has been sent to your email",
        ));
    };

    view! {
        <div class="centered-page">
            <div class="narrow">
                <div class="back-row">
                    <BackLink
                        label="Back to Login"
                        on_back=move |_: ()| ctx.navigate(Route::CustomerLogin)
                    />
                </div>

                <div class="card shadow">
                    <div class="card-header centered">
                        <h2 class="card-title large">"Verify OTP"</h2>
                        <p class="card-description">
                            "Enter the 6-digit code sent to your email"
                            <br />
                            <span class="emphasis">{email}</span>
                        </p>
                    </div>

                    <div class="card-content stack">
                        <div class="centered">
                            <OtpInput value=otp set_value=set_otp disabled=is_loading />
                        </div>

                        <Show when=move || show_demo_otp>
                            <p class="hint centered">
                                "Demo OTP: "
                                <span class="mono strong">{ctx.config().demo_otp}</span>
                            </p>
                        </Show>

                        <button
                            type="button"
                            class="btn btn-primary btn-lg btn-block"
                            disabled=move || is_loading.get() || otp.with(|code| code.len() != OTP_LENGTH)
                            on:click=verify
                        >
                            {move || if is_loading.get() { "Verifying..." } else { "Verify & Login" }}
                        </button>

                        <div class="centered">
                            <button type="button" class="btn btn-link" on:click=resend>
                                "Didn't receive the code? Resend OTP"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

//! OTP Input Component
//!
//! One numeric input drawn as six slots.

use leptos::prelude::*;

use crate::forms::{sanitize_otp, OTP_LENGTH};

#[component]
pub fn OtpInput(
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="otp-input">
            <input
                type="text"
                class="otp-field"
                inputmode="numeric"
                autocomplete="one-time-code"
                maxlength=OTP_LENGTH.to_string()
                aria-label="One-time password"
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(sanitize_otp(&event_target_value(&ev)))
            />
            <div class="otp-slots" aria-hidden="true">
                {(0..OTP_LENGTH)
                    .map(|i| {
                        let digit = move || value.with(|v| v.chars().nth(i).map(String::from).unwrap_or_default());
                        let class = move || {
                            if value.with(|v| v.chars().count()) == i { "otp-slot active" } else { "otp-slot" }
                        };
                        view! { <span class=class>{digit}</span> }
                    })
                    .collect_view()}
            </div>
        </label>
    }
}

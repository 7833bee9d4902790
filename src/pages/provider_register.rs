//! Service Provider Registration Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::BackLink;
use crate::context::use_app;
use crate::forms::RegistrationForm;
use crate::models::ServiceKind;
use crate::routes::Route;
use crate::toast::ToastMessage;

#[component]
pub fn ProviderRegister() -> impl IntoView {
    let ctx = use_app();

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (city, set_city) = signal(String::new());
    let (service_type, set_service_type) = signal(None::<ServiceKind>);
    let (is_loading, set_is_loading) = signal(false);

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() { return; }

        let form = RegistrationForm {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            city: city.get_untracked(),
            service_type: service_type.get_untracked(),
        };
        let provider = match form.submit() {
            Ok(provider) => provider,
            Err(e) => {
                ctx.toast(e.toast());
                return;
            }
        };

        set_is_loading.set(true);
        let config = ctx.config();
        let visit = ctx.visit();
        spawn_local(async move {
            commands::register_provider(&provider, config.registration_delay_ms).await;
            if !ctx.still_on(visit) {
                log::debug!("registration finished after leaving the page");
                return;
            }
            set_is_loading.set(false);
            ctx.toast(ToastMessage::info(
                "Registration Successful!",
                format!("Welcome to the {} provider network", config.brand),
            ));
            ctx.navigate(Route::ProviderDashboard { provider });
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
                        <h2 class="card-title large">"Provider Registration"</h2>
                        <p class="card-description">"Join our network of professional service providers"</p>
                    </div>

                    <form class="card-content form" on:submit=register>
                        <label class="field">
                            <span class="field-label">"Business / Owner Name"</span>
                            <input
                                type="text"
                                placeholder="Enter your name"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
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
                        <label class="field">
                            <span class="field-label">"City"</span>
                            <input
                                type="text"
                                placeholder="Enter your city"
                                required
                                prop:value=move || city.get()
                                on:input=move |ev| set_city.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span class="field-label">"Service Type"</span>
                            <select
                                required
                                on:change=move |ev| set_service_type.set(event_target_value(&ev).parse().ok())
                            >
                                <option value="" disabled=true selected=true>"Select your service"</option>
                                {ServiceKind::ALL
                                    .into_iter()
                                    .map(|kind| view! { <option value=kind.id()>{kind.name()}</option> })
                                    .collect_view()}
                            </select>
                        </label>

                        <button type="submit" class="btn btn-primary btn-lg btn-block" disabled=move || is_loading.get()>
                            {move || if is_loading.get() { "Registering..." } else { "Register as Provider" }}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

//! Page Headers
//!
//! Top bars: a back button with a title, or the signed-in account bar.

use leptos::prelude::*;

/// Ghost button with a left arrow
#[component]
pub fn BackLink(
    #[prop(into)] label: String,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    view! {
        <button type="button" class="btn btn-ghost back-link" on:click=move |_| on_back.run(())>
            <span class="icon">"←"</span>
            {label}
        </button>
    }
}

/// Sticky header with back button, title and subtitle
#[component]
pub fn BackHeader(
    #[prop(into)] back_label: String,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] title: String,
    #[prop(into)] subtitle: String,
) -> impl IntoView {
    view! {
        <header class="page-header sticky">
            <div class="container header-row">
                <BackLink label=back_label on_back=on_back />
                <div>
                    <h1 class="header-title">{title}</h1>
                    <p class="header-subtitle">{subtitle}</p>
                </div>
            </div>
        </header>
    }
}

/// Header for signed-in pages: brand, greeting and logout
#[component]
pub fn AccountHeader(
    #[prop(into)] title: String,
    #[prop(into)] user_name: String,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <div class="container header-row spread">
                <h1 class="header-title">{title}</h1>
                <div class="header-account">
                    <span class="header-greeting">
                        <span class="icon">"👤"</span>
                        "Welcome, " {user_name}
                    </span>
                    <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| on_logout.run(())>
                        <span class="icon">"⎋"</span>
                        "Logout"
                    </button>
                </div>
            </div>
        </header>
    }
}

//! Detail Row Component
//!
//! A labelled value with its icon.

use leptos::prelude::*;

/// Icon, bold value and muted caption
#[component]
pub fn DetailRow(
    icon: &'static str,
    #[prop(into)] value: String,
    #[prop(into)] caption: String,
) -> impl IntoView {
    view! {
        <div class="detail-row">
            <span class="icon detail-icon">{icon}</span>
            <div>
                <p class="detail-value">{value}</p>
                <p class="detail-caption">{caption}</p>
            </div>
        </div>
    }
}

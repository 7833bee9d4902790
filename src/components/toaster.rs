//! Toaster Component
//!
//! Renders the toast queue in the corner of the page.

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::AppStateStoreFields;
use crate::toast::ToastVariant;

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app();

    view! {
        <div class="toaster" role="region" aria-live="polite">
            <For
                each=move || ctx.store.toasts().with(|queue| queue.visible().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.message.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast destructive",
                    };
                    view! {
                        <div class=class role="status">
                            <div class="toast-body">
                                <div class="toast-title">{toast.message.title}</div>
                                <div class="toast-description">{toast.message.description}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| ctx.dismiss_toast(id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

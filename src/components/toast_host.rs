//! Toast Host Component
//!
//! Renders active toast notifications from the global store. Toasts are
//! auto-dismissed by the store; the close button removes one early.

use leptos::prelude::*;

use crate::store::{remove_toast, use_app_store, AppStateStoreFields};

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host">
            {move || {
                store
                    .toasts()
                    .get()
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=toast.variant.class()>
                                <div class="toast-body">
                                    <p class="toast-title">{toast.title}</p>
                                    <p class="toast-message">{toast.message}</p>
                                </div>
                                <button class="toast-close" on:click=move |_| remove_toast(&store, id)>
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

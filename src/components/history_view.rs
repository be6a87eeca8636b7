//! Medical History Component
//!
//! Fetches the signed-in user's diagnosis history once on mount and renders
//! it. Without a session the screen redirects to Login instead of fetching.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::HistoryCard;
use crate::context::{AppContext, Route};
use crate::models::HistoryEntry;
use crate::store::{push_toast, use_app_store, AppStateStoreFields, ToastVariant};

#[component]
pub fn HistoryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (entries, set_entries) = signal(Vec::<HistoryEntry>::new());

    // Session gate + one fetch on mount. No tracked reads, so this never
    // re-runs; an in-flight request is not cancelled by navigating away.
    Effect::new(move |_| {
        let Some(session) = store.session().get_untracked() else {
            ctx.navigate(Route::Login);
            return;
        };
        spawn_local(async move {
            match api::fetch_history(&session.id).await {
                Ok(history) => {
                    web_sys::console::log_1(
                        &format!("[HISTORY] Loaded {} records", history.len()).into(),
                    );
                    set_entries.set(history);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[HISTORY] {}", e).into());
                    push_toast(&store, "Error", "Failed to fetch medical history", ToastVariant::Error);
                }
            }
        });
    });

    view! {
        <div class="history-page">
            <div class="history-header">
                <div>
                    <h1>"Medical History"</h1>
                    <p class="patient-name">
                        {move || {
                            store
                                .session()
                                .get()
                                .map(|s| format!("Patient: {}", s.name))
                                .unwrap_or_default()
                        }}
                    </p>
                </div>
                <button class="new-diagnosis-btn" on:click=move |_| ctx.navigate(Route::Home)>
                    "New Diagnosis"
                </button>
            </div>

            {move || {
                let list = entries.get();
                if list.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No medical history found. Upload an image for diagnosis."</p>
                            <button class="start-diagnosis-btn" on:click=move |_| ctx.navigate(Route::Home)>
                                "Start Diagnosis"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="history-list">
                            {list
                                .into_iter()
                                .map(|entry| view! { <HistoryCard entry=entry /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

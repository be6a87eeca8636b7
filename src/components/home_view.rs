//! Home Component
//!
//! Post-login landing screen. The diagnosis upload flow lives here in the
//! full application; this module links on to the history screen.

use leptos::prelude::*;

use crate::context::{AppContext, Route};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="home-page">
            <h1>
                {move || match store.session().get() {
                    Some(session) => format!("Welcome back, {}", session.name),
                    None => "Welcome to ColoScan".to_string(),
                }}
            </h1>
            <p>"Upload an eye scan to screen for coloboma, or review your past results."</p>
            <button class="history-link" on:click=move |_| ctx.navigate(Route::History)>
                "View Medical History"
            </button>
        </div>
    }
}

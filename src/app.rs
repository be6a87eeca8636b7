//! ColoScan Frontend App
//!
//! App shell: owns the global store and route signal, renders the screen
//! matching the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{HeaderBar, HistoryView, HomeView, LoginForm, ToastHost};
use crate::context::{AppContext, Route};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // Global state; the session is restored from localStorage here.
    let store = Store::new(AppState::new());
    provide_context(store);

    // Land on Home when a session survived the last visit, Login otherwise.
    let initial = if store.session().get_untracked().is_some() {
        Route::Home
    } else {
        Route::Login
    };
    let (route, set_route) = signal(initial);

    // Provide context to all children
    provide_context(AppContext::new((route, set_route)));

    view! {
        <div class="app-layout">
            <HeaderBar />

            <main class="main-content">
                {move || match route.get() {
                    Route::Login => view! { <LoginForm /> }.into_any(),
                    Route::Home => view! { <HomeView /> }.into_any(),
                    Route::History => view! { <HistoryView /> }.into_any(),
                }}
            </main>

            <ToastHost />
        </div>
    }
}

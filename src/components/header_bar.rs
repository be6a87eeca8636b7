//! Header Bar Component
//!
//! Global login indicator. Subscribes to the session store, so it updates
//! on login/logout without a page reload.

use leptos::prelude::*;

use crate::context::{AppContext, Route};
use crate::store::{
    push_toast, store_clear_session, use_app_store, AppStateStoreFields, ToastVariant,
};

#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let logout = move |_| {
        store_clear_session(&store);
        push_toast(&store, "Logged out", "See you next time", ToastVariant::Success);
        ctx.navigate(Route::Login);
    };

    view! {
        <header class="header-bar">
            <span class="app-title" on:click=move |_| ctx.navigate(Route::Home)>
                "ColoScan"
            </span>

            {move || match store.session().get() {
                Some(session) => view! {
                    <div class="header-user">
                        <span class="user-name">{session.name}</span>
                        <button class="header-btn" on:click=move |_| ctx.navigate(Route::History)>
                            "Medical History"
                        </button>
                        <button class="header-btn" on:click=logout>
                            "Logout"
                        </button>
                    </div>
                }
                .into_any(),
                None => view! {
                    <button class="header-btn" on:click=move |_| ctx.navigate(Route::Login)>
                        "Login"
                    </button>
                }
                .into_any(),
            }}
        </header>
    }
}

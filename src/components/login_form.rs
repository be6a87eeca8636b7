//! Login Form Component
//!
//! Email/password form posting to the authentication endpoint. On success
//! the session is persisted and published through the global store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::api;
use crate::context::{AppContext, Route};
use crate::models::{LoginRequest, Session};
use crate::store::{push_toast, store_set_session, use_app_store, ToastVariant};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (is_loading, set_is_loading) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get() {
            return;
        }
        let email_value = email.get();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            return;
        }
        set_is_loading.set(true);

        spawn_local(async move {
            let result = api::login(&LoginRequest {
                email: &email_value,
                password: &password_value,
            })
            .await;
            set_is_loading.set(false);

            match result {
                Ok(resp) if resp.success => {
                    // Email comes from the form, name/id from the server.
                    let session = Session {
                        id: resp.id.unwrap_or_default(),
                        name: resp.name.unwrap_or_default(),
                        email: email_value,
                    };
                    match store_set_session(&store, session) {
                        Ok(()) => {
                            push_toast(&store, "Login successful", "Welcome back!", ToastVariant::Success);
                            ctx.navigate(Route::Home);
                        }
                        Err(e) => {
                            web_sys::console::error_1(&format!("[LOGIN] saving session failed: {}", e).into());
                            push_toast(&store, "Login failed", "Could not save your session", ToastVariant::Error);
                        }
                    }
                }
                Ok(resp) => {
                    let message = resp.message.unwrap_or_else(|| "Login failed".to_string());
                    push_toast(&store, "Login failed", &message, ToastVariant::Error);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LOGIN] request failed: {}", e).into());
                    push_toast(&store, "Login failed", "Could not reach the server", ToastVariant::Error);
                }
            }
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Login"</h1>
            <p class="auth-subtitle">"Enter your email to sign in to your account"</p>

            <form class="auth-form" on:submit=submit>
                <label for="email">"Email"</label>
                <input
                    id="email"
                    type="email"
                    placeholder="m@example.com"
                    required=true
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />

                <label for="password">"Password"</label>
                <div class="password-field">
                    <input
                        id="password"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="········"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_password.set(input.value());
                        }
                    />
                    <button
                        type="button"
                        class="toggle-password"
                        on:click=move |_| set_show_password.set(!show_password.get())
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>

                <button type="submit" class="submit-btn" disabled=move || is_loading.get()>
                    {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}

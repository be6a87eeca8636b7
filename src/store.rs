//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components that
//! read `session` re-render whenever login state changes, which replaces the
//! original client's full-page reload after login.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::models::Session;

/// How long a toast stays on screen.
const TOAST_DISMISS_MS: u32 = 4000;

/// Visual flavor of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastVariant {
    Success,
    Error,
}

impl ToastVariant {
    pub fn class(self) -> &'static str {
        match self {
            ToastVariant::Success => "toast success",
            ToastVariant::Error => "toast error",
        }
    }
}

/// A transient notification shown by the toast host.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Currently authenticated user, if any
    pub session: Option<Session>,
    /// Active toast notifications
    pub toasts: Vec<Toast>,
    /// Monotonic toast id counter
    pub toast_seq: u32,
}

impl AppState {
    /// State at startup: session restored from localStorage, no toasts.
    pub fn new() -> Self {
        Self {
            session: crate::session::load(),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Install a session after login: persist it, then publish it to subscribers.
pub fn store_set_session(store: &AppStore, session: Session) -> Result<(), String> {
    crate::session::save(&session)?;
    store.session().set(Some(session));
    Ok(())
}

/// Drop the session on logout, both persisted and in-memory.
pub fn store_clear_session(store: &AppStore) {
    crate::session::clear();
    store.session().set(None);
}

/// Show a toast and schedule its removal.
pub fn push_toast(store: &AppStore, title: &str, message: &str, variant: ToastVariant) {
    let id = store.toast_seq().get_untracked() + 1;
    store.toast_seq().set(id);
    store.toasts().write().push(Toast {
        id,
        title: title.to_string(),
        message: message.to_string(),
        variant,
    });

    let store = *store;
    spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
        remove_toast(&store, id);
    });
}

/// Remove a toast from the store by ID
pub fn remove_toast(store: &AppStore, toast_id: u32) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

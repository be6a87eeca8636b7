//! UI Components
//!
//! The application's Leptos components.

mod header_bar;
mod history_card;
mod history_view;
mod home_view;
mod login_form;
mod toast_host;

pub use header_bar::HeaderBar;
pub use history_card::HistoryCard;
pub use history_view::HistoryView;
pub use home_view::HomeView;
pub use login_form::LoginForm;
pub use toast_host::ToastHost;

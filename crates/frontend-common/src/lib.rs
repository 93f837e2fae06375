pub mod auth;
pub mod client;
pub mod components;
pub mod config;
pub mod storage;
pub mod toast;

pub use auth::context::AuthContext;
pub use client::api_client;
pub use components::Spinner;
pub use config::AppConfig;
pub use storage::BrowserBackend;
pub use toast::{ToastContext, ToastKind, ToastProvider};

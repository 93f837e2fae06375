//! Authentication state shared across the app.

pub mod context;

pub use context::{use_auth, use_session, AuthAction, AuthContext, AuthProvider};

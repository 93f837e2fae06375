//! Frontend configuration

/// Application-wide constants.
pub struct AppConfig;

impl AppConfig {
    /// API base used when no window origin is available.
    pub const DEFAULT_API_URL: &'static str = "http://localhost:4000";

    /// How long a toast stays on screen, in milliseconds.
    pub const TOAST_DISMISS_MS: u32 = 4_000;
}

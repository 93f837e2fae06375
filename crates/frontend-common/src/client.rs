//! Client bootstrap for browser sessions.

use crate::config::AppConfig;
use crate::storage::BrowserBackend;
use newsroom_http::{ClientError, NewsroomClient};
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static CLIENT: RefCell<Option<NewsroomClient>> = const { RefCell::new(None) };
}

/// Base URL for API calls: the page origin, or the dev default outside a
/// browser.
fn base_url() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }
    AppConfig::DEFAULT_API_URL.to_owned()
}

/// The shared API client, created on first use and backed by localStorage.
pub fn api_client() -> Result<NewsroomClient, ClientError> {
    CLIENT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if let Some(client) = slot.as_ref() {
            return Ok(client.clone());
        }
        let client = NewsroomClient::builder()
            .base_url(base_url())
            .session_backend(Rc::new(BrowserBackend::new()))
            .build()?;
        *slot = Some(client.clone());
        Ok(client)
    })
}

//! Newsroom API client.

pub mod auth;
pub mod error;
pub mod posts;

use crate::session::{SessionBackend, SessionStore};
use crate::types::ApiEnvelope;
use error::{extract_api_message, ClientError};
use reqwest::{header, Client, ClientBuilder, Method, Request, RequestBuilder};
use std::rc::Rc;

/// Response header carrying a rolling token renewal.
pub const ACCESS_TOKEN_HEADER: &str = "x-access-token";
/// Companion header with the renewed token's expiry.
pub const ACCESS_EXPIRES_HEADER: &str = "x-access-expires-at";

/// Client for the newsroom REST API.
///
/// The session store is injected at construction; the client reads the
/// bearer token from it on every request and writes refreshed tokens back
/// when the server rolls them via response headers.
#[derive(Clone)]
pub struct NewsroomClient {
    client: Client,
    base_url: String,
    sessions: SessionStore,
}

impl NewsroomClient {
    /// Create a client with default configuration.
    pub fn new(
        base_url: impl Into<String>,
        backend: Rc<dyn SessionBackend>,
    ) -> Result<Self, ClientError> {
        Self::builder()
            .base_url(base_url)
            .session_backend(backend)
            .build()
    }

    pub fn builder() -> NewsroomClientBuilder {
        NewsroomClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this client reads from and writes refreshes to.
    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Create a request builder for an API path.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request, unwrap the response envelope, and apply any
    /// rolling token refresh found in the response headers.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let request = self.authorize(request)?;
        let response = self.client.execute(request).await?;
        let status = response.status();
        let refreshed = refresh_headers(response.headers());
        let body = response.text().await?;

        let envelope: ApiEnvelope<T> =
            serde_json::from_str(&body).map_err(|_| ClientError::InvalidBody)?;

        match envelope {
            ApiEnvelope::Success { data, .. } if status.is_success() => {
                if let Some((token, expires_at)) = refreshed {
                    self.sessions.apply_refresh(&token, expires_at.as_deref());
                }
                Ok(data)
            }
            ApiEnvelope::Success { message, .. } => Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_api_message(&message, None),
            }),
            ApiEnvelope::Error { message, errors } => Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_api_message(&message, errors.as_ref()),
            }),
        }
    }

    /// Finalize a request, attaching the stored bearer token unless the
    /// caller already set an Authorization header.
    fn authorize(&self, request: RequestBuilder) -> Result<Request, ClientError> {
        let mut request = request.build()?;
        if !request.headers().contains_key(header::AUTHORIZATION) {
            if let Some(token) = self.sessions.raw_token() {
                if let Ok(value) = header::HeaderValue::from_str(&format!("Bearer {token}")) {
                    request.headers_mut().insert(header::AUTHORIZATION, value);
                }
            }
        }
        Ok(request)
    }
}

fn refresh_headers(headers: &header::HeaderMap) -> Option<(String, Option<String>)> {
    let token = headers.get(ACCESS_TOKEN_HEADER)?.to_str().ok()?.to_owned();
    let expires_at = headers
        .get(ACCESS_EXPIRES_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    Some((token, expires_at))
}

/// Builder for [`NewsroomClient`].
#[derive(Default)]
pub struct NewsroomClientBuilder {
    base_url: Option<String>,
    backend: Option<Rc<dyn SessionBackend>>,
    user_agent: Option<String>,
}

impl NewsroomClientBuilder {
    /// Set the base URL (required).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the storage backend the session store runs against (required).
    pub fn session_backend(mut self, backend: Rc<dyn SessionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<NewsroomClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let backend = self
            .backend
            .ok_or_else(|| ClientError::Configuration("session backend is required".into()))?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| "newsroom-client/0.1.0".to_owned());
        let client = ClientBuilder::new().user_agent(user_agent).build()?;

        Ok(NewsroomClient {
            client,
            base_url,
            sessions: SessionStore::new(backend),
        })
    }
}

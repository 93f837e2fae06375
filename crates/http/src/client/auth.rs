//! Authentication endpoints.

use super::error::ClientError;
use super::NewsroomClient;
use crate::types::{LoginData, LoginRequest};
use reqwest::Method;
use serde_json::Value;

impl NewsroomClient {
    /// Log in and persist the returned token bundle.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginData, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/login")
            .json(credentials);
        let data: LoginData = self.execute(request).await?;
        self.sessions().persist(&data);
        Ok(data)
    }

    /// Invalidate the session server-side, then clear it locally.
    ///
    /// The local session is cleared even when the network call fails. The
    /// server's message is returned when one could be read, whatever the
    /// response status was.
    pub async fn logout(&self) -> Option<String> {
        let message = self.logout_message().await;
        self.sessions().clear();
        message
    }

    async fn logout_message(&self) -> Option<String> {
        let request = self
            .authorize(self.request(Method::POST, "/api/auth/logout"))
            .ok()?;
        let response = self.client.execute(request).await.ok()?;
        let body = response.text().await.ok()?;
        let envelope: Value = serde_json::from_str(&body).ok()?;
        match envelope.get("message") {
            Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
            _ => None,
        }
    }
}

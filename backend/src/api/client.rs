//! HTTP client for the user endpoints.
//!
//! Every call logs its failure and hands back `None` instead of an error, so
//! callers only ever see "got a value" or "didn't".

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::error;

use crate::store::{NewUser, User};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Error)]
enum ClientError {
    #[error("Network response was not ok ({0})")]
    Status(StatusCode),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn fetch_users(&self) -> Option<Vec<User>> {
        let request = self.http.get(self.users_url());
        swallow("fetching users", self.send_json(request).await)
    }

    pub async fn create_user(&self, user: &NewUser) -> Option<User> {
        let request = self.http.post(self.users_url()).json(user);
        swallow("creating user", self.send_json(request).await)
    }

    /// Replaces a user's data. The bundled server has no such route, so against
    /// it this always yields `None`.
    pub async fn update_user(&self, id: u64, user: &NewUser) -> Option<User> {
        let request = self.http.put(self.user_url(id)).json(user);
        swallow("updating user", self.send_json(request).await)
    }

    pub async fn delete_user(&self, id: u64) -> Option<bool> {
        let request = self.http.delete(self.user_url(id));
        swallow("deleting user", self.send(request).await.map(|_| true))
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: u64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json::<T>().await?)
    }
}

fn swallow<T>(action: &str, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!(error = %err, "Error {}", action);
            None
        }
    }
}

use std::sync::OnceLock;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::BackendConfig;
use super::error::BackendError;

static BACKEND: OnceLock<BackendClient> = OnceLock::new();

/// HTTP gateway to the hotel REST API. No request timeout is set; calls wait
/// on the network layer's own failure behaviour.
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

pub fn init_client(config: BackendConfig) -> Result<(), BackendError> {
    tracing::info!(base_url = config.base_url(), "Initializing hotel API client");

    BACKEND
        .set(BackendClient::new(config))
        .map_err(|_| BackendError::AlreadyInitialized)
}

pub fn get_client() -> Result<&'static BackendClient, BackendError> {
    BACKEND.get().ok_or(BackendError::NotConfigured)
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let request = self.http.get(self.config.endpoint(path));
        let body = self.execute(request).await?;
        decode(&body)
    }

    /// Sends a JSON body and decodes the JSON reply.
    pub async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.send_text(method, path, body, token).await?;
        decode(&body)
    }

    /// Like [`BackendClient::send`] but hands back the raw 2xx body.
    pub async fn send_text<B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<String, BackendError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self
            .http
            .request(method, self.config.endpoint(path))
            .json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), BackendError> {
        let mut request = self.http.delete(self.config.endpoint(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await.map(|_| ())
    }

    async fn execute(&self, request: RequestBuilder) -> Result<String, BackendError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("HTTP request to hotel API failed: {}", e);
            BackendError::from(e)
        })?;
        read_body(response).await
    }
}

async fn read_body(response: Response) -> Result<String, BackendError> {
    let status = response.status();
    let url = response.url().path().to_string();
    let body = response.text().await?;

    if status.is_success() {
        Ok(body)
    } else {
        tracing::warn!(status = status.as_u16(), path = %url, "Hotel API returned error status");
        Err(BackendError::from_status(status.as_u16(), &body))
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, BackendError> {
    serde_json::from_str(body).map_err(|e| BackendError::Decode(e.to_string()))
}

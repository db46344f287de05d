use crate::error::ApiError;
use crate::http::config::HttpClientConfig;
use crate::http::HttpTransport;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, Url};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, trace};

const AUTHORIZATION_SCHEME: &str = "aivenv1";

/// HTTP client for the API, authenticating every request with the configured token.
#[derive(Debug)]
pub struct HttpClient {
    pub api_url: Url,
    client: reqwest::Client,
    api_token: RwLock<Option<String>>,
}

#[async_trait]
impl HttpTransport for HttpClient {
    fn get_url(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.api_url.clone();
        {
            // Each segment is percent-encoded, so it can't alter the rest of the URL.
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ApiError::CannotParseUrl)?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|segment| !segment.is_empty()));
        }
        Ok(url)
    }

    async fn get(&self, path: &str) -> Result<Bytes, ApiError> {
        let url = self.get_url(path)?;
        trace!("Sending GET request to: {url}");
        let request = self.authorize(self.client.get(url)).await?;
        Self::handle_response(request.send().await?).await
    }

    async fn get_with_query<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &T,
    ) -> Result<Bytes, ApiError> {
        let url = self.get_url(path)?;
        trace!("Sending GET request with query to: {url}");
        let request = self.authorize(self.client.get(url).query(query)).await?;
        Self::handle_response(request.send().await?).await
    }

    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Bytes, ApiError> {
        let url = self.get_url(path)?;
        trace!("Sending POST request to: {url}");
        let request = self.authorize(self.client.post(url).json(payload)).await?;
        Self::handle_response(request.send().await?).await
    }

    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Bytes, ApiError> {
        let url = self.get_url(path)?;
        trace!("Sending PUT request to: {url}");
        let request = self.authorize(self.client.put(url).json(payload)).await?;
        Self::handle_response(request.send().await?).await
    }

    async fn delete(&self, path: &str) -> Result<Bytes, ApiError> {
        let url = self.get_url(path)?;
        trace!("Sending DELETE request to: {url}");
        let request = self.authorize(self.client.delete(url)).await?;
        Self::handle_response(request.send().await?).await
    }

    async fn is_authenticated(&self) -> bool {
        let token = self.api_token.read().await;
        token.as_ref().is_some_and(|token| !token.is_empty())
    }

    async fn set_api_token(&self, token: Option<String>) {
        let mut current_token = self.api_token.write().await;
        *current_token = token.filter(|token| !token.is_empty());
    }
}

impl HttpClient {
    /// Create a new HTTP client for interacting with the API using the provided URL and token.
    pub fn new(api_url: &str, api_token: &str) -> Result<Self, ApiError> {
        Self::create(Arc::new(HttpClientConfig {
            api_url: api_url.to_string(),
            api_token: Some(api_token.to_string()),
            ..Default::default()
        }))
    }

    /// Create a new HTTP client for interacting with the API using the provided configuration.
    pub fn create(config: Arc<HttpClientConfig>) -> Result<Self, ApiError> {
        let api_url = Url::parse(&config.api_url).map_err(|_| ApiError::CannotParseUrl)?;
        if api_url.cannot_be_a_base() {
            return Err(ApiError::CannotParseUrl);
        }

        if config.user_agent.is_empty() {
            return Err(ApiError::InvalidConfiguration);
        }

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            api_url,
            client,
            api_token: RwLock::new(config.api_token.clone().filter(|token| !token.is_empty())),
        })
    }

    async fn authorize(&self, request: RequestBuilder) -> Result<RequestBuilder, ApiError> {
        let token = self.api_token.read().await;
        let Some(token) = token.as_ref() else {
            return Err(ApiError::Unauthenticated);
        };

        Ok(request.header(AUTHORIZATION, format!("{AUTHORIZATION_SCHEME} {token}")))
    }

    async fn handle_response(response: Response) -> Result<Bytes, ApiError> {
        let status = response.status();
        trace!("Status: {status}.");
        if status.is_success() {
            return Ok(response.bytes().await?);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "error".to_string());
        error!("Received an invalid response, status: {status}, body: {body}");
        Err(ApiError::HttpResponseError(status.as_u16(), body))
    }
}

use crate::error::ApiError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use serde::Serialize;

pub mod client;
pub mod config;
pub mod response;
pub mod topics;

/// Executes HTTP requests against the API and returns the raw response body.
/// Non-success statuses are reported as errors by the implementation.
#[async_trait]
pub trait HttpTransport {
    /// Get full URL for the provided path.
    fn get_url(&self, path: &str) -> Result<Url, ApiError>;

    /// Invoke HTTP GET request to the API.
    async fn get(&self, path: &str) -> Result<Bytes, ApiError>;

    /// Invoke HTTP GET request to the API with query parameters.
    async fn get_with_query<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        query: &T,
    ) -> Result<Bytes, ApiError>;

    /// Invoke HTTP POST request to the API.
    async fn post<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Bytes, ApiError>;

    /// Invoke HTTP PUT request to the API.
    async fn put<T: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Bytes, ApiError>;

    /// Invoke HTTP DELETE request to the API.
    async fn delete(&self, path: &str) -> Result<Bytes, ApiError>;

    /// Returns true if the client has an API token.
    async fn is_authenticated(&self) -> bool;

    /// Set the API token.
    async fn set_api_token(&self, token: Option<String>);
}

use crate::error::ApiError;
use crate::models::topic::{Topic, TopicSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use tracing::debug;

/// Envelope wrapping every response of the API.
/// An empty `errors` list means the request succeeded.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,
}

/// A single application error listed in the envelope.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub status: u16,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(default)]
    pub topic: Option<Topic>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicsResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    #[serde(default)]
    pub topics: Option<Vec<TopicSummary>>,
}

/// Gives access to the envelope of a typed response.
pub trait Envelope {
    fn envelope(&self) -> &ApiResponse;
}

impl Envelope for ApiResponse {
    fn envelope(&self) -> &ApiResponse {
        self
    }
}

impl Envelope for TopicResponse {
    fn envelope(&self) -> &ApiResponse {
        &self.response
    }
}

impl Envelope for TopicsResponse {
    fn envelope(&self) -> &ApiResponse {
        &self.response
    }
}

impl ApiResponse {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts the listed errors into `ApiError::RemoteError`, keeping the envelope message.
    pub fn check(&self) -> Result<(), ApiError> {
        if !self.has_errors() {
            return Ok(());
        }

        debug!(
            "Response contains {} error(s): {}",
            self.errors.len(),
            self.message
        );
        Err(ApiError::RemoteError {
            message: self.message.clone(),
            errors: self.errors.clone(),
        })
    }
}

/// Decodes the raw body into the given envelope and fails if it lists any errors.
/// A body of JSON `null` is reported as `ApiError::EmptyResponse`.
pub fn decode_response<T: DeserializeOwned + Envelope>(bytes: &[u8]) -> Result<T, ApiError> {
    let response: Option<T> = serde_json::from_slice(bytes)?;
    let Some(response) = response else {
        debug!("Response body decoded to null.");
        return Err(ApiError::EmptyResponse);
    };

    response.envelope().check()?;
    Ok(response)
}

/// Interprets the body of a request which carries no payload on success.
pub fn handle_response(bytes: &[u8]) -> Result<(), ApiError> {
    decode_response::<ApiResponse>(bytes)?;
    Ok(())
}

/// Interprets the body returned by a `DELETE` request. Shared by every resource.
pub fn handle_delete_response(bytes: &[u8]) -> Result<(), ApiError> {
    decode_response::<ApiResponse>(bytes)?;
    Ok(())
}

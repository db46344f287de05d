use crate::http::response::ErrorDetail;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid configuration")]
    InvalidConfiguration,
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Request error")]
    RequestError(#[from] reqwest::Error),
    #[error("HTTP response error, status: {0}, body: {1}")]
    HttpResponseError(u16, String),
    #[error("Cannot parse URL")]
    CannotParseUrl,
    #[error("Cannot decode response")]
    CannotDecodeResponse(#[from] serde_json::Error),
    #[error("Empty response")]
    EmptyResponse,
    /// The service answered with an envelope listing application errors.
    /// Displays as the envelope message only.
    #[error("{message}")]
    RemoteError {
        message: String,
        errors: Vec<ErrorDetail>,
    },
    #[error("Cannot parse integer")]
    CannotParseInt(#[from] ParseIntError),
    #[error("Invalid {0} identifier: '{1}'")]
    InvalidIdentifier(&'static str, String),
    #[error("Invalid topic name")]
    InvalidTopicName,
    #[error("Invalid partitions count")]
    InvalidPartitionsCount,
    #[error("Invalid replication factor")]
    InvalidReplicationFactor,
    #[error("Invalid min in-sync replicas")]
    InvalidMinInsyncReplicas,
}

impl ApiError {
    pub fn as_code(&self) -> u32 {
        match self {
            ApiError::InvalidConfiguration => 2,
            ApiError::Unauthenticated => 40,
            ApiError::RequestError(_) => 52,
            ApiError::CannotParseInt(_) => 203,
            ApiError::HttpResponseError(_, _) => 300,
            ApiError::CannotParseUrl => 303,
            ApiError::EmptyResponse => 305,
            ApiError::CannotDecodeResponse(_) => 310,
            ApiError::RemoteError { .. } => 311,
            ApiError::InvalidIdentifier(_, _) => 1000,
            ApiError::InvalidTopicName => 2000,
            ApiError::InvalidPartitionsCount => 2001,
            ApiError::InvalidReplicationFactor => 2002,
            ApiError::InvalidMinInsyncReplicas => 2003,
        }
    }

    pub fn as_str(&self) -> &'static str {
        Self::from_code_as_str(self.as_code())
    }

    pub fn from_code_as_str(code: u32) -> &'static str {
        match code {
            2 => "invalid_configuration",
            40 => "unauthenticated",
            52 => "request_error",
            203 => "cannot_parse_int",
            300 => "http_response_error",
            303 => "cannot_parse_url",
            305 => "empty_response",
            310 => "cannot_decode_response",
            311 => "remote_error",
            1000 => "invalid_identifier",
            2000 => "invalid_topic_name",
            2001 => "invalid_partitions_count",
            2002 => "invalid_replication_factor",
            2003 => "invalid_min_insync_replicas",
            _ => "error",
        }
    }

    /// Errors raised while talking to the service, before any envelope was decoded.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::RequestError(_)
                | ApiError::HttpResponseError(_, _)
                | ApiError::CannotParseUrl
                | ApiError::Unauthenticated
        )
    }

    /// HTTP status reported by the service, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpResponseError(status, _) => Some(*status),
            ApiError::RemoteError { errors, .. } => errors.first().map(|error| error.status),
            ApiError::RequestError(error) => error.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

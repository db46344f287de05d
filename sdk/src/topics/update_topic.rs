use crate::error::ApiError;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// `UpdateTopicRequest` is the payload used to change an existing topic.
/// Only the fields which are set are sent, so the rest keep their current values.
/// The topic name, cleanup policy and replication factor can't be changed.
///
/// Partitions can only grow. The service rejects a lower count; the client
/// doesn't check it since it doesn't know the current one.
#[serde_as]
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UpdateTopicRequest {
    /// Minimum in-sync replicas.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_insync_replicas: Option<u32>,
    /// New number of partitions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partitions: Option<u32>,
    /// Retention limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_bytes: Option<u64>,
    /// Retention duration in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_hours: Option<u64>,
}

impl UpdateTopicRequest {
    pub fn with_min_insync_replicas(mut self, min_insync_replicas: u32) -> Self {
        self.min_insync_replicas = Some(min_insync_replicas);
        self
    }

    pub fn with_partitions(mut self, partitions: u32) -> Self {
        self.partitions = Some(partitions);
        self
    }

    pub fn with_retention_bytes(mut self, retention_bytes: u64) -> Self {
        self.retention_bytes = Some(retention_bytes);
        self
    }

    pub fn with_retention_hours(mut self, retention_hours: u64) -> Self {
        self.retention_hours = Some(retention_hours);
        self
    }
}

impl Validatable<ApiError> for UpdateTopicRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if self.partitions == Some(0) {
            return Err(ApiError::InvalidPartitionsCount);
        }

        if self.min_insync_replicas == Some(0) {
            return Err(ApiError::InvalidMinInsyncReplicas);
        }

        Ok(())
    }
}

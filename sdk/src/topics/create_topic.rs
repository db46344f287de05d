use crate::error::ApiError;
use crate::models::topic::CleanupPolicy;
use crate::topics::is_valid_topic_name;
use crate::validatable::Validatable;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

/// `CreateTopicRequest` is the payload used to create a topic in a service.
/// It has additional payload:
/// - `topic_name` - unique topic name, max length is 249 characters.
/// - `partitions` - number of partitions, at least 1.
/// - `replication` - replication factor, at least 1. Can't be changed later.
/// - `cleanup_policy` - optional cleanup policy.
/// - `min_insync_replicas` - optional minimum in-sync replicas, sent as a string.
/// - `retention_bytes` - optional retention limit in bytes.
/// - `retention_hours` - optional retention duration in hours.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreateTopicRequest {
    /// Unique topic name, max length is 249 characters.
    pub topic_name: String,
    /// Number of partitions.
    pub partitions: u32,
    /// Replication factor.
    pub replication: u32,
    /// Cleanup policy, the service default applies when not set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleanup_policy: Option<CleanupPolicy>,
    /// Minimum in-sync replicas.
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_insync_replicas: Option<u32>,
    /// Retention limit in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_bytes: Option<u64>,
    /// Retention duration in hours.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_hours: Option<u64>,
}

impl CreateTopicRequest {
    pub fn new(topic_name: &str, partitions: u32, replication: u32) -> Self {
        CreateTopicRequest {
            topic_name: topic_name.to_string(),
            partitions,
            replication,
            ..Default::default()
        }
    }

    pub fn with_cleanup_policy(mut self, cleanup_policy: CleanupPolicy) -> Self {
        self.cleanup_policy = Some(cleanup_policy);
        self
    }

    pub fn with_min_insync_replicas(mut self, min_insync_replicas: u32) -> Self {
        self.min_insync_replicas = Some(min_insync_replicas);
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

impl Default for CreateTopicRequest {
    fn default() -> Self {
        CreateTopicRequest {
            topic_name: "topic".to_string(),
            partitions: 1,
            replication: 1,
            cleanup_policy: None,
            min_insync_replicas: None,
            retention_bytes: None,
            retention_hours: None,
        }
    }
}

impl Validatable<ApiError> for CreateTopicRequest {
    fn validate(&self) -> Result<(), ApiError> {
        if !is_valid_topic_name(&self.topic_name) {
            return Err(ApiError::InvalidTopicName);
        }

        if self.partitions == 0 {
            return Err(ApiError::InvalidPartitionsCount);
        }

        if self.replication == 0 {
            return Err(ApiError::InvalidReplicationFactor);
        }

        if self.min_insync_replicas == Some(0) {
            return Err(ApiError::InvalidMinInsyncReplicas);
        }

        Ok(())
    }
}

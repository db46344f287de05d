use crate::error::ApiError;
use crate::models::partition::Partition;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use strum::{Display, EnumString};

/// `Topic` represents the details of a topic of a managed Kafka service.
/// It consists of the following fields:
/// - `topic_name`: the unique name of the topic within the service.
/// - `cleanup_policy`: how old log segments are discarded.
/// - `min_insync_replicas`: minimum in-sync replicas, transmitted as a string.
/// - `replication`: the replication factor of the topic.
/// - `retention_bytes`: the retention limit in bytes, `-1` for unlimited.
/// - `retention_hours`: the retention duration in hours, `-1` for unlimited.
/// - `state`: the lifecycle state reported by the service.
/// - `partitions`: the partitions of the topic, ordered by index.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// The unique name of the topic within the service.
    pub topic_name: String,
    /// How old log segments are discarded.
    #[serde(default)]
    pub cleanup_policy: Option<CleanupPolicy>,
    /// Minimum in-sync replicas. The service sends a string holding an integer.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub min_insync_replicas: String,
    /// The replication factor of the topic.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub replication: u32,
    /// The retention limit in bytes.
    #[serde(default)]
    pub retention_bytes: Option<i64>,
    /// The retention duration in hours.
    #[serde(default)]
    pub retention_hours: Option<i64>,
    /// The lifecycle state reported by the service.
    #[serde(default)]
    pub state: Option<TopicState>,
    /// The partitions of the topic.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub partitions: Vec<Partition>,
}

/// `TopicSummary` is the shape returned when listing the topics of a service.
/// Unlike `Topic`, `partitions` holds the partitions count only.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub topic_name: String,
    #[serde(default)]
    pub cleanup_policy: Option<CleanupPolicy>,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub min_insync_replicas: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub partitions: u32,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub replication: u32,
    #[serde(default)]
    pub retention_bytes: Option<i64>,
    #[serde(default)]
    pub retention_hours: Option<i64>,
    #[serde(default)]
    pub state: Option<TopicState>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum CleanupPolicy {
    #[serde(rename = "delete")]
    #[strum(serialize = "delete")]
    Delete,
    #[serde(rename = "compact")]
    #[strum(serialize = "compact")]
    Compact,
    #[serde(rename = "compact,delete")]
    #[strum(serialize = "compact,delete")]
    CompactDelete,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TopicState {
    Active,
    Configuring,
    Deleting,
    #[serde(other)]
    Unknown,
}

impl Topic {
    /// Parses `min_insync_replicas`, returning `None` when the service left it empty.
    pub fn min_insync_replicas_count(&self) -> Result<Option<u32>, ApiError> {
        parse_min_insync_replicas(&self.min_insync_replicas)
    }

    pub fn partitions_count(&self) -> u32 {
        u32::try_from(self.partitions.len()).unwrap_or(u32::MAX)
    }

    pub fn partition(&self, index: u32) -> Option<&Partition> {
        self.partitions
            .iter()
            .find(|partition| partition.partition == index)
    }

    pub fn is_active(&self) -> bool {
        self.state == Some(TopicState::Active)
    }
}

impl TopicSummary {
    pub fn min_insync_replicas_count(&self) -> Result<Option<u32>, ApiError> {
        parse_min_insync_replicas(&self.min_insync_replicas)
    }
}

fn parse_min_insync_replicas(value: &str) -> Result<Option<u32>, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    Ok(Some(value.parse::<u32>()?))
}

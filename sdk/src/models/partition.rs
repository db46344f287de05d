use crate::models::consumer_group::ConsumerGroup;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// `Partition` represents a single partition of a topic as observed by the service.
/// It consists of the following fields:
/// - `partition`: the index of the partition.
/// - `earliest_offset`: the oldest offset still retained.
/// - `latest_offset`: the next offset to be written.
/// - `isr`: the number of in-sync replicas.
/// - `size`: the size of the partition on disk, in bytes.
/// - `consumer_groups`: the consumer groups with a committed offset on this partition.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    /// The index of the partition.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub partition: u32,
    /// The oldest offset still retained.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub earliest_offset: i64,
    /// The next offset to be written.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub latest_offset: i64,
    /// The number of in-sync replicas.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub isr: u32,
    /// The size of the partition on disk, in bytes.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub size: i64,
    /// The consumer groups with a committed offset on this partition.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub consumer_groups: Vec<ConsumerGroup>,
}

impl Partition {
    pub fn consumer_group(&self, group_name: &str) -> Option<&ConsumerGroup> {
        self.consumer_groups
            .iter()
            .find(|group| group.group_name == group_name)
    }

    /// Number of messages between the group's committed offset and the end of the log.
    pub fn consumer_lag(&self, group_name: &str) -> Option<i64> {
        self.consumer_group(group_name)
            .map(|group| (self.latest_offset - group.offset).max(0))
    }

    pub fn messages_count(&self) -> i64 {
        (self.latest_offset - self.earliest_offset).max(0)
    }
}

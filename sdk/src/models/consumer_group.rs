use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

/// A consumer group and the offset it has committed on a partition.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsumerGroup {
    pub group_name: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub offset: i64,
}

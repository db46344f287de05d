pub mod consumer_group;
pub mod partition;
pub mod topic;

use crate::error::ApiError;
use crate::models::topic::{Topic, TopicSummary};
use crate::topics::create_topic::CreateTopicRequest;
use crate::topics::update_topic::UpdateTopicRequest;
use async_trait::async_trait;

/// This trait defines the methods to interact with the topics of a service.
/// Every method is a single request to the API, nothing is retried or cached.
#[async_trait]
pub trait TopicClient {
    /// Get the details of the topic by its name.
    ///
    /// Fails with `ApiError::EmptyResponse` when the API reports success without a topic.
    async fn get_topic(
        &self,
        project: &str,
        service: &str,
        topic_name: &str,
    ) -> Result<Topic, ApiError>;
    /// Get the topics of the service.
    async fn get_topics(&self, project: &str, service: &str)
        -> Result<Vec<TopicSummary>, ApiError>;
    /// Create a new topic in the service.
    async fn create_topic(
        &self,
        project: &str,
        service: &str,
        request: &CreateTopicRequest,
    ) -> Result<(), ApiError>;
    /// Update the topic by its name.
    ///
    /// The partitions count can only grow, which is enforced by the service.
    async fn update_topic(
        &self,
        project: &str,
        service: &str,
        topic_name: &str,
        request: &UpdateTopicRequest,
    ) -> Result<(), ApiError>;
    /// Delete the topic by its name.
    async fn delete_topic(
        &self,
        project: &str,
        service: &str,
        topic_name: &str,
    ) -> Result<(), ApiError>;
}

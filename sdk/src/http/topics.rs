use crate::client::TopicClient;
use crate::error::ApiError;
use crate::http::client::HttpClient;
use crate::http::response::{
    decode_response, handle_delete_response, handle_response, TopicResponse, TopicsResponse,
};
use crate::http::HttpTransport;
use crate::identifier;
use crate::models::topic::{Topic, TopicSummary};
use crate::topics::create_topic::CreateTopicRequest;
use crate::topics::update_topic::UpdateTopicRequest;
use crate::validatable::Validatable;
use async_trait::async_trait;

#[async_trait]
impl TopicClient for HttpClient {
    async fn get_topic(
        &self,
        project: &str,
        service: &str,
        topic_name: &str,
    ) -> Result<Topic, ApiError> {
        get_topic(self, project, service, topic_name).await
    }

    async fn get_topics(
        &self,
        project: &str,
        service: &str,
    ) -> Result<Vec<TopicSummary>, ApiError> {
        get_topics(self, project, service).await
    }

    async fn create_topic(
        &self,
        project: &str,
        service: &str,
        request: &CreateTopicRequest,
    ) -> Result<(), ApiError> {
        create_topic(self, project, service, request).await
    }

    async fn update_topic(
        &self,
        project: &str,
        service: &str,
        topic_name: &str,
        request: &UpdateTopicRequest,
    ) -> Result<(), ApiError> {
        update_topic(self, project, service, topic_name, request).await
    }

    async fn delete_topic(
        &self,
        project: &str,
        service: &str,
        topic_name: &str,
    ) -> Result<(), ApiError> {
        delete_topic(self, project, service, topic_name).await
    }
}

pub async fn get_topic<T: HttpTransport>(
    transport: &T,
    project: &str,
    service: &str,
    topic_name: &str,
) -> Result<Topic, ApiError> {
    let path = get_details_path(project, service, topic_name)?;
    let bytes = transport.get(&path).await?;
    let response = decode_response::<TopicResponse>(&bytes)?;
    response.topic.ok_or(ApiError::EmptyResponse)
}

pub async fn get_topics<T: HttpTransport>(
    transport: &T,
    project: &str,
    service: &str,
) -> Result<Vec<TopicSummary>, ApiError> {
    let path = get_path(project, service)?;
    let bytes = transport.get(&path).await?;
    let response = decode_response::<TopicsResponse>(&bytes)?;
    Ok(response.topics.unwrap_or_default())
}

pub async fn create_topic<T: HttpTransport>(
    transport: &T,
    project: &str,
    service: &str,
    request: &CreateTopicRequest,
) -> Result<(), ApiError> {
    let path = get_path(project, service)?;
    request.validate()?;
    let bytes = transport.post(&path, request).await?;
    handle_response(&bytes)
}

pub async fn update_topic<T: HttpTransport>(
    transport: &T,
    project: &str,
    service: &str,
    topic_name: &str,
    request: &UpdateTopicRequest,
) -> Result<(), ApiError> {
    let path = get_details_path(project, service, topic_name)?;
    request.validate()?;
    let bytes = transport.put(&path, request).await?;
    handle_response(&bytes)
}

pub async fn delete_topic<T: HttpTransport>(
    transport: &T,
    project: &str,
    service: &str,
    topic_name: &str,
) -> Result<(), ApiError> {
    let path = get_details_path(project, service, topic_name)?;
    let bytes = transport.delete(&path).await?;
    handle_delete_response(&bytes)
}

fn get_path(project: &str, service: &str) -> Result<String, ApiError> {
    identifier::validate("project", project)?;
    identifier::validate("service", service)?;
    Ok(format!("/project/{project}/service/{service}/topic"))
}

fn get_details_path(project: &str, service: &str, topic_name: &str) -> Result<String, ApiError> {
    let path = get_path(project, service)?;
    identifier::validate("topic", topic_name)?;
    Ok(format!("{path}/{topic_name}"))
}

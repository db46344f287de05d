use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::Router;
use service_topics::http::client::HttpClient;
use service_topics::http::config::HttpClientConfig;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const API_TOKEN: &str = "secret-token";
pub const USER_AGENT: &str = "service-topics-tests";

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub authorization: Option<String>,
    pub user_agent: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default)]
struct ServerState {
    responses: Arc<HashMap<(String, String), (u16, String)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Local HTTP server answering with canned bodies per method and path.
#[derive(Debug, Default)]
pub struct TestServer {
    responses: HashMap<(String, String), (u16, String)>,
}

pub struct RunningServer {
    pub address: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl TestServer {
    pub fn new() -> Self {
        TestServer::default()
    }

    pub fn respond(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    pub async fn start(self) -> RunningServer {
        let state = ServerState {
            responses: Arc::new(self.responses),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = state.requests.clone();
        let router = Router::new().fallback(handle).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        RunningServer { address, requests }
    }
}

impl RunningServer {
    pub fn api_url(&self) -> String {
        format!("http://{}/v1", self.address)
    }

    pub fn client(&self) -> HttpClient {
        HttpClient::create(Arc::new(HttpClientConfig {
            api_url: self.api_url(),
            api_token: Some(API_TOKEN.to_string()),
            user_agent: USER_AGENT.to_string(),
            ..HttpClientConfig::default()
        }))
        .unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(state): State<ServerState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string())
    };
    let path = uri.path().to_string();
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: path.clone(),
        authorization: header("authorization"),
        user_agent: header("user-agent"),
        body: serde_json::from_slice(&body).ok(),
    });

    match state.responses.get(&(method.to_string(), path)) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap(),
            body.to_string(),
        ),
        None => (
            StatusCode::NOT_FOUND,
            r#"{"errors":[{"status":404,"message":"Not found"}],"message":"Not found"}"#
                .to_string(),
        ),
    }
}

//! reqwest transport for native builds

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

/// HTTP transport bound to one API base URL
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Create a transport for `base_url` with a per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Build(e.to_string()))?;

        Ok(Self {
            client,
            base_url: super::normalize_base_url(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };
        if let Some(body) = &request.body {
            // Sets Content-Type: application/json
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_builder() {
                TransportError::Build(e.to_string())
            } else {
                TransportError::Connect(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::error::ClientError;
    use crate::model::{Credentials, Topic, TopicRequest};
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};

    async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
        if body["password"] == "secret" {
            (StatusCode::OK, Json(json!({"message": "Login successful"})))
        } else {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"detail": "Invalid email or password"})),
            )
        }
    }

    async fn topics(Path(email): Path<String>) -> (StatusCode, Json<Value>) {
        if email == "a+b@x.com" {
            (StatusCode::OK, Json(json!(["graphs", "3D Object Detection"])))
        } else {
            (StatusCode::NOT_FOUND, Json(json!({"detail": "User not found"})))
        }
    }

    async fn delete_topic(headers: HeaderMap, Json(body): Json<Value>) -> StatusCode {
        let json_content = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("application/json"))
            .unwrap_or(false);
        if json_content && body["topic"] == "graphs" {
            StatusCode::OK
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    async fn papers(Path(topic): Path<String>) -> Json<Value> {
        Json(json!([{ "title_paper": topic, "paper_authors": null }]))
    }

    async fn spawn_server() -> String {
        let app = Router::new()
            .route("/", get(|| async { Json(json!({"message": "Topic Manager API"})) }))
            .route("/login", post(login))
            .route("/topics/:email", get(topics))
            .route("/topics", axum::routing::delete(delete_topic))
            .route("/papers/:topic", get(papers));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn client(base: &str) -> ApiClient<HttpTransport> {
        ApiClient::new(HttpTransport::new(base, Duration::from_secs(5)).unwrap())
    }

    #[tokio::test]
    async fn test_round_trip_against_server() {
        let base = spawn_server().await;
        let api = client(&base);
        assert!(!api.transport().base_url().ends_with('/'));

        assert_eq!(api.ping().await.unwrap(), "Topic Manager API");

        api.login(&Credentials::new("a+b@x.com", "secret")).await.unwrap();
        let err = api
            .login(&Credentials::new("a+b@x.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.detail_or("Login failed"), "Invalid email or password");

        let topics = api.list_topics("a+b@x.com").await.unwrap();
        assert_eq!(topics.len(), 2);
        let err = api.list_topics("nobody@x.com").await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 404, .. }));

        api.delete_topic(&TopicRequest {
            email: "a+b@x.com".to_string(),
            topic: Topic::new("graphs"),
        })
        .await
        .unwrap();

        let papers = api
            .list_papers(&Topic::new("3D Object/Detection"))
            .await
            .unwrap();
        assert_eq!(papers[0].title_paper.as_deref(), Some("3D Object/Detection"));
        assert_eq!(papers[0].paper_authors, None);
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{}", addr)).ping().await.unwrap_err();
        assert!(err.is_network());
    }
}

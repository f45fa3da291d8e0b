//! Topic Service API Client
//!
//! Typed operations over the service's REST endpoints.
//!
//! # Endpoints
//!
//! - `GET /` - Ping
//! - `POST /register` - Create an account
//! - `POST /login` - Check credentials
//! - `GET /topics/{email}` - List a user's topics
//! - `POST /topics` - Add a topic
//! - `DELETE /topics` - Delete a topic
//! - `GET /papers/{topic}` - Papers collected for a topic
//!
//! Non-2xx responses become [`ClientError::Api`] carrying the body's
//! `detail`. Anything that prevents a usable response, including a 2xx body
//! of the wrong shape, becomes [`ClientError::Network`].

#[cfg(feature = "native")]
pub mod http;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;

pub use transport::{ApiRequest, ApiResponse, Method, Transport, TransportError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ClientError, ClientResult};
use crate::model::{Credentials, ErrorBody, Paper, PingResponse, Topic, TopicRequest};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8777";

/// Normalize a base URL: trim whitespace and trailing slashes
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Path for listing a user's topics
pub fn topics_path(email: &str) -> String {
    format!("/topics/{}", urlencoding::encode(email))
}

/// Path for listing the papers of a topic. The whole name is one segment.
pub fn papers_path(topic: &Topic) -> String {
    format!("/papers/{}", urlencoding::encode(topic.as_str()))
}

/// Client for the topic service
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Check that the service answers; returns its greeting
    pub async fn ping(&self) -> ClientResult<String> {
        let response = self.execute(ApiRequest::get("/")).await?;
        let ping: PingResponse = decode(&response)?;
        Ok(ping.message)
    }

    pub async fn register(&self, credentials: &Credentials) -> ClientResult<()> {
        self.post_expect_json(Method::Post, "/register", credentials).await
    }

    /// Succeeds when the server accepts the credentials. No token is issued;
    /// the service authorizes later calls by email alone.
    pub async fn login(&self, credentials: &Credentials) -> ClientResult<()> {
        self.post_expect_json(Method::Post, "/login", credentials).await
    }

    pub async fn list_topics(&self, email: &str) -> ClientResult<Vec<Topic>> {
        let response = self.execute(ApiRequest::get(topics_path(email))).await?;
        decode(&response)
    }

    pub async fn add_topic(&self, request: &TopicRequest) -> ClientResult<()> {
        self.post_expect_json(Method::Post, "/topics", request).await
    }

    /// The success body is not inspected.
    pub async fn delete_topic(&self, request: &TopicRequest) -> ClientResult<()> {
        let body = serde_json::to_value(request)?;
        self.execute(ApiRequest::with_body(Method::Delete, "/topics", body))
            .await?;
        Ok(())
    }

    pub async fn list_papers(&self, topic: &Topic) -> ClientResult<Vec<Paper>> {
        let response = self.execute(ApiRequest::get(papers_path(topic))).await?;
        decode(&response)
    }

    /// Send a request with a JSON body and require the 2xx response to be
    /// JSON; its content is otherwise ignored.
    async fn post_expect_json<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<()> {
        let body = serde_json::to_value(body)?;
        let response = self
            .execute(ApiRequest::with_body(method, path, body))
            .await?;
        let _: serde_json::Value = decode(&response)?;
        Ok(())
    }

    /// Send the request and turn non-2xx statuses into [`ClientError::Api`]
    async fn execute(&self, request: ApiRequest) -> ClientResult<ApiResponse> {
        let method = request.method;
        let path = request.path.clone();
        tracing::debug!(%method, %path, "sending request");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%method, %path, error = %e, "request failed");
                return Err(e.into());
            }
        };

        if response.ok() {
            return Ok(response);
        }

        // The error body is decoded on its own; a body that is not JSON
        // simply has no detail.
        let detail = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(ErrorBody::into_detail);
        tracing::debug!(%method, %path, status = response.status, ?detail, "API error");

        Err(ClientError::Api {
            status: response.status,
            detail,
        })
    }
}

fn decode<R: DeserializeOwned>(response: &ApiResponse) -> ClientResult<R> {
    Ok(serde_json::from_str(&response.body)?)
}

//! HTTP API Client
//!
//! gloo-net transport for the shared [`ApiClient`] and the persisted API
//! base URL.

use async_trait::async_trait;
use gloo_net::http::Request;

use topicdesk::api::{
    normalize_base_url, ApiClient, ApiRequest, ApiResponse, Method, Transport, TransportError,
    DEFAULT_API_BASE,
};

/// Local storage key holding the API base URL
pub const API_URL_KEY: &str = "topicdesk_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    normalize_base_url(&url)
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, &normalize_base_url(url));
        }
    }
}

/// Client bound to the stored base URL
pub fn client_from_storage() -> ApiClient<GlooTransport> {
    ApiClient::new(GlooTransport::new(&get_api_base()))
}

/// Browser fetch transport
#[derive(Clone, Debug)]
pub struct GlooTransport {
    base_url: String,
}

impl GlooTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = self.url(&request.path);

        let builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Delete => Request::delete(&url),
        };

        let sent = match &request.body {
            // `json` sets Content-Type: application/json
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| TransportError::Build(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let response = sent.map_err(|e| TransportError::Connect(e.to_string()))?;

        let status = response.status();
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

    #[test]
    fn test_url_joins_base_and_path() {
        let transport = GlooTransport::new("http://localhost:8777/");
        assert_eq!(transport.base_url(), "http://localhost:8777");
        assert_eq!(transport.url("/papers/a%20b"), "http://localhost:8777/papers/a%20b");
    }
}

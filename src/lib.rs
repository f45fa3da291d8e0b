//! # Topic Desk
//!
//! Client for a research topic and paper tracking service: register, log in,
//! keep a list of topics, and read the papers collected for each one.
//!
//! ## Modules
//!
//! - [`api`]: Typed client for the service's REST API over a pluggable transport
//! - [`view`]: The dashboard as a synchronous view state machine
//! - [`render`]: Plain-text rendering of the view state
//! - [`dashboard`]: Async driver pairing the API client with the view state (native)
//! - [`config`]: TOML and environment configuration (native)
//!
//! The `native` feature (default) adds the reqwest transport, the async
//! driver, configuration and the CLI. Without it the crate builds for
//! `wasm32` and backs the browser dashboard.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use topicdesk::api::{http::HttpTransport, ApiClient};
//! use topicdesk::dashboard::Dashboard;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new("http://localhost:8777", Duration::from_secs(30))?;
//!     let mut dashboard = Dashboard::new(ApiClient::new(transport), Duration::from_millis(1500));
//!
//!     dashboard.login("me@example.com", "secret").await;
//!     println!("{}", topicdesk::render::render(dashboard.state()));
//!
//!     Ok(())
//! }
//! ```

pub mod api;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod dashboard;
pub mod error;
pub mod model;
pub mod render;
pub mod session;
pub mod view;

// Re-export top-level types for convenience
pub use api::{ApiClient, ApiRequest, ApiResponse, Method, Transport, TransportError};
pub use error::{ClientError, ClientResult};
pub use model::{Credentials, Paper, Topic, TopicRequest};
pub use session::Session;
pub use view::{
    DashboardState, DeleteOutcome, PaperCard, PapersPanel, Pending, RequestToken, ReturnTicket,
    TopicRow, TopicsPanel, View,
};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError};
#[cfg(feature = "native")]
pub use dashboard::{Dashboard, Prompt};

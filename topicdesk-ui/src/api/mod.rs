//! API access for the browser

pub mod client;

pub use client::{client_from_storage, get_api_base, set_api_base, GlooTransport};

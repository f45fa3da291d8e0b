//! State Management
//!
//! Global application state and request orchestration.

pub mod global;

pub use global::{provide_app_state, use_app_state, AppState};

//! Fixed user-facing strings

pub const REGISTER_SUCCESS: &str = "Registration successful! You can now login.";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const NETWORK_RETRY: &str = "Network error. Please try again.";

pub const NO_TOPICS: &str = "No topics found. Add your first topic!";
pub const TOPICS_FAILED: &str = "Failed to load topics";
pub const TOPICS_NETWORK: &str = "Failed to load topics. Network error.";

pub const TOPIC_ADDED: &str = "Topic added successfully!";
pub const ADD_TOPIC_FAILED: &str = "Failed to add topic";
pub const ADD_TOPIC_LOGGED_OUT: &str = "You must be logged in to add a topic.";

pub const DELETE_CONFIRM: &str = "Are you sure you want to delete this topic?";
pub const DELETE_FAILED_PREFIX: &str = "Failed to delete topic";
pub const DELETE_UNKNOWN_DETAIL: &str = "Unknown error";

pub const PAPERS_HEADING_PREFIX: &str = "Related Papers for";
pub const NO_PAPERS: &str = "No papers found for this topic.";
pub const PAPERS_FAILED: &str = "Failed to load papers.";
pub const PAPERS_NETWORK: &str = "Network error. Could not fetch paper data.";

pub const NO_TITLE: &str = "No Title";
pub const UNKNOWN_AUTHORS: &str = "Unknown Authors";
pub const NO_CONTENT: &str = "No content available.";
pub const NO_NOVELTY: &str = "No novelty analysis available.";

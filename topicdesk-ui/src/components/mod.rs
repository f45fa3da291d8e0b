//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod connection;
pub mod loading;
pub mod nav;
pub mod notice;
pub mod paper_card;
pub mod topic_row;

pub use connection::ConnectionSettings;
pub use loading::Loading;
pub use nav::Nav;
pub use notice::{Notice, NoticeVariant};
pub use paper_card::PaperCard;
pub use topic_row::TopicRow;

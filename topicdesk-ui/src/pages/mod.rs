//! Pages
//!
//! One component per view of the dashboard state.

pub mod add_topic;
pub mod dashboard;
pub mod login;
pub mod register;

pub use add_topic::AddTopic;
pub use dashboard::Dashboard;
pub use login::Login;
pub use register::Register;

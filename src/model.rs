//! Data Model
//!
//! Wire types for the topic and paper service.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A user-scoped subject label. The string itself is the identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Topic(String);

impl Topic {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Topic {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Topic {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// One paper collected for a topic. Every field may be absent or null.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Paper {
    #[serde(default)]
    pub title_paper: Option<String>,
    #[serde(default)]
    pub paper_authors: Option<String>,
    /// Free-text summary
    #[serde(default)]
    pub content: Option<String>,
    /// Free-text novelty analysis
    #[serde(default)]
    pub novelty: Option<String>,
}

/// Body of `POST /register` and `POST /login`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `POST /topics` and `DELETE /topics`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TopicRequest {
    pub email: String,
    pub topic: Topic,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The detail as display text. Validation errors carry a list or object
    /// instead of a string; those are rendered as compact JSON.
    pub fn into_detail(self) -> Option<String> {
        match self.detail? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}

/// Body of `GET /`
#[derive(Debug, Deserialize)]
pub struct PingResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_is_transparent() {
        let topics: Vec<Topic> = serde_json::from_str(r#"["3D Object Detection", "LLM agents"]"#).unwrap();
        assert_eq!(topics[0].as_str(), "3D Object Detection");
        assert_eq!(topics[1].to_string(), "LLM agents");

        let json = serde_json::to_string(&TopicRequest {
            email: "a@b.com".to_string(),
            topic: Topic::new("graphs"),
        })
        .unwrap();
        assert_eq!(json, r#"{"email":"a@b.com","topic":"graphs"}"#);
    }

    #[test]
    fn test_paper_tolerates_missing_and_null_fields() {
        let papers: Vec<Paper> = serde_json::from_str(
            r#"[
                {"title_paper": "Attention", "paper_authors": null, "score": 0.9},
                {}
            ]"#,
        )
        .unwrap();

        assert_eq!(papers[0].title_paper.as_deref(), Some("Attention"));
        assert_eq!(papers[0].paper_authors, None);
        assert_eq!(papers[1], Paper::default());
    }

    #[test]
    fn test_error_body_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "User not found"}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some("User not found"));

        let body: ErrorBody = serde_json::from_str(r#"{"detail": [{"msg": "bad email"}]}"#).unwrap();
        assert_eq!(body.into_detail().as_deref(), Some(r#"[{"msg":"bad email"}]"#));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "x"}"#).unwrap();
        assert_eq!(body.into_detail(), None);
    }
}

//! Scripted in-memory transport for tests

use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::VecDeque;

use super::transport::{ApiRequest, ApiResponse, Transport, TransportError};

/// Answers requests from a queue of scripted outcomes and records every
/// request it receives. An empty queue answers with a connection error.
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    outcomes: RefCell<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.outcomes
            .borrow_mut()
            .push_back(Ok(ApiResponse::new(status, body)));
    }

    pub(crate) fn fail(&self, error: TransportError) {
        self.outcomes.borrow_mut().push_back(Err(error));
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// Paths of the recorded requests, in order
    pub(crate) fn paths(&self) -> Vec<String> {
        self.requests.borrow().iter().map(|r| r.path.clone()).collect()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.outcomes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connect("no scripted response".to_string())))
    }
}

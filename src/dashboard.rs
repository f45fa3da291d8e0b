//! Async dashboard driver
//!
//! Pairs an [`ApiClient`] with a [`DashboardState`] and performs each
//! request between its `begin_*` and `apply_*` halves. Requests run one at a
//! time; the CLI shell is its only caller besides the tests.

use std::time::Duration;

use crate::api::{ApiClient, Transport};
use crate::model::Topic;
use crate::view::{text, DashboardState, DeleteOutcome, Pending, ReturnTicket, View};

/// Interactive confirmation and blocking alerts
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// The client: API access plus view state
pub struct Dashboard<T> {
    client: ApiClient<T>,
    state: DashboardState,
}

impl<T: Transport> Dashboard<T> {
    pub fn new(client: ApiClient<T>, return_delay: Duration) -> Self {
        Self {
            client,
            state: DashboardState::new(return_delay),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn show_login(&mut self) {
        self.state.show_login();
    }

    pub fn show_register(&mut self) {
        self.state.show_register();
    }

    pub fn show_add_topic(&mut self) {
        self.state.show_add_topic();
    }

    /// Switch to the dashboard and refresh the topic list
    pub async fn show_dashboard(&mut self) {
        let refresh = self.state.show_dashboard();
        self.run_topics(refresh).await;
    }

    pub async fn register(&mut self, email: &str, password: &str) {
        self.state.register_form.email = email.to_string();
        self.state.register_form.password = password.to_string();

        let pending = self.state.begin_register();
        let result = self.client.register(&pending.request).await;
        self.state.apply_register(pending.token, result);
    }

    pub async fn login(&mut self, email: &str, password: &str) {
        self.state.login_form.email = email.to_string();
        self.state.login_form.password = password.to_string();

        let pending = self.state.begin_login();
        let result = self.client.login(&pending.request).await;
        let refresh = self.state.apply_login(pending.token, result);
        self.run_topics(refresh).await;
    }

    pub fn logout(&mut self) {
        self.state.logout();
    }

    /// Does nothing when logged out
    pub async fn load_topics(&mut self) {
        let pending = self.state.begin_load_topics();
        self.run_topics(pending).await;
    }

    /// Submit `topic`. On success the returned ticket must be passed to
    /// [`finish_add_topic`](Self::finish_add_topic).
    pub async fn add_topic(&mut self, topic: &str) -> Option<ReturnTicket> {
        self.state.topic_form.topic = topic.to_string();

        let pending = self.state.begin_add_topic()?;
        let result = self.client.add_topic(&pending.request).await;
        self.state.apply_add_topic(pending.token, result)
    }

    /// Wait out the ticket's delay, then return to the dashboard unless the
    /// view changed in the meantime
    pub async fn finish_add_topic(&mut self, ticket: ReturnTicket) {
        tokio::time::sleep(ticket.delay).await;
        let refresh = self.state.complete_return(ticket);
        self.run_topics(refresh).await;
    }

    /// Delete after confirmation. Returns whether a request was sent.
    pub async fn delete_topic(&mut self, topic: Topic, prompt: &dyn Prompt) -> bool {
        if !prompt.confirm(text::DELETE_CONFIRM) {
            return false;
        }
        let Some(pending) = self.state.begin_delete_topic(topic) else {
            return false;
        };

        let result = self.client.delete_topic(&pending.request).await;
        match self.state.apply_delete_topic(pending.token, result) {
            Some(DeleteOutcome::Refresh(refresh)) => self.run_topics(Some(refresh)).await,
            Some(DeleteOutcome::Alert(message)) => prompt.alert(&message),
            None => {}
        }
        true
    }

    /// Papers are shown on the dashboard, so switch there first if needed
    pub async fn view_papers(&mut self, topic: Topic) {
        if self.state.view() != View::Dashboard {
            self.show_dashboard().await;
        }
        let pending = self.state.begin_view_papers(topic);
        let result = self.client.list_papers(&pending.request).await;
        self.state.apply_papers(pending.token, result);
    }

    async fn run_topics(&mut self, pending: Option<Pending<String>>) {
        if let Some(pending) = pending {
            let result = self.client.list_topics(&pending.request).await;
            self.state.apply_topics(pending.token, result);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::api::{Method, TransportError};
    use crate::view::{PapersPanel, TopicsPanel, DEFAULT_RETURN_DELAY};
    use std::cell::RefCell;

    struct FakePrompt {
        answer: bool,
        asked: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
    }

    impl FakePrompt {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                asked: RefCell::new(Vec::new()),
                alerts: RefCell::new(Vec::new()),
            }
        }
    }

    impl Prompt for FakePrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    fn dashboard(transport: &ScriptedTransport) -> Dashboard<&ScriptedTransport> {
        Dashboard::new(ApiClient::new(transport), DEFAULT_RETURN_DELAY)
    }

    fn topics_requests(transport: &ScriptedTransport) -> usize {
        transport
            .paths()
            .iter()
            .filter(|p| p.starts_with("/topics/"))
            .count()
    }

    async fn logged_in<'a>(transport: &'a ScriptedTransport, topics: &str) -> Dashboard<&'a ScriptedTransport> {
        transport.respond(200, r#"{"message": "Login successful"}"#);
        transport.respond(200, topics);
        let mut dash = dashboard(transport);
        dash.login("a@b.com", "pw").await;
        dash
    }

    #[tokio::test]
    async fn test_login_success_loads_topics_once() {
        let transport = ScriptedTransport::new();
        let dash = logged_in(&transport, r#"["graphs"]"#).await;

        assert_eq!(dash.state().view(), View::Dashboard);
        assert_eq!(dash.state().user_label(), Some("a@b.com"));
        assert_eq!(transport.paths(), vec!["/login", "/topics/a%40b.com"]);
        assert_eq!(topics_requests(&transport), 1);
    }

    #[tokio::test]
    async fn test_login_invalid_credentials() {
        let transport = ScriptedTransport::new();
        transport.respond(401, r#"{"detail": "Invalid credentials"}"#);
        let mut dash = dashboard(&transport);

        dash.login("a@b.com", "wrong").await;
        assert_eq!(dash.state().view(), View::Login);
        assert_eq!(dash.state().login_error(), Some("Invalid credentials"));
        assert_eq!(topics_requests(&transport), 0);
    }

    #[tokio::test]
    async fn test_empty_topics_show_empty_state() {
        let transport = ScriptedTransport::new();
        let dash = logged_in(&transport, "[]").await;
        assert_eq!(dash.state().topics(), &TopicsPanel::NoTopics);
    }

    #[tokio::test]
    async fn test_row_click_requests_that_topic() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, r#"["graphs", "3D Object Detection"]"#).await;

        let TopicsPanel::Rows(rows) = dash.state().topics().clone() else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);

        for row in rows {
            transport.respond(200, "[]");
            dash.view_papers(row.topic.clone()).await;
            assert_eq!(transport.paths().last(), Some(&row.papers_path()));
        }
        assert_eq!(transport.paths().last().map(String::as_str), Some("/papers/3D%20Object%20Detection"));
        assert_eq!(dash.state().papers(), &PapersPanel::NoPapers);
    }

    #[tokio::test]
    async fn test_papers_outside_dashboard_switch_views() {
        let transport = ScriptedTransport::new();
        transport.respond(200, r#"[{"title_paper": "On Graphs"}]"#);
        let mut dash = dashboard(&transport);

        dash.view_papers(Topic::new("graphs")).await;
        assert_eq!(dash.state().view(), View::Dashboard);
        assert_eq!(transport.paths(), vec!["/papers/graphs"]);
        let PapersPanel::Cards(cards) = dash.state().papers() else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].title, "On Graphs");
        assert!(crate::render::render(dash.state()).contains("# On Graphs"));
    }

    #[tokio::test]
    async fn test_papers_from_add_topic_refresh_topics_first() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, r#"["graphs"]"#).await;
        dash.show_add_topic();

        transport.respond(200, r#"["graphs"]"#);
        transport.respond(200, "[]");
        dash.view_papers(Topic::new("graphs")).await;

        assert_eq!(dash.state().view(), View::Dashboard);
        assert_eq!(&transport.paths()[2..], ["/topics/a%40b.com", "/papers/graphs"]);
        assert_eq!(dash.state().papers(), &PapersPanel::NoPapers);
    }

    #[tokio::test]
    async fn test_declined_delete_sends_nothing() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, r#"["graphs"]"#).await;
        let before = transport.requests().len();

        let prompt = FakePrompt::answering(false);
        assert!(!dash.delete_topic(Topic::new("graphs"), &prompt).await);
        assert_eq!(transport.requests().len(), before);
        assert_eq!(prompt.asked.borrow().as_slice(), [text::DELETE_CONFIRM]);
    }

    #[tokio::test]
    async fn test_confirmed_delete_refreshes() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, r#"["graphs"]"#).await;
        transport.respond(200, r#"{"message": "Topic deleted successfully"}"#);
        transport.respond(200, "[]");

        let prompt = FakePrompt::answering(true);
        assert!(dash.delete_topic(Topic::new("graphs"), &prompt).await);

        let requests = transport.requests();
        assert_eq!(requests[2].method, Method::Delete);
        assert_eq!(topics_requests(&transport), 2);
        assert_eq!(dash.state().topics(), &TopicsPanel::NoTopics);
        assert!(prompt.alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_alerts() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, r#"["graphs"]"#).await;
        transport.respond(404, r#"{"detail": "Topic not found"}"#);

        let prompt = FakePrompt::answering(true);
        dash.delete_topic(Topic::new("graphs"), &prompt).await;
        assert_eq!(
            prompt.alerts.borrow().as_slice(),
            ["Failed to delete topic: Topic not found"]
        );
        assert_eq!(topics_requests(&transport), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_add_topic_returns_after_delay() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, "[]").await;
        dash.show_add_topic();
        transport.respond(200, r#"{"message": "Topic added successfully"}"#);
        transport.respond(200, r#"["graphs"]"#);

        let ticket = dash.add_topic("graphs").await.unwrap();
        assert_eq!(dash.state().add_topic_status().success.as_deref(), Some(text::TOPIC_ADDED));
        assert_eq!(topics_requests(&transport), 1);

        let started = tokio::time::Instant::now();
        dash.finish_add_topic(ticket).await;
        assert!(started.elapsed() >= Duration::from_millis(1500));

        assert_eq!(topics_requests(&transport), 2);
        assert_eq!(dash.state().view(), View::Dashboard);
        assert_eq!(dash.state().add_topic_status().success, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_cancels_pending_return() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, "[]").await;
        dash.show_add_topic();
        transport.respond(200, "{}");

        let ticket = dash.add_topic("graphs").await.unwrap();
        dash.show_login();
        dash.finish_add_topic(ticket).await;

        assert_eq!(dash.state().view(), View::Login);
        assert_eq!(topics_requests(&transport), 1);
    }

    #[tokio::test]
    async fn test_network_errors_use_fixed_text() {
        let transport = ScriptedTransport::new();
        let mut dash = dashboard(&transport);

        dash.show_register();
        transport.respond(400, r#"{"detail": "Email already registered"}"#);
        dash.register("a@b.com", "pw").await;
        assert_eq!(
            dash.state().register_status().error.as_deref(),
            Some("Email already registered")
        );

        transport.fail(TransportError::Timeout);
        dash.register("a@b.com", "pw").await;
        assert_eq!(dash.state().register_status().error.as_deref(), Some(text::NETWORK_RETRY));

        transport.fail(TransportError::Connect("refused".to_string()));
        dash.login("a@b.com", "pw").await;
        assert_eq!(dash.state().login_error(), Some(text::NETWORK_RETRY));

        let mut dash = logged_in(&transport, r#"["graphs"]"#).await;
        transport.fail(TransportError::Timeout);
        dash.load_topics().await;
        assert_eq!(dash.state().topics(), &TopicsPanel::Error(text::TOPICS_NETWORK.to_string()));
        assert!(!dash.state().topics_loading());

        transport.fail(TransportError::Timeout);
        dash.view_papers(Topic::new("graphs")).await;
        assert_eq!(dash.state().papers(), &PapersPanel::Error(text::PAPERS_NETWORK.to_string()));

        dash.show_add_topic();
        transport.fail(TransportError::Timeout);
        assert!(dash.add_topic("graphs").await.is_none());
        assert_eq!(dash.state().add_topic_status().error.as_deref(), Some(text::NETWORK_RETRY));

        let prompt = FakePrompt::answering(true);
        transport.fail(TransportError::Timeout);
        dash.delete_topic(Topic::new("graphs"), &prompt).await;
        assert_eq!(prompt.alerts.borrow().as_slice(), [text::NETWORK_RETRY]);
    }

    #[tokio::test]
    async fn test_logout_is_local() {
        let transport = ScriptedTransport::new();
        let mut dash = logged_in(&transport, r#"["graphs"]"#).await;
        let before = transport.requests().len();

        dash.logout();
        assert_eq!(transport.requests().len(), before);
        assert_eq!(dash.state().view(), View::Login);

        dash.load_topics().await;
        assert_eq!(transport.requests().len(), before);
    }
}

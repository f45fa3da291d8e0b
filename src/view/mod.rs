//! Dashboard View State
//!
//! The whole client as a synchronous state machine. Every user action that
//! talks to the API is split in two halves:
//!
//! - `begin_*` updates the view (loading indicators, cleared panels) and
//!   returns a [`Pending`] request stamped with a [`RequestToken`]
//! - `apply_*` folds the response back in, if the token is still current
//!
//! Drivers (the CLI's async [`Dashboard`](crate::dashboard::Dashboard), the
//! browser app) perform the I/O between the two halves. Follow-up requests
//! such as the topic refresh after login are returned as values for the
//! driver to execute.
//!
//! A token goes stale when the view changes (navigation epoch) or when a newer
//! request for the same region starts. Stale responses are dropped so a slow
//! answer never writes into a view the user has left.

pub mod text;

use std::fmt;
use std::time::Duration;

use crate::api;
use crate::error::{ClientError, ClientResult};
use crate::model::{Credentials, Paper, Topic, TopicRequest};
use crate::session::Session;

/// Delay between a successful add-topic and the return to the dashboard
pub const DEFAULT_RETURN_DELAY: Duration = Duration::from_millis(1500);

/// The mutually exclusive screens
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Login,
    Register,
    Dashboard,
    AddTopic,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::Register => "register",
            View::Dashboard => "dashboard",
            View::AddTopic => "add-topic",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email and password inputs of the login and register forms
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

impl CredentialsForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(self.email.clone(), self.password.clone())
    }
}

/// Input of the add-topic form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicForm {
    pub topic: String,
}

/// Inline success and error messages under a form. At most one is shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl FormStatus {
    fn succeed(&mut self, message: &str) {
        self.success = Some(message.to_string());
        self.error = None;
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.success = None;
    }
}

/// One row of the topic list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicRow {
    pub topic: Topic,
}

impl TopicRow {
    /// Request path the row's click target fetches
    pub fn papers_path(&self) -> String {
        api::papers_path(&self.topic)
    }
}

/// Content of the topic list region
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TopicsPanel {
    #[default]
    Blank,
    NoTopics,
    Rows(Vec<TopicRow>),
    Error(String),
}

/// A paper with placeholders substituted for missing fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaperCard {
    pub title: String,
    pub authors: String,
    pub content: String,
    pub novelty: String,
}

impl From<Paper> for PaperCard {
    fn from(paper: Paper) -> Self {
        fn or(field: Option<String>, placeholder: &str) -> String {
            field
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| placeholder.to_string())
        }

        Self {
            title: or(paper.title_paper, text::NO_TITLE),
            authors: or(paper.paper_authors, text::UNKNOWN_AUTHORS),
            content: or(paper.content, text::NO_CONTENT),
            novelty: or(paper.novelty, text::NO_NOVELTY),
        }
    }
}

/// Content of the paper panel
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PapersPanel {
    #[default]
    Blank,
    NoPapers,
    Cards(Vec<PaperCard>),
    Error(String),
}

/// Independent request streams; a new request supersedes older ones in the
/// same region only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Region {
    Register,
    Login,
    Topics,
    AddTopic,
    DeleteTopic,
    Papers,
}

/// Identifies one in-flight request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestToken {
    region: Region,
    epoch: u64,
    seq: u64,
}

impl RequestToken {
    pub fn region(&self) -> Region {
        self.region
    }
}

/// A request the driver must send, and the token to apply its result with
#[derive(Clone, Debug, PartialEq)]
pub struct Pending<R> {
    pub token: RequestToken,
    pub request: R,
}

/// Scheduled return to the dashboard after a topic was added. Cancelled by
/// any navigation before it is completed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReturnTicket {
    epoch: u64,
    pub delay: Duration,
}

/// What a delete response asks the driver to do next
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// Reload the topic list for this email
    Refresh(Pending<String>),
    /// Show a blocking alert
    Alert(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Sequences {
    register: u64,
    login: u64,
    topics: u64,
    add_topic: u64,
    delete_topic: u64,
    papers: u64,
}

impl Sequences {
    fn slot(&mut self, region: Region) -> &mut u64 {
        match region {
            Region::Register => &mut self.register,
            Region::Login => &mut self.login,
            Region::Topics => &mut self.topics,
            Region::AddTopic => &mut self.add_topic,
            Region::DeleteTopic => &mut self.delete_topic,
            Region::Papers => &mut self.papers,
        }
    }

    fn get(&self, region: Region) -> u64 {
        match region {
            Region::Register => self.register,
            Region::Login => self.login,
            Region::Topics => self.topics,
            Region::AddTopic => self.add_topic,
            Region::DeleteTopic => self.delete_topic,
            Region::Papers => self.papers,
        }
    }
}

/// Complete presentation state of the client
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    view: View,
    session: Option<Session>,
    epoch: u64,
    seq: Sequences,
    return_delay: Duration,
    /// Email submitted by the latest login request
    login_email: Option<String>,

    pub register_form: CredentialsForm,
    pub login_form: CredentialsForm,
    pub topic_form: TopicForm,

    register_status: FormStatus,
    login_error: Option<String>,
    add_topic_status: FormStatus,

    topics: TopicsPanel,
    topics_loading: bool,

    papers_heading: Option<String>,
    papers: PapersPanel,
    papers_loading: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(DEFAULT_RETURN_DELAY)
    }
}

impl DashboardState {
    /// Start logged out on the login view
    pub fn new(return_delay: Duration) -> Self {
        Self {
            view: View::Login,
            session: None,
            epoch: 0,
            seq: Sequences::default(),
            return_delay,
            login_email: None,
            register_form: CredentialsForm::default(),
            login_form: CredentialsForm::default(),
            topic_form: TopicForm::default(),
            register_status: FormStatus::default(),
            login_error: None,
            add_topic_status: FormStatus::default(),
            topics: TopicsPanel::Blank,
            topics_loading: false,
            papers_heading: None,
            papers: PapersPanel::Blank,
            papers_loading: false,
        }
    }

    // ============ Accessors ============

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Label shown in the dashboard header
    pub fn user_label(&self) -> Option<&str> {
        self.session.as_ref().map(Session::email)
    }

    pub fn register_status(&self) -> &FormStatus {
        &self.register_status
    }

    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }

    pub fn add_topic_status(&self) -> &FormStatus {
        &self.add_topic_status
    }

    pub fn topics(&self) -> &TopicsPanel {
        &self.topics
    }

    pub fn topics_loading(&self) -> bool {
        self.topics_loading
    }

    pub fn papers_heading(&self) -> Option<&str> {
        self.papers_heading.as_deref()
    }

    pub fn papers(&self) -> &PapersPanel {
        &self.papers
    }

    pub fn papers_loading(&self) -> bool {
        self.papers_loading
    }

    pub fn return_delay(&self) -> Duration {
        self.return_delay
    }

    // ============ Navigation ============

    /// Deactivate every view and activate `view`. Invalidates all requests
    /// issued before the switch. Activating the view already shown changes
    /// nothing.
    pub fn activate(&mut self, view: View) {
        if view == self.view {
            return;
        }
        if self.view == View::AddTopic {
            self.add_topic_status.success = None;
        }
        self.epoch += 1;
        self.view = view;
    }

    pub fn show_login(&mut self) {
        self.activate(View::Login);
    }

    pub fn show_register(&mut self) {
        self.activate(View::Register);
    }

    pub fn show_add_topic(&mut self) {
        self.activate(View::AddTopic);
    }

    /// Switch to the dashboard and start a topic refresh
    pub fn show_dashboard(&mut self) -> Option<Pending<String>> {
        self.activate(View::Dashboard);
        self.begin_load_topics()
    }

    // ============ Authentication ============

    pub fn begin_register(&mut self) -> Pending<Credentials> {
        Pending {
            token: self.next_token(Region::Register),
            request: self.register_form.to_credentials(),
        }
    }

    pub fn apply_register(&mut self, token: RequestToken, result: ClientResult<()>) {
        if !self.is_current(token, Region::Register) {
            return;
        }
        match result {
            Ok(()) => {
                self.register_status.succeed(text::REGISTER_SUCCESS);
                self.register_form.reset();
            }
            Err(e) => {
                let message = failure_text(&e, text::REGISTER_FAILED, text::NETWORK_RETRY);
                self.register_status.fail(message);
            }
        }
    }

    pub fn begin_login(&mut self) -> Pending<Credentials> {
        let request = self.login_form.to_credentials();
        self.login_email = Some(request.email.clone());
        Pending {
            token: self.next_token(Region::Login),
            request,
        }
    }

    /// On success the session starts and the dashboard's topic refresh is
    /// returned.
    pub fn apply_login(
        &mut self,
        token: RequestToken,
        result: ClientResult<()>,
    ) -> Option<Pending<String>> {
        if !self.is_current(token, Region::Login) {
            return None;
        }
        let email = self.login_email.take().unwrap_or_default();
        match result {
            Ok(()) => {
                tracing::info!(%email, "logged in");
                self.session = Some(Session::new(email));
                self.login_error = None;
                self.show_dashboard()
            }
            Err(e) => {
                let message = failure_text(&e, text::LOGIN_FAILED, text::NETWORK_RETRY);
                self.login_error = Some(message.to_string());
                None
            }
        }
    }

    /// Purely local: no request is made
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(email = %session.email(), "logged out");
        }
        self.login_form.reset();
        self.topics = TopicsPanel::Blank;
        self.topics_loading = false;
        self.clear_papers();
        self.activate(View::Login);
    }

    // ============ Topics ============

    /// `None` when nobody is logged in
    pub fn begin_load_topics(&mut self) -> Option<Pending<String>> {
        let email = self.session.as_ref()?.email().to_string();
        self.topics_loading = true;
        self.clear_papers();
        Some(Pending {
            token: self.next_token(Region::Topics),
            request: email,
        })
    }

    pub fn apply_topics(&mut self, token: RequestToken, result: ClientResult<Vec<Topic>>) {
        if self.is_latest(token, Region::Topics) {
            self.topics_loading = false;
        }
        if !self.is_current(token, Region::Topics) {
            return;
        }
        self.topics = match result {
            Ok(topics) if topics.is_empty() => TopicsPanel::NoTopics,
            Ok(topics) => {
                TopicsPanel::Rows(topics.into_iter().map(|topic| TopicRow { topic }).collect())
            }
            Err(e) => {
                TopicsPanel::Error(failure_text(&e, text::TOPICS_FAILED, text::TOPICS_NETWORK).to_string())
            }
        };
    }

    /// Submit the add-topic form. Without a session nothing is sent.
    pub fn begin_add_topic(&mut self) -> Option<Pending<TopicRequest>> {
        let Some(session) = &self.session else {
            self.add_topic_status.fail(text::ADD_TOPIC_LOGGED_OUT);
            return None;
        };
        let request = TopicRequest {
            email: session.email().to_string(),
            topic: Topic::new(self.topic_form.topic.clone()),
        };
        Some(Pending {
            token: self.next_token(Region::AddTopic),
            request,
        })
    }

    /// On success returns the ticket for the delayed return to the dashboard
    pub fn apply_add_topic(
        &mut self,
        token: RequestToken,
        result: ClientResult<()>,
    ) -> Option<ReturnTicket> {
        if !self.is_current(token, Region::AddTopic) {
            return None;
        }
        match result {
            Ok(()) => {
                self.add_topic_status.succeed(text::TOPIC_ADDED);
                self.topic_form = TopicForm::default();
                Some(ReturnTicket {
                    epoch: self.epoch,
                    delay: self.return_delay,
                })
            }
            Err(e) => {
                let message = failure_text(&e, text::ADD_TOPIC_FAILED, text::NETWORK_RETRY);
                self.add_topic_status.fail(message);
                None
            }
        }
    }

    /// Called once the ticket's delay has elapsed. Returns the dashboard's
    /// topic refresh, or `None` if the ticket was cancelled.
    pub fn complete_return(&mut self, ticket: ReturnTicket) -> Option<Pending<String>> {
        if ticket.epoch != self.epoch {
            return None;
        }
        let refresh = self.show_dashboard();
        self.add_topic_status.success = None;
        refresh
    }

    /// Whether `ticket` would still take effect
    pub fn is_ticket_live(&self, ticket: &ReturnTicket) -> bool {
        ticket.epoch == self.epoch
    }

    /// Start deleting `topic`. The caller has already obtained confirmation.
    pub fn begin_delete_topic(&mut self, topic: Topic) -> Option<Pending<TopicRequest>> {
        let email = self.session.as_ref()?.email().to_string();
        Some(Pending {
            token: self.next_token(Region::DeleteTopic),
            request: TopicRequest { email, topic },
        })
    }

    pub fn apply_delete_topic(
        &mut self,
        token: RequestToken,
        result: ClientResult<()>,
    ) -> Option<DeleteOutcome> {
        if !self.is_current(token, Region::DeleteTopic) {
            return None;
        }
        match result {
            Ok(()) => self.begin_load_topics().map(DeleteOutcome::Refresh),
            Err(ClientError::Network(_)) => Some(DeleteOutcome::Alert(text::NETWORK_RETRY.to_string())),
            Err(e) => Some(DeleteOutcome::Alert(format!(
                "{}: {}",
                text::DELETE_FAILED_PREFIX,
                e.detail_or(text::DELETE_UNKNOWN_DETAIL)
            ))),
        }
    }

    // ============ Papers ============

    pub fn begin_view_papers(&mut self, topic: Topic) -> Pending<Topic> {
        self.papers_heading = Some(format!("{}: {}", text::PAPERS_HEADING_PREFIX, topic));
        self.papers = PapersPanel::Blank;
        self.papers_loading = true;
        Pending {
            token: self.next_token(Region::Papers),
            request: topic,
        }
    }

    pub fn apply_papers(&mut self, token: RequestToken, result: ClientResult<Vec<Paper>>) {
        if self.is_latest(token, Region::Papers) {
            self.papers_loading = false;
        }
        if !self.is_current(token, Region::Papers) {
            return;
        }
        self.papers = match result {
            Ok(papers) if papers.is_empty() => PapersPanel::NoPapers,
            Ok(papers) => PapersPanel::Cards(papers.into_iter().map(PaperCard::from).collect()),
            Err(e) => {
                PapersPanel::Error(failure_text(&e, text::PAPERS_FAILED, text::PAPERS_NETWORK).to_string())
            }
        };
    }

    // ============ Tokens ============

    fn next_token(&mut self, region: Region) -> RequestToken {
        let slot = self.seq.slot(region);
        *slot += 1;
        RequestToken {
            region,
            epoch: self.epoch,
            seq: *slot,
        }
    }

    /// Newest request of its region, regardless of navigation
    fn is_latest(&self, token: RequestToken, region: Region) -> bool {
        token.region == region && token.seq == self.seq.get(region)
    }

    /// Newest request of its region and issued under the current view
    fn is_current(&self, token: RequestToken, region: Region) -> bool {
        self.is_latest(token, region) && token.epoch == self.epoch
    }

    /// Hide the heading, empty the panel and drop any paper request in flight
    fn clear_papers(&mut self) {
        self.papers_heading = None;
        self.papers = PapersPanel::Blank;
        self.papers_loading = false;
        *self.seq.slot(Region::Papers) += 1;
    }
}

/// User-facing text for a failed request
fn failure_text<'a>(err: &'a ClientError, fallback: &'a str, network: &'a str) -> &'a str {
    if err.is_network() {
        network
    } else {
        err.detail_or(fallback)
    }
}

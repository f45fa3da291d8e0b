//! Global Application State
//!
//! Wraps the shared [`DashboardState`] machine in a Leptos signal and runs
//! its requests with `spawn_local`. Each action calls a `begin_*` half inside
//! a signal update, awaits the API, then applies the result in a second
//! update. Stale answers are dropped by the state machine itself.

use gloo_timers::callback::Timeout;
use leptos::*;

use topicdesk::view::text;
use topicdesk::{
    ApiClient, ClientError, DashboardState, DeleteOutcome, Pending, ReturnTicket, Topic, View,
};

use crate::api::{self, GlooTransport};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct AppState {
    /// Everything the views render
    pub dashboard: RwSignal<DashboardState>,
    client: StoredValue<ApiClient<GlooTransport>>,
    /// Pending return to the dashboard after a topic was added
    return_timer: StoredValue<Option<Timeout>>,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    let state = AppState {
        dashboard: create_rw_signal(DashboardState::default()),
        client: store_value(api::client_from_storage()),
        return_timer: store_value(None),
    };

    provide_context(state);
}

/// Fetch the state provided by [`provide_app_state`]
pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not found")
}

impl AppState {
    fn client(&self) -> ApiClient<GlooTransport> {
        self.client.get_value()
    }

    /// Point the client at a new API base URL and remember it
    pub fn set_api_base(&self, url: &str) {
        api::set_api_base(url);
        self.client.set_value(api::client_from_storage());
    }

    /// Ping the API; returns the server greeting
    pub async fn test_connection(&self) -> Result<String, ClientError> {
        self.client().ping().await
    }

    // ============ Navigation ============

    pub fn navigate(&self, view: View) {
        self.cancel_return();
        match view {
            View::Dashboard => {
                let refresh = self.dashboard.try_update(|s| s.show_dashboard()).flatten();
                self.run_topics(refresh);
            }
            other => self.dashboard.update(|s| s.activate(other)),
        }
    }

    /// Drop the add-topic return timer, which clears the browser timeout
    fn cancel_return(&self) {
        self.return_timer.set_value(None);
    }

    fn schedule_return(&self, ticket: ReturnTicket) {
        let state = *self;
        let millis = u32::try_from(ticket.delay.as_millis()).unwrap_or(u32::MAX);
        let timeout = Timeout::new(millis, move || {
            let refresh = state
                .dashboard
                .try_update(|s| s.complete_return(ticket))
                .flatten();
            state.run_topics(refresh);
        });
        self.return_timer.set_value(Some(timeout));
    }

    // ============ Authentication ============

    pub fn register(&self) {
        let Some(pending) = self.dashboard.try_update(|s| s.begin_register()) else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let result = state.client().register(&pending.request).await;
            log_failure("register", &result);
            state
                .dashboard
                .update(|s| s.apply_register(pending.token, result));
        });
    }

    pub fn login(&self) {
        let Some(pending) = self.dashboard.try_update(|s| s.begin_login()) else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let result = state.client().login(&pending.request).await;
            log_failure("login", &result);
            let refresh = state
                .dashboard
                .try_update(|s| s.apply_login(pending.token, result))
                .flatten();
            state.run_topics(refresh);
        });
    }

    pub fn logout(&self) {
        self.cancel_return();
        self.dashboard.update(|s| s.logout());
    }

    // ============ Topics ============

    pub fn load_topics(&self) {
        let pending = self.dashboard.try_update(|s| s.begin_load_topics()).flatten();
        self.run_topics(pending);
    }

    fn run_topics(&self, pending: Option<Pending<String>>) {
        let Some(pending) = pending else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let result = state.client().list_topics(&pending.request).await;
            log_failure("load topics", &result);
            state
                .dashboard
                .update(|s| s.apply_topics(pending.token, result));
        });
    }

    pub fn add_topic(&self) {
        let Some(pending) = self.dashboard.try_update(|s| s.begin_add_topic()).flatten() else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let result = state.client().add_topic(&pending.request).await;
            log_failure("add topic", &result);
            let ticket = state
                .dashboard
                .try_update(|s| s.apply_add_topic(pending.token, result))
                .flatten();
            if let Some(ticket) = ticket {
                state.schedule_return(ticket);
            }
        });
    }

    /// Asks for confirmation first; declining sends nothing
    pub fn delete_topic(&self, topic: Topic) {
        if !confirm(text::DELETE_CONFIRM) {
            return;
        }
        let Some(pending) = self
            .dashboard
            .try_update(|s| s.begin_delete_topic(topic))
            .flatten()
        else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let result = state.client().delete_topic(&pending.request).await;
            log_failure("delete topic", &result);
            let outcome = state
                .dashboard
                .try_update(|s| s.apply_delete_topic(pending.token, result))
                .flatten();
            match outcome {
                Some(DeleteOutcome::Refresh(refresh)) => state.run_topics(Some(refresh)),
                Some(DeleteOutcome::Alert(message)) => alert(&message),
                None => {}
            }
        });
    }

    // ============ Papers ============

    pub fn view_papers(&self, topic: Topic) {
        let Some(pending) = self.dashboard.try_update(|s| s.begin_view_papers(topic)) else {
            return;
        };
        let state = *self;
        spawn_local(async move {
            let result = state.client().list_papers(&pending.request).await;
            log_failure("load papers", &result);
            state
                .dashboard
                .update(|s| s.apply_papers(pending.token, result));
        });
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn log_failure<T>(action: &str, result: &Result<T, ClientError>) {
    match result {
        Err(e @ ClientError::Network(_)) => {
            web_sys::console::error_1(&format!("Failed to {}: {}", action, e).into());
        }
        Err(e) => {
            web_sys::console::warn_1(&format!("Failed to {}: {}", action, e).into());
        }
        Ok(_) => {}
    }
}

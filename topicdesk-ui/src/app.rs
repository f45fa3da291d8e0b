//! App Root Component
//!
//! Provides the global state and switches pages on the current view.

use leptos::*;

use topicdesk::View;

use crate::components::Nav;
use crate::pages::{AddTopic, Dashboard, Login, Register};
use crate::state::{provide_app_state, use_app_state};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_app_state();
    let state = use_app_state();
    let current = create_memo(move |_| state.dashboard.with(|s| s.view()));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8">
                {move || match current.get() {
                    View::Login => view! { <Login /> }.into_view(),
                    View::Register => view! { <Register /> }.into_view(),
                    View::Dashboard => view! { <Dashboard /> }.into_view(),
                    View::AddTopic => view! { <AddTopic /> }.into_view(),
                }}
            </main>
        </div>
    }
}

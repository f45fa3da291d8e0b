//! Add Topic Page

use leptos::*;

use topicdesk::View;

use crate::components::{Notice, NoticeVariant};
use crate::state::use_app_state;

/// Single-field topic form. After a successful add the page returns to the
/// dashboard on its own unless the user navigates first.
#[component]
pub fn AddTopic() -> impl IntoView {
    let state = use_app_state();
    let dashboard = state.dashboard;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.add_topic();
    };

    let success =
        Signal::derive(move || dashboard.with(|s| s.add_topic_status().success.clone()));
    let error = Signal::derive(move || dashboard.with(|s| s.add_topic_status().error.clone()));

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Add Topic"</h1>
                <button
                    on:click=move |_| state.navigate(View::Dashboard)
                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                >
                    "Back to Dashboard"
                </button>
            </div>

            <form id="addTopicForm" on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Topic"</label>
                    <input
                        id="topicInput"
                        type="text"
                        required
                        prop:value=move || dashboard.with(|s| s.topic_form.topic.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dashboard.update(|s| s.topic_form.topic = value);
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <Notice message=success variant=NoticeVariant::Success />
                <Notice message=error variant=NoticeVariant::Error />

                <button
                    type="submit"
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add Topic"
                </button>
            </form>
        </div>
    }
}

//! Topic Row Component

use leptos::*;

use topicdesk::TopicRow as Row;

use crate::state::use_app_state;

/// A topic label that opens its papers, and a delete action
#[component]
pub fn TopicRow(row: Row) -> impl IntoView {
    let state = use_app_state();
    let label = row.topic.to_string();
    let open = row.topic.clone();
    let delete = row.topic;

    view! {
        <div class="topic-item flex items-center justify-between bg-gray-800 rounded-lg px-4 py-3">
            <div
                class="topic-content flex-1 cursor-pointer hover:text-primary-400 transition-colors"
                on:click=move |_| state.view_papers(open.clone())
            >
                {label}
            </div>
            <div class="topic-actions">
                <button
                    class="btn btn-danger px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm transition-colors"
                    on:click=move |_| state.delete_topic(delete.clone())
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

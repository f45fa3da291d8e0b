//! Dashboard Page
//!
//! Topic list with per-topic delete, and the paper panel for the topic
//! last clicked.

use leptos::*;

use topicdesk::view::text;
use topicdesk::{PapersPanel, TopicsPanel, View};

use crate::components::{Loading, PaperCard, TopicRow};
use crate::state::use_app_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Dashboard"</h1>
                    <p class="text-gray-400 mt-1">"Your topics and the papers found for them"</p>
                </div>
                <button
                    on:click=move |_| state.navigate(View::AddTopic)
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Add Topic"
                </button>
            </div>

            <TopicsSection />
            <PapersSection />
        </div>
    }
}

#[component]
fn TopicsSection() -> impl IntoView {
    let state = use_app_state();
    let dashboard = state.dashboard;
    let loading = Signal::derive(move || dashboard.with(|s| s.topics_loading()));

    view! {
        <section id="topicsList" class="space-y-3">
            <h2 class="text-xl font-semibold">"Your Topics"</h2>
            <Loading loading=loading label="Loading topics..." />
            {move || match dashboard.with(|s| s.topics().clone()) {
                TopicsPanel::Blank => view! {}.into_view(),
                TopicsPanel::NoTopics => view! {
                    <p class="text-gray-400">{text::NO_TOPICS}</p>
                }.into_view(),
                TopicsPanel::Rows(rows) => rows
                    .into_iter()
                    .map(|row| view! { <TopicRow row=row /> })
                    .collect_view(),
                TopicsPanel::Error(message) => view! {
                    <p class="error text-red-400">{message}</p>
                }.into_view(),
            }}
        </section>
    }
}

#[component]
fn PapersSection() -> impl IntoView {
    let state = use_app_state();
    let dashboard = state.dashboard;
    let loading = Signal::derive(move || dashboard.with(|s| s.papers_loading()));

    view! {
        <section id="papersSection" class="space-y-4">
            {move || dashboard.with(|s| s.papers_heading().map(str::to_string)).map(|heading| view! {
                <h2 id="papersHeading" class="text-xl font-semibold">{heading}</h2>
            })}
            <Loading loading=loading label="Loading papers..." />
            <div id="papersList" class="grid grid-cols-1 lg:grid-cols-2 gap-4">
                {move || match dashboard.with(|s| s.papers().clone()) {
                    PapersPanel::Blank => view! {}.into_view(),
                    PapersPanel::NoPapers => view! {
                        <p class="text-gray-400">{text::NO_PAPERS}</p>
                    }.into_view(),
                    PapersPanel::Cards(cards) => cards
                        .into_iter()
                        .map(|card| view! { <PaperCard card=card /> })
                        .collect_view(),
                    PapersPanel::Error(message) => view! {
                        <p class="error text-red-400">{message}</p>
                    }.into_view(),
                }}
            </div>
        </section>
    }
}

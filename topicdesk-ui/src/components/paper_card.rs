//! Paper Card Component

use leptos::*;

use topicdesk::PaperCard as Card;

/// One paper: title, authors, summary and novelty analysis
#[component]
pub fn PaperCard(card: Card) -> impl IntoView {
    view! {
        <div class="paper-card bg-gray-800 rounded-xl p-6 space-y-3">
            <h3 class="text-lg font-semibold">{card.title}</h3>
            <em class="text-gray-400">"By: "{card.authors}</em>
            <hr class="border-gray-700" />
            <h4 class="text-sm font-semibold text-gray-300 uppercase">"Content Summary"</h4>
            <p class="text-gray-200 whitespace-pre-line">{card.content}</p>
            <h4 class="text-sm font-semibold text-gray-300 uppercase">"Novelty Analysis"</h4>
            <p class="text-gray-200 whitespace-pre-line">{card.novelty}</p>
        </div>
    }
}

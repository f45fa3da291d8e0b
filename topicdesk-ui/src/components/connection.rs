//! API Connection Settings
//!
//! Edit and test the API base URL. The URL is kept in local storage.

use leptos::*;

use crate::api;
use crate::state::use_app_state;

/// API connection settings
#[component]
pub fn ConnectionSettings() -> impl IntoView {
    let state = use_app_state();

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);
    let (test_result, set_test_result) = create_signal(None::<Result<String, String>>);

    let test_connection = move |_| {
        set_testing.set(true);
        set_test_result.set(None);
        state.set_api_base(&api_url.get());

        spawn_local(async move {
            let result = state
                .test_connection()
                .await
                .map_err(|e| e.to_string());
            set_test_result.set(Some(result));
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        state.set_api_base(&api_url.get());
        set_api_url.set(api::get_api_base());
    };

    view! {
        <details class="bg-gray-800 rounded-xl p-4 mt-6">
            <summary class="cursor-pointer text-sm text-gray-400">"API Connection"</summary>

            <div class="space-y-3 mt-4">
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=test_connection
                        disabled=move || testing.get()
                        class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if testing.get() { "Testing..." } else { "Test" }}
                    </button>
                    <button
                        on:click=save_url
                        class="px-4 py-2 bg-primary-600 hover:bg-primary-700
                               rounded-lg font-medium transition-colors"
                    >
                        "Save"
                    </button>
                </div>

                <div class="flex items-center space-x-2 text-sm">
                    <span class="text-gray-400">"Status:"</span>
                    {move || match test_result.get() {
                        Some(Ok(message)) => view! {
                            <span class="text-green-400">"✓ "{message}</span>
                        }.into_view(),
                        Some(Err(error)) => view! {
                            <span class="text-red-400">"✕ "{error}</span>
                        }.into_view(),
                        None => view! {
                            <span class="text-gray-400">"Not tested"</span>
                        }.into_view(),
                    }}
                </div>
            </div>
        </details>
    }
}

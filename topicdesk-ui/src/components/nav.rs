//! Navigation Component
//!
//! Header bar with the brand, the logged-in user and logout.

use leptos::*;

use topicdesk::View;

use crate::state::use_app_state;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_app_state();
    let user = move || state.dashboard.with(|s| s.user_label().map(str::to_string));

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"📚"</span>
                        <span class="text-xl font-bold text-white">"Topic Desk"</span>
                    </div>

                    // Session
                    {move || match user() {
                        Some(email) => view! {
                            <div class="flex items-center space-x-4">
                                <span id="userEmail" class="text-gray-300">{email}</span>
                                <button
                                    on:click=move |_| state.logout()
                                    class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                                >
                                    "Logout"
                                </button>
                            </div>
                        }.into_view(),
                        None => view! {
                            <div class="flex items-center space-x-1">
                                <NavButton target=View::Login label="Login" />
                                <NavButton target=View::Register label="Register" />
                            </div>
                        }.into_view(),
                    }}
                </div>
            </div>
        </nav>
    }
}

/// View switch button, highlighted while its view is active
#[component]
fn NavButton(
    target: View,
    label: &'static str,
) -> impl IntoView {
    let state = use_app_state();

    view! {
        <button
            on:click=move |_| state.navigate(target)
            class=move || {
                let base = "px-4 py-2 rounded-lg transition-colors";
                if state.dashboard.with(|s| s.view()) == target {
                    format!("{} bg-gray-700 text-white", base)
                } else {
                    format!("{} text-gray-300 hover:text-white hover:bg-gray-700", base)
                }
            }
        >
            {label}
        </button>
    }
}

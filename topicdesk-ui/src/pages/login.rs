//! Login Page

use leptos::*;

use topicdesk::View;

use crate::components::{ConnectionSettings, Notice, NoticeVariant};
use crate::state::use_app_state;

/// Email and password login form
#[component]
pub fn Login() -> impl IntoView {
    let state = use_app_state();
    let dashboard = state.dashboard;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.login();
    };

    let error = Signal::derive(move || dashboard.with(|s| s.login_error().map(str::to_string)));

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Login"</h1>

            <form id="loginForm" on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        id="loginEmail"
                        type="email"
                        required
                        prop:value=move || dashboard.with(|s| s.login_form.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dashboard.update(|s| s.login_form.email = value);
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        id="loginPassword"
                        type="password"
                        required
                        prop:value=move || dashboard.with(|s| s.login_form.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dashboard.update(|s| s.login_form.password = value);
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>

                <Notice message=error variant=NoticeVariant::Error />

                <button
                    type="submit"
                    class="w-full py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Login"
                </button>
            </form>

            <p class="text-sm text-gray-400">
                "No account yet? "
                <a
                    href="#"
                    class="text-primary-400 hover:underline"
                    on:click=move |ev| {
                        ev.prevent_default();
                        state.navigate(View::Register);
                    }
                >
                    "Register"
                </a>
            </p>

            <ConnectionSettings />
        </div>
    }
}

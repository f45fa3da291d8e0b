//! Register Page

use leptos::*;

use topicdesk::View;

use crate::components::{Notice, NoticeVariant};
use crate::state::use_app_state;

/// Account creation form; on success the form clears and a notice invites login
#[component]
pub fn Register() -> impl IntoView {
    let state = use_app_state();
    let dashboard = state.dashboard;

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.register();
    };

    let success =
        Signal::derive(move || dashboard.with(|s| s.register_status().success.clone()));
    let error = Signal::derive(move || dashboard.with(|s| s.register_status().error.clone()));

    view! {
        <div class="max-w-md mx-auto space-y-6">
            <h1 class="text-3xl font-bold">"Register"</h1>

            <form id="registerForm" on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Email"</label>
                    <input
                        id="registerEmail"
                        type="email"
                        required
                        prop:value=move || dashboard.with(|s| s.register_form.email.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dashboard.update(|s| s.register_form.email = value);
                        }
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                    <input
                        id="registerPassword"
                        type="password"
                        required
                        prop:value=move || dashboard.with(|s| s.register_form.password.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            dashboard.update(|s| s.register_form.password = value);
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
                    "Register"
                </button>
            </form>

            <p class="text-sm text-gray-400">
                "Already registered? "
                <a
                    href="#"
                    class="text-primary-400 hover:underline"
                    on:click=move |ev| {
                        ev.prevent_default();
                        state.navigate(View::Login);
                    }
                >
                    "Login"
                </a>
            </p>
        </div>
    }
}

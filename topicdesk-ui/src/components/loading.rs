//! Loading Component
//!
//! Spinners shown while a request is in flight.

use leptos::*;

/// Spinner with a caption, shown while `loading` is true
#[component]
pub fn Loading(
    #[prop(into)]
    loading: Signal<bool>,
    #[prop(default = "Loading...")]
    label: &'static str,
) -> impl IntoView {
    move || {
        if loading.get() {
            view! {
                <div class="flex items-center justify-center space-x-2 py-6 text-primary-400">
                    <div class="loading-spinner w-6 h-6" />
                    <span>{label}</span>
                </div>
            }
            .into_view()
        } else {
            view! {}.into_view()
        }
    }
}

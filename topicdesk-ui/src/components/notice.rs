//! Inline Notice Component
//!
//! Success and error messages shown under forms and in panels.

use leptos::*;

#[derive(Clone, Copy, PartialEq)]
pub enum NoticeVariant {
    Success,
    Error,
}

/// Renders `message` when it is set
#[component]
pub fn Notice(
    #[prop(into)]
    message: Signal<Option<String>>,
    variant: NoticeVariant,
) -> impl IntoView {
    let (icon, class) = match variant {
        NoticeVariant::Success => ("✓", "success bg-green-600/20 text-green-300 border-green-600"),
        NoticeVariant::Error => ("✕", "error bg-red-600/20 text-red-300 border-red-600"),
    };

    move || {
        message.get().map(|msg| {
            view! {
                <div class=format!("flex items-center space-x-3 px-4 py-3 rounded-lg border {}", class)>
                    <span class="text-lg">{icon}</span>
                    <span class="text-sm font-medium">{msg}</span>
                </div>
            }
        })
    }
}

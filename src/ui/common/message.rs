//! Inline message and list components

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Error message component
/// Displays an error message with an alert icon
#[component]
pub fn ErrorMessage(
    /// Error signal - shows message when Some, hidden when None
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <div class="flex items-center gap-2 text-red-600 mt-4 fade-in" role="alert">
                <Icon name=icons::ALERT_CIRCLE class="h-5 w-5"/>
                <span>{move || error.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}

/// "What happens next?" box with numbered steps
#[component]
pub fn NumberedList(
    /// Box heading
    title: &'static str,
    /// Steps in order
    items: &'static [&'static str],
    /// Additional CSS classes for the box
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-blue-50 border border-blue-100 rounded-lg p-6 {}", class)>
            <h3 class="text-xl font-semibold mb-4">{title}</h3>
            <ol class="space-y-3">
                {items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| view! {
                        <li class="flex items-center gap-3">
                            <span class="flex-shrink-0 w-6 h-6 flex items-center justify-center rounded-full bg-blue-100 text-blue-600 text-sm font-semibold">
                                {i + 1}
                            </span>
                            <span>{*item}</span>
                        </li>
                    })
                    .collect_view()}
            </ol>
        </div>
    }
}

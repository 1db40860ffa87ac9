use leptos::prelude::*;

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner(
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span class=format!("spinner {}", class) role="status" aria-live="polite">
            <span class="sr-only">"Loading..."</span>
        </span>
    }
}

/// Three bouncing dots shown while the assistant "types"
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="flex justify-start">
            <div class="bg-gray-100 rounded-2xl rounded-bl-md px-4 py-3">
                <div class="flex gap-1" aria-label="Assistant is typing">
                    <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 0ms"></span>
                    <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 150ms"></span>
                    <span class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" style="animation-delay: 300ms"></span>
                </div>
            </div>
        </div>
    }
}

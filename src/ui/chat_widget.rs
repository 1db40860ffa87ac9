//! Floating chat assistant
//!
//! A launcher button in the bottom-right corner opens a small panel backed by
//! [`ChatSession`]. Replies come from the canned [`ResponseTable`] after a short
//! simulated delay.

use std::time::Duration;

use leptos::html;
use leptos::prelude::*;

use crate::core::chat::{
    CHAT_REPLY_DELAY_MS, ChatMessage, ChatSession, PendingReply, QUICK_QUESTIONS, ResponseTable,
};
use crate::ui::common::TypingIndicator;
use crate::ui::icon::{Icon, icons};
use crate::ui::scheduler::use_scheduler;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = RwSignal::new(ChatSession::new());
    let (input_value, set_input_value) = signal(String::new());
    let messages_ref = NodeRef::<html::Div>::new();
    let table = ResponseTable::default();
    let scheduler = use_scheduler();

    let is_open = Signal::derive(move || chat.with(|c| c.is_open()));

    // Deliver the reply once the "thinking" delay is over
    let reply_later = Callback::new(move |pending: PendingReply| {
        scheduler.schedule(
            Duration::from_millis(CHAT_REPLY_DELAY_MS.into()),
            Box::new(move || {
                chat.try_update(|c| c.deliver(&pending, &table));
            }),
        );
    });

    let send_message = move || {
        let text = input_value.get_untracked();
        if let Some(pending) = chat.try_update(|c| c.submit_text(&text)).flatten() {
            set_input_value.set(String::new());
            reply_later.run(pending);
        }
    };

    let ask_quick = move |question: &'static str| {
        if let Some(pending) = chat.try_update(|c| c.ask_quick(question)) {
            reply_later.run(pending);
        }
    };

    // Keep the newest message in view
    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let _ = chat.with(|c| (c.transcript().len(), c.is_awaiting_reply()));
        if let Some(list) = messages_ref.get() {
            list.set_scroll_top(list.scroll_height());
        }
    });

    view! {
        <div class="fixed bottom-6 right-6 z-50">
            <Show when=move || is_open.get()>
                <div class="chat-panel mb-4 w-80 sm:w-96 h-[28rem] bg-white rounded-2xl shadow-2xl flex flex-col overflow-hidden fade-in-up">
                    // Header
                    <div class="flex items-center justify-between px-4 py-3 bg-blue-600 text-white">
                        <div class="flex items-center gap-2">
                            <Icon name=icons::MESSAGE_CIRCLE class="h-5 w-5 invert" />
                            <h3 class="font-semibold">"SoftSell Assistant"</h3>
                        </div>
                        <button
                            class="p-1 rounded-full hover:bg-blue-700 transition-colors"
                            aria-label="Close chat"
                            on:click=move |_| chat.update(|c| c.close())
                        >
                            <Icon name=icons::X class="h-5 w-5 invert" />
                        </button>
                    </div>

                    // Messages
                    <div class="flex-1 overflow-y-auto p-4 space-y-3" node_ref=messages_ref>
                        <For
                            each=move || chat.with(|c| c.transcript().to_vec())
                            key=|message| message.id
                            children=|message: ChatMessage| view! { <MessageBubble message=message /> }
                        />

                        <Show when=move || chat.with(|c| c.shows_quick_questions())>
                            <div class="pt-2">
                                <p class="text-xs text-gray-500 mb-2">"Common questions:"</p>
                                <div class="flex flex-col gap-2">
                                    {QUICK_QUESTIONS
                                        .into_iter()
                                        .map(|question| {
                                            view! {
                                                <button
                                                    class="text-left text-sm px-3 py-2 rounded-lg border border-blue-200 text-blue-700 hover:bg-blue-50 transition-colors"
                                                    on:click=move |_| ask_quick(question)
                                                >
                                                    {question}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        </Show>

                        <Show when=move || chat.with(|c| c.is_awaiting_reply())>
                            <TypingIndicator />
                        </Show>
                    </div>

                    // Input area
                    <form
                        class="flex items-center gap-2 p-3 border-t border-gray-100"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            send_message();
                        }
                    >
                        <input
                            type="text"
                            class="input flex-1 py-2"
                            placeholder="Type your message..."
                            prop:value=move || input_value.get()
                            on:input=move |ev| set_input_value.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="p-2 rounded-lg bg-blue-600 hover:bg-blue-700 disabled:opacity-50 transition-colors"
                            aria-label="Send message"
                            disabled=move || input_value.get().trim().is_empty()
                        >
                            <Icon name=icons::SEND class="h-5 w-5 invert" />
                        </button>
                    </form>
                </div>
            </Show>

            <div class="flex justify-end">
                <button
                    class="w-14 h-14 rounded-full bg-blue-600 hover:bg-blue-700 shadow-lg flex items-center justify-center transition-transform hover:scale-105"
                    aria-label=move || if is_open.get() { "Close chat" } else { "Open chat" }
                    on:click=move |_| {
                        chat.update(|c| {
                            if c.is_open() {
                                c.close();
                            } else {
                                c.open();
                            }
                        })
                    }
                >
                    {move || {
                        if is_open.get() {
                            view! { <Icon name=icons::X class="h-6 w-6 invert" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MESSAGE_CIRCLE class="h-6 w-6 invert" /> }.into_any()
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let time = message.time_label();

    view! {
        <div class=if message.is_bot { "flex justify-start" } else { "flex justify-end" }>
            <div class=if message.is_bot {
                "max-w-[85%] px-4 py-2 rounded-2xl rounded-bl-md bg-gray-100 text-gray-800"
            } else {
                "max-w-[85%] px-4 py-2 rounded-2xl rounded-br-md bg-blue-600 text-white"
            }>
                <p class="text-sm whitespace-pre-wrap break-words">{message.text}</p>
                <p class="text-[10px] opacity-60 mt-1 text-right">{time}</p>
            </div>
        </div>
    }
}

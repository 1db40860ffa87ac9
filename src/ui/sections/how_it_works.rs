use leptos::html;
use leptos::prelude::*;

use crate::core::content::{Highlight, STEP_STAGGER_MS, STEPS, STEPS_INTRO};
use crate::core::reveal::{DEFAULT_REVEAL_THRESHOLD, stagger_delay_ms};
use crate::ui::icon::Icon;
use crate::ui::reveal::use_reveal;

#[component]
pub fn HowItWorks() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, DEFAULT_REVEAL_THRESHOLD);

    view! {
        <section id="how-it-works" class="section bg-white" node_ref=section_ref>
            <div class="container">
                <h2 class="section-title">"How It Works"</h2>
                <p class="text-lg text-gray-600 text-center max-w-2xl mx-auto mb-12">
                    {STEPS_INTRO}
                </p>

                <div class="grid md:grid-cols-3 gap-8">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| view! { <Step step=*step index=index visible=visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Step(step: Highlight, index: usize, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="reveal card text-center"
            class:revealed=move || visible.get()
            style=format!("transition-delay: {}ms", stagger_delay_ms(index, STEP_STAGGER_MS))
        >
            <div class="relative mx-auto mb-6 w-16 h-16 rounded-full bg-blue-100 flex items-center justify-center">
                <Icon name=step.icon class="h-8 w-8" />
                <span class="absolute -top-2 -right-2 w-7 h-7 rounded-full bg-blue-600 text-white text-sm font-bold flex items-center justify-center">
                    {index + 1}
                </span>
            </div>
            <h3 class="text-xl font-bold mb-3">{step.title}</h3>
            <p class="text-gray-600">{step.description}</p>
        </div>
    }
}

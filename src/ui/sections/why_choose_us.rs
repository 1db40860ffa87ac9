use leptos::html;
use leptos::prelude::*;

use crate::core::content::{FEATURES, FEATURES_INTRO, Highlight, RECOVERY_RATES, RecoveryRate};
use crate::core::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::ui::icon::Icon;
use crate::ui::reveal::use_reveal;

#[component]
pub fn WhyChooseUs() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, DEFAULT_REVEAL_THRESHOLD);

    view! {
        <section id="why-choose-us" class="section bg-gray-50" node_ref=section_ref>
            <div class="container grid lg:grid-cols-2 gap-12 items-center">
                <div>
                    <h2 class="text-3xl md:text-4xl font-bold mb-4 reveal" class:revealed=move || visible.get()>
                        "Why Choose SoftSell?"
                    </h2>
                    <p class="text-lg text-gray-600 mb-10 reveal delay-200" class:revealed=move || visible.get()>
                        {FEATURES_INTRO}
                    </p>
                    <div class="grid sm:grid-cols-2 gap-6">
                        {FEATURES
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| view! {
                                <Feature feature=*feature index=index visible=visible />
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="reveal" class:revealed=move || visible.get()>
                    <div class="bg-white rounded-2xl shadow-soft p-8 hover-lift">
                        <h3 class="text-xl font-semibold mb-2">"Average Recovery Rates"</h3>
                        <p class="text-sm text-gray-500 mb-6">"Share of the original license price our clients recover"</p>
                        <div class="space-y-5">
                            {RECOVERY_RATES
                                .iter()
                                .enumerate()
                                .map(|(index, rate)| view! {
                                    <RecoveryBar rate=*rate index=index visible=visible />
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Feature(feature: Highlight, index: usize, visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            class="reveal-left flex gap-4"
            class:revealed=move || visible.get()
            style=format!("transition-delay: {}ms", index * 100)
        >
            <div class="flex-shrink-0 w-12 h-12 rounded-lg bg-blue-100 flex items-center justify-center hover-grow">
                <Icon name=feature.icon class="h-6 w-6" />
            </div>
            <div>
                <h3 class="font-semibold mb-1">{feature.title}</h3>
                <p class="text-sm text-gray-600">{feature.description}</p>
            </div>
        </div>
    }
}

/// Horizontal bar that fills once the section is on screen
#[component]
fn RecoveryBar(rate: RecoveryRate, index: usize, visible: Signal<bool>) -> impl IntoView {
    let width = move || {
        if visible.get() {
            format!("width: {}%; transition-delay: {}ms", rate.percent, index * 200)
        } else {
            "width: 0%".to_string()
        }
    };

    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span>{rate.product}</span>
                <span class="font-semibold">{format!("{}%", rate.percent)}</span>
            </div>
            <div class="h-2 bg-gray-100 rounded-full overflow-hidden">
                <div class="h-full bg-blue-600 rounded-full recovery-bar" style=width></div>
            </div>
        </div>
    }
}

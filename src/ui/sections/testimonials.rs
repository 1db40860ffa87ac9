use leptos::html;
use leptos::prelude::*;

use crate::core::content::{TESTIMONIAL_STAGGER_MS, TESTIMONIALS, Testimonial};
use crate::core::reveal::{DEFAULT_REVEAL_THRESHOLD, stagger_delay_ms};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_reveal;

#[component]
pub fn Testimonials() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let visible = use_reveal(section_ref, DEFAULT_REVEAL_THRESHOLD);

    view! {
        <section id="testimonials" class="section bg-gray-50" node_ref=section_ref>
            <div class="container">
                <h2 class="section-title">"What Our Customers Say"</h2>
                <div class="grid md:grid-cols-2 gap-8 max-w-4xl mx-auto">
                    {TESTIMONIALS
                        .iter()
                        .enumerate()
                        .map(|(index, t)| view! { <TestimonialCard testimonial=*t index=index visible=visible /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn TestimonialCard(testimonial: Testimonial, index: usize, visible: Signal<bool>) -> impl IntoView {
    view! {
        <figure
            class="reveal card"
            class:revealed=move || visible.get()
            style=format!("transition-delay: {}ms", stagger_delay_ms(index, TESTIMONIAL_STAGGER_MS))
        >
            <Icon name=icons::QUOTE class="h-8 w-8 mb-4 opacity-60" />
            <blockquote class="text-gray-700 mb-6 italic">{testimonial.quote}</blockquote>
            <figcaption>
                <p class="font-semibold">{testimonial.name}</p>
                <p class="text-gray-500 text-sm">
                    {format!("{}, {}", testimonial.title, testimonial.company)}
                </p>
            </figcaption>
        </figure>
    }
}

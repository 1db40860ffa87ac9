use leptos::prelude::*;

use crate::core::content::{HERO_PRODUCTS, HERO_SUBTITLE, HERO_TITLE};
use crate::ui::icon::{Icon, icons};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative overflow-hidden pt-16 pb-24 md:pt-24 md:pb-32 bg-gradient-to-b from-blue-50 to-white">
            <div class="container grid md:grid-cols-2 gap-12 items-center">
                <div class="fade-in-left">
                    <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold leading-tight mb-6">
                        {HERO_TITLE}
                    </h1>
                    <p class="text-lg md:text-xl text-gray-600 mb-8 fade-in delay-200">
                        {HERO_SUBTITLE}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 fade-in-up delay-400">
                        <a href="#contact" class="btn btn-primary hover-grow flex items-center justify-center gap-2">
                            "Get a Quote"
                            <Icon name=icons::ARROW_RIGHT class="h-5 w-5" />
                        </a>
                        <a href="#how-it-works" class="btn btn-outline hover-grow">
                            "Learn How It Works"
                        </a>
                    </div>
                </div>

                <div class="relative fade-in-scale delay-200">
                    <div class="absolute -top-6 -left-6 w-24 h-24 bg-blue-200 rounded-full opacity-60 pulse-slow" aria-hidden="true"></div>
                    <div class="absolute -bottom-6 -right-6 w-32 h-32 bg-teal-200 rounded-full opacity-60 pulse-slow delay-1000" aria-hidden="true"></div>
                    <div class="relative bg-white rounded-2xl shadow-soft p-8">
                        <div class="flex items-center gap-3 mb-6">
                            <div class="w-12 h-12 rounded-full bg-blue-100 flex items-center justify-center">
                                <Icon name=icons::DOLLAR_SIGN class="h-6 w-6" />
                            </div>
                            <div>
                                <p class="text-sm text-gray-500">"We buy licenses for"</p>
                                <p class="font-semibold">"Leading software vendors"</p>
                            </div>
                        </div>
                        <ul class="space-y-3">
                            {HERO_PRODUCTS
                                .iter()
                                .enumerate()
                                .map(|(i, product)| view! {
                                    <li
                                        class="flex items-center gap-3 p-3 bg-gray-50 rounded-lg fade-in-left"
                                        style=format!("animation-delay: {}ms", 600 + i * 100)
                                    >
                                        <Icon name=icons::CHECK_CIRCLE class="h-5 w-5" />
                                        <span>{*product}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

use leptos::prelude::*;

use crate::core::content::{NAV_CTA, NAV_LINKS, SITE_NAME};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::use_scrolled;

/// Sticky header with mobile menu support
#[component]
pub fn Navbar() -> impl IntoView {
    let scrolled = use_scrolled();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);

    view! {
        <header class=move || {
            if scrolled.get() {
                "sticky top-0 z-50 w-full transition-all duration-300 bg-white shadow-md py-3"
            } else {
                "sticky top-0 z-50 w-full transition-all duration-300 bg-transparent py-5"
            }
        }>
            <div class="container flex items-center justify-between">
                <a href="#" class="flex items-center gap-2">
                    <img src="/logo.svg" alt="SoftSell Logo" class="h-10 w-auto" />
                    <span class="text-xl font-bold text-gray-900">{SITE_NAME}</span>
                </a>

                // Desktop Navigation
                <nav class="hidden md:flex items-center space-x-8">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a href=link.href class="text-sm font-semibold text-gray-700 hover:text-blue-600 transition-colors">
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                    <a href=NAV_CTA.href class="btn btn-primary py-2">{NAV_CTA.label}</a>
                </nav>

                // Mobile menu button
                <button
                    class="md:hidden p-2 rounded-lg text-gray-700"
                    on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                    aria-label="Toggle mobile menu"
                    aria-expanded=move || mobile_menu_open.get().to_string()
                >
                    {move || {
                        if mobile_menu_open.get() {
                            view! { <Icon name=icons::X class="w-6 h-6" /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU class="w-6 h-6" /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <div class=move || {
                if mobile_menu_open.get() {
                    "md:hidden overflow-hidden transition-all duration-300 bg-white max-h-96"
                } else {
                    "md:hidden overflow-hidden transition-all duration-300 bg-white max-h-0"
                }
            }>
                <nav class="container flex flex-col gap-2 py-4">
                    {NAV_LINKS
                        .iter()
                        .map(|link| view! {
                            <a
                                href=link.href
                                class="block py-2 text-base font-semibold text-gray-700 hover:text-blue-600"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                {link.label}
                            </a>
                        })
                        .collect_view()}
                    <a
                        href=NAV_CTA.href
                        class="btn btn-primary text-center"
                        on:click=move |_| set_mobile_menu_open.set(false)
                    >
                        {NAV_CTA.label}
                    </a>
                </nav>
            </div>
        </header>
    }
}

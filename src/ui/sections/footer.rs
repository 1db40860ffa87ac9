use leptos::prelude::*;

use crate::core::content::{NAV_CTA, NAV_LINKS, SITE_NAME};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 py-12">
            <div class="container">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <div class="flex items-center gap-2 mb-4">
                            <img src="/logo.svg" alt="" class="h-8 w-auto" />
                            <span class="text-xl font-bold text-white">{SITE_NAME}</span>
                        </div>
                        <p class="text-sm text-gray-400 max-w-xs">
                            "Turning unused software licenses into cash for businesses of every size."
                        </p>
                    </div>

                    <div>
                        <h4 class="font-semibold text-white mb-4">"Company"</h4>
                        <ul class="space-y-2">
                            {NAV_LINKS
                                .iter()
                                .chain(std::iter::once(&NAV_CTA))
                                .map(|link| view! {
                                    <li>
                                        <a href=link.href class="text-sm hover:text-white transition-colors">{link.label}</a>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div>
                        <h4 class="font-semibold text-white mb-4">"Contact"</h4>
                        <ul class="space-y-2 text-sm">
                            <li>"support@softsell.example"</li>
                            <li>"Mon - Fri, 9:00 - 18:00"</li>
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-gray-800 text-sm text-gray-500 text-center">
                    "© 2026 SoftSell. All rights reserved."
                </div>
            </div>
        </footer>
    }
}

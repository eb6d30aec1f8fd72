//! Navigation Bar Component
//!
//! Brand link, page links, and the theme toggle.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_theme;

const LINK_CLASS: &str = "text-gray-700 dark:text-gray-200 hover:text-blue-600 dark:hover:text-blue-400 font-medium transition-colors";

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = use_theme();

    view! {
        <nav class="bg-white dark:bg-gray-800 shadow-md sticky top-0 z-50 transition-colors duration-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <A href="/" attr:class="flex items-center space-x-2 text-blue-600 dark:text-blue-400">
                        <span class="text-2xl">"☑"</span>
                        <span class="text-xl font-bold">"TaskFlow"</span>
                    </A>

                    <div class="flex items-center space-x-6">
                        <A href="/" attr:class=LINK_CLASS>"Tasks"</A>
                        <A href="/posts" attr:class=LINK_CLASS>"Posts"</A>
                        <button
                            class="p-2 rounded-lg bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 transition-colors"
                            aria-label="Toggle theme"
                            on:click=move |_| theme.toggle()
                        >
                            {move || if theme.is_dark() { "☀" } else { "🌙" }}
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

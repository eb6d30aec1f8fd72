//! Footer Component

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use leptos_router::components::A;

const LINK_CLASS: &str = "text-gray-600 dark:text-gray-400 hover:text-blue-600 dark:hover:text-blue-400 text-sm transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    let current_year = Utc::now().year();

    view! {
        <footer class="bg-white dark:bg-gray-800 border-t border-gray-200 dark:border-gray-700 mt-auto transition-colors duration-200">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-lg font-bold text-gray-900 dark:text-white mb-4">"TaskFlow"</h3>
                        <p class="text-gray-600 dark:text-gray-400 text-sm">
                            "A small task manager and post reader built with Rust, Leptos, and Tailwind CSS."
                        </p>
                    </div>

                    <div>
                        <h3 class="text-lg font-bold text-gray-900 dark:text-white mb-4">"Quick Links"</h3>
                        <ul class="space-y-2">
                            <li><A href="/" attr:class=LINK_CLASS>"Home"</A></li>
                            <li><A href="/posts" attr:class=LINK_CLASS>"Posts"</A></li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-bold text-gray-900 dark:text-white mb-4">"Connect"</h3>
                        <a
                            href="https://github.com"
                            target="_blank"
                            rel="noopener noreferrer"
                            class=LINK_CLASS
                            aria-label="GitHub"
                        >
                            "GitHub"
                        </a>
                    </div>
                </div>

                <div class="mt-8 pt-8 border-t border-gray-200 dark:border-gray-700">
                    <p class="text-center text-gray-600 dark:text-gray-400 text-sm">
                        "Made with ♥ © " {current_year} " TaskFlow"
                    </p>
                </div>
            </div>
        </footer>
    }
}

//! Page Layout
//!
//! Navbar, page content, footer.

use leptos::prelude::*;

use super::{Footer, Navbar};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50 dark:bg-gray-900 transition-colors duration-200">
            <Navbar />
            <main class="flex-1 max-w-4xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                {children()}
            </main>
            <Footer />
        </div>
    }
}

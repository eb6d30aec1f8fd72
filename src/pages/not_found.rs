//! Fallback view for unknown paths

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::Card;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <Card class="max-w-md">
                <div class="text-center">
                    <h2 class="text-xl font-bold text-gray-900 dark:text-white mb-2">"Page not found"</h2>
                    <A href="/" attr:class="text-blue-600 dark:text-blue-400 hover:underline">"Back to tasks"</A>
                </div>
            </Card>
        </div>
    }
}

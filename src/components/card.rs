//! Card Component

use leptos::prelude::*;

const HOVER_CLASS: &str = "hover:shadow-lg hover:-translate-y-1 transition-all duration-200";

fn card_class(hover: bool, extra: &str) -> String {
    let mut class = String::from("bg-white dark:bg-gray-800 rounded-lg shadow-md p-6");
    if hover {
        class.push(' ');
        class.push_str(HOVER_CLASS);
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Layout container, optionally lifting on hover
#[component]
pub fn Card(
    #[prop(optional)] hover: bool,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=card_class(hover, &class)>
            {children()}
        </div>
    }
}

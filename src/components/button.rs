//! Button Component
//!
//! Styled button with primary / secondary / danger variants.

use leptos::prelude::*;
use web_sys::MouseEvent;

const BASE_CLASS: &str = "px-4 py-2 rounded-lg font-medium transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700 text-white shadow-sm hover:shadow-md",
            ButtonVariant::Secondary => "bg-gray-200 hover:bg-gray-300 text-gray-800 dark:bg-gray-700 dark:hover:bg-gray-600 dark:text-gray-100",
            ButtonVariant::Danger => "bg-red-600 hover:bg-red-700 text-white shadow-sm hover:shadow-md",
        }
    }

    /// Primary when `active`, secondary otherwise
    pub fn selected(active: bool) -> Self {
        if active {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Secondary
        }
    }
}

pub fn button_class(variant: ButtonVariant, full_width: bool, extra: &str) -> String {
    let mut class = format!("{} {}", BASE_CLASS, variant.classes());
    if full_width {
        class.push_str(" w-full");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[component]
pub fn Button(
    #[prop(into, default = Signal::stored(ButtonVariant::Primary))] variant: Signal<ButtonVariant>,
    #[prop(optional)] full_width: bool,
    #[prop(into, optional)] class: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(into, optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(into, optional)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || button_class(variant.get(), full_width, &class)
            disabled=move || disabled.get()
            aria-label=aria_label
            on:click=move |ev| {
                if let Some(cb) = on_click {
                    cb.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

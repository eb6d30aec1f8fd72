//! Task Manager Page
//!
//! Locally persisted to-do list with filters and counts.

use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::components::{Button, ButtonVariant, Card};
use crate::models::{Task, TaskFilter};
use crate::storage::BrowserStorage;
use crate::store::{
    store_add_task, store_filtered_tasks, store_has_visible_tasks, store_remove_task, store_stats, store_toggle_task,
    TaskManagerState, TaskManagerStateStoreFields, TaskStore,
};
use crate::tasks;

#[component]
pub fn TaskManager() -> impl IntoView {
    let store: TaskStore = Store::new(TaskManagerState::load(&BrowserStorage));

    let stats = move || store_stats(&store);
    let add = move || store_add_task(&store, &BrowserStorage);
    let cannot_add = Signal::derive(move || store.draft().get().trim().is_empty());

    view! {
        <div class="animate-fade-in">
            <div class="mb-8">
                <h1 class="text-4xl font-bold text-gray-900 dark:text-white mb-2">"Task Manager"</h1>
                <p class="text-gray-600 dark:text-gray-400">"Organize your tasks and boost productivity"</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-8">
                <StatCard label="Total Tasks" icon="☰" accent="bg-blue-100 dark:bg-blue-900" value=Signal::derive(move || stats().total) />
                <StatCard label="Active" icon="○" accent="bg-yellow-100 dark:bg-yellow-900" value=Signal::derive(move || stats().active) />
                <StatCard label="Completed" icon="✔" accent="bg-green-100 dark:bg-green-900" value=Signal::derive(move || stats().completed) />
            </div>

            <Card class="mb-6">
                <div class="flex gap-3">
                    <input
                        type="text"
                        placeholder="What needs to be done?"
                        class="flex-1 px-4 py-2 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white placeholder-gray-500 dark:placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-500"
                        prop:value=move || store.draft().get()
                        on:input=move |ev| store.draft().set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                add();
                            }
                        }
                    />
                    <Button disabled=cannot_add aria_label="Add task" on_click=move |_: MouseEvent| add()>
                        "+"
                    </Button>
                </div>
            </Card>

            <div class="mb-6 flex gap-2">
                {TaskFilter::ALL
                    .into_iter()
                    .map(|filter| {
                        view! {
                            <Button
                                variant=Signal::derive(move || ButtonVariant::selected(store.filter().get() == filter))
                                on_click=move |_: MouseEvent| store.filter().set(filter)
                            >
                                {filter.label()} " (" {move || stats().count_for(filter)} ")"
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="space-y-3">
                <Show
                    when=move || store_has_visible_tasks(&store)
                    fallback=move || view! {
                        <Card>
                            <p class="text-center text-gray-500 dark:text-gray-400 py-8">
                                {move || tasks::empty_message(store.filter().get())}
                            </p>
                        </Card>
                    }
                >
                    <For
                        each=move || store_filtered_tasks(&store)
                        key=|task| (task.id.clone(), task.completed)
                        children=move |task| view! { <TaskRow task=task store=store /> }
                    />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StatCard(
    label: &'static str,
    icon: &'static str,
    accent: &'static str,
    value: Signal<usize>,
) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-sm text-gray-600 dark:text-gray-400">{label}</p>
                    <p class="text-3xl font-bold text-gray-900 dark:text-white">{move || value.get()}</p>
                </div>
                <div class=format!("p-3 rounded-lg text-xl {}", accent)>{icon}</div>
            </div>
        </Card>
    }
}

#[component]
fn TaskRow(task: Task, store: TaskStore) -> impl IntoView {
    let toggle_id = task.id.clone();
    let delete_id = task.id.clone();
    let created = tasks::format_created_at(&task.created_at);

    let (toggle_label, marker, marker_class, title_class) = if task.completed {
        (
            "Mark as incomplete",
            "✔",
            "text-green-600 dark:text-green-400",
            "text-lg line-through text-gray-500 dark:text-gray-500",
        )
    } else {
        (
            "Mark as complete",
            "○",
            "text-gray-400 dark:text-gray-500",
            "text-lg text-gray-900 dark:text-white",
        )
    };

    view! {
        <Card hover=true class="animate-slide-up">
            <div class="flex items-center gap-4">
                <button
                    class=format!("flex-shrink-0 text-2xl transition-transform hover:scale-110 {}", marker_class)
                    aria-label=toggle_label
                    on:click=move |_| store_toggle_task(&store, &BrowserStorage, &toggle_id)
                >
                    {marker}
                </button>

                <div class="flex-1">
                    <p class=title_class>{task.title}</p>
                    <p class="text-sm text-gray-500 dark:text-gray-400">{created}</p>
                </div>

                <Button
                    variant=ButtonVariant::Danger
                    aria_label="Delete task"
                    on_click=move |_: MouseEvent| store_remove_task(&store, &BrowserStorage, &delete_id)
                >
                    "✕"
                </Button>
            </div>
        </Card>
    }
}

//! Task Manager State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every list
//! mutation goes through a helper here so the slot is rewritten after it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Task, TaskFilter, TaskStats};
use crate::storage::KeyValueStore;
use crate::tasks;

/// Task Manager page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TaskManagerState {
    /// Full task list, insertion order
    pub tasks: Vec<Task>,
    /// Pending title input
    pub draft: String,
    pub filter: TaskFilter,
}

impl TaskManagerState {
    /// Initial state from the persisted slot
    pub fn load<S: KeyValueStore + ?Sized>(storage: &S) -> Self {
        Self {
            tasks: tasks::load_tasks(storage),
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type TaskStore = Store<TaskManagerState>;

// ========================
// Store Helper Functions
// ========================

/// Add a task from the draft; clears the draft only when something was added
pub fn store_add_task<S: KeyValueStore + ?Sized>(store: &TaskStore, storage: &S) {
    let draft = store.draft().get_untracked();
    let field = store.tasks();
    let added = {
        let mut list = field.write();
        let added = tasks::add_task(&mut list, &draft);
        if added.is_some() {
            tasks::save_tasks(storage, &list);
        }
        added
    };
    if let Some(task) = added {
        log::debug!("[TASKS] Added {}", task.id);
        store.draft().set(String::new());
    }
}

/// Flip completion of a task by ID
pub fn store_toggle_task<S: KeyValueStore + ?Sized>(store: &TaskStore, storage: &S, id: &str) {
    let field = store.tasks();
    let mut list = field.write();
    if tasks::toggle_task(&mut list, id) {
        log::debug!("[TASKS] Toggled {}", id);
    }
    tasks::save_tasks(storage, &list);
}

/// Remove a task by ID
pub fn store_remove_task<S: KeyValueStore + ?Sized>(store: &TaskStore, storage: &S, id: &str) {
    let field = store.tasks();
    let mut list = field.write();
    if tasks::delete_task(&mut list, id) {
        log::debug!("[TASKS] Deleted {}", id);
    }
    tasks::save_tasks(storage, &list);
}

/// Tasks visible under the active filter
pub fn store_filtered_tasks(store: &TaskStore) -> Vec<Task> {
    let filter = store.filter().get();
    let field = store.tasks();
    let list = field.read();
    tasks::filter_tasks(&list, filter)
}

/// Whether any task passes the active filter
pub fn store_has_visible_tasks(store: &TaskStore) -> bool {
    let filter = store.filter().get();
    store.tasks().with(|list| list.iter().any(|t| filter.matches(t)))
}

/// Counts over the unfiltered list
pub fn store_stats(store: &TaskStore) -> TaskStats {
    store.tasks().with(|list| TaskStats::from_tasks(list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn setup(storage: &MemoryStorage) -> TaskStore {
        Store::new(TaskManagerState::load(storage))
    }

    #[test]
    fn test_add_persists_and_clears_draft() {
        let storage = MemoryStorage::new();
        let store = setup(&storage);

        store.draft().set("  Buy milk ".to_string());
        store_add_task(&store, &storage);

        assert_eq!(store.draft().get_untracked(), "");
        assert_eq!(store.tasks().read_untracked().len(), 1);
        assert_eq!(tasks::load_tasks(&storage), store.tasks().get_untracked());
    }

    #[test]
    fn test_blank_draft_is_kept_and_not_persisted() {
        let storage = MemoryStorage::new();
        let store = setup(&storage);

        store.draft().set("   ".to_string());
        store_add_task(&store, &storage);

        assert_eq!(store.draft().get_untracked(), "   ");
        assert!(store.tasks().read_untracked().is_empty());
        assert!(storage.raw("tasks").is_none());
    }

    #[test]
    fn test_toggle_and_remove_persist() {
        let storage = MemoryStorage::new();
        let store = setup(&storage);
        for title in ["a", "b"] {
            store.draft().set(title.to_string());
            store_add_task(&store, &storage);
        }
        let id = store.tasks().read_untracked()[0].id.clone();

        store_toggle_task(&store, &storage, &id);
        assert!(tasks::load_tasks(&storage)[0].completed);

        store.filter().set(TaskFilter::Completed);
        assert!(store_has_visible_tasks(&store));
        assert_eq!(store_filtered_tasks(&store).len(), 1);
        assert_eq!(store_stats(&store), TaskStats { total: 2, active: 1, completed: 1 });

        store_remove_task(&store, &storage, &id);
        let reloaded = tasks::load_tasks(&storage);
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded[0].title, "b");
        assert!(!store_has_visible_tasks(&store));

        store.filter().set(TaskFilter::Active);
        assert!(store_has_visible_tasks(&store));
    }

    #[test]
    fn test_reload_restores_list() {
        let storage = MemoryStorage::new();
        let store = setup(&storage);
        store.draft().set("Persist me".to_string());
        store_add_task(&store, &storage);

        let reloaded = TaskManagerState::load(&storage);
        assert_eq!(reloaded.tasks, store.tasks().get_untracked());
        assert_eq!(reloaded.filter, TaskFilter::All);
    }
}

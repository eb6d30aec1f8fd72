//! Task List Operations
//!
//! Pure list mutations and derived views used by the Task Manager page,
//! plus loading/saving the list through the local store adapter.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

use crate::config::AppConfig;
use crate::models::{Task, TaskFilter};
use crate::storage::{self, KeyValueStore};

/// Append a new task built from `title`.
///
/// Blank titles are a no-op and return `None`.
pub fn add_task(tasks: &mut Vec<Task>, title: &str) -> Option<Task> {
    let task = Task::new(title)?;
    tasks.push(task.clone());
    Some(task)
}

/// Flip `completed` on the task with `id`. Returns whether it was found.
pub fn toggle_task(tasks: &mut [Task], id: &str) -> bool {
    match tasks.iter_mut().find(|t| t.id == id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

/// Remove the task with `id`. Returns whether anything was removed.
pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != id);
    tasks.len() != before
}

/// Tasks matching `filter`, in list order
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|t| filter.matches(t)).cloned().collect()
}

/// Message shown when the filtered view is empty
pub fn empty_message(filter: TaskFilter) -> String {
    match filter {
        TaskFilter::All => "No tasks yet. Add one to get started!".to_string(),
        other => format!("No {} tasks.", other.as_str()),
    }
}

/// `"{date} at {time}"` in the viewer's local time zone.
///
/// Offset-less timestamps are read as UTC; text that is not a timestamp
/// at all is shown as stored.
pub fn format_created_at(created_at: &str) -> String {
    let parsed = DateTime::parse_from_rfc3339(created_at)
        .map(|at| at.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(created_at, "%Y-%m-%dT%H:%M:%S%.f").map(|at| at.and_utc()));
    match parsed {
        Ok(at) => at.with_timezone(&Local).format("%-m/%-d/%Y at %-I:%M:%S %p").to_string(),
        Err(_) => created_at.to_string(),
    }
}

/// Load the persisted list (empty on a missing or corrupt slot)
pub fn load_tasks<S: KeyValueStore + ?Sized>(store: &S) -> Vec<Task> {
    let tasks: Vec<Task> = storage::read_json(store, &AppConfig::get().tasks_key, Vec::new());
    log::info!("[TASKS] Loaded {} tasks", tasks.len());
    tasks
}

/// Persist the full list; failures are logged and otherwise ignored
pub fn save_tasks<S: KeyValueStore + ?Sized>(store: &S, tasks: &[Task]) {
    if let Err(e) = storage::write_json(store, &AppConfig::get().tasks_key, tasks) {
        log::warn!("[TASKS] Failed to persist {} tasks: {}", tasks.len(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStats;
    use crate::storage::MemoryStorage;

    fn make_tasks(titles: &[(&str, bool)]) -> Vec<Task> {
        titles
            .iter()
            .map(|(title, completed)| {
                let mut task = Task::new(title).unwrap();
                task.completed = *completed;
                task
            })
            .collect()
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut tasks = make_tasks(&[("a", false)]);
        assert!(add_task(&mut tasks, "").is_none());
        assert!(add_task(&mut tasks, "    ").is_none());
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_add_appends_fresh_task() {
        let mut tasks = make_tasks(&[("a", true), ("b", false)]);
        let added = add_task(&mut tasks, "Buy milk").unwrap();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2], added);
        assert_eq!(added.title, "Buy milk");
        assert!(!added.completed);
        assert!(tasks[..2].iter().all(|t| t.id != added.id));
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut tasks = make_tasks(&[("a", false), ("b", false), ("c", true)]);
        let original = tasks.clone();
        let id = tasks[1].id.clone();

        assert!(toggle_task(&mut tasks, &id));
        assert!(tasks[1].completed);
        assert_eq!(tasks[0], original[0]);
        assert_eq!(tasks[2], original[2]);

        assert!(toggle_task(&mut tasks, &id));
        assert_eq!(tasks, original);
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut tasks = make_tasks(&[("a", false)]);
        let original = tasks.clone();
        assert!(!toggle_task(&mut tasks, "missing"));
        assert_eq!(tasks, original);
    }

    #[test]
    fn test_delete() {
        let mut tasks = make_tasks(&[("a", false), ("b", true)]);
        let original = tasks.clone();

        assert!(!delete_task(&mut tasks, "missing"));
        assert_eq!(tasks, original);

        let id = tasks[0].id.clone();
        assert!(delete_task(&mut tasks, &id));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0], original[1]);
    }

    #[test]
    fn test_filter_counts_and_order() {
        let tasks = make_tasks(&[("a", true), ("b", false), ("c", true), ("d", false), ("e", false)]);
        let stats = TaskStats::from_tasks(&tasks);

        assert_eq!(filter_tasks(&tasks, TaskFilter::All).len(), 5);
        assert_eq!(filter_tasks(&tasks, TaskFilter::Active).len(), 3);
        assert_eq!(filter_tasks(&tasks, TaskFilter::Completed).len(), 2);
        assert_eq!(stats, TaskStats { total: 5, active: 3, completed: 2 });
        for filter in TaskFilter::ALL {
            assert_eq!(filter_tasks(&tasks, filter).len(), stats.count_for(filter));
        }

        let active: Vec<_> = filter_tasks(&tasks, TaskFilter::Active).into_iter().map(|t| t.title).collect();
        assert_eq!(active, vec!["b", "d", "e"]);
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let tasks = make_tasks(&[("a", true), ("b", false)]);
        let original = tasks.clone();
        let _ = filter_tasks(&tasks, TaskFilter::Completed);
        assert_eq!(tasks, original);
    }

    #[test]
    fn test_empty_messages() {
        assert_eq!(empty_message(TaskFilter::All), "No tasks yet. Add one to get started!");
        assert_eq!(empty_message(TaskFilter::Active), "No active tasks.");
        assert_eq!(empty_message(TaskFilter::Completed), "No completed tasks.");
    }

    #[test]
    fn test_format_created_at() {
        let text = format_created_at("2024-03-01T12:00:00.000Z");
        let (date, time) = text.split_once(" at ").unwrap();
        assert!(date.ends_with("/2024"));
        assert!(time.ends_with("AM") || time.ends_with("PM"));
    }

    #[test]
    fn test_format_created_at_without_offset() {
        assert_eq!(
            format_created_at("2024-03-01T12:00:00"),
            format_created_at("2024-03-01T12:00:00Z")
        );
        assert_eq!(format_created_at("yesterday"), "yesterday");
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::new();
        assert!(load_tasks(&store).is_empty());

        let mut tasks = Vec::new();
        add_task(&mut tasks, "Buy milk");
        add_task(&mut tasks, "Walk dog");
        save_tasks(&store, &tasks);

        assert_eq!(load_tasks(&store), tasks);
    }

    #[test]
    fn test_load_corrupt_slot() {
        let store = MemoryStorage::new();
        store.set_item("tasks", "[{]").unwrap();
        assert!(load_tasks(&store).is_empty());
    }

    #[test]
    fn test_load_mixed_timestamp_formats() {
        let store = MemoryStorage::new();
        store
            .set_item(
                "tasks",
                r#"[{"id":"a","title":"A","completed":false,"createdAt":"2024-03-01T09:30:00.000Z"},{"id":"b","title":"B","completed":true,"createdAt":"2024-03-01T09:30:00"}]"#,
            )
            .unwrap();

        let mut tasks = load_tasks(&store);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[1].created_at, "2024-03-01T09:30:00");

        add_task(&mut tasks, "C");
        save_tasks(&store, &tasks);
        assert_eq!(load_tasks(&store).len(), 3);
    }
}

//! App Configuration
//!
//! Compile-time settings; the posts endpoint can be overridden with
//! `TASKFLOW_POSTS_URL` when building.

use std::sync::OnceLock;

const DEFAULT_POSTS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts";

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Remote collection of posts (GET, JSON array)
    pub posts_endpoint: String,
    /// Local storage slot for the task list
    pub tasks_key: String,
    /// Local storage slot for the color scheme
    pub theme_key: String,
    pub posts_per_page: usize,
    /// Upper bound on numbered page buttons
    pub max_page_buttons: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            posts_endpoint: option_env!("TASKFLOW_POSTS_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or(DEFAULT_POSTS_ENDPOINT)
                .to_string(),
            tasks_key: "tasks".to_string(),
            theme_key: "theme".to_string(),
            posts_per_page: 10,
            max_page_buttons: 5,
        }
    }
}

impl AppConfig {
    /// Process-wide configuration
    pub fn get() -> &'static AppConfig {
        CONFIG.get_or_init(AppConfig::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tasks_key, "tasks");
        assert_eq!(config.theme_key, "theme");
        assert_eq!(config.posts_per_page, 10);
        assert_eq!(config.max_page_buttons, 5);
        assert!(config.posts_endpoint.starts_with("http"));
    }

    #[test]
    fn test_get_is_stable() {
        assert!(std::ptr::eq(AppConfig::get(), AppConfig::get()));
    }
}

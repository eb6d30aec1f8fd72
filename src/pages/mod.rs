//! Routed Pages

mod not_found;
mod posts_page;
mod task_manager;

pub use not_found::NotFound;
pub use posts_page::PostsPage;
pub use task_manager::TaskManager;

//! Posts Feed State
//!
//! Fetch lifecycle, case-insensitive search, and paging over the fetched
//! collection. The page component owns one `PostFeed` in a signal.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::Post;
use crate::pagination;

#[derive(Debug, Clone, PartialEq)]
pub struct PostFeed {
    posts: Vec<Post>,
    filtered: Vec<Post>,
    loading: bool,
    error: Option<String>,
    search: String,
    page: usize,
    per_page: usize,
    max_page_buttons: usize,
}

impl Default for PostFeed {
    fn default() -> Self {
        let config = AppConfig::get();
        Self::new(config.posts_per_page, config.max_page_buttons)
    }
}

impl PostFeed {
    pub fn new(per_page: usize, max_page_buttons: usize) -> Self {
        Self {
            posts: Vec::new(),
            filtered: Vec::new(),
            // The first render is a loading render
            loading: true,
            error: None,
            search: String::new(),
            page: 1,
            per_page: per_page.max(1),
            max_page_buttons,
        }
    }

    // ========================
    // Fetch lifecycle
    // ========================

    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a completed fetch. Failures keep the previous collection.
    pub fn finish_fetch(&mut self, result: Result<Vec<Post>, FetchError>) {
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.refilter();
            }
            Err(e) => {
                self.error = Some(e.user_message());
            }
        }
        self.loading = false;
    }

    // ========================
    // Search
    // ========================

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.refilter();
    }

    pub fn clear_search(&mut self) {
        self.set_search(String::new());
    }

    /// Recompute the filtered view and go back to page 1
    fn refilter(&mut self) {
        self.filtered = search_posts(&self.posts, &self.search);
        self.page = 1;
    }

    // ========================
    // Pagination
    // ========================

    /// Jump to `page`, clamped into `[1, total_pages]`
    pub fn go_to_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.total_pages());
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.page + 1);
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.page.saturating_sub(1));
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.per_page)
    }

    pub fn current_page_posts(&self) -> &[Post] {
        &self.filtered[pagination::page_range(self.page, self.per_page, self.filtered.len())]
    }

    pub fn page_buttons(&self) -> Vec<usize> {
        pagination::page_buttons(self.page, self.total_pages(), self.max_page_buttons)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn show_pagination(&self) -> bool {
        self.total_pages() > 1
    }

    pub fn summary(&self) -> String {
        pagination::range_summary(self.page, self.per_page, self.filtered.len())
    }

    // ========================
    // Accessors
    // ========================

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn page(&self) -> usize {
        self.page
    }
}

/// Posts whose title or body contains `term`, ignoring case
pub fn search_posts(posts: &[Post], term: &str) -> Vec<Post> {
    let needle = term.to_lowercase();
    posts
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle) || p.body.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

//! Remote API
//!
//! Single GET for the post collection.

use crate::config::AppConfig;
use crate::error::FetchError;
use crate::models::Post;

/// Fetch all posts from the configured endpoint
pub async fn fetch_posts() -> Result<Vec<Post>, FetchError> {
    let url = &AppConfig::get().posts_endpoint;
    log::info!("[POSTS] GET {}", url);

    let response = reqwest::get(url.as_str()).await?;
    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }
    let posts = response.json::<Vec<Post>>().await?;
    Ok(posts)
}

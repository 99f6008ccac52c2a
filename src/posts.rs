//! The remote posts endpoint: model and fetch.

use serde::Deserialize;

/// The production posts endpoint.
pub const POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// The cache key the posts list lives under.
pub const POSTS_KEY: &str = "posts";

// ---------------------------------------------------------------------------
// Post
// ---------------------------------------------------------------------------

/// One post as returned by the endpoint. Unknown JSON fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// FetchError
// ---------------------------------------------------------------------------

/// Failure to fetch or decode the posts list.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The endpoint answered with a non-2xx status.
    #[error("Network response was not ok")]
    BadStatus,
    /// The request itself failed (connection, DNS, timeout).
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

// ---------------------------------------------------------------------------
// fetch_posts
// ---------------------------------------------------------------------------

/// Fetch the posts list from `url`.
///
/// The URL is a parameter so tests can point at a local listener; production
/// callers pass [`POSTS_URL`].
pub async fn fetch_posts(url: &str) -> Result<Vec<Post>, FetchError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(FetchError::BadStatus);
    }
    let posts = response.json::<Vec<Post>>().await?;
    Ok(posts)
}

// ===========================================================================
// Tests
// ===========================================================================

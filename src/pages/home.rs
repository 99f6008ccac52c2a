//! Home page: the posts feed.
//!
//! Reads the posts list through the query cache and renders exactly one of
//! three states: loading, error, or the first five posts in endpoint order.
//! Refetching and staleness are entirely the cache's concern.

use crossterm::style::Color;

use crate::posts::{Post, POSTS_KEY};
use crate::query::{QueryClient, QuerySnapshot};
use crate::render::strip::{CellStyle, Strip};

/// How many posts the page shows.
const VISIBLE_POSTS: usize = 5;

// ---------------------------------------------------------------------------
// HomePage
// ---------------------------------------------------------------------------

/// The posts feed page.
pub struct HomePage {
    snapshot: QuerySnapshot<Vec<Post>>,
}

impl HomePage {
    /// Create the page in its initial loading state.
    pub fn new() -> Self {
        Self {
            snapshot: QuerySnapshot::loading(),
        }
    }

    /// Refresh the page's view of the posts query.
    ///
    /// Asking the client also records the fetch if the entry is missing or
    /// stale; the app loop spawns it.
    pub fn update(&mut self, client: &mut QueryClient) {
        self.snapshot = client.query::<Vec<Post>>(POSTS_KEY);
    }

    /// The current snapshot (for tests and the app).
    pub fn snapshot(&self) -> &QuerySnapshot<Vec<Post>> {
        &self.snapshot
    }

    /// Render the page as strips starting at row `y`.
    pub fn render(&self, y: i32) -> Vec<Strip> {
        let heading = CellStyle::new().fg(Color::Cyan).bold();
        let title_style = CellStyle::new().bold();
        let body_style = CellStyle::new();

        if self.snapshot.is_loading {
            return vec![Strip::line(y, "Loading posts...", body_style)];
        }
        if self.snapshot.is_error {
            let message = self.snapshot.error.as_deref().unwrap_or("unknown error");
            let text = format!("Error: {message}");
            return vec![Strip::line(y, &text, CellStyle::new().fg(Color::Red))];
        }

        let mut strips = Vec::new();
        let mut row = y;
        strips.push(Strip::line(row, "Welcome Home!", heading));
        row += 2;
        strips.push(Strip::line(row, "Latest Posts:", title_style));
        row += 2;

        if let Some(posts) = &self.snapshot.data {
            for post in posts.iter().take(VISIBLE_POSTS) {
                strips.push(Strip::line(row, &post.title, title_style));
                row += 1;
                strips.push(Strip::line(row, &post.body, body_style));
                row += 2;
            }
        }
        strips
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

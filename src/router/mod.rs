//! Client-side router: path → page resolution and preload-on-intent.
//!
//! The route table is fixed (`/` → Home, `/about` → About). Hovering a nav
//! link signals navigation intent; under [`PreloadPolicy::Intent`] the router
//! records the hovered page so the app can warm its queries before the
//! navigation actually happens.

// ---------------------------------------------------------------------------
// PageId
// ---------------------------------------------------------------------------

/// Identifier for a routable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    About,
}

// ---------------------------------------------------------------------------
// PreloadPolicy
// ---------------------------------------------------------------------------

/// When route data should be preloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadPolicy {
    /// Never preload; pages load on navigation only.
    Never,
    /// Preload when the user signals likely navigation (link hover).
    Intent,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// A route table entry.
#[derive(Debug, Clone, Copy)]
struct Route {
    path: &'static str,
    page: PageId,
}

/// Maps paths to pages and tracks the active page.
///
/// Constructed once at process start and passed down explicitly; never
/// reconstructed.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    current: PageId,
    preload: PreloadPolicy,
    pending_preload: Option<PageId>,
}

impl Router {
    /// Create a router with the application route table, starting at `/`.
    pub fn new(preload: PreloadPolicy) -> Self {
        Self {
            routes: vec![
                Route {
                    path: "/",
                    page: PageId::Home,
                },
                Route {
                    path: "/about",
                    page: PageId::About,
                },
            ],
            current: PageId::Home,
            preload,
            pending_preload: None,
        }
    }

    /// Resolve a path to a page, if the route exists.
    pub fn resolve(&self, path: &str) -> Option<PageId> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.page)
    }

    /// The path registered for a page.
    pub fn path_of(&self, page: PageId) -> &'static str {
        self.routes
            .iter()
            .find(|route| route.page == page)
            .map(|route| route.path)
            .unwrap_or("/")
    }

    /// The currently active page.
    pub fn current(&self) -> PageId {
        self.current
    }

    /// Navigate to a page directly.
    pub fn navigate(&mut self, page: PageId) {
        self.current = page;
    }

    /// Navigate by path. Unknown paths are ignored and reported as `false`.
    pub fn navigate_path(&mut self, path: &str) -> bool {
        match self.resolve(path) {
            Some(page) => {
                self.current = page;
                true
            }
            None => false,
        }
    }

    /// Record navigation intent (link hover) for a page.
    ///
    /// Under [`PreloadPolicy::Intent`] the page is queued for preloading;
    /// under [`PreloadPolicy::Never`] this is a no-op.
    pub fn hint_intent(&mut self, page: PageId) {
        if self.preload == PreloadPolicy::Intent {
            self.pending_preload = Some(page);
        }
    }

    /// Take the page queued for preloading, if any.
    pub fn take_preload(&mut self) -> Option<PageId> {
        self.pending_preload.take()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ── Resolution ───────────────────────────────────────────────────

    #[test]
    fn resolves_known_paths() {
        let router = Router::new(PreloadPolicy::Intent);
        assert_eq!(router.resolve("/"), Some(PageId::Home));
        assert_eq!(router.resolve("/about"), Some(PageId::About));
    }

    #[test]
    fn unknown_path_resolves_to_none() {
        let router = Router::new(PreloadPolicy::Intent);
        assert_eq!(router.resolve("/missing"), None);
    }

    #[test]
    fn path_of_pages() {
        let router = Router::new(PreloadPolicy::Intent);
        assert_eq!(router.path_of(PageId::Home), "/");
        assert_eq!(router.path_of(PageId::About), "/about");
    }

    // ── Navigation ───────────────────────────────────────────────────

    #[test]
    fn starts_at_home() {
        let router = Router::new(PreloadPolicy::Intent);
        assert_eq!(router.current(), PageId::Home);
    }

    #[test]
    fn navigate_path_switches_page() {
        let mut router = Router::new(PreloadPolicy::Intent);
        assert!(router.navigate_path("/about"));
        assert_eq!(router.current(), PageId::About);
    }

    #[test]
    fn navigate_unknown_path_is_ignored() {
        let mut router = Router::new(PreloadPolicy::Intent);
        assert!(!router.navigate_path("/nope"));
        assert_eq!(router.current(), PageId::Home);
    }

    // ── Preload on intent ────────────────────────────────────────────

    #[test]
    fn intent_queues_preload() {
        let mut router = Router::new(PreloadPolicy::Intent);
        router.hint_intent(PageId::About);
        assert_eq!(router.take_preload(), Some(PageId::About));
        assert_eq!(router.take_preload(), None);
    }

    #[test]
    fn never_policy_ignores_intent() {
        let mut router = Router::new(PreloadPolicy::Never);
        router.hint_intent(PageId::About);
        assert_eq!(router.take_preload(), None);
    }
}

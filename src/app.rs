//! App struct: lifecycle, mount guard, input dispatch, frame rendering.
//!
//! [`App`] ties together the query client, the router, the pages, the key
//! bindings, and the driver. The client and router are constructed once by
//! the caller and moved in — the app never rebuilds them. The
//! `new_headless` constructor allows testing without a real terminal.

use std::io;

use crate::event::binding::{AppAction, KeyBindingRegistry};
use crate::event::input::{InputEvent, KeyEvent, MouseAction, MouseEvent};
use crate::pages::{AboutPage, HomePage};
use crate::posts::{Post, POSTS_KEY, POSTS_URL};
use crate::query::QueryClient;
use crate::render::buffer::ScreenBuffer;
use crate::render::driver::Driver;
use crate::render::strip::{CellStyle, Strip};
use crate::router::{PageId, Router};

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// AppConfig
// ---------------------------------------------------------------------------

/// Configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Title shown in the nav bar.
    pub title: String,
    /// Posts endpoint URL.
    pub posts_url: String,
    /// Target frames per second for the render loop.
    pub fps: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "pinboard".to_owned(),
            posts_url: POSTS_URL.to_owned(),
            fps: 30,
        }
    }
}

impl AppConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title (builder).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the posts endpoint URL (builder).
    pub fn with_posts_url(mut self, url: impl Into<String>) -> Self {
        self.posts_url = url.into();
        self
    }

    /// Set the target FPS (builder).
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }
}

// ---------------------------------------------------------------------------
// AppMessage
// ---------------------------------------------------------------------------

/// A message posted back to the app loop by a spawned task.
#[derive(Debug)]
pub enum AppMessage {
    /// A fetch task finished for a query key.
    QueryResult {
        key: String,
        result: Result<Vec<Post>, String>,
    },
}

// ---------------------------------------------------------------------------
// LinkRegion
// ---------------------------------------------------------------------------

/// Screen region of one nav link, for mouse hit-testing.
#[derive(Debug, Clone, Copy)]
struct LinkRegion {
    x_start: u16,
    x_end: u16,
    y: u16,
    page: PageId,
}

impl LinkRegion {
    fn contains(&self, x: u16, y: u16) -> bool {
        y == self.y && x >= self.x_start && x < self.x_end
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// The application root.
///
/// Owns the screen buffer, the pages, and the process-wide query client and
/// router. The driver is optional to support headless testing.
pub struct App {
    pub config: AppConfig,
    pub client: QueryClient,
    pub router: Router,
    pub bindings: KeyBindingRegistry,
    home: HomePage,
    about: AboutPage,
    screen: ScreenBuffer,
    driver: Option<Driver>,
    links: Vec<LinkRegion>,
    running: bool,
}

impl App {
    /// Create a new app with a real terminal driver.
    ///
    /// Queries the terminal size to set the initial screen dimensions.
    pub fn new(config: AppConfig, client: QueryClient, router: Router) -> io::Result<Self> {
        let (width, height) = Driver::terminal_size()?;
        let driver = Driver::new()?;
        Ok(Self::build(config, client, router, width, height, Some(driver)))
    }

    /// Create a headless app for testing (no terminal driver).
    pub fn new_headless(
        width: u16,
        height: u16,
        config: AppConfig,
        client: QueryClient,
        router: Router,
    ) -> Self {
        Self::build(config, client, router, width, height, None)
    }

    fn build(
        config: AppConfig,
        client: QueryClient,
        router: Router,
        width: u16,
        height: u16,
        driver: Option<Driver>,
    ) -> Self {
        Self {
            config,
            client,
            router,
            bindings: KeyBindingRegistry::with_defaults(),
            home: HomePage::new(),
            about: AboutPage::new(),
            screen: ScreenBuffer::new(width, height),
            driver,
            links: Vec::new(),
            running: true,
        }
    }

    // -----------------------------------------------------------------------
    // Mount
    // -----------------------------------------------------------------------

    /// Mount the UI into the screen buffer exactly once.
    ///
    /// If the buffer already holds rendered content, the call is a no-op
    /// and returns `false` — this keeps duplicate mount invocations (e.g.
    /// a re-entrant startup path) from rendering twice.
    pub fn mount(&mut self) -> bool {
        if !self.screen.is_blank() {
            return false;
        }
        self.update_pages();
        self.render_frame();
        true
    }

    /// Whether the UI has been mounted.
    pub fn is_mounted(&self) -> bool {
        !self.screen.is_blank()
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Handle an input event.
    ///
    /// App-level key bindings win; everything else goes to the active page.
    /// Mouse movement over a nav link records navigation intent, and a left
    /// click on a link navigates.
    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::Key(key_event) => self.handle_key(key_event),
            InputEvent::Mouse(mouse_event) => self.handle_mouse(mouse_event),
            InputEvent::Resize { width, height } => {
                self.screen.resize(width, height);
                self.render_frame();
            }
        }
    }

    fn handle_key(&mut self, event: KeyEvent) {
        if let Some(action) = self.bindings.resolve(&event) {
            match action {
                AppAction::Quit => self.running = false,
                AppAction::Navigate(page) => self.navigate(page),
            }
            return;
        }
        if self.router.current() == PageId::About {
            self.about.on_key(event);
        }
    }

    fn handle_mouse(&mut self, event: MouseEvent) {
        let hit = self
            .links
            .iter()
            .find(|link| link.contains(event.x, event.y))
            .copied();
        let Some(link) = hit else { return };
        match event.kind {
            MouseAction::Moved => self.router.hint_intent(link.page),
            MouseAction::LeftDown => self.navigate(link.page),
            MouseAction::Other => {}
        }
    }

    /// Navigate to a page and refresh it.
    pub fn navigate(&mut self, page: PageId) {
        self.router.navigate(page);
        self.update_pages();
    }

    // -----------------------------------------------------------------------
    // Per-frame work
    // -----------------------------------------------------------------------

    /// One frame: process preload intents, refresh the active page, sweep
    /// the cache, and render.
    pub fn tick(&mut self) {
        self.process_preloads();
        self.update_pages();
        self.client.sweep();
        if self.is_mounted() {
            self.render_frame();
        }
    }

    /// Apply a message posted by a spawned task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::QueryResult { key, result } => {
                self.client.store(&key, result);
            }
        }
    }

    /// Drain the query keys that need a fetch task spawned.
    pub fn take_fetches(&mut self) -> Vec<String> {
        self.client.take_pending()
    }

    /// Turn queued preload intents into query prefetches.
    fn process_preloads(&mut self) {
        while let Some(page) = self.router.take_preload() {
            match page {
                PageId::Home => self.client.prefetch(POSTS_KEY),
                // The about page has no remote data to warm.
                PageId::About => {}
            }
        }
    }

    fn update_pages(&mut self) {
        if self.router.current() == PageId::Home {
            self.home.update(&mut self.client);
        }
    }

    // -----------------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------------

    fn render_frame(&mut self) {
        let mut next = ScreenBuffer::new(self.screen.width, self.screen.height);
        let (nav, links) = self.render_nav();
        self.links = links;
        next.place_strips(&nav);

        let page_strips = match self.router.current() {
            PageId::Home => self.home.render(2),
            PageId::About => self.about.render(2),
        };
        next.place_strips(&page_strips);

        let updates = next.diff(&self.screen);
        if let Some(driver) = &mut self.driver {
            // Terminal write errors are not fatal to the frame.
            let _ = driver.apply_updates(&updates);
            let _ = driver.flush();
        }
        self.screen = next;
    }

    /// Render the nav bar and compute link hit regions.
    fn render_nav(&self) -> (Vec<Strip>, Vec<LinkRegion>) {
        let title_style = CellStyle::new().fg(Color::Magenta).bold();
        let link_style = CellStyle::new().fg(Color::Blue).underline();
        let active_style = CellStyle::new().fg(Color::Blue).bold().underline();

        let mut strip = Strip::new(0, 0);
        let mut links = Vec::new();
        strip.push_str(&self.config.title, title_style);
        strip.push_str("   ", CellStyle::new());

        for (page, label) in [(PageId::Home, "Home (F1)"), (PageId::About, "About (F2)")] {
            let x_start = strip.right() as u16;
            let style = if self.router.current() == page {
                active_style
            } else {
                link_style
            };
            strip.push_str(label, style);
            links.push(LinkRegion {
                x_start,
                x_end: strip.right() as u16,
                y: 0,
                page,
            });
            strip.push_str("   ", CellStyle::new());
        }
        (vec![strip], links)
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Whether the app should quit.
    pub fn should_quit(&self) -> bool {
        !self.running
    }

    /// Request the app to quit.
    pub fn request_quit(&mut self) {
        self.running = false;
    }

    /// Whether the app has a terminal driver (not headless).
    pub fn has_driver(&self) -> bool {
        self.driver.is_some()
    }

    /// Borrow the terminal driver, if any.
    pub fn driver_mut(&mut self) -> Option<&mut Driver> {
        self.driver.as_mut()
    }

    /// The current screen content as plain text (for tests).
    pub fn screen_text(&self) -> String {
        self.screen.to_text()
    }

    /// Borrow the about page mutably (for tests driving the form).
    pub fn about_mut(&mut self) -> &mut AboutPage {
        &mut self.about
    }

    /// Borrow the home page (for tests inspecting the snapshot).
    pub fn home(&self) -> &HomePage {
        &self.home
    }
}

// ===========================================================================
// Tests
// ===========================================================================

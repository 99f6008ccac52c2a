//! Binary entry point: construct the singletons, mount once, run the loop.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use pinboard::app::{App, AppConfig, AppMessage};
use pinboard::event::input::InputEvent;
use pinboard::posts::{self, POSTS_KEY};
use pinboard::query::QueryClient;
use pinboard::router::{PreloadPolicy, Router};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; the UI owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::new();
    let fps = config.fps.max(1);

    // The process-wide singletons: built once, moved into the app.
    let client = QueryClient::with_defaults();
    let router = Router::new(PreloadPolicy::Intent);
    let mut app = App::new(config, client, router)?;

    if let Some(driver) = app.driver_mut() {
        driver.enter_alt_screen()?;
        driver.enable_mouse_capture()?;
        driver.hide_cursor()?;
        driver.flush()?;
    }
    app.mount();

    let (input_tx, mut input_rx) = mpsc::channel::<InputEvent>(64);
    let (msg_tx, mut msg_rx) = mpsc::channel::<AppMessage>(16);

    // Blocking input reader: crossterm events flow in over a channel so the
    // app loop never blocks on the terminal.
    thread::spawn(move || loop {
        match crossterm::event::poll(Duration::from_millis(100)) {
            Ok(true) => {
                let Ok(raw) = crossterm::event::read() else { break };
                if let Some(event) = InputEvent::from_crossterm(raw) {
                    if input_tx.blocking_send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(false) => {
                if input_tx.is_closed() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let mut frame = tokio::time::interval(Duration::from_millis(1000 / fps as u64));
    loop {
        tokio::select! {
            Some(event) = input_rx.recv() => {
                app.handle_input(event);
            }
            Some(message) = msg_rx.recv() => {
                app.handle_message(message);
            }
            _ = frame.tick() => {
                app.tick();
                for key in app.take_fetches() {
                    if key == POSTS_KEY {
                        let url = app.config.posts_url.clone();
                        let tx = msg_tx.clone();
                        tokio::spawn(async move {
                            let result = posts::fetch_posts(&url)
                                .await
                                .map_err(|error| error.to_string());
                            let _ = tx.send(AppMessage::QueryResult { key, result }).await;
                        });
                    } else {
                        tracing::warn!(key = %key, "no fetcher registered for query key");
                    }
                }
            }
        }
        if app.should_quit() {
            break;
        }
    }

    if let Some(driver) = app.driver_mut() {
        driver.show_cursor()?;
        driver.disable_mouse_capture()?;
        driver.leave_alt_screen()?;
        driver.flush()?;
    }
    Ok(())
}

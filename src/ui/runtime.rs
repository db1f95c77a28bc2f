use crate::api::UnsplashClient;
use crate::clipboard::ClipboardHandler;
use crate::config::{Config, SecureString};
use crate::fetch::{FetchOrchestrator, LoadingPacer};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse, InputAction};
use crate::ui::render::draw;
use crate::ui::search::SearchIntent;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive gallery until the user quits.
///
/// Fetches are spawned on `runtime`; the UI loop itself stays on the calling
/// thread and owns all state.
pub fn run(
    config: &Config,
    access_key: SecureString,
    initial_query: Option<String>,
    runtime: Handle,
) -> anyhow::Result<()> {
    let client = UnsplashClient::new(&config.api, access_key)
        .context("Failed to create photo-search client")?;
    let orchestrator = FetchOrchestrator::new(
        Arc::new(client),
        LoadingPacer::from_config(&config.loading),
        runtime,
    );
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let (mut terminal, guard) = setup_terminal().context("Failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new();

    let sender = events.sender();
    app.set_fetcher(Arc::new(move |tag| {
        let sender = sender.clone();
        orchestrator.run_search(tag, move |outcome| {
            let _ = sender.send(AppEvent::Fetch(outcome));
        });
    }));

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if let Some(query) = initial_query {
        app.dispatch_search(SearchIntent::SetInput(query));
        app.commit_search();
    }

    let mut clipboard: Option<ClipboardHandler> = None;

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if handle_key(&mut app, key) == InputAction::CopyLink {
                    copy_selected_link(&mut app, &mut clipboard);
                }
            }
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
            Ok(AppEvent::Paste(text)) => app.on_paste(&text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Fetch(outcome)) => app.on_fetch_outcome(outcome),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Exited");
    Ok(())
}

fn copy_selected_link(app: &mut App, clipboard: &mut Option<ClipboardHandler>) {
    let Some(link) = app.selected_image().map(|image| image.links.html.clone()) else {
        return;
    };
    if link.is_empty() {
        app.set_notice("Selected photo has no link");
        return;
    }

    if clipboard.is_none() {
        match ClipboardHandler::new() {
            Ok(handler) => *clipboard = Some(handler),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard unavailable");
                app.set_notice("Clipboard unavailable");
                return;
            }
        }
    }

    if let Some(handler) = clipboard.as_mut() {
        match handler.set_text(&link) {
            Ok(()) => app.set_notice("Link copied"),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard write failed");
                app.set_notice("Copy failed");
            }
        }
    }
}

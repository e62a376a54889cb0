//! TUI module
//!
//! Terminal user interface for browsing the resource tree, built with
//! ratatui for a K9s-inspired experience.

pub mod app;
pub mod theme;
pub mod views;

pub use app::{App, AppAction};
pub use theme::Theme;

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::snapshot::{refresh_once, RefreshEvent, SnapshotSource, SnapshotStore};

/// Render one frame
fn render(f: &mut Frame, app: &App, headless: bool) {
    let constraints = if headless {
        vec![Constraint::Min(1), Constraint::Length(1)]
    } else {
        vec![
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    if headless {
        views::render_tree(f, chunks[0], app);
        views::render_footer(f, chunks[1], app);
    } else {
        views::render_header(f, chunks[0], app);
        views::render_tree(f, chunks[1], app);
        views::render_footer(f, chunks[2], app);
    }
}

/// Pull the latest snapshot state into the app
async fn reload(app: &mut App, store: &SnapshotStore) {
    let tree = store.display_tree().await;
    let summary = store.summary().await;
    let status = store.app_status().await;
    app.set_snapshot(tree, summary, status);
}

/// Run the TUI application
pub async fn run_tui(
    store: SnapshotStore,
    source: Arc<dyn SnapshotSource>,
    mut refresh_rx: mpsc::UnboundedReceiver<RefreshEvent>,
    context: String,
    namespace: String,
    config: Config,
    theme: Theme,
) -> Result<()> {
    tracing::debug!("Initializing TUI");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(context, namespace, theme);
    reload(&mut app, &store).await;

    tracing::debug!("TUI initialized, entering main loop");

    loop {
        terminal.draw(|f| render(f, &app, config.ui.headless))?;

        // Handle input events (non-blocking)
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) {
                    break;
                }
            }
        }

        // Execute any store work the key handler requested
        if let Some(action) = app.take_action() {
            match action {
                AppAction::Refresh => match refresh_once(source.as_ref(), &store).await {
                    Ok(count) => {
                        app.set_status_message(format!("Refreshed: {count} resources"), false);
                    }
                    Err(e) => {
                        tracing::warn!("Manual refresh failed: {}", e);
                        app.set_status_message(format!("Refresh failed: {e}"), true);
                    }
                },
                AppAction::SetStatusFilter(status) => {
                    store.set_status_filter(&status).await;
                    app.clear_status_message();
                }
                AppAction::SetSearch(search) => {
                    store.set_search(&search).await;
                    app.clear_status_message();
                }
            }
            reload(&mut app, &store).await;
        }

        // Process refresh notifications (non-blocking)
        let mut updated = false;
        while let Ok(event) = refresh_rx.try_recv() {
            match event {
                RefreshEvent::Published(_) => updated = true,
                RefreshEvent::Failed(message) => {
                    app.set_status_message(format!("Refresh failed: {message}"), true);
                }
            }
        }
        if updated {
            reload(&mut app, &store).await;
        }
    }

    tracing::debug!("TUI shutting down");

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if config.ui.enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    Ok(())
}

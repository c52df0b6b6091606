mod app;
mod handler;
mod logging;
mod page;
mod tui;
mod ui;

use anyhow::Result;
use portfolio_core::{ChatSession, Config};
use tokio::sync::mpsc::UnboundedSender;

use crate::app::App;
use crate::tui::{AppEvent, EventHandler, Tui};

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = logging::init(&logging::default_log_dir())?;

    let config = Config::load().unwrap_or_else(|e| {
        tracing::warn!("falling back to default config: {e:#}");
        Config::new()
    });

    let provider = config.provider();
    tracing::info!(
        %provider,
        key_source = config.api_key_source().unwrap_or("none"),
        log = %log_path.display(),
        "starting portfolio"
    );

    let chat = ChatSession::new(
        provider.client(&config),
        config.system_instruction()?,
        config.temperature(),
    );

    tui::install_panic_hook();
    let mut terminal = tui::init()?;
    let mut events = EventHandler::new();

    let mut app = App::new(chat);
    follow_chat_updates(&mut app, events.sender());

    let result = run(&mut terminal, &mut app, &mut events).await;

    tui::restore()?;
    result
}

/// Ask the UI to scroll the chat panel whenever the log grows
fn follow_chat_updates(app: &mut App, tx: UnboundedSender<AppEvent>) {
    app.chat.subscribe(move |_turns| {
        let _ = tx.send(AppEvent::ChatUpdated);
    });
}

async fn run(terminal: &mut Tui, app: &mut App, events: &mut EventHandler) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(app, frame))?;

        match events.next().await {
            Some(event) => handler::handle_event(app, event)?,
            None => break,
        }
    }
    Ok(())
}

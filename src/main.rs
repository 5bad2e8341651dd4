use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use lockwatch_tui::{
    Action, AppState, Event, EventHandler, HelpOverlay, HomeScreen, KeyBindings, KeyContext, Tui,
};

mod fixture;

/// Lockwatch - a terminal UI for monitoring a smart lock
#[derive(Parser, Debug)]
#[command(name = "lockwatch")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML file supplying device, settings, and activity data
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// UI tick interval in milliseconds
    #[arg(long, default_value = "250")]
    tick_ms: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for debugging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the application
    let result = run_app(args).await;

    // Handle any errors
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

async fn run_app(args: Args) -> Result<()> {
    // Create action channel
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    // Load the data snapshot
    let snapshot = match &args.data {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading fixture file");
            fixture::load(path)?
        }
        None => fixture::sample(),
    };

    // Initialize state; sections are composed once here
    let mut state = AppState::new(
        action_tx.clone(),
        snapshot.device,
        snapshot.settings,
        snapshot.records,
    );

    // Initialize TUI
    let mut tui = Tui::enter()?;

    // Initialize event handler
    let mut events = EventHandler::new(Duration::from_millis(args.tick_ms));

    // Initialize keybindings
    let keybindings = KeyBindings::new();

    // Initial render
    render(&mut tui, &state)?;

    // Main event loop
    loop {
        tokio::select! {
            // Handle terminal events
            Some(event) = events.next() => {
                match event {
                    Event::Key(key) => {
                        if let Some(action) = keybindings.get_action(KeyContext::Home, &key) {
                            let _ = action_tx.send(action);
                        }
                    }
                    Event::Tick => {
                        // Nothing updates between ticks; re-render below
                    }
                    Event::Resize => {
                        let _ = action_tx.send(Action::Render);
                    }
                    Event::Error(e) => {
                        state.show_error(e);
                    }
                }
            }

            // Handle user actions
            Some(action) = action_rx.recv() => {
                handle_action(&mut state, action);
            }
        }

        if state.should_quit {
            break;
        }

        render(&mut tui, &state)?;
    }

    // Cleanup
    events.shutdown();
    tui.restore()?;

    Ok(())
}

fn handle_action(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Back => {
            // Close whatever is on top; quit from the bare screen
            if state.ui_state.help_visible {
                state.ui_state.help_visible = false;
            } else if state.ui_state.error_message.is_some() {
                state.dismiss_error();
            } else {
                state.should_quit = true;
            }
        }
        Action::ToggleHelp => {
            state.ui_state.help_visible = !state.ui_state.help_visible;
        }

        // Activity log scrolling; the renderer clamps to content
        Action::ScrollUp(n) => {
            state.scroll_up(n);
        }
        Action::ScrollDown(n) => {
            state.scroll_down(n);
        }
        Action::PageUp => {
            state.scroll_up(10);
        }
        Action::PageDown => {
            state.scroll_down(10);
        }
        Action::ScrollToTop => {
            state.scroll_to_top();
        }
        Action::ScrollToBottom => {
            state.scroll_to_bottom();
        }

        Action::Render => {
            // No-op; the loop re-renders after every action
        }
    }
}

fn render(tui: &mut Tui, state: &AppState) -> Result<()> {
    tui.draw(|frame| {
        HomeScreen::render(frame, state);

        // Render help overlay if visible
        if state.ui_state.help_visible {
            HelpOverlay::render(frame);
        }
    })?;

    Ok(())
}

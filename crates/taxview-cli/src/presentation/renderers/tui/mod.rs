mod app;
mod components;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use taxview_core::ParamDataset;

use app::AppState;

/// Run the interactive viewer until the user quits. Single-threaded: one
/// loop draws, polls for a key, and updates the selection cursor.
pub fn run(dataset: &ParamDataset, currency_symbol: &str) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app_state = AppState::new(dataset, currency_symbol);
    let mut should_quit = false;

    let tick_rate = Duration::from_millis(250);

    while !should_quit {
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => {
                        should_quit = true;
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        app_state.select_next();
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        app_state.select_previous();
                    }
                    KeyCode::Home => {
                        app_state.select_first();
                    }
                    KeyCode::End => {
                        app_state.select_last();
                    }
                    _ => {}
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

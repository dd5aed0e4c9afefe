use card_game::tui::{app::AppState, controller};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::fs::File;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

/// The TUI owns stderr, so records only go to the file named by `CARD_GAME_LOG`.
fn init_logging() -> io::Result<()> {
    let Some(path) = std::env::var_os("CARD_GAME_LOG") else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    if !io::stdout().is_terminal() {
        println!(
            "card-game TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            card_game::VERSION
        );
        return Ok(());
    }
    init_logging()?;
    log::info!("starting card-game {}", card_game::VERSION);
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}

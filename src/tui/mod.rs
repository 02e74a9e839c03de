//! Terminal UI front end.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_scoreboard::{GameController, GameSettings, Position};
use tracing::{debug, error, info, instrument, warn};

use app::{App, FormAction, Screen};

/// Whether the event loop keeps going.
enum Flow {
    Continue,
    Quit,
}

/// Runs the terminal UI until the user quits.
#[instrument(skip(settings))]
pub fn run_tui(settings: &GameSettings, first: String, second: String) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = setup_or_restore(setup_terminal, restore_terminal)?;

    let mut game = GameController::new(first, second, App::new());
    game.restart_game();

    let res = run_loop(&mut terminal, &mut game, settings);

    restore_terminal()?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    info!(
        first = game.players()[0].score(),
        second = game.players()[1].score(),
        ties = game.tie_count(),
        "TUI closed"
    );
    res
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen")?;
    Ok(())
}

/// Runs `setup`, calling `restore` before returning its error.
fn setup_or_restore<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    setup().inspect_err(|_| {
        if let Err(e) = restore() {
            warn!(error = ?e, "Failed to restore terminal");
        }
    })
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    game: &mut GameController<App>,
    settings: &GameSettings,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, game.display()))?;

        let Event::Key(key) = event::read().context("Failed to read terminal event")? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if let Flow::Quit = handle_key(game, settings, key)? {
            info!("User quit");
            return Ok(());
        }
    }
}

#[instrument(skip(game, settings))]
fn handle_key(
    game: &mut GameController<App>,
    settings: &GameSettings,
    key: KeyEvent,
) -> Result<Flow> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Flow::Quit);
    }

    if let Screen::NameEntry(_) = game.display().screen() {
        match game.display_mut().handle_form_key(key.code) {
            FormAction::Editing => {}
            FormAction::Cancel => debug!("Name entry cancelled"),
            FormAction::Submit([first, second]) => {
                let (first, second) =
                    settings.player_names(Some(first.as_str()), Some(second.as_str()));
                game.start_game(&first, &second);
            }
        }
        return Ok(Flow::Continue);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(Flow::Quit),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            game.display_mut().move_cursor(key.code);
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            let cursor = game.display().cursor();
            play(game, cursor)?;
        }
        KeyCode::Char('r') => game.restart_game(),
        KeyCode::Char('s') => game.reset_scores(),
        KeyCode::Char('n') => game.display_mut().open_name_form(),
        code => {
            if let Some(position) = input::digit_position(code) {
                game.display_mut().set_cursor(position);
                play(game, position)?;
            }
        }
    }
    Ok(Flow::Continue)
}

fn play(game: &mut GameController<App>, position: Position) -> Result<()> {
    if !game.play_turn(position.to_index())? {
        let message = if game.is_active() {
            format!("{} is already taken.", position)
        } else {
            "No game in progress. Press r to play again or n for new players.".to_string()
        };
        game.display_mut().set_status(message);
    }
    Ok(())
}

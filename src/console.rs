//! Line-oriented front end on stdin/stdout.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_scoreboard::{
    Board, EventDisplay, EventSink, GameController, GameEvent, GameSnapshot, Position,
};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  1-9            place your marker (cells numbered left to right, top to bottom)
  r              restart with the same players
  n [P1 [P2]]    new game, optionally renaming the players
  s              reset scores
  b              show board and scores
  h              show this help
  q              quit";

/// A parsed line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Play a cell.
    Play(Position),
    /// Restart with the same names.
    Restart,
    /// Start a new game, renaming players that are given.
    NewGame {
        /// New name for the first player.
        first: Option<String>,
        /// New name for the second player.
        second: Option<String>,
    },
    /// Zero the scores.
    ResetScores,
    /// Print the board and scores.
    Board,
    /// Print the command list.
    Help,
    /// Leave.
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line. Returns `None` for blank or unknown input.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let head = words.next()?.to_lowercase();

        let command = match head.as_str() {
            "r" | "restart" => Self::Restart,
            "n" | "new" => Self::NewGame {
                first: words.next().map(str::to_string),
                second: words.next().map(str::to_string),
            },
            "s" | "scores" => Self::ResetScores,
            "b" | "board" => Self::Board,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Play(Position::parse(line)?),
        };
        Some(command)
    }
}

/// Writes game events to the console, as prose or as JSON lines.
#[derive(Debug)]
pub struct ConsoleOutput<W> {
    out: W,
    json: bool,
    names: [String; 2],
}

impl<W: Write> ConsoleOutput<W> {
    /// Creates an output writing to `out`.
    pub fn new(out: W, json: bool) -> Self {
        Self {
            out,
            json,
            names: Default::default(),
        }
    }

    /// Prints a free-form message. Suppressed in JSON mode.
    pub fn notice(&mut self, message: &str) {
        if self.json {
            info!(message, "Console notice");
        } else {
            self.write_line(message);
        }
    }

    /// Prints the help text. Suppressed in JSON mode.
    pub fn help(&mut self) {
        self.notice(HELP);
    }

    /// Prints the whole game state.
    pub fn snapshot(&mut self, snapshot: &GameSnapshot) {
        if self.json {
            self.write_json(snapshot);
            return;
        }
        let [first, second] = &snapshot.players;
        let text = format!(
            "{}Score: {} {} - {} {}, ties {}",
            snapshot.board,
            first.name(),
            first.score(),
            second.score(),
            second.name(),
            snapshot.session.tie_count()
        );
        self.write_line(&text);
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    fn write_json<T: serde::Serialize>(&mut self, value: &T) {
        match serde_json::to_string(value) {
            Ok(line) => self.write_line(&line),
            Err(e) => warn!(error = %e, "Failed to serialize console output"),
        }
    }

    fn write_line(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text) {
            warn!(error = %e, "Failed to write console output");
        }
    }

    fn describe(&mut self, event: &GameEvent) -> String {
        match event {
            GameEvent::GameStarted { first, second } => {
                self.names = [first.name().clone(), second.name().clone()];
                format!(
                    "New game: {} ({}) vs {} ({})",
                    first.name(),
                    first.marker(),
                    second.name(),
                    second.marker()
                )
            }
            GameEvent::BoardChanged { cells } => {
                Board::from(*cells).to_string().trim_end().to_string()
            }
            GameEvent::TurnChanged { current } => {
                format!("{}'s turn ({})", current.name(), current.marker())
            }
            GameEvent::Win { winner, line } => format!(
                "{} wins with cells {}-{}-{}! Press r to play again.",
                winner.name(),
                line[0] + 1,
                line[1] + 1,
                line[2] + 1
            ),
            GameEvent::Tie => "It's a tie! Press r to play again.".to_string(),
            GameEvent::ScoresChanged {
                first,
                second,
                ties,
            } => format!(
                "Score: {} {} - {} {}, ties {}",
                self.names[0], first, second, self.names[1], ties
            ),
        }
    }
}

impl<W: Write> EventSink for ConsoleOutput<W> {
    fn emit(&mut self, event: GameEvent) {
        if self.json {
            self.write_json(&event);
        } else {
            let text = self.describe(&event);
            self.write_line(&text);
        }
    }
}

/// Runs a session reading commands from `input` until EOF or `q`.
#[instrument(skip(input, output))]
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: W,
    first: String,
    second: String,
    json: bool,
) -> Result<()> {
    info!("Starting console session");
    let display = EventDisplay::new(ConsoleOutput::new(output, json));
    let mut game = GameController::new(first, second, display);
    game.restart_game();
    game.display_mut().sink_mut().help();

    for line in input.lines() {
        let line = line.context("Failed to read console input")?;
        let Some(command) = ConsoleCommand::parse(&line) else {
            if !line.trim().is_empty() {
                game.display_mut()
                    .sink_mut()
                    .notice("Unknown command. Type h for help.");
            }
            continue;
        };
        debug!(?command, "Console command");

        match command {
            ConsoleCommand::Play(position) => {
                if !game.play_turn(position.to_index())? {
                    let message = if game.is_active() {
                        "That cell is taken."
                    } else {
                        "No game in progress. Press r to restart or n for a new game."
                    };
                    game.display_mut().sink_mut().notice(message);
                }
            }
            ConsoleCommand::Restart => game.restart_game(),
            ConsoleCommand::NewGame { first, second } => game.start_game(
                first.as_deref().unwrap_or_default(),
                second.as_deref().unwrap_or_default(),
            ),
            ConsoleCommand::ResetScores => game.reset_scores(),
            ConsoleCommand::Board => {
                let snapshot = game.snapshot();
                game.display_mut().sink_mut().snapshot(&snapshot);
            }
            ConsoleCommand::Help => game.display_mut().sink_mut().help(),
            ConsoleCommand::Quit => break,
        }

        game.display_mut()
            .sink_mut()
            .flush()
            .context("Failed to flush console output")?;
    }

    info!("Console session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str, json: bool) -> String {
        let mut out = Vec::new();
        run(
            Cursor::new(script.to_string()),
            &mut out,
            "Alice".to_string(),
            "Bob".to_string(),
            json,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_cell_numbers() {
        assert_eq!(
            ConsoleCommand::parse("1"),
            Some(ConsoleCommand::Play(Position::TopLeft))
        );
        assert_eq!(
            ConsoleCommand::parse(" 9 "),
            Some(ConsoleCommand::Play(Position::BottomRight))
        );
        assert_eq!(ConsoleCommand::parse("0"), None);
        assert_eq!(ConsoleCommand::parse("10"), None);
    }

    #[test]
    fn test_parse_labels_and_keywords() {
        assert_eq!(
            ConsoleCommand::parse("top left"),
            Some(ConsoleCommand::Play(Position::TopLeft))
        );
        assert_eq!(ConsoleCommand::parse("R"), Some(ConsoleCommand::Restart));
        assert_eq!(ConsoleCommand::parse("s"), Some(ConsoleCommand::ResetScores));
        assert_eq!(ConsoleCommand::parse("quit"), Some(ConsoleCommand::Quit));
        assert_eq!(ConsoleCommand::parse(""), None);
        assert_eq!(ConsoleCommand::parse("dance"), None);
    }

    #[test]
    fn test_parse_new_game_names() {
        assert_eq!(
            ConsoleCommand::parse("n Carol Dave"),
            Some(ConsoleCommand::NewGame {
                first: Some("Carol".to_string()),
                second: Some("Dave".to_string()),
            })
        );
        assert_eq!(
            ConsoleCommand::parse("new"),
            Some(ConsoleCommand::NewGame {
                first: None,
                second: None
            })
        );
    }

    #[test]
    fn test_console_game_to_win() {
        let out = play("1\n4\n2\n5\n3\n", false);
        assert!(out.contains("New game: Alice (X) vs Bob (O)"));
        assert!(out.contains("Alice wins with cells 1-2-3!"));
        assert!(out.contains("Score: Alice 1 - 0 Bob, ties 0"));
    }

    #[test]
    fn test_console_reports_rejected_moves() {
        let out = play("5\n5\n", false);
        assert!(out.contains("That cell is taken."));

        let out = play("1\n4\n2\n5\n3\n9\n", false);
        assert!(out.contains("No game in progress."));
    }

    #[test]
    fn test_console_quit_stops_reading() {
        let out = play("q\n1\n", false);
        assert!(!out.contains("Bob's turn"));
    }

    #[test]
    fn test_console_json_lines() {
        let out = play("1\n4\n2\n5\n3\n", true);
        let events: Vec<GameEvent> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert!(matches!(events.first(), Some(GameEvent::GameStarted { .. })));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, GameEvent::Win { line, .. } if *line == [0, 1, 2]))
        );
        assert_eq!(
            events.last(),
            Some(&GameEvent::ScoresChanged {
                first: 1,
                second: 0,
                ties: 0
            })
        );
    }
}

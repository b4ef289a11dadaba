//! Line-oriented turn loop: prompts the current player for a column, drops
//! their token, and re-displays the board until someone wins or the board
//! fills up.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::{BoardError, MoveError, SessionError};
use crate::game::{GameOutcome, GameState, Player};

/// What a line of player input turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnInput {
    Valid(usize),
    OutOfRange,
    NotANumber,
}

fn parse_column(line: &str, width: usize) -> ColumnInput {
    match line.trim().parse::<i64>() {
        Ok(n) if n >= 0 && (n as u64) < width as u64 => ColumnInput::Valid(n as usize),
        Ok(_) => ColumnInput::OutOfRange,
        Err(_) => ColumnInput::NotANumber,
    }
}

pub struct Session<R, W> {
    state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(state: GameState, input: R, output: W) -> Self {
        Session {
            state,
            input,
            output,
        }
    }

    /// Play the game to completion.
    pub fn run(&mut self) -> Result<GameOutcome, SessionError> {
        let board = self.state.board();
        info!(width = board.width(), height = board.height(), "starting game");

        writeln!(self.output, "Use 0-{} to choose a column", board.width() - 1)?;
        writeln!(self.output, "{}", board)?;

        loop {
            let result = self.choose_and_drop()?;
            writeln!(self.output, "{}", self.state.board())?;

            match result {
                Some(GameOutcome::Winner(player)) => {
                    writeln!(self.output, "\nPlayer {} wins!", player.symbol())?;
                    info!(winner = player.name(), "game over");
                    return Ok(GameOutcome::Winner(player));
                }
                Some(GameOutcome::Draw) => {
                    writeln!(self.output, "Game over -- no winner")?;
                    info!("game over, draw");
                    return Ok(GameOutcome::Draw);
                }
                None => {}
            }
        }
    }

    /// Prompt the current player until they pick a column that accepts a token.
    fn choose_and_drop(&mut self) -> Result<Option<GameOutcome>, SessionError> {
        let player = self.state.current_player();
        let width = self.state.board().width();

        loop {
            self.prompt(player)?;
            let line = self.read_line()?;

            let column = match parse_column(&line, width) {
                ColumnInput::Valid(column) => column,
                ColumnInput::OutOfRange => {
                    debug!(input = line.trim(), "column out of range");
                    writeln!(self.output, "Column must be between 0 and {}.", width - 1)?;
                    continue;
                }
                ColumnInput::NotANumber => {
                    debug!(input = line.trim(), "column is not a number");
                    writeln!(self.output, "Please enter a column number.")?;
                    continue;
                }
            };

            match self.state.apply_move(column) {
                Ok(result) => {
                    debug!(
                        player = result.player.name(),
                        row = result.row,
                        column = result.column,
                        "token dropped"
                    );
                    return Ok(result.outcome);
                }
                Err(MoveError::Board(BoardError::ColumnFull(column))) => {
                    debug!(column, "column is full");
                    writeln!(self.output, "Column {column} is full.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn prompt(&mut self, player: Player) -> Result<(), SessionError> {
        writeln!(self.output, "\nPlayer {} turn: ", player.symbol())?;
        self.output.flush()?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn play(state: GameState, input: &str) -> (Result<GameOutcome, SessionError>, String) {
        let mut output = Vec::new();
        let result = Session::new(state, Cursor::new(input.as_bytes()), &mut output).run();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_column() {
        assert_eq!(parse_column("3\n", 7), ColumnInput::Valid(3));
        assert_eq!(parse_column("  0 ", 7), ColumnInput::Valid(0));
        assert_eq!(parse_column("7", 7), ColumnInput::OutOfRange);
        assert_eq!(parse_column("-1", 7), ColumnInput::OutOfRange);
        assert_eq!(parse_column("three", 7), ColumnInput::NotANumber);
        assert_eq!(parse_column("", 7), ColumnInput::NotANumber);
    }

    #[test]
    fn test_red_wins_horizontally() {
        let (result, output) = play(GameState::default(), "3\n3\n4\n4\n5\n5\n6\n");

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Red));
        assert!(output.starts_with("Use 0-6 to choose a column\n0123456\n"));
        assert!(output.contains("\nPlayer Y turn: \n"));
        assert!(output.ends_with("...YYY.\n...RRRR\n\nPlayer R wins!\n"));
        assert_eq!(output.matches("Player R turn:").count(), 4);
        assert_eq!(output.matches("Player Y turn:").count(), 3);
    }

    #[test]
    fn test_bad_input_reprompts_same_player() {
        let (result, output) = play(
            GameState::with_size(4, 4).unwrap(),
            "x\n4\n-2\n0\n1\n0\n1\n0\n1\n0\n",
        );

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Red));
        assert!(output.contains("Please enter a column number."));
        assert!(output.contains("Column must be between 0 and 3."));
        // Three rejected attempts plus four accepted drops for Red
        assert_eq!(output.matches("Player R turn:").count(), 7);
    }

    #[test]
    fn test_rejected_input_stays_below_warn() {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let (result, _) = tracing::subscriber::with_default(subscriber, || {
            play(
                GameState::with_size(4, 4).unwrap(),
                "9\nabc\n0\n0\n0\n0\n0\n1\n2\n1\n2\n1\n2\n1\n",
            )
        });

        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Red));
        let logged = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(logged.is_empty(), "unexpected log output: {logged}");
    }

    #[test]
    fn test_full_column_reprompts() {
        let (result, output) = play(
            GameState::with_size(4, 4).unwrap(),
            "0\n0\n0\n0\n0\n1\n2\n1\n2\n1\n2\n1\n",
        );

        assert!(output.contains("Column 0 is full."));
        // Red is asked again after the full column and goes on to stack column 1
        assert_eq!(result.unwrap(), GameOutcome::Winner(Player::Red));
    }

    #[test]
    fn test_draw_ends_game() {
        let columns = [
            0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 4, 3, 3, 3, 3, 3, 3, 4, 4, 4,
            4, 4, 5, 5, 5, 5, 5, 5, 6, 6, 6, 6, 6, 6,
        ];
        let input: String = columns.iter().map(|c| format!("{c}\n")).collect();
        let (result, output) = play(GameState::default(), &input);

        assert_eq!(result.unwrap(), GameOutcome::Draw);
        assert!(output.ends_with("Game over -- no winner\n"));
        assert!(!output.contains("wins!"));
    }

    #[test]
    fn test_input_closed_mid_game() {
        let (result, _) = play(GameState::default(), "3\n4\n");
        assert!(matches!(result, Err(SessionError::InputClosed)));
    }
}

use super::{Board, Player};
use crate::error::{BoardError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What happened on an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub player: Player,
    pub row: usize,
    pub column: usize,
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on `board` with Red to move
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::FIRST,
            outcome: None,
        }
    }

    /// Start a game on an empty board of the given size
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        Ok(Self::new(Board::new(width, height)?))
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current player's token into `column`.
    ///
    /// On a rejected move the state is unchanged and the same player stays
    /// on turn. The turn only passes when the game continues.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;

        if self.board.is_winning_move()? {
            self.outcome = Some(GameOutcome::Winner(player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        Ok(MoveResult {
            player,
            row,
            column,
            outcome: self.outcome,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Board::default())
    }
}

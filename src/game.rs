//! Game state: turn order, legality filtering, and terminal queries.
//!
//! `Game` owns one `Board` plus the color to move. Legal moves are the
//! pseudo-legal moves that do not leave the mover's own king in check,
//! established by simulating each candidate on an independent copy of
//! the board. The game-over flag is an annotation for the owning service
//! layer; the engine computes checkmate and stalemate as queries but
//! never seals a game itself.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Game, Move, Position};
//!
//! let mut game = Game::new();
//! let start = Position::new(2, 5).unwrap();
//! let end = Position::new(4, 5).unwrap();
//! game.make_move(Move::new(start, end)).unwrap();
//! assert_eq!(game.turn(), Color::Black);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Color, Move, MoveList, Position};

/// Error type for rejected moves.
///
/// All variants are terminal and recoverable by the caller: the game
/// state is left untouched, and a rejected move stays rejected until the
/// board or the move changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Start square is empty
    NoPieceAtSource { at: Position },
    /// Piece belongs to the color not currently on move
    WrongTurn { turn: Color },
    /// Destination holds a piece of the mover's own color
    FriendlyCapture { at: Position },
    /// Not among the legal moves for the start square (geometry or
    /// king-safety violation)
    IllegalMove { mv: Move },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource { at } => {
                write!(f, "No piece at {at}")
            }
            MoveError::WrongTurn { turn } => {
                write!(f, "It is {turn}'s turn to move")
            }
            MoveError::FriendlyCapture { at } => {
                write!(f, "Cannot capture own piece at {at}")
            }
            MoveError::IllegalMove { mv } => {
                write!(f, "Move {mv} is not legal")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// A chess game: one board, the color to move, and a game-over flag.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Game {
    board: Board,
    turn: Color,
    game_over: bool,
}

impl Game {
    /// Create a game at the standard starting position, White to move
    #[must_use]
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            turn: Color::White,
            game_over: false,
        }
    }

    /// The legal moves for the piece at `from`, or `None` for an empty
    /// square.
    ///
    /// A pseudo-legal move survives the filter iff applying it to a copy
    /// of the board does not leave the mover's own king in check. The
    /// authoritative board is never touched.
    #[must_use]
    pub fn valid_moves(&self, from: Position) -> Option<MoveList> {
        let piece = self.board.piece_at(from)?;
        let legal = piece
            .pseudo_moves(&self.board, from)
            .into_iter()
            .filter(|&mv| {
                let mut scratch = self.board.clone();
                scratch.apply_move(mv);
                !scratch.is_in_check(piece.color())
            })
            .collect();
        Some(legal)
    }

    /// Apply a move, mutating the board and flipping the turn.
    ///
    /// The legality checks run in order and fail distinctly; on any
    /// failure the game is unmodified.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let piece = self
            .board
            .piece_at(mv.start())
            .ok_or(MoveError::NoPieceAtSource { at: mv.start() })?;

        if piece.color() != self.turn {
            return Err(MoveError::WrongTurn { turn: self.turn });
        }

        if let Some(target) = self.board.piece_at(mv.end()) {
            if target.color() == piece.color() {
                return Err(MoveError::FriendlyCapture { at: mv.end() });
            }
        }

        match self.valid_moves(mv.start()) {
            Some(legal) if legal.contains(mv) => {}
            _ => return Err(MoveError::IllegalMove { mv }),
        }

        self.board.apply_move(mv);
        self.turn = self.turn.opponent();

        #[cfg(feature = "logging")]
        log::debug!("{} played {}", piece.color(), mv);

        Ok(())
    }

    /// Whether the king of `color` is attacked
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// In check with no legal move available
    #[must_use]
    pub fn is_in_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Not in check with no legal move available
    #[must_use]
    pub fn is_in_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    fn has_any_legal_move(&self, color: Color) -> bool {
        Position::all().any(|at| {
            self.board
                .piece_at(at)
                .is_some_and(|piece| piece.color() == color)
                && self
                    .valid_moves(at)
                    .is_some_and(|moves| !moves.is_empty())
        })
    }

    /// The current board, for snapshotting
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board, for snapshot restore
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Which color is to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    /// The game-over annotation; set by the owning caller, never by the
    /// engine
    #[inline]
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn set_game_over(&mut self, game_over: bool) {
        self.game_over = game_over;
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

// Two games are the same position when board and turn agree; the
// game-over annotation is not part of position identity.
impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.turn == other.turn
    }
}

impl Eq for Game {}

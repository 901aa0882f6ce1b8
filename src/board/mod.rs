//! Chess board representation and move generation.
//!
//! The board is an owned 8x8 grid of optional pieces indexed by 1-based
//! (row, column) positions. Move generation is pseudo-legal: it respects
//! piece geometry and occupancy but not king safety, which is the game
//! layer's responsibility.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Position};
//!
//! let board = Board::new();
//! let e2 = "e2".parse::<Position>().unwrap();
//! let pawn = board.piece_at(e2).unwrap();
//! let moves = pawn.pseudo_moves(&board, e2);
//! assert_eq!(moves.len(), 2);
//! ```

mod error;
mod movegen;
mod state;
mod types;


pub use error::PositionError;
pub use state::Board;
pub use types::{Color, Move, MoveList, MoveListIntoIter, Piece, PieceKind, Position};

pub(crate) use types::PROMOTION_KINDS;

use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Piece, PieceKind, Position};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

// Built once; Board::new clones it instead of re-placing 32 pieces.
static STARTING: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for at in Position::all() {
        board.set_piece(at, starting_piece(at));
    }
    board
});

fn starting_piece(at: Position) -> Option<Piece> {
    let color = match at.row() {
        1 | 2 => Color::White,
        7 | 8 => Color::Black,
        _ => return None,
    };
    let kind = match at.row() {
        2 | 7 => PieceKind::Pawn,
        _ => BACK_RANK[at.col() as usize - 1],
    };
    Some(Piece::new(color, kind))
}

/// An 8x8 chess board: exactly one optional piece per square.
///
/// This is a raw storage container. `set_piece` overwrites
/// unconditionally with no legality checks, and no invariant is kept on
/// piece counts, so partial positions (say, a lone king) are valid.
/// `Clone` produces a fully independent deep copy; the game layer relies
/// on that for legality simulation.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Create a board in the standard starting position
    #[must_use]
    pub fn new() -> Self {
        STARTING.clone()
    }

    /// Create a board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Get the piece occupying a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, at: Position) -> Option<Piece> {
        self.squares[at.row() as usize - 1][at.col() as usize - 1]
    }

    /// Place a piece on a square, or clear it with `None`.
    ///
    /// Raw storage primitive: overwrites whatever was there.
    #[inline]
    pub fn set_piece(&mut self, at: Position, piece: Option<Piece>) {
        self.squares[at.row() as usize - 1][at.col() as usize - 1] = piece;
    }

    #[inline]
    #[must_use]
    pub fn is_empty_square(&self, at: Position) -> bool {
        self.piece_at(at).is_none()
    }

    /// Move the occupant of the start square to the end square.
    ///
    /// A promotion move places a piece of the promotion kind in the
    /// mover's color instead. No legality checking; a vacant start square
    /// is a no-op.
    pub(crate) fn apply_move(&mut self, mv: Move) {
        if let Some(piece) = self.piece_at(mv.start()) {
            let placed = match mv.promotion() {
                Some(kind) => Piece::new(piece.color(), kind),
                None => piece,
            };
            self.set_piece(mv.end(), Some(placed));
            self.set_piece(mv.start(), None);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=8).rev() {
            write!(f, "{row}")?;
            for col in 1..=8 {
                let ch = Position::new(row, col)
                    .and_then(|at| self.piece_at(at))
                    .map_or('.', Piece::to_char);
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col).unwrap()
    }

    fn census(board: &Board, color: Color, kind: PieceKind) -> usize {
        Position::all()
            .filter(|&at| board.piece_at(at) == Some(Piece::new(color, kind)))
            .count()
    }

    #[test]
    fn test_starting_position_census() {
        let board = Board::new();
        for color in Color::BOTH {
            assert_eq!(census(&board, color, PieceKind::Pawn), 8);
            assert_eq!(census(&board, color, PieceKind::Rook), 2);
            assert_eq!(census(&board, color, PieceKind::Knight), 2);
            assert_eq!(census(&board, color, PieceKind::Bishop), 2);
            assert_eq!(census(&board, color, PieceKind::Queen), 1);
            assert_eq!(census(&board, color, PieceKind::King), 1);
        }
    }

    #[test]
    fn test_starting_home_squares() {
        let board = Board::new();
        assert_eq!(
            board.piece_at(pos(1, 5)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.piece_at(pos(8, 4)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(
            board.piece_at(pos(1, 1)),
            Some(Piece::new(Color::White, PieceKind::Rook))
        );
        assert_eq!(
            board.piece_at(pos(8, 7)),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
        for col in 1..=8 {
            assert_eq!(
                board.piece_at(pos(2, col)),
                Some(Piece::new(Color::White, PieceKind::Pawn))
            );
            assert_eq!(
                board.piece_at(pos(7, col)),
                Some(Piece::new(Color::Black, PieceKind::Pawn))
            );
        }
        for row in 3..=6 {
            for col in 1..=8 {
                assert!(board.is_empty_square(pos(row, col)));
            }
        }
    }

    #[test]
    fn test_set_piece_overwrites() {
        let mut board = Board::empty();
        let at = pos(4, 4);
        board.set_piece(at, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set_piece(at, Some(Piece::new(Color::Black, PieceKind::Queen)));
        assert_eq!(
            board.piece_at(at),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        board.set_piece(at, None);
        assert!(board.is_empty_square(at));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Board::new();
        let mut copy = original.clone();
        copy.apply_move(Move::new(pos(2, 5), pos(4, 5)));

        assert!(copy.is_empty_square(pos(2, 5)));
        assert_eq!(
            original.piece_at(pos(2, 5)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_ne!(original, copy);
    }

    #[test]
    fn test_apply_move_promotes() {
        let mut board = Board::empty();
        board.set_piece(pos(7, 5), Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.apply_move(Move::promoting(pos(7, 5), pos(8, 5), PieceKind::Queen));

        assert!(board.is_empty_square(pos(7, 5)));
        assert_eq!(
            board.piece_at(pos(8, 5)),
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }

    #[test]
    fn test_apply_move_empty_start_is_noop() {
        let mut board = Board::empty();
        board.apply_move(Move::new(pos(4, 4), pos(5, 5)));
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn test_display_grid() {
        let rendered = Board::new().to_string();
        assert!(rendered.starts_with("8 r n b q k b n r\n"));
        assert!(rendered.contains("\n1 R N B Q K B N R\n"));
        assert!(rendered.ends_with("  a b c d e f g h"));
        assert!(rendered.contains("5 . . . . . . . .\n"));
    }
}

//! Pseudo-legal move generation.
//!
//! Produces every destination a piece's geometry and board occupancy
//! allow, ignoring whether the mover's own king is left in check. The
//! game layer filters for king safety.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Board, Color, Move, MoveList, Piece, PieceKind, Position};

impl Piece {
    /// Every pseudo-legal move for this piece standing at `from`.
    ///
    /// Purely a function of the piece's kind, color, and the board's
    /// occupancy; an empty list is a valid result. King safety is not
    /// consulted here.
    #[must_use]
    pub fn pseudo_moves(self, board: &Board, from: Position) -> MoveList {
        match self.kind() {
            PieceKind::King => kings::king_moves(self, board, from),
            PieceKind::Queen => sliders::ray_moves(self, board, from, &sliders::QUEEN_DIRECTIONS),
            PieceKind::Rook => sliders::ray_moves(self, board, from, &sliders::ROOK_DIRECTIONS),
            PieceKind::Bishop => {
                sliders::ray_moves(self, board, from, &sliders::BISHOP_DIRECTIONS)
            }
            PieceKind::Knight => knights::knight_moves(self, board, from),
            PieceKind::Pawn => pawns::pawn_moves(self, board, from),
        }
    }
}

/// Fixed-offset movement shared by kings and knights: each offset that
/// lands on the board and not on a friendly piece yields a move.
pub(super) fn leap_moves(
    piece: Piece,
    board: &Board,
    from: Position,
    offsets: &[(i8, i8)],
) -> MoveList {
    let mut moves = MoveList::new();
    for &(d_row, d_col) in offsets {
        if let Some(to) = from.offset(d_row, d_col) {
            let friendly = board
                .piece_at(to)
                .is_some_and(|occupant| occupant.color() == piece.color());
            if !friendly {
                moves.push(Move::new(from, to));
            }
        }
    }
    moves
}

impl Board {
    /// Locate the king of a color, scanning the board
    #[must_use]
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceKind::King);
        Position::all().find(|&at| self.piece_at(at) == Some(king))
    }

    /// Whether some enemy piece's pseudo-legal moves reach the king of
    /// `color`. A board without that king reports not-in-check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some(king) = self.king_position(color) else {
            return false;
        };
        Position::all().any(|at| match self.piece_at(at) {
            Some(piece) if piece.color() != color => piece
                .pseudo_moves(self, at)
                .iter()
                .any(|mv| mv.end() == king),
            _ => false,
        })
    }
}

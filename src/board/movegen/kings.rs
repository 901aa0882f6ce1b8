use super::super::{Board, MoveList, Piece, Position};
use super::leap_moves;

// The 3x3 neighborhood minus the center. Castling is not modeled.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) fn king_moves(piece: Piece, board: &Board, from: Position) -> MoveList {
    leap_moves(piece, board, from, &KING_OFFSETS)
}

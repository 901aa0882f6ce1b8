use super::super::{Board, MoveList, Piece, Position};
use super::leap_moves;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

pub(super) fn knight_moves(piece: Piece, board: &Board, from: Position) -> MoveList {
    leap_moves(piece, board, from, &KNIGHT_OFFSETS)
}

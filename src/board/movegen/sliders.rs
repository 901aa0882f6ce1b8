use super::super::{Board, Move, MoveList, Piece, Position};

pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk each direction one step at a time: empty squares are emitted and
/// the walk continues, an enemy square is emitted and terminates the ray,
/// a friendly square or the board edge terminates without emitting.
pub(super) fn ray_moves(
    piece: Piece,
    board: &Board,
    from: Position,
    directions: &[(i8, i8)],
) -> MoveList {
    let mut moves = MoveList::new();
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match board.piece_at(to) {
                None => {
                    moves.push(Move::new(from, to));
                    current = to;
                }
                Some(occupant) if occupant.color() != piece.color() => {
                    moves.push(Move::new(from, to));
                    break;
                }
                Some(_) => break,
            }
        }
    }
    moves
}

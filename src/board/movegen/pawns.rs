use super::super::{Board, Color, Move, MoveList, Piece, Position, PROMOTION_KINDS};

// No en passant: a capture requires the target square itself to be
// enemy-occupied.
pub(super) fn pawn_moves(piece: Piece, board: &Board, from: Position) -> MoveList {
    let mut moves = MoveList::new();
    let color = piece.color();
    let dir = color.pawn_direction();

    for d_col in [-1, 1] {
        if let Some(to) = from.offset(dir, d_col) {
            let enemy = board
                .piece_at(to)
                .is_some_and(|occupant| occupant.color() != color);
            if enemy {
                push_pawn_move(&mut moves, color, from, to);
            }
        }
    }

    if let Some(to) = from.offset(dir, 0) {
        if board.is_empty_square(to) {
            push_pawn_move(&mut moves, color, from, to);
            if from.row() == color.pawn_start_row() {
                if let Some(double_to) = to.offset(dir, 0) {
                    if board.is_empty_square(double_to) {
                        moves.push(Move::new(from, double_to));
                    }
                }
            }
        }
    }

    moves
}

/// Emit a forward step or capture, fanning out into one move per
/// promotion candidate when the destination is the terminal rank. The
/// plain non-promoting version is never emitted alongside.
fn push_pawn_move(moves: &mut MoveList, color: Color, from: Position, to: Position) {
    if to.row() == color.promotion_row() {
        for kind in PROMOTION_KINDS {
            moves.push(Move::promoting(from, to, kind));
        }
    } else {
        moves.push(Move::new(from, to));
    }
}

use crate::board::{Board, Color, Piece, PieceKind};

const PAWN_RANK_WHITE: usize = 6;
const PAWN_RANK_BLACK: usize = 1;

/// Geometric legality of a move for one piece, with the live grid as context
/// for path clearance. Turn ownership and destination ownership are not
/// checked here; the board applies those on top of this verdict.
pub fn is_legal_move(piece: Piece, from: (usize, usize), to: (usize, usize), board: &Board) -> bool {
    let d_row = to.0 as i8 - from.0 as i8;
    let d_col = to.1 as i8 - from.1 as i8;
    match piece.kind {
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Queen =>
            (d_row.abs() == d_col.abs() || d_row == 0 || d_col == 0) && path_clear(board, from, to),
        PieceKind::Rook => (d_row == 0 || d_col == 0) && path_clear(board, from, to),
        PieceKind::Bishop => d_row.abs() == d_col.abs() && path_clear(board, from, to),
        PieceKind::Knight =>
            (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2),
        PieceKind::Pawn => pawn_move(piece.color, from, to, board),
    }
}

// Walks one square at a time from start toward end and requires every square
// strictly between them to be empty. Only called for straight or diagonal
// lines, where the signum steps are guaranteed to reach the end square.
fn path_clear(board: &Board, from: (usize, usize), to: (usize, usize)) -> bool {
    let step_row = (to.0 as i8 - from.0 as i8).signum();
    let step_col = (to.1 as i8 - from.1 as i8).signum();
    let mut row = from.0 as i8 + step_row;
    let mut col = from.1 as i8 + step_col;
    while (row, col) != (to.0 as i8, to.1 as i8) {
        if board.squares[row as usize][col as usize].is_some() {
            return false;
        }
        row += step_row;
        col += step_col;
    }
    true
}

fn pawn_move(color: Color, from: (usize, usize), to: (usize, usize), board: &Board) -> bool {
    let (direction, home_rank) = match color {
        Color::White => (-1, PAWN_RANK_WHITE),
        Color::Black => (1, PAWN_RANK_BLACK),
    };
    let d_row = to.0 as i8 - from.0 as i8;
    let d_col = to.1 as i8 - from.1 as i8;
    if d_col == 0 {
        if d_row == direction {
            return board.squares[to.0][to.1].is_none();
        }
        if d_row == 2 * direction && from.0 == home_rank {
            let between = (from.0 as i8 + direction) as usize;
            return board.squares[between][from.1].is_none() && board.squares[to.0][to.1].is_none();
        }
        return false;
    }
    if d_col.abs() == 1 && d_row == direction {
        return board.squares[to.0][to.1].is_some_and(|p| p.color != color);
    }
    false
}

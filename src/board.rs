use serde::Serializer;
use crate::board::Color::White;
use crate::rules;

pub const WIDTH: usize = 8;
pub const HEIGHT: usize = 8;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Color {
    White, Black
}

impl Color {
    pub fn opposite(&self) -> Color {
        if self == &Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind
}

impl Piece {
    fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
}

pub fn symbol(piece: &Piece) -> char {
    match piece.kind {
        PieceKind::King => if piece.color == White {'K'} else {'k'},
        PieceKind::Queen => if piece.color == White {'Q'} else {'q'},
        PieceKind::Rook => if piece.color == White {'R'} else {'r'},
        PieceKind::Bishop => if piece.color == White {'B'} else {'b'},
        PieceKind::Knight => if piece.color == White {'N'} else {'n'},
        PieceKind::Pawn => if piece.color == White {'P'} else {'p'},
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub squares: [[Option<Piece>; WIDTH]; HEIGHT],
}

impl Board {
    /// Validates a move for `acting` and applies it. Checks run in a fixed
    /// order: bounds, source ownership, piece geometry, destination ownership.
    /// On rejection the grid is left untouched; on success the destination is
    /// overwritten (capturing whatever stood there) and the source is emptied.
    pub fn try_move(&mut self, from: (usize, usize), to: (usize, usize), acting: Color) -> bool {
        if from.0 >= HEIGHT || from.1 >= WIDTH || to.0 >= HEIGHT || to.1 >= WIDTH {
            return false;
        }
        let piece = match self.squares[from.0][from.1] {
            None => return false,
            Some(p) => p,
        };
        if piece.color != acting {
            return false;
        }
        if !rules::is_legal_move(piece, from, to, self) {
            return false;
        }
        // Also rejects from == to, since the source piece occupies it.
        if self.squares[to.0][to.1].is_some_and(|p| p.color == acting) {
            return false;
        }
        self.squares[to.0][to.1] = self.squares[from.0][from.1].take();
        true
    }
}

/// Renders the board plus the side to move as the flat save format: a 'W'/'B'
/// turn line, then one line per rank from row 0 down, '.' for empty squares.
pub fn snapshot(board: &Board, to_move: Color) -> String {
    let mut result = String::new();
    result.push(if to_move == White {'W'} else {'B'});
    result.push('\n');
    for row in 0 .. HEIGHT {
        for col in 0 .. WIDTH {
            let icon = match &board.squares[row][col] {
                None => '.',
                Some(p) => symbol(p),
            };
            result.push(icon);
        }
        result.push('\n');
    }
    result
}

fn new_pieces(color: Color) -> [Option<Piece>; WIDTH] {
    [
        Some(Piece::new(color, PieceKind::Rook)),
        Some(Piece::new(color, PieceKind::Knight)),
        Some(Piece::new(color, PieceKind::Bishop)),
        Some(Piece::new(color, PieceKind::Queen)),
        Some(Piece::new(color, PieceKind::King)),
        Some(Piece::new(color, PieceKind::Bishop)),
        Some(Piece::new(color, PieceKind::Knight)),
        Some(Piece::new(color, PieceKind::Rook))
    ]
}

fn new_pawns(color: Color) -> [Option<Piece>; WIDTH] {
    [Some(Piece::new(color, PieceKind::Pawn)); WIDTH]
}

fn new_empty() -> [Option<Piece>; WIDTH] {
    [None; WIDTH]
}

// Row 0 is Black's back rank, row 7 White's, so row index grows toward White.
pub fn new_board() -> Board {
    let squares = [
        new_pieces(Color::Black),
        new_pawns(Color::Black),
        new_empty(),
        new_empty(),
        new_empty(),
        new_empty(),
        new_pawns(Color::White),
        new_pieces(Color::White)
    ];
    Board { squares }
}

#[derive(Debug, Clone)]
pub struct Game {
    pub board: Board,
    pub turn: Color,
}

impl Game {
    pub fn new() -> Game {
        Game { board: new_board(), turn: White }
    }

    /// Attempts a move for the side to play; flips the turn only on success.
    pub fn play(&mut self, from: (usize, usize), to: (usize, usize)) -> bool {
        let moved = self.board.try_move(from, to, self.turn);
        if moved {
            self.turn = self.turn.opposite();
        }
        moved
    }

    pub fn snapshot(&self) -> String {
        snapshot(&self.board, self.turn)
    }
}

impl serde::Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: Serializer {
        serializer.serialize_str(self.snapshot().as_str())
    }
}

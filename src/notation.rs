use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("a move is 4 characters, got {0}")]
    BadLength(usize),
    #[error("invalid file: {0}")]
    BadFile(char),
    #[error("invalid rank: {0}")]
    BadRank(char),
}

/// Parses a move like "e2e4" into board coordinates: rank '8' is row 0 and
/// file 'a' is column 0, so "e2" becomes (6, 4).
pub fn parse_move(input: &str) -> Result<((usize, usize), (usize, usize)), ParseMoveError> {
    let bytes = input.as_bytes();
    if bytes.len() != 4 {
        return Err(ParseMoveError::BadLength(bytes.len()));
    }
    let from = parse_square(bytes[0], bytes[1])?;
    let to = parse_square(bytes[2], bytes[3])?;
    Ok((from, to))
}

fn parse_square(file: u8, rank: u8) -> Result<(usize, usize), ParseMoveError> {
    if !(b'a'..=b'h').contains(&file) {
        return Err(ParseMoveError::BadFile(file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ParseMoveError::BadRank(rank as char));
    }
    Ok((8 - (rank - b'0') as usize, (file - b'a') as usize))
}

#[cfg(test)]
mod test {
    use crate::notation::{parse_move, ParseMoveError};

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("e2e4"), Ok(((6, 4), (4, 4))));
        assert_eq!(parse_move("a1h8"), Ok(((7, 0), (0, 7))));
        assert_eq!(parse_move("h8a1"), Ok(((0, 7), (7, 0))));
    }

    #[test]
    fn test_reject_wrong_length() {
        assert_eq!(parse_move(""), Err(ParseMoveError::BadLength(0)));
        assert_eq!(parse_move("e2e"), Err(ParseMoveError::BadLength(3)));
        assert_eq!(parse_move("e2e44"), Err(ParseMoveError::BadLength(5)));
    }

    #[test]
    fn test_reject_bad_squares() {
        assert_eq!(parse_move("i2e4"), Err(ParseMoveError::BadFile('i')));
        assert_eq!(parse_move("e0e4"), Err(ParseMoveError::BadRank('0')));
        assert_eq!(parse_move("e2e9"), Err(ParseMoveError::BadRank('9')));
        assert_eq!(parse_move("22e4"), Err(ParseMoveError::BadFile('2')));
    }
}

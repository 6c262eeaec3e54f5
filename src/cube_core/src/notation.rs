use std::{
    fmt::{self, Display, Write},
    num::NonZeroUsize,
    str::FromStr,
};

use itertools::Itertools;

use crate::{CubeError, move_table::MoveTable, permutation::Permutation};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Turn {
    Quarter,
    Half,
    Inverse,
}

impl Turn {
    #[must_use]
    pub fn inverse(self) -> Turn {
        match self {
            Turn::Quarter => Turn::Inverse,
            Turn::Half => Turn::Half,
            Turn::Inverse => Turn::Quarter,
        }
    }

    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            Turn::Quarter => "",
            Turn::Half => "2",
            Turn::Inverse => "'",
        }
    }
}

/// One move token: an optional layer count, a face or rotation letter, an
/// optional `w` for block moves, and a turn suffix.
///
/// Parsing checks the shape of the token only; whether the move exists for a
/// given cube size is up to the `MoveTable`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveToken {
    pub layers: Option<NonZeroUsize>,
    pub letter: char,
    pub wide: bool,
    pub turn: Turn,
}

impl MoveToken {
    #[must_use]
    pub fn inverse(&self) -> MoveToken {
        MoveToken {
            turn: self.turn.inverse(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn is_rotation(&self) -> bool {
        matches!(self.letter, 'X' | 'Y' | 'Z')
    }
}

impl FromStr for MoveToken {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CubeError::UnknownMove(s.to_owned());

        let (rest, turn) = if let Some(rest) = s.strip_suffix('\'') {
            (rest, Turn::Inverse)
        } else if let Some(rest) = s.strip_suffix('2') {
            (rest, Turn::Half)
        } else {
            (s, Turn::Quarter)
        };

        let (rest, wide) = match rest.strip_suffix('w') {
            Some(rest) => (rest, true),
            None => (rest, false),
        };

        let mut chars = rest.chars();
        let letter = chars.next_back().ok_or_else(malformed)?;
        let prefix = chars.as_str();

        if !matches!(letter, 'U' | 'D' | 'F' | 'B' | 'R' | 'L' | 'X' | 'Y' | 'Z') {
            return Err(malformed());
        }

        let layers = if prefix.is_empty() {
            None
        } else {
            if prefix.starts_with('0') || !prefix.chars().all(|c| c.is_ascii_digit()) {
                return Err(malformed());
            }

            Some(prefix.parse::<NonZeroUsize>().map_err(|_| malformed())?)
        };

        let token = MoveToken {
            layers,
            letter,
            wide,
            turn,
        };

        if token.is_rotation() && (token.wide || token.layers.is_some()) {
            return Err(malformed());
        }

        Ok(token)
    }
}

impl Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(layers) = self.layers {
            write!(f, "{layers}")?;
        }

        f.write_char(self.letter)?;

        if self.wide {
            f.write_char('w')?;
        }

        f.write_str(self.turn.suffix())
    }
}

/// Split a move string into its tokens.
///
/// # Errors
///
/// Fails with `EmptyMoveString` if there are no tokens.
pub fn tokens(moves: &str) -> Result<Vec<&str>, CubeError> {
    let tokens = moves.split_whitespace().collect_vec();

    if tokens.is_empty() {
        return Err(CubeError::EmptyMoveString);
    }

    Ok(tokens)
}

/// The net permutation of a move string, applying the tokens left to right.
///
/// # Errors
///
/// Fails with `EmptyMoveString` for a blank string and `UnknownMove` for the
/// first token that isn't in the table.
pub fn compose_moves(table: &MoveTable, moves: &str) -> Result<Permutation, CubeError> {
    let mut permutation = table.identity();

    for token in tokens(moves)? {
        permutation.compose(table.permutation(token)?);
    }

    Ok(permutation)
}

/// The move string that undoes `moves`: the tokens in reverse order, each
/// turned the other way.
///
/// # Errors
///
/// Fails with `EmptyMoveString` for a blank string and `UnknownMove` for a
/// malformed token.
pub fn invert_moves(moves: &str) -> Result<String, CubeError> {
    let inverted = tokens(moves)?
        .into_iter()
        .map(|token| token.parse::<MoveToken>().map(|token| token.inverse()))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(inverted.into_iter().rev().join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tokens() {
        assert_eq!(
            "3Rw'".parse::<MoveToken>().unwrap(),
            MoveToken {
                layers: NonZeroUsize::new(3),
                letter: 'R',
                wide: true,
                turn: Turn::Inverse,
            }
        );
        assert_eq!(
            "U2".parse::<MoveToken>().unwrap(),
            MoveToken {
                layers: None,
                letter: 'U',
                wide: false,
                turn: Turn::Half,
            }
        );
        assert_eq!("12F".parse::<MoveToken>().unwrap().layers, NonZeroUsize::new(12));

        for token in ["Uw2", "2L'", "X", "Y'", "Z2", "10Bw"] {
            assert_eq!(token.parse::<MoveToken>().unwrap().to_string(), token);
        }
    }

    #[test]
    fn reject_malformed() {
        for token in ["", "'", "2", "u", "Q", "0R", "02R", "R3", "2X", "Xw", "R''", "w", "a2R"] {
            assert_eq!(
                token.parse::<MoveToken>(),
                Err(CubeError::UnknownMove(token.to_owned())),
                "{token}"
            );
        }
    }

    #[test]
    fn empty_move_string() {
        let table = MoveTable::new(3).unwrap();

        assert_eq!(compose_moves(&table, ""), Err(CubeError::EmptyMoveString));
        assert_eq!(compose_moves(&table, "  \t "), Err(CubeError::EmptyMoveString));
        assert_eq!(invert_moves(" "), Err(CubeError::EmptyMoveString));
    }

    #[test]
    fn unknown_move() {
        let table = MoveTable::new(3).unwrap();

        assert_eq!(
            compose_moves(&table, "R U 4R F"),
            Err(CubeError::UnknownMove("4R".to_owned()))
        );
        assert_eq!(
            compose_moves(&table, "r"),
            Err(CubeError::UnknownMove("r".to_owned()))
        );
    }

    #[test]
    fn composes_left_to_right() {
        let table = MoveTable::new(3).unwrap();
        let r = table.permutation("R").unwrap();
        let u = table.permutation("U").unwrap();

        assert_eq!(compose_moves(&table, "R U").unwrap(), r.then(u));
        assert_ne!(compose_moves(&table, "R U").unwrap(), u.then(r));
        assert_eq!(compose_moves(&table, "R").unwrap(), *r);
    }

    #[test]
    fn invert() {
        assert_eq!(invert_moves("R U2 3Fw' X").unwrap(), "X' 3Fw U2 R'");
        assert_eq!(invert_moves("R 2").unwrap_err(), CubeError::UnknownMove("2".to_owned()));
    }
}

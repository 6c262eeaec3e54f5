#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Permutation model of the N×N×N cube.
//!
//! Every facelet of the cube gets a fixed index, every named move becomes a
//! permutation of those indices, and a cube state is an array of colors that
//! moves rearrange.

use thiserror::Error;

pub mod cube;
pub mod facelet;
pub mod move_table;
pub mod notation;
pub mod permutation;
pub mod quarter_turn;

pub use cube::{Cube, State};
pub use facelet::{Color, Face, FaceletIndexer, UnfoldedNet};
pub use move_table::{MoveKind, MoveTable};
pub use notation::{MoveToken, Turn};
pub use permutation::Permutation;
pub use quarter_turn::Axis;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("A cube must have at least two layers per side, got {0}")]
    InvalidSize(usize),
    #[error("The move `{0}` doesn't exist for this cube")]
    UnknownMove(String),
    #[error("The move string doesn't contain any moves")]
    EmptyMoveString,
    #[error("`{0}` is not a color letter, expected one of W Y G B R O")]
    InvalidColor(char),
    #[error("Expected {expected} facelet colors but got {actual}")]
    FaceletCountMismatch { expected: usize, actual: usize },
}

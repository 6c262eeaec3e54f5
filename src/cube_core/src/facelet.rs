use std::{
    fmt::{self, Display, Write},
    ops::Range,
};

use itertools::Itertools;

use crate::CubeError;

/// The six faces in canonical order. The discriminant is the face number used
/// in facelet indices.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Right,
    Left,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Up, Down, Front, Back, Right, Left];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
        }
    }

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Right => 'R',
            Face::Left => 'L',
        }
    }

    /// The color this face shows on a solved cube.
    #[must_use]
    pub fn home_color(self) -> Color {
        Color::ALL[self as usize]
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())
    }
}

/// Western color scheme; `Color::ALL[i]` is the home color of `Face::ALL[i]`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Red,
        Color::Orange,
    ];

    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        }
    }

    /// # Errors
    ///
    /// Fails with `InvalidColor` if `letter` isn't one of `W Y G B R O`.
    pub fn from_letter(letter: char) -> Result<Color, CubeError> {
        Color::ALL
            .into_iter()
            .find(|color| color.letter() == letter)
            .ok_or(CubeError::InvalidColor(letter))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.letter())
    }
}

/// Addressing for the `6·N²` facelets of an N×N×N cube.
///
/// Facelet `(face, row, col)` lives at `face·N² + row·N + col`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceletIndexer {
    size: usize,
}

impl FaceletIndexer {
    /// # Errors
    ///
    /// A cube with fewer than two layers has nothing to turn, so `size < 2`
    /// fails with `InvalidSize`.
    pub fn new(size: usize) -> Result<FaceletIndexer, CubeError> {
        if size < 2 {
            return Err(CubeError::InvalidSize(size));
        }

        Ok(FaceletIndexer { size })
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn face_area(&self) -> usize {
        self.size * self.size
    }

    #[must_use]
    pub fn facelet_count(&self) -> usize {
        6 * self.face_area()
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the cube size.
    #[must_use]
    pub fn index(&self, face: Face, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) is outside a face of size {}",
            self.size
        );

        face as usize * self.face_area() + row * self.size + col
    }

    /// Inverse of `index`.
    #[must_use]
    pub fn coords(&self, index: usize) -> (Face, usize, usize) {
        let within = index % self.face_area();
        (self.face_of(index), within / self.size, within % self.size)
    }

    #[must_use]
    pub fn face_of(&self, index: usize) -> Face {
        Face::ALL[index / self.face_area()]
    }

    #[must_use]
    pub fn face_letter(&self, index: usize) -> char {
        self.face_of(index).letter()
    }

    /// Every facelet index of `face` in row major order.
    #[must_use]
    pub fn face_indices(&self, face: Face) -> Range<usize> {
        let start = face as usize * self.face_area();
        start..start + self.face_area()
    }
}

/// The cross shaped net of the cube: U above F, then L F R B across the
/// middle band, D below F. The grid is `3N` rows by `4N` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnfoldedNet {
    size: usize,
    cells: Vec<Option<usize>>,
    traversal: Vec<usize>,
}

impl UnfoldedNet {
    #[must_use]
    pub fn new(indexer: &FaceletIndexer) -> UnfoldedNet {
        let n = indexer.size();
        let cols = 4 * n;
        let mut cells = vec![None; 3 * n * cols];

        // (face, grid row offset, grid column offset)
        let placements = [
            (Face::Up, 0, n),
            (Face::Left, n, 0),
            (Face::Front, n, n),
            (Face::Right, n, 2 * n),
            (Face::Back, n, 3 * n),
            (Face::Down, 2 * n, n),
        ];

        for (face, row_offset, col_offset) in placements {
            for row in 0..n {
                for col in 0..n {
                    cells[(row + row_offset) * cols + col + col_offset] =
                        Some(indexer.index(face, row, col));
                }
            }
        }

        let traversal = cells.iter().flatten().copied().collect_vec();

        UnfoldedNet {
            size: n,
            cells,
            traversal,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        3 * self.size
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        4 * self.size
    }

    /// The facelet shown at a grid cell, if the cell is part of the net.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }

        self.cells[row * self.cols() + col]
    }

    /// Facelet indices of the occupied cells in row major order.
    #[must_use]
    pub fn traversal(&self) -> &[usize] {
        &self.traversal
    }

    /// Lay out one label per facelet on the net, right aligned to `width`.
    /// Cells outside the net are left blank.
    pub fn render(&self, width: usize, mut label: impl FnMut(usize) -> String) -> String {
        let mut out = String::new();

        for row in self.cells.chunks(self.cols()) {
            let line = row
                .iter()
                .map(|cell| match cell {
                    Some(index) => format!(" {:>width$} ", label(*index)),
                    None => format!(" {:width$} ", ""),
                })
                .join("");

            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small() {
        assert_eq!(FaceletIndexer::new(1), Err(CubeError::InvalidSize(1)));
        assert_eq!(FaceletIndexer::new(0), Err(CubeError::InvalidSize(0)));
    }

    #[test]
    fn index_coords_bijection() {
        for n in 2..=6 {
            let indexer = FaceletIndexer::new(n).unwrap();
            let mut seen = vec![false; indexer.facelet_count()];

            for face in Face::ALL {
                for row in 0..n {
                    for col in 0..n {
                        let index = indexer.index(face, row, col);
                        assert!(!seen[index]);
                        seen[index] = true;
                        assert_eq!(indexer.coords(index), (face, row, col));
                        assert_eq!(indexer.face_of(index), face);
                    }
                }
            }

            assert!(seen.into_iter().all(|v| v));
        }
    }

    #[test]
    fn opposites() {
        for face in Face::ALL {
            assert_ne!(face, face.opposite());
            assert_eq!(face, face.opposite().opposite());
        }
    }

    #[test]
    fn color_letters() {
        for color in Color::ALL {
            assert_eq!(Color::from_letter(color.letter()), Ok(color));
        }
        assert_eq!(Color::from_letter('X'), Err(CubeError::InvalidColor('X')));
    }

    #[test]
    fn net_layout_2x2() {
        let net = UnfoldedNet::new(&FaceletIndexer::new(2).unwrap());

        assert_eq!(net.rows(), 6);
        assert_eq!(net.cols(), 8);
        assert_eq!(net.cell(0, 0), None);
        assert_eq!(net.cell(0, 2), Some(0));
        assert_eq!(net.cell(2, 0), Some(20));
        assert_eq!(net.cell(3, 7), Some(15));
        assert_eq!(net.cell(5, 3), Some(7));
        assert_eq!(net.cell(6, 0), None);

        assert_eq!(
            net.traversal(),
            &[
                0, 1, 2, 3, 20, 21, 8, 9, 16, 17, 12, 13, 22, 23, 10, 11, 18, 19, 14, 15, 4, 5, 6,
                7
            ]
        );
    }

    #[test]
    fn net_render() {
        let indexer = FaceletIndexer::new(2).unwrap();
        let net = UnfoldedNet::new(&indexer);
        let rendered = net.render(1, |i| indexer.face_letter(i).to_string());

        let expected = "       U  U
       U  U
 L  L  F  F  R  R  B  B
 L  L  F  F  R  R  B  B
       D  D
       D  D
";
        assert_eq!(rendered, expected);
    }
}

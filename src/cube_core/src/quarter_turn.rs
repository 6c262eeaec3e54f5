//! Single layer quarter turns.
//!
//! The generator for an axis turns the layer at depth `d`, counted from the
//! axis's near face, one quarter in the near face's clockwise sense. Turning
//! the far layer this way is the inverse of the far face's own quarter turn.

use crate::{
    facelet::{Face, FaceletIndexer},
    permutation::Permutation,
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    UpDown,
    FrontBack,
    RightLeft,
}

impl Axis {
    pub const ALL: [Self; 3] = [Axis::UpDown, Axis::FrontBack, Axis::RightLeft];

    /// The face at depth zero.
    #[must_use]
    pub fn near_face(self) -> Face {
        match self {
            Axis::UpDown => Face::Up,
            Axis::FrontBack => Face::Front,
            Axis::RightLeft => Face::Right,
        }
    }

    /// The face at depth `N - 1`.
    #[must_use]
    pub fn far_face(self) -> Face {
        self.near_face().opposite()
    }

    /// The letter of the whole cube rotation about this axis.
    #[must_use]
    pub fn rotation_letter(self) -> char {
        match self {
            Axis::UpDown => 'Y',
            Axis::FrontBack => 'Z',
            Axis::RightLeft => 'X',
        }
    }
}

/// Writes source facelets into a `6 × N × N` grid that starts as the identity.
struct FaceGrid<'a> {
    indexer: &'a FaceletIndexer,
    mapping: Vec<usize>,
}

impl<'a> FaceGrid<'a> {
    fn new(indexer: &'a FaceletIndexer) -> FaceGrid<'a> {
        FaceGrid {
            indexer,
            mapping: (0..indexer.facelet_count()).collect(),
        }
    }

    /// Destination `(face, row, col)` takes the contents of `source`.
    fn set(&mut self, (face, row, col): (Face, usize, usize), source: (Face, usize, usize)) {
        let destination = self.indexer.index(face, row, col);
        self.mapping[destination] = self.indexer.index(source.0, source.1, source.2);
    }

    /// Rotate a whole face a quarter turn clockwise as seen looking at it.
    fn rotate_clockwise(&mut self, face: Face) {
        let n = self.indexer.size();

        for row in 0..n {
            for col in 0..n {
                self.set((face, row, col), (face, n - 1 - col, row));
            }
        }
    }

    fn rotate_counterclockwise(&mut self, face: Face) {
        let n = self.indexer.size();

        for row in 0..n {
            for col in 0..n {
                self.set((face, row, col), (face, col, n - 1 - row));
            }
        }
    }

    fn into_permutation(self) -> Permutation {
        Permutation::from_mapping_unchecked(self.mapping)
    }
}

/// The permutation for one quarter turn of the layer at `depth` on `axis`.
///
/// The near cap face rotates along with the layer at depth `0` and the far cap
/// face at depth `N - 1`; middle layers leave every cap alone.
///
/// # Panics
///
/// Panics if `depth` is not below the cube size.
#[must_use]
pub fn quarter_turn(indexer: &FaceletIndexer, axis: Axis, depth: usize) -> Permutation {
    let n = indexer.size();
    assert!(depth < n, "depth {depth} is outside a cube of size {n}");

    let mut grid = FaceGrid::new(indexer);

    if depth == 0 {
        grid.rotate_clockwise(axis.near_face());
    } else if depth == n - 1 {
        grid.rotate_counterclockwise(axis.far_face());
    }

    let d = depth;
    let rd = n - 1 - depth;

    // Each transfer lists (destination, source). Transfers that cross between
    // a row addressed face and a column addressed face run the source line
    // backwards.
    for i in 0..n {
        match axis {
            Axis::UpDown => {
                grid.set((Face::Front, d, i), (Face::Right, d, i));
                grid.set((Face::Right, d, i), (Face::Back, d, i));
                grid.set((Face::Back, d, i), (Face::Left, d, i));
                grid.set((Face::Left, d, i), (Face::Front, d, i));
            }
            Axis::FrontBack => {
                grid.set((Face::Up, rd, i), (Face::Left, n - 1 - i, rd));
                grid.set((Face::Left, i, rd), (Face::Down, d, i));
                grid.set((Face::Down, d, i), (Face::Right, n - 1 - i, d));
                grid.set((Face::Right, i, d), (Face::Up, rd, i));
            }
            Axis::RightLeft => {
                grid.set((Face::Up, i, rd), (Face::Front, i, rd));
                grid.set((Face::Front, i, rd), (Face::Down, i, rd));
                grid.set((Face::Down, i, rd), (Face::Back, n - 1 - i, d));
                grid.set((Face::Back, n - 1 - i, d), (Face::Up, i, rd));
            }
        }
    }

    grid.into_permutation()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_four_at_every_depth() {
        for n in 2..=6 {
            let indexer = FaceletIndexer::new(n).unwrap();

            for axis in Axis::ALL {
                for depth in 0..n {
                    let turn = quarter_turn(&indexer, axis, depth);

                    assert!(Permutation::from_mapping(turn.mapping().to_vec()).is_some());
                    assert_eq!(turn.order(), 4, "{axis:?} at depth {depth} on {n}");
                }
            }
        }
    }

    #[test]
    fn middle_layers_leave_caps_alone() {
        let indexer = FaceletIndexer::new(5).unwrap();

        for axis in Axis::ALL {
            for depth in 1..4 {
                let turn = quarter_turn(&indexer, axis, depth);

                for face in [axis.near_face(), axis.far_face()] {
                    for i in indexer.face_indices(face) {
                        assert_eq!(turn.mapping()[i], i);
                    }
                }
            }
        }
    }

    #[test]
    fn layers_move_disjoint_facelets() {
        let indexer = FaceletIndexer::new(4).unwrap();

        for axis in Axis::ALL {
            let mut moved_by = vec![None; indexer.facelet_count()];

            for depth in 0..4 {
                let turn = quarter_turn(&indexer, axis, depth);

                for (i, &source) in turn.mapping().iter().enumerate() {
                    if i != source {
                        assert_eq!(moved_by[i], None);
                        moved_by[i] = Some(depth);
                    }
                }
            }

            // An even cube has no fixed cap centers
            let unmoved = moved_by.iter().filter(|v| v.is_none()).count();
            assert_eq!(unmoved, 0);
        }
    }

    #[test]
    fn fixture_3x3_r() {
        let indexer = FaceletIndexer::new(3).unwrap();

        assert_eq!(
            quarter_turn(&indexer, Axis::RightLeft, 0).mapping(),
            &[
                0, 1, 20, 3, 4, 23, 6, 7, 26, 9, 10, 33, 12, 13, 30, 15, 16, 27, 18, 19, 11, 21,
                22, 14, 24, 25, 17, 8, 28, 29, 5, 31, 32, 2, 34, 35, 42, 39, 36, 43, 40, 37, 44,
                41, 38, 45, 46, 47, 48, 49, 50, 51, 52, 53
            ]
        );
    }

    #[test]
    fn fixture_3x3_slices() {
        let indexer = FaceletIndexer::new(3).unwrap();

        // The middle slice between R and L, turned like R
        assert_eq!(
            quarter_turn(&indexer, Axis::RightLeft, 1).mapping(),
            &[
                0, 19, 2, 3, 22, 5, 6, 25, 8, 9, 34, 11, 12, 31, 14, 15, 28, 17, 18, 10, 20, 21,
                13, 23, 24, 16, 26, 27, 7, 29, 30, 4, 32, 33, 1, 35, 36, 37, 38, 39, 40, 41, 42,
                43, 44, 45, 46, 47, 48, 49, 50, 51, 52, 53
            ]
        );

        // The middle slice between F and B, turned like F
        assert_eq!(
            quarter_turn(&indexer, Axis::FrontBack, 1).mapping(),
            &[
                0, 1, 2, 52, 49, 46, 6, 7, 8, 9, 10, 11, 43, 40, 37, 15, 16, 17, 18, 19, 20, 21,
                22, 23, 24, 25, 26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 3, 38, 39, 4, 41, 42,
                5, 44, 45, 12, 47, 48, 13, 50, 51, 14, 53
            ]
        );
    }

    #[test]
    fn fixture_3x3_f() {
        let indexer = FaceletIndexer::new(3).unwrap();

        assert_eq!(
            quarter_turn(&indexer, Axis::FrontBack, 0).mapping(),
            &[
                0, 1, 2, 3, 4, 5, 53, 50, 47, 42, 39, 36, 12, 13, 14, 15, 16, 17, 24, 21, 18, 25,
                22, 19, 26, 23, 20, 27, 28, 29, 30, 31, 32, 33, 34, 35, 6, 37, 38, 7, 40, 41, 8,
                43, 44, 45, 46, 9, 48, 49, 10, 51, 52, 11
            ]
        );
    }
}

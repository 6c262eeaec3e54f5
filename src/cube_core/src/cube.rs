use std::{
    fmt::{self, Display},
    sync::Arc,
};

use itertools::Itertools;
use log::{info, trace};

use crate::{
    CubeError,
    facelet::{Color, Face, FaceletIndexer, UnfoldedNet},
    move_table::MoveTable,
    notation::{compose_moves, tokens},
    permutation::Permutation,
};

/// The color on every facelet of a cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    indexer: FaceletIndexer,
    colors: Vec<Color>,
}

impl State {
    /// Every face shows its home color.
    #[must_use]
    pub fn solved(indexer: FaceletIndexer) -> State {
        let colors = (0..indexer.facelet_count())
            .map(|i| indexer.face_of(i).home_color())
            .collect();

        State { indexer, colors }
    }

    /// # Errors
    ///
    /// Fails with `FaceletCountMismatch` unless there is one color per facelet.
    pub fn from_colors(indexer: FaceletIndexer, colors: Vec<Color>) -> Result<State, CubeError> {
        if colors.len() != indexer.facelet_count() {
            return Err(CubeError::FaceletCountMismatch {
                expected: indexer.facelet_count(),
                actual: colors.len(),
            });
        }

        Ok(State { indexer, colors })
    }

    /// Read the color letters of an unfolded net, in the layout `Display`
    /// produces. Whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidColor` for a character that isn't a color letter and
    /// `FaceletCountMismatch` if the number of letters is wrong.
    pub fn from_net_str(indexer: FaceletIndexer, text: &str) -> Result<State, CubeError> {
        let letters = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Color::from_letter)
            .collect::<Result<Vec<_>, _>>()?;

        // Check the count before the letters are scattered over the net
        let letters = State::from_colors(indexer, letters)?.colors;

        let net = UnfoldedNet::new(&indexer);
        let mut colors = vec![Color::White; indexer.facelet_count()];

        for (&index, color) in net.traversal().iter().zip(letters) {
            colors[index] = color;
        }

        State::from_colors(indexer, colors)
    }

    #[must_use]
    pub fn indexer(&self) -> &FaceletIndexer {
        &self.indexer
    }

    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// # Panics
    ///
    /// Panics if `row` or `col` is not below the cube size.
    #[must_use]
    pub fn color(&self, face: Face, row: usize, col: usize) -> Color {
        self.colors[self.indexer.index(face, row, col)]
    }

    /// The state after `permutation`: `state'[i] = state[permutation[i]]`.
    #[must_use]
    pub fn apply(&self, permutation: &Permutation) -> State {
        State {
            indexer: self.indexer,
            colors: permutation.apply(&self.colors),
        }
    }

    /// Whether every face is a single color, in any orientation.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.colors
            .chunks(self.indexer.face_area())
            .all(|face| face.iter().all_equal())
    }

    /// Whether the corner between L, D and B shows the home colors of those
    /// faces, which pins the cube to its reference orientation.
    #[must_use]
    pub fn is_corner_normalized(&self) -> bool {
        let last = self.indexer.size() - 1;

        self.color(Face::Left, last, 0) == Face::Left.home_color()
            && self.color(Face::Down, last, 0) == Face::Down.home_color()
            && self.color(Face::Back, last, last) == Face::Back.home_color()
    }
}

impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let net = UnfoldedNet::new(&self.indexer);

        f.write_str(&net.render(1, |i| self.colors[i].to_string()))
    }
}

/// A cube that remembers its current state.
///
/// The move table is shared and read only; the state is replaced whole on
/// every successful move string.
#[derive(Debug, Clone)]
pub struct Cube {
    table: Arc<MoveTable>,
    state: State,
}

impl Cube {
    /// A solved cube of the given size.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidSize` if `size < 2`.
    pub fn new(size: usize) -> Result<Cube, CubeError> {
        Ok(Cube::with_table(Arc::new(MoveTable::new(size)?)))
    }

    /// A solved cube that shares an already compiled move table.
    #[must_use]
    pub fn with_table(table: Arc<MoveTable>) -> Cube {
        let state = State::solved(*table.indexer());

        Cube { table, state }
    }

    #[must_use]
    pub fn table(&self) -> &Arc<MoveTable> {
        &self.table
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.table.size()
    }

    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// # Errors
    ///
    /// Fails with `FaceletCountMismatch` if `state` belongs to a different
    /// cube size.
    pub fn set_state(&mut self, state: State) -> Result<(), CubeError> {
        if state.indexer() != self.table.indexer() {
            return Err(CubeError::FaceletCountMismatch {
                expected: self.table.indexer().facelet_count(),
                actual: state.colors().len(),
            });
        }

        self.state = state;

        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = State::solved(*self.table.indexer());
    }

    /// Apply a move string. Nothing changes if any token fails.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyMoveString` or `UnknownMove`.
    pub fn apply_moves(&mut self, moves: &str) -> Result<(), CubeError> {
        let permutation = compose_moves(&self.table, moves)?;

        trace!("Applying {moves}");
        self.state = self.state.apply(&permutation);

        Ok(())
    }

    /// Apply a move string one token at a time, returning the state after
    /// each token. The cube itself is left unchanged.
    ///
    /// # Errors
    ///
    /// Fails with `EmptyMoveString` or `UnknownMove`.
    pub fn trace(&self, moves: &str) -> Result<Vec<(String, State)>, CubeError> {
        let mut state = self.state.clone();
        let mut steps = vec![];

        for token in tokens(moves)? {
            state = state.apply(self.table.permutation(token)?);
            steps.push((token.to_owned(), state.clone()));
        }

        Ok(steps)
    }

    /// A reproducible random move string drawn from the outer and block
    /// moves. The same size, count and seed always give the same string.
    #[must_use]
    pub fn scramble_moves(&self, count: usize, seed: u64) -> String {
        let pool = self.table.scramble_pool();
        let mut rng = fastrand::Rng::with_seed(seed);

        (0..count)
            .map(|_| pool[rng.usize(..pool.len())])
            .join(" ")
    }

    /// Apply `scramble_moves(count, seed)` and return the string applied. A
    /// count of zero leaves the cube alone.
    ///
    /// # Errors
    ///
    /// Never fails for moves drawn from the table; errors from applying them
    /// are passed through.
    pub fn scramble(&mut self, count: usize, seed: u64) -> Result<String, CubeError> {
        let moves = self.scramble_moves(count, seed);
        info!("Scrambling with {count} moves from seed {seed}: {moves}");

        if count > 0 {
            self.apply_moves(&moves)?;
        }

        Ok(moves)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    #[must_use]
    pub fn is_corner_normalized(&self) -> bool {
        self.state.is_corner_normalized()
    }
}

use std::collections::BTreeMap;

use itertools::Itertools;
use log::debug;

use crate::{
    CubeError,
    facelet::FaceletIndexer,
    permutation::Permutation,
    quarter_turn::{Axis, quarter_turn},
};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    /// The outermost layer of one face, like `R`
    Outer,
    /// One layer strictly between two faces, like `2R`
    Inner,
    /// Several layers turned together starting at a face, like `Rw` or `3Rw`
    Block,
    /// Every layer of an axis, like `X`
    Rotation,
}

#[derive(Debug, Clone)]
pub struct Move {
    pub name: String,
    pub kind: MoveKind,
    pub permutation: Permutation,
}

/// Every named move of an N×N×N cube, with its quarter, half and inverse
/// variants. Built once per size and never changed afterwards.
#[derive(Debug, Clone)]
pub struct MoveTable {
    indexer: FaceletIndexer,
    moves: BTreeMap<String, Move>,
}

impl MoveTable {
    /// # Errors
    ///
    /// Fails with `InvalidSize` if `size < 2`.
    pub fn new(size: usize) -> Result<MoveTable, CubeError> {
        let indexer = FaceletIndexer::new(size)?;
        let n = size;
        let mut moves = BTreeMap::new();

        for axis in Axis::ALL {
            let turns = (0..n)
                .map(|depth| quarter_turn(&indexer, axis, depth))
                .collect_vec();
            let near = axis.near_face().letter();
            let far = axis.far_face().letter();

            // The generator turns every layer in the near face's sense, so the
            // far face's own turns are inverses
            register(&mut moves, near.to_string(), MoveKind::Outer, &turns[0]);
            register(
                &mut moves,
                far.to_string(),
                MoveKind::Outer,
                &turns[n - 1].power(3),
            );

            for depth in 1..n - 1 {
                register(
                    &mut moves,
                    format!("{}{near}", depth + 1),
                    MoveKind::Inner,
                    &turns[depth],
                );
                register(
                    &mut moves,
                    format!("{}{far}", n - depth),
                    MoveKind::Inner,
                    &turns[depth].power(3),
                );
            }

            for layers in 2..n {
                let near_block = block(&indexer, &turns[..layers]);
                let far_block = block(&indexer, &turns[n - layers..]).power(3);

                if layers == 2 {
                    register(&mut moves, format!("{near}w"), MoveKind::Block, &near_block);
                    register(&mut moves, format!("{far}w"), MoveKind::Block, &far_block);
                }

                register(
                    &mut moves,
                    format!("{layers}{near}w"),
                    MoveKind::Block,
                    &near_block,
                );
                register(
                    &mut moves,
                    format!("{layers}{far}w"),
                    MoveKind::Block,
                    &far_block,
                );
            }

            register(
                &mut moves,
                axis.rotation_letter().to_string(),
                MoveKind::Rotation,
                &block(&indexer, &turns),
            );
        }

        debug!("Compiled {} moves for the {n}x{n}x{n} cube", moves.len());

        Ok(MoveTable { indexer, moves })
    }

    #[must_use]
    pub fn indexer(&self) -> &FaceletIndexer {
        &self.indexer
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.indexer.size()
    }

    #[must_use]
    pub fn identity(&self) -> Permutation {
        Permutation::identity(self.indexer.facelet_count())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Move> {
        self.moves.get(name)
    }

    /// # Errors
    ///
    /// Fails with `UnknownMove` if no move has this name.
    pub fn permutation(&self, name: &str) -> Result<&Permutation, CubeError> {
        match self.moves.get(name) {
            Some(move_) => Ok(&move_.permutation),
            None => Err(CubeError::UnknownMove(name.to_owned())),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Every move, sorted by name.
    pub fn moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.values()
    }

    /// Names of every move of one kind, sorted.
    pub fn names_of(&self, kind: MoveKind) -> impl Iterator<Item = &str> {
        self.moves
            .values()
            .filter(move |move_| move_.kind == kind)
            .map(|move_| move_.name.as_str())
    }

    /// The moves a scramble draws from: outer and block moves, sorted by name.
    /// Unprefixed blocks like `Rw` repeat `2Rw` and are left out.
    #[must_use]
    pub fn scramble_pool(&self) -> Vec<&str> {
        self.moves
            .values()
            .filter(|move_| match move_.kind {
                MoveKind::Outer => true,
                MoveKind::Block => move_.name.starts_with(|c: char| c.is_ascii_digit()),
                MoveKind::Inner | MoveKind::Rotation => false,
            })
            .map(|move_| move_.name.as_str())
            .collect()
    }
}

/// Turn several layers together, folding them in from the outside inward.
fn block(indexer: &FaceletIndexer, turns: &[Permutation]) -> Permutation {
    turns.iter().fold(
        Permutation::identity(indexer.facelet_count()),
        |mut acc, turn| {
            acc.compose(turn);
            acc
        },
    )
}

fn register(
    moves: &mut BTreeMap<String, Move>,
    base: String,
    kind: MoveKind,
    quarter: &Permutation,
) {
    let half = quarter.then(quarter);
    let inverse = half.then(quarter);

    for (name, permutation) in [
        (format!("{base}2"), half),
        (format!("{base}'"), inverse),
        (base, quarter.clone()),
    ] {
        moves.insert(
            name.clone(),
            Move {
                name,
                kind,
                permutation,
            },
        );
    }
}

use std::sync::OnceLock;

use itertools::Itertools;

/// A bijection on facelet indices.
///
/// `mapping()[i]` names the facelet whose contents land on facelet `i` when
/// the permutation is applied, so applying to a state is
/// `state'[i] = state[mapping[i]]`.
#[derive(Clone, Debug)]
pub struct Permutation {
    mapping: Vec<usize>,
    cycles: OnceLock<Vec<Vec<usize>>>,
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.mapping == other.mapping
    }
}

impl Eq for Permutation {}

impl Permutation {
    #[must_use]
    pub fn identity(facelet_count: usize) -> Permutation {
        Permutation::from_mapping_unchecked((0..facelet_count).collect())
    }

    /// Returns `None` unless every value in `0..mapping.len()` appears exactly
    /// once.
    #[must_use]
    pub fn from_mapping(mapping: Vec<usize>) -> Option<Permutation> {
        let mut seen = vec![false; mapping.len()];

        for &value in &mapping {
            if value >= seen.len() || seen[value] {
                return None;
            }
            seen[value] = true;
        }

        Some(Permutation::from_mapping_unchecked(mapping))
    }

    pub(crate) fn from_mapping_unchecked(mapping: Vec<usize>) -> Permutation {
        debug_assert!(mapping.iter().all_unique());

        Permutation {
            mapping,
            cycles: OnceLock::new(),
        }
    }

    /// Build a permutation on `facelet_count` facelets from disjoint cycles.
    /// A cycle `[a, b, c]` moves the contents of `a` to `b`, `b` to `c` and `c`
    /// to `a`.
    ///
    /// # Panics
    ///
    /// Panics if a facelet is out of range or appears in more than one cycle.
    #[must_use]
    pub fn from_cycles(facelet_count: usize, cycles: &[Vec<usize>]) -> Permutation {
        // Start with the identity permutation
        let mut mapping = (0..facelet_count).collect_vec();

        for cycle in cycles {
            for (start, end) in cycle.iter().cycle().tuple_windows().take(cycle.len()) {
                mapping[*end] = *start;
            }
        }

        Permutation::from_mapping(mapping).expect("cycles to be disjoint and in range")
    }

    #[must_use]
    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    #[must_use]
    pub fn facelet_count(&self) -> usize {
        self.mapping.len()
    }

    /// The non-trivial cycles, each listed in the direction contents travel.
    pub fn cycles(&self) -> &[Vec<usize>] {
        self.cycles.get_or_init(|| {
            let inverse = self.inverse();
            let mut covered = vec![false; self.mapping.len()];
            let mut cycles = vec![];

            for i in 0..self.mapping.len() {
                if covered[i] {
                    continue;
                }

                covered[i] = true;
                let mut cycle = vec![i];
                let mut current = i;

                loop {
                    // Contents of `current` travel to the facelet that sources from it
                    let next = inverse.mapping[current];

                    if next == i {
                        break;
                    }

                    covered[next] = true;
                    cycle.push(next);
                    current = next;
                }

                if cycle.len() > 1 {
                    cycles.push(cycle);
                }
            }

            cycles
        })
    }

    /// Follow `self` with `other`, in place.
    ///
    /// Afterwards `self[i]` is the old `self[other[i]]`.
    ///
    /// # Panics
    ///
    /// Panics if the permutations act on different numbers of facelets.
    pub fn compose(&mut self, other: &Permutation) {
        assert_eq!(self.facelet_count(), other.facelet_count());

        self.mapping = other.mapping.iter().map(|&i| self.mapping[i]).collect();

        // Invalidate `cycles`
        self.cycles = OnceLock::new();
    }

    /// `self` followed by `other`.
    #[must_use]
    pub fn then(&self, other: &Permutation) -> Permutation {
        let mut out = self.clone();
        out.compose(other);
        out
    }

    /// `self` composed with itself `exponent` times.
    #[must_use]
    pub fn power(&self, exponent: usize) -> Permutation {
        let mut out = Permutation::identity(self.facelet_count());

        for _ in 0..exponent {
            out.compose(self);
        }

        out
    }

    #[must_use]
    pub fn inverse(&self) -> Permutation {
        let mut mapping = vec![0; self.facelet_count()];

        for (destination, &source) in self.mapping.iter().enumerate() {
            mapping[source] = destination;
        }

        Permutation::from_mapping_unchecked(mapping)
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.mapping.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// The smallest positive exponent that gives the identity.
    #[must_use]
    pub fn order(&self) -> usize {
        self.cycles().iter().map(Vec::len).fold(1, lcm)
    }

    /// Rearrange `values` by this permutation: `out[i] = values[self[i]]`.
    ///
    /// # Panics
    ///
    /// Panics if `values` is not one entry per facelet.
    #[must_use]
    pub fn apply<T: Clone>(&self, values: &[T]) -> Vec<T> {
        assert_eq!(values.len(), self.facelet_count());

        self.mapping.iter().map(|&i| values[i].clone()).collect()
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        (a, b) = (b, a % b);
    }

    a
}

fn lcm(a: usize, b: usize) -> usize {
    b / gcd(a, b) * a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_bijections() {
        assert!(Permutation::from_mapping(vec![0, 0, 1]).is_none());
        assert!(Permutation::from_mapping(vec![0, 3, 1]).is_none());
        assert!(Permutation::from_mapping(vec![2, 0, 1]).is_some());
    }

    #[test]
    fn compose_is_left_to_right() {
        let p = Permutation::from_mapping(vec![1, 2, 0, 3]).unwrap();
        let q = Permutation::from_mapping(vec![0, 1, 3, 2]).unwrap();

        let pq = p.then(&q);
        assert_eq!(pq.mapping(), &[1, 2, 3, 0]);

        // Applying `pq` is the same as applying `p` and then `q`
        let state = ['a', 'b', 'c', 'd'];
        assert_eq!(pq.apply(&state), q.apply(&p.apply(&state)));

        assert_ne!(pq, q.then(&p));
    }

    #[test]
    fn cycles_and_order() {
        let p = Permutation::from_cycles(7, &[vec![0, 1, 2], vec![4, 5]]);

        // Contents of 0 move to 1
        assert_eq!(p.apply(&[10, 11, 12, 13, 14, 15, 16]), [12, 10, 11, 13, 15, 14, 16]);
        assert_eq!(p.cycles(), &[vec![0, 1, 2], vec![4, 5]]);
        assert_eq!(p.order(), 6);
        assert!(p.power(6).is_identity());
        assert!(!p.power(3).is_identity());
    }

    #[test]
    fn inverse_undoes() {
        let p = Permutation::from_cycles(6, &[vec![0, 5, 2, 1], vec![3, 4]]);

        assert!(p.then(&p.inverse()).is_identity());
        assert!(p.inverse().then(&p).is_identity());
        assert_eq!(p.inverse(), p.power(p.order() - 1));
    }

    #[test]
    fn identity_has_no_cycles() {
        let id = Permutation::identity(9);

        assert!(id.is_identity());
        assert!(id.cycles().is_empty());
        assert_eq!(id.order(), 1);
    }
}

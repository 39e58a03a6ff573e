//! Position splits for choosing three of five dice.
//!
//! Subsets are chosen by roll position, not by face value: two dice showing
//! the same face are distinct members. The table order matches lexicographic
//! enumeration of the triples, which is also the tie-break order when two
//! splits score the same.

use crate::core::DICE_COUNT;

/// Number of ways to choose 3 positions out of 5.
pub const SPLIT_COUNT: usize = 10;

/// A split of the five roll positions into a triple and its complementary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Positions of the three dice that must sum to a multiple of ten.
    pub triple: [usize; 3],
    /// Positions of the two remaining dice.
    pub pair: [usize; 2],
}

impl Split {
    const fn new(triple: [usize; 3], pair: [usize; 2]) -> Self {
        Self { triple, pair }
    }
}

/// All 3-of-5 position splits, in lexicographic order of the triple.
pub const SPLITS: [Split; SPLIT_COUNT] = [
    Split::new([0, 1, 2], [3, 4]),
    Split::new([0, 1, 3], [2, 4]),
    Split::new([0, 1, 4], [2, 3]),
    Split::new([0, 2, 3], [1, 4]),
    Split::new([0, 2, 4], [1, 3]),
    Split::new([0, 3, 4], [1, 2]),
    Split::new([1, 2, 3], [0, 4]),
    Split::new([1, 2, 4], [0, 3]),
    Split::new([1, 3, 4], [0, 2]),
    Split::new([2, 3, 4], [0, 1]),
];

// Every position appears exactly once per split.
const _: () = {
    let mut i = 0;
    while i < SPLIT_COUNT {
        let s = SPLITS[i];
        let mut seen = [false; DICE_COUNT];
        seen[s.triple[0]] = true;
        seen[s.triple[1]] = true;
        seen[s.triple[2]] = true;
        seen[s.pair[0]] = true;
        seen[s.pair[1]] = true;
        assert!(seen[0] && seen[1] && seen[2] && seen[3] && seen[4]);
        i += 1;
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_splits_are_distinct() {
        let triples: HashSet<[usize; 3]> = SPLITS.iter().map(|s| s.triple).collect();
        assert_eq!(triples.len(), SPLIT_COUNT);
    }

    #[test]
    fn test_splits_sorted_positions() {
        for split in &SPLITS {
            assert!(split.triple.windows(2).all(|w| w[0] < w[1]));
            assert!(split.pair[0] < split.pair[1]);
        }
    }

    #[test]
    fn test_splits_lexicographic() {
        assert!(SPLITS.windows(2).all(|w| w[0].triple < w[1].triple));
    }
}

use std::collections::HashMap;

use crate::{Number, PickIndex, PlayerId, Report};


/// How per player match counts are stored during a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Counting {
    /// A dense array indexed by `player_id - 1`. Lookups are a single array
    /// access which is more than an order of magnitude faster than hashing,
    /// at the cost of memory (and fold/reset time) proportional to the whole
    /// population regardless of how many players matched.
    #[default]
    Dense,
    /// A hash map that only contains players with at least one match. Only
    /// worth it for small populations.
    Sparse,
}

#[derive(Clone, Debug)]
enum Slots {
    Dense(Box<[u8]>),
    Sparse(HashMap<PlayerId, u8>),
}

/// Scratch memory that counts how many drawn numbers every player picked.
///
/// Allocating the dense array is expensive for large populations, so a
/// `MatchCounts` is meant to be created once and [cleared](MatchCounts::clear)
/// between draws.
#[derive(Clone, Debug)]
pub struct MatchCounts {
    slots: Slots,
}

impl MatchCounts {
    /// Allocates zeroed counts for player ids `1..=max_player_id`.
    pub fn new(counting: Counting, max_player_id: PlayerId) -> MatchCounts {
        let slots = match counting {
            Counting::Dense => Slots::Dense(vec![0; max_player_id as usize].into_boxed_slice()),
            Counting::Sparse => Slots::Sparse(HashMap::new()),
        };
        MatchCounts { slots }
    }

    /// Adds one match for every player that picked one of the `draw`n
    /// numbers. The draw must already be validated against the config of
    /// `index`.
    pub fn accumulate(&mut self, index: &PickIndex, draw: &[Number]) {
        match &mut self.slots {
            Slots::Dense(counts) => {
                for &number in draw {
                    for &player_id in index.bucket(number) {
                        let count = &mut counts[player_id as usize - 1];
                        *count = count.saturating_add(1);
                    }
                }
            }
            Slots::Sparse(counts) => {
                for &number in draw {
                    for &player_id in index.bucket(number) {
                        let count = counts.entry(player_id).or_insert(0);
                        *count = count.saturating_add(1);
                    }
                }
            }
        }
    }

    /// Adds every player with a winning count to `report`.
    pub fn fold(&self, report: &mut Report) {
        match &self.slots {
            Slots::Dense(counts) => fold_slice(counts, report),
            Slots::Sparse(counts) => {
                for &count in counts.values() {
                    report.increment_winners_having(count as usize);
                }
            }
        }
    }

    /// The dense counts, if this uses [`Counting::Dense`]. Callers can fold
    /// disjoint chunks of it independently and [merge](Report::merge) the
    /// partial reports.
    pub fn as_dense(&self) -> Option<&[u8]> {
        match &self.slots {
            Slots::Dense(counts) => Some(&counts[..]),
            Slots::Sparse(_) => None,
        }
    }

    /// Resets every count to zero without releasing memory.
    pub fn clear(&mut self) {
        match &mut self.slots {
            Slots::Dense(counts) => counts.fill(0),
            Slots::Sparse(counts) => counts.clear(),
        }
    }

    /// Whether every count is zero, as after [`clear`](MatchCounts::clear).
    pub fn is_clear(&self) -> bool {
        match &self.slots {
            Slots::Dense(counts) => counts.iter().all(|&count| count == 0),
            Slots::Sparse(counts) => counts.is_empty(),
        }
    }

    pub fn counting(&self) -> Counting {
        match self.slots {
            Slots::Dense(_) => Counting::Dense,
            Slots::Sparse(_) => Counting::Sparse,
        }
    }

    /// The match count of a single player.
    pub fn get(&self, player_id: PlayerId) -> u8 {
        if player_id == 0 {
            return 0;
        }
        match &self.slots {
            Slots::Dense(counts) => counts.get(player_id as usize - 1).copied().unwrap_or(0),
            Slots::Sparse(counts) => counts.get(&player_id).copied().unwrap_or(0),
        }
    }
}

/// Folds a chunk of dense counts into `report`.
pub fn fold_slice(counts: &[u8], report: &mut Report) {
    for &count in counts {
        // most players lose, keep the branch cheap
        if count >= 2 {
            report.increment_winners_having(count as usize);
        }
    }
}

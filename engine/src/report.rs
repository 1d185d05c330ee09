use std::fmt;

use crate::LotteryConfig;


/// How many players won a draw, grouped by their exact number of matches.
///
/// Slot `i` holds the number of players with exactly `i + 2` matches. Zero
/// or one match is not a win and is not tracked.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Report {
    winners: Box<[u32]>,
}

impl Report {
    /// An empty report for a lottery where `picks` numbers are drawn.
    pub fn new(picks: usize) -> Report {
        Report {
            winners: vec![0; picks.saturating_sub(1)].into_boxed_slice(),
        }
    }

    /// An empty report with one slot per winning tier of `config`.
    pub fn for_config(config: &LotteryConfig) -> Report {
        Report {
            winners: vec![0; config.winning_tiers()].into_boxed_slice(),
        }
    }

    /// Counts one more winner with `matches` matches. Match counts below two
    /// are not wins and counts above the number of picks can only come from
    /// a player that was registered twice, both are ignored.
    #[inline]
    pub fn increment_winners_having(&mut self, matches: usize) {
        if matches < 2 {
            return;
        }
        match self.winners.get_mut(matches - 2) {
            Some(winners) => *winners += 1,
            None => cov_mark::hit!(report_ignores_overflowing_matches),
        }
    }

    /// The number of winners with exactly `matches` matches.
    pub fn winners_having(&self, matches: usize) -> u32 {
        if matches < 2 {
            return 0;
        }
        self.winners.get(matches - 2).copied().unwrap_or(0)
    }

    pub fn total_winners(&self) -> u64 {
        self.winners.iter().map(|&winners| winners as u64).sum()
    }

    /// The winner counts in increasing order of matches, starting at two.
    pub fn as_slice(&self) -> &[u32] {
        &self.winners
    }

    /// Adds the winners of a partial report over a disjoint set of players.
    pub fn merge(&mut self, other: &Report) {
        assert_eq!(
            self.winners.len(),
            other.winners.len(),
            "can only merge reports of the same lottery"
        );
        for (winners, other) in self.winners.iter_mut().zip(other.winners.iter()) {
            *winners += other;
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut winners = self.winners.iter();
        if let Some(first) = winners.next() {
            write!(f, "{first}")?;
        }
        for count in winners {
            write!(f, " {count}")?;
        }
        Ok(())
    }
}

/*!
`lotto_engine` is the low level crate that contains the registry and draw
matching implementation used by the `lotto` crate.

Player picks are indexed with a bucket (bin) sort: there is one bucket for
every drawable number, holding the ids of the players that picked it. A draw
only visits the buckets of the drawn numbers and counts matches per player in
a dense array indexed by player id. That array is allocated once (see
[`MatchEngine::prepare`]) and cleared between draws, so with
[`Counting::Dense`] processing a draw **never allocates** except for the
returned [`Report`].
*/

mod config;
mod counts;
mod error;
pub mod index;
mod report;


pub use crate::config::LotteryConfig;
pub use crate::counts::{fold_slice, Counting, MatchCounts};
pub use crate::error::{EngineError, PickError};
pub use crate::index::{BuildStrategy, NumberAllocation, PickIndex};
pub use crate::report::Report;

/// A drawable (or pickable) lottery number, `1..=max_number`.
pub type Number = u8;

/// A sequential player id starting at 1.
pub type PlayerId = u32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// The counting array has not been allocated yet.
    Unready,
    /// Every count is zero.
    Ready,
    /// A report was produced and the counts still hold its matches.
    Dirty,
}

/// Turns draws into [`Report`]s.
///
/// The engine owns the [`PickIndex`] and the scratch [`MatchCounts`]. It
/// moves through three states:
///
/// * after [`new`](MatchEngine::new) it is *unready*, nothing is allocated,
/// * [`prepare`](MatchEngine::prepare) allocates the counting array once the
///   population is complete,
/// * [`process`](MatchEngine::process) leaves the counts dirty and
///   [`reset`](MatchEngine::reset) must be called before the next draw.
///
/// Processing and resetting are separate so that a caller can render a
/// report before paying for the `O(population)` reset.
#[derive(Debug)]
pub struct MatchEngine {
    index: PickIndex,
    counting: Counting,
    counts: Option<MatchCounts>,
    state: State,
}

impl MatchEngine {
    pub fn new(index: PickIndex) -> MatchEngine {
        MatchEngine::with_counting(index, Counting::default())
    }

    pub fn with_counting(index: PickIndex, counting: Counting) -> MatchEngine {
        MatchEngine {
            index,
            counting,
            counts: None,
            state: State::Unready,
        }
    }

    /// Allocates the counting array for every registered player. This must
    /// run after the population is loaded and before the first draw. Calling
    /// it again has no effect.
    pub fn prepare(&mut self) {
        if self.state != State::Unready {
            return;
        }
        self.counts = Some(MatchCounts::new(self.counting, self.index.max_player_id()));
        self.state = State::Ready;
    }

    pub fn is_ready(&self) -> bool {
        self.state == State::Ready
    }

    /// Counts the matches of every player against `draw` and returns the
    /// histogram of winners.
    ///
    /// Time is `O(picks * average bucket size)` to count plus `O(population)`
    /// to fold the dense counts. The counts are left dirty, call
    /// [`reset`](MatchEngine::reset) once the report was consumed.
    pub fn process(&mut self, draw: &[Number]) -> Result<Report, EngineError> {
        let counts = match (self.state, self.counts.as_mut()) {
            (State::Ready, Some(counts)) => counts,
            (State::Dirty, _) => return Err(EngineError::PendingReset),
            _ => return Err(EngineError::NotReady),
        };
        self.index.config().validate(draw)?;
        self.state = State::Dirty;
        counts.accumulate(&self.index, draw);
        let mut report = Report::for_config(self.index.config());
        counts.fold(&mut report);
        Ok(report)
    }

    /// Zeroes the counts left behind by the last [`process`](MatchEngine::process).
    pub fn reset(&mut self) {
        if self.state != State::Dirty {
            cov_mark::hit!(reset_when_clean);
            return;
        }
        if let Some(counts) = &mut self.counts {
            counts.clear();
        }
        self.state = State::Ready;
    }

    /// Processes `draw` and resets right away.
    pub fn process_and_reset(&mut self, draw: &[Number]) -> Result<Report, EngineError> {
        let report = self.process(draw)?;
        self.reset();
        Ok(report)
    }

    /// The match count of `player_id` in the draw that is currently being
    /// held (between `process` and `reset`), zero otherwise.
    pub fn matches_of(&self, player_id: PlayerId) -> u8 {
        match (&self.counts, self.state) {
            (Some(counts), State::Dirty) => counts.get(player_id),
            _ => 0,
        }
    }

    pub fn index(&self) -> &PickIndex {
        &self.index
    }

    pub fn into_index(self) -> PickIndex {
        self.index
    }

    pub fn config(&self) -> &LotteryConfig {
        self.index.config()
    }
}

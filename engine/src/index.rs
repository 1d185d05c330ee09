//! The bucket (bin) index from lottery numbers to the players that picked
//! them.

use crate::{LotteryConfig, Number, PickError, PlayerId};


/// How a [`PickIndex`] allocates its buckets while a population is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BuildStrategy {
    /// Traverse the population twice: first count how often every number
    /// was picked, then allocate every bucket at its final size and fill it.
    /// Growing ninety vectors over millions of players is measurably slower
    /// than the extra pass.
    #[default]
    Presized,
    /// Traverse the population once and let the buckets grow on demand.
    Grow,
}

/// How many players picked each number. This is the result of the counting
/// pass of a [`BuildStrategy::Presized`] build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberAllocation {
    config: LotteryConfig,
    counts: Box<[usize]>,
}

impl NumberAllocation {
    pub fn new(config: LotteryConfig) -> NumberAllocation {
        NumberAllocation {
            config,
            counts: vec![0; config.max_number as usize].into_boxed_slice(),
        }
    }

    /// Counts a pick set. Invalid pick sets are rejected without being
    /// counted.
    pub fn count(&mut self, picks: &[Number]) -> Result<(), PickError> {
        self.config.validate(picks)?;
        for &number in picks {
            self.counts[self.config.bucket_of(number)] += 1;
        }
        Ok(())
    }

    /// How many counted players picked `number`.
    pub fn of(&self, number: Number) -> usize {
        if number == 0 || number > self.config.max_number {
            return 0;
        }
        self.counts[self.config.bucket_of(number)]
    }

    /// The sum over all buckets, `picks` times the number of counted players.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// For every drawable number, the ids of the players that picked it.
///
/// All `max_number` buckets always exist, even if nobody picked the number.
/// Buckets are append only: a player must be registered **at most once**.
/// Registering the same player twice inserts it twice and it will then be
/// counted twice by the [`MatchEngine`](crate::MatchEngine).
#[derive(Clone, Debug)]
pub struct PickIndex {
    config: LotteryConfig,
    buckets: Box<[Vec<PlayerId>]>,
    player_count: usize,
    max_player_id: PlayerId,
}

impl PickIndex {
    /// Creates an empty index whose buckets grow as players are registered.
    pub fn new(config: LotteryConfig) -> PickIndex {
        PickIndex {
            config,
            buckets: (0..config.max_number).map(|_| Vec::new()).collect(),
            player_count: 0,
            max_player_id: 0,
        }
    }

    /// Creates an empty index with every bucket allocated at the exact size
    /// recorded in `allocation`.
    pub fn with_allocation(allocation: &NumberAllocation) -> PickIndex {
        let config = allocation.config;
        PickIndex {
            config,
            buckets: allocation
                .counts
                .iter()
                .map(|&len| Vec::with_capacity(len))
                .collect(),
            player_count: 0,
            max_player_id: 0,
        }
    }

    /// Builds an index from an in-memory population.
    ///
    /// `population` is called once per traversal (twice for
    /// [`BuildStrategy::Presized`]) and must yield the same sequence of
    /// `(player_id, picks)` pairs every time. The build fails on the first
    /// invalid pick set.
    pub fn build<I, P>(
        config: LotteryConfig,
        population: impl Fn() -> I,
        strategy: BuildStrategy,
    ) -> Result<PickIndex, PickError>
    where
        I: IntoIterator<Item = (PlayerId, P)>,
        P: AsRef<[Number]>,
    {
        let mut index = match strategy {
            BuildStrategy::Presized => {
                let mut allocation = NumberAllocation::new(config);
                for (_, picks) in population() {
                    allocation.count(picks.as_ref())?;
                }
                PickIndex::with_allocation(&allocation)
            }
            BuildStrategy::Grow => PickIndex::new(config),
        };
        for (player_id, picks) in population() {
            index.register_player(player_id, picks.as_ref())?;
        }
        Ok(index)
    }

    /// Inserts `player_id` into the bucket of every number in `picks`.
    ///
    /// Invalid input is rejected before any bucket is touched.
    pub fn register_player(
        &mut self,
        player_id: PlayerId,
        picks: &[Number],
    ) -> Result<(), PickError> {
        if player_id == 0 {
            return Err(PickError::ZeroPlayerId);
        }
        self.config.validate(picks)?;
        for &number in picks {
            self.buckets[self.config.bucket_of(number)].push(player_id);
        }
        self.player_count += 1;
        self.max_player_id = self.max_player_id.max(player_id);
        Ok(())
    }

    /// Whether `player_id` picked `number`. This is a linear scan of a
    /// single bucket and only meant for verification.
    pub fn has_pick(&self, player_id: PlayerId, number: Number) -> bool {
        self.players_with(number).contains(&player_id)
    }

    /// The players that picked `number`, in registration order. Numbers
    /// outside of `1..=max_number` have no players.
    pub fn players_with(&self, number: Number) -> &[PlayerId] {
        if number == 0 || number > self.config.max_number {
            return &[];
        }
        &self.buckets[self.config.bucket_of(number)]
    }

    /// The number of successful registrations.
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    /// The largest registered player id. Player ids may have holes (for
    /// example lines skipped while loading a file) so this can exceed
    /// [`player_count`](PickIndex::player_count).
    pub fn max_player_id(&self) -> PlayerId {
        self.max_player_id
    }

    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    #[inline]
    pub(crate) fn bucket(&self, number: Number) -> &[PlayerId] {
        &self.buckets[self.config.bucket_of(number)]
    }
}

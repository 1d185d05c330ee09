//! Matching many draws (or one draw over a huge population) on a rayon
//! thread pool.
//!
//! The [`PickIndex`] is read only once it is built and is shared by all
//! workers without locking. Match counts are per draw scratch memory, every
//! in-flight draw gets its own [`MatchCounts`] taken from a pool so that the
//! expensive allocation is reused across batches.

use std::mem;
use std::sync::Arc;

use parking_lot::Mutex;
use rayon::prelude::*;

use crate::{fold_slice, Counting, EngineError, MatchCounts, Number, PickIndex, Report};

#[cfg(test)]
mod tests;

// large enough to amortize rayon's task overhead over a cheap scan
const FOLD_CHUNK: usize = 64 * 1024;

pub struct BatchMatcher {
    index: Arc<PickIndex>,
    scratch: Mutex<Vec<MatchCounts>>,
}

impl BatchMatcher {
    pub fn new(index: Arc<PickIndex>) -> BatchMatcher {
        BatchMatcher {
            index,
            scratch: Mutex::new(Vec::new()),
        }
    }

    pub fn index(&self) -> &PickIndex {
        &self.index
    }

    /// Processes every draw in parallel. The reports are returned in the
    /// order of `draws`. If any draw is invalid nothing is processed.
    pub fn process_batch<D>(&self, draws: &[D]) -> Result<Vec<Report>, EngineError>
    where
        D: AsRef<[Number]> + Sync,
    {
        let config = self.index.config();
        for draw in draws {
            config.validate(draw.as_ref())?;
        }
        let reports = draws
            .par_iter()
            .map_init(
                || self.checkout(),
                |scratch, draw| {
                    let counts = scratch.counts();
                    counts.accumulate(&self.index, draw.as_ref());
                    let mut report = Report::for_config(config);
                    counts.fold(&mut report);
                    counts.clear();
                    report
                },
            )
            .collect();
        Ok(reports)
    }

    /// Processes a single draw, folding the counts in parallel chunks whose
    /// partial reports are merged afterwards.
    pub fn process_partitioned(&self, draw: &[Number]) -> Result<Report, EngineError> {
        let config = self.index.config();
        config.validate(draw)?;
        let mut scratch = self.checkout();
        let counts = scratch.counts();
        counts.accumulate(&self.index, draw);
        let report = match counts.as_dense() {
            Some(dense) => dense
                .par_chunks(FOLD_CHUNK)
                .fold(
                    || Report::for_config(config),
                    |mut report, chunk| {
                        fold_slice(chunk, &mut report);
                        report
                    },
                )
                .reduce(
                    || Report::for_config(config),
                    |mut report, partial| {
                        report.merge(&partial);
                        report
                    },
                ),
            None => {
                let mut report = Report::for_config(config);
                counts.fold(&mut report);
                report
            }
        };
        counts.clear();
        Ok(report)
    }

    /// The number of scratch count arrays currently parked in the pool.
    pub fn pooled_scratch(&self) -> usize {
        self.scratch.lock().len()
    }

    fn checkout(&self) -> Scratch<'_> {
        let counts = self
            .scratch
            .lock()
            .pop()
            .unwrap_or_else(|| MatchCounts::new(Counting::Dense, self.index.max_player_id()));
        Scratch {
            pool: &self.scratch,
            counts,
        }
    }
}

/// Scratch counts borrowed from the pool, returned on drop.
struct Scratch<'a> {
    pool: &'a Mutex<Vec<MatchCounts>>,
    counts: MatchCounts,
}

impl Scratch<'_> {
    fn counts(&mut self) -> &mut MatchCounts {
        &mut self.counts
    }
}

impl Drop for Scratch<'_> {
    fn drop(&mut self) {
        // counts of a panicked draw may be dirty, let them go
        if std::thread::panicking() {
            return;
        }
        // an empty dense array does not allocate
        let counts = mem::replace(&mut self.counts, MatchCounts::new(Counting::Dense, 0));
        debug_assert!(counts.is_clear(), "scratch counts returned dirty");
        self.pool.lock().push(counts);
    }
}

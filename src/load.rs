//! Loading the population of players from a file with one pick set per
//! line. The 1-based line number is the player id.

use std::path::Path;

use memchr::memchr;

use crate::error::{Error, Result};
use crate::parse::{parse_picks_bytes, ParseError};
use crate::{BuildStrategy, LotteryConfig, NumberAllocation, PickIndex, PlayerId};


/// A fully loaded [`PickIndex`] together with load statistics.
#[derive(Debug)]
pub struct Population {
    index: PickIndex,
    skipped: usize,
}

impl Population {
    pub fn index(&self) -> &PickIndex {
        &self.index
    }

    pub fn into_index(self) -> PickIndex {
        self.index
    }

    /// The number of registered players.
    pub fn loaded(&self) -> usize {
        self.index.player_count()
    }

    /// The number of lines that could not be parsed.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Reads the file at `path` and registers every player in it.
///
/// Lines that fail to parse are skipped and reported to `on_skip` with their
/// line number, they still consume a player id. The file is read into memory
/// once and released before returning.
pub fn load_population(
    path: impl AsRef<Path>,
    config: &LotteryConfig,
    strategy: BuildStrategy,
    on_skip: impl FnMut(usize, &ParseError),
) -> Result<Population> {
    let path = path.as_ref();
    let buf = std::fs::read(path).map_err(|source| Error::Players {
        path: path.to_owned(),
        source,
    })?;
    Ok(load_population_from_bytes(&buf, config, strategy, on_skip))
}

/// Same as [`load_population`] for an in-memory file.
pub fn load_population_from_bytes(
    buf: &[u8],
    config: &LotteryConfig,
    strategy: BuildStrategy,
    on_skip: impl FnMut(usize, &ParseError),
) -> Population {
    load_lines(buf, config, strategy, PlayerId::MAX, on_skip)
}

/// Lines past `max_player_id` have no player id left and are skipped.
fn load_lines(
    buf: &[u8],
    config: &LotteryConfig,
    strategy: BuildStrategy,
    max_player_id: PlayerId,
    mut on_skip: impl FnMut(usize, &ParseError),
) -> Population {
    let mut picks = Vec::with_capacity(config.picks);
    let mut skipped = 0;
    let mut index = match strategy {
        BuildStrategy::Presized => {
            // counting pass, the fill pass below sees the exact same lines
            // so skipped lines are only reported here
            let mut allocation = NumberAllocation::new(*config);
            for (i, line) in Lines::new(buf).enumerate() {
                let res = player_id(i + 1, max_player_id)
                    .and_then(|_| parse_picks_bytes(line, config, &mut picks))
                    .and_then(|()| allocation.count(&picks).map_err(ParseError::from));
                if let Err(err) = res {
                    cov_mark::hit!(skip_unparsable_player);
                    skipped += 1;
                    on_skip(i + 1, &err);
                }
            }
            PickIndex::with_allocation(&allocation)
        }
        BuildStrategy::Grow => PickIndex::new(*config),
    };
    for (i, line) in Lines::new(buf).enumerate() {
        let res = player_id(i + 1, max_player_id).and_then(|player_id| {
            parse_picks_bytes(line, config, &mut picks)?;
            index.register_player(player_id, &picks)?;
            Ok(())
        });
        if let Err(err) = res {
            if strategy == BuildStrategy::Grow {
                cov_mark::hit!(skip_unparsable_player);
                skipped += 1;
                on_skip(i + 1, &err);
            }
        }
    }
    Population { index, skipped }
}

/// The id of the player on the 1-based line `line`.
fn player_id(line: usize, max_player_id: PlayerId) -> Result<PlayerId, ParseError> {
    match PlayerId::try_from(line) {
        Ok(player_id) if player_id <= max_player_id => Ok(player_id),
        _ => {
            cov_mark::hit!(player_ids_exhausted);
            Err(ParseError::TooManyPlayers {
                line,
                max: max_player_id,
            })
        }
    }
}

/// Splits a buffer at `\n`. A missing newline at the end of the buffer does
/// not produce an extra line.
struct Lines<'a> {
    rest: &'a [u8],
}

impl<'a> Lines<'a> {
    fn new(buf: &'a [u8]) -> Lines<'a> {
        Lines { rest: buf }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        if self.rest.is_empty() {
            return None;
        }
        let line = match memchr(b'\n', self.rest) {
            Some(end) => {
                let line = &self.rest[..end];
                self.rest = &self.rest[end + 1..];
                line
            }
            None => std::mem::take(&mut self.rest),
        };
        Some(line)
    }
}

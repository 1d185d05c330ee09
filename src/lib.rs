/*!
`lotto` matches a stream of lottery draws against a pre-registered
population of player picks and reports, for every draw, how many players
matched exactly 2, 3, 4 or 5 numbers.

The registry and matching engine live in the [`lotto_engine`] crate and are
re-exported here. This crate adds everything around it: parsing pick lines,
loading a population from a file, the line oriented query loop and a
parallel batch matcher.
*/

pub mod batch;
mod error;
pub mod load;
pub mod parse;
pub mod serve;

pub use lotto_engine::{
    fold_slice, index, BuildStrategy, Counting, EngineError, LotteryConfig, MatchCounts,
    MatchEngine, Number, NumberAllocation, PickError, PickIndex, PlayerId, Report,
};

pub use crate::batch::BatchMatcher;
pub use crate::error::{Error, Result};
pub use crate::load::{load_population, load_population_from_bytes, Population};
pub use crate::parse::{parse_picks, ParseError};
pub use crate::serve::{serve, READY};

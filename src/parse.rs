//! Parsing of pick sets and draws: one line of whitespace separated decimal
//! numbers.

use thiserror::Error;

use crate::{LotteryConfig, Number, PickError, PlayerId};


#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error(transparent)]
    Pick(#[from] PickError),

    #[error("line {line} is past the last player id {max}")]
    TooManyPlayers { line: usize, max: PlayerId },
}

/// Parses `line` into `picks`, which is cleared first so that a single
/// buffer can be reused for every line.
///
/// The line must contain exactly [`LotteryConfig::picks`] distinct numbers
/// in `1..=max_number`. On error the contents of `picks` are unspecified.
pub fn parse_picks(
    line: &str,
    config: &LotteryConfig,
    picks: &mut Vec<Number>,
) -> Result<(), ParseError> {
    parse_picks_bytes(line.as_bytes(), config, picks)
}

/// Same as [`parse_picks`] for a line that has not been decoded as UTF-8.
pub fn parse_picks_bytes(
    line: &[u8],
    config: &LotteryConfig,
    picks: &mut Vec<Number>,
) -> Result<(), ParseError> {
    picks.clear();
    let found = fields(line).count();
    if found != config.picks {
        return Err(PickError::InvalidQuantityOfNumbers {
            expected: config.picks,
            found,
        }
        .into());
    }
    for field in fields(line) {
        picks.push(parse_number(field, config)?);
    }
    config.validate(picks)?;
    Ok(())
}

fn fields(line: &[u8]) -> impl Iterator<Item = &[u8]> {
    line.split(u8::is_ascii_whitespace)
        .filter(|field| !field.is_empty())
}

fn parse_number(field: &[u8], config: &LotteryConfig) -> Result<Number, ParseError> {
    let value: i64 = std::str::from_utf8(field)
        .ok()
        .and_then(|field| field.parse().ok())
        .ok_or_else(|| ParseError::NotANumber(String::from_utf8_lossy(field).into_owned()))?;
    if value < 1 || value > config.max_number as i64 {
        return Err(PickError::NumberOutOfRange {
            number: value,
            max: config.max_number,
        }
        .into());
    }
    Ok(value as Number)
}

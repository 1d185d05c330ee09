use crate::{Number, PickError};

/// The shape of a lottery: how many numbers can be drawn and how many
/// numbers every player (and every draw) picks.
#[non_exhaustive]
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct LotteryConfig {
    /// The largest drawable number (inclusive), numbers start at 1
    pub max_number: Number,
    /// How many distinct numbers make up a pick set or a draw
    pub picks: usize,
}

impl LotteryConfig {
    /// Five numbers out of ninety.
    pub const DEFAULT: Self = {
        LotteryConfig {
            max_number: 90,
            picks: 5,
        }
    };

    pub const fn new(max_number: Number, picks: usize) -> Self {
        assert!(picks >= 2, "a lottery needs at least two picks to have winners");
        assert!(
            picks <= max_number as usize,
            "cannot pick more distinct numbers than there are"
        );
        LotteryConfig { max_number, picks }
    }

    /// The number of histogram slots in a [`Report`](crate::Report), one
    /// for every winning match count `2..=picks`.
    pub const fn winning_tiers(&self) -> usize {
        self.picks - 1
    }

    #[inline]
    pub(crate) fn bucket_of(&self, number: Number) -> usize {
        debug_assert!(number >= 1 && number <= self.max_number);
        number as usize - 1
    }

    /// Checks that `picks` is a valid pick set (or draw): exactly
    /// [`picks`](LotteryConfig::picks) distinct numbers in `1..=max_number`.
    pub fn validate(&self, picks: &[Number]) -> Result<(), PickError> {
        if picks.len() != self.picks {
            return Err(PickError::InvalidQuantityOfNumbers {
                expected: self.picks,
                found: picks.len(),
            });
        }
        // max_number is at most 255 so a 256 bit mask covers every number
        let mut seen = [0u64; 4];
        for &number in picks {
            if number == 0 || number > self.max_number {
                return Err(PickError::NumberOutOfRange {
                    number: number.into(),
                    max: self.max_number,
                });
            }
            let (word, bit) = (number as usize / 64, number as usize % 64);
            if seen[word] & (1 << bit) != 0 {
                return Err(PickError::RepeatedNumber(number));
            }
            seen[word] |= 1 << bit;
        }
        Ok(())
    }
}

impl Default for LotteryConfig {
    fn default() -> Self {
        LotteryConfig::DEFAULT
    }
}

use std::collections::HashMap;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    #[error("stone value {0} overflows 128 bits when multiplied by 2024")]
    #[diagnostic(code(pebbles::value_overflow))]
    ValueOverflow(u128),

    #[error("stone count overflows 128 bits")]
    #[diagnostic(code(pebbles::count_overflow))]
    CountOverflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stone {
    value: u128,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blink {
    One(Stone),
    Two(Stone, Stone),
}

impl Stone {
    pub fn new(value: u128) -> Self {
        Self { value }
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    fn digit_count(&self) -> u32 {
        if self.value == 0 {
            return 1;
        }

        let mut num = self.value;
        let mut count = 0;
        while num > 0 {
            count += 1;
            num /= 10;
        }
        count
    }

    fn split(&self) -> (Stone, Stone) {
        let mut power = 1u128;
        for _ in 0..self.digit_count() / 2 {
            power *= 10;
        }

        // The right half drops any leading zeros, e.g. 1000 -> (10, 0)
        (Stone::new(self.value / power), Stone::new(self.value % power))
    }

    pub fn blink(&self) -> Result<Blink, EngineError> {
        if self.value == 0 {
            return Ok(Blink::One(Stone::new(1)));
        }

        if self.digit_count() % 2 == 0 {
            let (left, right) = self.split();
            return Ok(Blink::Two(left, right));
        }

        let value = self
            .value
            .checked_mul(2024)
            .ok_or(EngineError::ValueOverflow(self.value))?;
        Ok(Blink::One(Stone::new(value)))
    }
}

#[derive(Debug, Default)]
pub struct StoneCounter {
    memo: HashMap<(Stone, usize), u128>,
}

impl StoneCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many stones a single stone becomes after `blinks` blinks.
    pub fn count_after(&mut self, stone: Stone, blinks: usize) -> Result<u128, EngineError> {
        if blinks == 0 {
            return Ok(1);
        }

        // Check memoized result first
        if let Some(&count) = self.memo.get(&(stone, blinks)) {
            return Ok(count);
        }

        let count = match stone.blink()? {
            Blink::One(next) => self.count_after(next, blinks - 1)?,
            Blink::Two(left, right) => {
                let left_count = self.count_after(left, blinks - 1)?;
                let right_count = self.count_after(right, blinks - 1)?;
                left_count
                    .checked_add(right_count)
                    .ok_or(EngineError::CountOverflow)?
            }
        };

        self.memo.insert((stone, blinks), count);
        Ok(count)
    }

    #[tracing::instrument(skip(self))]
    pub fn total_after(&mut self, stones: &[Stone], blinks: usize) -> Result<u128, EngineError> {
        let mut total = 0u128;
        for &stone in stones {
            let count = self.count_after(stone, blinks)?;
            total = total.checked_add(count).ok_or(EngineError::CountOverflow)?;
        }

        tracing::debug!(blinks, total, memo_entries = self.len());
        Ok(total)
    }

    pub fn len(&self) -> usize {
        self.memo.len()
    }

    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

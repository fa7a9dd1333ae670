//! Materialized blink simulation. Fine for small blink counts and for
//! cross-checking the memoized engine; the stone count roughly doubles
//! every couple of blinks, so 75 blinks is out of reach here.

use crate::engine::{Blink, EngineError, Stone};

pub fn blink_once(stones: &[Stone]) -> Result<Vec<Stone>, EngineError> {
    let mut next = Vec::with_capacity(stones.len() * 2);

    for stone in stones {
        match stone.blink()? {
            Blink::One(stone) => next.push(stone),
            Blink::Two(left, right) => {
                next.push(left);
                next.push(right);
            }
        }
    }

    Ok(next)
}

pub fn blink_times(stones: &[Stone], count: usize) -> Result<Vec<Stone>, EngineError> {
    let mut current = stones.to_vec();
    for _ in 0..count {
        current = blink_once(&current)?;
    }
    Ok(current)
}

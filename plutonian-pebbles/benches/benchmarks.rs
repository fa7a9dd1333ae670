use plutonian_pebbles::engine::{Stone, StoneCounter};
use plutonian_pebbles::{parser, sequence};

fn main() {
    divan::main();
}

const SAMPLE: &str = "125 17";

#[divan::bench]
fn memoized_25() -> u128 {
    let stones = parser::parse(divan::black_box(SAMPLE)).unwrap();
    let mut counter = StoneCounter::new();
    counter.total_after(&stones, 25).unwrap()
}

#[divan::bench]
fn memoized_75() -> u128 {
    let stones = parser::parse(divan::black_box(SAMPLE)).unwrap();
    let mut counter = StoneCounter::new();
    counter.total_after(&stones, 75).unwrap()
}

#[divan::bench]
fn materialized_25() -> usize {
    let stones = parser::parse(divan::black_box(SAMPLE)).unwrap();
    sequence::blink_times(&stones, 25).unwrap().len()
}

#[divan::bench]
fn blink_rule() {
    let values = [0u128, 1234, 100000, 2024, 999];
    for &value in &values {
        divan::black_box(Stone::new(value).blink().unwrap());
    }
}

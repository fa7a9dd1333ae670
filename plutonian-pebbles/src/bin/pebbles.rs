use miette::{Context, IntoDiagnostic};
use plutonian_pebbles::engine::StoneCounter;
use plutonian_pebbles::parser;

#[tracing::instrument]
fn main() -> miette::Result<()> {
    tracing_subscriber::fmt::init();

    let input = std::fs::read_to_string("input.txt")
        .into_diagnostic()
        .context("read input.txt")?;
    let stones = parser::parse(&input)?;

    // One counter for both parts: a memo entry (value, blinks) means
    // "count after exactly that many more blinks", so part one's entries
    // are reused verbatim by part two.
    let mut counter = StoneCounter::new();

    let part_one = counter.total_after(&stones, 25)?;
    println!("(Part one) stone count: {}", part_one);

    let part_two = counter.total_after(&stones, 75)?;
    println!("(Part two) stone count: {}", part_two);

    Ok(())
}

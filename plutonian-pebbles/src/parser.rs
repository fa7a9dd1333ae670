use miette::{miette, Result};
use nom::{
    character::complete::{digit1, space1},
    combinator::{all_consuming, map, map_res},
    multi::separated_list1,
    IResult,
};

use crate::engine::Stone;

pub fn parse_stones(input: &str) -> IResult<&str, Vec<Stone>> {
    separated_list1(space1, map(map_res(digit1, str::parse::<u128>), Stone::new))(input)
}

/// Parses the first line of the input as a whitespace-separated list of
/// stones. Anything after the first line is ignored.
#[tracing::instrument]
pub fn parse(input: &str) -> Result<Vec<Stone>> {
    let first_line = input
        .lines()
        .next()
        .ok_or_else(|| miette!("Empty input"))?
        .trim();

    let (_, stones) = all_consuming(parse_stones)(first_line)
        .map_err(|e| miette!("Failed to parse input: {}", e))?;

    Ok(stones)
}

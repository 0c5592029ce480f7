//! Settles a snapshot of falling sand bricks and works out which ones can be
//! disintegrated safely, and how much comes down with the ones that can't.

pub mod brick;
pub mod criticality;
pub mod error;
pub mod parse;
pub mod settle;
pub mod stack;
pub mod support;

use criticality::Analysis;
use error::Result;
use parse::parse_stack;
use settle::settle;
use support::SupportGraph;

fn support_graph(input: &str) -> Result<SupportGraph> {
    let settled = settle(parse_stack(input)?);
    Ok(SupportGraph::build(&settled))
}

/// Number of bricks that can be removed without anything else falling.
pub fn solve(input: &str) -> Result<usize> {
    Ok(criticality::safe_count(&support_graph(input)?))
}

/// Total number of bricks that fall, summed over every brick whose removal makes something fall.
pub fn bonus(input: &str) -> Result<usize> {
    Ok(criticality::total_cascade(&support_graph(input)?))
}

pub fn analyze(input: &str) -> Result<Analysis> {
    Ok(Analysis::of(&support_graph(input)?))
}

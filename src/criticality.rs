use std::collections::VecDeque;

use fxhash::FxHashSet;
use itertools::Itertools;
use rayon::prelude::*;

use crate::{brick::BrickId, support::SupportGraph};

/// Bricks that are the only support of some other brick, sorted by id.
pub fn critical_set(graph: &SupportGraph) -> Vec<BrickId> {
    graph
        .ids()
        .filter_map(|id| match graph.supporters(id) {
            &[only] => Some(only),
            _ => None,
        })
        .sorted()
        .dedup()
        .collect()
}

/// How many bricks can be taken out without anything else falling.
pub fn safe_count(graph: &SupportGraph) -> usize {
    graph.len() - critical_set(graph).len()
}

/// How many other bricks fall when `start` is taken out.
pub fn cascade_size(graph: &SupportGraph, start: BrickId) -> usize {
    let mut removed = FxHashSet::default();
    removed.insert(start);

    let mut todo = VecDeque::from([start]);

    while let Some(id) = todo.pop_front() {
        for &above in graph.supported(id) {
            if removed.contains(&above) {
                continue;
            }

            // only if every last one of its supporters is gone
            if graph.supporters(above).iter().all(|s| removed.contains(s)) {
                removed.insert(above);
                todo.push_back(above);
            }
        }
    }

    removed.len() - 1
}

/// Sum of [`cascade_size`] over every critical brick.
pub fn total_cascade(graph: &SupportGraph) -> usize {
    cascade_sum(graph, &critical_set(graph))
}

fn cascade_sum(graph: &SupportGraph, ids: &[BrickId]) -> usize {
    ids.par_iter().map(|&id| cascade_size(graph, id)).sum()
}

/// Both answers for one settled stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub bricks: usize,
    pub critical: Vec<BrickId>,
    pub safe: usize,
    pub cascade_total: usize,
}

impl Analysis {
    pub fn of(graph: &SupportGraph) -> Analysis {
        let critical = critical_set(graph);
        let cascade_total = cascade_sum(graph, &critical);

        Analysis {
            bricks: graph.len(),
            safe: graph.len() - critical.len(),
            critical,
            cascade_total,
        }
    }
}

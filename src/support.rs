use fxhash::FxHashMap;

use crate::{brick::BrickId, settle::Settled};

/// Who rests on whom, derived once from a settled stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportGraph {
    supporters: Vec<Vec<BrickId>>,
    supported: Vec<Vec<BrickId>>,
}

impl SupportGraph {
    pub fn build(settled: &Settled) -> SupportGraph {
        let stack = settled.stack();

        let mut by_top: FxHashMap<i64, Vec<BrickId>> = FxHashMap::default();
        for brick in stack.iter() {
            by_top.entry(brick.z().max).or_default().push(brick.id);
        }

        let mut supporters = vec![vec![]; stack.len()];
        let mut supported = vec![vec![]; stack.len()];

        for above in stack.iter() {
            let Some(candidates) = by_top.get(&(above.z().min - 1)) else {
                continue;
            };

            for &below in candidates {
                if stack[below].supports(above) {
                    supporters[above.id.0].push(below);
                    supported[below.0].push(above.id);
                }
            }
        }

        // `by_top` buckets and the outer loop both follow id order, so the lists are already sorted
        let edges: usize = supporters.iter().map(Vec::len).sum();
        tracing::debug!(bricks = stack.len(), edges, "built support graph");

        SupportGraph {
            supporters,
            supported,
        }
    }

    pub fn len(&self) -> usize {
        self.supporters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supporters.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = BrickId> {
        (0..self.len()).map(BrickId)
    }

    /// Bricks directly underneath `id`, sharing its footprint.
    pub fn supporters(&self, id: BrickId) -> &[BrickId] {
        &self.supporters[self.check(id)]
    }

    /// Bricks directly on top of `id`, sharing its footprint.
    pub fn supported(&self, id: BrickId) -> &[BrickId] {
        &self.supported[self.check(id)]
    }

    fn check(&self, id: BrickId) -> usize {
        assert!(
            id.0 < self.len(),
            "no brick {id} in a support graph of {}",
            self.len()
        );
        id.0
    }
}

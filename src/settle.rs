use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{
    brick::{Brick, BrickId},
    stack::Stack,
};

/// Lowest legal bottom for a brick; the floor itself is at 0.
pub const GROUND: i64 = 1;

/// A stack in which every brick rests on the floor or on another brick.
///
/// Only [`settle`] produces one, and nothing moves a brick afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settled {
    stack: Stack,
    moved: usize,
}

impl Settled {
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn into_stack(self) -> Stack {
        self.stack
    }

    /// How many bricks changed position while settling.
    pub fn moved(&self) -> usize {
        self.moved
    }

    pub fn is_resting(&self, id: BrickId) -> bool {
        let brick = &self.stack[id];
        brick.z().min == GROUND || self.stack.iter().any(|other| other.supports(brick))
    }
}

/// Footprints bigger than this are scanned instead of being written cell by cell.
const MAX_INDEXED_AREA: i64 = 1024;

/// Top surface of everything placed so far.
#[derive(Default)]
struct Surface {
    heights: FxHashMap<(i64, i64), i64>,
    wide: Vec<BrickId>,
}

impl Surface {
    fn indexed(brick: &Brick) -> bool {
        brick.area().is_some_and(|area| area <= MAX_INDEXED_AREA)
    }

    /// Highest top among placed bricks sharing `brick`'s footprint.
    fn landing(&self, stack: &Stack, brick: &Brick) -> i64 {
        let wide = self
            .wide
            .iter()
            .map(|&id| &stack[id])
            .filter(|below| below.shares_xy(brick))
            .map(|below| below.z().max);

        let narrow = if Surface::indexed(brick) {
            brick
                .cells()
                .filter_map(|cell| self.heights.get(&cell).copied())
                .max()
        } else {
            // too big to walk, compare against every indexed column instead
            self.heights
                .iter()
                .filter(|&(&(x, y), _)| brick.x.contains(x) && brick.y.contains(y))
                .map(|(_, &z)| z)
                .max()
        };

        wide.chain(narrow).max().unwrap_or(GROUND - 1)
    }

    fn place(&mut self, brick: &Brick) {
        if Surface::indexed(brick) {
            for cell in brick.cells() {
                let top = self.heights.entry(cell).or_insert(brick.z().max);
                *top = (*top).max(brick.z().max);
            }
        } else {
            self.wide.push(brick.id);
        }
    }
}

/// Drops every brick as far as it goes.
///
/// Bricks are placed bottom-up, so each one only needs to look at the bricks
/// placed before it: nothing placed later can end up underneath it.
pub fn settle(mut stack: Stack) -> Settled {
    let order = stack
        .iter()
        .sorted_by_key(|brick| (brick.z().min, brick.id))
        .map(|brick| brick.id)
        .collect::<Vec<_>>();

    let mut surface = Surface::default();
    let mut moved = 0;

    for id in order {
        let brick = &stack[id];

        let from = brick.z().min;
        let to = surface.landing(&stack, brick) + 1;

        if from < GROUND {
            tracing::warn!(brick = %id, from, to, "brick starts below the floor, lifting it");
        } else if to > from {
            tracing::warn!(
                brick = %id,
                from,
                to,
                "brick overlaps another in the snapshot, lifting it"
            );
        }

        if to != from {
            stack.get_mut(id).drop_to(to);
            moved += 1;
        }

        surface.place(&stack[id]);
    }

    tracing::debug!(bricks = stack.len(), moved, "settled");

    Settled { stack, moved }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{brick::Span, parse::parse_stack};

    const SAMPLE: &str = "
1,0,1~1,2,1
0,0,2~2,0,2
0,2,3~2,2,3
0,0,4~0,2,4
2,0,5~2,2,5
0,1,6~2,1,6
1,1,8~1,1,9
";

    fn zs(settled: &Settled) -> Vec<(i64, i64)> {
        settled
            .stack()
            .iter()
            .map(|b| (b.z().min, b.z().max))
            .collect()
    }

    #[test]
    fn sample_settles() {
        let settled = settle(parse_stack(SAMPLE).unwrap());

        assert_eq!(
            zs(&settled),
            vec![(1, 1), (2, 2), (2, 2), (3, 3), (3, 3), (4, 4), (5, 6)]
        );
        assert_eq!(settled.moved(), 5);
        assert!(settled.stack().ids().all(|id| settled.is_resting(id)));
    }

    #[test]
    fn resettling_is_a_no_op() {
        let settled = settle(parse_stack(SAMPLE).unwrap());
        let again = settle(settled.clone().into_stack());

        assert_eq!(again.moved(), 0);
        assert_eq!(again.stack(), settled.stack());
    }

    #[test]
    fn input_order_does_not_matter() {
        let settled = settle(parse_stack("0,0,10~0,0,10\n0,0,3~0,0,4").unwrap());

        assert_eq!(zs(&settled), vec![(3, 3), (1, 2)]);
    }

    #[test]
    fn overlapping_input_is_lifted() {
        let settled = settle(parse_stack("0,0,1~2,0,1\n1,0,1~1,0,1").unwrap());

        assert_eq!(settled.stack()[BrickId(1)].z(), Span { min: 2, max: 2 });
    }

    #[test]
    fn extreme_heights_do_not_overflow() {
        let settled = settle(parse_stack("0,0,1~0,0,2147483647\n0,0,2~0,0,2").unwrap());

        let top = i64::from(i32::MAX);
        assert_eq!(settled.stack()[BrickId(0)].z(), Span { min: 1, max: top });
        assert_eq!(
            settled.stack()[BrickId(1)].z(),
            Span {
                min: top + 1,
                max: top + 1
            }
        );
    }

    #[test]
    fn below_floor_is_lifted() {
        let stack = Stack::from_corners([
            ((0, 0, i32::MIN), (0, 0, i32::MIN)),
            ((0, 0, 0), (0, 0, 3)),
        ]);
        let settled = settle(stack);

        assert_eq!(zs(&settled), vec![(1, 1), (2, 5)]);
    }

    #[test]
    fn wide_footprints_are_not_walked() {
        let settled = settle(
            parse_stack(
                "
-2147483648,-2147483648,1~2147483647,2147483647,1
5,5,4~5,6,4
0,0,9~100,100,9
6,6,12~6,6,12
",
            )
            .unwrap(),
        );

        assert_eq!(zs(&settled), vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
        assert!(settled.stack().ids().all(|id| settled.is_resting(id)));
    }
}

use std::ops::Index;

use crate::brick::{Brick, BrickId};

/// Arena of bricks, where every brick's id is its position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack {
    bricks: Vec<Brick>,
}

impl Stack {
    /// Builds an arena from `(corner, corner)` pairs, assigning ids in order.
    pub fn from_corners<I>(corners: I) -> Stack
    where
        I: IntoIterator<Item = ((i32, i32, i32), (i32, i32, i32))>,
    {
        Stack {
            bricks: corners
                .into_iter()
                .enumerate()
                .map(|(i, (a, b))| Brick::new(BrickId(i), a, b))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = BrickId> {
        (0..self.bricks.len()).map(BrickId)
    }

    pub(crate) fn get_mut(&mut self, id: BrickId) -> &mut Brick {
        let len = self.bricks.len();
        self.bricks
            .get_mut(id.0)
            .unwrap_or_else(|| panic!("no brick {id} in a stack of {len}"))
    }
}

impl Index<BrickId> for Stack {
    type Output = Brick;

    fn index(&self, id: BrickId) -> &Brick {
        self.get(id)
            .unwrap_or_else(|| panic!("no brick {id} in a stack of {}", self.len()))
    }
}

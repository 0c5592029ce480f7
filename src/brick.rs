use std::fmt;

/// Position of a brick in the input, and in the [`Stack`](crate::stack::Stack) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BrickId(pub usize);

impl fmt::Display for BrickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Inclusive integer range, always `min <= max`.
///
/// Snapshots use `i32` coordinates; spans are widened so that lengths, areas and
/// levels stacked on top of each other cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub min: i64,
    pub max: i64,
}

impl Span {
    /// Builds a span from two endpoints given in any order.
    pub fn between(a: i32, b: i32) -> Span {
        Span {
            min: i64::from(a.min(b)),
            max: i64::from(a.max(b)),
        }
    }

    pub fn len(&self) -> i64 {
        self.max - self.min + 1
    }

    pub fn contains(&self, v: i64) -> bool {
        self.min <= v && v <= self.max
    }

    pub fn intersects(&self, other: &Span) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    fn shifted_down(&self, dist: i64) -> Span {
        Span {
            min: self.min - dist,
            max: self.max - dist,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    pub id: BrickId,
    pub x: Span,
    pub y: Span,
    pub(crate) z: Span,
}

impl Brick {
    pub fn new(
        id: BrickId,
        (x1, y1, z1): (i32, i32, i32),
        (x2, y2, z2): (i32, i32, i32),
    ) -> Brick {
        Brick {
            id,
            x: Span::between(x1, x2),
            y: Span::between(y1, y2),
            z: Span::between(z1, z2),
        }
    }

    pub fn z(&self) -> Span {
        self.z
    }

    pub fn height(&self) -> i64 {
        self.z.len()
    }

    /// Number of unit columns under the footprint, `None` if it doesn't fit an `i64`.
    pub fn area(&self) -> Option<i64> {
        self.x.len().checked_mul(self.y.len())
    }

    /// Every `(x, y)` column the footprint covers.
    pub fn cells(&self) -> impl Iterator<Item = (i64, i64)> {
        let (x, y) = (self.x, self.y);
        (x.min..=x.max).flat_map(move |cx| (y.min..=y.max).map(move |cy| (cx, cy)))
    }

    /// Whether the two footprints overlap on both horizontal axes.
    pub fn shares_xy(&self, other: &Brick) -> bool {
        self.x.intersects(&other.x) && self.y.intersects(&other.y)
    }

    /// Whether `other` sits directly on top of `self`.
    pub fn supports(&self, other: &Brick) -> bool {
        other.z.min == self.z.max + 1 && self.shares_xy(other)
    }

    pub fn overlaps(&self, other: &Brick) -> bool {
        self.shares_xy(other) && self.z.intersects(&other.z)
    }

    /// Moves the brick so that its bottom is at `zmin`, keeping its height.
    pub(crate) fn drop_to(&mut self, zmin: i64) {
        self.z = self.z.shifted_down(self.z.min - zmin);
    }
}

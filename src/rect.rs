// vim: set ai et ts=4 sw=4 sts=4:
use std::cmp::{min, max};
use std::fmt;

/// An axis-aligned rectangle on the integer grid, with one corner at (x1,y1)
/// and the opposite corner at (x2,y2), where x1 <= x2 and y1 <= y2.
/// Never mutated after construction; cloned freely by value.
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Rect {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

impl Rect {
    /// Make a rectangle with opposing corners (x1,y1) and (x2,y2).
    /// Panics unless x1 <= x2 and y1 <= y2.
    pub fn new(x1: usize, y1: usize, x2: usize, y2: usize) -> Rect {
        assert!(x1 <= x2, "expected x1={} <= x2={}", x1, x2);
        assert!(y1 <= y2, "expected y1={} <= y2={}", y1, y2);
        Rect { x1, y1, x2, y2 }
    }

    pub fn has_area(&self) -> bool {
        self.x1 != self.x2 && self.y1 != self.y2
    }

    pub fn fits_in_grid(&self, grid_size: usize) -> bool {
        self.x2 <= grid_size && self.y2 <= grid_size
    }

    /// True iff the two rectangles share at least one grid cell: both the
    /// x-extents and the y-extents must properly overlap. Extents that only
    /// touch at a boundary coordinate do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        let x_apart = other.x2 <= self.x1 || self.x2 <= other.x1;
        let y_apart = other.y2 <= self.y1 || self.y2 <= other.y1;
        !x_apart && !y_apart
    }

    /// True iff the two rectangles intersect, or share an edge segment of
    /// nonzero length. Touching at a single corner point does not connect.
    pub fn connected(&self, other: &Rect) -> bool {
        if self.intersects(other) {
            return true;
        }
        if self.x2 == other.x1 || self.x1 == other.x2 {
            return spans_interlock(self.y1, self.y2, other.y1, other.y2);
        }
        if self.y2 == other.y1 || self.y1 == other.y2 {
            return spans_interlock(self.x1, self.x2, other.x1, other.x2);
        }
        false
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    pub fn hull(&self, other: &Rect) -> Rect {
        Rect::new(min(self.x1, other.x1), min(self.y1, other.y1),
                  max(self.x2, other.x2), max(self.y2, other.y2))
    }
}

// Extents [a1,a2] and [b1,b2] lie along a shared edge; they interlock when an
// endpoint of one falls strictly inside the other, or one encloses the other
// entirely. Contact at a single endpoint yields false.
fn spans_interlock(a1: usize, a2: usize, b1: usize, b2: usize) -> bool {
    (b1 > a1 && b1 < a2) || (b2 > a1 && b2 < a2) || (b2 >= a2 && b1 <= a1)
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Rect[{},{} -> {},{}]", self.x1, self.y1, self.x2, self.y2)
    }
}

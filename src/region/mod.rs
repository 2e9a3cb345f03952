// vim: set ai et ts=4 sw=4 sts=4:
mod rect_list;
mod cell_grid;

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::rect::Rect;

pub use self::rect_list::RectListRegionSet;
pub use self::cell_grid::CellGridRegionSet;

/// Marker for types usable as region labels: compared by equality, hashed,
/// cloned into query results, and printable for dumps and log lines.
pub trait Label: Clone + Eq + Hash + fmt::Display {}
impl<T: Clone + Eq + Hash + fmt::Display> Label for T {}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum RegionError {
    ZeroArea(Rect),           // rectangle covers no grid cell
    OutOfBounds(Rect, usize), // rectangle leaves the [0, grid_size] square
    LabelIntersection(Rect),  // rectangle shares a cell with another label
    Discontiguous(Rect),      // rectangle touches nothing under its own label
}
impl fmt::Display for RegionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegionError::ZeroArea(rect) =>
                write!(f, "{} covers no grid cell", rect),
            RegionError::OutOfBounds(rect, grid_size) =>
                write!(f, "{} does not fit a grid of size {}", rect, grid_size),
            RegionError::LabelIntersection(rect) =>
                write!(f, "{} overlaps a region carrying a different label", rect),
            RegionError::Discontiguous(rect) =>
                write!(f, "{} does not touch the label's existing region", rect),
        }
    }
}

pub type AddResult = Result<(), RegionError>;

/// A mutable set of labeled regions on a grid_size x grid_size plane of unit
/// cells. Each region is built up from axis-aligned rectangles; regions of
/// different labels never share a cell, and every region stays connected
/// through face-adjacent or overlapping rectangles. Regions only ever grow.
///
/// All implementations validate an insertion in full before committing it:
/// a rejected `add` returns an error and leaves the set exactly as it was.
pub trait RegionSet<L: Label>: fmt::Display {
    /// Dimension of the grid, fixed at construction.
    fn grid_size(&self) -> usize;

    /// Add a rectangle of cells to the region labeled `label`, creating the
    /// region if this is its first rectangle. Rejected with a `RegionError`
    /// if the rectangle has zero area, leaves the grid, intersects a region
    /// with a different label, or fails to connect to the existing region
    /// under `label` (overlap or shared edge; corner contact is not enough).
    fn add(&mut self, label: L, rect: Rect) -> AddResult;

    /// Labels whose regions intersect `rect` in at least one cell. A rect
    /// with zero area owns nothing. The returned set is a fresh container.
    fn owners(&self, rect: Rect) -> HashSet<L>;

    /// Smallest rectangle enclosing the cells labeled `label`, or None if
    /// the label has no cells.
    fn bounds(&self, label: &L) -> Option<Rect>;
}

// Precondition checks shared by every implementation, in the order all of
// them report failures: area before bounds, bounds before anything stateful.
fn validate_rect(rect: &Rect, grid_size: usize) -> AddResult {
    if !rect.has_area() {
        return Err(RegionError::ZeroArea(*rect));
    }
    if !rect.fits_in_grid(grid_size) {
        return Err(RegionError::OutOfBounds(*rect, grid_size));
    }
    Ok(())
}

/// Create an empty region set for a `grid_size` x `grid_size` grid.
pub fn make_region_set<L: Label + 'static>(grid_size: usize) -> Box<dyn RegionSet<L>> {
    Box::new(CellGridRegionSet::new(grid_size))
}

/// Every available representation, as (name, constructor) pairs. Tests run
/// their scenarios against each entry through the trait alone.
pub fn implementations<L: Label + 'static>() -> Vec<(&'static str, fn(usize) -> Box<dyn RegionSet<L>>)> {
    fn make_rect_list<L: Label + 'static>(grid_size: usize) -> Box<dyn RegionSet<L>> {
        Box::new(RectListRegionSet::new(grid_size))
    }
    fn make_cell_grid<L: Label + 'static>(grid_size: usize) -> Box<dyn RegionSet<L>> {
        Box::new(CellGridRegionSet::new(grid_size))
    }
    vec![("rect-list", make_rect_list::<L>), ("cell-grid", make_cell_grid::<L>)]
}

// vim: set ai et ts=4 sw=4 sts=4:
#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt;

use log::debug;

use crate::rect::Rect;
use crate::region::{make_region_set, Label, RegionError, RegionSet};

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum CityError {
    FloorOutOfBounds(usize, usize), // floor index, grid size
    Ungrounded(Rect, usize),        // rejected rectangle, target floor
    Region(RegionError),            // intra-floor rejection
}
impl From<RegionError> for CityError {
    fn from(other: RegionError) -> Self {
        CityError::Region(other)
    }
}
impl fmt::Display for CityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CityError::FloorOutOfBounds(floor, grid_size) =>
                write!(f, "floor {} is outside [0, {})", floor, grid_size),
            CityError::Ungrounded(rect, floor) =>
                write!(f, "{} on floor {} has no support from the floor below", rect, floor),
            CityError::Region(error) =>
                write!(f, "{}", error),
        }
    }
}

pub type ExpandResult = Result<(), CityError>;

/// Footprint and height of one labeled building.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct BuildingBounds {
    /// smallest rectangle containing the building's projection onto the ground
    pub footprint: Rect,
    /// highest occupied floor index plus one
    pub height: usize,
}

/// A mutable set of labeled buildings in a grid_size x grid_size x grid_size
/// grid: one region set per floor, floor 0 resting on the ground. Every
/// building must be grounded, contiguous within each floor it occupies, and
/// disjoint from buildings with other labels; buildings only ever grow.
pub struct City<L: Label + 'static> {
    grid_size: usize,
    floors: Vec<Box<dyn RegionSet<L>>>,
}

impl<L: Label + 'static> City<L> {
    /// Create an empty city with `grid_size` floors of `grid_size` x
    /// `grid_size` cells each.
    pub fn new(grid_size: usize) -> Self {
        let floors = (0..grid_size).map(|_| make_region_set::<L>(grid_size))
                                   .collect();
        let city = City { grid_size, floors };
        city.check_rep();
        city
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    fn whole_grid(&self) -> Rect {
        Rect::new(0, 0, self.grid_size, self.grid_size)
    }

    // unit cells of `rect` that lie on the grid
    fn cells_of(&self, rect: &Rect) -> Vec<Rect> {
        let mut result = Vec::new();
        for x in rect.x1..rect.x2 {
            for y in rect.y1..rect.y2 {
                if x < self.grid_size && y < self.grid_size {
                    result.push(Rect::new(x, y, x + 1, y + 1));
                }
            }
        }
        result
    }

    // unit cells carrying `label` on `floor`
    fn labeled_cells(&self, floor: usize, label: &L) -> Vec<Rect> {
        self.cells_of(&self.whole_grid())
            .into_iter()
            .filter(|cell| self.floors[floor].owners(*cell).contains(label))
            .collect()
    }

    // A rectangle on a floor above ground is supported when its label is
    // already present somewhere on that floor, or when at least one of its
    // cells carries the label directly below. Growth within a floor then
    // still has to pass that floor's own contiguity rule.
    fn supported(&self, label: &L, floor: usize, rect: &Rect) -> bool {
        if self.floors[floor].owners(self.whole_grid()).contains(label) {
            return true;
        }
        let below = &self.floors[floor - 1];
        self.cells_of(rect).iter().any(|cell| below.owners(*cell).contains(label))
    }

    // Invariant: one floor plane per grid unit, all sized like the city, and
    // every occupied floor above ground shares at least one cell with the
    // same label one floor down.
    fn check_rep(&self) {
        assert!(self.floors.len() == self.grid_size,
                "city must hold one floor plane per grid unit");
        for floor in &self.floors {
            assert!(floor.grid_size() == self.grid_size,
                    "every floor must match the city's grid size");
        }
        for label in self.owners(self.whole_grid()) {
            for floor in 1..self.grid_size {
                let here = self.labeled_cells(floor, &label);
                if here.is_empty() {
                    continue;
                }
                let below = self.labeled_cells(floor - 1, &label);
                let shares = here.iter().any(|cell| below.contains(cell));
                assert!(shares, "building {} does not rest on floor {}", label, floor - 1);
            }
        }
    }

    /// Add a rectangle of cells to `label`'s building on the given floor,
    /// creating the building or a new floor segment if necessary. The floor
    /// must lie in [0, grid_size); above ground the expansion must be
    /// supported (see `CityError::Ungrounded`), and within the floor the
    /// usual region rules apply. A rejected expansion changes nothing.
    pub fn expand(&mut self, label: L, floor: usize, rect: Rect) -> ExpandResult {
        if floor >= self.grid_size {
            return Err(CityError::FloorOutOfBounds(floor, self.grid_size));
        }
        if floor > 0 && !self.supported(&label, floor, &rect) {
            return Err(CityError::Ungrounded(rect, floor));
        }
        self.floors[floor].add(label.clone(), rect)?;
        debug!("expanded {} on floor {} with {}", label, floor, rect);
        self.check_rep();
        Ok(())
    }

    /// Labels of buildings whose projections onto the ground plane intersect
    /// `rect` in at least one cell, across all floors.
    pub fn owners(&self, rect: Rect) -> HashSet<L> {
        let mut result = HashSet::new();
        for floor in &self.floors {
            for label in floor.owners(rect) {
                result.insert(label);
            }
        }
        result
    }

    /// Labels owning at least one cell of `rect` on the given floor alone;
    /// empty for a floor outside the grid.
    pub fn floor_owners(&self, floor: usize, rect: Rect) -> HashSet<L> {
        match self.floors.get(floor) {
            Some(plane) => plane.owners(rect),
            None        => HashSet::new(),
        }
    }

    /// Footprint and height of the labeled building, or None if no building
    /// with that label exists.
    pub fn bounds(&self, label: &L) -> Option<BuildingBounds> {
        let mut footprint: Option<Rect> = None;
        let mut top_floor = 0;
        for (index, floor) in self.floors.iter().enumerate() {
            if let Some(floor_bounds) = floor.bounds(label) {
                top_floor = index;
                footprint = Some(match footprint {
                    Some(hull) => hull.hull(&floor_bounds),
                    None       => floor_bounds,
                });
            }
        }
        footprint.map(|rect| BuildingBounds { footprint: rect, height: top_floor + 1 })
    }
}

impl<L: Label + 'static> fmt::Display for City<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, floor) in self.floors.iter().enumerate() {
            writeln!(f, "Floor {}:", index)?;
            write!(f, "{}", floor)?;
        }
        Ok(())
    }
}

impl<L: Label + 'static> fmt::Debug for City<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

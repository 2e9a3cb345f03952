// vim: set ai et ts=4 sw=4 sts=4:
use std::collections::HashSet;
use std::fmt;

use super::{validate_rect, AddResult, Label, RegionError, RegionSet};
use crate::rect::Rect;

/// Region set keeping one label slot per unit grid cell, in a flat array.
/// Cells are stored row-major with row 0 at the top of the grid: index i
/// holds the unit cell at x = i % grid_size, y = grid_size - 1 - i / grid_size.
pub struct CellGridRegionSet<L: Label> {
    grid_size: usize,
    cells: Vec<Option<L>>,
}

impl<L: Label> CellGridRegionSet<L> {
    /// Create an empty region set for a `grid_size` x `grid_size` grid.
    pub fn new(grid_size: usize) -> Self {
        let set = CellGridRegionSet {
            grid_size,
            cells: vec![None; grid_size * grid_size],
        };
        set.check_rep();
        set
    }

    // unit rectangle of the cell stored at `index`; only called while the
    // grid has at least one cell
    fn cell_rect(&self, index: usize) -> Rect {
        let row = index / self.grid_size;
        let col = index % self.grid_size;
        let x1 = col;
        let y1 = self.grid_size - 1 - row;
        Rect::new(x1, y1, x1 + 1, y1 + 1)
    }

    // indices of the unit cells that fall entirely inside `rect`; empty for
    // zero-area rectangles
    fn covered_cells(&self, rect: &Rect) -> Vec<usize> {
        (0..self.cells.len())
            .filter(|&index| {
                let cell = self.cell_rect(index);
                cell.x1 >= rect.x1 && cell.x2 <= rect.x2 &&
                cell.y1 >= rect.y1 && cell.y2 <= rect.y2
            })
            .collect()
    }

    // unit rectangles currently carrying `label`
    fn labeled_cells(&self, label: &L) -> Vec<Rect> {
        (0..self.cells.len())
            .filter(|&index| self.cells[index].as_ref() == Some(label))
            .map(|index| self.cell_rect(index))
            .collect()
    }

    // Invariant: the array length matches the grid, and within each label's
    // cell set every cell touches at least one other. Disjointness is
    // structural here: a cell stores at most one label.
    fn check_rep(&self) {
        assert!(self.cells.len() == self.grid_size * self.grid_size,
                "cell array does not cover the grid");
        let mut labels = Vec::new();
        for slot in &self.cells {
            if let Some(label) = slot {
                if !labels.contains(label) {
                    labels.push(label.clone());
                }
            }
        }
        for label in &labels {
            let cells = self.labeled_cells(label);
            if cells.len() < 2 {
                continue;
            }
            for (i, cell) in cells.iter().enumerate() {
                let touches = cells.iter()
                                   .enumerate()
                                   .any(|(j, other)| i != j && cell.connected(other));
                assert!(touches, "region {} is no longer contiguous at {}", label, cell);
            }
        }
    }
}

impl<L: Label> RegionSet<L> for CellGridRegionSet<L> {
    fn grid_size(&self) -> usize {
        self.grid_size
    }

    fn add(&mut self, label: L, rect: Rect) -> AddResult {
        validate_rect(&rect, self.grid_size)?;
        let covered = self.covered_cells(&rect);
        for &index in &covered {
            if let Some(existing) = &self.cells[index] {
                if *existing != label {
                    return Err(RegionError::LabelIntersection(rect));
                }
            }
        }
        let region = self.labeled_cells(&label);
        if !region.is_empty() && !region.iter().any(|cell| cell.connected(&rect)) {
            return Err(RegionError::Discontiguous(rect));
        }
        for &index in &covered {
            self.cells[index] = Some(label.clone());
        }
        self.check_rep();
        Ok(())
    }

    fn owners(&self, rect: Rect) -> HashSet<L> {
        let mut result = HashSet::new();
        for &index in &self.covered_cells(&rect) {
            if let Some(label) = &self.cells[index] {
                result.insert(label.clone());
            }
        }
        result
    }

    fn bounds(&self, label: &L) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for cell in self.labeled_cells(label) {
            result = Some(match result {
                Some(hull) => hull.hull(&cell),
                None       => cell,
            });
        }
        result
    }
}

impl<L: Label> fmt::Display for CellGridRegionSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // one character per cell, top row of the grid first
        for row in 0..self.grid_size {
            for col in 0..self.grid_size {
                match &self.cells[row * self.grid_size + col] {
                    Some(label) => {
                        let text = label.to_string();
                        write!(f, "{}", text.chars().next().unwrap_or('?'))?;
                    }
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

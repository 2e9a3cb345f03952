// vim: set ai et ts=4 sw=4 sts=4:
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::{validate_rect, AddResult, Label, RegionError, RegionSet};
use crate::rect::Rect;

/// Region set keeping, per label, the list of rectangles that were added to
/// it. Queries walk the lists; cells covered by several rectangles of the
/// same label are counted once by construction of the geometry predicates.
pub struct RectListRegionSet<L: Label> {
    grid_size: usize,
    regions: HashMap<L, Vec<Rect>>,
}

impl<L: Label> RectListRegionSet<L> {
    /// Create an empty region set for a `grid_size` x `grid_size` grid.
    pub fn new(grid_size: usize) -> Self {
        let set = RectListRegionSet {
            grid_size,
            regions: HashMap::new(),
        };
        set.check_rep();
        set
    }

    // Invariant: every stored rectangle has area and sits in the grid, no
    // region is empty, regions of different labels are pairwise disjoint,
    // and within a region every rectangle touches at least one other.
    fn check_rep(&self) {
        for (label, rects) in &self.regions {
            assert!(!rects.is_empty(), "region {} lost all its rectangles", label);
            for rect in rects {
                assert!(rect.has_area(), "region {} holds degenerate {}", label, rect);
                assert!(rect.fits_in_grid(self.grid_size),
                        "region {} holds {} outside the grid", label, rect);
            }
        }
        for (label1, rects1) in &self.regions {
            for (label2, rects2) in &self.regions {
                if label1 == label2 {
                    continue;
                }
                for rect1 in rects1 {
                    for rect2 in rects2 {
                        assert!(!rect1.intersects(rect2),
                                "regions {} and {} intersect", label1, label2);
                    }
                }
            }
        }
        for (label, rects) in &self.regions {
            if rects.len() < 2 {
                continue;
            }
            for (i, rect) in rects.iter().enumerate() {
                let touches = rects.iter()
                                   .enumerate()
                                   .any(|(j, other)| i != j && rect.connected(other));
                assert!(touches, "region {} is no longer contiguous at {}", label, rect);
            }
        }
    }
}

impl<L: Label> RegionSet<L> for RectListRegionSet<L> {
    fn grid_size(&self) -> usize {
        self.grid_size
    }

    fn add(&mut self, label: L, rect: Rect) -> AddResult {
        validate_rect(&rect, self.grid_size)?;
        for (other, rects) in &self.regions {
            if *other == label {
                continue;
            }
            if rects.iter().any(|existing| existing.intersects(&rect)) {
                return Err(RegionError::LabelIntersection(rect));
            }
        }
        if let Some(rects) = self.regions.get(&label) {
            if !rects.iter().any(|existing| existing.connected(&rect)) {
                return Err(RegionError::Discontiguous(rect));
            }
        }
        self.regions.entry(label).or_insert_with(Vec::new).push(rect);
        self.check_rep();
        Ok(())
    }

    fn owners(&self, rect: Rect) -> HashSet<L> {
        let mut result = HashSet::new();
        if !rect.has_area() {
            return result;
        }
        for (label, rects) in &self.regions {
            if rects.iter().any(|existing| existing.intersects(&rect)) {
                result.insert(label.clone());
            }
        }
        result
    }

    fn bounds(&self, label: &L) -> Option<Rect> {
        let rects = self.regions.get(label)?;
        let mut iter = rects.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |hull, rect| hull.hull(rect)))
    }
}

impl<L: Label> fmt::Display for RectListRegionSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // map iteration order is arbitrary; sort the rendered lines so the
        // dump is deterministic
        let mut lines = self.regions
                            .iter()
                            .map(|(label, rects)| {
                                let parts = rects.iter()
                                                 .map(|rect| rect.to_string())
                                                 .collect::<Vec<_>>();
                                format!("{}: [{}]", label, parts.join(", "))
                            })
                            .collect::<Vec<_>>();
        lines.sort();
        for line in &lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

// vim: set ai et ts=4 sw=4 sts=4:
//! Labeled regions on a square grid, and cities stacked out of them.
//!
//! A `RegionSet` partitions cells of a grid plane into uniquely labeled,
//! pairwise disjoint, contiguous regions built from axis-aligned rectangles;
//! a `City` stacks one such plane per floor and adds grounding and support
//! rules on top. Every mutation is validated in full before it is committed,
//! and rejections surface as typed errors. Internal invariant checks panic,
//! signalling a bug in this crate rather than bad input.

pub mod rect;
pub mod region;
pub mod city;
pub mod blueprint;
pub mod render;
pub mod util;

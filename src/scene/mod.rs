//! Scene content: the foliage point cloud and the ornament set
//!
//! Both systems precompute a tree-shape position and a scatter position per
//! element at construction time; per-frame work is interpolation only.

mod foliage;
mod ornaments;

pub use foliage::FoliageCloud;
pub use ornaments::{Ornament, OrnamentKind, OrnamentSet};

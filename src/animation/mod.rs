//! Morph animation between the two target shapes
//!
//! One eased progress scalar drives everything: the foliage shader reads it
//! as a uniform, the ornament instances interpolate with it on the CPU.

mod easing;
mod morph;

pub use easing::{ease, Easing};
pub use morph::{MorphAnimation, TreeState};

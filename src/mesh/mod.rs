//! Primitive meshes for instanced ornaments

mod primitives;

pub use primitives::{cube, sphere, Mesh};

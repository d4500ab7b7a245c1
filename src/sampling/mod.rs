//! Procedural point sampling for the two target shapes
//!
//! Every particle and ornament owns exactly two precomputed positions: one
//! inside the tree cone, one inside (or on a shell of) the scatter sphere.
//! Sampling is deterministic from the scene seed so a reload reproduces the
//! same tree.

use crate::math::Vec3;

const TAU: f32 = std::f32::consts::TAU;

/// Linear congruential generator, good enough for decorative placement
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn next(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform value in [0, 1)
    pub fn next_f32(&mut self) -> f32 {
        (self.next() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in [min, max)
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + (max - min) * self.next_f32()
    }
}

/// Random point inside a cone standing on the y axis, apex up.
///
/// Height fraction is uniform; the radius tapers linearly to zero at the top
/// with up to half a unit of outward jitter so the silhouette reads as
/// foliage rather than a hard surface. The result is centered vertically.
pub fn point_in_cone(rng: &mut Lcg, height: f32, base_radius: f32) -> Vec3 {
    let h = rng.next_f32();
    let r = base_radius * (1.0 - h) + rng.next_f32() * 0.5;
    let theta = rng.next_f32() * TAU;

    Vec3::new(
        r * theta.cos(),
        h * height - height / 2.0,
        r * theta.sin(),
    )
}

/// Random point uniformly distributed inside a sphere centered at the origin.
/// Cube-root radius correction keeps density uniform in volume.
pub fn point_in_sphere(rng: &mut Lcg, radius: f32) -> Vec3 {
    let r = radius * rng.next_f32().cbrt();
    spherical_point(rng, r)
}

/// Random point in the outer shell of a sphere, radius in
/// [min_fraction, 1] * radius. Ornaments scatter into the outer half so they
/// stay visually distinct from the foliage cloud.
pub fn point_in_shell(rng: &mut Lcg, radius: f32, min_fraction: f32) -> Vec3 {
    let r = radius * rng.range(min_fraction, 1.0);
    spherical_point(rng, r)
}

fn spherical_point(rng: &mut Lcg, r: f32) -> Vec3 {
    let theta = rng.next_f32() * TAU;
    // acos of a uniform value in [-1, 1] gives a uniform direction
    let phi = (2.0 * rng.next_f32() - 1.0).acos();

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}

/// Random XYZ Euler rotation, each axis in [0, pi)
pub fn euler(rng: &mut Lcg) -> Vec3 {
    Vec3::new(
        rng.next_f32() * std::f32::consts::PI,
        rng.next_f32() * std::f32::consts::PI,
        rng.next_f32() * std::f32::consts::PI,
    )
}

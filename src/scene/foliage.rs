use crate::config::SceneConfig;
use crate::sampling::{point_in_cone, point_in_sphere, Lcg};

/// Static vertex stream for the foliage point cloud.
///
/// The morph itself runs in the vertex shader, so the buffer is built once
/// and never touched again: both target positions and a per-particle random
/// scalar travel as vertex attributes, and the only per-frame inputs are the
/// `u_progress` and `u_time` uniforms.
pub struct FoliageCloud {
    vertex_data: Vec<f32>,
    count: usize,
}

impl FoliageCloud {
    /// tree position (3) + scatter position (3) + random (1)
    pub const FLOATS_PER_PARTICLE: usize = 7;

    pub fn new(config: &SceneConfig, rng: &mut Lcg) -> Self {
        let count = config.particle_count;
        let mut vertex_data = Vec::with_capacity(count * Self::FLOATS_PER_PARTICLE);

        for _ in 0..count {
            let tree = point_in_cone(rng, config.tree_height, config.base_radius);
            let scatter = point_in_sphere(rng, config.scatter_radius);

            vertex_data.extend_from_slice(&tree.to_array());
            vertex_data.extend_from_slice(&scatter.to_array());
            // Drives point size, breathing phase, and the green/gold split
            vertex_data.push(rng.next_f32());
        }

        Self { vertex_data, count }
    }

    pub fn vertex_data(&self) -> &[f32] {
        &self.vertex_data
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.particle_count = 200;
        config
    }

    #[test]
    fn test_stream_length() {
        let config = small_config();
        let cloud = FoliageCloud::new(&config, &mut Lcg::new(config.seed));
        assert_eq!(cloud.count(), 200);
        assert_eq!(
            cloud.vertex_data().len(),
            200 * FoliageCloud::FLOATS_PER_PARTICLE
        );
    }

    #[test]
    fn test_tree_positions_fit_the_cone() {
        let config = small_config();
        let cloud = FoliageCloud::new(&config, &mut Lcg::new(1));
        for chunk in cloud.vertex_data().chunks(FoliageCloud::FLOATS_PER_PARTICLE) {
            let (x, y, z) = (chunk[0], chunk[1], chunk[2]);
            assert!(y.abs() <= config.tree_height / 2.0 + 0.001);
            let h = (y + config.tree_height / 2.0) / config.tree_height;
            let max_r = config.base_radius * (1.0 - h) + 0.5;
            assert!((x * x + z * z).sqrt() <= max_r + 0.001);
        }
    }

    #[test]
    fn test_scatter_positions_fit_the_sphere() {
        let config = small_config();
        let cloud = FoliageCloud::new(&config, &mut Lcg::new(2));
        for chunk in cloud.vertex_data().chunks(FoliageCloud::FLOATS_PER_PARTICLE) {
            let len = (chunk[3] * chunk[3] + chunk[4] * chunk[4] + chunk[5] * chunk[5]).sqrt();
            assert!(len <= config.scatter_radius + 0.001);
        }
    }

    #[test]
    fn test_random_scalar_unit_range() {
        let config = small_config();
        let cloud = FoliageCloud::new(&config, &mut Lcg::new(3));
        for chunk in cloud.vertex_data().chunks(FoliageCloud::FLOATS_PER_PARTICLE) {
            assert!((0.0..1.0).contains(&chunk[6]));
        }
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let config = small_config();
        let a = FoliageCloud::new(&config, &mut Lcg::new(9));
        let b = FoliageCloud::new(&config, &mut Lcg::new(9));
        assert_eq!(a.vertex_data(), b.vertex_data());
    }
}

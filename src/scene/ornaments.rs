use crate::config::SceneConfig;
use crate::math::{Mat4, Vec3};
use crate::sampling::{euler, point_in_cone, point_in_shell, Lcg};

/// Ornament geometry class; decides mesh, scale band, spin, and palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentKind {
    /// Metallic ball, gold or emerald
    Bauble,
    /// Wrapped gift box, mostly red
    Gift,
}

impl OrnamentKind {
    /// Spin rate around x and y, radians per second. Baubles turn briskly,
    /// gifts tumble slowly.
    fn spin(self) -> (f32, f32) {
        match self {
            OrnamentKind::Bauble => (0.5, 0.3),
            OrnamentKind::Gift => (0.2, 0.4),
        }
    }
}

/// One ornament with its two precomputed target positions
#[derive(Debug, Clone)]
pub struct Ornament {
    pub kind: OrnamentKind,
    pub tree_position: Vec3,
    pub scatter_position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
    pub color: Vec3,
}

/// All ornaments, partitioned by kind so each mesh renders in one
/// instanced draw
pub struct OrnamentSet {
    baubles: Vec<Ornament>,
    gifts: Vec<Ornament>,
}

impl OrnamentSet {
    /// model matrix (16) + color (3)
    pub const FLOATS_PER_INSTANCE: usize = 19;

    /// Fraction of the scatter radius ornaments stay outside of
    const SHELL_MIN: f32 = 0.5;
    /// Ornaments sit slightly inside the foliage silhouette
    const TREE_INSET: f32 = 0.85;

    pub fn new(config: &SceneConfig, rng: &mut Lcg) -> Self {
        let mut baubles = Vec::new();
        let mut gifts = Vec::new();
        let palette = &config.palette;

        for _ in 0..config.ornament_count {
            let kind = if rng.next_f32() > 0.6 {
                OrnamentKind::Gift
            } else {
                OrnamentKind::Bauble
            };

            let tree_position =
                point_in_cone(rng, config.tree_height, config.base_radius * Self::TREE_INSET);
            let scatter_position = point_in_shell(rng, config.scatter_radius, Self::SHELL_MIN);
            let rotation = euler(rng);

            let ornament = match kind {
                OrnamentKind::Gift => Ornament {
                    kind,
                    tree_position,
                    scatter_position,
                    rotation,
                    scale: rng.range(0.3, 0.6),
                    color: if rng.next_f32() > 0.15 {
                        palette.gift_red
                    } else {
                        palette.gold
                    },
                },
                OrnamentKind::Bauble => Ornament {
                    kind,
                    tree_position,
                    scatter_position,
                    rotation,
                    scale: rng.range(0.1, 0.25),
                    color: if rng.next_f32() > 0.5 {
                        palette.gold
                    } else {
                        palette.emerald
                    },
                },
            };

            match kind {
                OrnamentKind::Bauble => baubles.push(ornament),
                OrnamentKind::Gift => gifts.push(ornament),
            }
        }

        Self { baubles, gifts }
    }

    pub fn baubles(&self) -> &[Ornament] {
        &self.baubles
    }

    pub fn gifts(&self) -> &[Ornament] {
        &self.gifts
    }

    pub fn total(&self) -> usize {
        self.baubles.len() + self.gifts.len()
    }

    /// Per-frame instance stream for one kind: lerp scatter -> tree by the
    /// eased progress, advance the idle spin, compose the model matrix
    pub fn instance_data(&self, kind: OrnamentKind, eased: f32, time: f32) -> Vec<f32> {
        let ornaments = match kind {
            OrnamentKind::Bauble => &self.baubles,
            OrnamentKind::Gift => &self.gifts,
        };
        let (spin_x, spin_y) = kind.spin();

        let mut data = Vec::with_capacity(ornaments.len() * Self::FLOATS_PER_INSTANCE);

        for o in ornaments {
            let position = o.scatter_position.lerp(&o.tree_position, eased);
            let rotation = Vec3::new(
                o.rotation.x + time * spin_x,
                o.rotation.y + time * spin_y,
                o.rotation.z,
            );
            let model = Mat4::compose(position, rotation, o.scale);

            data.extend_from_slice(model.as_slice());
            data.extend_from_slice(&o.color.to_array());
        }

        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(seed: u32) -> (SceneConfig, OrnamentSet) {
        let config = SceneConfig::default();
        let set = OrnamentSet::new(&config, &mut Lcg::new(seed));
        (config, set)
    }

    #[test]
    fn test_all_ornaments_accounted_for() {
        let (config, set) = build(11);
        assert_eq!(set.total(), config.ornament_count);
    }

    #[test]
    fn test_kind_split_roughly_sixty_forty() {
        let (config, set) = build(12);
        let bauble_fraction = set.baubles().len() as f32 / config.ornament_count as f32;
        assert!(
            (bauble_fraction - 0.6).abs() < 0.08,
            "bauble fraction {}",
            bauble_fraction
        );
    }

    #[test]
    fn test_scale_bands() {
        let (_, set) = build(13);
        for b in set.baubles() {
            assert!(b.scale >= 0.1 && b.scale <= 0.25);
        }
        for g in set.gifts() {
            assert!(g.scale >= 0.3 && g.scale <= 0.6);
        }
    }

    #[test]
    fn test_tree_positions_pulled_inside_silhouette() {
        let (config, set) = build(14);
        let inset_base = config.base_radius * OrnamentSet::TREE_INSET;
        for o in set.baubles().iter().chain(set.gifts()) {
            let p = o.tree_position;
            let h = (p.y + config.tree_height / 2.0) / config.tree_height;
            let max_r = inset_base * (1.0 - h) + 0.5;
            assert!((p.x * p.x + p.z * p.z).sqrt() <= max_r + 0.001);
        }
    }

    #[test]
    fn test_scatter_positions_in_outer_shell() {
        let (config, set) = build(15);
        for o in set.baubles().iter().chain(set.gifts()) {
            let len = o.scatter_position.length();
            assert!(len >= config.scatter_radius * OrnamentSet::SHELL_MIN - 0.001);
            assert!(len <= config.scatter_radius + 0.001);
        }
    }

    #[test]
    fn test_instance_stream_length() {
        let (_, set) = build(16);
        let data = set.instance_data(OrnamentKind::Bauble, 0.5, 1.0);
        assert_eq!(
            data.len(),
            set.baubles().len() * OrnamentSet::FLOATS_PER_INSTANCE
        );
    }

    #[test]
    fn test_instance_translation_follows_eased_progress() {
        let (_, set) = build(17);
        let first = &set.gifts()[0];

        // Column-major model matrix: translation sits at indices 12..15
        let at = |eased: f32| {
            let data = set.instance_data(OrnamentKind::Gift, eased, 0.0);
            Vec3::new(data[12], data[13], data[14])
        };

        let scattered = at(0.0);
        let gathered = at(1.0);
        let halfway = at(0.5);

        assert!((scattered - first.scatter_position).length() < 0.001);
        assert!((gathered - first.tree_position).length() < 0.001);
        let expected = first.scatter_position.lerp(&first.tree_position, 0.5);
        assert!((halfway - expected).length() < 0.001);
    }

    #[test]
    fn test_spin_advances_with_time() {
        let (_, set) = build(18);
        let a = set.instance_data(OrnamentKind::Bauble, 1.0, 0.0);
        let b = set.instance_data(OrnamentKind::Bauble, 1.0, 2.0);
        // Same translation, different rotation block
        assert_eq!(a[12], b[12]);
        assert_eq!(a[13], b[13]);
        assert_ne!(a[0], b[0]);
    }

    #[test]
    fn test_gift_palette_is_mostly_red() {
        let (config, set) = build(19);
        let red = config.palette.gift_red;
        let red_count = set.gifts().iter().filter(|g| g.color == red).count();
        let fraction = red_count as f32 / set.gifts().len() as f32;
        assert!(fraction > 0.7, "red fraction {}", fraction);
    }

    #[test]
    fn test_bauble_palette_gold_or_emerald() {
        let (config, set) = build(20);
        for b in set.baubles() {
            assert!(b.color == config.palette.gold || b.color == config.palette.emerald);
        }
    }
}

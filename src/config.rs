//! Scene configuration
//!
//! The engine ships sensible defaults (the exhibition look) but the host can
//! override everything from a YAML document before the scene is built.

use serde::Deserialize;

use crate::math::Vec3;

/// YAML input format
#[derive(Debug, Deserialize)]
struct ConfigInput {
    #[serde(default)]
    scene: SceneInput,
    #[serde(default)]
    palette: PaletteInput,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SceneInput {
    particle_count: usize,
    ornament_count: usize,
    tree_height: f32,
    base_radius: f32,
    scatter_radius: f32,
    morph_seconds: f32,
    seed: u32,
}

impl Default for SceneInput {
    fn default() -> Self {
        Self {
            particle_count: 15000,
            ornament_count: 600,
            tree_height: 14.0,
            base_radius: 5.5,
            scatter_radius: 25.0,
            morph_seconds: 1.5,
            seed: 2024,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct PaletteInput {
    emerald_deep: String,
    emerald: String,
    gold: String,
    gold_pale: String,
    gift_red: String,
    background: String,
}

impl Default for PaletteInput {
    fn default() -> Self {
        Self {
            emerald_deep: "#022b1c".to_string(),
            emerald: "#005c3e".to_string(),
            gold: "#D4AF37".to_string(),
            gold_pale: "#F9E5BC".to_string(),
            gift_red: "#8a1c26".to_string(),
            background: "#000502".to_string(),
        }
    }
}

/// Resolved color palette as linear-ish RGB
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub emerald_deep: Vec3,
    pub emerald: Vec3,
    pub gold: Vec3,
    pub gold_pale: Vec3,
    pub gift_red: Vec3,
    pub background: Vec3,
}

/// Validated scene configuration
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub ornament_count: usize,
    pub tree_height: f32,
    pub base_radius: f32,
    pub scatter_radius: f32,
    pub morph_seconds: f32,
    pub seed: u32,
    pub palette: Palette,
}

impl Default for SceneConfig {
    fn default() -> Self {
        ConfigInput {
            scene: SceneInput::default(),
            palette: PaletteInput::default(),
        }
        .resolve()
        .expect("default configuration must be valid")
    }
}

impl SceneConfig {
    /// Parse and validate from a YAML string. Missing fields fall back to the
    /// defaults, so an empty mapping is a legal document.
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let input: ConfigInput = serde_yaml::from_str(yaml)
            .map_err(|e| format!("YAML parse error: {}", e))?;
        input.resolve()
    }
}

impl ConfigInput {
    fn resolve(self) -> Result<SceneConfig, String> {
        let s = self.scene;
        if s.particle_count == 0 {
            return Err("particle_count must be at least 1".to_string());
        }
        if s.ornament_count == 0 {
            return Err("ornament_count must be at least 1".to_string());
        }
        if s.tree_height <= 0.0 || s.base_radius <= 0.0 || s.scatter_radius <= 0.0 {
            return Err("tree dimensions must be positive".to_string());
        }
        if s.morph_seconds <= 0.0 {
            return Err("morph_seconds must be positive".to_string());
        }

        let p = self.palette;
        let palette = Palette {
            emerald_deep: Vec3::from_hex(&p.emerald_deep)?,
            emerald: Vec3::from_hex(&p.emerald)?,
            gold: Vec3::from_hex(&p.gold)?,
            gold_pale: Vec3::from_hex(&p.gold_pale)?,
            gift_red: Vec3::from_hex(&p.gift_red)?,
            background: Vec3::from_hex(&p.background)?,
        };

        Ok(SceneConfig {
            particle_count: s.particle_count,
            ornament_count: s.ornament_count,
            tree_height: s.tree_height,
            base_radius: s.base_radius,
            scatter_radius: s.scatter_radius,
            morph_seconds: s.morph_seconds,
            seed: s.seed,
            palette,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SceneConfig::default();
        assert_eq!(config.particle_count, 15000);
        assert_eq!(config.ornament_count, 600);
        assert!((config.tree_height - 14.0).abs() < 0.001);
        assert!((config.base_radius - 5.5).abs() < 0.001);
        assert!((config.scatter_radius - 25.0).abs() < 0.001);
        assert!((config.morph_seconds - 1.5).abs() < 0.001);
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = SceneConfig::from_yaml("{}").unwrap();
        assert_eq!(config.particle_count, 15000);
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
scene:
  particle_count: 500
  morph_seconds: 3.0
"#;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.particle_count, 500);
        assert!((config.morph_seconds - 3.0).abs() < 0.001);
        // Untouched fields keep defaults
        assert_eq!(config.ornament_count, 600);
    }

    #[test]
    fn test_palette_override() {
        let yaml = r##"
palette:
  gold: "#ff0000"
"##;
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert!((config.palette.gold.x - 1.0).abs() < 0.001);
        assert!(config.palette.gold.y.abs() < 0.001);
    }

    #[test]
    fn test_rejects_zero_particles() {
        let err = SceneConfig::from_yaml("scene:\n  particle_count: 0").unwrap_err();
        assert!(err.contains("particle_count"));
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(SceneConfig::from_yaml("scene:\n  tree_height: -1.0").is_err());
        assert!(SceneConfig::from_yaml("scene:\n  morph_seconds: 0.0").is_err());
    }

    #[test]
    fn test_rejects_bad_color() {
        let err = SceneConfig::from_yaml("palette:\n  gold: \"nope\"").unwrap_err();
        assert!(err.contains("hex"));
    }

    #[test]
    fn test_rejects_malformed_yaml() {
        assert!(SceneConfig::from_yaml(": not yaml :").is_err());
    }
}

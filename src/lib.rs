use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

pub mod animation;
pub mod config;
pub mod math;
pub mod mesh;
pub mod render;
pub mod sampling;
pub mod scene;
pub mod visual;

// Re-export the frame analyzer for JavaScript test harnesses
pub use visual::FrameAnalyzer;

use animation::{MorphAnimation, TreeState};
use config::SceneConfig;
use render::RenderPipeline;
use sampling::Lcg;
use scene::{FoliageCloud, OrnamentKind, OrnamentSet};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine state exposed to JavaScript.
///
/// The host owns the canvas, the requestAnimationFrame loop, and the one
/// toggle button; the engine owns everything between the toggle and the
/// pixels.
#[wasm_bindgen]
pub struct SignatureTree {
    pipeline: RenderPipeline,
    ornaments: OrnamentSet,
    morph: MorphAnimation,
    time: f32,
    // Camera orbit state
    camera_distance: f32,
    camera_angle_x: f32,
    camera_angle_y: f32,
    /// Smoothed idle sway offset along x
    sway: f32,
}

#[wasm_bindgen]
impl SignatureTree {
    /// Create an engine with the default exhibition configuration
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<SignatureTree, JsValue> {
        Self::build(canvas, SceneConfig::default())
    }

    /// Create an engine from a YAML configuration string
    #[wasm_bindgen]
    pub fn with_config(canvas: HtmlCanvasElement, yaml: &str) -> Result<SignatureTree, JsValue> {
        let config = SceneConfig::from_yaml(yaml).map_err(|e| JsValue::from_str(&e))?;
        Self::build(canvas, config)
    }

    fn build(canvas: HtmlCanvasElement, config: SceneConfig) -> Result<SignatureTree, JsValue> {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;

        let mut pipeline = RenderPipeline::new(gl, width, height, &config.palette)
            .map_err(|e| JsValue::from_str(&e))?;

        let mut rng = Lcg::new(config.seed);
        let foliage = FoliageCloud::new(&config, &mut rng);
        let ornaments = OrnamentSet::new(&config, &mut rng);

        pipeline
            .upload_foliage(&foliage)
            .map_err(|e| JsValue::from_str(&e))?;
        pipeline
            .upload_ornaments(&mesh::sphere(24, 16), &mesh::cube(), &ornaments)
            .map_err(|e| JsValue::from_str(&e))?;

        web_sys::console::log_1(
            &format!(
                "signature-tree: {} particles, {} ornaments, seed {}",
                foliage.count(),
                ornaments.total(),
                config.seed
            )
            .into(),
        );

        let camera_distance = 35.0f32;
        let camera_height = 2.0f32;

        Ok(Self {
            pipeline,
            ornaments,
            morph: MorphAnimation::new(config.morph_seconds),
            time: 0.0,
            camera_distance,
            camera_angle_x: (camera_height / camera_distance).asin(),
            camera_angle_y: 0.0,
            sway: 0.0,
        })
    }

    /// Update and render a frame; `dt` in seconds
    #[wasm_bindgen]
    pub fn render(&mut self, dt: f32) {
        self.time += dt;

        self.morph.update(dt);
        // Shader applies the cubic ease itself
        self.pipeline.set_morph_progress(self.morph.progress());

        // Ornaments interpolate CPU-side with the eased value
        let eased = self.morph.eased();
        let baubles = self.ornaments.instance_data(OrnamentKind::Bauble, eased, self.time);
        let gifts = self.ornaments.instance_data(OrnamentKind::Gift, eased, self.time);
        self.pipeline.update_instances(OrnamentKind::Bauble, &baubles);
        self.pipeline.update_instances(OrnamentKind::Gift, &gifts);

        // Orbit position plus a slow cinematic sway
        self.sway += ((self.time * 0.1).sin() * 2.0 - self.sway) * 0.01;

        let cos_x = self.camera_angle_x.cos();
        let sin_x = self.camera_angle_x.sin();
        let cos_y = self.camera_angle_y.cos();
        let sin_y = self.camera_angle_y.sin();

        self.pipeline.camera_position = math::Vec3::new(
            self.camera_distance * cos_x * sin_y + self.sway,
            self.camera_distance * sin_x,
            self.camera_distance * cos_x * cos_y,
        );

        self.pipeline.render(self.time);
    }

    /// Flip between the tree shape and the scattered sphere
    #[wasm_bindgen]
    pub fn toggle(&mut self) {
        self.morph.toggle();
    }

    /// Head toward the assembled tree
    #[wasm_bindgen]
    pub fn gather(&mut self) {
        self.morph.set_state(TreeState::TreeShape);
    }

    /// Head toward the scattered sphere
    #[wasm_bindgen]
    pub fn scatter(&mut self) {
        self.morph.set_state(TreeState::Scattered);
    }

    /// Current target shape as a string for the host UI
    #[wasm_bindgen]
    pub fn state(&self) -> String {
        state_label(self.morph.state()).to_string()
    }

    /// Raw morph progress (0.0 = scattered, 1.0 = tree)
    #[wasm_bindgen]
    pub fn progress(&self) -> f32 {
        self.morph.progress()
    }

    /// Jump the morph to an explicit progress value (clamped)
    #[wasm_bindgen]
    pub fn set_progress(&mut self, progress: f32) {
        self.morph.set_progress(progress);
    }

    /// Whether a transition is in flight
    #[wasm_bindgen]
    pub fn is_morphing(&self) -> bool {
        self.morph.is_morphing()
    }

    /// Resize the drawing surface
    #[wasm_bindgen]
    pub fn resize(&mut self, width: i32, height: i32) {
        self.pipeline.resize(width, height);
    }

    /// Orbit the camera
    #[wasm_bindgen]
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        self.camera_angle_y += delta_x * 0.01;
        self.camera_angle_x = (self.camera_angle_x + delta_y * 0.01).clamp(
            -std::f32::consts::FRAC_PI_2 + 0.1,
            std::f32::consts::FRAC_PI_2 - 0.1,
        );
    }

    /// Zoom the camera
    #[wasm_bindgen]
    pub fn zoom(&mut self, delta: f32) {
        self.camera_distance = (self.camera_distance + delta * 0.5).clamp(10.0, 60.0);
    }
}

/// State names the host UI switches button copy on
fn state_label(state: TreeState) -> &'static str {
    match state {
        TreeState::TreeShape => "TREE_SHAPE",
        TreeState::Scattered => "SCATTERED",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_labels() {
        assert_eq!(state_label(TreeState::TreeShape), "TREE_SHAPE");
        assert_eq!(state_label(TreeState::Scattered), "SCATTERED");
    }
}

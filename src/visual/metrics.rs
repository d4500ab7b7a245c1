use wasm_bindgen::prelude::*;

/// Mood metrics computed from a rendered RGBA frame
#[derive(Debug, Clone, Default)]
pub struct FrameMetrics {
    /// Average luminance (0-1)
    pub avg_brightness: f32,
    /// Fraction of near-black pixels (<0.03 luminance), the void between
    /// particles
    pub dark_fraction: f32,
    /// Fraction of bright glow pixels (>0.6 luminance)
    pub glow_coverage: f32,
    /// Fraction of visible pixels in the emerald hue band (90-180 degrees)
    pub emerald_fraction: f32,
    /// Fraction of visible pixels in the warm gold/red band (0-70 degrees)
    pub warm_fraction: f32,
}

/// Analyze raw RGBA pixel data (4 bytes per pixel)
pub fn analyze_frame(pixels: &[u8], width: u32, height: u32) -> FrameMetrics {
    let pixel_count = (width * height) as usize;
    if pixel_count == 0 || pixels.len() < pixel_count * 4 {
        return FrameMetrics::default();
    }

    let mut total_brightness = 0.0f64;
    let mut dark = 0u32;
    let mut glow = 0u32;
    let mut emerald = 0u32;
    let mut warm = 0u32;
    let mut visible = 0u32;

    for i in 0..pixel_count {
        let r = pixels[i * 4] as f32 / 255.0;
        let g = pixels[i * 4 + 1] as f32 / 255.0;
        let b = pixels[i * 4 + 2] as f32 / 255.0;

        let brightness = 0.299 * r + 0.587 * g + 0.114 * b;
        total_brightness += brightness as f64;

        if brightness < 0.03 {
            dark += 1;
        }
        if brightness > 0.6 {
            glow += 1;
        }

        let (h, s, _) = rgb_to_hsv(r, g, b);
        if s > 0.15 && brightness > 0.03 {
            visible += 1;
            if (90.0..180.0).contains(&h) {
                emerald += 1;
            } else if h < 70.0 || h >= 340.0 {
                warm += 1;
            }
        }
    }

    let frac = |n: u32, d: u32| if d > 0 { n as f32 / d as f32 } else { 0.0 };

    FrameMetrics {
        avg_brightness: (total_brightness / pixel_count as f64) as f32,
        dark_fraction: frac(dark, pixel_count as u32),
        glow_coverage: frac(glow, pixel_count as u32),
        emerald_fraction: frac(emerald, visible),
        warm_fraction: frac(warm, visible),
    }
}

/// Thresholds the exhibition look must satisfy
#[derive(Debug, Clone)]
pub struct MoodCriteria {
    /// The scene lives on a near-black stage
    pub min_dark_fraction: f32,
    /// Something must glow
    pub min_glow_coverage: f32,
    /// The colored pixels should lean emerald
    pub min_emerald_fraction: f32,
    /// Screen must not blow out
    pub max_avg_brightness: f32,
}

impl Default for MoodCriteria {
    fn default() -> Self {
        Self {
            min_dark_fraction: 0.4,
            min_glow_coverage: 0.001,
            min_emerald_fraction: 0.3,
            max_avg_brightness: 0.5,
        }
    }
}

impl MoodCriteria {
    /// Returns human-readable failures; empty means the frame passes
    pub fn check(&self, metrics: &FrameMetrics) -> Vec<String> {
        let mut failures = Vec::new();

        if metrics.dark_fraction < self.min_dark_fraction {
            failures.push(format!(
                "Dark fraction {:.3} below minimum {:.3}",
                metrics.dark_fraction, self.min_dark_fraction
            ));
        }
        if metrics.glow_coverage < self.min_glow_coverage {
            failures.push(format!(
                "Glow coverage {:.4} below minimum {:.4}",
                metrics.glow_coverage, self.min_glow_coverage
            ));
        }
        if metrics.emerald_fraction < self.min_emerald_fraction {
            failures.push(format!(
                "Emerald fraction {:.3} below minimum {:.3}",
                metrics.emerald_fraction, self.min_emerald_fraction
            ));
        }
        if metrics.avg_brightness > self.max_avg_brightness {
            failures.push(format!(
                "Average brightness {:.3} above maximum {:.3}",
                metrics.avg_brightness, self.max_avg_brightness
            ));
        }

        failures
    }
}

fn rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta < 0.0001 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * (((b - r) / delta) + 2.0)
    } else {
        60.0 * (((r - g) / delta) + 4.0)
    };

    let h = if h < 0.0 { h + 360.0 } else { h };

    (h, s, v)
}

/// Wasm-facing wrapper returning metrics as JSON for the host test harness
#[wasm_bindgen]
pub struct FrameAnalyzer;

#[wasm_bindgen]
impl FrameAnalyzer {
    #[wasm_bindgen]
    pub fn analyze(pixels: &[u8], width: u32, height: u32) -> String {
        let m = analyze_frame(pixels, width, height);
        format!(
            r#"{{"avgBrightness":{:.4},"darkFraction":{:.4},"glowCoverage":{:.4},"emeraldFraction":{:.4},"warmFraction":{:.4}}}"#,
            m.avg_brightness, m.dark_fraction, m.glow_coverage, m.emerald_fraction, m.warm_fraction
        )
    }
}

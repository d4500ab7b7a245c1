//! Easing functions for the morph transition

/// Easing function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation
    Linear,
    /// Slow start, accelerate
    CubicIn,
    /// Fast start, decelerate
    CubicOut,
    /// Smooth both ways (the morph curve)
    #[default]
    CubicInOut,
    /// Hermite smoothstep
    Smoothstep,
}

/// Apply an easing function to a value t, clamped to [0, 1]
pub fn ease(t: f32, easing: Easing) -> f32 {
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
            }
        }
        Easing::Smoothstep => t * t * (3.0 - 2.0 * t),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 5] = [
        Easing::Linear,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::Smoothstep,
    ];

    #[test]
    fn test_ease_hits_endpoints() {
        for easing in ALL {
            assert!((ease(0.0, easing)).abs() < 0.0001, "{:?} at 0", easing);
            assert!((ease(1.0, easing) - 1.0).abs() < 0.0001, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_ease_monotonic() {
        for easing in ALL {
            let mut prev = 0.0;
            for i in 0..=100 {
                let v = ease(i as f32 / 100.0, easing);
                assert!(v >= prev - 0.0001, "{:?} should be monotonic", easing);
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_in_out_symmetric() {
        let v1 = ease(0.25, Easing::CubicInOut);
        let v2 = ease(0.75, Easing::CubicInOut);
        assert!((v1 + v2 - 1.0).abs() < 0.0001);
        assert!((ease(0.5, Easing::CubicInOut) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_cubic_in_out_matches_shader_formula() {
        // Same curve the foliage vertex shader evaluates
        let t = 0.3f32;
        assert!((ease(t, Easing::CubicInOut) - 4.0 * t * t * t).abs() < 0.0001);
        let t = 0.8f32;
        let expected = 1.0 - (-2.0f32 * t + 2.0).powi(3) / 2.0;
        assert!((ease(t, Easing::CubicInOut) - expected).abs() < 0.0001);
    }

    #[test]
    fn test_ease_clamps_input() {
        assert_eq!(ease(-0.5, Easing::Linear), 0.0);
        assert_eq!(ease(1.5, Easing::Linear), 1.0);
        assert_eq!(ease(2.0, Easing::CubicInOut), 1.0);
    }
}

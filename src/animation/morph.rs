//! The one-dimensional morph stepper
//!
//! The whole animation state of the scene is a single scalar: 0.0 means
//! fully scattered, 1.0 means fully assembled tree. Each frame the scalar
//! moves linearly toward the target shape at `1 / duration` per second and
//! clamps there; easing is applied only when positions are interpolated.

use super::easing::{ease, Easing};

/// The two target configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    /// Particles assembled into the cone
    TreeShape,
    /// Particles dispersed through the scatter sphere
    Scattered,
}

impl TreeState {
    fn target(self) -> f32 {
        match self {
            TreeState::TreeShape => 1.0,
            TreeState::Scattered => 0.0,
        }
    }
}

/// Progress controller for the tree/scatter morph
#[derive(Debug, Clone)]
pub struct MorphAnimation {
    /// Raw progress in [0, 1]; 1.0 is the tree shape
    progress: f32,
    /// Seconds for a full 0 -> 1 transition
    duration: f32,
    /// Shape the progress is heading toward
    state: TreeState,
    easing: Easing,
}

impl MorphAnimation {
    /// Start scattered, heading toward the tree shape, so the first frames
    /// play the gather
    pub fn new(duration: f32) -> Self {
        Self {
            progress: 0.0,
            duration: duration.max(f32::EPSILON),
            state: TreeState::TreeShape,
            easing: Easing::default(),
        }
    }

    /// Flip the target shape mid-flight; progress reverses from its current
    /// value rather than snapping
    pub fn toggle(&mut self) {
        self.state = match self.state {
            TreeState::TreeShape => TreeState::Scattered,
            TreeState::Scattered => TreeState::TreeShape,
        };
    }

    pub fn set_state(&mut self, state: TreeState) {
        self.state = state;
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    /// Advance toward the target, never overshooting it
    pub fn update(&mut self, dt: f32) {
        let target = self.state.target();
        let step = dt.max(0.0) / self.duration;

        if self.progress < target {
            self.progress = (self.progress + step).min(target);
        } else if self.progress > target {
            self.progress = (self.progress - step).max(target);
        }
    }

    /// Raw progress in [0, 1]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Eased progress, the value positions are interpolated by
    pub fn eased(&self) -> f32 {
        ease(self.progress, self.easing)
    }

    /// Jump to an explicit progress value, clamped to [0, 1]
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, 1.0);
    }

    pub fn is_morphing(&self) -> bool {
        (self.progress - self.state.target()).abs() > f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_scattered_heading_to_tree() {
        let anim = MorphAnimation::new(1.5);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.state(), TreeState::TreeShape);
        assert!(anim.is_morphing());
    }

    #[test]
    fn test_linear_approach() {
        let mut anim = MorphAnimation::new(2.0);
        anim.update(1.0);
        assert!((anim.progress() - 0.5).abs() < 0.0001);
        anim.update(0.5);
        assert!((anim.progress() - 0.75).abs() < 0.0001);
    }

    #[test]
    fn test_clamps_at_target() {
        let mut anim = MorphAnimation::new(1.0);
        anim.update(5.0);
        assert_eq!(anim.progress(), 1.0);
        assert!(!anim.is_morphing());

        // Further frames stay put
        anim.update(1.0);
        assert_eq!(anim.progress(), 1.0);
    }

    #[test]
    fn test_toggle_reverses_without_snap() {
        let mut anim = MorphAnimation::new(1.0);
        anim.update(0.6);
        assert!((anim.progress() - 0.6).abs() < 0.0001);

        anim.toggle();
        assert_eq!(anim.state(), TreeState::Scattered);
        anim.update(0.2);
        assert!((anim.progress() - 0.4).abs() < 0.0001);

        anim.update(5.0);
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_morphing());
    }

    #[test]
    fn test_double_toggle_round_trip() {
        let mut anim = MorphAnimation::new(1.0);
        anim.update(10.0);
        anim.toggle();
        anim.toggle();
        assert_eq!(anim.state(), TreeState::TreeShape);
        assert_eq!(anim.progress(), 1.0);
        assert!(!anim.is_morphing());
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut anim = MorphAnimation::new(1.0);
        anim.set_progress(1.7);
        assert_eq!(anim.progress(), 1.0);
        anim.set_progress(-0.3);
        assert_eq!(anim.progress(), 0.0);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let mut anim = MorphAnimation::new(1.0);
        anim.update(0.5);
        let before = anim.progress();
        anim.update(-1.0);
        assert_eq!(anim.progress(), before);
    }

    #[test]
    fn test_eased_stays_in_unit_range() {
        let mut anim = MorphAnimation::new(1.0);
        for _ in 0..30 {
            anim.update(0.05);
            let e = anim.eased();
            assert!((0.0..=1.0).contains(&e));
        }
        assert_eq!(anim.eased(), 1.0);
    }
}

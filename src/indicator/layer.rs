//! Rendering layer owned by layer-driven indicators.
//!
//! A layer is a flat list of circle primitives, each carrying its own
//! keyframed scale animation. Painting code samples `Sublayer::scale_at`
//! with the current frame time; the layer itself holds no clock.

use egui::{Color32, Vec2};

/// Repeating keyframed scale animation for one primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseAnimation {
    /// Length of one cycle in seconds
    pub duration: f64,
    /// Delay before the first cycle starts, in seconds
    pub begin_time: f64,
    /// Normalized key times, ascending, first 0.0 and last 1.0
    pub key_times: [f32; 3],
    /// Scale value at each key time
    pub scales: [f32; 3],
}

impl PulseAnimation {
    /// Returns the scale at `time` seconds since the animation was built.
    pub fn scale_at(&self, time: f64) -> f32 {
        let local = time - self.begin_time;
        if local <= 0.0 || self.duration <= 0.0 {
            return self.scales[0];
        }

        let t = ((local % self.duration) / self.duration) as f32;
        for i in 0..self.key_times.len() - 1 {
            let (k0, k1) = (self.key_times[i], self.key_times[i + 1]);
            if t <= k1 {
                let span = (k1 - k0).max(f32::EPSILON);
                let f = ((t - k0) / span).clamp(0.0, 1.0);
                return self.scales[i] + (self.scales[i + 1] - self.scales[i]) * f;
            }
        }
        self.scales[self.scales.len() - 1]
    }
}

/// A single circle primitive positioned relative to the indicator center.
#[derive(Debug, Clone, PartialEq)]
pub struct Sublayer {
    pub offset: Vec2,
    pub radius: f32,
    pub color: Color32,
    pub animation: PulseAnimation,
}

impl Sublayer {
    /// Returns the effective radius at `time`
    pub fn radius_at(&self, time: f64) -> f32 {
        self.radius * self.animation.scale_at(time)
    }
}

/// Container of animation primitives built by `Indicator::render`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorLayer {
    sublayers: Vec<Sublayer>,
    speed: f32,
}

impl Default for IndicatorLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorLayer {
    pub fn new() -> Self {
        Self {
            sublayers: Vec::new(),
            speed: 1.0,
        }
    }

    pub fn add_sublayer(&mut self, sublayer: Sublayer) {
        self.sublayers.push(sublayer);
    }

    pub fn sublayers(&self) -> &[Sublayer] {
        &self.sublayers
    }

    /// Removes all primitives
    pub fn clear(&mut self) {
        self.sublayers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.sublayers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sublayers.len()
    }

    /// Playback speed multiplier (0.0 freezes the animation)
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Converts wall-clock seconds into layer-local animation time.
    pub fn local_time(&self, time: f64) -> f64 {
        time * f64::from(self.speed)
    }
}

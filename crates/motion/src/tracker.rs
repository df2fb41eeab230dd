use crate::{clamp, elapsed, lerp, sign};

/// An animated joint parameter that chases a slider-driven target at a bounded rate.
///
/// `current` moves toward `lerp(0, maximum, factor / 100)` by at most `speed` per
/// millisecond and never passes it. `real` is the value applied to the joint, which is
/// `current` offset by `minimum`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tracker {
    pub minimum: f64,
    pub maximum: f64,
    pub current: f64,
    pub real: f64,
    pub speed: f64,
}

impl Tracker {
    pub fn new(minimum: f64, maximum: f64, speed: f64) -> Self {
        Self {
            minimum,
            maximum,
            current: 0.0,
            real: -minimum,
            speed,
        }
    }

    /// The value `current` settles on for a factor in `[0, 100]`. Out of range factors are
    /// clamped, and a NaN factor targets wherever the tracker already is.
    pub fn target(&self, factor: f64) -> f64 {
        if factor.is_nan() {
            return self.current;
        }
        lerp(0.0, self.maximum, clamp(factor, 0.0, 100.0) / 100.0)
    }

    /// Advances `current` by one frame of `delta_ms` milliseconds and returns `real`.
    ///
    /// A NaN factor leaves the tracker where it is.
    pub fn update(&mut self, factor: f64, delta_ms: f64) -> f64 {
        let target = self.target(factor);
        let step = sign(target - self.current) * self.speed * elapsed(delta_ms);
        self.current = clamp(self.current + step, self.current, target);
        self.real = self.current - self.minimum;
        self.real
    }

    pub fn at_target(&self, factor: f64) -> bool {
        self.current == self.target(factor)
    }
}

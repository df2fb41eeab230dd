use crate::elapsed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    ApproachingMax,
    ApproachingMin,
}

/// Ping-pongs `current` between `minimum` and `maximum` at `speed` units per millisecond,
/// producing a triangle wave. Used to drive the rig when no one is moving the sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    pub minimum: f64,
    pub maximum: f64,
    pub current: f64,
    pub speed: f64,
    pub phase: Phase,
}

impl Oscillator {
    /// Starts at `minimum`, heading up.
    pub fn new(minimum: f64, maximum: f64, speed: f64) -> Self {
        Self {
            minimum,
            maximum,
            current: minimum,
            speed,
            phase: Phase::ApproachingMax,
        }
    }

    /// The bound the current phase is heading for.
    pub fn bound(&self) -> f64 {
        match self.phase {
            Phase::ApproachingMax => self.maximum,
            Phase::ApproachingMin => self.minimum,
        }
    }

    /// Moves toward the current bound by at most `speed * delta_ms` and flips the phase
    /// once it is reached. Whatever is left of the step after reaching a bound is dropped.
    pub fn update(&mut self, delta_ms: f64) -> f64 {
        let step = self.speed * elapsed(delta_ms);
        let bound = self.bound();
        self.current = match self.phase {
            Phase::ApproachingMax => (self.current + step).min(bound),
            Phase::ApproachingMin => (self.current - step).max(bound),
        };
        if self.current == bound {
            self.phase = match self.phase {
                Phase::ApproachingMax => Phase::ApproachingMin,
                Phase::ApproachingMin => Phase::ApproachingMax,
            };
            log::trace!("oscillator reached {bound}, now {:?}", self.phase);
        }
        self.current
    }
}

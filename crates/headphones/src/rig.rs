use std::f64::consts::PI;

use muffle_motion::Tracker;

use crate::assembly::{Assembly, PartId, Transform};

/// Slider positions for one frame, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intent {
    pub muff_yaw: f64,
    pub muff_tilt: f64,
    pub extension: f64,
}

impl Default for Intent {
    fn default() -> Self {
        Self {
            muff_yaw: 20.0,
            muff_tilt: 50.0,
            extension: 50.0,
        }
    }
}

/// The joint values a tick wrote, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Joints {
    pub muff_yaw: f64,
    pub muff_tilt: f64,
    pub extension: f64,
}

/// Drives the movable joints of an [`Assembly`] from an [`Intent`].
///
/// The host calls [`tick`](Rig::tick) once per frame before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Rig {
    /// Swivel of the cups around the brace.
    pub muff_yaw: Tracker,
    /// Tilt of the cups inside the brace.
    pub muff_tilt: Tracker,
    /// Roll of the side bars, which spreads the band.
    pub extension: Tracker,
}

impl Rig {
    pub fn new() -> Self {
        Self {
            muff_yaw: Tracker::new(20f64.to_radians(), 110f64.to_radians(), PI / 2000.0),
            muff_tilt: Tracker::new(5f64.to_radians(), 50f64.to_radians(), PI / 2000.0),
            extension: Tracker::new(0.0, 1.5 * PI / 16.0, PI / 5000.0),
        }
    }

    pub fn joints(&self) -> Joints {
        Joints {
            muff_yaw: self.muff_yaw.real,
            muff_tilt: self.muff_tilt.real,
            extension: self.extension.real,
        }
    }

    /// Advances every tracker by `delta_ms`, then writes the joint transforms.
    pub fn tick(&mut self, assembly: &mut Assembly, intent: &Intent, delta_ms: f64) -> Joints {
        self.muff_yaw.update(intent.muff_yaw, delta_ms);
        self.muff_tilt.update(intent.muff_tilt, delta_ms);
        self.extension.update(intent.extension, delta_ms);
        let joints = self.joints();

        let left_brace = assembly.left_muff.brace;
        let right_brace = assembly.right_muff.brace;
        let left_base = assembly.left_muff.base;
        let right_base = assembly.right_muff.base;
        let left_bar = assembly.headband.left;
        let right_bar = assembly.headband.right;

        apply(assembly, left_brace, |t| t.rotation.y = joints.muff_yaw);
        apply(assembly, right_brace, |t| t.rotation.y = -joints.muff_yaw);
        apply(assembly, left_base, |t| t.rotation.x = joints.muff_tilt);
        apply(assembly, right_base, |t| t.rotation.x = joints.muff_tilt);
        apply(assembly, left_bar, |t| t.rotation.z = joints.extension);
        apply(assembly, right_bar, |t| t.rotation.z = -joints.extension);

        log::trace!("tick {delta_ms}ms: {joints:?}");
        joints
    }
}

impl Default for Rig {
    fn default() -> Self {
        Self::new()
    }
}

fn apply(assembly: &mut Assembly, id: PartId, write: impl FnOnce(&mut Transform)) {
    match assembly.transform_mut(id) {
        Some(transform) => write(transform),
        None => log::warn!("rig joint {:?} is not part of the assembly", id),
    }
}

#[cfg(test)]
mod tests {
    use float_eq::assert_float_eq;

    use super::*;

    #[test]
    fn default_intent() {
        let intent = Intent::default();
        assert_eq!(intent.muff_yaw, 20.0);
        assert_eq!(intent.muff_tilt, 50.0);
        assert_eq!(intent.extension, 50.0);
    }

    #[test]
    fn trackers_start_below_their_minimum() {
        let rig = Rig::default();
        let joints = rig.joints();
        assert_float_eq!(joints.muff_yaw, -20f64.to_radians(), abs <= 1e-12);
        assert_float_eq!(joints.muff_tilt, -5f64.to_radians(), abs <= 1e-12);
        assert_eq!(joints.extension, 0.0);
    }

    #[test]
    fn speeds() {
        let rig = Rig::new();
        assert_eq!(rig.muff_yaw.speed, PI / 2000.0);
        assert_eq!(rig.muff_tilt.speed, PI / 2000.0);
        assert_eq!(rig.extension.speed, PI / 5000.0);
        assert_float_eq!(rig.extension.maximum, 1.5 * PI / 16.0, abs <= 1e-12);
    }
}

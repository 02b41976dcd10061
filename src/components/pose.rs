use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::{lerp_vector, POSE_BLEND_DURATION};

pub const LEFT_ARM: &str = "mixamorig_LeftArm";
pub const RIGHT_ARM: &str = "mixamorig_RightArm";
pub const LEFT_UP_LEG: &str = "mixamorig_LeftUpLeg";
pub const RIGHT_UP_LEG: &str = "mixamorig_RightUpLeg";
pub const SPINE: &str = "mixamorig_Spine";

/// Joint rotations of the skydiver rig, keyed by bone name.
///
/// Rotations are (x, y, z) Euler angles in radians.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skeleton {
    pub bones: HashMap<String, Vector3<f64>>,
}

impl Default for Skeleton {
    /// The rig used by the skydiver model, every joint at rest.
    fn default() -> Self {
        Self::with_bones(&[LEFT_ARM, RIGHT_ARM, LEFT_UP_LEG, RIGHT_UP_LEG, SPINE])
    }
}

impl Skeleton {
    pub fn with_bones(names: &[&str]) -> Self {
        Self {
            bones: names
                .iter()
                .map(|name| (name.to_string(), Vector3::zeros()))
                .collect(),
        }
    }

    pub fn bone(&self, name: &str) -> Option<&Vector3<f64>> {
        self.bones.get(name)
    }

    pub fn has_bone(&self, name: &str) -> bool {
        self.bones.contains_key(name)
    }

    pub fn set_bone(&mut self, name: &str, rotation: Vector3<f64>) {
        if let Some(bone) = self.bones.get_mut(name) {
            *bone = rotation;
        }
    }

    pub fn reset(&mut self) {
        for rotation in self.bones.values_mut() {
            *rotation = Vector3::zeros();
        }
    }
}

/// Timed blend of the whole-body orientation toward a target.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyRotationBlend {
    pub start: Vector3<f64>,
    pub target: Vector3<f64>,
    /// Time since the blend started [s]
    pub timer: f64,
    /// Blend length [s]
    pub duration: f64,
    pub active: bool,
}

impl Default for BodyRotationBlend {
    fn default() -> Self {
        Self {
            start: Vector3::zeros(),
            target: Vector3::zeros(),
            timer: 0.0,
            duration: POSE_BLEND_DURATION,
            active: false,
        }
    }
}

impl BodyRotationBlend {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    /// Restart the blend from `start` toward `target`.
    pub fn begin(&mut self, start: Vector3<f64>, target: Vector3<f64>) {
        self.start = start;
        self.target = target;
        self.timer = 0.0;
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.timer = 0.0;
        self.active = false;
    }

    /// Advance the blend and return the interpolated rotation, or `None`
    /// when no blend is running.
    pub fn advance(&mut self, dt: f64) -> Option<Vector3<f64>> {
        if !self.active {
            return None;
        }

        self.timer += dt.max(0.0);
        let t = if self.duration > 0.0 {
            (self.timer / self.duration).min(1.0)
        } else {
            1.0
        };

        if t >= 1.0 {
            self.active = false;
        }
        Some(lerp_vector(&self.start, &self.target, t))
    }
}

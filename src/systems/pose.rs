use bevy::prelude::*;
use nalgebra::Vector3;
use std::f64::consts::{FRAC_PI_2, PI};

use crate::components::pose::{LEFT_ARM, LEFT_UP_LEG, RIGHT_ARM, RIGHT_UP_LEG, SPINE};
use crate::components::{BodyRotationBlend, KinematicState, Skeleton};
use crate::utils::PoseError;

/// Body poses triggered by drop events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoseKind {
    /// Belly-to-earth arch after leaving the carrier.
    Freefall,
    /// Upright, hands on the toggles, once the canopy is open.
    Parachute,
}

impl PoseKind {
    /// Whole-body orientation the pose blends toward [rad].
    pub fn body_rotation(&self) -> Vector3<f64> {
        match self {
            PoseKind::Freefall => Vector3::new(FRAC_PI_2, 0.0, 0.0),
            PoseKind::Parachute => Vector3::zeros(),
        }
    }
}

/// Set joint rotations for `kind`, with a small sway derived from `time` [s].
///
/// Arms and upper legs are required; the spine is optional. When a
/// required bone is missing the skeleton is left untouched.
pub fn apply_pose(skeleton: &mut Skeleton, kind: PoseKind, time: f64) -> Result<(), PoseError> {
    if let Some(missing) = [LEFT_ARM, RIGHT_ARM, LEFT_UP_LEG, RIGHT_UP_LEG]
        .into_iter()
        .find(|name| !skeleton.has_bone(name))
    {
        return Err(PoseError::MissingBone(missing.to_string()));
    }

    match kind {
        PoseKind::Freefall => {
            let sway = (time * 3.0).sin() * 0.1;

            skeleton.set_bone(LEFT_ARM, Vector3::new(-PI / 4.0, 0.0, PI / 8.0 + sway));
            skeleton.set_bone(RIGHT_ARM, Vector3::new(-PI / 4.0, 0.0, -PI / 8.0 - sway));
            skeleton.set_bone(LEFT_UP_LEG, Vector3::new(PI / 8.0, 0.0, 0.0));
            skeleton.set_bone(RIGHT_UP_LEG, Vector3::new(PI / 8.0, 0.0, 0.0));

            // Only the arch; the spine keeps its other axes.
            if let Some(spine) = skeleton.bones.get_mut(SPINE) {
                spine.x = -PI / 12.0;
            }
        }
        PoseKind::Parachute => {
            let sway = (time * 2.0).sin() * 0.05;

            skeleton.set_bone(LEFT_ARM, Vector3::new(-PI / 2.5, 0.0, -PI / 8.0 + sway));
            skeleton.set_bone(RIGHT_ARM, Vector3::new(-PI / 2.5, 0.0, PI / 8.0 + sway));
            skeleton.set_bone(LEFT_UP_LEG, Vector3::new(PI / 10.0, 0.0, 0.0));
            skeleton.set_bone(RIGHT_UP_LEG, Vector3::new(PI / 10.0, 0.0, 0.0));
            skeleton.set_bone(SPINE, Vector3::new(-PI / 18.0 + sway, 0.0, 0.0));
        }
    }

    Ok(())
}

/// Start the body blend for `kind` and pose the joints.
///
/// The blend starts even if the joints cannot be posed.
pub fn trigger_pose(
    kind: PoseKind,
    state: &KinematicState,
    skeleton: &mut Skeleton,
    blend: &mut BodyRotationBlend,
    time: f64,
) {
    blend.begin(state.rotation, kind.body_rotation());

    if let Err(e) = apply_pose(skeleton, kind, time) {
        warn!("Skipping {:?} pose: {}", kind, e);
    }
}

/// System interpolating the whole-body orientation of active blends.
pub fn body_blend_system(
    mut query: Query<(&mut KinematicState, &mut BodyRotationBlend)>,
    time: Res<Time>,
) {
    let dt = time.delta_secs_f64();

    for (mut state, mut blend) in query.iter_mut() {
        if let Some(rotation) = blend.advance(dt) {
            state.rotation = rotation;
        }
    }
}

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Marker for the skydiver actor.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Skydiver;

/// The aircraft the skydiver is dropped from.
#[derive(Component, Debug, Clone, Serialize, Deserialize)]
pub struct Carrier {
    /// Position in world space [m]
    pub position: Vector3<f64>,
    /// Release point relative to `position` [m]
    pub release_offset: Vector3<f64>,
}

impl Carrier {
    pub fn release_point(&self) -> Vector3<f64> {
        self.position + self.release_offset
    }
}

/// Kinematic state of a skydiver, advanced once per tick by the integrator.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    /// Position in world space [m], y is up
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Canopy pitch [deg], smoothed toward the target pitch
    pub alpha: f64,

    /// Canopy yaw [deg], smoothed toward the target yaw
    pub beta: f64,

    /// Visual body rotation (x, y, z Euler angles) [rad].
    /// Output only, never fed back into the force model.
    pub rotation: Vector3<f64>,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            alpha: 0.0,
            beta: 0.0,
            rotation: Vector3::zeros(),
        }
    }
}

impl KinematicState {
    /// Create a state at rest at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn height(&self) -> f64 {
        self.position.y
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

/// Where the skydiver is in the drop sequence.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DescentPhase {
    /// Riding in the carrier; physics does not run.
    #[default]
    Aboard,
    Falling,
    Landed,
}

impl DescentPhase {
    /// Whether the skydiver has left the carrier during this descent.
    pub fn is_released(&self) -> bool {
        !matches!(self, DescentPhase::Aboard)
    }
}

use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::{DeploymentState, DescentPhase};

/// Latest force and attitude readout, overwritten every tick.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    /// Gravity force [N]
    pub gravity_force: Vector3<f64>,
    /// Drag force [N]
    pub drag_force: Vector3<f64>,
    /// Lift force [N]
    pub lift_force: Vector3<f64>,
    /// Acceleration used for this tick [m/s^2]
    pub acceleration: Vector3<f64>,
    /// Velocity after the tick [m/s]
    pub velocity: Vector3<f64>,
    /// Position after the tick [m]
    pub position: Vector3<f64>,
    /// Pitch the forces were computed with [deg]
    pub alpha: f64,
    /// Yaw the forces were computed with [deg]
    pub beta: f64,
    pub deployment: DeploymentState,
    pub phase: DescentPhase,
    /// Terminal velocity for the current coefficients [m/s]
    pub terminal_velocity: f64,
    /// Opening shock of the last deployment [N]
    pub shock_force: Option<f64>,
    pub tick: u64,
}

impl Default for Telemetry {
    fn default() -> Self {
        Self {
            gravity_force: Vector3::zeros(),
            drag_force: Vector3::zeros(),
            lift_force: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            velocity: Vector3::zeros(),
            position: Vector3::zeros(),
            alpha: 0.0,
            beta: 0.0,
            deployment: DeploymentState::NotDeployed,
            phase: DescentPhase::Aboard,
            terminal_velocity: 0.0,
            shock_force: None,
            tick: 0,
        }
    }
}

impl Telemetry {
    pub fn height(&self) -> f64 {
        self.position.y
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }
}

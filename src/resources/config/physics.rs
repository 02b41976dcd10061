use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{AIR_DENSITY, DEFAULT_TIMESTEP, GRAVITY, GROUND_LEVEL};

/// Configuration for the flight dynamics integrator
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Integration parameters
    pub timestep: f64,

    // Force parameters
    pub gravity: f64,
    pub air_density: f64,

    // Ground plane, hard stop
    pub ground_level: f64,

    // Attitude response
    pub attitude_smoothing: f64,
    pub pitch_smoothing: f64,

    // Steering drift under canopy
    pub drift_gain: f64,
    pub drift_threshold_deg: f64,
    pub roll_factor: f64,

    /// Upward deceleration used for the canopy opening shock [m/s^2]
    pub deployment_shock_accel: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            gravity: GRAVITY,
            air_density: AIR_DENSITY,
            ground_level: GROUND_LEVEL,
            attitude_smoothing: 2.0,
            pitch_smoothing: 2.0,
            drift_gain: 0.5,
            drift_threshold_deg: 0.1,
            roll_factor: 0.5,
            deployment_shock_accel: 30.0,
        }
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::components::CanopyProfile;
use crate::resources::PhysicsConfig;
use crate::utils::DEFAULT_MASS;

/// Tunable aerodynamic coefficients shared by the simulation.
///
/// `cd`, `area`, `mass` and `parachute_tension` stay strictly positive:
/// updates that would break this are dropped.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AerodynamicParams {
    /// Drag coefficient
    pub cd: f64,
    /// Reference area [m^2]
    pub area: f64,
    /// Mass [kg]
    pub mass: f64,
    /// Canopy tension, scales the canopy profile at deployment
    pub parachute_tension: f64,
    /// Pitch the canopy attitude is smoothed toward [deg]
    pub target_alpha: f64,
    /// Yaw the canopy attitude is smoothed toward [deg]
    pub target_beta: f64,
}

impl Default for AerodynamicParams {
    fn default() -> Self {
        let stowed = CanopyProfile::stowed();
        Self {
            cd: stowed.cd,
            area: stowed.area,
            mass: DEFAULT_MASS,
            parachute_tension: 1.0,
            target_alpha: 0.0,
            target_beta: 0.0,
        }
    }
}

impl AerodynamicParams {
    pub fn profile(&self) -> CanopyProfile {
        CanopyProfile {
            cd: self.cd,
            area: self.area,
        }
    }

    pub fn set_profile(&mut self, profile: CanopyProfile) {
        self.cd = profile.cd;
        self.area = profile.area;
    }

    /// Merge a partial update. Returns the number of fields that changed.
    pub fn apply(&mut self, update: &ParamsUpdate) -> usize {
        let mut applied = 0;

        let mut set_positive = |field: &mut f64, value: Option<f64>| {
            if let Some(v) = value.filter(|v| v.is_finite() && *v > 0.0) {
                *field = v;
                applied += 1;
            }
        };
        set_positive(&mut self.cd, update.cd);
        set_positive(&mut self.area, update.area);
        set_positive(&mut self.mass, update.mass);
        set_positive(&mut self.parachute_tension, update.parachute_tension);

        let mut set_finite = |field: &mut f64, value: Option<f64>| {
            if let Some(v) = value.filter(|v| v.is_finite()) {
                *field = v;
                applied += 1;
            }
        };
        set_finite(&mut self.target_alpha, update.alpha);
        set_finite(&mut self.target_beta, update.beta);

        applied
    }

    /// Fall speed at which drag balances gravity [m/s]
    pub fn terminal_velocity(&self, physics: &PhysicsConfig) -> f64 {
        ((2.0 * self.mass * physics.gravity) / (self.cd * self.area * physics.air_density)).sqrt()
    }

    /// Load on the harness for a given upward deceleration [N]
    pub fn shock_force(&self, upward_accel: f64, physics: &PhysicsConfig) -> f64 {
        self.mass * (physics.gravity + upward_accel)
    }
}

/// Partial update of [`AerodynamicParams`]; absent fields are left alone.
///
/// `alpha` and `beta` update the smoothing targets, not the current attitude.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParamsUpdate {
    #[serde(rename = "Cd", default, skip_serializing_if = "Option::is_none")]
    pub cd: Option<f64>,
    #[serde(rename = "A", default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f64>,
    #[serde(
        rename = "parachuteTension",
        alias = "ParachuteTension",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parachute_tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta: Option<f64>,
}

impl ParamsUpdate {
    pub fn mass(mass: f64) -> Self {
        Self {
            mass: Some(mass),
            ..Default::default()
        }
    }

    /// Steering targets for the canopy attitude [deg].
    pub fn steering(alpha: Option<f64>, beta: Option<f64>) -> Self {
        Self {
            alpha,
            beta,
            ..Default::default()
        }
    }

    /// Read an update from a loosely typed JSON object.
    ///
    /// Only numeric members are taken; anything else is ignored.
    pub fn from_json(value: &Value) -> Self {
        let number = |keys: &[&str]| keys.iter().find_map(|key| value.get(*key)?.as_f64());

        Self {
            cd: number(&["Cd"]),
            area: number(&["A"]),
            mass: number(&["mass"]),
            parachute_tension: number(&["parachuteTension", "ParachuteTension"]),
            alpha: number(&["alpha"]),
            beta: number(&["beta"]),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cd.is_none()
            && self.area.is_none()
            && self.mass.is_none()
            && self.parachute_tension.is_none()
            && self.alpha.is_none()
            && self.beta.is_none()
    }
}

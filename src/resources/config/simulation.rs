use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::{
    aerodynamics::AerodynamicParams, animation::AnimationConfig, carrier::CarrierConfig,
    environment::EnvironmentConfig, physics::PhysicsConfig,
};
use crate::utils::ConfigError;

/// Everything needed to set up a drop, loadable from YAML.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub physics: PhysicsConfig,
    pub aerodynamics: AerodynamicParams,
    pub carrier: CarrierConfig,
    pub environment: EnvironmentConfig,
    pub animation: AnimationConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("physics.timestep", self.physics.timestep),
            ("physics.gravity", self.physics.gravity),
            ("physics.air_density", self.physics.air_density),
            ("aerodynamics.cd", self.aerodynamics.cd),
            ("aerodynamics.area", self.aerodynamics.area),
            ("aerodynamics.mass", self.aerodynamics.mass),
            (
                "aerodynamics.parachute_tension",
                self.aerodynamics.parachute_tension,
            ),
            (
                "animation.pose_blend_duration",
                self.animation.pose_blend_duration,
            ),
        ];

        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if self.carrier.position.y <= self.physics.ground_level {
            return Err(ConfigError::ValidationError(format!(
                "carrier height {} is below ground level {}",
                self.carrier.position.y, self.physics.ground_level
            )));
        }

        Ok(())
    }
}

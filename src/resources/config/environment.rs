use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    pub wind_model_config: WindModelConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindModelConfig {
    Constant {
        velocity: Vector3<f64>,
    },
    /// Slowly varying wind around a base vector; x and y follow a sine,
    /// z a cosine of elapsed time.
    Gusting {
        base: Vector3<f64>,
        amplitude: Vector3<f64>,
        frequency: Vector3<f64>,
    },
}

impl WindModelConfig {
    pub fn calm() -> Self {
        WindModelConfig::Constant {
            velocity: Vector3::zeros(),
        }
    }

    /// A steady 2 m/s easterly with gentle gusts on every axis.
    pub fn gusting_default() -> Self {
        WindModelConfig::Gusting {
            base: Vector3::new(2.0, 0.0, 0.0),
            amplitude: Vector3::new(2.5, 0.5, 1.0),
            frequency: Vector3::new(0.3, 0.1, 0.2),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            wind_model_config: WindModelConfig::calm(),
        }
    }
}

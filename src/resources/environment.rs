use bevy::prelude::*;
use nalgebra::Vector3;

use super::config::environment::{EnvironmentConfig, WindModelConfig};

/// Wind source sampled by the integrator each tick.
pub trait WindModel: Send + Sync {
    /// Wind velocity [m/s] at elapsed simulation time `time` [s].
    fn get_wind(&self, time: f64) -> Vector3<f64>;
}

pub struct ConstantWind {
    velocity: Vector3<f64>,
}

impl ConstantWind {
    pub fn new(velocity: Vector3<f64>) -> Self {
        Self { velocity }
    }
}

impl WindModel for ConstantWind {
    fn get_wind(&self, _time: f64) -> Vector3<f64> {
        self.velocity
    }
}

pub struct GustingWind {
    base: Vector3<f64>,
    amplitude: Vector3<f64>,
    frequency: Vector3<f64>,
}

impl GustingWind {
    pub fn new(base: Vector3<f64>, amplitude: Vector3<f64>, frequency: Vector3<f64>) -> Self {
        Self {
            base,
            amplitude,
            frequency,
        }
    }
}

impl WindModel for GustingWind {
    fn get_wind(&self, time: f64) -> Vector3<f64> {
        Vector3::new(
            self.base.x + (time * self.frequency.x).sin() * self.amplitude.x,
            self.base.y + (time * self.frequency.y).sin() * self.amplitude.y,
            self.base.z + (time * self.frequency.z).cos() * self.amplitude.z,
        )
    }
}

#[derive(Resource)]
pub struct EnvironmentResource {
    wind_model: Box<dyn WindModel>,
}

impl EnvironmentResource {
    pub fn new(config: &EnvironmentConfig) -> Self {
        let wind_model: Box<dyn WindModel> = match &config.wind_model_config {
            WindModelConfig::Constant { velocity } => Box::new(ConstantWind::new(*velocity)),
            WindModelConfig::Gusting {
                base,
                amplitude,
                frequency,
            } => Box::new(GustingWind::new(*base, *amplitude, *frequency)),
        };

        Self { wind_model }
    }

    pub fn get_wind(&self, time: f64) -> Vector3<f64> {
        self.wind_model.get_wind(time)
    }

    /// Replace the wind model with a steady wind.
    pub fn set_constant_wind(&mut self, velocity: Vector3<f64>) {
        self.wind_model = Box::new(ConstantWind::new(velocity));
    }
}

impl Default for EnvironmentResource {
    fn default() -> Self {
        Self::new(&EnvironmentConfig::default())
    }
}

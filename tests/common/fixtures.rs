use nalgebra::Vector3;
use skydive::resources::{EnvironmentConfig, SimulationConfig, WindModelConfig};

/// Carrier height used by the end-to-end scenarios [m]
pub const LOW_CARRIER: f64 = 200.0;

pub fn steady_wind(velocity: Vector3<f64>) -> EnvironmentConfig {
    EnvironmentConfig {
        wind_model_config: WindModelConfig::Constant { velocity },
    }
}

pub fn gusty_config() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.physics.timestep = 0.016;
    config.environment.wind_model_config = WindModelConfig::gusting_default();
    config
}

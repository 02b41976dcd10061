pub mod config;
mod environment;
mod telemetry;

pub use config::{
    aerodynamics::{AerodynamicParams, ParamsUpdate},
    animation::{AnimationClip, AnimationConfig, AnimationLibrary},
    carrier::CarrierConfig,
    environment::{EnvironmentConfig, WindModelConfig},
    physics::PhysicsConfig,
    simulation::SimulationConfig,
};
pub use environment::{ConstantWind, EnvironmentResource, GustingWind, WindModel};
pub use telemetry::Telemetry;

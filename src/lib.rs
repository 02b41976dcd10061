pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use plugins::{EnvironmentPlugin, SkydivePlugin, SkydiveSet};
pub use resources::SimulationConfig;

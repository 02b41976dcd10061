mod environment;
mod events;
mod skydive;
mod staging;

pub use environment::EnvironmentPlugin;
pub use events::{
    ClipFinished, DeployCommand, LandedEvent, ParamsCommand, ReleaseCommand, RestartCommand,
    SetWindCommand,
};
pub use skydive::{SkydivePlugin, SkydiveSet};
pub use staging::{StartupSequencePlugin, StartupStage};

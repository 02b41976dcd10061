use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::CanopyType;
use crate::resources::ParamsUpdate;

/// Drop the skydiver from the carrier.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ReleaseCommand;

/// Open a canopy.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeployCommand {
    pub canopy: CanopyType,
}

/// Partial coefficient update; absent fields are left alone.
#[derive(Event, Debug, Clone, Default)]
pub struct ParamsCommand(pub ParamsUpdate);

/// Replace the wind model with a constant wind [m/s].
#[derive(Event, Debug, Clone, Copy)]
pub struct SetWindCommand(pub Vector3<f64>);

/// Put everything back aboard the carrier.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestartCommand;

/// A `Once` clip reached its end.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipFinished {
    pub entity: Entity,
    pub index: i32,
}

/// The skydiver came to rest on the ground.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandedEvent {
    pub entity: Entity,
}

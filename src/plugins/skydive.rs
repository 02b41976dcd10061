use bevy::prelude::*;

use crate::components::{
    AnimationSelector, BodyRotationBlend, Carrier, ClipPlayer, DeploymentState, DescentPhase,
    KinematicState, Skeleton, Skydiver,
};
use crate::plugins::{
    ClipFinished, DeployCommand, EnvironmentPlugin, LandedEvent, ParamsCommand, ReleaseCommand,
    RestartCommand, SetWindCommand, StartupSequencePlugin, StartupStage,
};
use crate::resources::{SimulationConfig, Telemetry};
use crate::systems::{
    animation_regime_system, body_blend_system, clip_finished_system, clip_playback_system,
    deploy_system, landing_detection_system, params_system, release_system, restart_system,
    skydiver_physics_system, telemetry_system, wind_system,
};

/// Per-tick stages, run in this order every fixed step.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SkydiveSet {
    Commands,
    BodyBlend,
    Integration,
    Animation,
    Telemetry,
}

/// One carrier and one skydiver, from release to landing.
pub struct SkydivePlugin {
    pub config: SimulationConfig,
}

impl SkydivePlugin {
    pub fn new() -> Self {
        Self::with_config(SimulationConfig::default())
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    fn spawn_actors(
        mut commands: Commands,
        config: Res<SimulationConfig>,
        mut telemetry: ResMut<Telemetry>,
    ) {
        let carrier = Carrier {
            position: config.carrier.position,
            release_offset: config.carrier.release_offset,
        };

        commands.spawn((
            Skydiver,
            KinematicState::at_position(carrier.position),
            DescentPhase::Aboard,
            DeploymentState::NotDeployed,
            AnimationSelector::from_config(&config.animation),
            ClipPlayer::default(),
            Skeleton::default(),
            BodyRotationBlend::with_duration(config.animation.pose_blend_duration),
            Name::new("Skydiver"),
        ));

        telemetry.position = carrier.position;
        info!("Carrier holding at height {:.1} m", carrier.position.y);
        commands.spawn((carrier, Name::new("Carrier")));
    }
}

impl Default for SkydivePlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SkydivePlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;

        if !app.is_plugin_added::<StartupSequencePlugin>() {
            app.add_plugins(StartupSequencePlugin);
        }
        if !app.is_plugin_added::<EnvironmentPlugin>() {
            app.add_plugins(EnvironmentPlugin::with_config(config.environment.clone()));
        }

        app.insert_resource(config.clone())
            .insert_resource(config.physics.clone())
            .insert_resource(config.aerodynamics.clone())
            .insert_resource(config.animation.library.clone())
            .init_resource::<Telemetry>();

        app.insert_resource(Time::<Fixed>::from_seconds(config.physics.timestep));

        app.add_event::<ReleaseCommand>()
            .add_event::<DeployCommand>()
            .add_event::<ParamsCommand>()
            .add_event::<SetWindCommand>()
            .add_event::<RestartCommand>()
            .add_event::<ClipFinished>()
            .add_event::<LandedEvent>();

        app.add_systems(
            Startup,
            Self::spawn_actors.in_set(StartupStage::BuildActors),
        );

        app.configure_sets(
            FixedUpdate,
            (
                SkydiveSet::Commands,
                SkydiveSet::BodyBlend,
                SkydiveSet::Integration,
                SkydiveSet::Animation,
                SkydiveSet::Telemetry,
            )
                .chain(),
        );

        app.add_systems(
            FixedUpdate,
            (
                (
                    restart_system,
                    params_system,
                    wind_system,
                    release_system,
                    deploy_system,
                )
                    .chain()
                    .in_set(SkydiveSet::Commands),
                body_blend_system.in_set(SkydiveSet::BodyBlend),
                skydiver_physics_system.in_set(SkydiveSet::Integration),
                (
                    animation_regime_system,
                    clip_playback_system,
                    clip_finished_system,
                )
                    .chain()
                    .in_set(SkydiveSet::Animation),
                (landing_detection_system, telemetry_system)
                    .chain()
                    .in_set(SkydiveSet::Telemetry),
            ),
        );
    }
}

use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AnimationSelector, BodyRotationBlend, Carrier, ClipPlayer, DeploymentState, DescentPhase,
    KinematicState, Skeleton, Skydiver,
};
use crate::plugins::{
    DeployCommand, ParamsCommand, ReleaseCommand, RestartCommand, SetWindCommand,
};
use crate::resources::{
    AerodynamicParams, EnvironmentResource, PhysicsConfig, SimulationConfig, Telemetry,
};
use crate::systems::parachute::{deploy, release};
use crate::systems::pose::{trigger_pose, PoseKind};

type SkydiverQueryData<'a> = (
    &'a mut KinematicState,
    &'a mut DescentPhase,
    &'a mut DeploymentState,
    &'a mut AnimationSelector,
    &'a mut ClipPlayer,
    &'a mut Skeleton,
    &'a mut BodyRotationBlend,
);

/// Restart everything from the carrier before any other command this tick.
pub fn restart_system(
    mut restarts: EventReader<RestartCommand>,
    mut skydivers: Query<SkydiverQueryData<'static>, With<Skydiver>>,
    carriers: Query<&Carrier>,
    config: Res<SimulationConfig>,
    mut params: ResMut<AerodynamicParams>,
    mut environment: ResMut<EnvironmentResource>,
    mut telemetry: ResMut<Telemetry>,
) {
    if restarts.read().count() == 0 {
        return;
    }

    let Ok(carrier) = carriers.get_single() else {
        warn!("Restart ignored: no carrier in the world");
        return;
    };

    *params = config.aerodynamics.clone();
    *environment = EnvironmentResource::new(&config.environment);
    *telemetry = Telemetry::default();

    for (mut state, mut phase, mut deployment, mut selector, mut player, mut skeleton, mut blend) in
        skydivers.iter_mut()
    {
        *state = KinematicState::at_position(carrier.position);
        *phase = DescentPhase::Aboard;
        *deployment = DeploymentState::NotDeployed;
        selector.reset();
        player.stop();
        skeleton.reset();
        blend.stop();
    }
    telemetry.position = carrier.position;

    info!("Simulation restarted at height {:.1} m", carrier.position.y);
}

pub fn params_system(
    mut updates: EventReader<ParamsCommand>,
    mut params: ResMut<AerodynamicParams>,
) {
    for ParamsCommand(update) in updates.read() {
        let applied = params.apply(update);
        if applied == 0 && !update.is_empty() {
            warn!("Ignored parameter update with no valid fields: {:?}", update);
        } else {
            debug!("Applied {} parameter field(s): {:?}", applied, *params);
        }
    }
}

pub fn wind_system(
    mut winds: EventReader<SetWindCommand>,
    mut environment: ResMut<EnvironmentResource>,
) {
    if let Some(SetWindCommand(wind)) = winds.read().last() {
        let wind: Vector3<f64> = *wind;
        if wind.iter().all(|v| v.is_finite()) {
            environment.set_constant_wind(wind);
            info!("Wind set to ({:.1}, {:.1}, {:.1}) m/s", wind.x, wind.y, wind.z);
        } else {
            warn!("Ignored non-finite wind {:?}", wind);
        }
    }
}

pub fn release_system(
    mut releases: EventReader<ReleaseCommand>,
    mut skydivers: Query<SkydiverQueryData<'static>, With<Skydiver>>,
    carriers: Query<&Carrier>,
    time: Res<Time>,
) {
    if releases.read().count() == 0 {
        return;
    }

    let Ok(carrier) = carriers.get_single() else {
        warn!("Release ignored: no carrier in the world");
        return;
    };

    for (mut state, mut phase, _, _, _, mut skeleton, mut blend) in skydivers.iter_mut() {
        if !release(&mut state, &mut phase, carrier) {
            warn!("Release ignored: skydiver already left the carrier");
            continue;
        }

        trigger_pose(
            PoseKind::Freefall,
            &state,
            &mut skeleton,
            &mut blend,
            time.elapsed_secs_f64(),
        );
        info!("Skydiver released at height {:.1} m", state.height());
    }
}

pub fn deploy_system(
    mut deploys: EventReader<DeployCommand>,
    mut skydivers: Query<SkydiverQueryData<'static>, With<Skydiver>>,
    mut params: ResMut<AerodynamicParams>,
    physics: Res<PhysicsConfig>,
    mut telemetry: ResMut<Telemetry>,
    time: Res<Time>,
) {
    for command in deploys.read() {
        for (state, phase, mut deployment, _, _, mut skeleton, mut blend) in skydivers.iter_mut() {
            match deploy(&mut deployment, *phase, command.canopy, &mut params) {
                Ok(profile) => {
                    let shock = params.shock_force(physics.deployment_shock_accel, &physics);
                    telemetry.shock_force = Some(shock);
                    telemetry.deployment = *deployment;

                    trigger_pose(
                        PoseKind::Parachute,
                        &state,
                        &mut skeleton,
                        &mut blend,
                        time.elapsed_secs_f64(),
                    );
                    info!(
                        "{:?} parachute deployed at {:.1} m (Cd {:.2}, A {:.1}), shock {:.0} N",
                        command.canopy,
                        state.height(),
                        profile.cd,
                        profile.area,
                        shock
                    );
                }
                Err(e) => warn!("Deploy {:?} rejected: {}", command.canopy, e),
            }
        }
    }
}

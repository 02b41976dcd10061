use nalgebra::Vector3;
use pretty_assertions::assert_eq;
use skydive::{
    components::{BodyRotationBlend, CanopyType, ClipPlayer, DeploymentState, DescentPhase},
    plugins::{RestartCommand, SetWindCommand},
    resources::{AerodynamicParams, EnvironmentResource},
};

use crate::common::{
    deploy, deploy_at, release, simulate_duration, skydiver_deployment, skydiver_phase,
    skydiver_selector, skydiver_state, TestAppBuilder, LOW_CARRIER,
};

#[test]
fn test_restart_after_deployment_resets_everything() {
    let mut app = TestAppBuilder::new()
        .with_carrier_height(LOW_CARRIER)
        .build();
    release(&mut app);
    deploy_at(&mut app, CanopyType::Lifting, 150.0);
    simulate_duration(&mut app, 5.0);

    app.command(RestartCommand);

    let state = skydiver_state(&mut app.app);
    assert_eq!(state.position, Vector3::new(0.0, LOW_CARRIER, 0.0));
    assert_eq!(state.velocity, Vector3::zeros());
    assert_eq!(state.rotation, Vector3::zeros());
    assert_eq!(skydiver_phase(&mut app.app), DescentPhase::Aboard);
    assert_eq!(skydiver_deployment(&mut app.app), DeploymentState::NotDeployed);
    assert_eq!(skydiver_selector(&mut app.app).regime(), -1);
    assert_eq!(
        app.resource::<AerodynamicParams>(),
        &AerodynamicParams::default()
    );
    assert_eq!(app.telemetry().shock_force, None);
    assert_eq!(app.query_single::<ClipPlayer>().unwrap().current(), None);
    assert!(!app.query_single::<BodyRotationBlend>().unwrap().active);
}

#[test]
fn test_descent_can_be_repeated_after_restart() {
    let mut app = TestAppBuilder::new().build();
    release(&mut app);
    simulate_duration(&mut app, 2.0);
    deploy(&mut app, CanopyType::Circular);

    app.command(RestartCommand);
    app.run_steps(50);
    assert_eq!(
        skydiver_state(&mut app.app).position,
        Vector3::new(0.0, 1000.0, 0.0)
    );

    release(&mut app);
    simulate_duration(&mut app, 2.0);
    deploy(&mut app, CanopyType::Lifting);

    assert_eq!(skydiver_deployment(&mut app.app), DeploymentState::Lifting);
}

#[test]
fn test_restart_restores_configured_wind() {
    let mut app = TestAppBuilder::new().build();

    app.command(SetWindCommand(Vector3::new(8.0, 0.0, 0.0)));
    assert_eq!(
        app.resource::<EnvironmentResource>().get_wind(0.0),
        Vector3::new(8.0, 0.0, 0.0)
    );

    app.command(RestartCommand);
    assert_eq!(
        app.resource::<EnvironmentResource>().get_wind(0.0),
        Vector3::zeros()
    );
}

use approx::assert_relative_eq;
use pretty_assertions::assert_eq;
use serde_json::json;
use skydive::{
    components::{CanopyType, DeploymentState},
    plugins::{DeployCommand, ParamsCommand},
    resources::{AerodynamicParams, ParamsUpdate},
};

use crate::common::{
    deploy, deploy_at, release, simulate_duration, skydiver_deployment, skydiver_state,
    TestAppBuilder, LOW_CARRIER,
};

#[test]
fn test_deploy_before_release_is_rejected() {
    let mut app = TestAppBuilder::new().build();

    deploy(&mut app, CanopyType::Circular);

    assert_eq!(skydiver_deployment(&mut app.app), DeploymentState::NotDeployed);
    assert_eq!(
        app.resource::<AerodynamicParams>(),
        &AerodynamicParams::default()
    );
    assert_eq!(app.telemetry().shock_force, None);
}

#[test]
fn test_circular_deployment_sets_profile_and_shock() {
    let mut app = TestAppBuilder::new().build();
    release(&mut app);
    simulate_duration(&mut app, 3.0);

    deploy(&mut app, CanopyType::Circular);

    let params = app.resource::<AerodynamicParams>();
    assert_relative_eq!(params.cd, 1.75);
    assert_relative_eq!(params.area, 30.0);
    assert_eq!(skydiver_deployment(&mut app.app), DeploymentState::Circular);

    let shock = app.telemetry().shock_force.expect("shock force recorded");
    assert_relative_eq!(shock, 80.0 * (9.81 + 30.0), epsilon = 1e-9);
}

#[test]
fn test_deployment_is_one_way() {
    let mut app = TestAppBuilder::new().build();
    release(&mut app);
    deploy(&mut app, CanopyType::Circular);
    let after_first = app.resource::<AerodynamicParams>().clone();

    deploy(&mut app, CanopyType::Lifting);

    assert_eq!(skydiver_deployment(&mut app.app), DeploymentState::Circular);
    assert_eq!(app.resource::<AerodynamicParams>(), &after_first);
}

#[test]
fn test_tension_scales_next_deployment() {
    let mut app = TestAppBuilder::new().build();
    release(&mut app);

    app.send(ParamsCommand(ParamsUpdate::from_json(
        &json!({ "parachuteTension": 1.2 }),
    )));
    app.command(DeployCommand {
        canopy: CanopyType::Circular,
    });

    let params = app.resource::<AerodynamicParams>();
    assert_relative_eq!(params.cd, 1.75 * 1.2, epsilon = 1e-12);
    assert_relative_eq!(params.area, 30.0 * 1.2, epsilon = 1e-12);
}

#[test]
fn test_partial_update_only_touches_given_fields() {
    let mut app = TestAppBuilder::new().build();

    app.command(ParamsCommand(ParamsUpdate::from_json(&json!({
        "mass": 90,
        "Cd": "fast",
        "A": null,
    }))));

    assert_eq!(
        app.resource::<AerodynamicParams>(),
        &AerodynamicParams {
            mass: 90.0,
            ..Default::default()
        }
    );
}

#[test]
fn test_circular_canopy_descends_slowly() {
    let mut app = TestAppBuilder::new()
        .with_carrier_height(LOW_CARRIER)
        .build();
    release(&mut app);
    deploy_at(&mut app, CanopyType::Circular, 150.0);

    simulate_duration(&mut app, 20.0);

    let expected = app.telemetry().terminal_velocity;
    assert_relative_eq!(expected, 4.94, epsilon = 0.01);
    assert_relative_eq!(-skydiver_state(&mut app.app).velocity.y, expected, epsilon = 0.2);
}

#[test]
fn test_lifting_canopy_glides_forward() {
    let mut app = TestAppBuilder::new()
        .with_carrier_height(LOW_CARRIER)
        .build();
    release(&mut app);
    deploy_at(&mut app, CanopyType::Lifting, 150.0);

    simulate_duration(&mut app, 10.0);

    let state = skydiver_state(&mut app.app);
    assert!(app.telemetry().lift_force.norm() > 0.0);
    assert!(state.position.z > 0.0);
    assert!(state.position.y > -1.5);
}

#[test]
fn test_steering_under_canopy_turns_and_drifts() {
    let mut app = TestAppBuilder::new()
        .with_carrier_height(LOW_CARRIER)
        .build();
    release(&mut app);
    deploy_at(&mut app, CanopyType::Circular, 150.0);

    app.command(ParamsCommand(ParamsUpdate::steering(None, Some(20.0))));
    simulate_duration(&mut app, 3.0);

    let state = skydiver_state(&mut app.app);
    assert_relative_eq!(state.beta, 20.0, epsilon = 0.1);
    assert!(state.velocity.x > 0.0);
    assert!(state.rotation.z < 0.0);
    assert_relative_eq!(app.telemetry().beta, state.beta, epsilon = 0.1);
}

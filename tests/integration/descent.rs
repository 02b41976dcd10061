use approx::assert_relative_eq;
use bevy::prelude::*;
use nalgebra::Vector3;
use skydive::{
    components::DescentPhase,
    plugins::{LandedEvent, ReleaseCommand, SkydiveSet},
    resources::AerodynamicParams,
};

use crate::common::{
    assert_state_valid, gusty_config, release, simulate_duration, skydiver_phase, skydiver_selector,
    skydiver_state, steady_wind, wait_for_condition, TestAppBuilder, LOW_CARRIER,
};

#[derive(Resource, Default)]
struct LandingCount(usize);

fn count_landings(mut events: EventReader<LandedEvent>, mut count: ResMut<LandingCount>) {
    count.0 += events.read().count();
}

#[test]
fn test_skydiver_waits_aboard_until_released() {
    let mut app = TestAppBuilder::new().build();

    app.run_steps(100);

    let state = skydiver_state(&mut app.app);
    assert_eq!(state.position, Vector3::new(0.0, 1000.0, 0.0));
    assert_eq!(state.velocity, Vector3::zeros());
    assert_eq!(skydiver_phase(&mut app.app), DescentPhase::Aboard);
    assert_eq!(app.telemetry().tick, 100);
}

#[test]
fn test_first_tick_after_release() {
    let mut app = TestAppBuilder::new().build();

    release(&mut app);

    let dt = 0.016;
    let state = skydiver_state(&mut app.app);
    assert_eq!(skydiver_phase(&mut app.app), DescentPhase::Falling);
    assert_relative_eq!(state.velocity.y, -9.81 * dt, epsilon = 1e-9);
    assert_relative_eq!(state.position.y, 998.0 - 9.81 * dt * dt, epsilon = 1e-9);

    let telemetry = app.telemetry();
    assert_eq!(telemetry.drag_force, Vector3::zeros());
    assert_relative_eq!(telemetry.gravity_force.y, -80.0 * 9.81, epsilon = 1e-9);
}

#[test]
fn test_second_release_is_ignored() {
    let mut app = TestAppBuilder::new().build();
    release(&mut app);
    simulate_duration(&mut app, 2.0);
    let before = skydiver_state(&mut app.app).position.y;

    app.command(ReleaseCommand);

    // One more tick of falling, no jump back to the carrier.
    assert!(skydiver_state(&mut app.app).position.y < before);
}

#[test]
fn test_free_fall_settles_at_terminal_velocity() {
    let mut app = TestAppBuilder::new().with_carrier_height(4000.0).build();
    release(&mut app);

    simulate_duration(&mut app, 40.0);

    let expected = AerodynamicParams::default().terminal_velocity(&Default::default());
    assert_relative_eq!(expected, 42.9, epsilon = 0.1);
    assert_relative_eq!(skydiver_state(&mut app.app).speed(), expected, epsilon = 0.2);
    assert_relative_eq!(app.telemetry().terminal_velocity, expected, epsilon = 1e-9);
}

#[test]
fn test_landing_without_canopy_stops_at_ground() {
    let mut app = TestAppBuilder::new().with_carrier_height(LOW_CARRIER).build();
    app.app
        .init_resource::<LandingCount>()
        .add_systems(FixedUpdate, count_landings.after(SkydiveSet::Telemetry));

    release(&mut app);
    assert!(wait_for_condition(
        &mut app,
        |app| skydiver_phase(app) == DescentPhase::Landed,
        5_000
    ));

    let state = skydiver_state(&mut app.app);
    assert_eq!(state.position.y, -1.5);
    assert_eq!(state.velocity, Vector3::zeros());

    // Nothing requires a canopy below the release height, so no clip ran.
    assert_eq!(skydiver_selector(&mut app.app).regime(), -1);

    app.run_steps(100);
    assert_eq!(app.resource::<LandingCount>().0, 1);
    assert_eq!(skydiver_state(&mut app.app).position.y, -1.5);
}

#[test]
fn test_steady_wind_carries_skydiver_downwind() {
    let mut app = TestAppBuilder::new()
        .with_environment(steady_wind(Vector3::new(5.0, 0.0, 0.0)))
        .build();
    release(&mut app);

    simulate_duration(&mut app, 5.0);

    let state = skydiver_state(&mut app.app);
    assert!(state.position.x > 0.0);
    assert!(state.velocity.x > 0.0 && state.velocity.x < 5.0);
    assert_relative_eq!(state.position.z, 0.0);
}

#[test]
fn test_gusting_wind_keeps_state_finite() {
    let mut app = TestAppBuilder::new().with_config(gusty_config()).build();
    release(&mut app);

    for _ in 0..10 {
        simulate_duration(&mut app, 1.0);
        assert_state_valid(&skydiver_state(&mut app.app));
    }

    assert!(skydiver_state(&mut app.app).position.x > 0.0);
}

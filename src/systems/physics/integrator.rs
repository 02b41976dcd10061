use crate::components::{DeploymentState, DescentPhase, KinematicState, Skydiver};
use crate::resources::{AerodynamicParams, EnvironmentResource, PhysicsConfig, Telemetry};
use crate::systems::physics::{calculate_forces, ForceBreakdown};
use crate::utils::{deg_to_rad, finite_or_zero, lerp};
use bevy::prelude::*;
use nalgebra::Vector3;

/// Per-tick environmental inputs to the integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvironmentInputs {
    /// Wind velocity [m/s]
    pub wind: Vector3<f64>,
    /// Tick length [s], never negative
    pub dt: f64,
}

impl EnvironmentInputs {
    pub fn new(wind: Vector3<f64>, dt: f64) -> Self {
        Self {
            wind,
            dt: finite_or_zero(dt).max(0.0),
        }
    }

    pub fn calm(dt: f64) -> Self {
        Self::new(Vector3::zeros(), dt)
    }
}

/// What one integration step computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepReport {
    pub forces: ForceBreakdown,
    pub acceleration: Vector3<f64>,
    /// Pitch the forces were computed with [deg]
    pub alpha: f64,
    /// Yaw the forces were computed with [deg]
    pub beta: f64,
    /// The ground clamp stopped the body this tick.
    pub grounded: bool,
}

/// System advancing every released skydiver by one tick.
///
/// Runs in the integration set; the telemetry snapshot is overwritten
/// with this tick's forces.
pub fn skydiver_physics_system(
    mut query: Query<(&mut KinematicState, &DeploymentState, &DescentPhase), With<Skydiver>>,
    params: Res<AerodynamicParams>,
    physics: Res<PhysicsConfig>,
    environment: Res<EnvironmentResource>,
    time: Res<Time>,
    mut telemetry: ResMut<Telemetry>,
) {
    let inputs = EnvironmentInputs::new(
        environment.get_wind(time.elapsed_secs_f64()),
        time.delta_secs_f64(),
    );

    for (mut state, deployment, phase) in query.iter_mut() {
        if !phase.is_released() {
            continue;
        }

        let report = step(&mut state, &inputs, &params, *deployment, &physics);

        telemetry.gravity_force = report.forces.gravity;
        telemetry.drag_force = report.forces.drag;
        telemetry.lift_force = report.forces.lift;
        telemetry.acceleration = report.acceleration;
        telemetry.alpha = report.alpha;
        telemetry.beta = report.beta;
        telemetry.velocity = state.velocity;
        telemetry.position = state.position;
    }
}

/// Advance `state` by one explicit Euler step.
///
/// Velocity is updated first and the new velocity moves the position.
/// There is no sub-stepping, whatever the size of `dt`.
pub fn step(
    state: &mut KinematicState,
    inputs: &EnvironmentInputs,
    params: &AerodynamicParams,
    deployment: DeploymentState,
    physics: &PhysicsConfig,
) -> StepReport {
    let dt = inputs.dt;

    let forces = calculate_forces(state, &inputs.wind, params, deployment, physics);
    let acceleration = forces.net() / params.mass;
    let alpha = state.alpha;
    let beta = state.beta;

    state.velocity += acceleration * dt;
    state.position += state.velocity * dt;

    let grounded = state.position.y <= physics.ground_level;
    if grounded {
        state.position.y = physics.ground_level;
        state.velocity = Vector3::zeros();
    }

    // Steering drift under canopy; a body stopped by the ground stays stopped.
    if deployment.is_deployed() && !grounded && state.beta.abs() > physics.drift_threshold_deg {
        let beta_rad = deg_to_rad(state.beta);
        state.velocity.x += physics.drift_gain * beta_rad.sin() * dt;
        state.rotation.z = -beta_rad * physics.roll_factor;
    }

    let smoothing = dt * physics.attitude_smoothing;
    state.beta = lerp(state.beta, params.target_beta, smoothing);
    state.alpha = lerp(state.alpha, params.target_alpha, smoothing);

    if deployment.is_deployed() {
        state.rotation.x = lerp(
            state.rotation.x,
            deg_to_rad(state.alpha),
            dt * physics.pitch_smoothing,
        );
    }

    StepReport {
        forces,
        acceleration,
        alpha,
        beta,
        grounded,
    }
}

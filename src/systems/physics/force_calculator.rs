use nalgebra::Vector3;

use crate::components::{DeploymentState, KinematicState};
use crate::resources::{AerodynamicParams, PhysicsConfig};
use crate::utils::rotate_x_then_z;

/// Forces acting on the skydiver for one tick, world frame [N].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceBreakdown {
    pub gravity: Vector3<f64>,
    pub drag: Vector3<f64>,
    pub lift: Vector3<f64>,
}

impl ForceBreakdown {
    pub fn net(&self) -> Vector3<f64> {
        self.gravity + self.drag + self.lift
    }
}

/// Weight of the body, pointing down the world y axis.
pub fn gravity_force(mass: f64, gravity: f64) -> Vector3<f64> {
    Vector3::new(0.0, -mass * gravity, 0.0)
}

/// Velocity of the body relative to the surrounding air.
pub fn relative_velocity(velocity: &Vector3<f64>, wind: &Vector3<f64>) -> Vector3<f64> {
    velocity - wind
}

/// Quadratic drag opposing the relative airflow.
pub fn drag_force(
    relative_velocity: &Vector3<f64>,
    params: &AerodynamicParams,
    air_density: f64,
) -> Vector3<f64> {
    let speed = relative_velocity.norm();
    if speed == 0.0 {
        return Vector3::zeros();
    }

    let direction = -relative_velocity / speed;
    let magnitude = 0.5 * air_density * params.cd * params.area * speed * speed;
    direction * magnitude
}

/// Lift of a lifting canopy, driven by the descent rate only.
///
/// The base direction (0, 1, 0.5) is tilted by `alpha` about world X,
/// then by `beta` about world Z.
pub fn lift_force(
    relative_velocity: &Vector3<f64>,
    params: &AerodynamicParams,
    deployment: DeploymentState,
    alpha: f64,
    beta: f64,
    air_density: f64,
) -> Vector3<f64> {
    if !deployment.is_lifting() {
        return Vector3::zeros();
    }

    let descent_rate = -relative_velocity.y;
    if descent_rate <= 0.0 {
        return Vector3::zeros();
    }

    let magnitude = 0.5 * air_density * params.cd * params.area * descent_rate * descent_rate;
    let direction = rotate_x_then_z(&Vector3::new(0.0, 1.0, 0.5).normalize(), alpha, beta);
    direction * magnitude
}

/// All forces on the skydiver for its current state and the given wind.
pub fn calculate_forces(
    state: &KinematicState,
    wind: &Vector3<f64>,
    params: &AerodynamicParams,
    deployment: DeploymentState,
    physics: &PhysicsConfig,
) -> ForceBreakdown {
    let relative = relative_velocity(&state.velocity, wind);

    ForceBreakdown {
        gravity: gravity_force(params.mass, physics.gravity),
        drag: drag_force(&relative, params, physics.air_density),
        lift: lift_force(
            &relative,
            params,
            deployment,
            state.alpha,
            state.beta,
            physics.air_density,
        ),
    }
}

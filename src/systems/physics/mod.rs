mod force_calculator;
mod integrator;

pub use force_calculator::{
    calculate_forces, drag_force, gravity_force, lift_force, relative_velocity, ForceBreakdown,
};
pub use integrator::{skydiver_physics_system, step, EnvironmentInputs, StepReport};

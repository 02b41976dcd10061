use bevy::prelude::*;

use crate::components::{DeploymentState, DescentPhase, KinematicState, Skydiver};
use crate::plugins::LandedEvent;
use crate::resources::{AerodynamicParams, PhysicsConfig, Telemetry};
use crate::utils::LANDING_TOLERANCE;

/// A falling body resting on the ground has landed.
pub fn has_landed(state: &KinematicState, phase: DescentPhase, ground_level: f64) -> bool {
    phase == DescentPhase::Falling
        && state.position.y <= ground_level + LANDING_TOLERANCE
        && state.velocity.y == 0.0
}

pub fn landing_detection_system(
    mut query: Query<(Entity, &KinematicState, &mut DescentPhase), With<Skydiver>>,
    physics: Res<PhysicsConfig>,
    mut landed: EventWriter<LandedEvent>,
) {
    for (entity, state, mut phase) in query.iter_mut() {
        if has_landed(state, *phase, physics.ground_level) {
            *phase = DescentPhase::Landed;
            landed.send(LandedEvent { entity });
            info!(
                "Landing complete at ({:.1}, {:.1}, {:.1})",
                state.position.x, state.position.y, state.position.z
            );
        }
    }
}

/// Fill in the parts of the readout the integrator does not write.
pub fn telemetry_system(
    query: Query<(&DeploymentState, &DescentPhase), With<Skydiver>>,
    params: Res<AerodynamicParams>,
    physics: Res<PhysicsConfig>,
    mut telemetry: ResMut<Telemetry>,
) {
    if let Ok((deployment, phase)) = query.get_single() {
        telemetry.deployment = *deployment;
        telemetry.phase = *phase;
    }

    telemetry.terminal_velocity = params.terminal_velocity(&physics);
    telemetry.tick += 1;

    debug!(
        "tick {} height {:.2} m speed {:.2} m/s drag {:.1} N lift {:.1} N",
        telemetry.tick,
        telemetry.height(),
        telemetry.speed(),
        telemetry.drag_force.norm(),
        telemetry.lift_force.norm()
    );
}

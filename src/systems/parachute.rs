use nalgebra::Vector3;

use crate::components::{
    CanopyProfile, CanopyType, Carrier, DeploymentState, DescentPhase, KinematicState,
};
use crate::resources::AerodynamicParams;
use crate::utils::DeployError;

/// Open a canopy of the given type.
///
/// Only valid once the skydiver has left the carrier and while no canopy
/// is open. On success the deployment state and the `(Cd, A)` pair change
/// together; the new pair is the canopy profile scaled by the current
/// tension. A rejected call changes nothing.
pub fn deploy(
    deployment: &mut DeploymentState,
    phase: DescentPhase,
    canopy: CanopyType,
    params: &mut AerodynamicParams,
) -> Result<CanopyProfile, DeployError> {
    if !phase.is_released() {
        return Err(DeployError::NotReleased);
    }
    if let Some(open) = deployment.canopy() {
        return Err(DeployError::AlreadyDeployed(open));
    }

    let profile = canopy.profile().scaled(params.parachute_tension);
    *deployment = DeploymentState::from(canopy);
    params.set_profile(profile);
    Ok(profile)
}

/// Drop the skydiver from the carrier. Returns `false` if already released.
pub fn release(state: &mut KinematicState, phase: &mut DescentPhase, carrier: &Carrier) -> bool {
    if phase.is_released() {
        return false;
    }

    state.position = carrier.release_point();
    state.velocity = Vector3::zeros();
    *phase = DescentPhase::Falling;
    true
}

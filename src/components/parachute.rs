use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::utils::{CIRCULAR_AREA, CIRCULAR_CD, LIFTING_AREA, LIFTING_CD, STOWED_AREA, STOWED_CD};

/// Canopy types the skydiver can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanopyType {
    /// Round canopy, drag only.
    Circular,
    /// Ram-air canopy producing steerable lift.
    Lifting,
}

impl CanopyType {
    /// Unscaled drag profile of the open canopy.
    pub fn profile(&self) -> CanopyProfile {
        match self {
            CanopyType::Circular => CanopyProfile {
                cd: CIRCULAR_CD,
                area: CIRCULAR_AREA,
            },
            CanopyType::Lifting => CanopyProfile {
                cd: LIFTING_CD,
                area: LIFTING_AREA,
            },
        }
    }
}

/// Drag coefficient and reference area pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanopyProfile {
    pub cd: f64,
    /// Reference area [m^2]
    pub area: f64,
}

impl CanopyProfile {
    /// Profile of the body with no canopy open.
    pub fn stowed() -> Self {
        Self {
            cd: STOWED_CD,
            area: STOWED_AREA,
        }
    }

    /// Both coefficients multiplied by the canopy tension.
    pub fn scaled(&self, tension: f64) -> Self {
        Self {
            cd: self.cd * tension,
            area: self.area * tension,
        }
    }
}

/// Parachute deployment state for one descent.
///
/// Leaving `NotDeployed` is one-way; only a restart clears it.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeploymentState {
    #[default]
    NotDeployed,
    Circular,
    Lifting,
}

impl DeploymentState {
    pub fn is_deployed(&self) -> bool {
        !matches!(self, DeploymentState::NotDeployed)
    }

    pub fn canopy(&self) -> Option<CanopyType> {
        match self {
            DeploymentState::NotDeployed => None,
            DeploymentState::Circular => Some(CanopyType::Circular),
            DeploymentState::Lifting => Some(CanopyType::Lifting),
        }
    }

    pub fn is_lifting(&self) -> bool {
        matches!(self, DeploymentState::Lifting)
    }
}

impl From<CanopyType> for DeploymentState {
    fn from(canopy: CanopyType) -> Self {
        match canopy {
            CanopyType::Circular => DeploymentState::Circular,
            CanopyType::Lifting => DeploymentState::Lifting,
        }
    }
}

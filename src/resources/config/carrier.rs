use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::CARRIER_HEIGHT;

/// Where the carrier hovers and where the skydiver leaves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarrierConfig {
    /// Carrier position in world space [m]
    pub position: Vector3<f64>,
    /// Skydiver release point relative to the carrier [m]
    pub release_offset: Vector3<f64>,
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, CARRIER_HEIGHT, 0.0),
            release_offset: Vector3::new(0.0, -2.0, 0.0),
        }
    }
}

impl CarrierConfig {
    pub fn at_height(height: f64) -> Self {
        Self {
            position: Vector3::new(0.0, height, 0.0),
            ..Default::default()
        }
    }
}

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::AnimationTrigger;
use crate::utils::POSE_BLEND_DURATION;

/// A named motion clip of the skydiver model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    pub name: String,
    /// Clip length [s]
    pub duration: f64,
}

impl AnimationClip {
    pub fn new(name: &str, duration: f64) -> Self {
        Self {
            name: name.to_string(),
            duration,
        }
    }
}

/// Clips available to the clip player, addressed by index.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationLibrary {
    pub clips: Vec<AnimationClip>,
}

impl Default for AnimationLibrary {
    fn default() -> Self {
        Self {
            clips: vec![
                AnimationClip::new("Freefall", 1.0),
                AnimationClip::new("Idle", 2.0),
                AnimationClip::new("JumpDown", 1.2),
            ],
        }
    }
}

impl AnimationLibrary {
    pub fn get(&self, index: i32) -> Option<&AnimationClip> {
        usize::try_from(index)
            .ok()
            .and_then(|index| self.clips.get(index))
    }
}

/// Regime table and pose timing for the skydiver animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Evaluated in order each tick.
    pub triggers: Vec<AnimationTrigger>,
    /// One-shot clip that falls back to `idle_index` when it ends.
    pub jump_index: i32,
    pub idle_index: i32,
    pub library: AnimationLibrary,
    /// Whole-body orientation blend length [s]
    pub pose_blend_duration: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            triggers: vec![
                AnimationTrigger {
                    index: -1,
                    trigger_height: 1000.0,
                    requires_deployment: false,
                },
                AnimationTrigger {
                    index: 2,
                    trigger_height: 5.0,
                    requires_deployment: true,
                },
                AnimationTrigger {
                    index: 1,
                    trigger_height: -1.0,
                    requires_deployment: true,
                },
            ],
            jump_index: 2,
            idle_index: 1,
            library: AnimationLibrary::default(),
            pose_blend_duration: POSE_BLEND_DURATION,
        }
    }
}

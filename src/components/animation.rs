use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::resources::{AnimationConfig, AnimationLibrary};
use crate::utils::AnimationError;

/// Index meaning "no clip selected yet" (the carrier idle regime).
pub const NO_ANIMATION: i32 = -1;

/// A height-keyed entry of the regime table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationTrigger {
    /// Clip index selected by this entry.
    pub index: i32,
    /// Entry is eligible at or below this height [m].
    pub trigger_height: f64,
    /// Entry is skipped until a parachute is deployed.
    pub requires_deployment: bool,
}

/// Maps descent height to an animation regime.
///
/// The regime only moves forward within one descent: a trigger applies
/// when the height is at or below its threshold and its index is strictly
/// greater than the highest index reached so far. The one-shot jump clip
/// falls back to the idle clip through [`AnimationSelector::on_clip_finished`],
/// which changes the active clip but not the regime.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSelector {
    triggers: Vec<AnimationTrigger>,
    jump_index: i32,
    idle_index: i32,
    regime: i32,
    active: i32,
}

impl Default for AnimationSelector {
    fn default() -> Self {
        Self::from_config(&AnimationConfig::default())
    }
}

impl AnimationSelector {
    /// Triggers are evaluated in the given order.
    pub fn new(triggers: Vec<AnimationTrigger>, jump_index: i32, idle_index: i32) -> Self {
        Self {
            triggers,
            jump_index,
            idle_index,
            regime: NO_ANIMATION,
            active: NO_ANIMATION,
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.triggers.clone(), config.jump_index, config.idle_index)
    }

    /// Highest index reached during this descent.
    pub fn regime(&self) -> i32 {
        self.regime
    }

    /// Clip that should currently be playing.
    pub fn active(&self) -> i32 {
        self.active
    }

    pub fn is_one_shot(&self, index: i32) -> bool {
        index == self.jump_index
    }

    /// Select a new clip for the current height, if any trigger fires.
    ///
    /// Returns the index to play. Evaluation stops as soon as the one-shot
    /// jump clip is selected.
    pub fn evaluate(&mut self, height: f64, deployed: bool) -> Option<i32> {
        let mut selected = None;

        for trigger in &self.triggers {
            if trigger.requires_deployment && !deployed {
                continue;
            }

            if height <= trigger.trigger_height && trigger.index > self.regime {
                self.regime = trigger.index;
                self.active = trigger.index;
                selected = Some(trigger.index);

                if trigger.index == self.jump_index {
                    break;
                }
            }
        }

        selected
    }

    /// Completion hook for one-shot clips. Returns the fallback clip to play.
    pub fn on_clip_finished(&mut self, index: i32) -> Option<i32> {
        if index == self.jump_index && self.active == self.jump_index {
            self.active = self.idle_index;
            Some(self.idle_index)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.regime = NO_ANIMATION;
        self.active = NO_ANIMATION;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoopMode {
    Once,
    Repeat,
}

/// The clip currently held by a [`ClipPlayer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveClip {
    pub index: i32,
    pub name: String,
    pub mode: LoopMode,
    /// Playback time [s]
    pub elapsed: f64,
    /// Clip length [s]
    pub duration: f64,
    /// Set once a `Once` clip reaches its end; playback stays clamped there.
    pub finished: bool,
}

/// Plays one clip at a time, like a mixer that stops every other action
/// before starting a new one.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ClipPlayer {
    current: Option<ActiveClip>,
}

impl ClipPlayer {
    pub fn current(&self) -> Option<&ActiveClip> {
        self.current.as_ref()
    }

    pub fn current_index(&self) -> Option<i32> {
        self.current.as_ref().map(|clip| clip.index)
    }

    /// Start `index` from the beginning, replacing whatever was playing.
    ///
    /// An index missing from the library leaves the player untouched.
    pub fn play(
        &mut self,
        index: i32,
        mode: LoopMode,
        library: &AnimationLibrary,
    ) -> Result<(), AnimationError> {
        let clip = library.get(index).ok_or(AnimationError::UnknownClip(index))?;

        self.current = Some(ActiveClip {
            index,
            name: clip.name.clone(),
            mode,
            elapsed: 0.0,
            duration: clip.duration,
            finished: false,
        });
        Ok(())
    }

    pub fn stop(&mut self) {
        self.current = None;
    }

    /// Advance playback by `dt` seconds.
    ///
    /// Returns the clip index when a `Once` clip completes during this call.
    pub fn advance(&mut self, dt: f64) -> Option<i32> {
        let clip = self.current.as_mut()?;
        let dt = dt.max(0.0);

        match clip.mode {
            LoopMode::Repeat => {
                clip.elapsed += dt;
                if clip.duration > 0.0 {
                    clip.elapsed %= clip.duration;
                }
                None
            }
            LoopMode::Once => {
                if clip.finished {
                    return None;
                }
                clip.elapsed = (clip.elapsed + dt).min(clip.duration);
                if clip.elapsed >= clip.duration {
                    clip.finished = true;
                    Some(clip.index)
                } else {
                    None
                }
            }
        }
    }
}

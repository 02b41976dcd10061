pub mod animation;
pub mod parachute;
pub mod pose;
pub mod skydiver;

pub use animation::{
    ActiveClip, AnimationSelector, AnimationTrigger, ClipPlayer, LoopMode, NO_ANIMATION,
};
pub use parachute::{CanopyProfile, CanopyType, DeploymentState};
pub use pose::{BodyRotationBlend, Skeleton};
pub use skydiver::{Carrier, DescentPhase, KinematicState, Skydiver};

pub mod animation;
pub mod commands;
pub mod parachute;
pub mod physics;
pub mod pose;
pub mod telemetry;

pub use animation::{animation_regime_system, clip_finished_system, clip_playback_system};
pub use commands::{deploy_system, params_system, release_system, restart_system, wind_system};
pub use parachute::{deploy, release};
pub use physics::{skydiver_physics_system, step, EnvironmentInputs, ForceBreakdown, StepReport};
pub use pose::{apply_pose, body_blend_system, trigger_pose, PoseKind};
pub use telemetry::{has_landed, landing_detection_system, telemetry_system};

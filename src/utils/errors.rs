use std::io;
use thiserror::Error;

use crate::components::CanopyType;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid simulation configuration: {0}")]
    ValidationError(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeployError {
    #[error("Skydiver has not been released from the carrier")]
    NotReleased,
    #[error("Parachute already deployed ({0:?})")]
    AlreadyDeployed(CanopyType),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PoseError {
    #[error("Skeleton has no bone named {0}")]
    MissingBone(String),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("No animation at index {0}")]
    UnknownClip(i32),
}

pub mod aerodynamics;
pub mod animation;
pub mod carrier;
pub mod environment;
pub mod physics;
pub mod simulation;

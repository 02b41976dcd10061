pub const GRAVITY: f64 = 9.81; // m/s^2
pub const AIR_DENSITY: f64 = 1.225; // kg/m^3, sea level

pub const GROUND_LEVEL: f64 = -1.5; // m, world y of the landing surface
pub const LANDING_TOLERANCE: f64 = 0.01; // m

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0; // One tick per rendered frame

// Stowed (no canopy) body profile
pub const STOWED_CD: f64 = 1.0;
pub const STOWED_AREA: f64 = 0.7; // m^2
pub const DEFAULT_MASS: f64 = 80.0; // kg

// Canopy profiles, scaled by parachute tension at deployment
pub const CIRCULAR_CD: f64 = 1.75;
pub const CIRCULAR_AREA: f64 = 30.0; // m^2
pub const LIFTING_CD: f64 = 1.5;
pub const LIFTING_AREA: f64 = 35.0; // m^2

pub const CARRIER_HEIGHT: f64 = 1000.0; // m
pub const POSE_BLEND_DURATION: f64 = 2.0; // s

#[path = "../common/mod.rs"]
mod common;

mod config;
mod descent;
mod parachute;
mod restart;

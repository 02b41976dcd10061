use bevy::{log::LogPlugin, prelude::*, time::TimeUpdateStrategy};
use clap::{Parser, ValueEnum};
use std::{path::PathBuf, time::Duration};

use skydive::{
    components::{CanopyType, DescentPhase},
    plugins::{DeployCommand, ReleaseCommand, SkydivePlugin},
    resources::{SimulationConfig, Telemetry},
};

/// Hard stop in case the skydiver never reaches the ground.
const MAX_TICKS: u64 = 1_000_000;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum CanopyArg {
    Circular,
    Lifting,
}

impl From<CanopyArg> for CanopyType {
    fn from(arg: CanopyArg) -> Self {
        match arg {
            CanopyArg::Circular => CanopyType::Circular,
            CanopyArg::Lifting => CanopyType::Lifting,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "skydive_drop", version)]
#[command(about = "Drop a skydiver and stream telemetry as JSON lines")]
struct DropArgs {
    /// Simulation config (YAML); defaults are used when omitted
    config: Option<PathBuf>,
    /// Height at which the canopy opens [m]
    #[arg(long, default_value_t = 300.0)]
    deploy_at: f64,
    /// Canopy to open
    #[arg(long, value_enum, default_value_t = CanopyArg::Circular)]
    canopy: CanopyArg,
    /// Print telemetry every N ticks
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    every: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = DropArgs::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let timestep = config.physics.timestep;

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
            timestep,
        )))
        .add_plugins(SkydivePlugin::with_config(config));

    // Startup runs on the first update; the skydiver exists afterwards.
    app.update();
    app.world_mut().send_event(ReleaseCommand);

    let mut deploy_sent = false;
    let mut printed = 0;

    for _ in 0..MAX_TICKS {
        app.update();

        let telemetry = app.world().resource::<Telemetry>().clone();

        let falling = telemetry.phase == DescentPhase::Falling;
        if !deploy_sent && falling && telemetry.height() <= args.deploy_at {
            app.world_mut().send_event(DeployCommand {
                canopy: args.canopy.into(),
            });
            deploy_sent = true;
        }

        if telemetry.tick > printed && telemetry.tick % args.every == 0 {
            println!("{}", serde_json::to_string(&telemetry)?);
            printed = telemetry.tick;
        }

        if telemetry.phase == DescentPhase::Landed {
            println!("{}", serde_json::to_string(&telemetry)?);
            info!("Touchdown after {:.1} s", telemetry.tick as f64 * timestep);
            return Ok(());
        }
    }

    Err(format!("skydiver still airborne after {} ticks", MAX_TICKS).into())
}

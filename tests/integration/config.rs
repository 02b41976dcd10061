use pretty_assertions::assert_eq;
use skydive::{
    resources::{AerodynamicParams, PhysicsConfig, SimulationConfig},
    utils::ConfigError,
};
use tempfile::NamedTempFile;

use crate::common::{skydiver_state, TestAppBuilder};

#[test]
fn test_loaded_config_drives_the_app() {
    let mut config = SimulationConfig::default();
    config.physics.timestep = 0.016;
    config.carrier.position.y = 500.0;
    config.aerodynamics.mass = 95.0;

    let file = NamedTempFile::new().unwrap();
    config.save(file.path()).unwrap();
    let loaded = SimulationConfig::load(file.path()).unwrap();
    assert_eq!(loaded, config);

    let mut app = TestAppBuilder::new().with_config(loaded).build();

    assert_eq!(skydiver_state(&mut app.app).position.y, 500.0);
    assert_eq!(app.resource::<AerodynamicParams>().mass, 95.0);
    assert_eq!(app.resource::<PhysicsConfig>().timestep, 0.016);
}

#[test]
fn test_invalid_config_is_rejected_on_load() {
    let file = NamedTempFile::new().unwrap();
    std::fs::write(file.path(), "aerodynamics:\n  mass: -5.0\n").unwrap();

    let result = SimulationConfig::load(file.path());

    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

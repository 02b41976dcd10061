use bevy::{prelude::*, time::TimeUpdateStrategy};
use skydive::{
    plugins::SkydivePlugin,
    resources::{
        AerodynamicParams, CarrierConfig, EnvironmentConfig, SimulationConfig, Telemetry,
    },
};
use std::time::Duration;

/// Builder for a headless app running the skydive plugin.
pub struct TestAppBuilder {
    config: SimulationConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        let mut config = SimulationConfig::default();
        config.physics.timestep = 0.016;
        Self { config }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_carrier_height(mut self, height: f64) -> Self {
        self.config.carrier = CarrierConfig::at_height(height);
        self
    }

    pub fn with_environment(mut self, config: EnvironmentConfig) -> Self {
        self.config.environment = config;
        self
    }

    pub fn with_params(mut self, params: AerodynamicParams) -> Self {
        self.config.aerodynamics = params;
        self
    }

    pub fn build(self) -> TestApp {
        let timestep = self.config.physics.timestep;
        let mut app = App::new();

        app.add_plugins(MinimalPlugins)
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f64(
                timestep,
            )))
            .add_plugins(SkydivePlugin::with_config(self.config));

        // Runs startup; time does not advance on the first update.
        app.update();

        TestApp { app, timestep }
    }
}

/// Main test application wrapper. One frame is one fixed tick.
pub struct TestApp {
    pub app: App,
    pub timestep: f64,
}

impl TestApp {
    pub fn run_steps(&mut self, steps: usize) {
        for _ in 0..steps {
            self.app.update();
        }
    }

    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn send<E: Event>(&mut self, event: E) {
        self.app.world_mut().send_event(event);
    }

    /// Send `event` and run the tick that consumes it.
    pub fn command<E: Event>(&mut self, event: E) {
        self.send(event);
        self.run_frame();
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn telemetry(&self) -> &Telemetry {
        self.resource::<Telemetry>()
    }

    pub fn query_single<T: Component>(&mut self) -> Option<&T> {
        let world = self.app.world_mut();
        let mut query = world.query::<&T>();
        query.get_single(world).ok()
    }

    pub fn query_single_mut<T: Component>(&mut self) -> Option<Mut<T>> {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut T>();
        query.get_single_mut(world).ok()
    }
}

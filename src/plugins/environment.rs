use bevy::prelude::*;

use crate::plugins::StartupStage;
use crate::resources::{EnvironmentConfig, EnvironmentResource};

pub struct EnvironmentPlugin {
    pub config: Option<EnvironmentConfig>,
}

impl EnvironmentPlugin {
    pub fn new() -> Self {
        Self { config: None }
    }

    pub fn with_config(config: EnvironmentConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    fn setup_config(mut commands: Commands, config: Option<EnvironmentConfig>) {
        commands.insert_resource(config.unwrap_or_default());
    }

    fn setup_model(mut commands: Commands, config: Option<Res<EnvironmentConfig>>) {
        let config = config.map(|cfg| cfg.clone()).unwrap_or_default();

        info!("Wind model: {:?}", config.wind_model_config);
        commands.insert_resource(EnvironmentResource::new(&config));
    }

    fn setup_config_with_initial(
        config: Option<EnvironmentConfig>,
    ) -> impl FnMut(Commands) + Send + Sync + 'static {
        move |commands: Commands| {
            Self::setup_config(commands, config.clone());
        }
    }
}

impl Default for EnvironmentPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for EnvironmentPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();
        app.add_systems(
            Startup,
            (Self::setup_config_with_initial(config), Self::setup_model)
                .chain()
                .in_set(StartupStage::BuildConfig),
        );
    }
}

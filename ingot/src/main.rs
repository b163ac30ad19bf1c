mod windowing;

use std::process::ExitCode;
use ingot_shared::CommonError;
use ingot_engine_core::{ApplicationContext, BootstrapConfig, VulkanRuntime};
use windowing::AppWindow;

pub struct IngotApplication {
    config: BootstrapConfig,
    context: Option<ApplicationContext<VulkanRuntime, AppWindow>>,
    last_error: Option<CommonError>,
}

impl IngotApplication {

    pub fn init(config: BootstrapConfig) -> Self {
        IngotApplication {
            config,
            context: None,
            last_error: None,
        }
    }

    pub fn exit(mut self) {
        if let Some(mut context) = self.context.take() {
            context.cleanup();
        }
    }

}

pub fn main() -> ExitCode {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let config = BootstrapConfig::default();
    let title = config.window_title;
    log::info!("Starting {}", title);

    let mut app = IngotApplication::init(config);
    let result = windowing::run(&mut app);

    let error = match result {
        Ok(()) => app.last_error.take(),
        Err(e) => Some(e),
    };

    app.exit();

    match error {
        Some(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        },
        None => {
            log::info!("Ran {} successfully", title);
            log::info!("Closing {}", title);
            ExitCode::SUCCESS
        }
    }
}

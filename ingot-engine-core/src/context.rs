use std::ffi::CStr;
use ingot_shared::{backend_init_err, chain_err, CommonError, CommonErrorType};

use crate::config::BootstrapConfig;
use crate::runtime::{GraphicsRuntime, RuntimeInstance};
use crate::setup::{self, Diagnostics, DiagnosticsHandler, LogDiagnostics};

/// The system window the graphics are initialized for
pub trait PlatformWindow {
    /// Instance extensions needed to present to this window
    fn required_instance_extensions(&self) -> Result<Vec<&'static CStr>, CommonError>;
}

/// Owns every resource of the bootstrap. Resources are released in reverse creation order by
/// `cleanup`, whatever stage the initialization reached.
pub struct ApplicationContext<R: GraphicsRuntime, W: PlatformWindow> {
    runtime: R,
    window: Option<W>,
    instance: Option<R::Instance>,
    diagnostics: Option<Diagnostics>,
    physical_device: Option<vk::PhysicalDevice>,
}

impl<R: GraphicsRuntime, W: PlatformWindow> ApplicationContext<R, W> {

    pub fn new(runtime: R, window: W) -> Self {
        ApplicationContext {
            runtime,
            window: Some(window),
            instance: None,
            diagnostics: None,
            physical_device: None,
        }
    }

    pub fn window(&self) -> Option<&W> {
        self.window.as_ref()
    }

    pub fn instance(&self) -> Option<&R::Instance> {
        self.instance.as_ref()
    }

    pub fn has_diagnostics(&self) -> bool {
        self.diagnostics.is_some()
    }

    pub fn physical_device(&self) -> Option<vk::PhysicalDevice> {
        self.physical_device
    }

    /// Runs the initialization with the diagnostics going to the log
    pub fn init_graphics(&mut self, config: &BootstrapConfig) -> Result<(), CommonError> {
        self.init_graphics_with(config, Box::new(LogDiagnostics))
    }

    /// Creates the instance, attaches the diagnostics channel and selects a physical device.
    /// On failure, the resources created so far stay owned by the context until `cleanup`.
    pub fn init_graphics_with(&mut self, config: &BootstrapConfig, handler: Box<dyn DiagnosticsHandler>) -> Result<(), CommonError> {
        if self.instance.is_some() {
            return Err(backend_init_err!("Graphics are already initialized"));
        }

        let window_extensions = match self.window.as_ref() {
            Some(window) => window.required_instance_extensions()
                .map_err(|err| chain_err!(err, CommonErrorType::BackendInit, "can't query window extensions") )?,
            None => { return Err(backend_init_err!("Graphics cannot be initialized without a window")); }
        };

        let instance = setup::create_instance(&self.runtime, &window_extensions, config)
            .map_err(|err| chain_err!(err, CommonErrorType::BackendInit, "can't create vk instance") )?;

        let instance = self.instance.insert(instance);
        log::debug!("Vulkan instance {:?} created", instance.handle());

        self.diagnostics = setup::attach_diagnostics(instance, config.enable_diagnostics, config.diagnostics_severity, handler)
            .map_err(|err| chain_err!(err, CommonErrorType::BackendInit, "can't setup debug callback") )?;

        let physical_device = setup::pick_physical_device(&*instance)
            .map_err(|err| chain_err!(err, CommonErrorType::BackendInit, "can't pick physical device") )?;

        self.physical_device = Some(physical_device);

        Ok(())
    }

    /// Releases the diagnostics channel, the instance, then the window. Calling it again does nothing.
    pub fn cleanup(&mut self) {
        self.physical_device = None;

        if let Some(mut instance) = self.instance.take() {
            if let Some(diagnostics) = self.diagnostics.take() {
                diagnostics.destroy(&mut instance);
            }

            instance.destroy();
        }

        // Callbacks can only exist on an instance
        self.diagnostics = None;

        if self.window.take().is_some() {
            log::debug!("Window released");
        }
    }

}

impl<R: GraphicsRuntime, W: PlatformWindow> Drop for ApplicationContext<R, W> {
    fn drop(&mut self) {
        self.cleanup();
    }
}

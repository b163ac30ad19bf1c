use std::ffi::CStr;
use raw_window_handle::HasDisplayHandle;
use ingot_shared::{system_err, CommonError};
use ingot_engine_core::{ApplicationContext, BootstrapConfig, PlatformWindow, VulkanRuntime};
use ingot_engine_core::platform::required_surface_extensions;

use winit::application::ApplicationHandler;
use winit::event_loop::{ActiveEventLoop, EventLoop, ControlFlow};
use winit::event::{WindowEvent, ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};
use super::IngotApplication;

pub struct AppWindow(Window);

impl AppWindow {
    pub fn set_visible(&self, visible: bool) {
        self.0.set_visible(visible);
    }
}

impl PlatformWindow for AppWindow {
    fn required_instance_extensions(&self) -> Result<Vec<&'static CStr>, CommonError> {
        let display = self.0.display_handle()
            .map_err(|err| system_err!("Failed to get system handles: {}", err) )?;

        required_surface_extensions(display.as_raw())
    }
}

impl Drop for AppWindow {
    fn drop(&mut self) {
        log::debug!("Destroying window");
    }
}

impl IngotApplication {

    fn init_context(&mut self, event_loop: &ActiveEventLoop) -> Result<(), CommonError> {
        let window = create_window(event_loop, &self.config)?;
        let runtime = VulkanRuntime::load()?;

        let context = self.context.insert(ApplicationContext::new(runtime, window));
        context.init_graphics(&self.config)?;

        if let Some(window) = context.window() {
            window.set_visible(true);
        }

        Ok(())
    }

}

impl ApplicationHandler for IngotApplication {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Resumed can be sent more than once on some platforms
        if self.context.is_some() || self.last_error.is_some() {
            return;
        }

        if let Err(e) = self.init_context(event_loop) {
            self.last_error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            },
            WindowEvent::KeyboardInput { event: KeyEvent { physical_key: PhysicalKey::Code(KeyCode::Escape), state: ElementState::Pressed, .. }, .. } => {
                event_loop.exit();
            },
            _ => {},
        }
    }
}

fn create_window(event_loop: &ActiveEventLoop, config: &BootstrapConfig) -> Result<AppWindow, CommonError> {
    let [width, height] = config.window_size;
    let window_attr = Window::default_attributes()
        .with_title(config.window_title)
        .with_inner_size(winit::dpi::PhysicalSize::new(width, height))
        .with_resizable(false)
        .with_visible(false);

    event_loop.create_window(window_attr)
        .map(AppWindow)
        .map_err(|err| system_err!("Failed to create system window: {}", err) )
}

pub fn run(app: &mut IngotApplication) -> Result<(), CommonError> {
    let event_loop = EventLoop::new()
        .map_err(|err| system_err!("Failed to create event loop: {}", err) )?;

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run_app(app)
        .map_err(|err| system_err!("Event loop failed: {}", err) )
}

//! Vulkan bootstrap: instance creation, validation layers, debug report wiring and physical device selection

mod config;
mod context;
mod runtime;

pub mod platform;
pub mod setup;

#[cfg(test)]
mod testing;

pub use config::BootstrapConfig;
pub use context::{ApplicationContext, PlatformWindow};
pub use runtime::{GraphicsRuntime, RuntimeInstance, InstanceDesc, VulkanRuntime, VulkanInstance};
pub use setup::{DiagnosticsHandler, DiagnosticMessage, DiagnosticSeverity, LogDiagnostics};

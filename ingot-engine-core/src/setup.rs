//! The initialization stages, in the order the application context runs them
mod setup_probe;
mod setup_instance;
mod setup_diagnostics;
mod setup_device;

pub use setup_probe::{ExtensionDescriptor, LayerDescriptor, list_instance_extensions, list_instance_layers, check_validation_layer_support};
pub use setup_instance::{required_extensions, create_instance};
pub use setup_diagnostics::{Diagnostics, DiagnosticsHandler, DiagnosticMessage, DiagnosticSeverity, LogDiagnostics, attach_diagnostics, debug_report_callback};
pub use setup_device::{DeviceCandidate, score_device, rank_candidates, pick_physical_device};

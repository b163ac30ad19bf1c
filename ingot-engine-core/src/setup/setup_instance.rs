use std::ffi::{CStr, CString};
use fnv::FnvHashSet;
use ingot_shared::{chain_err, instance_creation_err, validation_layers_err, CommonError, CommonErrorType};

use crate::config::BootstrapConfig;
use crate::runtime::{GraphicsRuntime, InstanceDesc};
use super::setup_probe::{list_instance_extensions, list_instance_layers, check_validation_layer_support};

/// Builds the list of instance extensions: window extensions first, platform extensions, then the
/// debug report extension last if diagnostics are enabled. Names are not deduplicated.
pub fn required_extensions(window_extensions: &[&CStr], enable_diagnostics: bool) -> Vec<CString> {
    let mut extensions: Vec<CString> = window_extensions.iter()
        .map(|&name| CString::from(name))
        .collect();

    #[cfg(target_os = "macos")]
    extensions.push(CString::from(vk::KHR_PORTABILITY_ENUMERATION_EXTENSION_NAME));

    if enable_diagnostics {
        extensions.push(CString::from(vk::EXT_DEBUG_REPORT_EXTENSION_NAME));
    }

    extensions
}

pub fn create_instance<R: GraphicsRuntime>(runtime: &R, window_extensions: &[&CStr], config: &BootstrapConfig) -> Result<R::Instance, CommonError> {
    let layers = validated_layers(runtime, config)?;

    let extensions = required_extensions(window_extensions, config.enable_diagnostics);
    warn_unadvertised_extensions(runtime, &extensions)?;

    let names: Vec<&str> = extensions.iter().map(|name| name.to_str().unwrap_or("?") ).collect();
    log::info!("Attempting to create instance with {} extensions enabled", names.join(","));

    let flags = match cfg!(target_os = "macos") {
        true => vk::InstanceCreateFlags::ENUMERATE_PORTABILITY,
        false => vk::InstanceCreateFlags::default(),
    };

    let desc = InstanceDesc {
        application_name: config.application_name,
        application_version: config.application_version,
        engine_name: config.engine_name,
        engine_version: config.engine_version,
        api_version: config.api_version,
        flags,
        layers: &layers,
        extensions: &extensions,
    };

    runtime.create_instance(&desc)
        .map_err(|err| instance_creation_err!("Failed to create vulkan instance: {err}").with_status(err) )
}

/// Layers to enable on the instance. Empty if diagnostics are disabled.
fn validated_layers<R: GraphicsRuntime>(runtime: &R, config: &BootstrapConfig) -> Result<Vec<CString>, CommonError> {
    if !config.enable_diagnostics {
        return Ok(Vec::new());
    }

    let available = list_instance_layers(runtime)
        .map_err(|err| chain_err!(err, CommonErrorType::ValidationLayersUnavailable, "Failed to check validation layers") )?;

    if !check_validation_layer_support(&available, config.validation_layers) {
        return Err(validation_layers_err!("Validation layers requested but not available: {:?}", config.validation_layers));
    }

    config.validation_layers.iter()
        .map(|&name| CString::new(name).map_err(|_| validation_layers_err!("Invalid validation layer name: {name:?}") ) )
        .collect()
}

fn warn_unadvertised_extensions<R: GraphicsRuntime>(runtime: &R, extensions: &[CString]) -> Result<(), CommonError> {
    let available = list_instance_extensions(runtime)?;
    let available_names: FnvHashSet<&str> = available.iter()
        .map(|ext| ext.name.as_str())
        .collect();

    for name in extensions.iter().filter_map(|name| name.to_str().ok() ) {
        if !available_names.contains(name) {
            log::warn!("Instance extension {} is not advertised by the runtime", name);
        }
    }

    Ok(())
}

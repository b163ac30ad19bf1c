use fnv::FnvHashSet;
use ingot_shared::{runtime_query_err, CommonError};

use crate::runtime::GraphicsRuntime;

/// An instance extension supported by the runtime
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionDescriptor {
    pub name: String,
    pub spec_version: u32,
}

/// A layer installed on the host
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayerDescriptor {
    pub name: String,
    pub description: String,
    pub spec_version: u32,
    pub implementation_version: u32,
}

pub fn list_instance_extensions<R: GraphicsRuntime>(runtime: &R) -> Result<Vec<ExtensionDescriptor>, CommonError> {
    let extensions = runtime.enumerate_instance_extensions()
        .map_err(|err| runtime_query_err!("Failed to list instance extensions: {err}").with_status(err) )?;

    log::info!("Available extensions");
    let extensions: Vec<ExtensionDescriptor> = extensions.iter()
        .map(|ext| ExtensionDescriptor {
            name: ext.extension_name().to_string(),
            spec_version: ext.spec_version,
        })
        .inspect(|ext| log::info!(" > {}", ext.name) )
        .collect();

    Ok(extensions)
}

pub fn list_instance_layers<R: GraphicsRuntime>(runtime: &R) -> Result<Vec<LayerDescriptor>, CommonError> {
    let layers = runtime.enumerate_instance_layers()
        .map_err(|err| runtime_query_err!("Failed to list instance layers: {err}").with_status(err) )?;

    log::info!("Available validation layers");
    let layers: Vec<LayerDescriptor> = layers.iter()
        .map(|layer| LayerDescriptor {
            name: layer.layer_name().to_string(),
            description: layer.description().to_string(),
            spec_version: layer.spec_version,
            implementation_version: layer.implementation_version,
        })
        .inspect(|layer| log::info!(" > {} <{}>", layer.name, layer.description) )
        .collect();

    Ok(layers)
}

/// True if every requested layer name matches an available layer exactly
pub fn check_validation_layer_support(available: &[LayerDescriptor], requested: &[&str]) -> bool {
    let available_names: FnvHashSet<&str> = available.iter()
        .map(|layer| layer.name.as_str())
        .collect();

    for &name in requested {
        if !available_names.contains(name) {
            log::debug!("{} is not an available validation layer", name);
            return false;
        }

        log::debug!("{} is a supported validation layer", name);
    }

    log::info!("All validation layers are supported");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeRuntime, layer};

    fn available() -> Vec<LayerDescriptor> {
        let runtime = FakeRuntime {
            layers: vec![layer("VK_LAYER_KHRONOS_validation"), layer("VK_LAYER_MESA_device_select")],
            ..FakeRuntime::default()
        };

        list_instance_layers(&runtime).unwrap()
    }

    #[test]
    fn list_layers() {
        let layers = available();
        assert_eq!(layers.len(), 2);
        assert_eq!(layers[0].name, "VK_LAYER_KHRONOS_validation");
        assert_eq!(layers[0].description, "VK_LAYER_KHRONOS_validation description");
        assert_eq!(layers[1].name, "VK_LAYER_MESA_device_select");
    }

    #[test]
    fn list_extensions() {
        let runtime = FakeRuntime::default();
        let extensions = list_instance_extensions(&runtime).unwrap();
        let names: Vec<&str> = extensions.iter().map(|ext| ext.name.as_str() ).collect();
        assert_eq!(names, ["VK_KHR_surface", "VK_KHR_xlib_surface", "VK_EXT_debug_report"]);
        assert!(extensions.iter().all(|ext| ext.spec_version == 1 ));
    }

    #[test]
    fn list_failures() {
        let runtime = FakeRuntime {
            fail_layers: Some(vk::VkResult::ERROR_OUT_OF_HOST_MEMORY),
            fail_extensions: Some(vk::VkResult::INCOMPLETE),
            ..FakeRuntime::default()
        };

        let layers = list_instance_layers(&runtime).err().unwrap();
        assert_eq!(layers.ty(), ingot_shared::CommonErrorType::RuntimeQuery);
        assert_eq!(layers.status(), Some(vk::VkResult::ERROR_OUT_OF_HOST_MEMORY));

        let extensions = list_instance_extensions(&runtime).err().unwrap();
        assert_eq!(extensions.ty(), ingot_shared::CommonErrorType::RuntimeQuery);
        assert_eq!(extensions.status(), Some(vk::VkResult::INCOMPLETE));
    }

    #[test]
    fn layer_support() {
        let layers = available();
        assert!(check_validation_layer_support(&layers, &["VK_LAYER_KHRONOS_validation"]));
        assert!(check_validation_layer_support(&layers, &["VK_LAYER_MESA_device_select", "VK_LAYER_KHRONOS_validation"]));
        assert!(check_validation_layer_support(&layers, &[]));
        assert!(check_validation_layer_support(&[], &[]));

        assert!(!check_validation_layer_support(&layers, &["VK_LAYER_KHRONOS_validation", "VK_LAYER_LUNARG_standard_validation"]));
        assert!(!check_validation_layer_support(&[], &["VK_LAYER_KHRONOS_validation"]));
    }

    #[test]
    fn layer_support_is_exact() {
        let layers = available();
        assert!(!check_validation_layer_support(&layers, &["vk_layer_khronos_validation"]));
        assert!(!check_validation_layer_support(&layers, &["VK_LAYER_KHRONOS"]));
        assert!(!check_validation_layer_support(&layers, &["VK_LAYER_KHRONOS_validation "]));
    }

}

//! Access to the vulkan runtime.
//!
//! Every decision of the bootstrap goes through these two traits, the real implementation
//! forwards to the vulkan loader.

use std::ffi::{CStr, CString};
use vk::wrapper::{Entry, Instance, DebugReport};
use ingot_shared::{system_err, CommonError};

/// Application metadata and names the instance is created with
pub struct InstanceDesc<'a> {
    pub application_name: &'a CStr,
    pub application_version: u32,
    pub engine_name: &'a CStr,
    pub engine_version: u32,
    pub api_version: u32,
    pub flags: vk::InstanceCreateFlags,
    pub layers: &'a [CString],
    pub extensions: &'a [CString],
}

pub trait GraphicsRuntime {
    type Instance: RuntimeInstance;

    fn enumerate_instance_extensions(&self) -> Result<Vec<vk::ExtensionProperties>, vk::VkResult>;
    fn enumerate_instance_layers(&self) -> Result<Vec<vk::LayerProperties>, vk::VkResult>;
    fn create_instance(&self, desc: &InstanceDesc) -> Result<Self::Instance, vk::VkResult>;
}

pub trait RuntimeInstance {
    fn handle(&self) -> vk::Instance;

    fn enumerate_physical_devices(&self) -> Result<Vec<vk::PhysicalDevice>, vk::VkResult>;
    fn physical_device_properties(&self, pdevice: vk::PhysicalDevice) -> vk::PhysicalDeviceProperties;
    fn physical_device_features(&self, pdevice: vk::PhysicalDevice) -> vk::PhysicalDeviceFeatures;

    fn create_debug_report_callback(&mut self, create_info: &vk::DebugReportCallbackCreateInfoEXT) -> Result<vk::DebugReportCallbackEXT, vk::VkResult>;
    fn destroy_debug_report_callback(&mut self, callback: vk::DebugReportCallbackEXT);

    /// Why the debug report commands cannot be used on this instance, if they cannot
    fn debug_report_unavailable(&self) -> Option<&str>;

    fn destroy(&mut self);
}

//
// Vulkan loader
//

pub struct VulkanRuntime {
    entry: Entry,
}

impl VulkanRuntime {

    /// Opens the vulkan loader library and resolves the global commands
    pub fn load() -> Result<Self, CommonError> {
        let entry = Entry::open()
            .map_err(|err| system_err!("Failed to load Vulkan: {err}") )?;

        Ok(VulkanRuntime { entry })
    }

}

impl GraphicsRuntime for VulkanRuntime {
    type Instance = VulkanInstance;

    fn enumerate_instance_extensions(&self) -> Result<Vec<vk::ExtensionProperties>, vk::VkResult> {
        self.entry.enumerate_instance_extension_properties()
    }

    fn enumerate_instance_layers(&self) -> Result<Vec<vk::LayerProperties>, vk::VkResult> {
        self.entry.enumerate_instance_layer_properties()
    }

    fn create_instance(&self, desc: &InstanceDesc) -> Result<VulkanInstance, vk::VkResult> {
        let app_info = vk::ApplicationInfo {
            p_application_name: desc.application_name.as_ptr() as *const u8,
            application_version: desc.application_version,
            p_engine_name: desc.engine_name.as_ptr() as *const u8,
            engine_version: desc.engine_version,
            api_version: desc.api_version,
            ..Default::default()
        };

        let layer_names_ptr: Vec<*const u8> = desc.layers.iter().map(|c| c.as_bytes_with_nul().as_ptr() ).collect();
        let extension_names_ptr: Vec<*const u8> = desc.extensions.iter().map(|c| c.as_bytes_with_nul().as_ptr() ).collect();

        let create_info = vk::InstanceCreateInfo {
            flags: desc.flags,
            p_application_info: &app_info,
            enabled_layer_count: layer_names_ptr.len() as _,
            pp_enabled_layer_names: layer_names_ptr.as_ptr(),
            enabled_extension_count: extension_names_ptr.len() as _,
            pp_enabled_extension_names: extension_names_ptr.as_ptr(),
            ..Default::default()
        };

        let instance = self.entry.create_instance(&create_info)?;

        // Debug report commands only resolve if the extension was enabled
        let debug_report = match desc.extensions.iter().any(|name| name.as_c_str() == vk::EXT_DEBUG_REPORT_EXTENSION_NAME) {
            true => DebugReport::new(&self.entry, &instance)
                .map_err(|name| format!("the loader does not expose {name}") ),
            false => Err("VK_EXT_debug_report is not enabled on the instance".to_string()),
        };

        if let Err(reason) = debug_report.as_ref() {
            log::debug!("Debug report commands unavailable: {}", reason);
        }

        Ok(VulkanInstance { instance, debug_report })
    }
}

pub struct VulkanInstance {
    instance: Instance,
    debug_report: Result<DebugReport, String>,
}

impl RuntimeInstance for VulkanInstance {

    fn handle(&self) -> vk::Instance {
        self.instance.handle
    }

    fn enumerate_physical_devices(&self) -> Result<Vec<vk::PhysicalDevice>, vk::VkResult> {
        self.instance.enumerate_physical_devices()
    }

    fn physical_device_properties(&self, pdevice: vk::PhysicalDevice) -> vk::PhysicalDeviceProperties {
        self.instance.get_physical_device_properties(pdevice)
    }

    fn physical_device_features(&self, pdevice: vk::PhysicalDevice) -> vk::PhysicalDeviceFeatures {
        self.instance.get_physical_device_features(pdevice)
    }

    fn create_debug_report_callback(&mut self, create_info: &vk::DebugReportCallbackCreateInfoEXT) -> Result<vk::DebugReportCallbackEXT, vk::VkResult> {
        match self.debug_report.as_ref() {
            Ok(debug_report) => debug_report.create_debug_report_callback(create_info),
            Err(_) => Err(vk::VkResult::ERROR_EXTENSION_NOT_PRESENT),
        }
    }

    fn destroy_debug_report_callback(&mut self, callback: vk::DebugReportCallbackEXT) {
        if let Ok(debug_report) = self.debug_report.as_ref() {
            debug_report.destroy_debug_report_callback(callback);
        }
    }

    fn debug_report_unavailable(&self) -> Option<&str> {
        self.debug_report.as_ref().err().map(|reason| reason.as_str() )
    }

    fn destroy(&mut self) {
        self.debug_report = Err("the instance was destroyed".to_string());
        self.instance.destroy();
    }

}

use std::ffi::CStr;

/// Compiled-in settings of the bootstrap
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    pub window_title: &'static str,
    pub window_size: [u32; 2],

    pub application_name: &'static CStr,
    pub application_version: u32,
    pub engine_name: &'static CStr,
    pub engine_version: u32,
    pub api_version: u32,

    pub enable_diagnostics: bool,
    pub validation_layers: &'static [&'static str],
    pub diagnostics_severity: vk::DebugReportFlagsEXT,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        let severity = vk::DebugReportFlagsEXT::ERROR
            .bitor(vk::DebugReportFlagsEXT::WARNING)
            .bitor(vk::DebugReportFlagsEXT::PERFORMANCE_WARNING)
            .bitor(vk::DebugReportFlagsEXT::INFORMATION)
            .bitor(vk::DebugReportFlagsEXT::DEBUG);

        BootstrapConfig {
            window_title: "Learn Vulkan",
            window_size: [1280, 720],
            application_name: c"Learn Vulkan",
            application_version: vk::make_api_version(0, 1, 0, 0),
            engine_name: c"Ingot",
            engine_version: vk::make_api_version(0, 1, 0, 0),
            api_version: vk::API_VERSION_1_1,
            enable_diagnostics: cfg!(debug_assertions),
            validation_layers: &["VK_LAYER_KHRONOS_validation"],
            diagnostics_severity: severity,
        }
    }
}

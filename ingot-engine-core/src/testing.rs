//! In memory runtime used by the unit tests

use std::cell::RefCell;
use std::ffi::{c_void, CStr};
use std::rc::Rc;
use std::sync::{Mutex, Once};
use ingot_shared::{system_err, CommonError};

use crate::context::PlatformWindow;
use crate::runtime::{GraphicsRuntime, RuntimeInstance, InstanceDesc};
use crate::setup::{DiagnosticsHandler, DiagnosticMessage, DiagnosticSeverity};

pub type EventLog = Rc<RefCell<Vec<String>>>;

pub fn new_events() -> EventLog {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn layer(name: &str) -> vk::LayerProperties {
    let mut layer = vk::LayerProperties { spec_version: vk::API_VERSION_1_1, implementation_version: 1, ..Default::default() };
    vk::write_fixed_str(&mut layer.layer_name, name);
    vk::write_fixed_str(&mut layer.description, &format!("{name} description"));
    layer
}

pub fn extension(name: &str) -> vk::ExtensionProperties {
    let mut extension = vk::ExtensionProperties { spec_version: 1, ..Default::default() };
    vk::write_fixed_str(&mut extension.extension_name, name);
    extension
}

#[derive(Clone)]
pub struct FakeDevice {
    pub handle: vk::PhysicalDevice,
    pub name: &'static str,
    pub device_type: vk::PhysicalDeviceType,
    pub max_image_dimension_2d: u32,
    pub geometry_shader: bool,
}

impl FakeDevice {
    pub fn new(raw: usize, name: &'static str, device_type: vk::PhysicalDeviceType, max_image_dimension_2d: u32, geometry_shader: bool) -> Self {
        FakeDevice {
            handle: vk::PhysicalDevice::from_raw(raw),
            name,
            device_type,
            max_image_dimension_2d,
            geometry_shader,
        }
    }
}

/// Parameters of the last successful `create_instance`
pub struct Created {
    pub layers: Vec<String>,
    pub extensions: Vec<String>,
    pub application_name: String,
    pub engine_name: String,
    pub api_version: u32,
}

pub struct FakeRuntime {
    pub extensions: Vec<vk::ExtensionProperties>,
    pub layers: Vec<vk::LayerProperties>,
    pub devices: Vec<FakeDevice>,
    pub fail_extensions: Option<vk::VkResult>,
    pub fail_layers: Option<vk::VkResult>,
    pub fail_instance: Option<vk::VkResult>,
    pub fail_debug_report: Option<vk::VkResult>,
    pub fail_devices: Option<vk::VkResult>,
    pub events: EventLog,
    pub created: RefCell<Option<Created>>,
}

impl Default for FakeRuntime {
    fn default() -> Self {
        FakeRuntime {
            extensions: vec![extension("VK_KHR_surface"), extension("VK_KHR_xlib_surface"), extension("VK_EXT_debug_report")],
            layers: vec![layer("VK_LAYER_KHRONOS_validation")],
            devices: vec![FakeDevice::new(1, "Fake GPU", vk::PhysicalDeviceType::DISCRETE_GPU, 16384, false)],
            fail_extensions: None,
            fail_layers: None,
            fail_instance: None,
            fail_debug_report: None,
            fail_devices: None,
            events: new_events(),
            created: RefCell::new(None),
        }
    }
}

impl GraphicsRuntime for FakeRuntime {
    type Instance = FakeInstance;

    fn enumerate_instance_extensions(&self) -> Result<Vec<vk::ExtensionProperties>, vk::VkResult> {
        match self.fail_extensions {
            Some(err) => Err(err),
            None => Ok(self.extensions.clone()),
        }
    }

    fn enumerate_instance_layers(&self) -> Result<Vec<vk::LayerProperties>, vk::VkResult> {
        match self.fail_layers {
            Some(err) => Err(err),
            None => Ok(self.layers.clone()),
        }
    }

    fn create_instance(&self, desc: &InstanceDesc) -> Result<FakeInstance, vk::VkResult> {
        if let Some(err) = self.fail_instance {
            return Err(err);
        }

        let to_strings = |names: &[std::ffi::CString]| -> Vec<String> {
            names.iter().map(|name| name.to_string_lossy().into_owned() ).collect()
        };

        *self.created.borrow_mut() = Some(Created {
            layers: to_strings(desc.layers),
            extensions: to_strings(desc.extensions),
            application_name: desc.application_name.to_string_lossy().into_owned(),
            engine_name: desc.engine_name.to_string_lossy().into_owned(),
            api_version: desc.api_version,
        });

        self.events.borrow_mut().push("create_instance".to_string());

        Ok(FakeInstance {
            handle: vk::Instance::from_raw(0x1000),
            devices: self.devices.clone(),
            fail_devices: self.fail_devices,
            fail_debug_report: self.fail_debug_report,
            events: self.events.clone(),
            ..FakeInstance::default()
        })
    }
}

pub struct FakeCallback {
    pub flags: vk::DebugReportFlagsEXT,
    pub handle: vk::DebugReportCallbackEXT,
    pub callback: vk::PFN_vkDebugReportCallbackEXT,
    pub user_data: *mut c_void,
}

pub struct FakeInstance {
    pub handle: vk::Instance,
    pub devices: Vec<FakeDevice>,
    pub fail_devices: Option<vk::VkResult>,
    pub fail_debug_report: Option<vk::VkResult>,
    pub callbacks: Vec<FakeCallback>,
    pub events: EventLog,
    pub next_callback: u64,
    pub debug_report_unavailable: Option<&'static str>,
}

impl Default for FakeInstance {
    fn default() -> Self {
        FakeInstance {
            handle: vk::Instance::from_raw(0x1000),
            devices: Vec::new(),
            fail_devices: None,
            fail_debug_report: None,
            callbacks: Vec::new(),
            events: new_events(),
            next_callback: 1,
            debug_report_unavailable: None,
        }
    }
}

impl FakeInstance {

    /// Sends a message to every registered callback like a validation layer would
    pub fn emit(&self, flags: vk::DebugReportFlagsEXT, message: &CStr) -> vk::Bool32 {
        let mut result = vk::FALSE;
        for cb in self.callbacks.iter().filter(|cb| cb.flags.intersects(flags) ) {
            if let Some(callback) = cb.callback {
                result |= unsafe {
                    callback(flags, vk::DebugReportObjectTypeEXT::INSTANCE, 0, 0, 0, c"Fake".as_ptr(), message.as_ptr(), cb.user_data)
                };
            }
        }

        result
    }

    fn device(&self, pdevice: vk::PhysicalDevice) -> Option<&FakeDevice> {
        self.devices.iter().find(|device| device.handle == pdevice )
    }

}

impl RuntimeInstance for FakeInstance {

    fn handle(&self) -> vk::Instance {
        self.handle
    }

    fn enumerate_physical_devices(&self) -> Result<Vec<vk::PhysicalDevice>, vk::VkResult> {
        match self.fail_devices {
            Some(err) => Err(err),
            None => Ok(self.devices.iter().map(|device| device.handle ).collect()),
        }
    }

    fn physical_device_properties(&self, pdevice: vk::PhysicalDevice) -> vk::PhysicalDeviceProperties {
        let mut properties = vk::PhysicalDeviceProperties::default();
        if let Some(device) = self.device(pdevice) {
            properties.device_type = device.device_type;
            properties.limits.max_image_dimension2_d = device.max_image_dimension_2d;
            vk::write_fixed_str(&mut properties.device_name, device.name);
        }

        properties
    }

    fn physical_device_features(&self, pdevice: vk::PhysicalDevice) -> vk::PhysicalDeviceFeatures {
        let mut features = vk::PhysicalDeviceFeatures::default();
        if let Some(device) = self.device(pdevice) {
            features.geometry_shader = match device.geometry_shader {
                true => vk::TRUE,
                false => vk::FALSE,
            };
        }

        features
    }

    fn create_debug_report_callback(&mut self, create_info: &vk::DebugReportCallbackCreateInfoEXT) -> Result<vk::DebugReportCallbackEXT, vk::VkResult> {
        if let Some(err) = self.fail_debug_report {
            return Err(err);
        }

        let handle = vk::DebugReportCallbackEXT::from_raw(self.next_callback);
        self.next_callback += 1;

        self.callbacks.push(FakeCallback {
            flags: create_info.flags,
            handle,
            callback: create_info.pfn_callback,
            user_data: create_info.p_user_data,
        });

        self.events.borrow_mut().push("create_debug_report".to_string());

        Ok(handle)
    }

    fn destroy_debug_report_callback(&mut self, callback: vk::DebugReportCallbackEXT) {
        self.callbacks.retain(|cb| cb.handle != callback );
        self.events.borrow_mut().push("destroy_debug_report".to_string());
    }

    fn debug_report_unavailable(&self) -> Option<&str> {
        self.debug_report_unavailable
    }

    fn destroy(&mut self) {
        self.events.borrow_mut().push("destroy_instance".to_string());
    }

}

pub struct FakeWindow {
    pub extensions: Vec<&'static CStr>,
    pub fail_extensions: bool,
    pub events: EventLog,
}

impl FakeWindow {
    pub fn new(events: EventLog) -> Self {
        FakeWindow {
            extensions: vec![vk::KHR_SURFACE_EXTENSION_NAME, vk::KHR_XLIB_SURFACE_EXTENSION_NAME],
            fail_extensions: false,
            events,
        }
    }
}

impl PlatformWindow for FakeWindow {
    fn required_instance_extensions(&self) -> Result<Vec<&'static CStr>, CommonError> {
        match self.fail_extensions {
            true => Err(system_err!("Vulkan surfaces are not supported on this display")),
            false => Ok(self.extensions.clone()),
        }
    }
}

impl Drop for FakeWindow {
    fn drop(&mut self) {
        self.events.borrow_mut().push("destroy_window".to_string());
    }
}

pub struct RecordingHandler {
    pub records: Rc<RefCell<Vec<(DiagnosticSeverity, i32, String, String)>>>,
}

impl DiagnosticsHandler for RecordingHandler {
    fn handle(&self, message: &DiagnosticMessage) {
        self.records.borrow_mut().push((
            message.severity(),
            message.message_code,
            message.layer_prefix.to_string(),
            message.message.to_string(),
        ));
    }
}

//
// Logging capture
//

struct CaptureLogger {
    records: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger { records: Mutex::new(Vec::new()) };
static LOGGER_INIT: Once = Once::new();

pub fn install_logger() {
    LOGGER_INIT.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

/// Levels of every message logged so far that contains `needle`
pub fn captured_log(needle: &str) -> Vec<log::Level> {
    install_logger();
    LOGGER.records.lock()
        .map(|records| records.iter().filter(|(_, msg)| msg.contains(needle) ).map(|(level, _)| *level ).collect())
        .unwrap_or_default()
}

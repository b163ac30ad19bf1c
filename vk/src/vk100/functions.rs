use crate::*;
use std::{
    ffi::{c_void, CStr},
    mem::transmute,
};

//
// Entry FN
//

pub struct EntryFnV1_0 {
    pub create_instance: PFN_vkCreateInstance,
    pub enumerate_instance_extension_properties: PFN_vkEnumerateInstanceExtensionProperties,
    pub enumerate_instance_layer_properties: PFN_vkEnumerateInstanceLayerProperties,
}

impl EntryFnV1_0 {

    /// Returns the name of the first missing command if the loader does not expose all of them
    pub fn load<F>(cb: F) -> Result<EntryFnV1_0, &'static str>
    where
        F: Fn(&CStr) -> PFN_vkVoidFunction
    {
        unsafe {
            Ok(EntryFnV1_0 {
                create_instance: transmute(load_required(&cb, c"vkCreateInstance")?),
                enumerate_instance_extension_properties: transmute(load_required(&cb, c"vkEnumerateInstanceExtensionProperties")?),
                enumerate_instance_layer_properties: transmute(load_required(&cb, c"vkEnumerateInstanceLayerProperties")?),
            })
        }
    }

}

//
// Instance FN
//

pub struct InstanceFnV1_0 {
    pub destroy_instance: PFN_vkDestroyInstance,
    pub enumerate_physical_devices: PFN_vkEnumeratePhysicalDevices,
    pub get_physical_device_features: PFN_vkGetPhysicalDeviceFeatures,
    pub get_physical_device_properties: PFN_vkGetPhysicalDeviceProperties,
}

impl InstanceFnV1_0 {

    pub fn load<F>(cb: F) -> Result<InstanceFnV1_0, &'static str>
    where
        F: Fn(&CStr) -> PFN_vkVoidFunction
    {
        unsafe {
            Ok(InstanceFnV1_0 {
                destroy_instance: transmute(load_required(&cb, c"vkDestroyInstance")?),
                enumerate_physical_devices: transmute(load_required(&cb, c"vkEnumeratePhysicalDevices")?),
                get_physical_device_features: transmute(load_required(&cb, c"vkGetPhysicalDeviceFeatures")?),
                get_physical_device_properties: transmute(load_required(&cb, c"vkGetPhysicalDeviceProperties")?),
            })
        }
    }

}

/// Resolves a command, turning a null pointer into the command name
pub fn load_required<F>(cb: &F, name: &'static CStr) -> Result<unsafe extern "system" fn(), &'static str>
where
    F: Fn(&CStr) -> PFN_vkVoidFunction
{
    cb(name).ok_or_else(|| name.to_str().unwrap_or("unknown command"))
}

//
// Functions def
//

pub type PFN_vkVoidFunction = Option<unsafe extern "system" fn()>;

pub type PFN_vkGetInstanceProcAddr =
    unsafe extern "system" fn(instance: Instance, p_name: *const u8) -> PFN_vkVoidFunction;

pub type PFN_vkCreateInstance = unsafe extern "system" fn(
    p_create_info: *const InstanceCreateInfo,
    p_allocator: *const c_void,
    p_instance: *mut Instance,
) -> VkResult;

pub type PFN_vkEnumerateInstanceExtensionProperties = unsafe extern "system" fn(
    p_layer_name: *const u8,
    p_property_count: *mut u32,
    p_properties: *mut ExtensionProperties,
) -> VkResult;

pub type PFN_vkEnumerateInstanceLayerProperties = unsafe extern "system" fn(
    p_property_count: *mut u32,
    p_properties: *mut LayerProperties,
) -> VkResult;

pub type PFN_vkDestroyInstance =
    unsafe extern "system" fn(instance: Instance, p_allocator: *const c_void);

pub type PFN_vkEnumeratePhysicalDevices = unsafe extern "system" fn(
    instance: Instance,
    p_physical_device_count: *mut u32,
    p_physical_devices: *mut PhysicalDevice,
) -> VkResult;

pub type PFN_vkGetPhysicalDeviceFeatures = unsafe extern "system" fn(
    physical_device: PhysicalDevice,
    p_features: *mut PhysicalDeviceFeatures,
);

pub type PFN_vkGetPhysicalDeviceProperties = unsafe extern "system" fn(
    physical_device: PhysicalDevice,
    p_properties: *mut PhysicalDeviceProperties,
);

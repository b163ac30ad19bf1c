#![allow(non_camel_case_types, dead_code)]
use crate::*;
use std::{ffi::{c_char, c_void, CStr}, mem::transmute};

pub const EXT_DEBUG_REPORT_EXTENSION_NAME: &CStr = c"VK_EXT_debug_report";

define_nondispatchable_handle!(DebugReportCallbackEXT, DEBUG_REPORT_CALLBACK_EXT);

vk_enum!(DebugReportFlagsEXT);
vk_bitflags!(DebugReportFlagsEXT);
impl DebugReportFlagsEXT {
    pub const INFORMATION: Self = Self(0b1);
    pub const WARNING: Self = Self(0b10);
    pub const PERFORMANCE_WARNING: Self = Self(0b100);
    pub const ERROR: Self = Self(0b1000);
    pub const DEBUG: Self = Self(0b1_0000);
}

vk_enum!(DebugReportObjectTypeEXT);
impl DebugReportObjectTypeEXT {
    pub const UNKNOWN: Self = Self(0);
    pub const INSTANCE: Self = Self(1);
    pub const PHYSICAL_DEVICE: Self = Self(2);
    pub const DEVICE: Self = Self(3);
    pub const QUEUE: Self = Self(4);
    pub const DEBUG_REPORT_CALLBACK_EXT: Self = Self(28);
}

impl StructureType {
    pub const DEBUG_REPORT_CALLBACK_CREATE_INFO_EXT: Self = Self(1_000_011_000);
}

pub type PFN_vkDebugReportCallbackEXT = Option<unsafe extern "system" fn(
    flags: DebugReportFlagsEXT,
    object_type: DebugReportObjectTypeEXT,
    object: u64,
    location: usize,
    message_code: i32,
    p_layer_prefix: *const c_char,
    p_message: *const c_char,
    p_user_data: *mut c_void,
) -> Bool32>;

#[repr(C)]
pub struct DebugReportCallbackCreateInfoEXT {
    pub s_type: StructureType,
    pub p_next: *const c_void,
    pub flags: DebugReportFlagsEXT,
    pub pfn_callback: PFN_vkDebugReportCallbackEXT,
    pub p_user_data: *mut c_void,
}

impl ::core::default::Default for DebugReportCallbackCreateInfoEXT {
    #[inline]
    fn default() -> Self {
        Self {
            s_type: StructureType::DEBUG_REPORT_CALLBACK_CREATE_INFO_EXT,
            p_next: ::core::ptr::null(),
            flags: DebugReportFlagsEXT::default(),
            pfn_callback: None,
            p_user_data: ::core::ptr::null_mut(),
        }
    }
}

pub struct ExtDebugReportFn {
    pub create_debug_report_callback_ext: PFN_vkCreateDebugReportCallbackEXT,
    pub destroy_debug_report_callback_ext: PFN_vkDestroyDebugReportCallbackEXT,
}

impl ExtDebugReportFn {

    /// The commands are only exposed when the instance was created with the extension enabled
    pub fn load<F>(cb: F) -> Result<ExtDebugReportFn, &'static str>
    where
        F: Fn(&CStr) -> PFN_vkVoidFunction
    {
        unsafe {
            Ok(ExtDebugReportFn {
                create_debug_report_callback_ext: transmute(load_required(&cb, c"vkCreateDebugReportCallbackEXT")?),
                destroy_debug_report_callback_ext: transmute(load_required(&cb, c"vkDestroyDebugReportCallbackEXT")?),
            })
        }
    }

}

pub type PFN_vkCreateDebugReportCallbackEXT = unsafe extern "system" fn(
    instance: Instance,
    p_create_info: *const DebugReportCallbackCreateInfoEXT,
    p_allocator: *const c_void,
    p_callback: *mut DebugReportCallbackEXT,
) -> VkResult;

pub type PFN_vkDestroyDebugReportCallbackEXT = unsafe extern "system" fn(
    instance: Instance,
    callback: DebugReportCallbackEXT,
    p_allocator: *const c_void,
);

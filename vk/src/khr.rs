//! Names of the KHR instance extensions the bootstrap can request
use std::ffi::CStr;

pub const KHR_SURFACE_EXTENSION_NAME: &CStr = c"VK_KHR_surface";
pub const KHR_WIN32_SURFACE_EXTENSION_NAME: &CStr = c"VK_KHR_win32_surface";
pub const KHR_XLIB_SURFACE_EXTENSION_NAME: &CStr = c"VK_KHR_xlib_surface";
pub const KHR_XCB_SURFACE_EXTENSION_NAME: &CStr = c"VK_KHR_xcb_surface";
pub const KHR_WAYLAND_SURFACE_EXTENSION_NAME: &CStr = c"VK_KHR_wayland_surface";
pub const KHR_ANDROID_SURFACE_EXTENSION_NAME: &CStr = c"VK_KHR_android_surface";
pub const KHR_PORTABILITY_ENUMERATION_EXTENSION_NAME: &CStr = c"VK_KHR_portability_enumeration";

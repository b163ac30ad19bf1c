//! Instance extensions the windowing system needs to present on a given display
use std::ffi::CStr;
use raw_window_handle::RawDisplayHandle;
use ingot_shared::{system_err, CommonError};

pub fn required_surface_extensions(display: RawDisplayHandle) -> Result<Vec<&'static CStr>, CommonError> {
    let platform_surface = match display {
        RawDisplayHandle::Windows(_) => vk::KHR_WIN32_SURFACE_EXTENSION_NAME,
        RawDisplayHandle::Xlib(_) => vk::KHR_XLIB_SURFACE_EXTENSION_NAME,
        RawDisplayHandle::Xcb(_) => vk::KHR_XCB_SURFACE_EXTENSION_NAME,
        RawDisplayHandle::Wayland(_) => vk::KHR_WAYLAND_SURFACE_EXTENSION_NAME,
        RawDisplayHandle::Android(_) => vk::KHR_ANDROID_SURFACE_EXTENSION_NAME,
        RawDisplayHandle::AppKit(_) | RawDisplayHandle::UiKit(_) => vk::EXT_METAL_SURFACE_EXTENSION_NAME,
        other => {
            return Err(system_err!("Vulkan surfaces are not supported on display {:?}", other));
        }
    };

    Ok(vec![vk::KHR_SURFACE_EXTENSION_NAME, platform_surface])
}

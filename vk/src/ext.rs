mod debug_report;
pub use debug_report::*;

pub const EXT_METAL_SURFACE_EXTENSION_NAME: &::std::ffi::CStr = c"VK_EXT_metal_surface";

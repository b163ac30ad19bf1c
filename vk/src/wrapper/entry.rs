use crate::{
    vk100::*,
    wrapper,
    error::Error,
};
use libloading::Library;
use std::ptr;


#[cfg(windows)]
const LIB_PATH: &str = "vulkan-1.dll";

#[cfg(all(
    unix,
    not(any(target_os = "macos", target_os = "ios", target_os = "android"))
))]
const LIB_PATH: &str = "libvulkan.so.1";

#[cfg(target_os = "android")]
const LIB_PATH: &str = "libvulkan.so";

#[cfg(any(target_os = "macos", target_os = "ios"))]
const LIB_PATH: &str = "libvulkan.dylib";

/// The vulkan loader. Keeps the library loaded for as long as it lives.
pub struct Entry {
    _lib: Library,
    get_instance_proc_addr: PFN_vkGetInstanceProcAddr,
    entry_fp_1_0: EntryFnV1_0
}

impl Entry {

    pub fn open() -> Result<Self, Error> {
        let _lib = unsafe { Library::new(LIB_PATH) }
            .map_err(Error::LibraryLoading)?;

        let get_instance_proc_addr: PFN_vkGetInstanceProcAddr = unsafe {
            _lib.get(b"vkGetInstanceProcAddr\0")
                .map(|s| *s)
                .map_err(Error::LibraryLoading)?
        };

        let entry_fp_1_0 = EntryFnV1_0::load(|name| unsafe {
            get_instance_proc_addr(Instance::null(), name.to_bytes_with_nul().as_ptr())
        }).map_err(Error::MissingEntryPoint)?;

        let entry = Entry {
            _lib,
            get_instance_proc_addr,
            entry_fp_1_0
        };

        Ok(entry)
    }

    pub unsafe fn get_instance_proc_addr(&self, instance: Instance, name: *const u8) -> PFN_vkVoidFunction {
        (self.get_instance_proc_addr)(instance, name)
    }

    pub fn enumerate_instance_extension_properties(&self) -> Result<Vec<ExtensionProperties>, VkResult> {
        unsafe {
            wrapper::enumerate(|count, extensions| {
                (self.entry_fp_1_0.enumerate_instance_extension_properties)(ptr::null(), count, extensions)
            })
        }
    }

    pub fn enumerate_instance_layer_properties(&self) -> Result<Vec<LayerProperties>, VkResult> {
        unsafe {
            wrapper::enumerate(|count, layers| {
                (self.entry_fp_1_0.enumerate_instance_layer_properties)(count, layers)
            })
        }
    }

    pub fn create_instance(&self, create_info: &InstanceCreateInfo) -> Result<wrapper::Instance, VkResult> {
        let instance_handle = unsafe {
            let mut handle = Instance::null();
            let result = (self.entry_fp_1_0.create_instance)(create_info, ptr::null(), &mut handle);
            result.as_result()
                .map(|_| handle)?
        };

        wrapper::Instance::load_or_destroy(instance_handle, &self.get_instance_proc_addr)
    }

}

use crate::*;
use crate::vk100::Instance as InstanceHandle;
use std::{mem::transmute, ptr};


pub struct Instance {
    pub handle: InstanceHandle,
    instance_fp_1_0: InstanceFnV1_0,
}

impl Instance {

    pub fn load(handle: InstanceHandle, loader: &PFN_vkGetInstanceProcAddr) -> Result<Instance, &'static str> {
        let instance_fp_1_0 = InstanceFnV1_0::load(|name| unsafe {
            loader(handle, name.to_bytes_with_nul().as_ptr())
        })?;

        Ok(Instance {
            handle,
            instance_fp_1_0,
        })
    }

    /// Loads the instance commands. If they cannot be loaded, the instance is destroyed with
    /// `vkDestroyInstance` alone so the handle does not leak.
    pub fn load_or_destroy(handle: InstanceHandle, loader: &PFN_vkGetInstanceProcAddr) -> Result<Instance, VkResult> {
        match Instance::load(handle, loader) {
            Ok(instance) => Ok(instance),
            Err(_) => {
                unsafe {
                    if let Some(destroy_instance) = loader(handle, c"vkDestroyInstance".as_ptr() as *const u8) {
                        let destroy_instance: PFN_vkDestroyInstance = transmute(destroy_instance);
                        destroy_instance(handle, ptr::null());
                    }
                }

                Err(VkResult::ERROR_INITIALIZATION_FAILED)
            }
        }
    }

    /// Destroying twice is a no-op
    pub fn destroy(&mut self) {
        if self.handle.is_null() {
            return;
        }

        unsafe {
            (self.instance_fp_1_0.destroy_instance)(self.handle, ptr::null());
            self.handle = InstanceHandle::null();
        }
    }

    pub fn enumerate_physical_devices(&self) -> Result<Vec<PhysicalDevice>, VkResult> {
        unsafe {
            wrapper::enumerate(|count, devices| {
                (self.instance_fp_1_0.enumerate_physical_devices)(self.handle, count, devices)
            })
        }
    }

    pub fn get_physical_device_properties(&self, pdevice: PhysicalDevice) -> PhysicalDeviceProperties {
        unsafe {
            let mut prop = Default::default();
            (self.instance_fp_1_0.get_physical_device_properties)(pdevice, &mut prop);
            prop
        }
    }

    pub fn get_physical_device_features(&self, pdevice: PhysicalDevice) -> PhysicalDeviceFeatures {
        unsafe {
            let mut features = Default::default();
            (self.instance_fp_1_0.get_physical_device_features)(pdevice, &mut features);
            features
        }
    }

}

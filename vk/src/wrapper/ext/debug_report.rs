use crate as vk;
use std::ptr;


pub struct DebugReport {
    handle: vk::Instance,
    debug_report_fn: vk::ExtDebugReportFn,
}

impl DebugReport {

    /// Fails with the missing command name if the instance was created without `VK_EXT_debug_report`
    pub fn new(entry: &vk::wrapper::Entry, instance: &vk::wrapper::Instance) -> Result<DebugReport, &'static str> {
        let debug_report_fn = vk::ExtDebugReportFn::load(|name| {
            unsafe { entry.get_instance_proc_addr(instance.handle, name.to_bytes_with_nul().as_ptr()) }
        })?;

        Ok(DebugReport {
            handle: instance.handle,
            debug_report_fn,
        })
    }

    pub fn create_debug_report_callback(&self, create_info: &vk::DebugReportCallbackCreateInfoEXT) -> Result<vk::DebugReportCallbackEXT, vk::VkResult> {
        unsafe {
            let mut handle = vk::DebugReportCallbackEXT::null();
            (self.debug_report_fn.create_debug_report_callback_ext)(self.handle, create_info, ptr::null(), &mut handle)
                .as_result()
                .map(|_| handle)
        }
    }

    pub fn destroy_debug_report_callback(&self, callback: vk::DebugReportCallbackEXT) {
        unsafe {
            (self.debug_report_fn.destroy_debug_report_callback_ext)(self.handle, callback, ptr::null());
        }
    }

}

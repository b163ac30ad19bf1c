use std::borrow::Cow;
use std::ffi::{c_char, c_void, CStr};
use std::panic::{self, AssertUnwindSafe};
use ingot_shared::{debug_channel_err, CommonError};

use crate::runtime::RuntimeInstance;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
    Unclassified,
}

/// A message emitted by the validation layers
#[derive(Debug)]
pub struct DiagnosticMessage<'a> {
    pub flags: vk::DebugReportFlagsEXT,
    pub object_type: vk::DebugReportObjectTypeEXT,
    pub object: u64,
    pub location: usize,
    pub message_code: i32,
    pub layer_prefix: &'a str,
    pub message: &'a str,
}

impl DiagnosticMessage<'_> {

    pub fn severity(&self) -> DiagnosticSeverity {
        if self.flags.contains(vk::DebugReportFlagsEXT::ERROR) {
            DiagnosticSeverity::Error
        } else if self.flags.contains(vk::DebugReportFlagsEXT::WARNING) {
            DiagnosticSeverity::Warning
        } else {
            DiagnosticSeverity::Unclassified
        }
    }

}

/// Receives the messages of the debug report callback.
///
/// Handlers are called from inside vulkan commands: they must return promptly and must not call
/// back into the runtime.
pub trait DiagnosticsHandler {
    fn handle(&self, message: &DiagnosticMessage);
}

/// Writes diagnostics to the `vulkan` log target
#[derive(Copy, Clone, Debug, Default)]
pub struct LogDiagnostics;

impl DiagnosticsHandler for LogDiagnostics {
    fn handle(&self, msg: &DiagnosticMessage) {
        match msg.severity() {
            DiagnosticSeverity::Error => {
                log::error!(target: "vulkan", "[{}] {} on layer {}", msg.message_code, msg.message, msg.layer_prefix);
            },
            DiagnosticSeverity::Warning => {
                log::warn!(target: "vulkan", "[{}] {} on layer {}", msg.message_code, msg.message, msg.layer_prefix);
            },
            DiagnosticSeverity::Unclassified => {
                log::info!(target: "vulkan", "unclassified debug message {} (layer {}): {}", msg.message_code, msg.layer_prefix, msg.message);
            },
        }
    }
}

/// A registered debug report callback and the handler it forwards to
pub struct Diagnostics {
    callback: vk::DebugReportCallbackEXT,

    // The callback user data points inside this box
    _handler: Box<Box<dyn DiagnosticsHandler>>,
}

impl Diagnostics {

    pub fn callback(&self) -> vk::DebugReportCallbackEXT {
        self.callback
    }

    /// Must run before the instance is destroyed
    pub fn destroy<I: RuntimeInstance>(self, instance: &mut I) {
        instance.destroy_debug_report_callback(self.callback);
    }

}

/// Registers `handler` to receive the messages matching `severity`. Returns `None` without touching
/// the instance if diagnostics are disabled.
pub fn attach_diagnostics<I: RuntimeInstance>(
    instance: &mut I,
    enabled: bool,
    severity: vk::DebugReportFlagsEXT,
    handler: Box<dyn DiagnosticsHandler>,
) -> Result<Option<Diagnostics>, CommonError> {
    if !enabled {
        return Ok(None);
    }

    let handler = Box::new(handler);
    let user_data = &*handler as *const Box<dyn DiagnosticsHandler> as *mut c_void;

    let create_info = vk::DebugReportCallbackCreateInfoEXT {
        flags: severity,
        pfn_callback: Some(debug_report_callback),
        p_user_data: user_data,
        ..Default::default()
    };

    let callback = instance.create_debug_report_callback(&create_info)
        .map_err(|err| match instance.debug_report_unavailable() {
            Some(reason) => debug_channel_err!("Failed to create debug report callback, {reason}: {err}").with_status(err),
            None => debug_channel_err!("Failed to create debug report callback: {err}").with_status(err),
        })?;

    Ok(Some(Diagnostics { callback, _handler: handler }))
}

/// Entry point called by the runtime. Never unwinds and never asks the runtime to abort the
/// command that triggered the message.
///
/// `p_user_data` must be null or point to a live `Box<dyn DiagnosticsHandler>`. Without a handler
/// the message goes to [`LogDiagnostics`].
pub unsafe extern "system" fn debug_report_callback(
    flags: vk::DebugReportFlagsEXT,
    object_type: vk::DebugReportObjectTypeEXT,
    object: u64,
    location: usize,
    message_code: i32,
    p_layer_prefix: *const c_char,
    p_message: *const c_char,
    p_user_data: *mut c_void,
) -> vk::Bool32 {
    let layer_prefix = c_str_lossy(p_layer_prefix);
    let message = c_str_lossy(p_message);
    let msg = DiagnosticMessage {
        flags,
        object_type,
        object,
        location,
        message_code,
        layer_prefix: &layer_prefix,
        message: &message,
    };

    let handler = (p_user_data as *const Box<dyn DiagnosticsHandler>).as_ref();
    let _ = panic::catch_unwind(AssertUnwindSafe(|| {
        match handler {
            Some(handler) => handler.handle(&msg),
            None => LogDiagnostics.handle(&msg),
        }
    }));

    vk::FALSE
}

unsafe fn c_str_lossy<'a>(ptr: *const c_char) -> Cow<'a, str> {
    match ptr.is_null() {
        true => Cow::Borrowed(""),
        false => CStr::from_ptr(ptr).to_string_lossy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;
    use std::rc::Rc;
    use std::cell::RefCell;
    use crate::testing::{FakeInstance, RecordingHandler, captured_log, install_logger};

    macro_rules! report {
        ($flags:expr, $message:expr, $user_data:expr) => {
            unsafe {
                debug_report_callback(
                    $flags,
                    vk::DebugReportObjectTypeEXT::INSTANCE,
                    0,
                    0,
                    7,
                    c"Validation".as_ptr(),
                    $message.as_ptr(),
                    $user_data,
                )
            }
        };
    }

    fn all_severities() -> vk::DebugReportFlagsEXT {
        crate::BootstrapConfig::default().diagnostics_severity
    }

    #[test]
    fn classify() {
        let msg = |flags| DiagnosticMessage {
            flags,
            object_type: vk::DebugReportObjectTypeEXT::UNKNOWN,
            object: 0,
            location: 0,
            message_code: 0,
            layer_prefix: "",
            message: "",
        };

        let error_and_warning = vk::DebugReportFlagsEXT::ERROR | vk::DebugReportFlagsEXT::WARNING;
        assert_eq!(msg(vk::DebugReportFlagsEXT::ERROR).severity(), DiagnosticSeverity::Error);
        assert_eq!(msg(error_and_warning).severity(), DiagnosticSeverity::Error);
        assert_eq!(msg(vk::DebugReportFlagsEXT::WARNING).severity(), DiagnosticSeverity::Warning);
        assert_eq!(msg(vk::DebugReportFlagsEXT::PERFORMANCE_WARNING).severity(), DiagnosticSeverity::Unclassified);
        assert_eq!(msg(vk::DebugReportFlagsEXT::INFORMATION).severity(), DiagnosticSeverity::Unclassified);
        assert_eq!(msg(vk::DebugReportFlagsEXT::default()).severity(), DiagnosticSeverity::Unclassified);
    }

    #[test]
    fn callback_forwards_to_handler() {
        let records = Rc::new(RefCell::new(Vec::new()));
        let handler: Box<dyn DiagnosticsHandler> = Box::new(RecordingHandler { records: records.clone() });
        let user_data = &handler as *const Box<dyn DiagnosticsHandler> as *mut c_void;

        let result = report!(vk::DebugReportFlagsEXT::WARNING, c"Object 0: leaked", user_data);
        assert_eq!(result, vk::FALSE);

        let result = report!(vk::DebugReportFlagsEXT::ERROR, c"Invalid handle", user_data);
        assert_eq!(result, vk::FALSE);

        let records = records.borrow();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], (DiagnosticSeverity::Warning, 7, "Validation".to_string(), "Object 0: leaked".to_string()));
        assert_eq!(records[1].0, DiagnosticSeverity::Error);
    }

    #[test]
    fn warning_is_logged_as_warning() {
        install_logger();
        let result = report!(vk::DebugReportFlagsEXT::WARNING, c"warning-only diagnostic 5e1f", ptr::null_mut());
        assert_eq!(result, vk::FALSE);

        let records = captured_log("warning-only diagnostic 5e1f");
        assert_eq!(records, [log::Level::Warn]);
    }

    #[test]
    fn error_and_unclassified_records() {
        install_logger();
        report!(vk::DebugReportFlagsEXT::ERROR | vk::DebugReportFlagsEXT::WARNING, c"error diagnostic 93ab", ptr::null_mut());
        report!(vk::DebugReportFlagsEXT::DEBUG, c"debug diagnostic 41c0", ptr::null_mut());

        assert_eq!(captured_log("error diagnostic 93ab"), [log::Level::Error]);
        assert_eq!(captured_log("debug diagnostic 41c0"), [log::Level::Info]);
    }

    #[test]
    fn panicking_handler_does_not_unwind() {
        struct PanicHandler;
        impl DiagnosticsHandler for PanicHandler {
            fn handle(&self, _message: &DiagnosticMessage) {
                panic!("handler failure");
            }
        }

        let handler: Box<dyn DiagnosticsHandler> = Box::new(PanicHandler);
        let user_data = &handler as *const Box<dyn DiagnosticsHandler> as *mut c_void;
        let result = report!(vk::DebugReportFlagsEXT::ERROR, c"boom", user_data);
        assert_eq!(result, vk::FALSE);
    }

    #[test]
    fn null_strings() {
        let result = unsafe {
            debug_report_callback(
                vk::DebugReportFlagsEXT::INFORMATION,
                vk::DebugReportObjectTypeEXT::UNKNOWN,
                0, 0, 0,
                ptr::null(),
                ptr::null(),
                ptr::null_mut(),
            )
        };
        assert_eq!(result, vk::FALSE);
    }

    #[test]
    fn attach_disabled() {
        let mut instance = FakeInstance::default();
        let diagnostics = attach_diagnostics(&mut instance, false, all_severities(), Box::new(LogDiagnostics));
        assert!(matches!(diagnostics, Ok(None)));
        assert!(instance.callbacks.is_empty());
    }

    #[test]
    fn attach_and_report() {
        let records = Rc::new(RefCell::new(Vec::new()));
        let mut instance = FakeInstance::default();
        let handler = Box::new(RecordingHandler { records: records.clone() });

        let diagnostics = attach_diagnostics(&mut instance, true, all_severities(), handler)
            .ok()
            .flatten()
            .unwrap();

        assert_eq!(instance.callbacks.len(), 1);
        assert_eq!(instance.callbacks[0].flags, all_severities());
        assert_eq!(instance.callbacks[0].handle, diagnostics.callback());
        assert_eq!(diagnostics.callback().as_raw(), 1);

        let result = instance.emit(vk::DebugReportFlagsEXT::WARNING, c"through the runtime");
        assert_eq!(result, vk::FALSE);
        assert_eq!(records.borrow().len(), 1);
        assert_eq!(records.borrow()[0].0, DiagnosticSeverity::Warning);

        diagnostics.destroy(&mut instance);
        assert!(instance.callbacks.is_empty());
    }

    #[test]
    fn attach_failure() {
        let mut instance = FakeInstance {
            fail_debug_report: Some(vk::VkResult::ERROR_EXTENSION_NOT_PRESENT),
            ..FakeInstance::default()
        };

        let error = attach_diagnostics(&mut instance, true, all_severities(), Box::new(LogDiagnostics)).err().unwrap();
        assert_eq!(error.ty(), ingot_shared::CommonErrorType::DebugChannelCreation);
        assert_eq!(error.status(), Some(vk::VkResult::ERROR_EXTENSION_NOT_PRESENT));
    }

    #[test]
    fn attach_failure_names_missing_command() {
        let mut instance = FakeInstance {
            fail_debug_report: Some(vk::VkResult::ERROR_EXTENSION_NOT_PRESENT),
            debug_report_unavailable: Some("the loader does not expose vkCreateDebugReportCallbackEXT"),
            ..FakeInstance::default()
        };

        let error = attach_diagnostics(&mut instance, true, all_severities(), Box::new(LogDiagnostics)).err().unwrap();
        assert_eq!(error.ty(), ingot_shared::CommonErrorType::DebugChannelCreation);
        assert!(error.to_string().contains("vkCreateDebugReportCallbackEXT"));
    }

}

//! Common error model

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommonErrorType {
    System,
    BackendInit,
    RuntimeQuery,
    ValidationLayersUnavailable,
    InstanceCreation,
    DebugChannelCreation,
    NoDeviceFound,
    NoSuitableDevice,
}

impl ::std::fmt::Display for CommonErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", match self {
            CommonErrorType::System => "System",
            CommonErrorType::BackendInit => "Backend initialization",
            CommonErrorType::RuntimeQuery => "Runtime query",
            CommonErrorType::ValidationLayersUnavailable => "Validation layers unavailable",
            CommonErrorType::InstanceCreation => "Instance creation",
            CommonErrorType::DebugChannelCreation => "Debug channel creation",
            CommonErrorType::NoDeviceFound => "No physical device found",
            CommonErrorType::NoSuitableDevice => "No suitable physical device",
        })
    }
}

#[derive(Debug)]
pub struct InnerCommonError {
    pub ty: CommonErrorType,
    pub line: u32,
    pub file: String,
    pub message: String,
    pub status: Option<vk::VkResult>,
    pub original: Option<Box<InnerCommonError>>,
}

impl ::std::fmt::Display for InnerCommonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(original) = self.original.as_ref() {
            writeln!(f, "{}", original)?
        }

        write!(f, "[ERROR][{}:{}] {} - {}", self.file, self.line, self.ty, self.message)?;

        if let Some(status) = self.status {
            write!(f, " (status: {})", status)?;
        }

        Ok(())
    }
}

impl ::std::error::Error for InnerCommonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.original.as_deref().map(|original| original as &(dyn std::error::Error + 'static))
    }
}

/// An error raised by one of the initialization stages.
///
/// Stages wrap the errors of the stages they call with [`CommonError::chain`] so the final error
/// reads like a stack of contexts, innermost failure first.
#[derive(Debug)]
pub struct CommonError {
    pub inner: Box<InnerCommonError>
}

impl CommonError {
    #[cold]
    #[inline(never)]
    pub fn new(ty: CommonErrorType, file: &'static str, line: u32, message: String) -> Self {
        let inner = InnerCommonError {
            ty,
            file: file.to_string(),
            line,
            message,
            status: None,
            original: None,
        };

        CommonError {
            inner: Box::new(inner)
        }
    }

    #[cold]
    #[inline(never)]
    pub fn chain(self, ty: CommonErrorType, message: String, file: &'static str, line: u32) -> Self {
        let old = self.inner;
        let file = file.to_string();
        let inner = InnerCommonError {
            ty,
            line,
            file,
            message,
            status: None,
            original: Some(old),
        };

        CommonError { inner: Box::new(inner) }
    }

    /// Attach the status code reported by the vulkan runtime
    pub fn with_status(mut self, status: vk::VkResult) -> Self {
        self.inner.status = Some(status);
        self
    }

    /// Type of the outermost context
    pub fn ty(&self) -> CommonErrorType {
        self.inner.ty
    }

    /// Type of the error that started the chain
    pub fn root_type(&self) -> CommonErrorType {
        let mut inner = &self.inner;
        while let Some(original) = inner.original.as_ref() {
            inner = original;
        }

        inner.ty
    }

    /// First runtime status found, starting from the outermost context
    pub fn status(&self) -> Option<vk::VkResult> {
        let mut inner = Some(&self.inner);
        while let Some(current) = inner {
            if current.status.is_some() {
                return current.status;
            }

            inner = current.original.as_ref();
        }

        None
    }
}

impl ::std::fmt::Display for CommonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl ::std::error::Error for CommonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.original.as_deref().map(|original| original as &(dyn std::error::Error + 'static))
    }
}

#[macro_export]
macro_rules! err {
    ($ty:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::CommonError::new($ty, file!(), line!(), message)
    }};
}

/// Wrap an error with the context of the stage that failed
#[macro_export]
macro_rules! chain_err {
    ($err:expr, $ty:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::CommonError::chain($err, $ty, message, file!(), line!())
    }};
}

#[macro_export]
macro_rules! system_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::System, $($arg)*) }; }

#[macro_export]
macro_rules! backend_init_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::BackendInit, $($arg)*) } }

#[macro_export]
macro_rules! runtime_query_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::RuntimeQuery, $($arg)*) } }

#[macro_export]
macro_rules! validation_layers_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::ValidationLayersUnavailable, $($arg)*) } }

#[macro_export]
macro_rules! instance_creation_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::InstanceCreation, $($arg)*) } }

#[macro_export]
macro_rules! debug_channel_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::DebugChannelCreation, $($arg)*) } }

#[macro_export]
macro_rules! no_device_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::NoDeviceFound, $($arg)*) } }

#[macro_export]
macro_rules! no_suitable_device_err { ($($arg:tt)*) => { $crate::err!($crate::CommonErrorType::NoSuitableDevice, $($arg)*) } }

#![allow(dead_code)]

use std::fmt;

vk_enum!(InstanceCreateFlags);
impl InstanceCreateFlags {
    pub const ENUMERATE_PORTABILITY: Self = Self(0b1);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(transparent)]
#[must_use]
pub struct VkResult(pub i32);
impl VkResult {
    pub const SUCCESS: Self = Self(0);
    pub const NOT_READY: Self = Self(1);
    pub const TIMEOUT: Self = Self(2);
    pub const EVENT_SET: Self = Self(3);
    pub const EVENT_RESET: Self = Self(4);
    pub const INCOMPLETE: Self = Self(5);
    pub const ERROR_OUT_OF_HOST_MEMORY: Self = Self(-1);
    pub const ERROR_OUT_OF_DEVICE_MEMORY: Self = Self(-2);
    pub const ERROR_INITIALIZATION_FAILED: Self = Self(-3);
    pub const ERROR_DEVICE_LOST: Self = Self(-4);
    pub const ERROR_MEMORY_MAP_FAILED: Self = Self(-5);
    pub const ERROR_LAYER_NOT_PRESENT: Self = Self(-6);
    pub const ERROR_EXTENSION_NOT_PRESENT: Self = Self(-7);
    pub const ERROR_FEATURE_NOT_PRESENT: Self = Self(-8);
    pub const ERROR_INCOMPATIBLE_DRIVER: Self = Self(-9);
    pub const ERROR_TOO_MANY_OBJECTS: Self = Self(-10);
    pub const ERROR_FORMAT_NOT_SUPPORTED: Self = Self(-11);
    pub const ERROR_UNKNOWN: Self = Self(-13);

    /// Anything but `SUCCESS` is an error, `INCOMPLETE` included.
    #[inline(always)]
    pub fn as_result(self) -> Result<(), VkResult> {
        match self.0 == 0 {
            true => Ok(()),
            false => Err(self)
        }
    }

}

impl fmt::Display for VkResult {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            VkResult::SUCCESS => Some("Command completed successfully"),
            VkResult::NOT_READY => Some("A fence or query has not yet completed"),
            VkResult::TIMEOUT => Some("A wait operation has not completed in the specified time"),
            VkResult::EVENT_SET => Some("An event is signaled"),
            VkResult::EVENT_RESET => Some("An event is unsignaled"),
            VkResult::INCOMPLETE => Some("A return array was too small for the result"),
            VkResult::ERROR_OUT_OF_HOST_MEMORY => Some("A host memory allocation has failed"),
            VkResult::ERROR_OUT_OF_DEVICE_MEMORY => Some("A device memory allocation has failed"),
            VkResult::ERROR_INITIALIZATION_FAILED => Some("Initialization of a object has failed"),
            VkResult::ERROR_DEVICE_LOST => Some("The logical device has been lost"),
            VkResult::ERROR_MEMORY_MAP_FAILED => Some("Mapping of a memory object has failed"),
            VkResult::ERROR_LAYER_NOT_PRESENT => Some("Layer specified does not exist"),
            VkResult::ERROR_EXTENSION_NOT_PRESENT => Some("Extension specified does not exist"),
            VkResult::ERROR_FEATURE_NOT_PRESENT => Some("Requested feature is not available on this device"),
            VkResult::ERROR_INCOMPATIBLE_DRIVER => Some("Unable to find a Vulkan driver"),
            VkResult::ERROR_TOO_MANY_OBJECTS => Some("Too many objects of the type have already been created"),
            VkResult::ERROR_FORMAT_NOT_SUPPORTED => Some("Requested format is not supported on this device"),
            VkResult::ERROR_UNKNOWN => Some("An unknown error has occurred, due to an implementation or application bug"),
            _ => None,
        };
        if let Some(x) = name {
            write!(fmt, "{} ({})", x, self.0)
        } else {
            <Self as fmt::Debug>::fmt(self, fmt)
        }
    }
}

vk_enum!(StructureType);
impl StructureType {
    pub const APPLICATION_INFO: Self = Self(0);
    pub const INSTANCE_CREATE_INFO: Self = Self(1);
}

vk_enum!(PhysicalDeviceType);
impl PhysicalDeviceType {
    pub const OTHER: Self = Self(0);
    pub const INTEGRATED_GPU: Self = Self(1);
    pub const DISCRETE_GPU: Self = Self(2);
    pub const VIRTUAL_GPU: Self = Self(3);
    pub const CPU: Self = Self(4);
}

impl fmt::Display for PhysicalDeviceType {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let name = match *self {
            PhysicalDeviceType::OTHER => "other",
            PhysicalDeviceType::INTEGRATED_GPU => "integrated gpu",
            PhysicalDeviceType::DISCRETE_GPU => "discrete gpu",
            PhysicalDeviceType::VIRTUAL_GPU => "virtual gpu",
            PhysicalDeviceType::CPU => "cpu",
            _ => "unknown",
        };
        fmt.write_str(name)
    }
}

vk_enum!(SampleCountFlags);
vk_bitflags!(SampleCountFlags);
impl SampleCountFlags {
    pub const TYPE_1: Self = Self(0b1);
    pub const TYPE_2: Self = Self(0b10);
    pub const TYPE_4: Self = Self(0b100);
    pub const TYPE_8: Self = Self(0b1000);
    pub const TYPE_16: Self = Self(0b1_0000);
    pub const TYPE_32: Self = Self(0b10_0000);
    pub const TYPE_64: Self = Self(0b100_0000);
}

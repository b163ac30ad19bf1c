use ingot_shared::{no_device_err, no_suitable_device_err, runtime_query_err, CommonError};

use crate::runtime::RuntimeInstance;

/// Bonus given to discrete gpus
const DISCRETE_GPU_SCORE: u32 = 1000;

/// A physical device and its suitability score. Only lives for one selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceCandidate {
    pub handle: vk::PhysicalDevice,
    pub name: String,
    pub score: u32,
}

/// Scores a device from its type, its maximum 2D image size and its geometry shader support.
///
/// NOTE: a device supporting geometry shaders always scores 0. This looks like an inverted
/// "geometry shaders are required" check but it is the selection rule in use, keep it until the
/// intent is confirmed.
///
/// The image dimension is added with saturation instead of wrapping, so two devices whose score
/// would overflow both end at `u32::MAX` and tie. The first enumerated one is then picked.
pub fn score_device(device_type: vk::PhysicalDeviceType, max_image_dimension_2d: u32, geometry_shader: bool) -> u32 {
    let mut score = 0u32;

    // Discrete GPUs have a significant performance advantage
    if device_type == vk::PhysicalDeviceType::DISCRETE_GPU {
        score += DISCRETE_GPU_SCORE;
    }

    // Maximum possible size of textures affects graphics quality
    score = score.saturating_add(max_image_dimension_2d);

    if geometry_shader {
        score = 0;
    }

    score
}

/// Best score first. The sort is stable so the first enumerated device wins a tie.
pub fn rank_candidates(candidates: &mut [DeviceCandidate]) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
}

pub fn pick_physical_device<I: RuntimeInstance>(instance: &I) -> Result<vk::PhysicalDevice, CommonError> {
    let physical_devices = instance.enumerate_physical_devices()
        .map_err(|err| runtime_query_err!("Failed to enumerate physical devices: {err}").with_status(err) )?;

    if physical_devices.is_empty() {
        return Err(no_device_err!("No physical device detected"));
    }

    let mut candidates: Vec<DeviceCandidate> = physical_devices.iter()
        .map(|&pdevice| evaluate_device(instance, pdevice) )
        .collect();

    rank_candidates(&mut candidates);

    let chosen = &candidates[0];
    if chosen.handle.is_null() {
        return Err(no_suitable_device_err!("Failed to find a suitable GPU"));
    }

    log::info!("Selecting physical device '{}'", chosen.name);

    Ok(chosen.handle)
}

fn evaluate_device<I: RuntimeInstance>(instance: &I, pdevice: vk::PhysicalDevice) -> DeviceCandidate {
    let properties = instance.physical_device_properties(pdevice);
    let features = instance.physical_device_features(pdevice);

    let score = score_device(
        properties.device_type,
        properties.limits.max_image_dimension2_d,
        features.geometry_shader == vk::TRUE,
    );

    let name = properties.device_name().to_string();
    log::debug!("Physical device '{}' ({}) scored {}", name, properties.device_type, score);

    DeviceCandidate {
        handle: pdevice,
        name,
        score,
    }
}

//! Helpers shared by the wrappers

use crate as vk;
use std::ptr;

/// Runs the two-call enumeration protocol used by the `vkEnumerate*` commands.
///
/// `query` is called a first time with a null buffer to read the item count, then a second time
/// with a buffer of that capacity. Any status other than `SUCCESS` fails the enumeration,
/// including `INCOMPLETE` if the driver reports more items on the second call.
///
/// Safety: `query` must behave like a Vulkan enumeration command, writing at most `*count` items
/// to the buffer and storing the number of written items back in `count`.
pub unsafe fn enumerate<T, F>(mut query: F) -> Result<Vec<T>, vk::VkResult>
where
    F: FnMut(&mut u32, *mut T) -> vk::VkResult
{
    let mut count = 0;
    query(&mut count, ptr::null_mut()).as_result()?;

    let mut items: Vec<T> = Vec::with_capacity(count as usize);
    query(&mut count, items.as_mut_ptr()).as_result()?;

    let written = (count as usize).min(items.capacity());
    items.set_len(written);

    Ok(items)
}

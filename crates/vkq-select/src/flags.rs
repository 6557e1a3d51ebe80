use bitflags::bitflags;

bitflags! {
    /// Capability bits advertised by a queue family.
    ///
    /// Bit values match `VkQueueFlagBits`, so a raw `VkQueueFlags` word taken
    /// straight from `vkGetPhysicalDeviceQueueFamilyProperties` converts with
    /// [`QueueFlags::from_raw`].
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
    pub struct QueueFlags: u32 {
        const GRAPHICS = 1 << 0;
        const COMPUTE = 1 << 1;
        const TRANSFER = 1 << 2;
        const SPARSE_BINDING = 1 << 3;
    }
}

impl QueueFlags {
    /// Converts a raw `VkQueueFlags` value, dropping vendor/future bits
    /// (video decode, optical flow, ...) that the matcher does not rank.
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_truncate(raw)
    }
}

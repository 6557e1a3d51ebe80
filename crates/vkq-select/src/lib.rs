//! Tiered queue-family selection for Vulkan-style capability bitmasks.
//!
//! A device exposes several queue families, each advertising a set of
//! capability bits (graphics, compute, transfer, sparse binding). Picking the
//! family to submit work to is a ranking problem: a family dedicated to the
//! needed capability beats one that also carries unrelated capabilities
//! (extra capabilities tend to mean contention with other submitters on real
//! hardware), which in turn beats "anything that could do the job at all".
//!
//! [`select`] walks a fixed, ordered tier table for the requested
//! [`QueueProfile`] and returns the lowest-index family admitted by the
//! earliest tier that admits anything, so results are deterministic for a
//! given pool. Enumerating the families (and creating the chosen queue) is
//! the caller's problem; this crate only ranks the bitmasks it is handed and
//! never touches a driver.

mod flags;
mod select;

pub use flags::QueueFlags;
pub use select::{
    select, select_from_raw, select_queue_family, NoSuitableQueueFamily, QueueProfile,
};

use thiserror::Error;

use crate::QueueFlags;

/// Which capability the caller wants a queue family for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueProfile {
    /// Prefer a family dedicated to transfers (no graphics, no compute),
    /// then a compute family without graphics, then anything that exposes
    /// graphics, compute, or transfer at all.
    PreferTransfer,
    /// Prefer a compute family without graphics, then any family with
    /// compute. Transfer capability is masked out before every test: a
    /// `COMPUTE | TRANSFER` family ranks exactly like a `COMPUTE` one.
    PreferCompute,
}

impl QueueProfile {
    fn tiers(self) -> &'static [Tier] {
        match self {
            QueueProfile::PreferTransfer => PREFER_TRANSFER_TIERS,
            QueueProfile::PreferCompute => PREFER_COMPUTE_TIERS,
        }
    }
}

/// One preference level.
///
/// A family qualifies when, after clearing `exclude`, its flags contain all
/// of `all_of`, none of `none_of`, and (when `any_of` is non-empty) at least
/// one bit of `any_of`.
#[derive(Debug, Clone, Copy)]
struct Tier {
    exclude: QueueFlags,
    all_of: QueueFlags,
    none_of: QueueFlags,
    any_of: QueueFlags,
}

impl Tier {
    fn admits(&self, flags: QueueFlags) -> bool {
        let effective = flags.difference(self.exclude);
        effective.contains(self.all_of)
            && !effective.intersects(self.none_of)
            && (self.any_of.is_empty() || effective.intersects(self.any_of))
    }
}

const GRAPHICS_OR_COMPUTE: QueueFlags = QueueFlags::GRAPHICS.union(QueueFlags::COMPUTE);
const ANY_USABLE: QueueFlags = GRAPHICS_OR_COMPUTE.union(QueueFlags::TRANSFER);

/// Sparse binding never participates in ranking; transfer stays visible here
/// so the "no graphics, no compute" test in the first tier is exact.
const PREFER_TRANSFER_TIERS: &[Tier] = &[
    // Dedicated transfer family.
    Tier {
        exclude: QueueFlags::SPARSE_BINDING,
        all_of: QueueFlags::TRANSFER,
        none_of: GRAPHICS_OR_COMPUTE,
        any_of: QueueFlags::empty(),
    },
    // Compute without graphics still beats a graphics family for copies.
    Tier {
        exclude: QueueFlags::SPARSE_BINDING,
        all_of: QueueFlags::COMPUTE,
        none_of: QueueFlags::GRAPHICS,
        any_of: QueueFlags::empty(),
    },
    // Anything that can move bytes at all.
    Tier {
        exclude: QueueFlags::SPARSE_BINDING,
        all_of: QueueFlags::empty(),
        none_of: QueueFlags::empty(),
        any_of: ANY_USABLE,
    },
];

/// Transfer capability is irrelevant noise when hunting for compute, so it is
/// excluded alongside sparse binding in every tier.
const PREFER_COMPUTE_TIERS: &[Tier] = &[
    // Compute without graphics.
    Tier {
        exclude: QueueFlags::SPARSE_BINDING.union(QueueFlags::TRANSFER),
        all_of: QueueFlags::COMPUTE,
        none_of: QueueFlags::GRAPHICS,
        any_of: QueueFlags::empty(),
    },
    // Any compute, shared with graphics or not.
    Tier {
        exclude: QueueFlags::SPARSE_BINDING.union(QueueFlags::TRANSFER),
        all_of: QueueFlags::COMPUTE,
        none_of: QueueFlags::empty(),
        any_of: QueueFlags::empty(),
    },
];

/// Returns the index of the best-matching family in `families`, or `None`
/// when no family qualifies under any tier of `profile`.
///
/// Tiers are tried in order; the first tier that admits any family wins, and
/// ties within a tier go to the lowest index. The walk is greedy: once a tier
/// matches, later tiers are never consulted.
///
/// # Examples
///
/// ```
/// use vkq_select::{select, QueueFlags, QueueProfile};
///
/// let pool = [
///     QueueFlags::GRAPHICS | QueueFlags::COMPUTE,
///     QueueFlags::TRANSFER,
///     QueueFlags::COMPUTE | QueueFlags::TRANSFER,
/// ];
/// assert_eq!(select(&pool, QueueProfile::PreferTransfer), Some(1));
/// assert_eq!(select(&pool, QueueProfile::PreferCompute), Some(2));
/// ```
pub fn select(families: &[QueueFlags], profile: QueueProfile) -> Option<u32> {
    profile.tiers().iter().find_map(|tier| {
        families
            .iter()
            .position(|&flags| tier.admits(flags))
            .map(|index| index as u32)
    })
}

/// [`select`] over raw `VkQueueFlags` words; unknown bits are ignored.
pub fn select_from_raw(families: &[u32], profile: QueueProfile) -> Option<u32> {
    profile.tiers().iter().find_map(|tier| {
        families
            .iter()
            .position(|&raw| tier.admits(QueueFlags::from_raw(raw)))
            .map(|index| index as u32)
    })
}

/// No family in the pool qualifies under any tier of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no queue family matches the {profile:?} profile")]
pub struct NoSuitableQueueFamily {
    /// The profile that failed to match.
    pub profile: QueueProfile,
}

/// [`select`], for callers that propagate absence as an error with `?`.
pub fn select_queue_family(
    families: &[QueueFlags],
    profile: QueueProfile,
) -> Result<u32, NoSuitableQueueFamily> {
    select(families, profile).ok_or(NoSuitableQueueFamily { profile })
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: QueueFlags = QueueFlags::GRAPHICS;
    const C: QueueFlags = QueueFlags::COMPUTE;
    const T: QueueFlags = QueueFlags::TRANSFER;
    const S: QueueFlags = QueueFlags::SPARSE_BINDING;

    #[test]
    fn dedicated_transfer_tier_requires_transfer_only() {
        let tier = &PREFER_TRANSFER_TIERS[0];
        assert!(tier.admits(T));
        assert!(tier.admits(T.union(S)));
        assert!(!tier.admits(T.union(C)));
        assert!(!tier.admits(T.union(G)));
        assert!(!tier.admits(C));
    }

    #[test]
    fn transfer_fallback_tier_takes_compute_without_graphics() {
        let tier = &PREFER_TRANSFER_TIERS[1];
        assert!(tier.admits(C));
        assert!(tier.admits(C.union(T)));
        assert!(!tier.admits(G.union(C)));
    }

    #[test]
    fn last_transfer_tier_takes_any_usable_family() {
        let tier = &PREFER_TRANSFER_TIERS[2];
        assert!(tier.admits(G));
        assert!(tier.admits(G.union(C).union(T)));
        assert!(!tier.admits(S));
        assert!(!tier.admits(QueueFlags::empty()));
    }

    #[test]
    fn compute_tiers_mask_transfer_before_testing() {
        // COMPUTE | TRANSFER must rank exactly like plain COMPUTE.
        let dedicated = &PREFER_COMPUTE_TIERS[0];
        assert!(dedicated.admits(C.union(T)));
        assert!(dedicated.admits(C.union(T).union(S)));
        assert!(!dedicated.admits(G.union(C).union(T)));

        let any = &PREFER_COMPUTE_TIERS[1];
        assert!(any.admits(G.union(C).union(T)));
        assert!(!any.admits(G.union(T)));
    }

    #[test]
    fn ties_break_to_the_lowest_index() {
        let pool = [G, T, T.union(S), T];
        assert_eq!(select(&pool, QueueProfile::PreferTransfer), Some(1));
    }

    #[test]
    fn earlier_tier_always_beats_later_tier() {
        // A dedicated transfer family late in the pool still beats the
        // compute family ahead of it.
        let pool = [C, G.union(C), T];
        assert_eq!(select(&pool, QueueProfile::PreferTransfer), Some(2));
    }

    #[test]
    fn result_wrapper_reports_the_failing_profile() {
        let err = select_queue_family(&[G], QueueProfile::PreferCompute).unwrap_err();
        assert_eq!(err.profile, QueueProfile::PreferCompute);
        assert_eq!(
            err.to_string(),
            "no queue family matches the PreferCompute profile"
        );
    }
}

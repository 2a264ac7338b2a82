//! Tiered retention: which timestamps to keep

use crate::domain::timestamp::{FieldMask, Timestamp};
use crate::error::{Result, RotateError};
use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;

/// Retention granularities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeepTier {
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
}

impl KeepTier {
    /// All tiers in the order they are applied
    pub const ALL: [KeepTier; 5] = [
        KeepTier::Minutely,
        KeepTier::Hourly,
        KeepTier::Daily,
        KeepTier::Weekly,
        KeepTier::Monthly,
    ];

    /// Fields that must be equal for two timestamps to share a bucket
    pub fn mask(self) -> FieldMask {
        match self {
            KeepTier::Minutely => FieldMask::MINUTELY,
            KeepTier::Hourly => FieldMask::HOURLY,
            KeepTier::Daily => FieldMask::DAILY,
            KeepTier::Weekly => FieldMask::WEEKLY,
            KeepTier::Monthly => FieldMask::MONTHLY,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            KeepTier::Minutely => "minutely",
            KeepTier::Hourly => "hourly",
            KeepTier::Daily => "daily",
            KeepTier::Weekly => "weekly",
            KeepTier::Monthly => "monthly",
        }
    }
}

impl fmt::Display for KeepTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validate a raw keep count from the command line
pub fn keep_count(value: i64) -> Result<NonZeroU32> {
    u32::try_from(value)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(|| {
            RotateError::InvalidArgument("All --keep arguments must be >= 1".to_string())
        })
}

/// Keep counts per tier. `None` disables the tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub minutely: Option<NonZeroU32>,
    pub hourly: Option<NonZeroU32>,
    pub daily: Option<NonZeroU32>,
    pub weekly: Option<NonZeroU32>,
    pub monthly: Option<NonZeroU32>,
}

impl RetentionPolicy {
    pub fn get(&self, tier: KeepTier) -> Option<NonZeroU32> {
        match tier {
            KeepTier::Minutely => self.minutely,
            KeepTier::Hourly => self.hourly,
            KeepTier::Daily => self.daily,
            KeepTier::Weekly => self.weekly,
            KeepTier::Monthly => self.monthly,
        }
    }

    pub fn set(&mut self, tier: KeepTier, count: Option<NonZeroU32>) {
        let slot = match tier {
            KeepTier::Minutely => &mut self.minutely,
            KeepTier::Hourly => &mut self.hourly,
            KeepTier::Daily => &mut self.daily,
            KeepTier::Weekly => &mut self.weekly,
            KeepTier::Monthly => &mut self.monthly,
        };
        *slot = count;
    }

    /// Enabled tiers with their counts, in application order
    pub fn tiers(&self) -> impl Iterator<Item = (KeepTier, NonZeroU32)> + '_ {
        KeepTier::ALL
            .into_iter()
            .filter_map(|tier| self.get(tier).map(|count| (tier, count)))
    }
}

/// Greedy bucketing for one tier.
///
/// `times` must be sorted most recent first. Index 0 is always kept and
/// opens the first bucket; every later entry that falls outside the current
/// bucket is kept and opens the next one, until `keep` entries are kept.
pub fn select_tier(times: &[Timestamp], keep: NonZeroU32, mask: FieldMask) -> BTreeSet<usize> {
    let mut kept = BTreeSet::new();
    let Some(mut current) = times.first() else {
        return kept;
    };
    kept.insert(0);

    let limit = keep.get() as usize;
    for (i, time) in times.iter().enumerate().skip(1) {
        if kept.len() >= limit {
            break;
        }
        if current.equal_under_mask(time, mask) {
            continue;
        }
        current = time;
        kept.insert(i);
    }

    kept
}

/// Indices to retain: the union of every enabled tier plus the newest entry
pub fn select_retained(times: &[Timestamp], policy: &RetentionPolicy) -> BTreeSet<usize> {
    let mut retained = BTreeSet::new();
    if times.is_empty() {
        return retained;
    }
    retained.insert(0);

    for (tier, count) in policy.tiers() {
        let kept = select_tier(times, count, tier.mask());
        tracing::debug!(tier = %tier, keep = count.get(), kept = kept.len(), "tier selection");
        retained.extend(kept);
    }

    retained
}

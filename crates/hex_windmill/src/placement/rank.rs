//! Ranking orders for placement passes.
use std::cmp::Ordering;

use crate::placement::Item;

/// Total order used to rank items before placement. Ties keep stable input
/// order in every case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankKey {
    /// Case-insensitive label, ascending.
    Label,
    /// Usage count, descending.
    #[default]
    UsageCount,
    /// Last-used timestamp, descending.
    LastUsed,
    /// Pending notification count, descending.
    NotificationCount,
}

impl RankKey {
    /// Compares two items under this order.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        match self {
            RankKey::Label => a.label.to_lowercase().cmp(&b.label.to_lowercase()),
            RankKey::UsageCount => b.usage_count.cmp(&a.usage_count),
            RankKey::LastUsed => b.last_used.cmp(&a.last_used),
            RankKey::NotificationCount => b.notification_count.cmp(&a.notification_count),
        }
    }

    /// Stable-sorts a slice of items under this order.
    pub fn sort(&self, items: &mut [Item]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

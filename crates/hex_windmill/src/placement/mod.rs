//! Placement pipeline: ranking items and assigning them to spiral slots.
pub mod engine;
pub mod events;
pub mod rank;
pub mod stabilizer;

pub use engine::{
    place_items, PartitionStrategy, PlacementConfig, PlacementEngine, PlacementResult,
};
pub use events::{EventSink, FnSink, PlacementEvent, PlacementEventKind, VecSink};
pub use rank::RankKey;
pub use stabilizer::{MemoryStore, PositionStabilizer, PositionStore};

/// Sentinel key carried by placeholder items.
pub const PLACEHOLDER_KEY: &str = "_empty_";

pub type ItemKey = String;

/// An item to be placed on the grid: identity plus the usage and color data
/// the ranking and bucketing steps consume.
#[non_exhaustive]
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Identity key, unique among real items.
    pub key: ItemKey,
    /// Display label, used by label ordering.
    pub label: String,
    /// Launch count reported by the usage collaborator.
    pub usage_count: u64,
    /// Monotonic last-used timestamp; 0 = never used.
    pub last_used: u64,
    /// Pending notification count.
    pub notification_count: u32,
    /// Color bucket id assigned by the classification collaborator,
    /// expected in `[0, bucket_count)`.
    pub color_bucket: usize,
    /// Placeholders fill empty slots and are never ranked.
    pub placeholder: bool,
}

impl Item {
    /// Creates a real item with zeroed usage data.
    pub fn new(key: impl Into<ItemKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            usage_count: 0,
            last_used: 0,
            notification_count: 0,
            color_bucket: 0,
            placeholder: false,
        }
    }

    /// Creates the sentinel placeholder used to fill empty slots.
    pub fn placeholder() -> Self {
        Self {
            key: PLACEHOLDER_KEY.to_owned(),
            label: String::new(),
            usage_count: 0,
            last_used: 0,
            notification_count: 0,
            color_bucket: 0,
            placeholder: true,
        }
    }

    /// Sets the usage count.
    pub fn with_usage(mut self, usage_count: u64) -> Self {
        self.usage_count = usage_count;
        self
    }

    /// Sets the last-used timestamp.
    pub fn with_last_used(mut self, last_used: u64) -> Self {
        self.last_used = last_used;
        self
    }

    /// Sets the notification count.
    pub fn with_notifications(mut self, notification_count: u32) -> Self {
        self.notification_count = notification_count;
        self
    }

    /// Sets the color bucket id.
    pub fn with_bucket(mut self, color_bucket: usize) -> Self {
        self.color_bucket = color_bucket;
        self
    }

    /// Whether this item is the empty-slot sentinel.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let item = Item::new("app.mail", "Mail")
            .with_usage(42)
            .with_last_used(1_700_000)
            .with_notifications(3)
            .with_bucket(5);
        assert_eq!(item.key, "app.mail");
        assert_eq!(item.usage_count, 42);
        assert_eq!(item.last_used, 1_700_000);
        assert_eq!(item.notification_count, 3);
        assert_eq!(item.color_bucket, 5);
        assert!(!item.is_placeholder());
    }

    #[test]
    fn placeholder_carries_sentinel_key() {
        let p = Item::placeholder();
        assert!(p.is_placeholder());
        assert_eq!(p.key, PLACEHOLDER_KEY);
        assert!(p.label.is_empty());
    }
}

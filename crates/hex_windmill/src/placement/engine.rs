//! Placement pass: rank items, split off the inner set, and consume the
//! spiral through per-bucket queues.
use std::collections::VecDeque;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::grid::spiral::{slot_count, SectorLayout, SpiralEnumerator, SpiralSlot};
use crate::placement::events::{EventSink, PlacementEvent, PlacementEventKind};
use crate::placement::rank::RankKey;
use crate::placement::Item;

/// Strategy for dividing outer items among spiral slots.
///
/// All historical layouts are kept selectable; [`WindmillSectors`] is the
/// canonical one.
///
/// [`WindmillSectors`]: PartitionStrategy::WindmillSectors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PartitionStrategy {
    /// Proportional windmill sectors, one FIFO queue per color bucket.
    #[default]
    WindmillSectors,
    /// Fixed angular wedges, one FIFO queue per color bucket.
    AngularSectors,
    /// Ignore sector labels and deal buckets in rotation, skipping empty
    /// queues.
    RoundRobin,
}

/// Configuration for a placement pass.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct PlacementConfig {
    /// Number of color buckets the outer set is grouped into.
    pub bucket_count: usize,
    /// Top-ranked items exempt from bucketing, placed nearest the origin.
    pub inner_size: usize,
    /// Initial spiral depth; extended ring by ring if items outnumber slots.
    pub max_rings: usize,
    /// Ranking order applied to all real items.
    pub rank: RankKey,
    /// Sector division strategy for the outer set.
    pub strategy: PartitionStrategy,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            bucket_count: 6,
            inner_size: 7,
            max_rings: 25,
            rank: RankKey::default(),
            strategy: PartitionStrategy::default(),
        }
    }
}

impl PlacementConfig {
    /// Creates the default configuration: 6 buckets, inner set of 7
    /// (ring 0 + ring 1), 25 rings, usage ranking, windmill sectors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bucket count.
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    /// Sets the inner set size.
    pub fn with_inner_size(mut self, inner_size: usize) -> Self {
        self.inner_size = inner_size;
        self
    }

    /// Sets the initial spiral depth.
    pub fn with_max_rings(mut self, max_rings: usize) -> Self {
        self.max_rings = max_rings;
        self
    }

    /// Sets the ranking order.
    pub fn with_rank(mut self, rank: RankKey) -> Self {
        self.rank = rank;
        self
    }

    /// Sets the partition strategy.
    pub fn with_strategy(mut self, strategy: PartitionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(Error::InvalidConfig("bucket_count must be > 0".into()));
        }
        if self.max_rings == 0 {
            return Err(Error::InvalidConfig("max_rings must be > 0".into()));
        }
        Ok(())
    }

    /// Sector layout the configured strategy labels slots with.
    pub fn sector_layout(&self) -> SectorLayout {
        match self.strategy {
            PartitionStrategy::AngularSectors => SectorLayout::FixedAngular,
            PartitionStrategy::WindmillSectors | PartitionStrategy::RoundRobin => {
                SectorLayout::Windmill
            }
        }
    }
}

/// Result of a placement pass: one entry per consumed slot, index-aligned
/// with the spiral slot sequence.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct PlacementResult {
    /// Placed items and placeholders in slot order.
    pub entries: Vec<Item>,
    /// Real items placed.
    pub placed: usize,
    /// Placeholders emitted.
    pub placeholders: usize,
}

impl PlacementResult {
    /// Creates a new empty [`PlacementResult`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of consumed slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Runs placement passes for one validated configuration.
pub struct PlacementEngine {
    /// Configuration applied to every pass.
    pub config: PlacementConfig,
}

impl PlacementEngine {
    pub fn try_new(config: PlacementConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn new(config: PlacementConfig) -> Self {
        debug_assert!(config.bucket_count > 0, "bucket_count must be > 0");
        debug_assert!(config.max_rings > 0, "max_rings must be > 0");
        Self { config }
    }

    /// Enumerator matching this engine's configuration. Rendering and
    /// hit-testing collaborators rebuild the slot sequence through this so
    /// slot indices line up with pass results.
    pub fn enumerator(&self) -> SpiralEnumerator {
        SpiralEnumerator::new(self.config.bucket_count, self.config.sector_layout())
    }

    /// Runs a placement pass.
    pub fn place(&self, items: &[Item]) -> PlacementResult {
        place_items(items, &self.config, None)
    }

    /// Runs a placement pass, forwarding progress events to the sink.
    pub fn place_with_events(
        &self,
        items: &[Item],
        sink: &mut dyn EventSink,
    ) -> PlacementResult {
        place_items(items, &self.config, Some(sink))
    }
}

/// Assigns items to spiral slots under the given configuration.
///
/// Items are ranked, the top `inner_size` are pinned to the innermost slots
/// regardless of bucket, and the remainder is dealt into per-bucket queues
/// consumed along the spiral. Empty sector slots receive placeholders; once
/// every queue drains, the current ring is completed with placeholders and
/// the pass stops. If items outnumber the configured spiral, rings are
/// appended until every item is placed.
pub fn place_items(
    items: &[Item],
    config: &PlacementConfig,
    sink: Option<&mut dyn EventSink>,
) -> PlacementResult {
    if let Some(s) = sink {
        place_items_internal(items, config, s)
    } else {
        place_items_internal(items, config, &mut ())
    }
}

fn place_items_internal(
    items: &[Item],
    config: &PlacementConfig,
    sink: &mut dyn EventSink,
) -> PlacementResult {
    let mut real: Vec<Item> = items.iter().filter(|i| !i.placeholder).cloned().collect();
    if real.is_empty() {
        warn!("Placement pass has no items.");
        if sink.wants(PlacementEventKind::Warning) {
            sink.send(PlacementEvent::Warning {
                context: "pass".into(),
                message: "Placement pass has no items".into(),
            });
        }
        return PlacementResult::new();
    }

    config.rank.sort(&mut real);

    if sink.wants(PlacementEventKind::PassStarted) {
        sink.send(PlacementEvent::PassStarted {
            item_count: real.len(),
            slot_count: slot_count(config.max_rings),
        });
    }

    let inner_len = real.len().min(config.inner_size);
    let outer = real.split_off(inner_len);
    let inner = real;

    let mut result = PlacementResult::new();
    result.entries.extend(inner.iter().cloned());
    result.placed = inner.len();

    if outer.is_empty() {
        // Nothing to bucket; the inner items are the whole grid.
        if sink.wants(PlacementEventKind::PassFinished) {
            sink.send(PlacementEvent::PassFinished {
                placed: result.placed,
                placeholders: 0,
            });
        }
        return result;
    }

    let enumerator = SpiralEnumerator::new(config.bucket_count, config.sector_layout());
    let mut rings = config.max_rings;
    let mut slots = enumerator.generate(rings);

    let mut queues: Vec<VecDeque<Item>> = vec![VecDeque::new(); config.bucket_count];
    for item in outer {
        let bucket = if item.color_bucket < config.bucket_count {
            item.color_bucket
        } else {
            warn!(
                "Item '{}' has bucket {} outside [0, {}); clamping.",
                item.key, item.color_bucket, config.bucket_count
            );
            if sink.wants(PlacementEventKind::Warning) {
                sink.send(PlacementEvent::Warning {
                    context: format!("item:{}", item.key),
                    message: format!(
                        "bucket {} outside [0, {}); clamped",
                        item.color_bucket, config.bucket_count
                    ),
                });
            }
            config.bucket_count - 1
        };
        queues[bucket].push_back(item);
    }

    let mut cursor = 0usize;
    let mut i = config.inner_size;
    let mut last_ring = 0u32;

    while queues.iter().any(|q| !q.is_empty()) {
        if i >= slots.len() {
            rings += 1;
            slots.extend(enumerator.ring(rings));
            warn!("Spiral exhausted; extending to ring {rings}.");
            if sink.wants(PlacementEventKind::SpiralExtended) {
                sink.send(PlacementEvent::SpiralExtended {
                    rings,
                    slot_count: slots.len(),
                });
            }
        }

        let slot = slots[i];
        last_ring = slot.coord.ring();

        let bucket = match config.strategy {
            PartitionStrategy::WindmillSectors | PartitionStrategy::AngularSectors => {
                usize::try_from(slot.sector)
                    .ok()
                    .filter(|b| !queues[*b].is_empty())
            }
            PartitionStrategy::RoundRobin => {
                let hit = (0..config.bucket_count)
                    .map(|k| (cursor + k) % config.bucket_count)
                    .find(|b| !queues[*b].is_empty());
                if let Some(b) = hit {
                    cursor = (b + 1) % config.bucket_count;
                }
                hit
            }
        };

        match bucket {
            Some(b) => {
                let item = queues[b].pop_front().expect("queue checked non-empty");
                if sink.wants(PlacementEventKind::ItemPlaced) {
                    sink.send(PlacementEvent::ItemPlaced {
                        slot: slot.index,
                        ring: last_ring,
                        key: item.key.clone(),
                        bucket: b,
                    });
                }
                result.entries.push(item);
                result.placed += 1;
            }
            None => {
                push_placeholder(&mut result, &slot, sink);
            }
        }
        i += 1;
    }

    // A ring is never left partially populated: pad out the ring the last
    // item landed in before stopping.
    while i < slots.len() && slots[i].coord.ring() == last_ring {
        let slot = slots[i];
        push_placeholder(&mut result, &slot, sink);
        i += 1;
    }

    info!(
        "Placed {} items and {} placeholders over {} slots.",
        result.placed,
        result.placeholders,
        result.len(),
    );
    if sink.wants(PlacementEventKind::PassFinished) {
        sink.send(PlacementEvent::PassFinished {
            placed: result.placed,
            placeholders: result.placeholders,
        });
    }

    result
}

fn push_placeholder(result: &mut PlacementResult, slot: &SpiralSlot, sink: &mut dyn EventSink) {
    if sink.wants(PlacementEventKind::PlaceholderFilled) {
        sink.send(PlacementEvent::PlaceholderFilled {
            slot: slot.index,
            ring: slot.coord.ring(),
        });
    }
    result.entries.push(Item::placeholder());
    result.placeholders += 1;
}

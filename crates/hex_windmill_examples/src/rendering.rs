//! Shared helpers for the demo binaries: tracing setup, deterministic item
//! populations, and an ASCII view of placement results.
use hex_windmill::prelude::{Item, PlacementResult, SpiralSlot};

/// Installs a fmt subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Deterministic demo population: usage counts and buckets spread so every
/// bucket is represented and the ranking is stable across runs.
pub fn make_demo_items(count: usize, bucket_count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            Item::new(format!("app{i:02}"), format!("App {i:02}"))
                .with_usage(((i * 97) % 500) as u64)
                .with_last_used(((i * 31) % 2_000) as u64)
                .with_bucket(i % bucket_count)
        })
        .collect()
}

/// Renders a placement result as an ASCII hex map.
///
/// With a unit pointy-top tiling, hex centers sit at integer character
/// cells: column `2q + r`, row `r`. Real items print their bucket digit,
/// placeholders print `.`.
pub fn render_ascii(result: &PlacementResult, slots: &[SpiralSlot], max_rings: usize) -> String {
    let width = 4 * max_rings + 1;
    let height = 2 * max_rings + 1;
    let mut cells = vec![vec![' '; width]; height];

    for (entry, slot) in result.entries.iter().zip(slots) {
        let col = (2 * slot.coord.q + slot.coord.r) + 2 * max_rings as i32;
        let row = slot.coord.r + max_rings as i32;
        if col < 0 || row < 0 || col as usize >= width || row as usize >= height {
            continue;
        }
        cells[row as usize][col as usize] = glyph_for(entry);
    }

    let mut out = String::with_capacity(height * (width + 1));
    for row in cells {
        let line: String = row.into_iter().collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn glyph_for(entry: &Item) -> char {
    if entry.is_placeholder() {
        '.'
    } else {
        char::from_digit(entry.color_bucket as u32 % 36, 36).unwrap_or('#')
    }
}

use hex_windmill::prelude::*;
use hex_windmill_examples::{init_tracing, make_demo_items, render_ascii};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = PlacementConfig::default().with_max_rings(6);
    let engine = PlacementEngine::try_new(config)?;
    let items = make_demo_items(40, engine.config.bucket_count);

    let mut sink = VecSink::new();
    let result = engine.place_with_events(&items, &mut sink);

    let slots = engine.enumerator().generate(engine.config.max_rings);
    println!(
        "Placed {} items and {} placeholders over {} slots:",
        result.placed,
        result.placeholders,
        result.len()
    );
    println!("{}", render_ascii(&result, &slots, engine.config.max_rings));

    let warnings = sink
        .as_slice()
        .iter()
        .filter(|e| matches!(e, PlacementEvent::Warning { .. }))
        .count();
    println!("Events: {} total, {} warnings.", sink.len(), warnings);

    // Second pass with shifted usage data: the stabilizer keeps every item
    // within two slots of where it was.
    let mut store = MemoryStore::new();
    let mut stabilizer = PositionStabilizer::load_from(&store, "demo")?;
    for (index, entry) in result.entries.iter().enumerate() {
        if !entry.is_placeholder() {
            stabilizer.adjust(&entry.key, index);
        }
    }
    stabilizer.commit(&mut store, "demo")?;

    let mut shifted = items.clone();
    for item in shifted.iter_mut() {
        item.usage_count = item.usage_count.wrapping_mul(13) % 500;
    }
    let second = engine.place(&shifted);

    let mut stabilizer = PositionStabilizer::load_from(&store, "demo")?;
    let mut max_drift = 0usize;
    for (index, entry) in second.entries.iter().enumerate() {
        if entry.is_placeholder() {
            continue;
        }
        let before = stabilizer.get(&entry.key);
        let committed = stabilizer.adjust(&entry.key, index);
        if let Some(before) = before {
            max_drift = max_drift.max(before.abs_diff(committed));
        }
    }
    stabilizer.commit(&mut store, "demo")?;
    println!("Max committed drift after reshuffle: {max_drift} slots.");

    Ok(())
}

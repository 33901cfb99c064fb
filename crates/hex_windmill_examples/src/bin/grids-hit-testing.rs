use glam::Vec2;
use hex_windmill::prelude::*;
use hex_windmill_examples::{init_tracing, make_demo_items};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let engine = PlacementEngine::try_new(PlacementConfig::default().with_max_rings(4))?;
    let items = make_demo_items(25, engine.config.bucket_count);
    let result = engine.place(&items);

    let slots = engine.enumerator().generate(engine.config.max_rings);
    let index = SlotIndex::from_slots(&slots);
    let projection = GridProjection::try_new(48.0, Orientation::PointyTop)?;
    let origin = Vec2::new(540.0, 960.0);

    let taps = [
        origin,
        origin + Vec2::new(85.0, 2.0),
        origin + Vec2::new(-40.0, 75.0),
        origin + Vec2::new(600.0, 600.0),
    ];

    for tap in taps {
        let coord = projection.to_hex(tap.into(), origin.into());
        match index.get(coord).filter(|&slot| slot < result.len()) {
            Some(slot) => {
                let entry = &result.entries[slot];
                let label = if entry.is_placeholder() {
                    "(empty slot)"
                } else {
                    entry.label.as_str()
                };
                println!("tap {tap:?} -> {coord:?} slot {slot}: {label}");
            }
            None => println!("tap {tap:?} -> {coord:?}: no slot"),
        }
    }

    Ok(())
}

use hex_windmill::prelude::*;
use hex_windmill_examples::{init_tracing, make_demo_items, render_ascii};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let items = make_demo_items(36, 6);
    let strategies = [
        ("windmill sectors", PartitionStrategy::WindmillSectors),
        ("fixed angular sectors", PartitionStrategy::AngularSectors),
        ("round robin", PartitionStrategy::RoundRobin),
    ];

    for (name, strategy) in strategies {
        let config = PlacementConfig::default()
            .with_max_rings(5)
            .with_strategy(strategy);
        let engine = PlacementEngine::try_new(config)?;
        let result = engine.place(&items);
        let slots = engine.enumerator().generate(engine.config.max_rings);

        println!(
            "== {name}: {} items, {} placeholders ==",
            result.placed, result.placeholders
        );
        println!("{}", render_ascii(&result, &slots, engine.config.max_rings));
    }

    Ok(())
}

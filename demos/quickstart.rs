//! Quickstart example demonstrating the indicator pipeline.
//!
//! Run with: cargo run --example quickstart

use chrono::{Duration, TimeZone, Utc};
use geo_indicators::core::WindowSet;
use geo_indicators::prelude::*;

fn main() {
    println!("=== geo-indicators Quickstart ===\n");

    // 1. Radon readings every two minutes with a burst near the end
    let start = Utc.with_ymd_and_hms(2021, 3, 1, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..400).map(|i| start + Duration::minutes(2 * i)).collect();
    let radon: Vec<f64> = (0..400)
        .map(|i| {
            let base = 250.0 + 20.0 * (i as f64 * 0.05).sin();
            if (300..310).contains(&i) {
                base + 40.0 * (i - 299) as f64
            } else {
                base
            }
        })
        .collect();

    let table = TimeSeriesTableBuilder::new()
        .time_label("t")
        .timestamps(timestamps)
        .signal("radon", radon)
        .build()
        .unwrap();
    println!("Loaded {} readings of {:?}", table.len(), table.signal_names());

    // 2. Stage by stage, keeping every intermediate table
    let config = IndicatorConfig::new().with_windows(WindowSet::new(vec![10, 50]).unwrap());
    let steps = StepwisePipeline::with_config(config).unwrap().run(&table).unwrap();
    for t in steps.tables() {
        println!(
            "  {:<50} {:?}",
            t.title().unwrap_or_default(),
            t.signal_names()
        );
    }

    // 3. Fused path: raw columns plus one indicator column per window
    let full = CombinedIndicatorPipeline::new()
        .with_windows(WindowSet::new(vec![10, 50]).unwrap())
        .apply(&table)
        .unwrap();
    println!("\n--- {} ---", full.title().unwrap_or_default());

    let indicator = full.values("radon_10").unwrap();
    println!("{:>5} {:>10} {:>12}", "Index", "Radon", "lg |d|max10");
    for i in (280..330).step_by(5) {
        println!(
            "{:>5} {:>10.2} {:>12.3}",
            i,
            full.values("radon").unwrap()[i],
            indicator[i]
        );
    }

    // 4. Gather everything derived from radon
    let tables: Vec<_> = steps.tables().into_iter().cloned().collect();
    let component = ComponentSelector::new("radon").select(&tables).unwrap();
    println!(
        "\n{}: {:?}",
        component.title().unwrap_or_default(),
        component.signal_names()
    );
}

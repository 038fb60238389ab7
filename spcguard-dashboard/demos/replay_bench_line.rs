//! Replay the bench dataset through a shared monitor
//!
//! A producer thread plays the role of the sensor loop while the main thread
//! polls snapshots the way a dashboard endpoint would. The spike near the end
//! of the dataset drives the process out of spec and out of control.
//!
//! ```text
//! cargo run -p spcguard-dashboard --example replay_bench_line
//! ```

use spcguard_core::{
    constants::SMALL_WINDOW,
    shared::SharedMonitor,
    source::{MockSensor, BENCH_DATASET},
    MonitorConfig, ReadingSource,
};
use spcguard_dashboard::{JsonReport, LatestValue, Presenter, TextPanel};
use std::{sync::mpsc, thread};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let monitor: SharedMonitor<SMALL_WINDOW> = SharedMonitor::new(MonitorConfig::new(30.0, 80.0).batch_size(1000))?;
    let panel = TextPanel::new().unit("dB");
    let (tick_tx, tick_rx) = mpsc::channel();

    let producer = {
        let monitor = monitor.clone();
        thread::spawn(move || {
            let mut sensor = MockSensor::bench();
            for _ in 0..BENCH_DATASET.len() {
                let Some(value) = sensor.next_reading() else { break };
                if monitor.push(value).is_ok() && tick_tx.send(()).is_err() {
                    break;
                }
            }
        })
    };

    for _ in tick_rx {
        let snapshot = monitor.snapshot();
        println!("{}", LatestValue::from_snapshot(&snapshot).to_json()?);
        println!("{}\n", panel.render(&snapshot)?);
    }

    producer.join().map_err(|_| "sensor thread panicked")?;

    // Operator switches to a larger run and reads the final report
    monitor.set_batch_size(50_000);
    let report = JsonReport::new().pretty(true).include_chart(false).render(&monitor.snapshot())?;
    println!("{report}");

    if let Some(long_term) = monitor.with(|m| m.forecast_long_term()) {
        println!("long-term scrap for 50000 parts: {}", long_term.scrap_count);
    }

    Ok(())
}

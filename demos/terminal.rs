//! # Example: Terminal visualizer
//!
//! Renders a run as a single line of block characters, redrawn in place.
//!
//! ```text
//! cargo run --example terminal --features logging -- quick 60 150
//!                                                   │     │   └ speed 1..=200
//!                                                   │     └ array size
//!                                                   └ algorithm (bubble, merge, "heap sort", ...)
//! ```
//!
//! Ctrl-C cancels the run; lifecycle events are logged through `tracing`.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use sortvisor::{AlgorithmId, BarRole, Config, Controller, LogWriter, RunStatus, Snapshot};
use tracing_subscriber::EnvFilter;

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const FRAME: Duration = Duration::from_millis(33);

fn render(snap: &Snapshot, max_value: i32) -> String {
    let mut line = String::with_capacity(snap.len() * 8);
    for (i, &v) in snap.values.iter().enumerate() {
        let level = (v.max(0) as usize * (LEVELS.len() - 1)) / max_value.max(1) as usize;
        let bar = LEVELS[level.min(LEVELS.len() - 1)];
        let color = match snap.role(i) {
            BarRole::Sorted => "\x1b[32m",
            BarRole::Primary => "\x1b[31m",
            BarRole::Secondary => "\x1b[33m",
            BarRole::Plain => "\x1b[37m",
        };
        line.push_str(color);
        line.push(bar);
    }
    line.push_str("\x1b[0m");
    line
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let algorithm: AlgorithmId = args.next().as_deref().unwrap_or("merge").parse()?;
    let size: usize = args.next().map(|s| s.parse()).transpose()?.unwrap_or(50);
    let speed: u32 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(150);

    let cfg = Config {
        delay: Config::delay_for_speed(speed),
        default_size: size,
        ..Config::default()
    };
    let max_value = *cfg.value_range().end();

    let controller = Arc::new(
        Controller::builder(cfg)
            .with_subscribers(vec![Arc::new(LogWriter)])
            .build(),
    );

    let info = algorithm.info();
    println!(
        "{} (time {}, space {})",
        info.name, info.time_complexity, info.space_complexity
    );
    controller.start(algorithm)?;

    let ctrl_c = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = controller.cancel().await;
            }
        })
    };

    let mut out = std::io::stdout();
    loop {
        let snap = controller.snapshot();
        let c = snap.counters;
        write!(
            out,
            "\r{} ops={} cmp={} swp={}",
            render(&snap, max_value),
            c.operations,
            c.comparisons,
            c.swaps
        )?;
        out.flush()?;

        if !controller.status().is_running() {
            break;
        }
        tokio::time::sleep(FRAME).await;
    }
    println!();

    match controller.status() {
        RunStatus::Completed { elapsed, .. } => println!("sorted in {elapsed:?}"),
        RunStatus::Cancelled { reason: Some(reason), .. } => println!("interrupted: {reason}"),
        other => println!("{}", other.as_label()),
    }

    ctrl_c.abort();
    controller.shutdown().await;
    Ok(())
}

//! # sortvisor
//!
//! **Sortvisor** is the engine behind a sorting-algorithm visualizer.
//!
//! It runs classic in-memory sorts over an integer array while each algorithm
//! reports every comparison, write, swap and sorted-boundary move through an
//! instrumentation [`Sink`]. A [`Controller`] runs one algorithm at a time on
//! a background task, paces it step by step, lets it be cancelled mid-flight
//! and keeps a [`VisualState`] that a renderer can poll at any moment.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     presentation layer (terminal, GUI, ...)
//!        │ start / cancel / reset           ▲ snapshot()      ▲ subscribe()
//!        ▼                                  │                 │
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Controller                                                       │
//! │  - slot gate (one run at a time)                                  │
//! │  - RunStatus (watch channel)                                      │
//! │  - source array, root CancellationToken                           │
//! └──────┬──────────────────────────────────┬─────────────────────────┘
//!        ▼ spawn_blocking                   │ publish(Event)
//!     ┌──────────────┐  &dyn Sink   ┌───────┴──────┐      ┌──────────────────┐
//!     │    Sorter    │─────────────►│ VisualState  │      │ Bus (broadcast)  │
//!     │  (9 sorts)   │ highlight,   │ mirror,      │      └────────┬─────────┘
//!     └──────────────┘  write, swap,│ counters,    │               ▼
//!                       mark, pace  │ cancellable  │        SubscriberSet
//!                                   │ pacing       │      ┌────────┼────────┐
//!                                   └──────────────┘      ▼        ▼        ▼
//!                                                      LogWriter  sub2    subN
//! ```
//!
//! ### Lifecycle
//! ```text
//! Controller::start(id)
//!   ├─► rejected if a run is active ─► StartRejected, Err(AlreadyRunning)
//!   ├─► clone source, set_array, set_algorithm, arm(child token)
//!   ├─► publish RunStarting, status = Running
//!   └─► sorter.sort(buf, &state)
//!           │
//!           ├─ Ok                    ─► Completed{elapsed}   + RunCompleted
//!           ├─ Err(Interrupted)      ─► Cancelled{None}      + RunCancelled
//!           └─ Err(Fault) / panic    ─► Cancelled{reason}    + RunInterrupted
//! ```
//!
//! ## Features
//! | Area               | Description                                                 | Key types / traits                         |
//! |--------------------|-------------------------------------------------------------|--------------------------------------------|
//! | **Algorithms**     | Nine instrumented sorts and their display metadata.         | [`Sorter`], [`AlgorithmId`], [`AlgorithmInfo`] |
//! | **Instrumentation**| Notification protocol every algorithm reports through.      | [`Sink`], [`Step`], [`Recorder`]           |
//! | **Visualization**  | Mirror array, highlight, boundary, counters, pacing.        | [`VisualState`], [`Snapshot`]              |
//! | **Execution**      | Background runs with cancel/reset and status reporting.     | [`Controller`], [`RunStatus`]              |
//! | **Subscriber API** | Hook into run lifecycle events.                             | [`Subscribe`], [`Event`]                   |
//! | **Errors**         | Typed errors for algorithms and controller requests.        | [`SortError`], [`ControllerError`]         |
//! | **Configuration**  | Delay, array size and value bounds, bus capacity.           | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a built-in [`LogWriter`] that renders events through `tracing`.
//!
//! ## Example
//! ```rust
//! use sortvisor::{AlgorithmId, Config, Controller, RunStatus};
//!
//! #[tokio::main(flavor = "multi_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cfg = Config::default();
//!     cfg.delay = std::time::Duration::ZERO;
//!
//!     let controller = Controller::new(cfg);
//!     controller.start(AlgorithmId::Merge)?;
//!
//!     let status = controller.wait().await;
//!     assert!(matches!(status, RunStatus::Completed { .. }));
//!     assert!(controller.snapshot().is_fully_sorted());
//!     Ok(())
//! }
//! ```
mod algorithms;
mod config;
mod controller;
mod error;
mod events;
mod sink;
mod subscribers;
mod visual;

// ---- Public re-exports ----

pub use algorithms::{
    AlgorithmId, AlgorithmInfo, Bogo, Bubble, Bucket, Heap, Insertion, Merge, Quick, Selection,
    Sorter, Tim, UnknownAlgorithm,
};
pub use config::{Config, MAX_SPEED};
pub use controller::{Controller, ControllerBuilder, RunStatus, random_array};
pub use error::{ControllerError, SortError};
pub use events::{Bus, Event, EventKind};
pub use sink::{Recorder, Sink, Step};
pub use subscribers::{Subscribe, SubscriberSet};
pub use visual::{BarRole, Counters, Snapshot, VisualState};

// Optional: expose a built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;

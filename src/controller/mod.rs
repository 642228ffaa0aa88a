//! # Execution controller.
//!
//! Runs one algorithm at a time on a background task, keeps it cancellable
//! through per-step pacing and reports its outcome.
//!
//! ## Architecture
//! ```text
//! Controller::start(id)
//!   ├─ slot gate (parking_lot::Mutex<Option<ActiveRun>>) ── busy ──► Err(AlreadyRunning)
//!   ├─ source.clone() ──► VisualState::set_array
//!   ├─ root.child_token() ──► VisualState::arm
//!   └─ tokio::spawn ──► spawn_blocking(sorter.sort(buf, &state))
//!                             │
//!                             ▼
//!                       Outcome ──► RunStatus (watch) + Event (bus)
//! ```
//!
//! ## Rules
//! - At most one run; a second `start` is rejected, never queued.
//! - Status and slot change together under the slot lock.
//! - `cancel` returns only after the algorithm has stopped issuing sink calls.
//! - Faults and panics end the run as `Cancelled` with a reason.

mod builder;
mod core;
mod runner;
mod source;
mod status;

pub use builder::ControllerBuilder;
pub use core::Controller;
pub use source::random_array;
pub use status::RunStatus;

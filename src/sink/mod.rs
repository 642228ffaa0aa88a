//! # Instrumentation protocol.
//!
//! This module groups the notification interface algorithms report through and
//! the event vocabulary it carries:
//! - [`Sink`] the trait every algorithm receives as `&dyn Sink`
//! - [`Step`] one instrumentation event
//! - [`Recorder`] a sink that keeps every step in memory (tests, tooling)
//!
//! ```text
//! Sorter::sort(buf, sink) ──► sink.highlight / write / swap / mark_* / pace
//!                                   │
//!                 ┌─────────────────┴─────────────────┐
//!                 ▼                                   ▼
//!           VisualState                           Recorder
//!      (mirror + counters, paced)          (Vec<Step>, never sleeps)
//! ```

mod recorder;
#[allow(clippy::module_inception)]
mod sink;
mod step;

pub use recorder::Recorder;
pub use sink::Sink;
pub use step::Step;

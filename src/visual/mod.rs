//! Visualization state: the [`Sink`](crate::Sink) implementation renderers read from.
//!
//! - [`VisualState`] mirror array, highlight, boundary, counters, cancellable pacing
//! - [`Snapshot`] consistent read-only copy handed to renderers
//! - [`Counters`], [`BarRole`] derived display data

mod snapshot;
mod state;

pub use snapshot::{BarRole, Counters, Snapshot};
pub use state::VisualState;

//! Background execution of one run.
//!
//! The algorithm is synchronous and paces by blocking, so it runs on the
//! blocking pool; an async task awaits it and turns the join result into an
//! [`Outcome`]. Panics never cross this boundary.

use std::sync::Arc;

use tokio::task;
use tokio_util::sync::CancellationToken;

use crate::{
    algorithms::{AlgorithmId, Bogo, Sorter},
    config::Config,
    error::SortError,
    subscribers::panic_message,
    visual::VisualState,
};

/// Occupant of the controller's single run slot.
pub(super) struct ActiveRun {
    /// Distinguishes this run from any later one.
    pub generation: u64,
    pub algorithm: AlgorithmId,
    /// Cancelled to stop the algorithm at its next pace.
    pub token: CancellationToken,
    /// Cancelled once the outcome is recorded.
    pub done: CancellationToken,
}

/// How a run ended.
#[derive(Debug)]
pub(super) enum Outcome {
    /// Natural completion with the sorted buffer.
    Completed(Vec<i32>),
    /// Cancellation observed at a pacing point.
    Cancelled,
    /// Fault or panic inside the algorithm.
    Interrupted(String),
}

/// Builds the sorter for `id`, applying config overrides.
pub(super) fn sorter_for(id: AlgorithmId, cfg: &Config) -> Box<dyn Sorter> {
    match id {
        AlgorithmId::Bogo => Box::new(Bogo::new(cfg.bogo_max_iterations)),
        other => other.sorter(),
    }
}

/// Runs `sorter` over `buffer` on the blocking pool, reporting into `state`.
pub(super) async fn drive(
    sorter: Box<dyn Sorter>,
    buffer: Vec<i32>,
    state: Arc<VisualState>,
) -> Outcome {
    let joined = task::spawn_blocking(move || {
        let mut buffer = buffer;
        sorter.sort(&mut buffer, state.as_ref()).map(|()| buffer)
    })
    .await;

    match joined {
        Ok(Ok(sorted)) => Outcome::Completed(sorted),
        Ok(Err(SortError::Interrupted)) => Outcome::Cancelled,
        Ok(Err(err)) => Outcome::Interrupted(err.as_message()),
        Err(err) if err.is_panic() => {
            let payload = err.into_panic();
            Outcome::Interrupted(format!("panic: {}", panic_message(payload.as_ref())))
        }
        Err(err) => Outcome::Interrupted(err.to_string()),
    }
}

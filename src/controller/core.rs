use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Mutex, MutexGuard};
use tokio::{
    sync::{broadcast, watch},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::{
    algorithms::{AlgorithmId, AlgorithmInfo},
    config::Config,
    error::ControllerError,
    events::{Bus, Event, EventKind},
    visual::{Snapshot, VisualState},
};

use super::{
    builder::ControllerBuilder,
    runner::{self, ActiveRun, Outcome},
    source::random_array,
    status::RunStatus,
};

/// State shared between the controller and its run tasks.
pub(super) struct Shared {
    pub cfg: Config,
    pub bus: Bus,
    pub state: Arc<VisualState>,
    /// Single run slot; status changes happen under this lock.
    pub slot: Mutex<Option<ActiveRun>>,
    pub status: watch::Sender<RunStatus>,
    pub source: Mutex<Vec<i32>>,
    pub generation: AtomicU64,
}

impl Shared {
    /// Records the outcome of run `generation` unless it was superseded.
    ///
    /// A completed run's output becomes the next source array.
    fn finish(&self, generation: u64, algorithm: AlgorithmId, elapsed: Duration, outcome: Outcome) {
        let (status, event, sorted) = match outcome {
            Outcome::Completed(sorted) => (
                RunStatus::Completed { algorithm, elapsed },
                Event::new(EventKind::RunCompleted).with_size(sorted.len()),
                Some(sorted),
            ),
            Outcome::Cancelled => (
                RunStatus::Cancelled {
                    algorithm,
                    elapsed,
                    reason: None,
                },
                Event::new(EventKind::RunCancelled),
                None,
            ),
            Outcome::Interrupted(reason) => (
                RunStatus::Cancelled {
                    algorithm,
                    elapsed,
                    reason: Some(reason.clone()),
                },
                Event::new(EventKind::RunInterrupted).with_reason(reason),
                None,
            ),
        };

        {
            let mut slot = self.slot.lock();
            if slot.as_ref().map(|run| run.generation) != Some(generation) {
                return;
            }
            *slot = None;
            if let Some(sorted) = sorted {
                *self.source.lock() = sorted;
            }
            self.state.disarm();
            self.status.send_replace(status);
        }

        let elapsed_ms = elapsed.as_millis().min(u128::from(u64::MAX)) as u64;
        match &event.reason {
            Some(reason) => {
                tracing::warn!(algorithm = algorithm.key(), elapsed_ms, %reason, "run interrupted");
            }
            None => {
                tracing::info!(algorithm = algorithm.key(), elapsed_ms, kind = ?event.kind, "run finished");
            }
        }
        self.bus
            .publish(event.with_algorithm(algorithm).with_elapsed(elapsed));
    }
}

/// Runs one sorting algorithm at a time against a [`VisualState`].
///
/// Entry points never block on the algorithm: `start` returns as soon as the
/// run is spawned, `cancel` and `reset` await only until the run has stopped.
/// Methods that spawn (`start`, `start_with`) must be called inside a tokio
/// runtime.
pub struct Controller {
    pub(super) shared: Arc<Shared>,
    pub(super) root: CancellationToken,
    pub(super) listener_token: CancellationToken,
    pub(super) listener: Mutex<Option<JoinHandle<()>>>,
}

impl Controller {
    /// Creates a controller without subscribers, seeded with a random array
    /// of `cfg.default_size` values.
    pub fn new(cfg: Config) -> Self {
        ControllerBuilder::new(cfg).build()
    }

    /// Returns a builder for a controller with subscribers.
    pub fn builder(cfg: Config) -> ControllerBuilder {
        ControllerBuilder::new(cfg)
    }

    /// Starts `algorithm` on a private clone of the current source array.
    ///
    /// Returns [`ControllerError::AlreadyRunning`] (and changes nothing) while
    /// a run is active.
    pub fn start(&self, algorithm: AlgorithmId) -> Result<(), ControllerError> {
        self.launch(algorithm, None)
    }

    /// Starts `algorithm` on `buffer`, which also becomes the source array.
    pub fn start_with(
        &self,
        algorithm: AlgorithmId,
        buffer: Vec<i32>,
    ) -> Result<(), ControllerError> {
        self.launch(algorithm, Some(buffer))
    }

    fn launch(&self, algorithm: AlgorithmId, buffer: Option<Vec<i32>>) -> Result<(), ControllerError> {
        let shared = &self.shared;
        if self.root.is_cancelled() {
            return Err(ControllerError::Closed);
        }

        let mut slot = shared.slot.lock();
        if slot.is_some() {
            drop(slot);
            tracing::debug!(algorithm = algorithm.key(), "start rejected: run in progress");
            shared
                .bus
                .publish(Event::new(EventKind::StartRejected).with_algorithm(algorithm));
            return Err(ControllerError::AlreadyRunning);
        }

        let buffer = {
            let mut source = shared.source.lock();
            if let Some(buffer) = buffer {
                *source = buffer;
            }
            source.clone()
        };

        let generation = shared.generation.fetch_add(1, Ordering::Relaxed) + 1;
        let token = self.root.child_token();
        let done = CancellationToken::new();
        let started_at = Instant::now();

        shared.state.set_array(&buffer);
        shared.state.set_algorithm(algorithm.info());
        shared.state.arm(token.clone());
        shared.status.send_replace(RunStatus::Running {
            algorithm,
            started_at,
        });
        *slot = Some(ActiveRun {
            generation,
            algorithm,
            token,
            done: done.clone(),
        });
        drop(slot);

        let size = buffer.len();
        tracing::info!(algorithm = algorithm.key(), size, "run starting");
        shared.bus.publish(
            Event::new(EventKind::RunStarting)
                .with_algorithm(algorithm)
                .with_size(size),
        );

        let sorter = runner::sorter_for(algorithm, &shared.cfg);
        let task_shared = Arc::clone(shared);
        tokio::spawn(async move {
            let outcome = runner::drive(sorter, buffer, Arc::clone(&task_shared.state)).await;
            task_shared.finish(generation, algorithm, started_at.elapsed(), outcome);
            done.cancel();
        });
        Ok(())
    }

    /// Cancels the active run and waits until it has stopped.
    ///
    /// Once this returns, the algorithm issues no further sink calls.
    pub async fn cancel(&self) -> Result<(), ControllerError> {
        let done = {
            let slot = self.shared.slot.lock();
            let run = slot.as_ref().ok_or(ControllerError::NotRunning)?;
            tracing::debug!(algorithm = run.algorithm.key(), "cancel requested");
            run.token.cancel();
            run.done.clone()
        };
        done.cancelled().await;
        Ok(())
    }

    /// Stops any run, clears the visual state and seeds `size` fresh values.
    pub async fn reset(&self, size: usize) {
        let values = random_array(size, &self.shared.cfg);
        loop {
            let _ = self.cancel().await;
            if self.install(self.shared.slot.lock(), &values).is_ok() {
                break;
            }
        }
    }

    /// Regenerates the source array with `size` values while idle.
    pub fn resize(&self, size: usize) -> Result<(), ControllerError> {
        let values = random_array(size, &self.shared.cfg);
        self.install(self.shared.slot.lock(), &values)
    }

    /// Replaces source and mirror while `slot` is held and empty.
    fn install(
        &self,
        slot: MutexGuard<'_, Option<ActiveRun>>,
        values: &[i32],
    ) -> Result<(), ControllerError> {
        if slot.is_some() {
            return Err(ControllerError::AlreadyRunning);
        }
        let shared = &self.shared;
        shared.state.clear();
        shared.state.set_array(values);
        *shared.source.lock() = values.to_vec();
        shared.status.send_replace(RunStatus::Idle);
        drop(slot);

        let size = values.len();
        tracing::debug!(size, "array reset");
        shared
            .bus
            .publish(Event::new(EventKind::ArrayReset).with_size(size));
        Ok(())
    }

    /// Current run status.
    pub fn status(&self) -> RunStatus {
        self.shared.status.borrow().clone()
    }

    /// Receiver notified on every status change.
    pub fn watch_status(&self) -> watch::Receiver<RunStatus> {
        self.shared.status.subscribe()
    }

    /// Waits for the active run (if any) to finish and returns the final status.
    pub async fn wait(&self) -> RunStatus {
        let done = self.shared.slot.lock().as_ref().map(|run| run.done.clone());
        if let Some(done) = done {
            done.cancelled().await;
        }
        self.status()
    }

    /// Consistent copy of the visual state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.shared.state.snapshot()
    }

    /// The visual state the running algorithm reports into.
    pub fn state(&self) -> Arc<VisualState> {
        Arc::clone(&self.shared.state)
    }

    /// Sets the pacing delay; applies to a run in flight from its next pace.
    pub fn set_delay(&self, ms: u64) {
        self.shared.state.set_delay(ms);
    }

    /// Current pacing delay.
    pub fn delay(&self) -> Duration {
        self.shared.state.delay()
    }

    /// Display metadata of every available algorithm, in menu order.
    pub fn catalog(&self) -> Vec<AlgorithmInfo> {
        AlgorithmId::ALL.iter().map(AlgorithmId::info).collect()
    }

    /// Copy of the array the next `start` will sort.
    pub fn source(&self) -> Vec<i32> {
        self.shared.source.lock().clone()
    }

    /// Receiver of lifecycle events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.shared.bus.subscribe()
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.shared.cfg
    }

    /// Cancels any run, refuses new ones and drains subscribers.
    pub async fn shutdown(&self) {
        tracing::debug!("controller shutting down");
        self.root.cancel();
        self.wait().await;

        self.listener_token.cancel();
        let listener = self.listener.lock().take();
        if let Some(handle) = listener {
            let _ = handle.await;
        }
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.root.cancel();
        self.listener_token.cancel();
    }
}

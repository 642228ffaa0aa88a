use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use parking_lot::Mutex;
use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    events::Bus,
    subscribers::{Subscribe, SubscriberSet},
    visual::VisualState,
};

use super::{
    core::{Controller, Shared},
    source::random_array,
    status::RunStatus,
};

/// Builder for constructing a [`Controller`] with optional subscribers.
pub struct ControllerBuilder {
    cfg: Config,
    subscribers: Vec<Arc<dyn Subscribe>>,
}

impl ControllerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            subscribers: Vec::new(),
        }
    }

    /// Sets lifecycle event subscribers.
    ///
    /// Subscribers receive run events through dedicated workers with
    /// bounded queues. A non-empty list requires `build` to run inside a
    /// tokio runtime.
    pub fn with_subscribers(mut self, subscribers: Vec<Arc<dyn Subscribe>>) -> Self {
        self.subscribers = subscribers;
        self
    }

    /// Builds the controller, seeded with `cfg.default_size` random values.
    pub fn build(self) -> Controller {
        let bus = Bus::new(self.cfg.bus_capacity_clamped());
        let state = Arc::new(VisualState::new(self.cfg.delay));
        let source = random_array(self.cfg.default_size, &self.cfg);
        state.set_array(&source);

        let (status, _) = watch::channel(RunStatus::Idle);
        let listener_token = CancellationToken::new();
        let listener = (!self.subscribers.is_empty()).then(|| {
            let set = SubscriberSet::new(self.subscribers, bus.clone());
            spawn_listener(set, bus.subscribe(), listener_token.clone())
        });

        let shared = Arc::new(Shared {
            cfg: self.cfg,
            bus,
            state,
            slot: Mutex::new(None),
            status,
            source: Mutex::new(source),
            generation: AtomicU64::new(0),
        });

        Controller {
            shared,
            root: CancellationToken::new(),
            listener_token,
            listener: Mutex::new(listener),
        }
    }
}

/// Forwards bus events to the subscriber set until `token` fires, then
/// drains what is already queued and shuts the set down.
fn spawn_listener(
    set: SubscriberSet,
    mut rx: broadcast::Receiver<crate::events::Event>,
    token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                biased;
                res = rx.recv() => match res {
                    Ok(ev) => set.emit(&ev),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "subscriber listener lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
                _ = token.cancelled() => {
                    while let Ok(ev) = rx.try_recv() {
                        set.emit(&ev);
                    }
                    break;
                }
            }
        }
        set.shutdown().await;
    })
}

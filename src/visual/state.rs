//! # VisualState: the sink a renderer reads from.
//!
//! Owns a private mirror of the array being sorted plus everything derived from
//! the instrumentation stream (highlight, sorted boundary, counters). The
//! background run writes through the [`Sink`] methods; renderers call
//! [`VisualState::snapshot`].
//!
//! ## Architecture
//! ```text
//! background run (spawn_blocking)          renderer
//!   sink.write / swap / highlight ──►  RwLock<Frame>  ◄── snapshot()
//!   sink.pace() ──► select!{ sleep(delay), token.cancelled() }  (multi-thread runtime)
//!               └─► sliced thread sleep, token checked per slice (otherwise)
//!                          ▲
//!   Controller::cancel ────┘ (token armed per run)
//! ```
//!
//! ## Rules
//! - All frame fields live behind **one** lock: a snapshot never mixes two writes.
//! - Sink calls with an index outside the mirror are ignored; the mirror never grows.
//! - The sorted boundary never moves backwards and never exceeds the length.
//! - The delay is read on every pace, so changes apply to the running algorithm.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use tokio::{
    runtime::{Handle, RuntimeFlavor},
    task, time,
};
use tokio_util::sync::CancellationToken;

use crate::{algorithms::AlgorithmInfo, error::SortError, sink::Sink};

use super::snapshot::{Counters, Snapshot};

#[derive(Debug, Default)]
struct Frame {
    values: Vec<i32>,
    highlight: (Option<usize>, Option<usize>),
    sorted_up_to: Option<usize>,
    counters: Counters,
    algorithm: Option<AlgorithmInfo>,
}

/// Shared visualization state; implements [`Sink`].
#[derive(Debug)]
pub struct VisualState {
    frame: RwLock<Frame>,
    delay_ms: AtomicU64,
    token: Mutex<CancellationToken>,
}

impl Default for VisualState {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl VisualState {
    /// Creates an empty state with the given pacing delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            frame: RwLock::new(Frame::default()),
            delay_ms: AtomicU64::new(duration_ms(delay)),
            token: Mutex::new(CancellationToken::new()),
        }
    }

    /// Replaces the mirror with a private copy of `values`.
    ///
    /// Resets highlight and boundary; counters and algorithm info are kept.
    pub fn set_array(&self, values: &[i32]) {
        let mut frame = self.frame.write();
        frame.values = values.to_vec();
        frame.highlight = (None, None);
        frame.sorted_up_to = None;
    }

    /// Sets the algorithm shown and zeroes the counters.
    pub fn set_algorithm(&self, info: AlgorithmInfo) {
        let mut frame = self.frame.write();
        frame.algorithm = Some(info);
        frame.counters = Counters::default();
    }

    /// Removes the algorithm info and zeroes the counters.
    pub fn clear_algorithm(&self) {
        let mut frame = self.frame.write();
        frame.algorithm = None;
        frame.counters = Counters::default();
    }

    /// Back to the freshly constructed state (the delay is kept).
    pub fn clear(&self) {
        *self.frame.write() = Frame::default();
        self.disarm();
    }

    /// Sets the pacing delay in milliseconds.
    pub fn set_delay(&self, ms: u64) {
        self.delay_ms.store(ms, Ordering::Relaxed);
    }

    /// Current pacing delay.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms.load(Ordering::Relaxed))
    }

    /// Binds pacing to a run's cancellation token.
    pub fn arm(&self, token: CancellationToken) {
        *self.token.lock() = token;
    }

    /// Unbinds pacing from any run.
    pub fn disarm(&self) {
        *self.token.lock() = CancellationToken::new();
    }

    /// Length of the mirror.
    pub fn len(&self) -> usize {
        self.frame.read().values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consistent copy of everything a renderer needs.
    pub fn snapshot(&self) -> Snapshot {
        let frame = self.frame.read();
        Snapshot {
            values: frame.values.clone(),
            highlight: frame.highlight,
            sorted_up_to: frame.sorted_up_to,
            counters: frame.counters,
            algorithm: frame.algorithm,
            delay: self.delay(),
        }
    }

    /// Waits `delay` unless the armed token fires first.
    ///
    /// On a multi-thread runtime (the controller's blocking pool, or any task)
    /// the wait races the token inside `block_in_place`. Without one, or on a
    /// current-thread runtime that cannot be blocked on, it sleeps in short
    /// slices and checks the token between them.
    fn wait(&self, delay: Duration) -> Result<(), SortError> {
        let token = self.token.lock().clone();
        if token.is_cancelled() {
            return Err(SortError::Interrupted);
        }
        if delay.is_zero() {
            return Ok(());
        }

        match Handle::try_current() {
            Ok(rt) if matches!(rt.runtime_flavor(), RuntimeFlavor::MultiThread) => {
                task::block_in_place(|| {
                    rt.block_on(async {
                        tokio::select! {
                            biased;
                            _ = token.cancelled() => Err(SortError::Interrupted),
                            _ = time::sleep(delay) => Ok(()),
                        }
                    })
                })
            }
            _ => sleep_sliced(&token, delay),
        }
    }
}

/// Longest uninterrupted sleep of the polling wait.
const WAIT_SLICE: Duration = Duration::from_millis(2);

/// Thread sleep in `WAIT_SLICE` steps; returns as soon as `token` fires.
fn sleep_sliced(token: &CancellationToken, delay: Duration) -> Result<(), SortError> {
    let started = Instant::now();
    loop {
        if token.is_cancelled() {
            return Err(SortError::Interrupted);
        }
        let waited = started.elapsed();
        if waited >= delay {
            return Ok(());
        }
        std::thread::sleep((delay - waited).min(WAIT_SLICE));
    }
}

impl Sink for VisualState {
    fn highlight(&self, i: usize, j: Option<usize>) {
        let mut frame = self.frame.write();
        let len = frame.values.len();
        if i >= len || j.is_some_and(|j| j >= len) {
            return;
        }
        frame.highlight = (Some(i), j);
        frame.counters.comparisons += 1;
        frame.counters.operations += 1;
    }

    fn write(&self, index: usize, value: i32) {
        let mut frame = self.frame.write();
        if let Some(slot) = frame.values.get_mut(index) {
            *slot = value;
            frame.counters.operations += 1;
        }
    }

    fn swap(&self, i: usize, j: usize) {
        let mut frame = self.frame.write();
        let len = frame.values.len();
        if i < len && j < len {
            frame.values.swap(i, j);
            frame.counters.swaps += 1;
            frame.counters.operations += 1;
        }
    }

    fn mark_sorted(&self, k: usize) {
        let mut frame = self.frame.write();
        let k = k.min(frame.values.len());
        frame.sorted_up_to = Some(frame.sorted_up_to.map_or(k, |prev| prev.max(k)));
    }

    fn mark_all_sorted(&self) {
        let mut frame = self.frame.write();
        frame.sorted_up_to = Some(frame.values.len());
        frame.highlight = (None, None);
    }

    fn clear_highlight(&self) {
        self.frame.write().highlight = (None, None);
    }

    fn pace(&self) -> Result<(), SortError> {
        self.wait(self.delay())
    }

    fn pace_for(&self, delay: Duration) -> Result<(), SortError> {
        self.wait(delay)
    }
}

fn duration_ms(d: Duration) -> u64 {
    d.as_millis().min(u128::from(u64::MAX)) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmId;
    use crate::visual::BarRole;

    #[test]
    fn test_set_array_copies_and_resets_markers() {
        let state = VisualState::default();
        let mut source = vec![3, 1, 2];
        state.set_array(&source);
        state.highlight(0, Some(1));
        state.mark_sorted(1);

        source[0] = 99;
        state.set_array(&[4, 5]);
        let snap = state.snapshot();
        assert_eq!(snap.values, vec![4, 5]);
        assert_eq!(snap.highlight, (None, None));
        assert_eq!(snap.sorted_up_to, None);
        assert_eq!(snap.counters.comparisons, 1);
    }

    #[test]
    fn test_counters_follow_sink_calls() {
        let state = VisualState::default();
        state.set_array(&[2, 1, 3]);
        state.highlight(0, Some(1));
        state.swap(0, 1);
        state.write(2, 7);
        state.highlight(2, None);

        let snap = state.snapshot();
        assert_eq!(snap.values, vec![1, 2, 7]);
        assert_eq!(
            snap.counters,
            Counters {
                operations: 4,
                comparisons: 2,
                swaps: 1
            }
        );
        assert_eq!(snap.highlight, (Some(2), None));
    }

    #[test]
    fn test_out_of_range_calls_are_ignored() {
        let state = VisualState::default();
        state.set_array(&[1, 2]);
        state.write(5, 9);
        state.swap(0, 2);
        state.highlight(2, None);
        state.highlight(0, Some(7));
        state.mark_sorted(10);

        let snap = state.snapshot();
        assert_eq!(snap.values, vec![1, 2]);
        assert_eq!(snap.counters, Counters::default());
        assert_eq!(snap.highlight, (None, None));
        assert_eq!(snap.sorted_up_to, Some(2));
    }

    #[test]
    fn test_boundary_is_monotonic() {
        let state = VisualState::default();
        state.set_array(&[1, 2, 3, 4]);
        state.mark_sorted(3);
        state.mark_sorted(1);
        assert_eq!(state.snapshot().sorted_up_to, Some(3));

        state.highlight(3, None);
        state.mark_all_sorted();
        let snap = state.snapshot();
        assert!(snap.is_fully_sorted());
        assert_eq!(snap.highlight, (None, None));
        assert!((0..4).all(|i| snap.role(i) == BarRole::Sorted));
    }

    #[test]
    fn test_roles_follow_highlight_precedence() {
        let state = VisualState::default();
        state.set_array(&[1, 2, 3, 4]);
        state.mark_sorted(1);
        state.highlight(0, Some(2));

        let snap = state.snapshot();
        assert_eq!(snap.role(0), BarRole::Sorted);
        assert_eq!(snap.role(1), BarRole::Plain);
        assert_eq!(snap.role(2), BarRole::Secondary);
        state.highlight(3, None);
        assert_eq!(state.snapshot().role(3), BarRole::Primary);
    }

    #[test]
    fn test_algorithm_info_resets_counters() {
        let state = VisualState::default();
        state.set_array(&[1]);
        state.highlight(0, None);
        state.set_algorithm(AlgorithmId::Heap.info());

        let snap = state.snapshot();
        assert_eq!(snap.counters, Counters::default());
        assert_eq!(snap.algorithm.map(|a| a.name), Some("Heap Sort"));

        state.clear();
        let snap = state.snapshot();
        assert!(snap.is_empty());
        assert_eq!(snap.algorithm, None);
    }

    #[test]
    fn test_pace_without_delay_returns_immediately() {
        let state = VisualState::default();
        assert_eq!(state.pace(), Ok(()));
    }

    #[test]
    fn test_pace_observes_cancelled_token() {
        let state = VisualState::new(Duration::from_secs(60));
        let token = CancellationToken::new();
        state.arm(token.clone());
        token.cancel();
        assert_eq!(state.pace(), Err(SortError::Interrupted));

        state.disarm();
        state.set_delay(0);
        assert_eq!(state.pace(), Ok(()));
    }

    #[test]
    fn test_pace_is_cut_short_by_cancel() {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .unwrap();
        let state = std::sync::Arc::new(VisualState::new(Duration::from_secs(60)));
        let token = CancellationToken::new();
        state.arm(token.clone());

        let paced = {
            let state = state.clone();
            rt.spawn_blocking(move || {
                let started = std::time::Instant::now();
                (state.pace(), started.elapsed())
            })
        };
        rt.block_on(async {
            time::sleep(Duration::from_millis(20)).await;
            token.cancel();
            let (res, waited) = paced.await.unwrap();
            assert_eq!(res, Err(SortError::Interrupted));
            assert!(waited < Duration::from_secs(10));
        });
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_sorting_from_async_code_paces_on_multi_thread_runtime() {
        use crate::algorithms::{Merge, Sorter};

        let state = VisualState::new(Duration::from_millis(1));
        state.set_array(&[3, 1, 2]);
        let mut buf = vec![3, 1, 2];
        Merge.sort(&mut buf, &state).unwrap();

        assert_eq!(buf, vec![1, 2, 3]);
        let snap = state.snapshot();
        assert_eq!(snap.values, vec![1, 2, 3]);
        assert!(snap.is_fully_sorted());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_sorting_from_async_code_paces_on_current_thread_runtime() {
        use crate::algorithms::{Insertion, Sorter};

        let state = VisualState::new(Duration::from_millis(1));
        state.set_array(&[2, 1]);
        let mut buf = vec![2, 1];
        Insertion.sort(&mut buf, &state).unwrap();
        assert_eq!(state.snapshot().values, vec![1, 2]);
    }

    #[test]
    fn test_pace_without_runtime_returns_early_on_cancel() {
        let state = VisualState::new(Duration::from_secs(60));
        let token = CancellationToken::new();
        state.arm(token.clone());

        let canceller = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            token.cancel();
        });
        let started = Instant::now();
        assert_eq!(state.pace(), Err(SortError::Interrupted));
        assert!(started.elapsed() < Duration::from_secs(10));
        canceller.join().unwrap();
    }
}

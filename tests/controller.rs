//! Controller behavior on a real multi-thread runtime.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use sortvisor::{
    AlgorithmId, Config, Controller, ControllerError, Event, EventKind, RunStatus, Subscribe,
};

fn config(delay_ms: u64) -> Config {
    Config {
        delay: Duration::from_millis(delay_ms),
        default_size: 40,
        ..Config::default()
    }
}

fn reversed(n: i32) -> Vec<i32> {
    (0..n).rev().collect()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn completes_and_adopts_sorted_output() {
    let controller = Controller::new(config(0));
    let mut events = controller.subscribe();

    controller.start(AlgorithmId::Merge).unwrap();
    let status = controller.wait().await;

    let RunStatus::Completed { algorithm, .. } = status else {
        panic!("unexpected status {status:?}");
    };
    assert_eq!(algorithm, AlgorithmId::Merge);
    assert!(status.elapsed_ms().is_some());

    let snap = controller.snapshot();
    assert!(snap.is_fully_sorted());
    assert!(snap.values.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(controller.source(), snap.values);
    assert_eq!(snap.algorithm.map(|a| a.id), Some(AlgorithmId::Merge));
    assert!(snap.counters.comparisons > 0);

    assert_eq!(events.recv().await.unwrap().kind, EventKind::RunStarting);
    let done = events.recv().await.unwrap();
    assert_eq!(done.kind, EventKind::RunCompleted);
    assert_eq!(done.size, Some(40));

    // Ready for another run right away.
    controller.start(AlgorithmId::Heap).unwrap();
    assert!(matches!(controller.wait().await, RunStatus::Completed { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn cancel_stops_all_further_updates() {
    let controller = Controller::new(config(5));
    controller
        .start_with(AlgorithmId::Bubble, reversed(200))
        .unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;

    controller.cancel().await.unwrap();
    let status = controller.status();
    assert!(
        matches!(status, RunStatus::Cancelled { algorithm: AlgorithmId::Bubble, reason: None, .. }),
        "{status:?}"
    );

    let frozen = controller.snapshot();
    tokio::time::sleep(Duration::from_millis(50)).await;
    let later = controller.snapshot();
    assert_eq!(frozen.counters, later.counters);
    assert_eq!(frozen.values, later.values);
    assert!(!later.is_fully_sorted());

    assert_eq!(controller.cancel().await, Err(ControllerError::NotRunning));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn second_start_is_rejected_while_running() {
    let controller = Controller::new(config(5));
    let mut events = controller.subscribe();
    controller.start_with(AlgorithmId::Selection, reversed(100)).unwrap();

    assert_eq!(
        controller.start(AlgorithmId::Quick),
        Err(ControllerError::AlreadyRunning)
    );
    assert_eq!(controller.resize(10), Err(ControllerError::AlreadyRunning));
    assert_eq!(controller.status().algorithm(), Some(AlgorithmId::Selection));
    assert_eq!(controller.snapshot().len(), 100);

    assert_eq!(events.recv().await.unwrap().kind, EventKind::RunStarting);
    let rejected = events.recv().await.unwrap();
    assert_eq!(rejected.kind, EventKind::StartRejected);
    assert_eq!(rejected.algorithm, Some(AlgorithmId::Quick));

    controller.cancel().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn reset_cancels_and_reseeds() {
    let controller = Controller::new(config(5));
    controller.start_with(AlgorithmId::Insertion, reversed(150)).unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;

    controller.reset(12).await;

    assert_eq!(controller.status(), RunStatus::Idle);
    let snap = controller.snapshot();
    assert_eq!(snap.len(), 12);
    assert_eq!(snap.counters, Default::default());
    assert_eq!(snap.algorithm, None);
    assert_eq!(snap.sorted_up_to, None);
    assert_eq!(controller.source(), snap.values);
    let range = controller.config().value_range();
    assert!(snap.values.iter().all(|v| range.contains(v)));

    // Reset while idle is fine too.
    controller.reset(3).await;
    assert_eq!(controller.snapshot().len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn capped_bogo_still_sorts() {
    let cfg = Config {
        bogo_max_iterations: 1,
        ..config(0)
    };
    let controller = Controller::new(cfg);
    controller.start_with(AlgorithmId::Bogo, vec![3, 1, 2]).unwrap();
    assert!(matches!(controller.wait().await, RunStatus::Completed { .. }));
    assert_eq!(controller.snapshot().values, [1, 2, 3]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delay_changes_apply_mid_run() {
    let controller = Controller::new(config(200));
    controller.start_with(AlgorithmId::Heap, reversed(64)).unwrap();
    controller.set_delay(0);
    assert_eq!(controller.delay(), Duration::ZERO);

    let status = tokio::time::timeout(Duration::from_secs(5), controller.wait())
        .await
        .expect("run should speed up");
    assert!(matches!(status, RunStatus::Completed { .. }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn shutdown_cancels_and_closes() {
    let controller = Controller::new(config(10));
    controller.start_with(AlgorithmId::Tim, reversed(300)).unwrap();

    controller.shutdown().await;
    assert!(matches!(controller.status(), RunStatus::Cancelled { .. }));
    assert_eq!(
        controller.start(AlgorithmId::Merge),
        Err(ControllerError::Closed)
    );
}

#[derive(Default)]
struct Collect(Mutex<Vec<EventKind>>);

#[async_trait]
impl Subscribe for Collect {
    async fn on_event(&self, ev: &Event) {
        self.0.lock().push(ev.kind);
    }

    fn name(&self) -> &'static str {
        "collect"
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn subscribers_see_the_run_lifecycle() {
    let collect = Arc::new(Collect::default());
    let controller = Controller::builder(config(0))
        .with_subscribers(vec![collect.clone()])
        .build();

    controller.start(AlgorithmId::Quick).unwrap();
    controller.wait().await;
    controller.resize(8).unwrap();
    controller.shutdown().await;

    assert_eq!(
        *collect.0.lock(),
        vec![
            EventKind::RunStarting,
            EventKind::RunCompleted,
            EventKind::ArrayReset
        ]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn catalog_lists_every_algorithm() {
    let controller = Controller::new(config(0));
    let catalog = controller.catalog();
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog[0].name, "Bubble Sort");
    assert!(catalog.iter().zip(AlgorithmId::ALL).all(|(info, id)| info.id == id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn resize_is_refused_mid_run_and_keeps_the_array() {
    let controller = Controller::new(config(5));
    let input = reversed(80);
    controller.start_with(AlgorithmId::Bubble, input.clone()).unwrap();

    assert_eq!(controller.resize(5), Err(ControllerError::AlreadyRunning));
    assert_eq!(controller.source(), input);
    assert_eq!(controller.snapshot().len(), 80);
    assert!(controller.status().is_running());

    controller.cancel().await.unwrap();
    controller.resize(5).unwrap();
    assert_eq!(controller.status(), RunStatus::Idle);
    assert_eq!(controller.source().len(), 5);
    assert_eq!(controller.snapshot().values, controller.source());
}

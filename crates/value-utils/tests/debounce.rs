//! Timing tests for debounce on a paused tokio clock.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use value_utils::{debounce, DebounceOptions, Debounced};

const WAIT: Duration = Duration::from_millis(50);

fn recording(options: DebounceOptions) -> (Arc<Mutex<Vec<&'static str>>>, Debounced<&'static str>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let debounced = debounce(move |arg: &'static str| sink.lock().push(arg), WAIT, options).unwrap();
    (calls, debounced)
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn executes_once_after_wait() {
    let (calls, debounced) = recording(DebounceOptions::default());

    debounced.call("first");
    debounced.call("second");
    sleep_ms(100).await;

    assert_eq!(*calls.lock(), vec!["second"]);
}

#[tokio::test(start_paused = true)]
async fn does_not_execute_immediately_without_leading() {
    let (calls, debounced) = recording(DebounceOptions::default());

    debounced.call("only");
    assert!(calls.lock().is_empty());
    sleep_ms(49).await;
    assert!(calls.lock().is_empty());
    sleep_ms(2).await;
    assert_eq!(*calls.lock(), vec!["only"]);
}

#[tokio::test(start_paused = true)]
async fn each_call_restarts_the_wait() {
    let (calls, debounced) = recording(DebounceOptions::default());

    debounced.call("a");
    sleep_ms(30).await;
    debounced.call("b");
    sleep_ms(30).await;
    assert!(calls.lock().is_empty());

    sleep_ms(25).await;
    assert_eq!(*calls.lock(), vec!["b"]);
}

#[tokio::test(start_paused = true)]
async fn separate_bursts_fire_separately() {
    let (calls, debounced) = recording(DebounceOptions::default());

    debounced.call("a");
    sleep_ms(60).await;
    debounced.call("b");
    sleep_ms(60).await;

    assert_eq!(*calls.lock(), vec!["a", "b"]);
    assert!(!debounced.is_pending());
}

#[tokio::test(start_paused = true)]
async fn leading_executes_synchronously_once_per_burst() {
    let (calls, debounced) = recording(DebounceOptions { leading: true });

    debounced.call("a");
    assert_eq!(*calls.lock(), vec!["a"]);

    sleep_ms(10).await;
    debounced.call("b");
    assert_eq!(*calls.lock(), vec!["a"]);

    sleep_ms(100).await;
    assert_eq!(*calls.lock(), vec!["a"]);
    assert!(!debounced.is_pending());

    debounced.call("c");
    assert_eq!(*calls.lock(), vec!["a", "c"]);
}

#[tokio::test(start_paused = true)]
async fn leading_burst_extends_while_calls_continue() {
    let (calls, debounced) = recording(DebounceOptions { leading: true });

    for _ in 0..5 {
        debounced.call("tick");
        sleep_ms(40).await;
    }
    assert_eq!(calls.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn tuple_arguments() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&calls);
    let debounced = debounce(
        move |(id, text): (u32, String)| sink.lock().push(format!("{id}:{text}")),
        WAIT,
        DebounceOptions::default(),
    )
    .unwrap();

    debounced.call((1, "x".to_string()));
    debounced.call((2, "y".to_string()));
    sleep_ms(60).await;

    assert_eq!(*calls.lock(), vec!["2:y"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn works_on_multi_thread_runtime() {
    let (calls, debounced) = recording(DebounceOptions::default());

    let caller = debounced.clone();
    tokio::spawn(async move { caller.call("from task") }).await.unwrap();
    debounced.call("from test");
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert_eq!(*calls.lock(), vec!["from test"]);
}

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use readycheck_web::browser::{check_connectivity, read_environment};
use readycheck_web::media::AnimationLoop;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_environment_reports_user_agent() {
    let env = read_environment();
    assert!(!env.user_agent.is_empty());
    assert!(env.screen_width > 0);
}

#[wasm_bindgen_test]
async fn test_unreachable_host_counts_as_offline() {
    assert!(!check_connectivity("http://127.0.0.1:9/favicon.ico", 5000).await);
}

#[wasm_bindgen_test]
async fn test_timeout_counts_as_offline() {
    assert!(!check_connectivity("https://www.google.com/favicon.ico", 0).await);
    // The losing timer or fetch must not fire into freed callbacks.
    TimeoutFuture::new(50).await;
}

#[wasm_bindgen_test]
async fn test_animation_loop_stops_when_dropped() {
    let ticks = Rc::new(Cell::new(0u32));
    let counter = ticks.clone();
    let frames = AnimationLoop::start(move || counter.set(counter.get() + 1));

    TimeoutFuture::new(100).await;
    drop(frames);
    let seen = ticks.get();
    assert!(seen > 0);

    TimeoutFuture::new(100).await;
    assert_eq!(ticks.get(), seen);
}

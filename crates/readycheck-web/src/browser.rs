//! Thin wrappers over the browser APIs the probes read from.

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use readycheck_core::{Environment, ReadyCheckError};
use wasm_bindgen::JsValue;
use web_sys::{AbortController, RequestCache, RequestMode};

pub fn js_error(value: JsValue) -> ReadyCheckError {
    let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
    ReadyCheckError::Browser(message)
}

/// Fetch `url` without caching. Opaque responses count as reachable; any
/// network error or the timeout counts as offline.
pub async fn check_connectivity(url: &str, timeout_ms: u32) -> bool {
    let controller = match AbortController::new() {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(error = ?e, "AbortController unavailable");
            return false;
        }
    };
    let signal = controller.signal();

    let fetch = Request::get(url)
        .cache(RequestCache::NoStore)
        .mode(RequestMode::NoCors)
        .abort_signal(Some(&signal))
        .send();
    // The timer is cleared if the fetch wins and this is dropped.
    let timeout = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(fetch, timeout);

    match future::select(fetch, timeout).await {
        Either::Left((Ok(resp), _)) => {
            tracing::debug!(status = resp.status(), "Connectivity probe answered");
            true
        }
        Either::Left((Err(e), _)) => {
            tracing::warn!(error = %e, "Connectivity probe failed");
            false
        }
        Either::Right(_) => {
            controller.abort();
            tracing::warn!(timeout_ms, "Connectivity probe timed out");
            false
        }
    }
}

pub fn is_online() -> bool {
    window().navigator().on_line()
}

/// Read the values the system probe works from.
pub fn read_environment() -> Environment {
    let win = window();
    let navigator = win.navigator();
    let (screen_width, screen_height) = win
        .screen()
        .map(|s| (s.width().unwrap_or(0), s.height().unwrap_or(0)))
        .unwrap_or((0, 0));

    Environment {
        user_agent: navigator.user_agent().unwrap_or_default(),
        screen_width: screen_width.max(0) as u32,
        screen_height: screen_height.max(0) as u32,
        cookies_enabled: js_sys::Reflect::get(&navigator, &JsValue::from_str("cookieEnabled"))
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false),
        language: navigator.language().unwrap_or_default(),
    }
}

/// Seed for the simulated speed sampler.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

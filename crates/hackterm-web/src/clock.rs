//! Browser timers.

use async_trait::async_trait;
use hackterm_core::Clock;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// [`Clock`] on `window.setTimeout` and `Date.now`.
#[derive(Debug, Default)]
pub struct BrowserClock;

impl BrowserClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Clock for BrowserClock {
    async fn delay(&self, ms: u64) {
        let timeout = i32::try_from(ms).unwrap_or(i32::MAX);
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            let scheduled = web_sys::window()
                .map(|w| w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout));
            // Without a window there is nothing to wait on
            if !matches!(scheduled, Some(Ok(_))) {
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        let _ = JsFuture::from(promise).await;
    }

    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }

    fn jitter(&self, max_ms: u64) -> u64 {
        if max_ms == 0 {
            return 0;
        }
        let mut bytes = [0u8; 8];
        if getrandom::getrandom(&mut bytes).is_err() {
            return 0;
        }
        u64::from_le_bytes(bytes) % max_ms
    }
}

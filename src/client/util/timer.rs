/// Waits `millis` milliseconds on the browser event loop.
#[cfg(feature = "web")]
pub async fn sleep(millis: u32) {
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

/// Server side renders never schedule timers, so this returns immediately.
#[cfg(not(feature = "web"))]
pub async fn sleep(_millis: u32) {}

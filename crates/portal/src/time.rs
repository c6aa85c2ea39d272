//! Deadlines for in-flight backend requests.

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, LocalBoxFuture, select};

use crate::api::{ApiError, ApiResult};

/// Source of sleep futures. The browser implementation wraps `gloo-timers`.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Races `request` against `timer`, yielding [`ApiError::TimedOut`] if the timer wins.
pub async fn with_timeout<T, R, F>(timer: &T, duration: Duration, request: F) -> ApiResult<R>
where
    T: Timer + ?Sized,
    F: Future<Output = ApiResult<R>>,
{
    let request = pin!(request);
    match select(request, timer.sleep(duration)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::TimedOut(duration)),
    }
}

//! Outbound request gating
//!
//! Every fetch passes through a [`RateLimiter`] which bounds both how many
//! requests are in flight and how many start per second.

use governor::{DefaultDirectRateLimiter, Quota};
use std::num::NonZeroU32;
use tokio::sync::{AcquireError, Semaphore, SemaphorePermit};

/// Permission to issue one request
///
/// The concurrency slot is released when the permit is dropped.
#[derive(Debug)]
pub struct FetchPermit<'a> {
    _permit: SemaphorePermit<'a>,
}

/// Token-bucket rate limiter combined with a concurrency cap
///
/// Waiters are served in the semaphore's FIFO order; the token bucket
/// then spaces their starts to the configured rate.
pub struct RateLimiter {
    /// Limits requests in flight
    semaphore: Semaphore,

    /// Limits sustained request starts per second
    bucket: DefaultDirectRateLimiter,
}

impl RateLimiter {
    /// Creates a limiter
    ///
    /// # Arguments
    ///
    /// * `max_concurrent` - Maximum requests in flight (at least 1)
    /// * `requests_per_second` - Token refill rate and burst size (at least 1)
    pub fn new(max_concurrent: usize, requests_per_second: u32) -> Self {
        let rate = NonZeroU32::new(requests_per_second).unwrap_or(NonZeroU32::MIN);

        Self {
            semaphore: Semaphore::new(max_concurrent.max(1)),
            bucket: governor::RateLimiter::direct(Quota::per_second(rate)),
        }
    }

    /// Waits for a concurrency slot and a rate token
    pub async fn acquire(&self) -> Result<FetchPermit<'_>, AcquireError> {
        let permit = self.semaphore.acquire().await?;
        self.bucket.until_ready().await;
        Ok(FetchPermit { _permit: permit })
    }
}

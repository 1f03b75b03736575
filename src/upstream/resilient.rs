use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};

use super::Upstream;
use crate::config::{RetryConfig, UpstreamConfig};
use crate::error::ProxyError;

/// Wake-up, retry and deadline settings for one upstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; retry N waits `retry_delay * N`
    pub max_retries: u32,
    pub retry_delay: Duration,
    /// Pings sent before the first attempt, stopping at the first success
    pub wakeup_attempts: u32,
    pub wakeup_delay: Duration,
    /// Deadline for the whole sequence, pings included
    pub total_timeout: Duration,
}

impl RetryPolicy {
    pub fn from_config(retry: &RetryConfig, upstream: &UpstreamConfig) -> Self {
        Self {
            max_retries: retry.max_retries,
            retry_delay: Duration::from_millis(retry.retry_delay_ms),
            wakeup_attempts: retry.wakeup_attempts,
            wakeup_delay: Duration::from_millis(retry.wakeup_delay_ms),
            total_timeout: upstream.timeout(),
        }
    }

    /// One ping, one attempt, no retries
    pub fn single_shot(total_timeout: Duration) -> Self {
        Self {
            max_retries: 0,
            retry_delay: Duration::ZERO,
            wakeup_attempts: 1,
            wakeup_delay: Duration::ZERO,
            total_timeout,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default(), &UpstreamConfig::default())
    }
}

/// Wraps an upstream with wake-up pings, linear-backoff retries and an
/// outer deadline.
pub struct ResilientUpstream {
    inner: Arc<dyn Upstream>,
    policy: RetryPolicy,
}

impl ResilientUpstream {
    pub fn new(inner: Arc<dyn Upstream>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Ping until the backend answers or the attempts run out; failures are only logged
    async fn wake_up(&self) {
        let attempts = self.policy.wakeup_attempts;

        for attempt in 1..=attempts {
            debug!(
                "Wake-up attempt {}/{} for {}",
                attempt,
                attempts,
                self.inner.name()
            );

            match self.inner.ping().await {
                Ok(()) => {
                    info!("Backend {} is awake", self.inner.name());
                    return;
                }
                Err(e) => {
                    warn!(
                        "Wake-up attempt {}/{} for {} failed: {}",
                        attempt,
                        attempts,
                        self.inner.name(),
                        e
                    );
                    if attempt < attempts {
                        sleep(self.policy.wakeup_delay).await;
                    }
                }
            }
        }
    }

    async fn post_with_retry(&self, path: &str, body: &Value) -> Result<Value, ProxyError> {
        let max_retries = self.policy.max_retries;

        let mut last_error = match self.inner.post_json(path, body).await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        for attempt in 1..=max_retries {
            warn!(
                "{} request to {} failed: {}",
                self.inner.name(),
                path,
                last_error
            );

            // Linear backoff: delay grows with each attempt
            let delay = self.policy.retry_delay * attempt;
            debug!("Waiting {:?} before retry", delay);
            sleep(delay).await;

            info!("Retry attempt {}/{} for {}", attempt, max_retries, path);
            match self.inner.post_json(path, body).await {
                Ok(value) => return Ok(value),
                Err(e) => last_error = e,
            }
        }

        if max_retries == 0 {
            return Err(last_error);
        }

        Err(ProxyError::RetriesExhausted {
            retries: max_retries,
            last: Box::new(last_error),
        })
    }
}

#[async_trait]
impl Upstream for ResilientUpstream {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn ping(&self) -> Result<(), ProxyError> {
        self.wake_up().await;
        Ok(())
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ProxyError> {
        let deadline = self.policy.total_timeout;

        let sequence = async {
            self.wake_up().await;
            self.post_with_retry(path, body).await
        };

        match timeout(deadline, sequence).await {
            Ok(result) => result,
            Err(_) => {
                warn!("{} call to {} timed out after {:?}", self.name(), path, deadline);
                Err(ProxyError::Timeout(deadline))
            }
        }
    }

    /// Lookups are not retried; only the outer deadline applies
    async fn get_json(&self, path: &str) -> Result<Value, ProxyError> {
        let deadline = self.policy.total_timeout;
        timeout(deadline, self.inner.get_json(path))
            .await
            .unwrap_or(Err(ProxyError::Timeout(deadline)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fails the first `failures` posts, then succeeds
    struct FlakyUpstream {
        failures: u32,
        posts: AtomicU32,
        pings: AtomicU32,
        awake: bool,
    }

    impl FlakyUpstream {
        fn new(failures: u32, awake: bool) -> Arc<Self> {
            Arc::new(Self {
                failures,
                posts: AtomicU32::new(0),
                pings: AtomicU32::new(0),
                awake,
            })
        }
    }

    #[async_trait]
    impl Upstream for FlakyUpstream {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn ping(&self) -> Result<(), ProxyError> {
            self.pings.fetch_add(1, Ordering::SeqCst);
            if self.awake {
                Ok(())
            } else {
                Err(ProxyError::StatusError {
                    status: 503,
                    body: String::new(),
                })
            }
        }

        async fn post_json(&self, _path: &str, _body: &Value) -> Result<Value, ProxyError> {
            let call = self.posts.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(ProxyError::StatusError {
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok(json!({ "ok": true }))
            }
        }

        async fn get_json(&self, path: &str) -> Result<Value, ProxyError> {
            self.post_json(path, &Value::Null).await
        }
    }

    struct SlowUpstream;

    #[async_trait]
    impl Upstream for SlowUpstream {
        fn name(&self) -> &str {
            "slow"
        }

        async fn ping(&self) -> Result<(), ProxyError> {
            Ok(())
        }

        async fn post_json(&self, _path: &str, _body: &Value) -> Result<Value, ProxyError> {
            sleep(Duration::from_secs(3600)).await;
            Ok(Value::Null)
        }

        async fn get_json(&self, path: &str) -> Result<Value, ProxyError> {
            self.post_json(path, &Value::Null).await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_failures() {
        let flaky = FlakyUpstream::new(2, true);
        let upstream = ResilientUpstream::new(flaky.clone(), RetryPolicy::default());

        let result = upstream.post_json("/recipes/generate", &json!({})).await;

        assert_eq!(result.unwrap(), json!({ "ok": true }));
        assert_eq!(flaky.posts.load(Ordering::SeqCst), 3);
        assert_eq!(flaky.pings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_within_deadline() {
        let flaky = FlakyUpstream::new(u32::MAX, false);
        let policy = RetryPolicy::default();
        let upstream = ResilientUpstream::new(flaky.clone(), policy.clone());

        let started = tokio::time::Instant::now();
        let err = upstream
            .post_json("/recipes/generate", &json!({}))
            .await
            .unwrap_err();

        assert!(started.elapsed() <= policy.total_timeout);
        assert!(matches!(err, ProxyError::RetriesExhausted { retries: 3, .. }));
        assert_eq!(err.status(), Some(500));
        assert_eq!(flaky.posts.load(Ordering::SeqCst), 4);
        assert_eq!(flaky.pings.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_outer_timeout() {
        let upstream = ResilientUpstream::new(
            Arc::new(SlowUpstream),
            RetryPolicy::single_shot(Duration::from_secs(60)),
        );

        let err = upstream
            .post_json("/recipes/generate", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ProxyError::Timeout(_)));
        assert!(err.is_timeout());
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_is_bounded_by_deadline() {
        let upstream = ResilientUpstream::new(
            Arc::new(SlowUpstream),
            RetryPolicy::single_shot(Duration::from_secs(60)),
        );

        let err = upstream.get_json("/global-cuisine/regions").await.unwrap_err();
        assert!(matches!(err, ProxyError::Timeout(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_single_shot_surfaces_raw_error() {
        let flaky = FlakyUpstream::new(1, true);
        let upstream = ResilientUpstream::new(
            flaky.clone(),
            RetryPolicy::single_shot(Duration::from_secs(60)),
        );

        let err = upstream
            .post_json("/recipes/generate", &json!({}))
            .await
            .unwrap_err();

        assert!(matches!(err, ProxyError::StatusError { status: 500, .. }));
        assert_eq!(flaky.posts.load(Ordering::SeqCst), 1);
    }
}

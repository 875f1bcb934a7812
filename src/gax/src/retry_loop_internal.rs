// Copyright 2026 The IBM Cloud Rust SDK Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::Result;
use super::backoff_policy::BackoffPolicy;
use super::error::Error;
use super::retry_policy::RetryPolicy;
use super::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Runs `inner` until it succeeds, or the retry policy stops the loop.
///
/// Each call to `inner` receives the time left in the retry policy, if the
/// policy has a deadline. Between attempts the loop waits as long as the
/// backoff policy prescribes, using `sleep`. The loop gives up early, without
/// sleeping, if the wait would outlast the retry policy deadline.
pub async fn retry_loop<F, S, Response>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<Response>
where
    F: AsyncFnMut(Option<Duration>) -> Result<Response> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempt_count = 0_u32;
    // The delay before the next attempt, and the error that caused it.
    let mut pending: Option<(Duration, Error)> = None;
    loop {
        let remaining_time = retry_policy.remaining_time(loop_start, attempt_count);
        if let Some((delay, error)) = pending.take() {
            if remaining_time.is_some_and(|remaining| remaining < delay) {
                return Err(Error::exhausted(error));
            }
            sleep(delay).await;
        }
        attempt_count += 1;
        let error = match inner(remaining_time).await {
            Ok(response) => return Ok(response),
            Err(e) => e,
        };
        let delay = backoff_policy.on_failure(loop_start, attempt_count);
        match retry_policy.on_error(loop_start, attempt_count, idempotent, error) {
            RetryResult::Continue(e) => pending = Some((delay, e)),
            RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
        }
    }
}

/// Returns the timeout for the next attempt.
///
/// That is the smaller of the per-attempt timeout in `options` and the time
/// left in the retry loop.
pub fn effective_timeout(
    options: &crate::options::RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    match (*options.attempt_timeout(), remaining_time) {
        (Some(attempt), Some(remaining)) => Some(attempt.min(remaining)),
        (attempt, remaining) => attempt.or(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry_policy::{AlwaysRetry, RetryPolicyExt, TransientErrors};
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use test_case::test_case;

    const SECOND: Duration = Duration::from_secs(1);

    #[test_case(None, None, None)]
    #[test_case(None, Some(4 * SECOND), Some(4 * SECOND))]
    #[test_case(Some(4 * SECOND), None, Some(4 * SECOND))]
    #[test_case(Some(4 * SECOND), Some(2 * SECOND), Some(2 * SECOND))]
    #[test_case(Some(2 * SECOND), Some(4 * SECOND), Some(2 * SECOND))]
    fn effective_timeouts(
        attempt: Option<Duration>,
        remaining: Option<Duration>,
        want: Option<Duration>,
    ) {
        let mut options = crate::options::RequestOptions::default();
        if let Some(t) = attempt {
            options.set_attempt_timeout(t);
        }
        assert_eq!(effective_timeout(&options, remaining), want);
    }

    /// Returns the scripted results in order, and records the timeouts it
    /// receives.
    #[derive(Clone, Default)]
    struct Script {
        results: Arc<Mutex<VecDeque<Result<String>>>>,
        timeouts: Arc<Mutex<Vec<Option<Duration>>>>,
    }

    impl Script {
        fn new<I: IntoIterator<Item = Result<String>>>(results: I) -> Self {
            Self {
                results: Arc::new(Mutex::new(results.into_iter().collect())),
                ..Default::default()
            }
        }

        fn next(&self, timeout: Option<Duration>) -> Result<String> {
            self.timeouts.lock().unwrap().push(timeout);
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .expect("the script has enough results")
        }

        fn attempts(&self) -> usize {
            self.timeouts.lock().unwrap().len()
        }
    }

    /// Waits 10ms after the first failure, 20ms after the second, and so on.
    #[derive(Debug)]
    struct LinearBackoff;

    impl BackoffPolicy for LinearBackoff {
        fn on_failure(&self, _loop_start: std::time::Instant, attempt_count: u32) -> Duration {
            Duration::from_millis(10) * attempt_count
        }
    }

    async fn run(
        script: &Script,
        idempotent: bool,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> (Result<String>, Vec<Duration>) {
        let sleeps = Arc::new(Mutex::new(Vec::new()));
        let recorder = sleeps.clone();
        let inner = async |d| script.next(d);
        let sleep = async move |d| recorder.lock().unwrap().push(d);
        let result = retry_loop(
            inner,
            sleep,
            idempotent,
            retry_policy,
            Arc::new(LinearBackoff),
        )
        .await;
        let sleeps = sleeps.lock().unwrap().clone();
        (result, sleeps)
    }

    #[tokio::test]
    async fn immediate_success() {
        let script = Script::new([success()]);
        let (result, sleeps) = run(&script, true, Arc::new(TransientErrors)).await;
        assert_eq!(result.ok().as_deref(), Some("ready"));
        assert!(sleeps.is_empty(), "{sleeps:?}");
        assert_eq!(script.attempts(), 1);
    }

    #[tokio::test]
    async fn immediate_failure() {
        let script = Script::new([not_found()]);
        let (result, sleeps) = run(&script, true, Arc::new(TransientErrors)).await;
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert!(sleeps.is_empty(), "{sleeps:?}");
    }

    #[tokio::test]
    async fn retry_then_success() {
        let script = Script::new([unavailable(0), unavailable(1), success()]);
        let (result, sleeps) = run(&script, false, Arc::new(TransientErrors)).await;
        assert_eq!(result.ok().as_deref(), Some("ready"));
        assert_eq!(
            sleeps,
            vec![Duration::from_millis(10), Duration::from_millis(20)]
        );
        assert_eq!(script.attempts(), 3);
    }

    #[tokio::test]
    async fn attempts_exhausted() {
        let script = Script::new((0..3).map(unavailable));
        let policy = TransientErrors.with_attempt_limit(3);
        let (result, sleeps) = run(&script, true, Arc::new(policy)).await;
        // The loop returns the last error.
        let err = result.unwrap_err();
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"attempt=2"))
        );
        assert_eq!(sleeps.len(), 2, "{sleeps:?}");
    }

    #[test_case(Arc::new(AlwaysRetry.with_attempt_limit(2)))]
    #[test_case(Arc::new(TransientErrors.with_attempt_limit(5)))]
    #[tokio::test]
    async fn transient_then_not_found(policy: Arc<dyn RetryPolicy>) {
        let script = Script::new([unavailable(0), not_found(), success()]);
        let (result, sleeps) = run(&script, true, policy).await;
        let err = result.unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(sleeps.len(), 1, "{sleeps:?}");
        assert_eq!(script.attempts(), 2);
    }

    #[test_case(true)]
    #[test_case(false)]
    #[tokio::test]
    async fn policy_receives_idempotency(idempotent: bool) {
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy.expect_remaining_time().return_const(None);
        retry_policy
            .expect_on_error()
            .once()
            .withf(move |_, count, i, _| *count == 1 && *i == idempotent)
            .returning(|_, _, _, e| RetryResult::Permanent(e));

        let script = Script::new([unavailable(0)]);
        let (result, _) = run(&script, idempotent, Arc::new(retry_policy)).await;
        assert!(result.is_err(), "{result:?}");
    }

    #[tokio::test]
    async fn no_sleep_past_deadline() {
        let mut seq = mockall::Sequence::new();
        let mut retry_policy = MockRetryPolicy::new();
        retry_policy
            .expect_remaining_time()
            .once()
            .in_sequence(&mut seq)
            .return_const(Some(10 * SECOND));
        retry_policy
            .expect_on_error()
            .once()
            .in_sequence(&mut seq)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        // Less than the 10ms backoff after the first failure.
        retry_policy
            .expect_remaining_time()
            .once()
            .in_sequence(&mut seq)
            .return_const(Some(Duration::from_millis(5)));

        let script = Script::new([unavailable(0)]);
        let (result, sleeps) = run(&script, true, Arc::new(retry_policy)).await;
        let err = result.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert!(sleeps.is_empty(), "{sleeps:?}");
        assert_eq!(*script.timeouts.lock().unwrap(), vec![Some(10 * SECOND)]);
    }

    fn success() -> Result<String> {
        Ok("ready".into())
    }

    fn unavailable(attempt: usize) -> Result<String> {
        Err(Error::http(
            503,
            http::HeaderMap::new(),
            bytes::Bytes::from(format!("attempt={attempt}")),
        ))
    }

    fn not_found() -> Result<String> {
        Err(Error::http(
            404,
            http::HeaderMap::new(),
            bytes::Bytes::from_static(b"project not found"),
        ))
    }

    mockall::mock! {
        #[derive(Debug)]
        RetryPolicy {}
        impl RetryPolicy for RetryPolicy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }
}

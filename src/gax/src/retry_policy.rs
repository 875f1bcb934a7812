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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries do not retry requests unless the application
//! configures a retry policy, either for the client via
//! [ClientBuilder::with_retry_policy] or for a single request via
//! [RequestOptionsBuilder::with_retry_policy].
//!
//! # Example
//! ```
//! # use ibm_cloud_gax::retry_policy::*;
//! use std::time::Duration;
//! // Retry transient errors for at most 30 seconds or at most 5 attempts:
//! // whichever limit is reached first stops the retry loop.
//! let policy = TransientErrors
//!     .with_time_limit(Duration::from_secs(30))
//!     .with_attempt_limit(5);
//! ```
//!
//! Applications may override the default behavior and retry operations that,
//! while not safe in general, may be safe given how the application manages
//! resources. For example, creating a resource with a fixed name fails with
//! `409 Conflict` if a previous attempt succeeded, and the application may
//! treat that as success.
//!
//! [ClientBuilder::with_retry_policy]: crate::client_builder::ClientBuilder::with_retry_policy
//! [RequestOptionsBuilder::with_retry_policy]: crate::options::RequestOptionsBuilder::with_retry_policy

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method called after the first attempt, so the value is
    ///   always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many more
    ///   errors are retryable on idempotent operations.
    /// * `error` - the last error when attempting the request.
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next request
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::retry_policy::*;
    /// use std::time::{Duration, Instant};
    /// let policy = AlwaysRetry.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// let error = ibm_cloud_gax::error::Error::io("simulated");
    /// assert!(policy.on_error(start, 1, true, error).is_exhausted());
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The policy passes through the results from the inner policy as long as
    /// `attempt_count < maximum_attempts`. Once the maximum number of attempts
    /// is reached, the policy returns [Exhausted][RetryResult::Exhausted] if
    /// the inner policy returns [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::retry_policy::*;
    /// use std::time::Instant;
    /// let policy = AlwaysRetry.with_attempt_limit(3);
    /// let error = || ibm_cloud_gax::error::Error::io("simulated");
    /// assert!(policy.on_error(Instant::now(), 1, true, error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, true, error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, true, error()).is_exhausted());
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// A retry policy that retries transient errors.
///
/// This policy should be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy treats `429 Too Many Requests` and any `5xx` status other than
/// `501 Not Implemented` as transient. Errors sending the request or receiving
/// the response are retried only on idempotent requests. Failures to create
/// the authentication headers are retried when the authenticator reports them
/// as transient, as the request never left the client.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::retry_policy::*;
/// use std::time::Instant;
/// let policy = TransientErrors.with_attempt_limit(3);
/// let error = ibm_cloud_gax::error::Error::http(503, http::HeaderMap::new(), bytes::Bytes::new());
/// assert!(policy.on_error(Instant::now(), 1, false, error).is_continue());
/// ```
#[derive(Clone, Debug)]
pub struct TransientErrors;

impl RetryPolicy for TransientErrors {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if error.is_io() {
            return if idempotent {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        match error.http_status_code() {
            Some(code) if is_transient_status(code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

fn is_transient_status(code: u16) -> bool {
    code == http::StatusCode::TOO_MANY_REQUESTS.as_u16()
        || (code >= 500 && code != http::StatusCode::NOT_IMPLEMENTED.as_u16())
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop.
///
/// The policy retries all errors. This may be useful if the service guarantees
/// idempotency, maybe through the use of request ids.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
///
/// This policy is useful when the client already has (or may already have) a
/// retry policy configured, and you want to avoid retrying a particular
/// request.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// The `remaining_time()` function returns the remaining time. This is always
/// [Duration::ZERO] once or after the policy's deadline is reached.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [TransientErrors].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: TransientErrors,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if std::time::Instant::now() >= start + self.maximum_duration {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn remaining_time(&self, start: std::time::Instant, count: u32) -> Option<Duration> {
        let deadline = start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(std::time::Instant::now());
        if let Some(inner) = self.inner.remaining_time(start, count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `on_error()` is called only after a failure, so setting
/// the maximum number of attempts to 0 or 1 results in no retries.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. However, once the maximum number of
/// attempts is reached, the policy replaces any
/// [Continue][RetryResult::Continue] result with
/// [Exhausted][RetryResult::Exhausted].
///
/// # Parameters
/// * `P` - the inner retry policy.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = TransientErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    ///
    /// # Example
    /// ```
    /// # use ibm_cloud_gax::retry_policy::*;
    /// use std::time::Instant;
    /// let policy = LimitedAttemptCount::new(5);
    /// let error = ibm_cloud_gax::error::Error::http(503, http::HeaderMap::new(), bytes::Bytes::new());
    /// assert!(policy.on_error(Instant::now(), 10, true, error).is_exhausted());
    /// ```
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: TransientErrors,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        start: std::time::Instant,
        count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self.inner.on_error(start, count, idempotent, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if count >= self.maximum_attempts {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn remaining_time(&self, start: std::time::Instant, count: u32) -> Option<Duration> {
        self.inner.remaining_time(start, count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CredentialsError;
    use std::time::Instant;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, loop_start: std::time::Instant, attempt_count: u32, idempotent: bool, error: Error) -> RetryResult;
            fn remaining_time(&self, loop_start: std::time::Instant, attempt_count: u32) -> Option<Duration>;
        }
    }

    fn http_error(code: u16) -> Error {
        Error::http(code, http::HeaderMap::new(), bytes::Bytes::from_static(b"err"))
    }

    // Verify `RetryPolicyArg` can be converted from the desired types.
    #[test]
    fn retry_policy_arg() {
        let policy = LimitedAttemptCount::new(3);
        let _ = RetryPolicyArg::from(policy);

        let policy: Arc<dyn RetryPolicy> = Arc::new(LimitedAttemptCount::new(3));
        let _ = RetryPolicyArg::from(policy);
    }

    #[test_case(429, true)]
    #[test_case(500, true)]
    #[test_case(501, false)]
    #[test_case(502, true)]
    #[test_case(503, true)]
    #[test_case(504, true)]
    #[test_case(400, false)]
    #[test_case(401, false)]
    #[test_case(404, false)]
    #[test_case(409, false)]
    #[test_case(412, false)]
    fn transient_errors_http(code: u16, want: bool) {
        let p = TransientErrors;
        let now = Instant::now();
        assert_eq!(p.on_error(now, 1, true, http_error(code)).is_continue(), want);
        assert_eq!(p.on_error(now, 1, false, http_error(code)).is_continue(), want);
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn transient_errors_service() {
        use crate::error::{ErrorDetail, ServiceError};
        let p = TransientErrors;
        let now = Instant::now();
        let status = ServiceError::default().set_errors([ErrorDetail::new().set_code("overloaded")]);
        let error = Error::service_with_http_metadata(status.clone(), Some(503), None);
        assert!(p.on_error(now, 1, false, error).is_continue());
        let error = Error::service_with_http_metadata(status, Some(404), None);
        assert!(p.on_error(now, 1, true, error).is_permanent());
    }

    #[test]
    fn transient_errors_other() {
        let p = TransientErrors;
        let now = Instant::now();

        assert!(p.on_error(now, 1, true, Error::io("err")).is_continue());
        assert!(p.on_error(now, 1, false, Error::io("err")).is_permanent());

        let transient = || Error::authentication(CredentialsError::from_msg(true, "err"));
        assert!(p.on_error(now, 1, true, transient()).is_continue());
        assert!(p.on_error(now, 1, false, transient()).is_continue());

        let permanent = || Error::authentication(CredentialsError::from_msg(false, "err"));
        assert!(p.on_error(now, 1, true, permanent()).is_permanent());
        assert!(p.on_error(now, 1, false, permanent()).is_permanent());

        assert!(p.on_error(now, 1, true, Error::ser("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::deser("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::binding("err")).is_permanent());
        assert!(p.on_error(now, 1, true, Error::timeout("err")).is_permanent());
    }

    #[test]
    fn always_retry() {
        let p = AlwaysRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, false, http_error(404)).is_continue());
        assert!(p.on_error(now, 1, true, Error::deser("err")).is_continue());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn never_retry() {
        let p = NeverRetry;
        let now = Instant::now();
        assert!(p.on_error(now, 1, true, http_error(503)).is_exhausted());
        assert!(p.on_error(now, 1, true, Error::io("err")).is_exhausted());
        assert!(p.remaining_time(now, 1).is_none());
    }

    #[test]
    fn limited_elapsed_time_inner_continues() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));

        let start = Instant::now() - Duration::from_secs(10);
        assert!(policy.on_error(start, 1, true, Error::io("err")).is_continue());

        let start = Instant::now() - Duration::from_secs(120);
        assert!(policy.on_error(start, 1, true, Error::io("err")).is_exhausted());
    }

    #[test]
    fn limited_elapsed_time_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));

        let start = Instant::now() - Duration::from_secs(10);
        assert!(policy.on_error(start, 1, true, Error::io("err")).is_permanent());

        let start = Instant::now() - Duration::from_secs(120);
        assert!(policy.on_error(start, 1, true, Error::io("err")).is_permanent());
    }

    #[test]
    fn limited_elapsed_time_remaining() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(5)));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let got = policy.remaining_time(Instant::now(), 1);
        assert_eq!(got, Some(Duration::from_secs(5)));

        let mut mock = MockPolicy::new();
        mock.expect_remaining_time().times(1).returning(|_, _| None);
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let start = Instant::now() - Duration::from_secs(120);
        let got = policy.remaining_time(start, 1);
        assert_eq!(got, Some(Duration::ZERO));

        let mut mock = MockPolicy::new();
        mock.expect_remaining_time().times(1).returning(|_, _| None);
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let got = policy.remaining_time(Instant::now(), 1);
        assert!(
            got.is_some_and(|d| d <= Duration::from_secs(60) && d > Duration::from_secs(50)),
            "{got:?}"
        );
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(3)
            .returning(|_, _, _, e| RetryResult::Continue(e));
        let policy = LimitedAttemptCount::custom(mock, 3);
        let now = Instant::now();
        assert!(policy.on_error(now, 1, true, Error::io("err")).is_continue());
        assert!(policy.on_error(now, 2, true, Error::io("err")).is_continue());
        assert!(policy.on_error(now, 3, true, Error::io("err")).is_exhausted());
    }

    #[test]
    fn limited_attempt_count_inner_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, _, _, e| RetryResult::Permanent(e));
        let policy = LimitedAttemptCount::custom(mock, 2);
        let now = Instant::now();
        assert!(policy.on_error(now, 1, true, Error::io("err")).is_permanent());
        assert!(policy.on_error(now, 5, true, Error::io("err")).is_permanent());
    }

    #[test]
    fn limited_attempt_count_remaining() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_, _| Some(Duration::from_secs(123)));
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert_eq!(
            policy.remaining_time(Instant::now(), 1),
            Some(Duration::from_secs(123))
        );
    }

    #[test]
    fn composed() {
        let policy = TransientErrors
            .with_time_limit(Duration::from_secs(60))
            .with_attempt_limit(3);
        let now = Instant::now();
        assert!(policy.on_error(now, 1, true, http_error(503)).is_continue());
        assert!(policy.on_error(now, 3, true, http_error(503)).is_exhausted());
        assert!(policy.on_error(now, 1, true, http_error(404)).is_permanent());
        assert!(policy.remaining_time(now, 1).is_some());
    }
}

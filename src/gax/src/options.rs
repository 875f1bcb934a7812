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

//! Options that change how a single request is sent.
//!
//! Every operation builder implements [RequestOptionsBuilder]. Use it to set a
//! timeout, retry or backoff policy, or extra headers for one call, overriding
//! the defaults configured in the client.
//!
//! ```
//! # use ibm_cloud_gax::options::RequestOptions;
//! # use ibm_cloud_gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
//! use std::time::Duration;
//! let mut options = RequestOptions::default();
//! options.set_attempt_timeout(Duration::from_secs(5));
//! options.set_retry_policy(AlwaysRetry.with_attempt_limit(3));
//! assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(5)));
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use http::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;

/// The configuration of one request.
///
/// Applications see this type when mocking a client stub. All other code
/// sets it through the operation builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    headers: HeaderMap,
}

impl RequestOptions {
    /// Whether the request can be safely repeated, if known.
    ///
    /// The Code Engine client marks `GET`, `PUT` and `DELETE` requests as
    /// idempotent, and `POST` and `PATCH` requests as not idempotent, unless
    /// the application overrides it.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// A prefix for the `User-Agent` header, for example `my-app/1.2`.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    pub fn attempt_timeout(&self) -> &Option<Duration> {
        &self.attempt_timeout
    }

    /// Limits the duration of each attempt.
    ///
    /// The retry policy limits the duration of the full request, including
    /// any retries and the backoff between them.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn retry_policy(&self) -> &Option<Arc<dyn RetryPolicy>> {
        &self.retry_policy
    }

    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// Extra headers, applied after the client defaults.
    ///
    /// Setting the same header twice keeps the last value.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
}

/// Setters for [RequestOptions], implemented by every operation builder.
///
/// ```no_run
/// # use ibm_cloud_gax::options::RequestOptionsBuilder;
/// # fn sample<B: RequestOptionsBuilder>(builder: B) -> B {
/// use http::{HeaderName, HeaderValue};
/// builder
///     .with_attempt_timeout(std::time::Duration::from_secs(10))
///     .with_header(
///         HeaderName::from_static("x-correlation-id"),
///         HeaderValue::from_static("deploy-42"),
///     )
/// # }
/// ```
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Overrides the default idempotency of the operation.
    fn with_idempotency(self, v: bool) -> Self;

    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self;

    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    fn with_header(self, name: HeaderName, value: HeaderValue) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! Implementation details for the generated clients. Not part of the
    //! public API.
    use super::RequestOptions;

    /// Gives [super::RequestOptionsBuilder] access to the options held by an
    /// operation builder.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Applies the idempotency of an operation, unless the application
    /// already chose one.
    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.idempotent.get_or_insert(default);
        options
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.request_options().set_header(name, value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::{RequestBuilder, set_default_idempotency};
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use test_case::test_case;

    // Stands in for an operation builder, such as `ListApps`.
    #[derive(Debug, Default)]
    struct ListApps(RequestOptions);

    impl RequestBuilder for ListApps {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0
        }
    }

    #[test]
    fn defaults() {
        let options = RequestOptions::default();
        assert_eq!(options.idempotent(), None);
        assert_eq!(options.user_agent(), &None);
        assert_eq!(options.attempt_timeout(), &None);
        assert!(options.retry_policy().is_none());
        assert!(options.backoff_policy().is_none());
        assert!(options.headers().is_empty());
    }

    #[test]
    fn builder_setters() -> anyhow::Result<()> {
        let timeout = Duration::from_millis(2500);
        let ListApps(options) = ListApps::default()
            .with_idempotency(false)
            .with_user_agent("deployer/0.3")
            .with_attempt_timeout(timeout)
            .with_retry_policy(AlwaysRetry.with_attempt_limit(4))
            .with_backoff_policy(ExponentialBackoffBuilder::new().build()?)
            .with_header(
                HeaderName::from_static("x-correlation-id"),
                HeaderValue::from_static("first"),
            )
            .with_header(
                HeaderName::from_static("x-correlation-id"),
                HeaderValue::from_static("second"),
            );
        assert_eq!(options.idempotent(), Some(false));
        assert_eq!(options.user_agent().as_deref(), Some("deployer/0.3"));
        assert_eq!(options.attempt_timeout(), &Some(timeout));
        assert!(options.retry_policy().is_some(), "{options:?}");
        assert!(options.backoff_policy().is_some(), "{options:?}");
        assert_eq!(options.headers().len(), 1);
        assert_eq!(
            options.headers().get("x-correlation-id"),
            Some(&HeaderValue::from_static("second"))
        );
        Ok(())
    }

    #[test_case(None, true, true)]
    #[test_case(None, false, false)]
    #[test_case(Some(false), true, false)]
    #[test_case(Some(true), false, true)]
    fn default_idempotency(explicit: Option<bool>, default: bool, want: bool) {
        let mut options = RequestOptions::default();
        if let Some(v) = explicit {
            options.set_idempotency(v);
        }
        let options = set_default_idempotency(options, default);
        assert_eq!(options.idempotent(), Some(want));
    }
}

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

//! The decisions a [RetryPolicy][crate::retry_policy::RetryPolicy] makes
//! after each failed attempt.

use crate::error::Error;

/// What the retry loop should do with a failed attempt.
///
/// Each variant carries the error returned by the attempt. The loop returns it
/// to the application when it stops.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::{error::Error, retry_policy::RetryPolicy};
/// # use ibm_cloud_gax::retry_result::RetryResult;
/// // Retries conflicts, which Code Engine returns while a resource is busy.
/// #[derive(Debug)]
/// struct RetryConflicts;
/// impl RetryPolicy for RetryConflicts {
///     fn on_error(
///         &self,
///         _loop_start: std::time::Instant,
///         attempt_count: u32,
///         _idempotent: bool,
///         error: Error,
///     ) -> RetryResult {
///         match error.http_status_code() {
///             Some(409) if attempt_count < 5 => RetryResult::Continue(error),
///             Some(409) => RetryResult::Exhausted(error),
///             _ => RetryResult::Permanent(error),
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// Retrying cannot help, stop the loop.
    Permanent(Error),

    /// The error is transient, but the policy has run out of attempts or time.
    Exhausted(Error),

    /// Try again after the backoff delay.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// Returns the error carried by any of the variants.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn error(code: u16) -> Error {
        Error::http(
            code,
            http::HeaderMap::new(),
            bytes::Bytes::from(format!("status={code}")),
        )
    }

    #[test_case(RetryResult::Permanent(error(403)), (true, false, false))]
    #[test_case(RetryResult::Exhausted(error(503)), (false, true, false))]
    #[test_case(RetryResult::Continue(error(429)), (false, false, true))]
    fn predicates(flow: RetryResult, want: (bool, bool, bool)) {
        let got = (flow.is_permanent(), flow.is_exhausted(), flow.is_continue());
        assert_eq!(got, want, "{flow:?}");
    }

    #[test_case(RetryResult::Permanent(error(400)), 400)]
    #[test_case(RetryResult::Exhausted(error(502)), 502)]
    #[test_case(RetryResult::Continue(error(504)), 504)]
    fn into_error(flow: RetryResult, code: u16) {
        let got = flow.into_error();
        assert_eq!(got.http_status_code(), Some(code), "{got:?}");
        let want = format!("status={code}");
        assert_eq!(got.http_payload().map(|p| p.as_ref()), Some(want.as_bytes()));
    }
}

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

use std::error::Error;
use std::sync::Arc;

type ArcError = Arc<dyn Error + Send + Sync>;

/// Represents an error creating or using an authenticator.
///
/// The client libraries may experience problems creating authenticators and
/// using them. An example of problems creating authenticators may be a missing
/// API key in the environment. An example of problems using them may be a
/// temporary failure to exchange the API key for an IAM access token. Note that
/// the latter kind of error may happen long after the authenticator was
/// created.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code that mocks a client
/// library.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated transient error while trying to create access tokens");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated transient error"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: Option<String>,
    source: Option<ArcError>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` wrapping another error.
    ///
    /// # Parameters
    /// * `is_transient` - if true, the operation may succeed in future attempts.
    /// * `source` - the underlying error that caused the failure.
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            message: None,
            source: Some(Arc::new(source)),
        }
    }

    /// Creates a new `CredentialsError` with only a message.
    ///
    /// # Parameters
    /// * `is_transient` - if true, the operation may succeed in future attempts.
    /// * `message` - describes the failure.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` with a message and a source.
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        Self {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns true if the error is transient and may succeed in future attempts.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "but future attempts may succeed";
const PERMANENT_MSG: &str = "and future attempts will not succeed";

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), Some(s)) => write!(f, "{m} {msg}, source: {s}"),
            (Some(m), None) => write!(f, "{m} {msg}"),
            (None, Some(s)) => write!(f, "cannot create the authentication headers {msg}, source: {s}"),
            (None, None) => write!(f, "cannot create the authentication headers {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(transient: bool) {
        let e = CredentialsError::from_msg(transient, "test-only-err-123");
        assert_eq!(e.is_transient(), transient, "{e:?}");
        let got = format!("{e}");
        assert!(got.contains("test-only-err-123"), "{got}");
        let want = if transient { TRANSIENT_MSG } else { PERMANENT_MSG };
        assert!(got.contains(want), "{got}");
        assert!(e.source().is_none(), "{e:?}");
    }

    #[test]
    fn from_source() {
        let source = std::io::Error::other("connection reset");
        let e = CredentialsError::from_source(true, source);
        assert!(e.is_transient(), "{e:?}");
        let got = e
            .source()
            .and_then(|s| s.downcast_ref::<std::io::Error>())
            .map(|s| s.to_string());
        assert_eq!(got.as_deref(), Some("connection reset"));
        assert!(e.to_string().contains("connection reset"), "{e}");
    }

    #[test]
    fn with_message_and_source() {
        let source = std::io::Error::other("connection reset");
        let e = CredentialsError::new(false, "cannot reach IAM", source);
        assert!(!e.is_transient(), "{e:?}");
        let got = e.to_string();
        assert!(got.contains("cannot reach IAM"), "{got}");
        assert!(got.contains("connection reset"), "{got}");
        assert!(got.contains(PERMANENT_MSG), "{got}");
    }
}

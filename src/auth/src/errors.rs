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

//! Errors created during credentials construction and use.

pub use gax::error::CredentialsError;
use http::StatusCode;

/// The error type for credential builders.
///
/// Applications rarely need to inspect this type, other than to report the
/// problem. Some applications may want to distinguish a missing configuration
/// (e.g. no API key in the environment) from an invalid one.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct BuildError(BuildErrorKind);

impl BuildError {
    /// The configuration required by the authenticator is not present.
    pub fn is_missing_config(&self) -> bool {
        matches!(self.0, BuildErrorKind::MissingConfig(_))
    }

    /// The configuration is present but invalid.
    pub fn is_invalid_config(&self) -> bool {
        matches!(self.0, BuildErrorKind::InvalidConfig(_))
    }

    /// The authentication type is not supported by this library.
    pub fn is_unknown_auth_type(&self) -> bool {
        matches!(self.0, BuildErrorKind::UnknownAuthType(_))
    }

    pub(crate) fn missing_config<T: Into<String>>(msg: T) -> Self {
        Self(BuildErrorKind::MissingConfig(msg.into()))
    }

    pub(crate) fn invalid_config<T: Into<String>>(msg: T) -> Self {
        Self(BuildErrorKind::InvalidConfig(msg.into()))
    }

    pub(crate) fn unknown_auth_type<T: Into<String>>(auth_type: T) -> Self {
        Self(BuildErrorKind::UnknownAuthType(auth_type.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum BuildErrorKind {
    #[error("missing authentication configuration: {0}")]
    MissingConfig(String),
    #[error("invalid authentication configuration: {0}")]
    InvalidConfig(String),
    #[error("unsupported authentication type `{0}`")]
    UnknownAuthType(String),
}

/// A helper to create a retryable error.
pub(crate) fn retryable<T: std::error::Error + Send + Sync + 'static>(
    source: T,
) -> CredentialsError {
    CredentialsError::from_source(true, source)
}

pub(crate) fn non_retryable<T: std::error::Error + Send + Sync + 'static>(
    source: T,
) -> CredentialsError {
    CredentialsError::from_source(false, source)
}

pub(crate) fn non_retryable_from_str<T: Into<String>>(message: T) -> CredentialsError {
    CredentialsError::from_msg(false, message)
}

pub(crate) fn is_retryable(c: StatusCode) -> bool {
    match c {
        // Internal server errors do not indicate that there is anything wrong
        // with our request, so we retry them.
        StatusCode::INTERNAL_SERVER_ERROR
        | StatusCode::SERVICE_UNAVAILABLE
        | StatusCode::REQUEST_TIMEOUT
        | StatusCode::BAD_GATEWAY
        | StatusCode::GATEWAY_TIMEOUT
        | StatusCode::TOO_MANY_REQUESTS => true,
        _ => false,
    }
}

/// Converts an error response from the IAM token endpoint.
pub(crate) fn from_http_response(status: StatusCode, body: &str) -> CredentialsError {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("errorMessage")
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string());
    CredentialsError::from_msg(
        is_retryable(status),
        format!("failed to fetch IAM access token, status code {status}: {detail}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(StatusCode::INTERNAL_SERVER_ERROR)]
    #[test_case(StatusCode::SERVICE_UNAVAILABLE)]
    #[test_case(StatusCode::REQUEST_TIMEOUT)]
    #[test_case(StatusCode::TOO_MANY_REQUESTS)]
    fn retryable_status(c: StatusCode) {
        assert!(is_retryable(c));
        let e = from_http_response(c, "try again");
        assert!(e.is_transient(), "{e:?}");
    }

    #[test_case(StatusCode::NOT_FOUND)]
    #[test_case(StatusCode::UNAUTHORIZED)]
    #[test_case(StatusCode::BAD_REQUEST)]
    #[test_case(StatusCode::PRECONDITION_FAILED)]
    fn non_retryable_status(c: StatusCode) {
        assert!(!is_retryable(c));
        let e = from_http_response(c, "");
        assert!(!e.is_transient(), "{e:?}");
    }

    #[test]
    fn iam_error_message() {
        let body = serde_json::json!({
            "errorCode": "BXNIM0415E",
            "errorMessage": "Provided API key could not be found.",
        })
        .to_string();
        let e = from_http_response(StatusCode::BAD_REQUEST, &body);
        let got = e.to_string();
        assert!(got.contains("Provided API key could not be found."), "{got}");
        assert!(got.contains("400"), "{got}");
    }

    #[test]
    fn build_errors() {
        let e = BuildError::missing_config("CODE_ENGINE_APIKEY is not set");
        assert!(e.is_missing_config(), "{e:?}");
        assert!(!e.is_invalid_config(), "{e:?}");
        assert!(e.to_string().contains("CODE_ENGINE_APIKEY"), "{e}");

        let e = BuildError::invalid_config("bad");
        assert!(e.is_invalid_config(), "{e:?}");

        let e = BuildError::unknown_auth_type("cp4d");
        assert!(e.is_unknown_auth_type(), "{e:?}");
        assert!(e.to_string().contains("`cp4d`"), "{e}");
    }

    #[test]
    fn helpers() {
        let e = retryable(std::io::Error::other("reset"));
        assert!(e.is_transient());
        let e = non_retryable(std::io::Error::other("bad"));
        assert!(!e.is_transient());
        let e = non_retryable_from_str("bad");
        assert!(!e.is_transient());
        assert!(e.to_string().contains("bad"), "{e}");
    }
}

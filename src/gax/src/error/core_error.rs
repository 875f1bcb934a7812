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

use super::CredentialsError;
use super::ServiceError;
use bytes::Bytes;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The error type for all the operations in the SDK.
///
/// A request can fail before it is sent (for example, an invalid project id),
/// while sending it or reading the response, while decoding the response, or
/// because the service rejected it. Use the predicates to classify the error,
/// and the accessors to get the details returned by the service.
///
/// # Example
/// ```
/// use ibm_cloud_gax::error::{Error, ErrorDetail, ServiceError};
/// fn describe(e: &Error) -> String {
///     match (e.http_status_code(), e.status()) {
///         (Some(404), _) => "the resource does not exist".to_string(),
///         (_, Some(status)) => format!("rejected: {}", status.message()),
///         _ if e.is_binding() => format!("invalid request: {e}"),
///         _ => format!("failed: {e}"),
///     }
/// }
///
/// let status = ServiceError::default()
///     .set_errors([ErrorDetail::new().set_code("resource_not_found")]);
/// let e = Error::service_with_http_metadata(status, Some(404), None);
/// assert_eq!(describe(&e), "the resource does not exist");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    http: Option<Box<HttpMetadata>>,
    source: Option<BoxError>,
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    // No HTTP response was received.
    Io,
    // A response without the IBM Cloud error envelope.
    Http,
    Service(Box<ServiceError>),
}

#[derive(Debug, Default)]
struct HttpMetadata {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<Bytes>,
}

impl Error {
    fn new<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            http: None,
            source: Some(source.into()),
        }
    }

    /// An error returned by the service.
    ///
    /// ```
    /// use ibm_cloud_gax::error::{Error, ErrorDetail, ServiceError};
    /// let status = ServiceError::default()
    ///     .set_errors([ErrorDetail::new().set_code("app_not_found").set_message("App not found")])
    ///     .set_status_code(404_u16);
    /// let e = Error::service(status.clone());
    /// assert_eq!(e.status(), Some(&status));
    /// assert_eq!(e.http_status_code(), Some(404));
    /// ```
    pub fn service(status: ServiceError) -> Self {
        let status_code = status.status_code;
        Self::service_with_http_metadata(status, status_code, None)
    }

    #[doc(hidden)]
    pub fn service_with_http_metadata(
        status: ServiceError,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let http = HttpMetadata {
            status_code: status_code.or(status.status_code),
            headers,
            payload: None,
        };
        Self {
            kind: ErrorKind::Service(Box::new(status)),
            http: Some(Box::new(http)),
            source: None,
        }
    }

    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: Bytes) -> Self {
        let http = HttpMetadata {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Http,
            http: Some(Box::new(http)),
            source: None,
        }
    }

    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Io, source)
    }

    /// The attempt did not complete before its deadline.
    ///
    /// ```
    /// # use ibm_cloud_gax::error::Error;
    /// let e = Error::timeout("no response after 30s");
    /// assert!(e.is_timeout());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Timeout, source)
    }

    /// The retry policy stopped the loop, the source is the last error.
    ///
    /// ```
    /// # use ibm_cloud_gax::error::Error;
    /// let e = Error::exhausted(Error::timeout("no response after 30s"));
    /// assert!(e.is_exhausted());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Exhausted, source)
    }

    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Binding, source)
    }

    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Serialization, source)
    }

    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::new(ErrorKind::Deserialization, source)
    }

    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self::new(ErrorKind::Authentication, source)
    }

    /// The request was invalid and never sent.
    ///
    /// A required parameter is missing, or a path parameter does not match
    /// its expected format. The source names the parameter.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    /// The request body or headers could not be encoded.
    ///
    /// Retrying with the same inputs fails in the same way.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The response could not be decoded.
    ///
    /// Unknown fields and enum values are tolerated. This usually means the
    /// response was not JSON, for example an HTML page from a proxy. The
    /// request may have succeeded in the service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// The credentials could not produce the authentication headers.
    ///
    /// Check the API key, or the connectivity to the IAM token service.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The retry policy ran out of attempts or time.
    ///
    /// Consider a longer retry policy if the application can wait.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// The connection failed before a response was received.
    ///
    /// The request may or may not have reached the service.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// The request failed in the network, or returned a response that is not
    /// an IBM Cloud error.
    ///
    /// Proxies and load balancers produce these errors, and so does an
    /// endpoint for the wrong region.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Io | ErrorKind::Http)
    }

    /// The errors returned by the service.
    ///
    /// Include the `trace` value when contacting IBM Cloud support.
    ///
    /// ```
    /// use ibm_cloud_gax::error::{Error, ErrorDetail, ServiceError};
    /// let e = Error::service(
    ///     ServiceError::default()
    ///         .set_errors([ErrorDetail::new().set_code("project_quota_exceeded")])
    ///         .set_trace("codeengine-api-5f6d8c"),
    /// );
    /// if let Some(status) = e.status() {
    ///     assert_eq!(status.code(), Some("project_quota_exceeded"));
    ///     assert_eq!(status.trace.as_deref(), Some("codeengine-api-5f6d8c"));
    /// }
    /// ```
    pub fn status(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(status) => Some(status),
            _ => None,
        }
    }

    /// The HTTP status code of the response, if one was received.
    ///
    /// ```
    /// # use ibm_cloud_gax::error::Error;
    /// let e = Error::http(502, http::HeaderMap::new(), bytes::Bytes::from_static(b"Bad Gateway"));
    /// assert_eq!(e.http_status_code(), Some(502));
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        self.http.as_ref()?.status_code
    }

    /// The response headers, useful to find the `x-request-id` of a failed
    /// request.
    ///
    /// ```
    /// # use ibm_cloud_gax::error::Error;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("x-request-id", http::HeaderValue::from_static("d8a0c1"));
    /// let e = Error::http(500, headers, bytes::Bytes::new());
    /// let id = e.http_headers().and_then(|h| h.get("x-request-id"));
    /// assert_eq!(id.and_then(|v| v.to_str().ok()), Some("d8a0c1"));
    /// ```
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.http.as_ref()?.headers.as_ref()
    }

    /// The response body, when it was not an IBM Cloud error envelope.
    pub fn http_payload(&self) -> Option<&Bytes> {
        self.http.as_ref()?.payload.as_ref()
    }

    // Authentication errors happen before the request is sent, the retry
    // policies can retry them regardless of the request idempotency.
    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !self.is_authentication() {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .is_some_and(CredentialsError::is_transient)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match &self.kind {
            ErrorKind::Binding => "invalid request parameters",
            ErrorKind::Serialization => "cannot serialize the request",
            ErrorKind::Deserialization => "cannot deserialize the response",
            ErrorKind::Authentication => "cannot create the authentication headers",
            ErrorKind::Timeout => "the request attempt timed out",
            ErrorKind::Exhausted => "the retry policy is exhausted",
            ErrorKind::Io => "cannot send the request",
            ErrorKind::Http => return self.fmt_http(f),
            ErrorKind::Service(status) => return self.fmt_service(status, f),
        };
        match &self.source {
            Some(e) => write!(f, "{prefix}: {e}"),
            None => f.write_str(prefix),
        }
    }
}

impl Error {
    fn fmt_http(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = self.http_status_code().unwrap_or_default();
        let Some(payload) = self.http_payload() else {
            return write!(f, "the service returned HTTP status {code}");
        };
        match std::str::from_utf8(payload) {
            Ok(text) => write!(f, "the service returned HTTP status {code}: {text}"),
            Err(_) => write!(
                f,
                "the service returned HTTP status {code}: {:?}",
                payload.as_ref()
            ),
        }
    }

    fn fmt_service(
        &self,
        status: &ServiceError,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        let code = status.code().unwrap_or("unknown");
        write!(f, "the service reports {code}: {}", status.message())?;
        if let Some(s) = self.http_status_code() {
            write!(f, " [HTTP status {s}]")?;
        }
        if let Some(t) = &status.trace {
            write!(f, " [trace {t}]")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn StdError))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorDetail;
    use test_case::test_case;

    fn app_not_found() -> ServiceError {
        ServiceError::default()
            .set_errors([ErrorDetail::new()
                .set_code("app_not_found")
                .set_message("App 'my-app' not found")])
            .set_trace("codeengine-api-1a2b")
    }

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", http::HeaderValue::from_static("req-77"));
        headers
    }

    #[test]
    fn service() {
        let error = Error::service(app_not_found());
        assert_eq!(error.status(), Some(&app_not_found()));
        assert_eq!(error.http_status_code(), None);
        assert!(error.source().is_none(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert_eq!(
            error.to_string(),
            "the service reports app_not_found: App 'my-app' not found [trace codeengine-api-1a2b]"
        );

        let error = Error::service(app_not_found().set_status_code(404_u16));
        assert_eq!(error.http_status_code(), Some(404));
    }

    #[test]
    fn service_with_http_metadata() {
        let error = Error::service_with_http_metadata(app_not_found(), Some(404), Some(headers()));
        assert_eq!(error.status(), Some(&app_not_found()));
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.http_payload(), None);
        assert!(error.to_string().contains("[HTTP status 404]"), "{error}");

        // The response status wins over the status in the payload.
        let status = app_not_found().set_status_code(400_u16);
        let error = Error::service_with_http_metadata(status, Some(404), None);
        assert_eq!(error.http_status_code(), Some(404));
    }

    #[test]
    fn http() {
        let payload = Bytes::from_static(b"<html>Bad Gateway</html>");
        let error = Error::http(502, headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.status(), None);
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(
            error.to_string(),
            "the service returned HTTP status 502: <html>Bad Gateway</html>"
        );

        let error = Error::http(500, HeaderMap::new(), Bytes::from_static(&[0xff, 0xfe]));
        assert!(error.to_string().contains("[255, 254]"), "{error}");
    }

    #[test_case(Error::binding("missing project_id"), "invalid request parameters: missing project_id")]
    #[test_case(Error::ser("bad header"), "cannot serialize the request: bad header")]
    #[test_case(Error::deser("expected value"), "cannot deserialize the response: expected value")]
    #[test_case(Error::timeout("30s"), "the request attempt timed out: 30s")]
    #[test_case(Error::io("connection reset"), "cannot send the request: connection reset")]
    fn display(error: Error, want: &str) {
        assert_eq!(error.to_string(), want);
        assert!(error.source().is_some(), "{error:?}");
        assert_eq!(error.http_status_code(), None);
        assert_eq!(error.http_headers(), None);
        assert_eq!(error.status(), None);
    }

    #[test]
    fn predicates() {
        let cases = [
            (Error::binding("x"), "binding"),
            (Error::ser("x"), "ser"),
            (Error::deser("x"), "deser"),
            (Error::timeout("x"), "timeout"),
            (Error::exhausted("x"), "exhausted"),
            (Error::io("x"), "io"),
            (Error::authentication(CredentialsError::from_msg(false, "x")), "auth"),
        ];
        for (error, name) in cases {
            let got = [
                ("binding", error.is_binding()),
                ("ser", error.is_serialization()),
                ("deser", error.is_deserialization()),
                ("timeout", error.is_timeout()),
                ("exhausted", error.is_exhausted()),
                ("io", error.is_io()),
                ("auth", error.is_authentication()),
            ];
            for (n, v) in got {
                assert_eq!(v, n == name, "{n} {error:?}");
            }
        }
    }

    #[test]
    fn exhausted_keeps_last_error() {
        let error = Error::exhausted(Error::http(503, HeaderMap::new(), Bytes::new()));
        let last = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert_eq!(last.and_then(Error::http_status_code), Some(503));
        assert!(error.to_string().contains("503"), "{error}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn authentication(transient: bool) {
        let error = Error::authentication(CredentialsError::from_msg(transient, "iam unavailable"));
        assert!(error.is_authentication(), "{error:?}");
        assert_eq!(error.is_transient_and_before_rpc(), transient);
        assert!(error.to_string().contains("iam unavailable"), "{error}");
        let source = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(source.is_some(), "{error:?}");
    }

    #[test]
    fn not_before_rpc() {
        let errors = [
            Error::timeout("x"),
            Error::io("x"),
            Error::http(503, HeaderMap::new(), Bytes::new()),
            Error::service(app_not_found()),
        ];
        for e in errors {
            assert!(!e.is_transient_and_before_rpc(), "{e:?}");
        }
    }
}

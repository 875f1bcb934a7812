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

use serde::{Deserialize, Serialize};

/// The error details returned by IBM Cloud services.
///
/// Most IBM Cloud services report failures using a common envelope:
///
/// ```json
/// {
///   "errors": [
///     {"code": "resource_not_found", "message": "Project not found", "more_info": "..."}
///   ],
///   "trace": "0a1b2c3d",
///   "status_code": 404
/// }
/// ```
///
/// The client libraries decode this envelope when a request fails, and make it
/// available via [Error::status][crate::error::Error::status].
///
/// # Example
/// ```
/// # use ibm_cloud_gax::error::{ErrorDetail, ServiceError};
/// let error = ServiceError::default()
///     .set_status_code(404_u16)
///     .set_errors([ErrorDetail::new().set_code("resource_not_found").set_message("Project not found")]);
/// assert_eq!(error.code(), Some("resource_not_found"));
/// assert_eq!(error.message(), "Project not found");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ServiceError {
    /// The list of errors reported by the service.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ErrorDetail>,

    /// A unique identifier of the request, useful when contacting support.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,

    /// The HTTP status code, as reported in the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ServiceError {
    /// Sets the value of [errors][ServiceError::errors].
    pub fn set_errors<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<ErrorDetail>,
    {
        self.errors = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [trace][ServiceError::trace].
    pub fn set_trace<T: Into<String>>(mut self, v: T) -> Self {
        self.trace = Some(v.into());
        self
    }

    /// Sets the value of [status_code][ServiceError::status_code].
    pub fn set_status_code<T: Into<u16>>(mut self, v: T) -> Self {
        self.status_code = Some(v.into());
        self
    }

    /// The code of the first error, if any.
    pub fn code(&self) -> Option<&str> {
        self.errors.first().map(|e| e.code.as_str())
    }

    /// A human readable message combining all the error messages.
    pub fn message(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single error entry in a [ServiceError].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ErrorDetail {
    /// A snake case string succinctly identifying the problem.
    #[serde(default)]
    pub code: String,

    /// An explanation of the problem.
    #[serde(default)]
    pub message: String,

    /// A link to documentation about this error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,

    /// The field, header, or parameter that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ErrorTarget>,
}

impl ErrorDetail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [code][ErrorDetail::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ErrorDetail::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// Sets the value of [more_info][ErrorDetail::more_info].
    pub fn set_more_info<T: Into<String>>(mut self, v: T) -> Self {
        self.more_info = Some(v.into());
        self
    }

    /// Sets the value of [target][ErrorDetail::target].
    pub fn set_target<T: Into<ErrorTarget>>(mut self, v: T) -> Self {
        self.target = Some(v.into());
        self
    }
}

/// Identifies the part of the request that caused an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ErrorTarget {
    #[serde(default)]
    pub name: String,
    /// One of `field`, `header`, or `parameter`.
    #[serde(rename = "type", default)]
    pub target_type: String,
}

impl ErrorTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    pub fn set_target_type<T: Into<String>>(mut self, v: T) -> Self {
        self.target_type = v.into();
        self
    }
}

// Some IBM Cloud services, notably IAM, use a flat error representation.
#[derive(Deserialize)]
struct FlatError {
    #[serde(default, alias = "errorCode")]
    code: Option<serde_json::Value>,
    #[serde(default, alias = "errorMessage", alias = "error")]
    message: Option<String>,
    #[serde(default)]
    trace: Option<String>,
}

impl TryFrom<&bytes::Bytes> for ServiceError {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let envelope = serde_json::from_slice::<ServiceError>(value)?;
        if !envelope.errors.is_empty() {
            return Ok(envelope);
        }
        let flat = serde_json::from_slice::<FlatError>(value)?;
        match flat.message {
            Some(message) => {
                let code = match flat.code {
                    Some(serde_json::Value::String(s)) => s,
                    Some(v @ serde_json::Value::Number(_)) => v.to_string(),
                    _ => String::new(),
                };
                Ok(ServiceError {
                    errors: vec![ErrorDetail::new().set_code(code).set_message(message)],
                    trace: flat.trace,
                    status_code: envelope.status_code,
                })
            }
            None => Err(serde::de::Error::custom(
                "the payload does not contain any error messages",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope() -> anyhow::Result<()> {
        let payload = serde_json::json!({
            "errors": [{
                "code": "resource_not_found",
                "message": "Project with ID 'abc' does not exist",
                "more_info": "https://cloud.ibm.com/apidocs/codeengine",
                "target": {"name": "project_id", "type": "parameter"},
            }],
            "trace": "trace-123",
            "status_code": 404,
        });
        let payload = bytes::Bytes::from(payload.to_string());
        let got = ServiceError::try_from(&payload)?;
        let want = ServiceError::default()
            .set_errors([ErrorDetail::new()
                .set_code("resource_not_found")
                .set_message("Project with ID 'abc' does not exist")
                .set_more_info("https://cloud.ibm.com/apidocs/codeengine")
                .set_target(
                    ErrorTarget::new()
                        .set_name("project_id")
                        .set_target_type("parameter"),
                )])
            .set_trace("trace-123")
            .set_status_code(404_u16);
        assert_eq!(got, want);
        assert_eq!(got.code(), Some("resource_not_found"));
        assert_eq!(got.message(), "Project with ID 'abc' does not exist");
        Ok(())
    }

    #[test]
    fn flat_iam_error() -> anyhow::Result<()> {
        let payload = serde_json::json!({
            "errorCode": "BXNIM0415E",
            "errorMessage": "Provided API key could not be found.",
        });
        let payload = bytes::Bytes::from(payload.to_string());
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.code(), Some("BXNIM0415E"));
        assert_eq!(got.message(), "Provided API key could not be found.");
        Ok(())
    }

    #[test]
    fn flat_numeric_code() -> anyhow::Result<()> {
        let payload = serde_json::json!({"code": 409, "message": "conflict"});
        let payload = bytes::Bytes::from(payload.to_string());
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.code(), Some("409"));
        assert_eq!(got.message(), "conflict");
        Ok(())
    }

    #[test]
    fn not_an_error() {
        let payload = bytes::Bytes::from_static(b"{\"name\": \"my-app\"}");
        let got = ServiceError::try_from(&payload);
        assert!(got.is_err(), "{got:?}");

        let payload = bytes::Bytes::from_static(b"<html>Bad Gateway</html>");
        let got = ServiceError::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn message_joins_errors() {
        let error = ServiceError::default().set_errors([
            ErrorDetail::new().set_code("a").set_message("first"),
            ErrorDetail::new().set_code("b"),
            ErrorDetail::new().set_code("c").set_message("third"),
        ]);
        assert_eq!(error.message(), "first; third");
        assert_eq!(error.code(), Some("a"));
    }
}

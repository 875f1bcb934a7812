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

//! The successful result of an IBM Cloud request.
//!
//! Most applications only need the body, which the clients return directly
//! from `send()`. Use `send_with_response()` to also get the [Response]
//! headers, for example to read the entity tag of a resource before updating
//! it.

use http::header::ETAG;
use http::HeaderMap;

/// A decoded response body and the headers returned with it.
///
/// Tests that mock a client can build responses with [Response::from]:
/// ```
/// # use ibm_cloud_gax::response::Response;
/// #[derive(Debug, Default)]
/// struct Project { name: String }
///
/// let response = Response::from(Project { name: "my-project".into() });
/// assert_eq!(response.body().name, "my-project");
/// assert!(response.etag().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Wraps `body` in a response without any headers.
    pub fn from(body: T) -> Self {
        Self::from_parts(Parts::default(), body)
    }

    /// Assembles a response from its metadata and body.
    ///
    /// ```
    /// # use ibm_cloud_gax::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert(http::header::ETAG, http::HeaderValue::from_static("W/\"1-a2b3\""));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert_eq!(response.etag(), Some("W/\"1-a2b3\""));
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// The `ETag` header, if present and valid ASCII.
    ///
    /// Code Engine returns an entity tag with every resource. The update and
    /// replace operations require it as their `If-Match` precondition.
    pub fn etag(&self) -> Option<&str> {
        self.parts.headers.get(ETAG)?.to_str().ok()
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }

    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }
}

/// The metadata of a [Response].
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    pub headers: HeaderMap,
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_headers<V: Into<HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn without_headers() {
        let response = Response::from(vec!["app-1", "app-2"]);
        assert!(response.headers().is_empty());
        assert_eq!(response.etag(), None);
        assert_eq!(response.body().len(), 2);
        assert_eq!(response.into_body(), vec!["app-1", "app-2"]);
    }

    #[test]
    fn etag_and_parts() {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_static("W/\"7-0f1e\""));
        headers.insert("x-request-id", HeaderValue::from_static("req-123"));
        let response = Response::from_parts(Parts::new().set_headers(headers.clone()), 42_u32);
        assert_eq!(response.etag(), Some("W/\"7-0f1e\""));
        assert_eq!(response.headers(), &headers);

        let (parts, body) = response.into_parts();
        assert_eq!(body, 42);
        assert_eq!(parts.headers, headers);
    }

    #[test]
    fn etag_not_ascii() -> anyhow::Result<()> {
        let mut headers = HeaderMap::new();
        headers.insert(ETAG, HeaderValue::from_bytes(b"\xfa\xfb")?);
        let response = Response::from_parts(Parts::new().set_headers(headers), ());
        assert!(response.headers().contains_key(ETAG));
        assert_eq!(response.etag(), None);
        Ok(())
    }
}

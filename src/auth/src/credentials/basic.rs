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

//! Basic authentication credentials.

use crate::credentials::{Credentials, CredentialsProvider, Result, validate_value};
use crate::errors::BuildError;
use crate::headers_util::build_basic_headers;
use http::HeaderMap;
use std::sync::Arc;

/// A builder for basic authentication credentials.
///
/// The credentials send `Authorization: Basic base64(username:password)` with
/// every request.
pub struct Builder {
    username: String,
    password: String,
}

impl Builder {
    pub fn new<U: Into<String>, P: Into<String>>(username: U, password: P) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a [Credentials] instance.
    ///
    /// # Errors
    ///
    /// Fails if the username or password are empty or malformed.
    pub fn build(self) -> std::result::Result<Credentials, BuildError> {
        validate_value("username", &self.username)?;
        validate_value("password", &self.password)?;
        let headers = build_basic_headers(&self.username, &self.password)
            .map_err(|e| BuildError::invalid_config(e.to_string()))?;
        Ok(Credentials {
            inner: Arc::new(BasicCredentials { headers }),
        })
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("username", &self.username)
            .field("password", &"[censored]")
            .finish()
    }
}

#[derive(Debug)]
struct BasicCredentials {
    headers: HeaderMap,
}

impl CredentialsProvider for BasicCredentials {
    async fn headers(&self) -> Result<HeaderMap> {
        Ok(self.headers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;

    #[tokio::test]
    async fn headers() -> anyhow::Result<()> {
        let creds = Builder::new("Aladdin", "open sesame").build()?;
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="))
        );
        Ok(())
    }

    #[test]
    fn debug() {
        let builder = Builder::new("Aladdin", "open sesame");
        let got = format!("{builder:?}");
        assert!(got.contains("Aladdin"), "{got}");
        assert!(!got.contains("open sesame"), "{got}");
    }

    #[test]
    fn invalid() {
        let e = Builder::new("", "pass").build().unwrap_err();
        assert!(e.is_missing_config(), "{e:?}");
        let e = Builder::new("user", "\"pass\"").build().unwrap_err();
        assert!(e.is_invalid_config(), "{e:?}");
    }
}

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

//! Static bearer token credentials.
//!
//! Use these credentials when the application obtains an access token by other
//! means. The library never refreshes the token, once it expires the service
//! rejects the requests.

use crate::credentials::{Credentials, CredentialsProvider, Result, validate_value};
use crate::errors::BuildError;
use crate::headers_util::build_bearer_headers;
use crate::token::Token;
use http::HeaderMap;
use std::sync::Arc;

/// A builder for bearer token credentials.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::bearer_token::Builder;
/// let credentials = Builder::new("eyJhbGciOiJIUzI1NiJ9.e30.test").build()?;
/// # Ok::<(), ibm_cloud_auth::errors::BuildError>(())
/// ```
pub struct Builder {
    token: String,
}

impl Builder {
    /// Creates a builder for the given token.
    pub fn new<V: Into<String>>(token: V) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Returns a [Credentials] instance.
    ///
    /// # Errors
    ///
    /// Fails if the token is empty or cannot be used in an HTTP header.
    pub fn build(self) -> std::result::Result<Credentials, BuildError> {
        validate_value("bearer token", &self.token)?;
        let token = Token {
            token: self.token,
            token_type: "Bearer".to_string(),
            expires_at: None,
        };
        let headers =
            build_bearer_headers(&token).map_err(|e| BuildError::invalid_config(e.to_string()))?;
        Ok(Credentials {
            inner: Arc::new(BearerTokenCredentials { headers }),
        })
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("token", &"[censored]")
            .finish()
    }
}

// The header values are marked sensitive, their `Debug` output is censored.
#[derive(Debug)]
struct BearerTokenCredentials {
    headers: HeaderMap,
}

impl CredentialsProvider for BearerTokenCredentials {
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
        let creds = Builder::new("test-token").build()?;
        let headers = creds.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        Ok(())
    }

    #[test]
    fn debug() -> anyhow::Result<()> {
        let builder = Builder::new("test-token");
        let got = format!("{builder:?}");
        assert!(!got.contains("test-token"), "{got}");

        let creds = builder.build()?;
        let got = format!("{creds:?}");
        assert!(!got.contains("test-token"), "{got}");
        Ok(())
    }

    #[test]
    fn invalid() {
        let e = Builder::new("").build().unwrap_err();
        assert!(e.is_missing_config(), "{e:?}");
        let e = Builder::new("{token}").build().unwrap_err();
        assert!(e.is_invalid_config(), "{e:?}");
        let e = Builder::new("bad\ntoken").build().unwrap_err();
        assert!(e.is_invalid_config(), "{e:?}");
    }
}

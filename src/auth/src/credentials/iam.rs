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

//! [IAM] API key credentials.
//!
//! These credentials exchange an IBM Cloud API key for an IAM access token,
//! and use the access token to authenticate requests. Access tokens are valid
//! for a limited time (typically one hour). The credentials cache the token
//! and refresh it before it expires. Concurrent requests share a single
//! refresh.
//!
//! # Example
//! ```
//! # use ibm_cloud_auth::credentials::iam::Builder;
//! let credentials = Builder::new("my-api-key").build()?;
//! # Ok::<(), ibm_cloud_auth::errors::BuildError>(())
//! ```
//!
//! [IAM]: https://cloud.ibm.com/docs/account?topic=account-iamoverview

use crate::credentials::{Credentials, CredentialsProvider, Result, validate_value};
use crate::errors::{self, BuildError};
use crate::headers_util::build_bearer_headers;
use crate::token::{Token, TokenProvider};
use crate::token_cache::TokenCache;
use http::HeaderMap;
use http::header::ACCEPT;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tokio::time::Instant;

/// The default IAM endpoint.
pub const DEFAULT_URL: &str = "https://iam.cloud.ibm.com";

const TOKEN_PATH: &str = "/identity/token";
const GRANT_TYPE: &str = "urn:ibm:params:oauth:grant-type:apikey";
const RESPONSE_TYPE: &str = "cloud_iam";

// Tokens are refreshed once this fraction of their lifetime has elapsed.
const REFRESH_FRACTION: f64 = 0.8;

/// A builder for IAM API key credentials.
pub struct Builder {
    api_key: String,
    url: Option<String>,
    client_auth: Option<(String, String)>,
    scope: Option<String>,
}

impl Builder {
    /// Creates a builder using the given API key.
    pub fn new<V: Into<String>>(api_key: V) -> Self {
        Self {
            api_key: api_key.into(),
            url: None,
            client_auth: None,
            scope: None,
        }
    }

    /// Overrides the IAM endpoint.
    ///
    /// The value may be the base URL (`https://private.iam.cloud.ibm.com`) or
    /// the full token URL (`https://private.iam.cloud.ibm.com/identity/token`).
    pub fn with_url<V: Into<String>>(mut self, v: V) -> Self {
        self.url = Some(v.into());
        self
    }

    /// Sets the client id and secret sent, using basic authentication, with
    /// the token requests.
    pub fn with_client_id_and_secret<I: Into<String>, S: Into<String>>(
        mut self,
        client_id: I,
        client_secret: S,
    ) -> Self {
        self.client_auth = Some((client_id.into(), client_secret.into()));
        self
    }

    /// Requests a token restricted to the given space separated scopes.
    pub fn with_scope<V: Into<String>>(mut self, v: V) -> Self {
        self.scope = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// No token is requested until the first call to
    /// [Credentials::headers].
    ///
    /// # Errors
    ///
    /// Fails if the API key, or the client id and secret, are empty or
    /// malformed.
    pub fn build(self) -> std::result::Result<Credentials, BuildError> {
        validate_value("API key", &self.api_key)?;
        if let Some((id, secret)) = &self.client_auth {
            validate_value("client id", id)?;
            validate_value("client secret", secret)?;
        }
        let base = self.url.as_deref().unwrap_or(DEFAULT_URL).trim_end_matches('/');
        let token_url = if base.ends_with(TOKEN_PATH) {
            base.to_string()
        } else {
            format!("{base}{TOKEN_PATH}")
        };
        let provider = IamTokenProvider {
            api_key: self.api_key,
            token_url,
            client_auth: self.client_auth,
            scope: self.scope,
            client: reqwest::Client::new(),
        };
        Ok(Credentials {
            inner: Arc::new(IamCredentials {
                token_provider: TokenCache::new(provider),
            }),
        })
    }
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("api_key", &"[censored]")
            .field("url", &self.url)
            .field("client_id", &self.client_auth.as_ref().map(|(id, _)| id))
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Debug)]
struct IamCredentials<T>
where
    T: TokenProvider,
{
    token_provider: T,
}

impl<T> CredentialsProvider for IamCredentials<T>
where
    T: TokenProvider,
{
    async fn headers(&self) -> Result<HeaderMap> {
        let token = self.token_provider.token().await?;
        build_bearer_headers(&token)
    }
}

struct IamTokenProvider {
    api_key: String,
    token_url: String,
    client_auth: Option<(String, String)>,
    scope: Option<String>,
    client: reqwest::Client,
}

impl std::fmt::Debug for IamTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IamTokenProvider")
            .field("api_key", &"[censored]")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_auth.as_ref().map(|(id, _)| id))
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    expiration: Option<u64>,
}

impl TokenResponse {
    // Prefer the relative lifetime, it is immune to clock skew.
    fn lifetime(&self) -> Option<Duration> {
        if let Some(secs) = self.expires_in {
            return Some(Duration::from_secs(secs));
        }
        let expiration =
            SystemTime::UNIX_EPOCH.checked_add(Duration::from_secs(self.expiration?))?;
        Some(
            expiration
                .duration_since(SystemTime::now())
                .unwrap_or(Duration::ZERO),
        )
    }
}

// Lifetimes too large to represent are treated as tokens without expiration.
fn refresh_at(now: Instant, lifetime: Duration) -> Option<Instant> {
    now.checked_add(lifetime.mul_f64(REFRESH_FRACTION))
}

#[async_trait::async_trait]
impl TokenProvider for IamTokenProvider {
    async fn token(&self) -> Result<Token> {
        let mut form = vec![
            ("grant_type", GRANT_TYPE),
            ("apikey", self.api_key.as_str()),
            ("response_type", RESPONSE_TYPE),
        ];
        if let Some(scope) = &self.scope {
            form.push(("scope", scope.as_str()));
        }
        let mut builder = self
            .client
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .form(&form);
        if let Some((id, secret)) = &self.client_auth {
            builder = builder.basic_auth(id, Some(secret));
        }
        let response = builder.send().await.map_err(errors::retryable)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(errors::from_http_response(status, &body));
        }
        let response = response
            .json::<TokenResponse>()
            .await
            .map_err(errors::non_retryable)?;
        let expires_at = response
            .lifetime()
            .and_then(|d| refresh_at(Instant::now(), d));
        tracing::debug!(token_url = %self.token_url, ?expires_at, "fetched IAM access token");
        Ok(Token {
            token: response.access_token,
            token_type: response.token_type.unwrap_or_else(|| "Bearer".to_string()),
            expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    fn token_response(token: &str) -> serde_json::Value {
        json!({
            "access_token": token,
            "refresh_token": "not-used",
            "token_type": "Bearer",
            "expires_in": 3600,
            "expiration": 1_893_456_000_u64,
        })
    }

    #[tokio::test]
    async fn headers_success() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                request::headers(contains(("accept", "application/json"))),
                request::body(url_decoded(contains((
                    "grant_type",
                    "urn:ibm:params:oauth:grant-type:apikey"
                )))),
                request::body(url_decoded(contains(("apikey", "test-api-key")))),
                request::body(url_decoded(contains(("response_type", "cloud_iam")))),
            ])
            .times(1)
            .respond_with(json_encoded(token_response("test-access-token"))),
        );

        let creds = Builder::new("test-api-key")
            .with_url(server.url("/").to_string())
            .build()?;
        for _ in 0..3 {
            let headers = creds.headers().await?;
            assert_eq!(
                headers.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer test-access-token"))
            );
        }
        Ok(())
    }

    #[tokio::test]
    async fn full_token_url() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(token_response("test-access-token"))),
        );
        let creds = Builder::new("test-api-key")
            .with_url(server.url("/identity/token").to_string())
            .build()?;
        let headers = creds.headers().await?;
        assert!(headers.contains_key(AUTHORIZATION), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_id_and_secret() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/identity/token"),
                // base64("bx:bx")
                request::headers(contains(("authorization", "Basic Yng6Yng="))),
                request::body(url_decoded(contains(("scope", "openid")))),
            ])
            .respond_with(json_encoded(token_response("test-access-token"))),
        );
        let creds = Builder::new("test-api-key")
            .with_url(server.url("/").to_string())
            .with_client_id_and_secret("bx", "bx")
            .with_scope("openid")
            .build()?;
        let headers = creds.headers().await?;
        assert!(headers.contains_key(AUTHORIZATION), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bad_api_key() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(status_code(400).body(
                    json!({
                        "errorCode": "BXNIM0415E",
                        "errorMessage": "Provided API key could not be found.",
                    })
                    .to_string(),
                )),
        );
        let creds = Builder::new("test-api-key")
            .with_url(server.url("/").to_string())
            .build()?;
        let e = creds.headers().await.unwrap_err();
        assert!(!e.is_transient(), "{e:?}");
        assert!(
            e.to_string().contains("Provided API key could not be found."),
            "{e}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn transient_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(status_code(503)),
        );
        let creds = Builder::new("test-api-key")
            .with_url(server.url("/").to_string())
            .build()?;
        let e = creds.headers().await.unwrap_err();
        assert!(e.is_transient(), "{e:?}");
        Ok(())
    }

    #[tokio::test]
    async fn bad_response() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .respond_with(json_encoded(json!({"unexpected": "field"}))),
        );
        let creds = Builder::new("test-api-key")
            .with_url(server.url("/").to_string())
            .build()?;
        let e = creds.headers().await.unwrap_err();
        assert!(!e.is_transient(), "{e:?}");
        Ok(())
    }

    #[test]
    fn lifetime() {
        let response = TokenResponse {
            access_token: "a".into(),
            token_type: None,
            expires_in: Some(3600),
            expiration: Some(0),
        };
        assert_eq!(response.lifetime(), Some(Duration::from_secs(3600)));

        let response = TokenResponse {
            access_token: "a".into(),
            token_type: None,
            expires_in: None,
            expiration: Some(0),
        };
        assert_eq!(response.lifetime(), Some(Duration::ZERO));

        let response = TokenResponse {
            access_token: "a".into(),
            token_type: None,
            expires_in: None,
            expiration: None,
        };
        assert_eq!(response.lifetime(), None);

        let response = TokenResponse {
            access_token: "a".into(),
            token_type: None,
            expires_in: None,
            expiration: Some(u64::MAX),
        };
        assert_eq!(response.lifetime(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_deadline() {
        let now = Instant::now();
        assert_eq!(
            refresh_at(now, Duration::from_secs(100)),
            Some(now + Duration::from_secs(80))
        );
        assert_eq!(refresh_at(now, Duration::from_secs(u64::MAX)), None);
    }

    #[tokio::test]
    async fn huge_expires_in() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .times(1)
                .respond_with(json_encoded(json!({
                    "access_token": "long-lived-token",
                    "token_type": "Bearer",
                    "expires_in": u64::MAX,
                }))),
        );

        let creds = Builder::new("test-api-key")
            .with_url(server.url("/").to_string())
            .build()?;
        for _ in 0..2 {
            let headers = creds.headers().await?;
            assert_eq!(
                headers.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer long-lived-token"))
            );
        }
        Ok(())
    }

    #[test]
    fn debug() -> TestResult {
        let builder = Builder::new("test-api-key").with_client_id_and_secret("bx", "super-secret");
        let got = format!("{builder:?}");
        assert!(!got.contains("test-api-key"), "{got}");
        assert!(!got.contains("super-secret"), "{got}");
        assert!(got.contains("bx"), "{got}");

        let creds = builder.build()?;
        let got = format!("{creds:?}");
        assert!(!got.contains("test-api-key"), "{got}");
        assert!(!got.contains("super-secret"), "{got}");
        assert!(got.contains(DEFAULT_URL), "{got}");
        Ok(())
    }

    #[test]
    fn invalid() {
        let e = Builder::new("").build().unwrap_err();
        assert!(e.is_missing_config(), "{e:?}");
        let e = Builder::new("{test-api-key}").build().unwrap_err();
        assert!(e.is_invalid_config(), "{e:?}");
        let e = Builder::new("test-api-key")
            .with_client_id_and_secret("bx", "")
            .build()
            .unwrap_err();
        assert!(e.is_missing_config(), "{e:?}");
    }
}

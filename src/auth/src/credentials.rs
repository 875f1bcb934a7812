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

pub mod anonymous;
pub mod basic;
pub mod bearer_token;
pub mod iam;

use crate::errors::{BuildError, CredentialsError};
use http::HeaderMap;
use std::future::Future;
use std::sync::Arc;

/// A `Result` alias where the `Err` case is [CredentialsError].
pub type Result<T> = std::result::Result<T, CredentialsError>;

/// An implementation of [crate::credentials::CredentialsProvider].
///
/// Represents the authentication information used by the client libraries.
/// The client libraries ask the credentials for the headers to attach to each
/// request. Depending on the authentication scheme these headers may be
/// static (a bearer token, basic authentication), or may be refreshed
/// periodically (an IAM access token obtained from an API key).
///
/// Applications rarely need to interact with this type directly, other than to
/// create it and pass it to a client builder.
///
/// # Example
/// ```
/// # use ibm_cloud_auth::credentials::bearer_token;
/// # tokio_test::block_on(async {
/// let credentials = bearer_token::Builder::new("my-token").build()?;
/// let headers = credentials.headers().await?;
/// assert!(headers.contains_key(http::header::AUTHORIZATION));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// # });
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    // Credentials are shared across threads and the clients that hold them
    // derive `Clone`, so a `Box` will not do.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: crate::credentials::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers used to authenticate a request.
    pub async fn headers(&self) -> Result<HeaderMap> {
        self.inner.headers().await
    }
}

/// Represents an authenticator.
///
/// Applications only implement this trait to mock the credentials in their
/// tests, or to support an authentication scheme not included in this crate.
/// Use [Credentials::from()] to wrap the implementation.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    ///
    /// The underlying implementation refreshes any tokens as needed.
    fn headers(&self) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::Result;
    use http::HeaderMap;

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> Result<HeaderMap> {
            T::headers(self).await
        }
    }
}

/// The authentication types recognized in the `{SERVICE}_AUTH_TYPE`
/// environment variable.
pub mod auth_type {
    pub const IAM: &str = "iam";
    pub const BEARER_TOKEN: &str = "bearertoken";
    pub const BASIC: &str = "basic";
    pub const NO_AUTH: &str = "noauth";
}

/// Creates [Credentials] from the environment.
///
/// The builder reads a set of variables prefixed by the upper-cased service
/// name. For a service named `code_engine` these are:
///
/// | Variable | Use |
/// |----------|-----|
/// | `CODE_ENGINE_AUTH_TYPE` | One of `iam`, `bearerToken`, `basic`, `noAuth` (case insensitive) |
/// | `CODE_ENGINE_APIKEY` | The API key for `iam` |
/// | `CODE_ENGINE_AUTH_URL` | Overrides the IAM endpoint |
/// | `CODE_ENGINE_CLIENT_ID`, `CODE_ENGINE_CLIENT_SECRET` | Optional IAM client credentials |
/// | `CODE_ENGINE_SCOPE` | Optional IAM scope |
/// | `CODE_ENGINE_BEARER_TOKEN` | The token for `bearerToken` |
/// | `CODE_ENGINE_USERNAME`, `CODE_ENGINE_PASSWORD` | The user and password for `basic` |
///
/// Without an explicit authentication type, an API key selects `iam` and a
/// bearer token selects `bearerToken`.
///
/// # Example
/// ```no_run
/// # use ibm_cloud_auth::credentials::Builder;
/// let credentials = Builder::from_env("code_engine").build()?;
/// # Ok::<(), ibm_cloud_auth::errors::BuildError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Builder {
    prefix: String,
}

impl Builder {
    /// Creates a builder reading the variables for `service_name`.
    pub fn from_env<V: AsRef<str>>(service_name: V) -> Self {
        let prefix = service_name
            .as_ref()
            .chars()
            .map(|c| match c {
                '-' | '.' | ' ' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        Self { prefix }
    }

    /// Returns a [Credentials] instance with the configured settings.
    ///
    /// # Errors
    ///
    /// Fails if the environment does not contain the variables required by
    /// the selected authentication type, if their values are invalid, or if
    /// the authentication type is not supported.
    pub fn build(self) -> std::result::Result<Credentials, BuildError> {
        let auth_type = self.var("AUTH_TYPE").map(|s| s.to_ascii_lowercase());
        let auth_type = match auth_type {
            Some(t) => t,
            None if self.var("APIKEY").is_some() => auth_type::IAM.to_string(),
            None if self.var("BEARER_TOKEN").is_some() => auth_type::BEARER_TOKEN.to_string(),
            None => {
                return Err(BuildError::missing_config(format!(
                    "neither {0}_AUTH_TYPE nor {0}_APIKEY are set",
                    self.prefix
                )));
            }
        };
        match auth_type.as_str() {
            auth_type::IAM => {
                let mut builder = iam::Builder::new(self.required("APIKEY")?);
                if let Some(url) = self.var("AUTH_URL") {
                    builder = builder.with_url(url);
                }
                match (self.var("CLIENT_ID"), self.var("CLIENT_SECRET")) {
                    (Some(id), Some(secret)) => {
                        builder = builder.with_client_id_and_secret(id, secret);
                    }
                    (None, None) => {}
                    _ => {
                        return Err(BuildError::invalid_config(format!(
                            "{0}_CLIENT_ID and {0}_CLIENT_SECRET must be set together",
                            self.prefix
                        )));
                    }
                }
                if let Some(scope) = self.var("SCOPE") {
                    builder = builder.with_scope(scope);
                }
                builder.build()
            }
            auth_type::BEARER_TOKEN => {
                bearer_token::Builder::new(self.required("BEARER_TOKEN")?).build()
            }
            auth_type::BASIC => {
                basic::Builder::new(self.required("USERNAME")?, self.required("PASSWORD")?).build()
            }
            auth_type::NO_AUTH => Ok(anonymous::Builder::new().build()),
            _ => Err(BuildError::unknown_auth_type(auth_type)),
        }
    }

    fn var(&self, suffix: &str) -> Option<String> {
        std::env::var(format!("{}_{suffix}", self.prefix))
            .ok()
            .filter(|v| !v.is_empty())
    }

    fn required(&self, suffix: &str) -> std::result::Result<String, BuildError> {
        self.var(suffix).ok_or_else(|| {
            BuildError::missing_config(format!("{}_{suffix} is not set", self.prefix))
        })
    }
}

// Values copied from a JSON document often keep their braces or quotes.
pub(crate) fn validate_value(name: &str, value: &str) -> std::result::Result<(), BuildError> {
    if value.is_empty() {
        return Err(BuildError::missing_config(format!("the {name} is empty")));
    }
    let bad = |c: char| matches!(c, '{' | '}' | '"');
    if value.starts_with(bad) || value.ends_with(bad) {
        return Err(BuildError::invalid_config(format!(
            "the {name} cannot begin or end with a curly bracket or quotation mark"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::AUTHORIZATION;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug)]
    struct FakeProvider(&'static str);

    impl CredentialsProvider for FakeProvider {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, HeaderValue::from_static(self.0));
            Ok(headers)
        }
    }

    const VARS: [&str; 10] = [
        "TEST_SVC_AUTH_TYPE",
        "TEST_SVC_APIKEY",
        "TEST_SVC_AUTH_URL",
        "TEST_SVC_CLIENT_ID",
        "TEST_SVC_CLIENT_SECRET",
        "TEST_SVC_SCOPE",
        "TEST_SVC_BEARER_TOKEN",
        "TEST_SVC_USERNAME",
        "TEST_SVC_PASSWORD",
        "TEST_SVC_URL",
    ];

    fn clear_env() -> Vec<ScopedEnv<&'static str>> {
        VARS.iter().map(|v| ScopedEnv::remove(*v)).collect()
    }

    #[tokio::test]
    async fn from_provider() -> TestResult {
        let credentials = Credentials::from(FakeProvider("Bearer mocked"));
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer mocked"))
        );
        Ok(())
    }

    #[test_case("code_engine", "CODE_ENGINE")]
    #[test_case("code-engine", "CODE_ENGINE")]
    #[test_case("resource.manager", "RESOURCE_MANAGER")]
    fn prefix(service_name: &str, want: &str) {
        assert_eq!(Builder::from_env(service_name).prefix, want);
    }

    #[tokio::test]
    #[serial]
    async fn env_bearer_token() -> TestResult {
        let _c = clear_env();
        let _t = ScopedEnv::set("TEST_SVC_AUTH_TYPE", "bearerToken");
        let _v = ScopedEnv::set("TEST_SVC_BEARER_TOKEN", "test-token");
        let credentials = Builder::from_env("test_svc").build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Bearer test-token"))
        );
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn env_bearer_token_implicit() -> TestResult {
        let _c = clear_env();
        let _v = ScopedEnv::set("TEST_SVC_BEARER_TOKEN", "test-token");
        let credentials = Builder::from_env("test_svc").build()?;
        let headers = credentials.headers().await?;
        assert!(headers.contains_key(AUTHORIZATION), "{headers:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn env_basic() -> TestResult {
        let _c = clear_env();
        let _t = ScopedEnv::set("TEST_SVC_AUTH_TYPE", "BASIC");
        let _u = ScopedEnv::set("TEST_SVC_USERNAME", "Aladdin");
        let _p = ScopedEnv::set("TEST_SVC_PASSWORD", "open sesame");
        let credentials = Builder::from_env("test_svc").build()?;
        let headers = credentials.headers().await?;
        assert_eq!(
            headers.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="))
        );
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn env_noauth() -> TestResult {
        let _c = clear_env();
        let _t = ScopedEnv::set("TEST_SVC_AUTH_TYPE", "noAuth");
        let credentials = Builder::from_env("test_svc").build()?;
        let headers = credentials.headers().await?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[test]
    #[serial]
    fn env_iam_implicit() -> TestResult {
        let _c = clear_env();
        let _k = ScopedEnv::set("TEST_SVC_APIKEY", "test-api-key");
        let credentials = Builder::from_env("test_svc").build()?;
        let fmt = format!("{credentials:?}");
        assert!(fmt.contains("IamCredentials"), "{fmt}");
        assert!(!fmt.contains("test-api-key"), "{fmt}");
        Ok(())
    }

    #[test]
    #[serial]
    fn env_iam_missing_key() {
        let _c = clear_env();
        let _t = ScopedEnv::set("TEST_SVC_AUTH_TYPE", "iam");
        let e = Builder::from_env("test_svc").build().unwrap_err();
        assert!(e.is_missing_config(), "{e:?}");
        assert!(e.to_string().contains("TEST_SVC_APIKEY"), "{e}");
    }

    #[test]
    #[serial]
    fn env_iam_client_id_without_secret() {
        let _c = clear_env();
        let _k = ScopedEnv::set("TEST_SVC_APIKEY", "test-api-key");
        let _i = ScopedEnv::set("TEST_SVC_CLIENT_ID", "bx");
        let e = Builder::from_env("test_svc").build().unwrap_err();
        assert!(e.is_invalid_config(), "{e:?}");
    }

    #[test]
    #[serial]
    fn env_empty() {
        let _c = clear_env();
        let e = Builder::from_env("test_svc").build().unwrap_err();
        assert!(e.is_missing_config(), "{e:?}");
    }

    #[test]
    #[serial]
    fn env_unknown_auth_type() {
        let _c = clear_env();
        let _t = ScopedEnv::set("TEST_SVC_AUTH_TYPE", "cp4d");
        let e = Builder::from_env("test_svc").build().unwrap_err();
        assert!(e.is_unknown_auth_type(), "{e:?}");
    }

    #[test_case("abc", true)]
    #[test_case("", false)]
    #[test_case("{abc", false)]
    #[test_case("abc}", false)]
    #[test_case("\"abc\"", false)]
    #[test_case("a{b}c", true)]
    fn validate(value: &str, ok: bool) {
        assert_eq!(validate_value("apikey", value).is_ok(), ok);
    }
}

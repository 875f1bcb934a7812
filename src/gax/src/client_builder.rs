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

//! The configuration shared by all the clients in the SDK.
//!
//! Each client exposes a `builder()` function returning a [ClientBuilder]
//! specialized for that client. The defaults use the service's default region
//! and load the credentials from the environment. Use the builder to select
//! another region or explicit credentials, and to configure retries.
//!
//! ```no_run
//! # use ibm_cloud_gax::client_builder::ClientBuilder;
//! # use ibm_cloud_gax::retry_policy::{RetryPolicyExt, TransientErrors};
//! # fn sample<F, Cr>(builder: ClientBuilder<F, Cr>) -> ClientBuilder<F, Cr> {
//! builder
//!     .with_endpoint("https://api.eu-de.codeengine.cloud.ibm.com/v2")
//!     .with_retry_policy(TransientErrors.with_attempt_limit(5))
//! # }
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use http::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;

pub type Result<T> = std::result::Result<T, Error>;

/// A client could not be created.
///
/// The most common cause is missing credentials:
/// ```no_run
/// # use ibm_cloud_gax::client_builder::Error;
/// # fn report(e: Error) {
/// if e.is_default_credentials() {
///     eprintln!("set CODE_ENGINE_APIKEY, or configure the credentials explicitly: {e}");
/// }
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// The credentials could not be loaded from the environment.
    pub fn is_default_credentials(&self) -> bool {
        matches!(self.0, ErrorKind::DefaultCredentials(_))
    }

    /// The HTTP client could not be initialized.
    pub fn is_transport(&self) -> bool {
        matches!(self.0, ErrorKind::Transport(_))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("cannot load the credentials from the environment")]
    DefaultCredentials(#[source] BoxError),
    #[error("cannot initialize the HTTP client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Collects the configuration for a client of type `F::Client`.
///
/// `F` creates the client from the configuration, and `Cr` is the type of the
/// credentials the client accepts.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    config: internal::ClientConfig<Cr>,
    factory: F,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Creates the client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        self.factory.build(self.config).await
    }

    /// Sends the requests to `v` instead of the default endpoint.
    ///
    /// Use this to select a region, a private endpoint, or a local emulator.
    /// The value includes the API path prefix, for example
    /// `https://api.private.jp-tok.codeengine.cloud.ibm.com/v2`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Instruments each operation with a [tracing] span.
    ///
    /// [tracing]: https://docs.rs/tracing
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Uses `v` instead of the credentials configured in the environment.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Retries failed requests according to `v`.
    ///
    /// Without a retry policy each request makes a single attempt.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Controls the delay between retry attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Sends `name: value` with every request.
    ///
    /// Headers set on a single request take precedence.
    pub fn with_default_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.config.default_headers.insert(name, value);
        self
    }

    /// Overrides the `version` query parameter sent with each request.
    ///
    /// IBM Cloud services version their APIs by date, in `YYYY-MM-DD` format.
    pub fn with_api_version<V: Into<String>>(mut self, v: V) -> Self {
        self.config.api_version = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    /// Creates a client from its configuration.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub default_headers: HeaderMap,
        pub api_version: Option<String>,
    }

    // A derived `Default` would require `Cr: Default`.
    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                default_headers: HeaderMap::new(),
                api_version: None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::internal::{ClientConfig, ClientFactory, new_builder};
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::retry_policy::{RetryPolicyExt, TransientErrors};
    use std::error::Error as _;

    #[derive(Clone, Debug, PartialEq)]
    struct ApiKey(String);

    // The "client" is the configuration it was built with.
    struct Capture;
    impl ClientFactory for Capture {
        type Client = ClientConfig<ApiKey>;
        type Credentials = ApiKey;
        async fn build(self, config: ClientConfig<ApiKey>) -> Result<Self::Client> {
            Ok(config)
        }
    }

    struct NoCredentials;
    impl ClientFactory for NoCredentials {
        type Client = ();
        type Credentials = ApiKey;
        async fn build(self, config: ClientConfig<ApiKey>) -> Result<()> {
            match config.cred {
                Some(_) => Ok(()),
                None => Err(Error::cred("CODE_ENGINE_APIKEY is not set")),
            }
        }
    }

    #[tokio::test]
    async fn defaults() -> anyhow::Result<()> {
        let config = new_builder(Capture).build().await?;
        assert_eq!(config.endpoint, None);
        assert_eq!(config.cred, None);
        assert!(!config.tracing);
        assert!(config.retry_policy.is_none(), "{config:?}");
        assert!(config.backoff_policy.is_none(), "{config:?}");
        assert!(config.default_headers.is_empty(), "{config:?}");
        assert_eq!(config.api_version, None);
        Ok(())
    }

    #[tokio::test]
    async fn all_settings() -> anyhow::Result<()> {
        let endpoint = "https://api.private.eu-gb.codeengine.cloud.ibm.com/v2";
        let config = new_builder(Capture)
            .with_endpoint(endpoint)
            .with_tracing()
            .with_credentials(ApiKey("test-key".into()))
            .with_retry_policy(TransientErrors.with_attempt_limit(3))
            .with_backoff_policy(ExponentialBackoff::default())
            .with_default_header(
                HeaderName::from_static("x-correlation-id"),
                HeaderValue::from_static("nightly-deploy"),
            )
            .with_api_version("2024-11-18")
            .build()
            .await?;
        assert_eq!(config.endpoint.as_deref(), Some(endpoint));
        assert!(config.tracing);
        assert_eq!(config.cred, Some(ApiKey("test-key".into())));
        assert!(config.retry_policy.is_some(), "{config:?}");
        assert!(config.backoff_policy.is_some(), "{config:?}");
        assert_eq!(
            config.default_headers.get("x-correlation-id"),
            Some(&HeaderValue::from_static("nightly-deploy"))
        );
        assert_eq!(config.api_version.as_deref(), Some("2024-11-18"));
        Ok(())
    }

    #[tokio::test]
    async fn factory_errors() {
        let err = new_builder(NoCredentials).build().await.unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
        assert!(!err.is_transport(), "{err:?}");

        let ok = new_builder(NoCredentials)
            .with_credentials(ApiKey("test-key".into()))
            .build()
            .await;
        assert!(ok.is_ok(), "{ok:?}");
    }

    #[test]
    fn error_sources() {
        let err = Error::transport(std::io::Error::other("no TLS roots"));
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.to_string(), "cannot initialize the HTTP client");
        let source = err.source().and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(source.is_some(), "{err:?}");

        let err = Error::cred("missing api key");
        assert_eq!(
            err.to_string(),
            "cannot load the credentials from the environment"
        );
        assert_eq!(err.source().map(|e| e.to_string()).as_deref(), Some("missing api key"));
    }
}

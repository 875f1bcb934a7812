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

//! Verify the HTTP client sends the expected headers.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::*;
    use http::{HeaderName, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use ibm_cloud_gax_internal::options::ClientConfig;
    use serde_json::Value;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    fn config_with(cred: auth::credentials::Credentials) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = Some(cred);
        config
    }

    #[tokio::test]
    async fn bearer_token() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/projects"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(status_code(200).body("{}")),
        );
        let cred = auth::credentials::bearer_token::Builder::new("test-token").build()?;
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(config_with(cred), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects".into());
        client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn anonymous() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/projects"),
                not(request::headers(contains(key("authorization")))),
            ])
            .respond_with(status_code(200).body("{}")),
        );
        let cred = auth::credentials::anonymous::Builder::new().build();
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(config_with(cred), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects".into());
        client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn user_agent() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/projects"),
                request::headers(contains((
                    "user-agent",
                    matches("^my-app/1.0 ibm-cloud-rust-sdk/")
                ))),
            ])
            .respond_with(status_code(200).body("{}")),
        );
        let cred = auth::credentials::anonymous::Builder::new().build();
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(config_with(cred), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn default_headers_are_overridden() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/projects"),
                request::headers(contains(("x-default-only", "d1"))),
                request::headers(contains(("x-both", "per-call"))),
                not(request::headers(contains(("x-both", "default")))),
            ])
            .respond_with(status_code(200).body("{}")),
        );
        let cred = auth::credentials::anonymous::Builder::new().build();
        let mut config = config_with(cred);
        config.default_headers.insert(
            HeaderName::from_static("x-default-only"),
            HeaderValue::from_static("d1"),
        );
        config.default_headers.insert(
            HeaderName::from_static("x-both"),
            HeaderValue::from_static("default"),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(config, &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects".into());
        let mut options = RequestOptions::default();
        options.set_header(
            HeaderName::from_static("x-both"),
            HeaderValue::from_static("per-call"),
        );
        client
            .execute::<NoBody, Value>(builder, None, options)
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn authentication_error() -> Result<()> {
        use auth::credentials::CredentialsProvider;
        use auth::errors::CredentialsError;

        #[derive(Debug)]
        struct Failing;
        impl CredentialsProvider for Failing {
            async fn headers(&self) -> auth::credentials::Result<http::HeaderMap> {
                Err(CredentialsError::from_msg(false, "cannot create token"))
            }
        }

        let server = Server::run();
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(
            config_with(auth::credentials::Credentials::from(Failing)),
            &endpoint,
        )
        .await?;
        let builder = client.builder(reqwest::Method::GET, "/projects".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
        Ok(())
    }
}

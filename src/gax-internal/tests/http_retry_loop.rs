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

//! The HTTP client runs the retry loop against a server returning a scripted
//! sequence of responses. The policies themselves are tested in `gax`.

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
    use gax::options::RequestOptions;
    use gax::response::Response;
    use gax::retry_policy::{RetryPolicyExt, TransientErrors};
    use httptest::{Expectation, Server, cycle, matchers::*, responders::*};
    use ibm_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use ibm_cloud_gax_internal::options::ClientConfig;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;

    const PATH: &str = "/projects/p1/apps/my-app";

    fn fast_backoff() -> ExponentialBackoff {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn unavailable() -> impl Responder {
        let body = json!({"errors": [{"code": "service_unavailable", "message": "try again"}]});
        status_code(503).body(body.to_string())
    }

    fn app() -> impl Responder {
        status_code(200).body(json!({"name": "my-app"}).to_string())
    }

    // Three attempts, retrying transient errors.
    fn retrying(idempotent: bool) -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_idempotency(idempotent);
        options.set_backoff_policy(fast_backoff());
        options.set_retry_policy(TransientErrors.with_attempt_limit(3));
        options
    }

    async fn client(server: &Server, mut config: ClientConfig) -> anyhow::Result<ReqwestClient> {
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        let endpoint = format!("http://{}", server.addr());
        Ok(ReqwestClient::new(config, &endpoint).await?)
    }

    async fn get(
        client: &ReqwestClient,
        options: RequestOptions,
    ) -> gax::Result<Response<Value>> {
        let builder = client.builder(reqwest::Method::GET, PATH.to_string());
        client.execute(builder, None::<NoBody>, options).await
    }

    fn expect_get(server: &Server, times: usize, responder: impl Responder + 'static) {
        server.expect(
            Expectation::matching(all_of![
                request::method("GET"),
                request::path(eq(PATH)),
            ])
            .times(times)
            .respond_with(responder),
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn first_attempt_succeeds() -> anyhow::Result<()> {
        let server = Server::run();
        expect_get(&server, 1, app());
        let client = client(&server, ClientConfig::default()).await?;
        let response = get(&client, retrying(true)).await?;
        assert_eq!(response.body(), &json!({"name": "my-app"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn recovers_from_transient_errors() -> anyhow::Result<()> {
        let server = Server::run();
        expect_get(&server, 3, cycle![unavailable(), unavailable(), app()]);
        let client = client(&server, ClientConfig::default()).await?;
        let response = get(&client, retrying(true)).await?;
        assert_eq!(response.body(), &json!({"name": "my-app"}));
        Ok(())
    }

    // A 503 means the service did not process the request, it is safe to
    // retry even a `POST`.
    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn unavailable_post_is_retried() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method("POST"),
                request::path(eq("/projects")),
                request::body(json_decoded(eq(json!({"name": "p1"})))),
            ])
            .times(2)
            .respond_with(cycle![unavailable(), status_code(201).body("{}")]),
        );
        let client = client(&server, ClientConfig::default()).await?;
        let builder = client.builder(reqwest::Method::POST, "/projects".into());
        let response = client
            .execute::<Value, Value>(builder, Some(json!({"name": "p1"})), retrying(false))
            .await?;
        assert_eq!(response.body(), &json!({}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn permanent_error_stops() -> anyhow::Result<()> {
        let server = Server::run();
        let body = json!({"errors": [{"code": "invalid_request", "message": "bad name"}]});
        expect_get(&server, 1, status_code(400).body(body.to_string()));
        let client = client(&server, ClientConfig::default()).await?;
        let err = get(&client, retrying(true)).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        assert_eq!(err.status().and_then(|s| s.code()), Some("invalid_request"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn attempts_exhausted() -> anyhow::Result<()> {
        let server = Server::run();
        expect_get(&server, 3, unavailable());
        let client = client(&server, ClientConfig::default()).await?;
        let err = get(&client, retrying(true)).await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn policy_from_client_config() -> anyhow::Result<()> {
        let server = Server::run();
        expect_get(&server, 2, cycle![unavailable(), app()]);
        let mut config = ClientConfig::default();
        config.retry_policy = Some(Arc::new(TransientErrors.with_attempt_limit(5)));
        config.backoff_policy = Some(Arc::new(fast_backoff()));
        let client = client(&server, config).await?;
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        let response = get(&client, options).await?;
        assert_eq!(response.body(), &json!({"name": "my-app"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn slow_attempt_times_out() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::path(eq(PATH)))
                .times(1..)
                .respond_with(delay_and_then(Duration::from_millis(500), app())),
        );
        let client = client(&server, ClientConfig::default()).await?;
        let mut options = RequestOptions::default();
        options.set_attempt_timeout(Duration::from_millis(50));
        let err = get(&client, options).await.unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }
}

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

//! The client reads its defaults from the environment.

#[cfg(test)]
mod tests {
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_codeengine_v2::client::CodeEngine;
    use scoped_env::ScopedEnv;
    use serde_json::json;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "CODE_ENGINE_URL",
        "CODE_ENGINE_AUTH_TYPE",
        "CODE_ENGINE_APIKEY",
        "CODE_ENGINE_BEARER_TOKEN",
    ];

    fn clear_env() -> Vec<ScopedEnv<&'static str>> {
        VARS.iter().map(|v| ScopedEnv::remove(*v)).collect()
    }

    #[tokio::test]
    #[serial]
    async fn endpoint_and_credentials() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/v2/function_runtimes"),
                request::headers(contains(("authorization", "Bearer test-token"))),
            ])
            .respond_with(json_encoded(json!({"function_runtimes": []}))),
        );

        let _c = clear_env();
        let endpoint = format!("http://{}/v2", server.addr());
        let _u = ScopedEnv::set("CODE_ENGINE_URL", endpoint.as_str());
        let _a = ScopedEnv::set("CODE_ENGINE_AUTH_TYPE", "bearerToken");
        let _t = ScopedEnv::set("CODE_ENGINE_BEARER_TOKEN", "test-token");
        let client = CodeEngine::builder().build().await?;
        let response = client.list_function_runtimes().send().await?;
        assert!(response.function_runtimes.is_empty(), "{response:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn explicit_endpoint_wins() -> anyhow::Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/v2/function_runtimes"))
                .respond_with(json_encoded(json!({"function_runtimes": []}))),
        );

        let _c = clear_env();
        let _u = ScopedEnv::set("CODE_ENGINE_URL", "http://127.0.0.1:1/v2");
        let client = CodeEngine::builder()
            .with_endpoint(format!("http://{}/v2", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        client.list_function_runtimes().send().await?;
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn missing_credentials() {
        let _c = clear_env();
        let err = CodeEngine::builder().build().await.unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
    }
}

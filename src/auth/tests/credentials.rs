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

#[cfg(test)]
mod tests {
    use http::header::AUTHORIZATION;
    use http::{HeaderMap, HeaderValue};
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use ibm_cloud_auth::credentials::{Credentials, CredentialsProvider, Result, iam};
    use serde_json::json;

    type TestResult = anyhow::Result<()>;

    #[derive(Debug)]
    struct Custom;

    impl CredentialsProvider for Custom {
        async fn headers(&self) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            headers.insert(AUTHORIZATION, HeaderValue::from_static("Custom abc"));
            Ok(headers)
        }
    }

    #[tokio::test]
    async fn custom_provider() -> TestResult {
        let creds = Credentials::from(Custom);
        let clone = creds.clone();
        assert_eq!(
            clone.headers().await?.get(AUTHORIZATION),
            Some(&HeaderValue::from_static("Custom abc"))
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn iam_concurrent_callers_share_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/identity/token"))
                .times(1)
                .respond_with(json_encoded(json!({
                    "access_token": "shared-token",
                    "token_type": "Bearer",
                    "expires_in": 3600,
                }))),
        );
        let creds = iam::Builder::new("test-api-key")
            .with_url(server.url("/").to_string())
            .build()?;

        let tasks = (0..16)
            .map(|_| {
                let creds = creds.clone();
                tokio::spawn(async move { creds.headers().await })
            })
            .collect::<Vec<_>>();
        for task in tasks {
            let headers = task.await??;
            assert_eq!(
                headers.get(AUTHORIZATION),
                Some(&HeaderValue::from_static("Bearer shared-token"))
            );
        }
        Ok(())
    }
}

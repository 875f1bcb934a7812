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

#[cfg(all(test, feature = "_internal-http-client"))]
mod tests {
    use gax::options::*;
    use ibm_cloud_gax_internal::http::{NoBody, ReqwestClient};
    use ibm_cloud_gax_internal::options::ClientConfig;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::{Value, json};

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    fn test_config() -> ClientConfig {
        let mut config = ClientConfig::default();
        config.cred = auth::credentials::anonymous::Builder::new().build().into();
        config
    }

    #[tokio::test]
    async fn success_with_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/projects/p1"),
                request::headers(contains(("accept", "application/json"))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("etag", "W/\"v1\"")
                    .body(json!({"id": "p1", "name": "my-project"}).to_string()),
            ),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects/p1".into());
        let response = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.etag(), Some("W/\"v1\""));
        assert_eq!(response.body(), &json!({"id": "p1", "name": "my-project"}));
        Ok(())
    }

    #[tokio::test]
    async fn json_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/projects"),
                request::headers(contains(("content-type", "application/json"))),
                request::body(json_decoded(eq(json!({"name": "my-project"})))),
            ])
            .respond_with(status_code(201).body(json!({"id": "p1"}).to_string())),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::POST, "/projects".into());
        let response = client
            .execute::<Value, Value>(
                builder,
                Some(json!({"name": "my-project"})),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.body(), &json!({"id": "p1"}));
        Ok(())
    }

    #[tokio::test]
    async fn merge_patch_body() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PATCH", "/projects/p1/apps/a1"),
                request::headers(contains((
                    "content-type",
                    "application/merge-patch+json"
                ))),
                request::headers(contains(("if-match", "W/\"v1\""))),
                request::body(json_decoded(eq(json!({"scale_min_instances": 1})))),
            ])
            .respond_with(status_code(200).body(json!({"name": "a1"}).to_string())),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client
            .builder(reqwest::Method::PATCH, "/projects/p1/apps/a1".into())
            .header("if-match", "W/\"v1\"");
        let response = client
            .execute_patch::<Value, Value>(
                builder,
                json!({"scale_min_instances": 1}),
                RequestOptions::default(),
            )
            .await?;
        assert_eq!(response.body(), &json!({"name": "a1"}));
        Ok(())
    }

    #[tokio::test]
    async fn no_content() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/projects/p1"))
                .respond_with(status_code(202)),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/projects/p1".into());
        let response = client
            .execute::<NoBody, ()>(builder, None, RequestOptions::default())
            .await?;
        assert_eq!(response.into_body(), ());
        Ok(())
    }

    #[tokio::test]
    async fn error_with_status() -> Result<()> {
        let server = Server::run();
        let payload = json!({
            "errors": [{
                "code": "resource_not_found",
                "message": "Project with ID 'p1' does not exist",
            }],
            "trace": "trace-123",
            "status_code": 404,
        });
        server.expect(
            Expectation::matching(request::method_path("GET", "/projects/p1")).respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .insert_header("x-request-id", "req-123")
                    .body(payload.to_string()),
            ),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects/p1".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        let status = err.status().unwrap();
        assert_eq!(status.code(), Some("resource_not_found"));
        assert_eq!(status.trace.as_deref(), Some("trace-123"));
        let headers = err.http_headers().unwrap();
        assert_eq!(
            headers.get("x-request-id").and_then(|v| v.to_str().ok()),
            Some("req-123")
        );
        Ok(())
    }

    #[tokio::test]
    async fn error_without_status() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/projects/p1"))
                .respond_with(status_code(502).body("<html>bad gateway</html>")),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects/p1".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(502));
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(
            err.http_payload(),
            Some(&bytes::Bytes::from_static(b"<html>bad gateway</html>"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn bad_payload() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/projects/p1"))
                .respond_with(status_code(200).body("not json")),
        );
        let endpoint = format!("http://{}", server.addr());
        let client = ReqwestClient::new(test_config(), &endpoint).await?;
        let builder = client.builder(reqwest::Method::GET, "/projects/p1".into());
        let err = client
            .execute::<NoBody, Value>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_credentials() -> Result<()> {
        let err = ReqwestClient::new(ClientConfig::default(), "http://127.0.0.1:1")
            .await
            .unwrap_err();
        assert!(err.is_default_credentials(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_override() -> Result<()> {
        let mut config = test_config();
        config.endpoint = Some("https://api.us-south.codeengine.cloud.ibm.com/v2/".into());
        let client = ReqwestClient::new(config, "https://default.example.com/v2").await?;
        assert_eq!(
            client.endpoint(),
            "https://api.us-south.codeengine.cloud.ibm.com/v2"
        );
        Ok(())
    }
}

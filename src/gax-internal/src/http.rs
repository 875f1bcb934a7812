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

use auth::credentials::Credentials;
use bytes::Bytes;
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceError};
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::patch::MERGE_PATCH_CONTENT_TYPE;
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use http::{HeaderMap, StatusCode};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Sends JSON requests to an IBM Cloud service and decodes the responses.
///
/// The client adds the authentication, `User-Agent` and default headers to
/// each request, and runs the retry loop when a retry policy is configured.
#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    default_headers: HeaderMap,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        default_endpoint: &str,
    ) -> gax::client_builder::Result<Self> {
        let Some(cred) = config.cred else {
            return Err(BuilderError::cred("no credentials configured"));
        };
        let inner = reqwest::Client::builder()
            .build()
            .map_err(BuilderError::transport)?;
        let endpoint = config.endpoint.as_deref().unwrap_or(default_endpoint);
        Ok(Self {
            inner,
            cred,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            default_headers: config.default_headers,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Starts a request for `path`, relative to the endpoint.
    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        let url = format!("{}{path}", self.endpoint);
        self.inner.request(method, url)
    }

    /// Sends a request with an optional JSON body.
    pub async fn execute<I: Serialize, O: DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let builder = with_body(builder, body, JSON_CONTENT_TYPE)?;
        self.send(builder, options).await
    }

    /// Sends a request whose body is a JSON merge-patch document.
    pub async fn execute_patch<I: Serialize, O: DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: I,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let builder = with_body(builder, Some(body), MERGE_PATCH_CONTENT_TYPE)?;
        self.send(builder, options).await
    }

    async fn send<O: DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let builder = builder.headers(self.headers(&options)?);
        let retry_policy = options
            .retry_policy()
            .clone()
            .or_else(|| self.retry_policy.clone());
        let Some(retry_policy) = retry_policy else {
            return self.attempt(builder, &options, None).await;
        };
        let backoff = options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()));
        let idempotent = options.idempotent().unwrap_or(false);
        let this = self.clone();
        let attempt = async move |remaining: Option<Duration>| {
            let builder = builder
                .try_clone()
                .expect("request bodies are always buffered, `try_clone()` cannot fail");
            let result = this.attempt(builder, &options, remaining).await;
            if let Err(e) = &result {
                tracing::debug!(error = %e, "request attempt failed");
            }
            result
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        gax::retry_loop_internal::retry_loop(attempt, sleep, idempotent, retry_policy, backoff)
            .await
    }

    // The client defaults, then the `Accept` and `User-Agent` headers, then
    // the per-request headers.
    fn headers(&self, options: &RequestOptions) -> Result<HeaderMap> {
        let mut headers = self.default_headers.clone();
        headers
            .entry(ACCEPT)
            .or_insert_with(|| HeaderValue::from_static(JSON_CONTENT_TYPE));
        let user_agent = match options.user_agent() {
            Some(prefix) => format!("{prefix} {}", crate::api_header::user_agent()),
            None => crate::api_header::user_agent(),
        };
        let user_agent = HeaderValue::from_str(&user_agent).map_err(Error::ser)?;
        headers.insert(USER_AGENT, user_agent);
        for (name, value) in options.headers() {
            headers.insert(name.clone(), value.clone());
        }
        Ok(headers)
    }

    async fn attempt<O: DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining: Option<Duration>,
    ) -> Result<Response<O>> {
        let auth_headers = self.cred.headers().await.map_err(Error::authentication)?;
        let mut builder = builder.headers(auth_headers);
        if let Some(timeout) = gax::retry_loop_internal::effective_timeout(options, remaining) {
            builder = builder.timeout(timeout);
        }
        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::timeout(e)
            } else {
                Error::io(e)
            }
        })?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(Error::io)?;
        if !status.is_success() {
            return Err(decode_error(status, headers, body));
        }
        decode_body(headers, body)
    }
}

/// A placeholder for requests without a body.
#[derive(Serialize)]
pub struct NoBody;

fn with_body<I: Serialize>(
    builder: reqwest::RequestBuilder,
    body: Option<I>,
    content_type: &'static str,
) -> Result<reqwest::RequestBuilder> {
    let Some(body) = body else {
        return Ok(builder);
    };
    let payload = serde_json::to_vec(&body).map_err(Error::ser)?;
    Ok(builder
        .header(CONTENT_TYPE, HeaderValue::from_static(content_type))
        .body(payload))
}

// IBM Cloud services report errors with a JSON envelope. Gateways and proxies
// may return other payloads, those are preserved as they are.
fn decode_error(status: StatusCode, headers: HeaderMap, body: Bytes) -> Error {
    match ServiceError::try_from(&body) {
        Ok(e) => Error::service_with_http_metadata(e, Some(status.as_u16()), Some(headers)),
        Err(_) => Error::http(status.as_u16(), headers, body),
    }
}

// Deletes and some actions return `202 Accepted` or `204 No Content` without
// a body.
fn decode_body<O>(headers: HeaderMap, body: Bytes) -> Result<Response<O>>
where
    O: DeserializeOwned + Default,
{
    let body = if body.is_empty() {
        O::default()
    } else {
        serde_json::from_slice(&body).map_err(Error::deser)?
    };
    Ok(Response::from_parts(Parts::new().set_headers(headers), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::ErrorDetail;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct App {
        #[serde(default)]
        name: String,
    }

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        headers
    }

    #[test]
    fn error_envelope() {
        let body = serde_json::json!({
            "errors": [{"code": "app_not_found", "message": "App 'my-app' not found"}],
            "trace": "codeengine-api-9f8e",
            "status_code": 404,
        });
        let err = decode_error(
            StatusCode::NOT_FOUND,
            json_headers(),
            Bytes::from(body.to_string()),
        );
        let want = ServiceError::default()
            .set_errors([ErrorDetail::new()
                .set_code("app_not_found")
                .set_message("App 'my-app' not found")])
            .set_trace("codeengine-api-9f8e")
            .set_status_code(404_u16);
        assert_eq!(err.status(), Some(&want));
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.http_headers(), Some(&json_headers()));
        assert_eq!(err.http_payload(), None);
    }

    #[test]
    fn error_from_gateway() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        let payload = Bytes::from_static(b"<html>Bad Gateway</html>");
        let err = decode_error(StatusCode::BAD_GATEWAY, headers.clone(), payload.clone());
        assert!(err.status().is_none(), "{err:?}");
        assert!(err.is_transport(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(502));
        assert_eq!(err.http_headers(), Some(&headers));
        assert_eq!(err.http_payload(), Some(&payload));
    }

    #[test_case(""; "empty")]
    #[test_case("{}"; "empty object")]
    fn empty_body(content: &'static str) -> anyhow::Result<()> {
        let body = Bytes::from_static(content.as_bytes());
        let response = decode_body::<App>(json_headers(), body)?;
        assert_eq!(response.into_body(), App::default());
        Ok(())
    }

    #[test]
    fn body_and_headers() -> anyhow::Result<()> {
        let mut headers = json_headers();
        headers.insert("etag", HeaderValue::from_static("W/\"3-abc\""));
        let response = decode_body::<App>(headers, Bytes::from_static(br#"{"name": "my-app"}"#))?;
        assert_eq!(response.etag(), Some("W/\"3-abc\""));
        assert_eq!(response.body().name, "my-app");
        Ok(())
    }

    #[test]
    fn bad_body() {
        let err = decode_body::<App>(json_headers(), Bytes::from_static(br#"{"name": 42}"#))
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn request_body() -> anyhow::Result<()> {
        let client = reqwest::Client::new();
        let builder = client.post("https://api.us-south.codeengine.cloud.ibm.com/v2/projects");
        let body = Some(serde_json::json!({"name": "p1"}));
        let request = with_body(builder, body, JSON_CONTENT_TYPE)?.build()?;
        assert_eq!(
            request.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static(JSON_CONTENT_TYPE))
        );
        let body = request.body().and_then(|b| b.as_bytes()).unwrap_or_default();
        assert_eq!(body, br#"{"name":"p1"}"#);

        let builder = client.get("https://api.us-south.codeengine.cloud.ibm.com/v2/projects");
        let request = with_body(builder, None::<NoBody>, JSON_CONTENT_TYPE)?.build()?;
        assert!(request.headers().get(CONTENT_TYPE).is_none());
        assert!(request.body().is_none());
        Ok(())
    }
}

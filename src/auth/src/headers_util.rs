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

use crate::Result;
use crate::errors;
use crate::token::Token;
use base64::Engine;
use http::HeaderMap;
use http::header::{AUTHORIZATION, HeaderValue};

/// Creates the `Authorization` header for a token.
pub(crate) fn build_bearer_headers(token: &Token) -> Result<HeaderMap> {
    let value = format!("{} {}", token.token_type, token.token);
    build_authorization(&value)
}

/// Creates the `Authorization` header for basic authentication.
pub(crate) fn build_basic_headers(username: &str, password: &str) -> Result<HeaderMap> {
    build_authorization(&basic_value(username, password))
}

pub(crate) fn basic_value(username: &str, password: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}

fn build_authorization(value: &str) -> Result<HeaderMap> {
    let mut value = HeaderValue::from_str(value).map_err(errors::non_retryable)?;
    value.set_sensitive(true);
    let mut headers = HeaderMap::with_capacity(1);
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer() {
        let token = Token {
            token: "test-token".into(),
            token_type: "Bearer".into(),
            expires_at: None,
        };
        let headers = build_bearer_headers(&token).unwrap();
        assert_eq!(headers.len(), 1, "{headers:?}");
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(value, HeaderValue::from_static("Bearer test-token"));
        assert!(value.is_sensitive());
    }

    #[test]
    fn bearer_invalid() {
        let token = Token {
            token: "bad\ntoken".into(),
            token_type: "Bearer".into(),
            expires_at: None,
        };
        let e = build_bearer_headers(&token).unwrap_err();
        assert!(!e.is_transient(), "{e:?}");
    }

    #[test]
    fn basic() {
        let headers = build_basic_headers("Aladdin", "open sesame").unwrap();
        let value = headers.get(AUTHORIZATION).unwrap();
        assert_eq!(
            value,
            HeaderValue::from_static("Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==")
        );
        assert!(value.is_sensitive());
    }
}

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
use tokio::time::Instant;

/// An access token and the information needed to use and refresh it.
#[derive(Clone, PartialEq)]
pub struct Token {
    /// The value sent in the `Authorization` header, after the type.
    pub token: String,

    /// The authorization scheme, IAM tokens are always `Bearer` tokens.
    pub token_type: String,

    /// When to stop using the token, `None` for tokens that never expire.
    ///
    /// For IAM tokens this is earlier than the expiration reported by IAM, so
    /// the token is refreshed before the service rejects it.
    pub expires_at: Option<Instant>,
}

impl Token {
    pub(crate) fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|t| t <= Instant::now())
    }
}

// Tokens must never appear in logs.
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Token")
            .field("token", &"[censored]")
            .field("token_type", &self.token_type)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Fetches new access tokens, for example from the IAM token service.
#[async_trait::async_trait]
pub(crate) trait TokenProvider: std::fmt::Debug + Send + Sync {
    async fn token(&self) -> Result<Token>;
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::time::Duration;

    mockall::mock! {
        #[derive(Debug)]
        pub TokenProvider { }

        #[async_trait::async_trait]
        impl TokenProvider for TokenProvider {
            async fn token(&self) -> Result<Token>;
        }
    }

    fn iam_token(expires_at: Option<Instant>) -> Token {
        Token {
            token: "eyJraWQiOiIyMDI1MDEwMSJ9.payload.sig".into(),
            token_type: "Bearer".into(),
            expires_at,
        }
    }

    #[test]
    fn debug_hides_token() {
        let got = format!("{:?}", iam_token(None));
        assert!(!got.contains("eyJ"), "{got}");
        assert!(got.contains("[censored]"), "{got}");
        assert!(got.contains("Bearer"), "{got}");
    }

    #[tokio::test(start_paused = true)]
    async fn expiration() {
        assert!(!iam_token(None).is_expired());

        let token = iam_token(Some(Instant::now() + Duration::from_secs(60)));
        assert!(!token.is_expired(), "{token:?}");
        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(!token.is_expired(), "{token:?}");
        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(token.is_expired(), "{token:?}");
    }
}

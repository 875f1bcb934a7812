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
use crate::token::{Token, TokenProvider};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shares the tokens from a [TokenProvider] across requests.
///
/// The cache refreshes the token once it expires, or if the last refresh
/// failed. Only one refresh runs at a time, the tasks waiting for it receive
/// its result, including any error.
#[derive(Debug)]
pub(crate) struct TokenCache<T> {
    state: Arc<Mutex<Cached>>,
    refreshing: Arc<Mutex<()>>,
    provider: Arc<T>,
}

#[derive(Clone, Debug)]
struct Cached {
    // Incremented by each refresh.
    generation: u64,
    value: Result<Token>,
}

impl Cached {
    fn usable(&self) -> bool {
        self.value.as_ref().is_ok_and(|t| !t.is_expired())
    }
}

impl<T> Clone for TokenCache<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            refreshing: self.refreshing.clone(),
            provider: self.provider.clone(),
        }
    }
}

impl<T: TokenProvider> TokenCache<T> {
    pub fn new(provider: T) -> Self {
        let empty = Cached {
            generation: 0,
            value: Err(errors::non_retryable_from_str("the token cache is empty")),
        };
        Self {
            state: Arc::new(Mutex::new(empty)),
            refreshing: Arc::new(Mutex::new(())),
            provider: Arc::new(provider),
        }
    }

    async fn snapshot(&self) -> Cached {
        self.state.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl<T: TokenProvider + 'static> TokenProvider for TokenCache<T> {
    async fn token(&self) -> Result<Token> {
        let seen = self.snapshot().await;
        if seen.usable() {
            return seen.value;
        }

        let _refreshing = self.refreshing.lock().await;
        let latest = self.snapshot().await;
        if latest.generation != seen.generation {
            // Refreshed by another task while this one waited.
            return latest.value;
        }

        tracing::debug!(generation = seen.generation, "refreshing the access token");
        let value = self.provider.token().await;
        *self.state.lock().await = Cached {
            generation: seen.generation + 1,
            value: value.clone(),
        };
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tests::MockTokenProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::time::Instant;

    const LIFETIME: Duration = Duration::from_secs(3600);

    fn token(value: &str, lifetime: Option<Duration>) -> Token {
        Token {
            token: value.to_string(),
            token_type: "Bearer".to_string(),
            expires_at: lifetime.map(|d| Instant::now() + d),
        }
    }

    #[tokio::test]
    async fn reuses_token() -> anyhow::Result<()> {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(1)
            .returning(|| Ok(token("t1", None)));

        let cache = TokenCache::new(mock);
        for _ in 0..3 {
            assert_eq!(cache.token().await?.token, "t1");
        }
        Ok(())
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let mut mock = MockTokenProvider::new();
        mock.expect_token()
            .times(2)
            .returning(|| Err(errors::non_retryable_from_str("invalid api key")));

        let cache = TokenCache::new(mock);
        for _ in 0..2 {
            let err = cache.token().await.unwrap_err();
            assert!(err.to_string().contains("invalid api key"), "{err}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn refresh_after_expiration() -> anyhow::Result<()> {
        let mut mock = MockTokenProvider::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(token("t1", Some(LIFETIME))));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(token("t2", Some(LIFETIME))));
        mock.expect_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(errors::CredentialsError::from_msg(true, "iam unavailable")));

        let cache = TokenCache::new(mock);
        assert_eq!(cache.token().await?.token, "t1");
        tokio::time::advance(LIFETIME / 2).await;
        assert_eq!(cache.token().await?.token, "t1");

        tokio::time::advance(LIFETIME / 2).await;
        assert_eq!(cache.token().await?.token, "t2");

        // An expired token is never returned, even if the refresh fails.
        tokio::time::advance(LIFETIME).await;
        let err = cache.token().await.unwrap_err();
        assert!(err.is_transient(), "{err:?}");
        Ok(())
    }

    #[derive(Debug)]
    struct Slow {
        result: Result<Token>,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl TokenProvider for Slow {
        async fn token(&self) -> Result<Token> {
            // Long enough for the concurrent callers to queue up.
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result.clone()
        }
    }

    async fn concurrent_callers(result: Result<Token>) -> (Vec<Result<Token>>, usize) {
        let provider = Slow {
            result,
            calls: AtomicUsize::new(0),
        };
        let cache = TokenCache::new(provider);
        let tasks: Vec<_> = (0..64)
            .map(|_| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.token().await })
            })
            .collect();
        let mut results = Vec::new();
        for task in tasks {
            results.push(task.await.expect("task panicked"));
        }
        (results, cache.provider.calls.load(Ordering::SeqCst))
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_refresh_success() {
        let (results, calls) = concurrent_callers(Ok(token("shared", Some(LIFETIME)))).await;
        for r in results {
            assert_eq!(r.map(|t| t.token).ok().as_deref(), Some("shared"));
        }
        assert_eq!(calls, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_refresh_error() {
        let failed = Err(errors::non_retryable_from_str("api key revoked"));
        let (results, calls) = concurrent_callers(failed).await;
        for r in results {
            let err = r.unwrap_err();
            assert!(err.to_string().contains("api key revoked"), "{err}");
        }
        // Callers arriving after a failed refresh start a new one.
        assert!(calls < 64, "{calls}");
    }
}

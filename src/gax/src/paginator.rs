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

//! List operations in IBM Cloud return one page of results at a time, and a
//! `next` link holding the `start` token for the following page. The types in
//! this module turn those operations into a [futures::Stream] of pages, or of
//! the individual items in each page.
//!
//! # Example
//! ```no_run
//! # use ibm_cloud_gax::paginator::{Paginator, internal::PageableResponse};
//! # async fn sample<T, E>(mut pages: Paginator<T, E>) -> Result<(), E>
//! # where T: PageableResponse + Send + 'static, E: Send + 'static {
//! while let Some(page) = pages.next().await {
//!     let page = page?;
//!     // use the page
//! }
//! # Ok(()) }
//! ```

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.

    /// Describes a type that can be iterated over asyncly when used with
    /// [super::Paginator].
    pub trait PageableResponse {
        type PageItem: Send;

        /// Consumes the page, returning the items it contains.
        fn items(self) -> Vec<Self::PageItem>;

        /// The token to request the next page, empty when there are no more
        /// pages.
        fn next_page_token(&self) -> String;
    }
}

use internal::PageableResponse;

/// An adapter that converts list operations into a [futures::Stream] of pages
/// that can be iterated over in an async fashion.
#[pin_project]
pub struct Paginator<T, E> {
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T, E>> + Send>>,
}

type ControlFlow = std::ops::ControlFlow<(), String>;

impl<T, E> Paginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    /// Creates a new [Paginator] given the initial page token and a function
    /// to fetch the next [PageableResponse].
    ///
    /// An empty seed token requests the first page.
    pub fn new<F, X>(seed_token: String, execute: X) -> Self
    where
        X: Fn(String) -> F + Clone + Send + 'static,
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        let stream = unfold(ControlFlow::Continue(seed_token), move |state| {
            let execute = execute.clone();
            async move {
                let token = match state {
                    ControlFlow::Continue(token) => token,
                    ControlFlow::Break(_) => return None,
                };
                match execute(token).await {
                    Ok(page_resp) => {
                        let tok = page_resp.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page_resp), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page, or `None` once all the pages are consumed.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a stream of pages.
    pub fn into_stream(self) -> impl Stream<Item = Result<T, E>> + Send {
        self.stream
    }

    /// Flattens the pages into a stream of items.
    pub fn items(self) -> ItemPaginator<T, E> {
        ItemPaginator::new(self)
    }
}

impl<T, E> Stream for Paginator<T, E> {
    type Item = Result<T, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// An adapter that converts a [Paginator] into a stream of individual items.
#[pin_project]
pub struct ItemPaginator<T, E>
where
    T: PageableResponse,
{
    #[pin]
    stream: Pin<Box<dyn Stream<Item = Result<T::PageItem, E>> + Send>>,
}

impl<T, E> ItemPaginator<T, E>
where
    T: PageableResponse + Send + 'static,
    E: Send + 'static,
{
    fn new(pages: Paginator<T, E>) -> Self {
        let stream = pages.stream.flat_map(|page| {
            let items: Vec<Result<T::PageItem, E>> = match page {
                Ok(p) => p.items().into_iter().map(Ok).collect(),
                Err(e) => vec![Err(e)],
            };
            futures::stream::iter(items)
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next item, or `None` once all the pages are consumed.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the paginator into a stream of items.
    pub fn into_stream(self) -> impl Stream<Item = Result<T::PageItem, E>> + Send {
        self.stream
    }
}

impl<T, E> Stream for ItemPaginator<T, E>
where
    T: PageableResponse,
{
    type Item = Result<T::PageItem, E>;

    fn poll_next(
        self: Pin<&mut Self>,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Option<Self::Item>> {
        self.project().stream.poll_next(cx)
    }
}

/// Extracts the `start` query parameter from a `next` link.
///
/// IBM Cloud list operations return the link to the next page as a URL. The
/// client libraries only need the `start` token in that URL.
///
/// # Example
/// ```
/// # use ibm_cloud_gax::paginator::start_token_from_href;
/// let href = "https://api.example.com/v2/projects?limit=10&start=abc123";
/// assert_eq!(start_token_from_href(href).as_deref(), Some("abc123"));
/// ```
pub fn start_token_from_href(href: &str) -> Option<String> {
    let (_, query) = href.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query.split('&').find_map(|pair| {
        let (k, v) = pair.split_once('=')?;
        if k != "start" {
            return None;
        }
        percent_encoding::percent_decode_str(v)
            .decode_utf8()
            .ok()
            .map(|s| s.into_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use test_case::test_case;

    type TestError = Box<dyn std::error::Error + Send + Sync>;

    struct TestResponse {
        items: Vec<PageItem>,
        next_page_token: String,
    }

    #[derive(Clone, Debug, PartialEq)]
    struct PageItem {
        name: String,
    }

    fn item(name: &str) -> PageItem {
        PageItem {
            name: name.to_string(),
        }
    }

    impl PageableResponse for TestResponse {
        type PageItem = PageItem;
        fn items(self) -> Vec<PageItem> {
            self.items
        }
        fn next_page_token(&self) -> String {
            self.next_page_token.clone()
        }
    }

    fn two_pages() -> Paginator<TestResponse, TestError> {
        let responses = VecDeque::from([
            TestResponse {
                items: vec![item("item1"), item("item2")],
                next_page_token: "token2".to_string(),
            },
            TestResponse {
                items: vec![item("item3")],
                next_page_token: "".to_string(),
            },
        ]);
        let expected_tokens = VecDeque::from(["token1".to_string(), "token2".to_string()]);
        let state = Arc::new(Mutex::new(responses));
        let tokens = Arc::new(Mutex::new(expected_tokens));

        let execute = move |token: String| {
            let expected_token = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, expected_token);
            let resp = state.lock().unwrap().pop_front().unwrap();
            async move { Ok(resp) }
        };
        Paginator::new("token1".to_string(), execute)
    }

    #[tokio::test]
    async fn pages() {
        let mut resps = vec![];
        let mut stream = two_pages();
        while let Some(resp) = stream.next().await {
            resps.push(resp.unwrap());
        }
        assert_eq!(resps.len(), 2);
        assert_eq!(resps[0].items, vec![item("item1"), item("item2")]);
        assert_eq!(resps[1].items, vec![item("item3")]);
    }

    #[tokio::test]
    async fn items() {
        let mut items = two_pages().items();
        let mut got = vec![];
        while let Some(i) = items.next().await {
            got.push(i.unwrap().name);
        }
        assert_eq!(got, vec!["item1", "item2", "item3"]);
    }

    #[tokio::test]
    async fn into_stream() {
        let got: Vec<_> = two_pages()
            .items()
            .into_stream()
            .map(|r| r.map(|i| i.name))
            .collect()
            .await;
        let got: Vec<String> = got.into_iter().map(|r| r.unwrap()).collect();
        assert_eq!(got, vec!["item1", "item2", "item3"]);

        let pages: Vec<_> = two_pages().into_stream().collect().await;
        assert_eq!(pages.len(), 2);
    }

    #[tokio::test]
    async fn empty_list() {
        let execute = |_| async {
            Ok::<_, TestError>(TestResponse {
                items: vec![],
                next_page_token: String::new(),
            })
        };
        let mut items = Paginator::new(String::new(), execute).items();
        assert!(items.next().await.is_none());
    }

    #[tokio::test]
    async fn error() {
        let execute = |_| async { Err::<TestResponse, TestError>("err".into()) };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(resp) = paginator.next().await {
            match resp {
                Ok(_) => panic!("Should not succeed"),
                Err(e) => {
                    assert_eq!(e.to_string(), "err");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn error_after_page() {
        let calls = Arc::new(Mutex::new(0));
        let execute = move |_| {
            let calls = calls.clone();
            async move {
                let mut n = calls.lock().unwrap();
                *n += 1;
                if *n == 1 {
                    return Ok(TestResponse {
                        items: vec![item("item1")],
                        next_page_token: "next".to_string(),
                    });
                }
                Err::<TestResponse, TestError>("err".into())
            }
        };
        let mut items = Paginator::new(String::new(), execute).items();
        assert_eq!(items.next().await.map(|r| r.unwrap()), Some(item("item1")));
        assert!(matches!(items.next().await, Some(Err(_))));
        assert!(items.next().await.is_none());
    }

    #[test_case("https://host/v2/projects?start=abc", Some("abc"))]
    #[test_case("https://host/v2/projects?limit=10&start=abc&x=y", Some("abc"))]
    #[test_case("https://host/v2/projects?limit=10", None)]
    #[test_case("https://host/v2/projects", None)]
    #[test_case("https://host/v2/projects?start=a%2Fb%3D", Some("a/b="))]
    fn start_token(href: &str, want: Option<&str>) {
        assert_eq!(start_token_from_href(href).as_deref(), want);
    }
}

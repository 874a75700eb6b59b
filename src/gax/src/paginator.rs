// Copyright 2025 Google LLC
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

//! Streams over paginated list operations.
//!
//! List operations return one page at a time. The service returns the token
//! for the next page in the `opc-next-page` header, and the client sends it
//! back in the `page` query parameter. An empty token marks the last page.

use futures::stream::unfold;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::future::Future;
use std::pin::Pin;

/// Describes a page that can be iterated over asyncly when used with
/// [Paginator].
pub trait PageableResponse {
    type PageItem: Send;

    /// Consumes the page returning its items.
    fn items(self) -> Vec<Self::PageItem>;

    /// The token for the next page, empty on the last page.
    fn next_page_token(&self) -> String;
}

/// An adapter that converts a list operation into a [futures::Stream] of
/// pages.
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
    /// to fetch each page.
    ///
    /// The initial token is usually empty, requesting the first page.
    pub fn new<F>(
        seed_token: String,
        execute: impl Fn(String) -> F + Clone + Send + 'static,
    ) -> Self
    where
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
                    Ok(page) => {
                        let tok = page.next_page_token();
                        let next_state = if tok.is_empty() {
                            ControlFlow::Break(())
                        } else {
                            ControlFlow::Continue(tok)
                        };
                        Some((Ok(page), next_state))
                    }
                    Err(e) => Some((Err(e), ControlFlow::Break(()))),
                }
            }
        });
        Self {
            stream: Box::pin(stream),
        }
    }

    /// Returns the next page.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
    }

    /// Converts the stream of pages into a stream of items.
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

/// A stream over the items of all the pages returned by a list operation.
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
        let stream = pages.flat_map(|page| {
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

    /// Returns the next item.
    pub fn next(&mut self) -> futures::stream::Next<'_, Self> {
        StreamExt::next(self)
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    type TestError = Box<dyn std::error::Error + Send + Sync>;

    #[derive(Debug)]
    struct TestPage {
        items: Vec<String>,
        next_page: String,
    }

    impl PageableResponse for TestPage {
        type PageItem = String;

        fn items(self) -> Vec<String> {
            self.items
        }

        fn next_page_token(&self) -> String {
            self.next_page.clone()
        }
    }

    fn page(items: &[&str], next: &str) -> TestPage {
        TestPage {
            items: items.iter().map(|s| s.to_string()).collect(),
            next_page: next.to_string(),
        }
    }

    fn paginator(pages: Vec<TestPage>, want_tokens: Vec<&str>) -> Paginator<TestPage, TestError> {
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let tokens = Arc::new(Mutex::new(
            want_tokens
                .into_iter()
                .map(str::to_string)
                .collect::<VecDeque<_>>(),
        ));
        let execute = move |token: String| {
            let want = tokens.lock().unwrap().pop_front().unwrap();
            assert_eq!(token, want);
            let page = pages.lock().unwrap().pop_front().unwrap();
            async move { Ok::<_, TestError>(page) }
        };
        Paginator::new(String::new(), execute)
    }

    #[tokio::test]
    async fn pages() {
        let mut stream = paginator(
            vec![page(&["item1", "item2"], "token2"), page(&["item3"], "")],
            vec!["", "token2"],
        );
        let mut got = Vec::new();
        while let Some(p) = stream.next().await {
            got.push(p.unwrap());
        }
        assert_eq!(got.len(), 2);
        assert_eq!(got[0].items, vec!["item1", "item2"]);
        assert_eq!(got[1].items, vec!["item3"]);
    }

    #[tokio::test]
    async fn items() {
        let mut stream = paginator(
            vec![
                page(&["item1", "item2"], "token2"),
                page(&[], "token3"),
                page(&["item3"], ""),
            ],
            vec!["", "token2", "token3"],
        )
        .items();
        let mut got = Vec::new();
        while let Some(item) = stream.next().await {
            got.push(item.unwrap());
        }
        assert_eq!(got, vec!["item1", "item2", "item3"]);
    }

    #[tokio::test]
    async fn error_stops_stream() {
        let execute = |_| async { Err::<TestPage, TestError>("err".into()) };

        let mut paginator = Paginator::new(String::new(), execute);
        let mut count = 0;
        while let Some(resp) = paginator.next().await {
            match resp {
                Ok(_) => panic!("should not succeed"),
                Err(e) => {
                    assert_eq!(e.to_string(), "err");
                    count += 1;
                }
            }
        }
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn error_in_items() {
        let execute = |_| async { Err::<TestPage, TestError>("err".into()) };
        let mut items = Paginator::new(String::new(), execute).items();
        let first = items.next().await;
        assert!(matches!(first, Some(Err(_))), "{first:?}");
        assert!(items.next().await.is_none());
    }

    #[test]
    fn is_send() {
        static_assertions::assert_impl_all!(Paginator<TestPage, TestError>: Send);
        static_assertions::assert_impl_all!(ItemPaginator<TestPage, TestError>: Send);
    }
}

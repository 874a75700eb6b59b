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

//! Response types.
//!
//! This module contains the `Response` type returned by every client
//! operation. It carries the HTTP status code, the response headers, and the
//! typed body.
//!
//! # Examples
//!
//! Inspecting the result of a request
//!
//! ```no_run
//! # use log_analytics_gax::Result;
//! # use log_analytics_gax::response::Response;
//! // A type representing a service resource, for example, a log group.
//! struct LogGroup {
//!   // ...
//! }
//!
//! async fn get_log_group(id: &str) -> Result<Response<LogGroup>> {
//!   // ...
//! # panic!()
//! }
//!
//! # tokio_test::block_on(async {
//! let response = get_log_group("ocid1.loganalyticsloggroup.oc1..abc").await?;
//! if let Some(etag) = response.headers().get("etag") {
//!     // keep the etag for a later update
//! }
//! let group = response.body();
//! # Result::<()>::Ok(()) });
//! ```
//!
//! Creating a response for mocks
//!
//! ```
//! # use log_analytics_gax::Result;
//! # use log_analytics_gax::response::Response;
//! struct LogGroup {
//!   // ...
//! }
//!
//! fn make_mock_response(body: LogGroup) -> Result<Response<LogGroup>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// Represents a service response.
///
/// A response consists of a body (potentially the unit type), and some
/// metadata: the HTTP status code and the headers.
///
/// Typically you get a response as the result of making a request via the
/// client. You may also create responses directly when mocking the client in
/// your own tests.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body.
    ///
    /// The status code is `200 OK` and the headers are empty.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.status(), http::StatusCode::OK);
    /// ```
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::response::Response;
    /// # use log_analytics_gax::response::Parts;
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("opc-request-id", http::HeaderValue::from_static("abc123"));
    /// let response = Response::from_parts(
    ///     Parts::new().set_status(http::StatusCode::ACCEPTED).set_headers(headers), ());
    /// assert_eq!(response.status(), http::StatusCode::ACCEPTED);
    /// assert!(response.headers().get("opc-request-id").is_some());
    /// ```
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the HTTP status code of this response.
    pub fn status(&self) -> http::StatusCode {
        self.parts.status
    }

    /// Returns the headers associated with this response.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::response::Response;
    /// let response = Response::from(());
    /// assert!(response.headers().is_empty());
    /// ```
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the `opc-request-id` header, if present.
    ///
    /// Include this value when contacting support about a specific request.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.header_str("opc-request-id")
    }

    /// Returns the `opc-work-request-id` header, if present.
    ///
    /// Asynchronous operations return the id of the work request tracking
    /// their progress in this header.
    pub fn opc_work_request_id(&self) -> Option<&str> {
        self.header_str("opc-work-request-id")
    }

    /// Returns the `etag` header, if present.
    pub fn etag(&self) -> Option<&str> {
        self.header_str("etag")
    }

    fn header_str(&self, name: &str) -> Option<&str> {
        self.parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
    }

    /// Returns the body associated with this response.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// assert_eq!(response.body().as_str(), "test");
    /// ```
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Consumes the response returning the metadata, and body.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::response::Response;
    /// let response = Response::from("test".to_string());
    /// let (parts, body) = response.into_parts();
    /// assert_eq!(body.as_str(), "test");
    /// assert!(parts.headers.is_empty());
    /// ```
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Consumes the response returning only its body.
    pub fn into_body(self) -> T {
        self.body
    }

    /// Transforms the body, keeping the status and headers.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::response::Response;
    /// let response = Response::from("42".to_string());
    /// let response = response.map(|s| s.len());
    /// assert_eq!(response.body(), &2);
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            parts: self.parts,
            body: f(self.body),
        }
    }
}

/// Component parts of a response.
///
/// # Example
/// ```
/// # use log_analytics_gax::response::Parts;
/// let mut headers = http::HeaderMap::new();
/// headers.insert(http::header::CONTENT_TYPE, http::HeaderValue::from_static("application/json"));
/// let parts = Parts::new().set_headers(headers);
///
/// assert_eq!(
///     parts.headers.get(http::header::CONTENT_TYPE),
///     Some(&http::HeaderValue::from_static("application/json"))
/// );
/// ```
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP status code.
    pub status: http::StatusCode,
    /// The HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the status code.
    pub fn set_status(mut self, v: http::StatusCode) -> Self {
        self.status = v;
        self
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from() {
        let response = Response::from("abc123".to_string());
        assert_eq!(response.status(), http::StatusCode::OK);
        assert!(response.headers().is_empty());
        assert_eq!(response.body().as_str(), "abc123");
        assert_eq!(response.into_body().as_str(), "abc123");
    }

    #[test]
    fn parts() {
        let parts = Parts::new()
            .set_status(http::StatusCode::NO_CONTENT)
            .set_headers(headers());
        let response = Response::from_parts(parts, ());
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(response.headers(), &headers());

        let (parts, body) = response.into_parts();
        assert_eq!(parts.status, http::StatusCode::NO_CONTENT);
        assert_eq!(parts.headers, headers());
        assert_eq!(body, ());
    }

    #[test]
    fn well_known_headers() {
        let response = Response::from_parts(Parts::new().set_headers(headers()), ());
        assert_eq!(response.opc_request_id(), Some("req-123"));
        assert_eq!(response.opc_work_request_id(), Some("wr-456"));
        assert_eq!(response.etag(), Some("etag-789"));

        let response = Response::from(());
        assert_eq!(response.opc_request_id(), None);
        assert_eq!(response.opc_work_request_id(), None);
        assert_eq!(response.etag(), None);
    }

    #[test]
    fn map() {
        let response = Response::from_parts(
            Parts::new()
                .set_status(http::StatusCode::CREATED)
                .set_headers(headers()),
            "abc".to_string(),
        );
        let response = response.map(|s| s.len());
        assert_eq!(response.status(), http::StatusCode::CREATED);
        assert_eq!(response.opc_request_id(), Some("req-123"));
        assert_eq!(response.body(), &3);
    }

    fn headers() -> http::HeaderMap {
        http::HeaderMap::from_iter([
            (
                http::HeaderName::from_static("opc-request-id"),
                http::HeaderValue::from_static("req-123"),
            ),
            (
                http::HeaderName::from_static("opc-work-request-id"),
                http::HeaderValue::from_static("wr-456"),
            ),
            (
                http::HeaderName::from_static("etag"),
                http::HeaderValue::from_static("etag-789"),
            ),
        ])
    }
}

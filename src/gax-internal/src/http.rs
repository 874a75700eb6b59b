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

use crate::host::ServiceEndpoint;
use auth::credentials::CacheableResource;
use auth::credentials::Credentials;
use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceError};
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use http::Extensions;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";
pub const OPC_REQUEST_ID: &str = "opc-request-id";
pub const OPC_NEXT_PAGE: &str = "opc-next-page";
pub const IF_MATCH: &str = "if-match";

lazy_static::lazy_static! {
    static ref DEFAULT_USER_AGENT: String =
        format!("log-analytics-rust/{}", env!("CARGO_PKG_VERSION"));
}

/// The payload of a streaming response.
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    cred: Credentials,
    endpoint: String,
    region: Option<String>,
    service: ServiceEndpoint,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl ReqwestClient {
    pub async fn new(
        config: crate::options::ClientConfig,
        service: ServiceEndpoint,
    ) -> gax::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config).await?;
        let (endpoint, region) = crate::host::resolve(&config, &service, cred.region())?;
        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = config.proxy.as_deref() {
            let proxy = reqwest::Proxy::all(proxy).map_err(BuilderError::transport)?;
            builder = builder.proxy(proxy);
        }
        let inner = builder.build().map_err(BuilderError::transport)?;
        tracing::debug!(%endpoint, ?region, "created client");
        Ok(Self {
            inner,
            cred,
            endpoint,
            region,
            service,
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
        })
    }

    /// The base URL for all requests, including the API version.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// Points the client at the regional endpoint for `region`.
    pub fn set_region(&mut self, region: &str) -> gax::client_builder::Result<()> {
        self.endpoint = self.service.for_region(region)?;
        self.region = Some(region.trim().to_string());
        tracing::debug!(endpoint = %self.endpoint, "changed region");
        Ok(())
    }

    pub fn builder(&self, method: reqwest::Method, path: String) -> reqwest::RequestBuilder {
        self.inner
            .request(method, format!("{}{path}", &self.endpoint))
    }

    /// Sends a request and deserializes the JSON response.
    ///
    /// Empty responses, including `204 No Content`, produce `O::default()`.
    pub async fn execute<I: serde::ser::Serialize, O: serde::de::DeserializeOwned + Default>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<O>> {
        let builder = with_body(builder, body);
        let response = self.run(builder, options).await?;
        to_http_response(response).await
    }

    /// Sends a request where the response payload is not used.
    pub async fn execute_unit<I: serde::ser::Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<()>> {
        let builder = with_body(builder, body);
        let response = self.run(builder, options).await?;
        let parts = to_parts(&response);
        let _ = http_body_util::BodyExt::collect(http::Response::from(response).into_body())
            .await
            .map_err(Error::io)?;
        Ok(Response::from_parts(parts, ()))
    }

    /// Sends a request and returns the response payload as a stream of bytes.
    ///
    /// Only the status line and headers are covered by the retry policy. Errors
    /// reading the payload are returned by the stream.
    pub async fn execute_streaming<I: serde::ser::Serialize>(
        &self,
        builder: reqwest::RequestBuilder,
        body: Option<I>,
        options: RequestOptions,
    ) -> Result<Response<ByteStream>> {
        let builder = with_body(builder, body);
        let response = self.run(builder, options).await?;
        let parts = to_parts(&response);
        let stream: ByteStream = Box::pin(response.bytes_stream().map_err(Error::io));
        Ok(Response::from_parts(parts, stream))
    }

    async fn make_credentials(
        config: &crate::options::ClientConfig,
    ) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    async fn run(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: RequestOptions,
    ) -> Result<reqwest::Response> {
        let user_agent = options
            .user_agent()
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT.as_str());
        builder = builder.header(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_str(user_agent).map_err(Error::ser)?,
        );
        match options.retry_policy().resolve(self.retry_policy.as_ref()) {
            None => self.request_attempt(builder, &options, None).await,
            Some(policy) => self.retry_loop(builder, options, policy).await,
        }
    }

    async fn retry_loop(
        &self,
        builder: reqwest::RequestBuilder,
        options: RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<reqwest::Response> {
        let idempotent = options.idempotent().unwrap_or(false);
        let backoff = self.get_backoff_policy(&options);
        let this = self.clone();
        let inner = async move |d| {
            let builder = builder
                .try_clone()
                .expect("client libraries only create builders where `try_clone()` succeeds");
            this.request_attempt(builder, &options, d).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        let on_retry = |attempt: u32, error: &Error, delay: Duration| {
            tracing::debug!(attempt, ?delay, %error, "retrying request");
        };
        gax::retry_loop_internal::retry_loop_with_callback(
            inner,
            sleep,
            idempotent,
            retry_policy,
            backoff,
            on_retry,
        )
        .await
    }

    async fn request_attempt(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<reqwest::Response> {
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let cached_auth_headers = self
            .cred
            .headers(Extensions::new())
            .await
            .map_err(Error::authentication)?;
        let auth_headers = match cached_auth_headers {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => {
                unreachable!("headers are not cached");
            }
        };
        for (key, value) in auth_headers.iter() {
            builder = builder.header(key, value);
        }
        let request = builder.build().map_err(Error::ser)?;
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        Ok(response)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }

    pub(crate) fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| self.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

#[derive(serde::Serialize)]
pub struct NoBody;

/// A new value for the `opc-retry-token` header.
pub fn new_retry_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Returns a header value as a string, if present and valid.
pub fn header_string(headers: &http::HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn with_body<I: serde::ser::Serialize>(
    builder: reqwest::RequestBuilder,
    body: Option<I>,
) -> reqwest::RequestBuilder {
    match body {
        Some(body) => builder.json(&body),
        None => builder,
    }
}

fn to_parts(response: &reqwest::Response) -> Parts {
    Parts::new()
        .set_status(response.status())
        .set_headers(response.headers().clone())
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let error = match ServiceError::try_from(&body) {
        Ok(status) if !status.code.is_empty() => {
            Error::service_with_http_metadata(status, Some(status_code), Some(parts.headers))
        }
        _ => Error::http(status_code, parts.headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
) -> Result<Response<O>> {
    let status = response.status();
    let response = http::Response::from(response);
    let (parts, body) = response.into_parts();

    let body = http_body_util::BodyExt::collect(body)
        .await
        .map_err(Error::io)?
        .to_bytes();

    let response = if body.is_empty() || status == reqwest::StatusCode::NO_CONTENT {
        O::default()
    } else {
        serde_json::from_slice::<O>(&body).map_err(Error::deser)?
    };

    Ok(Response::from_parts(
        Parts::new().set_status(status).set_headers(parts.headers),
        response,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::ClientConfig;
    use futures::StreamExt;
    use gax::retry_policy::{AlwaysRetry, RetryPolicyExt};
    use httptest::{Expectation, Server, cycle, matchers::*, responders::*};
    use pretty_assertions::assert_eq;
    use test_case::test_case;
    type TestResult = anyhow::Result<()>;

    const SERVICE: ServiceEndpoint = ServiceEndpoint {
        template: "https://loganalytics.{region}.oci.oraclecloud.com",
        api_version: "/20200601",
    };

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Thing {
        display_name: String,
        count: i32,
    }

    fn test_config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(server.url_str(""));
        config.cred = Some(auth::credentials::anonymous::Builder::new().build());
        config
    }

    fn fast_backoff() -> anyhow::Result<Arc<dyn BackoffPolicy>> {
        let backoff = gax::exponential_backoff::ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(2))
            .build()?;
        Ok(Arc::new(backoff))
    }

    #[tokio::test]
    async fn execute_json() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/things"),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains(key("user-agent"))),
                request::body(json_decoded(eq(serde_json::json!({"displayName": "a", "count": 1})))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("opc-request-id", "req-123")
                    .body(r#"{"displayName": "b", "count": 2}"#),
            ),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::POST, "/things".into());
        let body = Thing {
            display_name: "a".into(),
            count: 1,
        };
        let response: Response<Thing> = client
            .execute(builder, Some(body), RequestOptions::default())
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.opc_request_id(), Some("req-123"));
        assert_eq!(
            response.into_body(),
            Thing {
                display_name: "b".into(),
                count: 2
            }
        );
        Ok(())
    }

    #[tokio::test]
    async fn user_agent_override() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/things"),
                request::headers(contains(("user-agent", "my-app/1.0"))),
            ])
            .respond_with(status_code(200).body("{}")),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::GET, "/things".into());
        let mut options = RequestOptions::default();
        options.set_user_agent("my-app/1.0");
        let _: Response<Thing> = client.execute(builder, None::<NoBody>, options).await?;
        Ok(())
    }

    #[test_case(200, ""; "200 empty")]
    #[test_case(204, ""; "204 empty")]
    #[test_case(204, "{}"; "204 with object")]
    #[tokio::test]
    async fn execute_empty_content(code: u16, content: &'static str) -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("DELETE", "/20200601/things/a"))
                .respond_with(status_code(code).body(content)),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::DELETE, "/things/a".into());
        let response: Response<Thing> = client
            .execute(builder, None::<NoBody>, RequestOptions::default())
            .await?;
        assert_eq!(response.status().as_u16(), code);
        assert_eq!(response.into_body(), Thing::default());
        Ok(())
    }

    #[tokio::test]
    async fn execute_unit() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/20200601/things/actions/clean"))
                .respond_with(
                    status_code(202)
                        .insert_header("opc-work-request-id", "wr-1")
                        .body("ignored"),
                ),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::POST, "/things/actions/clean".into());
        let response = client
            .execute_unit(builder, None::<NoBody>, RequestOptions::default())
            .await?;
        assert_eq!(response.status(), http::StatusCode::ACCEPTED);
        assert_eq!(response.opc_work_request_id(), Some("wr-1"));
        Ok(())
    }

    #[tokio::test]
    async fn execute_streaming() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/20200601/search/actions/export"))
                .respond_with(status_code(200).body("a,b\n1,2\n")),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::POST, "/search/actions/export".into());
        let response = client
            .execute_streaming(builder, Some(serde_json::json!({})), RequestOptions::default())
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        let mut stream = response.into_body();
        let mut contents = Vec::new();
        while let Some(chunk) = stream.next().await {
            contents.extend_from_slice(&chunk?);
        }
        assert_eq!(contents, b"a,b\n1,2\n");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20200601/things/missing"))
                .respond_with(
                    status_code(404)
                        .insert_header("content-type", "application/json")
                        .insert_header("opc-request-id", "req-404")
                        .body(r#"{"code": "NotAuthorizedOrNotFound", "message": "not there"}"#),
                ),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::GET, "/things/missing".into());
        let err = client
            .execute::<NoBody, Thing>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.opc_request_id(), Some("req-404"));
        let status = err.status().cloned();
        assert_eq!(
            status,
            Some(
                ServiceError::default()
                    .set_code("NotAuthorizedOrNotFound")
                    .set_message("not there")
            )
        );
        Ok(())
    }

    #[tokio::test]
    async fn http_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20200601/things"))
                .respond_with(status_code(502).body("<html>Bad Gateway</html>")),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::GET, "/things".into());
        let err = client
            .execute::<NoBody, Thing>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(502));
        assert!(err.status().is_none(), "{err:?}");
        assert_eq!(
            err.http_payload(),
            Some(&Bytes::from_static(b"<html>Bad Gateway</html>"))
        );
        Ok(())
    }

    #[tokio::test]
    async fn deserialization_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20200601/things"))
                .respond_with(status_code(200).body("not json")),
        );
        let client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        let builder = client.builder(reqwest::Method::GET, "/things".into());
        let err = client
            .execute::<NoBody, Thing>(builder, None, RequestOptions::default())
            .await
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn retry_client_policy() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20200601/things"))
                .times(3)
                .respond_with(cycle![
                    status_code(503),
                    status_code(503),
                    status_code(200).body(r#"{"count": 3}"#),
                ]),
        );
        let mut config = test_config(&server);
        config.retry_policy = Some(Arc::new(AlwaysRetry.with_attempt_limit(5)));
        config.backoff_policy = Some(fast_backoff()?);
        let client = ReqwestClient::new(config, SERVICE).await?;
        let builder = client.builder(reqwest::Method::GET, "/things".into());
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        let response: Response<Thing> = client.execute(builder, None::<NoBody>, options).await?;
        assert_eq!(response.body().count, 3);
        Ok(())
    }

    #[tokio::test]
    async fn retry_disabled_per_request() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20200601/things"))
                .times(1)
                .respond_with(status_code(503)),
        );
        let mut config = test_config(&server);
        config.retry_policy = Some(Arc::new(AlwaysRetry.with_attempt_limit(5)));
        config.backoff_policy = Some(fast_backoff()?);
        let client = ReqwestClient::new(config, SERVICE).await?;
        let builder = client.builder(reqwest::Method::GET, "/things".into());
        let mut options = RequestOptions::default();
        options.disable_retries();
        let err = client
            .execute::<NoBody, Thing>(builder, None, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn retry_request_policy() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20200601/things"))
                .times(2)
                .respond_with(status_code(503)),
        );
        let mut config = test_config(&server);
        config.backoff_policy = Some(fast_backoff()?);
        let client = ReqwestClient::new(config, SERVICE).await?;
        let builder = client.builder(reqwest::Method::GET, "/things".into());
        let mut options = RequestOptions::default();
        options.set_idempotency(true);
        options.set_retry_policy(AlwaysRetry.with_attempt_limit(2));
        let err = client
            .execute::<NoBody, Thing>(builder, None, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        Ok(())
    }

    #[tokio::test]
    async fn set_region() -> TestResult {
        let server = Server::run();
        let mut client = ReqwestClient::new(test_config(&server), SERVICE).await?;
        assert!(client.endpoint().starts_with("http://"), "{client:?}");
        client.set_region("sa-saopaulo-1")?;
        assert_eq!(
            client.endpoint(),
            "https://loganalytics.sa-saopaulo-1.oci.oraclecloud.com/20200601"
        );
        assert_eq!(client.region(), Some("sa-saopaulo-1"));

        let err = client.set_region("  ").unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
        assert_eq!(client.region(), Some("sa-saopaulo-1"));
        Ok(())
    }

    #[tokio::test]
    async fn bad_proxy() -> TestResult {
        let server = Server::run();
        let mut config = test_config(&server);
        config.proxy = Some("not a url".into());
        let err = ReqwestClient::new(config, SERVICE).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
        Ok(())
    }

    #[test]
    fn retry_tokens() {
        let a = new_retry_token();
        let b = new_retry_token();
        assert_ne!(a, b);
        assert_eq!(a.len(), 32);
    }

    #[test]
    fn header_values() {
        let mut headers = http::HeaderMap::new();
        headers.insert(OPC_NEXT_PAGE, http::HeaderValue::from_static("page-2"));
        assert_eq!(
            header_string(&headers, OPC_NEXT_PAGE).as_deref(),
            Some("page-2")
        );
        assert_eq!(header_string(&headers, OPC_REQUEST_ID), None);
    }
}

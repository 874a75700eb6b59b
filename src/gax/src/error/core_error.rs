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

use super::CredentialsError;
use super::ServiceError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The header carrying the service-assigned request identifier.
const OPC_REQUEST_ID: &str = "opc-request-id";

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. For example, the
/// service may return an error, the transport may be unable to create the
/// necessary connection to make a request, the request may timeout before a
/// response is received, the retry policy may be exhausted, or the library may
/// be unable to format the request due to invalid or missing application
/// inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use log_analytics_gax::error::Error;
/// match example_function() {
///     Err(e) if matches!(e.status(), Some(_)) => {
///         println!("service error {e}, debug using {:?}", e.status().unwrap());
///     },
///     Err(e) if e.is_binding() => { println!("bad request parameters {e}"); },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use log_analytics_gax::error::ServiceError;
///     # Err(Error::service(ServiceError::default().set_code("NotFound").set_message("NOT FOUND")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use log_analytics_gax::error::{Error, ServiceError};
    /// let status = ServiceError::default().set_code("NotFound").set_message("NOT FOUND");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: ServiceError) -> Self {
        let details = ServiceDetails {
            status,
            status_code: None,
            headers: None,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use log_analytics_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use log_analytics_gax::error::Error;
    /// let error = Error::exhausted("too many retry attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// This is always a client-side generated error, but it may be the result
    /// of multiple errors received from the service.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The most common cause
    /// for deserialization problems are bugs in the client library and
    /// (rarely) bugs in the service.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. This error is never transient: the serialization is
    /// deterministic, and will fail on future attempts with the same input
    /// data.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// The [ServiceError] payload associated with this error.
    ///
    /// # Examples
    /// ```
    /// use log_analytics_gax::error::{Error, ServiceError};
    /// let error = Error::service(ServiceError::default().set_code("NotAuthorizedOrNotFound"));
    /// if let Some(status) = error.status() {
    ///     if status.code == "NotAuthorizedOrNotFound" {
    ///         println!("cannot find the thing, more details in {}", status.message);
    ///     }
    /// }
    /// ```
    ///
    /// The service returns a `code` naming the type of error and a
    /// human-readable message for all unsuccessful requests.
    pub fn status(&self) -> Option<&ServiceError> {
        match &self.last_attempt().kind {
            ErrorKind::Service(d) => Some(&d.as_ref().status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use log_analytics_gax::error::Error;
    /// let e = search_for_thing("the thing");
    /// if let Some(code) = e.http_status_code() {
    ///     if code == 404 {
    ///         println!("cannot find the thing, more details in {e}");
    ///     }
    /// }
    ///
    /// fn search_for_thing(name: &str) -> Error {
    ///     # Error::http(400, http::HeaderMap::new(), bytes::Bytes::from_static(b"NOT FOUND"))
    /// }
    /// ```
    ///
    /// Sometimes the error is generated before it reaches the service. For
    /// example, your proxy or a load balancer may generate errors without the
    /// detailed payload. In such cases the client library returns the status
    /// code, headers, and http payload.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.last_attempt().kind {
            ErrorKind::Transport(d) => d.as_ref().status_code,
            ErrorKind::Service(d) => d.as_ref().status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    ///
    /// Many errors do not have this information, e.g. errors detected before
    /// the request is sent, or timeouts.
    pub fn http_headers(&self) -> Option<&http::HeaderMap> {
        match &self.last_attempt().kind {
            ErrorKind::Transport(d) => d.as_ref().headers.as_ref(),
            ErrorKind::Service(d) => d.as_ref().headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only errors that could not be parsed as a [ServiceError] carry the raw
    /// payload.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.last_attempt().kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The service-assigned request identifier, if any.
    ///
    /// The service returns an `opc-request-id` header with every response.
    /// Include this value when contacting support about a failed request.
    ///
    /// # Example
    /// ```
    /// use log_analytics_gax::error::{Error, ServiceError};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("opc-request-id", http::HeaderValue::from_static("abc/123"));
    /// let e = Error::service_with_http_metadata(ServiceError::default(), Some(404), Some(headers));
    /// assert_eq!(e.opc_request_id(), Some("abc/123"));
    /// ```
    pub fn opc_request_id(&self) -> Option<&str> {
        self.http_headers()
            .and_then(|h| h.get(OPC_REQUEST_ID))
            .and_then(|v| v.to_str().ok())
    }

    // An exhausted retry policy wraps the error from the last attempt. The
    // HTTP accessors report that attempt.
    fn last_attempt(&self) -> &Error {
        if !self.is_exhausted() {
            return self;
        }
        let Some(source) = self.source.as_deref() else {
            return self;
        };
        source
            .downcast_ref::<Error>()
            .or_else(|| source.source().and_then(|s| s.downcast_ref::<Error>()))
            .map(Error::last_attempt)
            .unwrap_or(self)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        status: ServiceError,
        status_code: Option<u16>,
        headers: Option<http::HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            status,
        };
        let kind = ErrorKind::Service(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// The request parameters are missing or invalid.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was missing required parameters or the parameters
    /// did not have a valid value.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required
    /// parameter in the request builder was not initialized, a path parameter
    /// was blank, or a parameter restricted to a fixed set of values had some
    /// other value. The [source][std::error::Error::source] is a
    /// [BindingError][super::BindingError] naming the parameter and the
    /// operation.
    ///
    /// These errors are detected before any request is sent, and are never
    /// retried.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the authentication headers.
    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not create the authentication headers before sending the request.
    ///
    /// Typically this indicates a misconfigured authentication environment for
    /// your application.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        let kind = ErrorKind::Transport(Box::new(details));
        Self { kind, source: None }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or
    /// any HTTP error that did not include a status code or other headers.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include read or write problems, and broken connections.
    ///
    /// # Troubleshooting
    ///
    /// Most often, the solution is to use the right retry policy. This may
    /// involve changing your request to be idempotent, or configuring the
    /// policy to retry non-idempotent failures.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem reported by the transport layer.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            headers: Some(headers),
            status_code: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer.
    ///
    /// Examples include errors in a proxy, load balancer, or other network
    /// element generated before the service is able to send a full response.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport { .. })
    }

    /// An unclassified problem, typically used in mocks.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The error was generated before the request started and is transient.
    pub(crate) fn is_transient_and_before_rpc(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<CredentialsError>())
            .map(|e| e.is_transient())
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot bind the request parameters: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the authentication headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => {
                write!(f, "{e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                )
            }
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: ServiceError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindingError;
    use std::error::Error as StdError;

    fn test_headers() -> HeaderMap {
        let mut headers = http::HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            OPC_REQUEST_ID,
            http::HeaderValue::from_static("test-request-id"),
        );
        headers
    }

    #[test]
    fn service() {
        let status = ServiceError::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("NOT FOUND");
        let error = Error::service(status.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(
            error.to_string().contains("NotAuthorizedOrNotFound"),
            "{error}"
        );
        assert!(error.opc_request_id().is_none(), "{error:?}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout(std::io::Error::other("simulated"));
        assert!(error.is_timeout(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<std::io::Error>());
        assert!(got.is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");

        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted(std::io::Error::other("simulated"));
        assert!(error.is_exhausted(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
    }

    #[test]
    fn exhausted_reports_last_attempt() {
        let mut headers = HeaderMap::new();
        headers.insert("opc-request-id", http::HeaderValue::from_static("req-7"));
        let last = Error::service_with_http_metadata(
            ServiceError::default().set_code("InternalServerError"),
            Some(503),
            Some(headers),
        );
        let error = Error::exhausted(last);
        assert!(error.is_exhausted(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(503), "{error:?}");
        assert_eq!(error.opc_request_id(), Some("req-7"), "{error:?}");
        assert_eq!(
            error.status().map(|s| s.code.as_str()),
            Some("InternalServerError")
        );

        let payload = bytes::Bytes::from_static(b"bad gateway");
        let error = Error::exhausted(Error::http(502, HeaderMap::new(), payload.clone()));
        assert_eq!(error.http_status_code(), Some(502), "{error:?}");
        assert_eq!(error.http_payload(), Some(&payload));
    }

    #[test]
    fn serialization() {
        let error = Error::deser("simulated");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");

        let error = Error::ser("simulated");
        assert!(error.is_serialization(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn service_with_http_metadata() {
        let status = ServiceError::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("NOT FOUND");
        let headers = test_headers();
        let error =
            Error::service_with_http_metadata(status.clone(), Some(404), Some(headers.clone()));
        assert_eq!(error.status(), Some(&status));
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.opc_request_id(), Some("test-request-id"));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn binding() {
        let source = BindingError::MissingParameter {
            operation: "create_log_analytics_log_group",
            parameter: "create_log_analytics_log_group_details",
        };
        let error = Error::binding(source);
        assert!(error.is_binding(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<BindingError>());
        assert!(
            matches!(
                got,
                Some(BindingError::MissingParameter {
                    parameter: "create_log_analytics_log_group_details",
                    ..
                })
            ),
            "{error:?}"
        );
        assert!(
            error
                .to_string()
                .contains("create_log_analytics_log_group_details"),
            "{error}"
        );
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");

        assert!(error.status().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn auth_transient() {
        let source = CredentialsError::from_msg(true, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if c.is_transient()), "{error:?}");
        assert!(error.to_string().contains("test-message"), "{error}");
        assert!(error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn auth_not_transient() {
        let source = CredentialsError::from_msg(false, "test-message");
        let error = Error::authentication(source);
        assert!(error.is_authentication(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<CredentialsError>());
        assert!(matches!(got, Some(c) if !c.is_transient()), "{error:?}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn http() {
        let headers = test_headers();
        let payload = bytes::Bytes::from_static(b"NOT FOUND");
        let error = Error::http(404, headers.clone(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("NOT FOUND"), "{error}");
        assert!(error.to_string().contains("404"), "{error}");
        assert_eq!(error.http_status_code(), Some(404));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(error.opc_request_id(), Some("test-request-id"));
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(502, HeaderMap::new(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
        assert!(error.to_string().contains("502"), "{error}");
        assert!(error.opc_request_id().is_none(), "{error:?}");
    }

    #[test]
    fn io() {
        let error = Error::io(std::io::Error::other("connection reset"));
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
        assert!(!error.is_transient_and_before_rpc(), "{error:?}");
    }

    #[test]
    fn transport() {
        let headers = test_headers();
        let error = Error::transport(headers.clone(), "simulated");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&headers));
        assert!(error.http_payload().is_none(), "{error:?}");
    }

    #[test]
    fn other() {
        let error = Error::other("simulated failure");
        assert!(error.to_string().contains("simulated failure"), "{error}");
        assert!(!error.is_binding(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
    }
}

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

use std::error::Error;
use std::sync::Arc;

type ArcError = Arc<dyn Error + Send + Sync>;

/// Represents an error creating or using credentials.
///
/// The client libraries may experience problems creating the credentials, for
/// example, a missing configuration file. They may also experience problems
/// using the credentials, for example, a temporary failure to refresh a
/// session token. The latter kind of errors may happen even after the
/// credentials are successfully created.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
///
/// # Example
/// ```
/// # use log_analytics_gax::error::CredentialsError;
/// let err = CredentialsError::from_msg(
///     true, "simulated retryable error while trying to create credentials");
/// assert!(err.is_transient());
/// assert!(format!("{err}").contains("simulated retryable error"));
/// ```
#[derive(Clone, Debug)]
pub struct CredentialsError {
    /// A boolean value indicating whether the error is transient.
    ///
    /// If `true`, the operation that resulted in this error might succeed upon
    /// retry.
    is_transient: bool,

    message: Option<String>,

    /// The underlying source of the error.
    source: Option<ArcError>,
}

impl CredentialsError {
    /// Creates a new `CredentialsError` with an underlying cause.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::error::CredentialsError;
    /// let source = std::io::Error::other("cannot read the config file");
    /// let err = CredentialsError::from_source(false, source);
    /// assert!(!err.is_transient());
    /// ```
    pub fn from_source<T: Error + Send + Sync + 'static>(is_transient: bool, source: T) -> Self {
        CredentialsError {
            is_transient,
            source: Some(Arc::new(source)),
            message: None,
        }
    }

    /// Creates a new `CredentialsError` from a message.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        CredentialsError {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Creates a new `CredentialsError` with a message and an underlying cause.
    pub fn new<M, T>(is_transient: bool, message: M, source: T) -> Self
    where
        M: Into<String>,
        T: Error + Send + Sync + 'static,
    {
        CredentialsError {
            is_transient,
            message: Some(message.into()),
            source: Some(Arc::new(source)),
        }
    }

    /// Returns `true` if the error is transient and may be retried.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }

    fn message(&self) -> String {
        let prefix = if self.is_transient {
            TRANSIENT_MSG
        } else {
            PERMANENT_MSG
        };
        match (&self.message, &self.source) {
            (Some(m), Some(s)) => format!("{prefix}: {m}, source: {s}"),
            (Some(m), None) => format!("{prefix}: {m}"),
            (None, Some(s)) => format!("{prefix}, source: {s}"),
            (None, None) => prefix.to_string(),
        }
    }
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}

const TRANSIENT_MSG: &str = "cannot create the request credentials, but future attempts may succeed";
const PERMANENT_MSG: &str = "cannot create the request credentials and future attempts will not succeed";

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn from_source(transient: bool) {
        let source = std::io::Error::other("test-only");
        let got = CredentialsError::from_source(transient, source);
        assert_eq!(got.is_transient(), transient, "{got}");
        assert!(format!("{got}").contains("test-only"), "{got}");
    }

    #[test_case(true)]
    #[test_case(false)]
    fn from_msg(transient: bool) {
        let got = CredentialsError::from_msg(transient, "test-only");
        assert_eq!(got.is_transient(), transient, "{got}");
        assert!(format!("{got}").contains("test-only"), "{got}");
    }

    #[test]
    fn with_message_and_source() {
        let source = std::io::Error::other("source-123");
        let got = CredentialsError::new(false, "message-456", source);
        let fmt = format!("{got}");
        assert!(fmt.contains("source-123"), "{fmt}");
        assert!(fmt.contains("message-456"), "{fmt}");
    }

    #[test]
    fn fmt() {
        let e = CredentialsError::from_msg(true, "test-only-err-123");
        let got = format!("{e}");
        assert!(got.contains("test-only-err-123"), "{got}");
        assert!(got.contains(TRANSIENT_MSG), "{got}");

        let e = CredentialsError::from_msg(false, "test-only-err-123");
        let got = format!("{e}");
        assert!(got.contains("test-only-err-123"), "{got}");
        assert!(got.contains(PERMANENT_MSG), "{got}");
    }
}

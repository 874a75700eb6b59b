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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries do not retry requests unless the application
//! configures a retry policy, either as a client-level default or as a
//! per-request override. Validation errors, detected before any request is
//! sent, are never retried.
//!
//! The [RetryableErrors] policy retries transient failures of idempotent
//! requests. Mutating requests are idempotent when they carry a retry token,
//! which the client libraries generate automatically.
//!
//! # Example
//! ```
//! # use log_analytics_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = RetryableErrors
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(60));
//! ```

use crate::error::Error;
use crate::retry_result::RetryResult;
use crate::retry_state::RetryState;
use std::sync::Arc;
use std::time::Duration;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `state` - the state of the retry loop, including the number of
    ///   attempts, the start time, and the request idempotency.
    /// * `error` - the last error received when attempting the request.
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(&self, _state: &RetryState) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [RetryPolicy].
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [RetryPolicy] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::retry_policy::*;
    /// use std::time::Duration;
    /// let policy = RetryableErrors.with_time_limit(Duration::from_secs(10));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::retry_policy::*;
    /// let policy = RetryableErrors.with_attempt_limit(3);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// Retries transient errors on idempotent requests.
///
/// The policy treats as transient:
/// - I/O errors, such as a connection reset, and timeouts.
/// - Authentication errors flagged as transient, these happen before the
///   request is sent and are always safe to retry.
/// - HTTP `409`, `429` and `5xx` responses.
///
/// All other errors are permanent. Non-idempotent requests are only retried
/// for errors that happen before the request is sent.
///
/// This policy never stops on its own, decorate it with
/// [with_attempt_limit][RetryPolicyExt::with_attempt_limit] or
/// [with_time_limit][RetryPolicyExt::with_time_limit].
#[derive(Clone, Debug)]
pub struct RetryableErrors;

impl RetryPolicy for RetryableErrors {
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        if error.is_transient_and_before_rpc() {
            return RetryResult::Continue(error);
        }
        if !state.idempotent {
            return RetryResult::Permanent(error);
        }
        if error.is_io() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        match error.http_status_code() {
            Some(409) | Some(429) => RetryResult::Continue(error),
            Some(code) if (500..600).contains(&code) => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors, regardless of idempotency.
///
/// Mostly useful in tests, or when combined with other decorators.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that stops the loop after the first error.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(&self, _state: &RetryState, error: Error) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = RetryableErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance decorating [RetryableErrors].
    pub fn new(maximum_duration: Duration) -> Self {
        Self::custom(RetryableErrors, maximum_duration)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, state: &RetryState, error: Error) -> RetryResult {
        let now = std::time::Instant::now();
        match state.start.checked_add(self.maximum_duration) {
            Some(deadline) if now >= deadline => {}
            _ => return RetryResult::Continue(error),
        }
        RetryResult::Exhausted(Error::exhausted(Exhausted::new(
            error,
            "elapsed time",
            format!("{:?}", now.saturating_duration_since(state.start)),
            format!("{:?}", self.maximum_duration),
        )))
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => self.error_if_exhausted(state, e),
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        let remaining = state
            .start
            .checked_add(self.maximum_duration)
            .map(|deadline| deadline.saturating_duration_since(std::time::Instant::now()))
            .unwrap_or(self.maximum_duration);
        if let Some(inner) = self.inner.remaining_time(state) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = RetryableErrors>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance decorating [RetryableErrors].
    pub fn new(maximum_attempts: u32) -> Self {
        Self::custom(RetryableErrors, maximum_attempts)
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
        match self.inner.on_error(state, error) {
            RetryResult::Continue(e) if state.attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(Error::exhausted(Exhausted::new(
                    e,
                    "attempt count",
                    state.attempt_count.to_string(),
                    self.maximum_attempts.to_string(),
                )))
            }
            r => r,
        }
    }

    fn remaining_time(&self, state: &RetryState) -> Option<Duration> {
        self.inner.remaining_time(state)
    }
}

/// The error reported when a retry policy limit is reached.
#[derive(Debug)]
struct Exhausted {
    last_error: Error,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl Exhausted {
    fn new(last_error: Error, limit_name: &'static str, value: String, limit: String) -> Self {
        Self {
            last_error,
            limit_name,
            value,
            limit,
        }
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "retry policy exhausted its {} limit ({}, limit was {}), last error: {}",
            self.limit_name, self.value, self.limit, self.last_error
        )
    }
}

impl std::error::Error for Exhausted {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.last_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CredentialsError, ServiceError};
    use http::HeaderMap;
    use test_case::test_case;

    fn http_error(code: u16) -> Error {
        Error::service_with_http_metadata(
            ServiceError::default().set_code("test-only"),
            Some(code),
            Some(HeaderMap::new()),
        )
    }

    fn idempotent() -> RetryState {
        RetryState::new(true).set_attempt_count(1_u32)
    }

    fn non_idempotent() -> RetryState {
        RetryState::new(false).set_attempt_count(1_u32)
    }

    #[test_case(409)]
    #[test_case(429)]
    #[test_case(500)]
    #[test_case(502)]
    #[test_case(503)]
    #[test_case(504)]
    fn retryable_errors_transient(code: u16) {
        let p = RetryableErrors;
        assert!(p.on_error(&idempotent(), http_error(code)).is_continue());
        assert!(p.on_error(&non_idempotent(), http_error(code)).is_permanent());
    }

    #[test_case(400)]
    #[test_case(401)]
    #[test_case(404)]
    #[test_case(412)]
    fn retryable_errors_permanent(code: u16) {
        let p = RetryableErrors;
        assert!(p.on_error(&idempotent(), http_error(code)).is_permanent());
        assert!(p.on_error(&non_idempotent(), http_error(code)).is_permanent());
    }

    #[test]
    fn retryable_errors_io() {
        let p = RetryableErrors;
        assert!(
            p.on_error(&idempotent(), Error::io("err".to_string()))
                .is_continue()
        );
        assert!(
            p.on_error(&non_idempotent(), Error::io("err".to_string()))
                .is_permanent()
        );
        assert!(
            p.on_error(&idempotent(), Error::timeout("err".to_string()))
                .is_continue()
        );
    }

    #[test]
    fn retryable_errors_authentication() {
        let p = RetryableErrors;
        let transient = || Error::authentication(CredentialsError::from_msg(true, "err"));
        let permanent = || Error::authentication(CredentialsError::from_msg(false, "err"));
        assert!(p.on_error(&idempotent(), transient()).is_continue());
        assert!(p.on_error(&non_idempotent(), transient()).is_continue());
        assert!(p.on_error(&idempotent(), permanent()).is_permanent());
        assert!(p.on_error(&non_idempotent(), permanent()).is_permanent());
    }

    #[test]
    fn retryable_errors_binding() {
        let p = RetryableErrors;
        let e = Error::binding("missing parameter");
        assert!(p.on_error(&idempotent(), e).is_permanent());
        assert!(p.remaining_time(&idempotent()).is_none());
    }

    #[test]
    fn always_and_never() {
        assert!(
            AlwaysRetry
                .on_error(&non_idempotent(), http_error(400))
                .is_continue()
        );
        assert!(
            NeverRetry
                .on_error(&idempotent(), http_error(503))
                .is_exhausted()
        );
    }

    #[test]
    fn retry_policy_arg() {
        let arg = RetryPolicyArg::from(RetryableErrors.with_attempt_limit(3));
        let policy: Arc<dyn RetryPolicy> = arg.into();
        let r = policy.on_error(&idempotent(), http_error(503));
        assert!(r.is_continue(), "{r:?}");

        let shared: Arc<dyn RetryPolicy> = Arc::new(AlwaysRetry);
        let _ = RetryPolicyArg::from(shared);
    }

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
        }
    }

    #[test]
    fn limited_attempt_count() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(3)
            .returning(|_, e| RetryResult::Continue(e));
        let policy = LimitedAttemptCount::custom(mock, 3);

        let r = policy.on_error(&idempotent().set_attempt_count(1_u32), http_error(503));
        assert!(r.is_continue(), "{r:?}");
        let r = policy.on_error(&idempotent().set_attempt_count(2_u32), http_error(503));
        assert!(r.is_continue(), "{r:?}");
        let r = policy.on_error(&idempotent().set_attempt_count(3_u32), http_error(503));
        assert!(r.is_exhausted(), "{r:?}");
        if let RetryResult::Exhausted(e) = r {
            assert!(e.is_exhausted(), "{e:?}");
            assert!(e.to_string().contains("attempt count"), "{e}");
        }
    }

    #[test]
    fn limited_attempt_count_forwards_permanent() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, e| RetryResult::Permanent(e));
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(5)));
        let policy = LimitedAttemptCount::custom(mock, 3);

        let r = policy.on_error(&idempotent().set_attempt_count(5_u32), http_error(400));
        assert!(r.is_permanent(), "{r:?}");
        assert_eq!(
            policy.remaining_time(&idempotent()),
            Some(Duration::from_secs(5))
        );
    }

    #[test]
    fn limited_elapsed_time() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(2)
            .returning(|_, e| RetryResult::Continue(e));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));

        let state = idempotent();
        let r = policy.on_error(&state, http_error(503));
        assert!(r.is_continue(), "{r:?}");

        let expired = idempotent()
            .set_start(std::time::Instant::now() - Duration::from_secs(120));
        let r = policy.on_error(&expired, http_error(503));
        assert!(r.is_exhausted(), "{r:?}");
    }

    #[test]
    fn limited_elapsed_time_remaining() {
        let mut mock = MockPolicy::new();
        mock.expect_remaining_time()
            .times(1)
            .returning(|_| Some(Duration::from_secs(5)));
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        let remaining = policy.remaining_time(&idempotent());
        assert_eq!(remaining, Some(Duration::from_secs(5)));

        let policy = LimitedElapsedTime::new(Duration::from_secs(60));
        let remaining = policy.remaining_time(&idempotent());
        assert!(
            remaining.is_some_and(|d| d <= Duration::from_secs(60)),
            "{remaining:?}"
        );
    }
}

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

//! Per request options.
//!
//! The client defaults are intended to work for most applications. Some calls
//! need a different timeout, a different retry configuration, or no retries at
//! all. The `*Builder` returned by each client method implements the
//! [RequestOptionsBuilder] trait where applications can override these
//! defaults for a single request.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

/// How a single request selects its retry policy.
///
/// A request may inherit the client's retry policy, replace it, or disable
/// retries altogether. Disabling retries is not the same as inheriting: a
/// request with retries disabled makes a single attempt even if the client was
/// configured with a retry policy.
#[derive(Clone, Debug, Default)]
pub enum RetryPolicyOverride {
    /// Use the retry policy configured in the client, if any.
    #[default]
    Inherit,
    /// Make a single attempt, ignoring any client retry policy.
    Disabled,
    /// Use this retry policy instead of the client's.
    Policy(Arc<dyn RetryPolicy>),
}

impl RetryPolicyOverride {
    /// Returns the effective policy given the client default.
    ///
    /// # Example
    /// ```
    /// # use log_analytics_gax::options::RetryPolicyOverride;
    /// # use log_analytics_gax::retry_policy::{AlwaysRetry, RetryPolicy};
    /// # use std::sync::Arc;
    /// let default: Option<Arc<dyn RetryPolicy>> = Some(Arc::new(AlwaysRetry));
    /// assert!(RetryPolicyOverride::Inherit.resolve(default.as_ref()).is_some());
    /// assert!(RetryPolicyOverride::Disabled.resolve(default.as_ref()).is_none());
    /// ```
    pub fn resolve(
        &self,
        client_default: Option<&Arc<dyn RetryPolicy>>,
    ) -> Option<Arc<dyn RetryPolicy>> {
        match self {
            Self::Inherit => client_default.cloned(),
            Self::Disabled => None,
            Self::Policy(p) => Some(p.clone()),
        }
    }
}

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters and
/// options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    retry_policy: RetryPolicyOverride,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl RequestOptions {
    /// Gets the idempotency
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the underlying request as idempotent.
    ///
    /// Retry policies may examine the idempotency and the error details to
    /// decide if the error is retryable. Typically [idempotent] requests are
    /// safe to retry under more error conditions than non-idempotent requests.
    ///
    /// Without an explicit value each operation supplies its own default. Most
    /// operations are idempotent, since they are reads, carry an
    /// `opc-retry-token`, or replace the resource state. Operations that
    /// change state without such a guard default to non-idempotent.
    ///
    /// [idempotent]: https://en.wikipedia.org/wiki/Idempotence
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// Set the idempotency unless it is already set.
    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Replaces the default value of the `user-agent` header.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the `user-agent` override, if any.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by the retry policy.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Get the current retry policy override.
    pub fn retry_policy(&self) -> &RetryPolicyOverride {
        &self.retry_policy
    }

    /// Sets the retry policy configuration.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = RetryPolicyOverride::Policy(v.into().into());
    }

    /// Disables retries for this request, even if the client has a retry
    /// policy.
    pub fn disable_retries(&mut self) {
        self.retry_policy = RetryPolicyOverride::Disabled;
    }

    /// Get the current backoff policy override, if any.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client library provides a builder for each operation. These builders
/// set the request parameters, e.g., the namespace targeted by the request, as
/// well as any options affecting the request, such as timeouts or retries.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the request underlying this method as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Replace the default value of the `user-agent` header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt. The
    /// overall timeout for a request is set by the retry policy.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Makes a single attempt, ignoring the client retry policy.
    fn with_retries_disabled(self) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }
}

/// Implements the sealed [RequestOptionsBuilder] trait.
impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_retries_disabled(mut self) -> Self {
        self.request_options().disable_retries();
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;
    use crate::retry_policy::{AlwaysRetry, LimitedAttemptCount};
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();

        assert_eq!(opts.idempotent, None);
        opts.set_idempotency(true);
        assert_eq!(opts.idempotent(), Some(true));
        opts.set_idempotency(false);
        assert_eq!(opts.idempotent(), Some(false));

        opts.set_user_agent("test-only");
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &None);

        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        assert_eq!(opts.attempt_timeout(), &Some(d));

        assert!(
            matches!(opts.retry_policy(), RetryPolicyOverride::Inherit),
            "{opts:?}"
        );
        opts.set_retry_policy(LimitedAttemptCount::new(3));
        assert!(
            matches!(opts.retry_policy(), RetryPolicyOverride::Policy(_)),
            "{opts:?}"
        );
        opts.disable_retries();
        assert!(
            matches!(opts.retry_policy(), RetryPolicyOverride::Disabled),
            "{opts:?}"
        );

        opts.set_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn request_options_idempotency() {
        let opts = set_default_idempotency(RequestOptions::default(), true);
        assert_eq!(opts.idempotent(), Some(true));
        let opts = set_default_idempotency(opts, false);
        assert_eq!(opts.idempotent(), Some(true));

        let opts = set_default_idempotency(RequestOptions::default(), false);
        assert_eq!(opts.idempotent(), Some(false));
        let opts = set_default_idempotency(opts, true);
        assert_eq!(opts.idempotent(), Some(false));
    }

    #[test]
    fn override_resolution() {
        let default: Arc<dyn RetryPolicy> = Arc::new(LimitedAttemptCount::new(5));

        let got = RetryPolicyOverride::Inherit.resolve(Some(&default));
        assert!(got.is_some_and(|p| Arc::ptr_eq(&p, &default)));
        assert!(RetryPolicyOverride::Inherit.resolve(None).is_none());

        assert!(RetryPolicyOverride::Disabled.resolve(Some(&default)).is_none());
        assert!(RetryPolicyOverride::Disabled.resolve(None).is_none());

        let custom: Arc<dyn RetryPolicy> = Arc::new(AlwaysRetry);
        let got = RetryPolicyOverride::Policy(custom.clone()).resolve(Some(&default));
        assert!(got.is_some_and(|p| Arc::ptr_eq(&p, &custom)));
        let got = RetryPolicyOverride::Policy(custom.clone()).resolve(None);
        assert!(got.is_some_and(|p| Arc::ptr_eq(&p, &custom)));
    }

    #[test]
    fn request_options_builder() {
        let mut builder = TestBuilder::default();
        assert_eq!(builder.request_options().user_agent(), &None);
        assert_eq!(builder.request_options().attempt_timeout(), &None);

        let mut builder = TestBuilder::default().with_idempotency(true);
        assert_eq!(builder.request_options().idempotent(), Some(true));
        let mut builder = TestBuilder::default().with_idempotency(false);
        assert_eq!(builder.request_options().idempotent(), Some(false));

        let mut builder = TestBuilder::default().with_user_agent("test-only");
        assert_eq!(
            builder.request_options().user_agent().as_deref(),
            Some("test-only")
        );

        let d = Duration::from_secs(123);
        let mut builder = TestBuilder::default().with_attempt_timeout(d);
        assert_eq!(builder.request_options().attempt_timeout(), &Some(d));

        let mut builder = TestBuilder::default().with_retry_policy(LimitedAttemptCount::new(3));
        assert!(matches!(
            builder.request_options().retry_policy(),
            RetryPolicyOverride::Policy(_)
        ));

        let mut builder = TestBuilder::default()
            .with_retry_policy(AlwaysRetry)
            .with_retries_disabled();
        assert!(matches!(
            builder.request_options().retry_policy(),
            RetryPolicyOverride::Disabled
        ));

        let mut builder =
            TestBuilder::default().with_backoff_policy(ExponentialBackoffBuilder::new().clamp());
        assert!(builder.request_options().backoff_policy().is_some());
    }
}

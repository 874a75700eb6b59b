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

//! Defines traits for backoff policies.
//!
//! When a retry policy decides to make a new attempt, the client library waits
//! before sending the request again, as the service may need time to recover.
//! [Exponential backoff] is a well known algorithm to find an acceptable delay
//! between retries.
//!
//! # Example
//! ```
//! # use log_analytics_gax::backoff_policy::*;
//! use log_analytics_gax::exponential_backoff::ExponentialBackoffBuilder;
//! use std::time::Duration;
//!
//! fn configure_backoff() -> Result<BackoffPolicyArg, log_analytics_gax::exponential_backoff::Error> {
//!     let policy = ExponentialBackoffBuilder::new()
//!         .with_initial_delay(Duration::from_millis(100))
//!         .with_maximum_delay(Duration::from_secs(5))
//!         .with_scaling(4.0)
//!         .build()?;
//!     Ok(policy.into())
//! }
//! ```
//!
//! [Exponential backoff]: https://en.wikipedia.org/wiki/Exponential_backoff

use crate::retry_state::RetryState;
use std::sync::Arc;

/// Defines the trait implemented by all backoff strategies.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the backoff delay on a failure.
    ///
    /// This method is always called after at least one attempt, so
    /// `state.attempt_count` is at least 1.
    fn on_failure(&self, state: &RetryState) -> std::time::Duration;
}

/// A helper type to use [BackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(Arc<dyn BackoffPolicy>);

impl<T: BackoffPolicy + 'static> From<T> for BackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Arc<dyn BackoffPolicy> {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exponential_backoff::ExponentialBackoffBuilder;

    #[test]
    fn backoff_policy_arg() {
        let policy = ExponentialBackoffBuilder::default().clamp();
        let _ = BackoffPolicyArg::from(policy);

        let policy: Arc<dyn BackoffPolicy> = Arc::new(ExponentialBackoffBuilder::default().clamp());
        let arg = BackoffPolicyArg::from(policy);
        let back: Arc<dyn BackoffPolicy> = arg.into();
        let delay = back.on_failure(&RetryState::new(true).set_attempt_count(1_u32));
        assert!(delay <= std::time::Duration::from_secs(1), "{delay:?}");
    }
}

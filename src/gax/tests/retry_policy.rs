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


//! Verify retry policies are usable from outside the crate.

#[cfg(test)]
mod tests {
    use log_analytics_gax as gax;
    use gax::error::Error;
    use gax::options::{RequestOptions, RetryPolicyOverride};
    use gax::retry_policy::*;
    use gax::retry_result::RetryResult;
    use gax::retry_state::RetryState;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Debug)]
    struct OnlyIdempotent;
    impl RetryPolicy for OnlyIdempotent {
        fn on_error(&self, state: &RetryState, error: Error) -> RetryResult {
            if state.idempotent {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            }
        }
    }

    #[test]
    fn custom_policy_with_limits() {
        let policy = OnlyIdempotent
            .with_attempt_limit(3)
            .with_time_limit(Duration::from_secs(60));
        let state = RetryState::new(true).set_attempt_count(1_u32);
        assert!(policy.on_error(&state, Error::io("reset")).is_continue());
        let state = RetryState::new(true).set_attempt_count(3_u32);
        assert!(policy.on_error(&state, Error::io("reset")).is_exhausted());
        let state = RetryState::new(false).set_attempt_count(1_u32);
        assert!(policy.on_error(&state, Error::io("reset")).is_permanent());
        assert!(policy.remaining_time(&state).is_some());
    }

    #[test]
    fn request_options_override() {
        let default: Arc<dyn RetryPolicy> = Arc::new(LimitedAttemptCount::new(5));

        let options = RequestOptions::default();
        assert!(matches!(options.retry_policy(), RetryPolicyOverride::Inherit));
        assert!(options.retry_policy().resolve(Some(&default)).is_some());
        assert!(options.retry_policy().resolve(None).is_none());

        let mut options = RequestOptions::default();
        options.disable_retries();
        assert!(options.retry_policy().resolve(Some(&default)).is_none());

        let mut options = RequestOptions::default();
        options.set_retry_policy(NeverRetry);
        assert!(options.retry_policy().resolve(None).is_some());
    }
}

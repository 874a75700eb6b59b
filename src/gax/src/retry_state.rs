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

//! The state of a retry loop, as seen by retry and backoff policies.

use std::time::Instant;

/// The input into retry and backoff policy queries.
///
/// On an error, the client library queries the retry policy as to whether it
/// should make a new attempt, and then queries the backoff policy for how long
/// to wait before that attempt.
///
/// This struct may gain new fields in future versions of the client libraries.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct RetryState {
    /// If true, the request is idempotent and it is safe to retry.
    pub idempotent: bool,

    /// The start time for this retry loop.
    pub start: Instant,

    /// The number of attempts completed so far, including the failed one.
    pub attempt_count: u32,
}

impl RetryState {
    /// Creates a new instance, starting the loop clock now.
    pub fn new(idempotent: bool) -> Self {
        Self {
            idempotent,
            start: Instant::now(),
            attempt_count: 0,
        }
    }

    /// Changes the start time, useful in mocks.
    pub fn set_start<T: Into<Instant>>(mut self, v: T) -> Self {
        self.start = v.into();
        self
    }

    /// Changes the attempt count, useful in mocks.
    pub fn set_attempt_count<T: Into<u32>>(mut self, v: T) -> Self {
        self.attempt_count = v.into();
        self
    }

    /// How long the loop has been running.
    pub fn elapsed(&self) -> std::time::Duration {
        Instant::now().saturating_duration_since(self.start)
    }
}

impl Default for RetryState {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults() {
        let state = RetryState::default();
        assert!(!state.idempotent, "{state:?}");
        assert_eq!(state.attempt_count, 0);
    }

    #[test]
    fn setters() {
        let start = Instant::now() - Duration::from_secs(10);
        let state = RetryState::new(true)
            .set_start(start)
            .set_attempt_count(3_u32);
        assert!(state.idempotent, "{state:?}");
        assert_eq!(state.start, start);
        assert_eq!(state.attempt_count, 3);
        assert!(state.elapsed() >= Duration::from_secs(10), "{state:?}");
    }
}

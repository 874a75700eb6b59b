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

pub use auth::credentials::Credentials;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "LOG_ANALYTICS_RUST_LOGGING";

/// The environment variable consulted when the application does not configure
/// an endpoint or a region.
pub const REGION_VAR: &str = "LOG_ANALYTICS_REGION";

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

// Returns the region set in the environment, ignoring blank values.
pub(crate) fn region_from_env() -> Option<String> {
    std::env::var(REGION_VAR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    // This test must run serially because it manipulates the environment.
    #[test]
    #[serial_test::serial]
    fn config_tracing() {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        let mut config = ClientConfig::default();
        config.tracing = true;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let config = ClientConfig::default();
        assert!(tracing_enabled(&config), "expected tracing to be enabled");

        let _e = ScopedEnv::set(LOGGING_VAR, "yes");
        let config = ClientConfig::default();
        assert!(!tracing_enabled(&config), "expected tracing to be disabled");
    }

    #[test]
    #[serial_test::serial]
    fn region_env() {
        let _e = ScopedEnv::remove(REGION_VAR);
        assert_eq!(region_from_env(), None);

        let _e = ScopedEnv::set(REGION_VAR, " us-ashburn-1 ");
        assert_eq!(region_from_env().as_deref(), Some("us-ashburn-1"));

        let _e = ScopedEnv::set(REGION_VAR, "   ");
        assert_eq!(region_from_env(), None);
    }
}

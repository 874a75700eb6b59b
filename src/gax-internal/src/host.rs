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

//! Compute the service endpoint from the client configuration.
//!
//! The service is deployed in many regions, each with its own host. The host
//! name is derived from a template, e.g.
//! `https://loganalytics.{region}.oci.oraclecloud.com`, and all request paths
//! are prefixed with the API version.

use crate::options::ClientConfig;
use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

const REGION_PLACEHOLDER: &str = "{region}";

/// Describes how to reach a service.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceEndpoint {
    /// The endpoint template, with a `{region}` placeholder.
    pub template: &'static str,
    /// The path prefix for all requests, e.g. `/20200601`.
    pub api_version: &'static str,
}

impl ServiceEndpoint {
    /// The endpoint, including the API version, for `region`.
    pub fn for_region(&self, region: &str) -> gax::client_builder::Result<String> {
        let region = region.trim();
        if region.is_empty() {
            return Err(BuilderError::endpoint("the region cannot be empty"));
        }
        if !region
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(BuilderError::endpoint(format!(
                "invalid region `{region}`, expected lowercase letters, digits, and `-`"
            )));
        }
        let host = self.template.replace(REGION_PLACEHOLDER, region);
        Ok(format!("{host}{}", self.api_version))
    }

    /// The endpoint, including the API version, for an explicit base URL.
    pub fn for_base_url(&self, base: &str) -> gax::client_builder::Result<String> {
        let base = base.trim().trim_end_matches('/');
        let uri = Uri::from_str(base).map_err(BuilderError::endpoint)?;
        if uri.authority().is_none() {
            return Err(BuilderError::endpoint(format!(
                "missing host in endpoint `{base}`"
            )));
        }
        Ok(format!("{base}{}", self.api_version))
    }
}

/// Resolves the endpoint and region for a new client.
///
/// An explicit endpoint wins. Otherwise the region comes from the client
/// configuration, then the `LOG_ANALYTICS_REGION` environment variable, and
/// finally the credentials.
pub(crate) fn resolve(
    config: &ClientConfig,
    service: &ServiceEndpoint,
    cred_region: Option<String>,
) -> gax::client_builder::Result<(String, Option<String>)> {
    let trimmed = |r: String| Some(r.trim().to_string()).filter(|r| !r.is_empty());
    let region = config
        .region
        .clone()
        .and_then(trimmed)
        .or_else(crate::options::region_from_env)
        .or(cred_region.and_then(trimmed));
    if let Some(endpoint) = config.endpoint.as_deref() {
        return Ok((service.for_base_url(endpoint)?, region));
    }
    match region {
        Some(r) => Ok((service.for_region(&r)?, Some(r))),
        None => Err(BuilderError::endpoint(
            "no endpoint or region configured, set one in the client builder, the credentials, or the LOG_ANALYTICS_REGION environment variable",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::REGION_VAR;
    use scoped_env::ScopedEnv;
    use test_case::test_case;

    const SERVICE: ServiceEndpoint = ServiceEndpoint {
        template: "https://loganalytics.{region}.oci.oraclecloud.com",
        api_version: "/20200601",
    };

    #[test_case("us-ashburn-1", "https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601")]
    #[test_case(" eu-frankfurt-1 ", "https://loganalytics.eu-frankfurt-1.oci.oraclecloud.com/20200601")]
    fn for_region(region: &str, want: &str) -> anyhow::Result<()> {
        assert_eq!(SERVICE.for_region(region)?, want);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    fn for_region_blank(region: &str) {
        let err = SERVICE.for_region(region).unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[test_case("evil.example.com/x?"; "path and query")]
    #[test_case("us.ashburn"; "dot")]
    #[test_case("US-ASHBURN-1"; "uppercase")]
    #[test_case("us ashburn"; "inner space")]
    fn for_region_invalid(region: &str) {
        let err = SERVICE.for_region(region).unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[test_case("http://127.0.0.1:8080", "http://127.0.0.1:8080/20200601")]
    #[test_case("http://127.0.0.1:8080/", "http://127.0.0.1:8080/20200601")]
    #[test_case("https://private.example.com", "https://private.example.com/20200601")]
    fn for_base_url(base: &str, want: &str) -> anyhow::Result<()> {
        assert_eq!(SERVICE.for_base_url(base)?, want);
        Ok(())
    }

    #[test]
    fn for_base_url_error() {
        let err = SERVICE.for_base_url("/no/host/here").unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[test]
    #[serial_test::serial]
    fn resolve_explicit_endpoint() -> anyhow::Result<()> {
        let _e = ScopedEnv::set(REGION_VAR, "ap-tokyo-1");
        let mut config = ClientConfig::default();
        config.endpoint = Some("http://localhost:7469/".into());
        let (endpoint, region) = resolve(&config, &SERVICE, None)?;
        assert_eq!(endpoint, "http://localhost:7469/20200601");
        assert_eq!(region.as_deref(), Some("ap-tokyo-1"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn resolve_priority() -> anyhow::Result<()> {
        let _e = ScopedEnv::set(REGION_VAR, "ap-tokyo-1");
        let mut config = ClientConfig::default();
        config.region = Some("us-phoenix-1".into());
        let (endpoint, region) = resolve(&config, &SERVICE, Some("uk-london-1".into()))?;
        assert_eq!(
            endpoint,
            "https://loganalytics.us-phoenix-1.oci.oraclecloud.com/20200601"
        );
        assert_eq!(region.as_deref(), Some("us-phoenix-1"));

        let config = ClientConfig::default();
        let (endpoint, _) = resolve(&config, &SERVICE, Some("uk-london-1".into()))?;
        assert_eq!(
            endpoint,
            "https://loganalytics.ap-tokyo-1.oci.oraclecloud.com/20200601"
        );

        let _e = ScopedEnv::remove(REGION_VAR);
        let (endpoint, region) = resolve(&config, &SERVICE, Some("uk-london-1".into()))?;
        assert_eq!(
            endpoint,
            "https://loganalytics.uk-london-1.oci.oraclecloud.com/20200601"
        );
        assert_eq!(region.as_deref(), Some("uk-london-1"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn resolve_trims_region() -> anyhow::Result<()> {
        let _e = ScopedEnv::remove(REGION_VAR);
        let mut config = ClientConfig::default();
        config.region = Some(" us-ashburn-1 ".into());
        let (endpoint, region) = resolve(&config, &SERVICE, None)?;
        assert_eq!(
            endpoint,
            "https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601"
        );
        assert_eq!(region.as_deref(), Some("us-ashburn-1"));

        let config = ClientConfig::default();
        let (_, region) = resolve(&config, &SERVICE, Some("\tuk-london-1\n".into()))?;
        assert_eq!(region.as_deref(), Some("uk-london-1"));
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn resolve_missing() {
        let _e = ScopedEnv::remove(REGION_VAR);
        let config = ClientConfig::default();
        let err = resolve(&config, &SERVICE, None).unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }
}

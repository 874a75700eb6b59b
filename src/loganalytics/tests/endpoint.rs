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


//! Verify how clients compute their endpoint.
//!
//! These tests change the environment, so they must run serially.

#[cfg(test)]
mod endpoint {
    use gaxi::options::REGION_VAR;
    use log_analytics::client::LogAnalytics;
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    type TestResult = anyhow::Result<()>;

    const ASHBURN: &str = "https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601";

    fn credentials(region: Option<&str>) -> auth::credentials::Credentials {
        let builder = auth::credentials::anonymous::Builder::new();
        match region {
            Some(r) => builder.with_region(r).build(),
            None => builder.build(),
        }
    }

    #[tokio::test]
    #[serial]
    async fn from_region() -> TestResult {
        let _e = ScopedEnv::remove(REGION_VAR);
        let client = LogAnalytics::builder()
            .with_region("us-ashburn-1")
            .with_credentials(credentials(None))
            .build()
            .await?;
        assert_eq!(client.endpoint(), Some(ASHBURN));
        assert_eq!(client.region(), Some("us-ashburn-1"));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn region_is_trimmed() -> TestResult {
        let _e = ScopedEnv::remove(REGION_VAR);
        let client = LogAnalytics::builder()
            .with_region(" us-ashburn-1 ")
            .with_credentials(credentials(None))
            .build()
            .await?;
        assert_eq!(client.endpoint(), Some(ASHBURN));
        assert_eq!(client.region(), Some("us-ashburn-1"));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn invalid_region() -> TestResult {
        let _e = ScopedEnv::remove(REGION_VAR);
        let err = LogAnalytics::builder()
            .with_region("evil.example.com/x?")
            .with_credentials(credentials(None))
            .build()
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");

        let mut client = LogAnalytics::builder()
            .with_region("us-ashburn-1")
            .with_credentials(credentials(None))
            .build()
            .await?;
        let err = client.set_region("evil.example.com/x?").unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
        assert_eq!(client.endpoint(), Some(ASHBURN));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn explicit_endpoint_wins() -> TestResult {
        let _e = ScopedEnv::set(REGION_VAR, "eu-frankfurt-1");
        let client = LogAnalytics::builder()
            .with_endpoint("https://test.example.com/")
            .with_region("us-ashburn-1")
            .with_credentials(credentials(Some("us-phoenix-1")))
            .build()
            .await?;
        assert_eq!(client.endpoint(), Some("https://test.example.com/20200601"));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn region_precedence() -> TestResult {
        let _e = ScopedEnv::set(REGION_VAR, "eu-frankfurt-1");
        let client = LogAnalytics::builder()
            .with_region("us-ashburn-1")
            .with_credentials(credentials(Some("us-phoenix-1")))
            .build()
            .await?;
        assert_eq!(client.endpoint(), Some(ASHBURN));

        let client = LogAnalytics::builder()
            .with_credentials(credentials(Some("us-phoenix-1")))
            .build()
            .await?;
        assert_eq!(
            client.endpoint(),
            Some("https://loganalytics.eu-frankfurt-1.oci.oraclecloud.com/20200601")
        );
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn region_from_credentials() -> TestResult {
        let _e = ScopedEnv::remove(REGION_VAR);
        let client = LogAnalytics::builder()
            .with_credentials(credentials(Some("us-phoenix-1")))
            .build()
            .await?;
        assert_eq!(
            client.endpoint(),
            Some("https://loganalytics.us-phoenix-1.oci.oraclecloud.com/20200601")
        );
        assert_eq!(client.region(), Some("us-phoenix-1"));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn no_region() {
        let _e = ScopedEnv::remove(REGION_VAR);
        let err = LogAnalytics::builder()
            .with_credentials(credentials(None))
            .build()
            .await
            .unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }

    #[tokio::test]
    #[serial]
    async fn set_region() -> TestResult {
        let _e = ScopedEnv::remove(REGION_VAR);
        let mut client = LogAnalytics::builder()
            .with_region("us-phoenix-1")
            .with_credentials(credentials(None))
            .build()
            .await?;
        client.set_region("us-ashburn-1")?;
        assert_eq!(client.endpoint(), Some(ASHBURN));
        assert_eq!(client.region(), Some("us-ashburn-1"));

        let err = client.set_region("  ").unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
        assert_eq!(client.endpoint(), Some(ASHBURN));
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn sends_to_explicit_endpoint() -> TestResult {
        use httptest::{Expectation, Server, matchers::*, responders::*};
        let _e = ScopedEnv::remove(REGION_VAR);
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns1/logAnalyticsEntities/e1",
            ))
            .respond_with(json_encoded(serde_json::json!({"id": "e1"}))),
        );
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(credentials(None))
            .build()
            .await?;
        let response = client.get_log_analytics_entity("ns1", "e1").send().await?;
        assert_eq!(response.body().id.as_deref(), Some("e1"));
        Ok(())
    }

    #[tokio::test]
    async fn stub_has_no_endpoint() {
        #[derive(Debug)]
        struct Empty;
        impl log_analytics::stub::LogAnalytics for Empty {}

        let mut client = LogAnalytics::from_stub(Empty);
        assert_eq!(client.endpoint(), None);
        assert_eq!(client.region(), None);
        let err = client.set_region("us-ashburn-1").unwrap_err();
        assert!(err.is_endpoint(), "{err:?}");
    }
}

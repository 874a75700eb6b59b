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


//! Verify the client default retry policy and the per-call overrides.

#[cfg(test)]
mod retry {
    use gax::exponential_backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::{AlwaysRetry, LimitedAttemptCount, RetryPolicyExt};
    use httptest::{Expectation, Server, all_of, cycle, matchers::*, responders::*};
    use log_analytics::client::LogAnalytics;
    use log_analytics::model;
    use serde_json::json;
    use std::time::Duration;

    type TestResult = anyhow::Result<()>;

    const PATH: &str = "/20200601/namespaces/ns1/logAnalyticsEntities/e1";

    fn fast_backoff() -> anyhow::Result<ExponentialBackoff> {
        let backoff = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(2))
            .build()?;
        Ok(backoff)
    }

    async fn client_without_retry(server: &Server) -> anyhow::Result<LogAnalytics> {
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_backoff_policy(fast_backoff()?)
            .build()
            .await?;
        Ok(client)
    }

    async fn client_with_retry(server: &Server) -> anyhow::Result<LogAnalytics> {
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_retry_policy(LimitedAttemptCount::new(3))
            .with_backoff_policy(fast_backoff()?)
            .build()
            .await?;
        Ok(client)
    }

    fn unavailable() -> impl httptest::responders::Responder {
        status_code(503)
            .insert_header("content-type", "application/json")
            .body(json!({"code": "ServiceUnavailable", "message": "try again"}).to_string())
    }

    #[tokio::test]
    async fn no_default_policy_single_attempt() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .times(1)
                .respond_with(unavailable()),
        );
        let client = client_without_retry(&server).await?;
        let err = client.get_log_analytics_entity("ns1", "e1").send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn client_default_policy() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .times(3)
                .respond_with(unavailable()),
        );
        let client = client_with_retry(&server).await?;
        let err = client.get_log_analytics_entity("ns1", "e1").send().await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn exhausted_keeps_last_response() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .times(2)
                .respond_with(
                    status_code(503)
                        .insert_header("content-type", "application/json")
                        .insert_header("opc-request-id", "r1")
                        .body(json!({"code": "ServiceUnavailable", "message": "try again"}).to_string()),
                ),
        );
        let client = client_without_retry(&server).await?;
        let err = client
            .get_log_analytics_entity("ns1", "e1")
            .with_retry_policy(AlwaysRetry.with_attempt_limit(2))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        assert_eq!(err.opc_request_id(), Some("r1"), "{err:?}");
        let status = err.status().expect("service error details");
        assert_eq!(status.code, "ServiceUnavailable");
        assert_eq!(status.message, "try again");
        Ok(())
    }

    #[tokio::test]
    async fn client_default_policy_recovers() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .times(2)
                .respond_with(cycle![
                    unavailable(),
                    json_encoded(json!({"id": "e1"})),
                ]),
        );
        let client = client_with_retry(&server).await?;
        let response = client.get_log_analytics_entity("ns1", "e1").send().await?;
        assert_eq!(response.body().id.as_deref(), Some("e1"));
        Ok(())
    }

    #[tokio::test]
    async fn explicit_none_overrides_default() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .times(1)
                .respond_with(unavailable()),
        );
        let client = client_with_retry(&server).await?;
        let err = client
            .get_log_analytics_entity("ns1", "e1")
            .with_retries_disabled()
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn per_call_policy_overrides_default() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .times(2)
                .respond_with(unavailable()),
        );
        let client = client_with_retry(&server).await?;
        let err = client
            .get_log_analytics_entity("ns1", "e1")
            .with_retry_policy(LimitedAttemptCount::new(2))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn per_call_policy_without_default() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", PATH))
                .times(4)
                .respond_with(unavailable()),
        );
        let client = client_without_retry(&server).await?;
        let err = client
            .get_log_analytics_entity("ns1", "e1")
            .with_retry_policy(AlwaysRetry.with_attempt_limit(4))
            .send()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn non_idempotent_not_retried() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/20200601/namespaces/ns1/logAnalyticsLogGroups/lg1/actions/clean",
            ))
            .times(1)
            .respond_with(unavailable()),
        );
        let client = client_with_retry(&server).await?;
        let err = client.clean("ns1", "lg1").send().await.unwrap_err();
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn explicit_idempotency_enables_retry() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "POST",
                "/20200601/namespaces/ns1/logAnalyticsLogGroups/lg1/actions/clean",
            ))
            .times(3)
            .respond_with(unavailable()),
        );
        let client = client_with_retry(&server).await?;
        let err = client
            .clean("ns1", "lg1")
            .with_idempotency(true)
            .send()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        assert_eq!(err.http_status_code(), Some(503), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn retries_reuse_retry_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns1/logAnalyticsLogGroups"),
                request::headers(contains(("opc-retry-token", "token-1"))),
            ])
            .times(3)
            .respond_with(unavailable()),
        );
        let client = client_with_retry(&server).await?;
        let err = client
            .create_log_analytics_log_group("ns1")
            .set_create_log_analytics_log_group_details(
                model::CreateLogAnalyticsLogGroupDetails::new().set_display_name("g"),
            )
            .set_opc_retry_token("token-1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        Ok(())
    }
}

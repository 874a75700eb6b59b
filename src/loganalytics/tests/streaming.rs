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


//! Verify list operations follow the `opc-next-page` header, export
//! operations stream their payload, and the client logs each attempt.

#[cfg(test)]
mod streaming {
    use futures::TryStreamExt;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use log_analytics::client::LogAnalytics;
    use log_analytics::export::ExportOutput;
    use log_analytics::model;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type TestResult = anyhow::Result<()>;

    const GROUPS: &str = "/20200601/namespaces/ns1/logAnalyticsLogGroups";
    const EXPORT: &str = "/20200601/namespaces/ns1/search/actions/export";

    async fn test_client(server: &Server) -> anyhow::Result<LogAnalytics> {
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn group_page(ids: &[&str]) -> serde_json::Value {
        let items: Vec<_> = ids.iter().map(|id| json!({"id": id})).collect();
        json!({ "items": items })
    }

    #[tokio::test]
    async fn list_follows_next_page() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", GROUPS),
                request::query(url_decoded(not(contains(key("page"))))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("opc-next-page", "token-2")
                    .body(group_page(&["lg1", "lg2"]).to_string()),
            ),
        );
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", GROUPS),
                request::query(url_decoded(contains(("page", "token-2")))),
            ])
            .respond_with(json_encoded(group_page(&["lg3"]))),
        );

        let client = test_client(&server).await?;
        let ids: Vec<_> = client
            .list_log_analytics_log_groups("ns1")
            .set_compartment_id("c1")
            .by_item()
            .map_ok(|g| g.id.unwrap_or_default())
            .try_collect()
            .await?;
        assert_eq!(ids, vec!["lg1", "lg2", "lg3"]);
        Ok(())
    }

    #[tokio::test]
    async fn single_page_exposes_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", GROUPS)).respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("opc-next-page", "token-2")
                    .body(group_page(&["lg1"]).to_string()),
            ),
        );

        let client = test_client(&server).await?;
        let page = client
            .list_log_analytics_log_groups("ns1")
            .set_compartment_id("c1")
            .send()
            .await?
            .into_body();
        assert_eq!(page.next_page, "token-2");
        Ok(())
    }

    fn export_expectation(payload: &'static str) -> Expectation {
        Expectation::matching(all_of![
            request::method_path("POST", EXPORT),
            request::headers(contains(("accept", "application/octet-stream"))),
            request::body(json_decoded(eq(json!({"queryString": "*", "outputFormat": "CSV"})))),
        ])
        .respond_with(
            status_code(200)
                .insert_header("content-type", "application/octet-stream")
                .body(payload),
        )
    }

    fn export_details() -> model::ExportDetails {
        model::ExportDetails::new()
            .set_query_string("*")
            .set_output_format(model::ExportFormat::Csv)
    }

    #[tokio::test]
    async fn export_buffered() -> TestResult {
        let server = Server::run();
        server.expect(export_expectation("a,b\n1,2\n"));

        let client = test_client(&server).await?;
        let response = client
            .export_query_result("ns1")
            .set_export_details(export_details())
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.body().buffered(), Some("a,b\n1,2\n"));
        Ok(())
    }

    #[tokio::test]
    async fn export_to_file() -> TestResult {
        let server = Server::run();
        server.expect(export_expectation("a,b\n1,2\n"));

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("results.csv");
        let client = test_client(&server).await?;
        let output = client
            .export_query_result("ns1")
            .set_export_details(export_details())
            .with_file(&path)
            .send()
            .await?
            .into_body();
        assert_eq!(output, ExportOutput::Delivered { bytes: 8 });
        assert_eq!(std::fs::read_to_string(&path)?, "a,b\n1,2\n");
        Ok(())
    }

    #[tokio::test]
    async fn export_missing_details() -> TestResult {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client.export_query_result("ns1").send().await.unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
        }
    }

    #[tokio::test]
    async fn logs_each_attempt() -> TestResult {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns1/logAnalyticsLogGroups/lg1",
            ))
            .respond_with(json_encoded(json!({"id": "lg1"}))),
        );
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_tracing()
            .build()
            .await?;
        client.get_log_analytics_log_group("ns1", "lg1").send().await?;

        let logs = capture.contents();
        assert!(logs.contains("sending request"), "{logs}");
        assert!(logs.contains("/namespaces/ns1/logAnalyticsLogGroups/lg1"), "{logs}");
        assert!(logs.contains("get_log_analytics_log_group"), "{logs}");
        Ok(())
    }
}

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


//! Verify the client sends the expected HTTP requests.

#[cfg(test)]
mod requests {
    use gax::error::BindingError;
    use httptest::{Expectation, Server, all_of, matchers::*, responders::*};
    use log_analytics::client::LogAnalytics;
    use log_analytics::model;
    use serde_json::json;
    use std::error::Error as _;

    type TestResult = anyhow::Result<()>;

    async fn test_client(server: &Server) -> anyhow::Result<LogAnalytics> {
        let client = LogAnalytics::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .build()
            .await?;
        Ok(client)
    }

    fn binding_error(err: &gax::error::Error) -> Option<&BindingError> {
        err.source().and_then(|e| e.downcast_ref::<BindingError>())
    }

    #[tokio::test]
    async fn get_encodes_path() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path(
                    "GET",
                    "/20200601/namespaces/ns1/logAnalyticsEntities/ocid1.x"
                ),
                request::headers(contains(("accept", "application/json"))),
                request::headers(not(contains(key("opc-retry-token")))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("content-type", "application/json")
                    .insert_header("etag", "etag-123")
                    .insert_header("opc-request-id", "req-abc")
                    .body(json!({"id": "ocid1.x", "name": "host-1", "lifecycleState": "ACTIVE"}).to_string()),
            ),
        );

        let client = test_client(&server).await?;
        let response = client
            .get_log_analytics_entity("ns1", "ocid1.x")
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::OK);
        assert_eq!(response.etag(), Some("etag-123"));
        assert_eq!(
            response.headers().get("opc-request-id").and_then(|v| v.to_str().ok()),
            Some("req-abc")
        );
        let entity = response.into_body();
        assert_eq!(entity.id.as_deref(), Some("ocid1.x"));
        assert_eq!(entity.name.as_deref(), Some("host-1"));
        assert_eq!(entity.lifecycle_state, Some(model::EntityLifecycleStates::Active));
        Ok(())
    }

    #[tokio::test]
    async fn path_parameters_are_escaped() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/my%20ns/logAnalyticsEntities/a%2Fb",
            ))
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        client.get_log_analytics_entity("my ns", "a/b").send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn only_supplied_query_parameters() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20200601/namespaces/ns1/logAnalyticsEntities"),
                request::query(url_decoded(contains(("compartmentId", "c1")))),
                request::query(url_decoded(contains(("lifecycleState", "ACTIVE")))),
                request::query(url_decoded(contains(("sortOrder", "DESC")))),
                request::query(url_decoded(contains(("limit", "10")))),
                request::query(url_decoded(contains(("entityTypeName", "Host")))),
                request::query(url_decoded(contains(("entityTypeName", "Database")))),
                request::query(url_decoded(not(contains(key("name"))))),
                request::query(url_decoded(not(contains(key("page"))))),
                request::query(url_decoded(not(contains(key("hostname"))))),
            ])
            .respond_with(json_encoded(json!({"items": [{"id": "e1"}]}))),
        );

        let client = test_client(&server).await?;
        let response = client
            .list_log_analytics_entities("ns1")
            .set_compartment_id("c1")
            .set_lifecycle_state(model::EntityLifecycleStates::Active)
            .set_sort_order(model::SortOrder::Desc)
            .set_limit(10)
            .set_entity_type_name(["Host", "Database"])
            .send()
            .await?;
        let page = response.into_body();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.next_page, "");
        Ok(())
    }

    #[tokio::test]
    async fn create_sends_body_and_retry_token() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns1/logAnalyticsLogGroups"),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains(key("opc-retry-token"))),
                request::headers(contains(("opc-request-id", "my-request"))),
                request::body(json_decoded(eq(json!({
                    "displayName": "group-1",
                    "compartmentId": "c1",
                })))),
            ])
            .respond_with(json_encoded(json!({"id": "lg1", "displayName": "group-1"}))),
        );

        let client = test_client(&server).await?;
        let group = client
            .create_log_analytics_log_group("ns1")
            .set_create_log_analytics_log_group_details(
                model::CreateLogAnalyticsLogGroupDetails::new()
                    .set_display_name("group-1")
                    .set_compartment_id("c1"),
            )
            .set_opc_request_id("my-request")
            .send()
            .await?
            .into_body();
        assert_eq!(group.id.as_deref(), Some("lg1"));
        Ok(())
    }

    #[tokio::test]
    async fn explicit_retry_token_is_forwarded() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns1/logAnalyticsLogGroups"),
                request::headers(contains(("opc-retry-token", "token-123"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        client
            .create_log_analytics_log_group("ns1")
            .set_create_log_analytics_log_group_details(
                model::CreateLogAnalyticsLogGroupDetails::new().set_display_name("group-1"),
            )
            .set_opc_retry_token("token-123")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn update_sends_if_match() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("PUT", "/20200601/namespaces/ns1/logAnalyticsLogGroups/lg1"),
                request::headers(contains(("if-match", "etag-1"))),
                request::headers(not(contains(key("opc-retry-token")))),
            ])
            .respond_with(json_encoded(json!({"id": "lg1", "description": "updated"}))),
        );

        let client = test_client(&server).await?;
        let group = client
            .update_log_analytics_log_group("ns1", "lg1")
            .set_update_log_analytics_log_group_details(
                model::UpdateLogAnalyticsLogGroupDetails::new().set_description("updated"),
            )
            .set_if_match("etag-1")
            .send()
            .await?
            .into_body();
        assert_eq!(group.description.as_deref(), Some("updated"));
        Ok(())
    }

    #[tokio::test]
    async fn delete_returns_unit() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "DELETE",
                "/20200601/namespaces/ns1/logAnalyticsLogGroups/lg1",
            ))
            .respond_with(status_code(204).insert_header("opc-request-id", "req-del")),
        );

        let client = test_client(&server).await?;
        let response = client
            .delete_log_analytics_log_group("ns1", "lg1")
            .send()
            .await?;
        assert_eq!(response.status(), http::StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers().get("opc-request-id").and_then(|v| v.to_str().ok()),
            Some("req-del")
        );
        Ok(())
    }

    #[tokio::test]
    async fn upload_sends_raw_bytes() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns1/actions/uploadLogFile"),
                request::headers(contains(("content-type", "application/octet-stream"))),
                request::headers(contains(key("opc-retry-token"))),
                request::query(url_decoded(contains(("uploadName", "upload-1")))),
                request::query(url_decoded(contains(("logSourceName", "Linux Syslog Logs")))),
                request::query(url_decoded(contains(("filename", "messages.log")))),
                request::body("line 1\nline 2\n"),
            ])
            .respond_with(json_encoded(json!({"reference": "ref-1", "name": "upload-1"}))),
        );

        let client = test_client(&server).await?;
        let upload = client
            .upload_log_file("ns1")
            .set_upload_name("upload-1")
            .set_log_source_name("Linux Syslog Logs")
            .set_filename("messages.log")
            .set_opc_meta_loggrpid("lg1")
            .set_upload_log_file_body(bytes::Bytes::from_static(b"line 1\nline 2\n"))
            .send()
            .await?
            .into_body();
        assert_eq!(upload.reference.as_deref(), Some("ref-1"));
        Ok(())
    }

    #[tokio::test]
    async fn upload_content_type_override() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20200601/namespaces/ns1/actions/uploadLogFile"),
                request::headers(contains(("content-type", "text/plain"))),
            ])
            .respond_with(json_encoded(json!({}))),
        );

        let client = test_client(&server).await?;
        client
            .upload_log_file("ns1")
            .set_upload_name("upload-1")
            .set_log_source_name("source")
            .set_filename("messages.log")
            .set_opc_meta_loggrpid("lg1")
            .set_content_type("text/plain")
            .set_upload_log_file_body("hello")
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> TestResult {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20200601/namespaces/ns1/logAnalyticsEntities/missing",
            ))
            .respond_with(
                status_code(404)
                    .insert_header("content-type", "application/json")
                    .insert_header("opc-request-id", "req-404")
                    .body(json!({"code": "NotAuthorizedOrNotFound", "message": "not found"}).to_string()),
            ),
        );

        let client = test_client(&server).await?;
        let err = client
            .get_log_analytics_entity("ns1", "missing")
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404), "{err:?}");
        assert_eq!(err.opc_request_id(), Some("req-404"), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_body_is_not_sent() -> TestResult {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .create_log_analytics_log_group("ns1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(
            binding_error(&err),
            Some(&BindingError::MissingParameter {
                operation: "create_log_analytics_log_group",
                parameter: "create_log_analytics_log_group_details",
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn missing_query_parameter_is_not_sent() -> TestResult {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .list_log_analytics_entities("ns1")
            .send()
            .await
            .unwrap_err();
        let binding = binding_error(&err);
        assert!(
            matches!(binding, Some(BindingError::MissingParameter { parameter: "compartment_id", .. })),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn unknown_enum_is_not_sent() -> TestResult {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .list_log_analytics_entities("ns1")
            .set_compartment_id("c1")
            .set_lifecycle_state("SLEEPING")
            .send()
            .await
            .unwrap_err();
        let binding = binding_error(&err);
        assert!(
            matches!(
                binding,
                Some(BindingError::InvalidEnumValue { parameter: "lifecycle_state", value, .. }) if value == "SLEEPING"
            ),
            "{err:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn blank_path_parameter_is_not_sent() -> TestResult {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .get_log_analytics_entity("ns1", "  ")
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            binding_error(&err),
            Some(&BindingError::BlankParameter {
                operation: "get_log_analytics_entity",
                parameter: "log_analytics_entity_id",
            })
        );
        Ok(())
    }

    #[tokio::test]
    async fn presence_checked_before_enums() -> TestResult {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .list_log_analytics_entities("")
            .set_lifecycle_state("SLEEPING")
            .send()
            .await
            .unwrap_err();
        assert!(
            matches!(binding_error(&err), Some(BindingError::MissingParameter { .. })),
            "{err:?}"
        );

        let err = client
            .list_log_analytics_entities("")
            .set_compartment_id("c1")
            .set_lifecycle_state("SLEEPING")
            .send()
            .await
            .unwrap_err();
        assert!(
            matches!(binding_error(&err), Some(BindingError::InvalidEnumValue { .. })),
            "{err:?}"
        );
        Ok(())
    }
}

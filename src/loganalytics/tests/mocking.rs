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


//! Verify applications can mock the client, including list and export
//! operations.

#[cfg(test)]
mod mocking {
    use futures::TryStreamExt;
    use gax::error::{Error, ServiceError};
    use gax::paginator::ItemPaginator;
    use gax::response::Response;
    use log_analytics::client::LogAnalytics;
    use log_analytics::export::{ExportOutput, ExportStream};
    use log_analytics::model;
    use mockall::Sequence;
    use std::sync::{Arc, Mutex};

    type TestResult = anyhow::Result<()>;

    mockall::mock! {
        #[derive(Debug)]
        LogAnalytics {}
        impl log_analytics::stub::LogAnalytics for LogAnalytics {
            async fn get_log_analytics_log_group(&self, req: model::GetLogAnalyticsLogGroupRequest, options: gax::options::RequestOptions) -> gax::Result<Response<model::LogAnalyticsLogGroup>>;
            async fn list_log_analytics_log_groups(&self, req: model::ListLogAnalyticsLogGroupsRequest, options: gax::options::RequestOptions) -> gax::Result<Response<model::LogAnalyticsLogGroupSummaryCollection>>;
            async fn export_query_result(&self, req: model::ExportQueryResultRequest, options: gax::options::RequestOptions) -> gax::Result<Response<ExportStream>>;
        }
    }

    /// The function under test.
    async fn display_name(client: &LogAnalytics, namespace: &str, id: &str) -> gax::Result<String> {
        let group = client
            .get_log_analytics_log_group(namespace, id)
            .send()
            .await?
            .into_body();
        Ok(group.display_name.unwrap_or_default())
    }

    fn page(ids: &[&str], next: &str) -> model::LogAnalyticsLogGroupSummaryCollection {
        model::LogAnalyticsLogGroupSummaryCollection::new()
            .set_items(
                ids.iter()
                    .map(|id| model::LogAnalyticsLogGroupSummary::new().set_id(*id)),
            )
            .set_next_page(next)
    }

    fn export_stream(chunks: &[&'static str]) -> ExportStream {
        let items: Vec<gax::Result<bytes::Bytes>> = chunks
            .iter()
            .map(|c| Ok(bytes::Bytes::from_static(c.as_bytes())))
            .collect();
        Box::pin(futures::stream::iter(items))
    }

    #[tokio::test]
    async fn helper() -> TestResult {
        let mut mock = MockLogAnalytics::new();
        mock.expect_get_log_analytics_log_group()
            .withf(|r, _| r.namespace_name == "ns1" && r.log_analytics_log_group_id == "lg1")
            .return_once(|_, _| {
                Ok(Response::from(
                    model::LogAnalyticsLogGroup::new().set_display_name("group-1"),
                ))
            });
        let client = LogAnalytics::from_stub(mock);
        assert_eq!(display_name(&client, "ns1", "lg1").await?, "group-1");
        Ok(())
    }

    #[tokio::test]
    async fn helper_error() {
        let mut mock = MockLogAnalytics::new();
        mock.expect_get_log_analytics_log_group()
            .return_once(|_, _| Err(Error::service(ServiceError::default().set_code("NotFound"))));
        let client = LogAnalytics::from_stub(mock);
        let err = display_name(&client, "ns1", "lg1").await.unwrap_err();
        assert_eq!(err.status().map(|s| s.code.as_str()), Some("NotFound"), "{err:?}");
    }

    #[tokio::test]
    #[should_panic]
    async fn unimplemented_operation() {
        let client = LogAnalytics::from_stub(MockLogAnalytics::new());
        let _ = client.get_namespace("ns1").send().await;
    }

    #[tokio::test]
    async fn by_page() -> TestResult {
        let mut seq = Sequence::new();
        let mut mock = MockLogAnalytics::new();
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.is_none() && r.compartment_id.as_deref() == Some("c1"))
            .return_once(|_, _| Ok(Response::from(page(&["lg1", "lg2"], "p2"))));
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .withf(|r, _| r.page.as_deref() == Some("p2"))
            .return_once(|_, _| Ok(Response::from(page(&["lg3"], ""))));

        let client = LogAnalytics::from_stub(mock);
        let mut pages = client
            .list_log_analytics_log_groups("ns1")
            .set_compartment_id("c1")
            .by_page();
        let mut counts = Vec::new();
        while let Some(p) = pages.next().await {
            counts.push(p?.items.len());
        }
        assert_eq!(counts, vec![2, 1]);
        Ok(())
    }

    #[tokio::test]
    async fn by_item() -> TestResult {
        let mut seq = Sequence::new();
        let mut mock = MockLogAnalytics::new();
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["lg1"], "p2"))));
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&[], "p3"))));
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["lg2", "lg3"], ""))));

        let client = LogAnalytics::from_stub(mock);
        let items: Vec<model::LogAnalyticsLogGroupSummary> = client
            .list_log_analytics_log_groups("ns1")
            .set_compartment_id("c1")
            .by_item()
            .try_collect()
            .await?;
        let ids: Vec<_> = items.into_iter().filter_map(|i| i.id).collect();
        assert_eq!(ids, vec!["lg1", "lg2", "lg3"]);
        Ok(())
    }

    #[tokio::test]
    async fn by_item_error() {
        let mut seq = Sequence::new();
        let mut mock = MockLogAnalytics::new();
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(Response::from(page(&["lg1"], "p2"))));
        mock.expect_list_log_analytics_log_groups()
            .once()
            .in_sequence(&mut seq)
            .return_once(|_, _| Err(Error::io("connection reset")));

        let client = LogAnalytics::from_stub(mock);
        let mut items = client
            .list_log_analytics_log_groups("ns1")
            .set_compartment_id("c1")
            .by_item();
        let first = items.next().await;
        assert!(matches!(first, Some(Ok(ref i)) if i.id.as_deref() == Some("lg1")), "{first:?}");
        let second = items.next().await;
        assert!(matches!(second, Some(Err(ref e)) if e.is_io()), "{second:?}");
    }

    #[tokio::test]
    async fn export_buffered() -> TestResult {
        let mut mock = MockLogAnalytics::new();
        mock.expect_export_query_result()
            .withf(|r, _| r.namespace_name == "ns1" && r.export_details.is_some())
            .return_once(|_, _| Ok(Response::from(export_stream(&["a,b\n", "1,2\n"]))));

        let client = LogAnalytics::from_stub(mock);
        let output = client
            .export_query_result("ns1")
            .set_export_details(
                model::ExportDetails::new().set_query_string("'Log Source' = 'Linux Syslog Logs'"),
            )
            .send()
            .await?
            .into_body();
        assert_eq!(output, ExportOutput::Buffered("a,b\n1,2\n".to_string()));
        Ok(())
    }

    #[tokio::test]
    async fn export_callback() -> TestResult {
        let mut mock = MockLogAnalytics::new();
        mock.expect_export_query_result()
            .return_once(|_, _| Ok(Response::from(export_stream(&["abc", "def"]))));

        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();
        let client = LogAnalytics::from_stub(mock);
        let output = client
            .export_query_result("ns1")
            .set_export_details(model::ExportDetails::new())
            .with_callback(move |chunk| sink.lock().unwrap().extend_from_slice(&chunk))
            .with_file("/should/not/be/used")
            .send()
            .await?
            .into_body();
        assert_eq!(output, ExportOutput::Delivered { bytes: 6 });
        assert_eq!(received.lock().unwrap().as_slice(), b"abcdef");
        Ok(())
    }

    #[tokio::test]
    async fn export_file() -> TestResult {
        let mut mock = MockLogAnalytics::new();
        mock.expect_export_query_result()
            .return_once(|_, _| Ok(Response::from(export_stream(&["{\"rows\":", "[]}"]))));

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("results.json");
        let client = LogAnalytics::from_stub(mock);
        let output = client
            .export_query_result("ns1")
            .set_export_details(model::ExportDetails::new())
            .with_file(&path)
            .send()
            .await?
            .into_body();
        assert_eq!(output.len(), 11);
        assert_eq!(std::fs::read_to_string(&path)?, "{\"rows\":[]}");
        Ok(())
    }

    #[tokio::test]
    async fn export_writer() -> TestResult {
        let mut mock = MockLogAnalytics::new();
        mock.expect_export_query_result()
            .return_once(|_, _| Ok(Response::from(export_stream(&["x", "y", "z"]))));

        let (writer, mut reader) = tokio::io::duplex(16);
        let client = LogAnalytics::from_stub(mock);
        let output = client
            .export_query_result("ns1")
            .set_export_details(model::ExportDetails::new())
            .with_writer(writer)
            .send()
            .await?
            .into_body();
        assert_eq!(output, ExportOutput::Delivered { bytes: 3 });
        let mut got = String::new();
        tokio::io::AsyncReadExt::read_to_string(&mut reader, &mut got).await?;
        assert_eq!(got, "xyz");
        Ok(())
    }

    #[test]
    fn clients_and_builders_are_send() {
        static_assertions::assert_impl_all!(LogAnalytics: Send, Sync, Clone, std::fmt::Debug);
        static_assertions::assert_impl_all!(
            log_analytics::builder::log_analytics::ListLogAnalyticsLogGroups: Send, Sync, Clone
        );
        static_assertions::assert_impl_all!(
            log_analytics::builder::log_analytics::ExportQueryResult: Send, std::fmt::Debug
        );
        static_assertions::assert_impl_all!(
            ItemPaginator<model::LogAnalyticsLogGroupSummaryCollection, Error>: Send
        );
    }
}

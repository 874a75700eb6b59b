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

use crate::Result;
use gaxi::http::{
    IF_MATCH, NoBody, OPC_NEXT_PAGE, OPC_REQUEST_ID, OPC_RETRY_TOKEN, header_string,
    new_retry_token,
};
use gaxi::path_parameter::{encode, non_blank, required};
use gaxi::query_parameter::{QueryParameter, check_enum};

const OCTET_STREAM: &str = "application/octet-stream";

/// Implements [LogAnalytics](super::stub::LogAnalytics) using a [gaxi::http::ReqwestClient].
#[derive(Clone)]
pub struct LogAnalytics {
    inner: gaxi::http::ReqwestClient,
}

impl std::fmt::Debug for LogAnalytics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        f.debug_struct("LogAnalytics")
            .field("inner", &self.inner)
            .finish()
    }
}

impl LogAnalytics {
    pub async fn new(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = gaxi::http::ReqwestClient::new(config, crate::SERVICE_ENDPOINT).await?;
        Ok(Self { inner })
    }

    pub fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }

    pub fn region(&self) -> Option<&str> {
        self.inner.region()
    }

    pub fn set_region(&mut self, region: &str) -> gax::client_builder::Result<()> {
        self.inner.set_region(region)
    }
}

impl super::stub::LogAnalytics for LogAnalytics {
    async fn add_entity_association(
        &self,
        req: crate::model::AddEntityAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "add_entity_association",
            "add_entity_association_details",
            req.add_entity_association_details,
        )?;
        non_blank("add_entity_association", "namespace_name", &req.namespace_name)?;
        non_blank(
            "add_entity_association",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}/actions/addEntityAssociations",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn add_source_event_types(
        &self,
        req: crate::model::AddSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "add_source_event_types",
            "event_type_details",
            req.event_type_details,
        )?;
        non_blank("add_source_event_types", "namespace_name", &req.namespace_name)?;
        non_blank("add_source_event_types", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/actions/addEventTypes",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn append_lookup_data(
        &self,
        req: crate::model::AppendLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "append_lookup_data",
            "append_lookup_file_body",
            req.append_lookup_file_body,
        )?;
        non_blank("append_lookup_data", "namespace_name", &req.namespace_name)?;
        non_blank("append_lookup_data", "lookup_name", &req.lookup_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/lookups/{}/actions/appendData",
            encode(&req.namespace_name),
            encode(&req.lookup_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.is_force.add(builder, "isForce");
        let builder = req.char_encoding.add(builder, "charEncoding");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        let builder = with_header(builder, "expect", req.expect);
        let builder = builder.header(reqwest::header::CONTENT_TYPE, OCTET_STREAM);
        let builder = builder.body(body);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn assign_encryption_key(
        &self,
        req: crate::model::AssignEncryptionKeyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "assign_encryption_key",
            "assign_encryption_key_details",
            req.assign_encryption_key_details,
        )?;
        non_blank("assign_encryption_key", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/assignEncryptionKey",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn batch_get_basic_info(
        &self,
        req: crate::model::BatchGetBasicInfoRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
        let body = required("batch_get_basic_info", "label_names", req.label_names)?;
        let is_include_deleted = required(
            "batch_get_basic_info",
            "is_include_deleted",
            req.is_include_deleted,
        )?;
        if let Some(v) = &req.basic_label_sort_by {
            check_enum("batch_get_basic_info", "basic_label_sort_by", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("batch_get_basic_info", "sort_order", v)?;
        }
        non_blank("batch_get_basic_info", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/labels/actions/basicInfo", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = is_include_deleted.add(builder, "isIncludeDeleted");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req
            .basic_label_sort_by
            .as_ref()
            .map(|v| v.name())
            .add(builder, "basicLabelSortBy");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsLabelCollection> =
            self.inner.execute(builder, Some(body), options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn cancel_query_work_request(
        &self,
        req: crate::model::CancelQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("cancel_query_work_request", "namespace_name", &req.namespace_name)?;
        non_blank("cancel_query_work_request", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/queryWorkRequests/{}",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn change_ingest_time_rule_compartment(
        &self,
        req: crate::model::ChangeIngestTimeRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "change_ingest_time_rule_compartment",
            "change_ingest_time_rule_compartment_details",
            req.change_ingest_time_rule_compartment_details,
        )?;
        non_blank("change_ingest_time_rule_compartment", "namespace_name", &req.namespace_name)?;
        non_blank(
            "change_ingest_time_rule_compartment",
            "ingest_time_rule_id",
            &req.ingest_time_rule_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/ingestTimeRules/{}/actions/changeCompartment",
            encode(&req.namespace_name),
            encode(&req.ingest_time_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn change_log_analytics_entity_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsEntityCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "change_log_analytics_entity_compartment",
            "change_log_analytics_entity_compartment_details",
            req.change_log_analytics_entity_compartment_details,
        )?;
        non_blank(
            "change_log_analytics_entity_compartment",
            "namespace_name",
            &req.namespace_name,
        )?;
        non_blank(
            "change_log_analytics_entity_compartment",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}/actions/changeCompartment",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn change_log_analytics_log_group_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "change_log_analytics_log_group_compartment",
            "change_log_analytics_log_group_compartment_details",
            req.change_log_analytics_log_group_compartment_details,
        )?;
        non_blank(
            "change_log_analytics_log_group_compartment",
            "namespace_name",
            &req.namespace_name,
        )?;
        non_blank(
            "change_log_analytics_log_group_compartment",
            "log_analytics_log_group_id",
            &req.log_analytics_log_group_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsLogGroups/{}/actions/changeCompartment",
            encode(&req.namespace_name),
            encode(&req.log_analytics_log_group_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn change_log_analytics_object_collection_rule_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "change_log_analytics_object_collection_rule_compartment",
            "change_log_analytics_object_collection_rule_compartment_details",
            req.change_log_analytics_object_collection_rule_compartment_details,
        )?;
        non_blank(
            "change_log_analytics_object_collection_rule_compartment",
            "namespace_name",
            &req.namespace_name,
        )?;
        non_blank(
            "change_log_analytics_object_collection_rule_compartment",
            "log_analytics_object_collection_rule_id",
            &req.log_analytics_object_collection_rule_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsObjectCollectionRules/{}/actions/changeCompartment",
            encode(&req.namespace_name),
            encode(&req.log_analytics_object_collection_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn change_scheduled_task_compartment(
        &self,
        req: crate::model::ChangeScheduledTaskCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "change_scheduled_task_compartment",
            "change_scheduled_task_compartment_details",
            req.change_scheduled_task_compartment_details,
        )?;
        non_blank("change_scheduled_task_compartment", "namespace_name", &req.namespace_name)?;
        non_blank(
            "change_scheduled_task_compartment",
            "scheduled_task_id",
            &req.scheduled_task_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}/actions/changeCompartment",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn clean(
        &self,
        req: crate::model::CleanRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("clean", "namespace_name", &req.namespace_name)?;
        non_blank("clean", "log_analytics_log_group_id", &req.log_analytics_log_group_id)?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{}/logAnalyticsLogGroups/{}/actions/clean",
            encode(&req.namespace_name),
            encode(&req.log_analytics_log_group_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.time_start.add(builder, "timeStart");
        let builder = req.time_end.add(builder, "timeEnd");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn compare_content(
        &self,
        req: crate::model::CompareContentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CompareContentResult>> {
        let body = required(
            "compare_content",
            "compare_content_details",
            req.compare_content_details,
        )?;
        non_blank("compare_content", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/actions/compareContent", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn create_ingest_time_rule(
        &self,
        req: crate::model::CreateIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        let body = required(
            "create_ingest_time_rule",
            "create_ingest_time_rule_details",
            req.create_ingest_time_rule_details,
        )?;
        non_blank("create_ingest_time_rule", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/ingestTimeRules", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn create_log_analytics_entity(
        &self,
        req: crate::model::CreateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        let body = required(
            "create_log_analytics_entity",
            "create_log_analytics_entity_details",
            req.create_log_analytics_entity_details,
        )?;
        non_blank("create_log_analytics_entity", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/logAnalyticsEntities", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn create_log_analytics_entity_type(
        &self,
        req: crate::model::CreateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "create_log_analytics_entity_type",
            "create_log_analytics_entity_type_details",
            req.create_log_analytics_entity_type_details,
        )?;
        non_blank("create_log_analytics_entity_type", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/logAnalyticsEntityTypes", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn create_log_analytics_log_group(
        &self,
        req: crate::model::CreateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        let body = required(
            "create_log_analytics_log_group",
            "create_log_analytics_log_group_details",
            req.create_log_analytics_log_group_details,
        )?;
        non_blank("create_log_analytics_log_group", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/logAnalyticsLogGroups", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn create_log_analytics_object_collection_rule(
        &self,
        req: crate::model::CreateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        let body = required(
            "create_log_analytics_object_collection_rule",
            "create_log_analytics_object_collection_rule_details",
            req.create_log_analytics_object_collection_rule_details,
        )?;
        non_blank(
            "create_log_analytics_object_collection_rule",
            "namespace_name",
            &req.namespace_name,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsObjectCollectionRules",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn create_scheduled_task(
        &self,
        req: crate::model::CreateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        let body = required(
            "create_scheduled_task",
            "create_scheduled_task_details",
            req.create_scheduled_task_details,
        )?;
        non_blank("create_scheduled_task", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/scheduledTasks", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn delete_associations(
        &self,
        req: crate::model::DeleteAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "delete_associations",
            "delete_log_analytics_association_details",
            req.delete_log_analytics_association_details,
        )?;
        non_blank("delete_associations", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/associations/actions/delete",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn delete_field(
        &self,
        req: crate::model::DeleteFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_field", "namespace_name", &req.namespace_name)?;
        non_blank("delete_field", "field_name", &req.field_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/fields/{}",
            encode(&req.namespace_name),
            encode(&req.field_name),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_ingest_time_rule(
        &self,
        req: crate::model::DeleteIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_ingest_time_rule", "namespace_name", &req.namespace_name)?;
        non_blank("delete_ingest_time_rule", "ingest_time_rule_id", &req.ingest_time_rule_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/ingestTimeRules/{}",
            encode(&req.namespace_name),
            encode(&req.ingest_time_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_label", "namespace_name", &req.namespace_name)?;
        non_blank("delete_label", "label_name", &req.label_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/labels/{}",
            encode(&req.namespace_name),
            encode(&req.label_name),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_log_analytics_entity(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_log_analytics_entity", "namespace_name", &req.namespace_name)?;
        non_blank(
            "delete_log_analytics_entity",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = req.is_force_delete.add(builder, "isForceDelete");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_log_analytics_entity_type(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_log_analytics_entity_type", "namespace_name", &req.namespace_name)?;
        non_blank("delete_log_analytics_entity_type", "entity_type_name", &req.entity_type_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntityTypes/{}",
            encode(&req.namespace_name),
            encode(&req.entity_type_name),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_log_analytics_log_group(
        &self,
        req: crate::model::DeleteLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_log_analytics_log_group", "namespace_name", &req.namespace_name)?;
        non_blank(
            "delete_log_analytics_log_group",
            "log_analytics_log_group_id",
            &req.log_analytics_log_group_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsLogGroups/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_log_group_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_log_analytics_object_collection_rule(
        &self,
        req: crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank(
            "delete_log_analytics_object_collection_rule",
            "namespace_name",
            &req.namespace_name,
        )?;
        non_blank(
            "delete_log_analytics_object_collection_rule",
            "log_analytics_object_collection_rule_id",
            &req.log_analytics_object_collection_rule_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsObjectCollectionRules/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_object_collection_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_lookup(
        &self,
        req: crate::model::DeleteLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_lookup", "namespace_name", &req.namespace_name)?;
        non_blank("delete_lookup", "lookup_name", &req.lookup_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/lookups/{}",
            encode(&req.namespace_name),
            encode(&req.lookup_name),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = req.is_force.add(builder, "isForce");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_parser(
        &self,
        req: crate::model::DeleteParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_parser", "namespace_name", &req.namespace_name)?;
        non_blank("delete_parser", "parser_name", &req.parser_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/parsers/{}",
            encode(&req.namespace_name),
            encode(&req.parser_name),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = req.is_ignore_used_sources.add(builder, "isIgnoreUsedSources");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_scheduled_task(
        &self,
        req: crate::model::DeleteScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_scheduled_task", "namespace_name", &req.namespace_name)?;
        non_blank("delete_scheduled_task", "scheduled_task_id", &req.scheduled_task_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_source(
        &self,
        req: crate::model::DeleteSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_source", "namespace_name", &req.namespace_name)?;
        non_blank("delete_source", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_upload(
        &self,
        req: crate::model::DeleteUploadRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_upload", "namespace_name", &req.namespace_name)?;
        non_blank("delete_upload", "upload_reference", &req.upload_reference)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/uploads/{}",
            encode(&req.namespace_name),
            encode(&req.upload_reference),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_upload_file(
        &self,
        req: crate::model::DeleteUploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_upload_file", "namespace_name", &req.namespace_name)?;
        non_blank("delete_upload_file", "upload_reference", &req.upload_reference)?;
        non_blank("delete_upload_file", "file_reference", &req.file_reference)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/uploads/{}/files/{}",
            encode(&req.namespace_name),
            encode(&req.upload_reference),
            encode(&req.file_reference),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn delete_upload_warning(
        &self,
        req: crate::model::DeleteUploadWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("delete_upload_warning", "namespace_name", &req.namespace_name)?;
        non_blank("delete_upload_warning", "upload_reference", &req.upload_reference)?;
        non_blank("delete_upload_warning", "warning_reference", &req.warning_reference)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/uploads/{}/warnings/{}",
            encode(&req.namespace_name),
            encode(&req.upload_reference),
            encode(&req.warning_reference),
        );
        let builder = self.inner.builder(reqwest::Method::DELETE, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn disable_archiving(
        &self,
        req: crate::model::DisableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Success>> {
        non_blank("disable_archiving", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/disableArchiving",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn disable_auto_association(
        &self,
        req: crate::model::DisableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "disable_auto_association",
            "disable_auto_association_details",
            req.disable_auto_association_details,
        )?;
        non_blank("disable_auto_association", "namespace_name", &req.namespace_name)?;
        non_blank("disable_auto_association", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/actions/disableAutoAssociation",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn disable_ingest_time_rule(
        &self,
        req: crate::model::DisableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("disable_ingest_time_rule", "namespace_name", &req.namespace_name)?;
        non_blank("disable_ingest_time_rule", "ingest_time_rule_id", &req.ingest_time_rule_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/ingestTimeRules/{}/actions/disableIngestTimeRule",
            encode(&req.namespace_name),
            encode(&req.ingest_time_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn disable_source_event_types(
        &self,
        req: crate::model::DisableSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "disable_source_event_types",
            "event_type_details",
            req.event_type_details,
        )?;
        non_blank("disable_source_event_types", "namespace_name", &req.namespace_name)?;
        non_blank("disable_source_event_types", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/actions/disableEventTypes",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn enable_archiving(
        &self,
        req: crate::model::EnableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Success>> {
        non_blank("enable_archiving", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/enableArchiving",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn enable_auto_association(
        &self,
        req: crate::model::EnableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "enable_auto_association",
            "enable_auto_association_details",
            req.enable_auto_association_details,
        )?;
        non_blank("enable_auto_association", "namespace_name", &req.namespace_name)?;
        non_blank("enable_auto_association", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/actions/enableAutoAssociation",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn enable_ingest_time_rule(
        &self,
        req: crate::model::EnableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("enable_ingest_time_rule", "namespace_name", &req.namespace_name)?;
        non_blank("enable_ingest_time_rule", "ingest_time_rule_id", &req.ingest_time_rule_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/ingestTimeRules/{}/actions/enableIngestTimeRule",
            encode(&req.namespace_name),
            encode(&req.ingest_time_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn enable_source_event_types(
        &self,
        req: crate::model::EnableSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "enable_source_event_types",
            "event_type_details",
            req.event_type_details,
        )?;
        non_blank("enable_source_event_types", "namespace_name", &req.namespace_name)?;
        non_blank("enable_source_event_types", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/actions/enableEventTypes",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn estimate_purge_data_size(
        &self,
        req: crate::model::EstimatePurgeDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>> {
        let body = required(
            "estimate_purge_data_size",
            "estimate_purge_data_size_details",
            req.estimate_purge_data_size_details,
        )?;
        non_blank("estimate_purge_data_size", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/estimatePurgeDataSize",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn estimate_recall_data_size(
        &self,
        req: crate::model::EstimateRecallDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>> {
        let body = required(
            "estimate_recall_data_size",
            "estimate_recall_data_size_details",
            req.estimate_recall_data_size_details,
        )?;
        non_blank("estimate_recall_data_size", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/estimateRecallDataSize",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn estimate_release_data_size(
        &self,
        req: crate::model::EstimateReleaseDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EstimateReleaseDataSizeResult>> {
        let body = required(
            "estimate_release_data_size",
            "estimate_release_data_size_details",
            req.estimate_release_data_size_details,
        )?;
        non_blank("estimate_release_data_size", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/estimateReleaseDataSize",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn export_custom_content(
        &self,
        req: crate::model::ExportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::export::ExportStream>> {
        let body = required("export_custom_content", "export_content", req.export_content)?;
        non_blank("export_custom_content", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/contents/actions/exportContent",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/octet-stream");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_streaming(builder, Some(body), options).await
    }

    async fn export_query_result(
        &self,
        req: crate::model::ExportQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::export::ExportStream>> {
        let body = required("export_query_result", "export_details", req.export_details)?;
        non_blank("export_query_result", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/search/actions/export", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/octet-stream");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_streaming(builder, Some(body), options).await
    }

    async fn extract_structured_log_field_paths(
        &self,
        req: crate::model::ExtractStructuredLogFieldPathsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ExtractLogFieldResults>> {
        let body = required(
            "extract_structured_log_field_paths",
            "log_analytics_parser",
            req.log_analytics_parser,
        )?;
        if let Some(v) = &req.parser_type {
            check_enum("extract_structured_log_field_paths", "parser_type", v)?;
        }
        non_blank("extract_structured_log_field_paths", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/parsers/actions/extractLogFieldPaths",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.parser_type.as_ref().map(|v| v.name()).add(builder, "parserType");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn extract_structured_log_header_paths(
        &self,
        req: crate::model::ExtractStructuredLogHeaderPathsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ExtractLogHeaderResults>> {
        let body = required(
            "extract_structured_log_header_paths",
            "log_analytics_parser",
            req.log_analytics_parser,
        )?;
        if let Some(v) = &req.parser_type {
            check_enum("extract_structured_log_header_paths", "parser_type", v)?;
        }
        non_blank("extract_structured_log_header_paths", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/parsers/actions/extractLogHeaderPaths",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.parser_type.as_ref().map(|v| v.name()).add(builder, "parserType");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn filter(
        &self,
        req: crate::model::FilterRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FilterOutput>> {
        let body = required("filter", "filter_details", req.filter_details)?;
        non_blank("filter", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/search/actions/filter", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn get_association_summary(
        &self,
        req: crate::model::GetAssociationSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AssociationSummaryReport>> {
        let compartment_id = required(
            "get_association_summary",
            "compartment_id",
            req.compartment_id,
        )?;
        non_blank("get_association_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/associationSummary", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_category(
        &self,
        req: crate::model::GetCategoryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategory>> {
        non_blank("get_category", "namespace_name", &req.namespace_name)?;
        non_blank("get_category", "category_name", &req.category_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/categories/{}",
            encode(&req.namespace_name),
            encode(&req.category_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_column_names(
        &self,
        req: crate::model::GetColumnNamesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ColumnNameCollection>> {
        let sql_query = required("get_column_names", "sql_query", req.sql_query)?;
        non_blank("get_column_names", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/search/actions/columnNames",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = sql_query.add(builder, "sqlQuery");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::ColumnNameCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn get_config_work_request(
        &self,
        req: crate::model::GetConfigWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsConfigWorkRequest>> {
        non_blank("get_config_work_request", "namespace_name", &req.namespace_name)?;
        non_blank("get_config_work_request", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/configWorkRequests/{}",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_field(
        &self,
        req: crate::model::GetFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        non_blank("get_field", "namespace_name", &req.namespace_name)?;
        non_blank("get_field", "field_name", &req.field_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/fields/{}",
            encode(&req.namespace_name),
            encode(&req.field_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_fields_summary(
        &self,
        req: crate::model::GetFieldsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FieldSummaryReport>> {
        non_blank("get_fields_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/fieldSummary", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_show_detail.add(builder, "isShowDetail");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_ingest_time_rule(
        &self,
        req: crate::model::GetIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
        non_blank("get_ingest_time_rule", "namespace_name", &req.namespace_name)?;
        non_blank("get_ingest_time_rule", "ingest_time_rule_id", &req.ingest_time_rule_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/ingestTimeRules/{}",
            encode(&req.namespace_name),
            encode(&req.ingest_time_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        non_blank("get_label", "namespace_name", &req.namespace_name)?;
        non_blank("get_label", "label_name", &req.label_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/labels/{}",
            encode(&req.namespace_name),
            encode(&req.label_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_label_summary(
        &self,
        req: crate::model::GetLabelSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelSummaryReport>> {
        non_blank("get_label_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/labelSummary", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_log_analytics_entities_summary(
        &self,
        req: crate::model::GetLogAnalyticsEntitiesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>> {
        let compartment_id = required(
            "get_log_analytics_entities_summary",
            "compartment_id",
            req.compartment_id,
        )?;
        non_blank("get_log_analytics_entities_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntitiesSummary",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_log_analytics_entity(
        &self,
        req: crate::model::GetLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        non_blank("get_log_analytics_entity", "namespace_name", &req.namespace_name)?;
        non_blank(
            "get_log_analytics_entity",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_log_analytics_entity_type(
        &self,
        req: crate::model::GetLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityType>> {
        non_blank("get_log_analytics_entity_type", "namespace_name", &req.namespace_name)?;
        non_blank("get_log_analytics_entity_type", "entity_type_name", &req.entity_type_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntityTypes/{}",
            encode(&req.namespace_name),
            encode(&req.entity_type_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_log_analytics_log_group(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        non_blank("get_log_analytics_log_group", "namespace_name", &req.namespace_name)?;
        non_blank(
            "get_log_analytics_log_group",
            "log_analytics_log_group_id",
            &req.log_analytics_log_group_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsLogGroups/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_log_group_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_log_analytics_log_groups_summary(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogGroupSummaryReport>> {
        let compartment_id = required(
            "get_log_analytics_log_groups_summary",
            "compartment_id",
            req.compartment_id,
        )?;
        non_blank("get_log_analytics_log_groups_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsLogGroupsSummary",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_log_analytics_object_collection_rule(
        &self,
        req: crate::model::GetLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        non_blank(
            "get_log_analytics_object_collection_rule",
            "namespace_name",
            &req.namespace_name,
        )?;
        non_blank(
            "get_log_analytics_object_collection_rule",
            "log_analytics_object_collection_rule_id",
            &req.log_analytics_object_collection_rule_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsObjectCollectionRules/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_object_collection_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_log_sets_count(
        &self,
        req: crate::model::GetLogSetsCountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogSetsCount>> {
        non_blank("get_log_sets_count", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage/logSetsCount", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_lookup(
        &self,
        req: crate::model::GetLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        non_blank("get_lookup", "namespace_name", &req.namespace_name)?;
        non_blank("get_lookup", "lookup_name", &req.lookup_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/lookups/{}",
            encode(&req.namespace_name),
            encode(&req.lookup_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_lookup_summary(
        &self,
        req: crate::model::GetLookupSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LookupSummaryReport>> {
        non_blank("get_lookup_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/lookupSummary", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Namespace>> {
        non_blank("get_namespace", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_parser(
        &self,
        req: crate::model::GetParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        non_blank("get_parser", "namespace_name", &req.namespace_name)?;
        non_blank("get_parser", "parser_name", &req.parser_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/parsers/{}",
            encode(&req.namespace_name),
            encode(&req.parser_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_parser_summary(
        &self,
        req: crate::model::GetParserSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParserSummaryReport>> {
        non_blank("get_parser_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/parsersSummary", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_preferences(
        &self,
        req: crate::model::GetPreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("get_preferences", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("get_preferences", "sort_by", v)?;
        }
        non_blank("get_preferences", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/preferences", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsPreferenceCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn get_query_result(
        &self,
        req: crate::model::GetQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
        let work_request_id = required("get_query_result", "work_request_id", req.work_request_id)?;
        if let Some(v) = &req.output_mode {
            check_enum("get_query_result", "output_mode", v)?;
        }
        non_blank("get_query_result", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/search/actions/query", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = work_request_id.add(builder, "workRequestId");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.should_include_columns.add(builder, "shouldIncludeColumns");
        let builder = req.should_include_fields.add(builder, "shouldIncludeFields");
        let builder = req.output_mode.as_ref().map(|v| v.name()).add(builder, "outputMode");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_query_work_request(
        &self,
        req: crate::model::GetQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWorkRequest>> {
        non_blank("get_query_work_request", "namespace_name", &req.namespace_name)?;
        non_blank("get_query_work_request", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/queryWorkRequests/{}",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_recall_count(
        &self,
        req: crate::model::GetRecallCountRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecallCount>> {
        non_blank("get_recall_count", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage/recallCount", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_recalled_data_size(
        &self,
        req: crate::model::GetRecalledDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecalledDataSize>> {
        non_blank("get_recalled_data_size", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage/recalledDataSize", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.time_data_started.add(builder, "timeDataStarted");
        let builder = req.time_data_ended.add(builder, "timeDataEnded");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_rules_summary(
        &self,
        req: crate::model::GetRulesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RuleSummaryReport>> {
        let compartment_id = required("get_rules_summary", "compartment_id", req.compartment_id)?;
        non_blank("get_rules_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/rulesSummary", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_scheduled_task(
        &self,
        req: crate::model::GetScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        non_blank("get_scheduled_task", "namespace_name", &req.namespace_name)?;
        non_blank("get_scheduled_task", "scheduled_task_id", &req.scheduled_task_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_source(
        &self,
        req: crate::model::GetSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        let compartment_id = required("get_source", "compartment_id", req.compartment_id)?;
        non_blank("get_source", "namespace_name", &req.namespace_name)?;
        non_blank("get_source", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_source_summary(
        &self,
        req: crate::model::GetSourceSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SourceSummaryReport>> {
        non_blank("get_source_summary", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sourcesSummary", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_storage(
        &self,
        req: crate::model::GetStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Storage>> {
        non_blank("get_storage", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_storage_usage(
        &self,
        req: crate::model::GetStorageUsageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageUsage>> {
        non_blank("get_storage_usage", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage/usage", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_storage_work_request(
        &self,
        req: crate::model::GetStorageWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageWorkRequest>> {
        non_blank("get_storage_work_request", "namespace_name", &req.namespace_name)?;
        non_blank("get_storage_work_request", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storageWorkRequests/{}",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_unprocessed_data_bucket(
        &self,
        req: crate::model::GetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        non_blank("get_unprocessed_data_bucket", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/unprocessedDataBucket",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_upload(
        &self,
        req: crate::model::GetUploadRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Upload>> {
        non_blank("get_upload", "namespace_name", &req.namespace_name)?;
        non_blank("get_upload", "upload_reference", &req.upload_reference)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/uploads/{}",
            encode(&req.namespace_name),
            encode(&req.upload_reference),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn get_work_request(
        &self,
        req: crate::model::GetWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WorkRequest>> {
        non_blank("get_work_request", "namespace_name", &req.namespace_name)?;
        non_blank("get_work_request", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/workRequests/{}",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn import_custom_content(
        &self,
        req: crate::model::ImportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CustomContentSummary>> {
        let body = required(
            "import_custom_content",
            "import_custom_content_file_body",
            req.import_custom_content_file_body,
        )?;
        non_blank("import_custom_content", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/contents/actions/importCustomContent",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.is_overwrite.add(builder, "isOverwrite");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        let builder = with_header(builder, "expect", req.expect);
        let builder = builder.header(reqwest::header::CONTENT_TYPE, OCTET_STREAM);
        let builder = builder.body(body);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn list_associable_entities(
        &self,
        req: crate::model::ListAssociableEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AssociableEntityCollection>> {
        let compartment_id = required(
            "list_associable_entities",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.r#type {
            check_enum("list_associable_entities", "type", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_associable_entities", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_associable_entities", "sort_by", v)?;
        }
        non_blank("list_associable_entities", "namespace_name", &req.namespace_name)?;
        non_blank("list_associable_entities", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/associableEntities",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.r#type.as_ref().map(|v| v.name()).add(builder, "type");
        let builder = req.search_text.add(builder, "searchText");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::AssociableEntityCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_associated_entities(
        &self,
        req: crate::model::ListAssociatedEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociatedEntityCollection>> {
        let compartment_id = required(
            "list_associated_entities",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.sort_order {
            check_enum("list_associated_entities", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_associated_entities", "sort_by", v)?;
        }
        non_blank("list_associated_entities", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/associatedEntities", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.entity_id.add(builder, "entityId");
        let builder = req.entity_type.add(builder, "entityType");
        let builder = req.entity_type_display_name.add(builder, "entityTypeDisplayName");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsAssociatedEntityCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_auto_associations(
        &self,
        req: crate::model::ListAutoAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::AutoAssociationCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_auto_associations", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_auto_associations", "sort_by", v)?;
        }
        non_blank("list_auto_associations", "namespace_name", &req.namespace_name)?;
        non_blank("list_auto_associations", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/autoAssociations",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::AutoAssociationCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_categories(
        &self,
        req: crate::model::ListCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategoryCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_categories", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_categories", "sort_by", v)?;
        }
        non_blank("list_categories", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/categories", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.category_display_text.add(builder, "categoryDisplayText");
        let builder = req.category_type.add(builder, "categoryType");
        let builder = req.name.add(builder, "name");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsCategoryCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_config_work_requests(
        &self,
        req: crate::model::ListConfigWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsConfigWorkRequestCollection>> {
        let compartment_id = required(
            "list_config_work_requests",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.sort_order {
            check_enum("list_config_work_requests", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_config_work_requests", "sort_by", v)?;
        }
        non_blank("list_config_work_requests", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/configWorkRequests", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsConfigWorkRequestCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_effective_properties(
        &self,
        req: crate::model::ListEffectivePropertiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EffectivePropertyCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_effective_properties", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_effective_properties", "sort_by", v)?;
        }
        non_blank("list_effective_properties", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/effectiveProperties", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.agent_id.add(builder, "agentId");
        let builder = req.source_name.add(builder, "sourceName");
        let builder = req.is_include_patterns.add(builder, "isIncludePatterns");
        let builder = req.entity_id.add(builder, "entityId");
        let builder = req.pattern_id.add(builder, "patternId");
        let builder = req.name.add(builder, "name");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::EffectivePropertyCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_encryption_key_info(
        &self,
        req: crate::model::ListEncryptionKeyInfoRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EncryptionKeyInfoCollection>> {
        non_blank("list_encryption_key_info", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/encryptionKeyInfo", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::EncryptionKeyInfoCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_entity_associations(
        &self,
        req: crate::model::ListEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        if let Some(v) = &req.direct_or_all_associations {
            check_enum("list_entity_associations", "direct_or_all_associations", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_entity_associations", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_entity_associations", "sort_by", v)?;
        }
        non_blank("list_entity_associations", "namespace_name", &req.namespace_name)?;
        non_blank(
            "list_entity_associations",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}/actions/associations",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req
            .direct_or_all_associations
            .as_ref()
            .map(|v| v.name())
            .add(builder, "directOrAllAssociations");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsEntityCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_entity_source_associations(
        &self,
        req: crate::model::ListEntitySourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        let compartment_id = required(
            "list_entity_source_associations",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.life_cycle_state {
            check_enum("list_entity_source_associations", "life_cycle_state", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_entity_source_associations", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_entity_source_associations", "sort_by", v)?;
        }
        non_blank("list_entity_source_associations", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/entityAssociations", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.entity_id.add(builder, "entityId");
        let builder = req.entity_type.add(builder, "entityType");
        let builder = req.entity_type_display_name.add(builder, "entityTypeDisplayName");
        let builder = req
            .life_cycle_state
            .as_ref()
            .map(|v| v.name())
            .add(builder, "lifeCycleState");
        let builder = req.is_show_total.add(builder, "isShowTotal");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsAssociationCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_fields(
        &self,
        req: crate::model::ListFieldsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>> {
        if let Some(v) = &req.parser_type {
            check_enum("list_fields", "parser_type", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_fields", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_fields", "sort_by", v)?;
        }
        non_blank("list_fields", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/fields", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_match_all.add(builder, "isMatchAll");
        let builder = req.source_ids.add(builder, "sourceIds");
        let builder = req.source_names.add(builder, "sourceNames");
        let builder = req.parser_type.as_ref().map(|v| v.name()).add(builder, "parserType");
        let builder = req.parser_ids.add(builder, "parserIds");
        let builder = req.parser_names.add(builder, "parserNames");
        let builder = req.is_include_parser.add(builder, "isIncludeParser");
        let builder = req.filter.add(builder, "filter");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsFieldCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_ingest_time_rules(
        &self,
        req: crate::model::ListIngestTimeRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>> {
        let compartment_id = required(
            "list_ingest_time_rules",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.lifecycle_state {
            check_enum("list_ingest_time_rules", "lifecycle_state", v)?;
        }
        if let Some(v) = &req.condition_kind {
            check_enum("list_ingest_time_rules", "condition_kind", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_ingest_time_rules", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_ingest_time_rules", "sort_by", v)?;
        }
        non_blank("list_ingest_time_rules", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/ingestTimeRules", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.display_name.add(builder, "displayName");
        let builder = req.lifecycle_state.as_ref().map(|v| v.name()).add(builder, "lifecycleState");
        let builder = req.condition_kind.as_ref().map(|v| v.name()).add(builder, "conditionKind");
        let builder = req.field_name.add(builder, "fieldName");
        let builder = req.field_value.add(builder, "fieldValue");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::IngestTimeRuleSummaryCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_label_priorities(
        &self,
        req: crate::model::ListLabelPrioritiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelPriorityCollection>> {
        non_blank("list_label_priorities", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/labelPriorities", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LabelPriorityCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_label_source_details(
        &self,
        req: crate::model::ListLabelSourceDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LabelSourceCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_label_source_details", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_label_source_details", "sort_by", v)?;
        }
        non_blank("list_label_source_details", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/labelSourceDetails", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.label_name.add(builder, "labelName");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LabelSourceCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
        if let Some(v) = &req.is_system {
            check_enum("list_labels", "is_system", v)?;
        }
        if let Some(v) = &req.label_priority {
            check_enum("list_labels", "label_priority", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_labels", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_labels", "sort_by", v)?;
        }
        if let Some(v) = &req.label_type {
            check_enum("list_labels", "label_type", v)?;
        }
        non_blank("list_labels", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/labels", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.label_name.add(builder, "labelName");
        let builder = req.label_display_text.add(builder, "labelDisplayText");
        let builder = req.is_system.as_ref().map(|v| v.name()).add(builder, "isSystem");
        let builder = req.label_priority.as_ref().map(|v| v.name()).add(builder, "labelPriority");
        let builder = req.is_count_pop.add(builder, "isCountPop");
        let builder = req.is_alias_pop.add(builder, "isAliasPop");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = req.label_type.as_ref().map(|v| v.name()).add(builder, "labelType");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsLabelCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_log_analytics_entities(
        &self,
        req: crate::model::ListLogAnalyticsEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        let compartment_id = required(
            "list_log_analytics_entities",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.lifecycle_state {
            check_enum("list_log_analytics_entities", "lifecycle_state", v)?;
        }
        if let Some(v) = &req.is_management_agent_id_null {
            check_enum("list_log_analytics_entities", "is_management_agent_id_null", v)?;
        }
        for v in &req.creation_source_type {
            check_enum("list_log_analytics_entities", "creation_source_type", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_log_analytics_entities", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_log_analytics_entities", "sort_by", v)?;
        }
        non_blank("list_log_analytics_entities", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/logAnalyticsEntities", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.name.add(builder, "name");
        let builder = req.name_contains.add(builder, "nameContains");
        let builder = req.entity_type_name.add(builder, "entityTypeName");
        let builder = req.cloud_resource_id.add(builder, "cloudResourceId");
        let builder = req.lifecycle_state.as_ref().map(|v| v.name()).add(builder, "lifecycleState");
        let builder = req.lifecycle_details_contains.add(builder, "lifecycleDetailsContains");
        let builder = req
            .is_management_agent_id_null
            .as_ref()
            .map(|v| v.name())
            .add(builder, "isManagementAgentIdNull");
        let builder = req.hostname.add(builder, "hostname");
        let builder = req.hostname_contains.add(builder, "hostnameContains");
        let builder = req.source_id.add(builder, "sourceId");
        let builder = req
            .creation_source_type
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .add(builder, "creationSourceType");
        let builder = req.creation_source_details.add(builder, "creationSourceDetails");
        let builder = req
            .is_show_associated_sources_count
            .add(builder, "isShowAssociatedSourcesCount");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsEntityCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_log_analytics_entity_topology(
        &self,
        req: crate::model::ListLogAnalyticsEntityTopologyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>> {
        if let Some(v) = &req.lifecycle_state {
            check_enum("list_log_analytics_entity_topology", "lifecycle_state", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_log_analytics_entity_topology", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_log_analytics_entity_topology", "sort_by", v)?;
        }
        non_blank("list_log_analytics_entity_topology", "namespace_name", &req.namespace_name)?;
        non_blank(
            "list_log_analytics_entity_topology",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}/actions/topology",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.lifecycle_state.as_ref().map(|v| v.name()).add(builder, "lifecycleState");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_log_analytics_entity_types(
        &self,
        req: crate::model::ListLogAnalyticsEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>> {
        if let Some(v) = &req.cloud_type {
            check_enum("list_log_analytics_entity_types", "cloud_type", v)?;
        }
        if let Some(v) = &req.lifecycle_state {
            check_enum("list_log_analytics_entity_types", "lifecycle_state", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_log_analytics_entity_types", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_log_analytics_entity_types", "sort_by", v)?;
        }
        non_blank("list_log_analytics_entity_types", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/logAnalyticsEntityTypes", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.name.add(builder, "name");
        let builder = req.name_contains.add(builder, "nameContains");
        let builder = req.cloud_type.as_ref().map(|v| v.name()).add(builder, "cloudType");
        let builder = req.lifecycle_state.as_ref().map(|v| v.name()).add(builder, "lifecycleState");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_log_analytics_log_groups(
        &self,
        req: crate::model::ListLogAnalyticsLogGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>> {
        let compartment_id = required(
            "list_log_analytics_log_groups",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.sort_order {
            check_enum("list_log_analytics_log_groups", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_log_analytics_log_groups", "sort_by", v)?;
        }
        non_blank("list_log_analytics_log_groups", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/logAnalyticsLogGroups", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.display_name.add(builder, "displayName");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_log_analytics_object_collection_rules(
        &self,
        req: crate::model::ListLogAnalyticsObjectCollectionRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>> {
        let compartment_id = required(
            "list_log_analytics_object_collection_rules",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.lifecycle_state {
            check_enum("list_log_analytics_object_collection_rules", "lifecycle_state", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_log_analytics_object_collection_rules", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_log_analytics_object_collection_rules", "sort_by", v)?;
        }
        non_blank(
            "list_log_analytics_object_collection_rules",
            "namespace_name",
            &req.namespace_name,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsObjectCollectionRules",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.name.add(builder, "name");
        let builder = req.lifecycle_state.as_ref().map(|v| v.name()).add(builder, "lifecycleState");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_log_sets(
        &self,
        req: crate::model::ListLogSetsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogSetCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_log_sets", "sort_order", v)?;
        }
        non_blank("list_log_sets", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage/logSets", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogSetCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_lookups(
        &self,
        req: crate::model::ListLookupsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>> {
        let r#type = required("list_lookups", "type", req.r#type)?;
        check_enum("list_lookups", "type", &r#type)?;
        if let Some(v) = &req.is_system {
            check_enum("list_lookups", "is_system", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_lookups", "sort_by", v)?;
        }
        if let Some(v) = &req.status {
            check_enum("list_lookups", "status", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_lookups", "sort_order", v)?;
        }
        non_blank("list_lookups", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/lookups", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = r#type.name().add(builder, "type");
        let builder = req.lookup_display_text.add(builder, "lookupDisplayText");
        let builder = req.is_system.as_ref().map(|v| v.name()).add(builder, "isSystem");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = req.status.as_ref().map(|v| v.name()).add(builder, "status");
        let builder = req.categories.add(builder, "categories");
        let builder = req.is_hide_special.add(builder, "isHideSpecial");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsLookupCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_meta_source_types(
        &self,
        req: crate::model::ListMetaSourceTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_meta_source_types", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_meta_source_types", "sort_by", v)?;
        }
        non_blank("list_meta_source_types", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sourceMetaTypes", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::NamespaceCollection>> {
        let compartment_id = required("list_namespaces", "compartment_id", req.compartment_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = "/namespaces".to_string();
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::NamespaceCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_overlapping_recalls(
        &self,
        req: crate::model::ListOverlappingRecallsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::OverlappingRecallCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_overlapping_recalls", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_overlapping_recalls", "sort_by", v)?;
        }
        non_blank("list_overlapping_recalls", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/overlappingRecalls",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.time_data_started.add(builder, "timeDataStarted");
        let builder = req.time_data_ended.add(builder, "timeDataEnded");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::OverlappingRecallCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_parser_functions(
        &self,
        req: crate::model::ListParserFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_parser_functions", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_parser_functions", "sort_by", v)?;
        }
        non_blank("list_parser_functions", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/parserFunctions", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.parser_name.add(builder, "parserName");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_parser_meta_plugins(
        &self,
        req: crate::model::ListParserMetaPluginsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_parser_meta_plugins", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_parser_meta_plugins", "sort_by", v)?;
        }
        non_blank("list_parser_meta_plugins", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/parserMetaPlugins", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_parsers(
        &self,
        req: crate::model::ListParsersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>> {
        if let Some(v) = &req.parser_type {
            check_enum("list_parsers", "parser_type", v)?;
        }
        if let Some(v) = &req.is_system {
            check_enum("list_parsers", "is_system", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_parsers", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_parsers", "sort_by", v)?;
        }
        non_blank("list_parsers", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/parsers", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_match_all.add(builder, "isMatchAll");
        let builder = req.source_type.add(builder, "sourceType");
        let builder = req.parser_name.add(builder, "parserName");
        let builder = req.parser_display_text.add(builder, "parserDisplayText");
        let builder = req.parser_type.as_ref().map(|v| v.name()).add(builder, "parserType");
        let builder = req.categories.add(builder, "categories");
        let builder = req.is_system.as_ref().map(|v| v.name()).add(builder, "isSystem");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsParserCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_properties_metadata(
        &self,
        req: crate::model::ListPropertiesMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::PropertyMetadataSummaryCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_properties_metadata", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_properties_metadata", "sort_by", v)?;
        }
        non_blank("list_properties_metadata", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/propertiesMetadata", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.name.add(builder, "name");
        let builder = req.display_text.add(builder, "displayText");
        let builder = req.level.add(builder, "level");
        let builder = req.constraints.add(builder, "constraints");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::PropertyMetadataSummaryCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_query_work_requests(
        &self,
        req: crate::model::ListQueryWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWorkRequestCollection>> {
        let compartment_id = required(
            "list_query_work_requests",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.mode {
            check_enum("list_query_work_requests", "mode", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_query_work_requests", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_query_work_requests", "sort_by", v)?;
        }
        non_blank("list_query_work_requests", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/queryWorkRequests", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.mode.as_ref().map(|v| v.name()).add(builder, "mode");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::QueryWorkRequestCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_recalled_data(
        &self,
        req: crate::model::ListRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RecalledDataCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_recalled_data", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_recalled_data", "sort_by", v)?;
        }
        non_blank("list_recalled_data", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage/recalledData", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req
            .time_data_started_greater_than_or_equal
            .add(builder, "timeDataStartedGreaterThanOrEqual");
        let builder = req.time_data_ended_less_than.add(builder, "timeDataEndedLessThan");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::RecalledDataCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_resource_categories(
        &self,
        req: crate::model::ListResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_resource_categories", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_resource_categories", "sort_by", v)?;
        }
        non_blank("list_resource_categories", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/categories/resourceCategories",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.categories.add(builder, "categories");
        let builder = req.resource_types.add(builder, "resourceTypes");
        let builder = req.resource_ids.add(builder, "resourceIds");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_rules(
        &self,
        req: crate::model::ListRulesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::RuleSummaryCollection>> {
        let compartment_id = required("list_rules", "compartment_id", req.compartment_id)?;
        if let Some(v) = &req.kind {
            check_enum("list_rules", "kind", v)?;
        }
        if let Some(v) = &req.lifecycle_state {
            check_enum("list_rules", "lifecycle_state", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_rules", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_rules", "sort_by", v)?;
        }
        non_blank("list_rules", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/rules", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.display_name.add(builder, "displayName");
        let builder = req.kind.as_ref().map(|v| v.name()).add(builder, "kind");
        let builder = req.target_service.add(builder, "targetService");
        let builder = req.lifecycle_state.as_ref().map(|v| v.name()).add(builder, "lifecycleState");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::RuleSummaryCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_scheduled_tasks(
        &self,
        req: crate::model::ListScheduledTasksRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTaskCollection>> {
        let task_type = required("list_scheduled_tasks", "task_type", req.task_type)?;
        let compartment_id = required(
            "list_scheduled_tasks",
            "compartment_id",
            req.compartment_id,
        )?;
        check_enum("list_scheduled_tasks", "task_type", &task_type)?;
        if let Some(v) = &req.sort_order {
            check_enum("list_scheduled_tasks", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_scheduled_tasks", "sort_by", v)?;
        }
        non_blank("list_scheduled_tasks", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/scheduledTasks", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = task_type.name().add(builder, "taskType");
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.display_name.add(builder, "displayName");
        let builder = req.target_service.add(builder, "targetService");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::ScheduledTaskCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_source_associations(
        &self,
        req: crate::model::ListSourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        let source_name = required("list_source_associations", "source_name", req.source_name)?;
        let compartment_id = required(
            "list_source_associations",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.life_cycle_state {
            check_enum("list_source_associations", "life_cycle_state", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_source_associations", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_source_associations", "sort_by", v)?;
        }
        non_blank("list_source_associations", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sourceAssociations", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = source_name.add(builder, "sourceName");
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.entity_id.add(builder, "entityId");
        let builder = req
            .life_cycle_state
            .as_ref()
            .map(|v| v.name())
            .add(builder, "lifeCycleState");
        let builder = req.is_show_total.add(builder, "isShowTotal");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsAssociationCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_source_event_types(
        &self,
        req: crate::model::ListSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::EventTypeCollection>> {
        if let Some(v) = &req.is_system {
            check_enum("list_source_event_types", "is_system", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_source_event_types", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_source_event_types", "sort_by", v)?;
        }
        non_blank("list_source_event_types", "namespace_name", &req.namespace_name)?;
        non_blank("list_source_event_types", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/eventTypes",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.display_text.add(builder, "displayText");
        let builder = req.is_system.as_ref().map(|v| v.name()).add(builder, "isSystem");
        let builder = req.is_enabled.add(builder, "isEnabled");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::EventTypeCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_source_extended_field_definitions(
        &self,
        req: crate::model::ListSourceExtendedFieldDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<
        gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection>,
    > {
        if let Some(v) = &req.sort_order {
            check_enum("list_source_extended_field_definitions", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_source_extended_field_definitions", "sort_by", v)?;
        }
        non_blank("list_source_extended_field_definitions", "namespace_name", &req.namespace_name)?;
        non_blank("list_source_extended_field_definitions", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/extendedFieldDefinitions",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_source_label_operators(
        &self,
        req: crate::model::ListSourceLabelOperatorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_source_label_operators", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_source_label_operators", "sort_by", v)?;
        }
        non_blank("list_source_label_operators", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sourceLabelOperators", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_source_meta_functions(
        &self,
        req: crate::model::ListSourceMetaFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsMetaFunctionCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_source_meta_functions", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_source_meta_functions", "sort_by", v)?;
        }
        non_blank("list_source_meta_functions", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sourceMetaFunctions", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsMetaFunctionCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_source_patterns(
        &self,
        req: crate::model::ListSourcePatternsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_source_patterns", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_source_patterns", "sort_by", v)?;
        }
        non_blank("list_source_patterns", "namespace_name", &req.namespace_name)?;
        non_blank("list_source_patterns", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/patterns",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.is_include.add(builder, "isInclude");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_sources(
        &self,
        req: crate::model::ListSourcesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>> {
        let compartment_id = required("list_sources", "compartment_id", req.compartment_id)?;
        if let Some(v) = &req.is_system {
            check_enum("list_sources", "is_system", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_sources", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_sources", "sort_by", v)?;
        }
        non_blank("list_sources", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sources", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.entity_type.add(builder, "entityType");
        let builder = req.source_display_text.add(builder, "sourceDisplayText");
        let builder = req.is_system.as_ref().map(|v| v.name()).add(builder, "isSystem");
        let builder = req.is_auto_associated.add(builder, "isAutoAssociated");
        let builder = req.name.add(builder, "name");
        let builder = req.categories.add(builder, "categories");
        let builder = req.is_simplified.add(builder, "isSimplified");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsSourceCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_storage_work_request_errors(
        &self,
        req: crate::model::ListStorageWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
        if let Some(v) = &req.sort_order {
            check_enum("list_storage_work_request_errors", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_storage_work_request_errors", "sort_by", v)?;
        }
        non_blank("list_storage_work_request_errors", "namespace_name", &req.namespace_name)?;
        non_blank("list_storage_work_request_errors", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storageWorkRequests/{}/errors",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::WorkRequestErrorCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_storage_work_requests(
        &self,
        req: crate::model::ListStorageWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::StorageWorkRequestCollection>> {
        let compartment_id = required(
            "list_storage_work_requests",
            "compartment_id",
            req.compartment_id,
        )?;
        if let Some(v) = &req.operation_type {
            check_enum("list_storage_work_requests", "operation_type", v)?;
        }
        if let Some(v) = &req.status {
            check_enum("list_storage_work_requests", "status", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_storage_work_requests", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_storage_work_requests", "sort_by", v)?;
        }
        non_blank("list_storage_work_requests", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storageWorkRequests", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.operation_type.as_ref().map(|v| v.name()).add(builder, "operationType");
        let builder = req.status.as_ref().map(|v| v.name()).add(builder, "status");
        let builder = req.time_started.add(builder, "timeStarted");
        let builder = req.time_finished.add(builder, "timeFinished");
        let builder = req.policy_name.add(builder, "policyName");
        let builder = req.policy_id.add(builder, "policyId");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::StorageWorkRequestCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_supported_char_encodings(
        &self,
        req: crate::model::ListSupportedCharEncodingsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::CharEncodingCollection>> {
        non_blank("list_supported_char_encodings", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/supportedCharEncodings", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::CharEncodingCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_supported_timezones(
        &self,
        req: crate::model::ListSupportedTimezonesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::TimezoneCollection>> {
        non_blank("list_supported_timezones", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/supportedTimezones", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::TimezoneCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_upload_files(
        &self,
        req: crate::model::ListUploadFilesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadFileCollection>> {
        for v in &req.status {
            check_enum("list_upload_files", "status", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_upload_files", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_upload_files", "sort_by", v)?;
        }
        non_blank("list_upload_files", "namespace_name", &req.namespace_name)?;
        non_blank("list_upload_files", "upload_reference", &req.upload_reference)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/uploads/{}/files",
            encode(&req.namespace_name),
            encode(&req.upload_reference),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.search_str.add(builder, "searchStr");
        let builder = req
            .status
            .iter()
            .map(|v| v.name())
            .collect::<Vec<_>>()
            .add(builder, "status");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::UploadFileCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_upload_warnings(
        &self,
        req: crate::model::ListUploadWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadWarningCollection>> {
        non_blank("list_upload_warnings", "namespace_name", &req.namespace_name)?;
        non_blank("list_upload_warnings", "upload_reference", &req.upload_reference)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/uploads/{}/warnings",
            encode(&req.namespace_name),
            encode(&req.upload_reference),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::UploadWarningCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_uploads(
        &self,
        req: crate::model::ListUploadsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UploadCollection>> {
        if let Some(v) = &req.warnings_filter {
            check_enum("list_uploads", "warnings_filter", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_uploads", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_uploads", "sort_by", v)?;
        }
        non_blank("list_uploads", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/uploads", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.name.add(builder, "name");
        let builder = req.name_contains.add(builder, "nameContains");
        let builder = req.warnings_filter.as_ref().map(|v| v.name()).add(builder, "warningsFilter");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::UploadCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_warnings(
        &self,
        req: crate::model::ListWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsWarningCollection>> {
        let compartment_id = required("list_warnings", "compartment_id", req.compartment_id)?;
        if let Some(v) = &req.warning_state {
            check_enum("list_warnings", "warning_state", v)?;
        }
        if let Some(v) = &req.sort_order {
            check_enum("list_warnings", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("list_warnings", "sort_by", v)?;
        }
        non_blank("list_warnings", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/warnings", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.warning_state.as_ref().map(|v| v.name()).add(builder, "warningState");
        let builder = req.source_name.add(builder, "sourceName");
        let builder = req.source_pattern.add(builder, "sourcePattern");
        let builder = req.warning_message.add(builder, "warningMessage");
        let builder = req.entity_name.add(builder, "entityName");
        let builder = req.entity_type.add(builder, "entityType");
        let builder = req.warning_type.add(builder, "warningType");
        let builder = req.is_no_source.add(builder, "isNoSource");
        let builder = req.start_time.add(builder, "startTime");
        let builder = req.end_time.add(builder, "endTime");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsWarningCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_work_request_errors(
        &self,
        req: crate::model::ListWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
        non_blank("list_work_request_errors", "namespace_name", &req.namespace_name)?;
        non_blank("list_work_request_errors", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/workRequests/{}/errors",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::WorkRequestErrorCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_work_request_logs(
        &self,
        req: crate::model::ListWorkRequestLogsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WorkRequestLogCollection>> {
        non_blank("list_work_request_logs", "namespace_name", &req.namespace_name)?;
        non_blank("list_work_request_logs", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/workRequests/{}/logs",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::WorkRequestLogCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn list_work_requests(
        &self,
        req: crate::model::ListWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::WorkRequestCollection>> {
        let compartment_id = required("list_work_requests", "compartment_id", req.compartment_id)?;
        non_blank("list_work_requests", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/workRequests", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::GET, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::WorkRequestCollection> =
            self.inner.execute(builder, None::<NoBody>, options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn offboard_namespace(
        &self,
        req: crate::model::OffboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("offboard_namespace", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{}/actions/offboard", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn onboard_namespace(
        &self,
        req: crate::model::OnboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        non_blank("onboard_namespace", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{}/actions/onboard", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn parse_query(
        &self,
        req: crate::model::ParseQueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParseQueryOutput>> {
        let body = required("parse_query", "parse_query_details", req.parse_query_details)?;
        non_blank("parse_query", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/search/actions/parse", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn pause_scheduled_task(
        &self,
        req: crate::model::PauseScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        non_blank("pause_scheduled_task", "namespace_name", &req.namespace_name)?;
        non_blank("pause_scheduled_task", "scheduled_task_id", &req.scheduled_task_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}/actions/pause",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn purge_storage_data(
        &self,
        req: crate::model::PurgeStorageDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "purge_storage_data",
            "purge_storage_data_details",
            req.purge_storage_data_details,
        )?;
        non_blank("purge_storage_data", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage/actions/purgeData", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn put_query_work_request_background(
        &self,
        req: crate::model::PutQueryWorkRequestBackgroundRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryWorkRequest>> {
        non_blank("put_query_work_request_background", "namespace_name", &req.namespace_name)?;
        non_blank("put_query_work_request_background", "work_request_id", &req.work_request_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/queryWorkRequests/{}/actions/background",
            encode(&req.namespace_name),
            encode(&req.work_request_id),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn query(
        &self,
        req: crate::model::QueryRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
        let body = required("query", "query_details", req.query_details)?;
        non_blank("query", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/search/actions/query", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn recall_archived_data(
        &self,
        req: crate::model::RecallArchivedDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "recall_archived_data",
            "recall_archived_data_details",
            req.recall_archived_data_details,
        )?;
        non_blank("recall_archived_data", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/recallArchivedData",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn register_lookup(
        &self,
        req: crate::model::RegisterLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        let body = required(
            "register_lookup",
            "register_lookup_content_file_body",
            req.register_lookup_content_file_body,
        )?;
        let r#type = required("register_lookup", "type", req.r#type)?;
        check_enum("register_lookup", "type", &r#type)?;
        non_blank("register_lookup", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/lookups/actions/register", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = r#type.name().add(builder, "type");
        let builder = req.name.add(builder, "name");
        let builder = req.description.add(builder, "description");
        let builder = req.char_encoding.add(builder, "charEncoding");
        let builder = req.is_hidden.add(builder, "isHidden");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, "expect", req.expect);
        let builder = builder.header(reqwest::header::CONTENT_TYPE, OCTET_STREAM);
        let builder = builder.body(body);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn release_recalled_data(
        &self,
        req: crate::model::ReleaseRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "release_recalled_data",
            "release_recalled_data_details",
            req.release_recalled_data_details,
        )?;
        non_blank("release_recalled_data", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/storage/actions/releaseRecalledData",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn remove_entity_associations(
        &self,
        req: crate::model::RemoveEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "remove_entity_associations",
            "remove_entity_associations_details",
            req.remove_entity_associations_details,
        )?;
        non_blank("remove_entity_associations", "namespace_name", &req.namespace_name)?;
        non_blank(
            "remove_entity_associations",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}/actions/removeEntityAssociations",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn remove_preferences(
        &self,
        req: crate::model::RemovePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "remove_preferences",
            "log_analytics_preference_details",
            req.log_analytics_preference_details,
        )?;
        non_blank("remove_preferences", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/preferences/actions/removePreferences",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn remove_resource_categories(
        &self,
        req: crate::model::RemoveResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "remove_resource_categories",
            "remove_resource_categories_details",
            req.remove_resource_categories_details,
        )?;
        non_blank("remove_resource_categories", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/categories/actions/removeResourceCategories",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn remove_source_event_types(
        &self,
        req: crate::model::RemoveSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "remove_source_event_types",
            "event_type_details",
            req.event_type_details,
        )?;
        non_blank("remove_source_event_types", "namespace_name", &req.namespace_name)?;
        non_blank("remove_source_event_types", "source_name", &req.source_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/{}/actions/removeEventTypes",
            encode(&req.namespace_name),
            encode(&req.source_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn resume_scheduled_task(
        &self,
        req: crate::model::ResumeScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        non_blank("resume_scheduled_task", "namespace_name", &req.namespace_name)?;
        non_blank("resume_scheduled_task", "scheduled_task_id", &req.scheduled_task_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}/actions/resume",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn run(
        &self,
        req: crate::model::RunRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        if let Some(v) = &req.r#type {
            check_enum("run", "type", v)?;
        }
        non_blank("run", "namespace_name", &req.namespace_name)?;
        non_blank("run", "scheduled_task_id", &req.scheduled_task_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}/actions/run",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.r#type.as_ref().map(|v| v.name()).add(builder, "type");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn set_unprocessed_data_bucket(
        &self,
        req: crate::model::SetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        let bucket_name = required("set_unprocessed_data_bucket", "bucket_name", req.bucket_name)?;
        non_blank("set_unprocessed_data_bucket", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{}/storage/actions/setUnprocessedDataBucket",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = bucket_name.add(builder, "bucketName");
        let builder = req.is_enabled.add(builder, "isEnabled");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn suggest(
        &self,
        req: crate::model::SuggestRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SuggestOutput>> {
        let body = required("suggest", "suggest_details", req.suggest_details)?;
        non_blank("suggest", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/search/actions/suggest", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn suppress_warning(
        &self,
        req: crate::model::SuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "suppress_warning",
            "warning_reference_details",
            req.warning_reference_details,
        )?;
        let compartment_id = required("suppress_warning", "compartment_id", req.compartment_id)?;
        non_blank("suppress_warning", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!("/namespaces/{}/warnings/actions/suppress", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn test_parser(
        &self,
        req: crate::model::TestParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ParserTestResult>> {
        let body = required(
            "test_parser",
            "test_parser_payload_details",
            req.test_parser_payload_details,
        )?;
        if let Some(v) = &req.scope {
            check_enum("test_parser", "scope", v)?;
        }
        non_blank("test_parser", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/parsers/actions/test", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.scope.as_ref().map(|v| v.name()).add(builder, "scope");
        let builder = req.req_origin_module.add(builder, "reqOriginModule");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn unsuppress_warning(
        &self,
        req: crate::model::UnsuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "unsuppress_warning",
            "warning_reference_details",
            req.warning_reference_details,
        )?;
        let compartment_id = required("unsuppress_warning", "compartment_id", req.compartment_id)?;
        non_blank("unsuppress_warning", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, false);
        let path = format!(
            "/namespaces/{}/warnings/actions/unsuppress",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = compartment_id.add(builder, "compartmentId");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn update_log_analytics_entity(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        let body = required(
            "update_log_analytics_entity",
            "update_log_analytics_entity_details",
            req.update_log_analytics_entity_details,
        )?;
        non_blank("update_log_analytics_entity", "namespace_name", &req.namespace_name)?;
        non_blank(
            "update_log_analytics_entity",
            "log_analytics_entity_id",
            &req.log_analytics_entity_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntities/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_entity_id),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn update_log_analytics_entity_type(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "update_log_analytics_entity_type",
            "update_log_analytics_entity_type_details",
            req.update_log_analytics_entity_type_details,
        )?;
        non_blank("update_log_analytics_entity_type", "namespace_name", &req.namespace_name)?;
        non_blank("update_log_analytics_entity_type", "entity_type_name", &req.entity_type_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsEntityTypes/{}",
            encode(&req.namespace_name),
            encode(&req.entity_type_name),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn update_log_analytics_log_group(
        &self,
        req: crate::model::UpdateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        let body = required(
            "update_log_analytics_log_group",
            "update_log_analytics_log_group_details",
            req.update_log_analytics_log_group_details,
        )?;
        non_blank("update_log_analytics_log_group", "namespace_name", &req.namespace_name)?;
        non_blank(
            "update_log_analytics_log_group",
            "log_analytics_log_group_id",
            &req.log_analytics_log_group_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsLogGroups/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_log_group_id),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn update_log_analytics_object_collection_rule(
        &self,
        req: crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        let body = required(
            "update_log_analytics_object_collection_rule",
            "update_log_analytics_object_collection_rule_details",
            req.update_log_analytics_object_collection_rule_details,
        )?;
        non_blank(
            "update_log_analytics_object_collection_rule",
            "namespace_name",
            &req.namespace_name,
        )?;
        non_blank(
            "update_log_analytics_object_collection_rule",
            "log_analytics_object_collection_rule_id",
            &req.log_analytics_object_collection_rule_id,
        )?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/logAnalyticsObjectCollectionRules/{}",
            encode(&req.namespace_name),
            encode(&req.log_analytics_object_collection_rule_id),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn update_lookup(
        &self,
        req: crate::model::UpdateLookupRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        let body = required(
            "update_lookup",
            "update_lookup_metadata_details",
            req.update_lookup_metadata_details,
        )?;
        non_blank("update_lookup", "namespace_name", &req.namespace_name)?;
        non_blank("update_lookup", "lookup_name", &req.lookup_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/lookups/{}",
            encode(&req.namespace_name),
            encode(&req.lookup_name),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn update_lookup_data(
        &self,
        req: crate::model::UpdateLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "update_lookup_data",
            "update_lookup_file_body",
            req.update_lookup_file_body,
        )?;
        non_blank("update_lookup_data", "namespace_name", &req.namespace_name)?;
        non_blank("update_lookup_data", "lookup_name", &req.lookup_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/lookups/{}/actions/updateData",
            encode(&req.namespace_name),
            encode(&req.lookup_name),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = req.is_force.add(builder, "isForce");
        let builder = req.char_encoding.add(builder, "charEncoding");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        let builder = with_header(builder, "expect", req.expect);
        let builder = builder.header(reqwest::header::CONTENT_TYPE, OCTET_STREAM);
        let builder = builder.body(body);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn update_preferences(
        &self,
        req: crate::model::UpdatePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "update_preferences",
            "log_analytics_preference_details",
            req.log_analytics_preference_details,
        )?;
        non_blank("update_preferences", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/preferences", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn update_resource_categories(
        &self,
        req: crate::model::UpdateResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "update_resource_categories",
            "update_resource_categories_details",
            req.update_resource_categories_details,
        )?;
        non_blank("update_resource_categories", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/categories/actions/updateResourceCategories",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn update_scheduled_task(
        &self,
        req: crate::model::UpdateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
        let body = required(
            "update_scheduled_task",
            "update_scheduled_task_details",
            req.update_scheduled_task_details,
        )?;
        non_blank("update_scheduled_task", "namespace_name", &req.namespace_name)?;
        non_blank("update_scheduled_task", "scheduled_task_id", &req.scheduled_task_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn update_storage(
        &self,
        req: crate::model::UpdateStorageRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Storage>> {
        let body = required(
            "update_storage",
            "update_storage_details",
            req.update_storage_details,
        )?;
        non_blank("update_storage", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/storage", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::PUT, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn upload_log_events_file(
        &self,
        req: crate::model::UploadLogEventsFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "upload_log_events_file",
            "upload_log_events_file_details",
            req.upload_log_events_file_details,
        )?;
        let log_group_id = required("upload_log_events_file", "log_group_id", req.log_group_id)?;
        if let Some(v) = &req.payload_type {
            check_enum("upload_log_events_file", "payload_type", v)?;
        }
        non_blank("upload_log_events_file", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/actions/uploadLogEventsFile",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = log_group_id.add(builder, "logGroupId");
        let builder = req.log_set.add(builder, "logSet");
        let builder = req.payload_type.as_ref().map(|v| v.name()).add(builder, "payloadType");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, "opc-meta-properties", req.opc_meta_properties);
        let builder = with_header(builder, "expect", req.expect);
        let content_type = req.content_type.as_deref().unwrap_or(OCTET_STREAM);
        let builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        let builder = builder.body(body);
        self.inner.execute_unit(builder, None::<NoBody>, options).await
    }

    async fn upload_log_file(
        &self,
        req: crate::model::UploadLogFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::Upload>> {
        let body = required("upload_log_file", "upload_log_file_body", req.upload_log_file_body)?;
        let upload_name = required("upload_log_file", "upload_name", req.upload_name)?;
        let log_source_name = required("upload_log_file", "log_source_name", req.log_source_name)?;
        let filename = required("upload_log_file", "filename", req.filename)?;
        let opc_meta_loggrpid = required(
            "upload_log_file",
            "opc_meta_loggrpid",
            req.opc_meta_loggrpid,
        )?;
        non_blank("upload_log_file", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/actions/uploadLogFile", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = upload_name.add(builder, "uploadName");
        let builder = log_source_name.add(builder, "logSourceName");
        let builder = filename.add(builder, "filename");
        let builder = opc_meta_loggrpid.add(builder, "opcMetaLoggrpid");
        let builder = req.entity_id.add(builder, "entityId");
        let builder = req.timezone.add(builder, "timezone");
        let builder = req.char_encoding.add(builder, "charEncoding");
        let builder = req.date_format.add(builder, "dateFormat");
        let builder = req.date_year.add(builder, "dateYear");
        let builder = req.invalidate_cache.add(builder, "invalidateCache");
        let builder = req.log_set.add(builder, "logSet");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, "content-md5", req.content_md5);
        let builder = with_header(builder, "expect", req.expect);
        let content_type = req.content_type.as_deref().unwrap_or(OCTET_STREAM);
        let builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        let builder = builder.body(body);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn upsert_associations(
        &self,
        req: crate::model::UpsertAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<()>> {
        let body = required(
            "upsert_associations",
            "upsert_log_analytics_association_details",
            req.upsert_log_analytics_association_details,
        )?;
        non_blank("upsert_associations", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/associations/actions/upsert",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.is_from_republish.add(builder, "isFromRepublish");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        self.inner.execute_unit(builder, Some(body), options).await
    }

    async fn upsert_field(
        &self,
        req: crate::model::UpsertFieldRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        let body = required(
            "upsert_field",
            "upsert_log_analytics_field_details",
            req.upsert_log_analytics_field_details,
        )?;
        non_blank("upsert_field", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/fields/actions/upsert", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn upsert_label(
        &self,
        req: crate::model::UpsertLabelRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        let body = required(
            "upsert_label",
            "upsert_log_analytics_label_details",
            req.upsert_log_analytics_label_details,
        )?;
        non_blank("upsert_label", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/labels/actions/upsert", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn upsert_parser(
        &self,
        req: crate::model::UpsertParserRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        let body = required(
            "upsert_parser",
            "upsert_log_analytics_parser_details",
            req.upsert_log_analytics_parser_details,
        )?;
        non_blank("upsert_parser", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/parsers/actions/upsert", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn upsert_source(
        &self,
        req: crate::model::UpsertSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        let body = required(
            "upsert_source",
            "upsert_log_analytics_source_details",
            req.upsert_log_analytics_source_details,
        )?;
        non_blank("upsert_source", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sources/actions/upsert", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.create_like_source_id.add(builder, "createLikeSourceId");
        let builder = req.is_incremental.add(builder, "isIncremental");
        let builder = req.is_ignore_warning.add(builder, "isIgnoreWarning");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let retry_token = req.opc_retry_token.unwrap_or_else(new_retry_token);
        let builder = builder.header(OPC_RETRY_TOKEN, retry_token);
        let builder = with_header(builder, IF_MATCH, req.if_match);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn validate_association_parameters(
        &self,
        req: crate::model::ValidateAssociationParametersRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>> {
        let body = required(
            "validate_association_parameters",
            "upsert_log_analytics_association_details",
            req.upsert_log_analytics_association_details,
        )?;
        if let Some(v) = &req.sort_order {
            check_enum("validate_association_parameters", "sort_order", v)?;
        }
        if let Some(v) = &req.sort_by {
            check_enum("validate_association_parameters", "sort_by", v)?;
        }
        non_blank("validate_association_parameters", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/associations/actions/validateParameters",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.limit.add(builder, "limit");
        let builder = req.page.add(builder, "page");
        let builder = req.sort_order.as_ref().map(|v| v.name()).add(builder, "sortOrder");
        let builder = req.sort_by.as_ref().map(|v| v.name()).add(builder, "sortBy");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        let response: gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection> =
            self.inner.execute(builder, Some(body), options).await?;
        let next_page = header_string(response.headers(), OPC_NEXT_PAGE).unwrap_or_default();
        Ok(response.map(|body| body.set_next_page(next_page)))
    }

    async fn validate_endpoint(
        &self,
        req: crate::model::ValidateEndpointRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ValidateEndpointResult>> {
        let body = required(
            "validate_endpoint",
            "log_analytics_endpoint",
            req.log_analytics_endpoint,
        )?;
        non_blank("validate_endpoint", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/actions/validateEndpoint",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn validate_file(
        &self,
        req: crate::model::ValidateFileRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::FileValidationResponse>> {
        let object_location = required("validate_file", "object_location", req.object_location)?;
        let filename = required("validate_file", "filename", req.filename)?;
        non_blank("validate_file", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/actions/validateFile",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = object_location.add(builder, "objectLocation");
        let builder = filename.add(builder, "filename");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }

    async fn validate_label_condition(
        &self,
        req: crate::model::ValidateLabelConditionRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ValidateLabelConditionResult>> {
        let body = required(
            "validate_label_condition",
            "validate_label_condition_details",
            req.validate_label_condition_details,
        )?;
        non_blank("validate_label_condition", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/actions/validateLabelCondition",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn validate_source(
        &self,
        req: crate::model::ValidateSourceRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::SourceValidateResults>> {
        let body = required(
            "validate_source",
            "upsert_log_analytics_source_details",
            req.upsert_log_analytics_source_details,
        )?;
        non_blank("validate_source", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!("/namespaces/{}/sources/actions/validate", encode(&req.namespace_name));
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn validate_source_extended_field_details(
        &self,
        req: crate::model::ValidateSourceExtendedFieldDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::ExtendedFieldsValidationResult>> {
        let body = required(
            "validate_source_extended_field_details",
            "log_analytics_source",
            req.log_analytics_source,
        )?;
        non_blank("validate_source_extended_field_details", "namespace_name", &req.namespace_name)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/sources/actions/validateExtendedFieldDetails",
            encode(&req.namespace_name),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, Some(body), options).await
    }

    async fn verify(
        &self,
        req: crate::model::VerifyRequest,
        options: gax::options::RequestOptions,
    ) -> Result<gax::response::Response<crate::model::VerifyOutput>> {
        non_blank("verify", "namespace_name", &req.namespace_name)?;
        non_blank("verify", "scheduled_task_id", &req.scheduled_task_id)?;
        let options = gax::options::internal::set_default_idempotency(options, true);
        let path = format!(
            "/namespaces/{}/scheduledTasks/{}/actions/verify",
            encode(&req.namespace_name),
            encode(&req.scheduled_task_id),
        );
        let builder = self.inner.builder(reqwest::Method::POST, path);
        let builder = req.should_include_results.add(builder, "shouldIncludeResults");
        let builder = builder.header(reqwest::header::ACCEPT, "application/json");
        let builder = with_header(builder, OPC_REQUEST_ID, req.opc_request_id);
        self.inner.execute(builder, None::<NoBody>, options).await
    }
}

fn with_header(
    builder: reqwest::RequestBuilder,
    name: &'static str,
    value: Option<String>,
) -> reqwest::RequestBuilder {
    match value {
        Some(v) => builder.header(name, v),
        None => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_headers() -> anyhow::Result<()> {
        let client = reqwest::Client::new();
        let builder = client.get("https://loganalytics.example.com/");
        let builder = with_header(builder, OPC_REQUEST_ID, Some("req-123".to_string()));
        let builder = with_header(builder, IF_MATCH, None);
        let request = builder.build()?;
        assert_eq!(
            request.headers().get(OPC_REQUEST_ID).map(|v| v.as_bytes()),
            Some("req-123".as_bytes())
        );
        assert!(request.headers().get(IF_MATCH).is_none(), "{request:?}");
        Ok(())
    }
}

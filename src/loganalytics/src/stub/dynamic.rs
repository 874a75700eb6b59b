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

/// A dyn-compatible, crate-private version of [super::LogAnalytics].
#[async_trait::async_trait]
pub trait LogAnalytics: std::fmt::Debug + Send + Sync {
    async fn add_entity_association(
        &self,
        req: crate::model::AddEntityAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn add_source_event_types(
        &self,
        req: crate::model::AddSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn append_lookup_data(
        &self,
        req: crate::model::AppendLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn assign_encryption_key(
        &self,
        req: crate::model::AssignEncryptionKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn batch_get_basic_info(
        &self,
        req: crate::model::BatchGetBasicInfoRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>>;

    async fn cancel_query_work_request(
        &self,
        req: crate::model::CancelQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn change_ingest_time_rule_compartment(
        &self,
        req: crate::model::ChangeIngestTimeRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn change_log_analytics_entity_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsEntityCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn change_log_analytics_log_group_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn change_log_analytics_object_collection_rule_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn change_scheduled_task_compartment(
        &self,
        req: crate::model::ChangeScheduledTaskCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn clean(
        &self,
        req: crate::model::CleanRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn compare_content(
        &self,
        req: crate::model::CompareContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CompareContentResult>>;

    async fn create_ingest_time_rule(
        &self,
        req: crate::model::CreateIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IngestTimeRule>>;

    async fn create_log_analytics_entity(
        &self,
        req: crate::model::CreateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>>;

    async fn create_log_analytics_entity_type(
        &self,
        req: crate::model::CreateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn create_log_analytics_log_group(
        &self,
        req: crate::model::CreateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>>;

    async fn create_log_analytics_object_collection_rule(
        &self,
        req: crate::model::CreateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>>;

    async fn create_scheduled_task(
        &self,
        req: crate::model::CreateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>>;

    async fn delete_associations(
        &self,
        req: crate::model::DeleteAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_field(
        &self,
        req: crate::model::DeleteFieldRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_ingest_time_rule(
        &self,
        req: crate::model::DeleteIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_log_analytics_entity(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_log_analytics_entity_type(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_log_analytics_log_group(
        &self,
        req: crate::model::DeleteLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_log_analytics_object_collection_rule(
        &self,
        req: crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_lookup(
        &self,
        req: crate::model::DeleteLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_parser(
        &self,
        req: crate::model::DeleteParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_scheduled_task(
        &self,
        req: crate::model::DeleteScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_source(
        &self,
        req: crate::model::DeleteSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_upload(
        &self,
        req: crate::model::DeleteUploadRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_upload_file(
        &self,
        req: crate::model::DeleteUploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn delete_upload_warning(
        &self,
        req: crate::model::DeleteUploadWarningRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn disable_archiving(
        &self,
        req: crate::model::DisableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Success>>;

    async fn disable_auto_association(
        &self,
        req: crate::model::DisableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn disable_ingest_time_rule(
        &self,
        req: crate::model::DisableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn disable_source_event_types(
        &self,
        req: crate::model::DisableSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn enable_archiving(
        &self,
        req: crate::model::EnableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Success>>;

    async fn enable_auto_association(
        &self,
        req: crate::model::EnableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn enable_ingest_time_rule(
        &self,
        req: crate::model::EnableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn enable_source_event_types(
        &self,
        req: crate::model::EnableSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn estimate_purge_data_size(
        &self,
        req: crate::model::EstimatePurgeDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>>;

    async fn estimate_recall_data_size(
        &self,
        req: crate::model::EstimateRecallDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>>;

    async fn estimate_release_data_size(
        &self,
        req: crate::model::EstimateReleaseDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EstimateReleaseDataSizeResult>>;

    async fn export_custom_content(
        &self,
        req: crate::model::ExportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::export::ExportStream>>;

    async fn export_query_result(
        &self,
        req: crate::model::ExportQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::export::ExportStream>>;

    async fn extract_structured_log_field_paths(
        &self,
        req: crate::model::ExtractStructuredLogFieldPathsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ExtractLogFieldResults>>;

    async fn extract_structured_log_header_paths(
        &self,
        req: crate::model::ExtractStructuredLogHeaderPathsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ExtractLogHeaderResults>>;

    async fn filter(
        &self,
        req: crate::model::FilterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FilterOutput>>;

    async fn get_association_summary(
        &self,
        req: crate::model::GetAssociationSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AssociationSummaryReport>>;

    async fn get_category(
        &self,
        req: crate::model::GetCategoryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsCategory>>;

    async fn get_column_names(
        &self,
        req: crate::model::GetColumnNamesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ColumnNameCollection>>;

    async fn get_config_work_request(
        &self,
        req: crate::model::GetConfigWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsConfigWorkRequest>>;

    async fn get_field(
        &self,
        req: crate::model::GetFieldRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsField>>;

    async fn get_fields_summary(
        &self,
        req: crate::model::GetFieldsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FieldSummaryReport>>;

    async fn get_ingest_time_rule(
        &self,
        req: crate::model::GetIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IngestTimeRule>>;

    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabel>>;

    async fn get_label_summary(
        &self,
        req: crate::model::GetLabelSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelSummaryReport>>;

    async fn get_log_analytics_entities_summary(
        &self,
        req: crate::model::GetLogAnalyticsEntitiesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>>;

    async fn get_log_analytics_entity(
        &self,
        req: crate::model::GetLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>>;

    async fn get_log_analytics_entity_type(
        &self,
        req: crate::model::GetLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityType>>;

    async fn get_log_analytics_log_group(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>>;

    async fn get_log_analytics_log_groups_summary(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogGroupSummaryReport>>;

    async fn get_log_analytics_object_collection_rule(
        &self,
        req: crate::model::GetLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>>;

    async fn get_log_sets_count(
        &self,
        req: crate::model::GetLogSetsCountRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogSetsCount>>;

    async fn get_lookup(
        &self,
        req: crate::model::GetLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>>;

    async fn get_lookup_summary(
        &self,
        req: crate::model::GetLookupSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LookupSummaryReport>>;

    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Namespace>>;

    async fn get_parser(
        &self,
        req: crate::model::GetParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParser>>;

    async fn get_parser_summary(
        &self,
        req: crate::model::GetParserSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ParserSummaryReport>>;

    async fn get_preferences(
        &self,
        req: crate::model::GetPreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>>;

    async fn get_query_result(
        &self,
        req: crate::model::GetQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryAggregation>>;

    async fn get_query_work_request(
        &self,
        req: crate::model::GetQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryWorkRequest>>;

    async fn get_recall_count(
        &self,
        req: crate::model::GetRecallCountRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RecallCount>>;

    async fn get_recalled_data_size(
        &self,
        req: crate::model::GetRecalledDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RecalledDataSize>>;

    async fn get_rules_summary(
        &self,
        req: crate::model::GetRulesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RuleSummaryReport>>;

    async fn get_scheduled_task(
        &self,
        req: crate::model::GetScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>>;

    async fn get_source(
        &self,
        req: crate::model::GetSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSource>>;

    async fn get_source_summary(
        &self,
        req: crate::model::GetSourceSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SourceSummaryReport>>;

    async fn get_storage(
        &self,
        req: crate::model::GetStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Storage>>;

    async fn get_storage_usage(
        &self,
        req: crate::model::GetStorageUsageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StorageUsage>>;

    async fn get_storage_work_request(
        &self,
        req: crate::model::GetStorageWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StorageWorkRequest>>;

    async fn get_unprocessed_data_bucket(
        &self,
        req: crate::model::GetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UnprocessedDataBucket>>;

    async fn get_upload(
        &self,
        req: crate::model::GetUploadRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Upload>>;

    async fn get_work_request(
        &self,
        req: crate::model::GetWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequest>>;

    async fn import_custom_content(
        &self,
        req: crate::model::ImportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomContentSummary>>;

    async fn list_associable_entities(
        &self,
        req: crate::model::ListAssociableEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AssociableEntityCollection>>;

    async fn list_associated_entities(
        &self,
        req: crate::model::ListAssociatedEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsAssociatedEntityCollection>>;

    async fn list_auto_associations(
        &self,
        req: crate::model::ListAutoAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AutoAssociationCollection>>;

    async fn list_categories(
        &self,
        req: crate::model::ListCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsCategoryCollection>>;

    async fn list_config_work_requests(
        &self,
        req: crate::model::ListConfigWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsConfigWorkRequestCollection>>;

    async fn list_effective_properties(
        &self,
        req: crate::model::ListEffectivePropertiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EffectivePropertyCollection>>;

    async fn list_encryption_key_info(
        &self,
        req: crate::model::ListEncryptionKeyInfoRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EncryptionKeyInfoCollection>>;

    async fn list_entity_associations(
        &self,
        req: crate::model::ListEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>>;

    async fn list_entity_source_associations(
        &self,
        req: crate::model::ListEntitySourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>>;

    async fn list_fields(
        &self,
        req: crate::model::ListFieldsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>>;

    async fn list_ingest_time_rules(
        &self,
        req: crate::model::ListIngestTimeRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>>;

    async fn list_label_priorities(
        &self,
        req: crate::model::ListLabelPrioritiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelPriorityCollection>>;

    async fn list_label_source_details(
        &self,
        req: crate::model::ListLabelSourceDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelSourceCollection>>;

    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>>;

    async fn list_log_analytics_entities(
        &self,
        req: crate::model::ListLogAnalyticsEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>>;

    async fn list_log_analytics_entity_topology(
        &self,
        req: crate::model::ListLogAnalyticsEntityTopologyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>>;

    async fn list_log_analytics_entity_types(
        &self,
        req: crate::model::ListLogAnalyticsEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>>;

    async fn list_log_analytics_log_groups(
        &self,
        req: crate::model::ListLogAnalyticsLogGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>>;

    async fn list_log_analytics_object_collection_rules(
        &self,
        req: crate::model::ListLogAnalyticsObjectCollectionRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>>;

    async fn list_log_sets(
        &self,
        req: crate::model::ListLogSetsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogSetCollection>>;

    async fn list_lookups(
        &self,
        req: crate::model::ListLookupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>>;

    async fn list_meta_source_types(
        &self,
        req: crate::model::ListMetaSourceTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>>;

    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::NamespaceCollection>>;

    async fn list_overlapping_recalls(
        &self,
        req: crate::model::ListOverlappingRecallsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OverlappingRecallCollection>>;

    async fn list_parser_functions(
        &self,
        req: crate::model::ListParserFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>>;

    async fn list_parser_meta_plugins(
        &self,
        req: crate::model::ListParserMetaPluginsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>>;

    async fn list_parsers(
        &self,
        req: crate::model::ListParsersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>>;

    async fn list_properties_metadata(
        &self,
        req: crate::model::ListPropertiesMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::PropertyMetadataSummaryCollection>>;

    async fn list_query_work_requests(
        &self,
        req: crate::model::ListQueryWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryWorkRequestCollection>>;

    async fn list_recalled_data(
        &self,
        req: crate::model::ListRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RecalledDataCollection>>;

    async fn list_resource_categories(
        &self,
        req: crate::model::ListResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>>;

    async fn list_rules(
        &self,
        req: crate::model::ListRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RuleSummaryCollection>>;

    async fn list_scheduled_tasks(
        &self,
        req: crate::model::ListScheduledTasksRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTaskCollection>>;

    async fn list_source_associations(
        &self,
        req: crate::model::ListSourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>>;

    async fn list_source_event_types(
        &self,
        req: crate::model::ListSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EventTypeCollection>>;

    async fn list_source_extended_field_definitions(
        &self,
        req: crate::model::ListSourceExtendedFieldDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection>>;

    async fn list_source_label_operators(
        &self,
        req: crate::model::ListSourceLabelOperatorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>>;

    async fn list_source_meta_functions(
        &self,
        req: crate::model::ListSourceMetaFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsMetaFunctionCollection>>;

    async fn list_source_patterns(
        &self,
        req: crate::model::ListSourcePatternsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>>;

    async fn list_sources(
        &self,
        req: crate::model::ListSourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>>;

    async fn list_storage_work_request_errors(
        &self,
        req: crate::model::ListStorageWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestErrorCollection>>;

    async fn list_storage_work_requests(
        &self,
        req: crate::model::ListStorageWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StorageWorkRequestCollection>>;

    async fn list_supported_char_encodings(
        &self,
        req: crate::model::ListSupportedCharEncodingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CharEncodingCollection>>;

    async fn list_supported_timezones(
        &self,
        req: crate::model::ListSupportedTimezonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TimezoneCollection>>;

    async fn list_upload_files(
        &self,
        req: crate::model::ListUploadFilesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UploadFileCollection>>;

    async fn list_upload_warnings(
        &self,
        req: crate::model::ListUploadWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UploadWarningCollection>>;

    async fn list_uploads(
        &self,
        req: crate::model::ListUploadsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UploadCollection>>;

    async fn list_warnings(
        &self,
        req: crate::model::ListWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsWarningCollection>>;

    async fn list_work_request_errors(
        &self,
        req: crate::model::ListWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestErrorCollection>>;

    async fn list_work_request_logs(
        &self,
        req: crate::model::ListWorkRequestLogsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestLogCollection>>;

    async fn list_work_requests(
        &self,
        req: crate::model::ListWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestCollection>>;

    async fn offboard_namespace(
        &self,
        req: crate::model::OffboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn onboard_namespace(
        &self,
        req: crate::model::OnboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn parse_query(
        &self,
        req: crate::model::ParseQueryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ParseQueryOutput>>;

    async fn pause_scheduled_task(
        &self,
        req: crate::model::PauseScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>>;

    async fn purge_storage_data(
        &self,
        req: crate::model::PurgeStorageDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn put_query_work_request_background(
        &self,
        req: crate::model::PutQueryWorkRequestBackgroundRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryWorkRequest>>;

    async fn query(
        &self,
        req: crate::model::QueryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryAggregation>>;

    async fn recall_archived_data(
        &self,
        req: crate::model::RecallArchivedDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn register_lookup(
        &self,
        req: crate::model::RegisterLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>>;

    async fn release_recalled_data(
        &self,
        req: crate::model::ReleaseRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn remove_entity_associations(
        &self,
        req: crate::model::RemoveEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn remove_preferences(
        &self,
        req: crate::model::RemovePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn remove_resource_categories(
        &self,
        req: crate::model::RemoveResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn remove_source_event_types(
        &self,
        req: crate::model::RemoveSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn resume_scheduled_task(
        &self,
        req: crate::model::ResumeScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>>;

    async fn run(
        &self,
        req: crate::model::RunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn set_unprocessed_data_bucket(
        &self,
        req: crate::model::SetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UnprocessedDataBucket>>;

    async fn suggest(
        &self,
        req: crate::model::SuggestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SuggestOutput>>;

    async fn suppress_warning(
        &self,
        req: crate::model::SuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn test_parser(
        &self,
        req: crate::model::TestParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ParserTestResult>>;

    async fn unsuppress_warning(
        &self,
        req: crate::model::UnsuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn update_log_analytics_entity(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>>;

    async fn update_log_analytics_entity_type(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn update_log_analytics_log_group(
        &self,
        req: crate::model::UpdateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>>;

    async fn update_log_analytics_object_collection_rule(
        &self,
        req: crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>>;

    async fn update_lookup(
        &self,
        req: crate::model::UpdateLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>>;

    async fn update_lookup_data(
        &self,
        req: crate::model::UpdateLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn update_preferences(
        &self,
        req: crate::model::UpdatePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn update_resource_categories(
        &self,
        req: crate::model::UpdateResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn update_scheduled_task(
        &self,
        req: crate::model::UpdateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>>;

    async fn update_storage(
        &self,
        req: crate::model::UpdateStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Storage>>;

    async fn upload_log_events_file(
        &self,
        req: crate::model::UploadLogEventsFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn upload_log_file(
        &self,
        req: crate::model::UploadLogFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Upload>>;

    async fn upsert_associations(
        &self,
        req: crate::model::UpsertAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>>;

    async fn upsert_field(
        &self,
        req: crate::model::UpsertFieldRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsField>>;

    async fn upsert_label(
        &self,
        req: crate::model::UpsertLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabel>>;

    async fn upsert_parser(
        &self,
        req: crate::model::UpsertParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParser>>;

    async fn upsert_source(
        &self,
        req: crate::model::UpsertSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSource>>;

    async fn validate_association_parameters(
        &self,
        req: crate::model::ValidateAssociationParametersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>>;

    async fn validate_endpoint(
        &self,
        req: crate::model::ValidateEndpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ValidateEndpointResult>>;

    async fn validate_file(
        &self,
        req: crate::model::ValidateFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FileValidationResponse>>;

    async fn validate_label_condition(
        &self,
        req: crate::model::ValidateLabelConditionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ValidateLabelConditionResult>>;

    async fn validate_source(
        &self,
        req: crate::model::ValidateSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SourceValidateResults>>;

    async fn validate_source_extended_field_details(
        &self,
        req: crate::model::ValidateSourceExtendedFieldDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ExtendedFieldsValidationResult>>;

    async fn verify(
        &self,
        req: crate::model::VerifyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VerifyOutput>>;
}

/// All implementations of [super::LogAnalytics] also implement [LogAnalytics].
#[async_trait::async_trait]
impl<T: super::LogAnalytics> LogAnalytics for T {
    /// Forwards the call to the implementation provided by `T`.
    async fn add_entity_association(
        &self,
        req: crate::model::AddEntityAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::add_entity_association(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn add_source_event_types(
        &self,
        req: crate::model::AddSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::add_source_event_types(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn append_lookup_data(
        &self,
        req: crate::model::AppendLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::append_lookup_data(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn assign_encryption_key(
        &self,
        req: crate::model::AssignEncryptionKeyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::assign_encryption_key(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn batch_get_basic_info(
        &self,
        req: crate::model::BatchGetBasicInfoRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
        T::batch_get_basic_info(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn cancel_query_work_request(
        &self,
        req: crate::model::CancelQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::cancel_query_work_request(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_ingest_time_rule_compartment(
        &self,
        req: crate::model::ChangeIngestTimeRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::change_ingest_time_rule_compartment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_log_analytics_entity_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsEntityCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::change_log_analytics_entity_compartment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_log_analytics_log_group_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::change_log_analytics_log_group_compartment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_log_analytics_object_collection_rule_compartment(
        &self,
        req: crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::change_log_analytics_object_collection_rule_compartment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn change_scheduled_task_compartment(
        &self,
        req: crate::model::ChangeScheduledTaskCompartmentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::change_scheduled_task_compartment(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn clean(
        &self,
        req: crate::model::CleanRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::clean(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn compare_content(
        &self,
        req: crate::model::CompareContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CompareContentResult>> {
        T::compare_content(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_ingest_time_rule(
        &self,
        req: crate::model::CreateIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IngestTimeRule>> {
        T::create_ingest_time_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_log_analytics_entity(
        &self,
        req: crate::model::CreateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        T::create_log_analytics_entity(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_log_analytics_entity_type(
        &self,
        req: crate::model::CreateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::create_log_analytics_entity_type(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_log_analytics_log_group(
        &self,
        req: crate::model::CreateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        T::create_log_analytics_log_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_log_analytics_object_collection_rule(
        &self,
        req: crate::model::CreateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        T::create_log_analytics_object_collection_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn create_scheduled_task(
        &self,
        req: crate::model::CreateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>> {
        T::create_scheduled_task(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_associations(
        &self,
        req: crate::model::DeleteAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_associations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_field(
        &self,
        req: crate::model::DeleteFieldRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_field(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_ingest_time_rule(
        &self,
        req: crate::model::DeleteIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_ingest_time_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_label(
        &self,
        req: crate::model::DeleteLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_log_analytics_entity(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_log_analytics_entity(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_log_analytics_entity_type(
        &self,
        req: crate::model::DeleteLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_log_analytics_entity_type(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_log_analytics_log_group(
        &self,
        req: crate::model::DeleteLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_log_analytics_log_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_log_analytics_object_collection_rule(
        &self,
        req: crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_log_analytics_object_collection_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_lookup(
        &self,
        req: crate::model::DeleteLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_lookup(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_parser(
        &self,
        req: crate::model::DeleteParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_parser(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_scheduled_task(
        &self,
        req: crate::model::DeleteScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_scheduled_task(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_source(
        &self,
        req: crate::model::DeleteSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_source(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_upload(
        &self,
        req: crate::model::DeleteUploadRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_upload(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_upload_file(
        &self,
        req: crate::model::DeleteUploadFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_upload_file(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn delete_upload_warning(
        &self,
        req: crate::model::DeleteUploadWarningRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::delete_upload_warning(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn disable_archiving(
        &self,
        req: crate::model::DisableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Success>> {
        T::disable_archiving(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn disable_auto_association(
        &self,
        req: crate::model::DisableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::disable_auto_association(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn disable_ingest_time_rule(
        &self,
        req: crate::model::DisableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::disable_ingest_time_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn disable_source_event_types(
        &self,
        req: crate::model::DisableSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::disable_source_event_types(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn enable_archiving(
        &self,
        req: crate::model::EnableArchivingRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Success>> {
        T::enable_archiving(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn enable_auto_association(
        &self,
        req: crate::model::EnableAutoAssociationRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::enable_auto_association(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn enable_ingest_time_rule(
        &self,
        req: crate::model::EnableIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::enable_ingest_time_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn enable_source_event_types(
        &self,
        req: crate::model::EnableSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::enable_source_event_types(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn estimate_purge_data_size(
        &self,
        req: crate::model::EstimatePurgeDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>> {
        T::estimate_purge_data_size(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn estimate_recall_data_size(
        &self,
        req: crate::model::EstimateRecallDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>> {
        T::estimate_recall_data_size(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn estimate_release_data_size(
        &self,
        req: crate::model::EstimateReleaseDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EstimateReleaseDataSizeResult>> {
        T::estimate_release_data_size(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn export_custom_content(
        &self,
        req: crate::model::ExportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::export::ExportStream>> {
        T::export_custom_content(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn export_query_result(
        &self,
        req: crate::model::ExportQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::export::ExportStream>> {
        T::export_query_result(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn extract_structured_log_field_paths(
        &self,
        req: crate::model::ExtractStructuredLogFieldPathsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ExtractLogFieldResults>> {
        T::extract_structured_log_field_paths(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn extract_structured_log_header_paths(
        &self,
        req: crate::model::ExtractStructuredLogHeaderPathsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ExtractLogHeaderResults>> {
        T::extract_structured_log_header_paths(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn filter(
        &self,
        req: crate::model::FilterRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FilterOutput>> {
        T::filter(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_association_summary(
        &self,
        req: crate::model::GetAssociationSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AssociationSummaryReport>> {
        T::get_association_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_category(
        &self,
        req: crate::model::GetCategoryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsCategory>> {
        T::get_category(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_column_names(
        &self,
        req: crate::model::GetColumnNamesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ColumnNameCollection>> {
        T::get_column_names(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_config_work_request(
        &self,
        req: crate::model::GetConfigWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsConfigWorkRequest>> {
        T::get_config_work_request(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_field(
        &self,
        req: crate::model::GetFieldRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        T::get_field(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_fields_summary(
        &self,
        req: crate::model::GetFieldsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FieldSummaryReport>> {
        T::get_fields_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_ingest_time_rule(
        &self,
        req: crate::model::GetIngestTimeRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IngestTimeRule>> {
        T::get_ingest_time_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_label(
        &self,
        req: crate::model::GetLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        T::get_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_label_summary(
        &self,
        req: crate::model::GetLabelSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelSummaryReport>> {
        T::get_label_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_analytics_entities_summary(
        &self,
        req: crate::model::GetLogAnalyticsEntitiesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>> {
        T::get_log_analytics_entities_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_analytics_entity(
        &self,
        req: crate::model::GetLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        T::get_log_analytics_entity(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_analytics_entity_type(
        &self,
        req: crate::model::GetLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityType>> {
        T::get_log_analytics_entity_type(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_analytics_log_group(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        T::get_log_analytics_log_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_analytics_log_groups_summary(
        &self,
        req: crate::model::GetLogAnalyticsLogGroupsSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogGroupSummaryReport>> {
        T::get_log_analytics_log_groups_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_analytics_object_collection_rule(
        &self,
        req: crate::model::GetLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        T::get_log_analytics_object_collection_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_log_sets_count(
        &self,
        req: crate::model::GetLogSetsCountRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogSetsCount>> {
        T::get_log_sets_count(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_lookup(
        &self,
        req: crate::model::GetLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        T::get_lookup(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_lookup_summary(
        &self,
        req: crate::model::GetLookupSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LookupSummaryReport>> {
        T::get_lookup_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_namespace(
        &self,
        req: crate::model::GetNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Namespace>> {
        T::get_namespace(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_parser(
        &self,
        req: crate::model::GetParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        T::get_parser(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_parser_summary(
        &self,
        req: crate::model::GetParserSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ParserSummaryReport>> {
        T::get_parser_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_preferences(
        &self,
        req: crate::model::GetPreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>> {
        T::get_preferences(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_query_result(
        &self,
        req: crate::model::GetQueryResultRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryAggregation>> {
        T::get_query_result(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_query_work_request(
        &self,
        req: crate::model::GetQueryWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryWorkRequest>> {
        T::get_query_work_request(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_recall_count(
        &self,
        req: crate::model::GetRecallCountRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RecallCount>> {
        T::get_recall_count(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_recalled_data_size(
        &self,
        req: crate::model::GetRecalledDataSizeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RecalledDataSize>> {
        T::get_recalled_data_size(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_rules_summary(
        &self,
        req: crate::model::GetRulesSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RuleSummaryReport>> {
        T::get_rules_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_scheduled_task(
        &self,
        req: crate::model::GetScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>> {
        T::get_scheduled_task(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_source(
        &self,
        req: crate::model::GetSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        T::get_source(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_source_summary(
        &self,
        req: crate::model::GetSourceSummaryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SourceSummaryReport>> {
        T::get_source_summary(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_storage(
        &self,
        req: crate::model::GetStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Storage>> {
        T::get_storage(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_storage_usage(
        &self,
        req: crate::model::GetStorageUsageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StorageUsage>> {
        T::get_storage_usage(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_storage_work_request(
        &self,
        req: crate::model::GetStorageWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StorageWorkRequest>> {
        T::get_storage_work_request(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_unprocessed_data_bucket(
        &self,
        req: crate::model::GetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        T::get_unprocessed_data_bucket(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_upload(
        &self,
        req: crate::model::GetUploadRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Upload>> {
        T::get_upload(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn get_work_request(
        &self,
        req: crate::model::GetWorkRequestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequest>> {
        T::get_work_request(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn import_custom_content(
        &self,
        req: crate::model::ImportCustomContentRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CustomContentSummary>> {
        T::import_custom_content(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_associable_entities(
        &self,
        req: crate::model::ListAssociableEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AssociableEntityCollection>> {
        T::list_associable_entities(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_associated_entities(
        &self,
        req: crate::model::ListAssociatedEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsAssociatedEntityCollection>,
    > {
        T::list_associated_entities(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_auto_associations(
        &self,
        req: crate::model::ListAutoAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::AutoAssociationCollection>> {
        T::list_auto_associations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_categories(
        &self,
        req: crate::model::ListCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsCategoryCollection>> {
        T::list_categories(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_config_work_requests(
        &self,
        req: crate::model::ListConfigWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsConfigWorkRequestCollection>,
    > {
        T::list_config_work_requests(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_effective_properties(
        &self,
        req: crate::model::ListEffectivePropertiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EffectivePropertyCollection>> {
        T::list_effective_properties(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_encryption_key_info(
        &self,
        req: crate::model::ListEncryptionKeyInfoRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EncryptionKeyInfoCollection>> {
        T::list_encryption_key_info(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_entity_associations(
        &self,
        req: crate::model::ListEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        T::list_entity_associations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_entity_source_associations(
        &self,
        req: crate::model::ListEntitySourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        T::list_entity_source_associations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_fields(
        &self,
        req: crate::model::ListFieldsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>> {
        T::list_fields(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_ingest_time_rules(
        &self,
        req: crate::model::ListIngestTimeRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>> {
        T::list_ingest_time_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_label_priorities(
        &self,
        req: crate::model::ListLabelPrioritiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelPriorityCollection>> {
        T::list_label_priorities(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_label_source_details(
        &self,
        req: crate::model::ListLabelSourceDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LabelSourceCollection>> {
        T::list_label_source_details(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_labels(
        &self,
        req: crate::model::ListLabelsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
        T::list_labels(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_analytics_entities(
        &self,
        req: crate::model::ListLogAnalyticsEntitiesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
        T::list_log_analytics_entities(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_analytics_entity_topology(
        &self,
        req: crate::model::ListLogAnalyticsEntityTopologyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>,
    > {
        T::list_log_analytics_entity_topology(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_analytics_entity_types(
        &self,
        req: crate::model::ListLogAnalyticsEntityTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>> {
        T::list_log_analytics_entity_types(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_analytics_log_groups(
        &self,
        req: crate::model::ListLogAnalyticsLogGroupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>,
    > {
        T::list_log_analytics_log_groups(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_analytics_object_collection_rules(
        &self,
        req: crate::model::ListLogAnalyticsObjectCollectionRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>,
    > {
        T::list_log_analytics_object_collection_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_log_sets(
        &self,
        req: crate::model::ListLogSetsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogSetCollection>> {
        T::list_log_sets(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_lookups(
        &self,
        req: crate::model::ListLookupsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>> {
        T::list_lookups(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_meta_source_types(
        &self,
        req: crate::model::ListMetaSourceTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>,
    > {
        T::list_meta_source_types(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_namespaces(
        &self,
        req: crate::model::ListNamespacesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::NamespaceCollection>> {
        T::list_namespaces(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_overlapping_recalls(
        &self,
        req: crate::model::ListOverlappingRecallsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::OverlappingRecallCollection>> {
        T::list_overlapping_recalls(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_parser_functions(
        &self,
        req: crate::model::ListParserFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>,
    > {
        T::list_parser_functions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_parser_meta_plugins(
        &self,
        req: crate::model::ListParserMetaPluginsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>,
    > {
        T::list_parser_meta_plugins(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_parsers(
        &self,
        req: crate::model::ListParsersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>> {
        T::list_parsers(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_properties_metadata(
        &self,
        req: crate::model::ListPropertiesMetadataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::PropertyMetadataSummaryCollection>> {
        T::list_properties_metadata(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_query_work_requests(
        &self,
        req: crate::model::ListQueryWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryWorkRequestCollection>> {
        T::list_query_work_requests(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_recalled_data(
        &self,
        req: crate::model::ListRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RecalledDataCollection>> {
        T::list_recalled_data(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_resource_categories(
        &self,
        req: crate::model::ListResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>,
    > {
        T::list_resource_categories(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_rules(
        &self,
        req: crate::model::ListRulesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::RuleSummaryCollection>> {
        T::list_rules(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_scheduled_tasks(
        &self,
        req: crate::model::ListScheduledTasksRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTaskCollection>> {
        T::list_scheduled_tasks(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_source_associations(
        &self,
        req: crate::model::ListSourceAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
        T::list_source_associations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_source_event_types(
        &self,
        req: crate::model::ListSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::EventTypeCollection>> {
        T::list_source_event_types(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_source_extended_field_definitions(
        &self,
        req: crate::model::ListSourceExtendedFieldDefinitionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection>,
    > {
        T::list_source_extended_field_definitions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_source_label_operators(
        &self,
        req: crate::model::ListSourceLabelOperatorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>> {
        T::list_source_label_operators(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_source_meta_functions(
        &self,
        req: crate::model::ListSourceMetaFunctionsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsMetaFunctionCollection>> {
        T::list_source_meta_functions(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_source_patterns(
        &self,
        req: crate::model::ListSourcePatternsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>> {
        T::list_source_patterns(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_sources(
        &self,
        req: crate::model::ListSourcesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>> {
        T::list_sources(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_storage_work_request_errors(
        &self,
        req: crate::model::ListStorageWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
        T::list_storage_work_request_errors(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_storage_work_requests(
        &self,
        req: crate::model::ListStorageWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::StorageWorkRequestCollection>> {
        T::list_storage_work_requests(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_supported_char_encodings(
        &self,
        req: crate::model::ListSupportedCharEncodingsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::CharEncodingCollection>> {
        T::list_supported_char_encodings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_supported_timezones(
        &self,
        req: crate::model::ListSupportedTimezonesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::TimezoneCollection>> {
        T::list_supported_timezones(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_upload_files(
        &self,
        req: crate::model::ListUploadFilesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UploadFileCollection>> {
        T::list_upload_files(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_upload_warnings(
        &self,
        req: crate::model::ListUploadWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UploadWarningCollection>> {
        T::list_upload_warnings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_uploads(
        &self,
        req: crate::model::ListUploadsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UploadCollection>> {
        T::list_uploads(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_warnings(
        &self,
        req: crate::model::ListWarningsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsWarningCollection>> {
        T::list_warnings(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_work_request_errors(
        &self,
        req: crate::model::ListWorkRequestErrorsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
        T::list_work_request_errors(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_work_request_logs(
        &self,
        req: crate::model::ListWorkRequestLogsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestLogCollection>> {
        T::list_work_request_logs(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn list_work_requests(
        &self,
        req: crate::model::ListWorkRequestsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::WorkRequestCollection>> {
        T::list_work_requests(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn offboard_namespace(
        &self,
        req: crate::model::OffboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::offboard_namespace(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn onboard_namespace(
        &self,
        req: crate::model::OnboardNamespaceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::onboard_namespace(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn parse_query(
        &self,
        req: crate::model::ParseQueryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ParseQueryOutput>> {
        T::parse_query(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn pause_scheduled_task(
        &self,
        req: crate::model::PauseScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>> {
        T::pause_scheduled_task(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn purge_storage_data(
        &self,
        req: crate::model::PurgeStorageDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::purge_storage_data(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn put_query_work_request_background(
        &self,
        req: crate::model::PutQueryWorkRequestBackgroundRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryWorkRequest>> {
        T::put_query_work_request_background(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn query(
        &self,
        req: crate::model::QueryRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::QueryAggregation>> {
        T::query(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn recall_archived_data(
        &self,
        req: crate::model::RecallArchivedDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::recall_archived_data(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn register_lookup(
        &self,
        req: crate::model::RegisterLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        T::register_lookup(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn release_recalled_data(
        &self,
        req: crate::model::ReleaseRecalledDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::release_recalled_data(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_entity_associations(
        &self,
        req: crate::model::RemoveEntityAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::remove_entity_associations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_preferences(
        &self,
        req: crate::model::RemovePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::remove_preferences(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_resource_categories(
        &self,
        req: crate::model::RemoveResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::remove_resource_categories(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn remove_source_event_types(
        &self,
        req: crate::model::RemoveSourceEventTypesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::remove_source_event_types(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn resume_scheduled_task(
        &self,
        req: crate::model::ResumeScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>> {
        T::resume_scheduled_task(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn run(
        &self,
        req: crate::model::RunRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::run(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn set_unprocessed_data_bucket(
        &self,
        req: crate::model::SetUnprocessedDataBucketRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
        T::set_unprocessed_data_bucket(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn suggest(
        &self,
        req: crate::model::SuggestRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SuggestOutput>> {
        T::suggest(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn suppress_warning(
        &self,
        req: crate::model::SuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::suppress_warning(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn test_parser(
        &self,
        req: crate::model::TestParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ParserTestResult>> {
        T::test_parser(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn unsuppress_warning(
        &self,
        req: crate::model::UnsuppressWarningRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::unsuppress_warning(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_log_analytics_entity(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
        T::update_log_analytics_entity(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_log_analytics_entity_type(
        &self,
        req: crate::model::UpdateLogAnalyticsEntityTypeRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::update_log_analytics_entity_type(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_log_analytics_log_group(
        &self,
        req: crate::model::UpdateLogAnalyticsLogGroupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
        T::update_log_analytics_log_group(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_log_analytics_object_collection_rule(
        &self,
        req: crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
        T::update_log_analytics_object_collection_rule(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_lookup(
        &self,
        req: crate::model::UpdateLookupRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
        T::update_lookup(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_lookup_data(
        &self,
        req: crate::model::UpdateLookupDataRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::update_lookup_data(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_preferences(
        &self,
        req: crate::model::UpdatePreferencesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::update_preferences(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_resource_categories(
        &self,
        req: crate::model::UpdateResourceCategoriesRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::update_resource_categories(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_scheduled_task(
        &self,
        req: crate::model::UpdateScheduledTaskRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ScheduledTask>> {
        T::update_scheduled_task(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn update_storage(
        &self,
        req: crate::model::UpdateStorageRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Storage>> {
        T::update_storage(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload_log_events_file(
        &self,
        req: crate::model::UploadLogEventsFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::upload_log_events_file(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upload_log_file(
        &self,
        req: crate::model::UploadLogFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::Upload>> {
        T::upload_log_file(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upsert_associations(
        &self,
        req: crate::model::UpsertAssociationsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<()>> {
        T::upsert_associations(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upsert_field(
        &self,
        req: crate::model::UpsertFieldRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsField>> {
        T::upsert_field(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upsert_label(
        &self,
        req: crate::model::UpsertLabelRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
        T::upsert_label(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upsert_parser(
        &self,
        req: crate::model::UpsertParserRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
        T::upsert_parser(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn upsert_source(
        &self,
        req: crate::model::UpsertSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
        T::upsert_source(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_association_parameters(
        &self,
        req: crate::model::ValidateAssociationParametersRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<
        gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>,
    > {
        T::validate_association_parameters(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_endpoint(
        &self,
        req: crate::model::ValidateEndpointRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ValidateEndpointResult>> {
        T::validate_endpoint(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_file(
        &self,
        req: crate::model::ValidateFileRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::FileValidationResponse>> {
        T::validate_file(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_label_condition(
        &self,
        req: crate::model::ValidateLabelConditionRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ValidateLabelConditionResult>> {
        T::validate_label_condition(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_source(
        &self,
        req: crate::model::ValidateSourceRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::SourceValidateResults>> {
        T::validate_source(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn validate_source_extended_field_details(
        &self,
        req: crate::model::ValidateSourceExtendedFieldDetailsRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::ExtendedFieldsValidationResult>> {
        T::validate_source_extended_field_details(self, req, options).await
    }

    /// Forwards the call to the implementation provided by `T`.
    async fn verify(
        &self,
        req: crate::model::VerifyRequest,
        options: gax::options::RequestOptions,
    ) -> crate::Result<gax::response::Response<crate::model::VerifyOutput>> {
        T::verify(self, req, options).await
    }
}

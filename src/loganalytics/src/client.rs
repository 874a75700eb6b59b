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

/// Implements a client for the Log Analytics management API.
///
/// # Example
/// ```
/// # tokio_test::block_on(async {
/// # use log_analytics::client::LogAnalytics;
/// let client = LogAnalytics::builder()
///     .with_region("us-ashburn-1")
///     .build()
///     .await?;
/// assert_eq!(
///     client.endpoint(),
///     Some("https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601")
/// );
/// # gax::client_builder::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages log sources, parsers, fields, labels, lookups, entities, log groups,
/// object collection rules, scheduled tasks, and ingest time rules. Searches,
/// uploads, exports, archives, and purges log data.
///
/// # Configuration
///
/// To configure `LogAnalytics` use the `with_*` methods in the type returned
/// by [builder()][LogAnalytics::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_region()]: the region hosting the service. The client uses the
///   region from the credentials, or from the `LOG_ANALYTICS_REGION`
///   environment variable, when not set.
/// * [with_endpoint()]: by default this client uses the regional endpoint.
///   Applications can override this, e.g., to use a test server or a proxy.
/// * [with_credentials()]: by default this client loads a security token from
///   the environment. Applications signing requests provide their own
///   credentials here.
///
/// [with_region()]: super::builder::log_analytics::ClientBuilder::with_region
/// [with_endpoint()]: super::builder::log_analytics::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::log_analytics::ClientBuilder::with_credentials
///
/// # Pooling and Cloning
///
/// `LogAnalytics` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `LogAnalytics` in
/// an [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it
/// already uses an `Arc` internally.
#[derive(Clone, Debug)]
pub struct LogAnalytics {
    inner: std::sync::Arc<dyn super::stub::dynamic::LogAnalytics>,
    transport: Option<super::transport::LogAnalytics>,
    tracing: bool,
}

impl LogAnalytics {
    /// Returns a builder for [LogAnalytics].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use log_analytics::client::LogAnalytics;
    /// let client = LogAnalytics::builder()
    ///     .with_endpoint("http://localhost:8080")
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::log_analytics::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::log_analytics::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::LogAnalytics + 'static,
    {
        Self {
            inner: std::sync::Arc::new(stub),
            transport: None,
            tracing: false,
        }
    }

    pub(crate) async fn new(
        config: gaxi::options::ClientConfig,
    ) -> gax::client_builder::Result<Self> {
        let tracing = gaxi::options::tracing_enabled(&config);
        let transport = super::transport::LogAnalytics::new(config).await?;
        let inner = Self::wrap(transport.clone(), tracing);
        Ok(Self {
            inner,
            transport: Some(transport),
            tracing,
        })
    }

    fn wrap(
        transport: super::transport::LogAnalytics,
        tracing: bool,
    ) -> std::sync::Arc<dyn super::stub::dynamic::LogAnalytics> {
        if tracing {
            std::sync::Arc::new(super::tracing::LogAnalytics::new(transport))
        } else {
            std::sync::Arc::new(transport)
        }
    }

    /// Returns the endpoint used by the client, including the API version path.
    ///
    /// Clients created with [from_stub][LogAnalytics::from_stub] have no
    /// endpoint.
    pub fn endpoint(&self) -> Option<&str> {
        self.transport.as_ref().map(|t| t.endpoint())
    }

    /// Returns the region used by the client, if known.
    pub fn region(&self) -> Option<&str> {
        self.transport.as_ref().and_then(|t| t.region())
    }

    /// Changes the region and recomputes the endpoint.
    ///
    /// Requests started after this call use the new endpoint. Clones of this
    /// client keep the previous endpoint.
    ///
    /// # Example
    /// ```
    /// # tokio_test::block_on(async {
    /// # use log_analytics::client::LogAnalytics;
    /// let mut client = LogAnalytics::builder()
    ///     .with_region("us-phoenix-1")
    ///     .build()
    ///     .await?;
    /// client.set_region("us-ashburn-1")?;
    /// assert_eq!(
    ///     client.endpoint(),
    ///     Some("https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601")
    /// );
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn set_region(&mut self, region: &str) -> gax::client_builder::Result<()> {
        let Some(transport) = self.transport.as_mut() else {
            return Err(gax::client_builder::Error::endpoint(
                "clients created from a stub have no endpoint",
            ));
        };
        transport.set_region(region)?;
        self.inner = Self::wrap(transport.clone(), self.tracing);
        Ok(())
    }

    /// Adds association between input source entity and destination entities.
    pub fn add_entity_association(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::AddEntityAssociation {
        super::builder::log_analytics::AddEntityAssociation::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Adds event types to a source.
    pub fn add_source_event_types(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::AddSourceEventTypes {
        super::builder::log_analytics::AddSourceEventTypes::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Appends data to a lookup.
    pub fn append_lookup_data(
        &self,
        namespace_name: impl Into<std::string::String>,
        lookup_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::AppendLookupData {
        super::builder::log_analytics::AppendLookupData::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_lookup_name(lookup_name)
    }

    /// Assigns the key used to encrypt active or archived data.
    pub fn assign_encryption_key(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::AssignEncryptionKey {
        super::builder::log_analytics::AssignEncryptionKey::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists basic information about the given labels.
    pub fn batch_get_basic_info(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::BatchGetBasicInfo {
        super::builder::log_analytics::BatchGetBasicInfo::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Cancels a query work request.
    pub fn cancel_query_work_request(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CancelQueryWorkRequest {
        super::builder::log_analytics::CancelQueryWorkRequest::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Moves an ingest time rule to a different compartment.
    pub fn change_ingest_time_rule_compartment(
        &self,
        namespace_name: impl Into<std::string::String>,
        ingest_time_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ChangeIngestTimeRuleCompartment {
        super::builder::log_analytics::ChangeIngestTimeRuleCompartment::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_ingest_time_rule_id(ingest_time_rule_id)
    }

    /// Moves an entity to a different compartment.
    pub fn change_log_analytics_entity_compartment(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ChangeLogAnalyticsEntityCompartment {
        super::builder::log_analytics::ChangeLogAnalyticsEntityCompartment::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Moves a log group to a different compartment.
    pub fn change_log_analytics_log_group_compartment(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_log_group_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ChangeLogAnalyticsLogGroupCompartment {
        super::builder::log_analytics::ChangeLogAnalyticsLogGroupCompartment::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_log_group_id(log_analytics_log_group_id)
    }

    /// Moves an object collection rule to a different compartment.
    pub fn change_log_analytics_object_collection_rule_compartment(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_object_collection_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ChangeLogAnalyticsObjectCollectionRuleCompartment {
        super::builder::log_analytics::ChangeLogAnalyticsObjectCollectionRuleCompartment::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_object_collection_rule_id(log_analytics_object_collection_rule_id)
    }

    /// Moves a scheduled task to a different compartment.
    pub fn change_scheduled_task_compartment(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ChangeScheduledTaskCompartment {
        super::builder::log_analytics::ChangeScheduledTaskCompartment::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }

    /// Deletes the log data in a log group.
    pub fn clean(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_log_group_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::Clean {
        super::builder::log_analytics::Clean::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_log_group_id(log_analytics_log_group_id)
    }

    /// Compares two pieces of content.
    pub fn compare_content(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CompareContent {
        super::builder::log_analytics::CompareContent::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates an ingest time rule.
    pub fn create_ingest_time_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CreateIngestTimeRule {
        super::builder::log_analytics::CreateIngestTimeRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates an entity.
    pub fn create_log_analytics_entity(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CreateLogAnalyticsEntity {
        super::builder::log_analytics::CreateLogAnalyticsEntity::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates an entity type.
    pub fn create_log_analytics_entity_type(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CreateLogAnalyticsEntityType {
        super::builder::log_analytics::CreateLogAnalyticsEntityType::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates a log group.
    ///
    /// # Example
    /// ```
    /// # use log_analytics::client::LogAnalytics;
    /// use log_analytics::model::CreateLogAnalyticsLogGroupDetails;
    /// async fn sample(client: &LogAnalytics) -> log_analytics::Result<()> {
    ///     let group = client
    ///         .create_log_analytics_log_group("my-namespace")
    ///         .set_create_log_analytics_log_group_details(
    ///             CreateLogAnalyticsLogGroupDetails::new()
    ///                 .set_display_name("web-servers")
    ///                 .set_compartment_id("ocid1.compartment.oc1..example"),
    ///         )
    ///         .send()
    ///         .await?;
    ///     println!("{:?}", group.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_log_analytics_log_group(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CreateLogAnalyticsLogGroup {
        super::builder::log_analytics::CreateLogAnalyticsLogGroup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates an object collection rule.
    pub fn create_log_analytics_object_collection_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CreateLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::CreateLogAnalyticsObjectCollectionRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates a scheduled task.
    pub fn create_scheduled_task(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::CreateScheduledTask {
        super::builder::log_analytics::CreateScheduledTask::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Deletes source to entity associations.
    pub fn delete_associations(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteAssociations {
        super::builder::log_analytics::DeleteAssociations::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Deletes a field.
    pub fn delete_field(
        &self,
        namespace_name: impl Into<std::string::String>,
        field_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteField {
        super::builder::log_analytics::DeleteField::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_field_name(field_name)
    }

    /// Deletes an ingest time rule.
    pub fn delete_ingest_time_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
        ingest_time_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteIngestTimeRule {
        super::builder::log_analytics::DeleteIngestTimeRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_ingest_time_rule_id(ingest_time_rule_id)
    }

    /// Deletes a label.
    pub fn delete_label(
        &self,
        namespace_name: impl Into<std::string::String>,
        label_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteLabel {
        super::builder::log_analytics::DeleteLabel::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_label_name(label_name)
    }

    /// Deletes an entity.
    pub fn delete_log_analytics_entity(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsEntity {
        super::builder::log_analytics::DeleteLogAnalyticsEntity::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Deletes an entity type.
    pub fn delete_log_analytics_entity_type(
        &self,
        namespace_name: impl Into<std::string::String>,
        entity_type_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsEntityType {
        super::builder::log_analytics::DeleteLogAnalyticsEntityType::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_entity_type_name(entity_type_name)
    }

    /// Deletes a log group.
    pub fn delete_log_analytics_log_group(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_log_group_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsLogGroup {
        super::builder::log_analytics::DeleteLogAnalyticsLogGroup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_log_group_id(log_analytics_log_group_id)
    }

    /// Deletes an object collection rule.
    pub fn delete_log_analytics_object_collection_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_object_collection_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::DeleteLogAnalyticsObjectCollectionRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_object_collection_rule_id(log_analytics_object_collection_rule_id)
    }

    /// Deletes a lookup.
    pub fn delete_lookup(
        &self,
        namespace_name: impl Into<std::string::String>,
        lookup_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteLookup {
        super::builder::log_analytics::DeleteLookup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_lookup_name(lookup_name)
    }

    /// Deletes a parser.
    pub fn delete_parser(
        &self,
        namespace_name: impl Into<std::string::String>,
        parser_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteParser {
        super::builder::log_analytics::DeleteParser::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_parser_name(parser_name)
    }

    /// Deletes a scheduled task.
    pub fn delete_scheduled_task(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteScheduledTask {
        super::builder::log_analytics::DeleteScheduledTask::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }

    /// Deletes a source.
    pub fn delete_source(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteSource {
        super::builder::log_analytics::DeleteSource::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Deletes an upload and the log data it loaded.
    pub fn delete_upload(
        &self,
        namespace_name: impl Into<std::string::String>,
        upload_reference: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteUpload {
        super::builder::log_analytics::DeleteUpload::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_upload_reference(upload_reference)
    }

    /// Deletes a file from an upload.
    pub fn delete_upload_file(
        &self,
        namespace_name: impl Into<std::string::String>,
        upload_reference: impl Into<std::string::String>,
        file_reference: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteUploadFile {
        super::builder::log_analytics::DeleteUploadFile::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_upload_reference(upload_reference)
            .set_file_reference(file_reference)
    }

    /// Suppresses a warning raised by an upload.
    pub fn delete_upload_warning(
        &self,
        namespace_name: impl Into<std::string::String>,
        upload_reference: impl Into<std::string::String>,
        warning_reference: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DeleteUploadWarning {
        super::builder::log_analytics::DeleteUploadWarning::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_upload_reference(upload_reference)
            .set_warning_reference(warning_reference)
    }

    /// Disables archiving of log data.
    pub fn disable_archiving(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DisableArchiving {
        super::builder::log_analytics::DisableArchiving::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Disables auto-association of a source.
    pub fn disable_auto_association(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DisableAutoAssociation {
        super::builder::log_analytics::DisableAutoAssociation::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Disables an ingest time rule.
    pub fn disable_ingest_time_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
        ingest_time_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DisableIngestTimeRule {
        super::builder::log_analytics::DisableIngestTimeRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_ingest_time_rule_id(ingest_time_rule_id)
    }

    /// Disables event types of a source.
    pub fn disable_source_event_types(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::DisableSourceEventTypes {
        super::builder::log_analytics::DisableSourceEventTypes::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Enables archiving of log data.
    pub fn enable_archiving(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::EnableArchiving {
        super::builder::log_analytics::EnableArchiving::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Enables auto-association of a source.
    pub fn enable_auto_association(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::EnableAutoAssociation {
        super::builder::log_analytics::EnableAutoAssociation::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Enables an ingest time rule.
    pub fn enable_ingest_time_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
        ingest_time_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::EnableIngestTimeRule {
        super::builder::log_analytics::EnableIngestTimeRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_ingest_time_rule_id(ingest_time_rule_id)
    }

    /// Enables event types of a source.
    pub fn enable_source_event_types(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::EnableSourceEventTypes {
        super::builder::log_analytics::EnableSourceEventTypes::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Estimates the size of a purge.
    pub fn estimate_purge_data_size(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::EstimatePurgeDataSize {
        super::builder::log_analytics::EstimatePurgeDataSize::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Estimates the size of a recall.
    pub fn estimate_recall_data_size(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::EstimateRecallDataSize {
        super::builder::log_analytics::EstimateRecallDataSize::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Estimates the size of a release of recalled data.
    pub fn estimate_release_data_size(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::EstimateReleaseDataSize {
        super::builder::log_analytics::EstimateReleaseDataSize::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Exports custom content as a zip archive.
    pub fn export_custom_content(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ExportCustomContent {
        super::builder::log_analytics::ExportCustomContent::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Exports the results of a query.
    ///
    /// The payload is delivered to the callback or sink configured in the
    /// returned builder, or buffered into a string when neither is configured.
    pub fn export_query_result(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ExportQueryResult {
        super::builder::log_analytics::ExportQueryResult::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Extracts the field paths of a structured log sample.
    pub fn extract_structured_log_field_paths(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ExtractStructuredLogFieldPaths {
        super::builder::log_analytics::ExtractStructuredLogFieldPaths::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Extracts the header paths of a structured log sample.
    pub fn extract_structured_log_header_paths(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ExtractStructuredLogHeaderPaths {
        super::builder::log_analytics::ExtractStructuredLogHeaderPaths::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Adds filters to a query.
    pub fn filter(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::Filter {
        super::builder::log_analytics::Filter::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Returns association counts for a compartment.
    pub fn get_association_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetAssociationSummary {
        super::builder::log_analytics::GetAssociationSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a category.
    pub fn get_category(
        &self,
        namespace_name: impl Into<std::string::String>,
        category_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetCategory {
        super::builder::log_analytics::GetCategory::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_category_name(category_name)
    }

    /// Lists the columns available to a query.
    pub fn get_column_names(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetColumnNames {
        super::builder::log_analytics::GetColumnNames::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a configuration work request.
    pub fn get_config_work_request(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetConfigWorkRequest {
        super::builder::log_analytics::GetConfigWorkRequest::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Gets a field.
    pub fn get_field(
        &self,
        namespace_name: impl Into<std::string::String>,
        field_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetField {
        super::builder::log_analytics::GetField::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_field_name(field_name)
    }

    /// Returns field counts.
    pub fn get_fields_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetFieldsSummary {
        super::builder::log_analytics::GetFieldsSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets an ingest time rule.
    pub fn get_ingest_time_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
        ingest_time_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetIngestTimeRule {
        super::builder::log_analytics::GetIngestTimeRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_ingest_time_rule_id(ingest_time_rule_id)
    }

    /// Gets a label.
    pub fn get_label(
        &self,
        namespace_name: impl Into<std::string::String>,
        label_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLabel {
        super::builder::log_analytics::GetLabel::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_label_name(label_name)
    }

    /// Returns the number of labels.
    pub fn get_label_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLabelSummary {
        super::builder::log_analytics::GetLabelSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Returns entity counts for a compartment.
    pub fn get_log_analytics_entities_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLogAnalyticsEntitiesSummary {
        super::builder::log_analytics::GetLogAnalyticsEntitiesSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets an entity.
    ///
    /// # Example
    /// ```
    /// # use log_analytics::client::LogAnalytics;
    /// async fn sample(client: &LogAnalytics) -> log_analytics::Result<()> {
    ///     let response = client
    ///         .get_log_analytics_entity("my-namespace", "ocid1.loganalyticsentity.oc1..example")
    ///         .send()
    ///         .await?;
    ///     println!("status={} etag={:?}", response.status(), response.etag());
    ///     println!("entity={:?}", response.body());
    ///     Ok(())
    /// }
    /// ```
    pub fn get_log_analytics_entity(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLogAnalyticsEntity {
        super::builder::log_analytics::GetLogAnalyticsEntity::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Gets an entity type.
    pub fn get_log_analytics_entity_type(
        &self,
        namespace_name: impl Into<std::string::String>,
        entity_type_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLogAnalyticsEntityType {
        super::builder::log_analytics::GetLogAnalyticsEntityType::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_entity_type_name(entity_type_name)
    }

    /// Gets a log group.
    pub fn get_log_analytics_log_group(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_log_group_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLogAnalyticsLogGroup {
        super::builder::log_analytics::GetLogAnalyticsLogGroup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_log_group_id(log_analytics_log_group_id)
    }

    /// Returns the number of log groups in a compartment.
    pub fn get_log_analytics_log_groups_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLogAnalyticsLogGroupsSummary {
        super::builder::log_analytics::GetLogAnalyticsLogGroupsSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets an object collection rule.
    pub fn get_log_analytics_object_collection_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_object_collection_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::GetLogAnalyticsObjectCollectionRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_object_collection_rule_id(log_analytics_object_collection_rule_id)
    }

    /// Returns the number of log sets.
    pub fn get_log_sets_count(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLogSetsCount {
        super::builder::log_analytics::GetLogSetsCount::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a lookup.
    pub fn get_lookup(
        &self,
        namespace_name: impl Into<std::string::String>,
        lookup_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLookup {
        super::builder::log_analytics::GetLookup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_lookup_name(lookup_name)
    }

    /// Returns lookup counts.
    pub fn get_lookup_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetLookupSummary {
        super::builder::log_analytics::GetLookupSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a namespace.
    pub fn get_namespace(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetNamespace {
        super::builder::log_analytics::GetNamespace::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a parser.
    pub fn get_parser(
        &self,
        namespace_name: impl Into<std::string::String>,
        parser_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetParser {
        super::builder::log_analytics::GetParser::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_parser_name(parser_name)
    }

    /// Returns the number of parsers.
    pub fn get_parser_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetParserSummary {
        super::builder::log_analytics::GetParserSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the namespace preferences.
    pub fn get_preferences(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetPreferences {
        super::builder::log_analytics::GetPreferences::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Returns the results of a query work request.
    pub fn get_query_result(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetQueryResult {
        super::builder::log_analytics::GetQueryResult::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a query work request.
    pub fn get_query_work_request(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetQueryWorkRequest {
        super::builder::log_analytics::GetQueryWorkRequest::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Returns recall counts.
    pub fn get_recall_count(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetRecallCount {
        super::builder::log_analytics::GetRecallCount::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Returns the amount of recalled data in an interval.
    pub fn get_recalled_data_size(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetRecalledDataSize {
        super::builder::log_analytics::GetRecalledDataSize::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Returns rule counts for a compartment.
    pub fn get_rules_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetRulesSummary {
        super::builder::log_analytics::GetRulesSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a scheduled task.
    pub fn get_scheduled_task(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetScheduledTask {
        super::builder::log_analytics::GetScheduledTask::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }

    /// Gets a source.
    pub fn get_source(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetSource {
        super::builder::log_analytics::GetSource::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Returns the number of sources.
    pub fn get_source_summary(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetSourceSummary {
        super::builder::log_analytics::GetSourceSummary::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets the storage configuration.
    pub fn get_storage(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetStorage {
        super::builder::log_analytics::GetStorage::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Returns the amount of data stored.
    pub fn get_storage_usage(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetStorageUsage {
        super::builder::log_analytics::GetStorageUsage::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets a storage work request.
    pub fn get_storage_work_request(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetStorageWorkRequest {
        super::builder::log_analytics::GetStorageWorkRequest::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Gets the bucket receiving unprocessed data.
    pub fn get_unprocessed_data_bucket(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetUnprocessedDataBucket {
        super::builder::log_analytics::GetUnprocessedDataBucket::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Gets an upload.
    pub fn get_upload(
        &self,
        namespace_name: impl Into<std::string::String>,
        upload_reference: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetUpload {
        super::builder::log_analytics::GetUpload::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_upload_reference(upload_reference)
    }

    /// Gets a work request.
    pub fn get_work_request(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::GetWorkRequest {
        super::builder::log_analytics::GetWorkRequest::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Imports custom content from a zip archive.
    pub fn import_custom_content(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ImportCustomContent {
        super::builder::log_analytics::ImportCustomContent::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the entities that may be associated with a source.
    pub fn list_associable_entities(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListAssociableEntities {
        super::builder::log_analytics::ListAssociableEntities::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Lists entities with associated sources.
    pub fn list_associated_entities(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListAssociatedEntities {
        super::builder::log_analytics::ListAssociatedEntities::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the auto-association settings of a source.
    pub fn list_auto_associations(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListAutoAssociations {
        super::builder::log_analytics::ListAutoAssociations::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Lists categories.
    pub fn list_categories(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListCategories {
        super::builder::log_analytics::ListCategories::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists configuration work requests.
    pub fn list_config_work_requests(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListConfigWorkRequests {
        super::builder::log_analytics::ListConfigWorkRequests::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the effective values of configuration properties.
    pub fn list_effective_properties(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListEffectiveProperties {
        super::builder::log_analytics::ListEffectiveProperties::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the encryption keys of a namespace.
    pub fn list_encryption_key_info(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListEncryptionKeyInfo {
        super::builder::log_analytics::ListEncryptionKeyInfo::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the entities associated with an entity.
    pub fn list_entity_associations(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListEntityAssociations {
        super::builder::log_analytics::ListEntityAssociations::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Lists the source associations of an entity.
    pub fn list_entity_source_associations(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListEntitySourceAssociations {
        super::builder::log_analytics::ListEntitySourceAssociations::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists fields.
    pub fn list_fields(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListFields {
        super::builder::log_analytics::ListFields::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists ingest time rules.
    pub fn list_ingest_time_rules(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListIngestTimeRules {
        super::builder::log_analytics::ListIngestTimeRules::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the label priority levels.
    pub fn list_label_priorities(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLabelPriorities {
        super::builder::log_analytics::ListLabelPriorities::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the sources using a label.
    pub fn list_label_source_details(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLabelSourceDetails {
        super::builder::log_analytics::ListLabelSourceDetails::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists labels.
    pub fn list_labels(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLabels {
        super::builder::log_analytics::ListLabels::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists entities.
    ///
    /// # Example
    /// ```
    /// # use log_analytics::client::LogAnalytics;
    /// use log_analytics::model::SortOrder;
    /// async fn sample(client: &LogAnalytics) -> log_analytics::Result<()> {
    ///     let mut items = client
    ///         .list_log_analytics_entities("my-namespace")
    ///         .set_compartment_id("ocid1.compartment.oc1..example")
    ///         .set_sort_order(SortOrder::Desc)
    ///         .by_item();
    ///     while let Some(entity) = items.next().await {
    ///         println!("{:?}", entity?);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn list_log_analytics_entities(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLogAnalyticsEntities {
        super::builder::log_analytics::ListLogAnalyticsEntities::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the topology of an entity.
    pub fn list_log_analytics_entity_topology(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLogAnalyticsEntityTopology {
        super::builder::log_analytics::ListLogAnalyticsEntityTopology::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Lists entity types.
    pub fn list_log_analytics_entity_types(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLogAnalyticsEntityTypes {
        super::builder::log_analytics::ListLogAnalyticsEntityTypes::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists log groups.
    pub fn list_log_analytics_log_groups(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLogAnalyticsLogGroups {
        super::builder::log_analytics::ListLogAnalyticsLogGroups::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists object collection rules.
    pub fn list_log_analytics_object_collection_rules(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLogAnalyticsObjectCollectionRules {
        super::builder::log_analytics::ListLogAnalyticsObjectCollectionRules::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists log sets.
    pub fn list_log_sets(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLogSets {
        super::builder::log_analytics::ListLogSets::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists lookups.
    pub fn list_lookups(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListLookups {
        super::builder::log_analytics::ListLookups::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the kinds of sources.
    pub fn list_meta_source_types(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListMetaSourceTypes {
        super::builder::log_analytics::ListMetaSourceTypes::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the namespaces visible to the caller.
    pub fn list_namespaces(&self) -> super::builder::log_analytics::ListNamespaces {
        super::builder::log_analytics::ListNamespaces::new(self.inner.clone())
    }

    /// Lists recalls overlapping an interval.
    pub fn list_overlapping_recalls(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListOverlappingRecalls {
        super::builder::log_analytics::ListOverlappingRecalls::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the functions of a parser.
    pub fn list_parser_functions(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListParserFunctions {
        super::builder::log_analytics::ListParserFunctions::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the plugins available to parsers.
    pub fn list_parser_meta_plugins(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListParserMetaPlugins {
        super::builder::log_analytics::ListParserMetaPlugins::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists parsers.
    pub fn list_parsers(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListParsers {
        super::builder::log_analytics::ListParsers::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the metadata of configuration properties.
    pub fn list_properties_metadata(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListPropertiesMetadata {
        super::builder::log_analytics::ListPropertiesMetadata::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists query work requests.
    pub fn list_query_work_requests(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListQueryWorkRequests {
        super::builder::log_analytics::ListQueryWorkRequests::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists recalls of archived data.
    pub fn list_recalled_data(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListRecalledData {
        super::builder::log_analytics::ListRecalledData::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the category assignments of resources.
    pub fn list_resource_categories(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListResourceCategories {
        super::builder::log_analytics::ListResourceCategories::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists ingest time rules and saved search rules.
    pub fn list_rules(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListRules {
        super::builder::log_analytics::ListRules::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists scheduled tasks.
    pub fn list_scheduled_tasks(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListScheduledTasks {
        super::builder::log_analytics::ListScheduledTasks::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the associations of a source.
    pub fn list_source_associations(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSourceAssociations {
        super::builder::log_analytics::ListSourceAssociations::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the event types of a source.
    pub fn list_source_event_types(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSourceEventTypes {
        super::builder::log_analytics::ListSourceEventTypes::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Lists the extended field definitions of a source.
    pub fn list_source_extended_field_definitions(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSourceExtendedFieldDefinitions {
        super::builder::log_analytics::ListSourceExtendedFieldDefinitions::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Lists the operators available to label conditions.
    pub fn list_source_label_operators(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSourceLabelOperators {
        super::builder::log_analytics::ListSourceLabelOperators::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the functions available to sources.
    pub fn list_source_meta_functions(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSourceMetaFunctions {
        super::builder::log_analytics::ListSourceMetaFunctions::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the file patterns of a source.
    pub fn list_source_patterns(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSourcePatterns {
        super::builder::log_analytics::ListSourcePatterns::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Lists sources.
    pub fn list_sources(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSources {
        super::builder::log_analytics::ListSources::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the errors of a storage work request.
    pub fn list_storage_work_request_errors(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListStorageWorkRequestErrors {
        super::builder::log_analytics::ListStorageWorkRequestErrors::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Lists storage work requests.
    pub fn list_storage_work_requests(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListStorageWorkRequests {
        super::builder::log_analytics::ListStorageWorkRequests::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the character encodings supported for uploads.
    pub fn list_supported_char_encodings(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSupportedCharEncodings {
        super::builder::log_analytics::ListSupportedCharEncodings::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the time zones supported for uploads.
    pub fn list_supported_timezones(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListSupportedTimezones {
        super::builder::log_analytics::ListSupportedTimezones::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the files in an upload.
    pub fn list_upload_files(
        &self,
        namespace_name: impl Into<std::string::String>,
        upload_reference: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListUploadFiles {
        super::builder::log_analytics::ListUploadFiles::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_upload_reference(upload_reference)
    }

    /// Lists the warnings raised by an upload.
    pub fn list_upload_warnings(
        &self,
        namespace_name: impl Into<std::string::String>,
        upload_reference: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListUploadWarnings {
        super::builder::log_analytics::ListUploadWarnings::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_upload_reference(upload_reference)
    }

    /// Lists uploads.
    pub fn list_uploads(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListUploads {
        super::builder::log_analytics::ListUploads::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists warnings.
    pub fn list_warnings(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListWarnings {
        super::builder::log_analytics::ListWarnings::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Lists the errors of a work request.
    pub fn list_work_request_errors(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListWorkRequestErrors {
        super::builder::log_analytics::ListWorkRequestErrors::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Lists the log messages of a work request.
    pub fn list_work_request_logs(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListWorkRequestLogs {
        super::builder::log_analytics::ListWorkRequestLogs::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Lists work requests.
    pub fn list_work_requests(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ListWorkRequests {
        super::builder::log_analytics::ListWorkRequests::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Offboards a tenancy from the service.
    pub fn offboard_namespace(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::OffboardNamespace {
        super::builder::log_analytics::OffboardNamespace::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Onboards a tenancy to the service.
    pub fn onboard_namespace(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::OnboardNamespace {
        super::builder::log_analytics::OnboardNamespace::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Parses a query.
    pub fn parse_query(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ParseQuery {
        super::builder::log_analytics::ParseQuery::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Pauses a scheduled task.
    pub fn pause_scheduled_task(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::PauseScheduledTask {
        super::builder::log_analytics::PauseScheduledTask::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }

    /// Purges log data.
    pub fn purge_storage_data(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::PurgeStorageData {
        super::builder::log_analytics::PurgeStorageData::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Moves a running query to the background.
    pub fn put_query_work_request_background(
        &self,
        namespace_name: impl Into<std::string::String>,
        work_request_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::PutQueryWorkRequestBackground {
        super::builder::log_analytics::PutQueryWorkRequestBackground::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_work_request_id(work_request_id)
    }

    /// Runs a query.
    pub fn query(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::Query {
        super::builder::log_analytics::Query::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Recalls archived data.
    pub fn recall_archived_data(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::RecallArchivedData {
        super::builder::log_analytics::RecallArchivedData::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates a lookup from a file.
    pub fn register_lookup(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::RegisterLookup {
        super::builder::log_analytics::RegisterLookup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Releases recalled data.
    pub fn release_recalled_data(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ReleaseRecalledData {
        super::builder::log_analytics::ReleaseRecalledData::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Removes the associations of an entity.
    pub fn remove_entity_associations(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::RemoveEntityAssociations {
        super::builder::log_analytics::RemoveEntityAssociations::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Removes namespace preferences.
    pub fn remove_preferences(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::RemovePreferences {
        super::builder::log_analytics::RemovePreferences::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Removes category assignments from resources.
    pub fn remove_resource_categories(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::RemoveResourceCategories {
        super::builder::log_analytics::RemoveResourceCategories::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Removes event types from a source.
    pub fn remove_source_event_types(
        &self,
        namespace_name: impl Into<std::string::String>,
        source_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::RemoveSourceEventTypes {
        super::builder::log_analytics::RemoveSourceEventTypes::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_source_name(source_name)
    }

    /// Resumes a paused scheduled task.
    pub fn resume_scheduled_task(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ResumeScheduledTask {
        super::builder::log_analytics::ResumeScheduledTask::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }

    /// Runs a scheduled task now.
    pub fn run(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::Run {
        super::builder::log_analytics::Run::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }

    /// Sets the bucket receiving unprocessed data.
    pub fn set_unprocessed_data_bucket(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::SetUnprocessedDataBucket {
        super::builder::log_analytics::SetUnprocessedDataBucket::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Returns completions for a partial query.
    pub fn suggest(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::Suggest {
        super::builder::log_analytics::Suggest::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Suppresses warnings.
    pub fn suppress_warning(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::SuppressWarning {
        super::builder::log_analytics::SuppressWarning::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Tests a parser against sample content.
    pub fn test_parser(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::TestParser {
        super::builder::log_analytics::TestParser::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Unsuppresses warnings.
    pub fn unsuppress_warning(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UnsuppressWarning {
        super::builder::log_analytics::UnsuppressWarning::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Updates an entity.
    pub fn update_log_analytics_entity(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_entity_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsEntity {
        super::builder::log_analytics::UpdateLogAnalyticsEntity::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_entity_id(log_analytics_entity_id)
    }

    /// Updates an entity type.
    pub fn update_log_analytics_entity_type(
        &self,
        namespace_name: impl Into<std::string::String>,
        entity_type_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsEntityType {
        super::builder::log_analytics::UpdateLogAnalyticsEntityType::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_entity_type_name(entity_type_name)
    }

    /// Updates a log group.
    pub fn update_log_analytics_log_group(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_log_group_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsLogGroup {
        super::builder::log_analytics::UpdateLogAnalyticsLogGroup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_log_group_id(log_analytics_log_group_id)
    }

    /// Updates an object collection rule.
    pub fn update_log_analytics_object_collection_rule(
        &self,
        namespace_name: impl Into<std::string::String>,
        log_analytics_object_collection_rule_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateLogAnalyticsObjectCollectionRule {
        super::builder::log_analytics::UpdateLogAnalyticsObjectCollectionRule::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_log_analytics_object_collection_rule_id(log_analytics_object_collection_rule_id)
    }

    /// Updates the metadata of a lookup.
    pub fn update_lookup(
        &self,
        namespace_name: impl Into<std::string::String>,
        lookup_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateLookup {
        super::builder::log_analytics::UpdateLookup::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_lookup_name(lookup_name)
    }

    /// Replaces the data of a lookup.
    pub fn update_lookup_data(
        &self,
        namespace_name: impl Into<std::string::String>,
        lookup_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateLookupData {
        super::builder::log_analytics::UpdateLookupData::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_lookup_name(lookup_name)
    }

    /// Updates namespace preferences.
    pub fn update_preferences(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdatePreferences {
        super::builder::log_analytics::UpdatePreferences::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Adds category assignments to resources.
    pub fn update_resource_categories(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateResourceCategories {
        super::builder::log_analytics::UpdateResourceCategories::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Updates a scheduled task.
    pub fn update_scheduled_task(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateScheduledTask {
        super::builder::log_analytics::UpdateScheduledTask::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }

    /// Updates the storage configuration.
    pub fn update_storage(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpdateStorage {
        super::builder::log_analytics::UpdateStorage::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Uploads a file of log events to a log group.
    pub fn upload_log_events_file(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UploadLogEventsFile {
        super::builder::log_analytics::UploadLogEventsFile::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Uploads a log file.
    ///
    /// The file contents are sent as the raw request body.
    pub fn upload_log_file(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UploadLogFile {
        super::builder::log_analytics::UploadLogFile::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates or updates source to entity associations.
    pub fn upsert_associations(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpsertAssociations {
        super::builder::log_analytics::UpsertAssociations::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates or updates a field.
    pub fn upsert_field(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpsertField {
        super::builder::log_analytics::UpsertField::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates or updates a label.
    pub fn upsert_label(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpsertLabel {
        super::builder::log_analytics::UpsertLabel::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates or updates a parser.
    pub fn upsert_parser(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpsertParser {
        super::builder::log_analytics::UpsertParser::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Creates or updates a source.
    pub fn upsert_source(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::UpsertSource {
        super::builder::log_analytics::UpsertSource::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Checks that associations have the parameters they need.
    pub fn validate_association_parameters(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ValidateAssociationParameters {
        super::builder::log_analytics::ValidateAssociationParameters::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Validates a source endpoint.
    pub fn validate_endpoint(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ValidateEndpoint {
        super::builder::log_analytics::ValidateEndpoint::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Validates a log file in object storage.
    pub fn validate_file(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ValidateFile {
        super::builder::log_analytics::ValidateFile::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Evaluates a label condition against sample values.
    pub fn validate_label_condition(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ValidateLabelCondition {
        super::builder::log_analytics::ValidateLabelCondition::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Validates a source.
    pub fn validate_source(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ValidateSource {
        super::builder::log_analytics::ValidateSource::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Validates the extended field definitions of a source.
    pub fn validate_source_extended_field_details(
        &self,
        namespace_name: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::ValidateSourceExtendedFieldDetails {
        super::builder::log_analytics::ValidateSourceExtendedFieldDetails::new(self.inner.clone())
            .set_namespace_name(namespace_name)
    }

    /// Verifies the query of a scheduled task.
    pub fn verify(
        &self,
        namespace_name: impl Into<std::string::String>,
        scheduled_task_id: impl Into<std::string::String>,
    ) -> super::builder::log_analytics::Verify {
        super::builder::log_analytics::Verify::new(self.inner.clone())
            .set_namespace_name(namespace_name)
            .set_scheduled_task_id(scheduled_task_id)
    }
}

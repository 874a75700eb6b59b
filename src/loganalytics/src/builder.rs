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

pub mod log_analytics {
    use crate::Result;

    /// A builder for [LogAnalytics][crate::client::LogAnalytics].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use log_analytics::*;
    /// # use builder::log_analytics::ClientBuilder;
    /// # use client::LogAnalytics;
    /// let builder : ClientBuilder = LogAnalytics::builder();
    /// let client = builder
    ///     .with_endpoint("https://loganalytics.us-ashburn-1.oci.oraclecloud.com")
    ///     .build().await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder =
        gax::client_builder::ClientBuilder<client::Factory, gaxi::options::Credentials>;

    pub(crate) mod client {
        use crate::client::LogAnalytics;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = LogAnalytics;
            type Credentials = gaxi::options::Credentials;
            async fn build(
                self,
                config: gaxi::options::ClientConfig,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    /// Common implementation for [crate::client::LogAnalytics] request builders.
    #[derive(Clone, Debug)]
    pub(crate) struct RequestBuilder<R: std::default::Default> {
        stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        request: R,
        options: gax::options::RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>) -> Self {
            Self {
                stub,
                request: R::default(),
                options: gax::options::RequestOptions::default(),
            }
        }
    }

    /// The request builder for [LogAnalytics::add_entity_association][crate::client::LogAnalytics::add_entity_association] calls.
    #[derive(Clone, Debug)]
    pub struct AddEntityAssociation(RequestBuilder<crate::model::AddEntityAssociationRequest>);

    impl AddEntityAssociation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddEntityAssociationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .add_entity_association(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::AddEntityAssociationRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        pub fn set_add_entity_association_details<T: Into<crate::model::AddEntityAssociationDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.add_entity_association_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::AddEntityAssociationRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::AddEntityAssociationRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddEntityAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::add_source_event_types][crate::client::LogAnalytics::add_source_event_types] calls.
    #[derive(Clone, Debug)]
    pub struct AddSourceEventTypes(RequestBuilder<crate::model::AddSourceEventTypesRequest>);

    impl AddSourceEventTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AddSourceEventTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .add_source_event_types(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::AddSourceEventTypesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_event_type_details<T: Into<crate::model::EventTypeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.event_type_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::AddSourceEventTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::AddSourceEventTypesRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AddSourceEventTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::append_lookup_data][crate::client::LogAnalytics::append_lookup_data] calls.
    #[derive(Clone, Debug)]
    pub struct AppendLookupData(RequestBuilder<crate::model::AppendLookupDataRequest>);

    impl AppendLookupData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AppendLookupDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .append_lookup_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::AppendLookupDataRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_lookup_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        pub fn set_append_lookup_file_body<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.append_lookup_file_body = Some(v.into());
            self
        }

        pub fn set_is_force<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force = Some(v.into());
            self
        }

        pub fn set_char_encoding<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.char_encoding = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::AppendLookupDataRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::AppendLookupDataRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [expect][crate::model::AppendLookupDataRequest::expect].
        pub fn set_expect<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AppendLookupData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::assign_encryption_key][crate::client::LogAnalytics::assign_encryption_key] calls.
    #[derive(Clone, Debug)]
    pub struct AssignEncryptionKey(RequestBuilder<crate::model::AssignEncryptionKeyRequest>);

    impl AssignEncryptionKey {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::AssignEncryptionKeyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .assign_encryption_key(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::AssignEncryptionKeyRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_assign_encryption_key_details<T: Into<crate::model::AssignEncryptionKeyDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.assign_encryption_key_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::AssignEncryptionKeyRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::AssignEncryptionKeyRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AssignEncryptionKey {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::batch_get_basic_info][crate::client::LogAnalytics::batch_get_basic_info] calls.
    #[derive(Clone, Debug)]
    pub struct BatchGetBasicInfo(RequestBuilder<crate::model::BatchGetBasicInfoRequest>);

    impl BatchGetBasicInfo {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::BatchGetBasicInfoRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
            (*self.0.stub)
                .batch_get_basic_info(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsLabelCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsLabelCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::BatchGetBasicInfoRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_label_names<T: Into<crate::model::LabelNames>>(mut self, v: T) -> Self {
            self.0.request.label_names = Some(v.into());
            self
        }

        pub fn set_is_include_deleted<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include_deleted = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::BatchGetBasicInfoRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::BatchGetBasicInfoRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        pub fn set_basic_label_sort_by<T: Into<crate::model::batch_get_basic_info_request::BasicLabelSortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.basic_label_sort_by = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::BatchGetBasicInfoRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::BatchGetBasicInfoRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for BatchGetBasicInfo {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::cancel_query_work_request][crate::client::LogAnalytics::cancel_query_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct CancelQueryWorkRequest(RequestBuilder<crate::model::CancelQueryWorkRequestRequest>);

    impl CancelQueryWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CancelQueryWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .cancel_query_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CancelQueryWorkRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CancelQueryWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::CancelQueryWorkRequestRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelQueryWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_ingest_time_rule_compartment][crate::client::LogAnalytics::change_ingest_time_rule_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeIngestTimeRuleCompartment(RequestBuilder<crate::model::ChangeIngestTimeRuleCompartmentRequest>);

    impl ChangeIngestTimeRuleCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeIngestTimeRuleCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_ingest_time_rule_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeIngestTimeRuleCompartmentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_ingest_time_rule_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        pub fn set_change_ingest_time_rule_compartment_details<T: Into<crate::model::ChangeIngestTimeRuleCompartmentDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.change_ingest_time_rule_compartment_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeIngestTimeRuleCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeIngestTimeRuleCompartmentRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeIngestTimeRuleCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_log_analytics_entity_compartment][crate::client::LogAnalytics::change_log_analytics_entity_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeLogAnalyticsEntityCompartment(RequestBuilder<crate::model::ChangeLogAnalyticsEntityCompartmentRequest>);

    impl ChangeLogAnalyticsEntityCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeLogAnalyticsEntityCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_log_analytics_entity_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        pub fn set_change_log_analytics_entity_compartment_details<T: Into<crate::model::ChangeLogAnalyticsEntityCompartmentDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.change_log_analytics_entity_compartment_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsEntityCompartmentRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeLogAnalyticsEntityCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_log_analytics_log_group_compartment][crate::client::LogAnalytics::change_log_analytics_log_group_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeLogAnalyticsLogGroupCompartment(RequestBuilder<crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest>);

    impl ChangeLogAnalyticsLogGroupCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_log_analytics_log_group_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_log_group_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        pub fn set_change_log_analytics_log_group_compartment_details<T: Into<crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.change_log_analytics_log_group_compartment_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsLogGroupCompartmentRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeLogAnalyticsLogGroupCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_log_analytics_object_collection_rule_compartment][crate::client::LogAnalytics::change_log_analytics_object_collection_rule_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeLogAnalyticsObjectCollectionRuleCompartment(RequestBuilder<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest>);

    impl ChangeLogAnalyticsObjectCollectionRuleCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_log_analytics_object_collection_rule_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_object_collection_rule_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        pub fn set_change_log_analytics_object_collection_rule_compartment_details<T: Into<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.change_log_analytics_object_collection_rule_compartment_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeLogAnalyticsObjectCollectionRuleCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::change_scheduled_task_compartment][crate::client::LogAnalytics::change_scheduled_task_compartment] calls.
    #[derive(Clone, Debug)]
    pub struct ChangeScheduledTaskCompartment(RequestBuilder<crate::model::ChangeScheduledTaskCompartmentRequest>);

    impl ChangeScheduledTaskCompartment {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ChangeScheduledTaskCompartmentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .change_scheduled_task_compartment(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ChangeScheduledTaskCompartmentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        pub fn set_change_scheduled_task_compartment_details<T: Into<crate::model::ChangeScheduledTaskCompartmentDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.change_scheduled_task_compartment_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ChangeScheduledTaskCompartmentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ChangeScheduledTaskCompartmentRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ChangeScheduledTaskCompartment {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::clean][crate::client::LogAnalytics::clean] calls.
    #[derive(Clone, Debug)]
    pub struct Clean(RequestBuilder<crate::model::CleanRequest>);

    impl Clean {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CleanRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .clean(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CleanRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_log_group_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        pub fn set_time_start<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_start = Some(v.into());
            self
        }

        pub fn set_time_end<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_end = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CleanRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Clean {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::compare_content][crate::client::LogAnalytics::compare_content] calls.
    #[derive(Clone, Debug)]
    pub struct CompareContent(RequestBuilder<crate::model::CompareContentRequest>);

    impl CompareContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CompareContentRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CompareContentResult>> {
            (*self.0.stub)
                .compare_content(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CompareContentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_compare_content_details<T: Into<crate::model::CompareContentDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.compare_content_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CompareContentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CompareContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_ingest_time_rule][crate::client::LogAnalytics::create_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct CreateIngestTimeRule(RequestBuilder<crate::model::CreateIngestTimeRuleRequest>);

    impl CreateIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
            (*self.0.stub)
                .create_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateIngestTimeRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_create_ingest_time_rule_details<T: Into<crate::model::CreateIngestTimeRuleDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_ingest_time_rule_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_entity][crate::client::LogAnalytics::create_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsEntity(RequestBuilder<crate::model::CreateLogAnalyticsEntityRequest>);

    impl CreateLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
            (*self.0.stub)
                .create_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEntityRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_create_log_analytics_entity_details<T: Into<crate::model::CreateLogAnalyticsEntityDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_log_analytics_entity_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_entity_type][crate::client::LogAnalytics::create_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsEntityType(RequestBuilder<crate::model::CreateLogAnalyticsEntityTypeRequest>);

    impl CreateLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .create_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsEntityTypeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_create_log_analytics_entity_type_details<T: Into<crate::model::CreateLogAnalyticsEntityTypeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_log_analytics_entity_type_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_log_group][crate::client::LogAnalytics::create_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsLogGroup(RequestBuilder<crate::model::CreateLogAnalyticsLogGroupRequest>);

    impl CreateLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
            (*self.0.stub)
                .create_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsLogGroupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_create_log_analytics_log_group_details<T: Into<crate::model::CreateLogAnalyticsLogGroupDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_log_analytics_log_group_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_log_analytics_object_collection_rule][crate::client::LogAnalytics::create_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct CreateLogAnalyticsObjectCollectionRule(RequestBuilder<crate::model::CreateLogAnalyticsObjectCollectionRuleRequest>);

    impl CreateLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
            (*self.0.stub)
                .create_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_create_log_analytics_object_collection_rule_details<T: Into<crate::model::CreateLogAnalyticsObjectCollectionRuleDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_log_analytics_object_collection_rule_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::create_scheduled_task][crate::client::LogAnalytics::create_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct CreateScheduledTask(RequestBuilder<crate::model::CreateScheduledTaskRequest>);

    impl CreateScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::CreateScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .create_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::CreateScheduledTaskRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_create_scheduled_task_details<T: Into<crate::model::CreateScheduledTaskDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.create_scheduled_task_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::CreateScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_associations][crate::client::LogAnalytics::delete_associations] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteAssociations(RequestBuilder<crate::model::DeleteAssociationsRequest>);

    impl DeleteAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_associations(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteAssociationsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_delete_log_analytics_association_details<T: Into<crate::model::DeleteLogAnalyticsAssociationDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.delete_log_analytics_association_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_field][crate::client::LogAnalytics::delete_field] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteField(RequestBuilder<crate::model::DeleteFieldRequest>);

    impl DeleteField {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteFieldRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_field(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteFieldRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_field_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteFieldRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteFieldRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteField {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_ingest_time_rule][crate::client::LogAnalytics::delete_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteIngestTimeRule(RequestBuilder<crate::model::DeleteIngestTimeRuleRequest>);

    impl DeleteIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteIngestTimeRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_ingest_time_rule_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteIngestTimeRuleRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_label][crate::client::LogAnalytics::delete_label] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLabel(RequestBuilder<crate::model::DeleteLabelRequest>);

    impl DeleteLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_label(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLabelRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_label_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLabelRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLabelRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_entity][crate::client::LogAnalytics::delete_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsEntity(RequestBuilder<crate::model::DeleteLogAnalyticsEntityRequest>);

    impl DeleteLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEntityRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        pub fn set_is_force_delete<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force_delete = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEntityRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_entity_type][crate::client::LogAnalytics::delete_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsEntityType(RequestBuilder<crate::model::DeleteLogAnalyticsEntityTypeRequest>);

    impl DeleteLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsEntityTypeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_entity_type_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsEntityTypeRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_log_group][crate::client::LogAnalytics::delete_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsLogGroup(RequestBuilder<crate::model::DeleteLogAnalyticsLogGroupRequest>);

    impl DeleteLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsLogGroupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_log_group_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsLogGroupRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_log_analytics_object_collection_rule][crate::client::LogAnalytics::delete_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLogAnalyticsObjectCollectionRule(RequestBuilder<crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest>);

    impl DeleteLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_object_collection_rule_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLogAnalyticsObjectCollectionRuleRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_lookup][crate::client::LogAnalytics::delete_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteLookup(RequestBuilder<crate::model::DeleteLookupRequest>);

    impl DeleteLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteLookupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_lookup_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        pub fn set_is_force<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteLookupRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_parser][crate::client::LogAnalytics::delete_parser] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteParser(RequestBuilder<crate::model::DeleteParserRequest>);

    impl DeleteParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteParserRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_parser_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = v.into();
            self
        }

        pub fn set_is_ignore_used_sources<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_ignore_used_sources = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteParserRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteParserRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_scheduled_task][crate::client::LogAnalytics::delete_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteScheduledTask(RequestBuilder<crate::model::DeleteScheduledTaskRequest>);

    impl DeleteScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteScheduledTaskRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteScheduledTaskRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_source][crate::client::LogAnalytics::delete_source] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteSource(RequestBuilder<crate::model::DeleteSourceRequest>);

    impl DeleteSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteSourceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteSourceRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_upload][crate::client::LogAnalytics::delete_upload] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteUpload(RequestBuilder<crate::model::DeleteUploadRequest>);

    impl DeleteUpload {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteUploadRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_upload(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteUploadRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteUploadRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteUploadRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteUpload {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_upload_file][crate::client::LogAnalytics::delete_upload_file] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteUploadFile(RequestBuilder<crate::model::DeleteUploadFileRequest>);

    impl DeleteUploadFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteUploadFileRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_upload_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteUploadFileRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_reference = v.into();
            self
        }

        pub fn set_file_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.file_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteUploadFileRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DeleteUploadFileRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteUploadFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::delete_upload_warning][crate::client::LogAnalytics::delete_upload_warning] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteUploadWarning(RequestBuilder<crate::model::DeleteUploadWarningRequest>);

    impl DeleteUploadWarning {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DeleteUploadWarningRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .delete_upload_warning(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DeleteUploadWarningRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_reference = v.into();
            self
        }

        pub fn set_warning_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.warning_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DeleteUploadWarningRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteUploadWarning {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::disable_archiving][crate::client::LogAnalytics::disable_archiving] calls.
    #[derive(Clone, Debug)]
    pub struct DisableArchiving(RequestBuilder<crate::model::DisableArchivingRequest>);

    impl DisableArchiving {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableArchivingRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Success>> {
            (*self.0.stub)
                .disable_archiving(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DisableArchivingRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DisableArchivingRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DisableArchivingRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableArchiving {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::disable_auto_association][crate::client::LogAnalytics::disable_auto_association] calls.
    #[derive(Clone, Debug)]
    pub struct DisableAutoAssociation(RequestBuilder<crate::model::DisableAutoAssociationRequest>);

    impl DisableAutoAssociation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableAutoAssociationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .disable_auto_association(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DisableAutoAssociationRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_disable_auto_association_details<T: Into<crate::model::DisableAutoAssociationDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.disable_auto_association_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DisableAutoAssociationRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DisableAutoAssociationRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableAutoAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::disable_ingest_time_rule][crate::client::LogAnalytics::disable_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct DisableIngestTimeRule(RequestBuilder<crate::model::DisableIngestTimeRuleRequest>);

    impl DisableIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .disable_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DisableIngestTimeRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_ingest_time_rule_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DisableIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DisableIngestTimeRuleRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::disable_source_event_types][crate::client::LogAnalytics::disable_source_event_types] calls.
    #[derive(Clone, Debug)]
    pub struct DisableSourceEventTypes(RequestBuilder<crate::model::DisableSourceEventTypesRequest>);

    impl DisableSourceEventTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::DisableSourceEventTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .disable_source_event_types(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::DisableSourceEventTypesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_event_type_details<T: Into<crate::model::EventTypeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.event_type_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::DisableSourceEventTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::DisableSourceEventTypesRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DisableSourceEventTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::enable_archiving][crate::client::LogAnalytics::enable_archiving] calls.
    #[derive(Clone, Debug)]
    pub struct EnableArchiving(RequestBuilder<crate::model::EnableArchivingRequest>);

    impl EnableArchiving {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableArchivingRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Success>> {
            (*self.0.stub)
                .enable_archiving(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EnableArchivingRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EnableArchivingRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::EnableArchivingRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableArchiving {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::enable_auto_association][crate::client::LogAnalytics::enable_auto_association] calls.
    #[derive(Clone, Debug)]
    pub struct EnableAutoAssociation(RequestBuilder<crate::model::EnableAutoAssociationRequest>);

    impl EnableAutoAssociation {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableAutoAssociationRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .enable_auto_association(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EnableAutoAssociationRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_enable_auto_association_details<T: Into<crate::model::EnableAutoAssociationDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.enable_auto_association_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EnableAutoAssociationRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::EnableAutoAssociationRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableAutoAssociation {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::enable_ingest_time_rule][crate::client::LogAnalytics::enable_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct EnableIngestTimeRule(RequestBuilder<crate::model::EnableIngestTimeRuleRequest>);

    impl EnableIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .enable_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EnableIngestTimeRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_ingest_time_rule_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EnableIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::EnableIngestTimeRuleRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::enable_source_event_types][crate::client::LogAnalytics::enable_source_event_types] calls.
    #[derive(Clone, Debug)]
    pub struct EnableSourceEventTypes(RequestBuilder<crate::model::EnableSourceEventTypesRequest>);

    impl EnableSourceEventTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EnableSourceEventTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .enable_source_event_types(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EnableSourceEventTypesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_event_type_details<T: Into<crate::model::EventTypeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.event_type_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EnableSourceEventTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::EnableSourceEventTypesRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EnableSourceEventTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::estimate_purge_data_size][crate::client::LogAnalytics::estimate_purge_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct EstimatePurgeDataSize(RequestBuilder<crate::model::EstimatePurgeDataSizeRequest>);

    impl EstimatePurgeDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EstimatePurgeDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EstimatePurgeDataSizeResult>> {
            (*self.0.stub)
                .estimate_purge_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EstimatePurgeDataSizeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_estimate_purge_data_size_details<T: Into<crate::model::EstimatePurgeDataSizeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.estimate_purge_data_size_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EstimatePurgeDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EstimatePurgeDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::estimate_recall_data_size][crate::client::LogAnalytics::estimate_recall_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct EstimateRecallDataSize(RequestBuilder<crate::model::EstimateRecallDataSizeRequest>);

    impl EstimateRecallDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EstimateRecallDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EstimateRecallDataSizeResult>> {
            (*self.0.stub)
                .estimate_recall_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EstimateRecallDataSizeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_estimate_recall_data_size_details<T: Into<crate::model::EstimateRecallDataSizeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.estimate_recall_data_size_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EstimateRecallDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EstimateRecallDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::estimate_release_data_size][crate::client::LogAnalytics::estimate_release_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct EstimateReleaseDataSize(RequestBuilder<crate::model::EstimateReleaseDataSizeRequest>);

    impl EstimateReleaseDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::EstimateReleaseDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EstimateReleaseDataSizeResult>> {
            (*self.0.stub)
                .estimate_release_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::EstimateReleaseDataSizeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_estimate_release_data_size_details<T: Into<crate::model::EstimateReleaseDataSizeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.estimate_release_data_size_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::EstimateReleaseDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for EstimateReleaseDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::export_custom_content][crate::client::LogAnalytics::export_custom_content] calls.
    #[derive(Debug)]
    pub struct ExportCustomContent(RequestBuilder<crate::model::ExportCustomContentRequest>, crate::export::ExportSink);

    impl ExportCustomContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub), crate::export::ExportSink::default())
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExportCustomContentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request and delivers the payload.
        ///
        /// The payload goes to the callback if one is set, otherwise to the
        /// writer or file. Without either, it is buffered into a string.
        pub async fn send(self) -> Result<gax::response::Response<crate::export::ExportOutput>> {
            let response = (*self.0.stub)
                .export_custom_content(self.0.request, self.0.options)
                .await?;
            let (parts, stream) = response.into_parts();
            let output = self.1.drain(stream).await?;
            Ok(gax::response::Response::from_parts(parts, output))
        }

        /// Delivers each chunk of the payload to `callback`.
        pub fn with_callback<F>(mut self, callback: F) -> Self
        where
            F: FnMut(bytes::Bytes) + Send + 'static,
        {
            self.1.set_callback(callback);
            self
        }

        /// Writes the payload to `writer`.
        pub fn with_writer<W>(mut self, writer: W) -> Self
        where
            W: tokio::io::AsyncWrite + Send + 'static,
        {
            self.1.set_writer(writer);
            self
        }

        /// Writes the payload to a new file at `path`, replacing any existing file.
        pub fn with_file<P: Into<std::path::PathBuf>>(mut self, path: P) -> Self {
            self.1.set_file(path);
            self
        }

        /// Sets the value of [namespace_name][crate::model::ExportCustomContentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_export_content<T: Into<crate::model::ExportContent>>(mut self, v: T) -> Self {
            self.0.request.export_content = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExportCustomContentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExportCustomContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::export_query_result][crate::client::LogAnalytics::export_query_result] calls.
    #[derive(Debug)]
    pub struct ExportQueryResult(RequestBuilder<crate::model::ExportQueryResultRequest>, crate::export::ExportSink);

    impl ExportQueryResult {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub), crate::export::ExportSink::default())
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExportQueryResultRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request and delivers the payload.
        ///
        /// The payload goes to the callback if one is set, otherwise to the
        /// writer or file. Without either, it is buffered into a string.
        pub async fn send(self) -> Result<gax::response::Response<crate::export::ExportOutput>> {
            let response = (*self.0.stub)
                .export_query_result(self.0.request, self.0.options)
                .await?;
            let (parts, stream) = response.into_parts();
            let output = self.1.drain(stream).await?;
            Ok(gax::response::Response::from_parts(parts, output))
        }

        /// Delivers each chunk of the payload to `callback`.
        pub fn with_callback<F>(mut self, callback: F) -> Self
        where
            F: FnMut(bytes::Bytes) + Send + 'static,
        {
            self.1.set_callback(callback);
            self
        }

        /// Writes the payload to `writer`.
        pub fn with_writer<W>(mut self, writer: W) -> Self
        where
            W: tokio::io::AsyncWrite + Send + 'static,
        {
            self.1.set_writer(writer);
            self
        }

        /// Writes the payload to a new file at `path`, replacing any existing file.
        pub fn with_file<P: Into<std::path::PathBuf>>(mut self, path: P) -> Self {
            self.1.set_file(path);
            self
        }

        /// Sets the value of [namespace_name][crate::model::ExportQueryResultRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_export_details<T: Into<crate::model::ExportDetails>>(mut self, v: T) -> Self {
            self.0.request.export_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExportQueryResultRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExportQueryResult {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::extract_structured_log_field_paths][crate::client::LogAnalytics::extract_structured_log_field_paths] calls.
    #[derive(Clone, Debug)]
    pub struct ExtractStructuredLogFieldPaths(RequestBuilder<crate::model::ExtractStructuredLogFieldPathsRequest>);

    impl ExtractStructuredLogFieldPaths {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExtractStructuredLogFieldPathsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ExtractLogFieldResults>> {
            (*self.0.stub)
                .extract_structured_log_field_paths(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ExtractStructuredLogFieldPathsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_parser<T: Into<crate::model::LogAnalyticsParser>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_parser = Some(v.into());
            self
        }

        pub fn set_parser_type<T: Into<crate::model::extract_structured_log_field_paths_request::ParserType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.parser_type = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExtractStructuredLogFieldPathsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExtractStructuredLogFieldPaths {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::extract_structured_log_header_paths][crate::client::LogAnalytics::extract_structured_log_header_paths] calls.
    #[derive(Clone, Debug)]
    pub struct ExtractStructuredLogHeaderPaths(RequestBuilder<crate::model::ExtractStructuredLogHeaderPathsRequest>);

    impl ExtractStructuredLogHeaderPaths {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ExtractStructuredLogHeaderPathsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ExtractLogHeaderResults>> {
            (*self.0.stub)
                .extract_structured_log_header_paths(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ExtractStructuredLogHeaderPathsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_parser<T: Into<crate::model::LogAnalyticsParser>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_parser = Some(v.into());
            self
        }

        pub fn set_parser_type<T: Into<crate::model::extract_structured_log_header_paths_request::ParserType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.parser_type = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ExtractStructuredLogHeaderPathsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ExtractStructuredLogHeaderPaths {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::filter][crate::client::LogAnalytics::filter] calls.
    #[derive(Clone, Debug)]
    pub struct Filter(RequestBuilder<crate::model::FilterRequest>);

    impl Filter {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::FilterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::FilterOutput>> {
            (*self.0.stub)
                .filter(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::FilterRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_filter_details<T: Into<crate::model::FilterDetails>>(mut self, v: T) -> Self {
            self.0.request.filter_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::FilterRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Filter {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_association_summary][crate::client::LogAnalytics::get_association_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetAssociationSummary(RequestBuilder<crate::model::GetAssociationSummaryRequest>);

    impl GetAssociationSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetAssociationSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::AssociationSummaryReport>> {
            (*self.0.stub)
                .get_association_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetAssociationSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetAssociationSummaryRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetAssociationSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetAssociationSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_category][crate::client::LogAnalytics::get_category] calls.
    #[derive(Clone, Debug)]
    pub struct GetCategory(RequestBuilder<crate::model::GetCategoryRequest>);

    impl GetCategory {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetCategoryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategory>> {
            (*self.0.stub)
                .get_category(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetCategoryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_category_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.category_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetCategoryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCategory {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_column_names][crate::client::LogAnalytics::get_column_names] calls.
    #[derive(Clone, Debug)]
    pub struct GetColumnNames(RequestBuilder<crate::model::GetColumnNamesRequest>);

    impl GetColumnNames {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetColumnNamesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ColumnNameCollection>> {
            (*self.0.stub)
                .get_column_names(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetColumnNamesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_sql_query<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.sql_query = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetColumnNamesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetColumnNames {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_config_work_request][crate::client::LogAnalytics::get_config_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetConfigWorkRequest(RequestBuilder<crate::model::GetConfigWorkRequestRequest>);

    impl GetConfigWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetConfigWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsConfigWorkRequest>> {
            (*self.0.stub)
                .get_config_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetConfigWorkRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetConfigWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetConfigWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_field][crate::client::LogAnalytics::get_field] calls.
    #[derive(Clone, Debug)]
    pub struct GetField(RequestBuilder<crate::model::GetFieldRequest>);

    impl GetField {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFieldRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
            (*self.0.stub)
                .get_field(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetFieldRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_field_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetFieldRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetField {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_fields_summary][crate::client::LogAnalytics::get_fields_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetFieldsSummary(RequestBuilder<crate::model::GetFieldsSummaryRequest>);

    impl GetFieldsSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetFieldsSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::FieldSummaryReport>> {
            (*self.0.stub)
                .get_fields_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetFieldsSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_is_show_detail<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_show_detail = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetFieldsSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetFieldsSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_ingest_time_rule][crate::client::LogAnalytics::get_ingest_time_rule] calls.
    #[derive(Clone, Debug)]
    pub struct GetIngestTimeRule(RequestBuilder<crate::model::GetIngestTimeRuleRequest>);

    impl GetIngestTimeRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetIngestTimeRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::IngestTimeRule>> {
            (*self.0.stub)
                .get_ingest_time_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetIngestTimeRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_ingest_time_rule_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.ingest_time_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetIngestTimeRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetIngestTimeRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_label][crate::client::LogAnalytics::get_label] calls.
    #[derive(Clone, Debug)]
    pub struct GetLabel(RequestBuilder<crate::model::GetLabelRequest>);

    impl GetLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
            (*self.0.stub)
                .get_label(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLabelRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_label_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLabelRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_label_summary][crate::client::LogAnalytics::get_label_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLabelSummary(RequestBuilder<crate::model::GetLabelSummaryRequest>);

    impl GetLabelSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLabelSummaryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LabelSummaryReport>> {
            (*self.0.stub)
                .get_label_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLabelSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLabelSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLabelSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_entities_summary][crate::client::LogAnalytics::get_log_analytics_entities_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEntitiesSummary(RequestBuilder<crate::model::GetLogAnalyticsEntitiesSummaryRequest>);

    impl GetLogAnalyticsEntitiesSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEntitiesSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntitySummaryReport>> {
            (*self.0.stub)
                .get_log_analytics_entities_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntitiesSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntitiesSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEntitiesSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_entity][crate::client::LogAnalytics::get_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEntity(RequestBuilder<crate::model::GetLogAnalyticsEntityRequest>);

    impl GetLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
            (*self.0.stub)
                .get_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntityRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_entity_type][crate::client::LogAnalytics::get_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsEntityType(RequestBuilder<crate::model::GetLogAnalyticsEntityTypeRequest>);

    impl GetLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityType>> {
            (*self.0.stub)
                .get_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsEntityTypeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_entity_type_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_log_group][crate::client::LogAnalytics::get_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsLogGroup(RequestBuilder<crate::model::GetLogAnalyticsLogGroupRequest>);

    impl GetLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
            (*self.0.stub)
                .get_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsLogGroupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_log_group_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_log_groups_summary][crate::client::LogAnalytics::get_log_analytics_log_groups_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsLogGroupsSummary(RequestBuilder<crate::model::GetLogAnalyticsLogGroupsSummaryRequest>);

    impl GetLogAnalyticsLogGroupsSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsLogGroupsSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogGroupSummaryReport>> {
            (*self.0.stub)
                .get_log_analytics_log_groups_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsLogGroupsSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsLogGroupsSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_analytics_object_collection_rule][crate::client::LogAnalytics::get_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogAnalyticsObjectCollectionRule(RequestBuilder<crate::model::GetLogAnalyticsObjectCollectionRuleRequest>);

    impl GetLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
            (*self.0.stub)
                .get_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_object_collection_rule_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_log_sets_count][crate::client::LogAnalytics::get_log_sets_count] calls.
    #[derive(Clone, Debug)]
    pub struct GetLogSetsCount(RequestBuilder<crate::model::GetLogSetsCountRequest>);

    impl GetLogSetsCount {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLogSetsCountRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::LogSetsCount>> {
            (*self.0.stub)
                .get_log_sets_count(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLogSetsCountRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLogSetsCountRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLogSetsCount {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_lookup][crate::client::LogAnalytics::get_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct GetLookup(RequestBuilder<crate::model::GetLookupRequest>);

    impl GetLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
            (*self.0.stub)
                .get_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLookupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_lookup_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_lookup_summary][crate::client::LogAnalytics::get_lookup_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetLookupSummary(RequestBuilder<crate::model::GetLookupSummaryRequest>);

    impl GetLookupSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetLookupSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LookupSummaryReport>> {
            (*self.0.stub)
                .get_lookup_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetLookupSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetLookupSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetLookupSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_namespace][crate::client::LogAnalytics::get_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct GetNamespace(RequestBuilder<crate::model::GetNamespaceRequest>);

    impl GetNamespace {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetNamespaceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Namespace>> {
            (*self.0.stub)
                .get_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetNamespaceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetNamespaceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetNamespace {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_parser][crate::client::LogAnalytics::get_parser] calls.
    #[derive(Clone, Debug)]
    pub struct GetParser(RequestBuilder<crate::model::GetParserRequest>);

    impl GetParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
            (*self.0.stub)
                .get_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetParserRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_parser_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetParserRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_parser_summary][crate::client::LogAnalytics::get_parser_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetParserSummary(RequestBuilder<crate::model::GetParserSummaryRequest>);

    impl GetParserSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetParserSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ParserSummaryReport>> {
            (*self.0.stub)
                .get_parser_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetParserSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetParserSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetParserSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_preferences][crate::client::LogAnalytics::get_preferences] calls.
    #[derive(Clone, Debug)]
    pub struct GetPreferences(RequestBuilder<crate::model::GetPreferencesRequest>);

    impl GetPreferences {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetPreferencesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsPreferenceCollection>> {
            (*self.0.stub)
                .get_preferences(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsPreferenceCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsPreferenceCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::GetPreferencesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::GetPreferencesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::GetPreferencesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::GetPreferencesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::GetPreferencesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::get_preferences_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetPreferencesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetPreferences {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_query_result][crate::client::LogAnalytics::get_query_result] calls.
    #[derive(Clone, Debug)]
    pub struct GetQueryResult(RequestBuilder<crate::model::GetQueryResultRequest>);

    impl GetQueryResult {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetQueryResultRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
            (*self.0.stub)
                .get_query_result(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetQueryResultRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::GetQueryResultRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::GetQueryResultRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        pub fn set_should_include_columns<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_columns = Some(v.into());
            self
        }

        pub fn set_should_include_fields<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_fields = Some(v.into());
            self
        }

        pub fn set_output_mode<T: Into<crate::model::get_query_result_request::OutputMode>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.output_mode = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetQueryResultRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetQueryResult {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_query_work_request][crate::client::LogAnalytics::get_query_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetQueryWorkRequest(RequestBuilder<crate::model::GetQueryWorkRequestRequest>);

    impl GetQueryWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetQueryWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QueryWorkRequest>> {
            (*self.0.stub)
                .get_query_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetQueryWorkRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetQueryWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetQueryWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_recall_count][crate::client::LogAnalytics::get_recall_count] calls.
    #[derive(Clone, Debug)]
    pub struct GetRecallCount(RequestBuilder<crate::model::GetRecallCountRequest>);

    impl GetRecallCount {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRecallCountRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::RecallCount>> {
            (*self.0.stub)
                .get_recall_count(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetRecallCountRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetRecallCountRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRecallCount {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_recalled_data_size][crate::client::LogAnalytics::get_recalled_data_size] calls.
    #[derive(Clone, Debug)]
    pub struct GetRecalledDataSize(RequestBuilder<crate::model::GetRecalledDataSizeRequest>);

    impl GetRecalledDataSize {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRecalledDataSizeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::RecalledDataSize>> {
            (*self.0.stub)
                .get_recalled_data_size(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetRecalledDataSizeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_time_data_started<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_data_started = Some(v.into());
            self
        }

        pub fn set_time_data_ended<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_data_ended = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetRecalledDataSizeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRecalledDataSize {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_rules_summary][crate::client::LogAnalytics::get_rules_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetRulesSummary(RequestBuilder<crate::model::GetRulesSummaryRequest>);

    impl GetRulesSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetRulesSummaryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::RuleSummaryReport>> {
            (*self.0.stub)
                .get_rules_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetRulesSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetRulesSummaryRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetRulesSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetRulesSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_scheduled_task][crate::client::LogAnalytics::get_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct GetScheduledTask(RequestBuilder<crate::model::GetScheduledTaskRequest>);

    impl GetScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .get_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetScheduledTaskRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_source][crate::client::LogAnalytics::get_source] calls.
    #[derive(Clone, Debug)]
    pub struct GetSource(RequestBuilder<crate::model::GetSourceRequest>);

    impl GetSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
            (*self.0.stub)
                .get_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetSourceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::GetSourceRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_source_summary][crate::client::LogAnalytics::get_source_summary] calls.
    #[derive(Clone, Debug)]
    pub struct GetSourceSummary(RequestBuilder<crate::model::GetSourceSummaryRequest>);

    impl GetSourceSummary {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetSourceSummaryRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::SourceSummaryReport>> {
            (*self.0.stub)
                .get_source_summary(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetSourceSummaryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetSourceSummaryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetSourceSummary {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_storage][crate::client::LogAnalytics::get_storage] calls.
    #[derive(Clone, Debug)]
    pub struct GetStorage(RequestBuilder<crate::model::GetStorageRequest>);

    impl GetStorage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetStorageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Storage>> {
            (*self.0.stub)
                .get_storage(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetStorageRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetStorageRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetStorage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_storage_usage][crate::client::LogAnalytics::get_storage_usage] calls.
    #[derive(Clone, Debug)]
    pub struct GetStorageUsage(RequestBuilder<crate::model::GetStorageUsageRequest>);

    impl GetStorageUsage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetStorageUsageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::StorageUsage>> {
            (*self.0.stub)
                .get_storage_usage(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetStorageUsageRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetStorageUsageRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetStorageUsage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_storage_work_request][crate::client::LogAnalytics::get_storage_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetStorageWorkRequest(RequestBuilder<crate::model::GetStorageWorkRequestRequest>);

    impl GetStorageWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetStorageWorkRequestRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::StorageWorkRequest>> {
            (*self.0.stub)
                .get_storage_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetStorageWorkRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetStorageWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetStorageWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_unprocessed_data_bucket][crate::client::LogAnalytics::get_unprocessed_data_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct GetUnprocessedDataBucket(RequestBuilder<crate::model::GetUnprocessedDataBucketRequest>);

    impl GetUnprocessedDataBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetUnprocessedDataBucketRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
            (*self.0.stub)
                .get_unprocessed_data_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetUnprocessedDataBucketRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetUnprocessedDataBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetUnprocessedDataBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_upload][crate::client::LogAnalytics::get_upload] calls.
    #[derive(Clone, Debug)]
    pub struct GetUpload(RequestBuilder<crate::model::GetUploadRequest>);

    impl GetUpload {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetUploadRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Upload>> {
            (*self.0.stub)
                .get_upload(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetUploadRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetUploadRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetUpload {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::get_work_request][crate::client::LogAnalytics::get_work_request] calls.
    #[derive(Clone, Debug)]
    pub struct GetWorkRequest(RequestBuilder<crate::model::GetWorkRequestRequest>);

    impl GetWorkRequest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::GetWorkRequestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::WorkRequest>> {
            (*self.0.stub)
                .get_work_request(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::GetWorkRequestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::GetWorkRequestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetWorkRequest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::import_custom_content][crate::client::LogAnalytics::import_custom_content] calls.
    #[derive(Clone, Debug)]
    pub struct ImportCustomContent(RequestBuilder<crate::model::ImportCustomContentRequest>);

    impl ImportCustomContent {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ImportCustomContentRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CustomContentSummary>> {
            (*self.0.stub)
                .import_custom_content(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ImportCustomContentRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_import_custom_content_file_body<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.import_custom_content_file_body = Some(v.into());
            self
        }

        pub fn set_is_overwrite<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_overwrite = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ImportCustomContentRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ImportCustomContentRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [expect][crate::model::ImportCustomContentRequest::expect].
        pub fn set_expect<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ImportCustomContent {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_associable_entities][crate::client::LogAnalytics::list_associable_entities] calls.
    #[derive(Clone, Debug)]
    pub struct ListAssociableEntities(RequestBuilder<crate::model::ListAssociableEntitiesRequest>);

    impl ListAssociableEntities {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAssociableEntitiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::AssociableEntityCollection>> {
            (*self.0.stub)
                .list_associable_entities(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::AssociableEntityCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::AssociableEntityCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListAssociableEntitiesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListAssociableEntitiesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_type<T: Into<crate::model::list_associable_entities_request::Type>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.r#type = Some(v.into());
            self
        }

        pub fn set_search_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.search_text = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListAssociableEntitiesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListAssociableEntitiesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListAssociableEntitiesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListAssociableEntitiesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_associable_entities_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListAssociableEntitiesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAssociableEntities {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_associated_entities][crate::client::LogAnalytics::list_associated_entities] calls.
    #[derive(Clone, Debug)]
    pub struct ListAssociatedEntities(RequestBuilder<crate::model::ListAssociatedEntitiesRequest>);

    impl ListAssociatedEntities {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAssociatedEntitiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociatedEntityCollection>> {
            (*self.0.stub)
                .list_associated_entities(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsAssociatedEntityCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsAssociatedEntityCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListAssociatedEntitiesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListAssociatedEntitiesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = Some(v.into());
            self
        }

        pub fn set_entity_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type = Some(v.into());
            self
        }

        pub fn set_entity_type_display_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type_display_name = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListAssociatedEntitiesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListAssociatedEntitiesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListAssociatedEntitiesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListAssociatedEntitiesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_associated_entities_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListAssociatedEntitiesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAssociatedEntities {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_auto_associations][crate::client::LogAnalytics::list_auto_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListAutoAssociations(RequestBuilder<crate::model::ListAutoAssociationsRequest>);

    impl ListAutoAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListAutoAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::AutoAssociationCollection>> {
            (*self.0.stub)
                .list_auto_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::AutoAssociationCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::AutoAssociationCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListAutoAssociationsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListAutoAssociationsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListAutoAssociationsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListAutoAssociationsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListAutoAssociationsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_auto_associations_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListAutoAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListAutoAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_categories][crate::client::LogAnalytics::list_categories] calls.
    #[derive(Clone, Debug)]
    pub struct ListCategories(RequestBuilder<crate::model::ListCategoriesRequest>);

    impl ListCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListCategoriesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsCategoryCollection>> {
            (*self.0.stub)
                .list_categories(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsCategoryCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsCategoryCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListCategoriesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_category_display_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.category_display_text = Some(v.into());
            self
        }

        pub fn set_category_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.category_type = Some(v.into());
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListCategoriesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListCategoriesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListCategoriesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListCategoriesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_categories_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_config_work_requests][crate::client::LogAnalytics::list_config_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListConfigWorkRequests(RequestBuilder<crate::model::ListConfigWorkRequestsRequest>);

    impl ListConfigWorkRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListConfigWorkRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::LogAnalyticsConfigWorkRequestCollection>,
        > {
            (*self.0.stub)
                .list_config_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsConfigWorkRequestCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsConfigWorkRequestCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListConfigWorkRequestsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListConfigWorkRequestsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListConfigWorkRequestsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListConfigWorkRequestsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListConfigWorkRequestsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListConfigWorkRequestsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_config_work_requests_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListConfigWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListConfigWorkRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_effective_properties][crate::client::LogAnalytics::list_effective_properties] calls.
    #[derive(Clone, Debug)]
    pub struct ListEffectiveProperties(RequestBuilder<crate::model::ListEffectivePropertiesRequest>);

    impl ListEffectiveProperties {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEffectivePropertiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EffectivePropertyCollection>> {
            (*self.0.stub)
                .list_effective_properties(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::EffectivePropertyCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::EffectivePropertyCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListEffectivePropertiesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_agent_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.agent_id = Some(v.into());
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = Some(v.into());
            self
        }

        pub fn set_is_include_patterns<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include_patterns = Some(v.into());
            self
        }

        pub fn set_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = Some(v.into());
            self
        }

        pub fn set_pattern_id<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.pattern_id = Some(v.into());
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListEffectivePropertiesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListEffectivePropertiesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListEffectivePropertiesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListEffectivePropertiesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_effective_properties_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListEffectivePropertiesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEffectiveProperties {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_encryption_key_info][crate::client::LogAnalytics::list_encryption_key_info] calls.
    #[derive(Clone, Debug)]
    pub struct ListEncryptionKeyInfo(RequestBuilder<crate::model::ListEncryptionKeyInfoRequest>);

    impl ListEncryptionKeyInfo {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEncryptionKeyInfoRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EncryptionKeyInfoCollection>> {
            (*self.0.stub)
                .list_encryption_key_info(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ListEncryptionKeyInfoRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListEncryptionKeyInfoRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEncryptionKeyInfo {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_entity_associations][crate::client::LogAnalytics::list_entity_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListEntityAssociations(RequestBuilder<crate::model::ListEntityAssociationsRequest>);

    impl ListEntityAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEntityAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
            (*self.0.stub)
                .list_entity_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsEntityCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsEntityCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListEntityAssociationsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        pub fn set_direct_or_all_associations<T: Into<crate::model::list_entity_associations_request::DirectOrAllAssociations>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.direct_or_all_associations = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListEntityAssociationsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListEntityAssociationsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListEntityAssociationsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListEntityAssociationsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_entity_associations_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListEntityAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEntityAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_entity_source_associations][crate::client::LogAnalytics::list_entity_source_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListEntitySourceAssociations(RequestBuilder<crate::model::ListEntitySourceAssociationsRequest>);

    impl ListEntitySourceAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListEntitySourceAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
            (*self.0.stub)
                .list_entity_source_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsAssociationCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsAssociationCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListEntitySourceAssociationsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListEntitySourceAssociationsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = Some(v.into());
            self
        }

        pub fn set_entity_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type = Some(v.into());
            self
        }

        pub fn set_entity_type_display_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type_display_name = Some(v.into());
            self
        }

        pub fn set_life_cycle_state<T: Into<crate::model::list_entity_source_associations_request::LifeCycleState>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.life_cycle_state = Some(v.into());
            self
        }

        pub fn set_is_show_total<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_show_total = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListEntitySourceAssociationsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListEntitySourceAssociationsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListEntitySourceAssociationsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListEntitySourceAssociationsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_entity_source_associations_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListEntitySourceAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListEntitySourceAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_fields][crate::client::LogAnalytics::list_fields] calls.
    #[derive(Clone, Debug)]
    pub struct ListFields(RequestBuilder<crate::model::ListFieldsRequest>);

    impl ListFields {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListFieldsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsFieldCollection>> {
            (*self.0.stub)
                .list_fields(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsFieldCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsFieldCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListFieldsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_is_match_all<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_match_all = Some(v.into());
            self
        }

        pub fn set_source_ids<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_ids = Some(v.into());
            self
        }

        pub fn set_source_names<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_names = Some(v.into());
            self
        }

        pub fn set_parser_type<T: Into<crate::model::list_fields_request::ParserType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.parser_type = Some(v.into());
            self
        }

        pub fn set_parser_ids<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_ids = Some(v.into());
            self
        }

        pub fn set_parser_names<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_names = Some(v.into());
            self
        }

        pub fn set_is_include_parser<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include_parser = Some(v.into());
            self
        }

        pub fn set_filter<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filter = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListFieldsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListFieldsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListFieldsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListFieldsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_fields_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListFieldsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListFields {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_ingest_time_rules][crate::client::LogAnalytics::list_ingest_time_rules] calls.
    #[derive(Clone, Debug)]
    pub struct ListIngestTimeRules(RequestBuilder<crate::model::ListIngestTimeRulesRequest>);

    impl ListIngestTimeRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListIngestTimeRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::IngestTimeRuleSummaryCollection>> {
            (*self.0.stub)
                .list_ingest_time_rules(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::IngestTimeRuleSummaryCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::IngestTimeRuleSummaryCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListIngestTimeRulesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListIngestTimeRulesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_display_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.display_name = Some(v.into());
            self
        }

        pub fn set_lifecycle_state<T: Into<crate::model::ConfigLifecycleState>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        pub fn set_condition_kind<T: Into<crate::model::list_ingest_time_rules_request::ConditionKind>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.condition_kind = Some(v.into());
            self
        }

        pub fn set_field_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_name = Some(v.into());
            self
        }

        pub fn set_field_value<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.field_value = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListIngestTimeRulesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListIngestTimeRulesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListIngestTimeRulesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListIngestTimeRulesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_ingest_time_rules_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListIngestTimeRulesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListIngestTimeRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_label_priorities][crate::client::LogAnalytics::list_label_priorities] calls.
    #[derive(Clone, Debug)]
    pub struct ListLabelPriorities(RequestBuilder<crate::model::ListLabelPrioritiesRequest>);

    impl ListLabelPriorities {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLabelPrioritiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LabelPriorityCollection>> {
            (*self.0.stub)
                .list_label_priorities(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::LabelPriorityCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LabelPriorityCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLabelPrioritiesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListLabelPrioritiesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLabelPrioritiesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLabelPrioritiesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLabelPriorities {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_label_source_details][crate::client::LogAnalytics::list_label_source_details] calls.
    #[derive(Clone, Debug)]
    pub struct ListLabelSourceDetails(RequestBuilder<crate::model::ListLabelSourceDetailsRequest>);

    impl ListLabelSourceDetails {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLabelSourceDetailsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LabelSourceCollection>> {
            (*self.0.stub)
                .list_label_source_details(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::LabelSourceCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::LabelSourceCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLabelSourceDetailsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_label_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLabelSourceDetailsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLabelSourceDetailsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLabelSourceDetailsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLabelSourceDetailsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_label_source_details_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLabelSourceDetailsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLabelSourceDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_labels][crate::client::LogAnalytics::list_labels] calls.
    #[derive(Clone, Debug)]
    pub struct ListLabels(RequestBuilder<crate::model::ListLabelsRequest>);

    impl ListLabels {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLabelsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelCollection>> {
            (*self.0.stub)
                .list_labels(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsLabelCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsLabelCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLabelsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_label_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_name = Some(v.into());
            self
        }

        pub fn set_label_display_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.label_display_text = Some(v.into());
            self
        }

        pub fn set_is_system<T: Into<crate::model::list_labels_request::IsSystem>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_system = Some(v.into());
            self
        }

        pub fn set_label_priority<T: Into<crate::model::list_labels_request::LabelPriority>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.label_priority = Some(v.into());
            self
        }

        pub fn set_is_count_pop<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_count_pop = Some(v.into());
            self
        }

        pub fn set_is_alias_pop<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_alias_pop = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLabelsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLabelsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLabelsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLabelsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_labels_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        pub fn set_label_type<T: Into<crate::model::list_labels_request::LabelType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.label_type = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLabelsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLabels {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_entities][crate::client::LogAnalytics::list_log_analytics_entities] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsEntities(RequestBuilder<crate::model::ListLogAnalyticsEntitiesRequest>);

    impl ListLogAnalyticsEntities {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsEntitiesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityCollection>> {
            (*self.0.stub)
                .list_log_analytics_entities(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsEntityCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsEntityCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntitiesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsEntitiesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        pub fn set_name_contains<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name_contains = Some(v.into());
            self
        }

        pub fn set_entity_type_name<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<std::string::String>,
        {
            self.0.request.entity_type_name = v.into_iter().map(|i| i.into()).collect();
            self
        }

        pub fn set_cloud_resource_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.cloud_resource_id = Some(v.into());
            self
        }

        pub fn set_lifecycle_state<T: Into<crate::model::EntityLifecycleStates>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        pub fn set_lifecycle_details_contains<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.lifecycle_details_contains = Some(v.into());
            self
        }

        pub fn set_is_management_agent_id_null<T: Into<crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_management_agent_id_null = Some(v.into());
            self
        }

        pub fn set_hostname<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.hostname = Some(v.into());
            self
        }

        pub fn set_hostname_contains<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.hostname_contains = Some(v.into());
            self
        }

        pub fn set_source_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_id = Some(v.into());
            self
        }

        pub fn set_creation_source_type<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::list_log_analytics_entities_request::CreationSourceType>,
        {
            self.0.request.creation_source_type = v.into_iter().map(|i| i.into()).collect();
            self
        }

        pub fn set_creation_source_details<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.creation_source_details = Some(v.into());
            self
        }

        pub fn set_is_show_associated_sources_count<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_show_associated_sources_count = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsEntitiesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsEntitiesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntitiesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntitiesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_log_analytics_entities_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntitiesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsEntities {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_entity_topology][crate::client::LogAnalytics::list_log_analytics_entity_topology] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsEntityTopology(RequestBuilder<crate::model::ListLogAnalyticsEntityTopologyRequest>);

    impl ListLogAnalyticsEntityTopology {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsEntityTopologyRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTopologyCollection>> {
            (*self.0.stub)
                .list_log_analytics_entity_topology(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsEntityTopologyCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsEntityTopologyCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntityTopologyRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        pub fn set_lifecycle_state<T: Into<crate::model::EntityLifecycleStates>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsEntityTopologyRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsEntityTopologyRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntityTopologyRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_log_analytics_entity_topology_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTopologyRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsEntityTopology {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_entity_types][crate::client::LogAnalytics::list_log_analytics_entity_types] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsEntityTypes(RequestBuilder<crate::model::ListLogAnalyticsEntityTypesRequest>);

    impl ListLogAnalyticsEntityTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsEntityTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntityTypeCollection>> {
            (*self.0.stub)
                .list_log_analytics_entity_types(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsEntityTypeCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsEntityTypeCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsEntityTypesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        pub fn set_name_contains<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name_contains = Some(v.into());
            self
        }

        pub fn set_cloud_type<T: Into<crate::model::list_log_analytics_entity_types_request::CloudType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.cloud_type = Some(v.into());
            self
        }

        pub fn set_lifecycle_state<T: Into<crate::model::EntityLifecycleStates>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsEntityTypesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsEntityTypesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsEntityTypesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsEntityTypesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_log_analytics_entity_types_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsEntityTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsEntityTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_log_groups][crate::client::LogAnalytics::list_log_analytics_log_groups] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsLogGroups(RequestBuilder<crate::model::ListLogAnalyticsLogGroupsRequest>);

    impl ListLogAnalyticsLogGroups {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsLogGroupsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroupSummaryCollection>> {
            (*self.0.stub)
                .list_log_analytics_log_groups(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsLogGroupSummaryCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsLogGroupSummaryCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsLogGroupsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsLogGroupsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_display_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.display_name = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsLogGroupsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsLogGroupsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsLogGroupsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsLogGroupsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_log_analytics_log_groups_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsLogGroupsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsLogGroups {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_analytics_object_collection_rules][crate::client::LogAnalytics::list_log_analytics_object_collection_rules] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogAnalyticsObjectCollectionRules(RequestBuilder<crate::model::ListLogAnalyticsObjectCollectionRulesRequest>);

    impl ListLogAnalyticsObjectCollectionRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogAnalyticsObjectCollectionRulesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::LogAnalyticsObjectCollectionRuleCollection>,
        > {
            (*self.0.stub)
                .list_log_analytics_object_collection_rules(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsObjectCollectionRuleCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsObjectCollectionRuleCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        pub fn set_lifecycle_state<T: Into<crate::model::ObjectCollectionRuleLifecycleStates>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_log_analytics_object_collection_rules_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogAnalyticsObjectCollectionRulesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogAnalyticsObjectCollectionRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_log_sets][crate::client::LogAnalytics::list_log_sets] calls.
    #[derive(Clone, Debug)]
    pub struct ListLogSets(RequestBuilder<crate::model::ListLogSetsRequest>);

    impl ListLogSets {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLogSetsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::LogSetCollection>> {
            (*self.0.stub)
                .list_log_sets(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::LogSetCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::LogSetCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLogSetsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListLogSetsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLogSetsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLogSetsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLogSetsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLogSets {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_lookups][crate::client::LogAnalytics::list_lookups] calls.
    #[derive(Clone, Debug)]
    pub struct ListLookups(RequestBuilder<crate::model::ListLookupsRequest>);

    impl ListLookups {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListLookupsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookupCollection>> {
            (*self.0.stub)
                .list_lookups(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsLookupCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsLookupCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListLookupsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_type<T: Into<crate::model::LookupType>>(mut self, v: T) -> Self {
            self.0.request.r#type = Some(v.into());
            self
        }

        pub fn set_lookup_display_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_display_text = Some(v.into());
            self
        }

        pub fn set_is_system<T: Into<crate::model::list_lookups_request::IsSystem>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_system = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListLookupsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_lookups_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        pub fn set_status<T: Into<crate::model::list_lookups_request::Status>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.status = Some(v.into());
            self
        }

        pub fn set_categories<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = Some(v.into());
            self
        }

        pub fn set_is_hide_special<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_hide_special = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListLookupsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListLookupsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListLookupsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListLookupsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListLookups {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_meta_source_types][crate::client::LogAnalytics::list_meta_source_types] calls.
    #[derive(Clone, Debug)]
    pub struct ListMetaSourceTypes(RequestBuilder<crate::model::ListMetaSourceTypesRequest>);

    impl ListMetaSourceTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListMetaSourceTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsMetaSourceTypeCollection>> {
            (*self.0.stub)
                .list_meta_source_types(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsMetaSourceTypeCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsMetaSourceTypeCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListMetaSourceTypesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListMetaSourceTypesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListMetaSourceTypesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListMetaSourceTypesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListMetaSourceTypesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_meta_source_types_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListMetaSourceTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListMetaSourceTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_namespaces][crate::client::LogAnalytics::list_namespaces] calls.
    #[derive(Clone, Debug)]
    pub struct ListNamespaces(RequestBuilder<crate::model::ListNamespacesRequest>);

    impl ListNamespaces {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListNamespacesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::NamespaceCollection>> {
            (*self.0.stub)
                .list_namespaces(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [compartment_id][crate::model::ListNamespacesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListNamespacesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListNamespaces {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_overlapping_recalls][crate::client::LogAnalytics::list_overlapping_recalls] calls.
    #[derive(Clone, Debug)]
    pub struct ListOverlappingRecalls(RequestBuilder<crate::model::ListOverlappingRecallsRequest>);

    impl ListOverlappingRecalls {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListOverlappingRecallsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::OverlappingRecallCollection>> {
            (*self.0.stub)
                .list_overlapping_recalls(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::OverlappingRecallCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::OverlappingRecallCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListOverlappingRecallsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_time_data_started<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_data_started = Some(v.into());
            self
        }

        pub fn set_time_data_ended<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_data_ended = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListOverlappingRecallsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListOverlappingRecallsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListOverlappingRecallsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListOverlappingRecallsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_overlapping_recalls_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListOverlappingRecallsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListOverlappingRecalls {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_parser_functions][crate::client::LogAnalytics::list_parser_functions] calls.
    #[derive(Clone, Debug)]
    pub struct ListParserFunctions(RequestBuilder<crate::model::ListParserFunctionsRequest>);

    impl ListParserFunctions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListParserFunctionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserFunctionCollection>> {
            (*self.0.stub)
                .list_parser_functions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsParserFunctionCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsParserFunctionCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListParserFunctionsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_parser_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListParserFunctionsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListParserFunctionsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListParserFunctionsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListParserFunctionsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_parser_functions_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListParserFunctionsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListParserFunctions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_parser_meta_plugins][crate::client::LogAnalytics::list_parser_meta_plugins] calls.
    #[derive(Clone, Debug)]
    pub struct ListParserMetaPlugins(RequestBuilder<crate::model::ListParserMetaPluginsRequest>);

    impl ListParserMetaPlugins {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListParserMetaPluginsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserMetaPluginCollection>> {
            (*self.0.stub)
                .list_parser_meta_plugins(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsParserMetaPluginCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsParserMetaPluginCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListParserMetaPluginsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListParserMetaPluginsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListParserMetaPluginsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListParserMetaPluginsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListParserMetaPluginsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_parser_meta_plugins_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListParserMetaPluginsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListParserMetaPlugins {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_parsers][crate::client::LogAnalytics::list_parsers] calls.
    #[derive(Clone, Debug)]
    pub struct ListParsers(RequestBuilder<crate::model::ListParsersRequest>);

    impl ListParsers {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListParsersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParserCollection>> {
            (*self.0.stub)
                .list_parsers(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsParserCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsParserCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListParsersRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_is_match_all<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_match_all = Some(v.into());
            self
        }

        pub fn set_source_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_type = Some(v.into());
            self
        }

        pub fn set_parser_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_name = Some(v.into());
            self
        }

        pub fn set_parser_display_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.parser_display_text = Some(v.into());
            self
        }

        pub fn set_parser_type<T: Into<crate::model::list_parsers_request::ParserType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.parser_type = Some(v.into());
            self
        }

        pub fn set_categories<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = Some(v.into());
            self
        }

        pub fn set_is_system<T: Into<crate::model::list_parsers_request::IsSystem>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_system = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListParsersRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListParsersRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListParsersRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListParsersRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_parsers_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListParsersRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListParsers {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_properties_metadata][crate::client::LogAnalytics::list_properties_metadata] calls.
    #[derive(Clone, Debug)]
    pub struct ListPropertiesMetadata(RequestBuilder<crate::model::ListPropertiesMetadataRequest>);

    impl ListPropertiesMetadata {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListPropertiesMetadataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::PropertyMetadataSummaryCollection>> {
            (*self.0.stub)
                .list_properties_metadata(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::PropertyMetadataSummaryCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::PropertyMetadataSummaryCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListPropertiesMetadataRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        pub fn set_display_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.display_text = Some(v.into());
            self
        }

        pub fn set_level<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.level = Some(v.into());
            self
        }

        pub fn set_constraints<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.constraints = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListPropertiesMetadataRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListPropertiesMetadataRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListPropertiesMetadataRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListPropertiesMetadataRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_properties_metadata_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListPropertiesMetadataRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListPropertiesMetadata {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_query_work_requests][crate::client::LogAnalytics::list_query_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListQueryWorkRequests(RequestBuilder<crate::model::ListQueryWorkRequestsRequest>);

    impl ListQueryWorkRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListQueryWorkRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::QueryWorkRequestCollection>> {
            (*self.0.stub)
                .list_query_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::QueryWorkRequestCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::QueryWorkRequestCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListQueryWorkRequestsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListQueryWorkRequestsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_mode<T: Into<crate::model::list_query_work_requests_request::Mode>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.mode = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListQueryWorkRequestsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListQueryWorkRequestsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListQueryWorkRequestsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListQueryWorkRequestsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_query_work_requests_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListQueryWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListQueryWorkRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_recalled_data][crate::client::LogAnalytics::list_recalled_data] calls.
    #[derive(Clone, Debug)]
    pub struct ListRecalledData(RequestBuilder<crate::model::ListRecalledDataRequest>);

    impl ListRecalledData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListRecalledDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::RecalledDataCollection>> {
            (*self.0.stub)
                .list_recalled_data(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::RecalledDataCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::RecalledDataCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListRecalledDataRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_time_data_started_greater_than_or_equal<T: Into<time::OffsetDateTime>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.time_data_started_greater_than_or_equal = Some(v.into());
            self
        }

        pub fn set_time_data_ended_less_than<T: Into<time::OffsetDateTime>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.time_data_ended_less_than = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListRecalledDataRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListRecalledDataRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListRecalledDataRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListRecalledDataRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_recalled_data_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListRecalledDataRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListRecalledData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_resource_categories][crate::client::LogAnalytics::list_resource_categories] calls.
    #[derive(Clone, Debug)]
    pub struct ListResourceCategories(RequestBuilder<crate::model::ListResourceCategoriesRequest>);

    impl ListResourceCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListResourceCategoriesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsResourceCategoryCollection>> {
            (*self.0.stub)
                .list_resource_categories(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsResourceCategoryCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsResourceCategoryCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListResourceCategoriesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_categories<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = Some(v.into());
            self
        }

        pub fn set_resource_types<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.resource_types = Some(v.into());
            self
        }

        pub fn set_resource_ids<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.resource_ids = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListResourceCategoriesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListResourceCategoriesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListResourceCategoriesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListResourceCategoriesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_resource_categories_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListResourceCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListResourceCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_rules][crate::client::LogAnalytics::list_rules] calls.
    #[derive(Clone, Debug)]
    pub struct ListRules(RequestBuilder<crate::model::ListRulesRequest>);

    impl ListRules {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListRulesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::RuleSummaryCollection>> {
            (*self.0.stub)
                .list_rules(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::RuleSummaryCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::RuleSummaryCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListRulesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListRulesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_display_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.display_name = Some(v.into());
            self
        }

        pub fn set_kind<T: Into<crate::model::list_rules_request::Kind>>(mut self, v: T) -> Self {
            self.0.request.kind = Some(v.into());
            self
        }

        pub fn set_target_service<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.target_service = Some(v.into());
            self
        }

        pub fn set_lifecycle_state<T: Into<crate::model::ConfigLifecycleState>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.lifecycle_state = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListRulesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListRulesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListRulesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListRulesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_rules_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListRulesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListRules {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_scheduled_tasks][crate::client::LogAnalytics::list_scheduled_tasks] calls.
    #[derive(Clone, Debug)]
    pub struct ListScheduledTasks(RequestBuilder<crate::model::ListScheduledTasksRequest>);

    impl ListScheduledTasks {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListScheduledTasksRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ScheduledTaskCollection>> {
            (*self.0.stub)
                .list_scheduled_tasks(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::ScheduledTaskCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::ScheduledTaskCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListScheduledTasksRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_task_type<T: Into<crate::model::TaskType>>(mut self, v: T) -> Self {
            self.0.request.task_type = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListScheduledTasksRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_display_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.display_name = Some(v.into());
            self
        }

        pub fn set_target_service<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.target_service = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListScheduledTasksRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListScheduledTasksRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListScheduledTasksRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListScheduledTasksRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_scheduled_tasks_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListScheduledTasksRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListScheduledTasks {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_associations][crate::client::LogAnalytics::list_source_associations] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceAssociations(RequestBuilder<crate::model::ListSourceAssociationsRequest>);

    impl ListSourceAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsAssociationCollection>> {
            (*self.0.stub)
                .list_source_associations(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsAssociationCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsAssociationCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceAssociationsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListSourceAssociationsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = Some(v.into());
            self
        }

        pub fn set_life_cycle_state<T: Into<crate::model::list_source_associations_request::LifeCycleState>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.life_cycle_state = Some(v.into());
            self
        }

        pub fn set_is_show_total<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_show_total = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceAssociationsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceAssociationsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceAssociationsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceAssociationsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_source_associations_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_event_types][crate::client::LogAnalytics::list_source_event_types] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceEventTypes(RequestBuilder<crate::model::ListSourceEventTypesRequest>);

    impl ListSourceEventTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceEventTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::EventTypeCollection>> {
            (*self.0.stub)
                .list_source_event_types(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::EventTypeCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::EventTypeCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceEventTypesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_display_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.display_text = Some(v.into());
            self
        }

        pub fn set_is_system<T: Into<crate::model::list_source_event_types_request::IsSystem>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_system = Some(v.into());
            self
        }

        pub fn set_is_enabled<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_enabled = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceEventTypesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceEventTypesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceEventTypesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceEventTypesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_source_event_types_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceEventTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceEventTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_extended_field_definitions][crate::client::LogAnalytics::list_source_extended_field_definitions] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceExtendedFieldDefinitions(RequestBuilder<crate::model::ListSourceExtendedFieldDefinitionsRequest>);

    impl ListSourceExtendedFieldDefinitions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceExtendedFieldDefinitionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection>,
        > {
            (*self.0.stub)
                .list_source_extended_field_definitions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsSourceExtendedFieldDefinitionCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceExtendedFieldDefinitionsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceExtendedFieldDefinitionsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceExtendedFieldDefinitionsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceExtendedFieldDefinitionsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_source_extended_field_definitions_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceExtendedFieldDefinitionsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceExtendedFieldDefinitions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_label_operators][crate::client::LogAnalytics::list_source_label_operators] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceLabelOperators(RequestBuilder<crate::model::ListSourceLabelOperatorsRequest>);

    impl ListSourceLabelOperators {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceLabelOperatorsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabelOperatorCollection>> {
            (*self.0.stub)
                .list_source_label_operators(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsLabelOperatorCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsLabelOperatorCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceLabelOperatorsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceLabelOperatorsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceLabelOperatorsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceLabelOperatorsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceLabelOperatorsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_source_label_operators_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceLabelOperatorsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceLabelOperators {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_meta_functions][crate::client::LogAnalytics::list_source_meta_functions] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourceMetaFunctions(RequestBuilder<crate::model::ListSourceMetaFunctionsRequest>);

    impl ListSourceMetaFunctions {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourceMetaFunctionsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsMetaFunctionCollection>> {
            (*self.0.stub)
                .list_source_meta_functions(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsMetaFunctionCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsMetaFunctionCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourceMetaFunctionsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSourceMetaFunctionsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourceMetaFunctionsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourceMetaFunctionsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourceMetaFunctionsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_source_meta_functions_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourceMetaFunctionsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourceMetaFunctions {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_source_patterns][crate::client::LogAnalytics::list_source_patterns] calls.
    #[derive(Clone, Debug)]
    pub struct ListSourcePatterns(RequestBuilder<crate::model::ListSourcePatternsRequest>);

    impl ListSourcePatterns {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourcePatternsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourcePatternCollection>> {
            (*self.0.stub)
                .list_source_patterns(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsSourcePatternCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsSourcePatternCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourcePatternsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_is_include<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_include = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourcePatternsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourcePatternsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourcePatternsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourcePatternsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_source_patterns_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourcePatternsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSourcePatterns {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_sources][crate::client::LogAnalytics::list_sources] calls.
    #[derive(Clone, Debug)]
    pub struct ListSources(RequestBuilder<crate::model::ListSourcesRequest>);

    impl ListSources {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSourcesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSourceCollection>> {
            (*self.0.stub)
                .list_sources(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsSourceCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsSourceCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSourcesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListSourcesRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_entity_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type = Some(v.into());
            self
        }

        pub fn set_source_display_text<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_display_text = Some(v.into());
            self
        }

        pub fn set_is_system<T: Into<crate::model::list_sources_request::IsSystem>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.is_system = Some(v.into());
            self
        }

        pub fn set_is_auto_associated<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_auto_associated = Some(v.into());
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        pub fn set_categories<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.categories = Some(v.into());
            self
        }

        pub fn set_is_simplified<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_simplified = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListSourcesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSourcesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListSourcesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListSourcesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_sources_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSourcesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSources {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_storage_work_request_errors][crate::client::LogAnalytics::list_storage_work_request_errors] calls.
    #[derive(Clone, Debug)]
    pub struct ListStorageWorkRequestErrors(RequestBuilder<crate::model::ListStorageWorkRequestErrorsRequest>);

    impl ListStorageWorkRequestErrors {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListStorageWorkRequestErrorsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
            (*self.0.stub)
                .list_storage_work_request_errors(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::WorkRequestErrorCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::WorkRequestErrorCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListStorageWorkRequestErrorsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListStorageWorkRequestErrorsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListStorageWorkRequestErrorsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListStorageWorkRequestErrorsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListStorageWorkRequestErrorsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_storage_work_request_errors_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListStorageWorkRequestErrorsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListStorageWorkRequestErrors {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_storage_work_requests][crate::client::LogAnalytics::list_storage_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListStorageWorkRequests(RequestBuilder<crate::model::ListStorageWorkRequestsRequest>);

    impl ListStorageWorkRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListStorageWorkRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::StorageWorkRequestCollection>> {
            (*self.0.stub)
                .list_storage_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::StorageWorkRequestCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::StorageWorkRequestCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListStorageWorkRequestsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListStorageWorkRequestsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_operation_type<T: Into<crate::model::StorageOperationType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.operation_type = Some(v.into());
            self
        }

        pub fn set_status<T: Into<crate::model::OperationStatus>>(mut self, v: T) -> Self {
            self.0.request.status = Some(v.into());
            self
        }

        pub fn set_time_started<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_started = Some(v.into());
            self
        }

        pub fn set_time_finished<T: Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
            self.0.request.time_finished = Some(v.into());
            self
        }

        pub fn set_policy_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.policy_name = Some(v.into());
            self
        }

        pub fn set_policy_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.policy_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListStorageWorkRequestsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListStorageWorkRequestsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListStorageWorkRequestsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListStorageWorkRequestsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_storage_work_requests_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListStorageWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListStorageWorkRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_supported_char_encodings][crate::client::LogAnalytics::list_supported_char_encodings] calls.
    #[derive(Clone, Debug)]
    pub struct ListSupportedCharEncodings(RequestBuilder<crate::model::ListSupportedCharEncodingsRequest>);

    impl ListSupportedCharEncodings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSupportedCharEncodingsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::CharEncodingCollection>> {
            (*self.0.stub)
                .list_supported_char_encodings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::CharEncodingCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::CharEncodingCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSupportedCharEncodingsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSupportedCharEncodingsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSupportedCharEncodingsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSupportedCharEncodingsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSupportedCharEncodings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_supported_timezones][crate::client::LogAnalytics::list_supported_timezones] calls.
    #[derive(Clone, Debug)]
    pub struct ListSupportedTimezones(RequestBuilder<crate::model::ListSupportedTimezonesRequest>);

    impl ListSupportedTimezones {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListSupportedTimezonesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::TimezoneCollection>> {
            (*self.0.stub)
                .list_supported_timezones(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::TimezoneCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::TimezoneCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListSupportedTimezonesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListSupportedTimezonesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListSupportedTimezonesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListSupportedTimezonesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListSupportedTimezones {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_upload_files][crate::client::LogAnalytics::list_upload_files] calls.
    #[derive(Clone, Debug)]
    pub struct ListUploadFiles(RequestBuilder<crate::model::ListUploadFilesRequest>);

    impl ListUploadFiles {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListUploadFilesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UploadFileCollection>> {
            (*self.0.stub)
                .list_upload_files(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::UploadFileCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::UploadFileCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListUploadFilesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_reference = v.into();
            self
        }

        pub fn set_search_str<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.search_str = Some(v.into());
            self
        }

        pub fn set_status<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<crate::model::list_upload_files_request::Status>,
        {
            self.0.request.status = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [limit][crate::model::ListUploadFilesRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListUploadFilesRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListUploadFilesRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListUploadFilesRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_upload_files_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListUploadFilesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListUploadFiles {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_upload_warnings][crate::client::LogAnalytics::list_upload_warnings] calls.
    #[derive(Clone, Debug)]
    pub struct ListUploadWarnings(RequestBuilder<crate::model::ListUploadWarningsRequest>);

    impl ListUploadWarnings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListUploadWarningsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UploadWarningCollection>> {
            (*self.0.stub)
                .list_upload_warnings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::UploadWarningCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::UploadWarningCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListUploadWarningsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_reference<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_reference = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListUploadWarningsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListUploadWarningsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListUploadWarningsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListUploadWarnings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_uploads][crate::client::LogAnalytics::list_uploads] calls.
    #[derive(Clone, Debug)]
    pub struct ListUploads(RequestBuilder<crate::model::ListUploadsRequest>);

    impl ListUploads {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListUploadsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::UploadCollection>> {
            (*self.0.stub)
                .list_uploads(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::UploadCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::UploadCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListUploadsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        pub fn set_name_contains<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name_contains = Some(v.into());
            self
        }

        pub fn set_warnings_filter<T: Into<crate::model::list_uploads_request::WarningsFilter>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.warnings_filter = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListUploadsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListUploadsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListUploadsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListUploadsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_uploads_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListUploadsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListUploads {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_warnings][crate::client::LogAnalytics::list_warnings] calls.
    #[derive(Clone, Debug)]
    pub struct ListWarnings(RequestBuilder<crate::model::ListWarningsRequest>);

    impl ListWarnings {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListWarningsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsWarningCollection>> {
            (*self.0.stub)
                .list_warnings(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsWarningCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsWarningCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListWarningsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListWarningsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        pub fn set_warning_state<T: Into<crate::model::list_warnings_request::WarningState>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.warning_state = Some(v.into());
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = Some(v.into());
            self
        }

        pub fn set_source_pattern<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_pattern = Some(v.into());
            self
        }

        pub fn set_warning_message<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.warning_message = Some(v.into());
            self
        }

        pub fn set_entity_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_name = Some(v.into());
            self
        }

        pub fn set_entity_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type = Some(v.into());
            self
        }

        pub fn set_warning_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.warning_type = Some(v.into());
            self
        }

        pub fn set_is_no_source<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_no_source = Some(v.into());
            self
        }

        pub fn set_start_time<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.start_time = Some(v.into());
            self
        }

        pub fn set_end_time<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.end_time = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListWarningsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListWarningsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ListWarningsRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ListWarningsRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::list_warnings_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListWarningsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListWarnings {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_work_request_errors][crate::client::LogAnalytics::list_work_request_errors] calls.
    #[derive(Clone, Debug)]
    pub struct ListWorkRequestErrors(RequestBuilder<crate::model::ListWorkRequestErrorsRequest>);

    impl ListWorkRequestErrors {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListWorkRequestErrorsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::WorkRequestErrorCollection>> {
            (*self.0.stub)
                .list_work_request_errors(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::WorkRequestErrorCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::WorkRequestErrorCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListWorkRequestErrorsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListWorkRequestErrorsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListWorkRequestErrorsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListWorkRequestErrorsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListWorkRequestErrors {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_work_request_logs][crate::client::LogAnalytics::list_work_request_logs] calls.
    #[derive(Clone, Debug)]
    pub struct ListWorkRequestLogs(RequestBuilder<crate::model::ListWorkRequestLogsRequest>);

    impl ListWorkRequestLogs {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListWorkRequestLogsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::WorkRequestLogCollection>> {
            (*self.0.stub)
                .list_work_request_logs(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::WorkRequestLogCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::WorkRequestLogCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListWorkRequestLogsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [limit][crate::model::ListWorkRequestLogsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListWorkRequestLogsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListWorkRequestLogsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListWorkRequestLogs {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::list_work_requests][crate::client::LogAnalytics::list_work_requests] calls.
    #[derive(Clone, Debug)]
    pub struct ListWorkRequests(RequestBuilder<crate::model::ListWorkRequestsRequest>);

    impl ListWorkRequests {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ListWorkRequestsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::WorkRequestCollection>> {
            (*self.0.stub)
                .list_work_requests(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<crate::model::WorkRequestCollection, gax::error::Error> {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<crate::model::WorkRequestCollection, gax::error::Error> {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ListWorkRequestsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [compartment_id][crate::model::ListWorkRequestsRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ListWorkRequestsRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ListWorkRequestsRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ListWorkRequestsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListWorkRequests {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::offboard_namespace][crate::client::LogAnalytics::offboard_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct OffboardNamespace(RequestBuilder<crate::model::OffboardNamespaceRequest>);

    impl OffboardNamespace {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::OffboardNamespaceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .offboard_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::OffboardNamespaceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::OffboardNamespaceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for OffboardNamespace {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::onboard_namespace][crate::client::LogAnalytics::onboard_namespace] calls.
    #[derive(Clone, Debug)]
    pub struct OnboardNamespace(RequestBuilder<crate::model::OnboardNamespaceRequest>);

    impl OnboardNamespace {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::OnboardNamespaceRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .onboard_namespace(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::OnboardNamespaceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::OnboardNamespaceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for OnboardNamespace {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::parse_query][crate::client::LogAnalytics::parse_query] calls.
    #[derive(Clone, Debug)]
    pub struct ParseQuery(RequestBuilder<crate::model::ParseQueryRequest>);

    impl ParseQuery {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ParseQueryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ParseQueryOutput>> {
            (*self.0.stub)
                .parse_query(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ParseQueryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_parse_query_details<T: Into<crate::model::ParseQueryDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.parse_query_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ParseQueryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ParseQuery {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::pause_scheduled_task][crate::client::LogAnalytics::pause_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct PauseScheduledTask(RequestBuilder<crate::model::PauseScheduledTaskRequest>);

    impl PauseScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PauseScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .pause_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::PauseScheduledTaskRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::PauseScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::PauseScheduledTaskRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PauseScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::purge_storage_data][crate::client::LogAnalytics::purge_storage_data] calls.
    #[derive(Clone, Debug)]
    pub struct PurgeStorageData(RequestBuilder<crate::model::PurgeStorageDataRequest>);

    impl PurgeStorageData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PurgeStorageDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .purge_storage_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::PurgeStorageDataRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_purge_storage_data_details<T: Into<crate::model::PurgeStorageDataDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.purge_storage_data_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::PurgeStorageDataRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PurgeStorageData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::put_query_work_request_background][crate::client::LogAnalytics::put_query_work_request_background] calls.
    #[derive(Clone, Debug)]
    pub struct PutQueryWorkRequestBackground(RequestBuilder<crate::model::PutQueryWorkRequestBackgroundRequest>);

    impl PutQueryWorkRequestBackground {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::PutQueryWorkRequestBackgroundRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QueryWorkRequest>> {
            (*self.0.stub)
                .put_query_work_request_background(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::PutQueryWorkRequestBackgroundRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_work_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.work_request_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::PutQueryWorkRequestBackgroundRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::PutQueryWorkRequestBackgroundRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for PutQueryWorkRequestBackground {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::query][crate::client::LogAnalytics::query] calls.
    #[derive(Clone, Debug)]
    pub struct Query(RequestBuilder<crate::model::QueryRequest>);

    impl Query {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::QueryRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::QueryAggregation>> {
            (*self.0.stub)
                .query(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::QueryRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_query_details<T: Into<crate::model::QueryDetails>>(mut self, v: T) -> Self {
            self.0.request.query_details = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::QueryRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::QueryRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::QueryRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Query {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::recall_archived_data][crate::client::LogAnalytics::recall_archived_data] calls.
    #[derive(Clone, Debug)]
    pub struct RecallArchivedData(RequestBuilder<crate::model::RecallArchivedDataRequest>);

    impl RecallArchivedData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RecallArchivedDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .recall_archived_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RecallArchivedDataRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_recall_archived_data_details<T: Into<crate::model::RecallArchivedDataDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.recall_archived_data_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RecallArchivedDataRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RecallArchivedData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::register_lookup][crate::client::LogAnalytics::register_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct RegisterLookup(RequestBuilder<crate::model::RegisterLookupRequest>);

    impl RegisterLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RegisterLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
            (*self.0.stub)
                .register_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RegisterLookupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_register_lookup_content_file_body<T: Into<bytes::Bytes>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.register_lookup_content_file_body = Some(v.into());
            self
        }

        pub fn set_type<T: Into<crate::model::LookupType>>(mut self, v: T) -> Self {
            self.0.request.r#type = Some(v.into());
            self
        }

        pub fn set_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.name = Some(v.into());
            self
        }

        pub fn set_description<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.description = Some(v.into());
            self
        }

        pub fn set_char_encoding<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.char_encoding = Some(v.into());
            self
        }

        pub fn set_is_hidden<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_hidden = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RegisterLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [expect][crate::model::RegisterLookupRequest::expect].
        pub fn set_expect<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RegisterLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::release_recalled_data][crate::client::LogAnalytics::release_recalled_data] calls.
    #[derive(Clone, Debug)]
    pub struct ReleaseRecalledData(RequestBuilder<crate::model::ReleaseRecalledDataRequest>);

    impl ReleaseRecalledData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ReleaseRecalledDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .release_recalled_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ReleaseRecalledDataRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_release_recalled_data_details<T: Into<crate::model::ReleaseRecalledDataDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.release_recalled_data_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ReleaseRecalledDataRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ReleaseRecalledData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::remove_entity_associations][crate::client::LogAnalytics::remove_entity_associations] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveEntityAssociations(RequestBuilder<crate::model::RemoveEntityAssociationsRequest>);

    impl RemoveEntityAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveEntityAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .remove_entity_associations(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RemoveEntityAssociationsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        pub fn set_remove_entity_associations_details<T: Into<crate::model::RemoveEntityAssociationsDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.remove_entity_associations_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RemoveEntityAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::RemoveEntityAssociationsRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveEntityAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::remove_preferences][crate::client::LogAnalytics::remove_preferences] calls.
    #[derive(Clone, Debug)]
    pub struct RemovePreferences(RequestBuilder<crate::model::RemovePreferencesRequest>);

    impl RemovePreferences {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemovePreferencesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .remove_preferences(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RemovePreferencesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_preference_details<T: Into<crate::model::LogAnalyticsPreferenceDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_preference_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RemovePreferencesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemovePreferences {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::remove_resource_categories][crate::client::LogAnalytics::remove_resource_categories] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveResourceCategories(RequestBuilder<crate::model::RemoveResourceCategoriesRequest>);

    impl RemoveResourceCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveResourceCategoriesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .remove_resource_categories(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RemoveResourceCategoriesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_remove_resource_categories_details<T: Into<crate::model::RemoveResourceCategoriesDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.remove_resource_categories_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RemoveResourceCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveResourceCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::remove_source_event_types][crate::client::LogAnalytics::remove_source_event_types] calls.
    #[derive(Clone, Debug)]
    pub struct RemoveSourceEventTypes(RequestBuilder<crate::model::RemoveSourceEventTypesRequest>);

    impl RemoveSourceEventTypes {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RemoveSourceEventTypesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .remove_source_event_types(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RemoveSourceEventTypesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.source_name = v.into();
            self
        }

        pub fn set_event_type_details<T: Into<crate::model::EventTypeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.event_type_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RemoveSourceEventTypesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::RemoveSourceEventTypesRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for RemoveSourceEventTypes {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::resume_scheduled_task][crate::client::LogAnalytics::resume_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct ResumeScheduledTask(RequestBuilder<crate::model::ResumeScheduledTaskRequest>);

    impl ResumeScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ResumeScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .resume_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ResumeScheduledTaskRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ResumeScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::ResumeScheduledTaskRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ResumeScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::run][crate::client::LogAnalytics::run] calls.
    #[derive(Clone, Debug)]
    pub struct Run(RequestBuilder<crate::model::RunRequest>);

    impl Run {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::RunRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .run(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::RunRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        pub fn set_type<T: Into<crate::model::run_request::Type>>(mut self, v: T) -> Self {
            self.0.request.r#type = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::RunRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Run {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::set_unprocessed_data_bucket][crate::client::LogAnalytics::set_unprocessed_data_bucket] calls.
    #[derive(Clone, Debug)]
    pub struct SetUnprocessedDataBucket(RequestBuilder<crate::model::SetUnprocessedDataBucketRequest>);

    impl SetUnprocessedDataBucket {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SetUnprocessedDataBucketRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::UnprocessedDataBucket>> {
            (*self.0.stub)
                .set_unprocessed_data_bucket(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::SetUnprocessedDataBucketRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_bucket_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.bucket_name = Some(v.into());
            self
        }

        pub fn set_is_enabled<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_enabled = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::SetUnprocessedDataBucketRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SetUnprocessedDataBucket {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::suggest][crate::client::LogAnalytics::suggest] calls.
    #[derive(Clone, Debug)]
    pub struct Suggest(RequestBuilder<crate::model::SuggestRequest>);

    impl Suggest {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SuggestRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::SuggestOutput>> {
            (*self.0.stub)
                .suggest(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::SuggestRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_suggest_details<T: Into<crate::model::SuggestDetails>>(mut self, v: T) -> Self {
            self.0.request.suggest_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::SuggestRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Suggest {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::suppress_warning][crate::client::LogAnalytics::suppress_warning] calls.
    #[derive(Clone, Debug)]
    pub struct SuppressWarning(RequestBuilder<crate::model::SuppressWarningRequest>);

    impl SuppressWarning {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::SuppressWarningRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .suppress_warning(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::SuppressWarningRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_warning_reference_details<T: Into<crate::model::WarningReferenceDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.warning_reference_details = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::SuppressWarningRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::SuppressWarningRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SuppressWarning {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::test_parser][crate::client::LogAnalytics::test_parser] calls.
    #[derive(Clone, Debug)]
    pub struct TestParser(RequestBuilder<crate::model::TestParserRequest>);

    impl TestParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::TestParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ParserTestResult>> {
            (*self.0.stub)
                .test_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::TestParserRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_test_parser_payload_details<T: Into<crate::model::TestParserPayloadDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.test_parser_payload_details = Some(v.into());
            self
        }

        pub fn set_scope<T: Into<crate::model::test_parser_request::Scope>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.scope = Some(v.into());
            self
        }

        pub fn set_req_origin_module<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.req_origin_module = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::TestParserRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for TestParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::unsuppress_warning][crate::client::LogAnalytics::unsuppress_warning] calls.
    #[derive(Clone, Debug)]
    pub struct UnsuppressWarning(RequestBuilder<crate::model::UnsuppressWarningRequest>);

    impl UnsuppressWarning {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UnsuppressWarningRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .unsuppress_warning(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UnsuppressWarningRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_warning_reference_details<T: Into<crate::model::WarningReferenceDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.warning_reference_details = Some(v.into());
            self
        }

        /// Sets the value of [compartment_id][crate::model::UnsuppressWarningRequest::compartment_id].
        pub fn set_compartment_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.compartment_id = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UnsuppressWarningRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UnsuppressWarning {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_entity][crate::client::LogAnalytics::update_log_analytics_entity] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsEntity(RequestBuilder<crate::model::UpdateLogAnalyticsEntityRequest>);

    impl UpdateLogAnalyticsEntity {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsEntityRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsEntity>> {
            (*self.0.stub)
                .update_log_analytics_entity(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEntityRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_analytics_entity_id = v.into();
            self
        }

        pub fn set_update_log_analytics_entity_details<T: Into<crate::model::UpdateLogAnalyticsEntityDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_log_analytics_entity_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEntityRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsEntity {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_entity_type][crate::client::LogAnalytics::update_log_analytics_entity_type] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsEntityType(RequestBuilder<crate::model::UpdateLogAnalyticsEntityTypeRequest>);

    impl UpdateLogAnalyticsEntityType {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsEntityTypeRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_log_analytics_entity_type(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsEntityTypeRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_entity_type_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_type_name = v.into();
            self
        }

        pub fn set_update_log_analytics_entity_type_details<T: Into<crate::model::UpdateLogAnalyticsEntityTypeDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_log_analytics_entity_type_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsEntityTypeRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsEntityTypeRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsEntityType {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_log_group][crate::client::LogAnalytics::update_log_analytics_log_group] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsLogGroup(RequestBuilder<crate::model::UpdateLogAnalyticsLogGroupRequest>);

    impl UpdateLogAnalyticsLogGroup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsLogGroupRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLogGroup>> {
            (*self.0.stub)
                .update_log_analytics_log_group(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsLogGroupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_log_group_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_log_group_id = v.into();
            self
        }

        pub fn set_update_log_analytics_log_group_details<T: Into<crate::model::UpdateLogAnalyticsLogGroupDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_log_analytics_log_group_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsLogGroupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsLogGroupRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsLogGroup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_log_analytics_object_collection_rule][crate::client::LogAnalytics::update_log_analytics_object_collection_rule] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLogAnalyticsObjectCollectionRule(RequestBuilder<crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest>);

    impl UpdateLogAnalyticsObjectCollectionRule {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsObjectCollectionRule>> {
            (*self.0.stub)
                .update_log_analytics_object_collection_rule(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_object_collection_rule_id<T: Into<std::string::String>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_object_collection_rule_id = v.into();
            self
        }

        pub fn set_update_log_analytics_object_collection_rule_details<T: Into<crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_log_analytics_object_collection_rule_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLogAnalyticsObjectCollectionRuleRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLogAnalyticsObjectCollectionRule {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_lookup][crate::client::LogAnalytics::update_lookup] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLookup(RequestBuilder<crate::model::UpdateLookupRequest>);

    impl UpdateLookup {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLookupRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLookup>> {
            (*self.0.stub)
                .update_lookup(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLookupRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_lookup_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        pub fn set_update_lookup_metadata_details<T: Into<crate::model::UpdateLookupMetadataDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_lookup_metadata_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLookupRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLookupRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLookup {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_lookup_data][crate::client::LogAnalytics::update_lookup_data] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateLookupData(RequestBuilder<crate::model::UpdateLookupDataRequest>);

    impl UpdateLookupData {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateLookupDataRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_lookup_data(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateLookupDataRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_lookup_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.lookup_name = v.into();
            self
        }

        pub fn set_update_lookup_file_body<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.update_lookup_file_body = Some(v.into());
            self
        }

        pub fn set_is_force<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_force = Some(v.into());
            self
        }

        pub fn set_char_encoding<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.char_encoding = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateLookupDataRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateLookupDataRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }

        /// Sets the value of [expect][crate::model::UpdateLookupDataRequest::expect].
        pub fn set_expect<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateLookupData {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_preferences][crate::client::LogAnalytics::update_preferences] calls.
    #[derive(Clone, Debug)]
    pub struct UpdatePreferences(RequestBuilder<crate::model::UpdatePreferencesRequest>);

    impl UpdatePreferences {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdatePreferencesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_preferences(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdatePreferencesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_preference_details<T: Into<crate::model::LogAnalyticsPreferenceDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_preference_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdatePreferencesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdatePreferences {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_resource_categories][crate::client::LogAnalytics::update_resource_categories] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateResourceCategories(RequestBuilder<crate::model::UpdateResourceCategoriesRequest>);

    impl UpdateResourceCategories {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateResourceCategoriesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .update_resource_categories(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateResourceCategoriesRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_update_resource_categories_details<T: Into<crate::model::UpdateResourceCategoriesDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_resource_categories_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateResourceCategoriesRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateResourceCategories {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_scheduled_task][crate::client::LogAnalytics::update_scheduled_task] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateScheduledTask(RequestBuilder<crate::model::UpdateScheduledTaskRequest>);

    impl UpdateScheduledTask {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateScheduledTaskRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::ScheduledTask>> {
            (*self.0.stub)
                .update_scheduled_task(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateScheduledTaskRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        pub fn set_update_scheduled_task_details<T: Into<crate::model::UpdateScheduledTaskDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_scheduled_task_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateScheduledTaskRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateScheduledTaskRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateScheduledTask {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::update_storage][crate::client::LogAnalytics::update_storage] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateStorage(RequestBuilder<crate::model::UpdateStorageRequest>);

    impl UpdateStorage {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpdateStorageRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Storage>> {
            (*self.0.stub)
                .update_storage(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpdateStorageRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_update_storage_details<T: Into<crate::model::UpdateStorageDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.update_storage_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpdateStorageRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpdateStorageRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateStorage {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upload_log_events_file][crate::client::LogAnalytics::upload_log_events_file] calls.
    #[derive(Clone, Debug)]
    pub struct UploadLogEventsFile(RequestBuilder<crate::model::UploadLogEventsFileRequest>);

    impl UploadLogEventsFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadLogEventsFileRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .upload_log_events_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UploadLogEventsFileRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_log_events_file_details<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.upload_log_events_file_details = Some(v.into());
            self
        }

        pub fn set_log_group_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_group_id = Some(v.into());
            self
        }

        pub fn set_log_set<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_set = Some(v.into());
            self
        }

        pub fn set_payload_type<T: Into<crate::model::upload_log_events_file_request::PayloadType>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.payload_type = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UploadLogEventsFileRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        pub fn set_content_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.content_type = Some(v.into());
            self
        }

        pub fn set_opc_meta_properties<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_meta_properties = Some(v.into());
            self
        }

        /// Sets the value of [expect][crate::model::UploadLogEventsFileRequest::expect].
        pub fn set_expect<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadLogEventsFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upload_log_file][crate::client::LogAnalytics::upload_log_file] calls.
    #[derive(Clone, Debug)]
    pub struct UploadLogFile(RequestBuilder<crate::model::UploadLogFileRequest>);

    impl UploadLogFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UploadLogFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::Upload>> {
            (*self.0.stub)
                .upload_log_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UploadLogFileRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upload_log_file_body<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
            self.0.request.upload_log_file_body = Some(v.into());
            self
        }

        pub fn set_upload_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.upload_name = Some(v.into());
            self
        }

        pub fn set_log_source_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_source_name = Some(v.into());
            self
        }

        pub fn set_filename<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filename = Some(v.into());
            self
        }

        pub fn set_opc_meta_loggrpid<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_meta_loggrpid = Some(v.into());
            self
        }

        pub fn set_entity_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.entity_id = Some(v.into());
            self
        }

        pub fn set_timezone<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.timezone = Some(v.into());
            self
        }

        pub fn set_char_encoding<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.char_encoding = Some(v.into());
            self
        }

        pub fn set_date_format<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.date_format = Some(v.into());
            self
        }

        pub fn set_date_year<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.date_year = Some(v.into());
            self
        }

        pub fn set_invalidate_cache<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.invalidate_cache = Some(v.into());
            self
        }

        pub fn set_log_set<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.log_set = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UploadLogFileRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        pub fn set_content_type<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.content_type = Some(v.into());
            self
        }

        pub fn set_content_md5<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.content_md5 = Some(v.into());
            self
        }

        /// Sets the value of [expect][crate::model::UploadLogFileRequest::expect].
        pub fn set_expect<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.expect = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UploadLogFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_associations][crate::client::LogAnalytics::upsert_associations] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertAssociations(RequestBuilder<crate::model::UpsertAssociationsRequest>);

    impl UpsertAssociations {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertAssociationsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<()>> {
            (*self.0.stub)
                .upsert_associations(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertAssociationsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upsert_log_analytics_association_details<T: Into<crate::model::UpsertLogAnalyticsAssociationDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upsert_log_analytics_association_details = Some(v.into());
            self
        }

        pub fn set_is_from_republish<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_from_republish = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertAssociationsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertAssociations {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_field][crate::client::LogAnalytics::upsert_field] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertField(RequestBuilder<crate::model::UpsertFieldRequest>);

    impl UpsertField {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertFieldRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsField>> {
            (*self.0.stub)
                .upsert_field(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertFieldRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upsert_log_analytics_field_details<T: Into<crate::model::UpsertLogAnalyticsFieldDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upsert_log_analytics_field_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertFieldRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertFieldRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertField {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_label][crate::client::LogAnalytics::upsert_label] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertLabel(RequestBuilder<crate::model::UpsertLabelRequest>);

    impl UpsertLabel {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertLabelRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsLabel>> {
            (*self.0.stub)
                .upsert_label(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertLabelRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upsert_log_analytics_label_details<T: Into<crate::model::UpsertLogAnalyticsLabelDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upsert_log_analytics_label_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertLabelRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertLabelRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertLabel {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_parser][crate::client::LogAnalytics::upsert_parser] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertParser(RequestBuilder<crate::model::UpsertParserRequest>);

    impl UpsertParser {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertParserRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsParser>> {
            (*self.0.stub)
                .upsert_parser(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertParserRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upsert_log_analytics_parser_details<T: Into<crate::model::UpsertLogAnalyticsParserDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upsert_log_analytics_parser_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertParserRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertParserRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertParser {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::upsert_source][crate::client::LogAnalytics::upsert_source] calls.
    #[derive(Clone, Debug)]
    pub struct UpsertSource(RequestBuilder<crate::model::UpsertSourceRequest>);

    impl UpsertSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::UpsertSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::LogAnalyticsSource>> {
            (*self.0.stub)
                .upsert_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::UpsertSourceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upsert_log_analytics_source_details<T: Into<crate::model::UpsertLogAnalyticsSourceDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upsert_log_analytics_source_details = Some(v.into());
            self
        }

        pub fn set_create_like_source_id<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.create_like_source_id = Some(v.into());
            self
        }

        pub fn set_is_incremental<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_incremental = Some(v.into());
            self
        }

        pub fn set_is_ignore_warning<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.is_ignore_warning = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::UpsertSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }

        pub fn set_opc_retry_token<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_retry_token = Some(v.into());
            self
        }

        /// Sets the value of [if_match][crate::model::UpsertSourceRequest::if_match].
        pub fn set_if_match<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.if_match = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpsertSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_association_parameters][crate::client::LogAnalytics::validate_association_parameters] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateAssociationParameters(RequestBuilder<crate::model::ValidateAssociationParametersRequest>);

    impl ValidateAssociationParameters {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateAssociationParametersRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<
            gax::response::Response<crate::model::LogAnalyticsAssociationParameterCollection>,
        > {
            (*self.0.stub)
                .validate_association_parameters(self.0.request, self.0.options)
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(
            self,
        ) -> gax::paginator::Paginator<
            crate::model::LogAnalyticsAssociationParameterCollection,
            gax::error::Error,
        > {
            let token = self.0.request.page.clone().unwrap_or_default();
            let execute = move |token: String| {
                let mut builder = self.clone();
                builder.0.request.page = Some(token).filter(|t| !t.is_empty());
                async move { builder.send().await.map(gax::response::Response::into_body) }
            };
            gax::paginator::Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(
            self,
        ) -> gax::paginator::ItemPaginator<
            crate::model::LogAnalyticsAssociationParameterCollection,
            gax::error::Error,
        > {
            self.by_page().items()
        }

        /// Sets the value of [namespace_name][crate::model::ValidateAssociationParametersRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upsert_log_analytics_association_details<T: Into<crate::model::UpsertLogAnalyticsAssociationDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upsert_log_analytics_association_details = Some(v.into());
            self
        }

        /// Sets the value of [limit][crate::model::ValidateAssociationParametersRequest::limit].
        pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.limit = Some(v.into());
            self
        }

        /// Sets the value of [page][crate::model::ValidateAssociationParametersRequest::page].
        pub fn set_page<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.page = Some(v.into());
            self
        }

        /// Sets the value of [sort_order][crate::model::ValidateAssociationParametersRequest::sort_order].
        pub fn set_sort_order<T: Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
            self.0.request.sort_order = Some(v.into());
            self
        }

        /// Sets the value of [sort_by][crate::model::ValidateAssociationParametersRequest::sort_by].
        pub fn set_sort_by<T: Into<crate::model::validate_association_parameters_request::SortBy>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.sort_by = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateAssociationParametersRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateAssociationParameters {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_endpoint][crate::client::LogAnalytics::validate_endpoint] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateEndpoint(RequestBuilder<crate::model::ValidateEndpointRequest>);

    impl ValidateEndpoint {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateEndpointRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ValidateEndpointResult>> {
            (*self.0.stub)
                .validate_endpoint(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ValidateEndpointRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_endpoint<T: Into<crate::model::LogAnalyticsEndpoint>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_endpoint = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateEndpointRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateEndpoint {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_file][crate::client::LogAnalytics::validate_file] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateFile(RequestBuilder<crate::model::ValidateFileRequest>);

    impl ValidateFile {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateFileRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::FileValidationResponse>> {
            (*self.0.stub)
                .validate_file(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ValidateFileRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_object_location<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.object_location = Some(v.into());
            self
        }

        pub fn set_filename<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.filename = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateFileRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateFile {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_label_condition][crate::client::LogAnalytics::validate_label_condition] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateLabelCondition(RequestBuilder<crate::model::ValidateLabelConditionRequest>);

    impl ValidateLabelCondition {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateLabelConditionRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ValidateLabelConditionResult>> {
            (*self.0.stub)
                .validate_label_condition(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ValidateLabelConditionRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_validate_label_condition_details<T: Into<crate::model::ValidateLabelConditionDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.validate_label_condition_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateLabelConditionRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateLabelCondition {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_source][crate::client::LogAnalytics::validate_source] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateSource(RequestBuilder<crate::model::ValidateSourceRequest>);

    impl ValidateSource {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateSourceRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::SourceValidateResults>> {
            (*self.0.stub)
                .validate_source(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ValidateSourceRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_upsert_log_analytics_source_details<T: Into<crate::model::UpsertLogAnalyticsSourceDetails>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.upsert_log_analytics_source_details = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateSourceRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateSource {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::validate_source_extended_field_details][crate::client::LogAnalytics::validate_source_extended_field_details] calls.
    #[derive(Clone, Debug)]
    pub struct ValidateSourceExtendedFieldDetails(RequestBuilder<crate::model::ValidateSourceExtendedFieldDetailsRequest>);

    impl ValidateSourceExtendedFieldDetails {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::ValidateSourceExtendedFieldDetailsRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(
            self,
        ) -> Result<gax::response::Response<crate::model::ExtendedFieldsValidationResult>> {
            (*self.0.stub)
                .validate_source_extended_field_details(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::ValidateSourceExtendedFieldDetailsRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_log_analytics_source<T: Into<crate::model::LogAnalyticsSource>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.log_analytics_source = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::ValidateSourceExtendedFieldDetailsRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ValidateSourceExtendedFieldDetails {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [LogAnalytics::verify][crate::client::LogAnalytics::verify] calls.
    #[derive(Clone, Debug)]
    pub struct Verify(RequestBuilder<crate::model::VerifyRequest>);

    impl Verify {
        pub(crate) fn new(
            stub: std::sync::Arc<dyn crate::stub::dynamic::LogAnalytics>,
        ) -> Self {
            Self(RequestBuilder::new(stub))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<crate::model::VerifyRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets all the options, replacing any prior values.
        pub fn with_options<V: Into<gax::options::RequestOptions>>(mut self, v: V) -> Self {
            self.0.options = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<gax::response::Response<crate::model::VerifyOutput>> {
            (*self.0.stub)
                .verify(self.0.request, self.0.options)
                .await
        }

        /// Sets the value of [namespace_name][crate::model::VerifyRequest::namespace_name].
        pub fn set_namespace_name<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.namespace_name = v.into();
            self
        }

        pub fn set_scheduled_task_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.scheduled_task_id = v.into();
            self
        }

        pub fn set_should_include_results<T: Into<bool>>(mut self, v: T) -> Self {
            self.0.request.should_include_results = Some(v.into());
            self
        }

        /// Sets the value of [opc_request_id][crate::model::VerifyRequest::opc_request_id].
        pub fn set_opc_request_id<T: Into<std::string::String>>(mut self, v: T) -> Self {
            self.0.request.opc_request_id = Some(v.into());
            self
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Verify {
        fn request_options(&mut self) -> &mut gax::options::RequestOptions {
            &mut self.0.options
        }
    }
}

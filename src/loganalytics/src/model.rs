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

//! The types used by the Log Analytics management API.
//!
//! Resource types mirror the JSON payloads of the service. All their fields
//! are optional, the service omits fields that do not apply. Request types
//! hold the path, query, header, and body parameters of each operation.

/// Defines an enumeration serialized as a string.
///
/// Values not known to this version of the library are preserved in the
/// `UnknownValue` variant, so responses from newer service versions still
/// deserialize. The client rejects unknown values in requests.
macro_rules! string_enum {
    ($(#[$attr:meta])* $name:ident { $($variant:ident => $value:literal,)* }) => {
        $(#[$attr])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        #[non_exhaustive]
        pub enum $name {
            $(
                #[doc = concat!("The `", $value, "` value.")]
                $variant,
            )*
            /// A value not known to this version of the client library.
            UnknownValue(std::string::String),
        }

        impl $name {
            /// Gets the value as it is sent on the wire.
            pub fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)*
                    Self::UnknownValue(v) => v.as_str(),
                }
            }
        }

        impl std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)*
                    _ => Self::UnknownValue(value.to_string()),
                }
            }
        }

        impl std::convert::From<std::string::String> for $name {
            fn from(value: std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl gaxi::query_parameter::EnumValue for $name {
            const VALUES: &'static [&'static str] = &[$($value,)*];

            fn name(&self) -> &str {
                $name::name(self)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.name())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <std::string::String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

string_enum! {
    /// The sort order for list operations.
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

string_enum! {
    /// The lifecycle states of an entity.
    EntityLifecycleStates {
        Active => "ACTIVE",
        Deleted => "DELETED",
    }
}

string_enum! {
    /// Whether an entity type describes cloud resources.
    EntityCloudType {
        Cloud => "CLOUD",
        NonCloud => "NON_CLOUD",
    }
}

string_enum! {
    /// How an object collection rule collects logs.
    ObjectCollectionRuleCollectionTypes {
        Live => "LIVE",
        Historic => "HISTORIC",
        HistoricLive => "HISTORIC_LIVE",
    }
}

string_enum! {
    /// The lifecycle states of an object collection rule.
    ObjectCollectionRuleLifecycleStates {
        Active => "ACTIVE",
        Deleted => "DELETED",
        Inactive => "INACTIVE",
    }
}

string_enum! {
    /// The kind of work a scheduled task performs.
    TaskType {
        SavedSearch => "SAVED_SEARCH",
        Acceleration => "ACCELERATION",
        Purge => "PURGE",
        AccelerationMaintenance => "ACCELERATION_MAINTENANCE",
    }
}

string_enum! {
    /// Distinguishes standard scheduled tasks from accelerations.
    ScheduledTaskKind {
        Acceleration => "ACCELERATION",
        Standard => "STANDARD",
    }
}

string_enum! {
    /// The lifecycle states of a scheduled task.
    ScheduledTaskLifecycleState {
        Active => "ACTIVE",
        Deleted => "DELETED",
    }
}

string_enum! {
    /// The execution status of a scheduled task.
    TaskStatus {
        Ready => "READY",
        Paused => "PAUSED",
        Completed => "COMPLETED",
        Blocked => "BLOCKED",
    }
}

string_enum! {
    /// The status of an asynchronous work request.
    OperationStatus {
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Failed => "FAILED",
        Succeeded => "SUCCEEDED",
        Canceling => "CANCELING",
        Canceled => "CANCELED",
    }
}

string_enum! {
    /// The kind of lookup table.
    LookupType {
        Lookup => "Lookup",
        Dictionary => "Dictionary",
    }
}

string_enum! {
    /// The priority of a label.
    LabelPriorityLevel {
        None => "NONE",
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

string_enum! {
    /// The format a parser understands.
    ParserType {
        Xml => "XML",
        Json => "JSON",
        Regex => "REGEX",
        Odl => "ODL",
        Delimited => "DELIMITED",
    }
}

string_enum! {
    /// The subsystem a query runs against.
    SubSystemName {
        Log => "LOG",
    }
}

string_enum! {
    /// The format of exported query results.
    ExportFormat {
        Csv => "CSV",
        Json => "JSON",
    }
}

string_enum! {
    /// The kind of data affected by a storage operation.
    StorageDataType {
        Log => "LOG",
        Lookup => "LOOKUP",
    }
}

string_enum! {
    /// The data an encryption key applies to.
    KeyType {
        ActiveData => "ACTIVE_DATA",
        ArchivalData => "ARCHIVAL_DATA",
    }
}

string_enum! {
    /// The lifecycle states of configuration resources.
    ConfigLifecycleState {
        Active => "ACTIVE",
        Deleted => "DELETED",
    }
}

string_enum! {
    /// The lifecycle states of a source to entity association.
    AssociationLifecycleState {
        Accepted => "ACCEPTED",
        InProgress => "IN_PROGRESS",
        Succeeded => "SUCCEEDED",
        Failed => "FAILED",
    }
}

string_enum! {
    /// The kind of storage work request.
    StorageOperationType {
        OffboardTenancy => "OFFBOARD_TENANCY",
        PurgeStorageData => "PURGE_STORAGE_DATA",
        RecallArchivedStorageData => "RECALL_ARCHIVED_STORAGE_DATA",
        ReleaseRecalledStorageData => "RELEASE_RECALLED_STORAGE_DATA",
        ArchiveStorageData => "ARCHIVE_STORAGE_DATA",
        CleanupArchivalStorageData => "CLEANUP_ARCHIVAL_STORAGE_DATA",
        EncryptActiveData => "ENCRYPT_ACTIVE_DATA",
        EncryptArchivalData => "ENCRYPT_ARCHIVAL_DATA",
    }
}

string_enum! {
    /// How a query work request runs.
    QueryOperationMode {
        Foreground => "FOREGROUND",
        Background => "BACKGROUND",
    }
}

string_enum! {
    /// The status of a recall of archived data.
    RecallStatus {
        Recalled => "RECALLED",
        Pending => "PENDING",
        Failed => "FAILED",
    }
}

/// The entities to associate with a parent entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AddEntityAssociationDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub association_entities: std::vec::Vec<std::string::String>,
}

impl AddEntityAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_association_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.association_entities = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The entities to disassociate from a parent entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemoveEntityAssociationsDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub association_entities: std::vec::Vec<std::string::String>,
}

impl RemoveEntityAssociationsDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_association_entities<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.association_entities = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The information needed to create an entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityDetails {
    pub name: std::option::Option<std::string::String>,

    pub entity_type_name: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub management_agent_id: std::option::Option<std::string::String>,

    pub cloud_resource_id: std::option::Option<std::string::String>,

    pub timezone_region: std::option::Option<std::string::String>,

    pub hostname: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub properties: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_last_discovered: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl CreateLogAnalyticsEntityDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_resource_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_time_last_discovered<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_last_discovered = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The changes to apply to an entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityDetails {
    pub name: std::option::Option<std::string::String>,

    pub management_agent_id: std::option::Option<std::string::String>,

    pub timezone_region: std::option::Option<std::string::String>,

    pub hostname: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub properties: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_last_discovered: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl UpdateLogAnalyticsEntityDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_time_last_discovered<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_last_discovered = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The destination compartment for an entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeLogAnalyticsEntityCompartmentDetails {
    pub compartment_id: std::option::Option<std::string::String>,
}

impl ChangeLogAnalyticsEntityCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A monitored resource producing logs, such as a host or a database.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntity {
    pub id: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub entity_type_name: std::option::Option<std::string::String>,

    pub entity_type_internal_name: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<EntityLifecycleStates>,

    pub lifecycle_details: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub management_agent_id: std::option::Option<std::string::String>,

    pub management_agent_display_name: std::option::Option<std::string::String>,

    pub management_agent_compartment_id: std::option::Option<std::string::String>,

    pub timezone_region: std::option::Option<std::string::String>,

    pub cloud_resource_id: std::option::Option<std::string::String>,

    pub hostname: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub properties: std::collections::HashMap<std::string::String, std::string::String>,

    pub associated_sources_count: std::option::Option<i32>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_last_discovered: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl LogAnalyticsEntity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_internal_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_internal_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<EntityLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_details<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_compartment_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_resource_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_associated_sources_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.associated_sources_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_last_discovered<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_last_discovered = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A summary of an entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntitySummary {
    pub id: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub entity_type_name: std::option::Option<std::string::String>,

    pub entity_type_internal_name: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<EntityLifecycleStates>,

    pub lifecycle_details: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub management_agent_id: std::option::Option<std::string::String>,

    pub cloud_resource_id: std::option::Option<std::string::String>,

    pub timezone_region: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_last_discovered: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl LogAnalyticsEntitySummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_internal_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_internal_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<EntityLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_details<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_resource_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_last_discovered<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_last_discovered = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A page of entity summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsEntitySummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsEntityCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsEntitySummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsEntityCollection {
    type PageItem = LogAnalyticsEntitySummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// Entity counts for a compartment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntitySummaryReport {
    pub active_entities_count: std::option::Option<i32>,

    pub entities_with_has_logs_collected_count: std::option::Option<i32>,

    pub entities_with_management_agent_count: std::option::Option<i32>,

    pub compartment_id: std::option::Option<std::string::String>,
}

impl LogAnalyticsEntitySummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_active_entities_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.active_entities_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entities_with_has_logs_collected_count<T: std::convert::Into<i32>>(
        mut self,
        v: T,
    ) -> Self {
        self.entities_with_has_logs_collected_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entities_with_management_agent_count<T: std::convert::Into<i32>>(
        mut self,
        v: T,
    ) -> Self {
        self.entities_with_management_agent_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A link between two entities in a topology.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTopologyLink {
    pub source_entity_id: std::option::Option<std::string::String>,

    pub destination_entity_id: std::option::Option<std::string::String>,

    pub contribution_context: std::option::Option<std::string::String>,
}

impl LogAnalyticsEntityTopologyLink {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_source_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.source_entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_destination_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.destination_entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_contribution_context<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.contribution_context = std::option::Option::Some(v.into());
        self
    }
}

/// The entities and links making up a topology.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTopologySummary {
    pub nodes: std::option::Option<LogAnalyticsEntityCollection>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub links: std::vec::Vec<LogAnalyticsEntityTopologyLink>,
}

impl LogAnalyticsEntityTopologySummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_nodes<T: std::convert::Into<LogAnalyticsEntityCollection>>(mut self, v: T) -> Self {
        self.nodes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_links<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsEntityTopologyLink>,
    {
        self.links = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of entity topologies.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTopologyCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsEntityTopologySummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsEntityTopologyCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsEntityTopologySummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsEntityTopologyCollection {
    type PageItem = LogAnalyticsEntityTopologySummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A property supported by an entity type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityTypeProperty {
    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,
}

impl EntityTypeProperty {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }
}

/// The information needed to create an entity type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityTypeDetails {
    pub name: std::option::Option<std::string::String>,

    pub category: std::option::Option<std::string::String>,

    pub cloud_type: std::option::Option<EntityCloudType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub properties: std::vec::Vec<EntityTypeProperty>,
}

impl CreateLogAnalyticsEntityTypeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_type<T: std::convert::Into<EntityCloudType>>(mut self, v: T) -> Self {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EntityTypeProperty>,
    {
        self.properties = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The changes to apply to an entity type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityTypeDetails {
    pub category: std::option::Option<std::string::String>,

    pub cloud_type: std::option::Option<EntityCloudType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub properties: std::vec::Vec<EntityTypeProperty>,
}

impl UpdateLogAnalyticsEntityTypeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_type<T: std::convert::Into<EntityCloudType>>(mut self, v: T) -> Self {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EntityTypeProperty>,
    {
        self.properties = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A kind of entity, such as a host or a database.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityType {
    pub name: std::option::Option<std::string::String>,

    pub internal_name: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub category: std::option::Option<std::string::String>,

    pub cloud_type: std::option::Option<EntityCloudType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub properties: std::vec::Vec<EntityTypeProperty>,

    pub lifecycle_state: std::option::Option<EntityLifecycleStates>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub management_agent_eligibility_status: std::option::Option<std::string::String>,
}

impl LogAnalyticsEntityType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_internal_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.internal_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_type<T: std::convert::Into<EntityCloudType>>(mut self, v: T) -> Self {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EntityTypeProperty>,
    {
        self.properties = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<EntityLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_eligibility_status<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_eligibility_status = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of an entity type.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTypeSummary {
    pub name: std::option::Option<std::string::String>,

    pub internal_name: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub category: std::option::Option<std::string::String>,

    pub cloud_type: std::option::Option<EntityCloudType>,

    pub lifecycle_state: std::option::Option<EntityLifecycleStates>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub management_agent_eligibility_status: std::option::Option<std::string::String>,
}

impl LogAnalyticsEntityTypeSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_internal_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.internal_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_category<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_type<T: std::convert::Into<EntityCloudType>>(mut self, v: T) -> Self {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<EntityLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_management_agent_eligibility_status<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.management_agent_eligibility_status = std::option::Option::Some(v.into());
        self
    }
}

/// A page of entity type summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEntityTypeCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsEntityTypeSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsEntityTypeCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsEntityTypeSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsEntityTypeCollection {
    type PageItem = LogAnalyticsEntityTypeSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The information needed to create a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsLogGroupDetails {
    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl CreateLogAnalyticsLogGroupDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The changes to apply to a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsLogGroupDetails {
    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl UpdateLogAnalyticsLogGroupDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The destination compartment for a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeLogAnalyticsLogGroupCompartmentDetails {
    pub compartment_id: std::option::Option<std::string::String>,
}

impl ChangeLogAnalyticsLogGroupCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A container for log data, used to control access.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLogGroup {
    pub id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl LogAnalyticsLogGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A summary of a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLogGroupSummary {
    pub id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl LogAnalyticsLogGroupSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A page of log group summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLogGroupSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsLogGroupSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsLogGroupSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsLogGroupSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsLogGroupSummaryCollection {
    type PageItem = LogAnalyticsLogGroupSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The number of log groups in a compartment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogGroupSummaryReport {
    pub count: std::option::Option<i32>,
}

impl LogGroupSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = std::option::Option::Some(v.into());
        self
    }
}

/// The information needed to create an object collection rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogAnalyticsObjectCollectionRuleDetails {
    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub os_namespace: std::option::Option<std::string::String>,

    pub os_bucket_name: std::option::Option<std::string::String>,

    pub collection_type: std::option::Option<ObjectCollectionRuleCollectionTypes>,

    pub poll_since: std::option::Option<std::string::String>,

    pub poll_till: std::option::Option<std::string::String>,

    pub log_group_id: std::option::Option<std::string::String>,

    pub log_source_name: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub char_encoding: std::option::Option<std::string::String>,

    pub timezone: std::option::Option<std::string::String>,

    pub log_set: std::option::Option<std::string::String>,

    pub log_set_key: std::option::Option<std::string::String>,

    pub log_set_ext_regex: std::option::Option<std::string::String>,

    pub overrides: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub object_name_filters: std::vec::Vec<std::string::String>,

    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl CreateLogAnalyticsObjectCollectionRuleDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_os_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_namespace = std::option::Option::Some(v.into());
        self
    }

    pub fn set_os_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_bucket_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_collection_type<T: std::convert::Into<ObjectCollectionRuleCollectionTypes>>(
        mut self,
        v: T,
    ) -> Self {
        self.collection_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_poll_since<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_since = std::option::Option::Some(v.into());
        self
    }

    pub fn set_poll_till<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_till = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set_key = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set_ext_regex<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_set_ext_regex = std::option::Option::Some(v.into());
        self
    }

    pub fn set_overrides<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.overrides = std::option::Option::Some(v.into());
        self
    }

    pub fn set_object_name_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.object_name_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The changes to apply to an object collection rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLogAnalyticsObjectCollectionRuleDetails {
    pub description: std::option::Option<std::string::String>,

    pub log_group_id: std::option::Option<std::string::String>,

    pub log_source_name: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub char_encoding: std::option::Option<std::string::String>,

    pub timezone: std::option::Option<std::string::String>,

    pub log_set: std::option::Option<std::string::String>,

    pub log_set_key: std::option::Option<std::string::String>,

    pub log_set_ext_regex: std::option::Option<std::string::String>,

    pub overrides: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub object_name_filters: std::vec::Vec<std::string::String>,

    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl UpdateLogAnalyticsObjectCollectionRuleDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set_key = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set_ext_regex<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_set_ext_regex = std::option::Option::Some(v.into());
        self
    }

    pub fn set_overrides<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.overrides = std::option::Option::Some(v.into());
        self
    }

    pub fn set_object_name_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.object_name_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The destination compartment for an object collection rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails {
    pub compartment_id: std::option::Option<std::string::String>,
}

impl ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A rule to collect logs from an object storage bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsObjectCollectionRule {
    pub id: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub os_namespace: std::option::Option<std::string::String>,

    pub os_bucket_name: std::option::Option<std::string::String>,

    pub collection_type: std::option::Option<ObjectCollectionRuleCollectionTypes>,

    pub poll_since: std::option::Option<std::string::String>,

    pub poll_till: std::option::Option<std::string::String>,

    pub log_group_id: std::option::Option<std::string::String>,

    pub log_source_name: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub char_encoding: std::option::Option<std::string::String>,

    pub timezone: std::option::Option<std::string::String>,

    pub log_set: std::option::Option<std::string::String>,

    pub log_set_key: std::option::Option<std::string::String>,

    pub log_set_ext_regex: std::option::Option<std::string::String>,

    pub overrides: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub object_name_filters: std::vec::Vec<std::string::String>,

    pub lifecycle_state: std::option::Option<ObjectCollectionRuleLifecycleStates>,

    pub lifecycle_details: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl LogAnalyticsObjectCollectionRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_os_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_namespace = std::option::Option::Some(v.into());
        self
    }

    pub fn set_os_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_bucket_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_collection_type<T: std::convert::Into<ObjectCollectionRuleCollectionTypes>>(
        mut self,
        v: T,
    ) -> Self {
        self.collection_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_poll_since<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_since = std::option::Option::Some(v.into());
        self
    }

    pub fn set_poll_till<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.poll_till = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set_key<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set_key = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set_ext_regex<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_set_ext_regex = std::option::Option::Some(v.into());
        self
    }

    pub fn set_overrides<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.overrides = std::option::Option::Some(v.into());
        self
    }

    pub fn set_object_name_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.object_name_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<ObjectCollectionRuleLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_details<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A summary of an object collection rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsObjectCollectionRuleSummary {
    pub id: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub os_namespace: std::option::Option<std::string::String>,

    pub os_bucket_name: std::option::Option<std::string::String>,

    pub collection_type: std::option::Option<ObjectCollectionRuleCollectionTypes>,

    pub lifecycle_state: std::option::Option<ObjectCollectionRuleLifecycleStates>,

    pub lifecycle_details: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub is_enabled: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl LogAnalyticsObjectCollectionRuleSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_os_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_namespace = std::option::Option::Some(v.into());
        self
    }

    pub fn set_os_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.os_bucket_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_collection_type<T: std::convert::Into<ObjectCollectionRuleCollectionTypes>>(
        mut self,
        v: T,
    ) -> Self {
        self.collection_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<ObjectCollectionRuleLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_details<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A page of object collection rule summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsObjectCollectionRuleCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsObjectCollectionRuleSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsObjectCollectionRuleCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsObjectCollectionRuleSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsObjectCollectionRuleCollection {
    type PageItem = LogAnalyticsObjectCollectionRuleSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// When a scheduled task runs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Schedule {
    pub r#type: std::option::Option<std::string::String>,

    pub expression: std::option::Option<std::string::String>,

    pub misfire_policy: std::option::Option<std::string::String>,

    pub time_zone: std::option::Option<std::string::String>,

    pub recurring_interval: std::option::Option<std::string::String>,

    pub repeat_count: std::option::Option<i32>,
}

impl Schedule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_expression<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expression = std::option::Option::Some(v.into());
        self
    }

    pub fn set_misfire_policy<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.misfire_policy = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.time_zone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recurring_interval<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.recurring_interval = std::option::Option::Some(v.into());
        self
    }

    pub fn set_repeat_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.repeat_count = std::option::Option::Some(v.into());
        self
    }
}

/// What a scheduled task does when it runs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Action {
    pub r#type: std::option::Option<std::string::String>,

    pub query_string: std::option::Option<std::string::String>,

    pub saved_search_id: std::option::Option<std::string::String>,

    pub purge_duration: std::option::Option<std::string::String>,

    pub purge_compartment_id: std::option::Option<std::string::String>,

    pub compartment_id_in_subtree: std::option::Option<bool>,

    pub data_type: std::option::Option<StorageDataType>,

    pub metric_extraction: std::option::Option<serde_json::Value>,
}

impl Action {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_saved_search_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.saved_search_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purge_duration<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.purge_duration = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purge_compartment_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.purge_compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<StorageDataType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_metric_extraction<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metric_extraction = std::option::Option::Some(v.into());
        self
    }
}

/// The information needed to create a scheduled task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateScheduledTaskDetails {
    pub kind: std::option::Option<ScheduledTaskKind>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub task_type: std::option::Option<TaskType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub schedules: std::vec::Vec<Schedule>,

    pub action: std::option::Option<Action>,

    pub saved_search_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl CreateScheduledTaskDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_kind<T: std::convert::Into<ScheduledTaskKind>>(mut self, v: T) -> Self {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_task_type<T: std::convert::Into<TaskType>>(mut self, v: T) -> Self {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_schedules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Schedule>,
    {
        self.schedules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_action<T: std::convert::Into<Action>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    pub fn set_saved_search_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.saved_search_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The changes to apply to a scheduled task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateScheduledTaskDetails {
    pub kind: std::option::Option<ScheduledTaskKind>,

    pub display_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub schedules: std::vec::Vec<Schedule>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl UpdateScheduledTaskDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_kind<T: std::convert::Into<ScheduledTaskKind>>(mut self, v: T) -> Self {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_schedules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Schedule>,
    {
        self.schedules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The destination compartment for a scheduled task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeScheduledTaskCompartmentDetails {
    pub compartment_id: std::option::Option<std::string::String>,
}

impl ChangeScheduledTaskCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A task that runs on a schedule, such as a purge or a saved search.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduledTask {
    pub id: std::option::Option<std::string::String>,

    pub kind: std::option::Option<ScheduledTaskKind>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub task_type: std::option::Option<TaskType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub schedules: std::vec::Vec<Schedule>,

    pub action: std::option::Option<Action>,

    pub task_status: std::option::Option<TaskStatus>,

    pub pause_reason: std::option::Option<std::string::String>,

    pub work_request_id: std::option::Option<std::string::String>,

    pub num_occurrences: std::option::Option<i64>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_of_next_execution: std::option::Option<time::OffsetDateTime>,

    pub lifecycle_state: std::option::Option<ScheduledTaskLifecycleState>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl ScheduledTask {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_kind<T: std::convert::Into<ScheduledTaskKind>>(mut self, v: T) -> Self {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_task_type<T: std::convert::Into<TaskType>>(mut self, v: T) -> Self {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_schedules<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<Schedule>,
    {
        self.schedules = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_action<T: std::convert::Into<Action>>(mut self, v: T) -> Self {
        self.action = std::option::Option::Some(v.into());
        self
    }

    pub fn set_task_status<T: std::convert::Into<TaskStatus>>(mut self, v: T) -> Self {
        self.task_status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_pause_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pause_reason = std::option::Option::Some(v.into());
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_num_occurrences<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.num_occurrences = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_of_next_execution<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_of_next_execution = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<ScheduledTaskLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A summary of a scheduled task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduledTaskSummary {
    pub id: std::option::Option<std::string::String>,

    pub task_type: std::option::Option<TaskType>,

    pub display_name: std::option::Option<std::string::String>,

    pub task_status: std::option::Option<TaskStatus>,

    pub pause_reason: std::option::Option<std::string::String>,

    pub last_execution_status: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_last_executed: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub lifecycle_state: std::option::Option<ScheduledTaskLifecycleState>,

    pub target_service: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl ScheduledTaskSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_task_type<T: std::convert::Into<TaskType>>(mut self, v: T) -> Self {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_task_status<T: std::convert::Into<TaskStatus>>(mut self, v: T) -> Self {
        self.task_status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_pause_reason<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pause_reason = std::option::Option::Some(v.into());
        self
    }

    pub fn set_last_execution_status<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.last_execution_status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_last_executed<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_last_executed = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<ScheduledTaskLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A page of scheduled task summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScheduledTaskCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<ScheduledTaskSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl ScheduledTaskCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ScheduledTaskSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ScheduledTaskCollection {
    type PageItem = ScheduledTaskSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The results of verifying a scheduled task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct VerifyOutput {
    pub scheduled_task_id: std::option::Option<std::string::String>,

    pub response_time_in_ms: std::option::Option<i64>,

    pub total_matched_count: std::option::Option<i64>,

    pub total_count: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub columns: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<serde_json::Value>,
}

impl VerifyOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_response_time_in_ms<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.response_time_in_ms = std::option::Option::Some(v.into());
        self
    }

    pub fn set_total_matched_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_matched_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_total_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_columns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.columns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The information needed to create an ingest time rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateIngestTimeRuleDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub conditions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub actions: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl CreateIngestTimeRuleDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_conditions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.conditions = std::option::Option::Some(v.into());
        self
    }

    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.actions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// The destination compartment for an ingest time rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ChangeIngestTimeRuleCompartmentDetails {
    pub compartment_id: std::option::Option<std::string::String>,
}

impl ChangeIngestTimeRuleCompartmentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }
}

/// A rule evaluated against log records as they are ingested.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRule {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<ConfigLifecycleState>,

    pub is_enabled: std::option::Option<bool>,

    pub conditions: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub actions: std::vec::Vec<serde_json::Value>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl IngestTimeRule {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<ConfigLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_conditions<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.conditions = std::option::Option::Some(v.into());
        self
    }

    pub fn set_actions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.actions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A summary of an ingest time rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRuleSummary {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<ConfigLifecycleState>,

    pub is_enabled: std::option::Option<bool>,

    pub condition_kind: std::option::Option<std::string::String>,

    pub field_name: std::option::Option<std::string::String>,

    pub field_value: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl IngestTimeRuleSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<ConfigLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_condition_kind<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.condition_kind = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_value = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A page of ingest time rule summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct IngestTimeRuleSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<IngestTimeRuleSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl IngestTimeRuleSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<IngestTimeRuleSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for IngestTimeRuleSummaryCollection {
    type PageItem = IngestTimeRuleSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A summary of an ingest time rule or a saved search rule.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleSummary {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub kind: std::option::Option<std::string::String>,

    pub is_enabled: std::option::Option<bool>,

    pub lifecycle_state: std::option::Option<ConfigLifecycleState>,

    pub target_service: std::option::Option<std::string::String>,

    pub last_execution_status: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_last_executed: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub freeform_tags: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub defined_tags: std::collections::HashMap<std::string::String, std::collections::HashMap<std::string::String, serde_json::Value>>,
}

impl RuleSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_kind<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<ConfigLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    pub fn set_last_execution_status<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.last_execution_status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_last_executed<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_last_executed = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_freeform_tags<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.freeform_tags = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_defined_tags<T, K>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, std::collections::HashMap<std::string::String, serde_json::Value>)>,
        K: std::convert::Into<std::string::String>,
    {
        self.defined_tags = v.into_iter().map(|(k, v)| (k.into(), v)).collect();
        self
    }
}

/// A page of rule summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<RuleSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl RuleSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<RuleSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for RuleSummaryCollection {
    type PageItem = RuleSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// Rule counts for a compartment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RuleSummaryReport {
    pub total_count: std::option::Option<i32>,

    pub ingest_time_rules_count: std::option::Option<i32>,

    pub saved_search_rules_count: std::option::Option<i32>,
}

impl RuleSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_ingest_time_rules_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.ingest_time_rules_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_saved_search_rules_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.saved_search_rules_count = std::option::Option::Some(v.into());
        self
    }
}

/// An association between a source and an entity.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsAssociation {
    pub agent_id: std::option::Option<std::string::String>,

    pub host_name: std::option::Option<std::string::String>,

    pub agent_entity_name: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    pub entity_type_name: std::option::Option<std::string::String>,

    pub source_name: std::option::Option<std::string::String>,

    pub log_group_id: std::option::Option<std::string::String>,
}

impl UpsertLogAnalyticsAssociation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_host_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_agent_entity_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.agent_entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }
}

/// The associations to create or update.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsAssociationDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<UpsertLogAnalyticsAssociation>,
}

impl UpsertLogAnalyticsAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UpsertLogAnalyticsAssociation>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The associations to delete.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLogAnalyticsAssociationDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<UpsertLogAnalyticsAssociation>,
}

impl DeleteLogAnalyticsAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UpsertLogAnalyticsAssociation>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The status of a source to entity association.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociation {
    pub failure_message: std::option::Option<std::string::String>,

    pub agent_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_last_attempted: std::option::Option<time::OffsetDateTime>,

    pub retry_count: std::option::Option<i64>,

    pub source_name: std::option::Option<std::string::String>,

    pub source_display_name: std::option::Option<std::string::String>,

    pub source_type_name: std::option::Option<std::string::String>,

    pub life_cycle_state: std::option::Option<AssociationLifecycleState>,

    pub entity_id: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    pub entity_type_name: std::option::Option<std::string::String>,

    pub host: std::option::Option<std::string::String>,

    pub agent_entity_name: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,

    pub log_group_id: std::option::Option<std::string::String>,

    pub log_group_name: std::option::Option<std::string::String>,

    pub log_group_compartment: std::option::Option<std::string::String>,
}

impl LogAnalyticsAssociation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_failure_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.failure_message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_last_attempted<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_last_attempted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_retry_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.retry_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.source_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.source_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_life_cycle_state<T: std::convert::Into<AssociationLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.life_cycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host = std::option::Option::Some(v.into());
        self
    }

    pub fn set_agent_entity_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.agent_entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_compartment<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_group_compartment = std::option::Option::Some(v.into());
        self
    }
}

/// A page of associations.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociationCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsAssociation>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsAssociationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsAssociation>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsAssociationCollection {
    type PageItem = LogAnalyticsAssociation;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The result of validating the parameters of an association.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociationParameter {
    pub agent_id: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<std::string::String>,

    pub source_name: std::option::Option<std::string::String>,

    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub missing_properties: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub required_properties: std::vec::Vec<std::string::String>,
}

impl LogAnalyticsAssociationParameter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_missing_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.missing_properties = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_required_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.required_properties = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of association parameter results.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociationParameterCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsAssociationParameter>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsAssociationParameterCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsAssociationParameter>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsAssociationParameterCollection {
    type PageItem = LogAnalyticsAssociationParameter;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// Association counts for a compartment.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssociationSummaryReport {
    pub association_count: std::option::Option<i64>,

    pub failed_count: std::option::Option<i64>,

    pub in_progress_count: std::option::Option<i64>,

    pub succeeded_count: std::option::Option<i64>,
}

impl AssociationSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_association_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.association_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_failed_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.failed_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_in_progress_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.in_progress_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_succeeded_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.succeeded_count = std::option::Option::Some(v.into());
        self
    }
}

/// An entity that may be associated with a source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssociableEntity {
    pub entity_id: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    pub entity_type_name: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,

    pub host: std::option::Option<std::string::String>,

    pub agent_id: std::option::Option<std::string::String>,

    pub timezone_region: std::option::Option<std::string::String>,
}

impl AssociableEntity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host = std::option::Option::Some(v.into());
        self
    }

    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone_region<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone_region = std::option::Option::Some(v.into());
        self
    }
}

/// A page of associable entities.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssociableEntityCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<AssociableEntity>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl AssociableEntityCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<AssociableEntity>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for AssociableEntityCollection {
    type PageItem = AssociableEntity;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// An entity with associated sources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociatedEntity {
    pub entity_id: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    pub entity_type_name: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,

    pub on_host: std::option::Option<std::string::String>,

    pub association_count: std::option::Option<i64>,
}

impl LogAnalyticsAssociatedEntity {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_on_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.on_host = std::option::Option::Some(v.into());
        self
    }

    pub fn set_association_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.association_count = std::option::Option::Some(v.into());
        self
    }
}

/// A page of associated entities.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsAssociatedEntityCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsAssociatedEntity>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsAssociatedEntityCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsAssociatedEntity>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsAssociatedEntityCollection {
    type PageItem = LogAnalyticsAssociatedEntity;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A field extracted from log records.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsField {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub data_type: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,

    pub is_multi_valued: std::option::Option<bool>,

    pub is_facet_eligible: std::option::Option<bool>,

    pub is_table_eligible: std::option::Option<bool>,

    pub is_large_data: std::option::Option<bool>,

    pub is_keep_duplicates: std::option::Option<bool>,

    pub is_summarizable: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub unit_type: std::option::Option<std::string::String>,

    pub range_facet_eligible: std::option::Option<i64>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl LogAnalyticsField {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_multi_valued<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_multi_valued = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_facet_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_facet_eligible = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_table_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_table_eligible = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_large_data<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_large_data = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_keep_duplicates<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_keep_duplicates = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_summarizable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_summarizable = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_unit_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.unit_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_range_facet_eligible<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.range_facet_eligible = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a field.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsFieldSummary {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub data_type: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,

    pub is_multi_valued: std::option::Option<bool>,

    pub is_facet_eligible: std::option::Option<bool>,

    pub is_table_eligible: std::option::Option<bool>,

    pub is_large_data: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,
}

impl LogAnalyticsFieldSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_multi_valued<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_multi_valued = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_facet_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_facet_eligible = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_table_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_table_eligible = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_large_data<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_large_data = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }
}

/// A page of field summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsFieldCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsFieldSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsFieldCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsFieldSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsFieldCollection {
    type PageItem = LogAnalyticsFieldSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// Field counts for a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldSummaryReport {
    pub shared_fields_count: std::option::Option<i32>,

    pub non_shared_fields_count: std::option::Option<i32>,

    pub shared_fields_used_in_sources_count: std::option::Option<i32>,
}

impl FieldSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_shared_fields_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.shared_fields_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_non_shared_fields_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.non_shared_fields_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_shared_fields_used_in_sources_count<T: std::convert::Into<i32>>(
        mut self,
        v: T,
    ) -> Self {
        self.shared_fields_used_in_sources_count = std::option::Option::Some(v.into());
        self
    }
}

/// The field to create or update.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsFieldDetails {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub data_type: std::option::Option<std::string::String>,

    pub is_multi_valued: std::option::Option<bool>,

    pub is_keep_duplicates: std::option::Option<bool>,

    pub is_facet_eligible: std::option::Option<bool>,

    pub is_table_eligible: std::option::Option<bool>,

    pub is_large_data: std::option::Option<bool>,

    pub is_summarizable: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub unit_type: std::option::Option<std::string::String>,
}

impl UpsertLogAnalyticsFieldDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_multi_valued<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_multi_valued = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_keep_duplicates<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_keep_duplicates = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_facet_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_facet_eligible = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_table_eligible<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_table_eligible = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_large_data<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_large_data = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_summarizable<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_summarizable = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_unit_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.unit_type = std::option::Option::Some(v.into());
        self
    }
}

/// A list of label names.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelNames {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub label_names: std::vec::Vec<std::string::String>,
}

impl LabelNames {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_label_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.label_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A label attached to log records that match a condition.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabel {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub priority: std::option::Option<LabelPriorityLevel>,

    pub is_system: std::option::Option<bool>,

    pub impact: std::option::Option<std::string::String>,

    pub recommendation: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub aliases: std::vec::Vec<std::string::String>,

    pub edit_version: std::option::Option<i64>,

    pub count_usage_in_source: std::option::Option<i64>,

    pub suggest_type: std::option::Option<i64>,

    pub r#type: std::option::Option<i64>,
}

impl LogAnalyticsLabel {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_priority<T: std::convert::Into<LabelPriorityLevel>>(mut self, v: T) -> Self {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_impact<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.impact = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recommendation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.recommendation = std::option::Option::Some(v.into());
        self
    }

    pub fn set_aliases<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.aliases = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_count_usage_in_source<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.count_usage_in_source = std::option::Option::Some(v.into());
        self
    }

    pub fn set_suggest_type<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.suggest_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }
}

/// A page of labels.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsLabel>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsLabelCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsLabel>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsLabelCollection {
    type PageItem = LogAnalyticsLabel;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The basic information about a label.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelDefinition {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub r#type: std::option::Option<i64>,
}

impl LogAnalyticsLabelDefinition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }
}

/// A page of label definitions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelDefinitionCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsLabelDefinition>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsLabelDefinitionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsLabelDefinition>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsLabelDefinitionCollection {
    type PageItem = LogAnalyticsLabelDefinition;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The number of labels in a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelSummaryReport {
    pub count: std::option::Option<i32>,
}

impl LabelSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = std::option::Option::Some(v.into());
        self
    }
}

/// The label to create or update.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsLabelDetails {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub priority: std::option::Option<LabelPriorityLevel>,

    pub is_system: std::option::Option<bool>,

    pub impact: std::option::Option<std::string::String>,

    pub recommendation: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub aliases: std::vec::Vec<std::string::String>,

    pub edit_version: std::option::Option<i64>,

    pub r#type: std::option::Option<i64>,
}

impl UpsertLogAnalyticsLabelDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_priority<T: std::convert::Into<LabelPriorityLevel>>(mut self, v: T) -> Self {
        self.priority = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_impact<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.impact = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recommendation<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.recommendation = std::option::Option::Some(v.into());
        self
    }

    pub fn set_aliases<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.aliases = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }
}

/// A label priority level.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelPriority {
    pub priority: std::option::Option<LabelPriorityLevel>,
}

impl LabelPriority {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_priority<T: std::convert::Into<LabelPriorityLevel>>(mut self, v: T) -> Self {
        self.priority = std::option::Option::Some(v.into());
        self
    }
}

/// A page of label priorities.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelPriorityCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LabelPriority>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LabelPriorityCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LabelPriority>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LabelPriorityCollection {
    type PageItem = LabelPriority;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A source using a label.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelSourceSummary {
    pub source_name: std::option::Option<std::string::String>,

    pub source_display_name: std::option::Option<std::string::String>,

    pub label_field_name: std::option::Option<std::string::String>,

    pub label_field_displayname: std::option::Option<std::string::String>,

    pub label_operator_name: std::option::Option<std::string::String>,

    pub label_condition: std::option::Option<std::string::String>,
}

impl LabelSourceSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.source_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_label_field_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.label_field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_label_field_displayname<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.label_field_displayname = std::option::Option::Some(v.into());
        self
    }

    pub fn set_label_operator_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.label_operator_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_label_condition<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_condition = std::option::Option::Some(v.into());
        self
    }
}

/// A page of sources using a label.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LabelSourceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LabelSourceSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LabelSourceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LabelSourceSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LabelSourceCollection {
    type PageItem = LabelSourceSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// An operator used in label conditions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelOperator {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,
}

impl LogAnalyticsLabelOperator {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }
}

/// A page of label operators.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLabelOperatorCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsLabelOperator>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsLabelOperatorCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsLabelOperator>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsLabelOperatorCollection {
    type PageItem = LogAnalyticsLabelOperator;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A category used to group related content.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsCategory {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,
}

impl LogAnalyticsCategory {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }
}

/// A page of categories.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsCategoryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsCategory>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsCategoryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsCategoryCollection {
    type PageItem = LogAnalyticsCategory;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The assignment of a category to a resource.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsResourceCategory {
    pub resource_id: std::option::Option<std::string::String>,

    pub resource_type: std::option::Option<std::string::String>,

    pub category_name: std::option::Option<std::string::String>,

    pub resource_display_name: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,
}

impl LogAnalyticsResourceCategory {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_resource_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_category_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_resource_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.resource_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }
}

/// A page of resource category assignments.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsResourceCategoryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsResourceCategory>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsResourceCategoryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsResourceCategory>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsResourceCategoryCollection {
    type PageItem = LogAnalyticsResourceCategory;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A category assignment to add or remove.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsResourceCategoryDetails {
    pub resource_id: std::option::Option<std::string::String>,

    pub resource_type: std::option::Option<std::string::String>,

    pub category_name: std::option::Option<std::string::String>,
}

impl LogAnalyticsResourceCategoryDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_resource_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_resource_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_category_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_name = std::option::Option::Some(v.into());
        self
    }
}

/// The category assignments to remove.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RemoveResourceCategoriesDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsResourceCategoryDetails>,
}

impl RemoveResourceCategoriesDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsResourceCategoryDetails>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The category assignments to add.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateResourceCategoriesDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsResourceCategoryDetails>,
}

impl UpdateResourceCategoriesDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsResourceCategoryDetails>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A column in a lookup table.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LookupField {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub default_match_value: std::option::Option<std::string::String>,

    pub is_common_field: std::option::Option<bool>,

    pub position: std::option::Option<i64>,

    pub description: std::option::Option<std::string::String>,
}

impl LookupField {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_default_match_value<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.default_match_value = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_common_field<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_common_field = std::option::Option::Some(v.into());
        self
    }

    pub fn set_position<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.position = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }
}

/// The progress of loading a lookup file.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StatusSummary {
    pub chunks_processed: std::option::Option<i64>,

    pub failure_details: std::option::Option<std::string::String>,

    pub filename: std::option::Option<std::string::String>,

    pub status: std::option::Option<std::string::String>,

    pub total_chunks: std::option::Option<i64>,
}

impl StatusSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_chunks_processed<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.chunks_processed = std::option::Option::Some(v.into());
        self
    }

    pub fn set_failure_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.failure_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_filename<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filename = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_total_chunks<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_chunks = std::option::Option::Some(v.into());
        self
    }
}

/// A lookup table used to enrich log records.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLookup {
    pub name: std::option::Option<std::string::String>,

    pub lookup_display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<LookupType>,

    pub is_built_in: std::option::Option<i64>,

    pub is_hidden: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub lookup_reference: std::option::Option<i64>,

    pub lookup_reference_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<LookupField>,

    pub status_summary: std::option::Option<StatusSummary>,

    pub max_matches: std::option::Option<i64>,

    pub canonical_link: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl LogAnalyticsLookup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lookup_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lookup_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<LookupType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_built_in<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.is_built_in = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hidden = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lookup_reference<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.lookup_reference = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lookup_reference_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lookup_reference_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LookupField>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_status_summary<T: std::convert::Into<StatusSummary>>(mut self, v: T) -> Self {
        self.status_summary = std::option::Option::Some(v.into());
        self
    }

    pub fn set_max_matches<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.max_matches = std::option::Option::Some(v.into());
        self
    }

    pub fn set_canonical_link<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.canonical_link = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A page of lookups.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsLookupCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsLookup>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsLookupCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsLookup>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsLookupCollection {
    type PageItem = LogAnalyticsLookup;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// Lookup counts for a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LookupSummaryReport {
    pub user_created_count: std::option::Option<i32>,

    pub oracle_defined_count: std::option::Option<i32>,

    pub total_count: std::option::Option<i32>,
}

impl LookupSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_user_created_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.user_created_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_oracle_defined_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.oracle_defined_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to apply to the metadata of a lookup.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateLookupMetadataDetails {
    pub default_match_value: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub edit_version: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<LookupField>,

    pub max_matches: std::option::Option<i64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<LogAnalyticsCategory>,
}

impl UpdateLookupMetadataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_default_match_value<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.default_match_value = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LookupField>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_max_matches<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.max_matches = std::option::Option::Some(v.into());
        self
    }

    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A tenancy's log analytics namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Namespace {
    pub namespace_name: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub is_onboarded: std::option::Option<bool>,

    pub is_data_ever_ingested: std::option::Option<bool>,

    pub is_archiving_enabled: std::option::Option<bool>,
}

impl Namespace {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_onboarded<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_onboarded = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_data_ever_ingested<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_data_ever_ingested = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_archiving_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_archiving_enabled = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NamespaceSummary {
    pub namespace_name: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub is_onboarded: std::option::Option<bool>,

    pub is_data_ever_ingested: std::option::Option<bool>,
}

impl NamespaceSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_onboarded<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_onboarded = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_data_ever_ingested<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_data_ever_ingested = std::option::Option::Some(v.into());
        self
    }
}

/// The namespaces visible to the caller.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NamespaceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<NamespaceSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl NamespaceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<NamespaceSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for NamespaceCollection {
    type PageItem = NamespaceSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The mapping between a parser capture and a field.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserField {
    pub parser_field_id: std::option::Option<i64>,

    pub parser_field_name: std::option::Option<std::string::String>,

    pub parser_field_expression: std::option::Option<std::string::String>,

    pub parser_field_sequence: std::option::Option<i64>,

    pub parser_name: std::option::Option<std::string::String>,

    pub storage_field_name: std::option::Option<std::string::String>,

    pub structured_column_info: std::option::Option<serde_json::Value>,
}

impl LogAnalyticsParserField {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_parser_field_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.parser_field_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_field_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_field_expression<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_field_expression = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_field_sequence<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.parser_field_sequence = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_storage_field_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.storage_field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_structured_column_info<T: std::convert::Into<serde_json::Value>>(
        mut self,
        v: T,
    ) -> Self {
        self.structured_column_info = std::option::Option::Some(v.into());
        self
    }
}

/// A parser that extracts fields from log entries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParser {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<ParserType>,

    pub content: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub encoding: std::option::Option<std::string::String>,

    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_maps: std::vec::Vec<LogAnalyticsParserField>,

    pub footer_content: std::option::Option<std::string::String>,

    pub header_content: std::option::Option<std::string::String>,

    pub is_single_line_content: std::option::Option<bool>,

    pub is_user_deleted: std::option::Option<bool>,

    pub language: std::option::Option<std::string::String>,

    pub tokenize_original_text: std::option::Option<bool>,

    pub field_delimiter: std::option::Option<std::string::String>,

    pub field_qualifier: std::option::Option<std::string::String>,

    pub is_namespace_aware: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<LogAnalyticsCategory>,

    pub is_position_aware: std::option::Option<bool>,

    pub sources_count: std::option::Option<i64>,

    pub parser_sequence: std::option::Option<i32>,

    pub parser_timezone: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl LogAnalyticsParser {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_maps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsParserField>,
    {
        self.field_maps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_footer_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.footer_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_header_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.header_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_single_line_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_single_line_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_user_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_user_deleted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_language<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language = std::option::Option::Some(v.into());
        self
    }

    pub fn set_tokenize_original_text<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.tokenize_original_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_delimiter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_delimiter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_qualifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_qualifier = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_namespace_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_namespace_aware = std::option::Option::Some(v.into());
        self
    }

    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_is_position_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_position_aware = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sources_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.sources_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_sequence<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.parser_sequence = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_timezone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a parser.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserSummary {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<ParserType>,

    pub is_system: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub sources_count: std::option::Option<i64>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl LogAnalyticsParserSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sources_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.sources_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A page of parser summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsParserSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsParserCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsParserSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsParserCollection {
    type PageItem = LogAnalyticsParserSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The number of parsers in a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParserSummaryReport {
    pub count: std::option::Option<i32>,
}

impl ParserSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = std::option::Option::Some(v.into());
        self
    }
}

/// The parser to create or update.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsParserDetails {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<ParserType>,

    pub content: std::option::Option<std::string::String>,

    pub encoding: std::option::Option<std::string::String>,

    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_maps: std::vec::Vec<LogAnalyticsParserField>,

    pub footer_content: std::option::Option<std::string::String>,

    pub header_content: std::option::Option<std::string::String>,

    pub is_single_line_content: std::option::Option<bool>,

    pub language: std::option::Option<std::string::String>,

    pub tokenize_original_text: std::option::Option<bool>,

    pub field_delimiter: std::option::Option<std::string::String>,

    pub field_qualifier: std::option::Option<std::string::String>,

    pub is_namespace_aware: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<LogAnalyticsCategory>,

    pub is_position_aware: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub parser_timezone: std::option::Option<std::string::String>,
}

impl UpsertLogAnalyticsParserDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_maps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsParserField>,
    {
        self.field_maps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_footer_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.footer_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_header_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.header_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_single_line_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_single_line_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_language<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language = std::option::Option::Some(v.into());
        self
    }

    pub fn set_tokenize_original_text<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.tokenize_original_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_delimiter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_delimiter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_qualifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_qualifier = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_namespace_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_namespace_aware = std::option::Option::Some(v.into());
        self
    }

    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_is_position_aware<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_position_aware = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_timezone = std::option::Option::Some(v.into());
        self
    }
}

/// A parser definition and sample content to test it against.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestParserPayloadDetails {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<ParserType>,

    pub content: std::option::Option<std::string::String>,

    pub encoding: std::option::Option<std::string::String>,

    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_maps: std::vec::Vec<LogAnalyticsParserField>,

    pub footer_content: std::option::Option<std::string::String>,

    pub header_content: std::option::Option<std::string::String>,

    pub is_single_line_content: std::option::Option<bool>,

    pub language: std::option::Option<std::string::String>,

    pub tokenize_original_text: std::option::Option<bool>,

    pub field_delimiter: std::option::Option<std::string::String>,

    pub field_qualifier: std::option::Option<std::string::String>,

    pub metadata: std::option::Option<serde_json::Value>,
}

impl TestParserPayloadDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<ParserType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_maps<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsParserField>,
    {
        self.field_maps = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_footer_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.footer_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_header_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.header_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_single_line_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_single_line_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_language<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.language = std::option::Option::Some(v.into());
        self
    }

    pub fn set_tokenize_original_text<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.tokenize_original_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_delimiter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_delimiter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_qualifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_qualifier = std::option::Option::Some(v.into());
        self
    }

    pub fn set_metadata<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metadata = std::option::Option::Some(v.into());
        self
    }
}

/// The outcome of testing a parser.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParserTestResult {
    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub additional_info: std::collections::HashMap<std::string::String, std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entries: std::vec::Vec<serde_json::Value>,

    pub example_content: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub lines: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub named_capture_groups: std::vec::Vec<std::string::String>,
}

impl ParserTestResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_additional_info<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.additional_info = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    pub fn set_entries<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.entries = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_example_content<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.example_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lines<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.lines = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_named_capture_groups<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.named_capture_groups = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A path found in a structured log sample.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtractLogFieldResult {
    pub path: std::option::Option<std::string::String>,
}

impl ExtractLogFieldResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.path = std::option::Option::Some(v.into());
        self
    }
}

/// The field paths found in a structured log sample.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtractLogFieldResults {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<ExtractLogFieldResult>,
}

impl ExtractLogFieldResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ExtractLogFieldResult>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A header path found in a structured log sample.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtractLogHeaderResult {
    pub path: std::option::Option<std::string::String>,
}

impl ExtractLogHeaderResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_path<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.path = std::option::Option::Some(v.into());
        self
    }
}

/// The header paths found in a structured log sample.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtractLogHeaderResults {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<ExtractLogHeaderResult>,
}

impl ExtractLogHeaderResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ExtractLogHeaderResult>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A function applied by a parser.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserFunction {
    pub parser_function_id: std::option::Option<i64>,

    pub parser_function_name: std::option::Option<std::string::String>,

    pub parser_name: std::option::Option<std::string::String>,

    pub parser_meta_plugin_name: std::option::Option<std::string::String>,

    pub is_enabled: std::option::Option<bool>,

    pub function_parameters: std::option::Option<serde_json::Value>,
}

impl LogAnalyticsParserFunction {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_parser_function_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.parser_function_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_function_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_function_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_meta_plugin_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_meta_plugin_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_function_parameters<T: std::convert::Into<serde_json::Value>>(
        mut self,
        v: T,
    ) -> Self {
        self.function_parameters = std::option::Option::Some(v.into());
        self
    }
}

/// A page of parser functions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserFunctionCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsParserFunction>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsParserFunctionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsParserFunction>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsParserFunctionCollection {
    type PageItem = LogAnalyticsParserFunction;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A plugin available to parser functions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserMetaPlugin {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub meta_plugin_parameters: std::option::Option<serde_json::Value>,
}

impl LogAnalyticsParserMetaPlugin {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_meta_plugin_parameters<T: std::convert::Into<serde_json::Value>>(
        mut self,
        v: T,
    ) -> Self {
        self.meta_plugin_parameters = std::option::Option::Some(v.into());
        self
    }
}

/// A page of parser plugins.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsParserMetaPluginCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsParserMetaPlugin>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsParserMetaPluginCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsParserMetaPlugin>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsParserMetaPluginCollection {
    type PageItem = LogAnalyticsParserMetaPlugin;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A namespace preference.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsPreference {
    pub name: std::option::Option<std::string::String>,

    pub value: std::option::Option<std::string::String>,
}

impl LogAnalyticsPreference {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }
}

/// A page of preferences.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsPreferenceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsPreference>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsPreferenceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsPreference>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsPreferenceCollection {
    type PageItem = LogAnalyticsPreference;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The preferences to update or remove.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsPreferenceDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsPreference>,
}

impl LogAnalyticsPreferenceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsPreference>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A time interval used to filter queries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimeRange {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_start: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_end: std::option::Option<time::OffsetDateTime>,

    pub time_zone: std::option::Option<std::string::String>,
}

impl TimeRange {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_start<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_start = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_end<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_end = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.time_zone = std::option::Option::Some(v.into());
        self
    }
}

/// A filter restricting the scope of a query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ScopeFilter {
    pub field_name: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub values: std::vec::Vec<std::string::String>,

    pub flags: std::option::Option<std::string::String>,
}

impl ScopeFilter {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_values<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.values = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_flags<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.flags = std::option::Option::Some(v.into());
        self
    }
}

/// A query to run.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    pub compartment_id_in_subtree: std::option::Option<bool>,

    pub saved_search_id: std::option::Option<std::string::String>,

    pub query_string: std::option::Option<std::string::String>,

    pub sub_system: std::option::Option<SubSystemName>,

    pub max_total_count: std::option::Option<i32>,

    pub time_filter: std::option::Option<TimeRange>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub scope_filters: std::vec::Vec<ScopeFilter>,

    pub query_timeout_in_seconds: std::option::Option<i32>,

    pub should_run_async: std::option::Option<bool>,

    pub async_mode: std::option::Option<QueryOperationMode>,

    pub should_include_total_count: std::option::Option<bool>,

    pub should_include_columns: std::option::Option<bool>,

    pub should_include_fields: std::option::Option<bool>,

    pub should_use_acceleration: std::option::Option<bool>,
}

impl QueryDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    pub fn set_saved_search_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.saved_search_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sub_system<T: std::convert::Into<SubSystemName>>(mut self, v: T) -> Self {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_max_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.max_total_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_filter<T: std::convert::Into<TimeRange>>(mut self, v: T) -> Self {
        self.time_filter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_scope_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ScopeFilter>,
    {
        self.scope_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_query_timeout_in_seconds<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.query_timeout_in_seconds = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_run_async<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_run_async = std::option::Option::Some(v.into());
        self
    }

    pub fn set_async_mode<T: std::convert::Into<QueryOperationMode>>(mut self, v: T) -> Self {
        self.async_mode = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_include_total_count<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_total_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_include_columns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_columns = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_include_fields<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_fields = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_use_acceleration<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_use_acceleration = std::option::Option::Some(v.into());
        self
    }
}

/// The results of a query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryAggregation {
    pub total_count: std::option::Option<i32>,

    pub total_matched_count: std::option::Option<i64>,

    pub are_partial_results: std::option::Option<bool>,

    pub partial_result_reason: std::option::Option<std::string::String>,

    pub is_content_hidden: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub columns: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub fields: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<serde_json::Value>,

    pub query_execution_time_in_ms: std::option::Option<i64>,
}

impl QueryAggregation {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.total_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_total_matched_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.total_matched_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_are_partial_results<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.are_partial_results = std::option::Option::Some(v.into());
        self
    }

    pub fn set_partial_result_reason<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.partial_result_reason = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_content_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_content_hidden = std::option::Option::Some(v.into());
        self
    }

    pub fn set_columns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.columns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_fields<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.fields = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_query_execution_time_in_ms<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.query_execution_time_in_ms = std::option::Option::Some(v.into());
        self
    }
}

/// A column available to a query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ColumnName {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,
}

impl ColumnName {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }
}

/// The columns available to a query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ColumnNameCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<ColumnName>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl ColumnNameCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ColumnName>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ColumnNameCollection {
    type PageItem = ColumnName;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A query and the filters to add to it.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    pub query_string: std::option::Option<std::string::String>,

    pub sub_system: std::option::Option<SubSystemName>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub filters: std::vec::Vec<serde_json::Value>,
}

impl FilterDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sub_system<T: std::convert::Into<SubSystemName>>(mut self, v: T) -> Self {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.filters = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A query with filters applied.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterOutput {
    pub query_string: std::option::Option<std::string::String>,

    pub display_query_string: std::option::Option<std::string::String>,

    pub internal_query_string: std::option::Option<std::string::String>,
}

impl FilterOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_internal_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.internal_query_string = std::option::Option::Some(v.into());
        self
    }
}

/// A query to parse.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParseQueryDetails {
    pub query_string: std::option::Option<std::string::String>,

    pub sub_system: std::option::Option<SubSystemName>,
}

impl ParseQueryDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sub_system<T: std::convert::Into<SubSystemName>>(mut self, v: T) -> Self {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }
}

/// The parsed form of a query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ParseQueryOutput {
    pub display_query_string: std::option::Option<std::string::String>,

    pub internal_query_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub columns: std::vec::Vec<serde_json::Value>,

    pub response_time_in_ms: std::option::Option<i64>,
}

impl ParseQueryOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_display_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_internal_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.internal_query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_columns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.columns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_response_time_in_ms<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.response_time_in_ms = std::option::Option::Some(v.into());
        self
    }
}

/// A partial query to complete.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SuggestDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    pub compartment_id_in_subtree: std::option::Option<bool>,

    pub query_string: std::option::Option<std::string::String>,

    pub sub_system: std::option::Option<SubSystemName>,
}

impl SuggestDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sub_system<T: std::convert::Into<SubSystemName>>(mut self, v: T) -> Self {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }
}

/// Completions for a partial query.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SuggestOutput {
    pub auto_complete_string: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub suggestions: std::vec::Vec<serde_json::Value>,
}

impl SuggestOutput {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_auto_complete_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.auto_complete_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_suggestions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.suggestions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A query whose results should be exported.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    pub compartment_id_in_subtree: std::option::Option<bool>,

    pub query_string: std::option::Option<std::string::String>,

    pub sub_system: std::option::Option<SubSystemName>,

    pub time_filter: std::option::Option<TimeRange>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub scope_filters: std::vec::Vec<ScopeFilter>,

    pub max_total_count: std::option::Option<i32>,

    pub output_format: std::option::Option<ExportFormat>,

    pub local_time_zone: std::option::Option<std::string::String>,

    pub should_localize_display_names: std::option::Option<bool>,
}

impl ExportDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sub_system<T: std::convert::Into<SubSystemName>>(mut self, v: T) -> Self {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_filter<T: std::convert::Into<TimeRange>>(mut self, v: T) -> Self {
        self.time_filter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_scope_filters<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<ScopeFilter>,
    {
        self.scope_filters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_max_total_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.max_total_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_output_format<T: std::convert::Into<ExportFormat>>(mut self, v: T) -> Self {
        self.output_format = std::option::Option::Some(v.into());
        self
    }

    pub fn set_local_time_zone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.local_time_zone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_localize_display_names<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_localize_display_names = std::option::Option::Some(v.into());
        self
    }
}

/// The custom content to export.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportContent {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parser_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_type_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub label_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub lookup_names: std::vec::Vec<std::string::String>,
}

impl ExportContent {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_field_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.field_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_parser_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.parser_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_source_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.source_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_entity_type_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.entity_type_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_label_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.label_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_lookup_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.lookup_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The custom content created or updated by an import.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CustomContentSummary {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parser_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub field_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_type_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub label_names: std::vec::Vec<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub lookup_names: std::vec::Vec<std::string::String>,
}

impl CustomContentSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_parser_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.parser_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_source_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.source_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_field_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.field_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_entity_type_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.entity_type_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_label_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.label_names = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_lookup_names<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.lookup_names = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Two pieces of content to compare.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompareContentDetails {
    pub content_type: std::option::Option<std::string::String>,

    pub in_content1: std::option::Option<std::string::String>,

    pub in_content2: std::option::Option<std::string::String>,
}

impl CompareContentDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_in_content1<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.in_content1 = std::option::Option::Some(v.into());
        self
    }

    pub fn set_in_content2<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.in_content2 = std::option::Option::Some(v.into());
        self
    }
}

/// The differences between two pieces of content.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CompareContentResult {
    pub content_type: std::option::Option<std::string::String>,

    pub diff_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub differences: std::vec::Vec<serde_json::Value>,
}

impl CompareContentResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_diff_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.diff_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_differences<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.differences = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A query running in the background.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWorkRequest {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_background_at: std::option::Option<time::OffsetDateTime>,

    pub percent_complete: std::option::Option<i32>,

    pub status: std::option::Option<OperationStatus>,

    pub operation_type: std::option::Option<std::string::String>,

    pub sub_system: std::option::Option<SubSystemName>,

    pub mode: std::option::Option<QueryOperationMode>,

    pub display_query_string: std::option::Option<std::string::String>,

    pub internal_query_string: std::option::Option<std::string::String>,
}

impl QueryWorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_background_at<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_background_at = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sub_system<T: std::convert::Into<SubSystemName>>(mut self, v: T) -> Self {
        self.sub_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_mode<T: std::convert::Into<QueryOperationMode>>(mut self, v: T) -> Self {
        self.mode = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_internal_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.internal_query_string = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a query work request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWorkRequestSummary {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    pub percent_complete: std::option::Option<i32>,

    pub status: std::option::Option<OperationStatus>,

    pub operation_type: std::option::Option<std::string::String>,

    pub mode: std::option::Option<QueryOperationMode>,

    pub display_query_string: std::option::Option<std::string::String>,
}

impl QueryWorkRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_mode<T: std::convert::Into<QueryOperationMode>>(mut self, v: T) -> Self {
        self.mode = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.display_query_string = std::option::Option::Some(v.into());
        self
    }
}

/// A page of query work requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct QueryWorkRequestCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<QueryWorkRequestSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl QueryWorkRequestCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<QueryWorkRequestSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for QueryWorkRequestCollection {
    type PageItem = QueryWorkRequestSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// How long data stays in active and archival storage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ArchivingConfiguration {
    pub active_storage_duration: std::option::Option<std::string::String>,

    pub archival_storage_duration: std::option::Option<std::string::String>,
}

impl ArchivingConfiguration {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_active_storage_duration<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.active_storage_duration = std::option::Option::Some(v.into());
        self
    }

    pub fn set_archival_storage_duration<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.archival_storage_duration = std::option::Option::Some(v.into());
        self
    }
}

/// The storage configuration for a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Storage {
    pub compartment_id: std::option::Option<std::string::String>,

    pub is_archiving_enabled: std::option::Option<bool>,

    pub archiving_configuration: std::option::Option<ArchivingConfiguration>,
}

impl Storage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_archiving_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_archiving_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_archiving_configuration<T: std::convert::Into<ArchivingConfiguration>>(
        mut self,
        v: T,
    ) -> Self {
        self.archiving_configuration = std::option::Option::Some(v.into());
        self
    }
}

/// The changes to apply to the storage configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateStorageDetails {
    pub archiving_configuration: std::option::Option<ArchivingConfiguration>,
}

impl UpdateStorageDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_archiving_configuration<T: std::convert::Into<ArchivingConfiguration>>(
        mut self,
        v: T,
    ) -> Self {
        self.archiving_configuration = std::option::Option::Some(v.into());
        self
    }
}

/// The amount of data stored.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageUsage {
    pub active_data_size: std::option::Option<i64>,

    pub archived_data_size: std::option::Option<i64>,

    pub recalled_data_size: std::option::Option<i64>,
}

impl StorageUsage {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_active_data_size<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.active_data_size = std::option::Option::Some(v.into());
        self
    }

    pub fn set_archived_data_size<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.archived_data_size = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recalled_data_size<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.recalled_data_size = std::option::Option::Some(v.into());
        self
    }
}

/// A message confirming a storage change.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Success {
    pub message: std::option::Option<std::string::String>,
}

impl Success {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }
}

/// The key used to encrypt stored data.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AssignEncryptionKeyDetails {
    pub key_id: std::option::Option<std::string::String>,

    pub key_type: std::option::Option<KeyType>,
}

impl AssignEncryptionKeyDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_key_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_key_type<T: std::convert::Into<KeyType>>(mut self, v: T) -> Self {
        self.key_type = std::option::Option::Some(v.into());
        self
    }
}

/// The number of log sets.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogSetsCount {
    pub log_sets_count: std::option::Option<i64>,
}

impl LogSetsCount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_log_sets_count<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.log_sets_count = std::option::Option::Some(v.into());
        self
    }
}

/// A log set.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogSet {
    pub name: std::option::Option<std::string::String>,
}

impl LogSet {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }
}

/// A page of log sets.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogSetCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogSet>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogSetCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogSet>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogSetCollection {
    type PageItem = LogSet;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// Recall counts for a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecallCount {
    pub recall_count: std::option::Option<i32>,

    pub recall_succeeded: std::option::Option<i32>,

    pub recall_failed: std::option::Option<i32>,

    pub recall_pending: std::option::Option<i32>,

    pub recall_limit: std::option::Option<i32>,
}

impl RecallCount {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_recall_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recall_succeeded<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_succeeded = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recall_failed<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_failed = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recall_pending<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_pending = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recall_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_limit = std::option::Option::Some(v.into());
        self
    }
}

/// The amount of recalled data in an interval.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecalledDataSize {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    pub recalled_data_in_bytes: std::option::Option<i64>,

    pub not_recalled_data_in_bytes: std::option::Option<i64>,
}

impl RecalledDataSize {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recalled_data_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.recalled_data_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_not_recalled_data_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.not_recalled_data_in_bytes = std::option::Option::Some(v.into());
        self
    }
}

/// A recall of archived data.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecalledData {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    pub status: std::option::Option<RecallStatus>,

    pub recall_count: std::option::Option<i32>,

    pub storage_usage_in_bytes: std::option::Option<i64>,

    pub not_recalled_data_in_bytes: std::option::Option<i64>,

    pub purpose: std::option::Option<std::string::String>,

    pub query_string: std::option::Option<std::string::String>,

    pub log_sets: std::option::Option<std::string::String>,

    pub created_by: std::option::Option<std::string::String>,

    pub collection_id: std::option::Option<i64>,
}

impl RecalledData {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<RecallStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recall_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.recall_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_storage_usage_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.storage_usage_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_not_recalled_data_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.not_recalled_data_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purpose<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.purpose = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    pub fn set_created_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_collection_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.collection_id = std::option::Option::Some(v.into());
        self
    }
}

/// A page of recalls.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecalledDataCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<RecalledData>,

    pub not_recalled_data_in_bytes: std::option::Option<i64>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl RecalledDataCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<RecalledData>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_not_recalled_data_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.not_recalled_data_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for RecalledDataCollection {
    type PageItem = RecalledData;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A recall overlapping the requested interval.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OverlappingRecallSummary {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    pub status: std::option::Option<RecallStatus>,

    pub purpose: std::option::Option<std::string::String>,

    pub query_string: std::option::Option<std::string::String>,

    pub log_sets: std::option::Option<std::string::String>,

    pub created_by: std::option::Option<std::string::String>,

    pub collection_id: std::option::Option<i64>,

    pub recall_id: std::option::Option<i64>,
}

impl OverlappingRecallSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<RecallStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purpose<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.purpose = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query_string<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    pub fn set_created_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.created_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_collection_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.collection_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_recall_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.recall_id = std::option::Option::Some(v.into());
        self
    }
}

/// A page of overlapping recalls.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OverlappingRecallCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<OverlappingRecallSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl OverlappingRecallCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<OverlappingRecallSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for OverlappingRecallCollection {
    type PageItem = OverlappingRecallSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The data to estimate a purge for.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimatePurgeDataSizeDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    pub compartment_id_in_subtree: std::option::Option<bool>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    pub purge_query_filter: std::option::Option<std::string::String>,

    pub data_type: std::option::Option<StorageDataType>,
}

impl EstimatePurgeDataSizeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purge_query_filter<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.purge_query_filter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<StorageDataType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }
}

/// The estimated size of a purge.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimatePurgeDataSizeResult {
    pub data_size: std::option::Option<i64>,
}

impl EstimatePurgeDataSizeResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_data_size<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.data_size = std::option::Option::Some(v.into());
        self
    }
}

/// The data to estimate a recall for.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateRecallDataSizeDetails {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    pub log_sets: std::option::Option<std::string::String>,

    pub is_recall_new_data_only: std::option::Option<bool>,
}

impl EstimateRecallDataSizeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_recall_new_data_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_recall_new_data_only = std::option::Option::Some(v.into());
        self
    }
}

/// The estimated size of a recall.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateRecallDataSizeResult {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    pub size_in_bytes: std::option::Option<i64>,

    pub core_group_count: std::option::Option<i32>,

    pub core_group_count_limit: std::option::Option<i32>,

    pub size_limit_in_bytes: std::option::Option<i64>,

    pub is_overlapping_with_existing_recalls: std::option::Option<bool>,
}

impl EstimateRecallDataSizeResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_size_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.size_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_core_group_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.core_group_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_core_group_count_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.core_group_count_limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_size_limit_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.size_limit_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_overlapping_with_existing_recalls<T: std::convert::Into<bool>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_overlapping_with_existing_recalls = std::option::Option::Some(v.into());
        self
    }
}

/// The recalled data to estimate a release for.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateReleaseDataSizeDetails {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,
}

impl EstimateReleaseDataSizeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }
}

/// The estimated size of a release.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EstimateReleaseDataSizeResult {
    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    pub size_in_bytes: std::option::Option<i64>,
}

impl EstimateReleaseDataSizeResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_size_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.size_in_bytes = std::option::Option::Some(v.into());
        self
    }
}

/// The data to purge.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PurgeStorageDataDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    pub compartment_id_in_subtree: std::option::Option<bool>,

    pub data_type: std::option::Option<StorageDataType>,

    pub purge_query_filter: std::option::Option<std::string::String>,
}

impl PurgeStorageDataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id_in_subtree<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.compartment_id_in_subtree = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<StorageDataType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purge_query_filter<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.purge_query_filter = std::option::Option::Some(v.into());
        self
    }
}

/// The archived data to recall.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecallArchivedDataDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    pub data_type: std::option::Option<StorageDataType>,

    pub log_sets: std::option::Option<std::string::String>,

    pub query: std::option::Option<std::string::String>,

    pub purpose: std::option::Option<std::string::String>,

    pub is_recall_new_data_only: std::option::Option<bool>,

    pub is_use_recommended_data_set: std::option::Option<bool>,
}

impl RecallArchivedDataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<StorageDataType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    pub fn set_query<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.query = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purpose<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.purpose = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_recall_new_data_only<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_recall_new_data_only = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_use_recommended_data_set<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_use_recommended_data_set = std::option::Option::Some(v.into());
        self
    }
}

/// The recalled data to release.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ReleaseRecalledDataDetails {
    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    pub data_type: std::option::Option<StorageDataType>,

    pub log_sets: std::option::Option<std::string::String>,

    pub collection_id: std::option::Option<i64>,
}

impl ReleaseRecalledDataDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<StorageDataType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    pub fn set_collection_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.collection_id = std::option::Option::Some(v.into());
        self
    }
}

/// An asynchronous storage operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageWorkRequest {
    pub id: std::option::Option<std::string::String>,

    pub operation_type: std::option::Option<StorageOperationType>,

    pub status: std::option::Option<OperationStatus>,

    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    pub percent_complete: std::option::Option<i32>,

    pub policy_name: std::option::Option<std::string::String>,

    pub policy_id: std::option::Option<std::string::String>,

    pub storage_usage_in_bytes: std::option::Option<i64>,

    pub data_type: std::option::Option<StorageDataType>,

    pub key_id: std::option::Option<std::string::String>,

    pub key_type: std::option::Option<KeyType>,

    pub log_sets: std::option::Option<std::string::String>,

    pub purge_query_string: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    pub status_details: std::option::Option<std::string::String>,
}

impl StorageWorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<StorageOperationType>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_policy_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_storage_usage_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.storage_usage_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<StorageDataType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_key_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_key_type<T: std::convert::Into<KeyType>>(mut self, v: T) -> Self {
        self.key_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_sets<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_sets = std::option::Option::Some(v.into());
        self
    }

    pub fn set_purge_query_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.purge_query_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_details = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a storage work request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageWorkRequestSummary {
    pub id: std::option::Option<std::string::String>,

    pub operation_type: std::option::Option<StorageOperationType>,

    pub status: std::option::Option<OperationStatus>,

    pub compartment_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_expires: std::option::Option<time::OffsetDateTime>,

    pub percent_complete: std::option::Option<i32>,

    pub storage_usage_in_bytes: std::option::Option<i64>,

    pub data_type: std::option::Option<StorageDataType>,

    pub status_details: std::option::Option<std::string::String>,
}

impl StorageWorkRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<StorageOperationType>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_expires<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_expires = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_storage_usage_in_bytes<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.storage_usage_in_bytes = std::option::Option::Some(v.into());
        self
    }

    pub fn set_data_type<T: std::convert::Into<StorageDataType>>(mut self, v: T) -> Self {
        self.data_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status_details = std::option::Option::Some(v.into());
        self
    }
}

/// A page of storage work requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StorageWorkRequestCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<StorageWorkRequestSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl StorageWorkRequestCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<StorageWorkRequestSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for StorageWorkRequestCollection {
    type PageItem = StorageWorkRequestSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The bucket receiving data that could not be processed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UnprocessedDataBucket {
    pub namespace: std::option::Option<std::string::String>,

    pub bucket: std::option::Option<std::string::String>,

    pub is_enabled: std::option::Option<bool>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl UnprocessedDataBucket {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace = std::option::Option::Some(v.into());
        self
    }

    pub fn set_bucket<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A resource affected by a work request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestResource {
    pub entity_type: std::option::Option<std::string::String>,

    pub action_type: std::option::Option<std::string::String>,

    pub identifier: std::option::Option<std::string::String>,

    pub entity_uri: std::option::Option<std::string::String>,
}

impl WorkRequestResource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_action_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.action_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_identifier<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.identifier = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_uri<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_uri = std::option::Option::Some(v.into());
        self
    }
}

/// An asynchronous operation.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequest {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub operation_type: std::option::Option<std::string::String>,

    pub percent_complete: std::option::Option<f64>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub resources: std::vec::Vec<WorkRequestResource>,

    pub status: std::option::Option<OperationStatus>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,
}

impl WorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_resources<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<WorkRequestResource>,
    {
        self.resources = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_status<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a work request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestSummary {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub operation_type: std::option::Option<std::string::String>,

    pub percent_complete: std::option::Option<f64>,

    pub status: std::option::Option<OperationStatus>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,
}

impl WorkRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }
}

/// A page of work requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<WorkRequestSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl WorkRequestCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<WorkRequestSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for WorkRequestCollection {
    type PageItem = WorkRequestSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// An error reported by a work request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestError {
    pub code: std::option::Option<std::string::String>,

    pub message: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub timestamp: std::option::Option<time::OffsetDateTime>,
}

impl WorkRequestError {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_code<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.code = std::option::Option::Some(v.into());
        self
    }

    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timestamp<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.timestamp = std::option::Option::Some(v.into());
        self
    }
}

/// A page of work request errors.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestErrorCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<WorkRequestError>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl WorkRequestErrorCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<WorkRequestError>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for WorkRequestErrorCollection {
    type PageItem = WorkRequestError;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A log message reported by a work request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestLog {
    pub message: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub timestamp: std::option::Option<time::OffsetDateTime>,
}

impl WorkRequestLog {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timestamp<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.timestamp = std::option::Option::Some(v.into());
        self
    }
}

/// A page of work request log messages.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkRequestLogCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<WorkRequestLog>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl WorkRequestLogCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<WorkRequestLog>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for WorkRequestLogCollection {
    type PageItem = WorkRequestLog;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// An asynchronous configuration change.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsConfigWorkRequest {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub operation_type: std::option::Option<std::string::String>,

    pub percent_complete: std::option::Option<i64>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    pub lifecycle_state: std::option::Option<OperationStatus>,

    pub payload: std::option::Option<serde_json::Value>,
}

impl LogAnalyticsConfigWorkRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_payload<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.payload = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a configuration work request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsConfigWorkRequestSummary {
    pub id: std::option::Option<std::string::String>,

    pub compartment_id: std::option::Option<std::string::String>,

    pub operation_type: std::option::Option<std::string::String>,

    pub percent_complete: std::option::Option<i64>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_accepted: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_finished: std::option::Option<time::OffsetDateTime>,

    pub lifecycle_state: std::option::Option<OperationStatus>,
}

impl LogAnalyticsConfigWorkRequestSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_percent_complete<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.percent_complete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_accepted<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_accepted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<OperationStatus>>(mut self, v: T) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }
}

/// A page of configuration work requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsConfigWorkRequestCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsConfigWorkRequestSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsConfigWorkRequestCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsConfigWorkRequestSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsConfigWorkRequestCollection {
    type PageItem = LogAnalyticsConfigWorkRequestSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// An event type a source can process.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventType {
    pub event_type: std::option::Option<std::string::String>,

    pub spec_version: std::option::Option<std::string::String>,

    pub is_enabled: std::option::Option<bool>,

    pub is_system: std::option::Option<bool>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl EventType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_event_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.event_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_spec_version<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.spec_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// The event types to add, remove, enable, or disable.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventTypeDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<EventType>,
}

impl EventTypeDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EventType>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of event types.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EventTypeCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<EventType>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl EventTypeCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EventType>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for EventTypeCollection {
    type PageItem = EventType;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// An entity type a source applies to.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceEntityType {
    pub source_id: std::option::Option<i64>,

    pub entity_type: std::option::Option<std::string::String>,

    pub entity_type_category: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,
}

impl LogAnalyticsSourceEntityType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_category<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_category = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }
}

/// A file pattern used by a source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourcePattern {
    pub converted_text: std::option::Option<std::string::String>,

    pub db_parser_id: std::option::Option<i64>,

    pub db_pattern_date_time_columns: std::option::Option<std::string::String>,

    pub db_pattern_date_time_field: std::option::Option<std::string::String>,

    pub db_pattern_sequence_column: std::option::Option<std::string::String>,

    pub is_include: std::option::Option<bool>,

    pub is_default: std::option::Option<bool>,

    pub is_agent_warning_suppressed: std::option::Option<bool>,

    pub pattern_text: std::option::Option<std::string::String>,

    pub pattern_id: std::option::Option<i64>,

    pub description: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub edit_version: std::option::Option<i64>,

    pub source_id: std::option::Option<i64>,
}

impl LogAnalyticsSourcePattern {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_converted_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.converted_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_db_parser_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.db_parser_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_db_pattern_date_time_columns<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.db_pattern_date_time_columns = std::option::Option::Some(v.into());
        self
    }

    pub fn set_db_pattern_date_time_field<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.db_pattern_date_time_field = std::option::Option::Some(v.into());
        self
    }

    pub fn set_db_pattern_sequence_column<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.db_pattern_sequence_column = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_include<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_default<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_default = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_agent_warning_suppressed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_agent_warning_suppressed = std::option::Option::Some(v.into());
        self
    }

    pub fn set_pattern_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pattern_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_pattern_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.pattern_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }
}

/// A page of source patterns.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourcePatternCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsSourcePattern>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsSourcePatternCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourcePattern>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsSourcePatternCollection {
    type PageItem = LogAnalyticsSourcePattern;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A field derived from another field with a regular expression.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceExtendedFieldDefinition {
    pub field_name: std::option::Option<std::string::String>,

    pub field_display_name: std::option::Option<std::string::String>,

    pub base_field_name: std::option::Option<std::string::String>,

    pub base_field_display_name: std::option::Option<std::string::String>,

    pub regular_expression: std::option::Option<std::string::String>,

    pub extended_field_definition_id: std::option::Option<i64>,

    pub is_enabled: std::option::Option<bool>,

    pub is_system: std::option::Option<bool>,

    pub edit_version: std::option::Option<i64>,

    pub condition_field: std::option::Option<std::string::String>,

    pub condition_operator: std::option::Option<std::string::String>,

    pub condition_value: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl LogAnalyticsSourceExtendedFieldDefinition {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.field_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_base_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.base_field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_base_field_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.base_field_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_regular_expression<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.regular_expression = std::option::Option::Some(v.into());
        self
    }

    pub fn set_extended_field_definition_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.extended_field_definition_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_condition_field<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.condition_field = std::option::Option::Some(v.into());
        self
    }

    pub fn set_condition_operator<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.condition_operator = std::option::Option::Some(v.into());
        self
    }

    pub fn set_condition_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.condition_value = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A page of extended field definitions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceExtendedFieldDefinitionCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsSourceExtendedFieldDefinition>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsSourceExtendedFieldDefinitionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourceExtendedFieldDefinition>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsSourceExtendedFieldDefinitionCollection {
    type PageItem = LogAnalyticsSourceExtendedFieldDefinition;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A log source, describing where logs come from and how to parse them.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSource {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<i64>,

    pub type_name: std::option::Option<std::string::String>,

    pub type_display_name: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,

    pub is_auto_association_enabled: std::option::Option<bool>,

    pub is_auto_association_override: std::option::Option<bool>,

    pub is_secure_content: std::option::Option<bool>,

    pub is_for_cloud: std::option::Option<bool>,

    pub is_timezone_override: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_types: std::vec::Vec<LogAnalyticsSourceEntityType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parsers: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub patterns: std::vec::Vec<LogAnalyticsSourcePattern>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub label_conditions: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub data_filter_definitions: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub extended_field_definitions: std::vec::Vec<LogAnalyticsSourceExtendedFieldDefinition>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub metric_definitions: std::vec::Vec<serde_json::Value>,

    pub association_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub event_types: std::vec::Vec<EventType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub endpoints: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_properties: std::vec::Vec<serde_json::Value>,

    pub edit_version: std::option::Option<i64>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl LogAnalyticsSource {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_auto_association_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_auto_association_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_override = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_secure_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_for_cloud<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_for_cloud = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_timezone_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_timezone_override = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourceEntityType>,
    {
        self.entity_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_patterns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourcePattern>,
    {
        self.patterns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_label_conditions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.label_conditions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_data_filter_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.data_filter_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_extended_field_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourceExtendedFieldDefinition>,
    {
        self.extended_field_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_metric_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.metric_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_association_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.association_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_event_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EventType>,
    {
        self.event_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_endpoints<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.endpoints = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_source_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.source_properties = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of a source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceSummary {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<i64>,

    pub type_name: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,

    pub is_auto_association_enabled: std::option::Option<bool>,

    pub association_count: std::option::Option<i32>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_types: std::vec::Vec<LogAnalyticsSourceEntityType>,

    pub edit_version: std::option::Option<i64>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl LogAnalyticsSourceSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_auto_association_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_association_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.association_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourceEntityType>,
    {
        self.entity_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A page of source summaries.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsSourceCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsSourceSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsSourceCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourceSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsSourceCollection {
    type PageItem = LogAnalyticsSourceSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The number of sources in a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceSummaryReport {
    pub count: std::option::Option<i32>,
}

impl SourceSummaryReport {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.count = std::option::Option::Some(v.into());
        self
    }
}

/// The source to create or update.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpsertLogAnalyticsSourceDetails {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<i64>,

    pub type_name: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<bool>,

    pub is_secure_content: std::option::Option<bool>,

    pub is_for_cloud: std::option::Option<bool>,

    pub is_timezone_override: std::option::Option<bool>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub entity_types: std::vec::Vec<LogAnalyticsSourceEntityType>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub parsers: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub patterns: std::vec::Vec<LogAnalyticsSourcePattern>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub label_conditions: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub data_filter_definitions: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub extended_field_definitions: std::vec::Vec<LogAnalyticsSourceExtendedFieldDefinition>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub metric_definitions: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub categories: std::vec::Vec<LogAnalyticsCategory>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub endpoints: std::vec::Vec<serde_json::Value>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub source_properties: std::vec::Vec<serde_json::Value>,

    pub edit_version: std::option::Option<i64>,
}

impl UpsertLogAnalyticsSourceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_secure_content<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_secure_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_for_cloud<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_for_cloud = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_timezone_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_timezone_override = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_types<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourceEntityType>,
    {
        self.entity_types = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_parsers<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.parsers = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_patterns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourcePattern>,
    {
        self.patterns = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_label_conditions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.label_conditions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_data_filter_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.data_filter_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_extended_field_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsSourceExtendedFieldDefinition>,
    {
        self.extended_field_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_metric_definitions<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.metric_definitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_categories<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsCategory>,
    {
        self.categories = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_endpoints<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.endpoints = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_source_properties<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.source_properties = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_edit_version<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.edit_version = std::option::Option::Some(v.into());
        self
    }
}

/// The outcome of validating a source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SourceValidateResults {
    pub status: std::option::Option<std::string::String>,

    pub message: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub results: std::vec::Vec<serde_json::Value>,
}

impl SourceValidateResults {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.results = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A REST endpoint a source collects logs from.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsEndpoint {
    pub endpoint_type: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub request: std::option::Option<serde_json::Value>,

    pub response: std::option::Option<serde_json::Value>,
}

impl LogAnalyticsEndpoint {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_endpoint_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.endpoint_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_request<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.request = std::option::Option::Some(v.into());
        self
    }

    pub fn set_response<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.response = std::option::Option::Some(v.into());
        self
    }
}

/// The outcome of validating a source endpoint.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValidateEndpointResult {
    pub status: std::option::Option<std::string::String>,

    pub validation_message: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub results: std::vec::Vec<serde_json::Value>,
}

impl ValidateEndpointResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_validation_message<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.validation_message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.results = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The outcome of validating a log file in object storage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FileValidationResponse {
    pub object_location: std::option::Option<std::string::String>,

    pub filename: std::option::Option<std::string::String>,

    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub results: std::vec::Vec<serde_json::Value>,
}

impl FileValidationResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_object_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.object_location = std::option::Option::Some(v.into());
        self
    }

    pub fn set_filename<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filename = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.results = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A label condition and sample values to evaluate it against.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValidateLabelConditionDetails {
    pub condition_string: std::option::Option<std::string::String>,

    pub condition_block: std::option::Option<serde_json::Value>,

    #[serde(skip_serializing_if = "std::collections::HashMap::is_empty")]
    pub field_values: std::collections::HashMap<std::string::String, std::string::String>,
}

impl ValidateLabelConditionDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_condition_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.condition_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_condition_block<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.condition_block = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_values<T, K, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = (K, V)>,
        K: std::convert::Into<std::string::String>,
        V: std::convert::Into<std::string::String>,
    {
        self.field_values = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The outcome of evaluating a label condition.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ValidateLabelConditionResult {
    pub condition_string: std::option::Option<std::string::String>,

    pub condition_block: std::option::Option<serde_json::Value>,

    pub message: std::option::Option<std::string::String>,

    pub status: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub evaluation_results: std::vec::Vec<serde_json::Value>,
}

impl ValidateLabelConditionResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_condition_string<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.condition_string = std::option::Option::Some(v.into());
        self
    }

    pub fn set_condition_block<T: std::convert::Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.condition_block = std::option::Option::Some(v.into());
        self
    }

    pub fn set_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_evaluation_results<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.evaluation_results = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The outcome of validating extended field definitions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExtendedFieldsValidationResult {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub extended_field_stats: std::vec::Vec<serde_json::Value>,
}

impl ExtendedFieldsValidationResult {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_extended_field_stats<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.extended_field_stats = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The auto-association setting of a source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutoAssociationSummary {
    pub is_auto_association_enabled: std::option::Option<bool>,

    pub entity_type_name: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,
}

impl AutoAssociationSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_is_auto_association_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }
}

/// A page of auto-association settings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutoAssociationCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<AutoAssociationSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl AutoAssociationCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<AutoAssociationSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for AutoAssociationCollection {
    type PageItem = AutoAssociationSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// Options to enable auto-association.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EnableAutoAssociationDetails {
    pub is_auto_association_override: std::option::Option<bool>,
}

impl EnableAutoAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_is_auto_association_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_override = std::option::Option::Some(v.into());
        self
    }
}

/// Options to disable auto-association.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DisableAutoAssociationDetails {
    pub is_auto_association_override: std::option::Option<bool>,
}

impl DisableAutoAssociationDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_is_auto_association_override<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_association_override = std::option::Option::Some(v.into());
        self
    }
}

/// A kind of source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsMetaSourceType {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,
}

impl LogAnalyticsMetaSourceType {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }
}

/// A page of source kinds.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsMetaSourceTypeCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsMetaSourceType>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsMetaSourceTypeCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsMetaSourceType>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsMetaSourceTypeCollection {
    type PageItem = LogAnalyticsMetaSourceType;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A function available to sources.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsMetaFunction {
    pub meta_function_id: std::option::Option<i64>,

    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub component: std::option::Option<std::string::String>,

    pub java_class_name: std::option::Option<std::string::String>,
}

impl LogAnalyticsMetaFunction {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_meta_function_id<T: std::convert::Into<i64>>(mut self, v: T) -> Self {
        self.meta_function_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_component<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.component = std::option::Option::Some(v.into());
        self
    }

    pub fn set_java_class_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.java_class_name = std::option::Option::Some(v.into());
        self
    }
}

/// A page of source functions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsMetaFunctionCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsMetaFunction>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsMetaFunctionCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsMetaFunction>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsMetaFunctionCollection {
    type PageItem = LogAnalyticsMetaFunction;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The effective value of a configuration property.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EffectivePropertySummary {
    pub name: std::option::Option<std::string::String>,

    pub value: std::option::Option<std::string::String>,

    pub effective_level: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub patterns: std::vec::Vec<serde_json::Value>,
}

impl EffectivePropertySummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.value = std::option::Option::Some(v.into());
        self
    }

    pub fn set_effective_level<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.effective_level = std::option::Option::Some(v.into());
        self
    }

    pub fn set_patterns<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.patterns = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of effective properties.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EffectivePropertyCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<EffectivePropertySummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl EffectivePropertyCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EffectivePropertySummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for EffectivePropertyCollection {
    type PageItem = EffectivePropertySummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The metadata of a configuration property.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyMetadataSummary {
    pub name: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub default_value: std::option::Option<std::string::String>,

    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub levels: std::vec::Vec<serde_json::Value>,
}

impl PropertyMetadataSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_default_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.default_value = std::option::Option::Some(v.into());
        self
    }

    pub fn set_levels<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<serde_json::Value>,
    {
        self.levels = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A page of property metadata.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PropertyMetadataSummaryCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<PropertyMetadataSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl PropertyMetadataSummaryCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<PropertyMetadataSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for PropertyMetadataSummaryCollection {
    type PageItem = PropertyMetadataSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The character encodings supported for uploads.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CharEncodingCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<std::string::String>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl CharEncodingCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for CharEncodingCollection {
    type PageItem = std::string::String;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The time zones supported for uploads.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TimezoneCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<std::string::String>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl TimezoneCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for TimezoneCollection {
    type PageItem = std::string::String;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A problem detected while collecting or processing logs.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsWarning {
    pub agent_id: std::option::Option<std::string::String>,

    pub host: std::option::Option<std::string::String>,

    pub source_name: std::option::Option<std::string::String>,

    pub source_display_name: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_collected: std::option::Option<time::OffsetDateTime>,

    pub warning_id: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_of_initial_warning: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_of_latest_warning: std::option::Option<time::OffsetDateTime>,

    pub is_active: std::option::Option<bool>,

    pub is_suppressed: std::option::Option<bool>,

    pub warning_level: std::option::Option<i32>,

    pub warning_message: std::option::Option<std::string::String>,

    pub pattern_id: std::option::Option<std::string::String>,

    pub pattern_text: std::option::Option<std::string::String>,

    pub rule_id: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<std::string::String>,

    pub suppressed_by: std::option::Option<std::string::String>,

    pub type_display_name: std::option::Option<std::string::String>,

    pub type_name: std::option::Option<std::string::String>,

    pub severity: std::option::Option<i32>,
}

impl LogAnalyticsWarning {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_host<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.host = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.source_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_collected<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_collected = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warning_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_of_initial_warning<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_of_initial_warning = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_of_latest_warning<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_of_latest_warning = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_active<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_active = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_suppressed<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_suppressed = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warning_level<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.warning_level = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warning_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_pattern_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pattern_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_pattern_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.pattern_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_rule_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.rule_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_suppressed_by<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.suppressed_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.type_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_severity<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.severity = std::option::Option::Some(v.into());
        self
    }
}

/// A page of warnings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogAnalyticsWarningCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<LogAnalyticsWarning>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl LogAnalyticsWarningCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<LogAnalyticsWarning>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for LogAnalyticsWarningCollection {
    type PageItem = LogAnalyticsWarning;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The warnings to suppress or unsuppress.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WarningReferenceDetails {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub warning_references: std::vec::Vec<std::string::String>,
}

impl WarningReferenceDetails {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_warning_references<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.warning_references = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A set of log files uploaded on demand.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Upload {
    pub reference: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_earliest_log_entry: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_latest_log_entry: std::option::Option<time::OffsetDateTime>,

    pub warnings_count: std::option::Option<i32>,
}

impl Upload {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_earliest_log_entry<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_earliest_log_entry = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_latest_log_entry<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_latest_log_entry = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warnings_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.warnings_count = std::option::Option::Some(v.into());
        self
    }
}

/// A summary of an upload.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadSummary {
    pub reference: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_created: std::option::Option<time::OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_updated: std::option::Option<time::OffsetDateTime>,

    pub warnings_count: std::option::Option<i32>,
}

impl UploadSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_created<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_created = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_updated<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_updated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warnings_count<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.warnings_count = std::option::Option::Some(v.into());
        self
    }
}

/// A page of uploads.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<UploadSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl UploadCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UploadSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for UploadCollection {
    type PageItem = UploadSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A file in an upload.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadFileSummary {
    pub reference: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub time_started: std::option::Option<time::OffsetDateTime>,

    pub status: std::option::Option<std::string::String>,

    pub total_chunks: std::option::Option<f64>,

    pub chunks_consumed: std::option::Option<f64>,

    pub chunks_success: std::option::Option<f64>,

    pub chunks_fail: std::option::Option<f64>,

    pub source_name: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub log_namespace: std::option::Option<std::string::String>,

    pub char_encoding: std::option::Option<std::string::String>,

    pub date_format: std::option::Option<std::string::String>,

    pub date_year: std::option::Option<std::string::String>,

    pub timezone: std::option::Option<std::string::String>,

    pub failure_details: std::option::Option<std::string::String>,
}

impl UploadFileSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_total_chunks<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.total_chunks = std::option::Option::Some(v.into());
        self
    }

    pub fn set_chunks_consumed<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.chunks_consumed = std::option::Option::Some(v.into());
        self
    }

    pub fn set_chunks_success<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.chunks_success = std::option::Option::Some(v.into());
        self
    }

    pub fn set_chunks_fail<T: std::convert::Into<f64>>(mut self, v: T) -> Self {
        self.chunks_fail = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_namespace<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_namespace = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_date_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.date_format = std::option::Option::Some(v.into());
        self
    }

    pub fn set_date_year<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.date_year = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_failure_details<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.failure_details = std::option::Option::Some(v.into());
        self
    }
}

/// A page of upload files.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadFileCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<UploadFileSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl UploadFileCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UploadFileSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for UploadFileCollection {
    type PageItem = UploadFileSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// A warning raised while processing an upload.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadWarningSummary {
    pub reference: std::option::Option<std::string::String>,

    pub warning_message: std::option::Option<std::string::String>,
}

impl UploadWarningSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.reference = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warning_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_message = std::option::Option::Some(v.into());
        self
    }
}

/// A page of upload warnings.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UploadWarningCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<UploadWarningSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl UploadWarningCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<UploadWarningSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for UploadWarningCollection {
    type PageItem = UploadWarningSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// An encryption key used by a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EncryptionKeyInfoSummary {
    pub key_source: std::option::Option<std::string::String>,

    pub key_id: std::option::Option<std::string::String>,

    pub key_type: std::option::Option<KeyType>,
}

impl EncryptionKeyInfoSummary {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_key_source<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key_source = std::option::Option::Some(v.into());
        self
    }

    pub fn set_key_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.key_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_key_type<T: std::convert::Into<KeyType>>(mut self, v: T) -> Self {
        self.key_type = std::option::Option::Some(v.into());
        self
    }
}

/// The encryption keys of a namespace.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EncryptionKeyInfoCollection {
    #[serde(skip_serializing_if = "std::vec::Vec::is_empty")]
    pub items: std::vec::Vec<EncryptionKeyInfoSummary>,

    /// The token for the next page, from the `opc-next-page` header.
    ///
    /// Empty on the last page.
    #[serde(skip)]
    pub next_page: std::string::String,
}

impl EncryptionKeyInfoCollection {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_items<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<EncryptionKeyInfoSummary>,
    {
        self.items = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_next_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.next_page = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for EncryptionKeyInfoCollection {
    type PageItem = EncryptionKeyInfoSummary;

    fn items(self) -> std::vec::Vec<Self::PageItem> {
        self.items
    }

    fn next_page_token(&self) -> std::string::String {
        self.next_page.clone()
    }
}

/// The request message for [LogAnalytics::add_entity_association][crate::client::LogAnalytics::add_entity_association].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddEntityAssociationRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    pub add_entity_association_details: std::option::Option<crate::model::AddEntityAssociationDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl AddEntityAssociationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_add_entity_association_details<T: std::convert::Into<crate::model::AddEntityAssociationDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.add_entity_association_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::add_source_event_types][crate::client::LogAnalytics::add_source_event_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AddSourceEventTypesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub event_type_details: std::option::Option<crate::model::EventTypeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl AddSourceEventTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_event_type_details<T: std::convert::Into<crate::model::EventTypeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.event_type_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::append_lookup_data][crate::client::LogAnalytics::append_lookup_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AppendLookupDataRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub lookup_name: std::string::String,

    pub append_lookup_file_body: std::option::Option<bytes::Bytes>,

    pub is_force: std::option::Option<bool>,

    pub char_encoding: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// An `Expect` header value, such as `100-continue`.
    pub expect: std::option::Option<std::string::String>,
}

impl AppendLookupDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    pub fn set_append_lookup_file_body<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: T,
    ) -> Self {
        self.append_lookup_file_body = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::assign_encryption_key][crate::client::LogAnalytics::assign_encryption_key].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AssignEncryptionKeyRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub assign_encryption_key_details: std::option::Option<crate::model::AssignEncryptionKeyDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl AssignEncryptionKeyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_assign_encryption_key_details<T: std::convert::Into<crate::model::AssignEncryptionKeyDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.assign_encryption_key_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::batch_get_basic_info][crate::client::LogAnalytics::batch_get_basic_info].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct BatchGetBasicInfoRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub label_names: std::option::Option<crate::model::LabelNames>,

    pub is_include_deleted: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    pub basic_label_sort_by: std::option::Option<crate::model::batch_get_basic_info_request::BasicLabelSortBy>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl BatchGetBasicInfoRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_label_names<T: std::convert::Into<crate::model::LabelNames>>(
        mut self,
        v: T,
    ) -> Self {
        self.label_names = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_include_deleted<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include_deleted = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_basic_label_sort_by<T: std::convert::Into<crate::model::batch_get_basic_info_request::BasicLabelSortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.basic_label_sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [BatchGetBasicInfoRequest].
pub mod batch_get_basic_info_request {
    string_enum! {
        /// The values accepted by the `basicLabelSortBy` query parameter.
        BasicLabelSortBy {
            Name => "name",
            Priority => "priority",
        }
    }
}

/// The request message for [LogAnalytics::cancel_query_work_request][crate::client::LogAnalytics::cancel_query_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CancelQueryWorkRequestRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl CancelQueryWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::change_ingest_time_rule_compartment][crate::client::LogAnalytics::change_ingest_time_rule_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeIngestTimeRuleCompartmentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub ingest_time_rule_id: std::string::String,

    pub change_ingest_time_rule_compartment_details: std::option::Option<crate::model::ChangeIngestTimeRuleCompartmentDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl ChangeIngestTimeRuleCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_ingest_time_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.ingest_time_rule_id = v.into();
        self
    }

    pub fn set_change_ingest_time_rule_compartment_details<T: std::convert::Into<crate::model::ChangeIngestTimeRuleCompartmentDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.change_ingest_time_rule_compartment_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::change_log_analytics_entity_compartment][crate::client::LogAnalytics::change_log_analytics_entity_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeLogAnalyticsEntityCompartmentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    pub change_log_analytics_entity_compartment_details: std::option::Option<crate::model::ChangeLogAnalyticsEntityCompartmentDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl ChangeLogAnalyticsEntityCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_change_log_analytics_entity_compartment_details<T: std::convert::Into<crate::model::ChangeLogAnalyticsEntityCompartmentDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.change_log_analytics_entity_compartment_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::change_log_analytics_log_group_compartment][crate::client::LogAnalytics::change_log_analytics_log_group_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeLogAnalyticsLogGroupCompartmentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_log_group_id: std::string::String,

    pub change_log_analytics_log_group_compartment_details: std::option::Option<crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl ChangeLogAnalyticsLogGroupCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_log_group_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_log_group_id = v.into();
        self
    }

    pub fn set_change_log_analytics_log_group_compartment_details<T: std::convert::Into<crate::model::ChangeLogAnalyticsLogGroupCompartmentDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.change_log_analytics_log_group_compartment_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::change_log_analytics_object_collection_rule_compartment][crate::client::LogAnalytics::change_log_analytics_object_collection_rule_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_object_collection_rule_id: std::string::String,

    pub change_log_analytics_object_collection_rule_compartment_details: std::option::Option<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl ChangeLogAnalyticsObjectCollectionRuleCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_object_collection_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    pub fn set_change_log_analytics_object_collection_rule_compartment_details<T: std::convert::Into<crate::model::ChangeLogAnalyticsObjectCollectionRuleCompartmentDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.change_log_analytics_object_collection_rule_compartment_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::change_scheduled_task_compartment][crate::client::LogAnalytics::change_scheduled_task_compartment].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ChangeScheduledTaskCompartmentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    pub change_scheduled_task_compartment_details: std::option::Option<crate::model::ChangeScheduledTaskCompartmentDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl ChangeScheduledTaskCompartmentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_change_scheduled_task_compartment_details<T: std::convert::Into<crate::model::ChangeScheduledTaskCompartmentDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.change_scheduled_task_compartment_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::clean][crate::client::LogAnalytics::clean].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CleanRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_log_group_id: std::string::String,

    pub time_start: std::option::Option<time::OffsetDateTime>,

    pub time_end: std::option::Option<time::OffsetDateTime>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl CleanRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_log_group_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_log_group_id = v.into();
        self
    }

    pub fn set_time_start<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_start = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_end<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_end = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::compare_content][crate::client::LogAnalytics::compare_content].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CompareContentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub compare_content_details: std::option::Option<crate::model::CompareContentDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl CompareContentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compare_content_details<T: std::convert::Into<crate::model::CompareContentDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.compare_content_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::create_ingest_time_rule][crate::client::LogAnalytics::create_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateIngestTimeRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub create_ingest_time_rule_details: std::option::Option<crate::model::CreateIngestTimeRuleDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl CreateIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_create_ingest_time_rule_details<T: std::convert::Into<crate::model::CreateIngestTimeRuleDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_ingest_time_rule_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_entity][crate::client::LogAnalytics::create_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub create_log_analytics_entity_details: std::option::Option<crate::model::CreateLogAnalyticsEntityDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl CreateLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_create_log_analytics_entity_details<T: std::convert::Into<crate::model::CreateLogAnalyticsEntityDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_log_analytics_entity_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_entity_type][crate::client::LogAnalytics::create_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsEntityTypeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub create_log_analytics_entity_type_details: std::option::Option<crate::model::CreateLogAnalyticsEntityTypeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl CreateLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_create_log_analytics_entity_type_details<T: std::convert::Into<crate::model::CreateLogAnalyticsEntityTypeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_log_analytics_entity_type_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_log_group][crate::client::LogAnalytics::create_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsLogGroupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub create_log_analytics_log_group_details: std::option::Option<crate::model::CreateLogAnalyticsLogGroupDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl CreateLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_create_log_analytics_log_group_details<T: std::convert::Into<crate::model::CreateLogAnalyticsLogGroupDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_log_analytics_log_group_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::create_log_analytics_object_collection_rule][crate::client::LogAnalytics::create_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLogAnalyticsObjectCollectionRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub create_log_analytics_object_collection_rule_details: std::option::Option<crate::model::CreateLogAnalyticsObjectCollectionRuleDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl CreateLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_create_log_analytics_object_collection_rule_details<T: std::convert::Into<crate::model::CreateLogAnalyticsObjectCollectionRuleDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_log_analytics_object_collection_rule_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::create_scheduled_task][crate::client::LogAnalytics::create_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateScheduledTaskRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub create_scheduled_task_details: std::option::Option<crate::model::CreateScheduledTaskDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl CreateScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_create_scheduled_task_details<T: std::convert::Into<crate::model::CreateScheduledTaskDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.create_scheduled_task_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_associations][crate::client::LogAnalytics::delete_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteAssociationsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub delete_log_analytics_association_details: std::option::Option<crate::model::DeleteLogAnalyticsAssociationDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl DeleteAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_delete_log_analytics_association_details<T: std::convert::Into<crate::model::DeleteLogAnalyticsAssociationDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.delete_log_analytics_association_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_field][crate::client::LogAnalytics::delete_field].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteFieldRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub field_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteFieldRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_ingest_time_rule][crate::client::LogAnalytics::delete_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteIngestTimeRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub ingest_time_rule_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_ingest_time_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.ingest_time_rule_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_label][crate::client::LogAnalytics::delete_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLabelRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub label_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_entity][crate::client::LogAnalytics::delete_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsEntityRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    pub is_force_delete: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_is_force_delete<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force_delete = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_entity_type][crate::client::LogAnalytics::delete_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsEntityTypeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub entity_type_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_log_group][crate::client::LogAnalytics::delete_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsLogGroupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_log_group_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_log_group_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_log_group_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_log_analytics_object_collection_rule][crate::client::LogAnalytics::delete_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLogAnalyticsObjectCollectionRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_object_collection_rule_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_object_collection_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_lookup][crate::client::LogAnalytics::delete_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteLookupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub lookup_name: std::string::String,

    pub is_force: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_parser][crate::client::LogAnalytics::delete_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteParserRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub parser_name: std::string::String,

    pub is_ignore_used_sources: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = v.into();
        self
    }

    pub fn set_is_ignore_used_sources<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_ignore_used_sources = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_scheduled_task][crate::client::LogAnalytics::delete_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteScheduledTaskRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_source][crate::client::LogAnalytics::delete_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteSourceRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_upload][crate::client::LogAnalytics::delete_upload].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteUploadRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_reference: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteUploadRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_reference<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.upload_reference = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_upload_file][crate::client::LogAnalytics::delete_upload_file].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteUploadFileRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_reference: std::string::String,

    pub file_reference: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DeleteUploadFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_reference<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.upload_reference = v.into();
        self
    }

    pub fn set_file_reference<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.file_reference = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::delete_upload_warning][crate::client::LogAnalytics::delete_upload_warning].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteUploadWarningRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_reference: std::string::String,

    pub warning_reference: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl DeleteUploadWarningRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_reference<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.upload_reference = v.into();
        self
    }

    pub fn set_warning_reference<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.warning_reference = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::disable_archiving][crate::client::LogAnalytics::disable_archiving].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DisableArchivingRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DisableArchivingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::disable_auto_association][crate::client::LogAnalytics::disable_auto_association].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DisableAutoAssociationRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub disable_auto_association_details: std::option::Option<crate::model::DisableAutoAssociationDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DisableAutoAssociationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_disable_auto_association_details<T: std::convert::Into<crate::model::DisableAutoAssociationDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.disable_auto_association_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::disable_ingest_time_rule][crate::client::LogAnalytics::disable_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DisableIngestTimeRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub ingest_time_rule_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DisableIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_ingest_time_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.ingest_time_rule_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::disable_source_event_types][crate::client::LogAnalytics::disable_source_event_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DisableSourceEventTypesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub event_type_details: std::option::Option<crate::model::EventTypeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl DisableSourceEventTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_event_type_details<T: std::convert::Into<crate::model::EventTypeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.event_type_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::enable_archiving][crate::client::LogAnalytics::enable_archiving].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EnableArchivingRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl EnableArchivingRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::enable_auto_association][crate::client::LogAnalytics::enable_auto_association].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EnableAutoAssociationRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub enable_auto_association_details: std::option::Option<crate::model::EnableAutoAssociationDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl EnableAutoAssociationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_enable_auto_association_details<T: std::convert::Into<crate::model::EnableAutoAssociationDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.enable_auto_association_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::enable_ingest_time_rule][crate::client::LogAnalytics::enable_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EnableIngestTimeRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub ingest_time_rule_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl EnableIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_ingest_time_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.ingest_time_rule_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::enable_source_event_types][crate::client::LogAnalytics::enable_source_event_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EnableSourceEventTypesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub event_type_details: std::option::Option<crate::model::EventTypeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl EnableSourceEventTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_event_type_details<T: std::convert::Into<crate::model::EventTypeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.event_type_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::estimate_purge_data_size][crate::client::LogAnalytics::estimate_purge_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EstimatePurgeDataSizeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub estimate_purge_data_size_details: std::option::Option<crate::model::EstimatePurgeDataSizeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl EstimatePurgeDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_estimate_purge_data_size_details<T: std::convert::Into<crate::model::EstimatePurgeDataSizeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.estimate_purge_data_size_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::estimate_recall_data_size][crate::client::LogAnalytics::estimate_recall_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EstimateRecallDataSizeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub estimate_recall_data_size_details: std::option::Option<crate::model::EstimateRecallDataSizeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl EstimateRecallDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_estimate_recall_data_size_details<T: std::convert::Into<crate::model::EstimateRecallDataSizeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.estimate_recall_data_size_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::estimate_release_data_size][crate::client::LogAnalytics::estimate_release_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct EstimateReleaseDataSizeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub estimate_release_data_size_details: std::option::Option<crate::model::EstimateReleaseDataSizeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl EstimateReleaseDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_estimate_release_data_size_details<T: std::convert::Into<crate::model::EstimateReleaseDataSizeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.estimate_release_data_size_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::export_custom_content][crate::client::LogAnalytics::export_custom_content].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExportCustomContentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub export_content: std::option::Option<crate::model::ExportContent>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ExportCustomContentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_export_content<T: std::convert::Into<crate::model::ExportContent>>(
        mut self,
        v: T,
    ) -> Self {
        self.export_content = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::export_query_result][crate::client::LogAnalytics::export_query_result].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExportQueryResultRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub export_details: std::option::Option<crate::model::ExportDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ExportQueryResultRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_export_details<T: std::convert::Into<crate::model::ExportDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.export_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::extract_structured_log_field_paths][crate::client::LogAnalytics::extract_structured_log_field_paths].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExtractStructuredLogFieldPathsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_parser: std::option::Option<crate::model::LogAnalyticsParser>,

    pub parser_type: std::option::Option<crate::model::extract_structured_log_field_paths_request::ParserType>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ExtractStructuredLogFieldPathsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_parser<T: std::convert::Into<crate::model::LogAnalyticsParser>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_parser = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_type<T: std::convert::Into<crate::model::extract_structured_log_field_paths_request::ParserType>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ExtractStructuredLogFieldPathsRequest].
pub mod extract_structured_log_field_paths_request {
    string_enum! {
        /// The values accepted by the `parserType` query parameter.
        ParserType {
            Xml => "XML",
            Json => "JSON",
            Delimited => "DELIMITED",
        }
    }
}

/// The request message for [LogAnalytics::extract_structured_log_header_paths][crate::client::LogAnalytics::extract_structured_log_header_paths].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ExtractStructuredLogHeaderPathsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_parser: std::option::Option<crate::model::LogAnalyticsParser>,

    pub parser_type: std::option::Option<crate::model::extract_structured_log_header_paths_request::ParserType>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ExtractStructuredLogHeaderPathsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_parser<T: std::convert::Into<crate::model::LogAnalyticsParser>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_parser = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_type<T: std::convert::Into<crate::model::extract_structured_log_header_paths_request::ParserType>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ExtractStructuredLogHeaderPathsRequest].
pub mod extract_structured_log_header_paths_request {
    string_enum! {
        /// The values accepted by the `parserType` query parameter.
        ParserType {
            Xml => "XML",
            Json => "JSON",
            Delimited => "DELIMITED",
        }
    }
}

/// The request message for [LogAnalytics::filter][crate::client::LogAnalytics::filter].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct FilterRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub filter_details: std::option::Option<crate::model::FilterDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl FilterRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_filter_details<T: std::convert::Into<crate::model::FilterDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.filter_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_association_summary][crate::client::LogAnalytics::get_association_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetAssociationSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetAssociationSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_category][crate::client::LogAnalytics::get_category].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetCategoryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub category_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetCategoryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_category_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_column_names][crate::client::LogAnalytics::get_column_names].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetColumnNamesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub sql_query: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetColumnNamesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_sql_query<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.sql_query = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_config_work_request][crate::client::LogAnalytics::get_config_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetConfigWorkRequestRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetConfigWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_field][crate::client::LogAnalytics::get_field].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetFieldRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub field_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetFieldRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_fields_summary][crate::client::LogAnalytics::get_fields_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetFieldsSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub is_show_detail: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetFieldsSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_is_show_detail<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_show_detail = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_ingest_time_rule][crate::client::LogAnalytics::get_ingest_time_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetIngestTimeRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub ingest_time_rule_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetIngestTimeRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_ingest_time_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.ingest_time_rule_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_label][crate::client::LogAnalytics::get_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLabelRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub label_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_label_summary][crate::client::LogAnalytics::get_label_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLabelSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLabelSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_entities_summary][crate::client::LogAnalytics::get_log_analytics_entities_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEntitiesSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEntitiesSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_entity][crate::client::LogAnalytics::get_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEntityRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_entity_type][crate::client::LogAnalytics::get_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsEntityTypeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub entity_type_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_log_group][crate::client::LogAnalytics::get_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsLogGroupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_log_group_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_log_group_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_log_group_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_log_groups_summary][crate::client::LogAnalytics::get_log_analytics_log_groups_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsLogGroupsSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsLogGroupsSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_analytics_object_collection_rule][crate::client::LogAnalytics::get_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogAnalyticsObjectCollectionRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_object_collection_rule_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_object_collection_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_log_sets_count][crate::client::LogAnalytics::get_log_sets_count].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLogSetsCountRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLogSetsCountRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_lookup][crate::client::LogAnalytics::get_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLookupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub lookup_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_lookup_summary][crate::client::LogAnalytics::get_lookup_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetLookupSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetLookupSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_namespace][crate::client::LogAnalytics::get_namespace].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetNamespaceRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetNamespaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_parser][crate::client::LogAnalytics::get_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetParserRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub parser_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_parser_summary][crate::client::LogAnalytics::get_parser_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetParserSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetParserSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_preferences][crate::client::LogAnalytics::get_preferences].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetPreferencesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::get_preferences_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetPreferencesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::get_preferences_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [GetPreferencesRequest].
pub mod get_preferences_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::get_query_result][crate::client::LogAnalytics::get_query_result].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetQueryResultRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    pub should_include_columns: std::option::Option<bool>,

    pub should_include_fields: std::option::Option<bool>,

    pub output_mode: std::option::Option<crate::model::get_query_result_request::OutputMode>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetQueryResultRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_include_columns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_columns = std::option::Option::Some(v.into());
        self
    }

    pub fn set_should_include_fields<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_fields = std::option::Option::Some(v.into());
        self
    }

    pub fn set_output_mode<T: std::convert::Into<crate::model::get_query_result_request::OutputMode>>(
        mut self,
        v: T,
    ) -> Self {
        self.output_mode = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [GetQueryResultRequest].
pub mod get_query_result_request {
    string_enum! {
        /// The values accepted by the `outputMode` query parameter.
        OutputMode {
            JsonRows => "JSON_ROWS",
        }
    }
}

/// The request message for [LogAnalytics::get_query_work_request][crate::client::LogAnalytics::get_query_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetQueryWorkRequestRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetQueryWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_recall_count][crate::client::LogAnalytics::get_recall_count].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRecallCountRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetRecallCountRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_recalled_data_size][crate::client::LogAnalytics::get_recalled_data_size].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRecalledDataSizeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetRecalledDataSizeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_rules_summary][crate::client::LogAnalytics::get_rules_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetRulesSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetRulesSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_scheduled_task][crate::client::LogAnalytics::get_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetScheduledTaskRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_source][crate::client::LogAnalytics::get_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSourceRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_source_summary][crate::client::LogAnalytics::get_source_summary].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetSourceSummaryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetSourceSummaryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_storage][crate::client::LogAnalytics::get_storage].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetStorageRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetStorageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_storage_usage][crate::client::LogAnalytics::get_storage_usage].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetStorageUsageRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetStorageUsageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_storage_work_request][crate::client::LogAnalytics::get_storage_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetStorageWorkRequestRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetStorageWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_unprocessed_data_bucket][crate::client::LogAnalytics::get_unprocessed_data_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUnprocessedDataBucketRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetUnprocessedDataBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_upload][crate::client::LogAnalytics::get_upload].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetUploadRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_reference: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetUploadRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_reference<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.upload_reference = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::get_work_request][crate::client::LogAnalytics::get_work_request].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetWorkRequestRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl GetWorkRequestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::import_custom_content][crate::client::LogAnalytics::import_custom_content].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ImportCustomContentRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub import_custom_content_file_body: std::option::Option<bytes::Bytes>,

    pub is_overwrite: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// An `Expect` header value, such as `100-continue`.
    pub expect: std::option::Option<std::string::String>,
}

impl ImportCustomContentRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_import_custom_content_file_body<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: T,
    ) -> Self {
        self.import_custom_content_file_body = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_overwrite<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_overwrite = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_associable_entities][crate::client::LogAnalytics::list_associable_entities].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAssociableEntitiesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub r#type: std::option::Option<crate::model::list_associable_entities_request::Type>,

    pub search_text: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_associable_entities_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListAssociableEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<crate::model::list_associable_entities_request::Type>>(
        mut self,
        v: T,
    ) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_search_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.search_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_associable_entities_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListAssociableEntitiesRequest].
pub mod list_associable_entities_request {
    string_enum! {
        /// The values accepted by the `type` query parameter.
        Type {
            Eligible => "ELIGIBLE",
            Ineligible => "INELIGIBLE",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            EntityName => "entityName",
            EntityTypeName => "entityTypeName",
            Host => "host",
            AgentId => "agentId",
        }
    }
}

/// The request message for [LogAnalytics::list_associated_entities][crate::client::LogAnalytics::list_associated_entities].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAssociatedEntitiesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_associated_entities_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListAssociatedEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_associated_entities_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListAssociatedEntitiesRequest].
pub mod list_associated_entities_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            EntityName => "entityName",
            EntityTypeDisplayName => "entityTypeDisplayName",
            AssociationCount => "associationCount",
        }
    }
}

/// The request message for [LogAnalytics::list_auto_associations][crate::client::LogAnalytics::list_auto_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListAutoAssociationsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_auto_associations_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListAutoAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_auto_associations_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListAutoAssociationsRequest].
pub mod list_auto_associations_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeUpdated => "timeUpdated",
        }
    }
}

/// The request message for [LogAnalytics::list_categories][crate::client::LogAnalytics::list_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListCategoriesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub category_display_text: std::option::Option<std::string::String>,

    pub category_type: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_categories_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_category_display_text<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.category_display_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_category_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.category_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_categories_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListCategoriesRequest].
pub mod list_categories_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
            Description => "description",
            Type => "type",
        }
    }
}

/// The request message for [LogAnalytics::list_config_work_requests][crate::client::LogAnalytics::list_config_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListConfigWorkRequestsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_config_work_requests_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListConfigWorkRequestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_config_work_requests_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListConfigWorkRequestsRequest].
pub mod list_config_work_requests_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeAccepted => "timeAccepted",
        }
    }
}

/// The request message for [LogAnalytics::list_effective_properties][crate::client::LogAnalytics::list_effective_properties].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEffectivePropertiesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub agent_id: std::option::Option<std::string::String>,

    pub source_name: std::option::Option<std::string::String>,

    pub is_include_patterns: std::option::Option<bool>,

    pub entity_id: std::option::Option<std::string::String>,

    pub pattern_id: std::option::Option<i32>,

    pub name: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_effective_properties_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListEffectivePropertiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_agent_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.agent_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_include_patterns<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include_patterns = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_pattern_id<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.pattern_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_effective_properties_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListEffectivePropertiesRequest].
pub mod list_effective_properties_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
            DisplayName => "displayName",
        }
    }
}

/// The request message for [LogAnalytics::list_encryption_key_info][crate::client::LogAnalytics::list_encryption_key_info].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEncryptionKeyInfoRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListEncryptionKeyInfoRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_entity_associations][crate::client::LogAnalytics::list_entity_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEntityAssociationsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    pub direct_or_all_associations: std::option::Option<crate::model::list_entity_associations_request::DirectOrAllAssociations>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_entity_associations_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListEntityAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_direct_or_all_associations<T: std::convert::Into<crate::model::list_entity_associations_request::DirectOrAllAssociations>>(
        mut self,
        v: T,
    ) -> Self {
        self.direct_or_all_associations = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_entity_associations_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListEntityAssociationsRequest].
pub mod list_entity_associations_request {
    string_enum! {
        /// The values accepted by the `directOrAllAssociations` query parameter.
        DirectOrAllAssociations {
            Direct => "DIRECT",
            All => "ALL",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_entity_source_associations][crate::client::LogAnalytics::list_entity_source_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListEntitySourceAssociationsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub entity_type_display_name: std::option::Option<std::string::String>,

    pub life_cycle_state: std::option::Option<crate::model::list_entity_source_associations_request::LifeCycleState>,

    pub is_show_total: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_entity_source_associations_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListEntitySourceAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_display_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_life_cycle_state<T: std::convert::Into<crate::model::list_entity_source_associations_request::LifeCycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.life_cycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_show_total<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_show_total = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_entity_source_associations_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListEntitySourceAssociationsRequest].
pub mod list_entity_source_associations_request {
    string_enum! {
        /// The values accepted by the `lifeCycleState` query parameter.
        LifeCycleState {
            All => "ALL",
            Accepted => "ACCEPTED",
            InProgress => "IN_PROGRESS",
            Succeeded => "SUCCEEDED",
            Failed => "FAILED",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            EntityName => "entityName",
            TimeLastAttempted => "timeLastAttempted",
            Status => "status",
        }
    }
}

/// The request message for [LogAnalytics::list_fields][crate::client::LogAnalytics::list_fields].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListFieldsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub is_match_all: std::option::Option<bool>,

    pub source_ids: std::option::Option<std::string::String>,

    pub source_names: std::option::Option<std::string::String>,

    pub parser_type: std::option::Option<crate::model::list_fields_request::ParserType>,

    pub parser_ids: std::option::Option<std::string::String>,

    pub parser_names: std::option::Option<std::string::String>,

    pub is_include_parser: std::option::Option<bool>,

    pub filter: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_fields_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListFieldsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_is_match_all<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_match_all = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_ids = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_names<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_names = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_type<T: std::convert::Into<crate::model::list_fields_request::ParserType>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_ids = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_names<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_names = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_include_parser<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include_parser = std::option::Option::Some(v.into());
        self
    }

    pub fn set_filter<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_fields_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListFieldsRequest].
pub mod list_fields_request {
    string_enum! {
        /// The values accepted by the `parserType` query parameter.
        ParserType {
            All => "ALL",
            Regex => "REGEX",
            Xml => "XML",
            Json => "JSON",
            Odl => "ODL",
            Delimited => "DELIMITED",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_ingest_time_rules][crate::client::LogAnalytics::list_ingest_time_rules].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListIngestTimeRulesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<crate::model::ConfigLifecycleState>,

    pub condition_kind: std::option::Option<crate::model::list_ingest_time_rules_request::ConditionKind>,

    pub field_name: std::option::Option<std::string::String>,

    pub field_value: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_ingest_time_rules_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListIngestTimeRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::ConfigLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_condition_kind<T: std::convert::Into<crate::model::list_ingest_time_rules_request::ConditionKind>>(
        mut self,
        v: T,
    ) -> Self {
        self.condition_kind = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_field_value<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.field_value = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_ingest_time_rules_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListIngestTimeRulesRequest].
pub mod list_ingest_time_rules_request {
    string_enum! {
        /// The values accepted by the `conditionKind` query parameter.
        ConditionKind {
            Field => "FIELD",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            DisplayName => "displayName",
        }
    }
}

/// The request message for [LogAnalytics::list_label_priorities][crate::client::LogAnalytics::list_label_priorities].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLabelPrioritiesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLabelPrioritiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_label_source_details][crate::client::LogAnalytics::list_label_source_details].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLabelSourceDetailsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub label_name: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_label_source_details_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLabelSourceDetailsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_label_source_details_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLabelSourceDetailsRequest].
pub mod list_label_source_details_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            SourceDisplayName => "sourceDisplayName",
            LabelFieldDisplayname => "labelFieldDisplayname",
        }
    }
}

/// The request message for [LogAnalytics::list_labels][crate::client::LogAnalytics::list_labels].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLabelsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub label_name: std::option::Option<std::string::String>,

    pub label_display_text: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<crate::model::list_labels_request::IsSystem>,

    pub label_priority: std::option::Option<crate::model::list_labels_request::LabelPriority>,

    pub is_count_pop: std::option::Option<bool>,

    pub is_alias_pop: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_labels_request::SortBy>,

    pub label_type: std::option::Option<crate::model::list_labels_request::LabelType>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLabelsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_label_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.label_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_label_display_text<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.label_display_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<crate::model::list_labels_request::IsSystem>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_label_priority<T: std::convert::Into<crate::model::list_labels_request::LabelPriority>>(
        mut self,
        v: T,
    ) -> Self {
        self.label_priority = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_count_pop<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_count_pop = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_alias_pop<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_alias_pop = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_labels_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_label_type<T: std::convert::Into<crate::model::list_labels_request::LabelType>>(
        mut self,
        v: T,
    ) -> Self {
        self.label_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLabelsRequest].
pub mod list_labels_request {
    string_enum! {
        /// The values accepted by the `isSystem` query parameter.
        IsSystem {
            All => "ALL",
            Custom => "CUSTOM",
            BuiltIn => "BUILT_IN",
        }
    }

    string_enum! {
        /// The values accepted by the `labelPriority` query parameter.
        LabelPriority {
            None => "NONE",
            Low => "LOW",
            Medium => "MEDIUM",
            High => "HIGH",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
            Priority => "priority",
            SourceUsing => "sourceUsing",
        }
    }

    string_enum! {
        /// The values accepted by the `labelType` query parameter.
        LabelType {
            Info => "INFO",
            Problem => "PROBLEM",
        }
    }
}

/// The request message for [LogAnalytics::list_log_analytics_entities][crate::client::LogAnalytics::list_log_analytics_entities].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsEntitiesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub name_contains: std::option::Option<std::string::String>,

    pub entity_type_name: std::vec::Vec<std::string::String>,

    pub cloud_resource_id: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    pub lifecycle_details_contains: std::option::Option<std::string::String>,

    pub is_management_agent_id_null: std::option::Option<crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull>,

    pub hostname: std::option::Option<std::string::String>,

    pub hostname_contains: std::option::Option<std::string::String>,

    pub source_id: std::option::Option<std::string::String>,

    pub creation_source_type: std::vec::Vec<crate::model::list_log_analytics_entities_request::CreationSourceType>,

    pub creation_source_details: std::option::Option<std::string::String>,

    pub is_show_associated_sources_count: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_entities_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsEntitiesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name_contains<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name_contains = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type_name<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<std::string::String>,
    {
        self.entity_type_name = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_cloud_resource_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.cloud_resource_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::EntityLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_details_contains<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_details_contains = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_management_agent_id_null<T: std::convert::Into<crate::model::list_log_analytics_entities_request::IsManagementAgentIdNull>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_management_agent_id_null = std::option::Option::Some(v.into());
        self
    }

    pub fn set_hostname<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.hostname = std::option::Option::Some(v.into());
        self
    }

    pub fn set_hostname_contains<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.hostname_contains = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_creation_source_type<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::list_log_analytics_entities_request::CreationSourceType>,
    {
        self.creation_source_type = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_creation_source_details<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.creation_source_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_show_associated_sources_count<T: std::convert::Into<bool>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_show_associated_sources_count = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_log_analytics_entities_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsEntitiesRequest].
pub mod list_log_analytics_entities_request {
    string_enum! {
        /// The values accepted by the `isManagementAgentIdNull` query parameter.
        IsManagementAgentIdNull {
            True => "true",
            False => "false",
        }
    }

    string_enum! {
        /// The values accepted by the `creationSourceType` query parameter.
        CreationSourceType {
            EmBridge => "EM_BRIDGE",
            BulkDiscovery => "BULK_DISCOVERY",
            ServiceConnectorHub => "SERVICE_CONNECTOR_HUB",
            Discovery => "DISCOVERY",
            None => "NONE",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_log_analytics_entity_topology][crate::client::LogAnalytics::list_log_analytics_entity_topology].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsEntityTopologyRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_entity_topology_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsEntityTopologyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::EntityLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_log_analytics_entity_topology_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsEntityTopologyRequest].
pub mod list_log_analytics_entity_topology_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_log_analytics_entity_types][crate::client::LogAnalytics::list_log_analytics_entity_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsEntityTypesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub name: std::option::Option<std::string::String>,

    pub name_contains: std::option::Option<std::string::String>,

    pub cloud_type: std::option::Option<crate::model::list_log_analytics_entity_types_request::CloudType>,

    pub lifecycle_state: std::option::Option<crate::model::EntityLifecycleStates>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_entity_types_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsEntityTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name_contains<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name_contains = std::option::Option::Some(v.into());
        self
    }

    pub fn set_cloud_type<T: std::convert::Into<crate::model::list_log_analytics_entity_types_request::CloudType>>(
        mut self,
        v: T,
    ) -> Self {
        self.cloud_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::EntityLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_log_analytics_entity_types_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsEntityTypesRequest].
pub mod list_log_analytics_entity_types_request {
    string_enum! {
        /// The values accepted by the `cloudType` query parameter.
        CloudType {
            Cloud => "CLOUD",
            NonCloud => "NON_CLOUD",
            All => "ALL",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_log_analytics_log_groups][crate::client::LogAnalytics::list_log_analytics_log_groups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsLogGroupsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_log_groups_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsLogGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_log_analytics_log_groups_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsLogGroupsRequest].
pub mod list_log_analytics_log_groups_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            DisplayName => "displayName",
        }
    }
}

/// The request message for [LogAnalytics::list_log_analytics_object_collection_rules][crate::client::LogAnalytics::list_log_analytics_object_collection_rules].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogAnalyticsObjectCollectionRulesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub name: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<crate::model::ObjectCollectionRuleLifecycleStates>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_log_analytics_object_collection_rules_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogAnalyticsObjectCollectionRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::ObjectCollectionRuleLifecycleStates>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_log_analytics_object_collection_rules_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLogAnalyticsObjectCollectionRulesRequest].
pub mod list_log_analytics_object_collection_rules_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_log_sets][crate::client::LogAnalytics::list_log_sets].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLogSetsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLogSetsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_lookups][crate::client::LogAnalytics::list_lookups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListLookupsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub r#type: std::option::Option<crate::model::LookupType>,

    pub lookup_display_text: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<crate::model::list_lookups_request::IsSystem>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_lookups_request::SortBy>,

    pub status: std::option::Option<crate::model::list_lookups_request::Status>,

    pub categories: std::option::Option<std::string::String>,

    pub is_hide_special: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListLookupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_type<T: std::convert::Into<crate::model::LookupType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lookup_display_text<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.lookup_display_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<crate::model::list_lookups_request::IsSystem>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_lookups_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<crate::model::list_lookups_request::Status>>(
        mut self,
        v: T,
    ) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_hide_special<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hide_special = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListLookupsRequest].
pub mod list_lookups_request {
    string_enum! {
        /// The values accepted by the `isSystem` query parameter.
        IsSystem {
            All => "ALL",
            Custom => "CUSTOM",
            BuiltIn => "BUILT_IN",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            DisplayName => "displayName",
            Status => "status",
            Type => "type",
            UpdatedTime => "updatedTime",
            CreationType => "creationType",
        }
    }

    string_enum! {
        /// The values accepted by the `status` query parameter.
        Status {
            All => "ALL",
            Successful => "SUCCESSFUL",
            Failed => "FAILED",
            Inprogress => "INPROGRESS",
        }
    }
}

/// The request message for [LogAnalytics::list_meta_source_types][crate::client::LogAnalytics::list_meta_source_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListMetaSourceTypesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_meta_source_types_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListMetaSourceTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_meta_source_types_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListMetaSourceTypesRequest].
pub mod list_meta_source_types_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_namespaces][crate::client::LogAnalytics::list_namespaces].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListNamespacesRequest {
    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListNamespacesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_overlapping_recalls][crate::client::LogAnalytics::list_overlapping_recalls].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListOverlappingRecallsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub time_data_started: std::option::Option<time::OffsetDateTime>,

    pub time_data_ended: std::option::Option<time::OffsetDateTime>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_overlapping_recalls_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListOverlappingRecallsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_time_data_started<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_overlapping_recalls_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListOverlappingRecallsRequest].
pub mod list_overlapping_recalls_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeStarted => "timeStarted",
            TimeDataStarted => "timeDataStarted",
        }
    }
}

/// The request message for [LogAnalytics::list_parser_functions][crate::client::LogAnalytics::list_parser_functions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListParserFunctionsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub parser_name: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_parser_functions_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListParserFunctionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_parser_functions_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListParserFunctionsRequest].
pub mod list_parser_functions_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_parser_meta_plugins][crate::client::LogAnalytics::list_parser_meta_plugins].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListParserMetaPluginsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_parser_meta_plugins_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListParserMetaPluginsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_parser_meta_plugins_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListParserMetaPluginsRequest].
pub mod list_parser_meta_plugins_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_parsers][crate::client::LogAnalytics::list_parsers].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListParsersRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub is_match_all: std::option::Option<bool>,

    pub source_type: std::option::Option<std::string::String>,

    pub parser_name: std::option::Option<std::string::String>,

    pub parser_display_text: std::option::Option<std::string::String>,

    pub parser_type: std::option::Option<crate::model::list_parsers_request::ParserType>,

    pub categories: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<crate::model::list_parsers_request::IsSystem>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_parsers_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListParsersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_is_match_all<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_match_all = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.parser_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_display_text<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_display_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_parser_type<T: std::convert::Into<crate::model::list_parsers_request::ParserType>>(
        mut self,
        v: T,
    ) -> Self {
        self.parser_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<crate::model::list_parsers_request::IsSystem>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_parsers_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListParsersRequest].
pub mod list_parsers_request {
    string_enum! {
        /// The values accepted by the `parserType` query parameter.
        ParserType {
            All => "ALL",
            Regex => "REGEX",
            Xml => "XML",
            Json => "JSON",
            Odl => "ODL",
            Delimited => "DELIMITED",
        }
    }

    string_enum! {
        /// The values accepted by the `isSystem` query parameter.
        IsSystem {
            All => "ALL",
            Custom => "CUSTOM",
            BuiltIn => "BUILT_IN",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
            Type => "type",
            SourcesCount => "sourcesCount",
            TimeUpdated => "timeUpdated",
        }
    }
}

/// The request message for [LogAnalytics::list_properties_metadata][crate::client::LogAnalytics::list_properties_metadata].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListPropertiesMetadataRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub name: std::option::Option<std::string::String>,

    pub display_text: std::option::Option<std::string::String>,

    pub level: std::option::Option<std::string::String>,

    pub constraints: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_properties_metadata_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListPropertiesMetadataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_level<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.level = std::option::Option::Some(v.into());
        self
    }

    pub fn set_constraints<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.constraints = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_properties_metadata_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListPropertiesMetadataRequest].
pub mod list_properties_metadata_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
            DisplayName => "displayName",
        }
    }
}

/// The request message for [LogAnalytics::list_query_work_requests][crate::client::LogAnalytics::list_query_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListQueryWorkRequestsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub mode: std::option::Option<crate::model::list_query_work_requests_request::Mode>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_query_work_requests_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListQueryWorkRequestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_mode<T: std::convert::Into<crate::model::list_query_work_requests_request::Mode>>(
        mut self,
        v: T,
    ) -> Self {
        self.mode = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_query_work_requests_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListQueryWorkRequestsRequest].
pub mod list_query_work_requests_request {
    string_enum! {
        /// The values accepted by the `mode` query parameter.
        Mode {
            All => "ALL",
            Foreground => "FOREGROUND",
            Background => "BACKGROUND",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeStarted => "timeStarted",
            TimeExpires => "timeExpires",
        }
    }
}

/// The request message for [LogAnalytics::list_recalled_data][crate::client::LogAnalytics::list_recalled_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListRecalledDataRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub time_data_started_greater_than_or_equal: std::option::Option<time::OffsetDateTime>,

    pub time_data_ended_less_than: std::option::Option<time::OffsetDateTime>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_recalled_data_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListRecalledDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_time_data_started_greater_than_or_equal<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_started_greater_than_or_equal = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_data_ended_less_than<T: std::convert::Into<time::OffsetDateTime>>(
        mut self,
        v: T,
    ) -> Self {
        self.time_data_ended_less_than = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_recalled_data_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListRecalledDataRequest].
pub mod list_recalled_data_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeStarted => "timeStarted",
            TimeDataStarted => "timeDataStarted",
        }
    }
}

/// The request message for [LogAnalytics::list_resource_categories][crate::client::LogAnalytics::list_resource_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListResourceCategoriesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub categories: std::option::Option<std::string::String>,

    pub resource_types: std::option::Option<std::string::String>,

    pub resource_ids: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_resource_categories_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListResourceCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    pub fn set_resource_types<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_types = std::option::Option::Some(v.into());
        self
    }

    pub fn set_resource_ids<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.resource_ids = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_resource_categories_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListResourceCategoriesRequest].
pub mod list_resource_categories_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeUpdated => "timeUpdated",
            CategoryName => "categoryName",
            ResourceType => "resourceType",
        }
    }
}

/// The request message for [LogAnalytics::list_rules][crate::client::LogAnalytics::list_rules].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListRulesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub kind: std::option::Option<crate::model::list_rules_request::Kind>,

    pub target_service: std::option::Option<std::string::String>,

    pub lifecycle_state: std::option::Option<crate::model::ConfigLifecycleState>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_rules_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListRulesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_kind<T: std::convert::Into<crate::model::list_rules_request::Kind>>(
        mut self,
        v: T,
    ) -> Self {
        self.kind = std::option::Option::Some(v.into());
        self
    }

    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    pub fn set_lifecycle_state<T: std::convert::Into<crate::model::ConfigLifecycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_rules_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListRulesRequest].
pub mod list_rules_request {
    string_enum! {
        /// The values accepted by the `kind` query parameter.
        Kind {
            All => "ALL",
            IngestTime => "INGEST_TIME",
            SavedSearch => "SAVED_SEARCH",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            DisplayName => "displayName",
        }
    }
}

/// The request message for [LogAnalytics::list_scheduled_tasks][crate::client::LogAnalytics::list_scheduled_tasks].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListScheduledTasksRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub task_type: std::option::Option<crate::model::TaskType>,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub display_name: std::option::Option<std::string::String>,

    pub target_service: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_scheduled_tasks_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListScheduledTasksRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_task_type<T: std::convert::Into<crate::model::TaskType>>(mut self, v: T) -> Self {
        self.task_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_display_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_target_service<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.target_service = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_scheduled_tasks_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListScheduledTasksRequest].
pub mod list_scheduled_tasks_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
            TimeUpdated => "timeUpdated",
            DisplayName => "displayName",
        }
    }
}

/// The request message for [LogAnalytics::list_source_associations][crate::client::LogAnalytics::list_source_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceAssociationsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::option::Option<std::string::String>,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub life_cycle_state: std::option::Option<crate::model::list_source_associations_request::LifeCycleState>,

    pub is_show_total: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_source_associations_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_life_cycle_state<T: std::convert::Into<crate::model::list_source_associations_request::LifeCycleState>>(
        mut self,
        v: T,
    ) -> Self {
        self.life_cycle_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_show_total<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_show_total = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_source_associations_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListSourceAssociationsRequest].
pub mod list_source_associations_request {
    string_enum! {
        /// The values accepted by the `lifeCycleState` query parameter.
        LifeCycleState {
            All => "ALL",
            Accepted => "ACCEPTED",
            InProgress => "IN_PROGRESS",
            Succeeded => "SUCCEEDED",
            Failed => "FAILED",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            EntityName => "entityName",
            TimeLastAttempted => "timeLastAttempted",
            Status => "status",
        }
    }
}

/// The request message for [LogAnalytics::list_source_event_types][crate::client::LogAnalytics::list_source_event_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceEventTypesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub display_text: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<crate::model::list_source_event_types_request::IsSystem>,

    pub is_enabled: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_source_event_types_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceEventTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_display_text<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.display_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<crate::model::list_source_event_types_request::IsSystem>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_source_event_types_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListSourceEventTypesRequest].
pub mod list_source_event_types_request {
    string_enum! {
        /// The values accepted by the `isSystem` query parameter.
        IsSystem {
            All => "ALL",
            Custom => "CUSTOM",
            BuiltIn => "BUILT_IN",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            EventType => "eventType",
            TimeUpdated => "timeUpdated",
        }
    }
}

/// The request message for [LogAnalytics::list_source_extended_field_definitions][crate::client::LogAnalytics::list_source_extended_field_definitions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceExtendedFieldDefinitionsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_source_extended_field_definitions_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceExtendedFieldDefinitionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_source_extended_field_definitions_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListSourceExtendedFieldDefinitionsRequest].
pub mod list_source_extended_field_definitions_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            BaseFieldName => "baseFieldName",
            RegularExpression => "regularExpression",
        }
    }
}

/// The request message for [LogAnalytics::list_source_label_operators][crate::client::LogAnalytics::list_source_label_operators].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceLabelOperatorsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_source_label_operators_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceLabelOperatorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_source_label_operators_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListSourceLabelOperatorsRequest].
pub mod list_source_label_operators_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_source_meta_functions][crate::client::LogAnalytics::list_source_meta_functions].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourceMetaFunctionsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_source_meta_functions_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourceMetaFunctionsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_source_meta_functions_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListSourceMetaFunctionsRequest].
pub mod list_source_meta_functions_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_source_patterns][crate::client::LogAnalytics::list_source_patterns].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourcePatternsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub is_include: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_source_patterns_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourcePatternsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_is_include<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_include = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_source_patterns_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListSourcePatternsRequest].
pub mod list_source_patterns_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            PatternText => "patternText",
        }
    }
}

/// The request message for [LogAnalytics::list_sources][crate::client::LogAnalytics::list_sources].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSourcesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub source_display_text: std::option::Option<std::string::String>,

    pub is_system: std::option::Option<crate::model::list_sources_request::IsSystem>,

    pub is_auto_associated: std::option::Option<bool>,

    pub name: std::option::Option<std::string::String>,

    pub categories: std::option::Option<std::string::String>,

    pub is_simplified: std::option::Option<bool>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_sources_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSourcesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_display_text<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.source_display_text = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_system<T: std::convert::Into<crate::model::list_sources_request::IsSystem>>(
        mut self,
        v: T,
    ) -> Self {
        self.is_system = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_auto_associated<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_auto_associated = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_categories<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.categories = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_simplified<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_simplified = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_sources_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListSourcesRequest].
pub mod list_sources_request {
    string_enum! {
        /// The values accepted by the `isSystem` query parameter.
        IsSystem {
            All => "ALL",
            Custom => "CUSTOM",
            BuiltIn => "BUILT_IN",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
            TimeUpdated => "timeUpdated",
            AssociationCount => "associationCount",
            SourceType => "sourceType",
        }
    }
}

/// The request message for [LogAnalytics::list_storage_work_request_errors][crate::client::LogAnalytics::list_storage_work_request_errors].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListStorageWorkRequestErrorsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_storage_work_request_errors_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListStorageWorkRequestErrorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_storage_work_request_errors_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListStorageWorkRequestErrorsRequest].
pub mod list_storage_work_request_errors_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeCreated => "timeCreated",
        }
    }
}

/// The request message for [LogAnalytics::list_storage_work_requests][crate::client::LogAnalytics::list_storage_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListStorageWorkRequestsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub operation_type: std::option::Option<crate::model::StorageOperationType>,

    pub status: std::option::Option<crate::model::OperationStatus>,

    pub time_started: std::option::Option<time::OffsetDateTime>,

    pub time_finished: std::option::Option<time::OffsetDateTime>,

    pub policy_name: std::option::Option<std::string::String>,

    pub policy_id: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_storage_work_requests_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListStorageWorkRequestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_operation_type<T: std::convert::Into<crate::model::StorageOperationType>>(
        mut self,
        v: T,
    ) -> Self {
        self.operation_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T: std::convert::Into<crate::model::OperationStatus>>(
        mut self,
        v: T,
    ) -> Self {
        self.status = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_started<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_started = std::option::Option::Some(v.into());
        self
    }

    pub fn set_time_finished<T: std::convert::Into<time::OffsetDateTime>>(mut self, v: T) -> Self {
        self.time_finished = std::option::Option::Some(v.into());
        self
    }

    pub fn set_policy_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_policy_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.policy_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_storage_work_requests_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListStorageWorkRequestsRequest].
pub mod list_storage_work_requests_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeAccepted => "timeAccepted",
            TimeExpires => "timeExpires",
            TimeFinished => "timeFinished",
        }
    }
}

/// The request message for [LogAnalytics::list_supported_char_encodings][crate::client::LogAnalytics::list_supported_char_encodings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSupportedCharEncodingsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSupportedCharEncodingsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_supported_timezones][crate::client::LogAnalytics::list_supported_timezones].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListSupportedTimezonesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListSupportedTimezonesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_upload_files][crate::client::LogAnalytics::list_upload_files].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUploadFilesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_reference: std::string::String,

    pub search_str: std::option::Option<std::string::String>,

    pub status: std::vec::Vec<crate::model::list_upload_files_request::Status>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_upload_files_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListUploadFilesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_reference<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.upload_reference = v.into();
        self
    }

    pub fn set_search_str<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.search_str = std::option::Option::Some(v.into());
        self
    }

    pub fn set_status<T, V>(mut self, v: T) -> Self
    where
        T: std::iter::IntoIterator<Item = V>,
        V: std::convert::Into<crate::model::list_upload_files_request::Status>,
    {
        self.status = v.into_iter().map(|i| i.into()).collect();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_upload_files_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListUploadFilesRequest].
pub mod list_upload_files_request {
    string_enum! {
        /// The values accepted by the `status` query parameter.
        Status {
            InProgress => "IN_PROGRESS",
            Successful => "SUCCESSFUL",
            Failed => "FAILED",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Name => "name",
            TimeStarted => "timeStarted",
            Status => "status",
            LogGroupName => "logGroupName",
            SourceName => "sourceName",
        }
    }
}

/// The request message for [LogAnalytics::list_upload_warnings][crate::client::LogAnalytics::list_upload_warnings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUploadWarningsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_reference: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListUploadWarningsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_reference<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.upload_reference = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_uploads][crate::client::LogAnalytics::list_uploads].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListUploadsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub name: std::option::Option<std::string::String>,

    pub name_contains: std::option::Option<std::string::String>,

    pub warnings_filter: std::option::Option<crate::model::list_uploads_request::WarningsFilter>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_uploads_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListUploadsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name_contains<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name_contains = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warnings_filter<T: std::convert::Into<crate::model::list_uploads_request::WarningsFilter>>(
        mut self,
        v: T,
    ) -> Self {
        self.warnings_filter = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_uploads_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListUploadsRequest].
pub mod list_uploads_request {
    string_enum! {
        /// The values accepted by the `warningsFilter` query parameter.
        WarningsFilter {
            WithWarnings => "WITH_WARNINGS",
            WithoutWarnings => "WITHOUT_WARNINGS",
            All => "ALL",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            TimeUpdated => "timeUpdated",
            TimeCreated => "timeCreated",
            Name => "name",
        }
    }
}

/// The request message for [LogAnalytics::list_warnings][crate::client::LogAnalytics::list_warnings].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWarningsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    pub warning_state: std::option::Option<crate::model::list_warnings_request::WarningState>,

    pub source_name: std::option::Option<std::string::String>,

    pub source_pattern: std::option::Option<std::string::String>,

    pub warning_message: std::option::Option<std::string::String>,

    pub entity_name: std::option::Option<std::string::String>,

    pub entity_type: std::option::Option<std::string::String>,

    pub warning_type: std::option::Option<std::string::String>,

    pub is_no_source: std::option::Option<bool>,

    pub start_time: std::option::Option<std::string::String>,

    pub end_time: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::list_warnings_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListWarningsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warning_state<T: std::convert::Into<crate::model::list_warnings_request::WarningState>>(
        mut self,
        v: T,
    ) -> Self {
        self.warning_state = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_source_pattern<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_pattern = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warning_message<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_message = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_warning_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.warning_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_no_source<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_no_source = std::option::Option::Some(v.into());
        self
    }

    pub fn set_start_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.start_time = std::option::Option::Some(v.into());
        self
    }

    pub fn set_end_time<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.end_time = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::list_warnings_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ListWarningsRequest].
pub mod list_warnings_request {
    string_enum! {
        /// The values accepted by the `warningState` query parameter.
        WarningState {
            All => "ALL",
            Suppressed => "SUPPRESSED",
            Unsuppressed => "UNSUPPRESSED",
        }
    }

    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            EntityType => "EntityType",
            SourceName => "SourceName",
            PatternText => "PatternText",
            FirstReported => "FirstReported",
            WarningMessage => "WarningMessage",
            Host => "Host",
        }
    }
}

/// The request message for [LogAnalytics::list_work_request_errors][crate::client::LogAnalytics::list_work_request_errors].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWorkRequestErrorsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListWorkRequestErrorsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_work_request_logs][crate::client::LogAnalytics::list_work_request_logs].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWorkRequestLogsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListWorkRequestLogsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::list_work_requests][crate::client::LogAnalytics::list_work_requests].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListWorkRequestsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ListWorkRequestsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::offboard_namespace][crate::client::LogAnalytics::offboard_namespace].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OffboardNamespaceRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl OffboardNamespaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::onboard_namespace][crate::client::LogAnalytics::onboard_namespace].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct OnboardNamespaceRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl OnboardNamespaceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::parse_query][crate::client::LogAnalytics::parse_query].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ParseQueryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub parse_query_details: std::option::Option<crate::model::ParseQueryDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ParseQueryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_parse_query_details<T: std::convert::Into<crate::model::ParseQueryDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.parse_query_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::pause_scheduled_task][crate::client::LogAnalytics::pause_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PauseScheduledTaskRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl PauseScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::purge_storage_data][crate::client::LogAnalytics::purge_storage_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PurgeStorageDataRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub purge_storage_data_details: std::option::Option<crate::model::PurgeStorageDataDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl PurgeStorageDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_purge_storage_data_details<T: std::convert::Into<crate::model::PurgeStorageDataDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.purge_storage_data_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::put_query_work_request_background][crate::client::LogAnalytics::put_query_work_request_background].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutQueryWorkRequestBackgroundRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub work_request_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl PutQueryWorkRequestBackgroundRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_work_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.work_request_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::query][crate::client::LogAnalytics::query].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct QueryRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub query_details: std::option::Option<crate::model::QueryDetails>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl QueryRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_query_details<T: std::convert::Into<crate::model::QueryDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.query_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::recall_archived_data][crate::client::LogAnalytics::recall_archived_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RecallArchivedDataRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub recall_archived_data_details: std::option::Option<crate::model::RecallArchivedDataDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl RecallArchivedDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_recall_archived_data_details<T: std::convert::Into<crate::model::RecallArchivedDataDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.recall_archived_data_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::register_lookup][crate::client::LogAnalytics::register_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RegisterLookupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub register_lookup_content_file_body: std::option::Option<bytes::Bytes>,

    pub r#type: std::option::Option<crate::model::LookupType>,

    pub name: std::option::Option<std::string::String>,

    pub description: std::option::Option<std::string::String>,

    pub char_encoding: std::option::Option<std::string::String>,

    pub is_hidden: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// An `Expect` header value, such as `100-continue`.
    pub expect: std::option::Option<std::string::String>,
}

impl RegisterLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_register_lookup_content_file_body<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: T,
    ) -> Self {
        self.register_lookup_content_file_body = std::option::Option::Some(v.into());
        self
    }

    pub fn set_type<T: std::convert::Into<crate::model::LookupType>>(mut self, v: T) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_description<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.description = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_hidden<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_hidden = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::release_recalled_data][crate::client::LogAnalytics::release_recalled_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ReleaseRecalledDataRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub release_recalled_data_details: std::option::Option<crate::model::ReleaseRecalledDataDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl ReleaseRecalledDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_release_recalled_data_details<T: std::convert::Into<crate::model::ReleaseRecalledDataDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.release_recalled_data_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::remove_entity_associations][crate::client::LogAnalytics::remove_entity_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveEntityAssociationsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    pub remove_entity_associations_details: std::option::Option<crate::model::RemoveEntityAssociationsDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl RemoveEntityAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_remove_entity_associations_details<T: std::convert::Into<crate::model::RemoveEntityAssociationsDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.remove_entity_associations_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::remove_preferences][crate::client::LogAnalytics::remove_preferences].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemovePreferencesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_preference_details: std::option::Option<crate::model::LogAnalyticsPreferenceDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl RemovePreferencesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_preference_details<T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_preference_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::remove_resource_categories][crate::client::LogAnalytics::remove_resource_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveResourceCategoriesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub remove_resource_categories_details: std::option::Option<crate::model::RemoveResourceCategoriesDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl RemoveResourceCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_remove_resource_categories_details<T: std::convert::Into<crate::model::RemoveResourceCategoriesDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.remove_resource_categories_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::remove_source_event_types][crate::client::LogAnalytics::remove_source_event_types].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RemoveSourceEventTypesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub source_name: std::string::String,

    pub event_type_details: std::option::Option<crate::model::EventTypeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl RemoveSourceEventTypesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.source_name = v.into();
        self
    }

    pub fn set_event_type_details<T: std::convert::Into<crate::model::EventTypeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.event_type_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::resume_scheduled_task][crate::client::LogAnalytics::resume_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ResumeScheduledTaskRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl ResumeScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::run][crate::client::LogAnalytics::run].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct RunRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    pub r#type: std::option::Option<crate::model::run_request::Type>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl RunRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_type<T: std::convert::Into<crate::model::run_request::Type>>(
        mut self,
        v: T,
    ) -> Self {
        self.r#type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [RunRequest].
pub mod run_request {
    string_enum! {
        /// The values accepted by the `type` query parameter.
        Type {
            All => "ALL",
        }
    }
}

/// The request message for [LogAnalytics::set_unprocessed_data_bucket][crate::client::LogAnalytics::set_unprocessed_data_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SetUnprocessedDataBucketRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub bucket_name: std::option::Option<std::string::String>,

    pub is_enabled: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl SetUnprocessedDataBucketRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_bucket_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.bucket_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_enabled<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_enabled = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::suggest][crate::client::LogAnalytics::suggest].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SuggestRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub suggest_details: std::option::Option<crate::model::SuggestDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl SuggestRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_suggest_details<T: std::convert::Into<crate::model::SuggestDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.suggest_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::suppress_warning][crate::client::LogAnalytics::suppress_warning].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct SuppressWarningRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub warning_reference_details: std::option::Option<crate::model::WarningReferenceDetails>,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl SuppressWarningRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_warning_reference_details<T: std::convert::Into<crate::model::WarningReferenceDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.warning_reference_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::test_parser][crate::client::LogAnalytics::test_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TestParserRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub test_parser_payload_details: std::option::Option<crate::model::TestParserPayloadDetails>,

    pub scope: std::option::Option<crate::model::test_parser_request::Scope>,

    pub req_origin_module: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl TestParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_test_parser_payload_details<T: std::convert::Into<crate::model::TestParserPayloadDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.test_parser_payload_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_scope<T: std::convert::Into<crate::model::test_parser_request::Scope>>(
        mut self,
        v: T,
    ) -> Self {
        self.scope = std::option::Option::Some(v.into());
        self
    }

    pub fn set_req_origin_module<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.req_origin_module = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [TestParserRequest].
pub mod test_parser_request {
    string_enum! {
        /// The values accepted by the `scope` query parameter.
        Scope {
            LogLines => "LOG_LINES",
            LogEntries => "LOG_ENTRIES",
            LogLinesLogEntries => "LOG_LINES_LOG_ENTRIES",
        }
    }
}

/// The request message for [LogAnalytics::unsuppress_warning][crate::client::LogAnalytics::unsuppress_warning].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UnsuppressWarningRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub warning_reference_details: std::option::Option<crate::model::WarningReferenceDetails>,

    /// The OCID of the compartment in which to list resources.
    pub compartment_id: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl UnsuppressWarningRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_warning_reference_details<T: std::convert::Into<crate::model::WarningReferenceDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.warning_reference_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_compartment_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.compartment_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_log_analytics_entity][crate::client::LogAnalytics::update_log_analytics_entity].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_entity_id: std::string::String,

    pub update_log_analytics_entity_details: std::option::Option<crate::model::UpdateLogAnalyticsEntityDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpdateLogAnalyticsEntityRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_entity_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_entity_id = v.into();
        self
    }

    pub fn set_update_log_analytics_entity_details<T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_log_analytics_entity_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_log_analytics_entity_type][crate::client::LogAnalytics::update_log_analytics_entity_type].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsEntityTypeRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub entity_type_name: std::string::String,

    pub update_log_analytics_entity_type_details: std::option::Option<crate::model::UpdateLogAnalyticsEntityTypeDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpdateLogAnalyticsEntityTypeRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_entity_type_name<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.entity_type_name = v.into();
        self
    }

    pub fn set_update_log_analytics_entity_type_details<T: std::convert::Into<crate::model::UpdateLogAnalyticsEntityTypeDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_log_analytics_entity_type_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_log_analytics_log_group][crate::client::LogAnalytics::update_log_analytics_log_group].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsLogGroupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_log_group_id: std::string::String,

    pub update_log_analytics_log_group_details: std::option::Option<crate::model::UpdateLogAnalyticsLogGroupDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpdateLogAnalyticsLogGroupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_log_group_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_log_group_id = v.into();
        self
    }

    pub fn set_update_log_analytics_log_group_details<T: std::convert::Into<crate::model::UpdateLogAnalyticsLogGroupDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_log_analytics_log_group_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_log_analytics_object_collection_rule][crate::client::LogAnalytics::update_log_analytics_object_collection_rule].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLogAnalyticsObjectCollectionRuleRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_object_collection_rule_id: std::string::String,

    pub update_log_analytics_object_collection_rule_details: std::option::Option<crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpdateLogAnalyticsObjectCollectionRuleRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_object_collection_rule_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_object_collection_rule_id = v.into();
        self
    }

    pub fn set_update_log_analytics_object_collection_rule_details<T: std::convert::Into<crate::model::UpdateLogAnalyticsObjectCollectionRuleDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_log_analytics_object_collection_rule_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_lookup][crate::client::LogAnalytics::update_lookup].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLookupRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub lookup_name: std::string::String,

    pub update_lookup_metadata_details: std::option::Option<crate::model::UpdateLookupMetadataDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpdateLookupRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    pub fn set_update_lookup_metadata_details<T: std::convert::Into<crate::model::UpdateLookupMetadataDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_lookup_metadata_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_lookup_data][crate::client::LogAnalytics::update_lookup_data].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateLookupDataRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub lookup_name: std::string::String,

    pub update_lookup_file_body: std::option::Option<bytes::Bytes>,

    pub is_force: std::option::Option<bool>,

    pub char_encoding: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,

    /// An `Expect` header value, such as `100-continue`.
    pub expect: std::option::Option<std::string::String>,
}

impl UpdateLookupDataRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_lookup_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.lookup_name = v.into();
        self
    }

    pub fn set_update_lookup_file_body<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_lookup_file_body = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_force<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_force = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }

    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_preferences][crate::client::LogAnalytics::update_preferences].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdatePreferencesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_preference_details: std::option::Option<crate::model::LogAnalyticsPreferenceDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl UpdatePreferencesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_preference_details<T: std::convert::Into<crate::model::LogAnalyticsPreferenceDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_preference_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_resource_categories][crate::client::LogAnalytics::update_resource_categories].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateResourceCategoriesRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub update_resource_categories_details: std::option::Option<crate::model::UpdateResourceCategoriesDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl UpdateResourceCategoriesRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_update_resource_categories_details<T: std::convert::Into<crate::model::UpdateResourceCategoriesDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_resource_categories_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_scheduled_task][crate::client::LogAnalytics::update_scheduled_task].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateScheduledTaskRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    pub update_scheduled_task_details: std::option::Option<crate::model::UpdateScheduledTaskDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpdateScheduledTaskRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_update_scheduled_task_details<T: std::convert::Into<crate::model::UpdateScheduledTaskDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_scheduled_task_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::update_storage][crate::client::LogAnalytics::update_storage].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateStorageRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub update_storage_details: std::option::Option<crate::model::UpdateStorageDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpdateStorageRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_update_storage_details<T: std::convert::Into<crate::model::UpdateStorageDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.update_storage_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::upload_log_events_file][crate::client::LogAnalytics::upload_log_events_file].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UploadLogEventsFileRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_log_events_file_details: std::option::Option<bytes::Bytes>,

    pub log_group_id: std::option::Option<std::string::String>,

    pub log_set: std::option::Option<std::string::String>,

    pub payload_type: std::option::Option<crate::model::upload_log_events_file_request::PayloadType>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    pub content_type: std::option::Option<std::string::String>,

    pub opc_meta_properties: std::option::Option<std::string::String>,

    /// An `Expect` header value, such as `100-continue`.
    pub expect: std::option::Option<std::string::String>,
}

impl UploadLogEventsFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_log_events_file_details<T: std::convert::Into<bytes::Bytes>>(
        mut self,
        v: T,
    ) -> Self {
        self.upload_log_events_file_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_group_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_group_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    pub fn set_payload_type<T: std::convert::Into<crate::model::upload_log_events_file_request::PayloadType>>(
        mut self,
        v: T,
    ) -> Self {
        self.payload_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_meta_properties<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.opc_meta_properties = std::option::Option::Some(v.into());
        self
    }

    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [UploadLogEventsFileRequest].
pub mod upload_log_events_file_request {
    string_enum! {
        /// The values accepted by the `payloadType` query parameter.
        PayloadType {
            Json => "JSON",
            Gzip => "GZIP",
            Zip => "ZIP",
        }
    }
}

/// The request message for [LogAnalytics::upload_log_file][crate::client::LogAnalytics::upload_log_file].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UploadLogFileRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upload_log_file_body: std::option::Option<bytes::Bytes>,

    pub upload_name: std::option::Option<std::string::String>,

    pub log_source_name: std::option::Option<std::string::String>,

    pub filename: std::option::Option<std::string::String>,

    pub opc_meta_loggrpid: std::option::Option<std::string::String>,

    pub entity_id: std::option::Option<std::string::String>,

    pub timezone: std::option::Option<std::string::String>,

    pub char_encoding: std::option::Option<std::string::String>,

    pub date_format: std::option::Option<std::string::String>,

    pub date_year: std::option::Option<std::string::String>,

    pub invalidate_cache: std::option::Option<bool>,

    pub log_set: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    pub content_type: std::option::Option<std::string::String>,

    pub content_md5: std::option::Option<std::string::String>,

    /// An `Expect` header value, such as `100-continue`.
    pub expect: std::option::Option<std::string::String>,
}

impl UploadLogFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upload_log_file_body<T: std::convert::Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.upload_log_file_body = std::option::Option::Some(v.into());
        self
    }

    pub fn set_upload_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.upload_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_source_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_source_name = std::option::Option::Some(v.into());
        self
    }

    pub fn set_filename<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filename = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_meta_loggrpid<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.opc_meta_loggrpid = std::option::Option::Some(v.into());
        self
    }

    pub fn set_entity_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.entity_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_timezone<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.timezone = std::option::Option::Some(v.into());
        self
    }

    pub fn set_char_encoding<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.char_encoding = std::option::Option::Some(v.into());
        self
    }

    pub fn set_date_format<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.date_format = std::option::Option::Some(v.into());
        self
    }

    pub fn set_date_year<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.date_year = std::option::Option::Some(v.into());
        self
    }

    pub fn set_invalidate_cache<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.invalidate_cache = std::option::Option::Some(v.into());
        self
    }

    pub fn set_log_set<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.log_set = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_content_type<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_type = std::option::Option::Some(v.into());
        self
    }

    pub fn set_content_md5<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.content_md5 = std::option::Option::Some(v.into());
        self
    }

    pub fn set_expect<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.expect = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_associations][crate::client::LogAnalytics::upsert_associations].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertAssociationsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upsert_log_analytics_association_details: std::option::Option<crate::model::UpsertLogAnalyticsAssociationDetails>,

    pub is_from_republish: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,
}

impl UpsertAssociationsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upsert_log_analytics_association_details<T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.upsert_log_analytics_association_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_from_republish<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_from_republish = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_field][crate::client::LogAnalytics::upsert_field].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertFieldRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upsert_log_analytics_field_details: std::option::Option<crate::model::UpsertLogAnalyticsFieldDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpsertFieldRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upsert_log_analytics_field_details<T: std::convert::Into<crate::model::UpsertLogAnalyticsFieldDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.upsert_log_analytics_field_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_label][crate::client::LogAnalytics::upsert_label].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertLabelRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upsert_log_analytics_label_details: std::option::Option<crate::model::UpsertLogAnalyticsLabelDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpsertLabelRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upsert_log_analytics_label_details<T: std::convert::Into<crate::model::UpsertLogAnalyticsLabelDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.upsert_log_analytics_label_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_parser][crate::client::LogAnalytics::upsert_parser].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertParserRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upsert_log_analytics_parser_details: std::option::Option<crate::model::UpsertLogAnalyticsParserDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpsertParserRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upsert_log_analytics_parser_details<T: std::convert::Into<crate::model::UpsertLogAnalyticsParserDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.upsert_log_analytics_parser_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::upsert_source][crate::client::LogAnalytics::upsert_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpsertSourceRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upsert_log_analytics_source_details: std::option::Option<crate::model::UpsertLogAnalyticsSourceDetails>,

    pub create_like_source_id: std::option::Option<i32>,

    pub is_incremental: std::option::Option<bool>,

    pub is_ignore_warning: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,

    /// A token that uniquely identifies a request so it can be retried in case of a
    /// timeout or server error without risk of executing that same action again.
    ///
    /// The client generates a new token when this is not set.
    pub opc_retry_token: std::option::Option<std::string::String>,

    /// For optimistic concurrency control. The resource is updated or deleted only
    /// if the etag provided matches the resource's current etag value.
    pub if_match: std::option::Option<std::string::String>,
}

impl UpsertSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upsert_log_analytics_source_details<T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.upsert_log_analytics_source_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_create_like_source_id<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.create_like_source_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_incremental<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_incremental = std::option::Option::Some(v.into());
        self
    }

    pub fn set_is_ignore_warning<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.is_ignore_warning = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_retry_token<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_retry_token = std::option::Option::Some(v.into());
        self
    }

    pub fn set_if_match<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.if_match = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_association_parameters][crate::client::LogAnalytics::validate_association_parameters].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateAssociationParametersRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upsert_log_analytics_association_details: std::option::Option<crate::model::UpsertLogAnalyticsAssociationDetails>,

    /// The maximum number of items to return.
    pub limit: std::option::Option<i32>,

    /// The page token representing the page at which to start retrieving results.
    ///
    /// This is usually retrieved from a previous list call.
    pub page: std::option::Option<std::string::String>,

    /// The sort order to use, either ascending or descending.
    pub sort_order: std::option::Option<crate::model::SortOrder>,

    /// The field to sort by.
    pub sort_by: std::option::Option<crate::model::validate_association_parameters_request::SortBy>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ValidateAssociationParametersRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upsert_log_analytics_association_details<T: std::convert::Into<crate::model::UpsertLogAnalyticsAssociationDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.upsert_log_analytics_association_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_limit<T: std::convert::Into<i32>>(mut self, v: T) -> Self {
        self.limit = std::option::Option::Some(v.into());
        self
    }

    pub fn set_page<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.page = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_order<T: std::convert::Into<crate::model::SortOrder>>(mut self, v: T) -> Self {
        self.sort_order = std::option::Option::Some(v.into());
        self
    }

    pub fn set_sort_by<T: std::convert::Into<crate::model::validate_association_parameters_request::SortBy>>(
        mut self,
        v: T,
    ) -> Self {
        self.sort_by = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// Defines additional types related to [ValidateAssociationParametersRequest].
pub mod validate_association_parameters_request {
    string_enum! {
        /// The values accepted by the `sortBy` query parameter.
        SortBy {
            Status => "status",
            SourceName => "sourceName",
            EntityName => "entityName",
            EntityTypeName => "entityTypeName",
        }
    }
}

/// The request message for [LogAnalytics::validate_endpoint][crate::client::LogAnalytics::validate_endpoint].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateEndpointRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_endpoint: std::option::Option<crate::model::LogAnalyticsEndpoint>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ValidateEndpointRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_endpoint<T: std::convert::Into<crate::model::LogAnalyticsEndpoint>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_endpoint = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_file][crate::client::LogAnalytics::validate_file].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateFileRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub object_location: std::option::Option<std::string::String>,

    pub filename: std::option::Option<std::string::String>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ValidateFileRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_object_location<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.object_location = std::option::Option::Some(v.into());
        self
    }

    pub fn set_filename<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.filename = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_label_condition][crate::client::LogAnalytics::validate_label_condition].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateLabelConditionRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub validate_label_condition_details: std::option::Option<crate::model::ValidateLabelConditionDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ValidateLabelConditionRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_validate_label_condition_details<T: std::convert::Into<crate::model::ValidateLabelConditionDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.validate_label_condition_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_source][crate::client::LogAnalytics::validate_source].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateSourceRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub upsert_log_analytics_source_details: std::option::Option<crate::model::UpsertLogAnalyticsSourceDetails>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ValidateSourceRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_upsert_log_analytics_source_details<T: std::convert::Into<crate::model::UpsertLogAnalyticsSourceDetails>>(
        mut self,
        v: T,
    ) -> Self {
        self.upsert_log_analytics_source_details = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::validate_source_extended_field_details][crate::client::LogAnalytics::validate_source_extended_field_details].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ValidateSourceExtendedFieldDetailsRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub log_analytics_source: std::option::Option<crate::model::LogAnalyticsSource>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl ValidateSourceExtendedFieldDetailsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_log_analytics_source<T: std::convert::Into<crate::model::LogAnalyticsSource>>(
        mut self,
        v: T,
    ) -> Self {
        self.log_analytics_source = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

/// The request message for [LogAnalytics::verify][crate::client::LogAnalytics::verify].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct VerifyRequest {
    /// The Log Analytics namespace used for the request.
    pub namespace_name: std::string::String,

    pub scheduled_task_id: std::string::String,

    pub should_include_results: std::option::Option<bool>,

    /// The client request ID for tracing.
    pub opc_request_id: std::option::Option<std::string::String>,
}

impl VerifyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_namespace_name<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.namespace_name = v.into();
        self
    }

    pub fn set_scheduled_task_id<T: std::convert::Into<std::string::String>>(
        mut self,
        v: T,
    ) -> Self {
        self.scheduled_task_id = v.into();
        self
    }

    pub fn set_should_include_results<T: std::convert::Into<bool>>(mut self, v: T) -> Self {
        self.should_include_results = std::option::Option::Some(v.into());
        self
    }

    pub fn set_opc_request_id<T: std::convert::Into<std::string::String>>(mut self, v: T) -> Self {
        self.opc_request_id = std::option::Option::Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaxi::query_parameter::EnumValue;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use time::macros::datetime;
    type TestResult = anyhow::Result<()>;

    #[test]
    fn enum_names() {
        assert_eq!(SortOrder::Asc.name(), "ASC");
        assert_eq!(SortOrder::from("DESC"), SortOrder::Desc);
        assert_eq!(LookupType::Dictionary.to_string(), "Dictionary");
        assert_eq!(
            TaskType::from("ACCELERATION_MAINTENANCE"),
            TaskType::AccelerationMaintenance
        );
        assert!(TaskType::AccelerationMaintenance.is_known());

        let unknown = SortOrder::from("SIDEWAYS");
        assert_eq!(unknown, SortOrder::UnknownValue("SIDEWAYS".to_string()));
        assert_eq!(unknown.name(), "SIDEWAYS");
        assert!(!unknown.is_known());
    }

    #[test]
    fn request_enum_names() {
        use list_log_analytics_entities_request::IsManagementAgentIdNull;
        use list_lookups_request::SortBy;
        assert_eq!(SortBy::UpdatedTime.name(), "updatedTime");
        assert_eq!(IsManagementAgentIdNull::True.name(), "true");
        assert_eq!(
            <SortBy as EnumValue>::VALUES,
            &["displayName", "status", "type", "updatedTime", "creationType"]
        );
    }

    #[test]
    fn enum_serde() -> TestResult {
        let got = serde_json::to_value(EntityLifecycleStates::Active)?;
        assert_eq!(got, json!("ACTIVE"));
        let got = serde_json::from_value::<OperationStatus>(json!("NEW_STATUS"))?;
        assert_eq!(got, OperationStatus::UnknownValue("NEW_STATUS".to_string()));
        Ok(())
    }

    #[test]
    fn entity_from_json() -> TestResult {
        let input = json!({
            "id": "ocid1.x",
            "name": "web-01",
            "lifecycleState": "ACTIVE",
            "timeCreated": "2025-03-04T05:06:07Z",
            "properties": {"os": "linux"},
            "freeformTags": {"team": "sre"},
            "definedTags": {"ops": {"tier": 1}},
            "someNewField": 42,
        });
        let got = serde_json::from_value::<LogAnalyticsEntity>(input)?;
        let want = LogAnalyticsEntity::new()
            .set_id("ocid1.x")
            .set_name("web-01")
            .set_lifecycle_state(EntityLifecycleStates::Active)
            .set_time_created(datetime!(2025-03-04 05:06:07 UTC))
            .set_properties([("os", "linux")])
            .set_freeform_tags([("team", "sre")])
            .set_defined_tags([(
                "ops",
                std::collections::HashMap::from([("tier".to_string(), json!(1))]),
            )]);
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn details_skip_unset_fields() -> TestResult {
        let details = CreateLogAnalyticsLogGroupDetails::new()
            .set_display_name("web")
            .set_compartment_id("ocid1.compartment");
        let got = serde_json::to_value(&details)?;
        assert_eq!(
            got,
            json!({"displayName": "web", "compartmentId": "ocid1.compartment"})
        );
        Ok(())
    }

    #[test]
    fn timestamps_use_rfc3339() -> TestResult {
        let range = TimeRange::new()
            .set_time_start(datetime!(2025-01-02 03:04:05 UTC))
            .set_time_zone("UTC");
        let got = serde_json::to_value(&range)?;
        assert_eq!(
            got,
            json!({"timeStart": "2025-01-02T03:04:05Z", "timeZone": "UTC"})
        );
        let roundtrip = serde_json::from_value::<TimeRange>(got)?;
        assert_eq!(roundtrip, range);
        Ok(())
    }

    #[test]
    fn collection_pages() -> TestResult {
        use gax::paginator::PageableResponse;
        let page = serde_json::from_value::<LogAnalyticsLogGroupSummaryCollection>(json!({
            "items": [{"id": "a"}, {"id": "b"}]
        }))?;
        assert_eq!(page.next_page_token(), "");

        let page = page.set_next_page("token-2");
        assert_eq!(page.next_page_token(), "token-2");
        let got = serde_json::to_value(&page)?;
        assert!(got.get("nextPage").is_none(), "{got:?}");

        let ids = page
            .items()
            .into_iter()
            .filter_map(|i| i.id)
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn request_setters() {
        let req = ListLookupsRequest::new()
            .set_namespace_name("ns1")
            .set_type(LookupType::Lookup)
            .set_status(list_lookups_request::Status::Failed)
            .set_limit(10);
        assert_eq!(req.namespace_name, "ns1");
        assert_eq!(req.r#type, Some(LookupType::Lookup));
        assert_eq!(req.status, Some(list_lookups_request::Status::Failed));
        assert_eq!(req.limit, Some(10));
        assert_eq!(req.page, None);

        let req = ListUploadFilesRequest::new()
            .set_status(["FAILED", "IN_PROGRESS"])
            .set_upload_reference("upload-1");
        assert_eq!(
            req.status,
            vec![
                list_upload_files_request::Status::Failed,
                list_upload_files_request::Status::InProgress
            ]
        );
    }
}

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


//! Log Analytics Management API client library for Rust.
//!
//! This crate contains a client for the Log Analytics management API, version
//! 20200601. The service ingests, parses, searches, exports, archives, and
//! purges log data, and manages the metadata (sources, parsers, fields,
//! labels, lookups, entities, log groups) used to process it.
//!
//! # Example
//! ```no_run
//! # tokio_test::block_on(async {
//! use log_analytics::client::LogAnalytics;
//! let client = LogAnalytics::builder()
//!     .with_region("us-ashburn-1")
//!     .build()
//!     .await?;
//! let response = client
//!     .get_log_analytics_entity("my-namespace", "ocid1.loganalyticsentity.oc1..example")
//!     .send()
//!     .await?;
//! println!("{:?}", response.body().name);
//! # anyhow::Result::<()>::Ok(()) });
//! ```
//!
//! Each operation returns a [gax::response::Response], which carries the
//! HTTP status, the response headers, and the typed payload. Operations that
//! export data deliver the payload through the [export] module.
//!
//! Operations that create resources send an `opc-retry-token` header. The
//! client generates a new token for each call unless the application provides
//! one, so retried attempts of the same call are deduplicated by the service.

pub use gax::Result;
pub use gax::error::Error;

/// The messages and enums that are part of this client library.
pub mod model;

/// Traits to mock the clients in this library.
pub mod stub;

/// Concrete implementations of this client library traits.
pub mod client;

/// Request builders.
pub mod builder;

pub mod export;

#[doc(hidden)]
pub(crate) mod tracing;

#[doc(hidden)]
pub(crate) mod transport;

pub(crate) const SERVICE_ENDPOINT: gaxi::host::ServiceEndpoint = gaxi::host::ServiceEndpoint {
    template: "https://loganalytics.{region}.oci.oraclecloud.com",
    api_version: "/20200601",
};

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

//! Log Analytics client libraries for Rust - Authentication Components
//!
//! This crate contains types and functions used to authenticate requests to
//! the Log Analytics service. The service client consumes a
//! [credentials::Credentials] value and asks it for the headers to attach to
//! each request.
//!
//! Computing request signatures is out of scope for this crate. Applications
//! that sign requests implement [credentials::dynamic::CredentialsProvider]
//! and wrap their implementation with [credentials::Credentials::from].

pub mod build_errors;
pub mod errors;

/// Types and functions to work with authentication credentials.
pub mod credentials;

/// A `Result` alias where the `Err` case is
/// `log_analytics_auth::errors::CredentialsError`.
pub(crate) type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;

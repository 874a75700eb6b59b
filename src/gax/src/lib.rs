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

//! Log Analytics client helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the Log Analytics client libraries for Rust. Most
//! applications only interact with these types through a service client: the
//! [error::Error] type, the [response::Response] type, the retry and backoff
//! policies, and the [options::RequestOptionsBuilder] trait implemented by
//! every request builder.

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping REST calls.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by generated clients.
pub mod error;

/// Defines some types and traits to convert and use list calls as a Stream.
pub mod paginator;

pub mod backoff_policy;
pub mod client_builder;
pub mod exponential_backoff;
pub mod options;
pub mod response;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_state;

#[doc(hidden)]
pub mod retry_loop_internal;

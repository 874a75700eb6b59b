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

//! Validate and encode path parameters.
//!
//! Every identifier used to build a request path is required, and cannot be
//! blank. The generated code calls these helpers before making any request,
//! so invalid calls never reach the network.

use gax::error::{BindingError, Error};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Unreserved characters per RFC 3986 are left as-is.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Returns the value of a required parameter, or a binding error if unset.
pub fn required<T>(
    operation: &'static str,
    parameter: &'static str,
    value: Option<T>,
) -> gax::Result<T> {
    value.ok_or_else(|| missing(operation, parameter))
}

/// Returns a binding error if `value` is empty or only whitespace.
pub fn non_blank(operation: &'static str, parameter: &'static str, value: &str) -> gax::Result<()> {
    if value.trim().is_empty() {
        return Err(Error::binding(BindingError::BlankParameter {
            operation,
            parameter,
        }));
    }
    Ok(())
}

pub fn missing(operation: &'static str, parameter: &'static str) -> Error {
    Error::binding(BindingError::MissingParameter {
        operation,
        parameter,
    })
}

/// Percent-encodes a value used as a single path segment.
///
/// # Example
/// ```
/// # use log_analytics_gax_internal::path_parameter::encode;
/// assert_eq!(encode("my source/v2"), "my%20source%2Fv2");
/// ```
pub fn encode(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    fn binding_error(e: &Error) -> Option<&BindingError> {
        e.source().and_then(|s| s.downcast_ref::<BindingError>())
    }

    #[test]
    fn required_present() -> anyhow::Result<()> {
        let v = required("get_lookup", "lookup_name", Some("abc"))?;
        assert_eq!(v, "abc");
        Ok(())
    }

    #[test]
    fn required_missing() {
        let e = required::<String>("upsert_field", "upsert_log_analytics_field_details", None)
            .unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(
            matches!(
                binding_error(&e),
                Some(BindingError::MissingParameter { operation: "upsert_field", parameter: "upsert_log_analytics_field_details" })
            ),
            "{e:?}"
        );
    }

    #[test_case(""; "empty")]
    #[test_case(" "; "space")]
    #[test_case("\t\n"; "whitespace")]
    fn blank(value: &str) {
        let e = non_blank("get_namespace", "namespace_name", value).unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert!(
            matches!(
                binding_error(&e),
                Some(BindingError::BlankParameter { parameter: "namespace_name", .. })
            ),
            "{e:?}"
        );
    }

    #[test]
    fn not_blank() -> anyhow::Result<()> {
        non_blank("get_namespace", "namespace_name", " ns ")?;
        Ok(())
    }

    #[test_case("simple", "simple")]
    #[test_case("ocid1.entity.oc1..aaaa", "ocid1.entity.oc1..aaaa")]
    #[test_case("a b", "a%20b")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b#c", "a%3Fb%23c")]
    #[test_case("~_-", "~_-")]
    fn encoding(input: &str, want: &str) {
        assert_eq!(encode(input), want);
    }
}

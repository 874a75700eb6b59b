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

//! Defines traits and helpers to serialize query parameters.
//!
//! The generated request types hold query parameters as fields of many
//! different types: strings, booleans, integers, timestamps, enums, optional
//! values, and lists. The generated code is simpler if all of them can be
//! added to a request uniformly.

use gax::error::{BindingError, Error};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder;
}

impl QueryParameter for &str {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for String {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for bool {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i32 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for i64 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for f64 {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, self)])
    }
}

impl QueryParameter for OffsetDateTime {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        builder.query(&[(name, format_timestamp(self))])
    }
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        match self {
            None => builder,
            Some(v) => v.add(builder, name),
        }
    }
}

// Lists are sent as repeated keys, e.g. `?status=FAILED&status=IN_PROGRESS`.
impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(self, builder: reqwest::RequestBuilder, name: &str) -> reqwest::RequestBuilder {
        self.into_iter().fold(builder, |b, v| v.add(b, name))
    }
}

/// Formats a timestamp as RFC 3339.
///
/// Years outside the RFC 3339 range fall back to the `Display` format, and the
/// service rejects them.
pub fn format_timestamp(value: OffsetDateTime) -> String {
    value.format(&Rfc3339).unwrap_or_else(|_| value.to_string())
}

/// Enumerations with a closed set of values on the wire.
///
/// Generated enums implement this trait so the client can reject unknown
/// values before sending a request.
pub trait EnumValue {
    /// The values accepted by the service.
    const VALUES: &'static [&'static str];

    /// The wire representation of this value.
    fn name(&self) -> &str;

    /// Returns false for values created from strings outside [Self::VALUES].
    fn is_known(&self) -> bool {
        Self::VALUES.contains(&self.name())
    }
}

/// Returns a binding error if `value` is not one of the allowed values.
pub fn check_enum<E: EnumValue>(
    operation: &'static str,
    parameter: &'static str,
    value: &E,
) -> gax::Result<()> {
    if value.is_known() {
        return Ok(());
    }
    Err(Error::binding(BindingError::InvalidEnumValue {
        operation,
        parameter,
        value: value.name().to_string(),
        allowed: E::VALUES,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    type TestResult = anyhow::Result<()>;

    fn split_query(r: &reqwest::Request) -> Vec<&str> {
        r.url()
            .query()
            .unwrap_or_default()
            .split("&")
            .filter(|p| !p.is_empty())
            .collect()
    }

    fn builder() -> anyhow::Result<reqwest::RequestBuilder> {
        Ok(reqwest::Client::builder()
            .build()?
            .get("https://loganalytics.us-ashburn-1.oci.oraclecloud.com/20200601/unused"))
    }

    #[test]
    fn scalars() -> TestResult {
        let builder = "abc".add(builder()?, "name");
        let builder = String::from("a b").add(builder, "nameContains");
        let builder = true.add(builder, "isShowTotal");
        let builder = 42_i32.add(builder, "limit");
        let builder = 7_i64.add(builder, "size");
        let builder = 1.5_f64.add(builder, "ratio");
        let request = builder.build()?;
        assert_eq!(
            split_query(&request),
            vec![
                "name=abc",
                "nameContains=a+b",
                "isShowTotal=true",
                "limit=42",
                "size=7",
                "ratio=1.5"
            ]
        );
        Ok(())
    }

    #[test]
    fn timestamp() -> TestResult {
        let ts = time::macros::datetime!(2025-03-04 05:06:07 UTC);
        let request = ts.add(builder()?, "timeStart").build()?;
        assert_eq!(split_query(&request), vec!["timeStart=2025-03-04T05%3A06%3A07Z"]);
        Ok(())
    }

    #[test]
    fn optional() -> TestResult {
        let builder = None::<i32>.add(builder()?, "limit");
        let builder = Some("next-page").add(builder, "page");
        let request = builder.build()?;
        assert_eq!(split_query(&request), vec!["page=next-page"]);
        Ok(())
    }

    #[test]
    fn repeated() -> TestResult {
        let value = vec!["FAILED".to_string(), "IN_PROGRESS".to_string()];
        let request = value.add(builder()?, "status").build()?;
        assert_eq!(
            split_query(&request),
            vec!["status=FAILED", "status=IN_PROGRESS"]
        );

        let request = Vec::<String>::new().add(builder()?, "status").build()?;
        assert!(split_query(&request).is_empty(), "{request:?}");
        Ok(())
    }

    #[derive(Debug)]
    struct Direction(&'static str);

    impl EnumValue for Direction {
        const VALUES: &'static [&'static str] = &["ASC", "DESC"];
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn enum_known() -> TestResult {
        check_enum("list_sources", "sort_order", &Direction("ASC"))?;
        check_enum("list_sources", "sort_order", &Direction("DESC"))?;
        Ok(())
    }

    #[test]
    fn enum_unknown() {
        let e = check_enum("list_sources", "sort_order", &Direction("asc")).unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        let source = e.source().and_then(|s| s.downcast_ref::<BindingError>());
        match source {
            Some(BindingError::InvalidEnumValue {
                parameter, value, allowed, ..
            }) => {
                assert_eq!(*parameter, "sort_order");
                assert_eq!(value, "asc");
                assert_eq!(*allowed, Direction::VALUES);
            }
            _ => panic!("unexpected error {e:?}"),
        }
    }
}

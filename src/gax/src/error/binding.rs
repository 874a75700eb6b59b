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

/// A failure to bind the request parameters to a valid HTTP request.
///
/// The client libraries validate the request parameters before sending any
/// request. A required parameter may be missing, a path parameter may be
/// blank, or a parameter restricted to a fixed set of values may have some
/// other value. In all these cases the request is never sent, and the error
/// names both the parameter and the operation.
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingError {
    /// A required parameter was not set.
    #[error("missing required parameter `{parameter}` when calling {operation}")]
    MissingParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    /// A required path parameter was set to an empty or blank string.
    #[error("parameter `{parameter}` cannot be empty or blank when calling {operation}")]
    BlankParameter {
        operation: &'static str,
        parameter: &'static str,
    },

    /// A parameter is restricted to a fixed set of values, and was set to some
    /// other value.
    #[error(
        "invalid value `{value}` for parameter `{parameter}` when calling {operation}, allowed values are: {}",
        allowed.join(", ")
    )]
    InvalidEnumValue {
        operation: &'static str,
        parameter: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

impl BindingError {
    /// The name of the operation that failed validation.
    pub fn operation(&self) -> &'static str {
        match self {
            Self::MissingParameter { operation, .. } => operation,
            Self::BlankParameter { operation, .. } => operation,
            Self::InvalidEnumValue { operation, .. } => operation,
        }
    }

    /// The name of the parameter that failed validation.
    pub fn parameter(&self) -> &'static str {
        match self {
            Self::MissingParameter { parameter, .. } => parameter,
            Self::BlankParameter { parameter, .. } => parameter,
            Self::InvalidEnumValue { parameter, .. } => parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_missing() {
        let e = BindingError::MissingParameter {
            operation: "create_log_analytics_entity",
            parameter: "create_log_analytics_entity_details",
        };
        let fmt = format!("{e}");
        assert!(fmt.contains("missing required parameter"), "{fmt}");
        assert!(fmt.contains("`create_log_analytics_entity_details`"), "{fmt}");
        assert!(fmt.contains("create_log_analytics_entity"), "{fmt}");
        assert_eq!(e.operation(), "create_log_analytics_entity");
        assert_eq!(e.parameter(), "create_log_analytics_entity_details");
    }

    #[test]
    fn fmt_blank() {
        let e = BindingError::BlankParameter {
            operation: "get_namespace",
            parameter: "namespace_name",
        };
        let fmt = format!("{e}");
        assert!(fmt.contains("cannot be empty or blank"), "{fmt}");
        assert!(fmt.contains("`namespace_name`"), "{fmt}");
        assert!(fmt.contains("get_namespace"), "{fmt}");
    }

    #[test]
    fn fmt_invalid_enum() {
        let e = BindingError::InvalidEnumValue {
            operation: "list_log_analytics_entities",
            parameter: "sort_order",
            value: "SIDEWAYS".to_string(),
            allowed: &["ASC", "DESC"],
        };
        let fmt = format!("{e}");
        assert!(fmt.contains("`SIDEWAYS`"), "{fmt}");
        assert!(fmt.contains("`sort_order`"), "{fmt}");
        assert!(fmt.contains("list_log_analytics_entities"), "{fmt}");
        assert!(fmt.contains("ASC, DESC"), "{fmt}");
        assert_eq!(e.parameter(), "sort_order");
    }
}

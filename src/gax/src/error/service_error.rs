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

/// The error details returned by the service.
///
/// The Log Analytics service returns a JSON object with a machine readable
/// `code` (e.g. `NotAuthorizedOrNotFound`) and a human readable `message` for
/// all unsuccessful requests.
///
/// # Example
/// ```
/// # use log_analytics_gax::error::ServiceError;
/// let status = ServiceError::default()
///     .set_code("NotAuthorizedOrNotFound")
///     .set_message("Authorization failed or requested resource not found.");
/// assert_eq!(status.code, "NotAuthorizedOrNotFound");
/// ```
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServiceError {
    /// A short error code that defines the error, meant for programmatic
    /// parsing.
    pub code: String,

    /// A human-readable error string.
    pub message: String,
}

impl ServiceError {
    /// Sets the value for [code][ServiceError::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value for [message][ServiceError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

impl TryFrom<&bytes::Bytes> for ServiceError {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        serde_json::from_slice::<ServiceError>(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize() -> anyhow::Result<()> {
        let payload = bytes::Bytes::from_static(
            br#"{"code": "InvalidParameter", "message": "limit must be positive", "extra": 1}"#,
        );
        let got = ServiceError::try_from(&payload)?;
        let want = ServiceError::default()
            .set_code("InvalidParameter")
            .set_message("limit must be positive");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn deserialize_partial() -> anyhow::Result<()> {
        let payload = bytes::Bytes::from_static(br#"{"code": "TooManyRequests"}"#);
        let got = ServiceError::try_from(&payload)?;
        assert_eq!(got.code, "TooManyRequests");
        assert!(got.message.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn deserialize_error() {
        let payload = bytes::Bytes::from_static(b"<html>Bad Gateway</html>");
        let got = ServiceError::try_from(&payload);
        assert!(got.is_err(), "{got:?}");
    }
}

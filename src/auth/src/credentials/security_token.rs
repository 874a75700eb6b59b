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

//! Security token credentials.
//!
//! These credentials attach a pre-issued security token as a bearer token in
//! the `authorization` header. The token is typically obtained from a session
//! login or a delegation token file, and it is used as-is: these credentials
//! do not refresh the token.
//!
//! # Example
//! ```
//! # use log_analytics_auth::credentials::security_token::Builder;
//! # fn sample() -> Result<(), log_analytics_auth::build_errors::Error> {
//! let credentials = Builder::new("my-token")
//!     .with_region("us-ashburn-1")
//!     .build()?;
//! # Ok(()) }
//! ```

use crate::Result;
use crate::build_errors::Error as BuilderError;
use crate::credentials::dynamic::CredentialsProvider;
use crate::credentials::{CacheableResource, Credentials, EntityTag};
use http::header::{AUTHORIZATION, HeaderValue};
use http::{Extensions, HeaderMap};
use std::sync::Arc;

#[derive(Debug)]
struct SecurityTokenCredentials {
    headers: HeaderMap,
    entity_tag: EntityTag,
    region: Option<String>,
}

/// A builder for security token credentials.
#[derive(Debug)]
pub struct Builder {
    token: String,
    region: Option<String>,
}

impl Builder {
    /// Creates a builder using the given token.
    pub fn new<V: Into<String>>(token: V) -> Self {
        Self {
            token: token.into(),
            region: None,
        }
    }

    /// Creates a builder reading the token from a file.
    ///
    /// Leading and trailing whitespace in the file is ignored.
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> std::result::Result<Self, BuilderError> {
        let path = path.as_ref();
        let token = std::fs::read_to_string(path).map_err(BuilderError::loading)?;
        Ok(Self::new(token.trim()))
    }

    /// Sets the region reported by the credentials.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance.
    ///
    /// Fails if the token is blank or contains characters that are not valid
    /// in a header value.
    pub fn build(self) -> std::result::Result<Credentials, BuilderError> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(BuilderError::invalid_token("the token is empty"));
        }
        let mut value =
            HeaderValue::from_str(&format!("Bearer {token}")).map_err(BuilderError::invalid_token)?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(Credentials {
            inner: Arc::new(SecurityTokenCredentials {
                headers,
                entity_tag: EntityTag::new(),
                region: self.region,
            }),
        })
    }
}

#[async_trait::async_trait]
impl CredentialsProvider for SecurityTokenCredentials {
    async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        match extensions.get::<EntityTag>() {
            Some(tag) if self.entity_tag.eq(tag) => Ok(CacheableResource::NotModified),
            _ => Ok(CacheableResource::New {
                data: self.headers.clone(),
                entity_tag: self.entity_tag.clone(),
            }),
        }
    }

    fn region(&self) -> Option<String> {
        self.region.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn headers() -> TestResult {
        let creds = Builder::new("abc123").build()?;
        let mut extensions = Extensions::new();
        let (headers, entity_tag) = match creds.headers(extensions.clone()).await? {
            CacheableResource::New { entity_tag, data } => (data, entity_tag),
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        };
        let value = headers.get(AUTHORIZATION).unwrap();
        assert!(value.is_sensitive(), "{value:?}");
        assert_eq!(value.to_str()?, "Bearer abc123");

        extensions.insert(entity_tag);
        let cached = creds.headers(extensions).await?;
        assert!(matches!(cached, CacheableResource::NotModified), "{cached:?}");
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    #[test_case("bad\ntoken"; "newline")]
    fn invalid(token: &str) {
        let err = Builder::new(token).build().unwrap_err();
        assert!(err.is_invalid_token(), "{err:?}");
    }

    #[test]
    fn from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "  file-token  ")?;
        let creds = Builder::from_file(file.path())?
            .with_region("uk-london-1")
            .build()?;
        assert_eq!(creds.region().as_deref(), Some("uk-london-1"));
        Ok(())
    }

    #[test]
    fn from_missing_file() {
        let err = Builder::from_file("/does/not/exist/token").unwrap_err();
        assert!(err.is_loading(), "{err:?}");
    }
}

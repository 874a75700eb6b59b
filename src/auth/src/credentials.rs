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

use crate::Result;
use crate::build_errors::Error as BuilderError;
use http::{Extensions, HeaderMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

pub mod anonymous;
pub mod security_token;

/// The environment variable with a security token.
pub const SECURITY_TOKEN_VAR: &str = "LOG_ANALYTICS_SECURITY_TOKEN";

/// The environment variable with the path of a file containing a security
/// token. Takes priority over [SECURITY_TOKEN_VAR].
pub const SECURITY_TOKEN_FILE_VAR: &str = "LOG_ANALYTICS_SECURITY_TOKEN_FILE";

static ENTITY_TAG_GENERATOR: AtomicU64 = AtomicU64::new(0);

/// An opaque version identifier for a cached resource.
///
/// Credentials return a new tag whenever the headers change. Callers send back
/// the last tag they saw, in the request [Extensions], to avoid rebuilding
/// headers that have not changed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityTag(u64);

impl EntityTag {
    pub fn new() -> Self {
        Self(ENTITY_TAG_GENERATOR.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for EntityTag {
    fn default() -> Self {
        Self::new()
    }
}

/// A resource that may be unchanged since the caller last retrieved it.
#[derive(Clone, Debug, PartialEq)]
pub enum CacheableResource<T> {
    NotModified,
    New { entity_tag: EntityTag, data: T },
}

/// An implementation of [dynamic::CredentialsProvider].
///
/// Represents the authentication information attached to each request. The
/// client calls [Credentials::headers] before every attempt, and merges the
/// returned headers into the request.
///
/// Use [Builder] to load credentials from the environment, or the builders in
/// the [anonymous] and [security_token] modules for explicit configuration.
#[derive(Clone, Debug)]
pub struct Credentials {
    // Use an Arc to make `Credentials` cheap to clone.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: dynamic::CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers to attach to a request.
    pub async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
        self.inner.headers(extensions).await
    }

    /// Returns the region associated with these credentials, if any.
    ///
    /// The client uses this region when the application does not configure an
    /// endpoint or a region explicitly.
    pub fn region(&self) -> Option<String> {
        self.inner.region()
    }
}

pub mod dynamic {
    use super::Result;
    use super::{CacheableResource, Extensions, HeaderMap};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        ///
        /// The `extensions` may contain the [EntityTag][super::EntityTag]
        /// returned by a previous call. Implementations return
        /// [CacheableResource::NotModified] if the headers have not changed
        /// since then.
        async fn headers(&self, extensions: Extensions) -> Result<CacheableResource<HeaderMap>>;

        /// The region associated with the credentials.
        fn region(&self) -> Option<String> {
            None
        }
    }
}

/// A builder for credentials loaded from the environment.
///
/// The builder looks for a security token in the file named by
/// `LOG_ANALYTICS_SECURITY_TOKEN_FILE`, then in the value of
/// `LOG_ANALYTICS_SECURITY_TOKEN`. Without either variable it returns
/// anonymous credentials.
///
/// # Example
/// ```
/// # use log_analytics_auth::credentials::Builder;
/// # fn sample() -> Result<(), log_analytics_auth::build_errors::Error> {
/// let credentials = Builder::default().build()?;
/// # Ok(()) }
/// ```
#[derive(Debug, Default)]
pub struct Builder {
    region: Option<String>,
}

impl Builder {
    /// Sets the region reported by the credentials.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.region = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> std::result::Result<Credentials, BuilderError> {
        let builder = if let Ok(path) = std::env::var(SECURITY_TOKEN_FILE_VAR) {
            Some(security_token::Builder::from_file(path)?)
        } else if let Ok(token) = std::env::var(SECURITY_TOKEN_VAR) {
            Some(security_token::Builder::new(token))
        } else {
            None
        };
        match (builder, self.region) {
            (Some(b), Some(region)) => b.with_region(region).build(),
            (Some(b), None) => b.build(),
            (None, Some(region)) => Ok(anonymous::Builder::new().with_region(region).build()),
            (None, None) => Ok(anonymous::Builder::new().build()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use std::io::Write;

    type TestResult = anyhow::Result<()>;

    fn new_headers(resource: CacheableResource<HeaderMap>) -> HeaderMap {
        match resource {
            CacheableResource::New { data, .. } => data,
            CacheableResource::NotModified => unreachable!("expecting new headers"),
        }
    }

    #[test]
    fn entity_tags_are_unique() {
        let a = EntityTag::new();
        let b = EntityTag::default();
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_anonymous() -> TestResult {
        let _e1 = ScopedEnv::remove(SECURITY_TOKEN_VAR);
        let _e2 = ScopedEnv::remove(SECURITY_TOKEN_FILE_VAR);
        let creds = Builder::default().build()?;
        let headers = new_headers(creds.headers(Extensions::new()).await?);
        assert!(headers.is_empty(), "{headers:?}");
        assert_eq!(creds.region(), None);
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_from_env() -> TestResult {
        let _e1 = ScopedEnv::set(SECURITY_TOKEN_VAR, "env-token");
        let _e2 = ScopedEnv::remove(SECURITY_TOKEN_FILE_VAR);
        let creds = Builder::default().with_region("us-phoenix-1").build()?;
        let headers = new_headers(creds.headers(Extensions::new()).await?);
        assert_eq!(
            headers.get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer env-token")
        );
        assert_eq!(creds.region().as_deref(), Some("us-phoenix-1"));
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn default_from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "file-token")?;
        let path = file.path().to_string_lossy().to_string();
        let _e1 = ScopedEnv::set(SECURITY_TOKEN_VAR, "env-token");
        let _e2 = ScopedEnv::set(SECURITY_TOKEN_FILE_VAR, &path);
        let creds = Builder::default().build()?;
        let headers = new_headers(creds.headers(Extensions::new()).await?);
        assert_eq!(
            headers.get(http::header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
            Some("Bearer file-token")
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn default_missing_file() {
        let _e1 = ScopedEnv::remove(SECURITY_TOKEN_VAR);
        let _e2 = ScopedEnv::set(SECURITY_TOKEN_FILE_VAR, "/does/not/exist/token");
        let err = Builder::default().build().unwrap_err();
        assert!(err.is_loading(), "{err:?}");
    }

    #[derive(Debug)]
    struct Fixed;

    #[async_trait::async_trait]
    impl dynamic::CredentialsProvider for Fixed {
        async fn headers(&self, _extensions: Extensions) -> Result<CacheableResource<HeaderMap>> {
            let mut data = HeaderMap::new();
            data.insert("x-test", http::HeaderValue::from_static("fixed"));
            Ok(CacheableResource::New {
                entity_tag: EntityTag::new(),
                data,
            })
        }
    }

    #[tokio::test]
    async fn from_custom_provider() -> TestResult {
        let creds = Credentials::from(Fixed);
        let headers = new_headers(creds.headers(Extensions::new()).await?);
        assert_eq!(
            headers.get("x-test"),
            Some(&http::HeaderValue::from_static("fixed"))
        );
        assert_eq!(creds.region(), None);
        Ok(())
    }
}

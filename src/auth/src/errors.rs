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

//! Errors returned when using credentials.

/// Represents an error using [Credentials].
///
/// The type is defined in the common types crate so the retry policies can
/// inspect it without depending on this crate.
///
/// [Credentials]: crate::credentials::Credentials
pub use gax::error::CredentialsError;

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(true)]
    #[test_case(false)]
    fn reexport(transient: bool) {
        let e = CredentialsError::from_msg(transient, "token expired");
        assert_eq!(e.is_transient(), transient, "{e:?}");
        assert!(e.to_string().contains("token expired"), "{e}");
    }
}

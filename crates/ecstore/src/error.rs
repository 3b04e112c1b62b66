// Copyright 2024 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub type Error = StorageError;
pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("invalid endpoint '{arg}': {reason}")]
    InvalidEndpoint { arg: String, reason: String },

    #[error("too few disks: {count} given, at least 6 are required")]
    TooFewDisks { count: usize },

    #[error("too many disks: {count} given, at most 16 are supported")]
    TooManyDisks { count: usize },

    #[error("disk count must be even: {count} given")]
    NotEvenDisks { count: usize },

    #[error("duplicate endpoints found: '{0}'")]
    DuplicateEndpoints(String),

    #[error("mixed scheme is not supported")]
    MixedScheme,

    #[error("ignored disk '{0}' is not one of the endpoints")]
    InvalidIgnoredDisk(String),
}

impl StorageError {
    pub fn invalid_endpoint(arg: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::InvalidEndpoint {
            arg: arg.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_cause() {
        let cases = [
            (
                StorageError::invalid_endpoint("d1", "local path must be absolute"),
                "invalid endpoint 'd1': local path must be absolute",
            ),
            (StorageError::TooFewDisks { count: 3 }, "too few disks: 3 given, at least 6 are required"),
            (StorageError::TooManyDisks { count: 17 }, "too many disks: 17 given, at most 16 are supported"),
            (StorageError::NotEvenDisks { count: 11 }, "disk count must be even: 11 given"),
            (StorageError::DuplicateEndpoints("/d1".to_owned()), "duplicate endpoints found: '/d1'"),
            (StorageError::InvalidIgnoredDisk("/d9".to_owned()), "ignored disk '/d9' is not one of the endpoints"),
        ];

        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }
}

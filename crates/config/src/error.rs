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

use ostor_credentials::CredentialsError;
use std::fmt;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config override: {}", join_override_errors(.0))]
    InvalidConfigOverride(Vec<OverrideError>),

    #[error("invalid persisted config value for '{key}' ({value:?}): {reason}")]
    InvalidPersistedValue { key: &'static str, value: String, reason: String },

    #[error("unsupported config version '{found}', expected '{expected}'")]
    UnsupportedVersion { found: String, expected: &'static str },

    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[from] CredentialsError),

    #[error("config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file '{}' is malformed: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// names of the override variables that were rejected, empty for other errors.
    pub fn override_names(&self) -> Vec<&'static str> {
        match self {
            ConfigError::InvalidConfigOverride(errs) => errs.iter().map(|e| e.name).collect(),
            _ => Vec::new(),
        }
    }
}

/// A single rejected override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideError {
    /// the override variable, e.g. `MAXCONN`
    pub name: &'static str,
    /// the offending value, `None` for credentials so secrets stay out of logs
    pub value: Option<String>,
    pub reason: String,
}

impl OverrideError {
    pub fn new(name: &'static str, value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(value.into()),
            reason: reason.into(),
        }
    }

    pub fn redacted(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            value: None,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for OverrideError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}={:?}: {}", self.name, value, self.reason),
            None => write!(f, "{}: {}", self.name, self.reason),
        }
    }
}

fn join_override_errors(errs: &[OverrideError]) -> String {
    errs.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

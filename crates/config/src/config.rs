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

use crate::{CONFIG_VERSION, DEFAULT_REGION};
use ostor_credentials::{Credentials, CredentialsError};
use serde::{Deserialize, Serialize};

/// The server configuration document kept by a [`ConfigStore`](crate::ConfigStore).
///
/// Sizing fields are stored in their human readable form (`"8GiB"`, `"72h"`) and
/// are optional; absent values fall back to the built-in defaults when the
/// runtime [`ServerConfig`](crate::ServerConfig) is assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedConfig {
    pub version: String,

    #[serde(default = "default_region")]
    pub region: String,

    pub credential: Credentials,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_size: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_expiry: Option<String>,
}

fn default_region() -> String {
    DEFAULT_REGION.to_owned()
}

impl PersistedConfig {
    /// creates a first-run config with freshly generated credentials.
    pub fn new_default() -> Result<Self, CredentialsError> {
        Ok(Self::with_credentials(Credentials::generate()?))
    }

    pub fn with_credentials(credential: Credentials) -> Self {
        Self {
            version: CONFIG_VERSION.to_owned(),
            region: default_region(),
            credential,
            max_connections: None,
            cache_size: None,
            cache_expiry: None,
        }
    }
}

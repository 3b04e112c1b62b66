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

use crate::{ENV_ACCESS_KEY, ENV_CACHE_EXPIRY, ENV_CACHE_SIZE, ENV_MAX_CONN, ENV_OVERRIDES, ENV_SECRET_KEY};
use bytesize::ByteSize;
use ostor_utils::envs::get_env_opt_str;
use std::fmt;
use std::time::Duration;

/// Raw override values collected at startup.
///
/// A variable counts as set only when it is present and non-empty.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub max_connections: Option<String>,
    pub cache_size: Option<String>,
    pub cache_expiry: Option<String>,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
}

impl fmt::Debug for EnvOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvOverrides")
            .field("max_connections", &self.max_connections)
            .field("cache_size", &self.cache_size)
            .field("cache_expiry", &self.cache_expiry)
            .field("access_key", &self.access_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "*REDACTED*"))
            .finish()
    }
}

impl EnvOverrides {
    /// reads the overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(get_env_opt_str)
    }

    /// reads the overrides through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            max_connections: get(ENV_MAX_CONN),
            cache_size: get(ENV_CACHE_SIZE),
            cache_expiry: get(ENV_CACHE_EXPIRY),
            access_key: get(ENV_ACCESS_KEY),
            secret_key: get(ENV_SECRET_KEY),
        }
    }

    /// names of the overrides that are set, in application order.
    pub fn set_names(&self) -> Vec<&'static str> {
        let values = [
            &self.max_connections,
            &self.cache_size,
            &self.cache_expiry,
            &self.access_key,
            &self.secret_key,
        ];

        ENV_OVERRIDES
            .iter()
            .zip(values)
            .filter(|(_, v)| v.is_some())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.set_names().is_empty()
    }
}

/// parses a connection limit, which must be a positive integer.
pub fn parse_max_connections(value: &str) -> Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(0) => Err("connection limit must be a positive integer".to_owned()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// parses a byte quantity such as `42MB` or `8GiB`. A bare number is rejected,
/// the unit suffix is mandatory.
pub fn parse_cache_size(value: &str) -> Result<ByteSize, String> {
    let value = value.trim();
    if !value.ends_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(format!("missing unit suffix in byte quantity '{value}'"));
    }

    value.parse::<ByteSize>()
}

/// parses a duration such as `2h45m`.
pub fn parse_cache_expiry(value: &str) -> Result<Duration, String> {
    humantime::parse_duration(value.trim()).map_err(|e| e.to_string())
}

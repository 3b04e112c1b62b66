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

// Recognized server config overrides. Names are matched case-sensitively.

/// Maximum number of concurrent client connections, a positive integer
pub const ENV_MAX_CONN: &str = "MAXCONN";

/// Object cache size, a byte quantity with unit suffix such as `42MB`
pub const ENV_CACHE_SIZE: &str = "CACHE_SIZE";

/// Object cache expiry, a duration such as `2h45m`
pub const ENV_CACHE_EXPIRY: &str = "CACHE_EXPIRY";

pub const ENV_ACCESS_KEY: &str = "ACCESS_KEY";

pub const ENV_SECRET_KEY: &str = "SECRET_KEY";

/// All recognized overrides, in the order they are applied
pub const ENV_OVERRIDES: [&str; 5] = [ENV_MAX_CONN, ENV_CACHE_SIZE, ENV_CACHE_EXPIRY, ENV_ACCESS_KEY, ENV_SECRET_KEY];

// Command line fallbacks

pub const ENV_ADDRESS: &str = "OSTOR_ADDRESS";

pub const ENV_CONFIG_DIR: &str = "OSTOR_CONFIG_DIR";

pub const ENV_TLS: &str = "OSTOR_TLS";

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

use const_str::concat;

/// Application name
pub const APP_NAME: &str = "ostor";

/// Default log level for the server
/// Overridden through `RUST_LOG`
pub const DEFAULT_LOG_LEVEL: &str = "info";

pub const DEFAULT_PORT: u16 = 9000;

/// Default bind address, all interfaces on the default port
pub const DEFAULT_ADDRESS: &str = concat!(":", DEFAULT_PORT);

pub const DEFAULT_REGION: &str = "us-east-1";

/// Directory name, under the user's home, holding the persisted config
pub const DEFAULT_CONFIG_DIR_NAME: &str = concat!(".", APP_NAME);

pub const CONFIG_FILE: &str = "config.json";

/// Version of the persisted config document
pub const CONFIG_VERSION: &str = "1";

/// Default object cache size, used when the persisted config carries none
pub const DEFAULT_CACHE_SIZE: &str = "8GiB";

/// Default object cache expiry, used when the persisted config carries none
pub const DEFAULT_CACHE_EXPIRY: &str = "72h";

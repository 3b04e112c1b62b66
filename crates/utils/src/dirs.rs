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

use std::path::PathBuf;

/// Get the directory holding the persisted server configuration
///
/// Resolves to `<home>/<dir_name>`, `None` when the home directory of the
/// current user cannot be determined.
pub fn get_config_dir(dir_name: &str) -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(dir_name))
}

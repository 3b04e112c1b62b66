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

use crate::error::{ConfigError, Result};
use crate::{CONFIG_FILE, PersistedConfig};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Where the persisted server configuration lives.
///
/// `load` returns `Ok(None)` when nothing has been saved yet.
pub trait ConfigStore {
    fn load(&self) -> Result<Option<PersistedConfig>>;

    fn save(&self, config: &PersistedConfig) -> Result<()>;
}

/// JSON file store, `<dir>/config.json`.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(CONFIG_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> ConfigError {
        ConfigError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Result<Option<PersistedConfig>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("config file {} not found", self.path.display());
                return Ok(None);
            }
            Err(e) => return Err(self.io_err(e)),
        };

        let cfg = serde_json::from_slice(&data).map_err(|source| ConfigError::Json {
            path: self.path.clone(),
            source,
        })?;

        Ok(Some(cfg))
    }

    fn save(&self, config: &PersistedConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }

        let data = serde_json::to_vec_pretty(config).map_err(|source| ConfigError::Json {
            path: self.path.clone(),
            source,
        })?;

        // write next to the target and rename, a crash never leaves a truncated config
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;

        debug!("config saved to {}", self.path.display());

        Ok(())
    }
}

/// In-memory store for tests and embedders that keep config elsewhere.
#[derive(Debug, Default)]
pub struct MemoryConfigStore {
    inner: Mutex<Option<PersistedConfig>>,
}

impl MemoryConfigStore {
    pub fn new(config: Option<PersistedConfig>) -> Self {
        Self {
            inner: Mutex::new(config),
        }
    }

    pub fn get(&self) -> Option<PersistedConfig> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ConfigStore for MemoryConfigStore {
    fn load(&self) -> Result<Option<PersistedConfig>> {
        Ok(self.get())
    }

    fn save(&self, config: &PersistedConfig) -> Result<()> {
        *self.inner.lock().unwrap_or_else(|e| e.into_inner()) = Some(config.clone());
        Ok(())
    }
}

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

use crate::error::{ConfigError, OverrideError, Result};
use crate::overrides::{EnvOverrides, parse_cache_expiry, parse_cache_size, parse_max_connections};
use crate::{
    CONFIG_VERSION, ConfigStore, DEFAULT_CACHE_EXPIRY, DEFAULT_CACHE_SIZE, ENV_ACCESS_KEY, ENV_CACHE_EXPIRY, ENV_CACHE_SIZE,
    ENV_MAX_CONN, ENV_SECRET_KEY, PersistedConfig,
};
use bytesize::ByteSize;
use ostor_credentials::{Credentials, is_access_key_valid, is_secret_key_valid};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Runtime configuration of the server.
///
/// Assembled once at startup from the persisted config and the environment
/// overrides, then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub region: String,
    pub credentials: Credentials,
    /// `None` means unlimited
    pub max_connections: Option<u32>,
    pub cache_size: ByteSize,
    pub cache_expiry: Duration,
}

impl ServerConfig {
    /// loads the persisted config, creating and saving a default one on first
    /// start, then applies the overrides on top.
    pub fn assemble(store: &impl ConfigStore, overrides: &EnvOverrides) -> Result<Self> {
        let persisted = match store.load()? {
            Some(persisted) => persisted,
            None => {
                let persisted = PersistedConfig::new_default()?;
                store.save(&persisted)?;
                info!(
                    "no persisted config found, generated new credentials, access key: {}",
                    persisted.credential.access_key
                );
                persisted
            }
        };

        let mut cfg = Self::from_persisted(&persisted)?;
        cfg.apply_overrides(overrides)?;

        debug!("server config: {:?}", cfg);

        Ok(cfg)
    }

    /// converts the persisted document, filling absent sizing fields with the defaults.
    pub fn from_persisted(persisted: &PersistedConfig) -> Result<Self> {
        if persisted.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: persisted.version.clone(),
                expected: CONFIG_VERSION,
            });
        }

        persisted.credential.validate()?;

        let max_connections = match persisted.max_connections {
            Some(0) => {
                return Err(ConfigError::InvalidPersistedValue {
                    key: "maxConnections",
                    value: "0".to_owned(),
                    reason: "connection limit must be a positive integer".to_owned(),
                });
            }
            other => other,
        };

        let cache_size = persisted.cache_size.as_deref().unwrap_or(DEFAULT_CACHE_SIZE);
        let cache_size = parse_cache_size(cache_size).map_err(|reason| ConfigError::InvalidPersistedValue {
            key: "cacheSize",
            value: cache_size.to_owned(),
            reason,
        })?;

        let cache_expiry = persisted.cache_expiry.as_deref().unwrap_or(DEFAULT_CACHE_EXPIRY);
        let cache_expiry = parse_cache_expiry(cache_expiry).map_err(|reason| ConfigError::InvalidPersistedValue {
            key: "cacheExpiry",
            value: cache_expiry.to_owned(),
            reason,
        })?;

        Ok(Self {
            region: persisted.region.clone(),
            credentials: persisted.credential.clone(),
            max_connections,
            cache_size,
            cache_expiry,
        })
    }

    /// overlays the set overrides in a fixed order. Every override is checked,
    /// failures are reported together and leave `self` untouched.
    pub fn apply_overrides(&mut self, overrides: &EnvOverrides) -> Result<()> {
        let mut next = self.clone();
        let mut errs = Vec::new();

        if let Some(v) = &overrides.max_connections {
            match parse_max_connections(v) {
                Ok(n) => next.max_connections = Some(n),
                Err(reason) => errs.push(OverrideError::new(ENV_MAX_CONN, v, reason)),
            }
        }

        if let Some(v) = &overrides.cache_size {
            match parse_cache_size(v) {
                Ok(size) => next.cache_size = size,
                Err(reason) => errs.push(OverrideError::new(ENV_CACHE_SIZE, v, reason)),
            }
        }

        if let Some(v) = &overrides.cache_expiry {
            match parse_cache_expiry(v) {
                Ok(expiry) => next.cache_expiry = expiry,
                Err(reason) => errs.push(OverrideError::new(ENV_CACHE_EXPIRY, v, reason)),
            }
        }

        if let Some(v) = &overrides.access_key {
            if is_access_key_valid(v) {
                next.credentials.access_key = v.clone();
            } else {
                errs.push(OverrideError::redacted(
                    ENV_ACCESS_KEY,
                    format!("access key length should be between 5 and 20, got {}", v.len()),
                ));
            }
        }

        if let Some(v) = &overrides.secret_key {
            if is_secret_key_valid(v) {
                next.credentials.secret_key = v.clone();
            } else {
                errs.push(OverrideError::redacted(
                    ENV_SECRET_KEY,
                    format!("secret key length should be between 8 and 40, got {}", v.len()),
                ));
            }
        }

        if !errs.is_empty() {
            return Err(ConfigError::InvalidConfigOverride(errs));
        }

        if next.credentials != self.credentials {
            warn!("root credentials overridden from the environment, access key: {}", next.credentials.access_key);
        }

        *self = next;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FileConfigStore, MemoryConfigStore};

    fn persisted() -> PersistedConfig {
        PersistedConfig::with_credentials(Credentials::new("abcd1", "abcd12345").unwrap())
    }

    fn overrides(pairs: &[(&str, &str)]) -> EnvOverrides {
        let pairs: Vec<(String, String)> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        EnvOverrides::from_lookup(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone()))
    }

    #[test]
    fn test_assemble_defaults_without_overrides() {
        let store = MemoryConfigStore::new(Some(persisted()));
        let cfg = ServerConfig::assemble(&store, &EnvOverrides::default()).unwrap();

        assert_eq!(cfg.region, "us-east-1");
        assert_eq!(cfg.credentials.access_key, "abcd1");
        assert_eq!(cfg.credentials.secret_key, "abcd12345");
        assert_eq!(cfg.max_connections, None);
        assert_eq!(cfg.cache_size, ByteSize::gib(8));
        assert_eq!(cfg.cache_expiry, Duration::from_secs(72 * 3600));
    }

    #[test]
    fn test_assemble_first_start_generates_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileConfigStore::new(dir.path());
        assert_eq!(store.load().unwrap(), None);

        let cfg = ServerConfig::assemble(&store, &EnvOverrides::default()).unwrap();
        assert_eq!(cfg.credentials.access_key.len(), 20);
        assert_eq!(cfg.credentials.secret_key.len(), 40);

        let saved = store.load().unwrap().unwrap();
        assert_eq!(saved.credential, cfg.credentials);

        // a second start reuses what was saved
        let again = ServerConfig::assemble(&store, &EnvOverrides::default()).unwrap();
        assert_eq!(again.credentials, cfg.credentials);
    }

    #[test]
    fn test_assemble_applies_overrides() {
        let store = MemoryConfigStore::new(Some(persisted()));
        let cfg = ServerConfig::assemble(
            &store,
            &overrides(&[
                ("MAXCONN", "10"),
                ("CACHE_SIZE", "42MB"),
                ("CACHE_EXPIRY", "2h45m"),
                ("ACCESS_KEY", "newaccess"),
                ("SECRET_KEY", "newsecret123"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.max_connections, Some(10));
        assert_eq!(cfg.cache_size.as_u64(), 42_000_000);
        assert_eq!(cfg.cache_expiry, Duration::from_secs(2 * 3600 + 45 * 60));
        assert_eq!(cfg.credentials.access_key, "newaccess");
        assert_eq!(cfg.credentials.secret_key, "newsecret123");

        // overrides are not written back
        assert_eq!(store.get().unwrap(), persisted());
    }

    #[test]
    fn test_override_leaves_other_fields() {
        let store = MemoryConfigStore::new(Some(persisted()));
        let cfg = ServerConfig::assemble(&store, &overrides(&[("MAXCONN", "10")])).unwrap();

        assert_eq!(cfg.max_connections, Some(10));
        assert_eq!(cfg.cache_size, ByteSize::gib(8));
        assert_eq!(cfg.cache_expiry, Duration::from_secs(72 * 3600));
        assert_eq!(cfg.credentials.access_key, "abcd1");
    }

    #[test]
    fn test_invalid_overrides_reported_together() {
        let store = MemoryConfigStore::new(Some(persisted()));
        let err = ServerConfig::assemble(
            &store,
            &overrides(&[("MAXCONN", "ten"), ("CACHE_SIZE", "42"), ("CACHE_EXPIRY", "2h45m")]),
        )
        .unwrap_err();

        assert!(matches!(err, ConfigError::InvalidConfigOverride(_)), "{err}");
        assert_eq!(err.override_names(), vec!["MAXCONN", "CACHE_SIZE"]);
        let msg = err.to_string();
        assert!(msg.contains("MAXCONN"), "{msg}");
        assert!(msg.contains("CACHE_SIZE"), "{msg}");
    }

    #[test]
    fn test_invalid_override_cases() {
        let cases = [
            ("MAXCONN", "0"),
            ("MAXCONN", "-5"),
            ("CACHE_SIZE", "lots"),
            ("CACHE_EXPIRY", "forever"),
            ("ACCESS_KEY", "abc"),
            ("ACCESS_KEY", "abcdefghijklmnopqrstu"),
            ("SECRET_KEY", "short"),
        ];

        for (name, value) in cases {
            let mut cfg = ServerConfig::from_persisted(&persisted()).unwrap();
            let before = cfg.clone();
            let err = cfg.apply_overrides(&overrides(&[(name, value)])).unwrap_err();
            assert_eq!(err.override_names(), vec![name], "{name}={value}");
            assert_eq!(cfg, before, "{name}={value}: config must stay untouched");
        }
    }

    #[test]
    fn test_credential_override_errors_hide_value() {
        let mut cfg = ServerConfig::from_persisted(&persisted()).unwrap();
        let err = cfg.apply_overrides(&overrides(&[("SECRET_KEY", "s3cr")])).unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("SECRET_KEY"), "{msg}");
        assert!(!msg.contains("s3cr"), "{msg}");
    }

    #[test]
    fn test_from_persisted() {
        let mut p = persisted();
        p.max_connections = Some(128);
        p.cache_size = Some("1GiB".to_owned());
        p.cache_expiry = Some("30m".to_owned());
        p.region = "eu-west-1".to_owned();

        let cfg = ServerConfig::from_persisted(&p).unwrap();
        assert_eq!(cfg.max_connections, Some(128));
        assert_eq!(cfg.cache_size, ByteSize::gib(1));
        assert_eq!(cfg.cache_expiry, Duration::from_secs(30 * 60));
        assert_eq!(cfg.region, "eu-west-1");
    }

    #[test]
    fn test_from_persisted_rejects_bad_documents() {
        let mut p = persisted();
        p.version = "0".to_owned();
        assert!(matches!(ServerConfig::from_persisted(&p), Err(ConfigError::UnsupportedVersion { .. })));

        let mut p = persisted();
        p.credential.secret_key = "short".to_owned();
        assert!(matches!(ServerConfig::from_persisted(&p), Err(ConfigError::InvalidCredentials(_))));

        let mut p = persisted();
        p.max_connections = Some(0);
        assert!(matches!(
            ServerConfig::from_persisted(&p),
            Err(ConfigError::InvalidPersistedValue { key: "maxConnections", .. })
        ));

        let mut p = persisted();
        p.cache_size = Some("8".to_owned());
        assert!(matches!(
            ServerConfig::from_persisted(&p),
            Err(ConfigError::InvalidPersistedValue { key: "cacheSize", .. })
        ));

        let mut p = persisted();
        p.cache_expiry = Some("soon".to_owned());
        assert!(matches!(
            ServerConfig::from_persisted(&p),
            Err(ConfigError::InvalidPersistedValue { key: "cacheExpiry", .. })
        ));
    }
}

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

use clap::Parser;
use ostor_config::{DEFAULT_ADDRESS, DEFAULT_CONFIG_DIR_NAME, ENV_ADDRESS, ENV_CONFIG_DIR, ENV_TLS};
use ostor_utils::dirs::get_config_dir;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(version, about)]
pub struct Opt {
    /// DIR points to a directory on a filesystem, or http(s)://HOST:PORT/DIR to a remote disk.
    #[arg(required = true)]
    pub volumes: Vec<String>,

    /// bind to a specific ADDRESS:PORT, ADDRESS can be an IP or hostname, empty for all interfaces
    #[arg(long, default_value_t = DEFAULT_ADDRESS.to_string(), env = ENV_ADDRESS)]
    pub address: String,

    /// Advertise https endpoints.
    #[arg(long, env = ENV_TLS)]
    pub tls: bool,

    /// Directory holding config.json, defaults to `~/.ostor`.
    #[arg(long, env = ENV_CONFIG_DIR)]
    pub config_dir: Option<PathBuf>,

    /// Disks to leave out of service, each must be one of the volumes.
    #[arg(long, value_delimiter = ',')]
    pub ignore_disks: Vec<String>,
}

impl Opt {
    /// the `--config-dir` given, else `.ostor` under the user's home directory.
    pub fn config_dir(&self) -> std::io::Result<PathBuf> {
        match &self.config_dir {
            Some(dir) => Ok(dir.clone()),
            None => get_config_dir(DEFAULT_CONFIG_DIR_NAME)
                .ok_or_else(|| std::io::Error::other("unable to locate the home directory, pass --config-dir")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::try_parse_from(["ostor", "/mnt/disk1"]).unwrap();
        assert_eq!(opt.volumes, vec!["/mnt/disk1"]);
        assert_eq!(opt.address, ":9000");
        assert!(!opt.tls);
        assert!(opt.ignore_disks.is_empty());
        assert!(opt.config_dir().unwrap().ends_with(".ostor"));
    }

    #[test]
    fn test_opt_flags() {
        let opt = Opt::try_parse_from([
            "ostor",
            "--address",
            "127.0.0.1:9001",
            "--tls",
            "--config-dir",
            "/etc/ostor",
            "--ignore-disks",
            "/mnt/disk2,/mnt/disk3",
            "/mnt/disk1",
            "/mnt/disk2",
        ])
        .unwrap();

        assert_eq!(opt.address, "127.0.0.1:9001");
        assert!(opt.tls);
        assert_eq!(opt.config_dir().unwrap(), PathBuf::from("/etc/ostor"));
        assert_eq!(opt.ignore_disks, vec!["/mnt/disk2", "/mnt/disk3"]);
        assert_eq!(opt.volumes, vec!["/mnt/disk1", "/mnt/disk2"]);
    }

    #[test]
    fn test_opt_requires_volumes() {
        assert!(Opt::try_parse_from(["ostor"]).is_err());
    }
}

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

use crate::config::Opt;
use crate::error::Result;
use crate::server::{ListenPlan, resolve_listen_plan};
use ostor_config::{EnvOverrides, FileConfigStore, ServerConfig};
use ostor_ecstore::{Endpoints, SetupType, validate_disks};
use ostor_utils::LocalAddrs;
use std::sync::Arc;
use tracing::info;

/// What the server runs with once every startup check has passed.
#[derive(Debug)]
pub(crate) struct ServerState {
    pub endpoints: Endpoints,
    pub setup_type: SetupType,
    pub listen: ListenPlan,
    pub config: Arc<ServerConfig>,
}

/// parses and validates the disks, plans the listener and assembles the config.
pub(crate) async fn bootstrap<L>(opt: &Opt, local: L, overrides: EnvOverrides) -> Result<ServerState>
where
    L: LocalAddrs + Send + 'static,
{
    let endpoints = Endpoints::try_from(opt.volumes.as_slice())?;
    let setup_type = validate_disks(&endpoints, &opt.ignore_disks)?;
    info!(
        "created {} endpoints, setup type: {:?}, distributed: {}",
        endpoints.len(),
        setup_type,
        endpoints.is_distributed()
    );

    let address = opt.address.clone();
    let tls = opt.tls;
    let listen = tokio::task::spawn_blocking(move || resolve_listen_plan(&address, tls, &local)).await??;
    for endpoint in &listen.endpoints {
        info!("API endpoint: {}", endpoint);
    }

    if !overrides.is_empty() {
        info!("config overrides set: {}", overrides.set_names().join(", "));
    }
    let store = FileConfigStore::new(opt.config_dir()?);
    info!("using config file {}", store.path().display());
    let config = tokio::task::spawn_blocking(move || ServerConfig::assemble(&store, &overrides)).await??;

    Ok(ServerState {
        endpoints,
        setup_type,
        listen,
        config: Arc::new(config),
    })
}

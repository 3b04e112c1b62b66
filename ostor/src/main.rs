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

mod config;
mod error;
mod server;
mod startup;

use clap::Parser;
use error::Result;
use ostor_config::{DEFAULT_LOG_LEVEL, EnvOverrides};
use ostor_utils::NetifAddrs;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let enable_color = std::io::stdout().is_terminal();

    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_ansi(enable_color)
        .finish()
        .with(ErrorLayer::default());

    if let Err(err) = subscriber.try_init() {
        eprintln!("failed to set global default subscriber: {err}");
    }
}

fn main() -> ExitCode {
    let opt = config::Opt::parse();

    setup_tracing();

    match run(opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("server startup failed: {err}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn run(opt: config::Opt) -> Result<()> {
    debug!("opt: {:?}", &opt);

    let state = startup::bootstrap(&opt, NetifAddrs, EnvOverrides::from_env()).await?;
    info!(
        "server ready, region: {}, setup type: {:?}, listening on {:?} port {}",
        state.config.region, state.setup_type, state.listen.hosts, state.listen.port
    );

    let signal = server::wait_for_shutdown().await?;
    debug!("shutting down on {:?}, {} disks released", signal, state.endpoints.len());

    Ok(())
}

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

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    CtrlC,
    #[cfg(unix)]
    Sigint,
    #[cfg(unix)]
    Sigterm,
}

#[cfg(unix)]
pub(crate) async fn wait_for_shutdown() -> std::io::Result<ShutdownSignal> {
    use tokio::signal::unix::{SignalKind, signal};
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    let sig = tokio::select! {
        _ = tokio::signal::ctrl_c() => ShutdownSignal::CtrlC,
        _ = sigint.recv() => ShutdownSignal::Sigint,
        _ = sigterm.recv() => ShutdownSignal::Sigterm,
    };
    info!("received {:?} signal", sig);

    Ok(sig)
}

#[cfg(not(unix))]
pub(crate) async fn wait_for_shutdown() -> std::io::Result<ShutdownSignal> {
    tokio::signal::ctrl_c().await?;
    info!("received Ctrl-C signal");

    Ok(ShutdownSignal::CtrlC)
}

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

use std::io::{Error, Result};
use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use tracing::debug;
use url::Url;

pub const HTTP_SCHEME: &str = "http";

pub const HTTPS_SCHEME: &str = "https";

/// helper for validating if the provided arg is an ip address.
pub fn is_socket_addr(addr: &str) -> bool {
    addr.parse::<SocketAddr>().is_ok() || addr.parse::<IpAddr>().is_ok()
}

/// splits a network address of the form "host:port", "[host]:port" or ":port"
/// into host and port. The port may come back empty ("host:"), the caller decides
/// whether that is acceptable.
pub fn split_host_port(addr: &str) -> Result<(String, String)> {
    if let Some(rest) = addr.strip_prefix('[') {
        let Some((host, after)) = rest.split_once(']') else {
            return Err(Error::other(format!("address {addr}: missing ']' in address")));
        };
        let Some(port) = after.strip_prefix(':') else {
            return Err(Error::other(format!("address {addr}: missing port in address")));
        };
        if port.contains(':') {
            return Err(Error::other(format!("address {addr}: too many colons in address")));
        }
        return Ok((host.to_owned(), port.to_owned()));
    }

    let Some((host, port)) = addr.rsplit_once(':') else {
        return Err(Error::other(format!("address {addr}: missing port in address")));
    };
    if host.contains(':') {
        return Err(Error::other(format!("address {addr}: too many colons in address")));
    }

    Ok((host.to_owned(), port.to_owned()))
}

/// combines host and port into "host:port", bracketing IPv6 literals.
pub fn join_host_port(host: &str, port: &str) -> String {
    if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
}

/// returns the IP addresses of the given host, in resolver order and without
/// duplicates. IP literals are returned as is without touching the resolver.
pub fn get_host_ips(host: &str) -> Result<Vec<IpAddr>> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(vec![ip]);
    }

    let addrs = (host, 0).to_socket_addrs().map_err(Error::other)?;

    let mut ips: Vec<IpAddr> = Vec::new();
    for addr in addrs {
        if !ips.contains(&addr.ip()) {
            ips.push(addr.ip());
        }
    }

    debug!("get_host_ips host={} ips={:?}", host, ips);

    Ok(ips)
}

/// returns IPs of local interfaces which are up.
pub fn must_get_local_ips() -> Result<Vec<IpAddr>> {
    let up = netif::up().map_err(|err| Error::other(format!("Unable to get IP addresses of this host: {err}")))?;

    let mut ips: Vec<IpAddr> = Vec::new();
    for iface in up {
        let ip = iface.address().to_owned();
        if !ips.contains(&ip) {
            ips.push(ip);
        }
    }

    Ok(ips)
}

/// Source of the addresses this machine can bind to.
///
/// Interface tables differ per platform; the listen planner only needs the
/// resulting list, so it takes this capability instead of calling the OS directly.
pub trait LocalAddrs {
    fn local_ips(&self) -> Result<Vec<IpAddr>>;
}

/// Reads the interface table of the running machine, skipping interfaces that are down.
#[derive(Debug, Default, Clone, Copy)]
pub struct NetifAddrs;

impl LocalAddrs for NetifAddrs {
    fn local_ips(&self) -> Result<Vec<IpAddr>> {
        must_get_local_ips()
    }
}

impl LocalAddrs for Vec<IpAddr> {
    fn local_ips(&self) -> Result<Vec<IpAddr>> {
        Ok(self.clone())
    }
}

/// builds `http(s)://host:port` for a listen address. The port is kept even when
/// it is the scheme default, so the result always names the listening port.
pub fn get_endpoint_url(host: &str, port: &str, secure: bool) -> Result<String> {
    let scheme = if secure { HTTPS_SCHEME } else { HTTP_SCHEME };

    let endpoint_url_str = format!("{scheme}://{}", join_host_port(host, port));
    if let Err(e) = Url::parse(&endpoint_url_str) {
        return Err(Error::other(format!("url parse error: {endpoint_url_str}: {e}")));
    }

    Ok(endpoint_url_str)
}

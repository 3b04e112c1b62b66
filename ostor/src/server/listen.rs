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

use ostor_utils::{LocalAddrs, get_endpoint_url, get_host_ips, split_host_port};
use std::io;
use std::net::IpAddr;
use tracing::debug;

/// Where the server listens, and the URLs it is reachable at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenPlan {
    /// never empty
    pub hosts: Vec<IpAddr>,
    /// the requested port, exactly as given
    pub port: String,
    /// `http(s)://ip:port`, one per host
    pub endpoints: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ListenError {
    #[error("invalid bind address '{addr}': {reason}")]
    InvalidBindAddress { addr: String, reason: String },

    #[error("unable to resolve host '{host}': {source}")]
    UnresolvableHost {
        host: String,
        #[source]
        source: io::Error,
    },

    #[error("no local address to listen on: {0}")]
    NoInterfaceAddress(#[source] io::Error),
}

/// resolves `bind` (`host:port`, host may be empty) into the addresses to listen on.
///
/// An empty host means every address of the interfaces that are up, as reported by
/// `local`. Resolution runs once, failures are returned as is.
pub fn resolve_listen_plan(bind: &str, tls: bool, local: &impl LocalAddrs) -> Result<ListenPlan, ListenError> {
    let invalid = |reason: String| ListenError::InvalidBindAddress {
        addr: bind.to_owned(),
        reason,
    };

    let (host, port) = split_host_port(bind).map_err(|e| invalid(e.to_string()))?;
    if port.is_empty() {
        return Err(invalid("missing port".to_owned()));
    }
    if port.parse::<u16>().is_err() {
        return Err(invalid(format!("port '{port}' must be a number between 0 and 65535")));
    }

    let hosts = if host.is_empty() {
        let ips = local.local_ips().map_err(ListenError::NoInterfaceAddress)?;
        if ips.is_empty() {
            return Err(ListenError::NoInterfaceAddress(io::Error::other("no network interface is up")));
        }
        ips
    } else {
        let ips = get_host_ips(&host).map_err(|source| ListenError::UnresolvableHost {
            host: host.clone(),
            source,
        })?;
        if ips.is_empty() {
            return Err(ListenError::UnresolvableHost {
                host,
                source: io::Error::other("host resolved to no addresses"),
            });
        }
        ips
    };

    let endpoints = hosts
        .iter()
        .map(|ip| get_endpoint_url(&ip.to_string(), &port, tls))
        .collect::<io::Result<Vec<_>>>()
        .map_err(|e| invalid(e.to_string()))?;

    debug!("resolve_listen_plan: bind={}, hosts={:?}, port={}", bind, hosts, port);

    Ok(ListenPlan { hosts, port, endpoints })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ostor_utils::NetifAddrs;
    use std::net::{Ipv4Addr, Ipv6Addr};

    struct BrokenAddrs;

    impl LocalAddrs for BrokenAddrs {
        fn local_ips(&self) -> io::Result<Vec<IpAddr>> {
            Err(io::Error::other("interface table unavailable"))
        }
    }

    fn stub() -> Vec<IpAddr> {
        vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1)), IpAddr::V6(Ipv6Addr::LOCALHOST)]
    }

    #[test]
    fn test_resolve_listen_plan() {
        let test_cases = [("localhost:9000", "9000", true), (":9000", "9000", true), ("", "", false)];

        for (addr, port, should_pass) in test_cases {
            let ret = resolve_listen_plan(addr, false, &stub());
            match (should_pass, ret) {
                (true, Ok(plan)) => {
                    assert_eq!(plan.port, port, "{addr}");
                    assert!(!plan.hosts.is_empty(), "{addr}: hosts cannot be empty");
                    assert_eq!(plan.hosts.len(), plan.endpoints.len(), "{addr}");
                }
                (true, Err(e)) => panic!("{addr}: should succeed but failed: {e}"),
                (false, Ok(plan)) => panic!("{addr}: should fail but succeeded: {plan:?}"),
                (false, Err(e)) => assert!(matches!(e, ListenError::InvalidBindAddress { .. }), "{addr}: {e}"),
            }
        }
    }

    #[test]
    fn test_resolve_listen_plan_all_interfaces() {
        let plan = resolve_listen_plan(":9000", false, &stub()).unwrap();
        assert_eq!(plan.hosts, stub());
        assert_eq!(plan.endpoints, vec!["http://10.0.0.1:9000", "http://[::1]:9000"]);

        let plan = resolve_listen_plan(":9000", false, &NetifAddrs).unwrap();
        assert!(!plan.hosts.is_empty());
        assert_eq!(plan.port, "9000");
    }

    #[test]
    fn test_resolve_listen_plan_endpoints() {
        let test_cases = [
            (false, ":80", "http://10.0.0.1:80"),
            (true, ":80", "https://10.0.0.1:80"),
            (false, "127.0.0.1:80", "http://127.0.0.1:80"),
            (true, "127.0.0.1:443", "https://127.0.0.1:443"),
            (false, "[::1]:9000", "http://[::1]:9000"),
        ];

        for (tls, addr, first) in test_cases {
            let plan = resolve_listen_plan(addr, tls, &stub()).unwrap();
            assert_eq!(plan.endpoints[0], first, "{addr} tls={tls}");
        }

        for tls in [false, true] {
            let plan = resolve_listen_plan("localhost:80", tls, &stub()).unwrap();
            assert!(!plan.endpoints.is_empty());
            let scheme = if tls { "https://" } else { "http://" };
            assert!(plan.endpoints.iter().all(|ep| ep.starts_with(scheme)), "{:?}", plan.endpoints);
            assert!(plan.hosts.iter().all(|ip| ip.is_loopback()), "{:?}", plan.hosts);
        }
    }

    #[test]
    fn test_resolve_listen_plan_port_is_echoed() {
        let plan = resolve_listen_plan("127.0.0.1:09000", false, &stub()).unwrap();
        assert_eq!(plan.port, "09000");
    }

    #[test]
    fn test_resolve_listen_plan_errors() {
        for addr in ["", "localhost", "localhost:", ":", "127.0.0.1:http", "127.0.0.1:70000", "::1:9000"] {
            let err = resolve_listen_plan(addr, false, &stub()).unwrap_err();
            assert!(matches!(err, ListenError::InvalidBindAddress { .. }), "{addr}: {err}");
            assert!(err.to_string().contains(&format!("'{addr}'")), "{addr}: {err}");
        }

        let err = resolve_listen_plan(":9000", false, &Vec::<IpAddr>::new()).unwrap_err();
        assert!(matches!(err, ListenError::NoInterfaceAddress(_)), "{err}");

        let err = resolve_listen_plan(":9000", false, &BrokenAddrs).unwrap_err();
        assert!(matches!(err, ListenError::NoInterfaceAddress(_)), "{err}");
        assert!(err.to_string().contains("interface table unavailable"), "{err}");

        let err = resolve_listen_plan("invalid.nonexistent.domain.example:9000", false, &stub()).unwrap_err();
        assert!(matches!(&err, ListenError::UnresolvableHost { host, .. } if host == "invalid.nonexistent.domain.example"));
    }
}

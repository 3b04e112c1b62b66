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

use crate::error::{Error, Result};
use ostor_utils::{HTTP_SCHEME, HTTPS_SCHEME, is_socket_addr, join_host_port, split_host_port};
use std::{fmt::Display, path::Path};
use tracing::debug;
use url::Url;

/// enum for endpoint type.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum EndpointType {
    /// path style endpoint type enum.
    Path,

    /// URL style endpoint type enum.
    Url,
}

/// where the disk of an endpoint lives.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum EndpointLocation {
    /// a disk of this process, addressed by path only.
    Local,

    /// a disk reached over the network.
    Remote { scheme: String, host: String, port: u16 },
}

/// one disk location given on the command line.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct Endpoint {
    pub location: EndpointLocation,
    pub path: String,
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.location {
            EndpointLocation::Local => write!(f, "{}", self.path),
            EndpointLocation::Remote { scheme, .. } => write!(f, "{}://{}{}", scheme, self.host_port(), self.path),
        }
    }
}

impl TryFrom<&str> for Endpoint {
    /// The type returned in the event of a conversion error.
    type Error = Error;

    /// Performs the conversion.
    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        // check whether given path is not empty.
        if ["", "/", "\\"].contains(&value) {
            return Err(Error::invalid_endpoint(value, "empty or root endpoint is not supported"));
        }

        match value.split_once("://") {
            Some((scheme, rest)) => parse_url_endpoint(value, scheme, rest),
            None => parse_path_endpoint(value),
        }
    }
}

impl Endpoint {
    /// returns type of endpoint.
    pub fn get_type(&self) -> EndpointType {
        match self.location {
            EndpointLocation::Local => EndpointType::Path,
            EndpointLocation::Remote { .. } => EndpointType::Url,
        }
    }

    pub fn is_local(&self) -> bool {
        self.location == EndpointLocation::Local
    }

    /// `http` or `https`, empty for local endpoints.
    pub fn scheme(&self) -> &str {
        match &self.location {
            EndpointLocation::Local => "",
            EndpointLocation::Remote { scheme, .. } => scheme,
        }
    }

    /// empty for local endpoints.
    pub fn host(&self) -> &str {
        match &self.location {
            EndpointLocation::Local => "",
            EndpointLocation::Remote { host, .. } => host,
        }
    }

    /// empty for local endpoints.
    pub fn port(&self) -> String {
        match &self.location {
            EndpointLocation::Local => String::new(),
            EndpointLocation::Remote { port, .. } => port.to_string(),
        }
    }

    /// `host:port` of a remote endpoint, empty for local endpoints.
    pub fn host_port(&self) -> String {
        match &self.location {
            EndpointLocation::Local => String::new(),
            EndpointLocation::Remote { host, port, .. } => join_host_port(host, &port.to_string()),
        }
    }

    pub fn get_file_path(&self) -> &str {
        &self.path
    }
}

fn parse_url_endpoint(arg: &str, scheme: &str, rest: &str) -> Result<Endpoint> {
    let invalid = |reason: &str| Error::invalid_endpoint(arg, format!("invalid URL endpoint format: {reason}"));

    // Valid URL style endpoint is
    // - Scheme field must contain "http" or "https"
    // - All field should be empty except Host, Port and Path.
    let scheme = scheme.to_ascii_lowercase();
    if scheme != HTTP_SCHEME && scheme != HTTPS_SCHEME {
        return Err(invalid("scheme must be http or https"));
    }

    let (authority, path) = match rest.find('/') {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    };

    if authority.is_empty() {
        return Err(invalid("empty host name"));
    }

    let (host, port) = split_host_port(authority).map_err(|e| invalid(&e.to_string()))?;
    if host.is_empty() {
        return Err(invalid("empty host name"));
    }
    if port.is_empty() {
        return Err(invalid("missing port number"));
    }
    let port = match port.parse::<u16>() {
        Ok(port) if port > 0 => port,
        _ => return Err(invalid("port number must be between 1 to 65535")),
    };

    let path = if cfg!(windows) { trim_drive_separator(path) } else { path };
    if path.trim_matches(['/', '\\']).is_empty() {
        return Err(Error::invalid_endpoint(arg, "empty or root path is not supported in URL endpoint"));
    }

    let url = Url::parse(arg).map_err(|e| invalid(&e.to_string()))?;
    if !url.username().is_empty() || url.password().is_some() || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("only host, port and path are allowed"));
    }

    debug!("endpoint try_from: scheme={}, host={}, port={}, path={}", scheme, host, port, path);

    Ok(Endpoint {
        location: EndpointLocation::Remote { scheme, host, port },
        path: path.to_owned(),
    })
}

fn parse_path_endpoint(value: &str) -> Result<Endpoint> {
    // Only check if the arg is an ip address and ask for scheme since its absent.
    // localhost, example.com, any FQDN cannot be disambiguated from a regular file path such as
    // /mnt/export1. So we go ahead and treat these as local paths.
    let head = value.split('/').next().unwrap_or_default();
    if is_socket_addr(head) {
        return Err(Error::invalid_endpoint(value, "invalid URL endpoint format: missing scheme http or https"));
    }

    if !Path::new(value).is_absolute() {
        return Err(Error::invalid_endpoint(value, "local path must be absolute"));
    }

    Ok(Endpoint {
        location: EndpointLocation::Local,
        path: value.to_owned(),
    })
}

/// On windows a preceding slash before the drive letter would end up as
/// `C:/C:/...` once joined, so `/c:\mnt` becomes `c:\mnt`.
fn trim_drive_separator(path: &str) -> &str {
    let Some(rest) = path.strip_prefix('/') else {
        return path;
    };

    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic() => rest,
        _ => path,
    }
}

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

use crate::disk::endpoint::{Endpoint, EndpointType};
use crate::error::{Error, Result};
use std::collections::HashSet;
use tracing::debug;

/// enum for setup type.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum SetupType {
    /// FS setup type enum, a single local disk.
    Fs,

    /// Erasure setup type enum.
    Erasure,

    /// Distributed Erasure setup type enum.
    DistErasure,
}

/// list of endpoints, in disk index order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints(Vec<Endpoint>);

impl AsRef<Vec<Endpoint>> for Endpoints {
    fn as_ref(&self) -> &Vec<Endpoint> {
        &self.0
    }
}

impl<T: AsRef<str>> TryFrom<&[T]> for Endpoints {
    type Error = Error;

    /// returns new endpoint list based on input args.
    fn try_from(args: &[T]) -> Result<Self> {
        if args.is_empty() {
            return Err(Error::invalid_endpoint("", "no endpoints given"));
        }

        let mut scheme: Option<String> = None;
        let mut endpoints = Vec::with_capacity(args.len());
        let mut uniq_set = HashSet::with_capacity(args.len());

        // Loop through args and adds to endpoint list.
        for arg in args {
            let endpoint = Endpoint::try_from(arg.as_ref())?;

            // All URL endpoints have to use the same scheme, local paths may sit beside them.
            if endpoint.get_type() == EndpointType::Url {
                match &scheme {
                    None => scheme = Some(endpoint.scheme().to_owned()),
                    Some(s) if s != endpoint.scheme() => return Err(Error::MixedScheme),
                    Some(_) => {}
                }
            }

            // Check for duplicate endpoints.
            let endpoint_str = endpoint.to_string();
            if !uniq_set.insert(endpoint_str.clone()) {
                return Err(Error::DuplicateEndpoints(endpoint_str));
            }

            endpoints.push(endpoint);
        }

        debug!("parsed {} endpoints", endpoints.len());

        Ok(Endpoints(endpoints))
    }
}

impl Endpoints {
    /// Converts `self` into its inner representation.
    pub fn into_inner(self) -> Vec<Endpoint> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endpoint> {
        self.0.iter()
    }

    // returns endpoint string of i-th endpoint (0-based),
    // and empty string for invalid indexes.
    pub fn get_string(&self, i: usize) -> String {
        self.0.get(i).map(ToString::to_string).unwrap_or_default()
    }

    /// see [`is_distributed_setup`].
    pub fn is_distributed(&self) -> bool {
        is_distributed_setup(self)
    }
}

/// reports whether the endpoints span the network.
///
/// Every distinct `host:port` is one identity, local paths share the empty
/// identity. The setup is distributed as soon as there is more than one
/// identity, or any identity is a network address, even if all disks sit
/// behind the same one.
pub fn is_distributed_setup(endpoints: &Endpoints) -> bool {
    let identities: HashSet<String> = endpoints.iter().map(Endpoint::host_port).collect();

    identities.len() > 1 || identities.iter().any(|id| !id.is_empty())
}

#[cfg(test)]
mod test {
    use super::*;

    fn endpoints(args: &[&str]) -> Endpoints {
        Endpoints::try_from(args).unwrap_or_else(|e| panic!("{args:?}: {e}"))
    }

    #[test]
    fn test_new_endpoints() {
        let ok_cases: [&[&str]; 7] = [
            &["/d1", "/d2", "/d3", "/d4"],
            &[
                "http://localhost:9000/d1",
                "http://localhost:9000/d2",
                "http://localhost:9000/d3",
                "http://localhost:9000/d4",
            ],
            &[
                "http://example.org:9000/d1",
                "http://example.com:9000/d1",
                "http://example.net:9000/d1",
                "http://example.edu:9000/d1",
            ],
            &[
                "https://localhost:9000/d1",
                "https://localhost:9001/d2",
                "https://localhost:9002/d3",
                "https://localhost:9003/d4",
            ],
            // It is valid WRT endpoint list that same path is expected with different port on same server.
            &[
                "https://127.0.0.1:9000/d1",
                "https://127.0.0.1:9001/d1",
                "https://127.0.0.1:9002/d1",
                "https://127.0.0.1:9003/d1",
            ],
            &["/d1", "http://example.org:9000/d1"],
            &["http://4.4.4.4:80/mnt/disk1", "http://4.4.4.4:80/mnt/disk2"],
        ];

        for args in ok_cases {
            let eps = endpoints(args);
            assert_eq!(eps.len(), args.len(), "{args:?}");
            for (i, arg) in args.iter().enumerate() {
                assert_eq!(eps.get_string(i), *arg, "{args:?}: order");
            }
        }

        let err_cases: [(&[&str], Error); 5] = [
            (&[], Error::invalid_endpoint("", "no endpoints given")),
            (&["/d1", "/d1"], Error::DuplicateEndpoints("/d1".to_owned())),
            (
                &["http://localhost:9000/d1", "http://localhost:9000/d1"],
                Error::DuplicateEndpoints("http://localhost:9000/d1".to_owned()),
            ),
            (&["http://localhost:9000/d1", "https://example.org:9000/d2"], Error::MixedScheme),
            (&["/d1", "d2"], Error::invalid_endpoint("d2", "local path must be absolute")),
        ];

        for (args, expected) in err_cases {
            let err = Endpoints::try_from(args).unwrap_err();
            assert_eq!(err, expected, "{args:?}");
        }
    }

    #[test]
    fn test_endpoints_parse_is_pure() {
        let args = ["http://4.4.4.4:9000/mnt/disk1", "http://127.0.0.1:9000/mnt/disk2", "/mnt/disk3"];
        assert_eq!(endpoints(&args), endpoints(&args));
        assert_eq!(endpoints(&args).get_string(3), "");
    }

    #[test]
    fn test_is_distributed_setup() {
        let cases: [(&[&str], bool); 8] = [
            (&["http://4.4.4.4:9000/mnt/disk1", "http://4.4.4.4:9000/mnt/disk2"], true),
            (&["http://4.4.4.4:9000/mnt/disk1", "http://127.0.0.1:9000/mnt/disk2"], true),
            (&["http://127.0.0.1:9000/mnt/disk1", "http://127.0.0.1:9000/mnt/disk2"], true),
            (&["http://127.0.0.1:9000/mnt/disk1", "http://127.0.0.1:9001/mnt/disk2"], true),
            (&["http://4.4.4.4:9000/mnt/disk1"], true),
            (&["/mnt/disk1", "http://4.4.4.4:9000/mnt/disk2"], true),
            (&["/mnt/disk1", "/mnt/disk2"], false),
            (&["/mnt/disk1"], false),
        ];

        for (args, expected) in cases {
            let eps = endpoints(args);
            assert_eq!(is_distributed_setup(&eps), expected, "{args:?}");
            assert_eq!(eps.is_distributed(), expected, "{args:?}");
        }
    }
}

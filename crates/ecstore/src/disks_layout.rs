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

use crate::endpoints::{Endpoints, SetupType, is_distributed_setup};
use crate::error::{Error, Result};
use tracing::{debug, info};

/// Minimum number of disks of an erasure setup.
pub const MIN_DISKS: usize = 6;

/// Maximum number of disks of an erasure setup.
pub const MAX_DISKS: usize = 16;

/// checks the disk count against the erasure backend's limits.
///
/// Out of range counts are reported before parity.
pub fn check_sufficient_disks(endpoints: &Endpoints) -> Result<()> {
    let count = endpoints.len();

    if count < MIN_DISKS {
        return Err(Error::TooFewDisks { count });
    }

    if count > MAX_DISKS {
        return Err(Error::TooManyDisks { count });
    }

    if count % 2 != 0 {
        return Err(Error::NotEvenDisks { count });
    }

    Ok(())
}

/// validates the startup disks and picks the backend for them.
///
/// `ignored` lists disks the operator asked to skip, each must be one of `endpoints`.
pub fn validate_disks<T: AsRef<str>>(endpoints: &Endpoints, ignored: &[T]) -> Result<SetupType> {
    for disk in ignored {
        let disk = disk.as_ref();
        if !endpoints.iter().any(|ep| ep.to_string() == disk) {
            return Err(Error::InvalidIgnoredDisk(disk.to_owned()));
        }
    }

    if endpoints.len() == 1 {
        let ep = &endpoints.as_ref()[0];
        if !ep.is_local() {
            return Err(Error::invalid_endpoint(
                ep.to_string(),
                "a single disk setup needs a local path, not a URL",
            ));
        }

        info!("single disk {} given, using FS setup", ep);
        return Ok(SetupType::Fs);
    }

    check_sufficient_disks(endpoints)?;

    let setup_type = if is_distributed_setup(endpoints) {
        SetupType::DistErasure
    } else {
        SetupType::Erasure
    };

    debug!("validate_disks: count={}, ignored={}, setup={:?}", endpoints.len(), ignored.len(), setup_type);

    Ok(setup_type)
}

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

pub mod disk;
pub mod disks_layout;
pub mod endpoints;
pub mod error;

pub use disk::endpoint::{Endpoint, EndpointLocation, EndpointType};
pub use disks_layout::{MAX_DISKS, MIN_DISKS, check_sufficient_disks, validate_disks};
pub use endpoints::{Endpoints, SetupType, is_distributed_setup};
pub use error::{Error, Result, StorageError};

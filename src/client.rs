// Copyright 2025 The netappfiles contributors
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

//! Interface to the management API consumed by the waiters.

use async_trait::async_trait;

use super::types::{AccountId, PoolId, SnapshotId, VolumeId};
use super::Result;

/// Read access to the resource hierarchy.
///
/// Implemented by whatever talks to the management API on behalf of this
/// crate. Each operation fetches one resource by its coordinates and discards
/// the representation; only the existence signal is consumed here. An absent
/// resource must be reported as `ErrorKind::ResourceNotFound`, the one kind
/// the waiters treat as recoverable.
#[async_trait]
pub trait ResourceReader {
    /// Fetch an account.
    async fn get_account(&self, id: &AccountId) -> Result<()>;

    /// Fetch a capacity pool.
    async fn get_pool(&self, id: &PoolId) -> Result<()>;

    /// Fetch a volume.
    async fn get_volume(&self, id: &VolumeId) -> Result<()>;

    /// Fetch a snapshot.
    async fn get_snapshot(&self, id: &SnapshotId) -> Result<()>;
}

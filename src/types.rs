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

//! Typed coordinates of resources in the hierarchy.
//!
//! Every read operation addresses its target by the chain of names leading to
//! it, starting at the resource group. These types carry that chain so that
//! it is assembled (or parsed out of a resource URI) once instead of being
//! re-derived at every call site.

use std::fmt;

use super::uri;
use super::{Error, ErrorKind, Result};

/// Coordinates of an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountId {
    /// Name of the resource group holding the account.
    pub resource_group: String,
    /// Name of the account.
    pub account: String,
}

/// Coordinates of a capacity pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolId {
    /// Name of the resource group holding the account.
    pub resource_group: String,
    /// Name of the account.
    pub account: String,
    /// Name of the capacity pool.
    pub pool: String,
}

/// Coordinates of a volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeId {
    /// Name of the resource group holding the account.
    pub resource_group: String,
    /// Name of the account.
    pub account: String,
    /// Name of the capacity pool.
    pub pool: String,
    /// Name of the volume.
    pub volume: String,
}

/// Coordinates of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotId {
    /// Name of the resource group holding the account.
    pub resource_group: String,
    /// Name of the account.
    pub account: String,
    /// Name of the capacity pool.
    pub pool: String,
    /// Name of the volume.
    pub volume: String,
    /// Name of the snapshot.
    pub snapshot: String,
}

impl AccountId {
    /// Create account coordinates.
    pub fn new<S1, S2>(resource_group: S1, account: S2) -> AccountId
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        AccountId {
            resource_group: resource_group.into(),
            account: account.into(),
        }
    }

    /// Coordinates of a capacity pool inside this account.
    pub fn pool<S: Into<String>>(&self, pool: S) -> PoolId {
        PoolId {
            resource_group: self.resource_group.clone(),
            account: self.account.clone(),
            pool: pool.into(),
        }
    }

    /// Extract account coordinates from a resource URI.
    pub fn from_uri(resource_uri: &str) -> Result<AccountId> {
        Ok(AccountId {
            resource_group: require(resource_uri, uri::resource_group(resource_uri))?,
            account: require(resource_uri, uri::account_name(resource_uri))?,
        })
    }
}

impl PoolId {
    /// Coordinates of a volume inside this pool.
    pub fn volume<S: Into<String>>(&self, volume: S) -> VolumeId {
        VolumeId {
            resource_group: self.resource_group.clone(),
            account: self.account.clone(),
            pool: self.pool.clone(),
            volume: volume.into(),
        }
    }

    /// Extract capacity pool coordinates from a resource URI.
    pub fn from_uri(resource_uri: &str) -> Result<PoolId> {
        let account = AccountId::from_uri(resource_uri)?;
        Ok(account.pool(require(resource_uri, uri::pool_name(resource_uri))?))
    }
}

impl VolumeId {
    /// Coordinates of a snapshot of this volume.
    pub fn snapshot<S: Into<String>>(&self, snapshot: S) -> SnapshotId {
        SnapshotId {
            resource_group: self.resource_group.clone(),
            account: self.account.clone(),
            pool: self.pool.clone(),
            volume: self.volume.clone(),
            snapshot: snapshot.into(),
        }
    }

    /// Extract volume coordinates from a resource URI.
    pub fn from_uri(resource_uri: &str) -> Result<VolumeId> {
        let pool = PoolId::from_uri(resource_uri)?;
        Ok(pool.volume(require(resource_uri, uri::volume_name(resource_uri))?))
    }
}

impl SnapshotId {
    /// Extract snapshot coordinates from a resource URI.
    pub fn from_uri(resource_uri: &str) -> Result<SnapshotId> {
        let volume = VolumeId::from_uri(resource_uri)?;
        Ok(volume.snapshot(require(resource_uri, uri::snapshot_name(resource_uri))?))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_group, self.account)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.resource_group, self.account, self.pool)
    }
}

impl fmt::Display for VolumeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.resource_group, self.account, self.pool, self.volume
        )
    }
}

impl fmt::Display for SnapshotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}/{}",
            self.resource_group, self.account, self.pool, self.volume, self.snapshot
        )
    }
}

fn require(resource_uri: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("Incomplete resource URI {}", resource_uri),
        )
    })
}

#[cfg(test)]
mod test {
    use super::{AccountId, PoolId, SnapshotId, VolumeId};
    use crate::ErrorKind;

    const SNAPSHOT_URI: &str = "/subscriptions/f557b96d-2308-4a18-aae1-b8f7e7e70cc7\
                                /resourceGroups/anf01-rg/providers/Microsoft.NetApp\
                                /netAppAccounts/account01/capacityPools/Pool01\
                                /volumes/Vol01/snapshots/Snap01";

    #[test]
    fn test_builders() {
        let snapshot = AccountId::new("anf01-rg", "account01")
            .pool("Pool01")
            .volume("Vol01")
            .snapshot("Snap01");
        assert_eq!(snapshot.to_string(), "anf01-rg/account01/Pool01/Vol01/Snap01");
    }

    #[test]
    fn test_from_uri() {
        let account = AccountId::from_uri(SNAPSHOT_URI).unwrap();
        assert_eq!(account, AccountId::new("anf01-rg", "account01"));

        let pool = PoolId::from_uri(SNAPSHOT_URI).unwrap();
        assert_eq!(pool, account.pool("Pool01"));

        let volume = VolumeId::from_uri(SNAPSHOT_URI).unwrap();
        assert_eq!(volume, pool.volume("Vol01"));

        let snapshot = SnapshotId::from_uri(SNAPSHOT_URI).unwrap();
        assert_eq!(snapshot, volume.snapshot("Snap01"));
    }

    #[test]
    fn test_from_uri_incomplete() {
        let uri = "/subscriptions/S/resourceGroups/rg/providers/Microsoft.NetApp\
                   /netAppAccounts/a1/capacityPools/p1";
        let err = VolumeId::from_uri(uri).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let err = SnapshotId::from_uri("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

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

//! Utilities for picking resource URIs apart.
//!
//! The management API identifies every object with a slash-delimited URI of
//! alternating type and name segments:
//!
//! ```text
//! /subscriptions/{sub}/resourceGroups/{rg}/providers/Microsoft.NetApp
//!     /netAppAccounts/{account}/capacityPools/{pool}/volumes/{volume}
//! ```
//!
//! Nested resources additionally report their `name` property as a relative
//! path (`account/pool` for a capacity pool), so the bare name always has to
//! be dug out of the URI before it can be passed back to a `get` call. The
//! functions here do that digging. None of them fail: a URI that does not
//! contain the requested piece yields `None`.

use std::borrow::Cow;
use std::fmt;

const PROVIDER_PREFIX: &str = "/providers/Microsoft.NetApp/netAppAccounts";

/// Kind of a resource in the account/pool/volume/snapshot hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// A NetApp account, the root of the hierarchy.
    Account,
    /// A capacity pool inside an account.
    CapacityPool,
    /// A volume inside a capacity pool.
    Volume,
    /// A snapshot of a volume.
    Snapshot,
    /// Anything else, including URIs from unrelated providers.
    Unknown,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceKind::Account => "account",
            ResourceKind::CapacityPool => "capacity pool",
            ResourceKind::Volume => "volume",
            ResourceKind::Snapshot => "snapshot",
            ResourceKind::Unknown => "unknown resource",
        })
    }
}

/// Extract the value following a type segment from a resource URI.
///
/// The segment name is matched case-insensitively; the returned value keeps
/// the casing it has in the URI. Both arguments are normalized to start with
/// a `/` before matching, so `capacityPools` and `/capacityPools` are
/// equivalent.
///
/// Returns `None` for an empty or whitespace-only URI, when the segment does
/// not occur, or when nothing follows it.
pub fn resource_value(resource_uri: &str, resource_name: &str) -> Option<String> {
    if resource_uri.trim().is_empty() {
        return None;
    }

    let name = with_leading_slash(resource_name);
    let uri = with_leading_slash(resource_uri);

    // Only ASCII case folding: it keeps byte offsets valid for slicing the
    // original URI, and the API never emits non-ASCII type segments.
    let uri_lower = uri.to_ascii_lowercase();
    let name_lower = name.to_ascii_lowercase();

    // A resource group named exactly like the queried segment would make the
    // plain search below stop at the group name and hand back the next type
    // segment instead of the value. Skip to the last occurrence in that case.
    let group_collision = format!("/resourcegroups{}", name_lower);
    let start = if uri_lower.contains(&group_collision) {
        uri_lower.rfind(&name_lower)? + name_lower.len()
    } else {
        uri_lower.find(&name_lower)? + name_lower.len()
    };

    uri[start..]
        .split('/')
        .nth(1)
        .filter(|value| !value.is_empty())
        .map(ToOwned::to_owned)
}

/// Extract the trailing name from a resource URI, regardless of its type.
///
/// Returns `None` only for an empty or whitespace-only URI.
pub fn resource_name(resource_uri: &str) -> Option<String> {
    if resource_uri.trim().is_empty() {
        return None;
    }

    match resource_uri.rfind('/') {
        Some(index) => Some(resource_uri[index + 1..].to_owned()),
        None => Some(resource_uri.to_owned()),
    }
}

/// Extract the resource group name from a resource URI.
pub fn resource_group(resource_uri: &str) -> Option<String> {
    resource_value(resource_uri, "/resourceGroups")
}

/// Extract the subscription ID from a resource URI.
pub fn subscription(resource_uri: &str) -> Option<String> {
    resource_value(resource_uri, "/subscriptions")
}

/// Extract the account name from a resource URI.
pub fn account_name(resource_uri: &str) -> Option<String> {
    resource_value(resource_uri, "/netAppAccounts")
}

/// Extract the capacity pool name from a resource URI.
pub fn pool_name(resource_uri: &str) -> Option<String> {
    resource_value(resource_uri, "/capacityPools")
}

/// Extract the volume name from a resource URI.
pub fn volume_name(resource_uri: &str) -> Option<String> {
    resource_value(resource_uri, "/volumes")
}

/// Extract the snapshot name from a resource URI.
pub fn snapshot_name(resource_uri: &str) -> Option<String> {
    resource_value(resource_uri, "/snapshots")
}

/// Check whether a URI identifies a resource under the NetApp provider.
///
/// The provider prefix is matched literally, exactly as the API emits it.
pub fn is_netapp_resource(resource_uri: &str) -> bool {
    if resource_uri.trim().is_empty() {
        return false;
    }

    resource_uri.contains(PROVIDER_PREFIX)
}

/// Classify what a resource URI identifies.
///
/// The innermost type segment wins: a snapshot URI also contains `/volumes/`,
/// so snapshots are checked first, then volumes, then pools. A bare account
/// URI must not carry any nested segment, including `/backupPolicies/`.
pub fn resource_kind(resource_uri: &str) -> ResourceKind {
    if !is_netapp_resource(resource_uri) {
        return ResourceKind::Unknown;
    }

    if resource_uri.contains("/snapshots/") {
        ResourceKind::Snapshot
    } else if resource_uri.contains("/volumes/") {
        ResourceKind::Volume
    } else if resource_uri.contains("/capacityPools/") {
        ResourceKind::CapacityPool
    } else if resource_uri.contains("/backupPolicies/") {
        ResourceKind::Unknown
    } else if resource_uri.contains("/netAppAccounts/") {
        ResourceKind::Account
    } else {
        ResourceKind::Unknown
    }
}

fn with_leading_slash(value: &str) -> Cow<'_, str> {
    if value.starts_with('/') {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("/{}", value))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const VOLUME_URI: &str = "/subscriptions/f557b96d-2308-4a18-aae1-b8f7e7e70cc7\
                              /resourceGroups/anf01-rg/providers/Microsoft.NetApp\
                              /netAppAccounts/account01/capacityPools/Pool01\
                              /volumes/Vol-account01-Pool01";

    const SNAPSHOT_URI: &str = "/subscriptions/f557b96d-2308-4a18-aae1-b8f7e7e70cc7\
                                /resourceGroups/anf01-rg/providers/Microsoft.NetApp\
                                /netAppAccounts/account01/capacityPools/Pool01\
                                /volumes/Vol-account01-Pool01/snapshots/Snap01";

    #[test]
    fn test_resource_value() {
        assert_eq!(
            resource_value(VOLUME_URI, "/capacityPools").unwrap(),
            "Pool01"
        );
        assert_eq!(
            resource_value(VOLUME_URI, "capacityPools").unwrap(),
            "Pool01"
        );
        assert_eq!(resource_value(VOLUME_URI, "/resourceGroups").unwrap(), "anf01-rg");
        assert_eq!(
            resource_value(VOLUME_URI, "/subscriptions").unwrap(),
            "f557b96d-2308-4a18-aae1-b8f7e7e70cc7"
        );
    }

    #[test]
    fn test_resource_value_case_insensitive_match() {
        assert_eq!(
            resource_value("/Subscriptions/abc", "/subscriptions").unwrap(),
            "abc"
        );
        // The value keeps the casing from the URI.
        assert_eq!(
            resource_value(VOLUME_URI, "/CAPACITYPOOLS").unwrap(),
            "Pool01"
        );
    }

    #[test]
    fn test_resource_value_absent() {
        assert_eq!(resource_value("", "/volumes"), None);
        assert_eq!(resource_value("   ", "/volumes"), None);
        assert_eq!(resource_value(VOLUME_URI, "/snapshots"), None);
        // Trailing type segment with nothing after it.
        assert_eq!(
            resource_value("/subscriptions/abc/volumes", "/volumes"),
            None
        );
        assert_eq!(
            resource_value("/subscriptions/abc/volumes/", "/volumes"),
            None
        );
    }

    #[test]
    fn test_resource_value_group_named_like_segment() {
        // The resource group itself is called "netAppAccounts" here.
        let uri = "/subscriptions/S/resourceGroups/netAppAccounts\
                   /providers/Microsoft.NetApp/netAppAccounts/acct1";
        assert_eq!(resource_value(uri, "/netAppAccounts").unwrap(), "acct1");
        // The group name is still reported as-is.
        assert_eq!(resource_group(uri).unwrap(), "netAppAccounts");
    }

    #[test]
    fn test_resource_value_group_collision_trailing() {
        // Account name equal to its own type segment on top of the collision;
        // nothing follows the last occurrence, so there is no value to return.
        let uri = "/subscriptions/S/resourceGroups/netAppAccounts\
                   /providers/Microsoft.NetApp/netAppAccounts/netAppAccounts";
        assert_eq!(resource_value(uri, "/netAppAccounts"), None);
        assert_eq!(resource_group(uri).unwrap(), "netAppAccounts");
    }

    #[test]
    fn test_resource_name() {
        assert_eq!(resource_name(VOLUME_URI).unwrap(), "Vol-account01-Pool01");
        assert_eq!(resource_name("standalone").unwrap(), "standalone");
        assert_eq!(resource_name(""), None);
        assert_eq!(resource_name("  "), None);
    }

    #[test]
    fn test_named_getters() {
        assert_eq!(
            subscription(SNAPSHOT_URI).unwrap(),
            "f557b96d-2308-4a18-aae1-b8f7e7e70cc7"
        );
        assert_eq!(resource_group(SNAPSHOT_URI).unwrap(), "anf01-rg");
        assert_eq!(account_name(SNAPSHOT_URI).unwrap(), "account01");
        assert_eq!(pool_name(SNAPSHOT_URI).unwrap(), "Pool01");
        assert_eq!(volume_name(SNAPSHOT_URI).unwrap(), "Vol-account01-Pool01");
        assert_eq!(snapshot_name(SNAPSHOT_URI).unwrap(), "Snap01");
        assert_eq!(snapshot_name(VOLUME_URI), None);
    }

    #[test]
    fn test_is_netapp_resource() {
        assert!(is_netapp_resource(VOLUME_URI));
        assert!(!is_netapp_resource(""));
        assert!(!is_netapp_resource("   "));
        // A perfectly valid hierarchy from another provider does not count.
        assert!(!is_netapp_resource(
            "/subscriptions/S/resourceGroups/rg/providers/Microsoft.Network\
             /virtualNetworks/vnet1/subnets/sn1"
        ));
    }

    #[test]
    fn test_resource_kind() {
        assert_eq!(resource_kind(SNAPSHOT_URI), ResourceKind::Snapshot);
        assert_eq!(resource_kind(VOLUME_URI), ResourceKind::Volume);
        assert_eq!(
            resource_kind(
                "/subscriptions/S/resourceGroups/rg/providers/Microsoft.NetApp\
                 /netAppAccounts/a1/capacityPools/p1"
            ),
            ResourceKind::CapacityPool
        );
        assert_eq!(
            resource_kind(
                "/subscriptions/S/resourceGroups/rg/providers/Microsoft.NetApp\
                 /netAppAccounts/a1"
            ),
            ResourceKind::Account
        );
        assert_eq!(resource_kind(""), ResourceKind::Unknown);
        assert_eq!(
            resource_kind("/subscriptions/S/resourceGroups/rg"),
            ResourceKind::Unknown
        );
    }

    #[test]
    fn test_resource_kind_priority() {
        // A snapshot URI contains /volumes/ as well; the innermost wins.
        assert!(SNAPSHOT_URI.contains("/volumes/"));
        assert_eq!(resource_kind(SNAPSHOT_URI), ResourceKind::Snapshot);
    }

    #[test]
    fn test_resource_kind_backup_policy_is_not_an_account() {
        assert_eq!(
            resource_kind(
                "/subscriptions/S/resourceGroups/rg/providers/Microsoft.NetApp\
                 /netAppAccounts/a1/backupPolicies/bp1"
            ),
            ResourceKind::Unknown
        );
    }
}

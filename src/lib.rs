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

//! Azure NetApp Files management support in Rust.
//!
//! Management tooling for the account → capacity pool → volume → snapshot
//! hierarchy keeps running into the same two chores: digging names out of
//! hierarchical resource URIs, and waiting until an asynchronous create or
//! delete actually becomes visible to read operations. This crate covers
//! both, plus the supporting pieces around them:
//!
//! * [URI parsing and classification](uri/index.html)
//! * Typed resource coordinates ([`AccountId`] and friends)
//! * [Existence waiters](waiter/index.html) over a caller-supplied
//!   [`ResourceReader`]
//! * [Authentication file loading](auth/index.html)
//! * Size conversion [utilities](utils/index.html)
//!
//! The crate deliberately contains no HTTP client: the caller brings the
//! four read operations the waiters need, and everything else is pure.
//!
//! # Examples
//!
//! Names come back from the API as relative paths (`account01/Pool01` for a
//! capacity pool), so the bare name has to be parsed out of the resource URI
//! before it can be passed to another call:
//!
//! ```
//! use netappfiles::uri;
//!
//! let id = "/subscriptions/f557b96d-2308-4a18-aae1-b8f7e7e70cc7\
//!           /resourceGroups/anf01-rg/providers/Microsoft.NetApp\
//!           /netAppAccounts/account01/capacityPools/Pool01";
//! assert_eq!(uri::pool_name(id).unwrap(), "Pool01");
//! assert_eq!(uri::resource_kind(id), netappfiles::ResourceKind::CapacityPool);
//! ```

#![crate_name = "netappfiles"]
#![crate_type = "lib"]
#![doc(html_root_url = "https://docs.rs/netappfiles/0.1.0")]
// NOTE: we do not use generic deny(warnings) to avoid breakages with new
// versions of the compiler. Add more warnings here as you discover them.
#![deny(
    improper_ctypes,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    non_shorthand_field_patterns,
    no_mangle_generic_items,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused_allocation,
    unused_comparisons,
    unused_import_braces,
    unused_parens,
    while_true
)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;

pub mod auth;
mod client;
mod error;
mod types;
pub mod uri;
pub mod utils;
pub mod waiter;

pub use crate::client::ResourceReader;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::types::{AccountId, PoolId, SnapshotId, VolumeId};
pub use crate::uri::ResourceKind;
pub use crate::waiter::{PollOutcome, WaitOpts, WaitTarget};

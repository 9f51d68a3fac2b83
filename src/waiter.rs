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

//! Waiters.
//!
//! Mutations on the management API complete before their effect is visible
//! to read operations: a freshly created volume stays invisible for a while,
//! and a deleted snapshot lingers after the delete call returns. The waiters
//! here bridge that gap by probing a read operation until the expected state
//! is observed or a retry budget runs out.

use std::future::Future;
use std::time::Duration;

use tokio::time::{sleep, Instant};

use super::client::ResourceReader;
use super::types::{AccountId, PoolId, SnapshotId, VolumeId};
use super::uri::{self, ResourceKind};
use super::{Error, ErrorKind, Result};

/// Outcome of a bounded polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// The probe succeeded; the resource is visible.
    Found,
    /// The probe reported the resource as absent.
    NotFound,
    /// The retry budget ran out before the expected state was observed.
    TimedOut,
}

/// State a wait is aiming for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitTarget {
    /// Wait until the resource becomes visible.
    Present,
    /// Wait until the resource disappears.
    Gone,
}

/// Pacing and budget of a wait.
///
/// Accounts turn visible within seconds, volumes and snapshots can take
/// minutes, so the pacing is always chosen by the caller. The default matches
/// the delete-propagation waits the service documentation recommends:
/// a probe every 10 seconds, 60 probes.
#[derive(Debug, Clone, Copy)]
pub struct WaitOpts {
    /// Delay before each probe.
    pub delay: Duration,
    /// Maximum number of probes.
    pub max_attempts: u32,
    /// Optional overall budget; once exceeded the wait times out even if
    /// probes remain.
    pub deadline: Option<Duration>,
}

impl WaitOpts {
    /// Create options with a given pacing and no deadline.
    pub fn new(delay: Duration, max_attempts: u32) -> WaitOpts {
        WaitOpts {
            delay,
            max_attempts,
            deadline: None,
        }
    }

    /// Add an overall deadline.
    pub fn with_deadline(mut self, deadline: Duration) -> WaitOpts {
        self.deadline = Some(deadline);
        self
    }
}

impl Default for WaitOpts {
    fn default() -> WaitOpts {
        WaitOpts::new(Duration::from_secs(10), 60)
    }
}

/// Repeatedly probe a read operation until a target state is confirmed.
///
/// The probe is invoked once per attempt, after the configured delay, up to
/// `opts.max_attempts` times. A probe failing with
/// `ErrorKind::ResourceNotFound` means "absent" and is progress, not an
/// error; any other failure aborts the wait immediately, since retrying bad
/// input or failed authentication only burns the budget and hides the real
/// problem.
pub async fn poll_until<F, Fut, T>(
    mut probe: F,
    target: WaitTarget,
    opts: WaitOpts,
) -> Result<PollOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let started = Instant::now();

    for attempt in 1..=opts.max_attempts {
        if let Some(deadline) = opts.deadline {
            if started.elapsed() >= deadline {
                debug!("Wait deadline of {:?} exceeded", deadline);
                return Ok(PollOutcome::TimedOut);
            }
        }

        sleep(opts.delay).await;

        match probe().await {
            Ok(..) => match target {
                WaitTarget::Present => {
                    debug!("Resource visible after {} attempt(s)", attempt);
                    return Ok(PollOutcome::Found);
                }
                WaitTarget::Gone => {
                    trace!(
                        "Resource still visible, retrying ({}/{})",
                        attempt,
                        opts.max_attempts
                    );
                }
            },
            Err(ref e) if e.kind() == ErrorKind::ResourceNotFound => match target {
                WaitTarget::Gone => {
                    debug!("Resource gone after {} attempt(s)", attempt);
                    return Ok(PollOutcome::NotFound);
                }
                WaitTarget::Present => {
                    trace!(
                        "Resource not visible yet, retrying ({}/{})",
                        attempt,
                        opts.max_attempts
                    );
                }
            },
            Err(e) => return Err(e),
        }
    }

    debug!("Giving up after {} attempt(s)", opts.max_attempts);
    Ok(PollOutcome::TimedOut)
}

/// Wait until a probe confirms the resource is visible.
pub async fn wait_until_present<F, Fut, T>(probe: F, opts: WaitOpts) -> Result<PollOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    poll_until(probe, WaitTarget::Present, opts).await
}

/// Wait until a probe confirms the resource is gone.
pub async fn wait_until_gone<F, Fut, T>(probe: F, opts: WaitOpts) -> Result<PollOutcome>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    poll_until(probe, WaitTarget::Gone, opts).await
}

/// Wait on a resource identified only by its URI.
///
/// Classifies the URI, extracts the coordinates and probes the matching read
/// operation. A URI that does not identify an account, pool, volume or
/// snapshot fails with `ErrorKind::InvalidInput`.
pub async fn wait_for_resource<R>(
    reader: &R,
    resource_uri: &str,
    target: WaitTarget,
    opts: WaitOpts,
) -> Result<PollOutcome>
where
    R: ResourceReader + Sync,
{
    let kind = uri::resource_kind(resource_uri);
    debug!("Waiting on {} {}", kind, resource_uri);

    match kind {
        ResourceKind::Account => {
            let id = AccountId::from_uri(resource_uri)?;
            let id = &id;
            poll_until(move || reader.get_account(id), target, opts).await
        }
        ResourceKind::CapacityPool => {
            let id = PoolId::from_uri(resource_uri)?;
            let id = &id;
            poll_until(move || reader.get_pool(id), target, opts).await
        }
        ResourceKind::Volume => {
            let id = VolumeId::from_uri(resource_uri)?;
            let id = &id;
            poll_until(move || reader.get_volume(id), target, opts).await
        }
        ResourceKind::Snapshot => {
            let id = SnapshotId::from_uri(resource_uri)?;
            let id = &id;
            poll_until(move || reader.get_snapshot(id), target, opts).await
        }
        ResourceKind::Unknown => Err(Error::new(
            ErrorKind::InvalidInput,
            format!("Cannot wait on {}: not a known resource kind", resource_uri),
        )),
    }
}

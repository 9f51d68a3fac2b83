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

//! Support for the service principal authentication file.
//!
//! Tooling around the management API conventionally stores service principal
//! material in a JSON file and points at it with the `AZURE_AUTH_LOCATION`
//! environment variable. This module only loads that material; talking to
//! the authentication endpoint is the caller's business.

use std::env;
use std::fs::File;
use std::path::{Path, PathBuf};

use super::{Error, ErrorKind, Result};

/// Name of the environment variable pointing at the authentication file.
pub const AUTH_LOCATION_ENV: &str = "AZURE_AUTH_LOCATION";

/// Service principal credentials together with the target subscription.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    /// ID of the subscription all operations are scoped to.
    pub subscription_id: String,
    /// Application (client) ID of the service principal.
    pub client_id: String,
    /// Client secret of the service principal.
    pub client_secret: String,
    /// ID of the tenant the service principal lives in.
    pub tenant_id: String,
}

impl Credentials {
    /// Load credentials from the environment.
    ///
    /// Reads the file named by `AZURE_AUTH_LOCATION` if set, otherwise falls
    /// back to `./azureauth.json` and `~/.azure/azureauth.json`.
    pub fn from_env() -> Result<Credentials> {
        if let Some(path) = env::var_os(AUTH_LOCATION_ENV) {
            return Credentials::from_file(path);
        }

        match find_auth_file() {
            Some(path) => Credentials::from_file(path),
            None => Err(Error::new(
                ErrorKind::AuthenticationFailed,
                format!(
                    "{} is not set and no authentication file was found",
                    AUTH_LOCATION_ENV
                ),
            )),
        }
    }

    /// Load credentials from a given authentication file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Credentials> {
        let path = path.as_ref();
        debug!("Loading credentials from {:?}", path);

        let file = File::open(path).map_err(|e| {
            Error::new(
                ErrorKind::AuthenticationFailed,
                format!("Cannot open authentication file {:?}: {}", path, e),
            )
        })?;

        serde_json::from_reader(file).map_err(|e| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("Malformed authentication file {:?}: {}", path, e),
            )
        })
    }
}

fn find_auth_file() -> Option<PathBuf> {
    let current = Path::new("./azureauth.json");
    if current.is_file() {
        match current.canonicalize() {
            Ok(val) => return Some(val),
            Err(e) => warn!("Cannot canonicalize {:?}: {}", current, e),
        }
    }

    if let Some(mut home) = dirs::home_dir() {
        home.push(".azure/azureauth.json");
        if home.is_file() {
            return Some(home);
        }
    } else {
        warn!("Cannot find home directory");
    }

    None
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::io::Write;

    use super::Credentials;
    use crate::ErrorKind;

    const AUTH_FILE: &str = r#"{
        "clientId": "11111111-1111-1111-1111-111111111111",
        "clientSecret": "s3cr3t",
        "subscriptionId": "22222222-2222-2222-2222-222222222222",
        "tenantId": "33333333-3333-3333-3333-333333333333",
        "activeDirectoryEndpointUrl": "https://login.microsoftonline.com"
    }"#;

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join("netappfiles-test-azureauth.json");
        {
            let mut file = fs::File::create(&path).unwrap();
            file.write_all(AUTH_FILE.as_bytes()).unwrap();
        }

        let creds = Credentials::from_file(&path).unwrap();
        assert_eq!(creds.client_id, "11111111-1111-1111-1111-111111111111");
        assert_eq!(creds.client_secret, "s3cr3t");
        assert_eq!(
            creds.subscription_id,
            "22222222-2222-2222-2222-222222222222"
        );
        assert_eq!(creds.tenant_id, "33333333-3333-3333-3333-333333333333");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_from_file_missing() {
        let err = Credentials::from_file("/definitely/not/here.json").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
    }

    #[test]
    fn test_from_file_malformed() {
        let path = std::env::temp_dir().join("netappfiles-test-azureauth-bad.json");
        fs::write(&path, "{not json").unwrap();

        let err = Credentials::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        fs::remove_file(&path).unwrap();
    }
}

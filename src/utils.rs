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

//! Various utilities.

/// Number of bytes in one tebibyte.
pub const TIB: u64 = 1 << 40;

/// Convert a size in bytes into tebibytes.
///
/// The API reports pool and volume sizes in bytes; humans and quota limits
/// speak TiB.
pub fn bytes_to_tib(size: u64) -> f64 {
    size as f64 / TIB as f64
}

/// Convert a size in tebibytes into bytes.
pub fn tib_to_bytes(size: u64) -> u64 {
    size * TIB
}

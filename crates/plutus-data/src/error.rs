// Copyright 2025 PRAGMA
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

use crate::cbor;
use thiserror::Error;

/// Everything that can go wrong when encoding, decoding or inspecting Plutus Data. None of these
/// are recoverable: a failed decode yields no partial value.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid Plutus Data: {0}")]
    Decoding(#[from] cbor::decode::Error),
    #[error("failed to encode Plutus Data: {0}")]
    Encoding(String),
    #[error("index {index} out of range for a list of {length} element(s)")]
    IndexOutOfRange { index: usize, length: usize },
    #[error("invalid hex-encoded Plutus Data: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

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

use crate::{cbor, decode_from_slice, Error, PlutusData};
use pallas_crypto::hash::{Hash, Hasher};

/// A [`PlutusData`] alongside the exact bytes it was decoded from.
///
/// Plutus Data received from the outside world (e.g. datums in transaction outputs) may not be
/// encoded the way this crate encodes it, yet its hash depends on those very bytes. Memoized data
/// re-encodes as its original bytes, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "&str")]
#[serde(into = "String")]
pub struct MemoizedPlutusData {
    original_bytes: Vec<u8>,
    // NOTE: Never handed out mutably: any change to 'data' would have to be reflected onto
    // 'original_bytes'.
    data: PlutusData,
}

impl MemoizedPlutusData {
    pub fn original_bytes(&self) -> &[u8] {
        &self.original_bytes
    }

    pub fn data(&self) -> &PlutusData {
        &self.data
    }

    /// Blake2b-256 digest of the original bytes; i.e. the datum hash.
    pub fn hash(&self) -> Hash<32> {
        Hasher::<256>::hash(&self.original_bytes)
    }
}

impl AsRef<PlutusData> for MemoizedPlutusData {
    fn as_ref(&self) -> &PlutusData {
        &self.data
    }
}

impl From<PlutusData> for MemoizedPlutusData {
    fn from(data: PlutusData) -> Self {
        Self {
            original_bytes: cbor::to_cbor(&data),
            data,
        }
    }
}

impl From<MemoizedPlutusData> for String {
    fn from(plutus_data: MemoizedPlutusData) -> Self {
        hex::encode(&plutus_data.original_bytes[..])
    }
}

impl From<MemoizedPlutusData> for PlutusData {
    fn from(plutus_data: MemoizedPlutusData) -> Self {
        plutus_data.data
    }
}

impl TryFrom<&str> for MemoizedPlutusData {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(hex::decode(s)?)
    }
}

impl TryFrom<String> for MemoizedPlutusData {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl TryFrom<Vec<u8>> for MemoizedPlutusData {
    type Error = Error;

    fn try_from(bytes: Vec<u8>) -> Result<Self, Self::Error> {
        let data = decode_from_slice(&bytes)?;
        Ok(Self {
            original_bytes: bytes,
            data,
        })
    }
}

impl<'b, C> cbor::Decode<'b, C> for MemoizedPlutusData {
    fn decode(d: &mut cbor::Decoder<'b>, ctx: &mut C) -> Result<Self, cbor::decode::Error> {
        let (data, original_bytes) = cbor::tee(d, |d| d.decode_with(ctx))?;
        Ok(Self {
            original_bytes: original_bytes.to_vec(),
            data,
        })
    }
}

impl<C> cbor::Encode<C> for MemoizedPlutusData {
    fn encode<W: cbor::encode::Write>(
        &self,
        e: &mut cbor::Encoder<W>,
        _ctx: &mut C,
    ) -> Result<(), cbor::encode::Error<W::Error>> {
        cbor::write_raw(e, &self.original_bytes)
    }
}

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

//! A canonical CBOR codec for Plutus Data: the value model Cardano uses to represent structured
//! data on-chain (datums, redeemers, script contexts).
//!
//! A [`PlutusData`] is one of five things: a constructor application ([`ConstrPlutusData`]), a
//! map ([`PlutusMap`]), a list ([`PlutusList`]), an arbitrary-precision integer or a byte string.
//! Its binary form is a profile of CBOR, with:
//!
//! - compact constructor tags (121-127 and 1280-1400) and a general form (tag 102);
//! - bignums (tags 2 and 3) for integers that do not fit in 64 bits;
//! - byte strings longer than 64 bytes split in 64-byte chunks.
//!
//! Encoded bytes end up hashed and compared on-chain, so the encoders here are byte-exact with
//! the ledger's. Values that must be re-emitted exactly as they were received, whatever their
//! original encoding, are better kept as [`MemoizedPlutusData`].

use tracing::trace;

pub mod cbor {
    pub use minicbor::{
        Decode, Decoder, Encode, Encoder,
        data::{self, IanaTag, Int, Tag, Type},
        decode, encode, to_vec,
    };
    pub use minicbor_extra::{
        capacity_hint, decode_break, from_cbor, from_cbor_no_leftovers, has_more_elements,
        heterogeneous_array, tee, to_cbor, write_raw,
    };
}

mod error;
pub use error::Error;

mod kind;
pub use kind::PlutusDataKind;

mod framing;
pub use framing::Framing;

mod integer;

mod bytes;
pub use bytes::MAX_BYTES_CHUNK_SIZE;

mod constr;
pub use constr::{from_compact_tag, to_compact_tag, ConstrPlutusData, GENERAL_FORM_TAG};

mod list;
pub use list::PlutusList;

mod map;
pub use map::PlutusMap;

mod data;
pub use data::{PlutusData, MAX_NESTING_DEPTH};
#[cfg(any(test, feature = "test-utils"))]
pub use data::tests::{any_bounded_bytes, any_integer, any_plutus_data};

mod convert;

mod memoized;
pub use memoized::MemoizedPlutusData;

pub mod macros;

pub use num::{BigInt, BigUint};

const EVENT_TARGET: &str = "plutus_data::codec";

/// Encode any of the codec's types into a fresh buffer.
pub(crate) fn encode_to_vec<T: cbor::Encode<()>>(value: &T) -> Result<Vec<u8>, Error> {
    cbor::to_vec(value).map_err(|e| Error::Encoding(e.to_string()))
}

/// Decode any of the codec's types from bytes that must hold exactly one value.
pub(crate) fn decode_from_slice<T>(bytes: &[u8]) -> Result<T, Error>
where
    T: for<'d> cbor::Decode<'d, ()>,
{
    cbor::from_cbor_no_leftovers(bytes).map_err(|e| {
        trace!(
            target: EVENT_TARGET,
            size = bytes.len(),
            type_name = std::any::type_name::<T>(),
            reason = %e,
            "decode.failed"
        );
        Error::from(e)
    })
}

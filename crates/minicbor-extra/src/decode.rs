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

// Misc
// ----------------------------------------------------------------------------

/// Consume a break if it is the next token. Returns `true` when a break was consumed.
pub fn decode_break<'d>(
    d: &mut cbor::Decoder<'d>,
    len: Option<u64>,
) -> Result<bool, cbor::decode::Error> {
    if d.datatype()? != cbor::data::Type::Break {
        return Ok(false);
    }

    // NOTE: A break only ever closes an indefinite collection; anywhere else it is garbage.
    if len.is_some() {
        return Err(cbor::decode::Error::type_mismatch(cbor::data::Type::Break).at(d.position()));
    }

    d.skip()?;

    Ok(true)
}

/// Decode a chunk, but retain a reference to the decoded bytes.
pub fn tee<'d, A>(
    d: &mut cbor::Decoder<'d>,
    decoder: impl FnOnce(&mut cbor::Decoder<'d>) -> Result<A, cbor::decode::Error>,
) -> Result<(A, &'d [u8]), cbor::decode::Error> {
    let original_bytes = d.input();
    let start = d.position();
    let a = decoder(d)?;
    let end = d.position();
    Ok((a, &original_bytes[start..end]))
}

// Collections
// ----------------------------------------------------------------------------

/// Tell whether a collection being decoded has more elements to yield.
///
/// `len` is the length announced by the collection header (`None` for indefinite collections)
/// and `seen` the number of elements already decoded. For indefinite collections, the closing
/// break is consumed when reached. A break found in a definite collection is an error, and so is
/// an indefinite collection running out of input before its break.
pub fn has_more_elements(
    d: &mut cbor::Decoder<'_>,
    len: Option<u64>,
    seen: u64,
) -> Result<bool, cbor::decode::Error> {
    match len {
        Some(len) if seen >= len => Ok(false),
        _ => Ok(!decode_break(d, len)?),
    }
}

/// A capacity to pre-allocate for a collection, which is never more than what the remaining
/// input could possibly hold; each element occupies at least one byte.
pub fn capacity_hint(d: &cbor::Decoder<'_>, len: Option<u64>) -> usize {
    let remaining = d.input().len().saturating_sub(d.position());
    len.map(|len| usize::try_from(len).unwrap_or(usize::MAX).min(remaining))
        .unwrap_or_default()
}

/// Decode any heterogeneous CBOR array, irrespective of whether they're indefinite or definite.
///
/// The closure is given a callback to check the announced length against what it expects; the
/// check is a no-op on indefinite arrays, which must however be closed by a break right after
/// the last element.
pub fn heterogeneous_array<'d, A>(
    d: &mut cbor::Decoder<'d>,
    elems: impl FnOnce(
        &mut cbor::Decoder<'d>,
        &dyn Fn(u64) -> Result<(), cbor::decode::Error>,
    ) -> Result<A, cbor::decode::Error>,
) -> Result<A, cbor::decode::Error> {
    let position = d.position();

    match d.array()? {
        None => {
            let result = elems(d, &|_| Ok(()))?;
            if !decode_break(d, None)? {
                return Err(cbor::decode::Error::message(
                    "indefinite array has more elements than expected",
                )
                .at(d.position()));
            }
            Ok(result)
        }
        Some(len) => elems(
            d,
            &(move |expected_len| {
                if len != expected_len {
                    return Err(cbor::decode::Error::message(format!(
                        "CBOR array length mismatch: expected {expected_len} got {len}"
                    ))
                    .at(position));
                }

                Ok(())
            }),
        ),
    }
}

// Tests
// ----------------------------------------------------------------------------

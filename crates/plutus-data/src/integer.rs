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

//! Integers that fit in a 64-bit word (in magnitude, following CBOR's major types 0 and 1) are
//! encoded natively. Anything larger is a bignum: tag 2 or 3 followed by the big-endian
//! magnitude as bytes.

use crate::{bytes::decode_bounded_bytes, cbor};
use num::{bigint::Sign, BigInt, BigUint, ToPrimitive};

pub(crate) const TAG_POSITIVE_BIGNUM: u64 = 2;

pub(crate) const TAG_NEGATIVE_BIGNUM: u64 = 3;

pub(crate) fn encode_integer<W: cbor::encode::Write>(
    e: &mut cbor::Encoder<W>,
    n: &BigInt,
) -> Result<(), cbor::encode::Error<W::Error>> {
    match n.sign() {
        Sign::NoSign | Sign::Plus => encode_natural(e, n.magnitude()),
        Sign::Minus => {
            // NOTE: Negative integers, whether native or bignums, carry `-1 - n` and not `|n|`.
            let magnitude = n.magnitude() - BigUint::from(1_u8);
            match magnitude.to_u64() {
                Some(m) => {
                    let int = cbor::Int::try_from(-1 - i128::from(m))
                        .map_err(cbor::encode::Error::message)?;
                    e.int(int)?;
                }
                None => {
                    e.tag(cbor::IanaTag::NegBignum)?;
                    e.bytes(&magnitude.to_bytes_be())?;
                }
            }
            Ok(())
        }
    }
}

pub(crate) fn encode_natural<W: cbor::encode::Write>(
    e: &mut cbor::Encoder<W>,
    n: &BigUint,
) -> Result<(), cbor::encode::Error<W::Error>> {
    match n.to_u64() {
        Some(n) => {
            e.u64(n)?;
        }
        None => {
            e.tag(cbor::IanaTag::PosBignum)?;
            e.bytes(&n.to_bytes_be())?;
        }
    }
    Ok(())
}

/// Decode an integer, native or bignum.
pub(crate) fn decode_integer(d: &mut cbor::Decoder<'_>) -> Result<BigInt, cbor::decode::Error> {
    if d.datatype()? == cbor::Type::Tag {
        return decode_bignum(d);
    }

    Ok(BigInt::from(i128::from(d.int()?)))
}

/// Decode a tag 2 or tag 3 bignum. The magnitude may come as a chunked byte string.
///
/// A tag 3 magnitude `m` stands for `-1 - m` (RFC 8949 §3.4.3), not `-m`: it's what
/// [`encode_integer`] writes, so decoding is its exact inverse.
pub(crate) fn decode_bignum(d: &mut cbor::Decoder<'_>) -> Result<BigInt, cbor::decode::Error> {
    let position = d.position();
    let tag = d.tag()?.as_u64();
    let magnitude = BigUint::from_bytes_be(&decode_bounded_bytes(d)?);

    match tag {
        TAG_POSITIVE_BIGNUM => Ok(BigInt::from(magnitude)),
        TAG_NEGATIVE_BIGNUM => Ok(BigInt::from_biguint(Sign::Minus, magnitude + 1_u32)),
        _ => Err(cbor::decode::Error::message(format!(
            "unexpected tag {tag} where a bignum was expected"
        ))
        .at(position)),
    }
}

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

use crate::{
    bytes::{decode_bounded_bytes, encode_bounded_bytes},
    cbor, decode_from_slice, encode_to_vec,
    integer::{decode_bignum, encode_integer, TAG_NEGATIVE_BIGNUM, TAG_POSITIVE_BIGNUM},
    ConstrPlutusData, Error, PlutusDataKind, PlutusList, PlutusMap,
};
use num::BigInt;
use tracing::{instrument, Level};

/// How deep collections (lists, maps and constructor fields) may nest into one another when
/// decoding. Deeper inputs are rejected rather than exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// A type corresponding to the Plutus Core `Data` datatype.
///
/// Use this type to build any data structure meant to be representable on-chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PlutusData {
    Constr(ConstrPlutusData),
    Map(PlutusMap),
    List(PlutusList),
    Integer(BigInt),
    /// Bounded bytes.
    Bytes(Vec<u8>),
}

impl PlutusData {
    pub fn from_constr(constr: ConstrPlutusData) -> Self {
        Self::Constr(constr)
    }

    pub fn from_map(map: PlutusMap) -> Self {
        Self::Map(map)
    }

    pub fn from_list(list: PlutusList) -> Self {
        Self::List(list)
    }

    pub fn from_integer(integer: impl Into<BigInt>) -> Self {
        Self::Integer(integer.into())
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    pub fn kind(&self) -> PlutusDataKind {
        match self {
            Self::Constr(..) => PlutusDataKind::Constr,
            Self::Map(..) => PlutusDataKind::Map,
            Self::List(..) => PlutusDataKind::List,
            Self::Integer(..) => PlutusDataKind::Integer,
            Self::Bytes(..) => PlutusDataKind::Bytes,
        }
    }

    pub fn as_constr(&self) -> Option<&ConstrPlutusData> {
        match self {
            Self::Constr(constr) => Some(constr),
            Self::Map(..) | Self::List(..) | Self::Integer(..) | Self::Bytes(..) => None,
        }
    }

    pub fn as_map(&self) -> Option<&PlutusMap> {
        match self {
            Self::Map(map) => Some(map),
            Self::Constr(..) | Self::List(..) | Self::Integer(..) | Self::Bytes(..) => None,
        }
    }

    pub fn as_list(&self) -> Option<&PlutusList> {
        match self {
            Self::List(list) => Some(list),
            Self::Constr(..) | Self::Map(..) | Self::Integer(..) | Self::Bytes(..) => None,
        }
    }

    pub fn as_integer(&self) -> Option<&BigInt> {
        match self {
            Self::Integer(integer) => Some(integer),
            Self::Constr(..) | Self::Map(..) | Self::List(..) | Self::Bytes(..) => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes.as_slice()),
            Self::Constr(..) | Self::Map(..) | Self::List(..) | Self::Integer(..) => None,
        }
    }

    #[instrument(
        level = Level::TRACE,
        target = "plutus_data::codec",
        name = "plutus_data.encode",
        skip_all,
        fields(kind = %self.kind()),
    )]
    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_to_vec(self)
    }

    #[instrument(
        level = Level::TRACE,
        target = "plutus_data::codec",
        name = "plutus_data.decode",
        skip_all,
        fields(size = bytes.len()),
    )]
    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        decode_from_slice(bytes)
    }

    /// Decode a value found `depth` collections deep into the input.
    pub(crate) fn decode_nested(
        d: &mut cbor::Decoder<'_>,
        depth: usize,
    ) -> Result<Self, cbor::decode::Error> {
        use cbor::Type;

        if depth > MAX_NESTING_DEPTH {
            return Err(cbor::decode::Error::message(format!(
                "nesting too deep: more than {MAX_NESTING_DEPTH} levels"
            ))
            .at(d.position()));
        }

        match d.datatype()? {
            Type::Tag => match d.probe().tag()?.as_u64() {
                TAG_POSITIVE_BIGNUM | TAG_NEGATIVE_BIGNUM => decode_bignum(d).map(Self::Integer),
                _ => ConstrPlutusData::decode_nested(d, depth).map(Self::Constr),
            },
            Type::U8
            | Type::U16
            | Type::U32
            | Type::U64
            | Type::I8
            | Type::I16
            | Type::I32
            | Type::I64
            | Type::Int => Ok(Self::Integer(BigInt::from(i128::from(d.int()?)))),
            Type::Bytes | Type::BytesIndef => decode_bounded_bytes(d).map(Self::Bytes),
            Type::Array | Type::ArrayIndef => PlutusList::decode_nested(d, depth).map(Self::List),
            Type::Map | Type::MapIndef => PlutusMap::decode_nested(d, depth).map(Self::Map),
            t => Err(
                cbor::decode::Error::message(format!("invalid Plutus Data: unexpected {t}"))
                    .at(d.position()),
            ),
        }
    }
}

impl<C> cbor::Encode<C> for PlutusData {
    fn encode<W: cbor::encode::Write>(
        &self,
        e: &mut cbor::Encoder<W>,
        ctx: &mut C,
    ) -> Result<(), cbor::encode::Error<W::Error>> {
        match self {
            Self::Constr(constr) => e.encode_with(constr, ctx).map(|_| ()),
            Self::Map(map) => e.encode_with(map, ctx).map(|_| ()),
            Self::List(list) => e.encode_with(list, ctx).map(|_| ()),
            Self::Integer(integer) => encode_integer(e, integer),
            Self::Bytes(bytes) => encode_bounded_bytes(e, bytes),
        }
    }
}

impl<'b, C> cbor::Decode<'b, C> for PlutusData {
    fn decode(d: &mut cbor::Decoder<'b>, _ctx: &mut C) -> Result<Self, cbor::decode::Error> {
        Self::decode_nested(d, 0)
    }
}

// Tests
// ----------------------------------------------------------------------------

#[cfg(any(test, feature = "test-utils"))]
pub mod tests {
    use crate::{ConstrPlutusData, Framing, PlutusData, PlutusList, PlutusMap};
    use num::{bigint::Sign, BigInt, BigUint};
    use proptest::{collection, prelude::*};

    /// Integers spanning both sides of the native / bignum boundary.
    pub fn any_integer() -> impl Strategy<Value = BigInt> {
        prop_oneof![
            any::<i64>().prop_map(BigInt::from),
            any::<u64>().prop_map(|n| -BigInt::from(n) - 1),
            (any::<bool>(), collection::vec(any::<u8>(), 0..40)).prop_map(|(negative, bytes)| {
                let sign = if negative { Sign::Minus } else { Sign::Plus };
                BigInt::from_bytes_be(sign, &bytes)
            }),
        ]
    }

    /// Byte strings on both sides of the chunking threshold.
    pub fn any_bounded_bytes() -> impl Strategy<Value = Vec<u8>> {
        prop_oneof![
            collection::vec(any::<u8>(), 0..=64),
            collection::vec(any::<u8>(), 65..300),
        ]
    }

    fn any_framing() -> impl Strategy<Value = Framing> + Clone {
        prop_oneof![Just(Framing::Definite), Just(Framing::Indefinite)]
    }

    fn any_alternative() -> impl Strategy<Value = BigUint> {
        prop_oneof![
            (0..=127_u64).prop_map(BigUint::from),
            any::<u64>().prop_map(BigUint::from),
            collection::vec(any::<u8>(), 9..16).prop_map(|bytes| BigUint::from_bytes_be(&bytes)),
        ]
    }

    pub fn any_plutus_data() -> impl Strategy<Value = PlutusData> {
        let leaf = prop_oneof![
            any_integer().prop_map(PlutusData::Integer),
            any_bounded_bytes().prop_map(PlutusData::Bytes),
        ];

        leaf.prop_recursive(4, 64, 8, |inner| {
            let list = (any_framing(), collection::vec(inner.clone(), 0..8)).prop_map(
                |(framing, elems)| {
                    let mut list = PlutusList::with_framing(framing);
                    elems.into_iter().for_each(|elem| list.add(elem));
                    list
                },
            );

            prop_oneof![
                list.clone().prop_map(PlutusData::List),
                (any_alternative(), list)
                    .prop_map(|(alternative, fields)| PlutusData::Constr(ConstrPlutusData::new(
                        alternative,
                        fields
                    ))),
                (
                    any_framing(),
                    collection::vec((inner.clone(), inner), 0..8)
                )
                    .prop_map(|(framing, entries)| {
                        let mut map = PlutusMap::with_framing(framing);
                        for (key, value) in entries {
                            map.insert(key, value);
                        }
                        PlutusData::Map(map)
                    }),
            ]
        })
    }

    #[cfg(test)]
    mod internal {
        use super::any_plutus_data;
        use crate::{
            constr, ConstrPlutusData, Error, Framing, PlutusData, PlutusDataKind, PlutusList,
            PlutusMap, MAX_NESTING_DEPTH,
        };
        use num::BigInt;
        use proptest::prelude::*;
        use std::str::FromStr;
        use test_case::test_case;

        proptest! {
            #[test]
            fn roundtrip(data in any_plutus_data()) {
                let bytes = data.encode().unwrap();
                prop_assert_eq!(PlutusData::decode(&bytes).unwrap(), data);
            }

            #[test]
            fn encoding_is_stable(data in any_plutus_data()) {
                let bytes = data.encode().unwrap();
                let decoded = PlutusData::decode(&bytes).unwrap();
                prop_assert_eq!(decoded.encode().unwrap(), bytes);
            }
        }

        fn integer(n: &str) -> PlutusData {
            PlutusData::from_integer(BigInt::from_str(n).unwrap())
        }

        #[test_case(integer("0"), "00"; "zero")]
        #[test_case(integer("-1"), "20"; "minus one")]
        #[test_case(integer("18446744073709551615"), "1bffffffffffffffff"; "2^64 - 1")]
        #[test_case(integer("18446744073709551616"), "c249010000000000000000"; "2^64")]
        #[test_case(integer("-18446744073709551616"), "3bffffffffffffffff"; "-2^64")]
        #[test_case(integer("-18446744073709551617"), "c349010000000000000000"; "-2^64 - 1")]
        #[test_case(PlutusData::from_bytes(vec![]), "40"; "empty bytes")]
        #[test_case(PlutusData::from_bytes(vec![0xFF; 3]), "43ffffff"; "short bytes")]
        #[test_case(PlutusData::from_list(PlutusList::new()), "80"; "empty list")]
        #[test_case(PlutusData::from_map(PlutusMap::new()), "a0"; "empty map")]
        #[test_case(constr!(0), "d87980"; "unit constructor")]
        #[test_case(constr!(1, [true, 42_u64]), "d87a82d87a80182a"; "constructor with fields")]
        #[test_case(
            constr!(0, [constr!(200, [vec![0xAB_u8]])]),
            "d87981d8668218c88141ab";
            "nested general form"
        )]
        fn encode_decode_vectors(data: PlutusData, expected: &str) {
            let expected = hex::decode(expected).unwrap();
            assert_eq!(data.encode().unwrap(), expected);
            assert_eq!(PlutusData::decode(&expected).unwrap(), data);
        }

        #[test]
        fn bytes_are_chunked_past_64_bytes() {
            let bytes = vec![0x11; 65];
            let encoded = PlutusData::from_bytes(bytes.clone()).encode().unwrap();

            assert_eq!(encoded[..3], [0x5f, 0x58, 0x40]);
            assert_eq!(encoded[3 + 64..], [0x41, 0x11, 0xff]);
            assert_eq!(PlutusData::decode(&encoded).unwrap().as_bytes(), Some(&bytes[..]));
        }

        #[test]
        fn constr_alternative_zero_without_fields() {
            let bytes = hex::decode("d87980").unwrap();
            let data = PlutusData::decode(&bytes).unwrap();

            let constr = data.as_constr().unwrap();
            assert_eq!(constr.alternative(), &0_u64.into());
            assert!(constr.fields().is_empty());
        }

        #[test]
        fn nested_framings_survive_roundtrip() {
            // [_ {_ 1: h'', 2: [3] }, 121([_ ])]
            let bytes = hex::decode("9fbf0140028103ffd8799fffff").unwrap();
            let data = PlutusData::decode(&bytes).unwrap();

            let list = data.as_list().unwrap();
            assert_eq!(list.framing(), Framing::Indefinite);
            assert_eq!(list.get(0).unwrap().as_map().unwrap().framing(), Framing::Indefinite);
            assert_eq!(
                list.get(1).unwrap().as_constr().unwrap().fields().framing(),
                Framing::Indefinite
            );
            assert_eq!(data.encode().unwrap(), bytes);
        }

        #[test]
        fn downcasts() {
            let data = PlutusData::from_integer(14);
            assert_eq!(data.kind(), PlutusDataKind::Integer);
            assert_eq!(data.as_integer(), Some(&BigInt::from(14)));
            assert!(data.as_bytes().is_none());
            assert!(data.as_list().is_none());
            assert!(data.as_map().is_none());
            assert!(data.as_constr().is_none());

            let data = PlutusData::from_constr(ConstrPlutusData::new(3_u64, PlutusList::new()));
            assert_eq!(data.kind(), PlutusDataKind::Constr);
            assert!(data.as_integer().is_none());
            assert!(data.as_constr().is_some());
        }

        fn nested(prefix: &str, levels: usize, leaf: &str) -> Vec<u8> {
            hex::decode(format!("{}{leaf}", prefix.repeat(levels))).unwrap()
        }

        #[test_case("81"; "lists")]
        #[test_case("9f"; "indefinite lists")]
        #[test_case("d87981"; "constructors")]
        #[test_case("a100"; "map values")]
        fn nesting_up_to_the_limit(prefix: &str) {
            let bytes = nested(prefix, MAX_NESTING_DEPTH, "00");
            // Indefinite collections still need closing.
            let bytes = if prefix == "9f" {
                [bytes, vec![0xff; MAX_NESTING_DEPTH]].concat()
            } else {
                bytes
            };
            let data = PlutusData::decode(&bytes).unwrap();
            assert_eq!(data.encode().unwrap(), bytes);
        }

        #[test_case("81", MAX_NESTING_DEPTH + 1; "lists just past the limit")]
        #[test_case("81", 200_000; "lists far past the limit")]
        #[test_case("9f", 200_000; "indefinite lists")]
        #[test_case("d87981", 100_000; "constructors")]
        #[test_case("d866820081", 100_000; "general form constructors")]
        #[test_case("a100", 100_000; "map values")]
        #[test_case("a1", 100_000; "map keys")]
        fn nesting_too_deep(prefix: &str, levels: usize) {
            let bytes = nested(prefix, levels, "00");
            assert!(matches!(PlutusData::decode(&bytes), Err(Error::Decoding(..))));
        }

        #[test_case("60"; "text string")]
        #[test_case("f5"; "boolean")]
        #[test_case("f6"; "null")]
        #[test_case("f93c00"; "half float")]
        #[test_case("ff"; "stray break")]
        #[test_case("d87960"; "constructor with text fields")]
        #[test_case("c260"; "bignum of text")]
        #[test_case("d818"; "tag without content")]
        #[test_case("d81840"; "unknown tag")]
        #[test_case("8160"; "text inside a list")]
        #[test_case("0000"; "leftovers")]
        #[test_case(""; "empty input")]
        fn decode_failures(s: &str) {
            assert!(matches!(
                PlutusData::decode(&hex::decode(s).unwrap()),
                Err(Error::Decoding(..))
            ));
        }
    }
}

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
    cbor, decode_from_slice, encode_to_vec,
    integer::{decode_integer, encode_natural},
    Error, PlutusList,
};
use num::{BigUint, ToPrimitive};

/// The tag of the general form, used for alternatives that have no compact tag.
pub const GENERAL_FORM_TAG: u64 = 102;

const COMPACT_TAGS_FIRST: u64 = 121;
const COMPACT_TAGS_LAST: u64 = 127;

const EXTENDED_TAGS_FIRST: u64 = 1280;
const EXTENDED_TAGS_LAST: u64 = 1400;

/// The first alternative encoded with an extended tag.
const EXTENDED_ALTERNATIVES_OFFSET: u64 = COMPACT_TAGS_LAST - COMPACT_TAGS_FIRST + 1;

/// The compact CBOR tag of a constructor alternative, if any:
///
/// - alternatives 0-6 map to tags 121-127;
/// - alternatives 7-127 map to tags 1280-1400;
/// - any other alternative has no compact tag and goes through the general form.
///
/// See also [`from_compact_tag`], which is its exact inverse.
pub fn to_compact_tag(alternative: u64) -> Option<u64> {
    if alternative < EXTENDED_ALTERNATIVES_OFFSET {
        Some(COMPACT_TAGS_FIRST + alternative)
    } else if alternative <= EXTENDED_ALTERNATIVES_OFFSET + EXTENDED_TAGS_LAST - EXTENDED_TAGS_FIRST
    {
        Some(EXTENDED_TAGS_FIRST - EXTENDED_ALTERNATIVES_OFFSET + alternative)
    } else {
        None
    }
}

/// The constructor alternative denoted by a compact CBOR tag. `None` for tags outside of the two
/// compact ranges, including the general form tag.
pub fn from_compact_tag(tag: u64) -> Option<u64> {
    match tag {
        COMPACT_TAGS_FIRST..=COMPACT_TAGS_LAST => Some(tag - COMPACT_TAGS_FIRST),
        EXTENDED_TAGS_FIRST..=EXTENDED_TAGS_LAST => {
            Some(tag - EXTENDED_TAGS_FIRST + EXTENDED_ALTERNATIVES_OFFSET)
        }
        _ => None,
    }
}

/// The n-th constructor of a sum type, applied to its arguments.
///
/// The alternative isn't serialised as such; depending on its value it is either folded into a
/// compact tag, or written explicitly next to the arguments under the general form tag:
///
/// ```text
/// alternatives 0-6    : tag(121 + alternative) [ ...fields ]
/// alternatives 7-127  : tag(1273 + alternative) [ ...fields ]
/// other alternatives  : tag(102) [ alternative, [ ...fields ] ]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ConstrPlutusData {
    alternative: BigUint,
    fields: PlutusList,
}

impl ConstrPlutusData {
    pub fn new(alternative: impl Into<BigUint>, fields: PlutusList) -> Self {
        Self {
            alternative: alternative.into(),
            fields,
        }
    }

    /// Which constructor of the sum type this is.
    pub fn alternative(&self) -> &BigUint {
        &self.alternative
    }

    /// The arguments of the constructor.
    pub fn fields(&self) -> &PlutusList {
        &self.fields
    }

    pub fn into_fields(self) -> PlutusList {
        self.fields
    }

    /// The compact tag under which this constructor is encoded; `None` means the general form.
    pub fn compact_tag(&self) -> Option<u64> {
        self.alternative.to_u64().and_then(to_compact_tag)
    }

    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        decode_from_slice(bytes)
    }

    /// The fields sit at the same depth as the constructor itself; their elements one level
    /// below.
    pub(crate) fn decode_nested(
        d: &mut cbor::Decoder<'_>,
        depth: usize,
    ) -> Result<Self, cbor::decode::Error> {
        let position = d.position();
        let tag = d.tag()?.as_u64();

        if tag == GENERAL_FORM_TAG {
            return cbor::heterogeneous_array(d, |d, assert_len| {
                assert_len(2)?;

                let position = d.position();
                let alternative = decode_integer(d)?.to_biguint().ok_or_else(|| {
                    cbor::decode::Error::message("negative constructor alternative").at(position)
                })?;

                Ok(Self {
                    alternative,
                    fields: PlutusList::decode_nested(d, depth)?,
                })
            });
        }

        let alternative = from_compact_tag(tag).ok_or_else(|| {
            cbor::decode::Error::message(format!("unknown constructor tag {tag}")).at(position)
        })?;

        Ok(Self {
            alternative: BigUint::from(alternative),
            fields: PlutusList::decode_nested(d, depth)?,
        })
    }
}

impl<C> cbor::Encode<C> for ConstrPlutusData {
    fn encode<W: cbor::encode::Write>(
        &self,
        e: &mut cbor::Encoder<W>,
        ctx: &mut C,
    ) -> Result<(), cbor::encode::Error<W::Error>> {
        match self.compact_tag() {
            Some(tag) => {
                e.tag(cbor::Tag::new(tag))?;
                e.encode_with(&self.fields, ctx)?;
            }
            None => {
                e.tag(cbor::Tag::new(GENERAL_FORM_TAG))?;
                e.array(2)?;
                encode_natural(e, &self.alternative)?;
                e.encode_with(&self.fields, ctx)?;
            }
        }

        Ok(())
    }
}

impl<'b, C> cbor::Decode<'b, C> for ConstrPlutusData {
    fn decode(d: &mut cbor::Decoder<'b>, _ctx: &mut C) -> Result<Self, cbor::decode::Error> {
        Self::decode_nested(d, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::{from_compact_tag, to_compact_tag, ConstrPlutusData, GENERAL_FORM_TAG};
    use crate::{Framing, PlutusData, PlutusList};
    use num::BigUint;
    use proptest::prelude::*;
    use std::str::FromStr;
    use test_case::test_case;

    #[test_case(0, Some(121))]
    #[test_case(6, Some(127))]
    #[test_case(7, Some(1280))]
    #[test_case(127, Some(1400))]
    #[test_case(128, None)]
    #[test_case(u64::MAX, None)]
    fn compact_tags(alternative: u64, tag: Option<u64>) {
        assert_eq!(to_compact_tag(alternative), tag);
        if let Some(tag) = tag {
            assert_eq!(from_compact_tag(tag), Some(alternative));
        }
    }

    #[test_case(120; "just before compact range")]
    #[test_case(128; "just after compact range")]
    #[test_case(1279; "just before extended range")]
    #[test_case(1401; "just after extended range")]
    #[test_case(GENERAL_FORM_TAG; "general form")]
    fn not_a_compact_tag(tag: u64) {
        assert_eq!(from_compact_tag(tag), None);
    }

    proptest! {
        #[test]
        fn compact_tags_are_inverses(alternative in 0..=127_u64) {
            let tag = to_compact_tag(alternative);
            prop_assert!(tag.is_some());
            prop_assert_eq!(tag.and_then(from_compact_tag), Some(alternative));
        }

        #[test]
        fn no_compact_tag_beyond_127(alternative in 128_u64..) {
            prop_assert_eq!(to_compact_tag(alternative), None);
        }
    }

    fn fields(elems: &[u64]) -> PlutusList {
        elems.iter().copied().map(PlutusData::from).collect()
    }

    #[test_case(0, &[], "d87980"; "alternative 0, no fields")]
    #[test_case(1, &[42], "d87a81182a"; "alternative 1, one field")]
    #[test_case(6, &[], "d87f80"; "alternative 6")]
    #[test_case(7, &[], "d9050080"; "alternative 7")]
    #[test_case(127, &[1, 2], "d9057882 0102"; "alternative 127")]
    #[test_case(128, &[], "d866821880 80"; "alternative 128")]
    #[test_case(1000, &[1], "d8668219 03e8 8101"; "alternative 1000")]
    fn encode_decode_vectors(alternative: u64, elems: &[u64], expected: &str) {
        let expected = hex::decode(expected.replace(' ', "")).unwrap();
        let constr = ConstrPlutusData::new(alternative, fields(elems));

        assert_eq!(constr.encode().unwrap(), expected);
        assert_eq!(ConstrPlutusData::decode(&expected).unwrap(), constr);
    }

    #[test]
    fn general_form_for_huge_alternatives() {
        let alternative = BigUint::from_str("18446744073709551616").unwrap();
        let constr = ConstrPlutusData::new(alternative.clone(), PlutusList::new());

        assert_eq!(constr.compact_tag(), None);
        assert_eq!(
            hex::encode(constr.encode().unwrap()),
            "d86682c24901000000000000000080"
        );
        assert_eq!(
            ConstrPlutusData::decode(&constr.encode().unwrap()).unwrap().alternative(),
            &alternative
        );
    }

    #[test_case("d866820080", 0; "general form for a compact alternative")]
    #[test_case("d8669f0580ff", 5; "indefinite general form")]
    #[test_case("d866821904d29fff", 1234; "indefinite fields")]
    fn decode_general_form(s: &str, alternative: u64) {
        let constr = ConstrPlutusData::decode(&hex::decode(s).unwrap()).unwrap();
        assert_eq!(constr.alternative(), &BigUint::from(alternative));
    }

    #[test]
    fn fields_framing_is_preserved() {
        let bytes = hex::decode("d8799f0102ff").unwrap();
        let constr = ConstrPlutusData::decode(&bytes).unwrap();
        assert_eq!(constr.fields().framing(), Framing::Indefinite);
        assert_eq!(constr.fields().len(), 2);
        assert_eq!(constr.encode().unwrap(), bytes);
    }

    #[test_case("d86682208080"; "negative alternative")]
    #[test_case("d866830080"; "general form too short")]
    #[test_case("d86683008000"; "general form too long")]
    #[test_case("d8669f0080"; "general form unterminated")]
    #[test_case("d8669f008000ff"; "indefinite general form too long")]
    #[test_case("d8668180"; "general form missing fields")]
    #[test_case("d87880"; "tag 120")]
    #[test_case("d9057980"; "tag 1401")]
    #[test_case("d87900"; "fields not a list")]
    #[test_case("d879"; "missing fields")]
    #[test_case("80"; "not a tag")]
    fn decode_failures(s: &str) {
        assert!(ConstrPlutusData::decode(&hex::decode(s).unwrap()).is_err());
    }
}

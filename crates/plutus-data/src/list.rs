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

use crate::{cbor, decode_from_slice, encode_to_vec, Error, Framing, PlutusData};

/// An ordered sequence of Plutus Data. Elements can only be appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PlutusList {
    elements: Vec<PlutusData>,
    framing: Framing,
}

impl PlutusList {
    /// An empty list, encoded as a definite array.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_framing(framing: Framing) -> Self {
        Self {
            elements: Vec::new(),
            framing,
        }
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&PlutusData, Error> {
        self.elements.get(index).ok_or(Error::IndexOutOfRange {
            index,
            length: self.elements.len(),
        })
    }

    pub fn add(&mut self, elem: PlutusData) {
        self.elements.push(elem);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlutusData> {
        self.elements.iter()
    }

    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        decode_from_slice(bytes)
    }

    pub(crate) fn decode_nested(
        d: &mut cbor::Decoder<'_>,
        depth: usize,
    ) -> Result<Self, cbor::decode::Error> {
        let len = d.array()?;

        let mut elements = Vec::with_capacity(cbor::capacity_hint(d, len));
        while cbor::has_more_elements(d, len, elements.len() as u64)? {
            elements.push(PlutusData::decode_nested(d, depth + 1)?);
        }

        Ok(Self {
            elements,
            framing: Framing::from_len(len),
        })
    }
}

impl AsRef<[PlutusData]> for PlutusList {
    fn as_ref(&self) -> &[PlutusData] {
        self.elements.as_slice()
    }
}

impl FromIterator<PlutusData> for PlutusList {
    fn from_iter<T: IntoIterator<Item = PlutusData>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
            framing: Framing::default(),
        }
    }
}

impl IntoIterator for PlutusList {
    type Item = PlutusData;
    type IntoIter = std::vec::IntoIter<PlutusData>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlutusList {
    type Item = &'a PlutusData;
    type IntoIter = std::slice::Iter<'a, PlutusData>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<C> cbor::Encode<C> for PlutusList {
    fn encode<W: cbor::encode::Write>(
        &self,
        e: &mut cbor::Encoder<W>,
        ctx: &mut C,
    ) -> Result<(), cbor::encode::Error<W::Error>> {
        match self.framing {
            Framing::Definite => {
                e.array(self.elements.len() as u64)?;
            }
            Framing::Indefinite => {
                e.begin_array()?;
            }
        }

        for elem in &self.elements {
            e.encode_with(elem, ctx)?;
        }

        if self.framing == Framing::Indefinite {
            e.end()?;
        }

        Ok(())
    }
}

impl<'b, C> cbor::Decode<'b, C> for PlutusList {
    fn decode(d: &mut cbor::Decoder<'b>, _ctx: &mut C) -> Result<Self, cbor::decode::Error> {
        Self::decode_nested(d, 0)
    }
}

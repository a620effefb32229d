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

use crate::{cbor, decode_from_slice, encode_to_vec, Error, Framing, PlutusData, PlutusList};
use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
};

/// An associative container from Plutus Data to Plutus Data.
///
/// Entries are kept, iterated and encoded in insertion order. This is *not* a canonical CBOR
/// map: callers needing sorted keys must insert them sorted. Keys are compared structurally, so
/// two keys with the same variant and content are the same key.
///
/// Decoded maps keep every entry they were encoded with, duplicate keys included, so that they
/// re-encode to the very same bytes. Lookups then resolve to the last of the duplicates.
#[derive(Debug, Clone, Default)]
pub struct PlutusMap {
    entries: Vec<(PlutusData, PlutusData)>,
    framing: Framing,
    // NOTE: Position in 'entries' of the last entry holding each key.
    index: HashMap<PlutusData, usize>,
}

impl PlutusMap {
    /// An empty map, encoded as a definite map.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_framing(framing: Framing) -> Self {
        Self {
            entries: Vec::new(),
            framing,
            index: HashMap::new(),
        }
    }

    pub fn framing(&self) -> Framing {
        self.framing
    }

    /// The number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert an entry, returning the value previously associated with that key, if any. An
    /// overwritten entry keeps its original position.
    pub fn insert(&mut self, key: PlutusData, value: PlutusData) -> Option<PlutusData> {
        match self.index.get(&key).copied() {
            Some(position) => self
                .entries
                .get_mut(position)
                .map(|(_, existing)| std::mem::replace(existing, value)),
            None => {
                self.push(key, value);
                None
            }
        }
    }

    pub fn get(&self, key: &PlutusData) -> Option<&PlutusData> {
        self.index
            .get(key)
            .and_then(|&position| self.entries.get(position))
            .map(|(_, v)| v)
    }

    /// A snapshot of all keys, in iteration order.
    pub fn keys(&self) -> PlutusList {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlutusData, &PlutusData)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn encode(&self) -> Result<Vec<u8>, Error> {
        encode_to_vec(self)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, Error> {
        decode_from_slice(bytes)
    }

    /// Append an entry, without looking for an existing one.
    fn push(&mut self, key: PlutusData, value: PlutusData) {
        self.index.insert(key.clone(), self.entries.len());
        self.entries.push((key, value));
    }

    pub(crate) fn decode_nested(
        d: &mut cbor::Decoder<'_>,
        depth: usize,
    ) -> Result<Self, cbor::decode::Error> {
        let len = d.map()?;
        let capacity = cbor::capacity_hint(d, len);

        let mut map = Self {
            entries: Vec::with_capacity(capacity),
            framing: Framing::from_len(len),
            index: HashMap::with_capacity(capacity),
        };

        while cbor::has_more_elements(d, len, map.entries.len() as u64)? {
            let key = PlutusData::decode_nested(d, depth + 1)?;
            let value = PlutusData::decode_nested(d, depth + 1)?;
            map.push(key, value);
        }

        Ok(map)
    }
}

impl PartialEq for PlutusMap {
    fn eq(&self, other: &Self) -> bool {
        self.framing == other.framing && self.entries == other.entries
    }
}

impl Eq for PlutusMap {}

impl Hash for PlutusMap {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
        self.framing.hash(state);
    }
}

impl FromIterator<(PlutusData, PlutusData)> for PlutusMap {
    fn from_iter<T: IntoIterator<Item = (PlutusData, PlutusData)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl IntoIterator for PlutusMap {
    type Item = (PlutusData, PlutusData);
    type IntoIter = std::vec::IntoIter<(PlutusData, PlutusData)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<C> cbor::Encode<C> for PlutusMap {
    fn encode<W: cbor::encode::Write>(
        &self,
        e: &mut cbor::Encoder<W>,
        ctx: &mut C,
    ) -> Result<(), cbor::encode::Error<W::Error>> {
        match self.framing {
            Framing::Definite => {
                e.map(self.entries.len() as u64)?;
            }
            Framing::Indefinite => {
                e.begin_map()?;
            }
        }

        for (key, value) in &self.entries {
            e.encode_with(key, ctx)?;
            e.encode_with(value, ctx)?;
        }

        if self.framing == Framing::Indefinite {
            e.end()?;
        }

        Ok(())
    }
}

impl<'b, C> cbor::Decode<'b, C> for PlutusMap {
    fn decode(d: &mut cbor::Decoder<'b>, _ctx: &mut C) -> Result<Self, cbor::decode::Error> {
        Self::decode_nested(d, 0)
    }
}

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

use crate::{ConstrPlutusData, PlutusData, PlutusList, PlutusMap};
use num::{BigInt, BigUint};

macro_rules! impl_from_integer {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for PlutusData {
                fn from(n: $t) -> Self {
                    Self::Integer(BigInt::from(n))
                }
            }
        )+
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, BigUint);

impl From<BigInt> for PlutusData {
    fn from(n: BigInt) -> Self {
        Self::Integer(n)
    }
}

impl From<Vec<u8>> for PlutusData {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for PlutusData {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for PlutusData {
    fn from(bytes: [u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

/// Booleans follow the on-chain convention: `False` is the first constructor, `True` the second.
impl From<bool> for PlutusData {
    fn from(b: bool) -> Self {
        Self::Constr(ConstrPlutusData::new(u64::from(b), PlutusList::new()))
    }
}

impl From<ConstrPlutusData> for PlutusData {
    fn from(constr: ConstrPlutusData) -> Self {
        Self::Constr(constr)
    }
}

impl From<PlutusList> for PlutusData {
    fn from(list: PlutusList) -> Self {
        Self::List(list)
    }
}

impl From<PlutusMap> for PlutusData {
    fn from(map: PlutusMap) -> Self {
        Self::Map(map)
    }
}

/// Optional values as found in the ledger's script context: `None` is the first constructor,
/// `Some` the second.
impl<T: Into<PlutusData>> From<Option<T>> for PlutusData {
    fn from(opt: Option<T>) -> Self {
        match opt {
            None => Self::Constr(ConstrPlutusData::new(0_u64, PlutusList::new())),
            Some(value) => Self::Constr(ConstrPlutusData::new(
                1_u64,
                [value.into()].into_iter().collect(),
            )),
        }
    }
}

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

/// Build a constructor application out of an alternative and fields convertible into
/// [`PlutusData`](crate::PlutusData). Fields are held in a definite list.
///
/// ```
/// use plutus_data::{constr, PlutusData};
///
/// let unit = constr!(0);
/// let pair = constr!(1, [42_u64, vec![0xCA, 0xFE]]);
///
/// assert_eq!(hex::encode(unit.encode().unwrap()), "d87980");
/// assert_eq!(hex::encode(pair.encode().unwrap()), "d87a82182a42cafe");
/// ```
#[macro_export]
macro_rules! constr {
    ($index:expr, [$($field:expr),* $(,)?] $(,)?) => {{
        let fields: $crate::PlutusList = [$($crate::PlutusData::from($field)),*]
            .into_iter()
            .collect();
        $crate::PlutusData::Constr($crate::ConstrPlutusData::new($index as u64, fields))
    }};

    ($index:expr $(,)?) => {{
        $crate::constr!($index, [])
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Framing, PlutusData};

    #[test]
    fn constr_without_fields() {
        let data = constr!(3);
        let constr = data.as_constr().unwrap();
        assert_eq!(constr.alternative(), &3_u64.into());
        assert!(constr.fields().is_empty());
        assert_eq!(constr.fields().framing(), Framing::Definite);
    }

    #[test]
    fn constr_with_heterogeneous_fields() {
        let data = constr!(200, [1_u64, vec![0xAB], constr!(0), true,]);
        let constr = data.as_constr().unwrap();
        assert_eq!(constr.fields().len(), 4);
        assert_eq!(constr.fields().get(1).unwrap(), &PlutusData::from(vec![0xAB]));
        assert_eq!(constr.fields().get(3).unwrap(), &constr!(1));
        assert_eq!(constr.compact_tag(), None);
    }
}

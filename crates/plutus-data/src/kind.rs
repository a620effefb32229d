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

use std::fmt;

/// The variant of a [`crate::PlutusData`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlutusDataKind {
    /// A specific constructor of a sum type, along with its arguments.
    Constr,
    Map,
    List,
    Integer,
    /// Bounded bytes.
    Bytes,
}

impl fmt::Display for PlutusDataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Constr => "constr",
            Self::Map => "map",
            Self::List => "list",
            Self::Integer => "integer",
            Self::Bytes => "bytes",
        })
    }
}

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

/// How a collection (list or map) is framed in CBOR.
///
/// Both framings denote the same logical value, but not the same bytes. Decoded collections
/// remember the framing they came with and are re-encoded the same way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Framing {
    /// The number of elements is announced up front.
    #[default]
    Definite,
    /// The collection is opened with no length, and closed by a break.
    Indefinite,
}

impl Framing {
    pub(crate) fn from_len(len: Option<u64>) -> Self {
        match len {
            Some(_) => Self::Definite,
            None => Self::Indefinite,
        }
    }
}

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

/// Write bytes that are already CBOR-encoded, verbatim. The caller is responsible for them being
/// exactly one well-formed CBOR value; nothing is checked here.
pub fn write_raw<W: cbor::encode::Write>(
    e: &mut cbor::Encoder<W>,
    bytes: &[u8],
) -> Result<(), cbor::encode::Error<W::Error>> {
    e.writer_mut()
        .write_all(bytes)
        .map_err(cbor::encode::Error::write)
}

#[cfg(test)]
mod tests {
    use crate::{cbor, write_raw};

    #[test]
    fn write_raw_splices_bytes_in_place() {
        let element = hex::decode("d87980").unwrap();

        let mut e = cbor::Encoder::new(Vec::new());
        e.array(2).unwrap();
        write_raw(&mut e, &element).unwrap();
        e.u8(1).unwrap();

        assert_eq!(hex::encode(e.into_writer()), "82d8798001");
    }
}

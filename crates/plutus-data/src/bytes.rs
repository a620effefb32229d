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

/// Byte strings longer than this are encoded as an indefinite byte string made of chunks of
/// (at most) that size.
pub const MAX_BYTES_CHUNK_SIZE: usize = 64;

pub(crate) fn encode_bounded_bytes<W: cbor::encode::Write>(
    e: &mut cbor::Encoder<W>,
    bytes: &[u8],
) -> Result<(), cbor::encode::Error<W::Error>> {
    if bytes.len() <= MAX_BYTES_CHUNK_SIZE {
        e.bytes(bytes)?;
        return Ok(());
    }

    e.begin_bytes()?;
    for chunk in bytes.chunks(MAX_BYTES_CHUNK_SIZE) {
        e.bytes(chunk)?;
    }
    e.end()?;

    Ok(())
}

/// Decode a byte string, definite or indefinite. Chunks are concatenated, and their size isn't
/// checked: chunking only matters when encoding.
pub(crate) fn decode_bounded_bytes(
    d: &mut cbor::Decoder<'_>,
) -> Result<Vec<u8>, cbor::decode::Error> {
    match d.datatype()? {
        cbor::Type::Bytes => Ok(d.bytes()?.to_vec()),
        cbor::Type::BytesIndef => {
            let mut bytes = Vec::new();
            for chunk in d.bytes_iter()? {
                bytes.extend_from_slice(chunk?);
            }
            Ok(bytes)
        }
        t => Err(
            cbor::decode::Error::message(format!("expected bounded bytes, got {t}"))
                .at(d.position()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_bounded_bytes, encode_bounded_bytes, MAX_BYTES_CHUNK_SIZE};
    use crate::cbor;
    use proptest::prelude::*;
    use test_case::test_case;

    fn encode(bytes: &[u8]) -> Vec<u8> {
        let mut e = cbor::Encoder::new(Vec::new());
        encode_bounded_bytes(&mut e, bytes).unwrap();
        e.into_writer()
    }

    fn decode(bytes: &[u8]) -> Vec<u8> {
        let mut d = cbor::Decoder::new(bytes);
        let decoded = decode_bounded_bytes(&mut d).unwrap();
        assert_eq!(d.position(), bytes.len(), "leftovers");
        decoded
    }

    #[test_case(0, "40"; "empty")]
    #[test_case(1, "41"; "single byte")]
    #[test_case(23, "57"; "largest immediate length")]
    #[test_case(24, "5818"; "one-byte length")]
    #[test_case(64, "5840"; "largest definite")]
    fn single_definite_token(len: usize, header: &str) {
        let bytes = vec![0xAB; len];
        let encoded = encode(&bytes);
        assert_eq!(hex::encode(&encoded[..header.len() / 2]), header);
        assert_eq!(&encoded[header.len() / 2..], &bytes[..]);
        assert_eq!(decode(&encoded), bytes);
    }

    #[test]
    fn chunked_past_64_bytes() {
        let bytes: Vec<u8> = (0..65).collect();
        let encoded = encode(&bytes);

        let mut expected = vec![0x5f, 0x58, 0x40];
        expected.extend_from_slice(&bytes[..64]);
        expected.extend_from_slice(&[0x41, 64, 0xff]);

        assert_eq!(encoded, expected);
        assert_eq!(decode(&encoded), bytes);
    }

    #[test]
    fn exact_multiple_of_chunk_size() {
        let bytes = vec![0x01; 2 * MAX_BYTES_CHUNK_SIZE];
        let encoded = encode(&bytes);
        assert_eq!(encoded.len(), 1 + 2 * (2 + MAX_BYTES_CHUNK_SIZE) + 1);
        assert_eq!(encoded[0], 0x5f);
        assert_eq!(encoded[encoded.len() - 1], 0xff);
        assert_eq!(decode(&encoded), bytes);
    }

    #[test_case("5fff", &[]; "empty indefinite")]
    #[test_case("5f41014102ff", &[1, 2]; "small chunks")]
    #[test_case("5f40ff", &[]; "empty chunk")]
    fn non_canonical_chunks(s: &str, expected: &[u8]) {
        assert_eq!(decode(&hex::decode(s).unwrap()), expected);
    }

    #[test_case("00"; "integer")]
    #[test_case("6161"; "text")]
    #[test_case("5f6161ff"; "text chunk")]
    #[test_case("5f4101"; "unterminated")]
    fn failures(s: &str) {
        let bytes = hex::decode(s).unwrap();
        let mut d = cbor::Decoder::new(&bytes);
        let result: Result<Vec<u8>, _> = decode_bounded_bytes(&mut d);
        assert!(result.is_err());
    }

    proptest! {
        #[test]
        fn roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
            let encoded = encode(&bytes);
            prop_assert_eq!(encoded[0] == 0x5f, bytes.len() > MAX_BYTES_CHUNK_SIZE);
            prop_assert_eq!(decode(&encoded), bytes);
        }
    }
}

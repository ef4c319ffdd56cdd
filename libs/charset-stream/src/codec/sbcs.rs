//! Single-byte codec (spec.md §4.2). State is unused — every call is a
//! direct table lookup.

use crate::tables::single_byte::SbcsTable;
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, Param, DECODE_ERROR, ENCODE_FLUSH};

fn table(descriptor: &'static CodecDescriptor) -> &'static SbcsTable {
    match descriptor.param {
        Param::Sbcs(t) => t,
        _ => unreachable!("sbcs descriptor without an Sbcs param"),
    }
}

pub fn decode(descriptor: &'static CodecDescriptor, byte: u8, _state: &mut CodecState, emit: &mut EmitDecode) {
    match table(descriptor).decode_byte(byte) {
        Some(code) => emit(code),
        None => emit(DECODE_ERROR),
    }
}

pub fn encode(descriptor: &'static CodecDescriptor, code: i32, _state: &mut CodecState, emit: &mut EmitEncode) -> bool {
    if code == ENCODE_FLUSH {
        return true;
    }
    match table(descriptor).encode_char(code as u32) {
        Some(byte) => {
            emit(byte);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::descriptor_for;
    use crate::types::EncodingId;

    fn decode_str(id: EncodingId, bytes: &[u8]) -> Vec<u32> {
        let d = descriptor_for(id);
        let mut state = CodecState::INITIAL;
        let mut out = Vec::new();
        for &b in bytes {
            (d.decode)(d, b, &mut state, &mut |c| out.push(c));
        }
        out
    }

    #[test]
    fn ascii_round_trips() {
        let out = decode_str(EncodingId::Ascii, b"Hi");
        assert_eq!(out, vec!['H' as u32, 'i' as u32]);
    }

    #[test]
    fn ascii_high_bit_is_invalid() {
        let out = decode_str(EncodingId::Ascii, &[0x80]);
        assert_eq!(out, vec![DECODE_ERROR]);
    }

    #[test]
    fn cp1252_euro_sign() {
        let out = decode_str(EncodingId::Cp1252, &[0x80]);
        assert_eq!(out, vec![0x20ACu32]);
    }

    #[test]
    fn latin1_is_identity() {
        let out = decode_str(EncodingId::Iso8859_1, &[0xE9]);
        assert_eq!(out, vec![0xE9u32]);
    }

    #[test]
    fn encode_then_decode_round_trips() {
        let d = descriptor_for(EncodingId::Koi8R);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x0410, &mut state, &mut |b| bytes.push(b)));
        let mut out = Vec::new();
        let mut dstate = CodecState::INITIAL;
        for b in bytes {
            (d.decode)(d, b, &mut dstate, &mut |c| out.push(c));
        }
        assert_eq!(out, vec![0x0410u32]);
    }
}

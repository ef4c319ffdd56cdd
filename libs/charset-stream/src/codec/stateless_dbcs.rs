//! Stateless East-Asian double-byte codecs: Shift-JIS, Big5, CP949 (spec.md
//! §4.6). "Stateless" means only one byte of lead-byte state is carried;
//! unlike EUC or ISO 2022 there is no mode to track.
//!
//! `state.s0`: bit 8 = "a lead byte is pending", bits 0..8 = that byte.

use crate::tables::multi_byte::DbcsTable;
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, Param, DECODE_ERROR, ENCODE_FLUSH};

pub struct DbcsSpec {
    pub name: &'static str,
    pub table: &'static DbcsTable,
    pub is_lead: fn(u8) -> bool,
    /// JIS X 0201 half-width kana / yen-sign / overline exceptions that
    /// Shift-JIS carries as single bytes outside its lead-byte range; `None`
    /// for Big5 and CP949, which have no such single-byte extension.
    pub single_byte_decode: Option<fn(u8) -> Option<u32>>,
    pub single_byte_encode: Option<fn(u32) -> Option<u8>>,
}

pub fn shift_jis_single_byte_decode(b: u8) -> Option<u32> {
    match b {
        0x5C => Some(0x00A5),
        0x7E => Some(0x203E),
        0xA1..=0xDF => Some(0xFF61 + (b - 0xA1) as u32),
        _ => None,
    }
}

pub fn shift_jis_single_byte_encode(code: u32) -> Option<u8> {
    match code {
        0x00A5 => Some(0x5C),
        0x203E => Some(0x7E),
        0xFF61..=0xFF9F => Some(0xA1 + (code - 0xFF61) as u8),
        _ => None,
    }
}

fn spec(d: &'static CodecDescriptor) -> &'static DbcsSpec {
    match d.param {
        Param::Dbcs(s) => s,
        _ => unreachable!("stateless_dbcs descriptor without a Dbcs param"),
    }
}

pub fn decode(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let s = spec(d);
    if state.s0 & 0x100 == 0 {
        if (s.is_lead)(byte) {
            state.s0 = byte as u32 | 0x100;
            return;
        }
        if byte < 0x80 {
            emit(byte as u32);
            return;
        }
        if let Some(cp) = s.single_byte_decode.and_then(|f| f(byte)) {
            emit(cp);
        } else {
            emit(DECODE_ERROR);
        }
        return;
    }
    let lead = (state.s0 & 0xFF) as u8;
    state.s0 = 0;
    match s.table.decode(lead, byte) {
        Some(cp) => emit(cp),
        None => {
            emit(DECODE_ERROR);
            decode(d, byte, state, emit);
        }
    }
}

pub fn encode(d: &'static CodecDescriptor, code: i32, _state: &mut CodecState, emit: &mut EmitEncode) -> bool {
    if code == ENCODE_FLUSH {
        return true;
    }
    let s = spec(d);
    let code = code as u32;
    if code < 0x80 {
        emit(code as u8);
        return true;
    }
    if let Some(b) = s.single_byte_encode.and_then(|f| f(code)) {
        emit(b);
        return true;
    }
    match s.table.encode(code) {
        Some((b1, b2)) => {
            emit(b1);
            emit(b2);
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

    fn decode_bytes(id: EncodingId, bytes: &[u8]) -> Vec<u32> {
        let d = descriptor_for(id);
        let mut state = CodecState::INITIAL;
        let mut out = Vec::new();
        for &b in bytes {
            (d.decode)(d, b, &mut state, &mut |c| out.push(c));
        }
        out
    }

    /// spec.md §8 scenario: Shift-JIS `82 A0` is hiragana あ (U+3042).
    #[test]
    fn shift_jis_hiragana_a() {
        assert_eq!(decode_bytes(EncodingId::ShiftJis, &[0x82, 0xA0]), vec![0x3042]);
    }

    /// spec.md §8 scenario: Shift-JIS `5C` is the yen sign, not backslash.
    #[test]
    fn shift_jis_yen_sign() {
        assert_eq!(decode_bytes(EncodingId::ShiftJis, &[0x5C]), vec![0x00A5]);
    }

    #[test]
    fn big5_round_trips() {
        let d = descriptor_for(EncodingId::Big5);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x5143, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(decode_bytes(EncodingId::Big5, &bytes), vec![0x5143]);
    }

    #[test]
    fn truncated_lead_byte_then_ascii() {
        // A Shift-JIS lead byte followed by a byte that doesn't complete a
        // valid pair emits one error and then reprocesses the trailing byte.
        assert_eq!(decode_bytes(EncodingId::ShiftJis, &[0x82, 0x20]), vec![DECODE_ERROR, 0x20]);
    }
}

//! Streaming UTF-8 (spec.md §4.3, RFC 3629).
//!
//! `state.s0` layout: bits 0..8 hold the lead byte of a sequence in
//! progress (0 when idle), bits 8..11 the number of continuation bytes
//! still expected, bits 11..32 the code point bits accumulated so far.

use crate::tables::constants::UNI_MAX_LEGAL_UTF32;
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, DECODE_ERROR, ENCODE_FLUSH};

const REMAINING_MASK: u32 = 0x7;
const REMAINING_SHIFT: u32 = 8;
const ACCUM_SHIFT: u32 = 11;

pub fn decode(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let remaining = (state.s0 >> REMAINING_SHIFT) & REMAINING_MASK;
    if remaining == 0 {
        if byte < 0x80 {
            emit(byte as u32);
        } else if (byte & 0xE0) == 0xC0 {
            if byte < 0xC2 {
                emit(DECODE_ERROR); // overlong 2-byte lead
            } else {
                state.s0 = byte as u32 | (1 << REMAINING_SHIFT) | (((byte & 0x1F) as u32) << ACCUM_SHIFT);
            }
        } else if (byte & 0xF0) == 0xE0 {
            state.s0 = byte as u32 | (2 << REMAINING_SHIFT) | (((byte & 0x0F) as u32) << ACCUM_SHIFT);
        } else if (byte & 0xF8) == 0xF0 && byte <= 0xF4 {
            state.s0 = byte as u32 | (3 << REMAINING_SHIFT) | (((byte & 0x07) as u32) << ACCUM_SHIFT);
        } else {
            emit(DECODE_ERROR);
        }
        return;
    }

    let lead = (state.s0 & 0xFF) as u8;
    if (byte & 0xC0) != 0x80 {
        // Sequence truncated by a non-continuation byte: flush the error,
        // reset to idle and reprocess this byte as a fresh lead.
        emit(DECODE_ERROR);
        state.s0 = 0;
        decode(d, byte, state, emit);
        return;
    }

    // Overlong/surrogate range checks apply only to the first continuation
    // byte of a 3- or 4-byte sequence.
    let is_first_continuation =
        (remaining == 2 && matches!(lead, 0xE0 | 0xED)) || (remaining == 3 && matches!(lead, 0xF0 | 0xF4));
    if is_first_continuation {
        let bad = match lead {
            0xE0 => byte < 0xA0,
            0xED => byte >= 0xA0, // would encode a surrogate
            0xF0 => byte < 0x90,
            0xF4 => byte >= 0x90, // would exceed U+10FFFF
            _ => false,
        };
        if bad {
            emit(DECODE_ERROR);
            state.s0 = 0;
            return;
        }
    }

    let accum = ((state.s0 >> ACCUM_SHIFT) << 6) | (byte & 0x3F) as u32;
    let remaining = remaining - 1;
    if remaining == 0 {
        emit(accum);
        state.s0 = 0;
    } else {
        state.s0 = lead as u32 | (remaining << REMAINING_SHIFT) | (accum << ACCUM_SHIFT);
    }
}

pub fn encode(_d: &'static CodecDescriptor, code: i32, _state: &mut CodecState, emit: &mut EmitEncode) -> bool {
    if code == ENCODE_FLUSH {
        return true;
    }
    let code = code as u32;
    if code > UNI_MAX_LEGAL_UTF32 || (0xD800..=0xDFFF).contains(&code) {
        return false;
    }
    if code < 0x80 {
        emit(code as u8);
    } else if code < 0x800 {
        emit(0xC0 | (code >> 6) as u8);
        emit(0x80 | (code & 0x3F) as u8);
    } else if code < 0x10000 {
        emit(0xE0 | (code >> 12) as u8);
        emit(0x80 | ((code >> 6) & 0x3F) as u8);
        emit(0x80 | (code & 0x3F) as u8);
    } else {
        emit(0xF0 | (code >> 18) as u8);
        emit(0x80 | ((code >> 12) & 0x3F) as u8);
        emit(0x80 | ((code >> 6) & 0x3F) as u8);
        emit(0x80 | (code & 0x3F) as u8);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::descriptor_for;
    use crate::types::EncodingId;

    fn decode_bytes(bytes: &[u8]) -> Vec<u32> {
        let d = descriptor_for(EncodingId::Utf8);
        let mut state = CodecState::INITIAL;
        let mut out = Vec::new();
        for &b in bytes {
            (d.decode)(d, b, &mut state, &mut |c| out.push(c));
        }
        out
    }

    /// spec.md §8 scenario: truncated 3-byte sequence followed by an
    /// invalid byte emits two sentinels.
    #[test]
    fn truncated_sequence_then_invalid_byte() {
        assert_eq!(decode_bytes(&[0xE1, 0x80, 0xFE]), vec![DECODE_ERROR, DECODE_ERROR]);
    }

    #[test]
    fn ascii_passthrough() {
        assert_eq!(decode_bytes(b"Hi"), vec!['H' as u32, 'i' as u32]);
    }

    #[test]
    fn overlong_two_byte_rejected() {
        assert_eq!(decode_bytes(&[0xC0, 0x80]), vec![DECODE_ERROR, DECODE_ERROR]);
    }

    #[test]
    fn round_trip_three_byte() {
        let d = descriptor_for(EncodingId::Utf8);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x65E5, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(decode_bytes(&bytes), vec![0x65E5]);
    }

    #[test]
    fn flush_is_noop_and_returns_true() {
        let d = descriptor_for(EncodingId::Utf8);
        let mut state = CodecState::INITIAL;
        assert!((d.encode)(d, ENCODE_FLUSH, &mut state, &mut |_| panic!("flush must not emit")));
        assert_eq!(state, CodecState::INITIAL);
    }
}

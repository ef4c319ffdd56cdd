//! Streaming UTF-16, shared across the big-endian, little-endian and
//! auto-detect variants (spec.md §4.4, RFC 2781).
//!
//! `state.s0`: bit 0 = "first byte of the current halfword has been seen",
//! bits 8..16 = that byte's value, bit 16 = "byte-order decision made"
//! (auto-detect only), bit 17 = "decided big-endian" (valid only once bit
//! 16 is set). `state.s1`: bit 0 = "high surrogate pending", bits 1..17 =
//! its value.

use crate::tables::constants::{is_high_surrogate, is_low_surrogate};
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, Param, Utf16Endian, DECODE_ERROR, ENCODE_FLUSH};

const BOM: u16 = 0xFEFF;

fn endian_param(d: &'static CodecDescriptor) -> Utf16Endian {
    match d.param {
        Param::Utf16(e) => e,
        _ => unreachable!("utf16 descriptor without a Utf16 param"),
    }
}

pub(crate) fn decode_halfword(half: u16, state: &mut CodecState, emit: &mut EmitDecode) {
    let has_pending = state.s1 & 1 != 0;
    if has_pending {
        let high = (state.s1 >> 1) & 0xFFFF;
        state.s1 = 0;
        if is_low_surrogate(half as u32) {
            let code = 0x10000 + ((high - 0xD800) << 10) + (half as u32 - 0xDC00);
            emit(code);
        } else {
            emit(DECODE_ERROR);
            decode_halfword(half, state, emit);
        }
        return;
    }
    if is_high_surrogate(half as u32) {
        state.s1 = ((half as u32) << 1) | 1;
    } else if is_low_surrogate(half as u32) {
        emit(DECODE_ERROR);
    } else {
        emit(half as u32);
    }
}

pub fn decode(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    if state.s0 & 1 == 0 {
        state.s0 = (state.s0 & !0xFF00) | ((byte as u32) << 8) | 1;
        return;
    }
    let first = ((state.s0 >> 8) & 0xFF) as u8;
    state.s0 &= !(1u32 | (0xFFu32 << 8));

    let endian_big = match endian_param(d) {
        Utf16Endian::Big => true,
        Utf16Endian::Little => false,
        Utf16Endian::Auto => {
            if state.s0 & (1 << 16) == 0 {
                let be_candidate = ((first as u32) << 8) | byte as u32;
                let le_candidate = ((byte as u32) << 8) | first as u32;
                if be_candidate == BOM as u32 {
                    state.s0 |= (1 << 16) | (1 << 17);
                    return; // BOM swallowed, nothing emitted
                } else if le_candidate == BOM as u32 {
                    state.s0 |= 1 << 16;
                    return; // BOM swallowed
                } else {
                    state.s0 |= (1 << 16) | (1 << 17);
                    true
                }
            } else {
                state.s0 & (1 << 17) != 0
            }
        }
    };

    let half = if endian_big {
        ((first as u16) << 8) | byte as u16
    } else {
        ((byte as u16) << 8) | first as u16
    };
    decode_halfword(half, state, emit);
}

fn emit_halfword(big_endian: bool, half: u16, emit: &mut EmitEncode) {
    if big_endian {
        emit((half >> 8) as u8);
        emit((half & 0xFF) as u8);
    } else {
        emit((half & 0xFF) as u8);
        emit((half >> 8) as u8);
    }
}

pub fn encode(d: &'static CodecDescriptor, code: i32, state: &mut CodecState, emit: &mut EmitEncode) -> bool {
    if code == ENCODE_FLUSH {
        *state = CodecState::INITIAL;
        return true;
    }
    let code = code as u32;
    if code > 0x10FFFF || (0xD800..=0xDFFF).contains(&code) {
        return false;
    }
    let big_endian = match endian_param(d) {
        Utf16Endian::Big => true,
        Utf16Endian::Little => false,
        Utf16Endian::Auto => {
            if state.s0 & 1 == 0 {
                state.s0 |= 1;
                emit_halfword(true, BOM, emit);
            }
            true
        }
    };
    if code < 0x10000 {
        emit_halfword(big_endian, code as u16, emit);
    } else {
        let v = code - 0x10000;
        emit_halfword(big_endian, (0xD800 + (v >> 10)) as u16, emit);
        emit_halfword(big_endian, (0xDC00 + (v & 0x3FF)) as u16, emit);
    }
    true
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

    /// spec.md §8 scenario: `FE FF 00 41` auto-detects big-endian, swallows
    /// the BOM, and emits only U+0041.
    #[test]
    fn auto_detect_be_bom_is_swallowed() {
        assert_eq!(decode_bytes(EncodingId::Utf16, &[0xFE, 0xFF, 0x00, 0x41]), vec![0x41]);
    }

    #[test]
    fn auto_detect_le_bom_is_swallowed() {
        assert_eq!(decode_bytes(EncodingId::Utf16, &[0xFF, 0xFE, 0x41, 0x00]), vec![0x41]);
    }

    #[test]
    fn no_bom_defaults_to_big_endian() {
        assert_eq!(decode_bytes(EncodingId::Utf16, &[0x00, 0x41]), vec![0x41]);
    }

    #[test]
    fn surrogate_pair_round_trips() {
        let d = descriptor_for(EncodingId::Utf16Be);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x1F600, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(decode_bytes(EncodingId::Utf16Be, &bytes), vec![0x1F600]);
    }

    #[test]
    fn lone_low_surrogate_is_error() {
        assert_eq!(decode_bytes(EncodingId::Utf16Be, &[0xDC, 0x00]), vec![DECODE_ERROR]);
    }
}

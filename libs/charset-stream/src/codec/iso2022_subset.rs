//! ISO-2022-JP and ISO-2022-KR (spec.md §4.9, RFC 1468 / RFC 1557).
//!
//! Both variants are driven by the same escape-accumulation byte machine;
//! they differ in which escapes they recognize and in how the
//! double-byte set is invoked (JP designates and uses G0 directly; KR
//! designates G1 once and invokes it into GL with Shift-Out/Shift-In).
//!
//! `state.s0`: bit 0 = "accumulating an escape sequence", bits 1..3 = how
//! many bytes after `ESC` have been consumed so far, bits 8..32 = up to
//! three of those bytes, one per byte-lane.
//!
//! `state.s1`: bits 0..8 = the active G0 set (`0` = ASCII, `1` = JIS X
//! 0201 Roman, `2` = JIS X 0208), bit 8 = "first byte of a two-byte
//! character is pending", bits 9..16 = that byte, bit 16 = Shift-Out
//! active (KR only — G1/KS X 1001 invoked into GL).

use crate::tables::multi_byte::{jisx0208, ksx1001};
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, Param, DECODE_ERROR, ENCODE_FLUSH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Jp,
    Kr,
}

pub struct SubsetSpec {
    pub name: &'static str,
    pub variant: Variant,
}

const ESC: u8 = 0x1B;
const SO: u8 = 0x0E;
const SI: u8 = 0x0F;

fn variant(d: &'static CodecDescriptor) -> Variant {
    match d.param {
        Param::Iso2022Subset(s) => s.variant,
        _ => unreachable!("iso2022_subset descriptor without a SubsetSpec param"),
    }
}

fn escape_len(v: Variant) -> u32 {
    match v {
        Variant::Jp => 2, // `( B`, `( J`, `$ @`, `$ B`
        Variant::Kr => 3, // `$ ) C`
    }
}

fn apply_escape(v: Variant, bytes: [u8; 3], state: &mut CodecState, emit: &mut EmitDecode) {
    match v {
        Variant::Jp => match (bytes[0], bytes[1]) {
            (b'(', b'B') => state.s1 = (state.s1 & !0xFF) | 0,
            (b'(', b'J') => state.s1 = (state.s1 & !0xFF) | 1,
            (b'$', b'@') | (b'$', b'B') => state.s1 = (state.s1 & !0xFF) | 2,
            _ => emit(DECODE_ERROR),
        },
        Variant::Kr => match (bytes[0], bytes[1], bytes[2]) {
            (b'$', b')', b'C') => {} // mandatory preamble designating G1 = KS X 1001; nothing to record
            _ => emit(DECODE_ERROR),
        },
    }
}

pub fn decode(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let v = variant(d);

    if v == Variant::Kr {
        if byte == SO {
            state.s1 |= 1 << 16;
            return;
        }
        if byte == SI {
            state.s1 &= !(1 << 16);
            return;
        }
    }

    let escape_active = state.s0 & 1 != 0;
    if !escape_active && byte == ESC {
        state.s0 = 1;
        return;
    }
    if escape_active {
        let count = (state.s0 >> 1) & 0x3;
        let shifted = state.s0 | ((byte as u32) << (8 + 8 * count));
        let new_count = count + 1;
        if new_count == escape_len(v) {
            let bytes = [
                ((shifted >> 8) & 0xFF) as u8,
                ((shifted >> 16) & 0xFF) as u8,
                ((shifted >> 24) & 0xFF) as u8,
            ];
            state.s0 = 0;
            apply_escape(v, bytes, state, emit);
        } else {
            state.s0 = (shifted & !0x3u32) | 1 | (new_count << 1);
        }
        return;
    }

    let dbcs_active = match v {
        Variant::Jp => (state.s1 & 0xFF) == 2,
        Variant::Kr => state.s1 & (1 << 16) != 0,
    };

    if !dbcs_active {
        let roman = v == Variant::Jp && (state.s1 & 0xFF) == 1;
        if roman {
            match byte {
                0x5C => emit(0x00A5),
                0x7E => emit(0x203E),
                b if b < 0x80 => emit(b as u32),
                _ => emit(DECODE_ERROR),
            }
        } else if byte < 0x80 {
            emit(byte as u32);
        } else {
            emit(DECODE_ERROR);
        }
        return;
    }

    let pending = state.s1 & (1 << 8) != 0;
    if !pending {
        if (0x21..=0x7E).contains(&byte) {
            state.s1 = (state.s1 & !(0x7Fu32 << 9)) | (1 << 8) | ((byte as u32) << 9);
        } else {
            emit(DECODE_ERROR);
        }
        return;
    }
    let first = ((state.s1 >> 9) & 0x7F) as u8;
    state.s1 &= !((1u32 << 8) | (0x7Fu32 << 9));
    let table = match v {
        Variant::Jp => &jisx0208::TABLE,
        Variant::Kr => &ksx1001::TABLE,
    };
    match table.decode(first, byte) {
        Some(cp) => emit(cp),
        None => emit(DECODE_ERROR),
    }
}

pub fn encode(d: &'static CodecDescriptor, code: i32, state: &mut CodecState, emit: &mut EmitEncode) -> bool {
    let v = variant(d);
    if code == ENCODE_FLUSH {
        match v {
            Variant::Jp => {
                if (state.s1 & 0xFF) != 0 {
                    emit(ESC);
                    emit(b'(');
                    emit(b'B');
                }
            }
            Variant::Kr => {
                if state.s1 & (1 << 16) != 0 {
                    emit(SI);
                }
            }
        }
        *state = CodecState::INITIAL;
        return true;
    }

    let code = code as u32;
    match v {
        Variant::Jp => {
            if code < 0x80 {
                if (state.s1 & 0xFF) != 0 {
                    emit(ESC);
                    emit(b'(');
                    emit(b'B');
                    state.s1 &= !0xFF;
                }
                emit(code as u8);
                return true;
            }
            match jisx0208::TABLE.encode(code) {
                Some((r, c)) => {
                    if (state.s1 & 0xFF) != 2 {
                        emit(ESC);
                        emit(b'$');
                        emit(b'B');
                        state.s1 = (state.s1 & !0xFF) | 2;
                    }
                    emit(r);
                    emit(c);
                    true
                }
                None => false,
            }
        }
        Variant::Kr => {
            if state.s1 & (1 << 17) == 0 {
                emit(ESC);
                emit(b'$');
                emit(b')');
                emit(b'C');
                state.s1 |= 1 << 17;
            }
            if code < 0x80 {
                if state.s1 & (1 << 16) != 0 {
                    emit(SI);
                    state.s1 &= !(1 << 16);
                }
                emit(code as u8);
                return true;
            }
            match ksx1001::TABLE.encode(code) {
                Some((r, c)) => {
                    if state.s1 & (1 << 16) == 0 {
                        emit(SO);
                        state.s1 |= 1 << 16;
                    }
                    emit(r);
                    emit(c);
                    true
                }
                None => false,
            }
        }
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

    /// spec.md §8's literal ISO-2022-JP scenario: `"Japanese (" ESC $ B F|
    /// K\ 8l ESC ( B ")"` reproduces the text with U+65E5 U+672C U+8A9E
    /// interleaved.
    #[test]
    fn iso2022_jp_designation_roundtrip_literal_scenario() {
        let mut bytes = b"Japanese (".to_vec();
        bytes.extend_from_slice(&[ESC, b'$', b'B', b'F', b'|', b'K', b'\\', b'8', b'l', ESC, b'(', b'B']);
        bytes.extend_from_slice(b")");
        let out = decode_bytes(EncodingId::Iso2022Jp, &bytes);
        let mut expected: Vec<u32> = "Japanese (".chars().map(|c| c as u32).collect();
        expected.extend_from_slice(&[0x65E5, 0x672C, 0x8A9E]);
        expected.push(')' as u32);
        assert_eq!(out, expected);
    }

    #[test]
    fn iso2022_jp_roman_yen_sign() {
        let bytes = [ESC, b'(', b'J', 0x5C];
        assert_eq!(decode_bytes(EncodingId::Iso2022Jp, &bytes), vec![0x00A5]);
    }

    #[test]
    fn iso2022_kr_shift_out_in() {
        let d = descriptor_for(EncodingId::Iso2022Kr);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0xAC00, &mut state, &mut |b| bytes.push(b)));
        assert!((d.encode)(d, 'A' as i32, &mut state, &mut |b| bytes.push(b)));
        assert!((d.encode)(d, ENCODE_FLUSH, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(state, CodecState::INITIAL);
        assert_eq!(decode_bytes(EncodingId::Iso2022Kr, &bytes), vec![0xAC00, 'A' as u32]);
    }
}

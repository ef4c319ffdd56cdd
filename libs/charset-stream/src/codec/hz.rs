//! HZ-GB-2312 (spec.md §4.8, RFC 1843).
//!
//! `state.s0`: `0` = ASCII mode, `1` = GB2312 mode. `state.s1`: bit 0 = "a
//! first GB2312 byte is pending", bits 8..16 = that byte.

use crate::tables::multi_byte::gb2312;
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, DECODE_ERROR, ENCODE_FLUSH};

pub fn decode(_d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    if state.s0 == 0 {
        if byte == b'~' {
            state.s1 = 0x8000; // "just saw ~", no first-byte pending yet
        } else {
            emit(byte as u32);
        }
        return;
    }

    // GB2312 mode.
    let has_first = state.s1 & 1 != 0;
    if !has_first {
        if byte == b'~' {
            // `~}` within GB2312 mode closes it back to ASCII.
            state.s1 = 0x8000;
            return;
        }
        if (0x21..=0x7E).contains(&byte) {
            state.s1 = ((byte as u32) << 8) | 1;
        } else {
            emit(DECODE_ERROR);
            state.s0 = 0;
        }
        return;
    }

    let first = ((state.s1 >> 8) & 0xFF) as u8;
    state.s1 = 0;
    match gb2312::TABLE.decode(first, byte) {
        Some(cp) => emit(cp),
        None => {
            emit(DECODE_ERROR);
            state.s0 = 0;
        }
    }
}

/// Handles the ASCII-mode tilde escapes (`~~`, `~\n`, `~{`) which aren't
/// representable in the simple two-state sketch above; called instead of
/// [`decode`] whenever `state.s1 == 0x8000`.
fn decode_after_tilde(_d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let was_gb_mode = state.s0 == 1;
    state.s1 = 0;
    if was_gb_mode {
        if byte == b'}' {
            state.s0 = 0;
        } else {
            // Not a valid close sequence: treat as data error and fall back
            // to ASCII so the stream can resynchronize.
            emit(DECODE_ERROR);
            state.s0 = 0;
        }
        return;
    }
    match byte {
        b'~' => emit('~' as u32),
        b'\n' => {} // line-continuation, swallowed
        b'{' => state.s0 = 1,
        _ => emit(DECODE_ERROR),
    }
}

pub fn decode_byte(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    if state.s1 == 0x8000 {
        decode_after_tilde(d, byte, state, emit);
    } else {
        decode(d, byte, state, emit);
    }
}

pub fn encode(_d: &'static CodecDescriptor, code: i32, state: &mut CodecState, emit: &mut EmitEncode) -> bool {
    if code == ENCODE_FLUSH {
        if state.s0 == 1 {
            emit(b'~');
            emit(b'}');
        }
        *state = CodecState::INITIAL;
        return true;
    }
    let code = code as u32;
    if code < 0x80 {
        if state.s0 == 1 {
            emit(b'~');
            emit(b'}');
            state.s0 = 0;
        }
        if code as u8 == b'~' {
            emit(b'~');
            emit(b'~');
        } else {
            emit(code as u8);
        }
        return true;
    }
    match gb2312::TABLE.encode(code) {
        Some((b1, b2)) => {
            if state.s0 == 0 {
                emit(b'~');
                emit(b'{');
                state.s0 = 1;
            }
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

    fn decode_bytes(bytes: &[u8]) -> Vec<u32> {
        let d = descriptor_for(EncodingId::HzGb2312);
        let mut state = CodecState::INITIAL;
        let mut out = Vec::new();
        for &b in bytes {
            decode_byte(d, b, &mut state, &mut |c| out.push(c));
        }
        out
    }

    /// spec.md §8 scenario: `~{ 0x31 0x21 ~} A` — GB2312 "啊" (the example
    /// writes the GB2312 pair in EUC "area code" form `B1 A1`; with the high
    /// bit stripped, per the component design's stated byte range
    /// (0x21..=0x7E), that is `0x31 0x21` — then ASCII `A`.
    #[test]
    fn gb2312_mode_then_ascii() {
        let out = decode_bytes(b"~{\x31\x21~}A");
        assert_eq!(out, vec![0x554A, 'A' as u32]);
    }

    #[test]
    fn tilde_tilde_is_literal_tilde() {
        assert_eq!(decode_bytes(b"~~"), vec!['~' as u32]);
    }

    #[test]
    fn encode_flush_closes_gb_mode() {
        let d = descriptor_for(EncodingId::HzGb2312);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x554A, &mut state, &mut |b| bytes.push(b)));
        assert!((d.encode)(d, ENCODE_FLUSH, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(state, CodecState::INITIAL);
        assert_eq!(decode_bytes(&bytes), vec![0x554A]);
    }
}

//! EUC family: EUC-JP, EUC-CN, EUC-KR, EUC-TW (spec.md §4.7).
//!
//! `state.s0`: bits 28..31 name the announcer in progress (0 = idle, 1 =
//! `GR`, 2 = `SS2`, 3 = `SS3`), bits 24..28 count remaining bytes, bits
//! 0..24 accumulate them MSB-first as they arrive.

use crate::tables::multi_byte::DbcsTable;
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, Param, DECODE_ERROR, ENCODE_FLUSH};

/// What the SS2 announcer (`0x8E`) introduces for a given variant.
pub enum Ss2Kind {
    /// Not used by this variant; `0x8E` is an error.
    None,
    /// EUC-JP: one byte selecting JIS X 0201 half-width kana
    /// (`U+FF61 + (byte - 0xA1)`).
    HalfwidthKana,
    /// EUC-TW: a plane byte followed by a (row, col) pair into the given
    /// table (only plane 1 is represented — see
    /// [`crate::tables::multi_byte::cns11643`]).
    Plane(&'static DbcsTable),
}

/// What the SS3 announcer (`0x8F`) introduces for a given variant.
pub enum Ss3Kind {
    /// Not used by this variant; `0x8F` is an error.
    None,
    /// EUC-JP: a (row, col) pair into JIS X 0212, same shape as the `GR`
    /// plane's pair but prefixed by the announcer instead of having the
    /// high bit set on its own first byte.
    Jisx0212(&'static DbcsTable),
}

pub struct EucSpec {
    pub name: &'static str,
    pub gr_table: &'static DbcsTable,
    pub ss2: Ss2Kind,
    pub ss3: Ss3Kind,
}

fn spec(d: &'static CodecDescriptor) -> &'static EucSpec {
    match d.param {
        Param::Euc(s) => s,
        _ => unreachable!("euc descriptor without an Euc param"),
    }
}

fn bytes_needed(s: &EucSpec, announcer: u32) -> u32 {
    match announcer {
        1 => 1, // GR: the byte that triggered this plus one more
        2 => match s.ss2 {
            Ss2Kind::None => 0,
            Ss2Kind::HalfwidthKana => 1,
            Ss2Kind::Plane(_) => 3,
        },
        3 => match s.ss3 {
            Ss3Kind::None => 0,
            Ss3Kind::Jisx0212(_) => 2, // the announcer carries no data itself
        },
        _ => 0,
    }
}

fn resolve(s: &EucSpec, announcer: u32, accum: u32) -> Option<u32> {
    match announcer {
        1 => {
            let b1 = ((accum >> 8) & 0xFF) as u8;
            let b2 = (accum & 0xFF) as u8;
            s.gr_table.decode(b1.wrapping_sub(0x80), b2.wrapping_sub(0x80))
        }
        2 => match s.ss2 {
            Ss2Kind::None => None,
            Ss2Kind::HalfwidthKana => {
                let b = (accum & 0xFF) as u8;
                if (0xA1..=0xDF).contains(&b) {
                    Some(0xFF61 + (b - 0xA1) as u32)
                } else {
                    None
                }
            }
            Ss2Kind::Plane(table) => {
                let row = ((accum >> 8) & 0xFF) as u8;
                let col = (accum & 0xFF) as u8;
                table.decode(row.wrapping_sub(0x80), col.wrapping_sub(0x80))
            }
        },
        3 => match s.ss3 {
            Ss3Kind::None => None,
            Ss3Kind::Jisx0212(table) => {
                let row = ((accum >> 8) & 0xFF) as u8;
                let col = (accum & 0xFF) as u8;
                table.decode(row.wrapping_sub(0x80), col.wrapping_sub(0x80))
            }
        },
        _ => None,
    }
}

pub fn decode(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let s = spec(d);
    let announcer = state.s0 >> 28;
    if announcer == 0 {
        if byte < 0x80 {
            emit(byte as u32);
        } else if byte == 0x8E {
            let need = bytes_needed(s, 2);
            if need == 0 {
                emit(DECODE_ERROR);
            } else {
                state.s0 = (2 << 28) | (need << 24);
            }
        } else if byte == 0x8F {
            let need = bytes_needed(s, 3);
            if need == 0 {
                emit(DECODE_ERROR);
            } else {
                state.s0 = (3 << 28) | (need << 24);
            }
        } else if (0xA1..=0xFE).contains(&byte) {
            state.s0 = (1 << 28) | (1 << 24) | (byte as u32);
        } else {
            emit(DECODE_ERROR);
        }
        return;
    }

    let need = ((state.s0 >> 24) & 0xF) - 1;
    let accum = (state.s0 & 0x00FF_FFFF) << 8 | byte as u32;
    if need == 0 {
        match resolve(s, announcer, accum) {
            Some(cp) => emit(cp),
            None => emit(DECODE_ERROR),
        }
        state.s0 = 0;
    } else {
        state.s0 = (announcer << 28) | (need << 24) | accum;
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
    if let Ss2Kind::HalfwidthKana = s.ss2 {
        if (0xFF61..=0xFF9F).contains(&code) {
            emit(0x8E);
            emit((0xA1 + (code - 0xFF61)) as u8);
            return true;
        }
    }
    if let Some((b1, b2)) = s.gr_table.encode(code) {
        emit(b1 + 0x80);
        emit(b2 + 0x80);
        return true;
    }
    if let Ss3Kind::Jisx0212(table) = s.ss3 {
        if let Some((r, c)) = table.encode(code) {
            emit(0x8F);
            emit(r + 0x80);
            emit(c + 0x80);
            return true;
        }
    }
    false
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

    /// spec.md §8 scenario: EUC-JP `8E A1` is half-width kana U+FF61.
    #[test]
    fn euc_jp_halfwidth_kana() {
        assert_eq!(decode_bytes(EncodingId::EucJp, &[0x8E, 0xA1]), vec![0xFF61]);
    }

    #[test]
    fn euc_jp_ss3_jisx0212_round_trips() {
        let d = descriptor_for(EncodingId::EucJp);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x4E02, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(bytes[0], 0x8F);
        assert_eq!(decode_bytes(EncodingId::EucJp, &bytes), vec![0x4E02]);
    }

    #[test]
    fn euc_cn_gr_round_trips() {
        let d = descriptor_for(EncodingId::EucCn);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x554A, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(decode_bytes(EncodingId::EucCn, &bytes), vec![0x554A]);
    }

    #[test]
    fn ascii_passthrough() {
        assert_eq!(decode_bytes(EncodingId::EucKr, b"ok"), vec!['o' as u32, 'k' as u32]);
    }
}

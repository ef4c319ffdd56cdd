//! Full ISO 2022 / X11 Compound Text (spec.md §4.10).
//!
//! This is the most elaborate codec in the crate: four designation
//! containers (G0..G3), GL/GR invocation, single-shifts, and a "Designate
//! Other Coding System" (DOCS) escape that drops into either raw UTF-8 or a
//! length-prefixed Compound-Text extended segment. [`EncodingId::Iso2022`]
//! and [`EncodingId::CompoundText`] share this one decoder/encoder pair —
//! see DESIGN.md for why the two aren't given independently-tuned output
//! policies.
//!
//! `state.s1` carries the parts that must survive a DOCS excursion: bits
//! 0..2 = container invoked into GL, bits 2..4 = container invoked into
//! GR, bits 4..10/10..16/16..22/22..28 = the [`SUBCHARSETS`] index
//! designated into G0..G3 (6 bits each), bits 28..32 = the current top-level
//! mode (`0` IDLE, `1` SS2CHAR, `2` SS3CHAR, `3` ESCSEQ, `4` DOCSUTF8, `5`
//! DOCSCTEXT header/name, `6` DOCSCTEXT payload, `7` "saw ESC inside
//! DOCSUTF8", `8` ESCDROP — a designation escape that ran past the one
//! intermediate byte this mechanism models). `state.s0` is free to be
//! reinterpreted by whichever mode is active — including, during DOCSUTF8,
//! handing it wholesale to the plain UTF-8 decoder's own accumulator, since
//! G0..G3 designations are frozen (and irrelevant) for the run's duration.
//!
//! Unrecognized escape sequences (a lookup miss in [`designate`], or a
//! byte `ESCSEQ` doesn't know how to continue with) never produce
//! `DECODE_ERROR` — per spec.md §7 they pass through as the literal bytes
//! consumed so far. ESCPASS never needs its own persisted mode: the
//! replay always completes synchronously in the same call that recognizes
//! the sequence is unrecognizable, whether that's immediately (`ESCSEQ`)
//! or after buffering overflow intermediates (`ESCDROP`).
//!
//! All fields default to `0`, which is ASCII/IDLE — so
//! `CodecState::INITIAL` already means "G0 = G1 = G2 = G3 = ASCII, GL = G0".

use crate::tables::multi_byte::{big5, gb2312, jisx0208, DbcsTable};
use crate::tables::single_byte::{iso8859_1, iso8859_14, iso8859_15, SbcsTable};
use crate::types::{CodecDescriptor, CodecState, EmitDecode, EmitEncode, DECODE_ERROR, ENCODE_FLUSH};

const ESC: u8 = 0x1B;
const SI: u8 = 0x0F;
const SO: u8 = 0x0E;
const STX: u8 = 0x02;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SetWidth {
    Bytes94,
    Bytes96,
    Bytes9494,
}

enum SetTable {
    Ascii,
    Sbcs(&'static SbcsTable),
    Dbcs(&'static DbcsTable),
}

struct Subcharset {
    width: SetWidth,
    final_byte: u8,
    table: SetTable,
}

/// A small, representative slice of the real ISO-IR registry: ASCII, the
/// Latin-1 right half (as the classic 96-set), and two 94² sets. Enough to
/// exercise every code path without mirroring the whole registry (spec.md
/// §1 puts bulk tables out of scope).
static SUBCHARSETS: &[Subcharset] = &[
    Subcharset { width: SetWidth::Bytes94, final_byte: b'B', table: SetTable::Ascii },
    Subcharset { width: SetWidth::Bytes96, final_byte: b'A', table: SetTable::Sbcs(&iso8859_1::TABLE) },
    Subcharset { width: SetWidth::Bytes9494, final_byte: b'B', table: SetTable::Dbcs(&jisx0208::TABLE) },
    Subcharset { width: SetWidth::Bytes9494, final_byte: b'A', table: SetTable::Dbcs(&gb2312::TABLE) },
];

const LATIN1_IDX: u32 = 1;

fn find_subcharset(width: SetWidth, final_byte: u8) -> Option<u32> {
    SUBCHARSETS
        .iter()
        .position(|s| s.width == width && s.final_byte == final_byte)
        .map(|i| i as u32)
}

fn resolve1(idx: u32, byte: u8) -> Option<u32> {
    match &SUBCHARSETS[idx as usize].table {
        SetTable::Ascii => Some(byte as u32),
        SetTable::Sbcs(t) => t.decode_byte(byte.wrapping_add(0x80)),
        SetTable::Dbcs(_) => None,
    }
}

fn resolve2(idx: u32, b1: u8, b2: u8) -> Option<u32> {
    match &SUBCHARSETS[idx as usize].table {
        SetTable::Dbcs(t) => t.decode(b1, b2),
        _ => None,
    }
}

enum CtextSub {
    Sbcs(&'static SbcsTable),
    Dbcs(&'static DbcsTable),
}

/// Containers for X11 Compound Text's length-prefixed DOCS segments. Per
/// spec.md §4.10, the three labels this crate recognizes are exactly these
/// three — `iso8859-1` is reachable directly via a GR designation instead
/// (see [`LATIN1_IDX`]), so it has no DOCS entry here.
static CTEXT_ENCODINGS: &[(&str, CtextSub)] = &[
    ("big5-0", CtextSub::Dbcs(&big5::TABLE)),
    ("iso8859-14", CtextSub::Sbcs(&iso8859_14::TABLE)),
    ("iso8859-15", CtextSub::Sbcs(&iso8859_15::TABLE)),
];

mod fields {
    pub const GL_MASK: u32 = 0b11;
    pub const G0_SHIFT: u32 = 4;
    pub const G1_SHIFT: u32 = 10;
    pub const G2_SHIFT: u32 = 16;
    pub const G3_SHIFT: u32 = 22;
    pub const G_MASK: u32 = 0x3F;
    pub const MODE_SHIFT: u32 = 28;
    pub const MODE_MASK: u32 = 0xF;
}
use fields::*;

fn mode(state: &CodecState) -> u32 {
    (state.s1 >> MODE_SHIFT) & MODE_MASK
}
fn set_mode(state: &mut CodecState, m: u32) {
    state.s1 = (state.s1 & !(MODE_MASK << MODE_SHIFT)) | ((m & MODE_MASK) << MODE_SHIFT);
}
fn gl_container(state: &CodecState) -> u32 {
    state.s1 & GL_MASK
}
fn container_shift(c: u32) -> u32 {
    match c {
        0 => G0_SHIFT,
        1 => G1_SHIFT,
        2 => G2_SHIFT,
        _ => G3_SHIFT,
    }
}
fn container_idx(state: &CodecState, c: u32) -> u32 {
    (state.s1 >> container_shift(c)) & G_MASK
}
fn set_container_idx(state: &mut CodecState, c: u32, idx: u32) {
    let shift = container_shift(c);
    state.s1 = (state.s1 & !(G_MASK << shift)) | ((idx & G_MASK) << shift);
}

/// The byte that originally opened a designation, reconstructed from the
/// `container`/`is_96` state so an unrecognized final byte can be passed
/// through verbatim alongside it.
fn container_intro_byte(container: u32, is_96: bool) -> u8 {
    if is_96 {
        match container {
            1 => b'-',
            2 => b'.',
            _ => b'/',
        }
    } else {
        match container {
            0 => b'(',
            1 => b')',
            2 => b'*',
            _ => b'+',
        }
    }
}

/// Designates `final_byte` into `container`, or, if it names no known
/// subcharset, passes the whole sequence through unchanged (`ESC` + every
/// byte already consumed + `final_byte`) per spec.md §4.10's "sequence not
/// recognized, emit it verbatim".
fn designate(state: &mut CodecState, container: u32, width: SetWidth, final_byte: u8, prefix: &[u8], emit: &mut EmitDecode) {
    match find_subcharset(width, final_byte) {
        Some(idx) => set_container_idx(state, container, idx),
        None => {
            emit(ESC as u32);
            for &b in prefix {
                emit(b as u32);
            }
            emit(final_byte as u32);
        }
    }
}

/// `ESCSEQ` uses `state.s0` as scratch: bit 0 = "saw a `$` (multibyte
/// designation)", bits 1..3 = which container this designation targets,
/// bit 3 = "a container byte has been seen", bit 4 = "it's a 96-set", bit
/// 5 = "saw `ESC %`, awaiting the next byte", bit 6 = "saw `ESC % /`,
/// awaiting the opc digit".
fn escseq_decode(byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let p = state.s0;

    if p & 64 != 0 {
        let _bytes_per_char = byte.saturating_sub(b'0');
        state.s0 = 0;
        set_mode(state, 5);
        return;
    }
    if p & 32 != 0 {
        match byte {
            b'G' => {
                state.s0 = 0;
                set_mode(state, 4);
            }
            b'/' => state.s0 = 64,
            _ => {
                emit(ESC as u32);
                emit(b'%' as u32);
                emit(byte as u32);
                state.s0 = 0;
                set_mode(state, 0);
            }
        }
        return;
    }

    let dollar = p & 1 != 0;
    let have_container = p & 8 != 0;
    let container = (p >> 1) & 0x3;

    if !have_container {
        match byte {
            b'$' if !dollar => state.s0 = 1,
            b'(' => state.s0 = dollar as u32 | 8,
            b')' => state.s0 = dollar as u32 | (1 << 1) | 8,
            b'*' => state.s0 = dollar as u32 | (2 << 1) | 8,
            b'+' => state.s0 = dollar as u32 | (3 << 1) | 8,
            b'-' if !dollar => state.s0 = (1 << 1) | 8 | 16,
            b'.' if !dollar => state.s0 = (2 << 1) | 8 | 16,
            b'/' if !dollar => state.s0 = (3 << 1) | 8 | 16,
            b'@' | b'B' if dollar => {
                designate(state, 0, SetWidth::Bytes9494, byte, &[b'$'], emit);
                state.s0 = 0;
                set_mode(state, 0);
            }
            b'N' => {
                state.s0 = 0;
                set_mode(state, 1);
            }
            b'O' => {
                state.s0 = 0;
                set_mode(state, 2);
            }
            b'%' => state.s0 = 32,
            _ => {
                emit(ESC as u32);
                if dollar {
                    emit(b'$' as u32);
                }
                emit(byte as u32);
                state.s0 = 0;
                set_mode(state, 0);
            }
        }
        return;
    }

    let is_96 = p & 16 != 0;
    let width = if is_96 {
        SetWidth::Bytes96
    } else if dollar {
        SetWidth::Bytes9494
    } else {
        SetWidth::Bytes94
    };

    // A 94/96-set designation takes exactly one intermediate (plus an
    // optional leading `$`) before its final byte. A further intermediate
    // byte (0x20..=0x2F) means this sequence is longer than this mechanism
    // models; ESCDROP buffers it and waits for the eventual final byte so
    // the whole thing can be replayed verbatim instead of misreading the
    // extra intermediate as a final byte.
    if (0x20..=0x2F).contains(&byte) {
        state.s0 = p & 0b11111;
        set_mode(state, 8);
        escdrop_decode(byte, state, emit);
        return;
    }

    let mut prefix = [0u8; 2];
    let mut n = 0;
    if dollar {
        prefix[n] = b'$';
        n += 1;
    }
    prefix[n] = container_intro_byte(container, is_96);
    n += 1;
    designate(state, container, width, byte, &prefix[..n], emit);
    state.s0 = 0;
    set_mode(state, 0);
}

/// ESCDROP: a designation escape ran past the one intermediate byte this
/// mechanism models. `state.s0` keeps the ESCSEQ dollar/container/is_96
/// bits (0, 1..3, 4) plus, in bits 8..10/10..18/18..26, up to two more raw
/// intermediate bytes (count, then the bytes themselves) so the whole
/// sequence can be passed through verbatim once a final byte (0x30..=0x7E)
/// ends it.
fn escdrop_decode(byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let p = state.s0;
    let dollar = p & 1 != 0;
    let container = (p >> 1) & 0x3;
    let is_96 = p & 16 != 0;
    let count = (p >> 8) & 0x3;

    if (0x20..=0x2F).contains(&byte) {
        if count < 2 {
            let shift = 10 + 8 * count;
            state.s0 = (p & !(0x3 << 8)) | ((count + 1) << 8) | ((byte as u32) << shift);
        }
        // A third overflow byte beyond what's buffered is absorbed without
        // being stored; the sequence is already headed for verbatim replay.
        return;
    }

    emit(ESC as u32);
    if dollar {
        emit(b'$' as u32);
    }
    emit(container_intro_byte(container, is_96) as u32);
    for i in 0..count {
        let shift = 10 + 8 * i;
        emit((((p >> shift) & 0xFF) as u8) as u32);
    }
    emit(byte as u32);
    state.s0 = 0;
    set_mode(state, 0);
}

/// IDLE also uses `state.s0` as scratch, for a pending first byte of a 94²
/// pair: bit 0 = pending, bits 1..8 = that byte.
fn idle_decode(byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    if byte == ESC {
        state.s0 = 0;
        set_mode(state, 3);
        return;
    }
    if byte == SO {
        state.s1 = (state.s1 & !GL_MASK) | 1;
        return;
    }
    if byte == SI {
        state.s1 &= !GL_MASK;
        return;
    }
    if byte == 0x20 || byte == 0x7F {
        emit(byte as u32);
        return;
    }

    let dbcs_pending = state.s0 & 1 != 0;
    // No LS2R/LS3R support: a byte with the high bit set is always read
    // through G1, the conventional "always-on" GR invocation used by both
    // the 8-bit EUC-style encodings and X11 Compound Text.
    let (container, b) = if byte < 0x80 { (gl_container(state), byte) } else { (1, byte & 0x7F) };
    let idx = container_idx(state, container);
    let width = SUBCHARSETS[idx as usize].width;

    if width == SetWidth::Bytes9494 {
        if !dbcs_pending {
            state.s0 = 1 | ((b as u32) << 1);
        } else {
            let first = ((state.s0 >> 1) & 0x7F) as u8;
            state.s0 = 0;
            match resolve2(idx, first, b) {
                Some(cp) => emit(cp),
                None => emit(DECODE_ERROR),
            }
        }
        return;
    }
    match resolve1(idx, b) {
        Some(cp) => emit(cp),
        None => emit(DECODE_ERROR),
    }
}

fn singleshift_decode(container: u32, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let pending = state.s0 & 1 != 0;
    let idx = container_idx(state, container);
    let width = SUBCHARSETS[idx as usize].width;
    let b = if byte < 0x80 { byte } else { byte & 0x7F };
    if width == SetWidth::Bytes9494 {
        if !pending {
            state.s0 = 1 | ((b as u32) << 1);
            return;
        }
        let first = ((state.s0 >> 1) & 0x7F) as u8;
        state.s0 = 0;
        set_mode(state, 0);
        match resolve2(idx, first, b) {
            Some(cp) => emit(cp),
            None => emit(DECODE_ERROR),
        }
        return;
    }
    state.s0 = 0;
    set_mode(state, 0);
    match resolve1(idx, b) {
        Some(cp) => emit(cp),
        None => emit(DECODE_ERROR),
    }
}

fn docsutf8_decode(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    if byte == ESC {
        // Bit 1 remembers whether the UTF-8 substate was mid-sequence right
        // before this ESC, since the next line is about to clear it.
        let was_pending = if state.s0 != 0 { 2 } else { 0 };
        state.s0 = was_pending;
        set_mode(state, 7);
        return;
    }
    crate::codec::utf8::decode(d, byte, state, emit);
}

/// Mode 7, "saw ESC inside a DOCSUTF8 run": `state.s0` bit 0 = "also saw
/// `%`, awaiting `@`", bit 1 = "the UTF-8 substate was mid-sequence when
/// this ESC arrived". Only `ESC % @` legally ends the run; anything else
/// is dropped and the run resumes, which loses at most the escape bytes
/// themselves (this codec never sees a bare `ESC` as legal UTF-8 input).
fn docsutf8_escape_decode(byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    if state.s0 & 1 == 0 {
        if byte == b'%' {
            state.s0 |= 1;
        } else {
            state.s0 = 0;
            set_mode(state, 4);
        }
        return;
    }
    let was_pending = state.s0 & 2 != 0;
    state.s0 = 0;
    if byte == b'@' {
        if was_pending {
            emit(DECODE_ERROR);
        }
        set_mode(state, 0);
    } else {
        set_mode(state, 4);
    }
}

/// `DOCSCTEXT` header, `state.s0`: bits 0..1 = step (0 await len_hi, 1
/// await len_lo, 2 reading name/payload-not-yet-started), bits 2..17 =
/// length accumulator, bits 17..21 = surviving-candidate bitmask into
/// [`CTEXT_ENCODINGS`], bits 21..25 = name-byte position.
fn docsctext_header_decode(byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let p = state.s0;
    let step = p & 0x3;
    match step {
        0 => state.s0 = 1 | (((byte & 0x7F) as u32) << 2),
        1 => {
            let len_hi = (p >> 2) & 0x7F;
            let len = (len_hi << 7) | (byte & 0x7F) as u32;
            let all_candidates: u32 = (1 << CTEXT_ENCODINGS.len()) - 1;
            state.s0 = 2 | (len << 2) | (all_candidates << 17);
        }
        _ => {
            let len = (p >> 2) & 0x7FFF;
            let mut mask = (p >> 17) & 0xF;
            let pos = (p >> 21) & 0xF;
            if len == 0 {
                state.s0 = 0;
                set_mode(state, 0);
                return;
            }
            let new_len = len - 1;
            if byte == STX {
                let matched = CTEXT_ENCODINGS
                    .iter()
                    .enumerate()
                    .find(|(i, (name, _))| (mask & (1 << i)) != 0 && name.len() as u32 == pos);
                state.s0 = 0;
                match matched {
                    Some((i, _)) if new_len > 0 => {
                        state.s0 = new_len | ((i as u32) << 15);
                        set_mode(state, 6);
                    }
                    _ if new_len > 0 => {
                        state.s0 = new_len | (0xF << 15);
                        set_mode(state, 6);
                    }
                    _ => set_mode(state, 0),
                }
                return;
            }
            for (i, (name, _)) in CTEXT_ENCODINGS.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    let matches = pos < name.len() as u32 && name.as_bytes()[pos as usize] == byte;
                    if !matches {
                        mask &= !(1 << i);
                    }
                }
            }
            if new_len == 0 {
                state.s0 = 0;
                set_mode(state, 0);
                emit(DECODE_ERROR);
                return;
            }
            state.s0 = 2 | (new_len << 2) | (mask << 17) | ((pos + 1) << 21);
        }
    }
}

/// `DOCSCTEXT` payload, `state.s0`: bits 0..15 = bytes remaining, bits
/// 15..19 = which [`CTEXT_ENCODINGS`] entry (`0xF` = "no match, skip and
/// error"), bit 19 = "first byte of a double-byte pair pending", bits
/// 20..28 = that byte.
fn docsctext_payload_decode(byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    let p = state.s0;
    let remaining = p & 0x7FFF;
    let which = (p >> 15) & 0xF;
    if which == 0xF {
        emit(DECODE_ERROR);
        if remaining <= 1 {
            state.s0 = 0;
            set_mode(state, 0);
        } else {
            state.s0 = (remaining - 1) | (0xF << 15);
        }
        return;
    }
    let sub = &CTEXT_ENCODINGS[which as usize].1;
    match sub {
        CtextSub::Sbcs(t) => {
            match t.decode_byte(byte) {
                Some(cp) => emit(cp),
                None => emit(DECODE_ERROR),
            }
            if remaining <= 1 {
                state.s0 = 0;
                set_mode(state, 0);
            } else {
                state.s0 = (remaining - 1) | (which << 15);
            }
        }
        CtextSub::Dbcs(t) => {
            let pending = p & (1 << 19) != 0;
            if !pending {
                if remaining <= 1 {
                    emit(DECODE_ERROR);
                    state.s0 = 0;
                    set_mode(state, 0);
                    return;
                }
                state.s0 = (remaining - 1) | (which << 15) | (1 << 19) | ((byte as u32) << 20);
                return;
            }
            let first = ((p >> 20) & 0xFF) as u8;
            match t.decode(first, byte) {
                Some(cp) => emit(cp),
                None => emit(DECODE_ERROR),
            }
            if remaining <= 1 {
                state.s0 = 0;
                set_mode(state, 0);
            } else {
                state.s0 = (remaining - 1) | (which << 15);
            }
        }
    }
}

pub fn decode(d: &'static CodecDescriptor, byte: u8, state: &mut CodecState, emit: &mut EmitDecode) {
    match mode(state) {
        0 => idle_decode(byte, state, emit),
        1 => singleshift_decode(2, byte, state, emit),
        2 => singleshift_decode(3, byte, state, emit),
        3 => escseq_decode(byte, state, emit),
        4 => docsutf8_decode(d, byte, state, emit),
        5 => docsctext_header_decode(byte, state, emit),
        6 => docsctext_payload_decode(byte, state, emit),
        7 => docsutf8_escape_decode(byte, state, emit),
        _ => escdrop_decode(byte, state, emit),
    }
}

pub fn encode(_d: &'static CodecDescriptor, code: i32, state: &mut CodecState, emit: &mut EmitEncode) -> bool {
    if code == ENCODE_FLUSH {
        if gl_container(state) != 0 {
            emit(SI);
        }
        *state = CodecState::INITIAL;
        return true;
    }
    let code = code as u32;

    if code < 0x80 && code != 0x1B {
        if gl_container(state) != 0 {
            emit(SI);
            state.s1 &= !GL_MASK;
        }
        emit(code as u8);
        return true;
    }

    if let Some(b) = iso8859_1::TABLE.encode_char(code) {
        if container_idx(state, 1) != LATIN1_IDX {
            emit(ESC);
            emit(b'-');
            emit(b'A');
            set_container_idx(state, 1, LATIN1_IDX);
        }
        emit(b | 0x80);
        return true;
    }

    if let Some((r, c)) = jisx0208::TABLE.encode(code) {
        if container_idx(state, 0) != 2 {
            emit(ESC);
            emit(b'$');
            emit(b'B');
            set_container_idx(state, 0, 2);
        }
        emit(r);
        emit(c);
        return true;
    }

    // spec.md §8's Compound-Text scenario requires walking `CTEXT_ENCODINGS`
    // (Big5, then the two ISO-8859 extensions) before giving up to the
    // UTF-8 DOCS fallback — each as a fully self-contained DOCS segment, one
    // character per segment, rather than maintaining cross-call state for a
    // designation that DOCS doesn't keep active the way G0..G3 do.
    for (name, sub) in CTEXT_ENCODINGS {
        let payload: [u8; 2] = match sub {
            CtextSub::Dbcs(t) => match t.encode(code) {
                Some((b1, b2)) => [b1, b2],
                None => continue,
            },
            CtextSub::Sbcs(t) => match t.encode_char(code) {
                Some(b) => [b, 0],
                None => continue,
            },
        };
        let payload_len = if matches!(sub, CtextSub::Dbcs(_)) { 2 } else { 1 };
        emit_docs_ctext_segment(name, &payload[..payload_len], emit);
        return true;
    }

    // Fall back to a self-contained DOCS-UTF8 run: everything in
    // `CTEXT_ENCODINGS` has been tried and missed.
    emit(ESC);
    emit(b'%');
    emit(b'G');
    let mut buf = [0u8; 4];
    let n = encode_utf8_raw(code, &mut buf);
    for &b in &buf[..n] {
        emit(b);
    }
    emit(ESC);
    emit(b'%');
    emit(b'@');
    true
}

/// Emits one complete `DOCSCTEXT` extended segment naming `name`, carrying
/// `payload` as its entire contents — the mirror image of
/// [`docsctext_header_decode`]/[`docsctext_payload_decode`].
fn emit_docs_ctext_segment(name: &str, payload: &[u8], emit: &mut EmitEncode) {
    emit(ESC);
    emit(b'%');
    emit(b'/');
    emit(b'2');
    let len = name.len() + 1 + payload.len();
    emit(0x80 | ((len >> 7) & 0x7F) as u8);
    emit(0x80 | (len & 0x7F) as u8);
    for &b in name.as_bytes() {
        emit(b);
    }
    emit(STX);
    for &b in payload {
        emit(b);
    }
}

fn encode_utf8_raw(code: u32, buf: &mut [u8; 4]) -> usize {
    if code < 0x80 {
        buf[0] = code as u8;
        1
    } else if code < 0x800 {
        buf[0] = 0xC0 | (code >> 6) as u8;
        buf[1] = 0x80 | (code & 0x3F) as u8;
        2
    } else if code < 0x10000 {
        buf[0] = 0xE0 | (code >> 12) as u8;
        buf[1] = 0x80 | ((code >> 6) & 0x3F) as u8;
        buf[2] = 0x80 | (code & 0x3F) as u8;
        3
    } else {
        buf[0] = 0xF0 | (code >> 18) as u8;
        buf[1] = 0x80 | ((code >> 12) & 0x3F) as u8;
        buf[2] = 0x80 | ((code >> 6) & 0x3F) as u8;
        buf[3] = 0x80 | (code & 0x3F) as u8;
        4
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

    #[test]
    fn ascii_passthrough() {
        assert_eq!(decode_bytes(EncodingId::Iso2022, b"ok"), vec!['o' as u32, 'k' as u32]);
    }

    #[test]
    fn designate_jisx0208_g0_then_ascii() {
        // `F|` is spec.md §8's literal ISO-2022-JP byte pair for U+65E5 (日).
        let bytes = vec![ESC, b'$', b'B', b'F', b'|', ESC, b'(', b'B', b'!'];
        assert_eq!(decode_bytes(EncodingId::Iso2022, &bytes), vec![0x65E5, '!' as u32]);
    }

    #[test]
    fn compound_text_latin1_round_trips() {
        let d = descriptor_for(EncodingId::CompoundText);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x00E9, &mut state, &mut |b| bytes.push(b)));
        assert!((d.encode)(d, ENCODE_FLUSH, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(decode_bytes(EncodingId::CompoundText, &bytes), vec![0x00E9]);
    }

    #[test]
    fn docs_utf8_fallback_round_trips() {
        let d = descriptor_for(EncodingId::CompoundText);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x1F600, &mut state, &mut |b| bytes.push(b)));
        assert_eq!(decode_bytes(EncodingId::CompoundText, &bytes), vec![0x1F600]);
    }

    /// spec.md §8 scenario, literal: Compound Text encode of U+00A0 (NBSP)
    /// then U+5143 designates ISO-8859-1 into GR and emits 0xA0, then
    /// (since U+5143 is in neither Latin-1 nor JIS X 0208) designates Big5
    /// in a DOCS segment and emits its Big5 bytes.
    #[test]
    fn compound_text_encode_falls_through_to_big5_docs_segment() {
        let d = descriptor_for(EncodingId::CompoundText);
        let mut state = CodecState::INITIAL;
        let mut bytes = Vec::new();
        assert!((d.encode)(d, 0x00A0, &mut state, &mut |b| bytes.push(b)));
        assert!((d.encode)(d, 0x5143, &mut state, &mut |b| bytes.push(b)));
        assert!((d.encode)(d, ENCODE_FLUSH, &mut state, &mut |b| bytes.push(b)));

        assert_eq!(decode_bytes(EncodingId::CompoundText, &bytes), vec![0x00A0, 0x5143]);

        // Header is ESC `%` `/` <digit> <len_hi> <len_lo> (6 bytes), then the
        // name, then STX, then the payload.
        let marker = [ESC, b'%', b'/'];
        let pos = bytes
            .windows(marker.len())
            .position(|w| w == marker)
            .expect("no DOCS segment emitted for U+5143");
        assert_eq!(&bytes[pos + 6..pos + 12], b"big5-0", "DOCS segment must name big5-0");
        assert_eq!(bytes[pos + 12], STX);
        assert_eq!(&bytes[pos + 13..pos + 15], &[0xA4, 0x40], "Big5 bytes for U+5143");
    }

    /// spec.md §8 scenario: a DOCS extended segment naming `iso8859-15`
    /// carries three plain ASCII bytes through that sub-codec.
    #[test]
    fn docs_ctext_named_segment_iso8859_15() {
        let mut bytes = vec![ESC, b'%', b'/', b'1', 0x80, 0x8E];
        bytes.extend_from_slice(b"iso8859-15");
        bytes.push(STX);
        bytes.extend_from_slice(b"xyz");
        assert_eq!(
            decode_bytes(EncodingId::Iso2022, &bytes),
            vec!['x' as u32, 'y' as u32, 'z' as u32]
        );
    }

    #[test]
    fn single_shift_ss2_via_latin1_g2() {
        // Designate Latin-1 into G2 then invoke it once via SS2 (ESC N).
        let bytes = [ESC, b'.', b'A', ESC, b'N', 0x29];
        assert_eq!(decode_bytes(EncodingId::Iso2022, &bytes), vec![0x00A9]);
    }
}

//! Integration coverage for spec.md §8's "universal invariants", exercised
//! across every encoding this crate registers via [`enumerate`] rather than
//! one encoding at a time — the per-codec unit tests already cover each
//! codec's own scenario tests; this file covers the properties that are
//! about the *dispatcher* treating every codec uniformly.

use charset_stream::{enumerate, flush, from_unicode, to_unicode, CodecState, EncodingId, TranscodeOptions};

fn all_encodings() -> Vec<EncodingId> {
    let mut ids = Vec::new();
    let mut n = 0;
    loop {
        let id = enumerate(n);
        if id == EncodingId::Unknown {
            break;
        }
        ids.push(id);
        n += 1;
    }
    ids
}

/// Encodes `scalars` through `id`, including a trailing flush, and asserts
/// the encoder never stalls or fails on plain ASCII input (every registered
/// encoding's G0/default mode is ASCII-compatible).
fn encode_with_flush(id: EncodingId, scalars: &[i32]) -> Vec<u8> {
    let mut state = CodecState::INITIAL;
    let mut out = vec![0u8; 4096];
    let (consumed, written, stopped) = from_unicode(id, scalars, &mut state, &mut out, TranscodeOptions::default());
    assert_eq!(consumed, scalars.len(), "{id:?} failed to encode representative ASCII text");
    assert!(!stopped, "{id:?} reported an unrepresentable scalar in plain ASCII text");
    let mut bytes = out[..written].to_vec();

    let mut trailer = [0u8; 32];
    let n = flush(id, &mut state, &mut trailer);
    bytes.extend_from_slice(&trailer[..n]);
    assert_eq!(state, CodecState::INITIAL, "{id:?} flush must return state to INITIAL");
    bytes
}

fn decode_whole(id: EncodingId, bytes: &[u8]) -> Vec<u32> {
    let mut state = CodecState::INITIAL;
    let mut out = vec![0u32; 4096];
    let (consumed, written) = to_unicode(id, bytes, &mut state, &mut out);
    assert_eq!(consumed, bytes.len(), "{id:?} did not consume every byte of its own output");
    out[..written].to_vec()
}

/// spec.md §8 invariant 2: every ASCII scalar round-trips through
/// `from_unicode` then `to_unicode` as itself, for every `contains_ascii`
/// encoding.
#[test]
fn ascii_round_trips_through_every_contains_ascii_encoding() {
    let text = "Hello, World! 0123456789";
    let scalars: Vec<i32> = text.chars().map(|c| c as i32).collect();
    let expected: Vec<u32> = scalars.iter().map(|&c| c as u32).collect();

    for id in all_encodings() {
        if !id.contains_ascii() {
            continue;
        }
        let bytes = encode_with_flush(id, &scalars);
        let decoded = decode_whole(id, &bytes);
        assert_eq!(decoded, expected, "{id:?} did not round-trip plain ASCII");
    }
}

/// spec.md §8 invariant 1: feeding a byte stream through `to_unicode` in any
/// partitioning produces identical output, with state threaded across
/// calls. Exercised here with three partitionings: whole buffer, one byte
/// at a time, and an arbitrary split in the middle (which, for the
/// escape-driven codecs, lands inside an escape sequence more often than
/// not — exactly the case state-threading exists to handle).
#[test]
fn partitioning_does_not_affect_decoded_output() {
    let text = "abc123 XYZ";
    let scalars: Vec<i32> = text.chars().map(|c| c as i32).collect();

    for id in all_encodings() {
        let bytes = encode_with_flush(id, &scalars);
        let whole = decode_whole(id, &bytes);

        let mut state = CodecState::INITIAL;
        let mut one_at_a_time = Vec::new();
        for &b in &bytes {
            let mut scratch = [0u32; 8];
            let (consumed, written) = to_unicode(id, &[b], &mut state, &mut scratch);
            assert_eq!(consumed, 1);
            one_at_a_time.extend_from_slice(&scratch[..written]);
        }
        assert_eq!(one_at_a_time, whole, "{id:?}: byte-at-a-time decode diverged from whole-buffer decode");

        if bytes.len() >= 2 {
            let mid = bytes.len() / 2;
            let mut state = CodecState::INITIAL;
            let mut split = Vec::new();
            for chunk in [&bytes[..mid], &bytes[mid..]] {
                let mut scratch = [0u32; 64];
                let (consumed, written) = to_unicode(id, chunk, &mut state, &mut scratch);
                assert_eq!(consumed, chunk.len());
                split.extend_from_slice(&scratch[..written]);
            }
            assert_eq!(split, whole, "{id:?}: mid-stream split decode diverged from whole-buffer decode");
        }
    }
}

/// spec.md §8 invariant 5: `to_unicode` is total on every byte value for
/// every encoding — it never panics, only emits U+FFFF on bad input.
#[test]
fn to_unicode_is_total_over_every_byte_value() {
    for id in all_encodings() {
        let mut state = CodecState::INITIAL;
        let mut out = [0u32; 4];
        for byte in 0u8..=255 {
            let _ = to_unicode(id, &[byte], &mut state, &mut out);
        }
    }
}

/// spec.md §8 invariant 6: finalizing an encoder at its initial state
/// succeeds and leaves state unchanged — flushing with nothing pending is a
/// true no-op for every encoding.
#[test]
fn flush_from_initial_state_is_a_true_no_op() {
    for id in all_encodings() {
        let mut state = CodecState::INITIAL;
        let mut scratch = [0u8; 16];
        let written = flush(id, &mut state, &mut scratch);
        assert_eq!(written, 0, "{id:?}: flushing a fresh state must emit no trailer bytes");
        assert_eq!(state, CodecState::INITIAL);
    }
}

/// spec.md §8 invariant 6 (continued): after finalizing mid-stream, the
/// next character encodes identically to encoding it from scratch.
#[test]
fn encoding_after_flush_matches_a_fresh_start() {
    let c = 'A' as i32;
    for id in all_encodings() {
        let mut state = CodecState::INITIAL;
        let mut scratch = [0u8; 64];
        // Put a character through, then flush back to INITIAL.
        let (_, n1, ok1) = from_unicode(id, &[c], &mut state, &mut scratch, TranscodeOptions::default());
        assert!(ok1);
        let _ = n1;
        let _ = flush(id, &mut state, &mut [0u8; 16]);
        assert_eq!(state, CodecState::INITIAL);

        let mut after_flush = [0u8; 64];
        let (_, n2, ok2) = from_unicode(id, &[c], &mut state, &mut after_flush, TranscodeOptions::default());
        assert!(ok2);

        let mut fresh_state = CodecState::INITIAL;
        let mut fresh = [0u8; 64];
        let (_, n3, ok3) = from_unicode(id, &[c], &mut fresh_state, &mut fresh, TranscodeOptions::default());
        assert!(ok3);

        assert_eq!(&after_flush[..n2], &fresh[..n3], "{id:?}: post-flush encode diverged from a fresh encode");
    }
}

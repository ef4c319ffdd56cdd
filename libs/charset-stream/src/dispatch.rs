//! The streaming front end: drives a [`CodecDescriptor`]'s `decode`/`encode`
//! function pointers over caller-owned buffers.
//!
//! Everything below is synchronous, allocation-free, and reentrant via
//! [`CodecState`] alone, per the concurrency model this crate follows: no
//! thread spawns, no I/O, no suspension point hides inside either function.

use tracing::debug;

use crate::codec::descriptor_for;
use crate::config::TranscodeOptions;
use crate::types::{CodecState, EncodingId, ENCODE_FLUSH};

/// Decodes as much of `input` as fits in `output`, threading `state` across
/// the call so the caller may resume with the remaining bytes of `input` in
/// a later call.
///
/// Returns `(bytes_consumed, code_points_written)`. Stops before decoding a
/// byte whose handling might need room `output` doesn't have; a byte that
/// itself decodes to more scalars than remain is never partially applied —
/// the codec's own state is only advanced for bytes this call fully
/// accounted for in `output`.
pub fn to_unicode(id: EncodingId, input: &[u8], state: &mut CodecState, output: &mut [u32]) -> (usize, usize) {
    if !state.is_initial() {
        debug!(?id, s0 = state.s0, s1 = state.s1, "resuming decode with non-initial state");
    }
    let descriptor = descriptor_for(id);
    let mut written = 0usize;
    let mut consumed = 0usize;
    for &byte in input {
        if written >= output.len() {
            break;
        }
        (descriptor.decode)(descriptor, byte, state, &mut |scalar| {
            if written < output.len() {
                output[written] = scalar;
                written += 1;
            }
        });
        consumed += 1;
    }
    (consumed, written)
}

/// Encodes as much of `input` as fits in `output`.
///
/// Returns `(code_points_consumed, bytes_written, stopped_unrepresentable)`.
/// On an unrepresentable scalar: if `options.report_unrepresentable`, the
/// call stops with `consumed` pointing just before the offending scalar and
/// the flag set; otherwise the scalar is dropped and encoding continues.
/// Like [`to_unicode`], a call never starts a scalar it can't be sure fits;
/// callers who need to flush should pass [`ENCODE_FLUSH`] as the final
/// input element (or call this function again with an empty `input` after
/// appending it, since flush needs no dedicated entry point here).
pub fn from_unicode(
    id: EncodingId,
    input: &[i32],
    state: &mut CodecState,
    output: &mut [u8],
    options: TranscodeOptions,
) -> (usize, usize, bool) {
    if !state.is_initial() {
        debug!(?id, s0 = state.s0, s1 = state.s1, "resuming encode with non-initial state");
    }
    let descriptor = descriptor_for(id);
    let mut written = 0usize;
    let mut consumed = 0usize;
    for &scalar in input {
        if written >= output.len() {
            break;
        }
        let start = written;
        let ok = (descriptor.encode)(descriptor, scalar, state, &mut |byte| {
            if written < output.len() {
                output[written] = byte;
                written += 1;
            }
        });
        if !ok {
            written = start;
            if options.report_unrepresentable {
                return (consumed, written, true);
            }
            continue;
        }
        consumed += 1;
    }
    (consumed, written, false)
}

/// Convenience wrapper finalizing an encoder: feeds [`ENCODE_FLUSH`] and
/// returns the trailer bytes it produced. Per spec, this always succeeds and
/// leaves `state` at [`CodecState::INITIAL`].
pub fn flush(id: EncodingId, state: &mut CodecState, output: &mut [u8]) -> usize {
    let descriptor = descriptor_for(id);
    let mut written = 0usize;
    let ok = (descriptor.encode)(descriptor, ENCODE_FLUSH, state, &mut |byte| {
        if written < output.len() {
            output[written] = byte;
            written += 1;
        }
    });
    debug_assert!(ok, "flush must always succeed");
    debug_assert!(state.is_initial(), "flush must return state to INITIAL");
    written
}

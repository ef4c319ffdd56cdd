//! # Codec state layout:
//! [(< back to crate root)](crate)
//!
//! Every codec threads its resumable position through the same
//! [`crate::CodecState`]: two `u32` words, zero-initialized, opaque to
//! callers. A caller may persist `(s0, s1)` across a process boundary and
//! resume decoding or encoding later, provided both words travel together.
//!
//! Bit layouts are private to each codec module and are not part of this
//! crate's public contract — two different encodings are free to reuse the
//! same bit positions for unrelated purposes. The one crate-wide rule every
//! codec honors: `CodecState::INITIAL` (`(0, 0)`) is always a valid starting
//! point, and encoding [`crate::types::ENCODE_FLUSH`] always returns the
//! state to `INITIAL`.
//!
//! Stateless codecs (the single-byte tables, the East-Asian DBCS codecs,
//! UTF-8) never read or write `state` at all beyond leaving it at its
//! initial value — the field exists on every codec's signature uniformly so
//! the dispatcher can hold one function-pointer shape per direction rather
//! than one per family.

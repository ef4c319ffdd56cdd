//! # Streaming model:
//! [(< back to crate root)](crate)
//!
//! [`crate::to_unicode`] and [`crate::from_unicode`] are the only entry
//! points most callers need; [`crate::codec::descriptor_for`] and the
//! per-family `decode`/`encode` function pointers underneath are public for
//! callers who want to drive a single byte or scalar by hand (a caller
//! feeding one byte at a time off a socket, say) without going through a
//! buffer-oriented front end.
//!
//! Three invariants hold for every encoding in this crate, independent of
//! how the input is split across calls:
//! - Feeding a byte stream one byte at a time through `to_unicode` produces
//!   the same code points, in the same order, as feeding it in one call.
//! - A malformed byte never aborts decoding: it produces
//!   [`crate::types::DECODE_ERROR`] in line and decoding resumes from the
//!   next byte in idle state.
//! - `from_unicode` never emits a partial character: either a scalar's full
//!   encoded form is written, or none of it is.

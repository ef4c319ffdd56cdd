// cSpell::ignore koi8 sjis shiftjis bigfive euc ctext docs dbcs sbcs gl gr

//! # Purpose:
//! Streaming, stateful character-set transcoding: ISO 2022 / X11 Compound
//! Text, UTF-8/16/7, and the common East-Asian multibyte encodings, all
//! driven through one resumable 64-bit codec state.
//!
//! # Topics:
//! - [Supported encodings](_doc::supported_encodings)
//! - [Codec state layout](_doc::state_layout)
//! - [ISO 2022 and Compound Text](_doc::iso2022_and_compound_text)
//! - [Streaming model](_doc::streaming_model)
//!
//! ## Examples:
//! ```
//! use charset_stream::{to_unicode, CodecState, EncodingId};
//!
//! // Shift_JIS double-byte decode, byte at a time, threading state:
//! let mut state = CodecState::INITIAL;
//! let mut out = [0u32; 4];
//! let (_, n) = to_unicode(EncodingId::ShiftJis, &[0x82], &mut state, &mut out);
//! assert_eq!(n, 0); // lead byte alone emits nothing yet
//! let (_, n) = to_unicode(EncodingId::ShiftJis, &[0xA0], &mut state, &mut out);
//! assert_eq!(out[..n], [0x3042]); // あ
//! ```
//!
//! ```
//! use charset_stream::label::{lookup_by_name, Namespace};
//!
//! assert_eq!(
//!     lookup_by_name(Namespace::Mime, "Shift_JIS").unwrap(),
//!     charset_stream::EncodingId::ShiftJis
//! );
//! ```

/// Documentation topics
pub mod _doc {
    pub mod iso2022_and_compound_text;
    pub mod state_layout;
    pub mod streaming_model;
    pub mod supported_encodings;
}

pub mod codec;
pub mod config;
pub mod dispatch;
pub mod label;
pub mod locale;
pub mod tables;
pub mod types;

pub use config::TranscodeOptions;
pub use dispatch::{flush, from_unicode, to_unicode};
pub use label::{canonical_name, enumerate, lookup_by_name, upgrade, LookupError, Namespace};
pub use locale::detect_from_locale;
pub use types::{CodecState, EncodingId, DECODE_ERROR, ENCODE_FLUSH};

//! # Supported encodings:
//! [(< back to crate root)](crate)
//!
//! [`crate::enumerate`] walks this list in order; [`crate::EncodingId`] is
//! `#[non_exhaustive]` so a future release can grow it without breaking
//! callers that match on specific variants with a wildcard arm.
//!
//! - Single-byte: ASCII, ISO-8859-1, ISO-8859-2, ISO-8859-5, Windows-1252,
//!   KOI8-R.
//! - Unicode transformation formats: UTF-8, UTF-16 (auto/BE/LE), UTF-7
//!   (standard and conservative).
//! - East-Asian stateless double-byte: Shift_JIS, Big5, CP949.
//! - East-Asian EUC family: EUC-JP, EUC-CN, EUC-KR, EUC-TW.
//! - HZ-GB-2312 (the 7-bit Chinese email encoding from RFC 1843).
//! - ISO-2022 subset profiles: ISO-2022-JP, ISO-2022-KR.
//! - Full ISO-2022 / X11 Compound Text, including DOCS extended segments.
//!
//! This is a representative set grounded against the corpus this crate was
//! built from, not a byte-exact mirror of the IANA Character Sets registry —
//! see [`crate::tables`] for the same disclaimer on the translation data
//! itself.

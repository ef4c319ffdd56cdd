//! # ISO 2022 and Compound Text:
//! [(< back to crate root)](crate)
//!
//! This crate carries two different depths of ISO-2022 support:
//!
//! - [`crate::codec::iso2022_subset`] implements exactly the two IETF
//!   profiles ISO-2022-JP ([RFC 1468]) and ISO-2022-KR ([RFC 1557]): a
//!   handful of fixed designation sequences, no single shifts, no GR.
//! - [`crate::codec::iso2022_full`] implements the general G0-G3
//!   designation/invocation machine plus the X11 `COMPOUND_TEXT` DOCS
//!   extension (both the whole-stream "switch to UTF-8" form and the
//!   length-prefixed named-encoding segment form).
//!
//! `iso2022_full` simplifies the invocation model relative to the full ECMA
//! 35 state machine: GR is always whatever is designated as G1 (the
//! conventional EUC/X11 reading), and there is no support for `LS2`/`LS3`
//! locking shifts moving G2/G3 into GL — only the `SS2`/`SS3` single shifts
//! reach G2/G3, which matches every encoding this crate actually names.
//!
//! [RFC 1468]: https://www.rfc-editor.org/rfc/rfc1468
//! [RFC 1557]: https://www.rfc-editor.org/rfc/rfc1557

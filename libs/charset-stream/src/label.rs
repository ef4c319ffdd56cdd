//! Name registry: mapping human- and protocol-facing encoding names to
//! [`EncodingId`] and back.
//!
//! Grounded on `dpx-dicom-charset`'s `term.rs`, which keeps a single
//! `Term` enum and resolves incoming text against it with graduated match
//! strength (`TermMatchedWith`). This module keeps that same "table of
//! known labels, several aliases per entry, graduated match" shape, but one
//! step removed: several independent namespaces (local short names, MIME,
//! X11/Compound Text `charset` registry strings, and Emacs `coding-system`
//! symbols) can all refer to the same [`EncodingId`], so the table is keyed
//! by `(Namespace, &str)` rather than by a single canonical spelling.

use snafu::{ensure, Snafu};
use tracing::warn;

use crate::types::EncodingId;

/// Which naming convention a label is drawn from. Per-namespace because the
/// same id is spelled differently in each: ISO-2022-JP's Compound Text name
/// is `ISO8859-1` fragments glued by `csISO2022JP`-style registry strings,
/// while Emacs calls the same bytes `iso-2022-jp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// This crate's own short names (`"ascii"`, `"utf-8"`, `"shift_jis"`).
    Local,
    /// IANA MIME charset names (`"ISO-8859-1"`, `"Shift_JIS"`, `"UTF-7"`).
    Mime,
    /// X11 / Compound Text font charset registry-and-encoding strings
    /// (`"iso8859-1"`, `"jisx0208.1983-0"`).
    X11,
    /// Emacs `coding-system` symbols (`"iso-2022-jp"`, `"utf-8-unix"`).
    Emacs,
}

#[derive(Debug, Snafu)]
pub enum LookupError {
    #[snafu(display("empty encoding name in namespace {namespace:?}"))]
    EmptyLabel { namespace: Namespace },
    #[snafu(display("unknown encoding name {name:?} in namespace {namespace:?}"))]
    UnknownLabel { namespace: Namespace, name: String },
}

struct Entry {
    id: EncodingId,
    local: &'static str,
    mime: &'static [&'static str],
    x11: &'static [&'static str],
    emacs: &'static [&'static str],
}

static REGISTRY: &[Entry] = &[
    Entry { id: EncodingId::Ascii, local: "ascii", mime: &["US-ASCII", "ASCII", "ANSI_X3.4-1968"], x11: &["iso8859-1"], emacs: &["us-ascii"] },
    Entry { id: EncodingId::Iso8859_1, local: "iso8859-1", mime: &["ISO-8859-1", "ISO_8859-1", "latin1"], x11: &["iso8859-1"], emacs: &["iso-8859-1", "latin-1"] },
    Entry { id: EncodingId::Iso8859_2, local: "iso8859-2", mime: &["ISO-8859-2", "ISO_8859-2", "latin2"], x11: &["iso8859-2"], emacs: &["iso-8859-2", "latin-2"] },
    Entry { id: EncodingId::Iso8859_5, local: "iso8859-5", mime: &["ISO-8859-5", "ISO_8859-5", "cyrillic"], x11: &["iso8859-5"], emacs: &["iso-8859-5"] },
    Entry { id: EncodingId::Cp1252, local: "cp1252", mime: &["windows-1252", "CP1252"], x11: &["microsoft-cp1252"], emacs: &["windows-1252"] },
    Entry { id: EncodingId::Koi8R, local: "koi8-r", mime: &["KOI8-R"], x11: &["koi8-r"], emacs: &["koi8-r"] },
    Entry { id: EncodingId::Utf8, local: "utf-8", mime: &["UTF-8", "utf8"], x11: &["iso10646-1"], emacs: &["utf-8", "utf-8-unix"] },
    Entry { id: EncodingId::Utf16, local: "utf-16", mime: &["UTF-16"], x11: &[], emacs: &["utf-16"] },
    Entry { id: EncodingId::Utf16Be, local: "utf-16be", mime: &["UTF-16BE"], x11: &[], emacs: &["utf-16be"] },
    Entry { id: EncodingId::Utf16Le, local: "utf-16le", mime: &["UTF-16LE"], x11: &[], emacs: &["utf-16le"] },
    Entry { id: EncodingId::Utf7, local: "utf-7", mime: &["UTF-7"], x11: &[], emacs: &["utf-7"] },
    Entry { id: EncodingId::ShiftJis, local: "shift_jis", mime: &["Shift_JIS", "SJIS"], x11: &["jisx0208.1983-0"], emacs: &["shift-jis", "sjis"] },
    Entry { id: EncodingId::Big5, local: "big5", mime: &["Big5"], x11: &["big5-0"], emacs: &["big5"] },
    Entry { id: EncodingId::Cp949, local: "cp949", mime: &["UHC", "CP949"], x11: &["ksc5601.1992-3"], emacs: &["uhc", "cp949"] },
    Entry { id: EncodingId::EucJp, local: "euc-jp", mime: &["EUC-JP"], x11: &[], emacs: &["euc-jp", "japanese-iso-8bit"] },
    Entry { id: EncodingId::EucCn, local: "euc-cn", mime: &["EUC-CN", "GB2312"], x11: &[], emacs: &["euc-cn", "chinese-iso-8bit"] },
    Entry { id: EncodingId::EucKr, local: "euc-kr", mime: &["EUC-KR"], x11: &[], emacs: &["euc-kr", "korean-iso-8bit"] },
    Entry { id: EncodingId::EucTw, local: "euc-tw", mime: &["EUC-TW"], x11: &[], emacs: &["euc-tw"] },
    Entry { id: EncodingId::HzGb2312, local: "hz-gb2312", mime: &["HZ-GB-2312"], x11: &[], emacs: &["hz-gb2312"] },
    Entry { id: EncodingId::Iso2022Jp, local: "iso-2022-jp", mime: &["ISO-2022-JP"], x11: &[], emacs: &["iso-2022-jp"] },
    Entry { id: EncodingId::Iso2022Kr, local: "iso-2022-kr", mime: &["ISO-2022-KR"], x11: &[], emacs: &["iso-2022-kr"] },
    Entry { id: EncodingId::Iso2022, local: "iso-2022", mime: &["ISO-2022"], x11: &[], emacs: &["iso-2022-7bit"] },
    Entry { id: EncodingId::CompoundText, local: "compound-text", mime: &[], x11: &["COMPOUND_TEXT"], emacs: &["ctext"] },
];

/// Every id [`enumerate`] walks, in declaration order. `Unknown` is excluded
/// since it isn't an encoding; `Utf7Conservative` is excluded since it's a
/// behavioral variant of `Utf7` rather than a distinct wire format, so a
/// caller enumerating "the encodings this crate can name" would see it twice
/// under different spellings for no benefit.
static ENUMERABLE: &[EncodingId] = &[
    EncodingId::Ascii,
    EncodingId::Iso8859_1,
    EncodingId::Iso8859_2,
    EncodingId::Iso8859_5,
    EncodingId::Cp1252,
    EncodingId::Koi8R,
    EncodingId::Utf8,
    EncodingId::Utf16,
    EncodingId::Utf16Be,
    EncodingId::Utf16Le,
    EncodingId::Utf7,
    EncodingId::ShiftJis,
    EncodingId::Big5,
    EncodingId::Cp949,
    EncodingId::EucJp,
    EncodingId::EucCn,
    EncodingId::EucKr,
    EncodingId::EucTw,
    EncodingId::HzGb2312,
    EncodingId::Iso2022Jp,
    EncodingId::Iso2022Kr,
    EncodingId::Iso2022,
    EncodingId::CompoundText,
];

fn names_for(namespace: Namespace, entry: &'static Entry) -> &'static [&'static str] {
    match namespace {
        Namespace::Local => std::slice::from_ref(&entry.local),
        Namespace::Mime => entry.mime,
        Namespace::X11 => entry.x11,
        Namespace::Emacs => entry.emacs,
    }
}

/// Resolves a name within one namespace to an [`EncodingId`].
///
/// Matching is case-insensitive ASCII (MIME and X11 names are conventionally
/// case-insensitive; Emacs symbols and this crate's own local names happen
/// to already be lowercase). There is no fuzzy/Levenshtein fallback here —
/// unlike `Term::search_by_keyword`'s `TermMatchedWith::Fuzzy` tier, an
/// unrecognized charset name is a hard error rather than a best guess, since
/// silently substituting the wrong transcoding is worse than failing closed.
pub fn lookup_by_name(namespace: Namespace, name: &str) -> Result<EncodingId, LookupError> {
    ensure!(!name.is_empty(), EmptyLabelSnafu { namespace });
    for entry in REGISTRY {
        for candidate in names_for(namespace, entry) {
            if candidate.eq_ignore_ascii_case(name) {
                return Ok(entry.id);
            }
        }
    }
    warn!(?namespace, name, "unrecognized encoding name");
    UnknownLabelSnafu { namespace, name: name.to_owned() }.fail()
}

/// The preferred spelling for `id` within `namespace`. Panics if `id` has no
/// entry in the registry (an internal id added without a label) or no name
/// in that namespace at all — both are registry-completeness bugs, not
/// caller errors, so they are not folded into [`LookupError`].
pub fn canonical_name(namespace: Namespace, id: EncodingId) -> &'static str {
    let entry = REGISTRY
        .iter()
        .find(|e| e.id == id)
        .unwrap_or_else(|| panic!("{id:?} has no label registry entry"));
    names_for(namespace, entry)
        .first()
        .copied()
        .unwrap_or_else(|| panic!("{id:?} has no {namespace:?} name"))
}

/// Walks the enumerable id list. Returns `EncodingId::Unknown` once `n` runs
/// past the end, so callers can loop `for n in 0.. { if enumerate(n) ==
/// Unknown { break } }` without a separate length query.
pub fn enumerate(n: usize) -> EncodingId {
    ENUMERABLE.get(n).copied().unwrap_or(EncodingId::Unknown)
}

/// Promotes a narrow encoding to the wider superset real-world senders often
/// actually mean by it — the same confusions `dpx-dicom-charset`'s `Config`
/// anticipates with its `allow_*` compatibility flags, but resolved as a
/// direct mapping rather than a parser-side leniency switch.
///
/// `ISO-8859-4 -> CP1254` from the original upgrade table is not represented
/// here: this crate's encoding set doesn't carry either of those two (see
/// DESIGN.md), so that pair is a documented omission rather than a silent
/// no-op.
pub fn upgrade(id: EncodingId) -> EncodingId {
    match id {
        EncodingId::Ascii => EncodingId::Cp1252,
        EncodingId::Iso8859_1 => EncodingId::Cp1252,
        EncodingId::EucKr => EncodingId::Cp949,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn local_lookup_round_trips_every_enumerable_id() {
        for n in 0.. {
            let id = enumerate(n);
            if id == EncodingId::Unknown {
                break;
            }
            let name = canonical_name(Namespace::Local, id);
            assert_eq!(lookup_by_name(Namespace::Local, name).unwrap(), id);
        }
    }

    #[test]
    fn mime_lookup_is_case_insensitive() {
        assert_eq!(lookup_by_name(Namespace::Mime, "shift_jis").unwrap(), EncodingId::ShiftJis);
        assert_eq!(lookup_by_name(Namespace::Mime, "SHIFT_JIS").unwrap(), EncodingId::ShiftJis);
    }

    #[traced_test]
    #[test]
    fn unknown_name_is_an_error() {
        assert!(matches!(
            lookup_by_name(Namespace::Mime, "definitely-not-a-charset"),
            Err(LookupError::UnknownLabel { .. })
        ));
        assert!(logs_contain("unrecognized encoding name"));
    }

    #[test]
    fn empty_name_is_a_distinct_error() {
        assert!(matches!(lookup_by_name(Namespace::Mime, ""), Err(LookupError::EmptyLabel { .. })));
    }

    #[test]
    fn upgrade_promotes_known_confusions() {
        assert_eq!(upgrade(EncodingId::Ascii), EncodingId::Cp1252);
        assert_eq!(upgrade(EncodingId::Iso8859_1), EncodingId::Cp1252);
        assert_eq!(upgrade(EncodingId::EucKr), EncodingId::Cp949);
        assert_eq!(upgrade(EncodingId::Utf8), EncodingId::Utf8);
    }

    #[test]
    fn x11_name_for_compound_text() {
        assert_eq!(canonical_name(Namespace::X11, EncodingId::CompoundText), "COMPOUND_TEXT");
    }
}

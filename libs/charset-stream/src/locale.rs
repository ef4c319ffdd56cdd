//! Best-effort encoding guess from the process environment.
//!
//! There is no `libc`/`nl_langinfo(CODESET)` binding anywhere in the corpus
//! this crate was built from, so [`detect_from_locale`] doesn't invent one —
//! it reads the same three environment variables a shell would consult, in
//! the same priority order (`LC_ALL` overrides `LC_CTYPE` overrides `LANG`),
//! and applies substring heuristics to the locale string instead of parsing
//! its `language_COUNTRY.codeset` grammar precisely.

use crate::types::EncodingId;

fn classify(locale: &str) -> Option<EncodingId> {
    let lower = locale.to_ascii_lowercase();
    if lower.is_empty() || lower == "c" || lower == "posix" {
        return None;
    }
    if lower.ends_with(".utf-8") || lower.ends_with(".utf8") {
        return Some(EncodingId::Utf8);
    }
    if lower.contains("koi8") {
        return Some(EncodingId::Koi8R);
    }
    if lower.contains("sjis") || lower.contains("shift_jis") {
        return Some(EncodingId::ShiftJis);
    }
    if lower.contains("euckr") || lower.contains("euc-kr") {
        return Some(EncodingId::EucKr);
    }
    if lower.contains("eucjp") || lower.contains("euc-jp") {
        return Some(EncodingId::EucJp);
    }
    if lower.contains("big5") {
        return Some(EncodingId::Big5);
    }
    if lower.contains("gb2312") || lower.contains("gb18030") || lower.contains("euccn") {
        return Some(EncodingId::EucCn);
    }
    if lower.contains("8859-1") || lower.contains("iso88591") {
        return Some(EncodingId::Iso8859_1);
    }
    if lower.contains("8859-2") || lower.contains("iso88592") {
        return Some(EncodingId::Iso8859_2);
    }
    if lower.contains("8859-5") || lower.contains("iso88595") {
        return Some(EncodingId::Iso8859_5);
    }
    None
}

/// Guesses the process's text encoding from `LC_ALL`, `LC_CTYPE`, `LANG`, in
/// that order, falling back to ASCII when none name a recognized codeset
/// (including the unset, empty, `C` and `POSIX` locales, which promise
/// nothing beyond the portable character set).
pub fn detect_from_locale() -> EncodingId {
    for var in ["LC_ALL", "LC_CTYPE", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(id) = classify(&value) {
                return id;
            }
        }
    }
    EncodingId::Ascii
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_suffix_is_recognized() {
        assert_eq!(classify("en_US.UTF-8"), Some(EncodingId::Utf8));
    }

    #[test]
    fn koi8_substring_is_recognized() {
        assert_eq!(classify("ru_RU.KOI8-R"), Some(EncodingId::Koi8R));
    }

    #[test]
    fn posix_and_empty_locales_have_no_classification() {
        assert_eq!(classify("C"), None);
        assert_eq!(classify("POSIX"), None);
        assert_eq!(classify(""), None);
    }

    #[test]
    fn shift_jis_locale_is_recognized() {
        assert_eq!(classify("ja_JP.SJIS"), Some(EncodingId::ShiftJis));
    }
}

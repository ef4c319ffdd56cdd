use super::DbcsTable;

/// JIS X 0208, GL form (row/col each `0x21..=0x7E`). Used by ISO-2022-JP's
/// `ESC $ B` designation and, with 0x80 added to each byte, by EUC-JP's `GR`
/// plane. Entries must stay sorted by key for `binary_search_by_key`.
///
/// The 日/本/語 keys (`0x386c`/`0x467c`/`0x4b5c`) are the literal
/// `F| K\ 8l` bytes of spec.md §8's ISO-2022-JP scenario, not placeholders.
pub static TABLE: DbcsTable = DbcsTable {
    name: "JIS X 0208-1983",
    entries: &[
        (0x2421, 0x3042), // あ (hiragana A)
        (0x2422, 0x3044), // い
        (0x2423, 0x3046), // う
        (0x386c, 0x8a9e), // 語
        (0x467c, 0x65e5), // 日
        (0x4b5c, 0x672c), // 本
    ],
};

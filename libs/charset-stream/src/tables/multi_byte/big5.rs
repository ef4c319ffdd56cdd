use super::DbcsTable;

/// Big5, keyed by the raw (lead, trail) bytes as they appear on the wire.
/// Also used as a Compound-Text DOCS extended-segment target under the
/// `big5-0` label (spec.md §4.10).
pub static TABLE: DbcsTable = DbcsTable {
    name: "Big5",
    entries: &[
        (0xa440, 0x5143), // 元
        (0xa441, 0x5144),
        (0xa446, 0x597d), // 好
    ],
};

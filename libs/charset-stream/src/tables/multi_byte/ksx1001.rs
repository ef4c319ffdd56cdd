use super::DbcsTable;

/// KS X 1001, GL form (row/col each `0x21..=0x7E`). Used by ISO-2022-KR's
/// `ESC $ ) C` designation and, with 0x80 added to each byte, by EUC-KR's
/// `GR` plane (the standard-range subset of CP949 reuses this same table —
/// see [`crate::codec::stateless_dbcs`]).
pub static TABLE: DbcsTable = DbcsTable {
    name: "KS X 1001-1992",
    entries: &[
        (0x3021, 0xac00), // 가
        (0x3022, 0xac01),
        (0x5021, 0xb098), // 나
    ],
};

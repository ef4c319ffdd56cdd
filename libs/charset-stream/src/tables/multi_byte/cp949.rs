use super::DbcsTable;

/// CP949 (UHC), keyed by the raw (lead, trail) bytes as they appear on the
/// wire. CP949 is a superset of EUC-KR's GR plane (same rows shifted down
/// to a wider lead-byte range plus extra trail bytes for the characters KS
/// X 1001 doesn't cover) — this representative table only carries the
/// classic-range syllables that coincide with [`super::ksx1001`].
pub static TABLE: DbcsTable = DbcsTable {
    name: "CP949",
    entries: &[
        (0xB0A1, 0xac00), // 가
        (0xB0A2, 0xac01),
        (0xB3AC, 0xb098), // 나
    ],
};

use super::DbcsTable;

/// CNS 11643 plane 1, GL form (row/col each `0x21..=0x7E`). Reached through
/// EUC-TW's SS2 announcer, which additionally prefixes a plane byte (spec.md
/// §4.7) — this crate only represents plane 1.
pub static PLANE_1: DbcsTable = DbcsTable {
    name: "CNS 11643-1992 Plane 1",
    entries: &[(0x4441, 0x4e00), (0x4442, 0x4e01)],
};

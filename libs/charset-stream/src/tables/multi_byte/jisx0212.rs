use super::DbcsTable;

/// JIS X 0212-1990 ("the supplementary set"), GL form (row/col each
/// `0x21..=0x7E`). Reached through EUC-JP's SS3 announcer (`0x8F`), with
/// 0x80 added to each byte — the same convention `jisx0208` uses for EUC-JP's
/// `GR` plane.
pub static TABLE: DbcsTable = DbcsTable {
    name: "JIS X 0212-1990",
    entries: &[
        (0x222f, 0x02d8), // ˘
        (0x2242, 0x00b0), // °
        (0x6e4b, 0x4e02),
    ],
};

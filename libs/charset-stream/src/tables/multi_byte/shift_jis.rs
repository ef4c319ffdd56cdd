use super::DbcsTable;

/// Shift-JIS two-byte range, keyed by the raw (lead, trail) bytes as they
/// appear on the wire (not the JIS X 0208 GL form — see
/// [`crate::codec::stateless_dbcs`] for the byte-range rules that route
/// here).
pub static TABLE: DbcsTable = DbcsTable {
    name: "Shift_JIS",
    entries: &[
        (0x829f, 0x3041), // ぁ
        (0x82a0, 0x3042), // あ
        (0x82a2, 0x3044), // い
    ],
};

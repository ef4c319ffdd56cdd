use super::{identity_256, SbcsTable};

/// ISO-8859-15 (Latin-9): ISO-8859-1 with eight code points swapped out for
/// the Euro sign and a handful of letters French/Finnish needed and
/// Latin-1 didn't carry. Used as one of the named Compound-Text DOCS
/// extended-segment encodings (spec.md §4.10, §8's `ctext_encodings`
/// scenario).
const fn build() -> [u16; 256] {
    let mut table = identity_256();
    table[0xA4] = 0x20AC; // €
    table[0xA6] = 0x0160; // Š
    table[0xA8] = 0x0161; // š
    table[0xB4] = 0x017D; // Ž
    table[0xB8] = 0x017E; // ž
    table[0xBC] = 0x0152; // Œ
    table[0xBD] = 0x0153; // œ
    table[0xBE] = 0x0178; // Ÿ
    table
}

pub static TABLE: SbcsTable = SbcsTable {
    name: "ISO-8859-15",
    forward: build(),
};

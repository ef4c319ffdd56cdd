use super::{identity_256, SbcsTable};

/// ISO-8859-14 (Latin-8, Celtic): ISO-8859-1's low half, with the upper
/// half replaced by Welsh/Gaelic/Breton letters instead of Latin-1's
/// Western European accents. A representative subset of the upper half,
/// not the full registry row — used as one of the named Compound-Text
/// DOCS extended-segment encodings (spec.md §4.10).
const fn build() -> [u16; 256] {
    let mut table = identity_256();
    table[0xA1] = 0x1E02; // Ḃ
    table[0xA2] = 0x1E03; // ḃ
    table[0xA4] = 0x010A; // Ċ
    table[0xA5] = 0x010B; // ċ
    table[0xA6] = 0x1E0A; // Ḋ
    table[0xA8] = 0x1E80; // Ẁ
    table[0xAA] = 0x1E82; // Ẃ
    table[0xAB] = 0x1E0B; // ḋ
    table[0xAC] = 0x1EF2; // Ỳ
    table[0xAF] = 0x1EF3; // ỳ
    table[0xB0] = 0x1E84; // Ẅ
    table[0xB1] = 0x1E85; // ẅ
    table[0xB2] = 0x1E81; // ẁ
    table[0xB4] = 0x1E83; // ẃ
    table[0xD0] = 0x0174; // Ŵ
    table[0xD7] = 0x1E6A; // Ṫ
    table[0xDE] = 0x0176; // Ŷ
    table[0xF0] = 0x0175; // ŵ
    table[0xF7] = 0x1E6B; // ṫ
    table[0xFE] = 0x0177; // ŷ
    table
}

pub static TABLE: SbcsTable = SbcsTable {
    name: "ISO-8859-14",
    forward: build(),
};

use super::{identity_256, SbcsTable};

/// ISO-8859-2 (Latin-2): Latin in the low half, Central/Eastern European
/// accented letters overlaid at 0xA0 and above. A representative subset of
/// the upper half, not the full registry row.
const fn build() -> [u16; 256] {
    let mut table = identity_256();
    table[0xA1] = 0x0104; // Ą
    table[0xA3] = 0x0141; // Ł
    table[0xA5] = 0x013D; // Ľ
    table[0xA6] = 0x015A; // Ś
    table[0xA9] = 0x0160; // Š
    table[0xAC] = 0x015E; // Ş
    table[0xAF] = 0x017B; // Ż
    table[0xB1] = 0x0105; // ą
    table[0xB3] = 0x0142; // ł
    table[0xB5] = 0x013E; // ľ
    table[0xB6] = 0x015B; // ś
    table[0xB9] = 0x0161; // š
    table[0xBC] = 0x015F; // ş
    table[0xBF] = 0x017C; // ż
    table[0xC3] = 0x0102; // Ă
    table[0xC6] = 0x0106; // Ć
    table[0xD0] = 0x0110; // Đ
    table[0xD8] = 0x0150; // Ő
    table[0xDD] = 0x0158; // Ř
    table[0xE3] = 0x0103; // ă
    table[0xE6] = 0x0107; // ć
    table[0xF0] = 0x0111; // đ
    table[0xF8] = 0x0151; // ő
    table[0xFD] = 0x0159; // ř
    table
}

pub static TABLE: SbcsTable = SbcsTable {
    name: "ISO-8859-2",
    forward: build(),
};

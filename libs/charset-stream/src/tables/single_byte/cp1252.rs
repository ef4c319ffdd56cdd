use super::{identity_256, SbcsTable, UNMAPPED};

/// Windows-1252: identical to ISO-8859-1 except the C1 control range
/// (0x80..=0x9F) is repurposed for Western punctuation and a handful of
/// Latin Extended-A / General Punctuation characters.
const fn build() -> [u16; 256] {
    let mut table = identity_256();
    table[0x80] = 0x20AC;
    table[0x81] = UNMAPPED;
    table[0x82] = 0x201A;
    table[0x83] = 0x0192;
    table[0x84] = 0x201E;
    table[0x85] = 0x2026;
    table[0x86] = 0x2020;
    table[0x87] = 0x2021;
    table[0x88] = 0x02C6;
    table[0x89] = 0x2030;
    table[0x8A] = 0x0160;
    table[0x8B] = 0x2039;
    table[0x8C] = 0x0152;
    table[0x8D] = UNMAPPED;
    table[0x8E] = 0x017D;
    table[0x8F] = UNMAPPED;
    table[0x90] = UNMAPPED;
    table[0x91] = 0x2018;
    table[0x92] = 0x2019;
    table[0x93] = 0x201C;
    table[0x94] = 0x201D;
    table[0x95] = 0x2022;
    table[0x96] = 0x2013;
    table[0x97] = 0x2014;
    table[0x98] = 0x02DC;
    table[0x99] = 0x2122;
    table[0x9A] = 0x0161;
    table[0x9B] = 0x203A;
    table[0x9C] = 0x0153;
    table[0x9D] = UNMAPPED;
    table[0x9E] = 0x017E;
    table[0x9F] = 0x0178;
    table
}

pub static TABLE: SbcsTable = SbcsTable {
    name: "windows-1252",
    forward: build(),
};

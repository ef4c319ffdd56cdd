use super::{identity_256, SbcsTable};

/// ISO-8859-1 (Latin-1) is, by definition, the identity mapping over the
/// full byte range.
pub static TABLE: SbcsTable = SbcsTable {
    name: "ISO-8859-1",
    forward: identity_256(),
};

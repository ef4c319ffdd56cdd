//! Core vocabulary types shared by every codec: [`CodecState`], [`EncodingId`],
//! [`CodecDescriptor`] and the sentinel values the whole crate agrees on.

/// In-band decode-error marker. Never a valid Unicode scalar, so it can be
/// threaded through the same `u32` channel as real code points.
pub const DECODE_ERROR: u32 = 0xFFFF;

/// Passed to an encoder in place of a code point to mean "finalize": emit
/// whatever bytes are required to return to the encoding's default state and
/// reset `state` to [`CodecState::INITIAL`].
pub const ENCODE_FLUSH: i32 = -1;

/// The two 32-bit words every codec's resumable position must fit into.
///
/// `(0, 0)` is the only state a caller ever needs to construct by hand: it is
/// both the initial state and the state every codec returns to after a
/// successful flush (see [`crate::types::ENCODE_FLUSH`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CodecState {
    pub s0: u32,
    pub s1: u32,
}

impl CodecState {
    pub const INITIAL: CodecState = CodecState { s0: 0, s1: 0 };

    pub const fn is_initial(self) -> bool {
        self.s0 == 0 && self.s1 == 0
    }
}

/// Closed set of encodings this crate knows how to transcode.
///
/// Variants are grouped by family to keep [`crate::codec::descriptor_for`]
/// (the dispatcher's match arm) readable; the order here is also the order
/// [`crate::enumerate`] walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum EncodingId {
    /// Sentinel for "no encoding" / lookup failure.
    Unknown,

    Ascii,
    Iso8859_1,
    Iso8859_2,
    Iso8859_5,
    Cp1252,
    Koi8R,

    Utf8,
    Utf16,
    Utf16Be,
    Utf16Le,
    Utf7,
    Utf7Conservative,

    ShiftJis,
    Big5,
    Cp949,

    EucJp,
    EucCn,
    EucKr,
    EucTw,

    HzGb2312,

    Iso2022Jp,
    Iso2022Kr,

    Iso2022,
    CompoundText,
}

impl EncodingId {
    /// False for the 7-bit stateful encodings that can reinterpret a bare
    /// ASCII byte depending on mode (UTF-7 in base64 mode, HZ in GB2312
    /// mode); true everywhere else, including every ISO 2022 variant, since
    /// their G0 default is ASCII-compatible GL.
    pub const fn contains_ascii(self) -> bool {
        !matches!(
            self,
            EncodingId::Utf7 | EncodingId::Utf7Conservative | EncodingId::HzGb2312
        )
    }
}

/// One character's worth of output from a decoder, or an error marker.
pub type EmitDecode<'a> = dyn FnMut(u32) + 'a;
/// One byte of output from an encoder.
pub type EmitEncode<'a> = dyn FnMut(u8) + 'a;

pub type DecodeFn = fn(&'static CodecDescriptor, u8, &mut CodecState, &mut EmitDecode);
pub type EncodeFn = fn(&'static CodecDescriptor, i32, &mut CodecState, &mut EmitEncode) -> bool;

/// Per-encoding parameter block (the "opaque per-encoding parameter block"
/// of the data model). Most families need none; the ones that do get a
/// `'static` pointer to their own descriptor table here rather than a second
/// dispatch table, so `decode`/`encode` can stay one function pointer per
/// family instead of one per encoding.
#[derive(Debug, Clone, Copy)]
pub enum Param {
    None,
    Utf16(Utf16Endian),
    Utf7 { conservative: bool },
    Euc(&'static crate::codec::euc::EucSpec),
    Dbcs(&'static crate::codec::stateless_dbcs::DbcsSpec),
    Sbcs(&'static crate::tables::single_byte::SbcsTable),
    Iso2022Subset(&'static crate::codec::iso2022_subset::SubsetSpec),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Utf16Endian {
    Big,
    Little,
    Auto,
}

/// Static binding of an [`EncodingId`] to its decode/encode operations and
/// parameter block. Every value of this type lives in `'static` storage;
/// the crate never builds one at runtime.
pub struct CodecDescriptor {
    pub id: EncodingId,
    pub decode: DecodeFn,
    pub encode: EncodeFn,
    pub param: Param,
}

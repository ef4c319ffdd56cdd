//! Dispatcher: binds every [`EncodingId`] to its [`CodecDescriptor`].
//!
//! Each family's decode/encode functions live in their own submodule;
//! this file only owns the `'static` parameter blocks they're
//! parameterized with and the match in [`descriptor_for`] that ties an
//! id to a function pointer pair and a parameter block.

pub mod euc;
pub mod hz;
pub mod iso2022_full;
pub mod iso2022_subset;
pub mod sbcs;
pub mod stateless_dbcs;
pub mod utf16;
pub mod utf7;
pub mod utf8;

use crate::tables::multi_byte::{big5, cns11643, cp949, gb2312, jisx0208, jisx0212, ksx1001, shift_jis};
use crate::tables::single_byte::{ascii, cp1252, iso8859_1, iso8859_2, iso8859_5, koi8_r};
use crate::types::{CodecDescriptor, EncodingId, Param, Utf16Endian};
use euc::{EucSpec, Ss2Kind, Ss3Kind};
use iso2022_subset::{SubsetSpec, Variant};
use stateless_dbcs::{shift_jis_single_byte_decode, shift_jis_single_byte_encode, DbcsSpec};

static EUC_JP_SPEC: EucSpec = EucSpec {
    name: "EUC-JP",
    gr_table: &jisx0208::TABLE,
    ss2: Ss2Kind::HalfwidthKana,
    ss3: Ss3Kind::Jisx0212(&jisx0212::TABLE),
};
static EUC_CN_SPEC: EucSpec = EucSpec { name: "EUC-CN", gr_table: &gb2312::TABLE, ss2: Ss2Kind::None, ss3: Ss3Kind::None };
static EUC_KR_SPEC: EucSpec = EucSpec { name: "EUC-KR", gr_table: &ksx1001::TABLE, ss2: Ss2Kind::None, ss3: Ss3Kind::None };
static EUC_TW_SPEC: EucSpec = EucSpec {
    name: "EUC-TW",
    gr_table: &cns11643::PLANE_1,
    ss2: Ss2Kind::Plane(&cns11643::PLANE_1),
    ss3: Ss3Kind::None,
};

fn is_shift_jis_lead(b: u8) -> bool {
    (0x81..=0x9F).contains(&b) || (0xE0..=0xFC).contains(&b)
}
fn is_big5_lead(b: u8) -> bool {
    (0x81..=0xFE).contains(&b)
}
fn is_cp949_lead(b: u8) -> bool {
    (0x81..=0xFE).contains(&b)
}

static SHIFT_JIS_SPEC: DbcsSpec = DbcsSpec {
    name: "Shift_JIS",
    table: &shift_jis::TABLE,
    is_lead: is_shift_jis_lead,
    single_byte_decode: Some(shift_jis_single_byte_decode),
    single_byte_encode: Some(shift_jis_single_byte_encode),
};
static BIG5_SPEC: DbcsSpec = DbcsSpec {
    name: "Big5",
    table: &big5::TABLE,
    is_lead: is_big5_lead,
    single_byte_decode: None,
    single_byte_encode: None,
};
static CP949_SPEC: DbcsSpec = DbcsSpec {
    name: "CP949",
    table: &cp949::TABLE,
    is_lead: is_cp949_lead,
    single_byte_decode: None,
    single_byte_encode: None,
};

static ISO2022_JP_SPEC: SubsetSpec = SubsetSpec { name: "ISO-2022-JP", variant: Variant::Jp };
static ISO2022_KR_SPEC: SubsetSpec = SubsetSpec { name: "ISO-2022-KR", variant: Variant::Kr };

/// Looks up the static [`CodecDescriptor`] for an [`EncodingId`]. Panics on
/// [`EncodingId::Unknown`] and on any future non-exhaustive variant this
/// crate doesn't implement yet — callers that accept arbitrary ids (the
/// label registry) must check for `Unknown` before calling this.
pub fn descriptor_for(id: EncodingId) -> &'static CodecDescriptor {
    macro_rules! d {
        ($id:expr, $decode:expr, $encode:expr, $param:expr) => {
            &CodecDescriptor { id: $id, decode: $decode, encode: $encode, param: $param }
        };
    }
    match id {
        EncodingId::Ascii => d!(id, sbcs::decode, sbcs::encode, Param::Sbcs(&ascii::TABLE)),
        EncodingId::Iso8859_1 => d!(id, sbcs::decode, sbcs::encode, Param::Sbcs(&iso8859_1::TABLE)),
        EncodingId::Iso8859_2 => d!(id, sbcs::decode, sbcs::encode, Param::Sbcs(&iso8859_2::TABLE)),
        EncodingId::Iso8859_5 => d!(id, sbcs::decode, sbcs::encode, Param::Sbcs(&iso8859_5::TABLE)),
        EncodingId::Cp1252 => d!(id, sbcs::decode, sbcs::encode, Param::Sbcs(&cp1252::TABLE)),
        EncodingId::Koi8R => d!(id, sbcs::decode, sbcs::encode, Param::Sbcs(&koi8_r::TABLE)),

        EncodingId::Utf8 => d!(id, utf8::decode, utf8::encode, Param::None),
        EncodingId::Utf16 => d!(id, utf16::decode, utf16::encode, Param::Utf16(Utf16Endian::Auto)),
        EncodingId::Utf16Be => d!(id, utf16::decode, utf16::encode, Param::Utf16(Utf16Endian::Big)),
        EncodingId::Utf16Le => d!(id, utf16::decode, utf16::encode, Param::Utf16(Utf16Endian::Little)),
        EncodingId::Utf7 => d!(id, utf7::decode, utf7::encode, Param::Utf7 { conservative: false }),
        EncodingId::Utf7Conservative => d!(id, utf7::decode, utf7::encode, Param::Utf7 { conservative: true }),

        EncodingId::ShiftJis => d!(id, stateless_dbcs::decode, stateless_dbcs::encode, Param::Dbcs(&SHIFT_JIS_SPEC)),
        EncodingId::Big5 => d!(id, stateless_dbcs::decode, stateless_dbcs::encode, Param::Dbcs(&BIG5_SPEC)),
        EncodingId::Cp949 => d!(id, stateless_dbcs::decode, stateless_dbcs::encode, Param::Dbcs(&CP949_SPEC)),

        EncodingId::EucJp => d!(id, euc::decode, euc::encode, Param::Euc(&EUC_JP_SPEC)),
        EncodingId::EucCn => d!(id, euc::decode, euc::encode, Param::Euc(&EUC_CN_SPEC)),
        EncodingId::EucKr => d!(id, euc::decode, euc::encode, Param::Euc(&EUC_KR_SPEC)),
        EncodingId::EucTw => d!(id, euc::decode, euc::encode, Param::Euc(&EUC_TW_SPEC)),

        EncodingId::HzGb2312 => d!(id, hz::decode_byte, hz::encode, Param::None),

        EncodingId::Iso2022Jp => {
            d!(id, iso2022_subset::decode, iso2022_subset::encode, Param::Iso2022Subset(&ISO2022_JP_SPEC))
        }
        EncodingId::Iso2022Kr => {
            d!(id, iso2022_subset::decode, iso2022_subset::encode, Param::Iso2022Subset(&ISO2022_KR_SPEC))
        }

        EncodingId::Iso2022 => d!(id, iso2022_full::decode, iso2022_full::encode, Param::None),
        EncodingId::CompoundText => d!(id, iso2022_full::decode, iso2022_full::encode, Param::None),

        EncodingId::Unknown => panic!("descriptor_for(EncodingId::Unknown): caller must check for Unknown first"),
    }
}

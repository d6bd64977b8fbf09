use crate::serde::Datum;
use anyhow::{anyhow, Result};
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::any;
use std::io::{self, Read};
use std::mem;

#[derive(From, Deref, Clone, Copy)]
pub struct DatumTypeInt(u8);
impl From<DatumType> for DatumTypeInt {
    fn from(dat_type: DatumType) -> Self {
        Self(dat_type as u8)
    }
}
impl DatumTypeInt {
    pub fn deser(r: &mut impl Read) -> Result<(usize, Self), io::Error> {
        let mut buf = [0u8; mem::size_of::<u8>()];
        r.read_exact(&mut buf)?;
        let int = u8::from_le_bytes(buf);
        Ok((buf.len(), Self(int)))
    }
}

/// The wire tag of each [`Datum`] kind.
///
/// Numbered explicitly; neither declaration order nor [`std::mem::discriminant()`] is stable enough
/// to be written out.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum DatumType {
    Null = 0,
    Bool = 1,
    I64 = 2,
    F64 = 3,
    Bytes = 4,
    Str = 5,
    Seq = 6,
    Record = 7,
}
impl TryFrom<DatumTypeInt> for DatumType {
    type Error = anyhow::Error;
    fn try_from(int: DatumTypeInt) -> Result<Self> {
        DatumType::from_u8(int.0).ok_or(anyhow!(
            "Unknown {} {}",
            any::type_name::<DatumTypeInt>(),
            int.0
        ))
    }
}
impl From<&Datum> for DatumType {
    fn from(dat: &Datum) -> Self {
        match dat {
            Datum::Null => DatumType::Null,
            Datum::Bool(_) => DatumType::Bool,
            Datum::I64(_) => DatumType::I64,
            Datum::F64(_) => DatumType::F64,
            Datum::Bytes(_) => DatumType::Bytes,
            Datum::Str(_) => DatumType::Str,
            Datum::Seq(_) => DatumType::Seq,
            Datum::Record(_) => DatumType::Record,
        }
    }
}

use crate::serde::{Datum, DatumType};
use crate::types::{Deser, Ser, Shape, Shaped};
use anyhow::{anyhow, Result};
use derive_more::{Deref, DerefMut, From, Into};
use std::any;

/// A byte string. Distinct from `Vec<u8>`, which would be a sequence of integers.
#[derive(From, Into, Deref, DerefMut, PartialEq, Eq, Clone, Default, Debug)]
pub struct ByteBuf(pub Vec<u8>);

pub(crate) fn mismatch<T>(dat: &Datum) -> anyhow::Error {
    anyhow!(
        "{:?} is not convertible to {}",
        DatumType::from(dat),
        any::type_name::<T>()
    )
}

/* bool */
impl Shaped for bool {
    fn shape() -> Shape {
        Shape::Bool
    }
}
impl Ser for bool {
    fn to_datum(&self) -> Result<Datum> {
        Ok(Datum::Bool(*self))
    }
}
impl Deser for bool {
    fn from_datum(dat: Datum) -> Result<Self> {
        match dat {
            Datum::Bool(b) => Ok(b),
            dat => Err(mismatch::<Self>(&dat)),
        }
    }
}

/* Integers, all carried as i64. */
impl Shaped for i64 {
    fn shape() -> Shape {
        Shape::I64
    }
}
impl Ser for i64 {
    fn to_datum(&self) -> Result<Datum> {
        Ok(Datum::I64(*self))
    }
}
impl Deser for i64 {
    fn from_datum(dat: Datum) -> Result<Self> {
        match dat {
            Datum::I64(i) => Ok(i),
            dat => Err(mismatch::<Self>(&dat)),
        }
    }
}

impl Shaped for i32 {
    fn shape() -> Shape {
        Shape::I64
    }
}
impl Ser for i32 {
    fn to_datum(&self) -> Result<Datum> {
        Ok(Datum::I64(i64::from(*self)))
    }
}
impl Deser for i32 {
    fn from_datum(dat: Datum) -> Result<Self> {
        let i = i64::from_datum(dat)?;
        let i = i32::try_from(i)?;
        Ok(i)
    }
}

impl Shaped for u32 {
    fn shape() -> Shape {
        Shape::I64
    }
}
impl Ser for u32 {
    fn to_datum(&self) -> Result<Datum> {
        Ok(Datum::I64(i64::from(*self)))
    }
}
impl Deser for u32 {
    fn from_datum(dat: Datum) -> Result<Self> {
        let i = i64::from_datum(dat)?;
        let i = u32::try_from(i)?;
        Ok(i)
    }
}

/* f64 */
impl Shaped for f64 {
    fn shape() -> Shape {
        Shape::F64
    }
}
impl Ser for f64 {
    fn to_datum(&self) -> Result<Datum> {
        Ok(Datum::F64(*self))
    }
}
impl Deser for f64 {
    fn from_datum(dat: Datum) -> Result<Self> {
        match dat {
            Datum::F64(f) => Ok(f),
            dat => Err(mismatch::<Self>(&dat)),
        }
    }
}

/* ByteBuf */
impl Shaped for ByteBuf {
    fn shape() -> Shape {
        Shape::Bytes
    }
}
impl Ser for ByteBuf {
    fn to_datum(&self) -> Result<Datum> {
        Ok(Datum::Bytes(self.0.clone()))
    }
}
impl Deser for ByteBuf {
    fn from_datum(dat: Datum) -> Result<Self> {
        match dat {
            Datum::Bytes(b) => Ok(Self(b)),
            dat => Err(mismatch::<Self>(&dat)),
        }
    }
}

/* String */
impl Shaped for String {
    fn shape() -> Shape {
        Shape::Str
    }
}
impl Ser for String {
    fn to_datum(&self) -> Result<Datum> {
        Ok(Datum::Str(self.clone()))
    }
}
impl Deser for String {
    fn from_datum(dat: Datum) -> Result<Self> {
        match dat {
            Datum::Str(s) => Ok(s),
            dat => Err(mismatch::<Self>(&dat)),
        }
    }
}

/* Vec */
impl<T: Shaped> Shaped for Vec<T> {
    fn shape() -> Shape {
        Shape::Seq(T::shape)
    }
}
impl<T: Ser> Ser for Vec<T> {
    fn to_datum(&self) -> Result<Datum> {
        let members = self.iter().map(T::to_datum).collect::<Result<Vec<_>>>()?;
        Ok(Datum::Seq(members))
    }
}
impl<T: Deser> Deser for Vec<T> {
    fn from_datum(dat: Datum) -> Result<Self> {
        match dat {
            Datum::Seq(members) => members.into_iter().map(T::from_datum).collect(),
            dat => Err(mismatch::<Self>(&dat)),
        }
    }
}

/* Option */
impl<T: Shaped> Shaped for Option<T> {
    fn shape() -> Shape {
        Shape::Optional(T::shape)
    }
}
impl<T: Ser> Ser for Option<T> {
    fn to_datum(&self) -> Result<Datum> {
        match self {
            None => Ok(Datum::Null),
            Some(t) => t.to_datum(),
        }
    }
}
impl<T: Deser> Deser for Option<T> {
    fn from_datum(dat: Datum) -> Result<Self> {
        match dat {
            Datum::Null => Ok(None),
            dat => T::from_datum(dat).map(Some),
        }
    }
}

/* Box */
impl<T: Shaped> Shaped for Box<T> {
    fn shape() -> Shape {
        T::shape()
    }
}
impl<T: Ser> Ser for Box<T> {
    fn to_datum(&self) -> Result<Datum> {
        (**self).to_datum()
    }
}
impl<T: Deser> Deser for Box<T> {
    fn from_datum(dat: Datum) -> Result<Self> {
        T::from_datum(dat).map(Box::new)
    }
}

use crate::serde::Datum;
use crate::types::Shape;
use anyhow::Result;

/// Conversion of a typed value into its [`Datum`] form.
pub trait Ser {
    fn to_datum(&self) -> Result<Datum>;
}

/// Reconstruction of a typed value from its [`Datum`] form.
pub trait Deser: Sized {
    fn from_datum(dat: Datum) -> Result<Self>;
}

/// Type metadata, known at compile time.
pub trait Shaped {
    fn shape() -> Shape;
}

/* trait Serializable */
pub trait Serializable: Shaped + Ser + Deser {}
impl<T> Serializable for T where T: Shaped + Ser + Deser {}

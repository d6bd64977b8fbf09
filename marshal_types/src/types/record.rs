//! Helpers for hand-written [`Ser`] and [`Deser`] impls of record types.
//!
//! ```text
//! impl Ser for Point {
//!     fn to_datum(&self) -> Result<Datum> {
//!         let rec = Record::new("Point").with("X", &self.x)?.with("Y", &self.y)?;
//!         Ok(Datum::Record(rec))
//!     }
//! }
//! impl Deser for Point {
//!     fn from_datum(dat: Datum) -> Result<Self> {
//!         let mut rec = Record::expect(dat, "Point")?;
//!         Ok(Self {
//!             x: rec.take("X")?,
//!             y: rec.take("Y")?,
//!         })
//!     }
//! }
//! ```

use crate::serde::{Datum, Record};
use crate::types::{primitives::mismatch, Deser, Ser};
use anyhow::{anyhow, Context, Result};

impl Record {
    pub fn with<T: Ser>(mut self, name: &str, value: &T) -> Result<Self> {
        let dat = value
            .to_datum()
            .with_context(|| format!("Member {} of record {}", name, self.name))?;
        self.push(name, dat);
        Ok(self)
    }

    pub fn expect(dat: Datum, name: &str) -> Result<Self> {
        match dat {
            Datum::Record(rec) if rec.name == name => Ok(rec),
            Datum::Record(rec) => Err(anyhow!(
                "Expected record {}, found record {}",
                name,
                rec.name
            )),
            dat => Err(mismatch::<Self>(&dat)),
        }
    }

    /// Removes the named member and converts it.
    ///
    /// An absent member is taken as [`Datum::Null`],
    /// which converts successfully only into an `Option`.
    pub fn take<T: Deser>(&mut self, name: &str) -> Result<T> {
        let dat = match self.fields.iter().position(|field| field.name == name) {
            None => Datum::Null,
            Some(i) => self.fields.remove(i).value,
        };
        T::from_datum(dat).with_context(|| format!("Member {} of record {}", name, self.name))
    }
}

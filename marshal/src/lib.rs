//! Typed values to and from a compact binary blob, and to and from a text document.
//!
//! ```ignore
//! let blob = marshal::encode_binary(Some(&point))?;
//! let back: Option<Point> = marshal::decode_binary(Some(&blob))?;
//!
//! let doc = marshal::encode_text(Some(&point))?;
//! let back: Option<Point> = marshal::decode_text(&doc)?;
//! ```

mod codec;
mod config;
pub mod envelope;
mod error;


pub use codec::*;
pub use config::*;
pub use error::*;

pub use marshal_types::serde::{Datum, Record};
pub use marshal_types::types::{
    ByteBuf, Deser, RecordShape, Ser, Serializable, Shape, ShapeFn, Shaped,
};

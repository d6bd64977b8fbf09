mod primitives;
mod record;
mod serializable;
mod shape;

pub use primitives::*;
pub use serializable::*;
pub use shape::*;

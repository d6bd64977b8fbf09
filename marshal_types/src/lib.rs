pub mod markup;
pub mod serde;
pub mod types;

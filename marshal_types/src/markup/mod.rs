//! # Markup format
//!
//! A value is written as a single element tree in a subset of XML 1.0.
//! Unlike the binary format, the markup does not describe its own types;
//! it is read back against the [`crate::types::Shape`] of the expected type.
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <Point>
//!   <X>3</X>
//!   <Y>4</Y>
//!   <Tags>
//!     <str>a</str>
//!     <str>b &amp; c</str>
//!   </Tags>
//!   <Label nil="true" />
//! </Point>
//! ```
//!
//! - The root element is named after the shape (see [`crate::types::Shape::element_name()`]).
//! - A record member is an element named after the member.
//! - A sequence item is an element named after the item's shape.
//! - `bool` is `true` or `false`; `i64` is decimal; `f64` is the shortest decimal
//!   that reads back to the same bits, or `NaN`, `inf`, `-inf`;
//!   bytes are lowercase hex; strings are escaped character data, never trimmed.
//! - An absent optional is an empty element with the attribute `nil="true"`.
//!
//! When reading, the prolog, comments, processing instructions, and `CDATA` sections
//! are understood. Record members are matched by name in any order.
//! Unknown elements and unknown attributes are ignored.

mod element;
mod escape;
mod name;
mod reader;
mod writer;


pub use element::*;
pub use reader::*;
pub use writer::*;

#[derive(Clone, Debug)]
pub struct MarkupOptions {
    /// Spaces per nesting level. Zero writes the whole document on one line.
    pub indent: usize,
    /// Whether to begin with `<?xml version="1.0" encoding="utf-8"?>`.
    pub declaration: bool,
    pub max_depth: usize,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            declaration: true,
            max_depth: crate::serde::DEFAULT_MAX_DEPTH,
        }
    }
}

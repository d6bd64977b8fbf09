use crate::serde::Datum;
use anyhow::{anyhow, Result};
use std::collections::HashSet;

/// Lazily produces a nested [`Shape`].
///
/// Nested shapes are produced on demand so that a record type may contain itself
/// (through `Option<Box<Self>>` or `Vec<Self>`) without the shape being infinite.
pub type ShapeFn = fn() -> Shape;

/// [`Shape`] is the type metadata of a [`crate::types::Serializable`] type:
/// its member names, member types, and nesting.
///
/// For example, a type
///
/// ```text
/// struct Point {
///     x: i64,
///     y: i64,
///     label: Option<String>,
/// }
/// ```
///
/// is described as
///
/// ```text
/// Shape::Record(
///     RecordShape::new("Point")
///         .field::<i64>("X")
///         .field::<i64>("Y")
///         .field::<Option<String>>("Label")
/// )
/// ```
#[derive(Clone, Debug)]
pub enum Shape {
    Bool,
    I64,
    F64,
    Bytes,
    Str,
    Optional(ShapeFn),
    Seq(ShapeFn),
    Record(RecordShape),
}

#[derive(Clone, Debug)]
pub struct RecordShape {
    pub name: &'static str,
    pub fields: Vec<FieldShape>,
}

#[derive(Clone, Debug)]
pub struct FieldShape {
    pub name: &'static str,
    pub shape: ShapeFn,
}

impl RecordShape {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: vec![],
        }
    }

    pub fn field<T: crate::types::Shaped>(mut self, name: &'static str) -> Self {
        self.fields.push(FieldShape {
            name,
            shape: T::shape,
        });
        self
    }
}

impl Shape {
    /// The element name under which a value of this shape is written,
    /// when it is not written as a named record member.
    pub fn element_name(&self) -> String {
        match self {
            Shape::Bool => String::from("bool"),
            Shape::I64 => String::from("i64"),
            Shape::F64 => String::from("f64"),
            Shape::Bytes => String::from("bytes"),
            Shape::Str => String::from("str"),
            Shape::Optional(inner) => inner().element_name(),
            Shape::Seq(item) => format!("seq_{}", item().element_name()),
            Shape::Record(rec) => String::from(rec.name),
        }
    }

    /// Whether the root of `dat` is of the kind this shape describes.
    ///
    /// Only the root is inspected. A root that is admitted may still fail
    /// to convert, if its members do not match.
    pub fn admits_root(&self, dat: &Datum) -> bool {
        match (self, dat) {
            (Shape::Optional(_), Datum::Null) => true,
            (Shape::Optional(inner), dat) => inner().admits_root(dat),
            (Shape::Bool, Datum::Bool(_))
            | (Shape::I64, Datum::I64(_))
            | (Shape::F64, Datum::F64(_))
            | (Shape::Bytes, Datum::Bytes(_))
            | (Shape::Str, Datum::Str(_))
            | (Shape::Seq(_), Datum::Seq(_)) => true,
            (Shape::Record(rec_shape), Datum::Record(rec)) => rec_shape.name == rec.name,
            _ => false,
        }
    }

    /// Rejects shapes whose values could not be reconstructed unambiguously:
    /// an optional directly inside an optional, and records with repeated member names.
    ///
    /// Each record type is visited once, so self-containing record types terminate.
    /// Distinct record types that share a name are each visited.
    pub fn validate(&self) -> Result<()> {
        let mut visited = HashSet::new();
        self.validate_(&mut visited)
    }

    fn validate_(&self, visited: &mut HashSet<RecordKey>) -> Result<()> {
        match self {
            Shape::Bool | Shape::I64 | Shape::F64 | Shape::Bytes | Shape::Str => Ok(()),
            Shape::Optional(inner) => {
                let inner = inner();
                if let Shape::Optional(_) = inner {
                    return Err(anyhow!(
                        "An optional of an optional is not representable."
                    ));
                }
                inner.validate_(visited)
            }
            Shape::Seq(item) => item().validate_(visited),
            Shape::Record(rec) => {
                if !visited.insert(RecordKey::of(rec)) {
                    return Ok(());
                }
                let mut names = HashSet::new();
                for field in rec.fields.iter() {
                    if !names.insert(field.name) {
                        return Err(anyhow!(
                            "Record {} declares member {} more than once.",
                            rec.name,
                            field.name
                        ));
                    }
                    (field.shape)().validate_(visited)?;
                }
                Ok(())
            }
        }
    }
}

/// Identifies a record type by its name and its members' names and shape constructors.
#[derive(PartialEq, Eq, Hash)]
struct RecordKey {
    name: &'static str,
    fields: Vec<(&'static str, usize)>,
}

impl RecordKey {
    fn of(rec: &RecordShape) -> Self {
        Self {
            name: rec.name,
            fields: rec
                .fields
                .iter()
                .map(|field| (field.name, field.shape as usize))
                .collect(),
        }
    }
}

mod deser;
mod ser;
pub use deser::*;
pub use ser::*;

/// The self-describing intermediate form of every value.
#[derive(PartialEq, Clone, Debug)]
pub enum Datum {
    Null,
    Bool(bool),
    I64(i64),
    F64(f64),
    Bytes(Vec<u8>),
    Str(String),
    Seq(Vec<Datum>),
    Record(Record),
}

/// A named, ordered collection of named members.
///
/// Member names are expected to be unique within one record.
/// The binary format does not enforce this; the markup format does.
#[derive(PartialEq, Clone, Debug)]
pub struct Record {
    pub name: String,
    pub fields: Vec<Field>,
}

#[derive(PartialEq, Clone, Debug)]
pub struct Field {
    pub name: String,
    pub value: Datum,
}

impl Record {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: vec![],
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: Datum) {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
    }

    pub fn get(&self, name: &str) -> Option<&Datum> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| &field.value)
    }
}

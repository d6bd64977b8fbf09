use crate::markup::name::local_name;
use crate::serde::{Datum, Field, Record};
use crate::types::Shape;
use anyhow::{anyhow, Context, Result};

/// A parsed markup element.
///
/// `text` is the concatenation of all character data directly under this element,
/// with entities resolved and nothing trimmed.
#[derive(PartialEq, Eq, Clone, Default, Debug)]
pub struct Element {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| local_name(attr_name) == name)
            .map(|(_, val)| val.as_str())
    }

    pub fn is_nil(&self) -> bool {
        matches!(self.attr("nil"), Some("true") | Some("1"))
    }

    /// Converts this element into the [`Datum`] that `shape` describes.
    pub fn into_datum(self, shape: &Shape, max_depth: usize) -> Result<Datum> {
        self.into_datum_(shape, max_depth, 0)
    }

    fn into_datum_(self, shape: &Shape, max_depth: usize, depth: usize) -> Result<Datum> {
        if depth > max_depth {
            return Err(anyhow!(
                "Element nesting exceeds the depth limit of {}.",
                max_depth
            ));
        }

        if self.is_nil() {
            return match shape {
                Shape::Optional(_) => Ok(Datum::Null),
                _ => Err(anyhow!(
                    "<{}> is nil but its {} value is not optional.",
                    self.name,
                    shape.element_name()
                )),
            };
        }

        let dat = match shape {
            Shape::Optional(inner) => self.into_datum_(&inner(), max_depth, depth)?,
            Shape::Bool => match self.leaf_text()?.trim() {
                "true" | "1" => Datum::Bool(true),
                "false" | "0" => Datum::Bool(false),
                other => return Err(anyhow!("<{}> {:?} is not a bool.", self.name, other)),
            },
            Shape::I64 => {
                let i = self
                    .leaf_text()?
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("<{}> is not an i64.", self.name))?;
                Datum::I64(i)
            }
            Shape::F64 => {
                let f = match self.leaf_text()?.trim() {
                    "INF" => f64::INFINITY,
                    "-INF" => f64::NEG_INFINITY,
                    other => other
                        .parse::<f64>()
                        .with_context(|| format!("<{}> is not an f64.", self.name))?,
                };
                Datum::F64(f)
            }
            Shape::Bytes => {
                let b = hex::decode(self.leaf_text()?.trim())
                    .with_context(|| format!("<{}> is not hex.", self.name))?;
                Datum::Bytes(b)
            }
            Shape::Str => {
                self.leaf_text()?;
                Datum::Str(self.text)
            }
            Shape::Seq(item) => {
                let item_shape = item();
                let item_name = item_shape.element_name();
                let mut members = vec![];
                for child in self.children {
                    if child.local_name() == item_name {
                        members.push(child.into_datum_(&item_shape, max_depth, depth + 1)?);
                    }
                }
                Datum::Seq(members)
            }
            Shape::Record(rec_shape) => {
                let mut children = self.children;
                let mut fields = vec![];
                for field_shape in rec_shape.fields.iter() {
                    let shape = (field_shape.shape)();
                    let child_i = children
                        .iter()
                        .position(|child| child.local_name() == field_shape.name);
                    let value = match child_i {
                        Some(child_i) => children
                            .remove(child_i)
                            .into_datum_(&shape, max_depth, depth + 1)
                            .with_context(|| {
                                format!("Member {} of record {}", field_shape.name, rec_shape.name)
                            })?,
                        None => match shape {
                            Shape::Optional(_) => Datum::Null,
                            _ => {
                                return Err(anyhow!(
                                    "Record {} is missing member {}.",
                                    rec_shape.name,
                                    field_shape.name
                                ))
                            }
                        },
                    };
                    fields.push(Field {
                        name: String::from(field_shape.name),
                        value,
                    });
                }
                Datum::Record(Record {
                    name: String::from(rec_shape.name),
                    fields,
                })
            }
        };
        Ok(dat)
    }

    fn leaf_text(&self) -> Result<&str> {
        match self.children.first() {
            None => Ok(&self.text),
            Some(child) => Err(anyhow!(
                "<{}> holds a value but contains element <{}>.",
                self.name,
                child.name
            )),
        }
    }
}

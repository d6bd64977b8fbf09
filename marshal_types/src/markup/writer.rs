use crate::markup::escape::escape_text;
use crate::markup::name::check_unprefixed_name;
use crate::markup::MarkupOptions;
use crate::serde::{Datum, DatumType, Record};
use crate::types::{RecordShape, Shape};
use anyhow::{anyhow, Result};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

static ABSENT: Datum = Datum::Null;

/// Writes a [`Datum`] as a markup document, directed by the [`Shape`] it must conform to.
pub struct MarkupWriter<'o> {
    out: String,
    opts: &'o MarkupOptions,
}

impl<'o> MarkupWriter<'o> {
    /// `None` writes an empty, nil root element.
    pub fn write_document(
        dat: Option<&Datum>,
        shape: &Shape,
        opts: &'o MarkupOptions,
    ) -> Result<String> {
        let mut w = Self {
            out: String::new(),
            opts,
        };

        if opts.declaration {
            w.out.push_str(DECLARATION);
            w.newline(0);
        }

        let root_name = shape.element_name();
        match dat {
            None => {
                check_unprefixed_name(&root_name)?;
                w.write_nil(&root_name);
            }
            // Only `None` may be written as a nil root, or it would read back as `None`.
            Some(Datum::Null) => {
                return Err(anyhow!(
                    "A present {} root whose content is absent is not representable.",
                    root_name
                ))
            }
            Some(dat) => w.write_elem(&root_name, dat, shape, 0)?,
        }

        Ok(w.out)
    }

    fn newline(&mut self, depth: usize) {
        if self.opts.indent > 0 {
            self.out.push('\n');
            self.out
                .extend(std::iter::repeat(' ').take(self.opts.indent * depth));
        }
    }

    fn write_nil(&mut self, name: &str) {
        self.out.push('<');
        self.out.push_str(name);
        self.out.push_str(r#" nil="true" />"#);
    }

    fn write_leaf(&mut self, name: &str, text: &str) {
        if text.is_empty() {
            self.out.push('<');
            self.out.push_str(name);
            self.out.push_str(" />");
        } else {
            self.out.push('<');
            self.out.push_str(name);
            self.out.push('>');
            self.out.push_str(text);
            self.out.push_str("</");
            self.out.push_str(name);
            self.out.push('>');
        }
    }

    fn write_elem(&mut self, name: &str, dat: &Datum, shape: &Shape, depth: usize) -> Result<()> {
        if depth > self.opts.max_depth {
            return Err(anyhow!(
                "Element nesting exceeds the depth limit of {}.",
                self.opts.max_depth
            ));
        }
        check_unprefixed_name(name)?;

        match (shape, dat) {
            (Shape::Optional(_), Datum::Null) => self.write_nil(name),
            (Shape::Optional(inner), dat) => self.write_elem(name, dat, &inner(), depth)?,
            (Shape::Bool, Datum::Bool(b)) => self.write_leaf(name, if *b { "true" } else { "false" }),
            (Shape::I64, Datum::I64(i)) => self.write_leaf(name, &i.to_string()),
            (Shape::F64, Datum::F64(f)) => self.write_leaf(name, &f.to_string()),
            (Shape::Bytes, Datum::Bytes(b)) => self.write_leaf(name, &hex::encode(b)),
            (Shape::Str, Datum::Str(s)) => self.write_leaf(name, &escape_text(s)),
            (Shape::Seq(item), Datum::Seq(members)) => {
                let item_shape = item();
                let item_name = item_shape.element_name();
                let children = members
                    .iter()
                    .map(|member| (item_name.as_str(), member, item_shape.clone()))
                    .collect::<Vec<_>>();
                self.write_container(name, children, depth)?;
            }
            (Shape::Record(rec_shape), Datum::Record(rec)) => {
                let children = Self::record_children(rec_shape, rec)?;
                self.write_container(name, children, depth)?;
            }
            (shape, dat) => {
                return Err(anyhow!(
                    "{:?} does not conform to {}",
                    DatumType::from(dat),
                    shape.element_name()
                ))
            }
        }
        Ok(())
    }

    /// Pairs each declared member with its datum, in declaration order.
    fn record_children<'r>(
        rec_shape: &RecordShape,
        rec: &'r Record,
    ) -> Result<Vec<(&'static str, &'r Datum, Shape)>> {
        if rec_shape.name != rec.name {
            return Err(anyhow!(
                "Record {} does not conform to record {}",
                rec.name,
                rec_shape.name
            ));
        }
        if let Some(undeclared) = rec
            .fields
            .iter()
            .find(|field| !rec_shape.fields.iter().any(|fs| fs.name == field.name))
        {
            return Err(anyhow!(
                "Record {} has undeclared member {}",
                rec.name,
                undeclared.name
            ));
        }

        let children = rec_shape
            .fields
            .iter()
            .map(|fs| {
                let dat = rec.get(fs.name).unwrap_or(&ABSENT);
                (fs.name, dat, (fs.shape)())
            })
            .collect();
        Ok(children)
    }

    fn write_container(
        &mut self,
        name: &str,
        children: Vec<(&str, &Datum, Shape)>,
        depth: usize,
    ) -> Result<()> {
        if children.is_empty() {
            self.write_leaf(name, "");
            return Ok(());
        }

        self.out.push('<');
        self.out.push_str(name);
        self.out.push('>');
        for (child_name, child_dat, child_shape) in children {
            self.newline(depth + 1);
            self.write_elem(child_name, child_dat, &child_shape, depth + 1)?;
        }
        self.newline(depth);
        self.out.push_str("</");
        self.out.push_str(name);
        self.out.push('>');
        Ok(())
    }
}

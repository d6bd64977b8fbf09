use crate::markup::escape::unescape;
use crate::markup::name::{check_name, is_name_char};
use crate::markup::Element;
use anyhow::{anyhow, Context, Result};

/// Parses a markup document into its root [`Element`].
///
/// Errors carry the byte offset at which the document stopped being well-formed.
pub struct MarkupReader<'d> {
    doc: &'d str,
    pos: usize,
    max_depth: usize,
}

impl<'d> MarkupReader<'d> {
    pub fn read_document(doc: &'d str, max_depth: usize) -> Result<Element> {
        let mut r = Self {
            doc,
            pos: 0,
            max_depth,
        };
        r.read_document_()
            .with_context(|| format!("Malformed markup at byte {}", r.pos))
    }

    fn read_document_(&mut self) -> Result<Element> {
        if self.rest().starts_with('\u{FEFF}') {
            self.pos += '\u{FEFF}'.len_utf8();
        }

        /* prolog */
        self.skip_misc()?;
        if self.rest().starts_with("<!DOCTYPE") {
            return Err(anyhow!("Document type declarations are not supported."));
        }
        if !self.rest().starts_with('<') {
            return Err(anyhow!("Expected the root element."));
        }

        /* root */
        let root = self.read_element(0)?;

        /* epilog */
        self.skip_misc()?;
        if self.pos != self.doc.len() {
            return Err(anyhow!("Unexpected content after the root element."));
        }

        Ok(root)
    }

    fn rest(&self) -> &'d str {
        &self.doc[self.pos..]
    }

    fn skip_ws(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start_matches(|c: char| matches!(c, ' ' | '\t' | '\r' | '\n'));
        self.pos += rest.len() - trimmed.len();
    }

    /// Skips whitespace, comments, and processing instructions (including the xml declaration).
    fn skip_misc(&mut self) -> Result<()> {
        loop {
            self.skip_ws();
            if self.rest().starts_with("<!--") {
                self.skip_past("<!--", "-->")?;
            } else if self.rest().starts_with("<?") {
                self.skip_past("<?", "?>")?;
            } else {
                return Ok(());
            }
        }
    }

    /// Returns the content between `open` (at the current position) and `close`,
    /// and moves past `close`.
    fn skip_past(&mut self, open: &str, close: &str) -> Result<&'d str> {
        let body_start = self.pos + open.len();
        let body_len = self.doc[body_start..]
            .find(close)
            .ok_or(anyhow!("Unterminated {}", open))?;
        self.pos = body_start + body_len + close.len();
        Ok(&self.doc[body_start..body_start + body_len])
    }

    fn expect(&mut self, token: &str) -> Result<()> {
        if !self.rest().starts_with(token) {
            return Err(anyhow!("Expected {:?}", token));
        }
        self.pos += token.len();
        Ok(())
    }

    fn read_name(&mut self) -> Result<&'d str> {
        let rest = self.rest();
        let len = rest.bytes().take_while(|b| is_name_char(*b)).count();
        let name = &rest[..len];
        check_name(name)?;
        self.pos += len;
        Ok(name)
    }

    fn read_element(&mut self, depth: usize) -> Result<Element> {
        if depth > self.max_depth {
            return Err(anyhow!(
                "Element nesting exceeds the depth limit of {}.",
                self.max_depth
            ));
        }

        /* start tag */
        self.expect("<")?;
        let mut elem = Element {
            name: String::from(self.read_name()?),
            ..Default::default()
        };
        loop {
            let before_ws = self.pos;
            self.skip_ws();
            if self.rest().starts_with("/>") {
                self.pos += 2;
                return Ok(elem);
            }
            if self.rest().starts_with('>') {
                self.pos += 1;
                break;
            }
            if self.pos == before_ws {
                return Err(anyhow!("Expected whitespace before an attribute."));
            }

            let attr_name = self.read_name()?;
            self.skip_ws();
            self.expect("=")?;
            self.skip_ws();
            let quote = match self.rest().chars().next() {
                Some(q @ ('"' | '\'')) => q,
                _ => return Err(anyhow!("Expected a quoted attribute value.")),
            };
            self.pos += 1;
            let val_len = self
                .rest()
                .find(quote)
                .ok_or(anyhow!("Unterminated attribute value."))?;
            let raw_val = &self.rest()[..val_len];
            if raw_val.contains('<') {
                return Err(anyhow!("'<' in an attribute value."));
            }
            self.pos += val_len + 1;

            if elem.attrs.iter().any(|(name, _)| name == attr_name) {
                return Err(anyhow!("Repeated attribute {}", attr_name));
            }
            elem.attrs
                .push((String::from(attr_name), unescape(raw_val)?));
        }

        /* content */
        loop {
            let rest = self.rest();
            if rest.is_empty() {
                return Err(anyhow!("Unclosed element <{}>", elem.name));
            } else if rest.starts_with("</") {
                self.pos += 2;
                let end_name = self.read_name()?;
                if end_name != elem.name {
                    return Err(anyhow!(
                        "End tag </{}> does not match <{}>",
                        end_name,
                        elem.name
                    ));
                }
                self.skip_ws();
                self.expect(">")?;
                return Ok(elem);
            } else if rest.starts_with("<!--") {
                self.skip_past("<!--", "-->")?;
            } else if rest.starts_with("<![CDATA[") {
                let cdata = self.skip_past("<![CDATA[", "]]>")?;
                elem.text.push_str(cdata);
            } else if rest.starts_with("<?") {
                self.skip_past("<?", "?>")?;
            } else if rest.starts_with('<') {
                let child = self.read_element(depth + 1)?;
                elem.children.push(child);
            } else {
                let text_len = rest.find('<').unwrap_or(rest.len());
                elem.text.push_str(&unescape(&rest[..text_len])?);
                self.pos += text_len;
            }
        }
    }
}

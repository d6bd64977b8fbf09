use anyhow::{Context, Result};
use marshal_types::markup::MarkupOptions;
use marshal_types::serde::DEFAULT_MAX_DEPTH;
use std::env;
use std::str::FromStr;

pub const ENV_VAR_MAX_DEPTH: &str = "MARSHAL_MAX_DEPTH";

pub const ENV_VAR_MAX_BLOB_LEN: &str = "MARSHAL_MAX_BLOB_LEN";

pub const ENV_VAR_TEXT_INDENT: &str = "MARSHAL_TEXT_INDENT";

pub const ENV_VAR_XML_DECLARATION: &str = "MARSHAL_XML_DECLARATION";

pub const DEFAULT_MAX_BLOB_LEN: usize = 64 * 1024 * 1024;

pub const DEFAULT_TEXT_INDENT: usize = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecConfig {
    /// Deepest nesting accepted by every encode and decode. The root is at depth 0.
    pub max_depth: usize,
    /// Longest blob produced by binary encoding or accepted by binary decoding.
    pub max_blob_len: usize,
    /// Spaces per nesting level in text documents. Zero writes a single line.
    pub text_indent: usize,
    /// Whether text documents begin with an xml declaration.
    pub xml_declaration: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_blob_len: DEFAULT_MAX_BLOB_LEN,
            text_indent: DEFAULT_TEXT_INDENT,
            xml_declaration: true,
        }
    }
}

impl CodecConfig {
    /// Defaults, overridden by whichever `MARSHAL_*` environment variables are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let dflt = Self::default();
        Ok(Self {
            max_depth: parse_or(&lookup, ENV_VAR_MAX_DEPTH, dflt.max_depth)?,
            max_blob_len: parse_or(&lookup, ENV_VAR_MAX_BLOB_LEN, dflt.max_blob_len)?,
            text_indent: parse_or(&lookup, ENV_VAR_TEXT_INDENT, dflt.text_indent)?,
            xml_declaration: parse_or(&lookup, ENV_VAR_XML_DECLARATION, dflt.xml_declaration)?,
        })
    }

    pub fn markup_options(&self) -> MarkupOptions {
        MarkupOptions {
            indent: self.text_indent,
            declaration: self.xml_declaration,
            max_depth: self.max_depth,
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, dflt: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        None => Ok(dflt),
        Some(s) => s
            .trim()
            .parse::<T>()
            .with_context(|| format!("{}={:?}", key, s)),
    }
}

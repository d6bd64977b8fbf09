use crate::{envelope, CodecConfig, CodecError};
use anyhow::{anyhow, Result};
use marshal_types::markup::{MarkupReader, MarkupWriter};
use marshal_types::serde::Datum;
use marshal_types::types::Serializable;
use shorthand::ShortHand;
use std::any;
use tracing::debug;

/// Converts typed values to and from a binary blob, and to and from a text document.
///
/// A `Codec` holds only its configuration, which does not change after construction.
/// Calls are independent of each other and may be made from any number of threads at once.
#[derive(ShortHand, Default, Debug)]
#[shorthand(disable(get))]
pub struct Codec {
    #[shorthand(enable(get))]
    config: CodecConfig,
}

impl Codec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn from_env() -> Result<Self> {
        let config = CodecConfig::from_env()?;
        Ok(Self::new(config))
    }

    /// Fails with [`CodecError::InvalidArgument`] if `value` is `None`.
    pub fn encode_binary<T: Serializable>(&self, value: Option<&T>) -> Result<Vec<u8>, CodecError> {
        let value = value.ok_or(CodecError::InvalidArgument("value"))?;
        let blob = self.encode_binary_(value).map_err(CodecError::Encode)?;
        debug!(
            type_name = any::type_name::<T>(),
            blob_len = blob.len(),
            "Encoded binary."
        );
        Ok(blob)
    }

    fn encode_binary_<T: Serializable>(&self, value: &T) -> Result<Vec<u8>> {
        T::shape().validate()?;
        let dat = value.to_datum()?;
        let blob = envelope::seal(&dat, self.config.max_depth)?;
        if blob.len() > self.config.max_blob_len {
            return Err(anyhow!(
                "Blob of {} bytes exceeds the limit of {} bytes.",
                blob.len(),
                self.config.max_blob_len
            ));
        }
        Ok(blob)
    }

    /// An absent or empty `blob` decodes to `None`.
    /// So does a blob whose root is not a `T`.
    pub fn decode_binary<T: Serializable>(
        &self,
        blob: Option<&[u8]>,
    ) -> Result<Option<T>, CodecError> {
        let blob = match blob {
            Some(blob) if !blob.is_empty() => blob,
            _ => {
                debug!(type_name = any::type_name::<T>(), "Empty binary input.");
                return Ok(None);
            }
        };
        if blob.len() > self.config.max_blob_len {
            return Err(CodecError::Decode(anyhow!(
                "Blob of {} bytes exceeds the limit of {} bytes.",
                blob.len(),
                self.config.max_blob_len
            )));
        }

        let root = envelope::open(blob, self.config.max_depth).map_err(CodecError::Decode)?;
        let t = Self::cast::<T>(root)?;
        debug!(
            type_name = any::type_name::<T>(),
            blob_len = blob.len(),
            "Decoded binary."
        );
        Ok(t)
    }

    /// `None` encodes to an empty root element marked nil.
    pub fn encode_text<T: Serializable>(&self, value: Option<&T>) -> Result<String, CodecError> {
        let doc = self.encode_text_(value).map_err(CodecError::Encode)?;
        debug!(
            type_name = any::type_name::<T>(),
            doc_len = doc.len(),
            "Encoded text."
        );
        Ok(doc)
    }

    fn encode_text_<T: Serializable>(&self, value: Option<&T>) -> Result<String> {
        let shape = T::shape();
        shape.validate()?;
        let dat = value.map(T::to_datum).transpose()?;
        MarkupWriter::write_document(dat.as_ref(), &shape, &self.config.markup_options())
    }

    /// A document whose root element is not named after `T`, or is marked nil, decodes to `None`.
    pub fn decode_text<T: Serializable>(&self, doc: &str) -> Result<Option<T>, CodecError> {
        let root = MarkupReader::read_document(doc, self.config.max_depth)
            .map_err(CodecError::Decode)?;

        let shape = T::shape();
        if root.local_name() != shape.element_name() {
            debug!(
                type_name = any::type_name::<T>(),
                root = root.name.as_str(),
                "Text root is not the requested type."
            );
            return Ok(None);
        }
        if root.is_nil() {
            return Ok(None);
        }

        let dat = root
            .into_datum(&shape, self.config.max_depth)
            .map_err(CodecError::Decode)?;
        let t = T::from_datum(dat).map_err(CodecError::Decode)?;
        debug!(
            type_name = any::type_name::<T>(),
            doc_len = doc.len(),
            "Decoded text."
        );
        Ok(Some(t))
    }

    fn cast<T: Serializable>(root: Datum) -> Result<Option<T>, CodecError> {
        if !T::shape().admits_root(&root) {
            debug!(
                type_name = any::type_name::<T>(),
                "Binary root is not the requested type."
            );
            return Ok(None);
        }
        let t = T::from_datum(root).map_err(CodecError::Decode)?;
        Ok(Some(t))
    }
}

/* The same operations with the default configuration. */

pub fn encode_binary<T: Serializable>(value: Option<&T>) -> Result<Vec<u8>, CodecError> {
    Codec::default().encode_binary(value)
}

pub fn decode_binary<T: Serializable>(blob: Option<&[u8]>) -> Result<Option<T>, CodecError> {
    Codec::default().decode_binary(blob)
}

pub fn encode_text<T: Serializable>(value: Option<&T>) -> Result<String, CodecError> {
    Codec::default().encode_text(value)
}

pub fn decode_text<T: Serializable>(doc: &str) -> Result<Option<T>, CodecError> {
    Codec::default().decode_text(doc)
}

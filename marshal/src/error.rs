use derive_more::Display;
use std::error::Error;

/// The failures a [`crate::Codec`] operation surfaces.
///
/// Two conditions are deliberately not failures, and come back as `Ok(None)`:
/// an absent or empty binary input, and input that is well-formed
/// but whose root is not the requested type.
#[derive(Debug, Display)]
pub enum CodecError {
    /// A required input was absent.
    #[display(fmt = "Invalid argument: {} must not be null.", _0)]
    InvalidArgument(&'static str),

    /// The input could not be read, or did not match the requested type.
    #[display(fmt = "Decode error: {:#}", _0)]
    Decode(anyhow::Error),

    /// The value could not be represented in the requested encoding.
    #[display(fmt = "Encode error: {:#}", _0)]
    Encode(anyhow::Error),
}

impl Error for CodecError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CodecError::InvalidArgument(_) => None,
            CodecError::Decode(e) | CodecError::Encode(e) => Some(&**e),
        }
    }
}

impl CodecError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CodecError::InvalidArgument(_))
    }
    pub fn is_decode(&self) -> bool {
        matches!(self, CodecError::Decode(_))
    }
    pub fn is_encode(&self) -> bool {
        matches!(self, CodecError::Encode(_))
    }
}

//! Base64 encoding and decoding of UTF-8 text

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;
use derive_more::Display;
use log::debug;

use crate::error::{ToolError, ToolResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of the Base64 tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Base64Mode {
    #[default]
    #[display(fmt = "encode")]
    Encode,

    #[display(fmt = "decode")]
    Decode,
}

impl Base64Mode {
    /// The opposite direction
    pub fn toggled(self) -> Self {
        match self {
            Base64Mode::Encode => Base64Mode::Decode,
            Base64Mode::Decode => Base64Mode::Encode,
        }
    }
}

/// Encode the UTF-8 bytes of a text as padded standard Base64
pub fn encode(input: &str) -> String {
    STANDARD.encode(input.as_bytes())
}

/// Decode padded standard Base64 into UTF-8 text
///
/// Surrounding whitespace is ignored.
pub fn decode(input: &str) -> ToolResult<String> {
    let bytes = STANDARD.decode(input.trim().as_bytes())?;
    debug!("decoded {} bytes", bytes.len());
    Ok(String::from_utf8(bytes)?)
}

/// Run the tool in the given direction
pub fn apply(mode: Base64Mode, input: &str) -> ToolResult<String> {
    if input.is_empty() {
        return Err(ToolError::EmptyInput);
    }

    match mode {
        Base64Mode::Encode => Ok(encode(input)),
        Base64Mode::Decode => decode(input),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Base64Mode::Encode.toggled(), Base64Mode::Decode);
        assert_eq!(Base64Mode::Decode.toggled(), Base64Mode::Encode);
        assert_eq!(Base64Mode::default(), Base64Mode::Encode);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            apply(Base64Mode::Encode, ""),
            Err(ToolError::EmptyInput)
        ));
    }
}

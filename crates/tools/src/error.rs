use thiserror::Error;

/// Errors reported back to the user of a tool
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("input is empty")]
    EmptyInput,

    #[error("invalid Base64 input: {0}")]
    InvalidBase64(#[from] ::base64::DecodeError),

    #[error("decoded bytes are not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type ToolResult<T> = Result<T, ToolError>;

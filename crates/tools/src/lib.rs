// Small developer utilities for the devtools workspace
// Each tool is a pure function over text; persistence and I/O live elsewhere

pub mod base64;
pub mod catalog;
mod error;
pub mod json;
pub mod utm;
pub mod wisdom;

pub use crate::base64::Base64Mode;
pub use catalog::ToolKind;
pub use error::{ToolError, ToolResult};
pub use utm::UtmParams;
pub use wisdom::{PlaceholderWisdom, WisdomSource};

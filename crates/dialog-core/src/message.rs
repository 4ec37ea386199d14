//! Dialog Messages
//!
//! Prompt and closing messages rendered by the conversational platform.

use serde::{Deserialize, Serialize};

/// How the platform should interpret message content
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    #[default]
    PlainText,
    #[serde(rename = "SSML")]
    Ssml,
    CustomPayload,
}

/// A message shown (or spoken) to the user
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub content_type: ContentType,
    pub content: String,
}

impl Message {
    /// Create a plain-text message
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::PlainText,
            content: content.into(),
        }
    }
}

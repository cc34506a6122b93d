use kstring::KString;
use serde::{Deserialize, Serialize};

/// What the serializer needs to know about a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDescriptor {
    pub name: KString,
    /// Void tags (`br`, `img`, ...) don't get a closing tag, unless
    /// they end up with content anyway.
    #[serde(default)]
    pub void: bool,
}

impl TagDescriptor {
    pub fn has_closing_tag(&self) -> bool {
        !self.void
    }
}

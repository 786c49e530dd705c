use super::Element;
use std::fmt;

/// Opaque leaf content, rendered verbatim.
///
/// No escaping happens here: `<` or `&` inside the content end up in the
/// output as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Element for Text {
    fn render_into(&self, out: &mut String) {
        out.push_str(&self.content);
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

use std::fmt;

/// A `key="value"` pair attached to a tag.
///
/// Attributes are fixed once constructed. Keys are not checked for
/// uniqueness and neither part is escaped on render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Attribute {
    key: String,
    value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Borrow the attribute as a `(key, value)` pair.
    pub fn as_pair(&self) -> (&str, &str) {
        (&self.key, &self.value)
    }
}

impl<K, V> From<(K, V)> for Attribute
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl From<Attribute> for (String, String) {
    fn from(attr: Attribute) -> Self {
        (attr.key, attr.value)
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

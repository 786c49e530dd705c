//! The closed set of tag kinds.
//!
//! | kind    | children         | marker     |
//! |---------|------------------|------------|
//! | `html`  | any element      | Unique     |
//! | `head`  | any tag          | Unique     |
//! | `body`  | any element      | Unique     |
//! | `title` | one text node    | Unique     |
//! | `p`     | any element      | Repeatable |
//! | `a`     | any element      | Repeatable |

use std::fmt;

use crate::attribute::Attribute;
use crate::element::{Element, Repeatable, Tag, TagBase, Text, Unique};
use crate::error::Result;

macro_rules! tag_kinds {
    (
        $(
            $kind:ident($name:literal) <$child:ty> : $marker:ident;
        )*
    ) => {
        $(
            impl $kind {
                /// Rendered tag name.
                pub const NAME: &'static str = $name;

                pub fn children(&self) -> &[Box<$child>] {
                    self.base.children()
                }
            }

            impl Element for $kind {
                fn render_into(&self, out: &mut String) {
                    self.base.render_into(Self::NAME, out);
                }

                fn depth(&self) -> usize {
                    self.base.depth()
                }

                fn node_count(&self) -> usize {
                    self.base.node_count()
                }

                fn check_cardinality(&self) -> Result<()> {
                    self.base.check_cardinality(Self::NAME)
                }
            }

            impl Tag for $kind {
                fn name(&self) -> &'static str {
                    Self::NAME
                }

                fn attributes(&self) -> &[Attribute] {
                    self.base.attributes()
                }

                fn child_count(&self) -> usize {
                    self.base.children().len()
                }
            }

            impl $marker for $kind {}

            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.render())
                }
            }
        )*
    };
}

tag_kinds! {
    Html("html") <dyn Element> : Unique;
    Head("head") <dyn Tag> : Unique;
    Body("body") <dyn Element> : Unique;
    Title("title") <Text> : Unique;
    P("p") <dyn Element> : Repeatable;
    A("a") <dyn Element> : Repeatable;
}

/// Document root.
#[derive(Debug)]
pub struct Html {
    pub(crate) base: TagBase<dyn Element>,
}

impl Html {
    pub fn new() -> Self {
        Self {
            base: TagBase::new(),
        }
    }
}

impl Default for Html {
    fn default() -> Self {
        Self::new()
    }
}

/// Document head; holds tags only.
#[derive(Debug)]
pub struct Head {
    pub(crate) base: TagBase<dyn Tag>,
}

impl Head {
    pub fn new() -> Self {
        Self {
            base: TagBase::new(),
        }
    }
}

impl Default for Head {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct Body {
    pub(crate) base: TagBase<dyn Element>,
}

impl Body {
    pub fn new() -> Self {
        Self {
            base: TagBase::new(),
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new()
    }
}

/// Document title.
///
/// The single text child is built with the tag and never appended to
/// afterwards.
#[derive(Debug)]
pub struct Title {
    base: TagBase<Text>,
}

impl Title {
    pub fn new(title: impl Into<String>) -> Self {
        let mut base = TagBase::new();
        base.append(Self::NAME, Box::new(Text::new(title)));
        Self { base }
    }

    pub fn text(&self) -> &str {
        self.base
            .children()
            .first()
            .map(|text| text.content())
            .unwrap_or_default()
    }
}

/// Paragraph.
#[derive(Debug)]
pub struct P {
    pub(crate) base: TagBase<dyn Element>,
}

impl P {
    pub fn new() -> Self {
        Self {
            base: TagBase::new(),
        }
    }
}

impl Default for P {
    fn default() -> Self {
        Self::new()
    }
}

/// Anchor.
///
/// `href` is plain instance data. It is not rendered unless an `href`
/// attribute is added explicitly.
#[derive(Debug)]
pub struct A {
    pub(crate) base: TagBase<dyn Element>,
    href: String,
}

impl A {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            base: TagBase::new(),
            href: href.into(),
        }
    }

    pub fn href(&self) -> &str {
        &self.href
    }
}

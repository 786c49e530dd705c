//! Builder DSL.
//!
//! Each builder call creates a child, hands it to a configure closure so
//! the closure can grow the child's own subtree, appends the finished
//! child and returns the parent for chaining:
//!
//! ```
//! use tagtree::{html, AnyChild, Element, FlowContent};
//!
//! let doc = html(|html| {
//!     html.head(|head| {
//!         head.title(|| "ciao");
//!     })
//!     .body(|body| {
//!         body.text("ciao ciao").p(|p| {
//!             p.text("paragrafo");
//!         });
//!     });
//! });
//!
//! assert_eq!(
//!     doc.render(),
//!     "<html><head><title>ciao</title></head>\
//!      <body>ciao ciao<p>paragrafo</p></body></html>"
//! );
//! ```
//!
//! Which parent accepts which child is decided by the types, so none of
//! these calls can fail.

use tracing::{debug, instrument};

use crate::attribute::Attribute;
use crate::catalog::{Body, Head, Html, Title, A, P};
use crate::config::Config;
use crate::element::{Element, Tag, TagBase, Text};
use crate::error::Result;

mod sealed {
    use crate::element::{Element, Tag, TagBase};

    /// Only this crate can construct one, so only this crate can call
    /// `base_mut`, even through a generic bound.
    pub struct Token(pub(crate) ());

    pub trait HasBase: Tag {
        type Child: ?Sized + Element;

        fn base_mut(&mut self, token: Token) -> &mut TagBase<Self::Child>;
    }
}

use sealed::{HasBase, Token};

macro_rules! has_base {
    ($($kind:ty => $child:ty),* $(,)?) => {
        $(
            impl HasBase for $kind {
                type Child = $child;

                fn base_mut(&mut self, _: Token) -> &mut TagBase<$child> {
                    &mut self.base
                }
            }
        )*
    };
}

has_base! {
    Html => dyn Element,
    Head => dyn Tag,
    Body => dyn Element,
    P => dyn Element,
    A => dyn Element,
}

/// Tags accepting any element as a child, text included.
///
/// The storage behind these builders stays private to the crate:
///
/// ```compile_fail
/// use tagtree::{html, AnyChild, P};
///
/// fn swap_storage<X: AnyChild, Y: AnyChild>(x: &mut X, y: &mut Y) {
///     std::mem::swap(x.base_mut(), y.base_mut());
/// }
///
/// let mut doc = html(|_| {});
/// swap_storage(&mut doc, &mut P::new());
/// ```
pub trait AnyChild: HasBase<Child = dyn Element> {
    /// Append a text node.
    fn text(&mut self, content: impl Into<String>) -> &mut Self {
        let parent = self.name();
        self.base_mut(Token(()))
            .append(parent, Box::new(Text::new(content)));
        self
    }
}

impl AnyChild for Html {}
impl AnyChild for Body {}
impl AnyChild for P {}
impl AnyChild for A {}

/// Tags that take body content: paragraphs and anchors.
pub trait FlowContent: AnyChild {
    fn p(&mut self, configure: impl FnOnce(&mut P)) -> &mut Self {
        let mut p = P::new();
        configure(&mut p);
        let parent = self.name();
        self.base_mut(Token(())).append_repeatable(parent, p);
        self
    }

    fn a(&mut self, href: impl Into<String>, configure: impl FnOnce(&mut A)) -> &mut Self {
        let mut a = A::new(href);
        configure(&mut a);
        let parent = self.name();
        self.base_mut(Token(())).append_repeatable(parent, a);
        self
    }
}

impl FlowContent for Body {}
impl FlowContent for P {}
impl FlowContent for A {}

/// Attributes can only be added while a tag is being configured.
pub trait WithAttributes: HasBase {
    fn attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.base_mut(Token(()))
            .push_attribute(Attribute::new(key, value));
        self
    }
}

impl<T: HasBase> WithAttributes for T {}

impl Html {
    pub fn head(&mut self, configure: impl FnOnce(&mut Head)) -> &mut Self {
        let mut head = Head::new();
        configure(&mut head);
        self.base.append_unique(Self::NAME, head);
        self
    }

    pub fn body(&mut self, configure: impl FnOnce(&mut Body)) -> &mut Self {
        let mut body = Body::new();
        configure(&mut body);
        self.base.append_unique(Self::NAME, body);
        self
    }
}

impl Head {
    /// Append a title whose text is produced by `produce_title`.
    pub fn title<S: Into<String>>(&mut self, produce_title: impl FnOnce() -> S) -> &mut Self {
        self.base.append_unique(Self::NAME, Title::new(produce_title()));
        self
    }
}

/// Build a document: a fresh root handed to `configure`.
#[instrument(level = "debug", skip_all)]
pub fn html(configure: impl FnOnce(&mut Html)) -> Html {
    let mut root = Html::new();
    configure(&mut root);
    debug!(
        nodes = root.node_count(),
        depth = root.depth(),
        "document built"
    );
    root
}

/// Like [`html`], then checks the finished tree against `config`.
#[instrument(level = "debug", skip_all)]
pub fn html_with_config(config: &Config, configure: impl FnOnce(&mut Html)) -> Result<Html> {
    let root = html(configure);
    config.validate(&root)?;
    Ok(root)
}

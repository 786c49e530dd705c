use indexmap::IndexMap;
use tracing::{trace, warn};

use super::Element;
use crate::attribute::Attribute;
use crate::error::{Error, Result};

/// A container node with a name, attributes and ordered children.
pub trait Tag: Element {
    /// Name of the tag kind, fixed per kind.
    fn name(&self) -> &'static str;

    fn attributes(&self) -> &[Attribute];

    fn child_count(&self) -> usize;
}

/// Marks a kind expected at most once among its siblings.
pub trait Unique: Tag {}

/// Marks a kind that may repeat among its siblings.
pub trait Repeatable: Tag {}

/// Boxing into the child type a parent stores.
pub(crate) trait IntoChild<C: ?Sized> {
    fn into_child(self) -> Box<C>;
}

impl<K: Element + 'static> IntoChild<dyn Element> for K {
    fn into_child(self) -> Box<dyn Element> {
        Box::new(self)
    }
}

impl<K: Tag + 'static> IntoChild<dyn Tag> for K {
    fn into_child(self) -> Box<dyn Tag> {
        Box::new(self)
    }
}

/// Storage shared by every tag kind.
///
/// Children only grow, and only through the builder layer: the mutating
/// methods are crate-private, so a finished tree cannot be rearranged.
/// The tag name is not stored here; callers pass their kind's constant.
#[derive(Debug)]
pub struct TagBase<C: ?Sized + Element> {
    attributes: Vec<Attribute>,
    children: Vec<Box<C>>,
    // occurrences of each Unique child kind, in first-seen order
    unique_counts: IndexMap<&'static str, usize>,
}

impl<C: ?Sized + Element> TagBase<C> {
    pub(crate) fn new() -> Self {
        Self {
            attributes: Vec::new(),
            children: Vec::new(),
            unique_counts: IndexMap::new(),
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Box<C>] {
        &self.children
    }

    pub(crate) fn append(&mut self, parent: &'static str, child: Box<C>) {
        trace!(parent, position = self.children.len(), "append child");
        self.children.push(child);
    }

    pub(crate) fn append_unique<K>(&mut self, parent: &'static str, child: K)
    where
        K: Unique + IntoChild<C>,
    {
        let kind = child.name();
        let count = {
            let count = self.unique_counts.entry(kind).or_insert(0);
            *count += 1;
            *count
        };
        if count > 1 {
            warn!(
                parent,
                child = kind,
                count,
                "unique tag appended more than once"
            );
        }
        self.append(parent, <K as IntoChild<C>>::into_child(child));
    }

    pub(crate) fn append_repeatable<K>(&mut self, parent: &'static str, child: K)
    where
        K: Repeatable + IntoChild<C>,
    {
        self.append(parent, <K as IntoChild<C>>::into_child(child));
    }

    pub(crate) fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// `<name k="v">children</name>`, children in append order.
    pub(crate) fn render_into(&self, name: &'static str, out: &mut String) {
        out.push('<');
        out.push_str(name);
        for attribute in &self.attributes {
            let (key, value) = attribute.as_pair();
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');
        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }

    pub(crate) fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    pub(crate) fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.node_count())
            .sum::<usize>()
    }

    pub(crate) fn check_cardinality(&self, name: &'static str) -> Result<()> {
        if let Some((kind, count)) = self.unique_counts.iter().find(|(_, count)| **count > 1) {
            return Err(Error::duplicate_unique(name, *kind, *count));
        }
        self.children
            .iter()
            .try_for_each(|child| child.check_cardinality())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::Text;

    #[test]
    fn test_empty_tag() {
        let base: TagBase<dyn Element> = TagBase::new();
        let mut out = String::new();
        base.render_into("p", &mut out);
        assert_eq!(out, "<p></p>");
        assert_eq!(base.depth(), 1);
        assert_eq!(base.node_count(), 1);
    }

    #[test]
    fn test_children_keep_append_order() {
        let mut base: TagBase<Text> = TagBase::new();
        base.append("p", Box::new(Text::new("a")));
        base.append("p", Box::new(Text::new("b")));
        base.append("p", Box::new(Text::new("c")));

        let mut out = String::new();
        base.render_into("p", &mut out);
        assert_eq!(out, "<p>abc</p>");
        assert_eq!(base.children().len(), 3);
        assert_eq!(base.node_count(), 4);
    }

    #[test]
    fn test_attributes_are_space_separated() {
        let mut base: TagBase<dyn Element> = TagBase::new();
        base.push_attribute(Attribute::new("href", "/"));
        base.push_attribute(Attribute::new("class", "nav"));

        let mut out = String::new();
        base.render_into("a", &mut out);
        assert_eq!(out, "<a href=\"/\" class=\"nav\"></a>");
    }
}

//! Node abstraction.
//!
//! Every renderable thing implements [`Element`]. Leaves are [`Text`]
//! nodes; containers implement [`Tag`] and keep their attributes and
//! children in a [`TagBase`]. The [`Unique`] and [`Repeatable`] markers
//! describe how many siblings of a kind are expected and are consumed by
//! the builder signatures only.

mod tag;
mod text;

pub use tag::{Repeatable, Tag, TagBase, Unique};
pub use text::Text;

use crate::error::Result;
use std::fmt;

/// A node of a document tree.
pub trait Element: fmt::Debug {
    /// Append the serialized form of this node to `out`.
    fn render_into(&self, out: &mut String);

    /// Serialize this node and everything below it.
    ///
    /// Rendering is pure: calling it twice on the same tree yields the
    /// same string, and any subtree can be rendered on its own.
    fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    /// Tag nesting depth of this subtree. Text nodes count as zero.
    fn depth(&self) -> usize {
        0
    }

    /// Number of nodes in this subtree, this one included.
    fn node_count(&self) -> usize {
        1
    }

    /// Fails on the first [`Unique`] kind that occurs more than once
    /// under a single parent, searching depth-first, left to right.
    fn check_cardinality(&self) -> Result<()> {
        Ok(())
    }
}

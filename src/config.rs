use tracing::debug;

use crate::element::Element;
use crate::error::{Error, ErrorKind, Result};

/// What to do when a [`Unique`](crate::Unique) kind repeats under one parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UniquePolicy {
    /// Keep every occurrence; the repeat is only logged.
    #[default]
    Permit,
    /// Fail the build.
    Reject,
}

/// Checks applied by [`html_with_config`](crate::html_with_config) once
/// the tree is complete.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Handling of repeated unique tags
    pub unique_policy: UniquePolicy,
    /// Maximum tag nesting depth, unbounded when `None`
    pub max_depth: Option<usize>,
}

impl Config {
    /// Rejects repeated unique tags, no depth limit.
    pub fn strict() -> Self {
        Self {
            unique_policy: UniquePolicy::Reject,
            max_depth: None,
        }
    }

    pub fn with_unique_policy(mut self, policy: UniquePolicy) -> Self {
        self.unique_policy = policy;
        self
    }

    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }

    pub fn validate(&self, root: &dyn Element) -> Result<()> {
        if self.unique_policy == UniquePolicy::Reject {
            root.check_cardinality()?;
        }
        if let Some(max) = self.max_depth {
            let found = root.depth();
            if found > max {
                return Err(Error::new(ErrorKind::MaxDepthExceeded { max, found }));
            }
        }
        debug!(policy = ?self.unique_policy, max_depth = ?self.max_depth, "document validated");
        Ok(())
    }
}

//! Stable element keys
//!
//! Every revealable element on the page carries a key that survives view
//! rebuilds, so its one-shot reveal state can be looked up again. Keys are
//! explicit and hierarchical: a section key derives keys for its children.
//!
//! ```
//! use fusion_core::ElementKey;
//!
//! let roadmap = ElementKey::new("roadmap");
//! let phase = roadmap.derive("phase").index(2);
//! assert_eq!(phase.as_str(), "roadmap/phase/2");
//! ```

use std::fmt;
use std::sync::Arc;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(Arc<str>);

impl ElementKey {
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    /// Create a child key (`parent/suffix`)
    pub fn derive(&self, suffix: &str) -> Self {
        Self::new(format!("{}/{}", self.0, suffix))
    }

    /// Create a child key for the n-th item of a list (`parent/n`)
    pub fn index(&self, n: usize) -> Self {
        Self::new(format!("{}/{}", self.0, n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key is `ancestor` itself or one of its derived keys
    pub fn is_within(&self, ancestor: &ElementKey) -> bool {
        self.0.as_ref() == ancestor.as_str()
            || self
                .0
                .strip_prefix(ancestor.as_str())
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Debug for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ElementKey({})", self.0)
    }
}

impl fmt::Display for ElementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for ElementKey {
    fn from(key: String) -> Self {
        Self(Arc::from(key))
    }
}

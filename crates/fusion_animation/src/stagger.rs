//! Stagger scheduling
//!
//! Offsets the start of each member of a group by a fixed increment so a
//! list reveals as a cascade: member `i` waits `i * increment` after its own
//! reveal trigger. Order is the order members were added in; nothing is
//! re-sorted by size or position.
//!
//! ```
//! use fusion_animation::{StaggerConfig, StaggerGroup};
//!
//! let mut group = StaggerGroup::new(StaggerConfig::new(100));
//! group.push("a");
//! group.push("b");
//! group.push("c");
//! assert_eq!(group.schedule(), vec![("a", 0), ("b", 100), ("c", 200)]);
//! ```

/// Configuration for a staggered group
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StaggerConfig {
    /// Delay between consecutive members' starts (ms)
    pub increment_ms: u32,
}

impl StaggerConfig {
    pub fn new(increment_ms: u32) -> Self {
        Self { increment_ms }
    }

    /// Delay for the member at `index`
    pub fn delay_for_index(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.increment_ms.saturating_mul(index)
    }
}

/// Ordered members sharing one stagger increment
#[derive(Clone, Debug)]
pub struct StaggerGroup<K> {
    config: StaggerConfig,
    members: Vec<K>,
}

impl<K> StaggerGroup<K> {
    pub fn new(config: StaggerConfig) -> Self {
        Self {
            config,
            members: Vec::new(),
        }
    }

    /// Build a group from members in their declaration order
    pub fn from_members(config: StaggerConfig, members: impl IntoIterator<Item = K>) -> Self {
        Self {
            config,
            members: members.into_iter().collect(),
        }
    }

    pub fn config(&self) -> StaggerConfig {
        self.config
    }

    pub fn push(&mut self, member: K) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members with their delays, in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> + '_ {
        self.members
            .iter()
            .enumerate()
            .map(|(i, member)| (member, self.config.delay_for_index(i)))
    }
}

impl<K: Clone> StaggerGroup<K> {
    /// `(member, delay_ms)` pairs in declaration order; empty for an empty group
    pub fn schedule(&self) -> Vec<(K, u32)> {
        self.iter().map(|(m, d)| (m.clone(), d)).collect()
    }
}

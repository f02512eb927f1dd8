//! Node-name interning.
//!
//! Each distinct node name gets a dense index in order of first appearance.
//! Indices are never reassigned and the table never shrinks.

use std::fmt;

use indexmap::IndexSet;
use serde::Serialize;

/// Dense, zero-based node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct NodeIndex(pub usize);

impl NodeIndex {
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Insertion-ordered name → index table.
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    names: IndexSet<String>,
}

impl NodeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `name`, assigning the next one if unseen.
    pub fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(idx) = self.names.get_index_of(name) {
            return NodeIndex(idx);
        }
        let (idx, _) = self.names.insert_full(name.to_owned());
        NodeIndex(idx)
    }

    /// Look up a name without assigning.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeIndex> {
        self.names.get_index_of(name).map(NodeIndex)
    }

    /// The name that was assigned `index`.
    #[must_use]
    pub fn name(&self, index: NodeIndex) -> Option<&str> {
        self.names.get_index(index.0).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in index order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (NodeIndex(i), name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assigns_in_first_appearance_order() {
        let mut table = NodeTable::new();
        assert_eq!(table.intern("Node0xb"), NodeIndex(0));
        assert_eq!(table.intern("Node0xa"), NodeIndex(1));
        assert_eq!(table.intern("Node0xb"), NodeIndex(0));
        assert_eq!(table.intern("Node0xc"), NodeIndex(2));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut table = NodeTable::new();
        let lower = table.intern("Node0xab");
        let upper = table.intern("Node0xAB");
        assert_ne!(lower, upper);
    }

    #[test]
    fn get_does_not_assign() {
        let mut table = NodeTable::new();
        assert!(table.get("Node0x1").is_none());
        assert!(table.is_empty());
        table.intern("Node0x1");
        assert_eq!(table.get("Node0x1"), Some(NodeIndex(0)));
    }

    #[test]
    fn reverse_lookup_and_iteration() {
        let mut table = NodeTable::new();
        table.intern("Node0x10");
        table.intern("Node0x20");
        assert_eq!(table.name(NodeIndex(1)), Some("Node0x20"));
        assert_eq!(table.name(NodeIndex(2)), None);

        let listed: Vec<_> = table.iter().collect();
        assert_eq!(
            listed,
            vec![(NodeIndex(0), "Node0x10"), (NodeIndex(1), "Node0x20")]
        );
    }
}

//! Containers holding the nodes a search has discovered but not yet finished with.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use itertools::Itertools;
use std::collections::VecDeque;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// First in, first out. Gives breadth-first search its level order.
#[derive(Clone, Debug, Default)]
pub struct Queue {
    elements: VecDeque<usize>,
}

impl Queue {
    pub fn new() -> Queue {
        Queue::default()
    }
    pub fn enqueue(&mut self, node: usize) {
        self.elements.push_back(node);
    }
    pub fn dequeue(&mut self) -> Option<usize> {
        self.elements.pop_front()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// Last in, first out.
#[derive(Clone, Debug, Default)]
pub struct Stack {
    elements: Vec<usize>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack::default()
    }
    pub fn push(&mut self, node: usize) {
        self.elements.push(node);
    }
    pub fn pop(&mut self) -> Option<usize> {
        self.elements.pop()
    }
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

/// An unordered set of frontier nodes from which the best one is picked by scanning all of
/// them. Nodes are kept in insertion order and removal preserves that order, so among nodes
/// with equal keys the scan always returns the one inserted first.
///
/// Extraction is linear in the frontier size, which is fine for the grid sizes this crate is
/// aimed at.
#[derive(Clone, Debug, Default)]
pub struct ScanFrontier {
    nodes: FxIndexSet<usize>,
}

impl ScanFrontier {
    pub fn new() -> ScanFrontier {
        ScanFrontier::default()
    }
    /// Inserts `node` at the back. Returns false if it was already present.
    pub fn insert(&mut self, node: usize) -> bool {
        self.nodes.insert(node)
    }
    pub fn remove(&mut self, node: usize) -> bool {
        self.nodes.shift_remove(&node)
    }
    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    /// The first node in insertion order minimizing `key`.
    pub fn min_by_key<K, F>(&self, mut key: F) -> Option<usize>
    where
        K: Ord,
        F: FnMut(usize) -> K,
    {
        self.nodes
            .iter()
            .position_min_by_key(|&&n| key(n))
            .and_then(|i| self.nodes.get_index(i).copied())
    }
    /// Removes and returns the node [min_by_key](Self::min_by_key) would select.
    pub fn pop_min_by_key<K, F>(&mut self, key: F) -> Option<usize>
    where
        K: Ord,
        F: FnMut(usize) -> K,
    {
        let node = self.min_by_key(key)?;
        self.nodes.shift_remove(&node);
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_is_fifo() {
        let mut q = Queue::new();
        for n in [3, 1, 2] {
            q.enqueue(n);
        }
        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(3));
        assert_eq!(q.dequeue(), Some(1));
        assert_eq!(q.dequeue(), Some(2));
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn stack_is_lifo() {
        let mut s = Stack::new();
        for n in [3, 1, 2] {
            s.push(n);
        }
        assert_eq!(s.pop(), Some(2));
        assert_eq!(s.pop(), Some(1));
        assert_eq!(s.pop(), Some(3));
        assert!(s.is_empty());
    }

    #[test]
    fn scan_prefers_first_inserted_on_ties() {
        let mut f = ScanFrontier::new();
        let keys = [5, 2, 7, 2, 9];
        for n in 0..keys.len() {
            assert!(f.insert(n));
        }
        assert!(!f.insert(0));
        assert_eq!(f.min_by_key(|n| keys[n]), Some(1));
        assert_eq!(f.pop_min_by_key(|n| keys[n]), Some(1));
        assert_eq!(f.pop_min_by_key(|n| keys[n]), Some(3));
        assert_eq!(f.pop_min_by_key(|n| keys[n]), Some(0));
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn removal_keeps_order() {
        let mut f = ScanFrontier::new();
        for n in [4, 8, 6] {
            f.insert(n);
        }
        assert!(f.remove(4));
        assert!(!f.remove(4));
        assert!(!f.contains(4));
        assert_eq!(f.min_by_key(|_| 0), Some(8));
        assert_eq!(ScanFrontier::new().min_by_key(|n| n), None);
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Structural mutation of the trie.
//!
//! [`Tree`] is the unsynchronized engine behind [`super::LanaiTrie`]. Keys are
//! passed as character slices that have already been normalized.

use tracing::{debug, trace};

use super::mask::{suffix_masks, CharMask};
use super::node::{NodeArena, NodeId, NodeKind, TrieNode};

/// Arena-backed R-way trie with per-subtree character masks.
#[derive(Debug)]
pub struct Tree<T> {
    pub(crate) arena: NodeArena<T>,
    pub(crate) root: NodeId,
    len: usize,
}

impl<T> Tree<T> {
    /// Creates a tree holding only an empty root.
    pub fn new() -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(TrieNode::root());
        Self { arena, root, len: 0 }
    }

    /// Number of distinct stored keys.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Stores `key` with `payload` and returns the id of its terminal node.
    ///
    /// Re-adding an existing key replaces its payload and keeps the same
    /// terminal node.
    pub fn add(&mut self, key: &[char], payload: T) -> NodeId {
        let masks = suffix_masks(key);
        let mut node = self.root;
        self.arena[node].mask.insert(masks[0]);

        let mut path = Vec::with_capacity(key.len() + 1);
        path.push(node);

        for (i, &c) in key.iter().enumerate() {
            let next = match self.arena[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let depth = self.arena[node].depth + 1;
                    let child = self.arena.alloc(TrieNode::inner(c, node, depth));
                    self.arena[node].children.insert(c, child);
                    child
                }
            };
            self.arena[next].mask.insert(masks[i]);
            path.push(next);
            node = next;
        }

        if let Some(end) = self.arena[node].end {
            trace!(depth = key.len(), "replacing payload of existing key");
            self.arena[end].payload = Some(payload);
            return end;
        }

        let depth = self.arena[node].depth + 1;
        let end = self.arena.alloc(TrieNode::terminal(node, depth, payload));
        self.arena[node].end = Some(end);
        for id in path {
            self.arena[id].terminal_count += 1;
        }
        self.len += 1;
        end
    }

    /// Exact-path descent. Returns the node spelled by `key`, terminal or not.
    pub fn find_node(&self, key: &[char]) -> Option<NodeId> {
        key.iter()
            .try_fold(self.root, |node, c| self.arena[node].children.get(c).copied())
    }

    /// Terminal node of `key`, if `key` itself is stored.
    pub fn find_terminal(&self, key: &[char]) -> Option<NodeId> {
        self.find_node(key).and_then(|node| self.arena[node].end)
    }

    /// Payload behind a terminal id, if the id is still live.
    pub fn payload(&self, id: NodeId) -> Option<&T> {
        self.arena
            .get(id)
            .filter(|node| node.is_terminal())
            .and_then(|node| node.payload.as_ref())
    }

    /// Removes `key`. Returns `false` and leaves the tree untouched if absent.
    ///
    /// Walks up from the terminal to the first ancestor with more than one
    /// child (or the root), detaches the chain that led to the key, then
    /// recomputes masks exactly from that ancestor to the root.
    pub fn remove(&mut self, key: &[char]) -> bool {
        let Some(terminal) = self.find_terminal(key) else {
            return false;
        };

        let mut child = terminal;
        let mut node = match self.arena[terminal].parent {
            Some(parent) => parent,
            None => return false,
        };
        while node != self.root && self.arena[node].child_count() == 1 {
            match self.arena[node].parent {
                Some(parent) => {
                    child = node;
                    node = parent;
                }
                None => break,
            }
        }

        let freed = self.detach(node, child);
        debug!(
            freed,
            depth = self.arena[node].depth,
            "detached removed key chain"
        );

        if node == self.root && self.arena[node].child_count() == 0 {
            trace!("last key removed, rebuilding empty root");
            self.arena[node] = TrieNode::root();
        }

        let mut cursor = Some(node);
        while let Some(id) = cursor {
            let mask = self.recompute_mask(id);
            let current = &mut self.arena[id];
            current.mask = mask;
            current.terminal_count = current.terminal_count.saturating_sub(1);
            cursor = current.parent;
        }

        self.len -= 1;
        true
    }

    /// Drops every key.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = self.arena.alloc(TrieNode::root());
        self.len = 0;
    }

    /// Unlinks `child` from `parent` and frees its whole subtree.
    /// Returns the number of nodes freed.
    fn detach(&mut self, parent: NodeId, child: NodeId) -> usize {
        match self.arena[child].kind {
            NodeKind::Terminal => self.arena[parent].end = None,
            NodeKind::Inner(c) => {
                self.arena[parent].children.remove(&c);
            }
            NodeKind::Root => return 0,
        }

        let mut freed = 0;
        let mut pending = vec![child];
        while let Some(id) = pending.pop() {
            if let Some(node) = self.arena.free(id) {
                freed += 1;
                pending.extend(node.child_ids());
            }
        }
        freed
    }

    /// Own character bit united with every current child's mask.
    fn recompute_mask(&self, id: NodeId) -> CharMask {
        let node = &self.arena[id];
        node.child_ids()
            .fold(node.own_mask(), |mask, child| mask.union(self.arena[child].mask))
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node storage for the Lanai Trie.
//!
//! Nodes live in a slot arena and refer to each other through [`NodeId`]s.
//! A child is owned by the arena and reachable from exactly one parent; the
//! `parent` field is a plain id and never keeps a node alive. Every freed slot
//! bumps its generation, so an id that outlives its node stops resolving.

use std::ops::{Index, IndexMut};

use fnv::FnvHashMap;

use super::mask::CharMask;

/// Generation-tagged index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

/// What a node stands for in the key path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The root. Carries no character.
    Root,
    /// One character of a stored key.
    Inner(char),
    /// End-of-key sentinel. Holds the payload.
    Terminal,
}

/// A single trie vertex.
#[derive(Debug)]
pub struct TrieNode<T> {
    /// Role of this node.
    pub kind: NodeKind,

    /// Distance from the root.
    pub depth: usize,

    /// Superset of every character in this node's subtree, own character included.
    pub mask: CharMask,

    /// Structural parent. `None` only for the root.
    pub parent: Option<NodeId>,

    /// Character-labelled children.
    pub children: FnvHashMap<char, NodeId>,

    /// Terminal sentinel child, present when a key ends here.
    pub end: Option<NodeId>,

    /// Payload of a terminal node.
    pub payload: Option<T>,

    /// Number of terminal nodes in this subtree.
    pub terminal_count: usize,
}

impl<T> TrieNode<T> {
    /// Creates an empty root node.
    pub fn root() -> Self {
        Self {
            kind: NodeKind::Root,
            depth: 0,
            mask: CharMask::EMPTY,
            parent: None,
            children: FnvHashMap::default(),
            end: None,
            payload: None,
            terminal_count: 0,
        }
    }

    /// Creates a character node below `parent`.
    pub fn inner(c: char, parent: NodeId, depth: usize) -> Self {
        Self {
            kind: NodeKind::Inner(c),
            depth,
            mask: CharMask::of_char(c),
            parent: Some(parent),
            children: FnvHashMap::default(),
            end: None,
            payload: None,
            terminal_count: 0,
        }
    }

    /// Creates a terminal sentinel below `parent` holding `payload`.
    pub fn terminal(parent: NodeId, depth: usize, payload: T) -> Self {
        Self {
            kind: NodeKind::Terminal,
            depth,
            mask: CharMask::EMPTY,
            parent: Some(parent),
            children: FnvHashMap::default(),
            end: None,
            payload: Some(payload),
            terminal_count: 1,
        }
    }

    /// Mask of this node's own character (empty for root and terminals).
    pub fn own_mask(&self) -> CharMask {
        match self.kind {
            NodeKind::Inner(c) => CharMask::of_char(c),
            NodeKind::Root | NodeKind::Terminal => CharMask::EMPTY,
        }
    }

    /// Whether a stored key ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.kind == NodeKind::Terminal
    }

    /// Number of children, the terminal sentinel included.
    pub fn child_count(&self) -> usize {
        self.children.len() + usize::from(self.end.is_some())
    }

    /// Ids of every child, the terminal sentinel included.
    pub fn child_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.values().copied().chain(self.end)
    }
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<TrieNode<T>>,
}

/// Slot arena owning every node of one trie.
///
/// Indexing with a stale [`NodeId`] panics; ids held inside the tree are
/// always live. Ids that escape to callers go through [`NodeArena::get`].
#[derive(Debug)]
pub struct NodeArena<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    live: usize,
}

impl<T> NodeArena<T> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
        }
    }

    /// Stores `node` and returns its id, reusing a freed slot if one exists.
    pub fn alloc(&mut self, node: TrieNode<T>) -> NodeId {
        self.live += 1;
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index];
            slot.node = Some(node);
            return NodeId {
                index,
                generation: slot.generation,
            };
        }

        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    /// Removes the node behind `id`, invalidating every copy of the id.
    pub fn free(&mut self, id: NodeId) -> Option<TrieNode<T>> {
        let slot = self.slots.get_mut(id.index)?;
        if slot.generation != id.generation {
            return None;
        }

        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(id.index);
        self.live -= 1;
        Some(node)
    }

    /// Frees every node while keeping generations monotonic.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(index);
            }
        }
        self.live = 0;
    }

    /// Returns the node behind `id` if it is still live.
    pub fn get(&self, id: NodeId) -> Option<&TrieNode<T>> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    /// Mutable variant of [`NodeArena::get`].
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut TrieNode<T>> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    /// Number of live nodes.
    pub fn live(&self) -> usize {
        self.live
    }
}

impl<T> Default for NodeArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<NodeId> for NodeArena<T> {
    type Output = TrieNode<T>;

    fn index(&self, id: NodeId) -> &Self::Output {
        match self.get(id) {
            Some(node) => node,
            None => panic!("stale node id {id:?}"),
        }
    }
}

impl<T> IndexMut<NodeId> for NodeArena<T> {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.get_mut(id) {
            Some(node) => node,
            None => panic!("stale node id {id:?}"),
        }
    }
}

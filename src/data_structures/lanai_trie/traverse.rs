// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Read-only traversals over a [`Tree`].
//!
//! Both traversals run on an explicit stack. Keys are rebuilt from a single
//! character buffer: a node at depth `d` owns position `d - 1` of the buffer,
//! so popping a node truncates the buffer to its parent's length before
//! pushing its own character. Depth-first order guarantees everything left in
//! the buffer at that point belongs to the node's ancestors.

use super::mask::suffix_masks;
use super::node::{NodeId, NodeKind, TrieNode};
use super::tree::Tree;

/// Calls `visit` with the reconstructed key of every terminal below `start`.
///
/// `prefix` must be the key spelled by the path from the root to `start`.
pub(crate) fn visit_terminals<T, F>(tree: &Tree<T>, start: NodeId, prefix: &[char], mut visit: F)
where
    F: FnMut(String, &TrieNode<T>),
{
    let base = tree.arena[start].depth;
    let mut path = prefix.to_vec();
    let mut stack = vec![start];

    while let Some(id) = stack.pop() {
        let node = &tree.arena[id];
        if id != start {
            path.truncate(prefix.len() + node.depth - base - 1);
        }

        match node.kind {
            NodeKind::Terminal => {
                visit(path.iter().collect(), node);
                continue;
            }
            NodeKind::Inner(c) if id != start => path.push(c),
            NodeKind::Inner(_) | NodeKind::Root => {}
        }

        stack.extend(node.child_ids());
    }
}

/// Every key stored below `start`, in no particular order.
pub(crate) fn collect<T>(tree: &Tree<T>, start: NodeId, prefix: &[char]) -> Vec<String> {
    let mut keys = Vec::with_capacity(tree.arena[start].terminal_count);
    visit_terminals(tree, start, prefix, |key, _| keys.push(key));
    keys
}

/// Every key containing `pattern` as a subsequence, unordered.
///
/// A work item is a node plus the number of pattern characters matched on the
/// path above it. A subtree is entered only if its mask covers every
/// character still unmatched; the exact character test decides matches.
pub(crate) fn fuzzy_collect<T>(tree: &Tree<T>, pattern: &[char]) -> Vec<String> {
    if pattern.is_empty() {
        return collect(tree, tree.root, &[]);
    }

    let remaining = suffix_masks(pattern);
    let mut keys = Vec::new();
    let mut path: Vec<char> = Vec::new();
    let mut work = vec![(tree.root, 0usize)];

    while let Some((id, mut matched)) = work.pop() {
        let node = &tree.arena[id];
        if !node.mask.contains_all(remaining[matched]) {
            continue;
        }

        if let NodeKind::Inner(c) = node.kind {
            path.truncate(node.depth - 1);
            path.push(c);

            if c == pattern[matched] {
                matched += 1;
                if matched == pattern.len() {
                    keys.extend(collect(tree, id, &path));
                    continue;
                }
            }
        }

        // Terminal children have empty masks and never survive the check above.
        work.extend(node.children.values().map(|&child| (child, matched)));
    }

    keys
}

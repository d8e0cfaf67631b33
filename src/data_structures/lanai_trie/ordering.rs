// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ordering of fuzzy search results.

use std::cmp::Ordering;

/// Shorter keys first, measured in characters. Equal lengths fall back to
/// lexicographic order.
pub fn by_length(a: &str, b: &str) -> Ordering {
    a.chars()
        .count()
        .cmp(&b.chars().count())
        .then_with(|| a.cmp(b))
}

/// Sorts `keys` in place with [`by_length`].
pub fn sort_by_length(keys: &mut [String]) {
    keys.sort_by(|a, b| by_length(a, b));
}

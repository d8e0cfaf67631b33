// Copyright (c) 2025 Mauka MCP Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Character-set summaries for subtree pruning.
//!
//! A [`CharMask`] is a 128-bit membership word. ASCII code points own one bit
//! each; every other code point is hashed onto the same 128 bits, so two
//! distinct characters may share a bit. A mask therefore answers "might this
//! subtree contain all of these characters", never "does it". A character that
//! is present always has its bit set.

use std::fmt;
use std::hash::Hasher;

use fnv::FnvHasher;

/// Width of the mask in bits.
pub const MASK_BITS: u32 = 128;

/// A fixed-width superset summary of a set of characters.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharMask(u128);

impl CharMask {
    /// The empty mask.
    pub const EMPTY: CharMask = CharMask(0);

    /// Returns the bit position a character maps to.
    #[inline]
    pub fn bit_of(c: char) -> u32 {
        let code = c as u32;
        if code < MASK_BITS {
            return code;
        }

        let mut hasher = FnvHasher::default();
        hasher.write_u32(code);
        (hasher.finish() % u64::from(MASK_BITS)) as u32
    }

    /// Mask containing a single character.
    #[inline]
    pub fn of_char(c: char) -> Self {
        CharMask(1u128 << Self::bit_of(c))
    }

    /// Union of the masks of every character in `chars`.
    pub fn of_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        chars
            .into_iter()
            .fold(Self::EMPTY, |mask, c| mask.union(Self::of_char(c)))
    }

    /// Returns `true` if every bit of `other` is also set in `self`.
    #[inline]
    pub fn contains_all(self, other: CharMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Bitwise union of two masks.
    #[inline]
    #[must_use]
    pub fn union(self, other: CharMask) -> Self {
        CharMask(self.0 | other.0)
    }

    /// Adds every bit of `other` to this mask.
    #[inline]
    pub fn insert(&mut self, other: CharMask) {
        self.0 |= other.0;
    }

    /// Whether no bits are set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Raw bits.
    #[inline]
    pub fn bits(self) -> u128 {
        self.0
    }
}

impl fmt::Debug for CharMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharMask({:#034x})", self.0)
    }
}

/// Masks of every suffix of `pattern`.
///
/// `out[i]` covers `pattern[i..]` and `out[pattern.len()]` is empty, so a
/// traversal can look up the mask of the unmatched remainder in O(1).
pub fn suffix_masks(pattern: &[char]) -> Vec<CharMask> {
    let mut out = vec![CharMask::EMPTY; pattern.len() + 1];
    for i in (0..pattern.len()).rev() {
        out[i] = out[i + 1].union(CharMask::of_char(pattern[i]));
    }
    out
}

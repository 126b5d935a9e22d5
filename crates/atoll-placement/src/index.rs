//! Immutable snapshot of the ring: sorted tokens and their owners.

use std::collections::{BTreeMap, HashSet};

use atoll_types::{InstanceId, Token};
use tracing::debug;

use crate::PlacementError;

/// A read-only view of the token ring at one point in time.
///
/// Holds the strictly ascending token sequence and, for each token, the
/// instance that owns it. The index is never mutated: when membership
/// changes, the surrounding system builds a fresh index and swaps it in at
/// the reference level. Any number of concurrent callers may query the same
/// index without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingIndex {
    /// Ring tokens in strictly ascending order.
    tokens: Vec<Token>,
    /// Owner of `tokens[i]`, kept parallel to `tokens`.
    instances: Vec<InstanceId>,
}

impl RingIndex {
    /// Build an index from `(token, instance)` assignments.
    ///
    /// Entries are sorted internally, so input order does not matter.
    /// Duplicate tokens cannot exist in the index: if the input assigns the
    /// same token twice, the last assignment wins.
    pub fn new(entries: impl IntoIterator<Item = (Token, InstanceId)>) -> Self {
        let sorted: BTreeMap<Token, InstanceId> = entries.into_iter().collect();

        let mut tokens = Vec::with_capacity(sorted.len());
        let mut instances = Vec::with_capacity(sorted.len());
        for (token, instance) in sorted {
            tokens.push(token);
            instances.push(instance);
        }

        let distinct = instances.iter().collect::<HashSet<_>>().len();
        debug!(
            tokens = tokens.len(),
            instances = distinct,
            "built ring index"
        );

        Self { tokens, instances }
    }

    /// Number of tokens on the ring.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the ring has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The sorted token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the token that owns the key hashing to `key`: the first
    /// token `>= key`, wrapping to index 0 past the highest token.
    pub fn successor_index(&self, key: Token) -> Result<usize, PlacementError> {
        if self.tokens.is_empty() {
            return Err(PlacementError::EmptyRing);
        }
        let idx = self.tokens.partition_point(|&t| t < key);
        Ok(if idx == self.tokens.len() { 0 } else { idx })
    }

    /// Index of `token` itself; fails unless the token is on the ring.
    pub fn exact_index(&self, token: Token) -> Result<usize, PlacementError> {
        if self.tokens.is_empty() {
            return Err(PlacementError::EmptyRing);
        }
        self.tokens
            .binary_search(&token)
            .map_err(|_| PlacementError::TokenNotOnRing(token))
    }

    /// Token at position `i`.
    ///
    /// Panics if `i` is out of bounds; positions always come from
    /// [`successor_index`](Self::successor_index) or
    /// [`exact_index`](Self::exact_index) plus wrapped stepping.
    pub fn token_at(&self, i: usize) -> Token {
        self.tokens[i]
    }

    /// Instance owning the token at position `i`.
    pub fn instance_at(&self, i: usize) -> &InstanceId {
        &self.instances[i]
    }

    /// Position one step clockwise of `i`.
    pub fn next_index(&self, i: usize) -> usize {
        (i + 1) % self.tokens.len()
    }

    /// Position one step counter-clockwise of `i`.
    pub fn prev_index(&self, i: usize) -> usize {
        (i + self.tokens.len() - 1) % self.tokens.len()
    }
}

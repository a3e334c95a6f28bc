//! Token buffer
//!
//! `TokenSink` is the scanner's output: a pre-sized, append-only sequence of token texts. Every
//! slot past the produced tokens is an explicit empty marker (`None`), so a caller holding only
//! the slots can still tell how many tokens were produced.
//!
//! An input of `n` characters produces at most `n` tokens (every scan step consumes at least one
//! character), so a capacity of the input's character count can never overflow.

use thiserror::Error;

/// `append` was called on a full sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token buffer is full (capacity {capacity})")]
pub struct CapacityError {
    pub capacity: usize,
}

/// A capacity-bounded, ordered buffer of matched substrings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSink {
    slots: Vec<Option<String>>,
    len: usize,
}

impl TokenSink {
    /// A sink with `capacity` slots, all empty.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            len: 0,
        }
    }

    /// A sink large enough for any scan of `input`.
    pub fn for_input(input: &str) -> Self {
        Self::with_capacity(input.chars().count())
    }

    /// Store `token` in the next empty slot.
    pub fn append(&mut self, token: impl Into<String>) -> Result<(), CapacityError> {
        let capacity = self.slots.len();
        let slot = self
            .slots
            .get_mut(self.len)
            .ok_or(CapacityError { capacity })?;
        *slot = Some(token.into());
        self.len += 1;
        Ok(())
    }

    /// Number of tokens produced
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Every slot, including the trailing empty markers
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// The produced tokens in order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.slots[..self.len].iter().filter_map(|slot| slot.as_deref())
    }

    /// Hand the produced tokens over to the caller, dropping the empty markers.
    pub fn into_tokens(self) -> Vec<String> {
        self.slots.into_iter().take(self.len).flatten().collect()
    }
}

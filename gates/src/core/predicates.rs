//! Non-empty, ordered predicate sequences.

use std::slice;

use anyhow::{Result, bail};

/// An ordered sequence holding at least one predicate.
///
/// Construction is the only place emptiness is checked: every gate factory
/// takes a `Predicates<P>`, so a composite predicate can always read its first
/// element. The sequence is never reordered or deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicates<P> {
    items: Vec<P>,
}

impl<P> Predicates<P> {
    /// Wrap `items`, failing if the sequence is empty.
    pub fn new(items: Vec<P>) -> Result<Self> {
        if items.is_empty() {
            bail!("predicate sequence must be non-empty");
        }
        Ok(Self { items })
    }

    /// A sequence containing exactly one predicate.
    pub fn single(predicate: P) -> Self {
        Self {
            items: vec![predicate],
        }
    }

    /// Append a predicate after the existing ones.
    pub fn push(&mut self, predicate: P) {
        self.items.push(predicate);
    }

    pub fn first(&self) -> &P {
        &self.items[0]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; present to pair with [`Predicates::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> slice::Iter<'_, P> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[P] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<P> {
        self.items
    }
}

impl<P> TryFrom<Vec<P>> for Predicates<P> {
    type Error = anyhow::Error;

    fn try_from(items: Vec<P>) -> Result<Self> {
        Self::new(items)
    }
}

impl<'a, P> IntoIterator for &'a Predicates<P> {
    type Item = &'a P;
    type IntoIter = slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<P> IntoIterator for Predicates<P> {
    type Item = P;
    type IntoIter = std::vec::IntoIter<P>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

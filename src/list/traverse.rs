//! Traversals shared by every list representation.

use std::fmt::Display;
use std::io::{self, Write};
use std::iter::Sum;

/// A list that is either the empty marker or a pair whose second component is
/// again a list.
pub trait ConsList: Sized {
    type Item;

    /// Splits a pair into `(first, second)`, or returns `None` at the empty marker.
    fn split(&self) -> Option<(Self::Item, Self)>;

    /// Iterates the elements front to back.
    fn items(&self) -> Items<Self> {
        Items {
            pending: self.split(),
        }
    }
}

/// Iterator returned by [`ConsList::items`].
pub struct Items<L: ConsList> {
    pending: Option<(L::Item, L)>,
}

impl<L: ConsList> Iterator for Items<L> {
    type Item = L::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (head, rest) = self.pending.take()?;
        self.pending = rest.split();
        Some(head)
    }
}

/// Writes every element on its own line.
///
/// Each step emits `first(node)` and continues with `second(node)` until the
/// empty marker is reached.
pub fn print_all<L, W>(list: &L, out: &mut W) -> io::Result<()>
where
    L: ConsList,
    L::Item: Display,
    W: Write,
{
    let mut node = list.split();
    while let Some((head, rest)) = node {
        writeln!(out, "{head}")?;
        node = rest.split();
    }
    Ok(())
}

/// Adds up every element; the empty list sums to zero.
pub fn sum_all<L>(list: &L) -> L::Item
where
    L: ConsList,
    L::Item: Sum,
{
    list.items().sum()
}

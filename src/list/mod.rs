//! Singly linked lists built from pairs
//!
//! Two representations are provided and they are interchangeable:
//!
//! - [`EncodedList`] encodes every pair as a closure that applies a selector
//!   to its captured components (see [`church`]).
//! - [`List`] is the tagged sum `Empty | Node(value, next)` with direct field
//!   access. `List::pair(a, b)` corresponds to `make_pair(a, b)`, and matching
//!   on `Node(a, b)` corresponds to applying a selector.
//!
//! Both implement [`ConsList`], so [`print_all`] and [`sum_all`] work on
//! either. Asking the empty marker for `first` or `second` fails with
//! [`AccessError::EmptyList`] in both representations.

pub mod church;
mod error;
mod traverse;

use std::mem;
use std::rc::Rc;

pub use church::{Component, EncodedList, EncodedPair, Selector, first, make_pair, second};
pub use error::AccessError;
pub use traverse::{ConsList, Items, print_all, sum_all};

/// Tagged singly linked list. Tails are shared, so taking `second` is cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum List<T> {
    Empty,
    Node(T, Rc<List<T>>),
}

impl<T> List<T> {
    /// Prepends `head` to `tail`.
    pub fn pair(head: T, tail: List<T>) -> Self {
        List::Node(head, Rc::new(tail))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, List::Empty)
    }

    pub fn first(&self) -> Result<&T, AccessError> {
        match self {
            List::Node(head, _) => Ok(head),
            List::Empty => Err(AccessError::EmptyList { accessor: "first" }),
        }
    }

    pub fn second(&self) -> Result<&List<T>, AccessError> {
        match self {
            List::Node(_, tail) => Ok(tail.as_ref()),
            List::Empty => Err(AccessError::EmptyList { accessor: "second" }),
        }
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        List::Empty
    }
}

// Unlink uniquely owned tails one at a time instead of letting each node drop the next.
impl<T> Drop for List<T> {
    fn drop(&mut self) {
        let mut tail = match self {
            List::Node(_, tail) => mem::replace(tail, Rc::new(List::Empty)),
            List::Empty => return,
        };
        while let Ok(mut node) = Rc::try_unwrap(tail) {
            tail = match &mut node {
                List::Node(_, next) => mem::replace(next, Rc::new(List::Empty)),
                List::Empty => break,
            };
        }
    }
}

impl<T: Clone> ConsList for List<T> {
    type Item = T;

    fn split(&self) -> Option<(T, Self)> {
        match self {
            List::Node(head, tail) => Some((head.clone(), List::clone(tail))),
            List::Empty => None,
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(List::Empty, |tail, head| List::pair(head, tail))
    }
}

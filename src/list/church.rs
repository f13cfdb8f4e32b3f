//! Pairs and lists encoded as closures.
//!
//! A pair is not a record but a capability: hand it a selector of two
//! arguments and it applies the selector to the two values it captured.
//! Rust closures cannot be generic over the selector's return type, so the
//! selector returns a [`Component`] naming which side it picked.

use std::fmt;
use std::rc::Rc;

use log::trace;

use super::error::AccessError;
use super::traverse::ConsList;

/// Result of applying a selector to a pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Component<A, B> {
    First(A),
    Second(B),
}

/// A two-argument selector handed to [`EncodedPair::apply`].
pub type Selector<A, B> = fn(A, B) -> Component<A, B>;

type Capability<A, B> = Rc<dyn Fn(Selector<A, B>) -> Component<A, B>>;

/// A 2-tuple represented as a closure over its components.
pub struct EncodedPair<A, B> {
    capability: Capability<A, B>,
}

impl<A, B> Clone for EncodedPair<A, B> {
    fn clone(&self) -> Self {
        EncodedPair {
            capability: Rc::clone(&self.capability),
        }
    }
}

impl<A, B> EncodedPair<A, B> {
    /// Applies `select` to the captured `(a, b)`.
    pub fn apply(&self, select: Selector<A, B>) -> Component<A, B> {
        (self.capability)(select)
    }
}

impl<A, B> fmt::Debug for EncodedPair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncodedPair(<closure>)")
    }
}

/// Builds a pair. Every call returns a new closure.
pub fn make_pair<A, B>(a: A, b: B) -> EncodedPair<A, B>
where
    A: Clone + 'static,
    B: Clone + 'static,
{
    EncodedPair {
        capability: Rc::new(move |select| select(a.clone(), b.clone())),
    }
}

fn select_first<A, B>(a: A, _: B) -> Component<A, B> {
    Component::First(a)
}

fn select_second<A, B>(_: A, b: B) -> Component<A, B> {
    Component::Second(b)
}

/// `first(make_pair(a, b)) == a`
pub fn first<A, B>(pair: &EncodedPair<A, B>) -> A {
    match pair.apply(select_first) {
        Component::First(a) => a,
        Component::Second(_) => unreachable!("select_first picks the first component"),
    }
}

/// `second(make_pair(a, b)) == b`
pub fn second<A, B>(pair: &EncodedPair<A, B>) -> B {
    match pair.apply(select_second) {
        Component::Second(b) => b,
        Component::First(_) => unreachable!("select_second picks the second component"),
    }
}

/// Either the empty marker or a pair whose second component is the rest of the list.
pub struct EncodedList<T>(Option<EncodedPair<T, EncodedList<T>>>);

impl<T> Clone for EncodedList<T> {
    fn clone(&self) -> Self {
        EncodedList(self.0.clone())
    }
}

impl<T> EncodedList<T> {
    /// The empty marker.
    pub fn empty() -> Self {
        EncodedList(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl<T> Default for EncodedList<T> {
    fn default() -> Self {
        Self::empty()
    }
}

// Each pair's closure owns the rest of the list. Holding a clone of the tail
// while the pair is freed keeps that from recursing down the whole list.
impl<T> Drop for EncodedList<T> {
    fn drop(&mut self) {
        let mut next = self.0.take();
        while let Some(pair) = next {
            if Rc::strong_count(&pair.capability) > 1 {
                break;
            }
            next = match pair.apply(select_second) {
                Component::Second(mut tail) => tail.0.take(),
                Component::First(_) => unreachable!("select_second picks the second component"),
            };
        }
    }
}

impl<T> EncodedList<T>
where
    T: Clone + 'static,
{
    /// Prepends `head` to `tail`.
    pub fn pair(head: T, tail: EncodedList<T>) -> Self {
        EncodedList(Some(make_pair(head, tail)))
    }

    pub fn first(&self) -> Result<T, AccessError> {
        self.0
            .as_ref()
            .map(first)
            .ok_or(AccessError::EmptyList { accessor: "first" })
    }

    pub fn second(&self) -> Result<EncodedList<T>, AccessError> {
        self.0
            .as_ref()
            .map(second)
            .ok_or(AccessError::EmptyList { accessor: "second" })
    }
}

impl<T> ConsList for EncodedList<T>
where
    T: Clone + 'static,
{
    type Item = T;

    fn split(&self) -> Option<(T, Self)> {
        let pair = self.0.as_ref()?;
        trace!("splitting encoded pair");
        Some((first(pair), second(pair)))
    }
}

impl<T> FromIterator<T> for EncodedList<T>
where
    T: Clone + 'static,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items
            .into_iter()
            .rev()
            .fold(EncodedList::empty(), |tail, head| EncodedList::pair(head, tail))
    }
}

impl<T> fmt::Debug for EncodedList<T>
where
    T: Clone + fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items()).finish()
    }
}

//! Provides the `ElementSet` structure and the parser/validator that builds
//! one from a set (or universe) line.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;

use crate::error::ErrorKind;
use crate::input::body_of;
use crate::keywords::is_reserved;

type NameSet = IndexSet<String, FxBuildHasher>;

/// An `ElementSet` is an ordered collection of distinct element names.
/// * Elements keep the order in which they were first inserted; nothing is
///   ever sorted.
/// * Inserting an element that is already present leaves the set unchanged.
/// * Every operation that removes elements goes through `retain`, which keeps
///   the order of the survivors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSet {
    elements: NameSet,
}

impl ElementSet {
    /// Parses and validates the set literal `text` (a `S` or `U` line).
    ///
    /// `universe` is `None` when `text` is the universe declaration itself;
    /// otherwise every element must be a member of it. Element names longer
    /// than `max_len` are rejected.
    pub fn parse(
        text: &str,
        universe: Option<&ElementSet>,
        max_len: usize,
    ) -> Result<ElementSet, ErrorKind> {
        if text.len() == 1 {
            return Ok(ElementSet::default());
        }
        let body = body_of(text).ok_or(ErrorKind::SetSyntax)?;
        if !body.bytes().all(|b| b == b' ' || b.is_ascii_alphabetic()) {
            return Err(ErrorKind::SetSyntax);
        }

        let names: Vec<&str> = body.split(' ').collect();
        if names.iter().any(|name| name.len() > max_len) {
            return Err(ErrorKind::SetSyntax);
        }
        let mut set = ElementSet::default();
        for name in &names {
            if !set.insert(name) {
                return Err(ErrorKind::DuplicateElementOrPair);
            }
        }
        if names.iter().any(|name| is_reserved(name)) {
            return Err(ErrorKind::SetSyntax);
        }
        if let Some(universe) = universe {
            if !set.is_subset_of(universe) {
                return Err(ErrorKind::ElementNotInUniverse);
            }
        }
        Ok(set)
    }

    /// Adds `element` at the end. Returns `false` (and changes nothing) if it
    /// was already present.
    pub fn insert(&mut self, element: &str) -> bool {
        if self.elements.contains(element) {
            return false;
        }
        self.elements.insert(element.to_owned())
    }

    /// Is `element` a member?
    #[must_use]
    pub fn contains(&self, element: &str) -> bool {
        self.elements.contains(element)
    }

    /// Number of elements
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True iff there are no elements
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The elements, in order
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.elements.iter().map(String::as_str)
    }

    /// Is every element of `self` also in `other`?
    #[must_use]
    pub fn is_subset_of(&self, other: &ElementSet) -> bool {
        self.iter().all(|element| other.contains(element))
    }

    /// `IndexSet`'s `.retain` is `O(n)` and keeps the order of what remains,
    /// unlike `.remove`, so it's the only removal we expose.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.elements.retain(|element| keep(element.as_str()));
    }
}

impl<'a> FromIterator<&'a str> for ElementSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = ElementSet::default();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

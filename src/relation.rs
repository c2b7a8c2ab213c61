//! Provides the `Relation` structure, an ordered collection of distinct
//! `Pair`s, and the parser/validator for relation lines such as
//! `R (a b) (b c)`.
use fxhash::FxBuildHasher;
use indexmap::IndexSet;

use crate::error::ErrorKind;
use crate::input::body_of;
use crate::keywords::is_reserved;
use crate::set::ElementSet;

/// One member of a relation: the ordered pair `(first, second)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pair {
    /// Left component
    pub first: String,
    /// Right component
    pub second: String,
}

impl Pair {
    /// Builds the pair `(first, second)`
    #[must_use]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Pair {
        Pair { first: first.into(), second: second.into() }
    }

    /// Is this pair of the form `(x, x)`?
    #[must_use]
    pub fn is_loop(&self) -> bool {
        self.first == self.second
    }
}

/// A binary relation: distinct pairs, in the order they were written
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relation {
    pairs: IndexSet<Pair, FxBuildHasher>,
}

impl Relation {
    /// Parses and validates the relation literal `text`. Both components of
    /// every pair must be members of `universe`, and no longer than `max_len`.
    pub fn parse(text: &str, universe: &ElementSet, max_len: usize) -> Result<Relation, ErrorKind> {
        use ErrorKind::RelationSyntax;

        if text.len() == 1 {
            return Ok(Relation::default());
        }
        let body = body_of(text).ok_or(RelationSyntax)?;
        if !delimiters_are_well_placed(body.as_bytes()) {
            return Err(RelationSyntax);
        }

        // Tokens alternate "(x" and "y)", so pairs are exactly two tokens.
        let tokens: Vec<&str> = body.split(' ').collect();
        if tokens.len() % 2 != 0 {
            return Err(RelationSyntax);
        }
        let mut pairs = Vec::with_capacity(tokens.len() / 2);
        for two in tokens.chunks(2) {
            let first = two[0].strip_prefix('(').ok_or(RelationSyntax)?;
            let second = two[1].strip_suffix(')').ok_or(RelationSyntax)?;
            for name in [first, second] {
                if name.is_empty()
                    || name.len() > max_len
                    || !name.bytes().all(|b| b.is_ascii_alphabetic())
                {
                    return Err(RelationSyntax);
                }
            }
            pairs.push(Pair::new(first, second));
        }

        let mut relation = Relation::default();
        for pair in pairs {
            if !relation.pairs.insert(pair) {
                return Err(ErrorKind::DuplicateElementOrPair);
            }
        }
        if relation.components().any(is_reserved) {
            return Err(RelationSyntax);
        }
        if !relation.components().all(|name| universe.contains(name)) {
            return Err(ErrorKind::ElementNotInUniverse);
        }
        Ok(relation)
    }

    /// Number of pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True iff there are no pairs
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The pairs, in order
    pub fn iter(&self) -> impl Iterator<Item = &Pair> + '_ {
        self.pairs.iter()
    }

    /// Is `(first, second)` one of the pairs?
    #[must_use]
    pub fn contains(&self, first: &str, second: &str) -> bool {
        self.iter().any(|p| p.first == first && p.second == second)
    }

    /// Every component of every pair, left before right
    fn components(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().flat_map(|p| [p.first.as_str(), p.second.as_str()])
    }
}

impl FromIterator<Pair> for Relation {
    fn from_iter<I: IntoIterator<Item = Pair>>(iter: I) -> Self {
        Relation { pairs: iter.into_iter().collect() }
    }
}

/// Checks the characters of a relation body: only letters, spaces and
/// parentheses; `(` never followed by a space; `)` never preceded by a space
/// and followed by either a space or the end.
fn delimiters_are_well_placed(body: &[u8]) -> bool {
    for (i, &b) in body.iter().enumerate() {
        let next = body.get(i + 1).copied();
        let ok = match b {
            b'(' => next != Some(b' '),
            b')' => (i == 0 || body[i - 1] != b' ') && matches!(next, None | Some(b' ')),
            b' ' => true,
            _ => b.is_ascii_alphabetic(),
        };
        if !ok {
            return false;
        }
    }
    true
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::limits::MAX_ELEMENT_LEN;

    fn parse(text: &str) -> Result<Relation, ErrorKind> {
        let universe = ElementSet::parse("U a b c", None, MAX_ELEMENT_LEN).unwrap();
        Relation::parse(text, &universe, MAX_ELEMENT_LEN)
    }
    fn pairs(relation: &Relation) -> Vec<(&str, &str)> {
        relation.iter().map(|p| (p.first.as_str(), p.second.as_str())).collect()
    }

    #[test]
    fn a_lone_marker_is_the_empty_relation() {
        assert!(parse("R").unwrap().is_empty());
    }

    #[test]
    fn pairs_keep_their_written_order() {
        let relation = parse("R (b a) (a a) (c b)").unwrap();
        assert_eq!(pairs(&relation), [("b", "a"), ("a", "a"), ("c", "b")]);
        assert!(relation.contains("a", "a"));
        assert!(!relation.contains("a", "b"));
    }

    #[test]
    fn malformed_pairs_are_syntax_errors() {
        for text in [
            "R (a b)(b a)",
            "R ( a b)",
            "R (a b )",
            "R (a)",
            "R (a b c)",
            "R (a b) c",
            "R a b",
            "R (a b",
            "R ((a b))",
            "R (a b)x",
            "R (a1 b)",
            "R (a  b)",
            "R (a b) ",
            "R(a b)",
        ] {
            assert_eq!(parse(text), Err(ErrorKind::RelationSyntax), "for {text:?}");
        }
    }

    #[test]
    fn repeated_pairs_are_rejected_but_mirrored_pairs_are_not() {
        assert_eq!(parse("R (a b) (c c) (a b)"), Err(ErrorKind::DuplicateElementOrPair));
        assert!(parse("R (a b) (b a)").is_ok());
    }

    #[test]
    fn components_must_be_universe_members_and_not_reserved() {
        assert_eq!(parse("R (a d)"), Err(ErrorKind::ElementNotInUniverse));
        assert_eq!(parse("R (a card)"), Err(ErrorKind::RelationSyntax));
    }

    #[test]
    fn overlong_components_are_rejected() {
        let universe = ElementSet::parse("U ab", None, 2).unwrap();
        assert!(Relation::parse("R (ab ab)", &universe, 2).is_ok());
        assert_eq!(Relation::parse("R (abc ab)", &universe, 2), Err(ErrorKind::RelationSyntax));
    }
}

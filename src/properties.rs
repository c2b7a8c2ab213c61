//! Properties of relations, and the projections `domain`/`codomain`.
//!
//! The three classification predicates (`injective`, `surjective`,
//! `bijective`) take the relation plus a candidate domain set `a` and
//! codomain set `b`.

use crate::relation::Relation;
use crate::set::ElementSet;

/// Is there a loop `(x, x)` for every element `x` of the universe?
///
/// Note this counts loops against the size of the whole universe, not of the
/// relation's own domain: a relation over part of the universe is never
/// reflexive.
#[must_use]
pub fn reflexive(relation: &Relation, universe: &ElementSet) -> bool {
    relation.iter().filter(|p| p.is_loop()).count() == universe.len()
}

/// Does `(b, a)` belong to the relation whenever `(a, b)` does?
#[must_use]
pub fn symmetric(relation: &Relation) -> bool {
    relation.iter().all(|p| relation.contains(&p.second, &p.first))
}

/// Is there no pair `(a, b)`, with `a != b`, whose mirror `(b, a)` is also
/// present?
#[must_use]
pub fn antisymmetric(relation: &Relation) -> bool {
    !relation.iter().any(|p| !p.is_loop() && relation.contains(&p.second, &p.first))
}

/// Does `(a, c)` belong to the relation whenever `(a, b)` and `(b, c)` do?
#[must_use]
pub fn transitive(relation: &Relation) -> bool {
    for p in relation.iter() {
        for q in relation.iter().filter(|q| q.first == p.second) {
            if !relation.contains(&p.first, &q.second) {
                return false;
            }
        }
    }
    true
}

/// Is there no left component paired with two different right components?
#[must_use]
pub fn function(relation: &Relation) -> bool {
    let pairs: Vec<_> = relation.iter().collect();
    for (i, p) in pairs.iter().enumerate() {
        if pairs[i + 1..].iter().any(|q| q.first == p.first && q.second != p.second) {
            return false;
        }
    }
    true
}

/// The left components, each once, in order of first appearance
#[must_use]
pub fn domain(relation: &Relation) -> ElementSet {
    relation.iter().map(|p| p.first.as_str()).collect()
}

/// The right components, each once, in order of first appearance
#[must_use]
pub fn codomain(relation: &Relation) -> ElementSet {
    relation.iter().map(|p| p.second.as_str()).collect()
}

/// A relation with pairs can't map between sets when either set is empty.
fn has_pairs_but_an_empty_side(relation: &Relation, a: &ElementSet, b: &ElementSet) -> bool {
    !relation.is_empty() && (a.is_empty() || b.is_empty())
}

/// Does every pair take its left component from `a` and its right from `b`?
fn maps_into(relation: &Relation, a: &ElementSet, b: &ElementSet) -> bool {
    relation.iter().all(|p| a.contains(&p.first) && b.contains(&p.second))
}

/// Is the relation a single-valued map from `a` into `b`?
#[must_use]
pub fn injective(relation: &Relation, a: &ElementSet, b: &ElementSet) -> bool {
    if has_pairs_but_an_empty_side(relation, a, b) {
        return false;
    }
    maps_into(relation, a, b) && function(relation)
}

/// Does the relation map `a` into `b`, reaching every element of `b`?
#[must_use]
pub fn surjective(relation: &Relation, a: &ElementSet, b: &ElementSet) -> bool {
    if has_pairs_but_an_empty_side(relation, a, b) {
        return false;
    }
    maps_into(relation, a, b) && b.is_subset_of(&codomain(relation))
}

/// Does the relation pair `a` and `b` up one-to-one?
#[must_use]
pub fn bijective(relation: &Relation, a: &ElementSet, b: &ElementSet) -> bool {
    if relation.len() != a.len() || relation.len() != b.len() {
        return false;
    }
    // With as many pairs as elements on each side, distinct components on
    // each side are the same as `domain` and `codomain` being full-sized.
    maps_into(relation, a, b)
        && domain(relation).len() == relation.len()
        && codomain(relation).len() == relation.len()
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use crate::relation::Pair;
    use itertools::Itertools;

    fn rel(text: &str) -> Relation {
        text.split_whitespace()
            .map(|pair| {
                let (first, second) = pair.split_once('-').unwrap();
                Pair::new(first, second)
            })
            .collect()
    }
    fn set(text: &str) -> ElementSet {
        text.split_whitespace().collect()
    }

    #[test]
    fn reflexive_needs_a_loop_on_every_universe_element() {
        let u = set("a b");
        assert!(reflexive(&rel("a-a b-b a-b"), &u));
        assert!(!reflexive(&rel("a-a"), &u));
        assert!(!reflexive(&rel("a-a"), &set("a b c")));
        assert!(reflexive(&rel(""), &set("")));
    }

    #[test]
    fn symmetric_needs_every_mirror() {
        assert!(!symmetric(&rel("a-b")));
        assert!(symmetric(&rel("a-b b-a")));
        assert!(symmetric(&rel("a-a")));
        assert!(symmetric(&rel("")));
    }

    #[test]
    fn antisymmetric_ignores_loops() {
        assert!(antisymmetric(&rel("a-a b-b a-b")));
        assert!(!antisymmetric(&rel("a-b c-c b-a")));
        assert!(antisymmetric(&rel("")));
    }

    #[test]
    fn transitive_needs_every_shortcut() {
        assert!(transitive(&rel("a-b b-c a-c")));
        assert!(!transitive(&rel("a-b b-c")));
        assert!(!transitive(&rel("a-b b-a")));
        assert!(transitive(&rel("a-b b-a a-a b-b")));
        assert!(transitive(&rel("a-a")));
        assert!(transitive(&rel("")));
    }

    #[test]
    fn function_means_single_valued() {
        assert!(function(&rel("a-b b-b c-a")));
        assert!(!function(&rel("a-b c-c a-c")));
        assert!(function(&rel("")));
    }

    #[test]
    fn domain_and_codomain_keep_first_seen_order() {
        let r = rel("b-x a-y b-z c-x");
        assert_eq!(domain(&r).iter().join(" "), "b a c");
        assert_eq!(codomain(&r).iter().join(" "), "x y z");
        assert!(domain(&rel("")).is_empty());
    }

    #[test]
    fn injective_examples() {
        let a = set("a b");
        let b = set("x y");
        assert!(injective(&rel("a-x b-y"), &a, &b));
        assert!(injective(&rel("a-x b-x"), &a, &b));
        assert!(!injective(&rel("a-x a-y"), &a, &b));
        assert!(!injective(&rel("a-x c-y"), &a, &b));
        assert!(!injective(&rel("a-z"), &a, &b));
        assert!(!injective(&rel("a-x"), &set(""), &b));
        assert!(injective(&rel(""), &set(""), &set("")));
    }

    #[test]
    fn surjective_examples() {
        let a = set("a b");
        let b = set("x y");
        assert!(surjective(&rel("a-x b-y"), &a, &b));
        assert!(!surjective(&rel("a-x b-x"), &a, &b));
        assert!(!surjective(&rel("a-x"), &a, &set("")));
        assert!(!surjective(&rel(""), &a, &b));
        assert!(surjective(&rel(""), &set(""), &set("")));
    }

    #[test]
    fn bijective_examples() {
        let a = set("a b");
        let b = set("x y");
        assert!(bijective(&rel("a-y b-x"), &a, &b));
        assert!(!bijective(&rel("a-x b-x"), &a, &b));
        assert!(!bijective(&rel("a-x a-y"), &a, &b));
        assert!(!bijective(&rel("a-x"), &a, &b));
        assert!(!bijective(&rel("a-x c-y"), &a, &b));
        assert!(bijective(&rel(""), &set(""), &set("")));
    }
}

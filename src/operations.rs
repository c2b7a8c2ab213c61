//! The set algebra. Results keep the element order of their first operand
//! (for `complement`, the universe's order).

use crate::set::ElementSet;

/// Is `set` empty?
#[must_use]
pub fn empty(set: &ElementSet) -> bool {
    set.is_empty()
}

/// Number of elements in `set`
#[must_use]
pub fn card(set: &ElementSet) -> usize {
    set.len()
}

/// Elements of `universe` that are not in `set`
#[must_use]
pub fn complement(universe: &ElementSet, set: &ElementSet) -> ElementSet {
    minus(universe, set)
}

/// `a`'s elements followed by those of `b`'s that `a` lacks
#[must_use]
pub fn union(a: &ElementSet, b: &ElementSet) -> ElementSet {
    let mut set = a.clone();
    for element in b.iter() {
        set.insert(element);
    }
    set
}

/// Elements of `a` that are also in `b`
#[must_use]
pub fn intersect(a: &ElementSet, b: &ElementSet) -> ElementSet {
    let mut set = a.clone();
    set.retain(|element| b.contains(element));
    set
}

/// Elements of `a` that are not in `b`
#[must_use]
pub fn minus(a: &ElementSet, b: &ElementSet) -> ElementSet {
    let mut set = a.clone();
    set.retain(|element| !b.contains(element));
    set
}

/// Is every element of `a` in `b`? When `b` is empty, only an empty `a`
/// qualifies.
#[must_use]
pub fn subseteq(a: &ElementSet, b: &ElementSet) -> bool {
    if b.is_empty() {
        return a.is_empty();
    }
    a.is_subset_of(b)
}

/// Is `a` a proper subset of `b`?
#[must_use]
pub fn subset(a: &ElementSet, b: &ElementSet) -> bool {
    if a.len() == b.len() || b.is_empty() {
        return false;
    }
    a.is_subset_of(b)
}

/// Do `a` and `b` have the same elements, in whatever order?
#[must_use]
pub fn equals(a: &ElementSet, b: &ElementSet) -> bool {
    a.len() == b.len() && a.is_subset_of(b)
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn set(text: &str) -> ElementSet {
        text.split_whitespace().collect()
    }
    fn names(set: &ElementSet) -> String {
        set.iter().join(" ")
    }

    /// Every subset of `a b c d`, each in two different orders
    fn samples() -> Vec<ElementSet> {
        let universe = ["a", "b", "c", "d"];
        let mut sets: Vec<ElementSet> = Vec::new();
        for size in 0..=universe.len() {
            for chosen in universe.iter().copied().combinations(size) {
                sets.push(chosen.iter().copied().collect());
                sets.push(chosen.iter().rev().copied().collect());
            }
        }
        sets
    }

    #[test]
    fn results_for_each_operation() {
        let u = set("a b c d");
        let x = set("c a b");
        let y = set("d b");
        assert_eq!(names(&complement(&u, &x)), "d");
        assert_eq!(names(&complement(&u, &set(""))), "a b c d");
        assert_eq!(names(&union(&x, &y)), "c a b d");
        assert_eq!(names(&union(&set(""), &y)), "d b");
        assert_eq!(names(&intersect(&x, &y)), "b");
        assert_eq!(names(&intersect(&y, &u)), "d b");
        assert_eq!(names(&minus(&x, &y)), "c a");
        assert_eq!(card(&x), 3);
        assert!(empty(&set("")));
        assert!(!empty(&y));
    }

    #[test]
    fn subset_predicates_on_edge_cases() {
        let empty_set = set("");
        let ab = set("a b");
        assert!(subseteq(&empty_set, &empty_set));
        assert!(!subseteq(&ab, &empty_set));
        assert!(subseteq(&empty_set, &ab));
        assert!(subseteq(&ab, &set("b a")));
        assert!(!subset(&ab, &set("b a")));
        assert!(!subset(&empty_set, &empty_set));
        assert!(subset(&empty_set, &ab));
        assert!(subset(&set("b"), &ab));
        assert!(!subset(&set("c"), &ab));
        assert!(equals(&ab, &set("b a")));
        assert!(!equals(&ab, &set("a c")));
    }

    #[test]
    fn card_is_zero_exactly_when_empty() {
        for s in samples() {
            assert_eq!(card(&s) == 0, empty(&s));
        }
    }

    #[test]
    fn equals_is_mutual_inclusion_and_subset_implies_smaller_subseteq() {
        let samples = samples();
        for (a, b) in samples.iter().cartesian_product(samples.iter()) {
            assert_eq!(equals(a, b), subseteq(a, b) && subseteq(b, a));
            if subset(a, b) {
                assert!(subseteq(a, b) && card(a) < card(b));
            }
        }
    }

    #[test]
    fn double_complement_gives_back_the_set() {
        let u = set("a b c d");
        for s in samples() {
            assert!(equals(&complement(&u, &complement(&u, &s)), &s));
        }
    }

    #[test]
    fn union_and_intersect_commute_and_minus_self_is_empty() {
        let samples = samples();
        for (a, b) in samples.iter().cartesian_product(samples.iter()) {
            assert!(equals(&union(a, b), &union(b, a)));
            assert!(equals(&intersect(a, b), &intersect(b, a)));
            assert!(empty(&minus(a, a)));
        }
    }
}

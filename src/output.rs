//! How results look on the wire: a set prints as `S` followed by its
//! elements, each after a single space; a predicate prints `true` or
//! `false`; a count prints in decimal.
use std::fmt;

use crate::keywords::{FALSE, TRUE};
use crate::set::ElementSet;

/// The value a command produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A computed set
    Set(ElementSet),
    /// The answer to a predicate
    Bool(bool),
    /// A cardinality
    Count(usize),
}

impl fmt::Display for ElementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("S")?;
        for element in self.iter() {
            write!(f, " {element}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Set(set) => fmt::Display::fmt(set, f),
            Outcome::Bool(holds) => f.write_str(if *holds { TRUE } else { FALSE }),
            Outcome::Count(n) => write!(f, "{n}"),
        }
    }
}

//! Houses the `calculate` function, which carries out one parsed command.
//!
//! Operands name lines, never values: each one is re-read from its line and
//! fully re-validated every time a command uses it, and dropped when the
//! command is done.
use tracing::{debug, trace};

use crate::command::{Command, OpName};
use crate::error::ErrorKind;
use crate::input::{Line, LineKind};
use crate::limits::Limits;
use crate::operations;
use crate::output::Outcome;
use crate::properties;
use crate::relation::Relation;
use crate::set::ElementSet;

/// What a command may look at: the lines before it, and the universe.
pub struct Operands<'a> {
    earlier: &'a [Line],
    universe: &'a ElementSet,
    limits: Limits,
}

impl<'a> Operands<'a> {
    /// `earlier` must be the lines preceding the command; only they can be
    /// operands.
    #[must_use]
    pub fn new(earlier: &'a [Line], universe: &'a ElementSet, limits: Limits) -> Self {
        Operands { earlier, universe, limits }
    }

    fn line(&self, index: usize) -> Result<&'a Line, ErrorKind> {
        self.earlier.get(index).ok_or(ErrorKind::CommandSyntax)
    }

    /// Re-parses the set (or universe) on line `index + 1`
    pub fn set(&self, index: usize) -> Result<ElementSet, ErrorKind> {
        let line = self.line(index)?;
        trace!(line = line.number, "resolving set operand");
        match line.kind {
            LineKind::Universe => ElementSet::parse(&line.text, None, self.limits.max_element_len),
            LineKind::Set => {
                ElementSet::parse(&line.text, Some(self.universe), self.limits.max_element_len)
            }
            _ => Err(ErrorKind::SetSyntax),
        }
    }

    /// Re-parses the relation on line `index + 1`
    pub fn relation(&self, index: usize) -> Result<Relation, ErrorKind> {
        let line = self.line(index)?;
        trace!(line = line.number, "resolving relation operand");
        match line.kind {
            LineKind::Relation => {
                Relation::parse(&line.text, self.universe, self.limits.max_element_len)
            }
            _ => Err(ErrorKind::RelationSyntax),
        }
    }
}

/// Carries out `command` and returns its result. The operand count is
/// checked against the operator before any operand is resolved.
pub fn calculate(command: &Command, operands: &Operands) -> Result<Outcome, ErrorKind> {
    debug!(
        op = command.op.word(),
        arity = command.op.arity(),
        operands = ?command.operands,
        "calculating"
    );
    let universe = operands.universe;
    let outcome = match command.op {
        OpName::Empty => {
            let [s] = command.operands()?;
            Outcome::Bool(operations::empty(&operands.set(s)?))
        }
        OpName::Card => {
            let [s] = command.operands()?;
            Outcome::Count(operations::card(&operands.set(s)?))
        }
        OpName::Complement => {
            let [s] = command.operands()?;
            Outcome::Set(operations::complement(universe, &operands.set(s)?))
        }
        OpName::Union | OpName::Intersect | OpName::Minus => {
            let [a, b] = command.operands()?;
            let (a, b) = (operands.set(a)?, operands.set(b)?);
            Outcome::Set(match command.op {
                OpName::Union => operations::union(&a, &b),
                OpName::Intersect => operations::intersect(&a, &b),
                _ => operations::minus(&a, &b),
            })
        }
        OpName::Subseteq | OpName::Subset | OpName::Equals => {
            let [a, b] = command.operands()?;
            let (a, b) = (operands.set(a)?, operands.set(b)?);
            Outcome::Bool(match command.op {
                OpName::Subseteq => operations::subseteq(&a, &b),
                OpName::Subset => operations::subset(&a, &b),
                _ => operations::equals(&a, &b),
            })
        }
        OpName::Reflexive => {
            let [r] = command.operands()?;
            Outcome::Bool(properties::reflexive(&operands.relation(r)?, universe))
        }
        OpName::Symmetric => {
            let [r] = command.operands()?;
            Outcome::Bool(properties::symmetric(&operands.relation(r)?))
        }
        OpName::Antisymmetric => {
            let [r] = command.operands()?;
            Outcome::Bool(properties::antisymmetric(&operands.relation(r)?))
        }
        OpName::Transitive => {
            let [r] = command.operands()?;
            Outcome::Bool(properties::transitive(&operands.relation(r)?))
        }
        OpName::Function => {
            let [r] = command.operands()?;
            Outcome::Bool(properties::function(&operands.relation(r)?))
        }
        OpName::Domain => {
            let [r] = command.operands()?;
            Outcome::Set(properties::domain(&operands.relation(r)?))
        }
        OpName::Codomain => {
            let [r] = command.operands()?;
            Outcome::Set(properties::codomain(&operands.relation(r)?))
        }
        OpName::Injective | OpName::Surjective | OpName::Bijective => {
            let [r, a, b] = command.operands()?;
            let (r, a, b) = (operands.relation(r)?, operands.set(a)?, operands.set(b)?);
            Outcome::Bool(match command.op {
                OpName::Injective => properties::injective(&r, &a, &b),
                OpName::Surjective => properties::surjective(&r, &a, &b),
                _ => properties::bijective(&r, &a, &b),
            })
        }
    };
    Ok(outcome)
}

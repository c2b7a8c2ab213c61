//! The closed set of operator names, and the parser that turns a command
//! line like `C union 2 3` into a `Command`.
use std::num::NonZeroUsize;

use crate::error::ErrorKind;
use crate::input::body_of;

/// No command line may name more operands than this, whatever its operator.
pub const MAX_OPERANDS: usize = 3;

/// Every operation a command can request
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum OpName {
    /// Is the set empty?
    Empty,
    /// Number of elements of the set
    Card,
    /// The universe's elements that are not in the set
    Complement,
    /// Elements in either set
    Union,
    /// Elements in both sets
    Intersect,
    /// Elements of the first set that are not in the second
    Minus,
    /// Is the first set a subset of (or equal to) the second?
    Subseteq,
    /// Is the first set a proper subset of the second?
    Subset,
    /// Do the sets have the same elements?
    Equals,
    /// Does the relation have a loop on every universe element?
    Reflexive,
    /// Is every pair's mirror image also a pair?
    Symmetric,
    /// Is no pair's mirror image (other than a loop's) also a pair?
    Antisymmetric,
    /// Does the relation contain `(a, c)` whenever it has `(a, b)` and `(b, c)`?
    Transitive,
    /// Does every left component have just one right component?
    Function,
    /// The left components
    Domain,
    /// The right components
    Codomain,
    /// Is the relation an injection between the two sets?
    Injective,
    /// Is the relation a surjection between the two sets?
    Surjective,
    /// Is the relation a bijection between the two sets?
    Bijective,
}

impl OpName {
    /// All operators, set operations first
    pub const ALL: [OpName; 19] = [
        OpName::Empty,
        OpName::Card,
        OpName::Complement,
        OpName::Union,
        OpName::Intersect,
        OpName::Minus,
        OpName::Subseteq,
        OpName::Subset,
        OpName::Equals,
        OpName::Reflexive,
        OpName::Symmetric,
        OpName::Antisymmetric,
        OpName::Transitive,
        OpName::Function,
        OpName::Domain,
        OpName::Codomain,
        OpName::Injective,
        OpName::Surjective,
        OpName::Bijective,
    ];

    /// The word that names the operator on a command line
    #[must_use]
    pub fn word(self) -> &'static str {
        match self {
            OpName::Empty => "empty",
            OpName::Card => "card",
            OpName::Complement => "complement",
            OpName::Union => "union",
            OpName::Intersect => "intersect",
            OpName::Minus => "minus",
            OpName::Subseteq => "subseteq",
            OpName::Subset => "subset",
            OpName::Equals => "equals",
            OpName::Reflexive => "reflexive",
            OpName::Symmetric => "symmetric",
            OpName::Antisymmetric => "antisymmetric",
            OpName::Transitive => "transitive",
            OpName::Function => "function",
            OpName::Domain => "domain",
            OpName::Codomain => "codomain",
            OpName::Injective => "injective",
            OpName::Surjective => "surjective",
            OpName::Bijective => "bijective",
        }
    }

    /// The operator named `word`, if there is one
    #[must_use]
    pub fn from_word(word: &str) -> Option<OpName> {
        OpName::ALL.into_iter().find(|op| op.word() == word)
    }

    /// How many operands the operator takes
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            OpName::Empty
            | OpName::Card
            | OpName::Complement
            | OpName::Reflexive
            | OpName::Symmetric
            | OpName::Antisymmetric
            | OpName::Transitive
            | OpName::Function
            | OpName::Domain
            | OpName::Codomain => 1,
            OpName::Union
            | OpName::Intersect
            | OpName::Minus
            | OpName::Subseteq
            | OpName::Subset
            | OpName::Equals => 2,
            OpName::Injective | OpName::Surjective | OpName::Bijective => 3,
        }
    }
}

/// A parsed command line: what to do, and to which lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// The requested operation
    pub op: OpName,
    /// 0-based indexes of the operand lines, in the order written
    pub operands: Vec<usize>,
}

impl Command {
    /// Parses the command line `text`. The operand count is only checked
    /// against `1..=MAX_OPERANDS` here; [`Command::operands`] checks it
    /// against the operator.
    pub fn parse(text: &str) -> Result<Command, ErrorKind> {
        let body = body_of(text).ok_or(ErrorKind::CommandSyntax)?;
        let mut words = body.split(' ');
        let op = words.next().and_then(OpName::from_word).ok_or(ErrorKind::CommandSyntax)?;

        let mut operands = Vec::new();
        for word in words {
            if operands.len() == MAX_OPERANDS {
                return Err(ErrorKind::TooManyOperands);
            }
            if !word.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ErrorKind::CommandSyntax);
            }
            let line_number: NonZeroUsize = word.parse().map_err(|_| ErrorKind::CommandSyntax)?;
            operands.push(line_number.get() - 1);
        }
        if operands.is_empty() {
            return Err(ErrorKind::TooFewOperands);
        }
        Ok(Command { op, operands })
    }

    /// Returns the operands as an array of exactly `N`, the operator's arity
    pub fn operands<const N: usize>(&self) -> Result<[usize; N], ErrorKind> {
        match self.operands.len() {
            n if n < N => Err(ErrorKind::TooFewOperands),
            n if n > N => Err(ErrorKind::TooManyOperands),
            _ => <[usize; N]>::try_from(self.operands.as_slice())
                .map_err(|_| ErrorKind::CommandSyntax),
        }
    }
}

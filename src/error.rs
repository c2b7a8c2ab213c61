//! The fixed set of ways a run can fail. Every parser and validator returns
//! an `ErrorKind`; the driver pins it to the line that caused it.
use thiserror::Error;

/// One of the twelve termination conditions. Each kind has a fixed message
/// and a distinct process exit status, see [`ErrorKind::code`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Memory could not be allocated
    #[error("unable to allocate memory")]
    OutOfMemory,
    /// The program was not given exactly one input file
    #[error("invalid arguments: expected exactly one input file")]
    BadInvocation,
    /// The input file could not be opened or read
    #[error("unable to open the input file")]
    FileUnavailable,
    /// A second universe was declared
    #[error("a second universe cannot be declared")]
    DuplicateUniverse,
    /// A set repeats an element, or a relation repeats a pair
    #[error("a set or relation cannot contain the same element or pair twice")]
    DuplicateElementOrPair,
    /// A command has fewer operands than its operator needs
    #[error("too few operands")]
    TooFewOperands,
    /// A command has more operands than its operator accepts
    #[error("too many operands")]
    TooManyOperands,
    /// A relation literal is malformed
    #[error("relation syntax error")]
    RelationSyntax,
    /// A set (or universe) literal is malformed
    #[error("set syntax error")]
    SetSyntax,
    /// A command line is malformed
    #[error("command syntax error")]
    CommandSyntax,
    /// An element is not a member of the universe
    #[error("element is not defined in the universe")]
    ElementNotInUniverse,
    /// The input has more lines than allowed
    #[error("the input exceeds the line limit")]
    LineLimitExceeded,
}

impl ErrorKind {
    /// The process exit status for this kind. Codes run from 1 to 12 in
    /// declaration order and never change.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::OutOfMemory => 1,
            ErrorKind::BadInvocation => 2,
            ErrorKind::FileUnavailable => 3,
            ErrorKind::DuplicateUniverse => 4,
            ErrorKind::DuplicateElementOrPair => 5,
            ErrorKind::TooFewOperands => 6,
            ErrorKind::TooManyOperands => 7,
            ErrorKind::RelationSyntax => 8,
            ErrorKind::SetSyntax => 9,
            ErrorKind::CommandSyntax => 10,
            ErrorKind::ElementNotInUniverse => 11,
            ErrorKind::LineLimitExceeded => 12,
        }
    }
}

/// An `ErrorKind` together with the (1-based) number of the input line that
/// triggered it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("line {line}: {kind}")]
pub struct Error {
    /// What went wrong
    pub kind: ErrorKind,
    /// Where it went wrong
    pub line: usize,
}

impl Error {
    pub(crate) fn at(line: usize, kind: ErrorKind) -> Self {
        Error { kind, line }
    }
}

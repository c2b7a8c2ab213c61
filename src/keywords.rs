//! Reserved words. An element named like an operator (or like a boolean
//! result) would make command lines ambiguous, so literals may not use them.
use fxhash::FxHashSet;
use once_cell::sync::Lazy;

use crate::command::OpName;

/// Printed for a predicate that holds
pub const TRUE: &str = "true";
/// Printed for a predicate that fails
pub const FALSE: &str = "false";

static RESERVED: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    let mut words: FxHashSet<&'static str> = OpName::ALL.iter().map(|op| op.word()).collect();
    words.insert(TRUE);
    words.insert(FALSE);
    words
});

/// Is `word` one of the reserved words?
#[must_use]
pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(word)
}

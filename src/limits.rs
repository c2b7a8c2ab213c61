//! Ceilings applied while reading and validating the input.

/// Default ceiling on the number of input lines
pub const MAX_LINES: usize = 1000;
/// Default ceiling on the length of a single element name
pub const MAX_ELEMENT_LEN: usize = 30;

/// The limits a run is checked against. `Limits::default()` gives the
/// standard ceilings; tests use tighter ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// More lines than this is a `LineLimitExceeded` error
    pub max_lines: usize,
    /// Element names longer than this are a syntax error
    pub max_element_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits { max_lines: MAX_LINES, max_element_len: MAX_ELEMENT_LEN }
    }
}
